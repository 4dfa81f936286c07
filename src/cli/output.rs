use colored::Colorize;

use crate::core::errors::JobDbError;

/// Print a success message.
pub fn success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message on stderr.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Report an audit failure on stderr. The store call that triggered it
/// still runs.
pub fn audit_failure(context: &str, err: &JobDbError) {
    eprintln!("  {} {}: {}", "⚠".yellow(), context, err.to_string().dimmed());
}

/// Print a header line.
pub fn header(msg: &str) {
    println!("\n{}", msg.bold());
}
