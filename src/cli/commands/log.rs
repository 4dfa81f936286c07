use std::path::Path;

use colored::Colorize;

use crate::adapters::audit::file_audit_log::FileAuditLog;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{JobDbError, Result};
use crate::core::models::audit_record::{AuditRecord, DbAction};
use crate::core::traits::audit::AuditFilter;

/// Options of the `jobdb log` command.
#[derive(Debug, Default)]
pub struct LogOptions<'a> {
    pub action: Option<&'a str>,
    pub thread: Option<&'a str>,
    pub last: Option<usize>,
    pub json: bool,
}

/// Execute the `jobdb log` command.
///
/// Reads the audit log back with optional filters for operation,
/// thread and entry count.
pub fn execute(config_path: &str, audit_log: Option<&str>, opts: &LogOptions<'_>) -> Result<()> {
    let config = AppConfig::load(Path::new(config_path))?;
    let log_path = audit_log.unwrap_or(config.audit_log_file());

    let filter = AuditFilter {
        action: opts.action.map(str::parse::<DbAction>).transpose()?,
        thread: opts.thread.map(str::to_string),
    };

    let records = FileAuditLog::read(Path::new(log_path), &filter)?;

    // Apply --last N (take from the end)
    let skip = opts
        .last
        .map(|n| records.len().saturating_sub(n))
        .unwrap_or(0);
    let display = &records[skip..];

    if display.is_empty() {
        if opts.json {
            return Ok(());
        }
        output::header("jobdb log");
        output::warning("No audit entries found");
        if !config.audit_enabled() {
            println!("  Auditing is disabled in {config_path}.");
        } else if opts.action.is_some() || opts.thread.is_some() || opts.last.is_some() {
            println!("  Try removing filters to see all entries.");
        }
        return Ok(());
    }

    if opts.json {
        for record in display {
            let line = serde_json::to_string(record).map_err(|e| JobDbError::AuditError {
                detail: format!("Failed to serialize audit record: {e}"),
            })?;
            println!("{line}");
        }
        return Ok(());
    }

    output::header(&format!("jobdb log ({} entries)", display.len()));
    println!();

    for record in display {
        print_record(record);
    }

    Ok(())
}

/// Print a single audit record as a formatted row.
fn print_record(record: &AuditRecord) {
    let date = record.timestamp.format("%Y-%m-%d %H:%M:%S");
    println!(
        "  {} {} {:<18} {}",
        date.to_string().dimmed(),
        "│".dimmed(),
        format_action(record.action),
        record.thread.as_str().dimmed(),
    );
}

/// Format a DbAction as a colored label.
fn format_action(action: DbAction) -> String {
    let label = action.label();
    match action {
        DbAction::AddCompany
        | DbAction::AddJob
        | DbAction::AddUser
        | DbAction::AddCv
        | DbAction::AddApplication => label.green().to_string(),
        DbAction::UpdateCompany => label.yellow().to_string(),
        DbAction::RemoveCompany | DbAction::RemoveApplication => label.red().to_string(),
        DbAction::GetCompanies
        | DbAction::GetCompanyById
        | DbAction::GetJobById
        | DbAction::GetJobs
        | DbAction::GetUsers
        | DbAction::GetCvs
        | DbAction::GetCvById
        | DbAction::GetApplications => label.blue().to_string(),
    }
}
