use clap::Parser;

use jobdb::cli::commands::log::LogOptions;
use jobdb::cli::{self, Cli, Commands};

fn main() {
    let args = Cli::parse();
    let audit_log = args.audit_log.as_deref();

    let result = match &args.command {
        Commands::Seed { file } => {
            cli::commands::seed::execute(file, &args.config, audit_log, args.verbose)
        }
        Commands::Log {
            action,
            thread,
            last,
            json,
        } => cli::commands::log::execute(
            &args.config,
            audit_log,
            &LogOptions {
                action: action.as_deref(),
                thread: thread.as_deref(),
                last: *last,
                json: *json,
            },
        ),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
