use std::path::Path;

use crate::adapters::memory::in_memory_database::InMemoryJobDatabase;
use crate::adapters::parsers::seed_parser::SeedParser;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::audited_store::AuditedStore;
use crate::core::services::board_seeder::{BoardSeeder, SeedSummary};

/// Execute the `jobdb seed` command.
///
/// Loads the seed into a fresh in-memory store. When auditing is enabled
/// every store call goes through `AuditedStore` and lands in the log.
pub fn execute(file: &str, config_path: &str, audit_log: Option<&str>, verbose: bool) -> Result<()> {
    let config = AppConfig::load(Path::new(config_path))?;
    let seed = SeedParser::read(Path::new(file))?;
    let db = InMemoryJobDatabase::new();

    let summary = if config.audit_enabled() {
        let log_path = audit_log.unwrap_or(config.audit_log_file());
        let store = AuditedStore::new(&db, log_path)?.on_audit_failure(output::audit_failure);
        if verbose {
            output::success(&format!(
                "Auditing {store} to {}",
                store.log().path().display()
            ));
        }
        let summary = BoardSeeder { db: &store }.load(seed)?;
        store.shutdown();
        summary
    } else {
        output::warning("Auditing disabled in configuration; calls are not logged");
        BoardSeeder { db: &db }.load(seed)?
    };

    output::header(&format!("Loaded {file}"));
    print_summary(&summary);

    if verbose {
        output::success(&format!("Store: {db}"));
    }

    Ok(())
}

fn print_summary(summary: &SeedSummary) {
    output::success(&format!("{} companies", summary.companies));
    output::success(&format!("{} jobs", summary.jobs));
    output::success(&format!("{} users", summary.users));
    output::success(&format!("{} CVs", summary.cvs));
    output::success(&format!("{} applications", summary.applications));
}
