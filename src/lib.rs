//! Job-board store with an audit trail.
//!
//! `AuditedStore` wraps any `JobDatabase` and appends one line per call to
//! an audit log before delegating:
//!
//! ```text
//! Mon Oct 19 14:56:00 +01:00 2026 [addCompany] @ main
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;

pub use crate::adapters::audit::file_audit_log::FileAuditLog;
pub use crate::adapters::memory::in_memory_database::InMemoryJobDatabase;
pub use crate::core::errors::{JobDbError, Result};
pub use crate::core::models::audit_record::{AuditRecord, DbAction};
pub use crate::core::models::board::{Application, Company, Cv, Job, User};
pub use crate::core::services::audited_store::AuditedStore;
pub use crate::core::traits::audit::{AuditFilter, AuditLog};
pub use crate::core::traits::job_database::JobDatabase;
