use crate::core::errors::{JobDbError, Result};
use crate::core::models::audit_record::{AuditRecord, DbAction};

/// Optional filters applied when reading the audit log back.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub action: Option<DbAction>,
    pub thread: Option<String>,
}

impl AuditFilter {
    /// Returns true if `record` passes every filter that is set.
    pub fn matches(&self, record: &AuditRecord) -> bool {
        self.action.is_none_or(|a| a == record.action)
            && self.thread.as_ref().is_none_or(|t| *t == record.thread)
    }
}

/// Port for recording and querying audit records.
pub trait AuditLog: Send + Sync {
    /// Append a record and flush it before returning.
    fn append(&self, record: &AuditRecord) -> Result<()>;

    /// Read back all records, in write order, that pass `filter`.
    fn query(&self, filter: &AuditFilter) -> Result<Vec<AuditRecord>>;
}

/// Receives audit failures the audited store swallows, with a short
/// context such as "Unable to write to audit log".
pub type AuditFailureHandler = Box<dyn Fn(&str, &JobDbError) + Send + Sync>;
