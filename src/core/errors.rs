use std::path::PathBuf;

/// All errors raised by jobdb.
///
/// Store errors come from the delegate and travel back to the caller
/// untouched; `AuditError` never leaves the audited store.
#[derive(Debug, thiserror::Error)]
pub enum JobDbError {
    #[error("Company {id} not found")]
    CompanyNotFound { id: u32 },

    #[error("Job {id} not found")]
    JobNotFound { id: u32 },

    #[error("CV {id} not found")]
    CvNotFound { id: u32 },

    #[error("No application from CV {cv_id} to job {job_id}")]
    ApplicationNotFound { job_id: u32, cv_id: u32 },

    #[error(
        "Duplicate {kind} id {id}\n\n  \
         Every {kind} in the board needs a unique id.\n  \
         Pick a different id or remove the existing entry first."
    )]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("CV {cv_id} already applied to job {job_id}")]
    DuplicateApplication { job_id: u32, cv_id: u32 },

    #[error("Store unavailable: {detail}")]
    StoreUnavailable { detail: String },

    #[error("Audit log error: {detail}")]
    AuditError { detail: String },

    #[error(
        "Unknown action '{label}'\n\n  \
         Actions use the operation name as written in the log,\n  \
         e.g. addCompany, getJobs, getCVById."
    )]
    UnknownAction { label: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected TOML tables: [[companies]], [[jobs]], [[users]],\n  \
         [[cvs]] and [[applications]]."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JobDbError>;
