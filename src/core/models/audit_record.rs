use std::fmt;
use std::str::FromStr;
use std::thread;

use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;

use crate::core::errors::JobDbError;

/// Human-readable timestamp written at the start of every audit line.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %:z %Y";

/// Operations of the job-board store that get recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DbAction {
    AddCompany,
    GetCompanies,
    GetCompanyById,
    UpdateCompany,
    GetJobById,
    RemoveCompany,
    AddJob,
    GetJobs,
    AddUser,
    GetUsers,
    #[serde(rename = "addCV")]
    AddCv,
    #[serde(rename = "getCVs")]
    GetCvs,
    #[serde(rename = "getCVById")]
    GetCvById,
    AddApplication,
    RemoveApplication,
    GetApplications,
}

impl DbAction {
    pub const ALL: [DbAction; 16] = [
        DbAction::AddCompany,
        DbAction::GetCompanies,
        DbAction::GetCompanyById,
        DbAction::UpdateCompany,
        DbAction::GetJobById,
        DbAction::RemoveCompany,
        DbAction::AddJob,
        DbAction::GetJobs,
        DbAction::AddUser,
        DbAction::GetUsers,
        DbAction::AddCv,
        DbAction::GetCvs,
        DbAction::GetCvById,
        DbAction::AddApplication,
        DbAction::RemoveApplication,
        DbAction::GetApplications,
    ];

    /// The literal written between brackets in the log line.
    pub fn label(self) -> &'static str {
        match self {
            DbAction::AddCompany => "addCompany",
            DbAction::GetCompanies => "getCompanies",
            DbAction::GetCompanyById => "getCompanyById",
            DbAction::UpdateCompany => "updateCompany",
            DbAction::GetJobById => "getJobById",
            DbAction::RemoveCompany => "removeCompany",
            DbAction::AddJob => "addJob",
            DbAction::GetJobs => "getJobs",
            DbAction::AddUser => "addUser",
            DbAction::GetUsers => "getUsers",
            DbAction::AddCv => "addCV",
            DbAction::GetCvs => "getCVs",
            DbAction::GetCvById => "getCVById",
            DbAction::AddApplication => "addApplication",
            DbAction::RemoveApplication => "removeApplication",
            DbAction::GetApplications => "getApplications",
        }
    }
}

impl fmt::Display for DbAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DbAction {
    type Err = JobDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DbAction::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| JobDbError::UnknownAction {
                label: s.to_string(),
            })
    }
}

/// One line of the audit log: `<timestamp> [<action>] @ <thread>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub action: DbAction,
    pub thread: String,
}

impl AuditRecord {
    /// Record `action` as issued right now from the current thread.
    pub fn now(action: DbAction) -> Self {
        Self {
            timestamp: DateTime::<FixedOffset>::from(Local::now()),
            action,
            thread: current_thread_name(),
        }
    }

    /// Parse a line previously produced by `Display`.
    pub fn parse(line: &str) -> Option<Self> {
        let (timestamp, rest) = line.split_once(" [")?;
        let (label, thread) = rest.split_once("] @ ")?;

        Some(Self {
            timestamp: DateTime::<FixedOffset>::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?,
            action: label.parse().ok()?,
            thread: thread.to_string(),
        })
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] @ {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.action,
            self.thread
        )
    }
}

/// Name of the calling thread, or its id when it was spawned unnamed.
/// Control characters are escaped so a record always stays on one line.
fn current_thread_name() -> String {
    let current = thread::current();
    match current.name() {
        Some(name) => escape_controls(name),
        None => format!("{:?}", current.id()),
    }
}

fn escape_controls(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
