use std::fmt;
use std::path::Path;

use crate::adapters::audit::file_audit_log::FileAuditLog;
use crate::core::errors::{JobDbError, Result};
use crate::core::models::audit_record::{AuditRecord, DbAction};
use crate::core::models::board::{Application, Company, Cv, Job, User};
use crate::core::traits::audit::{AuditFailureHandler, AuditLog};
use crate::core::traits::job_database::JobDatabase;

/// Wraps a `JobDatabase` and records every call in an audit log.
///
/// Each operation appends `<timestamp> [<operation>] @ <thread>` to the
/// log before the delegate runs, then returns the delegate's result as is.
/// A failed audit write goes to the failure handler (stderr unless replaced
/// with `on_audit_failure`) and never reaches the caller.
///
/// Pass `&store` or an `Arc` as the delegate to keep ownership of the
/// underlying store outside the wrapper.
pub struct AuditedStore<D: JobDatabase, L: AuditLog = FileAuditLog> {
    delegate: D,
    log: L,
    on_failure: AuditFailureHandler,
}

impl<D: JobDatabase> AuditedStore<D> {
    /// Wrap `delegate`, appending audit lines to the file at `log_path`.
    pub fn new(delegate: D, log_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_log(delegate, FileAuditLog::open(log_path)?))
    }

    /// Close the audit log and hand the delegate back.
    pub fn shutdown(self) -> D {
        if let Err(e) = self.log.close() {
            (self.on_failure)("Unable to close audit log", &e);
        }
        self.delegate
    }
}

impl<D: JobDatabase, L: AuditLog> AuditedStore<D, L> {
    /// Wrap `delegate` with an already opened audit log.
    pub fn with_log(delegate: D, log: L) -> Self {
        Self {
            delegate,
            log,
            on_failure: Box::new(report_to_stderr),
        }
    }

    /// Replace the handler that receives swallowed audit failures.
    pub fn on_audit_failure(
        mut self,
        handler: impl Fn(&str, &JobDbError) + Send + Sync + 'static,
    ) -> Self {
        self.on_failure = Box::new(handler);
        self
    }

    /// Borrow the wrapped store. Calls made through it are not audited.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Borrow the audit log, e.g. to query what has been recorded so far.
    pub fn log(&self) -> &L {
        &self.log
    }

    fn record(&self, action: DbAction) {
        if let Err(e) = self.log.append(&AuditRecord::now(action)) {
            (self.on_failure)("Unable to write to audit log", &e);
        }
    }
}

impl<D: JobDatabase, L: AuditLog> JobDatabase for AuditedStore<D, L> {
    fn add_company(&self, company: Company) -> Result<()> {
        self.record(DbAction::AddCompany);
        self.delegate.add_company(company)
    }

    fn get_companies(&self) -> Result<Vec<Company>> {
        self.record(DbAction::GetCompanies);
        self.delegate.get_companies()
    }

    fn get_company_by_id(&self, id: u32) -> Result<Company> {
        self.record(DbAction::GetCompanyById);
        self.delegate.get_company_by_id(id)
    }

    fn update_company(&self, id: u32, name: &str) -> Result<()> {
        self.record(DbAction::UpdateCompany);
        self.delegate.update_company(id, name)
    }

    fn get_job_by_id(&self, id: u32) -> Result<Job> {
        self.record(DbAction::GetJobById);
        self.delegate.get_job_by_id(id)
    }

    fn remove_company(&self, company_id: u32) -> Result<()> {
        self.record(DbAction::RemoveCompany);
        self.delegate.remove_company(company_id)
    }

    fn add_job(&self, job: Job) -> Result<()> {
        self.record(DbAction::AddJob);
        self.delegate.add_job(job)
    }

    fn get_jobs(&self) -> Result<Vec<Job>> {
        self.record(DbAction::GetJobs);
        self.delegate.get_jobs()
    }

    fn add_user(&self, user: User) -> Result<()> {
        self.record(DbAction::AddUser);
        self.delegate.add_user(user)
    }

    fn get_users(&self) -> Result<Vec<User>> {
        self.record(DbAction::GetUsers);
        self.delegate.get_users()
    }

    fn add_cv(&self, cv: Cv) -> Result<()> {
        self.record(DbAction::AddCv);
        self.delegate.add_cv(cv)
    }

    fn get_cvs(&self) -> Result<Vec<Cv>> {
        self.record(DbAction::GetCvs);
        self.delegate.get_cvs()
    }

    fn get_cv_by_id(&self, id: u32) -> Result<Cv> {
        self.record(DbAction::GetCvById);
        self.delegate.get_cv_by_id(id)
    }

    fn add_application(&self, application: Application) -> Result<()> {
        self.record(DbAction::AddApplication);
        self.delegate.add_application(application)
    }

    fn remove_application(&self, application: &Application) -> Result<()> {
        self.record(DbAction::RemoveApplication);
        self.delegate.remove_application(application)
    }

    fn get_applications(&self) -> Result<Vec<Application>> {
        self.record(DbAction::GetApplications);
        self.delegate.get_applications()
    }
}

fn report_to_stderr(context: &str, err: &JobDbError) {
    eprintln!("{context}: {err}");
}

impl<D: JobDatabase + fmt::Display, L: AuditLog> fmt::Display for AuditedStore<D, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuditedStore{{{}}}", self.delegate)
    }
}
