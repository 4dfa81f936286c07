use std::sync::Arc;

use crate::core::errors::Result;
use crate::core::models::board::{Application, Company, Cv, Job, User};

/// Port for job-board persistence.
///
/// Implementations live in `adapters` (e.g. InMemoryJobDatabase) or wrap
/// another implementation (AuditedStore). Methods take `&self` so a store
/// can be shared between threads; implementations handle their own locking.
pub trait JobDatabase: Send + Sync {
    fn add_company(&self, company: Company) -> Result<()>;

    fn get_companies(&self) -> Result<Vec<Company>>;

    fn get_company_by_id(&self, id: u32) -> Result<Company>;

    /// Rename an existing company.
    fn update_company(&self, id: u32, name: &str) -> Result<()>;

    fn get_job_by_id(&self, id: u32) -> Result<Job>;

    fn remove_company(&self, company_id: u32) -> Result<()>;

    fn add_job(&self, job: Job) -> Result<()>;

    fn get_jobs(&self) -> Result<Vec<Job>>;

    fn add_user(&self, user: User) -> Result<()>;

    fn get_users(&self) -> Result<Vec<User>>;

    fn add_cv(&self, cv: Cv) -> Result<()>;

    fn get_cvs(&self) -> Result<Vec<Cv>>;

    fn get_cv_by_id(&self, id: u32) -> Result<Cv>;

    fn add_application(&self, application: Application) -> Result<()>;

    fn remove_application(&self, application: &Application) -> Result<()>;

    fn get_applications(&self) -> Result<Vec<Application>>;
}

macro_rules! forward_job_database {
    ($($ty:ty),+) => {$(
        impl<T: JobDatabase + ?Sized> JobDatabase for $ty {
            fn add_company(&self, company: Company) -> Result<()> {
                (**self).add_company(company)
            }

            fn get_companies(&self) -> Result<Vec<Company>> {
                (**self).get_companies()
            }

            fn get_company_by_id(&self, id: u32) -> Result<Company> {
                (**self).get_company_by_id(id)
            }

            fn update_company(&self, id: u32, name: &str) -> Result<()> {
                (**self).update_company(id, name)
            }

            fn get_job_by_id(&self, id: u32) -> Result<Job> {
                (**self).get_job_by_id(id)
            }

            fn remove_company(&self, company_id: u32) -> Result<()> {
                (**self).remove_company(company_id)
            }

            fn add_job(&self, job: Job) -> Result<()> {
                (**self).add_job(job)
            }

            fn get_jobs(&self) -> Result<Vec<Job>> {
                (**self).get_jobs()
            }

            fn add_user(&self, user: User) -> Result<()> {
                (**self).add_user(user)
            }

            fn get_users(&self) -> Result<Vec<User>> {
                (**self).get_users()
            }

            fn add_cv(&self, cv: Cv) -> Result<()> {
                (**self).add_cv(cv)
            }

            fn get_cvs(&self) -> Result<Vec<Cv>> {
                (**self).get_cvs()
            }

            fn get_cv_by_id(&self, id: u32) -> Result<Cv> {
                (**self).get_cv_by_id(id)
            }

            fn add_application(&self, application: Application) -> Result<()> {
                (**self).add_application(application)
            }

            fn remove_application(&self, application: &Application) -> Result<()> {
                (**self).remove_application(application)
            }

            fn get_applications(&self) -> Result<Vec<Application>> {
                (**self).get_applications()
            }
        }
    )+};
}

// A borrowed or shared store can be wrapped without giving up ownership.
forward_job_database!(&T, Box<T>, Arc<T>);
