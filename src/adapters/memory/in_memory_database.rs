use std::collections::BTreeMap;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::errors::{JobDbError, Result};
use crate::core::models::board::{Application, Company, Cv, Job, User};
use crate::core::traits::job_database::JobDatabase;

#[derive(Default)]
struct Board {
    companies: BTreeMap<u32, Company>,
    jobs: BTreeMap<u32, Job>,
    users: BTreeMap<u32, User>,
    cvs: BTreeMap<u32, Cv>,
    applications: Vec<Application>,
}

/// Job-board store kept entirely in memory.
///
/// Listings come back in id order; applications in insertion order.
/// No referential checks are made between entities.
#[derive(Default)]
pub struct InMemoryJobDatabase {
    board: RwLock<Board>,
}

impl InMemoryJobDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Board>> {
        self.board.read().map_err(|_| JobDbError::StoreUnavailable {
            detail: "in-memory board lock poisoned".into(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Board>> {
        self.board.write().map_err(|_| JobDbError::StoreUnavailable {
            detail: "in-memory board lock poisoned".into(),
        })
    }
}

/// Insert `value` under `id`, refusing to overwrite an existing entry.
fn insert_unique<T>(
    map: &mut BTreeMap<u32, T>,
    kind: &'static str,
    id: u32,
    value: T,
) -> Result<()> {
    if map.contains_key(&id) {
        return Err(JobDbError::DuplicateId { kind, id });
    }
    map.insert(id, value);
    Ok(())
}

impl JobDatabase for InMemoryJobDatabase {
    fn add_company(&self, company: Company) -> Result<()> {
        let mut board = self.write()?;
        insert_unique(&mut board.companies, "company", company.id, company)
    }

    fn get_companies(&self) -> Result<Vec<Company>> {
        Ok(self.read()?.companies.values().cloned().collect())
    }

    fn get_company_by_id(&self, id: u32) -> Result<Company> {
        self.read()?
            .companies
            .get(&id)
            .cloned()
            .ok_or(JobDbError::CompanyNotFound { id })
    }

    fn update_company(&self, id: u32, name: &str) -> Result<()> {
        let mut board = self.write()?;
        let company = board
            .companies
            .get_mut(&id)
            .ok_or(JobDbError::CompanyNotFound { id })?;
        company.name = name.to_string();
        Ok(())
    }

    fn get_job_by_id(&self, id: u32) -> Result<Job> {
        self.read()?
            .jobs
            .get(&id)
            .cloned()
            .ok_or(JobDbError::JobNotFound { id })
    }

    fn remove_company(&self, company_id: u32) -> Result<()> {
        self.write()?
            .companies
            .remove(&company_id)
            .map(|_| ())
            .ok_or(JobDbError::CompanyNotFound { id: company_id })
    }

    fn add_job(&self, job: Job) -> Result<()> {
        let mut board = self.write()?;
        insert_unique(&mut board.jobs, "job", job.id, job)
    }

    fn get_jobs(&self) -> Result<Vec<Job>> {
        Ok(self.read()?.jobs.values().cloned().collect())
    }

    fn add_user(&self, user: User) -> Result<()> {
        let mut board = self.write()?;
        insert_unique(&mut board.users, "user", user.id, user)
    }

    fn get_users(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    fn add_cv(&self, cv: Cv) -> Result<()> {
        let mut board = self.write()?;
        insert_unique(&mut board.cvs, "CV", cv.id, cv)
    }

    fn get_cvs(&self) -> Result<Vec<Cv>> {
        Ok(self.read()?.cvs.values().cloned().collect())
    }

    fn get_cv_by_id(&self, id: u32) -> Result<Cv> {
        self.read()?
            .cvs
            .get(&id)
            .cloned()
            .ok_or(JobDbError::CvNotFound { id })
    }

    fn add_application(&self, application: Application) -> Result<()> {
        let mut board = self.write()?;
        if board.applications.contains(&application) {
            return Err(JobDbError::DuplicateApplication {
                job_id: application.job_id,
                cv_id: application.cv_id,
            });
        }
        board.applications.push(application);
        Ok(())
    }

    fn remove_application(&self, application: &Application) -> Result<()> {
        let mut board = self.write()?;
        let Some(pos) = board.applications.iter().position(|a| a == application) else {
            return Err(JobDbError::ApplicationNotFound {
                job_id: application.job_id,
                cv_id: application.cv_id,
            });
        };
        board.applications.remove(pos);
        Ok(())
    }

    fn get_applications(&self) -> Result<Vec<Application>> {
        Ok(self.read()?.applications.clone())
    }
}

impl fmt::Display for InMemoryJobDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.board.read() {
            Ok(board) => write!(
                f,
                "InMemoryJobDatabase{{companies={}, jobs={}, users={}, cvs={}, applications={}}}",
                board.companies.len(),
                board.jobs.len(),
                board.users.len(),
                board.cvs.len(),
                board.applications.len(),
            ),
            Err(_) => f.write_str("InMemoryJobDatabase{<poisoned>}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Company {
        Company {
            id: 1,
            name: "Acme".into(),
        }
    }

    #[test]
    fn empty_store_lists_nothing() {
        let db = InMemoryJobDatabase::new();
        assert!(db.get_companies().unwrap().is_empty());
        assert!(db.get_jobs().unwrap().is_empty());
        assert!(db.get_users().unwrap().is_empty());
        assert!(db.get_cvs().unwrap().is_empty());
        assert!(db.get_applications().unwrap().is_empty());
    }

    #[test]
    fn add_and_get_company() {
        let db = InMemoryJobDatabase::new();
        db.add_company(acme()).unwrap();

        assert_eq!(db.get_company_by_id(1).unwrap(), acme());
        assert_eq!(db.get_companies().unwrap(), vec![acme()]);
    }

    #[test]
    fn duplicate_company_id_fails() {
        let db = InMemoryJobDatabase::new();
        db.add_company(acme()).unwrap();

        let result = db.add_company(acme());
        assert!(matches!(
            result,
            Err(JobDbError::DuplicateId { kind: "company", id: 1 })
        ));
    }

    #[test]
    fn update_company_renames() {
        let db = InMemoryJobDatabase::new();
        db.add_company(acme()).unwrap();
        db.update_company(1, "Acme Corp").unwrap();

        assert_eq!(db.get_company_by_id(1).unwrap().name, "Acme Corp");
    }

    #[test]
    fn update_unknown_company_fails() {
        let db = InMemoryJobDatabase::new();
        assert!(matches!(
            db.update_company(9, "Ghost"),
            Err(JobDbError::CompanyNotFound { id: 9 })
        ));
    }

    #[test]
    fn remove_company() {
        let db = InMemoryJobDatabase::new();
        db.add_company(acme()).unwrap();
        db.remove_company(1).unwrap();

        assert!(db.get_companies().unwrap().is_empty());
        assert!(db.remove_company(1).is_err());
    }

    #[test]
    fn jobs_listed_in_id_order() {
        let db = InMemoryJobDatabase::new();
        for id in [30, 10, 20] {
            db.add_job(Job {
                id,
                company_id: 1,
                title: format!("job {id}"),
            })
            .unwrap();
        }

        let ids: Vec<_> = db.get_jobs().unwrap().iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
        assert_eq!(db.get_job_by_id(20).unwrap().title, "job 20");
    }

    #[test]
    fn unknown_job_and_cv_fail() {
        let db = InMemoryJobDatabase::new();
        assert!(matches!(
            db.get_job_by_id(4),
            Err(JobDbError::JobNotFound { id: 4 })
        ));
        assert!(matches!(
            db.get_cv_by_id(5),
            Err(JobDbError::CvNotFound { id: 5 })
        ));
    }

    #[test]
    fn users_and_cvs() {
        let db = InMemoryJobDatabase::new();
        db.add_user(User {
            id: 7,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        })
        .unwrap();
        db.add_cv(Cv {
            id: 70,
            user_id: 7,
            summary: "Analytical engines".into(),
        })
        .unwrap();

        assert_eq!(db.get_users().unwrap()[0].name, "Ada");
        assert_eq!(db.get_cv_by_id(70).unwrap().user_id, 7);
        assert!(db
            .add_cv(Cv {
                id: 70,
                user_id: 8,
                summary: "copy".into(),
            })
            .is_err());
    }

    #[test]
    fn applications_add_and_remove() {
        let db = InMemoryJobDatabase::new();
        let app = Application { job_id: 1, cv_id: 2 };

        db.add_application(app).unwrap();
        assert!(matches!(
            db.add_application(app),
            Err(JobDbError::DuplicateApplication { .. })
        ));

        db.remove_application(&app).unwrap();
        assert!(db.get_applications().unwrap().is_empty());
        assert!(matches!(
            db.remove_application(&app),
            Err(JobDbError::ApplicationNotFound { job_id: 1, cv_id: 2 })
        ));
    }

    #[test]
    fn display_reports_counts() {
        let db = InMemoryJobDatabase::new();
        db.add_company(acme()).unwrap();
        assert_eq!(
            db.to_string(),
            "InMemoryJobDatabase{companies=1, jobs=0, users=0, cvs=0, applications=0}"
        );
    }
}
