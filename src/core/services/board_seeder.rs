use crate::core::errors::Result;
use crate::core::models::board::BoardSeed;
use crate::core::traits::job_database::JobDatabase;

/// Entity totals reported by the store after a seed was loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub companies: usize,
    pub jobs: usize,
    pub users: usize,
    pub cvs: usize,
    pub applications: usize,
}

/// Loads seed data into any `JobDatabase`.
pub struct BoardSeeder<'a, D: JobDatabase + ?Sized> {
    pub db: &'a D,
}

impl<D: JobDatabase + ?Sized> BoardSeeder<'_, D> {
    /// Add every seeded entity, companies first and applications last,
    /// stopping at the first store error. Totals are read back from the
    /// store afterwards.
    pub fn load(&self, seed: BoardSeed) -> Result<SeedSummary> {
        for company in seed.companies {
            self.db.add_company(company)?;
        }
        for job in seed.jobs {
            self.db.add_job(job)?;
        }
        for user in seed.users {
            self.db.add_user(user)?;
        }
        for cv in seed.cvs {
            self.db.add_cv(cv)?;
        }
        for application in seed.applications {
            self.db.add_application(application)?;
        }
        self.summary()
    }

    /// Count what the store currently holds.
    pub fn summary(&self) -> Result<SeedSummary> {
        Ok(SeedSummary {
            companies: self.db.get_companies()?.len(),
            jobs: self.db.get_jobs()?.len(),
            users: self.db.get_users()?.len(),
            cvs: self.db.get_cvs()?.len(),
            applications: self.db.get_applications()?.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::in_memory_database::InMemoryJobDatabase;
    use crate::core::errors::JobDbError;
    use crate::core::models::board::{Application, Company, Job};

    fn seed() -> BoardSeed {
        BoardSeed {
            companies: vec![Company {
                id: 1,
                name: "Acme".into(),
            }],
            jobs: vec![
                Job {
                    id: 10,
                    company_id: 1,
                    title: "Welder".into(),
                },
                Job {
                    id: 11,
                    company_id: 1,
                    title: "Fitter".into(),
                },
            ],
            applications: vec![Application { job_id: 10, cv_id: 3 }],
            ..BoardSeed::default()
        }
    }

    #[test]
    fn load_reports_totals() {
        let db = InMemoryJobDatabase::new();
        let summary = BoardSeeder { db: &db }.load(seed()).unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                companies: 1,
                jobs: 2,
                users: 0,
                cvs: 0,
                applications: 1,
            }
        );
    }

    #[test]
    fn load_stops_at_first_store_error() {
        let db = InMemoryJobDatabase::new();
        let mut dup = seed();
        dup.jobs[1].id = 10;

        let result = BoardSeeder { db: &db }.load(dup);
        assert!(matches!(
            result,
            Err(JobDbError::DuplicateId { kind: "job", id: 10 })
        ));
        assert!(db.get_applications().unwrap().is_empty());
    }

    #[test]
    fn works_through_trait_object() {
        let db: Box<dyn JobDatabase> = Box::new(InMemoryJobDatabase::new());
        let summary = BoardSeeder { db: &*db }.load(seed()).unwrap();
        assert_eq!(summary.jobs, 2);
    }
}
