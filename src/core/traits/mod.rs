pub mod audit;
pub mod job_database;
