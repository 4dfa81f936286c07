use serde::Deserialize;

/// A company that publishes jobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
}

/// A job opening published by a company.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub id: u32,
    pub company_id: u32,
    pub title: String,
}

/// A registered candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// A CV owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cv {
    pub id: u32,
    pub user_id: u32,
    pub summary: String,
}

/// A CV submitted to a job. The pair is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Application {
    pub job_id: u32,
    pub cv_id: u32,
}

/// Contents of a board seed file, loaded by `jobdb seed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardSeed {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub cvs: Vec<Cv>,
    #[serde(default)]
    pub applications: Vec<Application>,
}
