use std::path::Path;

use crate::core::errors::{JobDbError, Result};
use crate::core::models::board::BoardSeed;

/// Reads board seed files written in TOML.
///
/// Every table array is optional:
/// ```toml
/// [[companies]]
/// id = 1
/// name = "Acme"
///
/// [[applications]]
/// job_id = 10
/// cv_id = 100
/// ```
pub struct SeedParser;

impl SeedParser {
    /// Parse seed content. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<BoardSeed> {
        toml::from_str(content).map_err(|e| JobDbError::ParseError {
            file: origin.to_path_buf(),
            detail: e.message().to_string(),
        })
    }

    /// Read and parse the seed file at `path`.
    pub fn read(path: &Path) -> Result<BoardSeed> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }
}
