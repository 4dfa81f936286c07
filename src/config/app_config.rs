use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{JobDbError, Result};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "jobdb.toml";

/// Top-level jobdb configuration read from `jobdb.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub audit: Option<AuditSection>,
}

impl AppConfig {
    /// Load the configuration at `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed
    /// one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| JobDbError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        if let Some(audit) = &config.audit
            && audit.log_file.trim().is_empty()
        {
            return Err(JobDbError::InvalidConfig {
                detail: "[audit] log_file must not be empty".into(),
            });
        }

        Ok(config)
    }

    /// Whether calls should be audited. `true` when the section is absent.
    pub fn audit_enabled(&self) -> bool {
        self.audit.as_ref().map(|a| a.enabled).unwrap_or(true)
    }

    /// Audit log path, defaulting to `audit.log`.
    pub fn audit_log_file(&self) -> &str {
        self.audit
            .as_ref()
            .map(|a| a.log_file.as_str())
            .unwrap_or(DEFAULT_LOG_FILE)
    }
}

const DEFAULT_LOG_FILE: &str = "audit.log";

/// The `[audit]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_enabled() -> bool {
    true
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}
