//! Service configuration

use serde::Deserialize;
use std::path::PathBuf;

use domain_policy::{PlanError, PlanTable};

/// Service configuration
///
/// Read from `CLAIMS_`-prefixed environment variables, e.g.
/// `CLAIMS_LOG_LEVEL=debug` or `CLAIMS_PLAN_TABLE_PATH=/etc/claims/plans.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines instead of plain text
    pub json_logs: bool,
    /// Plan tier table; the built-in table when unset
    pub plan_table_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            plan_table_path: None,
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::with_prefix("CLAIMS"))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Loads the configured plan tier table
    pub fn load_plan_table(&self) -> Result<PlanTable, PlanError> {
        match &self.plan_table_path {
            Some(path) => PlanTable::from_file(path),
            None => PlanTable::standard(),
        }
    }
}
