use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, trace};

pub use self::database::{DatabaseConfig, DatabaseDriver, TlsConfig};
pub use self::dataset::{Dataset, Field, FieldType, UpdateType};
use super::error::ConfigurationLoadError;
use super::traits::ValidatableConfiguration;
use super::utilities::deserialize_null_as_default;

mod database;
mod dataset;



/// The entire configuration.
///
/// Keys missing from the file fall back to their empty values; whether that is
/// acceptable is decided by [`ValidatableConfiguration::validate`], not by loading.
#[derive(Deserialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct Config {
    /// API key used to push datasets to Geckoboard.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub geckoboard_api_key: String,

    /// Database connection. Required, but absence is reported by validation.
    pub database_config: Option<DatabaseConfig>,

    /// How often the datasets should be refreshed, in seconds.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub refresh_time_sec: u16,

    /// Datasets, in file order.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub datasets: Vec<Dataset>,
}


impl Config {
    /// Load the configuration from a specific file path.
    ///
    /// This only reads and deserializes the file; call
    /// [`validate`][ValidatableConfiguration::validate] on the result
    /// before handing it to anything else.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadError> {
        let configuration_file_path = configuration_file_path.as_ref();
        if configuration_file_path.as_os_str().is_empty() {
            return Err(ConfigurationLoadError::PathRequired);
        }

        debug!(
            path = %configuration_file_path.display(),
            "Reading configuration file."
        );

        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(configuration_file_path)?;
        trace!(
            bytes = configuration_string.len(),
            "Configuration file read."
        );

        Self::from_yaml_str(&configuration_string)
    }

    /// Deserialize the configuration from an in-memory YAML document.
    pub fn from_yaml_str(configuration_string: &str) -> Result<Self, ConfigurationLoadError> {
        let configuration = serde_yaml::from_str::<Config>(configuration_string)?;

        debug!(
            datasets = configuration.datasets.len(),
            has_database_config = configuration.database_config.is_some(),
            "Configuration deserialized."
        );

        Ok(configuration)
    }
}


impl ValidatableConfiguration for Config {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.geckoboard_api_key.is_empty() {
            violations.push("Geckoboard api key is required".to_string());
        }

        match &self.database_config {
            Some(database_config) => violations.extend(database_config.validate()),
            None => violations.push("Database config is required".to_string()),
        }

        for dataset in &self.datasets {
            violations.extend(dataset.validate());
        }

        trace!(
            violations = violations.len(),
            "Configuration validated."
        );

        violations
    }
}
