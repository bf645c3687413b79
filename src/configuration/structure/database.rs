use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

use crate::configuration::{
    traits::ValidatableConfiguration,
    utilities::{
        deserialize_null_as_default,
        deserialize_string_or_integer,
        format_supported_values,
    },
};


/// Database drivers the pipeline knows how to talk to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DatabaseDriver {
    MySql,
    Postgres,
    Sqlite3,
}

impl DatabaseDriver {
    /// Every supported driver, in the order they are listed in violation messages.
    pub const ALL: [DatabaseDriver; 3] = [
        DatabaseDriver::MySql,
        DatabaseDriver::Postgres,
        DatabaseDriver::Sqlite3,
    ];

    /// Name of the driver as written in the configuration file.
    pub const fn as_str(self) -> &'static str {
        match self {
            DatabaseDriver::MySql => "mysql",
            DatabaseDriver::Postgres => "postgres",
            DatabaseDriver::Sqlite3 => "sqlite3",
        }
    }

    /// Look up a driver by its configuration name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|driver| driver.as_str() == name)
    }

    /// The supported driver list as displayed in violation messages.
    pub fn supported_list() -> String {
        format_supported_values(Self::ALL.into_iter().map(Self::as_str))
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}



/// `database_config.tls_config` block.
#[derive(Deserialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct TlsConfig {
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub key_file: String,

    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub cert_file: String,

    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub ca_file: String,

    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub ssl_mode: String,
}


/// `database_config` block.
#[derive(Deserialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct DatabaseConfig {
    /// One of [`DatabaseDriver::ALL`], by name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub driver: String,

    /// Full connection string.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub url: String,

    // The structured connection fields below are informational overrides
    // for `url` and are not validated.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub host: String,

    #[serde(deserialize_with = "deserialize_string_or_integer")]
    pub port: String,

    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub protocol: String,

    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub database: String,

    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub username: String,

    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub password: String,

    pub tls_config: Option<TlsConfig>,

    /// Free-form driver parameters.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub params: BTreeMap<String, String>,
}

impl DatabaseConfig {
    /// The parsed driver, if `driver` names a supported one.
    pub fn parsed_driver(&self) -> Option<DatabaseDriver> {
        DatabaseDriver::from_name(&self.driver)
    }
}

impl ValidatableConfiguration for DatabaseConfig {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.driver.is_empty() {
            violations.push("Database driver is required".to_string());
        } else if self.parsed_driver().is_none() {
            violations.push(format!(
                "Unsupported driver '{}' only {} are supported",
                self.driver,
                DatabaseDriver::supported_list()
            ));
        }

        violations
    }
}
