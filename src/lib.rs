//! Loading and validation of `sql-dataset` configuration files.
//!
//! A configuration file describes which SQL queries to run against which database,
//! and how their results map onto Geckoboard datasets.
//! This crate reads such a file into a [`Config`] and checks it
//! with [`ValidatableConfiguration::validate`] before anything downstream uses it.

pub mod configuration;

pub use configuration::{
    Config,
    ConfigurationLoadError,
    DatabaseConfig,
    DatabaseDriver,
    Dataset,
    Field,
    FieldType,
    TlsConfig,
    UpdateType,
    ValidatableConfiguration,
};
