use std::path::Path;

use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use sql_dataset::{
    configuration::default_configuration_file_path,
    Config,
    ValidatableConfiguration,
};
use tracing::{error, info};

use crate::{cli::CLIArgs, logging::initialize_tracing};

mod cli;
mod logging;


const LOG_FILE_NAME: &str = "sql-dataset.log";


/// Loads the configuration file and validates it.
///
/// Every violation is logged before the single summary error is returned,
/// so `main` exits non-zero for both unreadable and invalid files.
fn load_and_validate_configuration(configuration_file_path: &Path) -> Result<Config> {
    let configuration = Config::load_from_path(configuration_file_path)
        .wrap_err_with(|| {
            miette!(
                "Failed to load configuration file at {}.",
                configuration_file_path.display()
            )
        })?;

    let configuration_file_path = dunce::canonicalize(configuration_file_path)
        .into_diagnostic()
        .wrap_err("Could not canonicalize configuration file path!")?;


    // Validate it, reporting every problem at once.
    let violations = configuration.validate();
    if !violations.is_empty() {
        for violation in &violations {
            error!("{}", violation);
        }

        return Err(miette!(
            "Configuration file {} is invalid ({} problem(s) found).",
            configuration_file_path.display(),
            violations.len()
        ));
    }

    info!(
        path = %configuration_file_path.display(),
        refresh_time_sec = configuration.refresh_time_sec,
        datasets = configuration.datasets.len(),
        "Configuration is valid."
    );

    Ok(configuration)
}


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let logging_raii_guard = initialize_tracing(
        cli_args.console_output_level_filter()?,
        cli_args.log_file_output_level_filter()?,
        cli_args.log_file_output_directory.as_deref(),
        LOG_FILE_NAME,
    )
    .wrap_err("Failed to initialize tracing.")?;


    // Load configuration.
    let configuration_file_path = match cli_args.configuration_file_path {
        Some(path) => path,
        None => default_configuration_file_path()
            .wrap_err("Could not resolve the default configuration file path.")?,
    };

    info!(
        path = %configuration_file_path.display(),
        "Loading configuration."
    );

    let configuration = load_and_validate_configuration(&configuration_file_path)?;

    if let Some(database_config) = configuration.database_config.as_ref() {
        info!(driver = %database_config.driver, "Database connection configured.");
    }

    for dataset in &configuration.datasets {
        info!(
            name = %dataset.name,
            update_type = %dataset.update_type,
            fields = dataset.fields.len(),
            "Dataset configured."
        );
    }


    drop(logging_raii_guard);
    Ok(())
}


#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn valid_configuration_is_accepted() {
        let configuration = load_and_validate_configuration(&fixture("valid_config.yml")).unwrap();

        assert_eq!(configuration.datasets.len(), 1);
    }

    #[test]
    fn configuration_with_violations_is_rejected() {
        let error = load_and_validate_configuration(&fixture("invalid_values_config.yml"))
            .unwrap_err();

        assert!(
            error.to_string().ends_with("is invalid (7 problem(s) found)."),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn unparsable_configuration_is_rejected() {
        let error = load_and_validate_configuration(&fixture("invalid_config.yml")).unwrap_err();

        assert!(error.to_string().starts_with("Failed to load configuration file at "));
    }

    #[test]
    fn missing_configuration_is_rejected() {
        let directory = tempfile::tempdir().unwrap();

        let result = load_and_validate_configuration(&directory.path().join("sql-dataset.yml"));

        assert!(result.is_err());
    }
}
