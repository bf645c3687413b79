//! Command-line interface definitions for the `sql-dataset` binary.

use std::path::PathBuf;

use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;



/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sql-dataset",
    author,
    about = "Load and validate a SQL-to-Geckoboard dataset configuration.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./sql-dataset.yml`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the configuration file to use. Defaults to ./sql-dataset.yml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        long = "console-log-level",
        default_value = "info",
        help = "Console log filter (e.g. \"info\" or \"sql_dataset=debug\")."
    )]
    pub console_output_level_filter: String,

    #[arg(
        long = "log-file-directory",
        help = "If set, logs are also written to sql-dataset.log in this directory."
    )]
    pub log_file_output_directory: Option<PathBuf>,

    #[arg(
        long = "log-file-level",
        default_value = "debug",
        help = "Log file filter. Only used together with --log-file-directory."
    )]
    pub log_file_output_level_filter: String,
}

impl CLIArgs {
    pub fn console_output_level_filter(&self) -> Result<EnvFilter> {
        parse_level_filter(&self.console_output_level_filter)
            .wrap_err("Failed to parse --console-log-level.")
    }

    pub fn log_file_output_level_filter(&self) -> Result<EnvFilter> {
        parse_level_filter(&self.log_file_output_level_filter)
            .wrap_err("Failed to parse --log-file-level.")
    }
}


fn parse_level_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Invalid log filter: {}", directives))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let args = CLIArgs::try_parse_from(["sql-dataset"]).unwrap();

        assert!(args.configuration_file_path.is_none());
        assert!(args.log_file_output_directory.is_none());
        assert_eq!(args.console_output_level_filter, "info");
        assert_eq!(args.log_file_output_level_filter, "debug");
        assert!(args.console_output_level_filter().is_ok());
    }

    #[test]
    fn configuration_path_has_short_flag() {
        let args = CLIArgs::try_parse_from(["sql-dataset", "-c", "config/prod.yml"]).unwrap();

        assert_eq!(
            args.configuration_file_path,
            Some(PathBuf::from("config/prod.yml"))
        );
    }

    #[test]
    fn invalid_level_filter_is_an_error() {
        let args =
            CLIArgs::try_parse_from(["sql-dataset", "--console-log-level", "sql_dataset=loud"])
                .unwrap();

        assert!(args.console_output_level_filter().is_err());
    }
}
