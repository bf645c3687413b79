use miette::Diagnostic;
use thiserror::Error;


/// Everything that can go wrong while loading (but not validating) a configuration file.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigurationLoadError {
    /// An empty path was given. The filesystem is never touched in this case.
    #[error("File path is required to load config")]
    #[diagnostic(code(sql_dataset::config::path_required))]
    PathRequired,

    /// The configuration file could not be read. The underlying error is passed through as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid configuration document.
    #[error("Error occurred parsing the config: {0}")]
    #[diagnostic(
        code(sql_dataset::config::parse),
        help("check the YAML syntax and the types of the values in the configuration file")
    )]
    Parse(#[from] serde_yaml::Error),
}
