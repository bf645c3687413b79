//! This module contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Config::load_from_path`],
//! followed by [`ValidatableConfiguration::validate`] on the loaded value.
//!
//! # Internals
//! Loading and validation are deliberately two separate steps.
//!
//! Loading only reads the file and deserializes it into [`Config`].
//! Anything that is structurally wrong with the file (it can't be read,
//! it isn't valid YAML, a value has the wrong type) is reported as a
//! [`ConfigurationLoadError`].
//!
//! Validation then walks the loaded [`Config`] (and recursively its database block,
//! datasets and fields) and collects *every* problem it finds into an ordered
//! list of human-readable messages. It never stops at the first problem and
//! never modifies the configuration, so the caller gets the full picture in one pass.

mod error;
mod structure;
mod traits;
mod utilities;

pub use error::ConfigurationLoadError;
pub use structure::*;
pub use traits::ValidatableConfiguration;
pub use utilities::{default_configuration_file_path, DEFAULT_CONFIGURATION_FILE_NAME};
