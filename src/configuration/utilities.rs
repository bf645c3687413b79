use std::{env::current_dir, fmt, path::PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::{de, Deserialize, Deserializer};


pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "sql-dataset.yml";


/// Returns the default configuration filepath, which is at
/// `{current directory}/sql-dataset.yml`.
///
/// The file is not required to exist.
pub fn default_configuration_file_path() -> Result<PathBuf> {
    let mut configuration_filepath = current_dir()
        .into_diagnostic()
        .wrap_err_with(|| miette!("Could not get the current directory."))?;
    configuration_filepath.push(DEFAULT_CONFIGURATION_FILE_NAME);

    Ok(configuration_filepath)
}


/// Formats a list of supported values the way they are shown in violation messages,
/// e.g. `[mysql postgres sqlite3]`.
pub(crate) fn format_supported_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = values.into_iter().collect::<Vec<_>>().join(" ");
    format!("[{}]", joined)
}


/// Deserializes a field whose explicit null (`~`, `null` or an empty value)
/// means the same as leaving the key out.
pub(crate) fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}


/// Deserializes a string field that may also be written as a bare integer in YAML
/// (e.g. `port: 5432`).
pub(crate) fn deserialize_string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrIntegerVisitor;

    impl<'de> de::Visitor<'de> for StringOrIntegerVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrIntegerVisitor)
}
