use std::fmt;

use serde::Deserialize;

use crate::configuration::{
    traits::ValidatableConfiguration,
    utilities::{deserialize_null_as_default, format_supported_values},
};


/// How a dataset's rows are pushed to Geckoboard.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum UpdateType {
    /// New rows are appended to the existing data.
    Append,
    /// The existing data is replaced on every refresh.
    Replace,
}

impl UpdateType {
    pub const ALL: [UpdateType; 2] = [UpdateType::Append, UpdateType::Replace];

    pub const fn as_str(self) -> &'static str {
        match self {
            UpdateType::Append => "append",
            UpdateType::Replace => "replace",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|update_type| update_type.as_str() == name)
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Column types understood by the Geckoboard datasets API.
///
/// This is the one authoritative list; adding a type here is enough for it to be
/// accepted by validation and shown in the unsupported-type message.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FieldType {
    Number,
    String,
    Date,
    Datetime,
    Percentage,
    Money,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        FieldType::Number,
        FieldType::String,
        FieldType::Date,
        FieldType::Datetime,
        FieldType::Percentage,
        FieldType::Money,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Datetime => "datetime",
            FieldType::Percentage => "percentage",
            FieldType::Money => "money",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field_type| field_type.as_str() == name)
    }

    /// The supported type list as displayed in violation messages.
    pub fn supported_list() -> String {
        format_supported_values(Self::ALL.into_iter().map(Self::as_str))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}



/// One output column of a dataset.
#[derive(Deserialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct Field {
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,

    /// One of [`FieldType::ALL`], by name.
    #[serde(rename = "type", deserialize_with = "deserialize_null_as_default")]
    pub field_type: String,
}

impl Field {
    pub fn parsed_type(&self) -> Option<FieldType> {
        FieldType::from_name(&self.field_type)
    }
}

impl ValidatableConfiguration for Field {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push("Field name is required".to_string());
        }

        if self.parsed_type().is_none() {
            violations.push(format!(
                "Unsupported field type '{}' only {} are supported",
                self.field_type,
                FieldType::supported_list()
            ));
        }

        violations
    }
}


/// A single dataset: a query whose result rows are pushed to one Geckoboard dataset.
#[derive(Deserialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct Dataset {
    /// Dataset identifier, conventionally dotted (e.g. `users.count`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,

    /// `append` or `replace`.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub update_type: String,

    /// Query text. Not checked for syntax.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub sql: String,

    /// Output columns, in query column order.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub fields: Vec<Field>,
}

impl Dataset {
    pub fn parsed_update_type(&self) -> Option<UpdateType> {
        UpdateType::from_name(&self.update_type)
    }
}

impl ValidatableConfiguration for Dataset {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push("Dataset name is required".to_string());
        }

        if self.parsed_update_type().is_none() {
            violations.push("Dataset update type must be append or replace".to_string());
        }

        if self.sql.is_empty() {
            violations.push("Dataset sql is required".to_string());
        }

        for field in &self.fields {
            violations.extend(field.validate());
        }

        violations
    }
}
