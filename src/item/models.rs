//! 1Password item models
//!
//! This module defines the subset of the `op item get --format json`
//! response that the exporter works with.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{OpSecretError, Result};
use crate::utils::helpers::truncate_chars;

/// Number of characters of an unparseable response echoed back to the user
pub const RAW_EXCERPT_CHARS: usize = 500;

/// A single item as returned by `op item get`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemRecord {
    /// Item title as shown in 1Password
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,

    /// Fields in the order 1Password reports them
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A labeled value within an item
#[derive(Clone, Default, Deserialize)]
pub struct Field {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub label: String,

    #[serde(default, deserialize_with = "secret_or_empty")]
    pub value: Zeroizing<String>,

    /// Category tag such as `STRING` or `CONCEALED`
    #[serde(rename = "type", default, deserialize_with = "optional_text")]
    pub field_type: Option<String>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("label", &self.label)
            .field("value", &"<redacted>")
            .field("field_type", &self.field_type)
            .finish()
    }
}

impl Field {
    pub fn new(label: &str, value: &str, field_type: &str) -> Self {
        Self {
            label: label.to_string(),
            value: Zeroizing::new(value.to_string()),
            field_type: Some(field_type.to_string()),
        }
    }

    /// Whether the field carries the given type tag
    pub fn has_type(&self, field_type: &str) -> bool {
        self.field_type.as_deref() == Some(field_type)
    }
}

/// Text form of a JSON scalar; `null` has none.
///
/// 1Password normally sends strings, but numbers and booleans are printed
/// the way they appear in the JSON rather than rejected.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn secret_or_empty<'de, D>(deserializer: D) -> std::result::Result<Zeroizing<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Zeroizing::new(
        scalar_text(Value::deserialize(deserializer)?).unwrap_or_default(),
    ))
}

fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

impl ItemRecord {
    /// Parse the captured stdout of `op item get`
    pub fn from_response(item_name: &str, raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(OpSecretError::empty_response(item_name));
        }

        let malformed =
            |e| OpSecretError::malformed_response(e, truncate_chars(raw, RAW_EXCERPT_CHARS));

        let value: Value = serde_json::from_str(raw).map_err(malformed)?;
        if !value.is_object() {
            return Err(malformed(de::Error::custom(
                "expected a JSON object at the top level",
            )));
        }
        let record: ItemRecord = serde_json::from_value(value).map_err(malformed)?;

        debug!(
            "Parsed item {:?} with {} field(s)",
            record.title.as_deref().unwrap_or(item_name),
            record.fields.len()
        );
        Ok(record)
    }

    /// Ensure no two fields share a label.
    ///
    /// Every field is checked, including ones that will not be exported.
    pub fn check_unique_labels(&self) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(self.fields.len());

        for field in &self.fields {
            if seen.contains_key(field.label.as_str()) {
                return Err(OpSecretError::duplicate_field(field.label.as_str()));
            }
            seen.insert(&field.label, &field.value);
        }

        Ok(())
    }
}
