//! Kubernetes Secret manifest rendering
//!
//! The manifest is written line by line rather than through a YAML
//! serializer: values are always wrapped in double quotes and emitted
//! verbatim.

use std::io::{self, Write};

use crate::item::{Field, ItemRecord};

/// Field type tag 1Password uses for sensitive values
pub const DEFAULT_CONCEALED_TYPE: &str = "CONCEALED";

/// Label that is never exported, even when concealed
pub const EXCLUDED_LABEL: &str = "password";

/// A `v1/Secret` with inline `stringData`
#[derive(Debug)]
pub struct SecretManifest<'a> {
    name: &'a str,
    entries: Vec<&'a Field>,
}

impl<'a> SecretManifest<'a> {
    /// Select the exportable fields of `record`, keeping their order
    pub fn from_item(name: &'a str, record: &'a ItemRecord, concealed_type: &str) -> Self {
        let entries = record
            .fields
            .iter()
            .filter(|field| is_exported(field, concealed_type))
            .collect();

        Self { name, entries }
    }

    /// Labels that end up under `stringData`
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|f| f.label.as_str()).collect()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "apiVersion: v1")?;
        writeln!(out, "kind: Secret")?;
        writeln!(out, "metadata:")?;
        writeln!(out, "  name: {}", self.name)?;
        writeln!(out, "stringData:")?;

        for field in &self.entries {
            writeln!(out, "  {}: \"{}\"", field.label, field.value.as_str())?;
        }

        out.flush()
    }
}

fn is_exported(field: &Field, concealed_type: &str) -> bool {
    field.has_type(concealed_type) && field.label != EXCLUDED_LABEL
}
