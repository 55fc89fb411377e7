//! Secret export workflow
//!
//! Fetches one item, validates it and writes the manifest. Nothing is
//! written to the output until every check has passed.

use std::io::Write;
use tracing::{debug, info};

use crate::error::{OpSecretError, Result};
use crate::item::{ItemFetcher, ItemRecord};
use crate::secret::manifest::{SecretManifest, DEFAULT_CONCEALED_TYPE};

/// What to export and under which name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub vault_id: String,
    pub item_name: String,
    pub secret_name: String,
}

impl ExportRequest {
    /// Build a request; the secret is named after the item unless given
    pub fn new<S: Into<String>>(vault_id: S, item_name: S, secret_name: Option<S>) -> Self {
        let item_name = item_name.into();
        let secret_name = secret_name.map(Into::into).unwrap_or_else(|| item_name.clone());

        Self {
            vault_id: vault_id.into(),
            item_name,
            secret_name,
        }
    }
}

pub struct SecretExporter<F: ItemFetcher> {
    fetcher: F,
    concealed_type: String,
}

impl<F: ItemFetcher> SecretExporter<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            concealed_type: DEFAULT_CONCEALED_TYPE.to_string(),
        }
    }

    /// Override the field type tag treated as sensitive
    pub fn with_concealed_type<S: Into<String>>(mut self, concealed_type: S) -> Self {
        self.concealed_type = concealed_type.into();
        self
    }

    pub fn export<W: Write>(&self, request: &ExportRequest, out: &mut W) -> Result<()> {
        info!(
            "Exporting item '{}' from vault '{}' as secret '{}'",
            request.item_name, request.vault_id, request.secret_name
        );

        let response = self
            .fetcher
            .fetch_item(&request.vault_id, &request.item_name)?;

        if !response.success() {
            return Err(OpSecretError::retrieval(
                request.vault_id.as_str(),
                request.item_name.as_str(),
                response.stderr.as_str(),
            ));
        }

        let record = ItemRecord::from_response(&request.item_name, &response.stdout)?;
        record.check_unique_labels()?;

        let manifest =
            SecretManifest::from_item(&request.secret_name, &record, &self.concealed_type);
        debug!("Writing {} stringData entries", manifest.labels().len());

        manifest.write_to(out)?;
        Ok(())
    }
}
