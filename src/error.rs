use thiserror::Error;

/// Main error type for opsecret operations
///
/// The `Display` text of each variant is the diagnostic printed to stderr
/// by the binary, so callers only need to print the error.
#[derive(Debug, Error)]
pub enum OpSecretError {
    #[error("Error fetching item '{item}' from vault '{vault}':\n{stderr}")]
    RetrievalError {
        vault: String,
        item: String,
        stderr: String,
    },

    #[error("Error: Empty response from 1Password for item '{item}'")]
    EmptyResponseError { item: String },

    #[error("Error parsing JSON response: {source}\nRaw response: {excerpt}")]
    MalformedResponseError {
        #[source]
        source: serde_json::Error,
        excerpt: String,
    },

    #[error("Error: duplicate key: {label}")]
    DuplicateFieldError { label: String },

    /// Rendered clap usage error
    #[error("{0}")]
    Usage(String),

    #[error("Error: Configuration error: {0}")]
    ConfigError(String),

    #[error("Error: Failed to parse configuration file: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Error: IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OpSecretError {
    pub fn retrieval(
        vault: impl Into<String>,
        item: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::RetrievalError {
            vault: vault.into(),
            item: item.into(),
            stderr: stderr.into(),
        }
    }

    pub fn empty_response<S: Into<String>>(item: S) -> Self {
        Self::EmptyResponseError { item: item.into() }
    }

    pub fn malformed_response<S: Into<String>>(source: serde_json::Error, excerpt: S) -> Self {
        Self::MalformedResponseError {
            source,
            excerpt: excerpt.into(),
        }
    }

    pub fn duplicate_field<S: Into<String>>(label: S) -> Self {
        Self::DuplicateFieldError {
            label: label.into(),
        }
    }

    pub fn usage<S: Into<String>>(msg: S) -> Self {
        Self::Usage(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Process exit code for this error. Every failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for opsecret operations
pub type Result<T> = std::result::Result<T, OpSecretError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_error_message() {
        let err = OpSecretError::retrieval("v1", "db-creds", "[ERROR] item not found\n");
        assert_eq!(
            err.to_string(),
            "Error fetching item 'db-creds' from vault 'v1':\n[ERROR] item not found\n"
        );
    }

    #[test]
    fn test_duplicate_field_message() {
        let err = OpSecretError::duplicate_field("api_key");
        assert_eq!(err.to_string(), "Error: duplicate key: api_key");
    }

    #[test]
    fn test_malformed_response_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = OpSecretError::malformed_response(source, "not json");
        let message = err.to_string();
        assert!(message.starts_with("Error parsing JSON response: expected"));
        assert!(message.ends_with("\nRaw response: not json"));
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = vec![
            OpSecretError::retrieval("v", "i", ""),
            OpSecretError::empty_response("i"),
            OpSecretError::duplicate_field("k"),
            OpSecretError::usage("missing argument"),
            OpSecretError::config("bad"),
        ];

        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err:?} should exit with 1");
        }
    }
}
