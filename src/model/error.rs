use thiserror::Error;

/// Failure kinds a store operation can end in. `Display` is the text shown to the user
/// for a failed upload; `detail()` is the raw provider text behind it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("The file {path} was not found")]
    LocalFileMissing { path: String },

    #[error("Credentials not available")]
    CredentialsMissing { detail: String },

    #[error("Incomplete credentials provided")]
    CredentialsIncomplete { detail: String },

    #[error("{detail}")]
    Provider { detail: String },
}

impl StoreError {
    pub fn provider(detail: impl Into<String>) -> Self {
        StoreError::Provider {
            detail: detail.into(),
        }
    }

    pub fn credentials_missing(detail: impl Into<String>) -> Self {
        StoreError::CredentialsMissing {
            detail: detail.into(),
        }
    }

    pub fn credentials_incomplete(detail: impl Into<String>) -> Self {
        StoreError::CredentialsIncomplete {
            detail: detail.into(),
        }
    }

    /// The underlying error text, falling back to the user text when there is none.
    pub fn detail(&self) -> String {
        match self {
            StoreError::CredentialsMissing { detail }
            | StoreError::CredentialsIncomplete { detail }
            | StoreError::Provider { detail }
                if !detail.is_empty() =>
            {
                detail.clone()
            }
            _ => self.to_string(),
        }
    }

    /// Short tag used as the `error_group` log field.
    pub fn group(&self) -> &'static str {
        match self {
            StoreError::LocalFileMissing { .. } => "local_file_missing",
            StoreError::CredentialsMissing { .. } => "credentials_missing",
            StoreError::CredentialsIncomplete { .. } => "credentials_incomplete",
            StoreError::Provider { .. } => "provider",
        }
    }
}
