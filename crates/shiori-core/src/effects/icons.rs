//! Icon store trait definition.
//!
//! Boundary to remote object storage for profile avatars. Upload only;
//! downloads happen over plain URLs in the frontend.

use crate::errors::AppError;
use crate::types::ProfileId;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for icon store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IconStoreError {
    /// The upload did not complete.
    #[error("icon upload failed: {message}")]
    Upload { message: String },
}

impl IconStoreError {
    /// Create an upload error.
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }
}

impl From<IconStoreError> for AppError {
    fn from(err: IconStoreError) -> Self {
        Self::storage(err.to_string())
    }
}

/// Remote object storage for profile avatars.
#[async_trait]
pub trait IconStoreEffects: Send + Sync {
    /// Upload `bytes` as the avatar for `profile`. Returns the hosted
    /// URL.
    async fn upload_icon(&self, profile: ProfileId, bytes: &[u8])
        -> Result<String, IconStoreError>;
}
