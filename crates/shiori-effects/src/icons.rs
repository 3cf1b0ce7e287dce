//! In-memory icon store.

use async_trait::async_trait;
use shiori_core::{IconStoreEffects, IconStoreError, ProfileId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Icon store held in process memory.
///
/// Keeps uploaded avatar bytes keyed by profile and hands back stable
/// URLs under a fake host.
#[derive(Clone)]
pub struct MemoryIconStore {
    icons: Arc<RwLock<HashMap<ProfileId, Vec<u8>>>>,
    base_url: String,
}

impl MemoryIconStore {
    /// Create a store issuing URLs under `https://icons.invalid`.
    pub fn new() -> Self {
        Self::with_base_url("https://icons.invalid")
    }

    /// Create a store issuing URLs under `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            icons: Arc::new(RwLock::new(HashMap::new())),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The stored bytes for `profile`, if an icon was uploaded.
    pub async fn icon(&self, profile: ProfileId) -> Option<Vec<u8>> {
        self.icons.read().await.get(&profile).cloned()
    }
}

impl Default for MemoryIconStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IconStoreEffects for MemoryIconStore {
    async fn upload_icon(
        &self,
        profile: ProfileId,
        bytes: &[u8],
    ) -> Result<String, IconStoreError> {
        if bytes.is_empty() {
            return Err(IconStoreError::upload("empty image payload"));
        }
        self.icons.write().await.insert(profile, bytes.to_vec());
        let url = format!("{}/{profile}.png", self.base_url);
        debug!(profile = %profile, size = bytes.len(), "uploaded icon");
        Ok(url)
    }
}
