use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ContactInfo, ContactStore};
use crate::errors::ServiceError;

/// Process-local contact store. Nothing is persisted; a restart brings back the initial record.
///
/// Merges hold the write lock for their whole duration, so writers touching
/// disjoint keys never lose each other's updates.
#[derive(Clone)]
pub struct InMemoryContactStore {
    inner: Arc<RwLock<ContactInfo>>,
}

impl InMemoryContactStore {
    pub fn new(initial: ContactInfo) -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(initial)) })
    }

    /// Store seeded with [`ContactInfo::builtin_default`].
    pub fn with_builtin_default() -> Arc<Self> {
        Self::new(ContactInfo::builtin_default())
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn get(&self) -> ContactInfo {
        self.inner.read().await.clone()
    }

    async fn merge(&self, partial: ContactInfo) -> Result<ContactInfo, ServiceError> {
        let mut record = self.inner.write().await;
        debug!(keys = ?partial.keys().collect::<Vec<_>>(), "merging contact fields");
        record.merge(partial);
        Ok(record.clone())
    }
}
