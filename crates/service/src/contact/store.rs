use async_trait::async_trait;
use serde_json::{Map, Value};

use super::ContactInfo;
use crate::errors::ServiceError;

/// Trait abstraction for contact information storage.
/// Route handlers hold an `Arc<dyn ContactStore>`; implementations can be in-memory or remote.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Snapshot of the current record.
    async fn get(&self) -> ContactInfo;

    /// Shallow-merge `partial` into the record and return the new snapshot.
    async fn merge(&self, partial: ContactInfo) -> Result<ContactInfo, ServiceError>;

    /// Overwrite a single top-level field.
    async fn set_field(&self, key: String, value: Value) -> Result<ContactInfo, ServiceError> {
        let mut fields = Map::new();
        fields.insert(key, value);
        self.merge(ContactInfo::from(fields)).await
    }
}
