use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A persisted catalogue entity.
///
/// `New` is the validated create payload, `Patch` the validated partial
/// update. Both backends build records through `from_new` and mutate them
/// through `apply_patch`, so business defaults live here and nowhere else.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type New: Send + Sync + 'static;
    type Patch: Serialize + Send + Sync + 'static;

    /// File stem for the JSON backend and table name for the remote store.
    const COLLECTION: &'static str;
    /// Human label used in API messages, e.g. "Project not found".
    const LABEL: &'static str;
    const PLURAL: &'static str;

    fn from_new(new: Self::New, id: String, created_at: DateTime<Utc>) -> Self;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// `id` and `createdAt` are never touched.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Builds a record with a fresh identifier stamped now.
    fn create(new: Self::New) -> Self {
        Self::from_new(new, new_record_id(), Utc::now())
    }
}

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Newest first; stable for equal timestamps.
pub fn sort_newest_first<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}
