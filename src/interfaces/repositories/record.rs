use async_trait::async_trait;

use crate::{
    entities::{
        career::Career,
        contact_message::{ContactMessage, ContactMessagePatch, MessageStatus},
        job_application::{ApplicationStatus, JobApplication, JobApplicationPatch},
        record::Record,
    },
    errors::StorageError,
};

/// The storage port every backend implements for every record type.
///
/// "Not found" is never an error: `update` yields `None` and `delete`
/// yields `false`. Only genuine I/O, transport or configuration failures
/// come back as `Err`.
#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// All records, newest first.
    async fn get_all(&self) -> Result<Vec<T>, StorageError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<T>, StorageError>;
    async fn add(&self, new: T::New) -> Result<T, StorageError>;
    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, StorageError>;
    async fn delete(&self, id: &str) -> Result<bool, StorageError>;
}

#[async_trait]
pub trait CareerRepository: RecordRepository<Career> {
    /// Postings with `isActive == true`, newest first.
    async fn get_active(&self) -> Result<Vec<Career>, StorageError>;
}

#[async_trait]
pub trait JobApplicationRepository: RecordRepository<JobApplication> {
    async fn get_by_career_id(&self, career_id: &str) -> Result<Vec<JobApplication>, StorageError>;

    async fn update_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>, StorageError> {
        self.update(id, JobApplicationPatch { status: Some(status) }).await
    }
}

#[async_trait]
pub trait ContactMessageRepository: RecordRepository<ContactMessage> {
    async fn update_status(
        &self,
        id: &str,
        status: MessageStatus,
    ) -> Result<Option<ContactMessage>, StorageError> {
        self.update(id, ContactMessagePatch { status: Some(status) }).await
    }
}
