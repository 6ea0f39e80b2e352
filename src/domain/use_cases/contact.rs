use crate::{
    entities::contact_message::{ContactMessage, MessageStatus, MessageStatusUpdate},
    errors::AppError,
    repositories::record::ContactMessageRepository,
    use_cases::records::{not_found, RecordHandler},
};

pub type ContactMessageHandler = RecordHandler<ContactMessage, dyn ContactMessageRepository>;

impl<R> RecordHandler<ContactMessage, R>
where
    R: ContactMessageRepository + ?Sized,
{
    /// Marks a message as read or replied.
    pub async fn update_status(
        &self,
        id: &str,
        request: MessageStatusUpdate,
    ) -> Result<ContactMessage, AppError> {
        let status = MessageStatus::try_from(request)?;

        self.repo
            .update_status(id, status)
            .await
            .map_err(|e| AppError::storage(e, "Failed to update message status"))?
            .ok_or_else(not_found::<ContactMessage>)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;

    use super::*;
    use crate::{
        entities::{
            contact_message::{ContactMessageInsert, ContactMessagePatch, NewContactMessageRequest},
            record::Record,
        },
        errors::{StorageError, INVALID_EMAIL_MESSAGE},
        repositories::record::RecordRepository,
    };

    mock! {
        pub Messages {}

        #[async_trait]
        impl RecordRepository<ContactMessage> for Messages {
            async fn get_all(&self) -> Result<Vec<ContactMessage>, StorageError>;
            async fn get_by_id(&self, id: &str) -> Result<Option<ContactMessage>, StorageError>;
            async fn add(&self, new: ContactMessageInsert) -> Result<ContactMessage, StorageError>;
            async fn update(&self, id: &str, patch: ContactMessagePatch) -> Result<Option<ContactMessage>, StorageError>;
            async fn delete(&self, id: &str) -> Result<bool, StorageError>;
        }

        #[async_trait]
        impl ContactMessageRepository for Messages {}
    }

    fn handler(repo: MockMessages) -> RecordHandler<ContactMessage, MockMessages> {
        RecordHandler::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn new_messages_are_unread() {
        let mut repo = MockMessages::new();
        repo.expect_add().returning(|new| Ok(ContactMessage::create(new)));

        let request: NewContactMessageRequest = serde_json::from_value(serde_json::json!({
            "firstName": "Ngozi",
            "lastName": "Eze",
            "email": "ngozi@example.com",
            "subject": "Quote",
            "message": "Please send a quote for 12 sites.",
            "status": "replied"
        }))
        .unwrap();

        let created = handler(repo).create(request).await.unwrap();
        assert_eq!(created.status, MessageStatus::Unread);
        assert_eq!(created.phone, None);
    }

    #[tokio::test]
    async fn bad_email_is_rejected_before_storage() {
        let mut repo = MockMessages::new();
        repo.expect_add().never();

        let request: NewContactMessageRequest = serde_json::from_value(serde_json::json!({
            "firstName": "Ngozi",
            "lastName": "Eze",
            "email": "ngozi-at-example",
            "subject": "Quote",
            "message": "Hello"
        }))
        .unwrap();

        let err = handler(repo).create(request).await.unwrap_err();
        assert_eq!(err, AppError::BadRequest(INVALID_EMAIL_MESSAGE.into()));
    }

    #[tokio::test]
    async fn status_update_returns_updated_message() {
        let mut repo = MockMessages::new();
        repo.expect_update()
            .withf(|_, patch| patch.status == Some(MessageStatus::Read))
            .returning(|id, patch| {
                let mut message = ContactMessage::create(ContactMessageInsert {
                    first_name: "A".into(),
                    last_name: "B".into(),
                    email: "a@b.co".into(),
                    phone: None,
                    subject: "S".into(),
                    message: "M".into(),
                });
                message.id = id.to_string();
                message.apply_patch(patch);
                Ok(Some(message))
            });

        let updated = handler(repo)
            .update_status("m-1", MessageStatusUpdate { status: Some(MessageStatus::Read) })
            .await
            .unwrap();

        assert_eq!(updated.id, "m-1");
        assert_eq!(updated.status, MessageStatus::Read);
    }
}
