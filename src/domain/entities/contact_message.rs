use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    field_rules::{non_blank, not_blank},
    record::Record,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
    Replied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContactMessageInsert {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessageRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub first_name: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub last_name: Option<String>,

    #[validate(required, custom(function = "not_blank"), email)]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub subject: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(max = 5000))]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MessageStatusUpdate {
    #[validate(required)]
    pub status: Option<MessageStatus>,
}

impl TryFrom<NewContactMessageRequest> for ContactMessageInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewContactMessageRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ContactMessageInsert {
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            email: value.email.unwrap_or_default().trim().to_string(),
            phone: non_blank(value.phone),
            subject: value.subject.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
        })
    }
}

impl TryFrom<MessageStatusUpdate> for MessageStatus {
    type Error = ValidationErrors;

    fn try_from(value: MessageStatusUpdate) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(value.status.unwrap_or_default())
    }
}

impl Record for ContactMessage {
    type New = ContactMessageInsert;
    type Patch = ContactMessagePatch;

    const COLLECTION: &'static str = "contact_messages";
    const LABEL: &'static str = "Contact message";
    const PLURAL: &'static str = "contact messages";

    fn from_new(new: ContactMessageInsert, id: String, created_at: DateTime<Utc>) -> Self {
        ContactMessage {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            status: MessageStatus::Unread,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: ContactMessagePatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
