use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    field_rules::{non_blank, not_blank},
    record::Record,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
}

/// An application to a posting.
///
/// `career_id` is a weak reference: deleting the career leaves the
/// application in place, and `job_title` keeps the title as it was when
/// the candidate applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub career_id: String,
    pub job_title: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct JobApplicationInsert {
    pub career_id: String,
    pub job_title: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

/// Public application form. A `status` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewJobApplicationRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub career_id: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub job_title: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub full_name: Option<String>,

    #[validate(required, custom(function = "not_blank"), email)]
    pub email: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub phone: Option<String>,

    pub resume: Option<String>,

    pub cover_letter: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ApplicationStatusUpdate {
    #[validate(required)]
    pub status: Option<ApplicationStatus>,
}

impl TryFrom<NewJobApplicationRequest> for JobApplicationInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewJobApplicationRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(JobApplicationInsert {
            career_id: value.career_id.unwrap_or_default(),
            job_title: value.job_title.unwrap_or_default(),
            full_name: value.full_name.unwrap_or_default(),
            email: value.email.unwrap_or_default().trim().to_string(),
            phone: value.phone.unwrap_or_default(),
            resume: non_blank(value.resume),
            cover_letter: non_blank(value.cover_letter),
        })
    }
}

impl TryFrom<ApplicationStatusUpdate> for ApplicationStatus {
    type Error = ValidationErrors;

    fn try_from(value: ApplicationStatusUpdate) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(value.status.unwrap_or_default())
    }
}

impl Record for JobApplication {
    type New = JobApplicationInsert;
    type Patch = JobApplicationPatch;

    const COLLECTION: &'static str = "job_applications";
    const LABEL: &'static str = "Job application";
    const PLURAL: &'static str = "job applications";

    /// Every application starts out pending.
    fn from_new(new: JobApplicationInsert, id: String, created_at: DateTime<Utc>) -> Self {
        JobApplication {
            id,
            career_id: new.career_id,
            job_title: new.job_title,
            full_name: new.full_name,
            email: new.email,
            phone: new.phone,
            resume: new.resume,
            cover_letter: new.cover_letter,
            status: ApplicationStatus::Pending,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: JobApplicationPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
