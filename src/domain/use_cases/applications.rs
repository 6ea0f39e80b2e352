use crate::{
    entities::job_application::{ApplicationStatus, ApplicationStatusUpdate, JobApplication},
    errors::AppError,
    repositories::record::JobApplicationRepository,
    use_cases::records::{not_found, RecordHandler},
};

pub type JobApplicationHandler = RecordHandler<JobApplication, dyn JobApplicationRepository>;

impl<R> RecordHandler<JobApplication, R>
where
    R: JobApplicationRepository + ?Sized,
{
    /// Applications submitted against one posting.
    pub async fn list_for_career(&self, career_id: &str) -> Result<Vec<JobApplication>, AppError> {
        self.repo
            .get_by_career_id(career_id)
            .await
            .map_err(|e| AppError::storage(e, "Failed to fetch job applications"))
    }

    pub async fn update_status(
        &self,
        id: &str,
        request: ApplicationStatusUpdate,
    ) -> Result<JobApplication, AppError> {
        let status = ApplicationStatus::try_from(request)?;

        self.repo
            .update_status(id, status)
            .await
            .map_err(|e| AppError::storage(e, "Failed to update application status"))?
            .ok_or_else(not_found::<JobApplication>)
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
            job_application::{JobApplicationInsert, JobApplicationPatch, NewJobApplicationRequest},
            record::Record,
        },
        errors::{StorageError, MISSING_FIELDS_MESSAGE},
        repositories::record::RecordRepository,
    };

    mock! {
        pub Applications {}

        #[async_trait]
        impl RecordRepository<JobApplication> for Applications {
            async fn get_all(&self) -> Result<Vec<JobApplication>, StorageError>;
            async fn get_by_id(&self, id: &str) -> Result<Option<JobApplication>, StorageError>;
            async fn add(&self, new: JobApplicationInsert) -> Result<JobApplication, StorageError>;
            async fn update(&self, id: &str, patch: JobApplicationPatch) -> Result<Option<JobApplication>, StorageError>;
            async fn delete(&self, id: &str) -> Result<bool, StorageError>;
        }

        #[async_trait]
        impl JobApplicationRepository for Applications {
            async fn get_by_career_id(&self, career_id: &str) -> Result<Vec<JobApplication>, StorageError>;
        }
    }

    fn handler(repo: MockApplications) -> RecordHandler<JobApplication, MockApplications> {
        RecordHandler::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn submitted_status_is_overridden() {
        let mut repo = MockApplications::new();
        repo.expect_add().returning(|new| Ok(JobApplication::create(new)));

        let request: NewJobApplicationRequest = serde_json::from_value(serde_json::json!({
            "careerId": "c-9",
            "jobTitle": "Planner",
            "fullName": "Zainab Musa",
            "email": "zainab@example.com",
            "phone": "0803",
            "status": "rejected"
        }))
        .unwrap();

        let created = handler(repo).create(request).await.unwrap();
        assert_eq!(created.status, ApplicationStatus::Pending);
    }

    #[tokio::test]
    async fn status_update_goes_through_patch() {
        let mut repo = MockApplications::new();
        repo.expect_update()
            .withf(|id, patch| id == "a-1" && patch.status == Some(ApplicationStatus::Shortlisted))
            .times(1)
            .returning(|_, _| Ok(None));

        let request = ApplicationStatusUpdate {
            status: Some(ApplicationStatus::Shortlisted),
        };
        let err = handler(repo).update_status("a-1", request).await.unwrap_err();

        assert_eq!(err, AppError::NotFound("Job application not found".into()));
    }

    #[tokio::test]
    async fn missing_status_is_rejected_without_storage() {
        let mut repo = MockApplications::new();
        repo.expect_update().never();

        let err = handler(repo)
            .update_status("a-1", ApplicationStatusUpdate { status: None })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::BadRequest(MISSING_FIELDS_MESSAGE.into()));
    }

    #[tokio::test]
    async fn filtered_list_uses_career_id() {
        let mut repo = MockApplications::new();
        repo.expect_get_by_career_id()
            .withf(|career_id| career_id == "c-9")
            .returning(|_| Ok(Vec::new()));

        assert!(handler(repo).list_for_career("c-9").await.unwrap().is_empty());
    }
}
