use crate::{
    entities::career::Career,
    errors::AppError,
    repositories::record::CareerRepository,
    use_cases::records::RecordHandler,
};

pub type CareerHandler = RecordHandler<Career, dyn CareerRepository>;

impl<R> RecordHandler<Career, R>
where
    R: CareerRepository + ?Sized,
{
    /// Postings visible on the public careers page.
    pub async fn list_active(&self) -> Result<Vec<Career>, AppError> {
        self.repo
            .get_active()
            .await
            .map_err(|e| AppError::storage(e, "Failed to fetch active careers"))
    }
}
