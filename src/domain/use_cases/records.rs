use std::{marker::PhantomData, sync::Arc};

use validator::ValidationErrors;

use crate::{
    entities::{equipment::Equipment, po_project::PoProject, project::Project, record::Record},
    errors::AppError,
    repositories::record::RecordRepository,
};

pub type ProjectHandler = RecordHandler<Project>;
pub type EquipmentHandler = RecordHandler<Equipment>;
pub type PoProjectHandler = RecordHandler<PoProject>;

/// Validates requests for one record type and runs exactly one storage call
/// per operation, mapping the outcome onto [`AppError`].
pub struct RecordHandler<T, R = dyn RecordRepository<T>>
where
    T: Record,
    R: RecordRepository<T> + ?Sized,
{
    pub repo: Arc<R>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> Clone for RecordHandler<T, R>
where
    T: Record,
    R: RecordRepository<T> + ?Sized,
{
    fn clone(&self) -> Self {
        RecordHandler {
            repo: Arc::clone(&self.repo),
            _record: PhantomData,
        }
    }
}

pub(crate) fn not_found<T: Record>() -> AppError {
    AppError::NotFound(format!("{} not found", T::LABEL))
}

impl<T, R> RecordHandler<T, R>
where
    T: Record,
    R: RecordRepository<T> + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        RecordHandler {
            repo,
            _record: PhantomData,
        }
    }

    /// Lists every record, newest first.
    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        self.repo
            .get_all()
            .await
            .map_err(|e| AppError::storage(e, format!("Failed to fetch {}", T::PLURAL)))
    }

    pub async fn get(&self, id: &str) -> Result<T, AppError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| AppError::storage(e, "Failed to fetch record"))?
            .ok_or_else(not_found::<T>)
    }

    /// Validates the request before storage is touched.
    pub async fn create<Req>(&self, request: Req) -> Result<T, AppError>
    where
        T::New: TryFrom<Req, Error = ValidationErrors>,
    {
        let new = <T::New as TryFrom<Req>>::try_from(request)?;

        let record = self
            .repo
            .add(new)
            .await
            .map_err(|e| AppError::storage(e, "Failed to create record"))?;

        tracing::info!(collection = T::COLLECTION, id = record.id(), "Record created");
        Ok(record)
    }

    /// Applies a partial update. Fields absent from the request are kept.
    pub async fn update<Req>(&self, id: &str, request: Req) -> Result<T, AppError>
    where
        T::Patch: TryFrom<Req, Error = ValidationErrors>,
    {
        let patch = <T::Patch as TryFrom<Req>>::try_from(request)?;
        self.apply(id, patch).await
    }

    pub(crate) async fn apply(&self, id: &str, patch: T::Patch) -> Result<T, AppError> {
        self.repo
            .update(id, patch)
            .await
            .map_err(|e| AppError::storage(e, "Failed to update record"))?
            .ok_or_else(not_found::<T>)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(|e| AppError::storage(e, "Failed to delete record"))?;

        if removed {
            tracing::info!(collection = T::COLLECTION, id, "Record deleted");
            Ok(())
        } else {
            Err(not_found::<T>())
        }
    }
}
