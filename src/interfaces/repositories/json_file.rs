use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    entities::{
        career::Career,
        job_application::JobApplication,
        record::{sort_newest_first, Record},
    },
    errors::StorageError,
    repositories::record::{
        CareerRepository, ContactMessageRepository, JobApplicationRepository, RecordRepository,
    },
};

/// Local storage: one pretty-printed JSON array per record type, e.g.
/// `data/projects.json`.
///
/// Reads are fail-soft: a missing file is an empty collection, and an
/// unreadable one is logged and served as empty. Writes are fail-loud: a
/// mutation never overwrites a file it could not parse.
pub struct JsonFileStore {
    base_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            base_dir: base_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn collection_path<T: Record>(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", T::COLLECTION))
    }

    fn load<T: Record>(&self) -> Result<Vec<T>, StorageError> {
        let path = self.collection_path::<T>();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: path.display().to_string(),
            source,
        })
    }

    fn read_soft<T: Record>(&self) -> Vec<T> {
        match self.load::<T>() {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    collection = T::COLLECTION,
                    error = %e,
                    "Failed to read collection, serving it as empty"
                );
                Vec::new()
            }
        }
    }

    /// Writes to a sibling temp file and renames it over the target.
    fn persist<T: Record>(&self, records: &[T]) -> Result<(), StorageError> {
        let path = self.collection_path::<T>();
        let io_error = |source: std::io::Error| StorageError::Io {
            path: path.display().to_string(),
            source,
        };

        fs::create_dir_all(&self.base_dir).map_err(io_error)?;

        let json = serde_json::to_string_pretty(records)?;
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, json).map_err(io_error)?;
        fs::rename(&tmp_path, &path).map_err(io_error)?;

        Ok(())
    }

    /// Read-modify-write under the store lock. `change` returns its result
    /// and whether the collection must be rewritten.
    fn mutate<T, R>(&self, change: impl FnOnce(&mut Vec<T>) -> (R, bool)) -> Result<R, StorageError>
    where
        T: Record,
    {
        let _guard = self.write_lock.lock();

        let mut records = self.load::<T>()?;
        let (result, dirty) = change(&mut records);

        if dirty {
            self.persist(&records)?;
        }

        Ok(result)
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for JsonFileStore {
    async fn get_all(&self) -> Result<Vec<T>, StorageError> {
        let mut records = self.read_soft::<T>();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<T>, StorageError> {
        Ok(self.read_soft::<T>().into_iter().find(|r| r.id() == id))
    }

    async fn add(&self, new: T::New) -> Result<T, StorageError> {
        let record = T::create(new);

        self.mutate(|records: &mut Vec<T>| {
            records.push(record.clone());
            ((), true)
        })?;

        tracing::debug!(collection = T::COLLECTION, id = record.id(), "Record added");
        Ok(record)
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, StorageError> {
        self.mutate(|records: &mut Vec<T>| match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply_patch(patch);
                (Some(record.clone()), true)
            }
            None => (None, false),
        })
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        self.mutate(|records: &mut Vec<T>| {
            let before = records.len();
            records.retain(|r| r.id() != id);
            let removed = records.len() < before;
            (removed, removed)
        })
    }
}

#[async_trait]
impl CareerRepository for JsonFileStore {
    async fn get_active(&self) -> Result<Vec<Career>, StorageError> {
        let careers = <Self as RecordRepository<Career>>::get_all(self).await?;
        Ok(careers.into_iter().filter(|c| c.is_active).collect())
    }
}

#[async_trait]
impl JobApplicationRepository for JsonFileStore {
    async fn get_by_career_id(&self, career_id: &str) -> Result<Vec<JobApplication>, StorageError> {
        let applications = <Self as RecordRepository<JobApplication>>::get_all(self).await?;
        Ok(applications
            .into_iter()
            .filter(|a| a.career_id == career_id)
            .collect())
    }
}

#[async_trait]
impl ContactMessageRepository for JsonFileStore {}
