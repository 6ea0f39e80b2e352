use std::sync::Arc;

use crate::{
    entities::{equipment::Equipment, po_project::PoProject, project::Project},
    repositories::{
        json_file::JsonFileStore,
        record::{CareerRepository, ContactMessageRepository, JobApplicationRepository, RecordRepository},
        supabase_repo::SupabaseStore,
    },
    settings::{AppConfig, StorageBackend},
};

/// One storage handle per record type, all backed by the same store.
#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: Arc<dyn RecordRepository<Project>>,
    pub equipment_repo: Arc<dyn RecordRepository<Equipment>>,
    pub po_project_repo: Arc<dyn RecordRepository<PoProject>>,
    pub career_repo: Arc<dyn CareerRepository>,
    pub application_repo: Arc<dyn JobApplicationRepository>,
    pub contact_repo: Arc<dyn ContactMessageRepository>,
}

impl SharedRepositories {
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: RecordRepository<Project>
            + RecordRepository<Equipment>
            + RecordRepository<PoProject>
            + CareerRepository
            + JobApplicationRepository
            + ContactMessageRepository
            + 'static,
    {
        SharedRepositories {
            project_repo: store.clone(),
            equipment_repo: store.clone(),
            po_project_repo: store.clone(),
            career_repo: store.clone(),
            application_repo: store.clone(),
            contact_repo: store,
        }
    }

    /// Picks the backend named by `storage_backend`.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.storage_backend {
            StorageBackend::File => {
                tracing::info!(data_dir = %config.data_dir, "Using JSON file storage");
                Self::from_store(Arc::new(JsonFileStore::new(&config.data_dir)))
            }
            StorageBackend::Supabase => {
                let store = SupabaseStore::new(config.supabase_url.clone(), config.supabase_key.clone());
                if !store.is_configured() {
                    tracing::warn!("Supabase storage selected but SUPABASE_URL or SUPABASE_ANON_KEY is missing");
                }
                Self::from_store(Arc::new(store))
            }
        }
    }
}
