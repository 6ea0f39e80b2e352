use std::time::Duration;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, limiter, utils};

use limiter::rate_limiter::RateLimiterStore;
use settings::{AppConfig, StorageBackend};
use shared_repos::SharedRepositories;
use use_cases::{
    applications::JobApplicationHandler,
    careers::CareerHandler,
    contact::ContactMessageHandler,
    records::{EquipmentHandler, PoProjectHandler, ProjectHandler},
};

pub struct AppState {
    pub project_handler: ProjectHandler,
    pub equipment_handler: EquipmentHandler,
    pub po_project_handler: PoProjectHandler,
    pub career_handler: CareerHandler,
    pub application_handler: JobApplicationHandler,
    pub contact_handler: ContactMessageHandler,
    pub submission_limiter: RateLimiterStore,
    pub storage_backend: StorageBackend,
    pub trust_x_forwarded_for: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_repositories(SharedRepositories::from_config(config), config)
    }

    pub fn with_repositories(repos: SharedRepositories, config: &AppConfig) -> Self {
        let submission_limiter = RateLimiterStore::new(
            config.submission_burst,
            Duration::from_secs(config.submission_refill_secs),
        );

        AppState {
            project_handler: ProjectHandler::new(repos.project_repo),
            equipment_handler: EquipmentHandler::new(repos.equipment_repo),
            po_project_handler: PoProjectHandler::new(repos.po_project_repo),
            career_handler: CareerHandler::new(repos.career_repo),
            application_handler: JobApplicationHandler::new(repos.application_repo),
            contact_handler: ContactMessageHandler::new(repos.contact_repo),
            submission_limiter,
            storage_backend: config.storage_backend,
            trust_x_forwarded_for: config.trust_x_forwarded_for,
        }
    }
}
