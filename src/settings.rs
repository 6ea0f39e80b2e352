use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

/// Where records are persisted.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Supabase,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Supabase => write!(f, "supabase"),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub storage_backend: StorageBackend,

    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default)]
    pub supabase_url: Option<String>,

    #[serde(default)]
    pub supabase_key: Option<String>,

    #[serde(default)]
    pub trust_x_forwarded_for: bool,

    #[serde(default = "default_submission_burst")]
    pub submission_burst: u32,

    #[serde(default = "default_submission_refill_secs")]
    pub submission_refill_secs: u64,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Catalogue-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_submission_burst() -> u32 {
    5
}
fn default_submission_refill_secs() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            cors_allowed_origins: default_cors_origins(),
            storage_backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            supabase_url: None,
            supabase_key: None,
            trust_x_forwarded_for: false,
            submission_burst: default_submission_burst(),
            submission_refill_secs: default_submission_refill_secs(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .try_parsing(true)
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Supabase's own variable names are honoured when APP_* is absent
        config.supabase_url = fill_or_env(config.supabase_url, "SUPABASE_URL");
        config.supabase_key = fill_or_env(config.supabase_key, "SUPABASE_ANON_KEY");

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.data_dir.trim().is_empty() {
            errors.push("DATA_DIR cannot be empty");
        }
        if self.submission_burst == 0 {
            errors.push("SUBMISSION_BURST must be at least 1");
        }
        if self.submission_refill_secs == 0 {
            errors.push("SUBMISSION_REFILL_SECS must be at least 1");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn fill_or_env(current: Option<String>, env_key: &str) -> Option<String> {
    match current {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => env::var(env_key).ok().filter(|v| !v.trim().is_empty()),
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for Option<String> {
    fn redact(&self) -> &str {
        match self.as_deref() {
            None | Some("") => "[MISSING]",
            Some(_) => "[REDACTED]",
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("storage_backend", &self.storage_backend)
            .field("data_dir", &self.data_dir)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &self.supabase_key.redact())
            .field("trust_x_forwarded_for", &self.trust_x_forwarded_for)
            .field("submission_burst", &self.submission_burst)
            .field("submission_refill_secs", &self.submission_refill_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_key() {
        let config = AppConfig {
            supabase_key: Some("super-secret-anon-key".into()),
            ..Default::default()
        };

        let printed = format!("{:?}", config);
        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains("super-secret-anon-key"));
    }

    #[test]
    fn wildcard_cors_is_rejected_in_production() {
        let config = AppConfig {
            env: AppEnvironment::Production,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            env: AppEnvironment::Production,
            cors_allowed_origins: vec!["https://example.com, https://admin.example.com".into()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.cors_origins().len(), 2);
    }

    #[test]
    fn storage_backend_defaults_to_file() {
        assert_eq!(AppConfig::default().storage_backend, StorageBackend::File);
    }
}
