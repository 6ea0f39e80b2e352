use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const LIMITER_EVICTION_INTERVAL: Duration = Duration::from_secs(30);
pub const LIMITER_BUCKET_TTL: Duration = Duration::from_secs(15 * 60);

/// Uploaded images and resumes travel inline as data URIs.
pub const MAX_JSON_BODY_BYTES: usize = 10 * 1024 * 1024;
