use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::errors::{INVALID_SITE_COUNT_MESSAGE, MISSING_FIELDS_MESSAGE};

/// A site count as clients send it: the admin form posts a string,
/// scripted clients post a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SiteCount {
    Number(i64),
    Text(String),
}

impl SiteCount {
    /// Non-negative integer value, if the input is one.
    pub fn value(&self) -> Option<u32> {
        match self {
            SiteCount::Number(n) => u32::try_from(*n).ok(),
            SiteCount::Text(s) => s.trim().parse::<u32>().ok(),
        }
    }
}

pub fn validate_site_count(count: &SiteCount) -> Result<(), ValidationError> {
    match count.value() {
        Some(_) => Ok(()),
        None => Err(new_validation_error("site_count", INVALID_SITE_COUNT_MESSAGE)),
    }
}

/// Present but whitespace-only counts as missing.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", MISSING_FIELDS_MESSAGE));
    }
    Ok(())
}

/// Treats an empty optional string as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
