use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Method, RequestBuilder,
};
use serde_json::Value;
use url::Url;
use zeroize::Zeroizing;

use crate::errors::StorageError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub type Filters<'a> = [(&'a str, String)];

/// PostgREST equality filter value, e.g. `eq.42`.
pub fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}

/// Thin client for the Supabase REST endpoint (`/rest/v1/{table}`).
///
/// Rows go in and come out as raw JSON; column naming is the caller's job.
pub struct PostgrestClient {
    http: Client,
    base_url: Url,
    api_key: Zeroizing<String>,
}

impl PostgrestClient {
    pub fn new(url: &str, api_key: &str) -> Result<Self, StorageError> {
        let base_url = Url::parse(url.trim())
            .map_err(|e| StorageError::Configuration(format!("invalid Supabase URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(StorageError::Configuration(format!(
                "Supabase URL cannot be used as a base: {base_url}"
            )));
        }

        let api_key = Zeroizing::new(api_key.trim().to_string());

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
            .map_err(|_| StorageError::Configuration("Supabase key is not a valid header value".into()))?;
        auth_value.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(reqwest::header::AUTHORIZATION, auth_value);
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .default_headers(default_headers)
            .build()?;

        Ok(PostgrestClient {
            http,
            base_url,
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, StorageError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StorageError::Configuration("Supabase URL cannot be used as a base".into()))?
            .pop_if_empty()
            .extend(["rest", "v1", table]);
        Ok(url)
    }

    fn request(&self, method: Method, table: &str, filters: &Filters<'_>) -> Result<RequestBuilder, StorageError> {
        let url = self.table_url(table)?;

        Ok(self
            .http
            .request(method, url)
            .header("apikey", self.api_key.as_str())
            .query(filters))
    }

    /// Sends the request and decodes the row array.
    async fn rows(&self, table: &str, request: RequestBuilder) -> Result<Vec<Value>, StorageError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(table, status = status.as_u16(), "Remote store rejected request");
            return Err(StorageError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Vec<Value>>().await?)
    }

    /// `GET ?select=*&{filters}&order=created_at.desc`
    pub async fn select(&self, table: &str, filters: &Filters<'_>) -> Result<Vec<Value>, StorageError> {
        let request = self
            .request(Method::GET, table, filters)?
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        self.rows(table, request).await
    }

    pub async fn insert(&self, table: &str, row: &Value) -> Result<Vec<Value>, StorageError> {
        let request = self
            .request(Method::POST, table, &[])?
            .header("Prefer", "return=representation")
            .json(row);

        self.rows(table, request).await
    }

    pub async fn update(&self, table: &str, filters: &Filters<'_>, changes: &Value) -> Result<Vec<Value>, StorageError> {
        let request = self
            .request(Method::PATCH, table, filters)?
            .header("Prefer", "return=representation")
            .json(changes);

        self.rows(table, request).await
    }

    /// Returns the deleted rows; empty when nothing matched.
    pub async fn delete(&self, table: &str, filters: &Filters<'_>) -> Result<Vec<Value>, StorageError> {
        let request = self
            .request(Method::DELETE, table, filters)?
            .header("Prefer", "return=representation");

        self.rows(table, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_keeps_base_path() {
        let client = PostgrestClient::new("https://abc.supabase.co/", "anon-key").unwrap();
        assert_eq!(
            client.table_url("po_projects").unwrap().as_str(),
            "https://abc.supabase.co/rest/v1/po_projects"
        );
    }

    #[test]
    fn invalid_url_is_a_configuration_error() {
        let result = PostgrestClient::new("not a url", "anon-key");
        assert!(matches!(result, Err(StorageError::Configuration(_))));
    }

    #[test]
    fn equality_filter_format() {
        assert_eq!(eq("abc-123"), "eq.abc-123");
        assert_eq!(eq(true), "eq.true");
    }
}
