use async_trait::async_trait;
use once_cell::sync::OnceCell;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use zeroize::Zeroizing;

use crate::{
    db::postgrest::{eq, Filters, PostgrestClient},
    entities::{career::Career, job_application::JobApplication, record::Record},
    errors::StorageError,
    repositories::record::{
        CareerRepository, ContactMessageRepository, JobApplicationRepository, RecordRepository,
    },
    utils::naming::{keys_to_camel, keys_to_snake},
};

/// Remote storage over Supabase. Tables are named after each record's
/// collection and use snake_case columns.
///
/// The HTTP client is built on first use. A store created without a URL or
/// key still constructs; each operation then fails with
/// [`StorageError::Configuration`] before any connection is attempted.
pub struct SupabaseStore {
    url: Option<String>,
    key: Option<Zeroizing<String>>,
    client: OnceCell<PostgrestClient>,
}

impl SupabaseStore {
    pub fn new(url: Option<String>, key: Option<String>) -> Self {
        SupabaseStore {
            url: url.filter(|u| !u.trim().is_empty()),
            key: key.filter(|k| !k.trim().is_empty()).map(Zeroizing::new),
            client: OnceCell::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.key.is_some()
    }

    fn client(&self) -> Result<&PostgrestClient, StorageError> {
        self.client.get_or_try_init(|| {
            let url = self
                .url
                .as_deref()
                .ok_or_else(|| StorageError::Configuration("SUPABASE_URL is not set".into()))?;
            let key = self
                .key
                .as_deref()
                .ok_or_else(|| StorageError::Configuration("SUPABASE_ANON_KEY is not set".into()))?;

            let client = PostgrestClient::new(url, key)?;
            tracing::info!(url, "Supabase client initialised");
            Ok(client)
        })
    }

    async fn select<T: Record>(&self, filters: &Filters<'_>) -> Result<Vec<T>, StorageError> {
        self.client()?
            .select(T::COLLECTION, filters)
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }
}

fn to_row<S: Serialize>(value: &S) -> Result<Value, StorageError> {
    Ok(keys_to_snake(serde_json::to_value(value)?))
}

fn from_row<T: DeserializeOwned>(row: Value) -> Result<T, StorageError> {
    Ok(serde_json::from_value(keys_to_camel(row))?)
}

#[async_trait]
impl<T: Record> RecordRepository<T> for SupabaseStore {
    async fn get_all(&self) -> Result<Vec<T>, StorageError> {
        self.select::<T>(&[]).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<T>, StorageError> {
        Ok(self.select::<T>(&[("id", eq(id))]).await?.into_iter().next())
    }

    async fn add(&self, new: T::New) -> Result<T, StorageError> {
        let client = self.client()?;
        let record = T::create(new);

        let rows = client.insert(T::COLLECTION, &to_row(&record)?).await?;

        match rows.into_iter().next() {
            Some(row) => from_row(row),
            None => Ok(record),
        }
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, StorageError> {
        let client = self.client()?;
        let changes = to_row(&patch)?;

        if changes.as_object().is_none_or(|fields| fields.is_empty()) {
            return <Self as RecordRepository<T>>::get_by_id(self, id).await;
        }

        client
            .update(T::COLLECTION, &[("id", eq(id))], &changes)
            .await?
            .into_iter()
            .next()
            .map(from_row)
            .transpose()
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let removed = self.client()?.delete(T::COLLECTION, &[("id", eq(id))]).await?;
        Ok(!removed.is_empty())
    }
}

#[async_trait]
impl CareerRepository for SupabaseStore {
    async fn get_active(&self) -> Result<Vec<Career>, StorageError> {
        self.select::<Career>(&[("is_active", eq(true))]).await
    }
}

#[async_trait]
impl JobApplicationRepository for SupabaseStore {
    async fn get_by_career_id(&self, career_id: &str) -> Result<Vec<JobApplication>, StorageError> {
        self.select::<JobApplication>(&[("career_id", eq(career_id))]).await
    }
}

#[async_trait]
impl ContactMessageRepository for SupabaseStore {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project::Project;

    #[tokio::test]
    async fn unconfigured_store_fails_every_operation() {
        let store = SupabaseStore::new(None, Some("key".into()));
        assert!(!store.is_configured());

        let result: Result<Vec<Project>, _> = store.get_all().await;
        assert!(matches!(result, Err(StorageError::Configuration(_))));

        let result = RecordRepository::<Project>::delete(&store, "id").await;
        assert!(matches!(result, Err(StorageError::Configuration(_))));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let store = SupabaseStore::new(Some("  ".into()), Some("key".into()));
        assert!(!store.is_configured());
    }
}
