// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Bucket list persistence with dedup by name and coordinates.

use crate::db::BucketListRepository;
use crate::error::{AppError, Result};
use crate::models::bucket_list::BucketListField;
use crate::models::BucketListCity;
use crate::time_utils::format_utc_rfc3339;
use serde::Serialize;

/// Result of a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub id: String,
    /// False when an existing entry for the same place was overwritten.
    pub created: bool,
}

/// Saves, lists and deletes bucket list destinations.
#[derive(Clone)]
pub struct BucketListStore<R> {
    repo: R,
}

impl<R: BucketListRepository> BucketListStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Save a destination.
    ///
    /// An entry with the same name and exact coordinates is overwritten in
    /// place; otherwise a new entry is inserted. Returns the entry's ID.
    pub async fn save(&self, city: &BucketListCity) -> Result<SaveOutcome> {
        let mut doc = city.clone();
        doc.saved_at = Some(format_utc_rfc3339(chrono::Utc::now()));

        let existing = self
            .repo
            .find_by_place(&city.name, city.latitude, city.longitude)
            .await?;

        match existing.and_then(|c| c.id) {
            Some(id) => {
                doc.id = Some(id.clone());
                self.repo.update(&id, &doc).await?;
                tracing::info!(id = %id, name = %city.name, "Bucket list city updated");
                Ok(SaveOutcome { id, created: false })
            }
            None => {
                doc.id = None;
                let id = self.repo.insert(&doc).await?;
                tracing::info!(
                    id = %id,
                    name = %city.name,
                    activities = doc.activities.len(),
                    "Bucket list city added"
                );
                Ok(SaveOutcome { id, created: true })
            }
        }
    }

    /// Delete a saved destination. A city without an ID was never saved,
    /// so nothing is sent to the store.
    pub async fn delete(&self, city: &BucketListCity) -> Result<()> {
        let Some(id) = city.id.as_deref() else {
            tracing::warn!(name = %city.name, "Delete requested for unsaved city");
            return Err(AppError::NotFound(format!(
                "Bucket list city '{}' has no ID",
                city.name
            )));
        };
        self.delete_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await?;
        tracing::info!(id, "Bucket list city deleted");
        Ok(())
    }

    /// Saved destinations where `field` equals `value`.
    ///
    /// Only name, country and continent are searchable.
    pub async fn fetch_all(&self, field: &str, value: &str) -> Result<Vec<BucketListCity>> {
        let Some(field) = BucketListField::parse(field) else {
            tracing::warn!(field, "Rejected bucket list query on unknown field");
            return Err(AppError::Validation(format!(
                "Cannot filter bucket list by '{}'",
                field
            )));
        };

        self.repo.find_by_field(field, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryBucketList;
    use crate::models::Activity;

    fn store() -> BucketListStore<InMemoryBucketList> {
        BucketListStore::new(InMemoryBucketList::new())
    }

    #[tokio::test]
    async fn test_save_new_place_inserts_once() {
        let store = store();
        let paris = BucketListCity::new("Paris", 48.8566, 2.3522);

        let outcome = store.save(&paris).await.unwrap();

        assert!(outcome.created);
        assert_eq!(store.repository().len(), 1);
        let saved = store.repository().get(&outcome.id).unwrap();
        assert_eq!(saved.id.as_deref(), Some(outcome.id.as_str()));
        assert!(saved.saved_at.is_some());
    }

    #[tokio::test]
    async fn test_save_same_place_updates_existing() {
        let store = store();
        let first = store
            .save(&BucketListCity::new("Paris", 48.8566, 2.3522))
            .await
            .unwrap();

        let mut again = BucketListCity::new("Paris", 48.8566, 2.3522);
        again.description = "City of Light".to_string();
        again.activities = vec![Activity::described("1", "Louvre", "Museum visit")];
        let second = store.save(&again).await.unwrap();

        assert!(!second.created);
        assert_eq!(second.id, first.id);
        assert_eq!(store.repository().len(), 1);

        let saved = store.repository().get(&first.id).unwrap();
        assert_eq!(saved.description, "City of Light");
        assert_eq!(saved.activities.len(), 1);
    }

    #[tokio::test]
    async fn test_save_different_coordinates_creates_new_entry() {
        let store = store();
        store
            .save(&BucketListCity::new("Paris", 48.8566, 2.3522))
            .await
            .unwrap();
        let texas = store
            .save(&BucketListCity::new("Paris", 33.6609, -95.5555))
            .await
            .unwrap();

        assert!(texas.created);
        assert_eq!(store.repository().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_without_id_skips_store() {
        let store = store();
        let unsaved = BucketListCity::new("Rome", 41.9, 12.5);

        let err = store.delete(&unsaved).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.repository().calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let store = store();
        let outcome = store
            .save(&BucketListCity::new("Rome", 41.9, 12.5))
            .await
            .unwrap();

        let mut saved = BucketListCity::new("Rome", 41.9, 12.5);
        saved.id = Some(outcome.id.clone());
        store.delete(&saved).await.unwrap();

        assert!(store.repository().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_filters_by_field() {
        let store = store();
        let mut kyoto = BucketListCity::new("Kyoto", 35.01, 135.77);
        kyoto.country = Some("Japan".to_string());
        kyoto.continent = Some("Asia".to_string());
        let mut lyon = BucketListCity::new("Lyon", 45.76, 4.84);
        lyon.country = Some("France".to_string());
        lyon.continent = Some("Europe".to_string());
        store.save(&kyoto).await.unwrap();
        store.save(&lyon).await.unwrap();

        let asia = store.fetch_all("continent", "Asia").await.unwrap();
        assert_eq!(asia.len(), 1);
        assert_eq!(asia[0].name, "Kyoto");

        let by_name = store.fetch_all("name", "Lyon").await.unwrap();
        assert_eq!(by_name.len(), 1);

        assert!(store.fetch_all("country", "Peru").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_rejects_unknown_field() {
        let store = store();
        let err = store.fetch_all("population", "100").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.repository().calls(), 0);
    }
}
