// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Firestore client wrapper with typed bucket list operations.
//!
//! Documents live in the `cities` collection under auto-generated IDs.

use crate::db::{collections, BucketListRepository};
use crate::error::{AppError, Result};
use crate::models::bucket_list::BucketListField;
use crate::models::{Activity, BucketListCity};
use serde::{Deserialize, Serialize};

/// Stored shape of a bucket list city.
///
/// The document ID is never written as a field; Firestore hands it back
/// through `_firestore_id` on reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CityDocument {
    #[serde(alias = "_firestore_id", skip_serializing)]
    id: Option<String>,
    name: String,
    image: String,
    description: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    continent: Option<String>,
    #[serde(default)]
    activities: Vec<Activity>,
    #[serde(default)]
    saved_at: Option<String>,
}

impl From<&BucketListCity> for CityDocument {
    fn from(city: &BucketListCity) -> Self {
        Self {
            id: None,
            name: city.name.clone(),
            image: city.image.clone(),
            description: city.description.clone(),
            latitude: city.latitude,
            longitude: city.longitude,
            country: city.country.clone(),
            continent: city.continent.clone(),
            activities: city.activities.clone(),
            saved_at: city.saved_at.clone(),
        }
    }
}

impl From<CityDocument> for BucketListCity {
    fn from(doc: CityDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            image: doc.image,
            description: doc.description,
            latitude: doc.latitude,
            longitude: doc.longitude,
            country: doc.country,
            continent: doc.continent,
            activities: doc.activities,
            saved_at: doc.saved_at,
        }
    }
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self> {
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore emulator");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Offline client for tests. Every operation returns a database error.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<BucketListCity>> {
        let doc: Option<CityDocument> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::CITIES)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(doc.map(Into::into))
    }
}

impl BucketListRepository for FirestoreDb {
    async fn find_by_place(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<BucketListCity>> {
        let name = name.to_string();
        let docs: Vec<CityDocument> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::CITIES)
            .filter(move |q| {
                q.for_all([
                    q.field("name").eq(name.clone()),
                    q.field("latitude").eq(latitude),
                    q.field("longitude").eq(longitude),
                ])
            })
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(docs.into_iter().next().map(Into::into))
    }

    async fn find_by_field(
        &self,
        field: BucketListField,
        value: &str,
    ) -> Result<Vec<BucketListCity>> {
        let value = value.to_string();
        let docs: Vec<CityDocument> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::CITIES)
            .filter(move |q| q.field(field.as_str()).eq(value.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, city: &BucketListCity) -> Result<String> {
        let doc = CityDocument::from(city);
        let created: CityDocument = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::CITIES)
            .generate_document_id()
            .object(&doc)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        created
            .id
            .ok_or_else(|| AppError::Database("Firestore returned no document ID".to_string()))
    }

    async fn update(&self, id: &str, city: &BucketListCity) -> Result<()> {
        let doc = CityDocument::from(city);
        let _: CityDocument = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::CITIES)
            .document_id(id)
            .object(&doc)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        // Firestore deletes are idempotent; check first so a stale ID is reported.
        if self.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Bucket list city {}", id)));
        }

        self.get_client()?
            .fluent()
            .delete()
            .from(collections::CITIES)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
