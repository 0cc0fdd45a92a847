// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Database layer (Firestore, with an in-memory stand-in).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::InMemoryBucketList;

use crate::error::Result;
use crate::models::bucket_list::BucketListField;
use crate::models::BucketListCity;
use std::future::Future;

/// Collection names as constants.
pub mod collections {
    /// Saved bucket list destinations
    pub const CITIES: &str = "cities";
}

/// Document operations the bucket list needs from a store.
pub trait BucketListRepository: Send + Sync {
    /// Exact match on name, latitude and longitude.
    fn find_by_place(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<Option<BucketListCity>>> + Send;

    /// Exact match on a single field.
    fn find_by_field(
        &self,
        field: BucketListField,
        value: &str,
    ) -> impl Future<Output = Result<Vec<BucketListCity>>> + Send;

    /// Add a new document and return its generated ID.
    fn insert(&self, city: &BucketListCity) -> impl Future<Output = Result<String>> + Send;

    /// Overwrite the document with the given ID.
    fn update(&self, id: &str, city: &BucketListCity) -> impl Future<Output = Result<()>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Store selected at startup.
#[derive(Clone)]
pub enum BucketListDb {
    Firestore(FirestoreDb),
    Memory(InMemoryBucketList),
}

impl BucketListRepository for BucketListDb {
    async fn find_by_place(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<BucketListCity>> {
        match self {
            BucketListDb::Firestore(db) => db.find_by_place(name, latitude, longitude).await,
            BucketListDb::Memory(db) => db.find_by_place(name, latitude, longitude).await,
        }
    }

    async fn find_by_field(
        &self,
        field: BucketListField,
        value: &str,
    ) -> Result<Vec<BucketListCity>> {
        match self {
            BucketListDb::Firestore(db) => db.find_by_field(field, value).await,
            BucketListDb::Memory(db) => db.find_by_field(field, value).await,
        }
    }

    async fn insert(&self, city: &BucketListCity) -> Result<String> {
        match self {
            BucketListDb::Firestore(db) => db.insert(city).await,
            BucketListDb::Memory(db) => db.insert(city).await,
        }
    }

    async fn update(&self, id: &str, city: &BucketListCity) -> Result<()> {
        match self {
            BucketListDb::Firestore(db) => db.update(id, city).await,
            BucketListDb::Memory(db) => db.update(id, city).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        match self {
            BucketListDb::Firestore(db) => db.delete(id).await,
            BucketListDb::Memory(db) => db.delete(id).await,
        }
    }
}
