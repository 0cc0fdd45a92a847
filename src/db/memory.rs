// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! In-memory bucket list store for tests and local runs.

use crate::db::BucketListRepository;
use crate::error::{AppError, Result};
use crate::models::bucket_list::BucketListField;
use crate::models::BucketListCity;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// DashMap-backed store keyed by generated UUID.
#[derive(Clone, Default)]
pub struct InMemoryBucketList {
    docs: Arc<DashMap<String, BucketListCity>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryBucketList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<BucketListCity> {
        self.docs.get(id).map(|entry| entry.value().clone())
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl BucketListRepository for InMemoryBucketList {
    async fn find_by_place(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<BucketListCity>> {
        self.record_call();
        Ok(self
            .docs
            .iter()
            .find(|entry| {
                let c = entry.value();
                c.name == name && c.latitude == latitude && c.longitude == longitude
            })
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_field(
        &self,
        field: BucketListField,
        value: &str,
    ) -> Result<Vec<BucketListCity>> {
        self.record_call();
        let mut found: Vec<BucketListCity> = self
            .docs
            .iter()
            .filter(|entry| field.value_of(entry.value()) == Some(value))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn insert(&self, city: &BucketListCity) -> Result<String> {
        self.record_call();
        let id = uuid::Uuid::new_v4().to_string();
        let mut doc = city.clone();
        doc.id = Some(id.clone());
        self.docs.insert(id.clone(), doc);
        Ok(id)
    }

    async fn update(&self, id: &str, city: &BucketListCity) -> Result<()> {
        self.record_call();
        let mut doc = city.clone();
        doc.id = Some(id.to_string());
        self.docs.insert(id.to_string(), doc);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record_call();
        self.docs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Bucket list city {}", id)))
    }
}
