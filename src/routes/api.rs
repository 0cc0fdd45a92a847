// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! JSON API routes for the Wanderly frontend.

use crate::error::{AppError, Result};
use crate::models::{Activity, BucketListCity, BudgetTier, City, Country, Mood};
use crate::services::country::filter_countries;
use crate::services::{infer_budget, infer_mood_tags};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cities", get(get_cities))
        .route("/api/cities/classify", post(classify_city))
        .route("/api/activities", get(get_activities))
        .route("/api/photos", get(get_photo).post(get_photos))
        .route("/api/countries", get(get_countries))
        .route(
            "/api/bucket-list",
            get(get_bucket_list).post(save_bucket_list_city),
        )
        .route("/api/bucket-list/{id}", delete(delete_bucket_list_city))
}

// ─── Cities ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct CitiesQuery {
    #[serde(default)]
    name: String,
}

async fn get_cities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CitiesQuery>,
) -> Result<Json<Vec<City>>> {
    let cities = state.cities.find_cities(&params.name).await?;
    Ok(Json(cities))
}

/// Inferred labels for a city.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct ClassifyResponse {
    pub mood_tags: Vec<Mood>,
    pub budget: BudgetTier,
}

async fn classify_city(Json(city): Json<City>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        mood_tags: infer_mood_tags(&city),
        budget: infer_budget(&city),
    })
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct ActivitiesQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    longitude: f64,
    /// Search radius in km (defaults to the activity client's radius)
    #[validate(range(min = 1, max = 500))]
    radius: Option<u32>,
    mood: Option<Mood>,
}

async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<Activity>>> {
    params.validate()?;

    let activities = state
        .activities
        .find_activities(params.latitude, params.longitude, params.radius, params.mood)
        .await?;
    Ok(Json(activities))
}

// ─── Photos ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct PhotoQuery {
    #[serde(default)]
    city: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct PhotoResponse {
    pub city: String,
    pub url: String,
}

async fn get_photo(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PhotoQuery>,
) -> Result<Json<PhotoResponse>> {
    let url = state
        .photos
        .find_photo(&params.city)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Photo for {}", params.city.trim())))?;

    Ok(Json(PhotoResponse {
        city: params.city.trim().to_string(),
        url,
    }))
}

#[derive(Deserialize, Validate)]
struct PhotoBatchRequest {
    #[validate(length(min = 1, max = 50))]
    cities: Vec<String>,
}

/// Photos for several cities at once. A failed lookup is reported as null.
async fn get_photos(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PhotoBatchRequest>,
) -> Result<Json<HashMap<String, Option<String>>>> {
    request.validate()?;
    Ok(Json(state.photos.find_photos(&request.cities).await))
}

// ─── Countries ───────────────────────────────────────────────

#[derive(Deserialize)]
struct CountriesQuery {
    continent: Option<String>,
    #[serde(default)]
    q: String,
}

async fn get_countries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountriesQuery>,
) -> Result<Json<Vec<Country>>> {
    let countries = state.countries.fetch_countries().await?;
    Ok(Json(filter_countries(
        &countries,
        &params.q,
        params.continent.as_deref(),
    )))
}

// ─── Bucket List ─────────────────────────────────────────────

#[derive(Deserialize)]
struct BucketListQuery {
    field: String,
    value: String,
}

async fn get_bucket_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BucketListQuery>,
) -> Result<Json<Vec<BucketListCity>>> {
    let cities = state
        .bucket_list
        .fetch_all(&params.field, &params.value)
        .await?;
    Ok(Json(cities))
}

/// Save a destination. 201 when a new entry was created, 200 when an
/// existing entry for the same place was overwritten.
async fn save_bucket_list_city(
    State(state): State<Arc<AppState>>,
    Json(city): Json<BucketListCity>,
) -> Result<(StatusCode, Json<crate::services::SaveOutcome>)> {
    city.validate()?;

    let outcome = state.bucket_list.save(&city).await?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome)))
}

async fn delete_bucket_list_city(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.bucket_list.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
