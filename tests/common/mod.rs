// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wanderly::config::Config;
use wanderly::db::{BucketListDb, FirestoreDb, InMemoryBucketList};
use wanderly::routes::create_router;
use wanderly::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

// ─── Mock upstream ───────────────────────────────────────────

/// Request counters and knobs shared with the mock upstream handlers.
pub struct MockState {
    pub token_hits: AtomicUsize,
    pub activity_hits: AtomicUsize,
    pub city_hits: AtomicUsize,
    pub photo_hits: AtomicUsize,
    pub country_hits: AtomicUsize,
    /// Lifetime handed out with each token
    pub expires_in: AtomicI64,
    /// Status the token endpoint answers with
    pub token_status: AtomicU16,
    /// Answer token grants with 200 and a body that does not decode
    pub token_malformed: AtomicBool,
    /// Status the activities endpoint answers with
    pub activities_status: AtomicU16,
    pub last_grant: Mutex<HashMap<String, String>>,
    pub last_authorization: Mutex<Option<String>>,
    pub last_api_key: Mutex<Option<String>>,
    pub last_query: Mutex<HashMap<String, String>>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            token_hits: AtomicUsize::new(0),
            activity_hits: AtomicUsize::new(0),
            city_hits: AtomicUsize::new(0),
            photo_hits: AtomicUsize::new(0),
            country_hits: AtomicUsize::new(0),
            expires_in: AtomicI64::new(1799),
            token_status: AtomicU16::new(200),
            token_malformed: AtomicBool::new(false),
            activities_status: AtomicU16::new(200),
            last_grant: Mutex::new(HashMap::new()),
            last_authorization: Mutex::new(None),
            last_api_key: Mutex::new(None),
            last_query: Mutex::new(HashMap::new()),
        }
    }
}

#[allow(dead_code)]
impl MockState {
    pub fn token_hits(&self) -> usize {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn activity_hits(&self) -> usize {
        self.activity_hits.load(Ordering::SeqCst)
    }

    pub fn city_hits(&self) -> usize {
        self.city_hits.load(Ordering::SeqCst)
    }

    pub fn photo_hits(&self) -> usize {
        self.photo_hits.load(Ordering::SeqCst)
    }

    pub fn country_hits(&self) -> usize {
        self.country_hits.load(Ordering::SeqCst)
    }

    pub fn set_expires_in(&self, secs: i64) {
        self.expires_in.store(secs, Ordering::SeqCst);
    }

    pub fn set_token_status(&self, status: u16) {
        self.token_status.store(status, Ordering::SeqCst);
    }

    pub fn set_token_malformed(&self, malformed: bool) {
        self.token_malformed.store(malformed, Ordering::SeqCst);
    }

    pub fn set_activities_status(&self, status: u16) {
        self.activities_status.store(status, Ordering::SeqCst);
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().unwrap().clone()
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.last_api_key.lock().unwrap().clone()
    }

    pub fn last_query(&self, key: &str) -> Option<String> {
        self.last_query.lock().unwrap().get(key).cloned()
    }

    pub fn last_grant(&self, key: &str) -> Option<String> {
        self.last_grant.lock().unwrap().get(key).cloned()
    }

    fn record(&self, headers: &HeaderMap, query: &HashMap<String, String>) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        *self.last_authorization.lock().unwrap() = header("authorization");
        *self.last_api_key.lock().unwrap() = header("x-api-key");
        *self.last_query.lock().unwrap() = query.clone();
    }
}

/// Local HTTP server standing in for every third-party API.
#[allow(dead_code)]
pub struct MockUpstream {
    pub base_url: String,
    pub state: Arc<MockState>,
}

/// Start the mock upstream on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_mock_upstream() -> MockUpstream {
    let state = Arc::new(MockState::default());

    let app = Router::new()
        .route("/v1/security/oauth2/token", post(mock_token))
        .route("/v1/shopping/activities", get(mock_activities))
        .route("/v1/city", get(mock_cities))
        .route("/v1/search", get(mock_photos))
        .route("/data/v1/countries", get(mock_countries))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("Mock upstream has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    MockUpstream {
        base_url: format!("http://{}", addr),
        state,
    }
}

async fn mock_token(
    State(state): State<Arc<MockState>>,
    Form(grant): Form<HashMap<String, String>>,
) -> Response {
    let n = state.token_hits.fetch_add(1, Ordering::SeqCst) + 1;
    *state.last_grant.lock().unwrap() = grant;

    let status = state.token_status.load(Ordering::SeqCst);
    if status != 200 {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::UNAUTHORIZED);
        return (status, Json(json!({"error": "invalid_client"}))).into_response();
    }

    if state.token_malformed.load(Ordering::SeqCst) {
        return Json(json!({"access_token": 5})).into_response();
    }

    Json(json!({
        "type": "amadeusOAuth2Token",
        "access_token": format!("token-{}", n),
        "expires_in": state.expires_in.load(Ordering::SeqCst),
        "token_type": "Bearer",
        "state": "approved"
    }))
    .into_response()
}

async fn mock_activities(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.activity_hits.fetch_add(1, Ordering::SeqCst);
    state.record(&headers, &query);

    let status = state.activities_status.load(Ordering::SeqCst);
    if status != 200 {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({"errors": [{"title": "mock failure"}]}))).into_response();
    }

    Json(json!({
        "meta": {"count": 4, "links": {"self": "https://mock/v1/shopping/activities"}},
        "data": [
            {
                "id": "A1",
                "name": "Castle tour",
                "shortDescription": "Walk the ancient castle walls",
                "geoCode": {"latitude": 48.86, "longitude": 2.34},
                "price": {"amount": "25.00", "currencyCode": "EUR"},
                "pictures": ["https://images.mock/castle.jpg"],
                "bookingLink": "https://book.mock/A1",
                "minimumDuration": "2 hours"
            },
            {
                "id": "A2",
                "name": "Seine spa",
                "shortDescription": "A peaceful spa afternoon",
                "geoCode": {"latitude": 48.85, "longitude": 2.35}
            },
            {
                "id": "A3",
                "name": "Climbing gym",
                "shortDescription": "Indoor climbing and bouldering",
                "geoCode": {"latitude": 48.87, "longitude": 2.36}
            },
            {
                "id": "A4",
                "name": "Mystery",
                "geoCode": {"latitude": 48.88, "longitude": 2.37}
            }
        ]
    }))
    .into_response()
}

async fn mock_cities(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.city_hits.fetch_add(1, Ordering::SeqCst);
    state.record(&headers, &query);

    match query.get("name").map(String::as_str) {
        Some("Nowhere") => Json(json!([])).into_response(),
        Some("Broken") => Json(json!({"error": "Invalid API Key."})).into_response(),
        Some("Garbled") => Json(json!([{"name": "Garbled"}])).into_response(),
        Some("Down") => (StatusCode::SERVICE_UNAVAILABLE, "upstream down").into_response(),
        _ => Json(json!([{
            "name": "Paris",
            "latitude": 48.8566,
            "longitude": 2.3522,
            "country": "FR",
            "population": 11_020_000u64,
            "is_capital": true
        }]))
        .into_response(),
    }
}

async fn mock_photos(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.photo_hits.fetch_add(1, Ordering::SeqCst);
    state.record(&headers, &query);

    let search = query.get("query").cloned().unwrap_or_default();
    match search.as_str() {
        "Nowhere city" => Json(json!({"photos": []})).into_response(),
        "Broken city" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => {
            let slug = search.replace(' ', "-").to_lowercase();
            Json(json!({
                "page": 1,
                "per_page": 1,
                "photos": [{"id": 1, "src": {"large": format!("https://images.mock/{}.jpg", slug)}}]
            }))
            .into_response()
        }
    }
}

async fn mock_countries(State(state): State<Arc<MockState>>) -> Json<serde_json::Value> {
    state.country_hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "status": "OK",
        "data": {
            "NL": {"country": "Netherlands (the)", "region": "Europe"},
            "FR": {"country": "France", "region": "Europe"},
            "JP": {"country": "Japan", "region": "Asia"},
            "KE": {"country": "Kenya", "region": "Africa"}
        }
    }))
}

/// Config with every upstream pointed at `mock`.
#[allow(dead_code)]
pub fn test_config(mock: &MockUpstream) -> Config {
    Config::test_default().with_upstream_base(&mock.base_url)
}

/// Create a test app backed by the mock upstream and an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(mock: &MockUpstream) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        test_config(mock),
        BucketListDb::Memory(InMemoryBucketList::new()),
    ));
    (create_router(state.clone()), state)
}

/// The in-memory store behind a test app.
#[allow(dead_code)]
pub fn memory_store(state: &AppState) -> &InMemoryBucketList {
    match state.bucket_list.repository() {
        BucketListDb::Memory(db) => db,
        BucketListDb::Firestore(_) => panic!("Test app should use the in-memory store"),
    }
}
