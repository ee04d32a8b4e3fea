//! Reading ingestion endpoint and shared collector state.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use domo_core::{Ack, ReadingPayload};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Latest reading per sensor plus a lifetime counter.
#[derive(Default)]
pub struct IngestState {
    latest: RwLock<HashMap<String, ReadingPayload>>,
    received: AtomicU64,
}

impl IngestState {
    /// Records one payload: bumps the counter and replaces the
    /// sensor's latest reading.
    pub fn record(&self, payload: &ReadingPayload) {
        self.received.fetch_add(1, Ordering::Relaxed);
        self.latest
            .write()
            .unwrap()
            .insert(payload.sensor_id.clone(), payload.clone());
    }

    /// Total number of readings received since startup.
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    /// Latest reading per sensor, ordered by sensor id.
    pub fn snapshot(&self) -> Vec<ReadingPayload> {
        let mut readings: Vec<ReadingPayload> =
            self.latest.read().unwrap().values().cloned().collect();
        readings.sort_by(|a, b| a.sensor_id.cmp(&b.sensor_id));
        readings
    }
}

/// Creates the collector router with all routes.
pub fn create_router(state: Arc<IngestState>) -> Router {
    Router::new()
        .route("/readings", post(submit_reading).get(list_readings))
        .route("/healthz", get(healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// POST /readings - Ingest one reading
async fn submit_reading(
    State(state): State<Arc<IngestState>>,
    Json(payload): Json<ReadingPayload>,
) -> Json<Ack> {
    state.record(&payload);
    info!(
        "Received from sensor {}: {:.2} {}",
        payload.sensor_id, payload.value, payload.sensor_type
    );
    Json(Ack::accepted("reading received"))
}

/// GET /readings - Latest reading per sensor
async fn list_readings(State(state): State<Arc<IngestState>>) -> Json<Vec<ReadingPayload>> {
    Json(state.snapshot())
}

/// GET /healthz - Liveness probe with the lifetime reading count
async fn healthz(State(state): State<Arc<IngestState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "received": state.received(),
    }))
}
