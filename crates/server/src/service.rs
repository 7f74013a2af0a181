//! Service metadata endpoints.

use std::collections::BTreeMap;

use api_types::service::{Health, ServiceInfo};
use axum::Json;

pub async fn root() -> Json<ServiceInfo> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert(
        "/analytics/summary".to_string(),
        "Overview of fraud statistics".to_string(),
    );
    endpoints.insert(
        "/analytics/categories".to_string(),
        "Fraud distribution by category".to_string(),
    );

    Json(ServiceInfo {
        service: "Fraud Analytics Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}
