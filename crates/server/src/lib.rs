use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod analytics;
mod server;
mod service;

pub mod types {
    pub mod analytics {
        pub use api_types::analytics::{CategoryStat, FraudByCategory, FraudSummary};
    }

    pub mod service {
        pub use api_types::service::{Health, ServiceInfo};
    }
}

/// Errors the HTTP layer can return.
///
/// Every aggregator failure maps to a 500 carrying the error message in a
/// `detail` field; no retries happen at this tier.
pub enum ServerError {
    Engine(EngineError),
}

#[derive(Serialize)]
struct Detail {
    detail: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let ServerError::Engine(err) = self;
        let EngineError::Database(db_err) = &err;
        tracing::error!("data access failed: {db_err}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Detail {
                detail: err.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn engine_error_maps_to_500_with_detail() {
        let err = ServerError::from(EngineError::Database(DbErr::Custom(
            "store unreachable".to_string(),
        )));
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Custom Error: store unreachable");
    }
}
