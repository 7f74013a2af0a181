//! Analytics API endpoints.

use api_types::analytics::{CategoryStat, FraudByCategory, FraudSummary};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for overall fraud statistics.
pub async fn summary(
    State(state): State<ServerState>,
) -> Result<Json<FraudSummary>, ServerError> {
    let summary = state.engine.fraud_summary().await?;

    Ok(Json(FraudSummary {
        success: true,
        total_transactions: summary.total_transactions,
        fraud_transactions: summary.fraud_transactions,
        fraud_percentage: summary.fraud_percentage,
        avg_fraud_probability: summary.avg_fraud_probability,
    }))
}

/// Handle requests for the per-category fraud breakdown.
pub async fn categories(
    State(state): State<ServerState>,
) -> Result<Json<FraudByCategory>, ServerError> {
    let breakdown = state.engine.fraud_by_category().await?;

    Ok(Json(FraudByCategory {
        success: true,
        total_fraud: breakdown.total_fraud,
        categories: breakdown
            .categories
            .into_iter()
            .map(|group| CategoryStat {
                category: group.category,
                count: group.count,
                percentage: group.percentage,
                avg_amount: group.avg_amount,
            })
            .collect(),
    }))
}
