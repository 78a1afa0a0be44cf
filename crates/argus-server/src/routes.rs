use crate::{ApiError, AppState};
use argus_types::{ScreeningOutcome, Verdict};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub system: String,
    pub docs: String,
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        system: "Argus Protocol v1.0".to_string(),
        docs: "https://github.com/VnsObi/argus-protocol".to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScanParams {
    address: Option<String>,
}

pub(crate) async fn scan(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScanParams>,
) -> Result<Json<Verdict>, ApiError> {
    let address = params.address.unwrap_or_default();
    let outcome = state.engines.wallet.screen_wallet(&address).await;
    tracing::info!(%address, outcome = outcome.label(), "scan");
    respond(outcome)
}

/// `value` is optional and defaults to 0.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAssetRequest {
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

pub(crate) async fn verify_asset(
    State(state): State<Arc<AppState>>,
    body: Result<Json<VerifyAssetRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(req) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let asset_id = req.asset_id.unwrap_or_default();
    let issuer = req.issuer.unwrap_or_default();
    let value = req.value.unwrap_or(0.0);

    let outcome = state
        .engines
        .asset
        .verify_asset(&asset_id, &issuer, value)
        .await;
    tracing::info!(%asset_id, %issuer, value, outcome = outcome.label(), "verify-asset");
    respond(outcome)
}

fn respond(outcome: ScreeningOutcome) -> Result<Json<Verdict>, ApiError> {
    match outcome {
        ScreeningOutcome::Verdict(v) => Ok(Json(v)),
        ScreeningOutcome::ValidationFailed(f) => Err(ApiError::Invalid(f)),
        ScreeningOutcome::Unavailable(u) => Err(ApiError::Unavailable(u)),
    }
}
