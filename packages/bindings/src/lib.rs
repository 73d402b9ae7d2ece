use napi::Result as NapiResult;
use napi_derive::napi;

use lcbft_core::interop::envelope::{build_compact_export, build_full_envelope};
use lcbft_core::interop::reconcile::import_payload;
use lcbft_core::scoring::RiskEngine;
use lcbft_core::types::{AssessmentRequest, Validate};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_request(request_json: &str) -> NapiResult<AssessmentRequest> {
    let request: AssessmentRequest =
        serde_json::from_str(request_json).map_err(to_napi_error)?;
    request.validate().map_err(to_napi_error)?;
    Ok(request)
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_risk(request_json: String) -> NapiResult<String> {
    let request = parse_request(&request_json)?;
    let result = RiskEngine::default().evaluate(&request);
    serde_json::to_string(&result).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[napi]
pub fn export_assessment(request_json: String, compact: bool) -> NapiResult<String> {
    let request = parse_request(&request_json)?;
    let result = RiskEngine::default().evaluate(&request);
    if compact {
        serde_json::to_string(&build_compact_export(&result)).map_err(to_napi_error)
    } else {
        serde_json::to_string(&build_full_envelope(Some(&request), &result))
            .map_err(to_napi_error)
    }
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

#[napi]
pub fn import_assessment(payload: String) -> NapiResult<String> {
    let outcome = import_payload(payload.as_bytes()).map_err(to_napi_error)?;
    serde_json::to_string(&outcome).map_err(to_napi_error)
}
