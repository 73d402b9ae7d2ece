//! Import reconciliation: disambiguate which known export shape a payload
//! matches and normalize it. Shapes are tried in priority order — full
//! envelope, bare request, compact export — and the first validating match
//! wins. Read-only: nothing in the payload is ever executed.

use serde::Serialize;
use serde_json::Value;

use crate::error::LcbftError;
use crate::interop::envelope::{CompactExport, FullEnvelope, APPLICATION_ID};
use crate::interop::secure;
use crate::types::{AssessmentRequest, AssessmentResult, RiskScore};
use crate::LcbftResult;

/// Warning attached to results rebuilt from the compact format.
pub const RECONSTRUCTION_WARNING: &str =
    "Recommendations unavailable — result reconstructed from the compact export format; \
     factor categorisation is approximate";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ImportOutcome {
    /// A request to re-open in the editor; no result was carried.
    RequestOnly { request: AssessmentRequest },
    /// A complete assessment, with the originating request when exported.
    FullResult {
        result: AssessmentResult,
        request: Option<AssessmentRequest>,
    },
    /// Best-effort rebuild from the compact format; lossy by nature.
    ReconstructedResult {
        result: AssessmentResult,
        warning: String,
    },
}

// Vocabulary for partitioning compact key_factors back into categories.
// Matched against the wording this crate emits in justifications;
// case-insensitive substring match, checked geographic → product → client.
const GEO_KEYWORDS: &[&str] = &[
    "resident", "residence", "account", "country", "catchment", "abroad", "geographic",
];
const PRODUCT_KEYWORDS: &[&str] = &[
    "sector",
    "amount",
    "payment",
    "cash",
    "cheque",
    "card",
    "crypto",
    "wire",
    "arrangement",
    "transaction",
];

fn matches_any(factor: &str, keywords: &[&str]) -> bool {
    let lower = factor.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Split a mixed factor list into (geographic, product/service, client)
/// justification lists. Factors matching no vocabulary land in the client
/// bucket — the behavioral catch-all.
fn partition_key_factors(factors: &[String]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut geo = Vec::new();
    let mut product = Vec::new();
    let mut client = Vec::new();

    for factor in factors {
        if matches_any(factor, GEO_KEYWORDS) {
            geo.push(factor.clone());
        } else if matches_any(factor, PRODUCT_KEYWORDS) {
            product.push(factor.clone());
        } else {
            client.push(factor.clone());
        }
    }

    (geo, product, client)
}

fn reconstruct_from_compact(compact: CompactExport) -> AssessmentResult {
    let (geo, product, client) = partition_key_factors(&compact.key_factors);
    AssessmentResult {
        geographic: RiskScore {
            score: compact.scores.geographic,
            justifications: geo,
        },
        product_service: RiskScore {
            score: compact.scores.product_service,
            justifications: product,
        },
        client: RiskScore {
            score: compact.scores.client,
            justifications: client,
        },
        total_score: compact.total_score,
        risk_level: compact.risk_level,
        recommendations: Vec::new(),
    }
}

fn try_full_envelope(value: &Value) -> Option<ImportOutcome> {
    let envelope: FullEnvelope = secure::typed_from_value(value.clone()).ok()?;
    if envelope.metadata.application != APPLICATION_ID {
        return None;
    }
    Some(ImportOutcome::FullResult {
        result: envelope.to_result(),
        request: envelope.evaluation_request,
    })
}

fn try_bare_request(value: &Value) -> Option<ImportOutcome> {
    let request: AssessmentRequest = secure::typed_from_value(value.clone()).ok()?;
    Some(ImportOutcome::RequestOnly { request })
}

fn try_compact(value: &Value) -> Option<ImportOutcome> {
    let compact: CompactExport = secure::typed_from_value(value.clone()).ok()?;
    Some(ImportOutcome::ReconstructedResult {
        result: reconstruct_from_compact(compact),
        warning: RECONSTRUCTION_WARNING.to_string(),
    })
}

/// Decode an untrusted payload and normalize it into one of the known
/// import outcomes. Size, syntax and key-filter errors propagate from the
/// secure decode stage; a payload matching no shape fails
/// `UnrecognizedFormat`.
pub fn import_payload(bytes: &[u8]) -> LcbftResult<ImportOutcome> {
    let value = secure::decode(bytes)?;

    if let Some(outcome) = try_full_envelope(&value) {
        return Ok(outcome);
    }
    if let Some(outcome) = try_bare_request(&value) {
        return Ok(outcome);
    }
    if let Some(outcome) = try_compact(&value) {
        return Ok(outcome);
    }

    Err(LcbftError::UnrecognizedFormat)
}
