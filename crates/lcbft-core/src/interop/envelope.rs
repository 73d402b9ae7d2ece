//! Export envelope shapes: the full named-field format and the compact
//! flat format. These are the exact structures the reconciler re-imports.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::LcbftError;
use crate::scoring::recommendations::strip_markup;
use crate::types::{AssessmentRequest, AssessmentResult, RiskLevel, RiskScore, Validate};
use crate::LcbftResult;

/// Product identifier stamped into every export; imports are only treated
/// as full envelopes when this matches.
pub const APPLICATION_ID: &str = "LCBFT Risk Assessment";

const SCORING_SYSTEM: &str = "Additive rule scoring, four-tier classification";
const DISCLAIMER: &str =
    "Decision-support output — does not constitute a regulatory compliance undertaking";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub application: String,
    pub version: String,
    /// ISO-8601 generation timestamp.
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub risk_level: RiskLevel,
    pub risk_level_fr: String,
    pub total_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_system: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSections {
    pub overall: OverallAssessment,
    pub geographic_risk: RiskScore,
    pub product_service_risk: RiskScore,
    pub client_risk: RiskScore,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullEnvelope {
    pub metadata: ExportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_request: Option<AssessmentRequest>,
    pub risk_assessment_results: AssessmentSections,
}

impl FullEnvelope {
    /// Rebuild the result object carried by the envelope.
    pub fn to_result(&self) -> AssessmentResult {
        let sections = &self.risk_assessment_results;
        AssessmentResult {
            geographic: sections.geographic_risk.clone(),
            product_service: sections.product_service_risk.clone(),
            client: sections.client_risk.clone(),
            total_score: sections.overall.total_score,
            risk_level: sections.overall.risk_level,
            recommendations: sections.recommendations.clone(),
        }
    }
}

impl Validate for FullEnvelope {
    fn validate(&self) -> LcbftResult<()> {
        if self.metadata.application.trim().is_empty() {
            return Err(LcbftError::SchemaViolation(
                "metadata.application must not be empty".to_string(),
            ));
        }
        if let Some(request) = &self.evaluation_request {
            request.validate()?;
        }
        self.to_result().validate()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompactScores {
    pub geographic: i32,
    pub product_service: i32,
    pub client: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompactExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub risk_level: RiskLevel,
    pub total_score: i32,
    pub scores: CompactScores,
    /// Flattened justification trail, all three categories mixed.
    pub key_factors: Vec<String>,
}

impl Validate for CompactExport {
    fn validate(&self) -> LcbftResult<()> {
        let sum = self.scores.geographic + self.scores.product_service + self.scores.client;
        if self.total_score != sum {
            return Err(LcbftError::SchemaViolation(format!(
                "total_score {} does not equal the sum of sub-scores {}",
                self.total_score, sum
            )));
        }
        Ok(())
    }
}

/// Full export: metadata, the originating request when available, and the
/// complete per-category breakdown. Recommendation markup is stripped so
/// the file renders cleanly outside rich viewers.
pub fn build_full_envelope(
    request: Option<&AssessmentRequest>,
    result: &AssessmentResult,
) -> FullEnvelope {
    FullEnvelope {
        metadata: ExportMetadata {
            application: APPLICATION_ID.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            disclaimer: Some(DISCLAIMER.to_string()),
        },
        evaluation_request: request.cloned(),
        risk_assessment_results: AssessmentSections {
            overall: OverallAssessment {
                risk_level: result.risk_level,
                risk_level_fr: result.risk_level.label_fr().to_string(),
                total_score: result.total_score,
                scoring_system: Some(SCORING_SYSTEM.to_string()),
            },
            geographic_risk: result.geographic.clone(),
            product_service_risk: result.product_service.clone(),
            client_risk: result.client.clone(),
            recommendations: result
                .recommendations
                .iter()
                .map(|r| strip_markup(r))
                .collect(),
        },
    }
}

/// Compact export: flat scores plus the mixed factor list, category
/// structure and recommendations dropped.
pub fn build_compact_export(result: &AssessmentResult) -> CompactExport {
    let mut key_factors = Vec::new();
    key_factors.extend(result.geographic.justifications.iter().cloned());
    key_factors.extend(result.product_service.justifications.iter().cloned());
    key_factors.extend(result.client.justifications.iter().cloned());

    CompactExport {
        generated_at: Some(Utc::now().to_rfc3339()),
        risk_level: result.risk_level,
        total_score: result.total_score,
        scores: CompactScores {
            geographic: result.geographic.score,
            product_service: result.product_service.score,
            client: result.client.score,
        },
        key_factors,
    }
}
