//! Aggregation and classification.

use chrono::{NaiveDate, Utc};

use crate::registry::RiskRegistry;
use crate::scoring::{client, geographic, product_service, recommendations};
use crate::types::{AssessmentRequest, AssessmentResult, RiskLevel};

/// Maps a total score to its risk tier. Inclusive upper bounds, integer
/// thresholds only; negative totals fall through to the lowest tier.
pub fn classify(total: i32) -> RiskLevel {
    if total <= 3 {
        RiskLevel::Faible
    } else if total <= 6 {
        RiskLevel::Modere
    } else if total <= 10 {
        RiskLevel::Eleve
    } else {
        RiskLevel::TresEleve
    }
}

/// The scoring pipeline: three independent evaluators over an immutable
/// registry, summed and classified. Evaluation is total — every well-typed
/// request yields a result.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    registry: RiskRegistry,
    assessment_date: NaiveDate,
}

impl RiskEngine {
    pub fn new(registry: RiskRegistry) -> Self {
        Self::with_assessment_date(registry, Utc::now().date_naive())
    }

    /// Fixed assessment date, for reproducible age and entity-age rules.
    pub fn with_assessment_date(registry: RiskRegistry, assessment_date: NaiveDate) -> Self {
        RiskEngine {
            registry,
            assessment_date,
        }
    }

    pub fn registry(&self) -> &RiskRegistry {
        &self.registry
    }

    pub fn evaluate(&self, request: &AssessmentRequest) -> AssessmentResult {
        let geo = geographic::evaluate_geographic(&self.registry, &request.geographic);
        let product = product_service::evaluate_product_service(
            &self.registry,
            &request.client,
            &request.transaction,
        );
        let client = client::evaluate_client(&request.client, self.assessment_date);

        let total_score = geo.score + product.score + client.score;
        let risk_level = classify(total_score);
        let recommendations = recommendations::recommendations_for(risk_level);

        AssessmentResult {
            geographic: geo,
            product_service: product,
            client,
            total_score,
            risk_level,
            recommendations,
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        RiskEngine::new(RiskRegistry::default())
    }
}
