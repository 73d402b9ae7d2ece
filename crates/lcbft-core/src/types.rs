use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LcbftError;
use crate::LcbftResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Four-tier risk classification used across scoring, export and import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "FAIBLE")]
    Faible,
    #[serde(rename = "MODERE")]
    Modere,
    #[serde(rename = "ELEVE")]
    Eleve,
    #[serde(rename = "TRES_ELEVE")]
    TresEleve,
}

impl RiskLevel {
    /// French display label carried in exported envelopes.
    pub fn label_fr(&self) -> &'static str {
        match self {
            RiskLevel::Faible => "Faible",
            RiskLevel::Modere => "Modéré",
            RiskLevel::Eleve => "Élevé",
            RiskLevel::TresEleve => "Très élevé",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    NaturalPerson,
    LegalEntity,
}

/// Optional client taxonomy tag. Carried through export/import but not
/// scored directly; the flags and sector code drive the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientCategory {
    Standard,
    Npo,
    Pep,
    Sanctions,
    TransferMonitoring,
    WealthManagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Wire,
    Cheque,
    Card,
    Cash,
    Split,
    InternationalWire,
    Crypto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_type: ClientType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ClientCategory>,
    /// NAF activity code, looked up in the sector registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_code: Option<String>,
    /// Legal entities only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_date: Option<NaiveDate>,
    /// Natural persons only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    pub pep: bool,
    pub sanctions: bool,
    pub adverse_media: bool,
    pub identification_reluctance: bool,
    /// Whole years since the business relationship was established.
    pub relationship_years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographicProfile {
    pub residence_country: String,
    pub account_country: String,
    /// Distance from the servicing establishment, in km.
    pub distance_km: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionProfile {
    pub amount: Money,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Complex legal arrangement obscuring the beneficial owner.
    pub complex_arrangement: bool,
}

/// The unit the engine scores; also the importable "bare request" shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub client: ClientProfile,
    pub geographic: GeographicProfile,
    pub transaction: TransactionProfile,
}

/// One evaluator's contribution: an integer score (the relationship bonus
/// may take it negative) plus the justification trail in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    pub score: i32,
    pub justifications: Vec<String>,
}

/// Final assessment. Immutable once produced; `total_score` always equals
/// the sum of the three sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub geographic: RiskScore,
    pub product_service: RiskScore,
    pub client: RiskScore,
    pub total_score: i32,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Value-level checks applied after structural decoding. Mirrors the range
/// constraints the export schema promises (non-negative amounts, plausible
/// birth years).
pub trait Validate {
    fn validate(&self) -> LcbftResult<()>;
}

impl Validate for ClientProfile {
    fn validate(&self) -> LcbftResult<()> {
        if let Some(year) = self.birth_year {
            let current = Utc::now().year();
            if !(1900..=current).contains(&year) {
                return Err(LcbftError::SchemaViolation(format!(
                    "birth_year {} outside [1900, {}]",
                    year, current
                )));
            }
        }
        Ok(())
    }
}

impl Validate for GeographicProfile {
    fn validate(&self) -> LcbftResult<()> {
        if self.residence_country.trim().is_empty() {
            return Err(LcbftError::SchemaViolation(
                "residence_country must not be empty".to_string(),
            ));
        }
        if self.account_country.trim().is_empty() {
            return Err(LcbftError::SchemaViolation(
                "account_country must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for TransactionProfile {
    fn validate(&self) -> LcbftResult<()> {
        if self.amount < Decimal::ZERO {
            return Err(LcbftError::SchemaViolation(
                "amount must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for AssessmentRequest {
    fn validate(&self) -> LcbftResult<()> {
        self.client.validate()?;
        self.geographic.validate()?;
        self.transaction.validate()
    }
}

impl Validate for AssessmentResult {
    fn validate(&self) -> LcbftResult<()> {
        let sum = self.geographic.score + self.product_service.score + self.client.score;
        if self.total_score != sum {
            return Err(LcbftError::SchemaViolation(format!(
                "total_score {} does not equal the sum of sub-scores {}",
                self.total_score, sum
            )));
        }
        Ok(())
    }
}
