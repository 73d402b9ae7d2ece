use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use lcbft_core::registry::RiskRegistry;
use lcbft_core::scoring::RiskEngine;
use lcbft_core::types::{
    AssessmentRequest, ClientProfile, ClientType, GeographicProfile, PaymentMethod, RiskLevel,
    TransactionProfile,
};

// ===========================================================================
// Fixtures
// ===========================================================================

fn assessment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn engine() -> RiskEngine {
    RiskEngine::with_assessment_date(RiskRegistry::default(), assessment_date())
}

/// Domestic resident, domestic account, nearby, modest wire payment, no
/// flags, decade-long relationship.
fn clean_request() -> AssessmentRequest {
    AssessmentRequest {
        client: ClientProfile {
            client_type: ClientType::NaturalPerson,
            category: None,
            sector_code: None,
            incorporation_date: None,
            birth_year: Some(1985),
            pep: false,
            sanctions: false,
            adverse_media: false,
            identification_reluctance: false,
            relationship_years: 10,
        },
        geographic: GeographicProfile {
            residence_country: "France".to_string(),
            account_country: "France".to_string(),
            distance_km: 25,
        },
        transaction: TransactionProfile {
            amount: dec!(40_000),
            payment_method: PaymentMethod::Wire,
            channel: Some("branch".to_string()),
            complex_arrangement: false,
        },
    }
}

// ===========================================================================
// Invariants
// ===========================================================================

#[test]
fn total_is_sum_of_sub_scores() {
    let engine = engine();
    let mut requests = vec![clean_request()];

    let mut risky = clean_request();
    risky.client.pep = true;
    risky.client.sector_code = Some("92.00Z".to_string());
    risky.geographic.residence_country = "Iran".to_string();
    risky.transaction.amount = dec!(250_000);
    risky.transaction.payment_method = PaymentMethod::Cash;
    requests.push(risky);

    let mut mixed = clean_request();
    mixed.client.relationship_years = 0;
    mixed.geographic.account_country = "Allemagne".to_string();
    mixed.transaction.payment_method = PaymentMethod::InternationalWire;
    requests.push(mixed);

    for request in &requests {
        let result = engine.evaluate(request);
        assert_eq!(
            result.total_score,
            result.geographic.score + result.product_service.score + result.client.score
        );
    }
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn clean_profile_classifies_faible() {
    let result = engine().evaluate(&clean_request());
    assert!(result.total_score <= 3);
    assert_eq!(result.risk_level, RiskLevel::Faible);
}

#[test]
fn established_relationship_can_go_negative() {
    // Known boundary case: the relationship bonus is the only negative
    // rule and no floor is applied, so a clean long-standing client lands
    // below zero and still classifies FAIBLE.
    let result = engine().evaluate(&clean_request());
    assert_eq!(result.total_score, -1);
    assert_eq!(result.client.score, -1);
    assert_eq!(result.risk_level, RiskLevel::Faible);
}

#[test]
fn worst_case_profile_classifies_tres_eleve() {
    let mut request = clean_request();
    request.client.pep = true;
    request.client.sanctions = true;
    request.client.relationship_years = 3;
    request.geographic.residence_country = "Myanmar".to_string();
    request.geographic.account_country = "Myanmar".to_string();
    request.transaction.amount = dec!(150_000);
    request.transaction.payment_method = PaymentMethod::Cash;
    request.transaction.complex_arrangement = true;

    let result = engine().evaluate(&request);

    // geo: 5 (residence) + 5 (account); product: 2 + 3 + 3; client: 4 + 4
    assert_eq!(result.geographic.score, 10);
    assert_eq!(result.product_service.score, 8);
    assert_eq!(result.client.score, 8);
    assert_eq!(result.risk_level, RiskLevel::TresEleve);

    let geo_hits = result
        .geographic
        .justifications
        .iter()
        .filter(|j| j.contains("Myanmar"))
        .count();
    assert_eq!(geo_hits, 2);

    let all: Vec<&String> = result
        .geographic
        .justifications
        .iter()
        .chain(&result.product_service.justifications)
        .chain(&result.client.justifications)
        .collect();
    assert!(all.iter().any(|j| j.contains("sanctions")));
    assert!(all.iter().any(|j| j.contains("PEP")));
    assert!(all.iter().any(|j| j.contains("amount")));
    assert!(all.iter().any(|j| j.contains("Cash")));
    assert!(all.iter().any(|j| j.contains("beneficial owner")));
}

#[test]
fn aggravated_very_high_residence_contributes_five() {
    let mut request = clean_request();
    request.geographic.residence_country = "Myanmar".to_string();
    let result = engine().evaluate(&request);
    assert_eq!(result.geographic.score, 5);

    // Black list without the EU aggravation stays at four.
    request.geographic.residence_country = "Iran".to_string();
    let result = engine().evaluate(&request);
    assert_eq!(result.geographic.score, 4);
}

// ===========================================================================
// Classification boundaries, driven through full evaluations
// ===========================================================================

/// Request engineered to score exactly `n` points, all from the product
/// evaluator: neutral client (3-year relationship), domestic geography.
fn request_scoring(n: i32) -> AssessmentRequest {
    let mut request = clean_request();
    request.client.relationship_years = 3;
    request.transaction.payment_method = match n {
        0 => PaymentMethod::Wire,
        2 => PaymentMethod::Crypto,
        3 => PaymentMethod::Cash,
        _ => panic!("unsupported fixture score {}", n),
    };
    request
}

#[test]
fn boundary_totals_classify_per_thresholds() {
    let engine = engine();

    // 0 and 3 → FAIBLE
    assert_eq!(engine.evaluate(&request_scoring(0)).risk_level, RiskLevel::Faible);
    assert_eq!(engine.evaluate(&request_scoring(3)).risk_level, RiskLevel::Faible);

    // 4 and 6 → MODERE
    let mut r4 = request_scoring(3);
    r4.transaction.amount = dec!(60_000); // +1
    let e4 = engine.evaluate(&r4);
    assert_eq!(e4.total_score, 4);
    assert_eq!(e4.risk_level, RiskLevel::Modere);

    let mut r6 = request_scoring(3);
    r6.client.relationship_years = 0; // +1
    r6.transaction.amount = dec!(120_000); // +2
    let e6 = engine.evaluate(&r6);
    assert_eq!(e6.total_score, 6);
    assert_eq!(e6.risk_level, RiskLevel::Modere);

    // 7 and 10 → ELEVE
    let mut r7 = request_scoring(3);
    r7.client.pep = true; // +4
    let e7 = engine.evaluate(&r7);
    assert_eq!(e7.total_score, 7);
    assert_eq!(e7.risk_level, RiskLevel::Eleve);

    let mut r10 = request_scoring(3);
    r10.client.pep = true; // +4
    r10.client.sector_code = Some("41.1".to_string()); // +2
    r10.transaction.amount = dec!(60_000); // +1
    let e10 = engine.evaluate(&r10);
    assert_eq!(e10.total_score, 10);
    assert_eq!(e10.risk_level, RiskLevel::Eleve);

    // 11 → TRES_ELEVE
    let mut r11 = request_scoring(3);
    r11.client.pep = true; // +4
    r11.client.sector_code = Some("41.1".to_string()); // +2
    r11.transaction.amount = dec!(120_000); // +2
    let e11 = engine.evaluate(&r11);
    assert_eq!(e11.total_score, 11);
    assert_eq!(e11.risk_level, RiskLevel::TresEleve);
}

// ===========================================================================
// Synthetic registries
// ===========================================================================

#[test]
fn synthetic_registry_drives_lookups() {
    let mut registry = RiskRegistry::default();
    registry.home_country = "Ruritania".to_string();
    registry.countries.very_high = vec!["Zubrowka".to_string()];
    registry.countries.high.clear();
    registry.countries.aggravated = vec!["Zubrowka".to_string()];

    let engine = RiskEngine::with_assessment_date(registry, assessment_date());
    let mut request = clean_request();
    request.client.relationship_years = 3;
    request.geographic.residence_country = "Zubrowka".to_string();
    request.geographic.account_country = "Ruritania".to_string();

    let result = engine.evaluate(&request);
    // +5 aggravated very-high residence; home-country account adds nothing.
    assert_eq!(result.geographic.score, 5);
}

#[test]
fn recommendations_follow_the_level() {
    let engine = engine();

    let faible = engine.evaluate(&clean_request());
    assert_eq!(faible.recommendations.len(), 3);
    assert!(faible.recommendations[0].contains("Simplified vigilance"));

    let mut severe = clean_request();
    severe.client.pep = true;
    severe.client.sanctions = true;
    severe.client.adverse_media = true;
    let tres_eleve = engine.evaluate(&severe);
    assert_eq!(tres_eleve.risk_level, RiskLevel::TresEleve);
    assert!(tres_eleve
        .recommendations
        .iter()
        .any(|r| r.contains("strongly discouraged")));
}
