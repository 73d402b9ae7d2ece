//! Geographic risk rules.
//!
//! Residence and account jurisdictions are assessed independently and
//! additively — a client resident in and banked from the same listed
//! country accrues the points twice, each geography on its own risk.

use crate::registry::RiskRegistry;
use crate::types::{GeographicProfile, RiskScore};

fn score_country(registry: &RiskRegistry, country: &str, role: &str) -> Option<(i32, String)> {
    if registry.countries.is_very_high(country) {
        if registry.countries.is_aggravated(country) {
            Some((
                5,
                format!("{} {} (FATF black list + EU high-risk list)", role, country),
            ))
        } else {
            Some((4, format!("{} {} (FATF black list)", role, country)))
        }
    } else if registry.countries.is_high(country) {
        if registry.countries.is_aggravated(country) {
            Some((
                4,
                format!("{} {} (FATF high-risk + EU high-risk list)", role, country),
            ))
        } else {
            Some((3, format!("{} {} (FATF high-risk list)", role, country)))
        }
    } else {
        None
    }
}

/// Rules in evaluation order: residence country, account country,
/// cross-border account, distance from the establishment.
pub fn evaluate_geographic(registry: &RiskRegistry, geo: &GeographicProfile) -> RiskScore {
    let mut score = 0;
    let mut justifications = Vec::new();

    if let Some((pts, reason)) = score_country(registry, &geo.residence_country, "Resident of") {
        score += pts;
        justifications.push(reason);
    }

    if let Some((pts, reason)) = score_country(registry, &geo.account_country, "Bank account in") {
        score += pts;
        justifications.push(reason);
    }

    if geo.account_country != geo.residence_country && geo.account_country != registry.home_country
    {
        score += 2;
        justifications.push("Bank account held abroad relative to residence".to_string());
    }

    if geo.distance_km > 100 {
        score += 1;
        justifications.push("Client outside normal catchment area (>100 km)".to_string());
    }

    RiskScore {
        score,
        justifications,
    }
}
