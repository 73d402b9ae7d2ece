//! Client risk rules: status flags, age, entity age, relationship length.

use chrono::{Datelike, NaiveDate};

use crate::types::{ClientProfile, ClientType, RiskScore};

/// Rules in evaluation order: flags, then age / entity age, then
/// relationship duration. The established-relationship bonus is the only
/// rule that reduces the score; no floor is applied.
pub fn evaluate_client(client: &ClientProfile, as_of: NaiveDate) -> RiskScore {
    let mut score = 0;
    let mut justifications = Vec::new();

    if client.pep {
        score += 4;
        justifications.push("Politically exposed person (PEP)".to_string());
    }

    if client.sanctions {
        score += 4;
        justifications.push("Person under international sanctions".to_string());
    }

    if client.adverse_media {
        score += 5;
        justifications.push("Adverse media coverage in open sources".to_string());
    }

    if client.identification_reluctance {
        score += 4;
        justifications
            .push("Reluctance to disclose the identity of the represented party".to_string());
    }

    if client.client_type == ClientType::NaturalPerson {
        if let Some(birth_year) = client.birth_year {
            // Year-granularity age; calendar-day precision is not required.
            let age = as_of.year() - birth_year;
            if age < 18 {
                score += 3;
                justifications.push("Minor client (guardianship risk)".to_string());
            } else if age >= 70 {
                score += 2;
                justifications.push("Elderly client (undue-influence risk)".to_string());
            }
        }
    }

    if client.client_type == ClientType::LegalEntity {
        if let Some(incorporated) = client.incorporation_date {
            let entity_age_days = (as_of - incorporated).num_days();
            if entity_age_days < 365 {
                score += 3;
                justifications.push("Recently incorporated entity (<1 year)".to_string());
            } else if entity_age_days < 730 {
                score += 2;
                justifications.push("Newly incorporated entity (<2 years)".to_string());
            }
        }
    }

    if client.relationship_years < 1 {
        score += 1;
        justifications.push("New business relationship".to_string());
    } else if client.relationship_years > 5 {
        score -= 1;
        justifications.push("Established business relationship (>5 years)".to_string());
    }

    RiskScore {
        score,
        justifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn natural(birth_year: Option<i32>, relationship_years: u32) -> ClientProfile {
        ClientProfile {
            client_type: ClientType::NaturalPerson,
            category: None,
            sector_code: None,
            incorporation_date: None,
            birth_year,
            pep: false,
            sanctions: false,
            adverse_media: false,
            identification_reluctance: false,
            relationship_years,
        }
    }

    fn legal(incorporation_date: Option<NaiveDate>, relationship_years: u32) -> ClientProfile {
        ClientProfile {
            client_type: ClientType::LegalEntity,
            incorporation_date,
            birth_year: None,
            ..natural(None, relationship_years)
        }
    }

    #[test]
    fn all_flags_accumulate() {
        let mut c = natural(None, 3);
        c.pep = true;
        c.sanctions = true;
        c.adverse_media = true;
        c.identification_reluctance = true;
        let result = evaluate_client(&c, as_of());
        assert_eq!(result.score, 4 + 4 + 5 + 4);
        assert_eq!(result.justifications.len(), 4);
    }

    #[test]
    fn minor_scores_three() {
        let result = evaluate_client(&natural(Some(2010), 3), as_of());
        assert_eq!(result.score, 3);
        assert!(result.justifications[0].contains("Minor"));
    }

    #[test]
    fn elderly_scores_two() {
        // age exactly 70 qualifies
        let result = evaluate_client(&natural(Some(1955), 3), as_of());
        assert_eq!(result.score, 2);
        assert!(result.justifications[0].contains("Elderly"));
    }

    #[test]
    fn working_age_scores_zero() {
        assert_eq!(evaluate_client(&natural(Some(1985), 3), as_of()).score, 0);
    }

    #[test]
    fn birth_year_ignored_for_legal_entity() {
        let mut c = legal(None, 3);
        c.birth_year = Some(2010);
        assert_eq!(evaluate_client(&c, as_of()).score, 0);
    }

    #[test]
    fn entity_under_one_year_scores_three() {
        let incorporated = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let result = evaluate_client(&legal(Some(incorporated), 3), as_of());
        assert_eq!(result.score, 3);
    }

    #[test]
    fn entity_under_two_years_scores_two() {
        let incorporated = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        let result = evaluate_client(&legal(Some(incorporated), 3), as_of());
        assert_eq!(result.score, 2);
    }

    #[test]
    fn mature_entity_scores_zero() {
        let incorporated = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        assert_eq!(evaluate_client(&legal(Some(incorporated), 3), as_of()).score, 0);
    }

    #[test]
    fn new_relationship_adds_one() {
        let result = evaluate_client(&natural(None, 0), as_of());
        assert_eq!(result.score, 1);
        assert!(result.justifications[0].contains("New business relationship"));
    }

    #[test]
    fn established_relationship_subtracts_one() {
        // The only negative rule: a clean long-standing client lands at -1.
        let result = evaluate_client(&natural(None, 10), as_of());
        assert_eq!(result.score, -1);
        assert!(result.justifications[0].contains("Established"));
    }

    #[test]
    fn mid_relationship_is_neutral() {
        assert_eq!(evaluate_client(&natural(None, 3), as_of()).score, 0);
        assert_eq!(evaluate_client(&natural(None, 5), as_of()).score, 0);
        assert_eq!(evaluate_client(&natural(None, 1), as_of()).score, 0);
    }
}
