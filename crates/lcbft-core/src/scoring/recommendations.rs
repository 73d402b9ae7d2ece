//! Tier-specific vigilance guidance.
//!
//! Pure lookup: each risk level maps to a fixed, ordered list. Strings may
//! carry `<b>…</b>` emphasis for rich renderers; `strip_markup` produces the
//! plain form used in exports and terminal output.

use crate::types::RiskLevel;

const RECOMMENDATIONS_FAIBLE: &[&str] = &[
    "Simplified vigilance measures possible: apply reduced due-diligence measures as \
     permitted by regulation while keeping the mandatory baseline controls.",
    "Standard identity verification: check identity under the usual procedures and retain \
     the required supporting documents.",
    "Normal monitoring: watch operations against standard thresholds and review the client \
     profile annually as part of the routine update cycle.",
];

const RECOMMENDATIONS_MODERE: &[&str] = &[
    "Usual vigilance measures: apply standard know-your-customer procedures with specific \
     attention to the factors that produced the moderate score.",
    "Standard identity verification: check identity under the usual procedures, supplemented \
     by a point check of the declared address and activity.",
    "Periodic monitoring: review the client profile every six months and watch for \
     operations unusual relative to the established profile.",
];

const RECOMMENDATIONS_ELEVE: &[&str] = &[
    "Reinforced identity verification: run complementary controls including postal address \
     confirmation, sanctions and PEP database screening, and validation of the declared \
     professional activity.",
    "Source-of-funds justification: obtain and analyse detailed evidence of the origin of \
     the capital (payslips, tax returns, deeds of sale) and validate its consistency.",
    "Supervision of significant transactions: lower the monitoring threshold and require \
     management sign-off for any operation above the amounts defined for the client profile.",
    "Detailed documentation: build and regularly refresh a complete client file holding all \
     supporting documents, risk analyses and the reasoning behind each decision.",
];

const RECOMMENDATIONS_TRES_ELEVE: &[&str] = &[
    "<b>⚠ WARNING — business relationship strongly discouraged</b>: given the extreme risk \
     level, entering any commercial relationship should be avoided except in exceptional \
     circumstances backed by a compelling business justification.",
    "Senior-management approval required: any acceptance decision must be validated by \
     senior management on a complete file demonstrating the exceptional commercial interest.",
    "Exhaustive identity verification with multiple sources: apply reinforced controls \
     including in-depth documentary checks, cross-referencing against international \
     databases and validation through independent third-party sources.",
    "Complete legal documentation and exceptional business justification: assemble a full \
     file with risk analysis, the economic rationale for the relationship and specific \
     mitigation measures.",
    "Systematic suspicious-activity report to consider: assess whether a report to the \
     financial intelligence unit is warranted given the identified risk factors and the \
     nature of the envisaged operations.",
    "Continuous reinforced monitoring and regular reporting: track operations daily, report \
     monthly to management and review the risk profile quarterly.",
];

/// Ordered guidance for a risk level.
pub fn recommendations_for(level: RiskLevel) -> Vec<String> {
    let texts = match level {
        RiskLevel::Faible => RECOMMENDATIONS_FAIBLE,
        RiskLevel::Modere => RECOMMENDATIONS_MODERE,
        RiskLevel::Eleve => RECOMMENDATIONS_ELEVE,
        RiskLevel::TresEleve => RECOMMENDATIONS_TRES_ELEVE,
    };
    texts.iter().map(|t| t.to_string()).collect()
}

/// Remove `<…>` markup for plain-text rendering (exports, terminals).
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}
