//! Product and service risk rules: activity sector, transaction amount,
//! payment method, arrangement complexity.

use rust_decimal_macros::dec;

use crate::registry::{RiskRegistry, SectorTier};
use crate::types::{ClientProfile, PaymentMethod, RiskScore, TransactionProfile};

pub fn evaluate_product_service(
    registry: &RiskRegistry,
    client: &ClientProfile,
    transaction: &TransactionProfile,
) -> RiskScore {
    let mut score = 0;
    let mut justifications = Vec::new();

    if let Some(code) = &client.sector_code {
        if let Some((tier, label)) = registry.sectors.lookup(code) {
            let (pts, reason) = match tier {
                SectorTier::VeryHigh => (4, format!("Very-high-risk sector: {}", label)),
                SectorTier::High => (3, format!("High-risk sector: {}", label)),
                SectorTier::Moderate => (2, format!("Moderate-risk sector: {}", label)),
            };
            score += pts;
            justifications.push(reason);
        }
    }

    if transaction.amount > dec!(100_000) {
        score += 2;
        justifications.push("High transaction amount (>100K)".to_string());
    } else if transaction.amount > dec!(50_000) {
        score += 1;
        justifications.push("Significant transaction amount (>50K)".to_string());
    }

    match transaction.payment_method {
        PaymentMethod::Cash => {
            score += 3;
            justifications.push("Cash payment (laundering exposure)".to_string());
        }
        PaymentMethod::Split => {
            score += 3;
            justifications.push("Split payment (threshold-avoidance pattern)".to_string());
        }
        PaymentMethod::Crypto => {
            score += 2;
            justifications
                .push("Crypto-asset payment (regulatory and volatility exposure)".to_string());
        }
        PaymentMethod::InternationalWire => {
            score += 2;
            justifications.push("International wire transfer".to_string());
        }
        PaymentMethod::Wire | PaymentMethod::Cheque | PaymentMethod::Card => {}
    }

    if transaction.complex_arrangement {
        score += 3;
        justifications
            .push("Complex legal arrangement (beneficial owner hard to establish)".to_string());
    }

    RiskScore {
        score,
        justifications,
    }
}
