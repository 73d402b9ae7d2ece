pub mod evaluate;
pub mod export;
pub mod import;

use lcbft_core::registry::RiskRegistry;
use lcbft_core::types::{AssessmentRequest, Validate};
use serde_json::Value;

use crate::input;

/// Load the request from `--input <file>` or piped stdin, then apply the
/// same value checks the import pipeline uses.
pub(crate) fn load_request(
    path: &Option<String>,
) -> Result<AssessmentRequest, Box<dyn std::error::Error>> {
    let request: AssessmentRequest = if let Some(path) = path {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for an assessment request".into());
    };
    request.validate()?;
    Ok(request)
}

/// Optional replacement risk registry; defaults to the built-in tables.
pub(crate) fn load_registry(
    path: &Option<String>,
) -> Result<RiskRegistry, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(input::file::read_json(path)?),
        None => Ok(RiskRegistry::default()),
    }
}

pub(crate) fn to_value<T: serde::Serialize>(
    value: T,
) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(value)?)
}
