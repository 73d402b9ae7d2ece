pub mod client;
pub mod engine;
pub mod geographic;
pub mod product_service;
pub mod recommendations;

pub use engine::{classify, RiskEngine};
