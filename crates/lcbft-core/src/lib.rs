pub mod error;
pub mod interop;
pub mod registry;
pub mod scoring;
pub mod types;

pub use error::LcbftError;
pub use types::*;

/// Standard result type for all lcbft operations
pub type LcbftResult<T> = Result<T, LcbftError>;
