pub mod envelope;
pub mod reconcile;
pub mod secure;

pub use envelope::{build_compact_export, build_full_envelope, APPLICATION_ID};
pub use reconcile::{import_payload, ImportOutcome};
