pub mod errors;
pub mod helper;
pub mod types;

pub use helper::{operations_from_json, operations_to_json};

// Re-exports
pub use ordered_float;
pub use serde;
pub use serde_json;
pub use thiserror;
