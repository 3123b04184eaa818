use arith_types::errors::{ParseOperationError, SerializationError};
use arith_types::thiserror;
use arith_types::thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to parse expression: {0}")]
    Parse(#[from] ParseOperationError),
    #[error("Failed to encode operations: {0}")]
    Serialization(#[from] SerializationError),
}
