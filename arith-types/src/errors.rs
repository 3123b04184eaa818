use thiserror::Error;

/// Failures raised by the text construction path. The explicit-field and
/// default constructors never fail; their division by zero surfaces as an
/// infinite or NaN result instead.
#[derive(Debug, Error)]
pub enum ParseOperationError {
    #[error("Expression must be in the format <number> <operator> <number>: {0:?}")]
    InvalidExpression(String),
    #[error("Not a number: {0}")]
    InvalidOperand(String),
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DeserializationError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
