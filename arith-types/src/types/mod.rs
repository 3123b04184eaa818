use serde::{Deserialize, Serialize};

mod operation;

pub use operation::Operation;

/// The closed set of supported operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperationKind {
    #[default]
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
}

impl OperationKind {
    /// The operator character used in textual expressions.
    pub fn symbol(&self) -> char {
        match self {
            OperationKind::Addition => '+',
            OperationKind::Subtraction => '-',
            OperationKind::Multiplication => '*',
            OperationKind::Division => '/',
            OperationKind::Modulo => '%',
        }
    }

    pub(crate) fn from_token(token: &str) -> Option<OperationKind> {
        match token {
            "+" => Some(OperationKind::Addition),
            "-" => Some(OperationKind::Subtraction),
            "*" => Some(OperationKind::Multiplication),
            "/" => Some(OperationKind::Division),
            "%" => Some(OperationKind::Modulo),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
