use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::errors::ParseOperationError;
use crate::types::OperationKind;

/// A single binary arithmetic fact: two operands and the operator applied
/// to them. The defining fields never change after construction; the result
/// is recomputed from them on each read.
///
/// Missing fields take their zero-equivalent defaults on decode, so
/// deserialization flows that allocate first and populate later go through
/// the same default path as [`Operation::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    a: f64,
    b: f64,
    mode: OperationKind,
}

impl Operation {
    /// Builds an operation from explicit fields. No zero-divisor check
    /// happens here; `Operation::new(1.0, OperationKind::Division, 0.0)`
    /// succeeds and its result is infinite under IEEE-754 division.
    pub fn new(a: f64, mode: OperationKind, b: f64) -> Operation {
        Operation { a, b, mode }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn mode(&self) -> OperationKind {
        self.mode
    }

    /// The operator character for this operation's mode.
    pub fn symbol(&self) -> char {
        self.mode.symbol()
    }

    /// Applies the operator to the operands under IEEE-754 semantics.
    pub fn result(&self) -> f64 {
        match self.mode {
            OperationKind::Addition => self.a + self.b,
            OperationKind::Subtraction => self.a - self.b,
            OperationKind::Multiplication => self.a * self.b,
            OperationKind::Division => self.a / self.b,
            OperationKind::Modulo => self.a % self.b,
        }
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Parses `"<number> <operator> <number>"` with tokens separated by one
    /// or more space or tab characters. A literal zero divisor is rejected
    /// here, before any result is computed; this is the only construction
    /// path that checks it.
    fn from_str(expression: &str) -> Result<Operation, Self::Err> {
        let tokens: Vec<&str> = expression
            .split([' ', '\t'])
            .filter(|token| !token.is_empty())
            .collect();
        let [a, operator, b] = tokens.as_slice() else {
            return Err(ParseOperationError::InvalidExpression(
                expression.to_string(),
            ));
        };

        let a: f64 = a
            .parse()
            .map_err(|_| ParseOperationError::InvalidOperand(a.to_string()))?;
        let b: f64 = b
            .parse()
            .map_err(|_| ParseOperationError::InvalidOperand(b.to_string()))?;

        let mode = OperationKind::from_token(operator)
            .ok_or_else(|| ParseOperationError::InvalidOperator(operator.to_string()))?;
        if mode == OperationKind::Division && b == 0.0 {
            return Err(ParseOperationError::DivisionByZero);
        }

        Ok(Operation { a, b, mode })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.a, self.mode, self.b, self.result())
    }
}

// +0.0 and -0.0 compare equal under `==`; fold them to one bit pattern so
// equal operations hash equal.
fn operand_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut hash: u64 = 17;
        hash = hash.wrapping_mul(23).wrapping_add(operand_bits(self.a));
        hash = hash.wrapping_mul(23).wrapping_add(operand_bits(self.b));
        hash = hash.wrapping_mul(23).wrapping_add(self.mode as u64);
        state.write_u64(hash);
    }
}

impl PartialOrd for Operation {
    /// Orders by result alone, ascending. Operations with different fields
    /// but coinciding results compare as equal here while staying unequal
    /// under `==`.
    fn partial_cmp(&self, other: &Operation) -> Option<Ordering> {
        Some(OrderedFloat(self.result()).cmp(&OrderedFloat(other.result())))
    }
}
