//! Binary operator dispatch for the evaluator.
//!
//! The evaluator hands both operands and the operator here and never matches
//! on the concrete value kind. Arithmetic routes to the Value capability
//! (lists broadcast), comparisons produce numeric booleans, and `in` goes
//! through the container capability.

use std::cmp::Ordering;

use crate::errors::{invalid_operand, EvalResult};
use crate::value::{ArithOp, Value};

/// Binary operators understood by the value model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// `needle in haystack`: the position of `needle`, or null.
    In,
}

impl BinaryOp {
    /// Source-level spelling of the operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::In => "in",
        }
    }
}

/// Evaluate `left op right`.
#[tracing::instrument(
    level = "trace",
    skip(left, right),
    fields(left = left.type_name(), right = right.type_name())
)]
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => left.arith(ArithOp::Add, right),
        BinaryOp::Sub => left.arith(ArithOp::Subtract, right),
        BinaryOp::Mul => left.arith(ArithOp::Multiply, right),
        BinaryOp::Div => left.arith(ArithOp::Divide, right),
        BinaryOp::Eq => Ok(truth(left.equals(right))),
        BinaryOp::NotEq => Ok(truth(!left.equals(right))),
        BinaryOp::Lt => Ok(truth(left.compare(right) == Ordering::Less)),
        BinaryOp::LtEq => Ok(truth(left.compare(right) != Ordering::Greater)),
        BinaryOp::Gt => Ok(truth(left.compare(right) == Ordering::Greater)),
        BinaryOp::GtEq => Ok(truth(left.compare(right) != Ordering::Less)),
        BinaryOp::In => match right.as_container() {
            Some(container) => Ok(container.contains(left)),
            None => Err(invalid_operand(
                op.as_symbol(),
                left.type_name(),
                right.type_name(),
            )),
        },
    }
}

/// Quill has no boolean type; truth is the number 1 or 0.
#[inline]
fn truth(b: bool) -> Value {
    Value::number(i64::from(b))
}
