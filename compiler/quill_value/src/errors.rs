//! Error types for value operations.
//!
//! Every fault raised by the value model is an `EvalError`. The structured
//! category lives in `EvalErrorKind`; the rendered message is kept alongside
//! it so the evaluator can report errors without re-formatting.
//!
//! Factory functions (e.g. `shape_mismatch()`) are the public way to build
//! errors. They populate both `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of a value operation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Arithmetic between two lists of different lengths.
    #[error("cannot operate on lists of uneven sizes ({left} and {right})")]
    ShapeMismatch { left: usize, right: usize },

    /// An index or key operand could not be coerced to a number.
    #[error("expected a number as {context}, got {got}")]
    TypeMismatch { context: String, got: String },

    /// Raw index outside the current bounds of a list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// Index normalization against an empty list.
    #[error("division by zero in {operation}")]
    ArithmeticFault { operation: String },

    /// Operation that exists in the protocol but is never implemented.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },

    /// A string result would exceed the maximum string length.
    #[error("string result exceeds the limit of {limit} bytes")]
    StringTooLong { limit: usize },

    /// Scalar operator applied to operands that do not support it.
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    InvalidOperand {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
}

/// Evaluation error raised by a value operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
    /// Additional context notes, outermost last.
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Attach a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Factory functions

/// Arithmetic between two lists of unequal length.
#[cold]
pub fn shape_mismatch(left: usize, right: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShapeMismatch { left, right })
}

/// A value could not be used as a number where `context` requires one.
#[cold]
pub fn type_mismatch(context: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.to_string(),
        got: got.to_string(),
    })
}

/// Raw index outside `[0, len)`.
#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

/// Modular arithmetic against a zero length.
#[cold]
pub fn division_by_zero(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArithmeticFault {
        operation: operation.to_string(),
    })
}

/// An operation that is part of the protocol but deliberately not provided.
#[cold]
pub fn unsupported_operation(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperation {
        operation: operation.to_string(),
    })
}

/// A string operation would produce more than `limit` bytes.
#[cold]
pub fn string_too_long(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StringTooLong { limit })
}

/// Operator applied to operand types that do not support it.
#[cold]
pub fn invalid_operand(op: &'static str, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperand { op, left, right })
}

#[cfg(test)]
mod tests;
