//! Runtime values for the Quill evaluator.
//!
//! `Value` is a closed set of variants. Every variant answers the same
//! capability set (rendering, coercion, ordering, equality, arithmetic,
//! membership) through match dispatch, so the evaluator never inspects the
//! concrete kind.
//!
//! # Ownership
//!
//! Values own their contents outright. There is no reference counting:
//! cloning a list clones its elements, and `ListValue::wrap` moves a
//! caller's `Vec` in without copying.
//!
//! # Thread Safety
//!
//! Values are `Send` and `Sync`, but a `ListValue` is not internally
//! synchronized. Mutation requires `&mut`, so sharing a list across threads
//! needs external locking or a read-only discipline.

mod container;
mod index;
mod list;
mod numeric;

use std::cmp::Ordering;
use std::fmt;

pub use container::ContainerValue;
pub use index::normalize_index;
pub use list::{ListValue, PRETTY_EDGE, PRETTY_FULL_LIMIT};
pub use numeric::NumericValue;

use crate::errors::{invalid_operand, string_too_long, EvalResult};

/// Largest string, in bytes, that string repetition may produce.
pub const MAX_STRING_LEN: usize = 1 << 28;

/// Runtime value in the Quill evaluator.
#[derive(Clone)]
pub enum Value {
    /// The null value. Use `Value::NULL` rather than constructing it ad hoc.
    Null,
    /// Number (the language has a single numeric type).
    Number(NumericValue),
    /// String value.
    Str(String),
    /// Ordered, mutable list of values.
    List(ListValue),
}

/// Arithmetic operator selector shared by scalar and list arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Subtract => "-",
            ArithOp::Multiply => "*",
            ArithOp::Divide => "/",
        }
    }
}

// Factory Methods

impl Value {
    /// The process-wide null sentinel, returned on membership misses.
    pub const NULL: Value = Value::Null;

    /// Create a number from an integer.
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(NumericValue::from(n))
    }

    /// Create a number from a float.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Number(NumericValue::new(f))
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value by taking ownership of `items`.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(ListValue::wrap(items))
    }
}

// Value Methods

impl Value {
    /// Get the type name for error messages and type tests.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Full string form.
    pub fn string_form(&self) -> String {
        self.to_string()
    }

    /// Human-oriented form; lists abbreviate long contents.
    pub fn pretty_string(&self) -> String {
        match self {
            Value::Str(s) => format!("'{s}'"),
            Value::List(list) => list.pretty_string(),
            Value::Null | Value::Number(_) => self.to_string(),
        }
    }

    /// Boolean coercion.
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Number(n) => n.raw() != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(list) => !list.is_empty(),
        }
    }

    /// Numeric coercion. Strings and lists read as their length.
    pub fn read_number(&self) -> NumericValue {
        match self {
            Value::Null => NumericValue::ZERO,
            Value::Number(n) => *n,
            Value::Str(s) => NumericValue::from(s.chars().count()),
            Value::List(list) => NumericValue::from(list.len()),
        }
    }

    /// Try to view as a list.
    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Try to view as a mutable list.
    pub fn as_list_mut(&mut self) -> Option<&mut ListValue> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Container capability check.
    pub fn as_container(&self) -> Option<&dyn ContainerValue> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Mutable container capability check.
    pub fn as_container_mut(&mut self) -> Option<&mut dyn ContainerValue> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Three-way structural ordering.
    ///
    /// Numbers order numerically and lists order by length then elements.
    /// Every other pairing falls back to comparing full string forms.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::List(list), _) => list.compare(other),
            (Value::Number(a), Value::Number(b)) => a.compare(*b),
            (Value::Null, Value::Null) => Ordering::Equal,
            _ => self.string_form().cmp(&other.string_form()),
        }
    }

    /// Structural equality.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a.equals(*b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), _) => a.equals(other),
            _ => false,
        }
    }

    pub fn add(&self, other: &Value) -> EvalResult {
        self.arith(ArithOp::Add, other)
    }

    pub fn subtract(&self, other: &Value) -> EvalResult {
        self.arith(ArithOp::Subtract, other)
    }

    pub fn multiply(&self, other: &Value) -> EvalResult {
        self.arith(ArithOp::Multiply, other)
    }

    pub fn divide(&self, other: &Value) -> EvalResult {
        self.arith(ArithOp::Divide, other)
    }

    /// Membership test: where `needle` occurs in `self`.
    ///
    /// Lists return the index of the first equal element; strings return the
    /// character position of the needle's string form. A miss is
    /// `Value::NULL`.
    pub fn member_index(&self, needle: &Value) -> EvalResult {
        match self {
            Value::List(list) => Ok(list.contains(needle)),
            Value::Str(haystack) => {
                let needle = needle.string_form();
                Ok(haystack.find(&needle).map_or(Value::NULL, |byte_pos| {
                    Value::Number(NumericValue::from(haystack[..byte_pos].chars().count()))
                }))
            }
            Value::Null | Value::Number(_) => {
                Err(invalid_operand("in", needle.type_name(), self.type_name()))
            }
        }
    }

    pub(crate) fn arith(&self, op: ArithOp, other: &Value) -> EvalResult {
        match (self, other) {
            (Value::List(list), _) => list.arith(op, other).map(Value::List),
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(match op {
                ArithOp::Add => a.add(*b),
                ArithOp::Subtract => a.subtract(*b),
                ArithOp::Multiply => a.multiply(*b),
                ArithOp::Divide => a.divide(*b),
            })),
            _ => self.textual_arith(op, other),
        }
    }

    /// Arithmetic where at least one side is not a number: operates on the
    /// string forms.
    fn textual_arith(&self, op: ArithOp, other: &Value) -> EvalResult {
        match (op, self, other) {
            (ArithOp::Add, _, _) => Ok(Value::Str(format!("{self}{other}"))),
            (ArithOp::Subtract, _, _) => {
                Ok(Value::Str(self.string_form().replace(&other.string_form(), "")))
            }
            (ArithOp::Multiply, Value::Str(s), Value::Number(n))
                if n.is_integral() && n.raw() >= 0.0 =>
            {
                // `to_long` saturates, so a huge count arrives here as i64::MAX.
                let times =
                    usize::try_from(n.to_long()).map_err(|_| string_too_long(MAX_STRING_LEN))?;
                match s.len().checked_mul(times) {
                    Some(total) if total <= MAX_STRING_LEN => Ok(Value::Str(s.repeat(times))),
                    _ => Err(string_too_long(MAX_STRING_LEN)),
                }
            }
            _ => Err(invalid_operand(
                op.symbol(),
                self.type_name(),
                other.type_name(),
            )),
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(list) => write!(f, "List({:?})", list.unpack()),
        }
    }
}

/// Full string form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(list) => write!(f, "{list}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl From<ListValue> for Value {
    fn from(list: ListValue) -> Self {
        Value::List(list)
    }
}

impl From<NumericValue> for Value {
    fn from(n: NumericValue) -> Self {
        Value::Number(n)
    }
}
