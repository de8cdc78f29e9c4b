//! List values.
//!
//! `ListValue` is an ordered, mutable, growable sequence of `Value`s backed
//! by a `Vec`. It takes part in arithmetic (elementwise against another list,
//! broadcast against anything else), ordering, equality, and the container
//! capability.
//!
//! # Indexing Policies
//!
//! `get`/`put`/`has` use the raw index: `-1` is out of range. `delete` and
//! `insert_at` wrap the index with `normalize_index`, so `-1` is the last
//! element. Both behaviours are relied upon by existing scripts.

use std::cmp::Ordering;
use std::fmt;

use super::{normalize_index, ArithOp, ContainerValue, NumericValue, Value};
use crate::errors::{index_out_of_range, shape_mismatch, unsupported_operation, EvalResult};

/// Lists shorter than this pretty-print every element.
pub const PRETTY_FULL_LIMIT: usize = 8;

/// Elements shown at each end of an abbreviated pretty form.
pub const PRETTY_EDGE: usize = 2;

/// Context label used when coercing list indexes.
const INDEX_CONTEXT: &str = "'address' to a list index";

/// Ordered, mutable list of runtime values.
#[derive(Clone, Default)]
pub struct ListValue {
    items: Vec<Value>,
}

// Construction

impl ListValue {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy-construct from any sequence of values.
    pub fn copy_from(items: &[Value]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// Take ownership of `items` without copying.
    #[inline]
    pub fn wrap(items: Vec<Value>) -> Self {
        Self { items }
    }

    /// Build from an explicit argument list.
    pub fn of<const N: usize>(items: [Value; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }

    /// The elements as a read-only slice.
    #[inline]
    pub fn unpack(&self) -> &[Value] {
        &self.items
    }

    /// Give back the owned storage.
    #[inline]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only forward iteration over the current elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

// Mutation

impl ListValue {
    /// Append `value` to the end.
    ///
    /// When `value` is itself a list, its elements are spliced in first and
    /// then the list is appended as one more element, so appending a
    /// `k`-element list grows the receiver by `k + 1`.
    pub fn append(&mut self, value: Value) {
        if let Value::List(inner) = &value {
            tracing::trace!(spliced = inner.len(), "flattening list before append");
            self.items.extend(inner.iter().cloned());
        }
        self.items.push(value);
    }

    /// Append every element of `items` in order.
    pub fn extend_from_slice(&mut self, items: &[Value]) {
        self.items.extend_from_slice(items);
    }

    /// Write `items` starting at the wrapped position of `index`.
    ///
    /// The start is normalized once against the current length. Each element
    /// then overwrites the slot at the write position while that position is
    /// inside the original list, and is pushed once it runs past the end.
    /// The position is never re-wrapped.
    pub fn insert_at(
        &mut self,
        index: i64,
        items: impl IntoIterator<Item = Value>,
    ) -> EvalResult<()> {
        let original_len = self.items.len();
        let mut pos = normalize_index(index, original_len)?;
        for item in items {
            if pos < original_len {
                self.items[pos] = item;
            } else {
                self.items.push(item);
            }
            pos += 1;
        }
        if pos > original_len {
            tracing::trace!(
                start = index,
                grew_by = self.items.len() - original_len,
                "insert spilled past end of list"
            );
        }
        Ok(())
    }

    /// In-place reverse subtraction (`list -= x`). Never provided.
    pub fn subtract_from(&mut self, _other: &Value) -> EvalResult<()> {
        Err(unsupported_operation("subtract-from on list"))
    }
}

// Arithmetic

impl ListValue {
    pub fn add(&self, other: &Value) -> EvalResult<ListValue> {
        self.arith(ArithOp::Add, other)
    }

    pub fn subtract(&self, other: &Value) -> EvalResult<ListValue> {
        self.arith(ArithOp::Subtract, other)
    }

    pub fn multiply(&self, other: &Value) -> EvalResult<ListValue> {
        self.arith(ArithOp::Multiply, other)
    }

    pub fn divide(&self, other: &Value) -> EvalResult<ListValue> {
        self.arith(ArithOp::Divide, other)
    }

    /// Elementwise against an equal-length list, broadcast against anything
    /// else.
    pub(crate) fn arith(&self, op: ArithOp, other: &Value) -> EvalResult<ListValue> {
        let items = match other {
            Value::List(rhs) => {
                if rhs.len() != self.len() {
                    tracing::debug!(
                        op = op.symbol(),
                        left = self.len(),
                        right = rhs.len(),
                        "list arithmetic shape mismatch"
                    );
                    return Err(shape_mismatch(self.len(), rhs.len()));
                }
                self.items
                    .iter()
                    .zip(rhs.iter())
                    .map(|(l, r)| l.arith(op, r))
                    .collect::<EvalResult<Vec<_>>>()?
            }
            scalar => self
                .items
                .iter()
                .map(|l| l.arith(op, scalar))
                .collect::<EvalResult<Vec<_>>>()?,
        };
        Ok(ListValue::wrap(items))
    }
}

// Ordering, equality, rendering

impl ListValue {
    /// Shorter lists sort first; equal lengths compare elementwise.
    /// Non-lists compare by full string form.
    pub fn compare(&self, other: &Value) -> Ordering {
        match other {
            Value::List(rhs) => self.len().cmp(&rhs.len()).then_with(|| {
                self.items
                    .iter()
                    .zip(rhs.iter())
                    .map(|(l, r)| l.compare(r))
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            }),
            _ => self.to_string().cmp(&other.string_form()),
        }
    }

    pub fn equals(&self, other: &Value) -> bool {
        match other {
            Value::List(rhs) => {
                self.len() == rhs.len()
                    && self.items.iter().zip(rhs.iter()).all(|(l, r)| l.equals(r))
            }
            _ => false,
        }
    }

    /// Pretty form: every element below `PRETTY_FULL_LIMIT`, otherwise the
    /// first and last `PRETTY_EDGE` elements around an ellipsis.
    pub fn pretty_string(&self) -> String {
        let len = self.items.len();
        let parts: Vec<String> = if len < PRETTY_FULL_LIMIT {
            self.items.iter().map(Value::pretty_string).collect()
        } else {
            let head = self.items[..PRETTY_EDGE].iter().map(Value::pretty_string);
            let tail = self.items[len - PRETTY_EDGE..].iter().map(Value::pretty_string);
            head.chain(std::iter::once("...".to_string()))
                .chain(tail)
                .collect()
        };
        format!("[{}]", parts.join(", "))
    }

    fn coerce_index(key: &Value) -> EvalResult<i64> {
        NumericValue::as_number(key, INDEX_CONTEXT).map(NumericValue::to_long)
    }

    /// Raw index into `items`, or an out-of-range fault.
    fn raw_position(&self, index: i64) -> EvalResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|pos| *pos < self.items.len())
            .ok_or_else(|| index_out_of_range(index, self.items.len()))
    }
}

impl ContainerValue for ListValue {
    fn get(&self, key: &Value) -> EvalResult {
        let pos = self.raw_position(Self::coerce_index(key)?)?;
        Ok(self.items[pos].clone())
    }

    fn put(&mut self, key: &Value, value: Value) -> EvalResult<bool> {
        let pos = self.raw_position(Self::coerce_index(key)?)?;
        self.items[pos] = value;
        Ok(true)
    }

    fn has(&self, key: &Value) -> EvalResult<bool> {
        let index = Self::coerce_index(key)?;
        Ok(usize::try_from(index).is_ok_and(|pos| pos < self.items.len()))
    }

    fn delete(&mut self, key: &Value) -> EvalResult<bool> {
        let Value::Number(n) = key else {
            return Ok(false);
        };
        if self.items.is_empty() {
            return Ok(false);
        }
        let pos = normalize_index(n.to_long(), self.items.len())?;
        self.items.remove(pos);
        Ok(true)
    }

    /// Bounds outside `[0, len]` snap to `len`, not to the nearest edge.
    fn slice(&self, from: i64, to: i64) -> Value {
        let len = self.items.len();
        let clamp = |bound: i64| usize::try_from(bound).ok().filter(|b| *b <= len).unwrap_or(len);
        let (from, to) = (clamp(from), clamp(to));
        if from > to {
            return Value::List(ListValue::new());
        }
        Value::List(ListValue::copy_from(&self.items[from..to]))
    }

    fn contains(&self, value: &Value) -> Value {
        self.items
            .iter()
            .position(|item| item.equals(value))
            .map_or(Value::NULL, |pos| Value::Number(NumericValue::from(pos)))
    }
}

impl fmt::Display for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl PartialEq for ListValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().zip(other.iter()).all(|(l, r)| l.equals(r))
    }
}

impl From<Vec<Value>> for ListValue {
    fn from(items: Vec<Value>) -> Self {
        Self::wrap(items)
    }
}

impl FromIterator<Value> for ListValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for ListValue {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ListValue {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
