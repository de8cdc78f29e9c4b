//! Container capability for indexable values.

use super::Value;
use crate::errors::EvalResult;

/// Keyed/indexed access shared by every container kind.
///
/// The evaluator reaches this through `Value::as_container` and
/// `Value::as_container_mut` without matching on the concrete variant.
/// Each implementation decides how keys are coerced and which edge cases
/// fault; see `ListValue` for the list policies.
pub trait ContainerValue {
    /// Read the element addressed by `key`.
    fn get(&self, key: &Value) -> EvalResult;

    /// Replace the element addressed by `key`. Returns whether a prior
    /// value existed at that position.
    fn put(&mut self, key: &Value, value: Value) -> EvalResult<bool>;

    /// Whether `key` addresses an existing element.
    fn has(&self, key: &Value) -> EvalResult<bool>;

    /// Remove the element addressed by `key`. Invalid keys are a no-op
    /// returning `false`, never a fault.
    fn delete(&mut self, key: &Value) -> EvalResult<bool>;

    /// Copy of the half-open range `[from, to)`.
    fn slice(&self, from: i64, to: i64) -> Value;

    /// Position of the first element equal to `value`, or `Value::NULL`.
    fn contains(&self, value: &Value) -> Value;
}
