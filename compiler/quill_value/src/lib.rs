#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! Quill Value - runtime value model for the Quill expression language.
//!
//! This crate provides:
//! - Runtime values (`Value`, `NumericValue`, `ListValue`)
//! - The container capability (`ContainerValue`) and rolling index
//!   normalization (`normalize_index`)
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//! - Binary operator dispatch for the evaluator (`evaluate_binary`)
//!
//! # Lists
//!
//! Lists take part in arithmetic like scalars: two lists of equal length
//! combine elementwise, a list and anything else broadcast. Indexing is raw
//! for `get`/`put`/`has` and wrapping for `delete`/`insert_at`.
//!
//! # Logging
//!
//! Notable paths emit `tracing` events. Call `init_tracing()` once at
//! startup and set `RUST_LOG` (e.g. `RUST_LOG=quill_value=trace`) to see them.

mod errors;
mod operators;
mod value;

use std::sync::Once;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use operators::{evaluate_binary, BinaryOp};
pub use value::{
    normalize_index, ContainerValue, ListValue, NumericValue, Value, MAX_STRING_LEN, PRETTY_EDGE,
    PRETTY_FULL_LIMIT,
};

// Re-export error constructors for use by the evaluator
pub use errors::{
    division_by_zero, index_out_of_range, invalid_operand, shape_mismatch, string_too_long,
    type_mismatch, unsupported_operation,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the value model.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_value=debug` or `RUST_LOG=quill_value=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            if let Err(err) = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
            {
                tracing::debug!(%err, "global tracing subscriber already installed");
            }
        }
    });
}
