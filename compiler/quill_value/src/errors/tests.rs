use super::*;
use pretty_assertions::assert_eq;

// Kind → message round-trip

#[test]
fn shape_mismatch_has_correct_kind() {
    let err = shape_mismatch(2, 3);
    assert_eq!(err.kind, EvalErrorKind::ShapeMismatch { left: 2, right: 3 });
    assert_eq!(err.message, "cannot operate on lists of uneven sizes (2 and 3)");
}

#[test]
fn type_mismatch_carries_context_label() {
    let err = type_mismatch("'address' to a list index", "string");
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            context: "'address' to a list index".to_string(),
            got: "string".to_string(),
        }
    );
    assert_eq!(
        err.message,
        "expected a number as 'address' to a list index, got string"
    );
}

#[test]
fn index_out_of_range_has_correct_kind() {
    let err = index_out_of_range(-1, 3);
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfRange { index: -1, len: 3 });
    assert_eq!(err.message, "index -1 out of range for list of length 3");
}

#[test]
fn division_by_zero_names_operation() {
    let err = division_by_zero("list index normalization");
    assert_eq!(err.message, "division by zero in list index normalization");
}

#[test]
fn unsupported_operation_has_correct_kind() {
    let err = unsupported_operation("subtract-from on list");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnsupportedOperation {
            operation: "subtract-from on list".to_string()
        }
    );
}

#[test]
fn string_too_long_names_limit() {
    let err = string_too_long(64);
    assert_eq!(err.kind, EvalErrorKind::StringTooLong { limit: 64 });
    assert_eq!(err.message, "string result exceeds the limit of 64 bytes");
}

#[test]
fn invalid_operand_message() {
    let err = invalid_operand("/", "string", "number");
    assert_eq!(err.message, "operator `/` cannot be applied to string and number");
}

// Notes and display

#[test]
fn display_without_notes_is_message() {
    let err = index_out_of_range(7, 2);
    assert_eq!(err.to_string(), err.message);
}

#[test]
fn display_appends_notes_in_order() {
    let err = shape_mismatch(1, 4)
        .with_note("while adding")
        .with_note("in element 0");
    assert_eq!(
        err.to_string(),
        "cannot operate on lists of uneven sizes (1 and 4)\n  note: while adding\n  note: in element 0"
    );
}

#[test]
fn error_source_is_kind() {
    use std::error::Error;
    let err = unsupported_operation("x");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("unsupported operation: x"));
}

#[test]
fn from_kind_conversion_renders_message() {
    let err: EvalError = EvalErrorKind::ArithmeticFault {
        operation: "insert".to_string(),
    }
    .into();
    assert_eq!(err.message, "division by zero in insert");
    assert!(err.notes.is_empty());
}
