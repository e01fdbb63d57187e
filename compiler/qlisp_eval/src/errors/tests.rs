use super::*;
use pretty_assertions::assert_eq;

#[test]
fn division_by_zero_has_correct_kind() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.message, "division by zero");
}

#[test]
fn unbound_symbol_names_the_symbol() {
    let err = unbound_symbol("foo");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundSymbol {
            name: "foo".to_string()
        }
    );
    assert_eq!(err.to_string(), "unbound symbol 'foo'");
}

#[test]
fn arity_mismatch_for_primitive() {
    assert_eq!(
        arity_mismatch("head", 1, 2).message,
        "'head' expects 1 argument, got 2"
    );
    assert_eq!(
        arity_mismatch("if", 3, 1).message,
        "'if' expects 3 arguments, got 1"
    );
}

#[test]
fn arity_mismatch_for_closure() {
    assert_eq!(
        arity_mismatch("", 2, 3).message,
        "function passed too many arguments: got 3, expected 2"
    );
}

#[test]
fn type_mismatch_messages() {
    assert_eq!(
        wrong_type("+", "number", "string").message,
        "'+' expected number, got string"
    );
    assert_eq!(
        not_a_function("number").message,
        "expected function as first element, got number"
    );
}

#[test]
fn remaining_kinds_render() {
    assert_eq!(empty_list("tail").message, "'tail' passed an empty list");
    assert_eq!(
        integer_overflow("multiplication").message,
        "integer overflow in multiplication"
    );
    assert_eq!(negative_exponent().message, "negative exponent");
    assert_eq!(
        malformed_form("'&' not followed by a single symbol").message,
        "malformed special form: '&' not followed by a single symbol"
    );
    assert_eq!(parse_failure("invalid number").message, "invalid number");
    assert_eq!(
        stack_overflow(64).message,
        "maximum call depth exceeded (limit: 64)"
    );
}

#[test]
fn errors_with_same_kind_are_equal() {
    assert_eq!(division_by_zero(), division_by_zero());
    assert_ne!(unbound_symbol("a"), unbound_symbol("b"));
}
