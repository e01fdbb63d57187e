//! Property-based tests for the evaluation core.
//!
//! Generated values and programs check the invariants evaluation relies on:
//! 1. Cloning yields an equal, independent value
//! 2. Division and modulo by zero are errors, never panics
//! 3. Arithmetic matches checked `i64` arithmetic
//! 4. Partial application is equivalent to full application
//! 5. Variadic formals capture every remaining argument
//! 6. `if` never evaluates the unselected branch
//! 7. Printed data reads back as the same value

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::arithmetic_side_effects,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use qlisp_eval::{reader, silent_handler, EvalErrorKind, Interpreter, Value};

fn interpreter() -> Interpreter {
    Interpreter::builder().print_handler(silent_handler()).build()
}

fn eval(interpreter: &mut Interpreter, source: &str) -> Value {
    interpreter.eval_line(source).unwrap()
}

// -- Value Generation Strategies --

fn symbol_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_?!]{0,8}").expect("valid regex")
}

/// Plain data: everything the reader can produce from well-formed source.
fn data_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::Number),
        any::<bool>().prop_map(Value::Boolean),
        "[ -~\t\n]{0,12}".prop_map(Value::Str),
        symbol_strategy().prop_map(Value::Symbol),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::quoted),
            prop::collection::vec(inner, 0..6).prop_map(Value::evaluable),
        ]
    })
}

/// Data plus closures, which exercise the deep copy of captured environments.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        data_strategy(),
        (
            prop::collection::vec(symbol_strategy(), 0..4),
            prop::collection::vec(data_strategy(), 0..4),
        )
            .prop_map(|(formals, body)| Value::closure(formals, body)),
    ]
}

fn error_kind(value: &Value) -> Option<EvalErrorKind> {
    value.as_error().map(|err| err.kind.clone())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn clone_is_equal(value in value_strategy()) {
        let copy = value.clone();
        prop_assert_eq!(&copy, &value);
    }

    #[test]
    fn clone_of_closure_is_independent(bound in any::<i64>(), changed in any::<i64>()) {
        let closure = Value::closure(vec!["x".to_string()], vec![Value::symbol("x")]);
        let Value::Function(qlisp_eval::Function::Closure(original)) = &closure else {
            unreachable!("constructor builds a closure");
        };
        original.env().define_local("y", Value::Number(bound));

        let copy = original.clone();
        copy.env().define_local("y", Value::Number(changed));

        prop_assert_eq!(original.env().lookup("y").unwrap(), Value::Number(bound));
        prop_assert_eq!(copy.env().lookup("y").unwrap(), Value::Number(changed));
    }

    #[test]
    fn division_by_zero_is_error(n in any::<i64>()) {
        let mut interpreter = interpreter();
        prop_assert_eq!(
            error_kind(&eval(&mut interpreter, &format!("/ {n} 0"))),
            Some(EvalErrorKind::DivisionByZero)
        );
        prop_assert_eq!(
            error_kind(&eval(&mut interpreter, &format!("% {n} 0"))),
            Some(EvalErrorKind::DivisionByZero)
        );
    }

    #[test]
    fn arithmetic_matches_checked_ops(a in any::<i64>(), b in any::<i64>()) {
        let mut interpreter = interpreter();
        let cases = [
            ("+", a.checked_add(b)),
            ("-", a.checked_sub(b)),
            ("*", a.checked_mul(b)),
        ];
        for (op, expected) in cases {
            let result = eval(&mut interpreter, &format!("{op} {a} {b}"));
            match expected {
                Some(n) => prop_assert_eq!(result, Value::Number(n)),
                None => prop_assert!(matches!(
                    error_kind(&result),
                    Some(EvalErrorKind::IntegerOverflow { .. })
                ), "expected IntegerOverflow error"),
            }
        }
    }

    #[test]
    fn power_matches_checked_pow(base in -20i64..20, exp in 0u32..40) {
        let result = eval(&mut interpreter(), &format!("^ {base} {exp}"));
        match base.checked_pow(exp) {
            Some(n) => prop_assert_eq!(result, Value::Number(n)),
            None => prop_assert!(matches!(
                error_kind(&result),
                Some(EvalErrorKind::IntegerOverflow { .. })
            ), "expected IntegerOverflow error"),
        }
    }

    #[test]
    fn partial_application_is_equivalent(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
        let mut interpreter = interpreter();
        eval(&mut interpreter, "def {f} (\\ {x y z} {- (* x y) z})");
        let full = eval(&mut interpreter, &format!("f {a} {b} {c}"));
        let one_at_a_time = eval(&mut interpreter, &format!("((f {a}) {b}) {c}"));
        let two_then_one = eval(&mut interpreter, &format!("(f {a} {b}) {c}"));
        prop_assert_eq!(&full, &Value::Number(a * b - c));
        prop_assert_eq!(&one_at_a_time, &full);
        prop_assert_eq!(&two_then_one, &full);
    }

    #[test]
    fn variadic_captures_rest(first in any::<i64>(), rest in prop::collection::vec(any::<i64>(), 0..8)) {
        let mut interpreter = interpreter();
        eval(&mut interpreter, "def {rest-of} (\\ {x & xs} {xs})");
        let args: Vec<String> = rest.iter().map(|n| n.to_string()).collect();
        let result = eval(&mut interpreter, &format!("rest-of {first} {}", args.join(" ")));
        prop_assert_eq!(result, Value::quoted(rest.into_iter().map(Value::Number).collect()));
    }

    #[test]
    fn if_is_lazy(n in any::<i64>(), condition in any::<bool>()) {
        let source = if condition {
            format!("if #t {{{n}}} {{/ {n} 0}}")
        } else {
            format!("if #f {{/ {n} 0}} {{{n}}}")
        };
        prop_assert_eq!(eval(&mut interpreter(), &source), Value::Number(n));
    }

    #[test]
    fn printed_data_reads_back(value in data_strategy()) {
        let printed = value.to_string();
        let tree = qlisp_parse::parse(&printed).unwrap();
        let forms = reader::read_forms(&tree);
        prop_assert_eq!(forms, vec![value]);
    }
}
