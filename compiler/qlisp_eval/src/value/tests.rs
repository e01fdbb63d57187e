use super::*;
use crate::errors::division_by_zero;
use pretty_assertions::assert_eq;

fn nop(_: &mut Interpreter, _: &Environment, _: Vec<Value>) -> Value {
    Value::empty()
}

fn other_nop(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> Value {
    Value::quoted(args)
}

#[test]
fn display_atoms() {
    assert_eq!(Value::number(-42).to_string(), "-42");
    assert_eq!(Value::boolean(true).to_string(), "#t");
    assert_eq!(Value::boolean(false).to_string(), "#f");
    assert_eq!(Value::symbol("square").to_string(), "square");
    assert_eq!(Value::builtin("+", nop).to_string(), "<builtin>");
}

#[test]
fn display_escapes_strings() {
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(
        Value::string("a\n\"b\"\t\\").to_string(),
        "\"a\\n\\\"b\\\"\\t\\\\\""
    );
    assert_eq!(escape("\u{7}\u{8}\u{c}\r\u{b}'\0"), "\\a\\b\\f\\r\\v\\'\\0");
}

#[test]
fn display_lists() {
    let value = Value::evaluable(vec![
        Value::symbol("+"),
        Value::number(1),
        Value::quoted(vec![Value::number(2), Value::quoted(vec![])]),
    ]);
    assert_eq!(value.to_string(), "(+ 1 {2 {}})");
    assert_eq!(Value::empty().to_string(), "()");
}

#[test]
fn display_error() {
    assert_eq!(
        Value::from(division_by_zero()).to_string(),
        "Error: division by zero"
    );
}

#[test]
fn display_closure() {
    let closure = Value::closure(
        vec!["x".to_string(), "y".to_string()],
        vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")],
    );
    assert_eq!(closure.to_string(), "(\\ {x y} {+ x y})");
}

#[test]
fn builtins_compare_by_name() {
    assert_eq!(Value::builtin("+", nop), Value::builtin("+", other_nop));
    assert_ne!(Value::builtin("+", nop), Value::builtin("-", nop));
}

#[test]
fn closures_ignore_environment_in_equality() {
    let a = Closure::new(vec!["x".to_string()], vec![Value::symbol("x")]);
    let b = Closure::new(vec!["x".to_string()], vec![Value::symbol("x")]);
    b.env().define_local("extra", Value::number(1));
    assert_eq!(a, b);
}

#[test]
fn clone_is_equal_and_independent() {
    let closure = Closure::new(vec!["x".to_string()], vec![Value::symbol("x")]);
    closure.env().define_local("y", Value::number(1));
    let copy = closure.clone();
    copy.env().define_local("y", Value::number(2));

    assert_eq!(closure, copy);
    assert_eq!(closure.env().lookup("y"), Ok(Value::number(1)));
    assert_eq!(copy.env().lookup("y"), Ok(Value::number(2)));
}

#[test]
fn list_flavors_are_distinct() {
    assert_ne!(
        Value::evaluable(vec![Value::number(1)]),
        Value::quoted(vec![Value::number(1)])
    );
}

#[test]
fn type_names() {
    assert_eq!(Value::number(1).type_name(), "number");
    assert_eq!(Value::string("").type_name(), "string");
    assert_eq!(Value::empty().type_name(), "evaluable list");
    assert_eq!(Value::quoted(vec![]).type_name(), "quoted list");
    assert_eq!(Value::closure(vec![], vec![]).type_name(), "function");
    assert_eq!(Value::from(division_by_zero()).type_name(), "error");
}

#[test]
fn accessors() {
    assert_eq!(Value::number(3).as_number(), Some(3));
    assert_eq!(Value::boolean(true).as_number(), None);
    assert_eq!(Value::symbol("x").as_symbol(), Some("x"));
    assert_eq!(Value::string("s").as_str(), Some("s"));
    assert_eq!(Value::boolean(false).as_boolean(), Some(false));
    assert_eq!(
        Value::quoted(vec![Value::number(1)]).as_list(),
        Some(&[Value::number(1)][..])
    );
    assert!(Value::from(division_by_zero()).is_error());
    assert!(Value::from(division_by_zero()).as_error().is_some());
}

fn nested(depth: usize) -> Value {
    let mut value = Value::number(0);
    for _ in 0..depth {
        value = Value::quoted(vec![value]);
    }
    value
}

#[test]
fn deep_list_drops_without_recursion() {
    drop(nested(100_000));
}

#[test]
fn deep_list_clones_and_compares() {
    let value = nested(100_000);
    let copy = value.clone();
    assert!(value == copy);
    assert!(value != nested(99_999));
}

#[test]
fn deep_closure_body_drops_without_recursion() {
    let closure = Value::closure(vec![], vec![nested(100_000)]);
    drop(Value::quoted(vec![closure]));
}

#[test]
fn list_storage_moves_out() {
    let list = ValueList::from(vec![Value::number(1), Value::number(2)]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.into_vec(), vec![Value::number(1), Value::number(2)]);
}
