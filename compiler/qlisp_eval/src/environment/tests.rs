use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn lookup_finds_local_binding() {
    let env = Environment::new();
    env.define_local("x", Value::number(1));
    assert_eq!(env.lookup("x"), Ok(Value::number(1)));
}

#[test]
fn lookup_of_missing_name_is_unbound() {
    let env = Environment::new();
    let err = env.lookup("foo").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundSymbol {
            name: "foo".to_string()
        }
    );
}

#[test]
fn lookup_walks_to_parent() {
    let root = Environment::new();
    root.define_local("x", Value::number(1));
    let child = Environment::with_parent(&root);
    let grandchild = Environment::with_parent(&child);
    assert_eq!(grandchild.lookup("x"), Ok(Value::number(1)));
}

#[test]
fn inner_binding_shadows_outer() {
    let root = Environment::new();
    root.define_local("x", Value::number(1));
    let child = Environment::with_parent(&root);
    child.define_local("x", Value::number(2));
    assert_eq!(child.lookup("x"), Ok(Value::number(2)));
    assert_eq!(root.lookup("x"), Ok(Value::number(1)));
}

#[test]
fn define_local_replaces_in_place() {
    let env = Environment::new();
    env.define_local("a", Value::number(1));
    env.define_local("b", Value::number(2));
    env.define_local("a", Value::number(3));
    assert_eq!(env.names(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(env.lookup("a"), Ok(Value::number(3)));
    assert_eq!(env.len(), 2);
}

#[test]
fn define_global_writes_to_root() {
    let root = Environment::new();
    let child = Environment::with_parent(&Environment::with_parent(&root));
    child.define_global("g", Value::boolean(true));
    assert!(root.contains_local("g"));
    assert!(!child.contains_local("g"));
    assert_eq!(child.lookup("g"), Ok(Value::boolean(true)));
}

#[test]
fn sibling_scopes_do_not_see_each_other() {
    let root = Environment::new();
    let left = Environment::with_parent(&root);
    let right = Environment::with_parent(&root);
    left.define_local("only_left", Value::number(1));
    assert!(right.lookup("only_left").is_err());
}

#[test]
fn clone_shares_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.define_local("x", Value::number(5));
    env.define_local("y", Value::number(6));
    assert_eq!(env.lookup("x"), Ok(Value::number(5)));
    assert_eq!(alias.lookup("y"), Ok(Value::number(6)));
}

#[test]
fn copy_is_independent() {
    let root = Environment::new();
    let env = Environment::with_parent(&root);
    env.define_local("x", Value::number(1));

    let copy = env.copy();
    copy.define_local("x", Value::number(2));
    copy.define_local("y", Value::number(3));

    assert_eq!(env.lookup("x"), Ok(Value::number(1)));
    assert!(env.lookup("y").is_err());
    assert_eq!(copy.lookup("x"), Ok(Value::number(2)));

    // The parent link is shared, not copied.
    root.define_local("late", Value::number(4));
    assert_eq!(copy.lookup("late"), Ok(Value::number(4)));
}

#[test]
fn copy_deep_copies_closure_environments() {
    let env = Environment::new();
    let closure = Value::closure(vec!["a".to_string()], vec![Value::symbol("a")]);
    if let Value::Function(crate::Function::Closure(c)) = &closure {
        c.env().define_local("bound", Value::number(1));
    }
    env.define_local("f", closure);

    let copy = env.copy();
    let original = env.lookup("f").unwrap();
    let copied = copy.lookup("f").unwrap();
    match (&original, &copied) {
        (
            Value::Function(crate::Function::Closure(a)),
            Value::Function(crate::Function::Closure(b)),
        ) => {
            assert_eq!(b.env().lookup("bound"), Ok(Value::number(1)));
            b.env().define_local("bound", Value::number(2));
            assert_eq!(a.env().lookup("bound"), Ok(Value::number(1)));
        }
        _ => panic!("expected closures"),
    }
}

#[test]
fn set_parent_relinks_and_detaches() {
    let first = Environment::new();
    first.define_local("x", Value::number(1));
    let env = Environment::new();
    assert!(env.is_root());

    env.set_parent(Some(&first));
    assert!(!env.is_root());
    assert_eq!(env.lookup("x"), Ok(Value::number(1)));

    env.set_parent(None);
    assert!(env.is_root());
    assert!(env.lookup("x").is_err());
}

#[test]
fn root_of_root_is_itself() {
    let env = Environment::new();
    assert!(env.is_empty());
    env.root().define_local("x", Value::number(1));
    assert!(env.contains_local("x"));
}
