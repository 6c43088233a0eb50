#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{EvalError, EvalErrorKind};
use crate::thunk::{Args, Thunk};

fn noop(_env: &Environment, _args: Args) -> Result<Thunk, EvalError> {
    Ok(Thunk::Done(Value::Nil))
}

// Factories and accessors

#[test]
fn factories_tag_correctly() {
    assert_eq!(Value::string("hi").as_str(), Some("hi"));
    assert_eq!(Value::symbol("x").as_symbol(), Some("x"));
    assert_eq!(Value::Number(3).as_number(), Some(3));
    assert_eq!(Value::Boolean(false).as_bool(), Some(false));
    assert!(Value::Nil.is_nil());
    assert!(Value::closure(noop, Environment::empty()).as_closure().is_some());
    assert!(Value::empty_box().as_box().is_some());
    assert_eq!(Value::string("hi").as_symbol(), None);
}

#[test]
fn type_names() {
    let cases = [
        (Value::Number(0), "number"),
        (Value::Boolean(true), "boolean"),
        (Value::string(""), "string"),
        (Value::symbol("s"), "symbol"),
        (Value::Nil, "nil"),
        (Value::pair(Value::Nil, Value::Nil), "pair"),
        (Value::closure(noop, Environment::empty()), "closure"),
        (Value::empty_box(), "box"),
    ];
    for (value, name) in cases {
        assert_eq!(value.type_name(), name);
    }
}

#[test]
fn list_builds_second_chain() {
    let list = Value::list([Value::Number(1), Value::Number(2)]);
    let first = list.as_pair().unwrap();
    assert_eq!(first.first(), &Value::Number(1));
    let second = first.second().as_pair().unwrap();
    assert_eq!(second.first(), &Value::Number(2));
    assert!(second.second().is_nil());
    assert_eq!(Value::list(Vec::<Value>::new()), Value::Nil);
}

#[test]
fn proper_list_detection() {
    assert!(Value::Nil.is_proper_list());
    assert!(Value::list([Value::Number(1)]).is_proper_list());
    assert!(!Value::pair(Value::Number(1), Value::Number(2)).is_proper_list());
    assert!(!Value::Number(1).is_proper_list());
}

// Boxes

#[test]
fn boxed_deep_copies_content() {
    let content = Value::pair(Value::string("a"), Value::Nil);
    let boxed = Value::boxed(&content).unwrap();
    let cell = boxed.as_box().unwrap();
    let (Value::Pair(original), Value::Pair(stored)) = (&content, cell.peek("peek").unwrap())
    else {
        panic!("expected pairs")
    };
    assert!(!Heap::ptr_eq(original, &stored));
    assert_eq!(cell.peek("peek").unwrap(), content);
}

#[test]
fn boxed_rejects_box_content() {
    let inner = Value::boxed(&Value::Number(1)).unwrap();
    assert_eq!(Value::boxed(&inner).unwrap_err().kind, EvalErrorKind::BoxOfBox);
}

#[test]
fn empty_box_starts_empty() {
    let boxed = Value::empty_box();
    assert!(boxed.as_box().unwrap().is_empty());
}

// Deep copy

#[test]
fn deep_copy_is_equal_and_disjoint() {
    let inner = Value::list([Value::Number(1), Value::Number(2)]);
    let value = Value::list([inner, Value::symbol("s"), Value::Boolean(true)]);
    let copy = value.deep_copy().unwrap();
    assert_eq!(copy, value);

    let (Value::Pair(a), Value::Pair(b)) = (&value, &copy) else {
        panic!("expected pairs")
    };
    assert!(!Heap::ptr_eq(a, b));
    let (Value::Pair(a_inner), Value::Pair(b_inner)) = (a.first(), b.first()) else {
        panic!("expected nested pairs")
    };
    assert!(!Heap::ptr_eq(a_inner, b_inner));
}

#[test]
fn deep_copy_keeps_improper_tail() {
    let value = Value::pair(Value::Number(1), Value::Number(2));
    assert_eq!(value.deep_copy().unwrap(), value);
}

#[test]
fn deep_copy_of_long_list() {
    let value = Value::list((0..100_000).map(Value::Number));
    let copy = value.deep_copy().unwrap();
    assert_eq!(copy, value);
}

#[test]
fn deep_copy_rejects_boxes() {
    let value = Value::list([Value::Number(1), Value::empty_box()]);
    assert_eq!(value.deep_copy().unwrap_err().kind, EvalErrorKind::BoxOfBox);
}

#[test]
fn deep_copy_shares_closure_environment() {
    let env = Environment::new([("n", Value::Number(1))]);
    let closure = Value::closure(noop, env.clone());
    let copy = closure.deep_copy().unwrap();
    assert_eq!(copy, closure);
    assert!(Environment::ptr_eq(copy.as_closure().unwrap().env(), &env));
}

// Equality

#[test]
fn equality_is_structural_for_data() {
    assert_eq!(
        Value::list([Value::string("a"), Value::Number(1)]),
        Value::list([Value::string("a"), Value::Number(1)])
    );
    assert_ne!(Value::string("a"), Value::symbol("a"));
    assert_ne!(Value::Number(1), Value::Boolean(true));
    assert_ne!(
        Value::list([Value::Number(1)]),
        Value::list([Value::Number(1), Value::Number(2)])
    );
}

#[test]
fn equality_is_identity_for_boxes() {
    let a = Value::boxed(&Value::Number(1)).unwrap();
    let b = Value::boxed(&Value::Number(1)).unwrap();
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

// Rendering

#[test]
fn render_immediates() {
    assert_eq!(Value::Number(-42).to_string(), "-42");
    assert_eq!(Value::Boolean(true).to_string(), "#t");
    assert_eq!(Value::Boolean(false).to_string(), "#f");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn render_heap_values() {
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(Value::symbol("foo").to_string(), "'foo");
    assert_eq!(
        Value::closure(noop, Environment::empty()).to_string(),
        "<closure>"
    );
    assert_eq!(Value::empty_box().to_string(), "<box>");
}

#[test]
fn render_escapes_strings() {
    assert_eq!(
        Value::string("say \"hi\"\n").to_string(),
        r#""say \"hi\"\n""#
    );
    assert_eq!(Value::string("a\\b").to_string(), r#""a\\b""#);
}

#[test]
fn render_lists_flat() {
    let list = Value::list([Value::Number(1), Value::Number(2)]);
    assert_eq!(list.to_string(), "1 . 2 . nil");
    let improper = Value::pair(Value::string("a"), Value::symbol("b"));
    assert_eq!(improper.to_string(), "\"a\" . 'b");
}

#[test]
fn render_nested_pair_in_first_position() {
    let value = Value::list([Value::pair(Value::Number(1), Value::Number(2))]);
    assert_eq!(value.to_string(), "(1 . 2) . nil");
    let deeper = Value::list([
        Value::list([Value::Number(1), Value::Number(2)]),
        Value::Number(3),
    ]);
    assert_eq!(deeper.to_string(), "(1 . 2 . nil) . 3 . nil");
}

#[test]
fn debug_names_variants() {
    assert_eq!(format!("{:?}", Value::Number(1)), "Number(1)");
    assert_eq!(format!("{:?}", Value::string("a")), "Str(\"a\")");
    assert_eq!(
        format!("{:?}", Value::pair(Value::Nil, Value::Nil)),
        "Pair(Nil, Nil)"
    );
}
