//! Integration tests for the `#[callable]` attribute.
//!
//! The attribute reads arity, parameter names, and defaults from an
//! ordinary function at compile time.

#![cfg(feature = "derive")]

use curried::{BindingError, Callable, arguments, callable, curry};
use rstest::rstest;

#[callable]
fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[callable(defaults(b = 10))]
fn add_default(a: i64, b: i64) -> i64 {
    a + b
}

#[callable(name = "join")]
pub fn concat(first: Vec<i32>, second: Vec<i32>) -> Vec<i32> {
    let mut result = first;
    result.extend(second);
    result
}

#[callable]
fn describe(mut label: String, suffix: String) -> String {
    label.push_str(&suffix);
    label
}

#[callable(defaults(step = 1, start = 0))]
fn range_sum(start: u32, end: u32, step: u32) -> u32 {
    (start..end).step_by(step as usize).sum()
}

#[rstest]
fn test_derived_arity_and_name() {
    let callable = add_callable();
    assert_eq!(callable.arity(), 2);
    assert_eq!(callable.name(), "add");

    let names: Vec<&str> = callable
        .signature()
        .parameters()
        .iter()
        .map(|parameter| parameter.name())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[rstest]
fn test_original_function_is_kept() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(concat(vec![1], vec![2]), vec![1, 2]);
}

#[rstest]
fn test_curry_derived_callable() {
    let add = curry(add_callable());
    let add_one = add.call([1]).partial().expect("partial");
    let add_two = add.call([2]).partial().expect("partial");

    assert_eq!(add_one.call([1]).complete(), Some(Ok(2)));
    assert_eq!(add_two.call([1]).complete(), Some(Ok(3)));
}

#[rstest]
fn test_named_arguments_bind_by_parameter_name() {
    let add = curry(add_callable());
    let step = add.call(arguments![; b = 40]).partial().expect("partial");
    assert_eq!(step.call(arguments![; a = 2]).complete(), Some(Ok(42)));
}

#[rstest]
fn test_defaults_count_toward_arity() {
    let add = curry(add_default_callable());
    assert_eq!(add.arity(), 2);

    let step = add.call([1]).partial().expect("defaulted parameter still counts");
    assert_eq!(step.call([2]).complete(), Some(Ok(3)));
}

#[rstest]
fn test_default_supplied_by_name_completes_first_call() {
    let add = curry(add_default_callable());
    assert_eq!(add.call(arguments![2; b = 10]).complete(), Some(Ok(12)));
}

#[rstest]
fn test_default_fills_unbound_parameter_when_call_is_direct() {
    assert_eq!(add_default_callable().call(arguments![5]), Ok(15));
}

#[rstest]
fn test_multiple_defaults() {
    let range_sum = range_sum_callable();
    assert_eq!(range_sum.call(arguments![; end = 5]), Ok(10));
    assert_eq!(range_sum.call(arguments![1, 7, 2]), Ok(9));
}

#[rstest]
fn test_name_override_preserved_across_chain() {
    let join = curry(concat_callable());
    assert_eq!(join.name(), "join");

    let step = join.call([vec![1, 2]]).partial().expect("partial");
    assert_eq!(step.name(), "join");
    assert_eq!(step.call([vec![3, 4]]).complete(), Some(Ok(vec![1, 2, 3, 4])));
}

#[rstest]
fn test_mut_parameter() {
    let describe = curry(describe_callable());
    let result = describe
        .call(["curr".to_string()])
        .call(["ied".to_string()])
        .and_then(|application| application.complete());
    assert_eq!(result, Some(Ok("curried".to_string())));
}

#[rstest]
fn test_binding_error_from_derived_callable() {
    let add = curry(add_callable());
    assert_eq!(
        add.call(arguments![1; c = 2]).complete(),
        Some(Err(BindingError::UnexpectedKeyword {
            callable: "add".to_string(),
            keyword: "c".to_string(),
        }))
    );
}
