//! Test that a default for an undeclared parameter produces a compile error.

#[curried::callable(defaults(c = 1))]
fn add(a: i64, b: i64) -> i64 {
    a + b
}

fn main() {
    let _ = add(1, 2);
}
