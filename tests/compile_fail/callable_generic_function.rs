//! Test that a generic function produces a compile error.

#[curried::callable]
fn identity<T>(value: T) -> T {
    value
}

fn main() {
    let _ = identity(1);
}
