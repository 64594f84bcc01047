//! Test that parameters of differing types produce a compile error.

#[curried::callable]
fn scale(factor: f64, value: i64) -> f64 {
    factor * value as f64
}

fn main() {
    let _ = scale(2.0, 3);
}
