//! Combinatoric functions.

/// The largest `n` for which `n!` fits in a [`f64`].
const MAX_FACTORIAL: u64 = 170;

/// Computes the factorial of `n`, `1 * 2 * ... * n`. Returns infinity if the result is too large
/// to fit in a [`f64`].
pub fn factorial(n: u64) -> f64 {
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }

    (2..=n).map(|k| k as f64).product()
}
