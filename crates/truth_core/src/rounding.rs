//! Integer-only arithmetic helpers shared by the rule evaluator.
//!
//! No floats anywhere in the pricing path — this module centralizes the two
//! primitives (floor division, integer median) that would otherwise tempt a
//! float shortcut.

/// Floor-to-negative-infinity division: rounds toward `-inf`, unlike Rust's
/// built-in `/` which truncates toward zero.
///
/// `floor_div(-301, 2) == -151`.
#[inline]
pub fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Integer median of a slice: stable sort, odd length returns the middle
/// element, even length returns `floor_div(a + b, 2)` of the two middle
/// elements. Empty input is defined as `0` (the bias baseline before any
/// accepted human quote).
pub fn median_int(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        let a = sorted[n / 2 - 1];
        let b = sorted[n / 2];
        floor_div(a + b, 2)
    }
}
