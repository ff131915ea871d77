//! Exponential Moving Average (EMA), non-adjusted recursive form.
//!
//! Seed: EMA at the first defined sample equals that sample.
//! Recursion: EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1], alpha = 2/(span+1).
//!
//! This is deliberately NOT the fully-weighted-since-inception EMA; the two
//! differ numerically and reference output depends on the recursive form.
//! An undefined input sample yields an undefined output sample and leaves
//! the recursion state untouched.

/// Compute the recursive EMA over an optional-sample column.
pub fn ema_series(values: &[Option<f64>], span: usize) -> Vec<Option<f64>> {
    assert!(span >= 1, "EMA span must be >= 1");
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut out = vec![None; values.len()];
    let mut state: Option<f64> = None;
    for (i, sample) in values.iter().enumerate() {
        if let Some(x) = *sample {
            let ema = match state {
                None => x,
                Some(prev) => alpha * x + (1.0 - alpha) * prev,
            };
            state = Some(ema);
            out[i] = Some(ema);
        }
    }
    out
}
