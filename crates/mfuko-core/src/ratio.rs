//! Zero-safe ratio arithmetic shared by every aggregator.

/// Divides `part` by `total`, yielding `0.0` when `total` is zero.
///
/// The result is not clamped: values above `1.0` signal an overrun.
pub fn safe_ratio(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total
    }
}

/// Integer percentage of `part` over `total`, rounded half away from zero.
///
/// Returns `0` when `total` is zero.
pub fn rounded_percent(part: f64, total: f64) -> i64 {
    if total == 0.0 {
        return 0;
    }
    ((part / total) * 100.0).round() as i64
}
