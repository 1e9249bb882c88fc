//! Pagination normalization.

/// Default page size when the caller supplies none.
pub const DEFAULT_LIMIT: u64 = 20;

/// Upper bound on the page size.
pub const MAX_LIMIT: u64 = 100;

/// Normalize a caller-supplied limit.
///
/// Absent or non-positive values fall back to [`DEFAULT_LIMIT`]; anything
/// above [`MAX_LIMIT`] clamps down.
#[must_use]
pub fn clamp_limit(limit: Option<i64>) -> u64 {
    match limit {
        Some(l) if l > 0 => u64::try_from(l).map_or(DEFAULT_LIMIT, |l| l.min(MAX_LIMIT)),
        _ => DEFAULT_LIMIT,
    }
}

/// Normalize a caller-supplied offset: absent or negative clamps to zero.
#[must_use]
pub fn clamp_offset(offset: Option<i64>) -> u64 {
    offset.map_or(0, |o| u64::try_from(o).unwrap_or(0))
}
