//! Value ranges: linear normalisation, series extrema, terminal width.

use terminal_size::{Width, terminal_size};

use crate::core::constants::FALLBACK_TERMINAL_WIDTH;

/// Map `v` from `[scale_min, scale_max]` onto `[a, b]`, clamped into `[a, b]`.
///
/// A degenerate scale (`scale_min == scale_max`) returns `v` untouched and
/// does **not** clamp; callers indexing with the result must bound it
/// themselves.
#[allow(clippy::float_cmp)]
#[inline]
#[must_use]
pub fn normalize(v: f64, a: f64, b: f64, scale_min: f64, scale_max: f64) -> f64 {
    if scale_max == scale_min {
        return v;
    }
    let mapped = ((v - scale_min) / (scale_max - scale_min)) * (b - a) + a;
    a.max(b.min(mapped))
}

/// Inclusive `(min, max)` over the finite values, `None` if there are none.
#[must_use]
pub fn series_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((low, high)) => Some((low.min(v), high.max(v))),
        })
}

/// Current terminal width in cells (80 fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(FALLBACK_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
}
