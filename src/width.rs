//! Codeword pixel-width estimation from candidate anchor points.
//!
//! The symbol decoder disambiguates column counts during synchronization
//! with a lower and an upper bound on the codeword width. Both bounds are
//! derived here from the anchor octet alone: two outer-corner pairings
//! measured directly, and two stop-pattern pairings rescaled to codeword
//! units by the fixed module-count ratio of the symbology.
//!
//! Any absent anchor degrades its pairing to a sentinel (`i32::MAX` for the
//! minimum variant, `0` for the maximum variant), so the min/max-of-four
//! reduction stays meaningful as long as one pairing is fully resolved. With
//! all four degraded the decoder receives the maximally permissive
//! `(0, i32::MAX)` bound and falls back to its own synchronization.

use crate::models::{CandidateAnchors, Point};

/// Modules in one PDF417 codeword
pub const MODULES_IN_CODEWORD: i32 = 17;
/// Modules in the stop pattern
pub const MODULES_IN_STOP_PATTERN: i32 = 18;

/// Horizontal pixel distance, truncated per coordinate; `i32::MAX` when
/// either point is absent
fn min_width(p1: Option<Point>, p2: Option<Point>) -> i32 {
    match (p1, p2) {
        (Some(p1), Some(p2)) => (p1.x as i32 - p2.x as i32).abs(),
        _ => i32::MAX,
    }
}

/// Horizontal pixel distance, truncated per coordinate; `0` when either
/// point is absent
fn max_width(p1: Option<Point>, p2: Option<Point>) -> i32 {
    match (p1, p2) {
        (Some(p1), Some(p2)) => (p1.x as i32 - p2.x as i32).abs(),
        _ => 0,
    }
}

/// Rescale a stop-pattern width to codeword units. Sentinels pass through
/// untouched so a degraded pairing stays exactly at the sentinel.
fn to_codeword_units(width: i32) -> i32 {
    if width == 0 || width == i32::MAX {
        return width;
    }
    width * MODULES_IN_CODEWORD / MODULES_IN_STOP_PATTERN
}

/// Lower bound on the codeword pixel width for one candidate.
///
/// Minimum over the two outer pairings (0,4), (1,5) and the two
/// stop-pattern pairings (6,2), (7,3) rescaled to codeword units.
pub fn min_codeword_width(p: &CandidateAnchors) -> i32 {
    (min_width(p[0], p[4]))
        .min(to_codeword_units(min_width(p[6], p[2])))
        .min(min_width(p[1], p[5]))
        .min(to_codeword_units(min_width(p[7], p[3])))
}

/// Upper bound on the codeword pixel width for one candidate.
///
/// Maximum over the same four pairings as [`min_codeword_width`].
pub fn max_codeword_width(p: &CandidateAnchors) -> i32 {
    (max_width(p[0], p[4]))
        .max(to_codeword_units(max_width(p[6], p[2])))
        .max(max_width(p[1], p[5]))
        .max(to_codeword_units(max_width(p[7], p[3])))
}
