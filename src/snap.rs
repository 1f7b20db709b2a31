//! Snapping dimensions to a granularity grid.
//!
//! Latent image models downsample by 8 and train on 64-pixel buckets, so the
//! default granularity is [`DEFAULT_GRANULARITY`].

use num_traits::Float;

use crate::BucketError;
use crate::dims::Resolution;

/// Default bucket granularity in pixels.
pub const DEFAULT_GRANULARITY: u32 = 64;

/// Round `(w, h)` to the nearest positive multiples of `granularity`.
///
/// Each axis becomes `max(1, round(v / G)) * G`, rounding halves away from
/// zero. The result is never smaller than `G` on either axis, and saturates at
/// the largest multiple of `G` that fits in `u32`.
///
/// ```
/// use zenbucket::snap::snap_to_grid;
/// use zenbucket::Resolution;
///
/// assert_eq!(snap_to_grid(1365.33, 768.0, 64), Ok(Resolution::new(1344, 768)));
/// assert_eq!(snap_to_grid(31.5, 10.0, 64), Ok(Resolution::new(64, 64)));
/// ```
pub fn snap_to_grid(w: f64, h: f64, granularity: u32) -> Result<Resolution, BucketError> {
    if granularity == 0 {
        return Err(BucketError::ZeroGranularity);
    }
    Ok(Resolution::new(
        snap_axis(w, granularity),
        snap_axis(h, granularity),
    ))
}

pub(crate) fn snap_axis(v: f64, g: u32) -> u32 {
    let max_steps = (u32::MAX / g) as f64;
    // NaN and negatives fall to the one-step minimum.
    let steps = Float::round(v / g as f64);
    let steps = if steps >= 1.0 { steps.min(max_steps) } else { 1.0 };
    steps as u32 * g
}

/// `round(v / g) * g` without the one-step minimum; zero when `v` rounds to zero.
pub(crate) fn round_to(v: f64, g: u32) -> u32 {
    let max_steps = (u32::MAX / g) as f64;
    let steps = Float::round(v / g as f64);
    let steps = if steps >= 0.0 { steps.min(max_steps) } else { 0.0 };
    steps as u32 * g
}

/// Largest multiple of `g` that is ≤ `v` (zero when `v < g`).
pub(crate) fn floor_to(v: u32, g: u32) -> u32 {
    v / g * g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(snap_to_grid(1025.0, 768.0, 64), Ok(Resolution::new(1024, 768)));
        assert_eq!(snap_to_grid(1002.0, 1002.0, 64), Ok(Resolution::new(1024, 1024)));
        assert_eq!(snap_to_grid(592.66, 797.9, 64), Ok(Resolution::new(576, 768)));
    }

    #[test]
    fn halves_round_away_from_zero() {
        // 800 / 64 = 12.5
        assert_eq!(snap_to_grid(800.0, 288.0, 64), Ok(Resolution::new(832, 320)));
    }

    #[test]
    fn clamps_to_one_step() {
        assert_eq!(snap_to_grid(31.5, 0.0, 64), Ok(Resolution::new(64, 64)));
        assert_eq!(snap_to_grid(-500.0, f64::NAN, 64), Ok(Resolution::new(64, 64)));
    }

    #[test]
    fn uses_granularity_as_multiplier() {
        let r = snap_to_grid(1000.0, 700.0, 32).unwrap();
        assert_eq!(r, Resolution::new(992, 704));
        assert_eq!(r.width % 32, 0);
        assert_eq!(r.height % 32, 0);

        let r = snap_to_grid(100.0, 37.0, 8).unwrap();
        assert_eq!(r, Resolution::new(104, 40));
    }

    #[test]
    fn granularity_one_is_plain_rounding() {
        assert_eq!(snap_to_grid(12.5, 0.4, 1), Ok(Resolution::new(13, 1)));
    }

    #[test]
    fn zero_granularity_rejected() {
        assert_eq!(snap_to_grid(100.0, 100.0, 0), Err(BucketError::ZeroGranularity));
    }

    #[test]
    fn saturates_huge_values() {
        let r = snap_to_grid(1e30, f64::INFINITY, 64).unwrap();
        assert_eq!(r.width, u32::MAX / 64 * 64);
        assert_eq!(r.height, u32::MAX / 64 * 64);
    }

    #[test]
    fn round_to_allows_zero() {
        assert_eq!(round_to(31.0, 64), 0);
        assert_eq!(round_to(32.0, 64), 64);
        assert_eq!(round_to(720.0, 64), 704);
        assert_eq!(round_to(-1.0, 64), 0);
    }

    #[test]
    fn floor_to_grid() {
        assert_eq!(floor_to(1025, 64), 1024);
        assert_eq!(floor_to(1002, 64), 960);
        assert_eq!(floor_to(63, 64), 0);
    }
}
