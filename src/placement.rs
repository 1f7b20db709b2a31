//! Where to cut a bucket out of its source image.
//!
//! After a bucket is resolved, the cropper cuts the largest region of the
//! bucket's aspect from the source and resizes it down to the bucket.

use crate::BucketError;
use crate::dims::{Gravity, Rect, Resolution};

/// Largest region of `source` with the same aspect as `bucket`, positioned by `gravity`.
///
/// ```
/// use zenbucket::{Gravity, Rect, Resolution, placement::crop_rect};
///
/// let r = crop_rect(Resolution::new(1920, 1080), Resolution::new(1024, 1024), Gravity::Center);
/// assert_eq!(r, Ok(Rect::new(420, 0, 1080, 1080)));
/// ```
pub fn crop_rect(
    source: Resolution,
    bucket: Resolution,
    gravity: Gravity,
) -> Result<Rect, BucketError> {
    if !source.is_positive() || !bucket.is_positive() {
        return Err(BucketError::InvalidDimensions);
    }
    let (sw, sh) = (source.width, source.height);
    let (bw, bh) = (bucket.width, bucket.height);

    // Cross-multiply so exact matches don't depend on float comparison.
    let cross_s = sw as u64 * bh as u64;
    let cross_b = sh as u64 * bw as u64;
    if cross_s == cross_b {
        return Ok(Rect::new(0, 0, sw, sh));
    }

    if cross_s > cross_b {
        // Source is wider: keep full height, cut width.
        let w = proportional(sh, bw, bh).min(sw);
        let x = gravity.offset_1d(sw - w, true);
        Ok(Rect::new(x, 0, w, sh))
    } else {
        // Source is taller: keep full width, cut height.
        let h = proportional(sw, bh, bw).min(sh);
        let y = gravity.offset_1d(sh - h, false);
        Ok(Rect::new(0, y, sw, h))
    }
}

/// `round(basis * num / den)`, at least 1, in integer arithmetic.
fn proportional(basis: u32, num: u32, den: u32) -> u32 {
    let scaled = basis as u64 * num as u64;
    let den = den as u64;
    let v = (scaled + den / 2) / den;
    v.clamp(1, u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(sw: u32, sh: u32, bw: u32, bh: u32) -> Rect {
        crop_rect(Resolution::new(sw, sh), Resolution::new(bw, bh), Gravity::Center).unwrap()
    }

    #[test]
    fn same_aspect_is_full_source() {
        let r = rect(2048, 1536, 1024, 768);
        assert!(r.is_full(Resolution::new(2048, 1536)));
    }

    #[test]
    fn wider_source_cuts_width() {
        assert_eq!(rect(1920, 1080, 1024, 1024), Rect::new(420, 0, 1080, 1080));
        assert_eq!(rect(1025, 1002, 960, 960), Rect::new(11, 0, 1002, 1002));
    }

    #[test]
    fn taller_source_cuts_height() {
        assert_eq!(rect(1024, 1024, 1024, 576), Rect::new(0, 224, 1024, 576));
        assert_eq!(rect(1025, 1002, 1024, 768), Rect::new(0, 116, 1025, 769));
    }

    #[test]
    fn gravity_moves_region() {
        let src = Resolution::new(1920, 1080);
        let bucket = Resolution::new(1024, 1024);
        let left = crop_rect(src, bucket, Gravity::Percentage(0.0, 0.5)).unwrap();
        assert_eq!(left, Rect::new(0, 0, 1080, 1080));
        let right = crop_rect(src, bucket, Gravity::Percentage(1.0, 0.5)).unwrap();
        assert_eq!(right, Rect::new(840, 0, 1080, 1080));
    }

    #[test]
    fn region_keeps_bucket_aspect() {
        let r = rect(12225, 1002, 960, 960);
        assert_eq!(r.size(), Resolution::new(1002, 1002));
        assert_eq!(r.x, (12225 - 1002) / 2);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(
            crop_rect(Resolution::new(0, 5), Resolution::new(64, 64), Gravity::Center),
            Err(BucketError::InvalidDimensions)
        );
        assert_eq!(
            crop_rect(Resolution::new(64, 64), Resolution::new(64, 0), Gravity::Center),
            Err(BucketError::InvalidDimensions)
        );
    }
}
