//! Choosing the bucket aspect closest to a source resolution.

use num_traits::Float;

use crate::BucketError;
use crate::dims::{Aspect, COMMON_ASPECTS, Resolution};

/// The entry of `aspects` whose ratio is nearest the ratio of `source`.
///
/// Ties go to the earliest entry. Every entry is parsed and validated, so a
/// single malformed entry fails the whole call.
///
/// ```
/// use zenbucket::{Resolution, select::closest_aspect};
///
/// let best = closest_aspect(Resolution::new(1024, 1024), &["4:3", "16:9", "1:1", "3:2"]);
/// assert_eq!(best, Ok("1:1"));
/// ```
pub fn closest_aspect<S: AsRef<str>>(
    source: Resolution,
    aspects: &[S],
) -> Result<&str, BucketError> {
    if !source.is_positive() {
        return Err(BucketError::InvalidDimensions);
    }
    let source_ratio = source.ratio();

    let mut best: Option<(&str, f64)> = None;
    for entry in aspects {
        let text = entry.as_ref();
        let aspect: Aspect = text.parse()?;
        if !aspect.is_positive() {
            return Err(BucketError::InvalidDimensions);
        }
        let distance = Float::abs(aspect.ratio() - source_ratio);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((text, distance));
        }
    }
    best.map(|(text, _)| text).ok_or(BucketError::NotFound)
}

/// The entry of [`COMMON_ASPECTS`] nearest the ratio of `source`.
pub fn closest_common_aspect(source: Resolution) -> Result<Aspect, BucketError> {
    closest_aspect(source, COMMON_ASPECTS)?.parse()
}
