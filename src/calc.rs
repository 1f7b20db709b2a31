//! String-in, tuple-out operations for the bucket calculator.
//!
//! These take resolutions as `"WxH"` and aspects as `"W:H"` (either separator
//! is accepted in both) and return plain `(width, height)` pairs. An
//! unsatisfiable crop comes back as `(0, 0)`; callers that want to tell the
//! cases apart should use [`BucketResolver`] and match on [`CropOutcome`].
//!
//! ```
//! use zenbucket::calc;
//!
//! assert_eq!(calc::optimal_crop_resolution("1024x1024", "16:9", 0.05, 64, true), Ok((1024, 576)));
//! assert_eq!(calc::optimal_crop_resolution("100x100", "16:9", 0.0, 64, true), Ok((0, 0)));
//! ```
//!
//! [`CropOutcome`]: crate::CropOutcome

use crate::BucketError;
use crate::dims::{Aspect, Resolution};
use crate::resolver::BucketResolver;
use crate::select;

#[cfg(feature = "alloc")]
use crate::table::BucketTable;

/// Largest grid-aligned crop of `source_res` within `tolerance` of `target_aspect`.
///
/// Returns the closest candidate when the tolerance cannot be met, and
/// `(0, 0)` when nothing fits at all.
pub fn optimal_crop_resolution(
    source_res: &str,
    target_aspect: &str,
    tolerance: f64,
    granularity: u32,
    quiet: bool,
) -> Result<(u32, u32), BucketError> {
    let source: Resolution = source_res.parse()?;
    let aspect: Aspect = target_aspect.parse()?;
    let outcome = BucketResolver::new()
        .tolerance(tolerance)
        .granularity(granularity)
        .quiet(quiet)
        .optimal_crop(source, aspect)?;
    Ok(outcome.to_pair())
}

/// Grid-aligned size with `target_aspect` and about the area of `source_res`.
pub fn preserved_area_resolution(
    source_res: &str,
    target_aspect: &str,
) -> Result<(u32, u32), BucketError> {
    let source: Resolution = source_res.parse()?;
    let aspect: Aspect = target_aspect.parse()?;
    BucketResolver::new()
        .preserved_area(source, aspect)
        .map(Into::into)
}

/// The aspect in `aspects` nearest the ratio of `source_res`; first wins on ties.
pub fn closest_aspect_ratio<'a, S: AsRef<str>>(
    source_res: &str,
    aspects: &'a [S],
) -> Result<&'a str, BucketError> {
    let source: Resolution = source_res.parse()?;
    select::closest_aspect(source, aspects)
}

/// [`optimal_crop_resolution`] for each aspect, keyed by the aspect string.
#[cfg(feature = "alloc")]
pub fn get_optimal_crop_dimensions<S: AsRef<str>>(
    source_res: &str,
    aspects: &[S],
    tolerance: f64,
) -> Result<BucketTable<(u32, u32)>, BucketError> {
    let source: Resolution = source_res.parse()?;
    let table = BucketResolver::new()
        .tolerance(tolerance)
        .optimal_crop_table(source, aspects)?;
    Ok(table.map_values(|outcome| outcome.to_pair()))
}

/// [`preserved_area_resolution`] for each aspect, keyed by the aspect string.
#[cfg(feature = "alloc")]
pub fn get_area_preserving_dimensions<S: AsRef<str>>(
    source_res: &str,
    aspects: &[S],
) -> Result<BucketTable<(u32, u32)>, BucketError> {
    let source: Resolution = source_res.parse()?;
    let table = BucketResolver::new().preserved_area_table(source, aspects)?;
    Ok(table.map_values(Into::into))
}
