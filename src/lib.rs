//! Aspect-ratio bucket resolution for image training datasets.
//!
//! Given a source resolution and a target aspect ratio, compute the bucket
//! resolution an image should be cropped and resized to. Every bucket is
//! snapped to a pixel grid (64 by default).
//!
//! Pure arithmetic, no pixel operations. `no_std` compatible; the per-aspect
//! tables need `alloc`.
//!
//! # Modules
//!
//! - [`resolver`]: tolerance-aware crop sizing and area-preserving sizing
//! - [`calc`]: the same operations over `"WxH"` / `"W:H"` strings
//! - [`snap`]: rounding real dimensions to the grid
//! - [`select`]: choosing the nearest aspect from a list
//! - [`placement`]: where in the source to cut the bucket
//! - [`notation`]: parsing `"W:H"` and `"WxH"`
//! - [`diagnostic`]: the warning emitted when tolerance can't be met
//!
//! ```
//! use zenbucket::{Aspect, BucketResolver, CropOutcome, Resolution};
//!
//! let resolver = BucketResolver::new().tolerance(0.0);
//! let outcome = resolver.optimal_crop(Resolution::new(1920, 1080), Aspect::new(4, 3)).unwrap();
//! assert_eq!(outcome, CropOutcome::InTolerance(Resolution::new(1280, 960)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod calc;
pub mod diagnostic;
pub mod dims;
mod error;
pub mod fraction;
pub mod notation;
pub mod placement;
pub mod resolver;
pub mod select;
pub mod snap;
#[cfg(feature = "alloc")]
pub mod table;

pub use diagnostic::FallbackReport;
pub use dims::{Aspect, COMMON_ASPECTS, Gravity, Rect, Resolution};
pub use error::BucketError;
pub use fraction::Fraction;
pub use placement::crop_rect;
pub use resolver::{BucketResolver, CropOutcome};
pub use select::closest_aspect;
pub use snap::{DEFAULT_GRANULARITY, snap_to_grid};
#[cfg(feature = "alloc")]
pub use table::BucketTable;
