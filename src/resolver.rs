//! Bucket resolution: tolerance-aware crop sizing and area-preserving sizing.
//!
//! [`BucketResolver::optimal_crop`] finds the largest grid-aligned resolution
//! inside the source whose aspect ratio is within a tolerance of the target.
//! [`BucketResolver::preserved_area`] keeps the pixel count instead, and may
//! exceed the source.
//!
//! # Example
//!
//! ```
//! use zenbucket::{Aspect, BucketResolver, CropOutcome, Resolution};
//!
//! let outcome = BucketResolver::new()
//!     .tolerance(0.05)
//!     .optimal_crop(Resolution::new(1024, 1024), Aspect::new(16, 9))
//!     .unwrap();
//!
//! assert_eq!(outcome, CropOutcome::InTolerance(Resolution::new(1024, 576)));
//! ```
//!
//! # Optimal crop
//!
//! 1. If the source ratio is already in the window, the source is the seed.
//! 2. Otherwise the source is projected onto the window bound nearest its
//!    ratio (the lower bound on ties), keeping the full width when the bound
//!    is wider than the source and the full height otherwise.
//! 3. The seed is snapped to the grid and clamped to the largest grid-aligned
//!    size inside the source. If that lands in the window, done.
//! 4. Otherwise the too-long axis is stepped down one grid cell at a time, at
//!    most `max_backtrack` times and never below one cell, deriving the other
//!    axis from the projection ratio. The first in-window candidate that fits
//!    inside the seed wins; failing that, the fitting candidate closest to the
//!    target ratio (first on ties) is returned as a fallback.

use num_traits::Float;

use crate::BucketError;
use crate::diagnostic::{self, FallbackReport};
use crate::dims::{Aspect, Resolution};
use crate::snap::{self, DEFAULT_GRANULARITY};

/// Default number of grid steps the backtrack may take.
pub const DEFAULT_MAX_BACKTRACK: u32 = 10;

/// Bucket resolver configuration.
///
/// Built with consuming setters; validated when a resolution is computed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BucketResolver {
    /// Allowed absolute deviation of the achieved ratio from the target ratio.
    pub tolerance: f64,
    /// Both output dimensions are multiples of this.
    pub granularity: u32,
    /// Maximum number of grid steps examined by the backtrack.
    pub max_backtrack: u32,
    /// Suppress fallback and unsatisfiable warnings.
    pub quiet: bool,
}

impl Default for BucketResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketResolver {
    /// Exact ratio (τ = 0), 64-pixel grid, 10 backtrack steps, warnings on.
    pub const fn new() -> Self {
        Self {
            tolerance: 0.0,
            granularity: DEFAULT_GRANULARITY,
            max_backtrack: DEFAULT_MAX_BACKTRACK,
            quiet: false,
        }
    }

    /// Set the ratio tolerance τ. Must be finite and non-negative.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the grid granularity in pixels. Must be at least 1.
    pub fn granularity(mut self, granularity: u32) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the backtrack step limit.
    ///
    /// Fewer steps bound the worst case more tightly but leave fewer
    /// candidates, so fallbacks land further from the target ratio.
    pub fn max_backtrack(mut self, steps: u32) -> Self {
        self.max_backtrack = steps;
        self
    }

    /// Silence the fallback and unsatisfiable warnings.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn validate(&self) -> Result<(), BucketError> {
        if self.granularity == 0 {
            return Err(BucketError::ZeroGranularity);
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(BucketError::InvalidTolerance);
        }
        Ok(())
    }

    /// Grid-aligned resolution with the target aspect and roughly the source's area.
    ///
    /// The unsnapped size `(a·s, b·s)` with `s = √(W·H / (a·b))` has exactly the
    /// source area; snapping moves it by at most half a cell per axis. The
    /// result is not clamped to the source and often exceeds it on one axis.
    ///
    /// ```
    /// use zenbucket::{Aspect, BucketResolver, Resolution};
    ///
    /// let r = BucketResolver::new()
    ///     .preserved_area(Resolution::new(1024, 1024), Aspect::new(16, 9))
    ///     .unwrap();
    /// assert_eq!(r, Resolution::new(1344, 768));
    /// ```
    pub fn preserved_area(
        &self,
        source: Resolution,
        aspect: Aspect,
    ) -> Result<Resolution, BucketError> {
        self.validate()?;
        if !source.is_positive() || !aspect.is_positive() {
            return Err(BucketError::InvalidDimensions);
        }
        let (w, h) = area_preserving_size(source, aspect);
        snap::snap_to_grid(w, h, self.granularity)
    }

    /// Largest grid-aligned resolution inside `source` whose ratio is within
    /// tolerance of `aspect`, or the closest fallback.
    pub fn optimal_crop(
        &self,
        source: Resolution,
        aspect: Aspect,
    ) -> Result<CropOutcome, BucketError> {
        self.validate()?;
        if !source.is_positive() || !aspect.is_positive() {
            return Err(BucketError::InvalidDimensions);
        }

        let g = self.granularity;
        let window = Window::new(aspect.ratio(), self.tolerance);
        let ceiling = Resolution::new(
            snap::floor_to(source.width, g),
            snap::floor_to(source.height, g),
        );
        if !ceiling.is_positive() {
            // Source is smaller than one grid cell on some axis.
            return Ok(self.unsatisfiable(source, aspect, 0));
        }

        let source_ratio = source.ratio();
        let (seed, aim) = if window.contains(source_ratio) {
            tracing::trace!(%source, %aspect, "source ratio already within tolerance");
            ((source.width as f64, source.height as f64), window.target)
        } else {
            let aim = window.nearest_bound(source_ratio);
            (project(source, aim, g), aim)
        };

        let snapped = snap::snap_to_grid(seed.0, seed.1, g)?;
        let seed = Resolution::new(
            snapped.width.min(ceiling.width),
            snapped.height.min(ceiling.height),
        );
        if window.contains(seed.ratio()) {
            return Ok(CropOutcome::InTolerance(seed));
        }

        tracing::debug!(
            %source,
            %aspect,
            %seed,
            ratio = seed.ratio(),
            "snapped seed outside tolerance, backtracking"
        );
        Ok(self.backtrack(source, aspect, seed, aim, &window))
    }

    fn backtrack(
        &self,
        source: Resolution,
        aspect: Aspect,
        seed: Resolution,
        aim: f64,
        window: &Window,
    ) -> CropOutcome {
        let g = self.granularity;
        // Too tall: narrow the width. Too wide: lower the height.
        let shrink_width = seed.ratio() < window.min;
        let top = if shrink_width { seed.width } else { seed.height } / g;
        let bottom = top.saturating_sub(self.max_backtrack).max(1);

        let mut best: Option<Candidate> = None;
        let mut examined = 0u32;
        for step in (bottom + 1..=top).rev() {
            let size = if shrink_width {
                let w = step * g;
                Resolution::new(w, snap::round_to(w as f64 / aim, g))
            } else {
                let h = step * g;
                Resolution::new(snap::round_to(h as f64 * aim, g), h)
            };
            if !size.is_positive() {
                continue;
            }
            examined += 1;

            let candidate = Candidate::new(size, window.target);
            let fits = size.fits_within(seed);
            tracing::trace!(
                width = size.width,
                height = size.height,
                ratio = candidate.ratio,
                delta = candidate.delta,
                fits,
                "backtrack candidate"
            );
            if !fits {
                continue;
            }
            if window.contains(candidate.ratio) {
                return CropOutcome::InTolerance(size);
            }
            if best.is_none_or(|b| Float::abs(candidate.delta) < Float::abs(b.delta)) {
                best = Some(candidate);
            }
        }

        match best {
            Some(c) => {
                if !self.quiet {
                    diagnostic::report_fallback(&FallbackReport {
                        source,
                        aspect,
                        chosen: c.resolution,
                        window_min: window.min,
                        window_max: window.max,
                        delta: c.delta,
                    });
                }
                CropOutcome::Fallback {
                    resolution: c.resolution,
                    delta: c.delta,
                    examined,
                }
            }
            None => self.unsatisfiable(source, aspect, examined),
        }
    }

    fn unsatisfiable(&self, source: Resolution, aspect: Aspect, examined: u32) -> CropOutcome {
        if !self.quiet {
            diagnostic::report_unsatisfiable(source, aspect, self.granularity);
        }
        CropOutcome::Unsatisfiable { examined }
    }
}

/// Result of [`BucketResolver::optimal_crop`].
///
/// The variants carry everything callers see of the search; the per-step
/// candidate record stays internal.
///
/// ```compile_fail
/// use zenbucket::resolver::Candidate;
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CropOutcome {
    /// Ratio is within tolerance of the target.
    InTolerance(Resolution),
    /// No in-tolerance candidate was found; this is the closest one examined.
    Fallback {
        /// Grid-aligned resolution inside the source.
        resolution: Resolution,
        /// Achieved ratio minus target ratio.
        delta: f64,
        /// Number of backtrack candidates examined.
        examined: u32,
    },
    /// No grid-aligned candidate fits inside the source.
    Unsatisfiable {
        /// Number of backtrack candidates examined.
        examined: u32,
    },
}

impl CropOutcome {
    /// The chosen resolution, unless unsatisfiable.
    pub fn resolution(&self) -> Option<Resolution> {
        match self {
            Self::InTolerance(r) | Self::Fallback { resolution: r, .. } => Some(*r),
            Self::Unsatisfiable { .. } => None,
        }
    }

    /// Whether the ratio landed within tolerance.
    pub fn is_in_tolerance(&self) -> bool {
        matches!(self, Self::InTolerance(_))
    }

    /// `(width, height)`, with `(0, 0)` signalling an unsatisfiable request.
    pub fn to_pair(&self) -> (u32, u32) {
        self.resolution().map_or((0, 0), Into::into)
    }
}

/// A resolution examined by the backtrack, with its ratio and `ratio - target`.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Candidate {
    resolution: Resolution,
    ratio: f64,
    delta: f64,
}

impl Candidate {
    fn new(resolution: Resolution, target: f64) -> Self {
        let ratio = resolution.ratio();
        Self {
            resolution,
            ratio,
            delta: ratio - target,
        }
    }
}

/// Closed interval `[target - τ, target + τ]`.
#[derive(Copy, Clone, Debug)]
struct Window {
    target: f64,
    min: f64,
    max: f64,
}

impl Window {
    fn new(target: f64, tolerance: f64) -> Self {
        Self {
            target,
            min: target - tolerance,
            max: target + tolerance,
        }
    }

    fn contains(&self, ratio: f64) -> bool {
        self.min <= ratio && ratio <= self.max
    }

    /// Bound closest to `ratio`; the lower one on ties.
    fn nearest_bound(&self, ratio: f64) -> f64 {
        if Float::abs(ratio - self.min) <= Float::abs(ratio - self.max) {
            self.min
        } else {
            self.max
        }
    }
}

/// Project `source` onto ratio `aim` without growing either axis past the source.
fn project(source: Resolution, aim: f64, g: u32) -> (f64, f64) {
    let (sw, sh) = (source.width as f64, source.height as f64);
    let g = g as f64;
    if aim >= source.ratio() {
        // Target is wider: keep the width, cut height.
        let h = Float::floor(sw / aim);
        if h > sh {
            (Float::floor(sh * aim / g) * g, sh)
        } else {
            (sw, h)
        }
    } else {
        // Target is taller: keep the height, cut width on the grid.
        let w = Float::floor(sh * aim / g) * g;
        if w > sw {
            (sw, Float::floor(sw / aim))
        } else {
            (w, sh)
        }
    }
}

fn area_preserving_size(source: Resolution, aspect: Aspect) -> (f64, f64) {
    let area = source.area() as f64;
    let (a, b) = (aspect.width as f64, aspect.height as f64);
    let s = Float::sqrt(area / (a * b));
    (a * s, b * s)
}
