//! Resolutions, aspect ratios, and crop regions.
//!
//! Both [`Resolution`] and [`Aspect`] are plain integer pairs. Neither is
//! validated on construction; the resolvers reject zero components with
//! [`BucketError::InvalidDimensions`](crate::BucketError::InvalidDimensions).
//!
//! ```
//! use zenbucket::{Aspect, Resolution};
//!
//! let res: Resolution = "1920x1080".parse().unwrap();
//! assert_eq!(res.aspect(), Aspect::new(16, 9));
//! assert_eq!(res.to_string(), "1920x1080");
//! ```

use core::fmt;

use crate::fraction::gcd;

/// Width × height in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `width / height` as a real number. Infinite or NaN when height is zero.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Pixel count.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// The reduced aspect ratio of this resolution (`1920x1080` → `16:9`).
    ///
    /// A zero component yields the unreduced pair.
    pub fn aspect(&self) -> Aspect {
        Aspect::new(self.width, self.height).reduced()
    }

    /// Whether both dimensions are ≤ the corresponding dimensions of `outer`.
    pub fn fits_within(&self, outer: Resolution) -> bool {
        self.width <= outer.width && self.height <= outer.height
    }

    /// Whether both dimensions are non-zero multiples of `granularity`.
    pub fn is_multiple_of(&self, granularity: u32) -> bool {
        granularity != 0
            && self.width != 0
            && self.height != 0
            && self.width % granularity == 0
            && self.height % granularity == 0
    }

    pub(crate) fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<Resolution> for (u32, u32) {
    fn from(r: Resolution) -> Self {
        (r.width, r.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Target aspect ratio `width:height`.
///
/// Not reduced on construction: `2:4` and `1:2` are distinct values whose
/// [`ratio`](Self::ratio) compares equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Aspect {
    /// Horizontal term.
    pub width: u32,
    /// Vertical term.
    pub height: u32,
}

impl Aspect {
    /// Square.
    pub const SQUARE: Self = Self::new(1, 1);

    /// Create a new aspect ratio.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `width / height` as a real number.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Divide both terms by their greatest common divisor.
    pub fn reduced(&self) -> Self {
        let d = gcd(self.width as u64, self.height as u64);
        if d <= 1 {
            return *self;
        }
        Self {
            width: (self.width as u64 / d) as u32,
            height: (self.height as u64 / d) as u32,
        }
    }

    pub(crate) fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Bucket aspects offered by the bucket calculator, landscape and portrait.
pub const COMMON_ASPECTS: &[&str] = &[
    "1:1", "4:3", "3:4", "3:2", "2:3", "16:9", "9:16", "21:9", "9:21", "5:4", "4:5", "7:5", "5:7",
];

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of the rect.
    pub fn size(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source: Resolution) -> bool {
        self.x == 0 && self.y == 0 && self.width == source.width && self.height == source.height
    }
}

/// Where to place the crop region inside the source.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Gravity {
    /// Center on both axes.
    #[default]
    Center,
    /// Position by percentage. `(0.0, 0.0)` = top-left, `(1.0, 1.0)` = bottom-right.
    Percentage(f32, f32),
}

impl Gravity {
    /// Offset of a span inside `space` spare pixels along one axis.
    pub(crate) fn offset_1d(&self, space: u32, horizontal: bool) -> u32 {
        if space == 0 {
            return 0;
        }
        match self {
            Gravity::Center => space / 2,
            Gravity::Percentage(x, y) => {
                let pct = if horizontal { *x } else { *y };
                // NaN clamps to NaN; treat it as the near edge.
                let pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 1.0) };
                let v = num_traits::Float::round(space as f64 * pct as f64) as u32;
                v.min(space)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_aspect_reduces() {
        assert_eq!(Resolution::new(1920, 1080).aspect(), Aspect::new(16, 9));
        assert_eq!(Resolution::new(1024, 1024).aspect(), Aspect::new(1, 1));
        assert_eq!(Resolution::new(1025, 1002).aspect(), Aspect::new(1025, 1002));
    }

    #[test]
    fn aspect_is_not_reduced_on_construction() {
        let a = Aspect::new(2, 4);
        assert_ne!(a, Aspect::new(1, 2));
        assert_eq!(a.ratio(), Aspect::new(1, 2).ratio());
        assert_eq!(a.reduced(), Aspect::new(1, 2));
    }

    #[test]
    fn reduced_with_zero_term() {
        assert_eq!(Aspect::new(0, 5).reduced(), Aspect::new(0, 1));
        assert_eq!(Aspect::new(0, 0).reduced(), Aspect::new(0, 0));
    }

    #[test]
    fn multiple_of() {
        assert!(Resolution::new(1024, 768).is_multiple_of(64));
        assert!(!Resolution::new(1000, 768).is_multiple_of(64));
        assert!(!Resolution::new(0, 0).is_multiple_of(64));
        assert!(!Resolution::new(64, 64).is_multiple_of(0));
    }

    #[test]
    fn fits_within() {
        let src = Resolution::new(1025, 1002);
        assert!(Resolution::new(1024, 768).fits_within(src));
        assert!(!Resolution::new(1024, 1024).fits_within(src));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Resolution::new(640, 480)), "640x480");
        assert_eq!(format!("{}", Aspect::new(16, 9)), "16:9");
    }

    #[test]
    fn gravity_offsets() {
        assert_eq!(Gravity::Center.offset_1d(11, true), 5);
        assert_eq!(Gravity::Percentage(0.0, 1.0).offset_1d(10, true), 0);
        assert_eq!(Gravity::Percentage(0.0, 1.0).offset_1d(10, false), 10);
        assert_eq!(Gravity::Percentage(-3.0, 7.0).offset_1d(10, true), 0);
        assert_eq!(Gravity::Percentage(-3.0, 7.0).offset_1d(10, false), 10);
        assert_eq!(Gravity::Percentage(f32::NAN, 0.5).offset_1d(10, true), 0);
    }

    #[test]
    fn common_aspects_parse() {
        for s in COMMON_ASPECTS {
            let a: Aspect = s.parse().unwrap();
            assert!(a.is_positive(), "{s}");
        }
    }
}
