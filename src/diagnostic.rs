//! Warnings emitted when a crop cannot meet its tolerance.
//!
//! Events go through `tracing` at `WARN` level with target `zenbucket`. The
//! library never installs a subscriber.

use core::fmt;

use crate::dims::{Aspect, Resolution};
use crate::fraction::Fraction;

/// Denominator limit for the reduced form of the achieved ratio.
pub const REPORT_MAX_DENOMINATOR: u64 = 100;

/// Everything the fallback warning line reports.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FallbackReport {
    /// Source resolution.
    pub source: Resolution,
    /// Requested aspect.
    pub aspect: Aspect,
    /// Resolution returned instead.
    pub chosen: Resolution,
    /// Lower bound of the tolerance window.
    pub window_min: f64,
    /// Upper bound of the tolerance window.
    pub window_max: f64,
    /// Achieved ratio minus target ratio.
    pub delta: f64,
}

impl FallbackReport {
    /// Achieved ratio as the closest fraction with denominator ≤ 100.
    pub fn achieved_fraction(&self) -> Fraction {
        Fraction::new(self.chosen.width as u64, self.chosen.height as u64)
            .limit_denominator(REPORT_MAX_DENOMINATOR)
    }
}

impl fmt::Display for FallbackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no {aspect} bucket within tolerance for {source}: using {chosen} \
             (ratio {achieved:.4} ~ {fraction}; target {aspect} = {target:.4}, \
             window [{min:.4}, {max:.4}], delta {delta:+.4})",
            aspect = self.aspect,
            source = self.source,
            chosen = self.chosen,
            achieved = self.chosen.ratio(),
            fraction = self.achieved_fraction(),
            target = self.aspect.ratio(),
            min = self.window_min,
            max = self.window_max,
            delta = self.delta,
        )
    }
}

pub(crate) fn report_fallback(report: &FallbackReport) {
    tracing::warn!(
        target: "zenbucket",
        source = %report.source,
        aspect = %report.aspect,
        width = report.chosen.width,
        height = report.chosen.height,
        delta = report.delta,
        "{report}"
    );
}

pub(crate) fn report_unsatisfiable(source: Resolution, aspect: Aspect, granularity: u32) {
    tracing::warn!(
        target: "zenbucket",
        %source,
        %aspect,
        granularity,
        "cannot find compatible resolution for {source} at {aspect} on a {granularity}px grid"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_line() {
        let report = FallbackReport {
            source: Resolution::new(800, 600),
            aspect: Aspect::new(16, 9),
            chosen: Resolution::new(576, 320),
            window_min: 16.0 / 9.0,
            window_max: 16.0 / 9.0,
            delta: 1.8 - 16.0 / 9.0,
        };
        assert_eq!(
            report.to_string(),
            "no 16:9 bucket within tolerance for 800x600: using 576x320 \
             (ratio 1.8000 ~ 9/5; target 16:9 = 1.7778, \
             window [1.7778, 1.7778], delta +0.0222)"
        );
    }

    #[test]
    fn fraction_is_limited() {
        let report = FallbackReport {
            source: Resolution::new(12225, 1002),
            aspect: Aspect::new(7, 3),
            chosen: Resolution::new(6400, 2752),
            window_min: 2.3,
            window_max: 2.4,
            delta: 0.0,
        };
        // 6400/2752 = 100/43
        assert_eq!(report.achieved_fraction(), Fraction::new(100, 43));

        let report = FallbackReport {
            chosen: Resolution::new(1025, 1002),
            ..report
        };
        assert!(report.achieved_fraction().denom <= REPORT_MAX_DENOMINATOR);
    }
}
