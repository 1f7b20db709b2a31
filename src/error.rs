//! Error type shared by the parser, the resolvers and the selector.

/// Bucket computation error.
///
/// An exhausted backtrack is not an error: it is reported as
/// [`CropOutcome::Unsatisfiable`](crate::CropOutcome::Unsatisfiable).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BucketError {
    /// The text is not `<int>:<int>` or `<int>x<int>`.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What the parser rejected.
        reason: &'static str,
    },
    /// A source or aspect component is zero.
    #[error("dimensions must be positive")]
    InvalidDimensions,
    /// The selector was given no aspects to choose from.
    #[error("no aspect ratios to choose from")]
    NotFound,
    /// Granularity must be at least 1.
    #[error("granularity must be at least 1")]
    ZeroGranularity,
    /// Tolerance is negative, NaN or infinite.
    #[error("tolerance must be finite and non-negative")]
    InvalidTolerance,
}
