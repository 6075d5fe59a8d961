//! Error types for regression fitting and comfort model evaluation.

use thiserror::Error;

/// Reasons a simple linear regression cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    /// Fewer than 3 usable observations (no residual degrees of freedom).
    #[error("insufficient data: {n} usable observations, at least 3 required")]
    InsufficientData {
        /// Number of usable observations.
        n: usize,
    },

    /// x and y have different lengths.
    #[error("length mismatch: x has {x} values, y has {y}")]
    LengthMismatch {
        /// Length of x.
        x: usize,
        /// Length of y.
        y: usize,
    },

    /// x or y contains NaN or infinite values.
    #[error("input contains non-finite values")]
    NonFinite,

    /// All x values are identical.
    #[error("independent variable has zero variance")]
    ZeroVariance,

    /// All y values are identical; the slope test is undefined.
    #[error("dependent variable is constant")]
    ConstantResponse,

    /// A summary statistic could not be computed.
    #[error("numerical failure while fitting")]
    Numerical,
}

/// Why no comfort model was produced.
///
/// All variants map to the same undefined record; the distinction is kept
/// for callers that want to report it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NoModel {
    /// The regression could not be fit.
    #[error("regression fit failed: {0}")]
    FitFailed(#[from] FitError),

    /// The fit succeeded but the slope is not significant.
    #[error("slope not significant (p = {p_value})")]
    NotSignificant {
        /// Two-sided p-value of the slope.
        p_value: f64,
    },

    /// The configuration is out of range.
    #[error("invalid comfort configuration")]
    InvalidConfig,

    /// The fitted line cannot be inverted (zero slope).
    #[error("degenerate slope, vote-on-temperature line cannot be inverted")]
    DegenerateSlope,
}
