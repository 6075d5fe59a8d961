//! Simple linear regression.
//!
//! Closed-form OLS fit of `y = intercept + slope · x` with standard errors,
//! t statistics and two-sided p-values for both coefficients.
//!
//! # Examples
//!
//! ```
//! use u_comfort::regression::fit_line;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.1, 3.9, 6.1, 7.9, 10.1];
//! let fit = fit_line(&x, &y).unwrap();
//! assert!((fit.slope - 2.0).abs() < 0.1);
//! assert!((fit.intercept - 0.1).abs() < 0.2);
//! assert!(fit.r_squared > 0.99);
//! assert!(fit.slope_p < 0.05);
//! ```

use u_numflow::special;
use u_numflow::stats;

use crate::error::FitError;

/// Fitted line `y = intercept + slope · x`.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    /// Slope coefficient (β₁).
    pub slope: f64,
    /// Intercept (β₀).
    pub intercept: f64,
    /// Standard error of the slope.
    pub slope_se: f64,
    /// Standard error of the intercept.
    pub intercept_se: f64,
    /// t-statistic for slope (H₀: β₁ = 0).
    pub slope_t: f64,
    /// Two-sided p-value for slope.
    pub slope_p: f64,
    /// Two-sided p-value for intercept.
    pub intercept_p: f64,
    /// Coefficient of determination (R²).
    pub r_squared: f64,
    /// Residual standard error (√(SSE/(n-2))).
    pub residual_se: f64,
    /// Residual degrees of freedom (n - 2).
    pub df: f64,
    /// Sample size.
    pub n: usize,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

// ---------------------------------------------------------------------------
// OLS fit
// ---------------------------------------------------------------------------

/// Fits a simple linear regression by ordinary least squares.
///
/// # Algorithm
///
/// β₁ = cov(x,y) / var(x)
/// β₀ = ȳ - β₁·x̄
/// SE(β₁) = √(MSE / Sxx), t = β₁ / SE(β₁), p = 2·(1 - F_t(|t|; n-2))
///
/// An exact fit (zero residual error) has `slope_p = 0`.
///
/// # Errors
///
/// - [`FitError::LengthMismatch`] if the slices differ in length
/// - [`FitError::InsufficientData`] if fewer than 3 observations
/// - [`FitError::NonFinite`] if any value is NaN or infinite
/// - [`FitError::ZeroVariance`] if x is constant
/// - [`FitError::ConstantResponse`] if y is constant
///
/// # References
///
/// Draper & Smith (1998). "Applied Regression Analysis", 3rd edition.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit, FitError> {
    let n = x.len();
    if n != y.len() {
        return Err(FitError::LengthMismatch { x: n, y: y.len() });
    }
    if n < 3 {
        return Err(FitError::InsufficientData { n });
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite);
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(FitError::ZeroVariance);
    }
    if y.iter().all(|&v| v == y[0]) {
        return Err(FitError::ConstantResponse);
    }

    let x_mean = stats::mean(x).ok_or(FitError::Numerical)?;
    let y_mean = stats::mean(y).ok_or(FitError::Numerical)?;
    let x_var = stats::variance(x).ok_or(FitError::Numerical)?;
    let cov = stats::covariance(x, y).ok_or(FitError::Numerical)?;

    if x_var < 1e-300 {
        return Err(FitError::ZeroVariance);
    }

    let slope = cov / x_var;
    let intercept = y_mean - slope * x_mean;

    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (yi - (intercept + slope * xi)).powi(2))
        .sum();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let ss_x: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();

    let nf = n as f64;
    let df = nf - 2.0;

    let r_squared = if ss_tot > 1e-300 {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    };

    let mse = ss_res / df;
    let residual_se = mse.sqrt();
    let slope_se = (mse / ss_x).sqrt();
    let intercept_se = (mse * (1.0 / nf + x_mean * x_mean / ss_x)).sqrt();

    let slope_t = t_ratio(slope, slope_se);
    let intercept_t = t_ratio(intercept, intercept_se);
    let slope_p = two_sided_p(slope_t, df);
    let intercept_p = two_sided_p(intercept_t, df);

    if !slope.is_finite() || !intercept.is_finite() || slope_p.is_nan() {
        return Err(FitError::Numerical);
    }

    Ok(LinearFit {
        slope,
        intercept,
        slope_se,
        intercept_se,
        slope_t,
        slope_p,
        intercept_p,
        r_squared,
        residual_se,
        df,
        n,
    })
}

fn t_ratio(estimate: f64, se: f64) -> f64 {
    if se > 1e-300 {
        estimate / se
    } else if estimate == 0.0 {
        0.0
    } else {
        f64::INFINITY.copysign(estimate)
    }
}

fn two_sided_p(t: f64, df: f64) -> f64 {
    if t.is_infinite() {
        return 0.0;
    }
    (2.0 * (1.0 - special::t_distribution_cdf(t.abs(), df))).clamp(0.0, 1.0)
}
