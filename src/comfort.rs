//! Neutral temperature and comfort band estimation.
//!
//! A linear regression between the thermal sensation vote (TSV) and a
//! temperature metric is fitted, the slope is tested for significance, and
//! the line is solved for the temperatures at TSV = 0 (neutral) and
//! TSV = ±0.85 (limits of the 80% acceptability zone).
//!
//! Two conventions are supported:
//!
//! - **Vote on temperature** (`TSV = a·T + b`): the line is inverted,
//!   neutral = -b/a, upper = (0.85 - b)/a, lower = (-0.85 - b)/a.
//! - **Temperature on vote** (`T = a·TSV + b`): the line is evaluated,
//!   neutral = b, upper = 0.85·a + b, lower = -0.85·a + b.
//!
//! The two are not algebraic inverses of each other; they generally give
//! different neutral temperatures for the same data.
//!
//! # Record form
//!
//! The record functions return `[slope, intercept, neutral, upper, lower]`.
//! Either all five values come from a significant model or all five are NaN.
//!
//! ```
//! use u_comfort::comfort::operative_vote_on_temperature;
//! use u_comfort::Observation;
//!
//! let rows = [
//!     Observation::new(22.0, 22.5, -0.9),
//!     Observation::new(24.0, 24.6, -0.3),
//!     Observation::new(26.0, 26.4, 0.3),
//!     Observation::new(28.0, 28.7, 0.9),
//! ];
//! let [slope, intercept, neutral, upper, lower] = operative_vote_on_temperature(&rows);
//! assert!((slope - 0.3).abs() < 1e-9);
//! assert!((neutral - 25.0).abs() < 1e-9);
//! assert!(upper > neutral && neutral > lower);
//! assert!((slope * neutral + intercept).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! de Dear, R. & Brager, G. (1998). "Developing an adaptive model of thermal
//! comfort and preference", *ASHRAE Transactions* 104(1).

use crate::config::ComfortConfig;
use crate::error::NoModel;
use crate::observation::{paired_columns, Observation, TemperatureMetric};
use crate::regression::{fit_line, LinearFit};

/// Number of values in a comfort record.
pub const RECORD_LEN: usize = 5;

/// `[slope, intercept, neutral, upper, lower]`.
pub type ComfortRecord = [f64; RECORD_LEN];

/// Record returned when no significant model exists.
pub const UNDEFINED_RECORD: ComfortRecord = [f64::NAN; RECORD_LEN];

/// Which variable is regressed on which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegressionDirection {
    /// `TSV = a·T + b`, solved by inversion.
    VoteOnTemperature,
    /// `T = a·TSV + b`, solved by substitution.
    TemperatureOnVote,
}

/// A significant comfort regression and its derived temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortModel {
    /// Fitted slope (a).
    pub slope: f64,
    /// Fitted intercept (b).
    pub intercept: f64,
    /// Temperature at TSV = 0.
    pub neutral: f64,
    /// Temperature at TSV = +vote threshold.
    pub upper: f64,
    /// Temperature at TSV = -vote threshold.
    pub lower: f64,
    /// Two-sided p-value of the slope.
    pub p_value: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// Number of rows used in the fit.
    pub n: usize,
    /// Temperature metric of the model.
    pub metric: TemperatureMetric,
    /// Regression direction of the model.
    pub direction: RegressionDirection,
}

impl ComfortModel {
    /// `[slope, intercept, neutral, upper, lower]`.
    pub fn record(&self) -> ComfortRecord {
        [
            self.slope,
            self.intercept,
            self.neutral,
            self.upper,
            self.lower,
        ]
    }

    /// Width of the comfort band in degrees.
    ///
    /// With a negative vote-on-temperature slope `upper` lies below
    /// `lower`; the width is always non-negative.
    pub fn band_width(&self) -> f64 {
        (self.upper - self.lower).abs()
    }

    /// Whether `temperature` lies within the comfort band (inclusive).
    pub fn contains(&self, temperature: f64) -> bool {
        let (lo, hi) = if self.lower <= self.upper {
            (self.lower, self.upper)
        } else {
            (self.upper, self.lower)
        };
        (lo..=hi).contains(&temperature)
    }
}

/// Converts an evaluation outcome into its record form.
pub fn to_record(outcome: &Result<ComfortModel, NoModel>) -> ComfortRecord {
    match outcome {
        Ok(model) => model.record(),
        Err(_) => UNDEFINED_RECORD,
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Fits one comfort regression and derives the neutral temperature and band.
///
/// Rows with a missing or non-finite value in either used column are
/// dropped before fitting.
///
/// # Errors
///
/// - [`NoModel::InvalidConfig`] if `config` is out of range
/// - [`NoModel::FitFailed`] if the regression cannot be computed
/// - [`NoModel::NotSignificant`] if the slope p-value is at or above
///   `config.significance_level`
/// - [`NoModel::DegenerateSlope`] if a vote-on-temperature line has zero slope
///
/// # Examples
///
/// ```
/// use u_comfort::comfort::{evaluate, RegressionDirection};
/// use u_comfort::{ComfortConfig, NoModel, Observation, TemperatureMetric};
///
/// let rows = [Observation::new(24.0, 25.0, 0.1)];
/// let outcome = evaluate(
///     &rows,
///     TemperatureMetric::Operative,
///     RegressionDirection::VoteOnTemperature,
///     &ComfortConfig::default(),
/// );
/// assert!(matches!(outcome, Err(NoModel::FitFailed(_))));
/// ```
pub fn evaluate(
    rows: &[Observation],
    metric: TemperatureMetric,
    direction: RegressionDirection,
    config: &ComfortConfig,
) -> Result<ComfortModel, NoModel> {
    if !config.is_valid() {
        tracing::debug!(?config, "rejected out-of-range comfort config");
        return Err(NoModel::InvalidConfig);
    }

    let (temps, votes) = paired_columns(rows, metric);
    let (x, y) = match direction {
        RegressionDirection::VoteOnTemperature => (&temps, &votes),
        RegressionDirection::TemperatureOnVote => (&votes, &temps),
    };

    let fit = fit_line(x, y).inspect_err(|e| {
        tracing::debug!(column = metric.column(), ?direction, error = %e, "comfort fit failed");
    })?;
    tracing::trace!(
        column = metric.column(),
        ?direction,
        slope = fit.slope,
        intercept = fit.intercept,
        p_value = fit.slope_p,
        n = fit.n,
        "fitted comfort regression"
    );

    if fit.slope_p >= config.significance_level {
        tracing::debug!(
            column = metric.column(),
            ?direction,
            p_value = fit.slope_p,
            level = config.significance_level,
            "slope not significant"
        );
        return Err(NoModel::NotSignificant {
            p_value: fit.slope_p,
        });
    }

    let (neutral, upper, lower) = solve(&fit, direction, config.acceptability_vote)?;

    Ok(ComfortModel {
        slope: fit.slope,
        intercept: fit.intercept,
        neutral,
        upper,
        lower,
        p_value: fit.slope_p,
        r_squared: fit.r_squared,
        n: fit.n,
        metric,
        direction,
    })
}

/// Solves the fitted line for `(neutral, upper, lower)`.
fn solve(
    fit: &LinearFit,
    direction: RegressionDirection,
    vote: f64,
) -> Result<(f64, f64, f64), NoModel> {
    let (a, b) = (fit.slope, fit.intercept);
    let temps = match direction {
        RegressionDirection::VoteOnTemperature => {
            if a == 0.0 {
                tracing::debug!("zero slope, cannot invert vote-on-temperature line");
                return Err(NoModel::DegenerateSlope);
            }
            (-b / a, (vote - b) / a, (-vote - b) / a)
        }
        RegressionDirection::TemperatureOnVote => (b, vote * a + b, -vote * a + b),
    };

    if [temps.0, temps.1, temps.2].iter().all(|t| t.is_finite()) {
        Ok(temps)
    } else {
        tracing::debug!(?direction, slope = a, "derived temperatures not finite");
        Err(NoModel::DegenerateSlope)
    }
}

/// Comfort evaluator bound to one configuration.
///
/// # Examples
///
/// ```
/// use u_comfort::{ComfortConfig, ComfortEvaluator, Observation};
///
/// let rows = [
///     Observation::new(21.0, 21.8, -1.1),
///     Observation::new(23.0, 23.9, -0.4),
///     Observation::new(25.0, 25.7, 0.2),
///     Observation::new(27.0, 28.1, 0.9),
/// ];
/// let evaluator = ComfortEvaluator::new(ComfortConfig::default()).unwrap();
/// let outcomes = evaluator.evaluate_all(&rows);
/// assert_eq!(outcomes.len(), 4);
/// assert!(outcomes.iter().all(|o| o.is_ok()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ComfortEvaluator {
    config: ComfortConfig,
}

impl ComfortEvaluator {
    /// Creates an evaluator with the given configuration.
    ///
    /// # Returns
    ///
    /// `None` if the configuration is out of range (see [`ComfortConfig::is_valid`]).
    pub fn new(config: ComfortConfig) -> Option<Self> {
        config.is_valid().then_some(Self { config })
    }

    /// The evaluator's configuration.
    pub fn config(&self) -> &ComfortConfig {
        &self.config
    }

    /// Evaluates one (metric, direction) combination.
    pub fn evaluate(
        &self,
        rows: &[Observation],
        metric: TemperatureMetric,
        direction: RegressionDirection,
    ) -> Result<ComfortModel, NoModel> {
        evaluate(rows, metric, direction, &self.config)
    }

    /// Evaluates all four combinations.
    ///
    /// Order: operative vote-on-temperature, operative temperature-on-vote,
    /// SET vote-on-temperature, SET temperature-on-vote.
    pub fn evaluate_all(&self, rows: &[Observation]) -> [Result<ComfortModel, NoModel>; 4] {
        use RegressionDirection::{TemperatureOnVote, VoteOnTemperature};
        use TemperatureMetric::{Operative, StandardEffective};

        [
            self.evaluate(rows, Operative, VoteOnTemperature),
            self.evaluate(rows, Operative, TemperatureOnVote),
            self.evaluate(rows, StandardEffective, VoteOnTemperature),
            self.evaluate(rows, StandardEffective, TemperatureOnVote),
        ]
    }
}

// ---------------------------------------------------------------------------
// Record entry points
// ---------------------------------------------------------------------------

fn record_for(
    rows: &[Observation],
    metric: TemperatureMetric,
    direction: RegressionDirection,
) -> ComfortRecord {
    to_record(&evaluate(rows, metric, direction, &ComfortConfig::default()))
}

/// `TSV = a·top + b`, neutral temperature by inversion.
///
/// Returns `[slope, intercept, neutral, upper, lower]`, or all NaN if the
/// fit fails or the slope is not significant at 0.05.
pub fn operative_vote_on_temperature(rows: &[Observation]) -> ComfortRecord {
    record_for(
        rows,
        TemperatureMetric::Operative,
        RegressionDirection::VoteOnTemperature,
    )
}

/// `top = a·TSV + b`, neutral temperature is the intercept.
///
/// Returns `[slope, intercept, neutral, upper, lower]`, or all NaN if the
/// fit fails or the slope is not significant at 0.05.
pub fn operative_temperature_on_vote(rows: &[Observation]) -> ComfortRecord {
    record_for(
        rows,
        TemperatureMetric::Operative,
        RegressionDirection::TemperatureOnVote,
    )
}

/// `TSV = a·set + b`, neutral temperature by inversion.
///
/// Returns `[slope, intercept, neutral, upper, lower]`, or all NaN if the
/// fit fails or the slope is not significant at 0.05.
pub fn set_vote_on_temperature(rows: &[Observation]) -> ComfortRecord {
    record_for(
        rows,
        TemperatureMetric::StandardEffective,
        RegressionDirection::VoteOnTemperature,
    )
}

/// `set = a·TSV + b`, neutral temperature is the intercept.
///
/// Returns `[slope, intercept, neutral, upper, lower]`, or all NaN if the
/// fit fails or the slope is not significant at 0.05.
pub fn set_temperature_on_vote(rows: &[Observation]) -> ComfortRecord {
    record_for(
        rows,
        TemperatureMetric::StandardEffective,
        RegressionDirection::TemperatureOnVote,
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> impl Strategy<Value = Vec<Observation>> {
        proptest::collection::vec((15.0_f64..35.0, 15.0_f64..35.0, -3.0_f64..3.0), 0..=25)
            .prop_map(|rows| {
                rows.into_iter()
                    .map(|(t, s, v)| Observation::new(t, s, v))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn record_all_or_nothing(rows in table()) {
            for record in [
                operative_vote_on_temperature(&rows),
                operative_temperature_on_vote(&rows),
                set_vote_on_temperature(&rows),
                set_temperature_on_vote(&rows),
            ] {
                let finite = record.iter().filter(|v| v.is_finite()).count();
                let nan = record.iter().filter(|v| v.is_nan()).count();
                prop_assert!(finite == RECORD_LEN || nan == RECORD_LEN, "record = {:?}", record);
            }
        }

        #[test]
        fn linear_votes_invert_consistently(
            slope in 0.1_f64..0.5,
            neutral in 20.0_f64..28.0,
            temps in proptest::collection::vec(15.0_f64..35.0, 4..=20),
        ) {
            let rows: Vec<Observation> = temps
                .iter()
                .enumerate()
                .map(|(i, &t)| {
                    let jitter = if i % 2 == 0 { 0.05 } else { -0.05 };
                    Observation::new(t, t, slope * (t - neutral) + jitter)
                })
                .collect();
            if let Ok(model) = evaluate(
                &rows,
                TemperatureMetric::Operative,
                RegressionDirection::VoteOnTemperature,
                &ComfortConfig::default(),
            ) {
                let [a, b, n, u, l] = model.record();
                prop_assert!((a * n + b).abs() < 1e-6);
                prop_assert!((a * u + b - 0.85).abs() < 1e-6);
                prop_assert!((a * l + b + 0.85).abs() < 1e-6);
            }
        }
    }
}
