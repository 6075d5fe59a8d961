//! Observation rows and column extraction.
//!
//! Each [`Observation`] is one building (or group) with mean survey and
//! measurement values. Fields other than `top`, `set` and
//! `thermal_sensation` are ignored on deserialization.
//!
//! # Examples
//!
//! ```
//! use u_comfort::observation::{paired_columns, Observation, TemperatureMetric};
//!
//! let rows = [
//!     Observation::new(22.0, 23.5, -0.9),
//!     Observation::new(24.0, 25.0, -0.3),
//!     Observation { top: None, set: Some(26.0), thermal_sensation: Some(0.3) },
//! ];
//! let (top, tsv) = paired_columns(&rows, TemperatureMetric::Operative);
//! assert_eq!(top, vec![22.0, 24.0]);
//! assert_eq!(tsv, vec![-0.9, -0.3]);
//! ```

use serde::Deserialize;

/// One row of the observation table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Observation {
    /// Mean indoor operative temperature.
    #[serde(default)]
    pub top: Option<f64>,
    /// Mean Standard Effective Temperature.
    #[serde(default)]
    pub set: Option<f64>,
    /// Mean thermal sensation vote.
    #[serde(default)]
    pub thermal_sensation: Option<f64>,
}

impl Observation {
    /// Creates a fully populated row.
    pub fn new(top: f64, set: f64, thermal_sensation: f64) -> Self {
        Self {
            top: Some(top),
            set: Some(set),
            thermal_sensation: Some(thermal_sensation),
        }
    }

    /// Value of the given temperature metric, if present.
    pub fn temperature(&self, metric: TemperatureMetric) -> Option<f64> {
        match metric {
            TemperatureMetric::Operative => self.top,
            TemperatureMetric::StandardEffective => self.set,
        }
    }
}

/// Temperature metric used as the physical variable of the regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureMetric {
    /// Indoor operative temperature (`top`).
    Operative,
    /// Standard Effective Temperature (`set`).
    StandardEffective,
}

impl TemperatureMetric {
    /// Column name in the observation table.
    pub fn column(self) -> &'static str {
        match self {
            TemperatureMetric::Operative => "top",
            TemperatureMetric::StandardEffective => "set",
        }
    }
}

/// Extracts `(temperature, thermal_sensation)` columns for `metric`.
///
/// Rows where either value is missing or non-finite are dropped, so the
/// two returned vectors always have equal length.
pub fn paired_columns(rows: &[Observation], metric: TemperatureMetric) -> (Vec<f64>, Vec<f64>) {
    let (temps, votes): (Vec<f64>, Vec<f64>) = rows
        .iter()
        .filter_map(|row| {
            let t = row.temperature(metric)?;
            let v = row.thermal_sensation?;
            (t.is_finite() && v.is_finite()).then_some((t, v))
        })
        .unzip();

    let dropped = rows.len() - temps.len();
    if dropped > 0 {
        tracing::debug!(
            column = metric.column(),
            dropped,
            kept = temps.len(),
            "dropped rows with missing values"
        );
    }
    (temps, votes)
}
