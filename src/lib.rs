//! # u-comfort
//!
//! Neutral temperature and 80% acceptability comfort band from linear
//! regressions between thermal sensation votes and a temperature metric.
//!
//! The input is a table of per-building (or per-group) means; the output is
//! `[slope, intercept, neutral, upper, lower]`, either fully defined by a
//! significant regression or entirely NaN.
//!
//! ## Modules
//!
//! - [`comfort`] — Evaluator, the four regression variants, record form
//! - [`regression`] — Simple OLS fit with slope significance test
//! - [`observation`] — Observation rows and column extraction
//! - [`config`] — Significance level and acceptability vote threshold
//! - [`error`] — Fit errors and no-model outcomes
//!
//! ## Variants
//!
//! | Function | Model |
//! |----------|-------|
//! | [`operative_vote_on_temperature`] | TSV = a·top + b |
//! | [`operative_temperature_on_vote`] | top = a·TSV + b |
//! | [`set_vote_on_temperature`] | TSV = a·set + b |
//! | [`set_temperature_on_vote`] | set = a·TSV + b |
//!
//! ## Design Philosophy
//!
//! - **Never throws**: record functions always return five values
//! - **Distinguishable outcomes**: [`evaluate`] reports why no model exists
//! - **Pure**: no shared state, safe to call in parallel per building

pub mod comfort;
pub mod config;
pub mod error;
pub mod observation;
pub mod regression;

pub use comfort::{
    evaluate, operative_temperature_on_vote, operative_vote_on_temperature,
    set_temperature_on_vote, set_vote_on_temperature, ComfortEvaluator, ComfortModel,
    ComfortRecord, RegressionDirection, UNDEFINED_RECORD,
};
pub use config::ComfortConfig;
pub use error::{FitError, NoModel};
pub use observation::{Observation, TemperatureMetric};
