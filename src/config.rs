//! Evaluator configuration.

use serde::Deserialize;

/// Conventional significance level for the slope test.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Thermal sensation vote bounding the 80% acceptability zone.
pub const DEFAULT_ACCEPTABILITY_VOTE: f64 = 0.85;

/// Comfort evaluation parameters.
///
/// # Examples
///
/// ```
/// use u_comfort::ComfortConfig;
///
/// let cfg = ComfortConfig::default();
/// assert_eq!(cfg.significance_level, 0.05);
/// assert_eq!(cfg.acceptability_vote, 0.85);
///
/// assert!(ComfortConfig::new(0.01, 0.5).is_some());
/// assert!(ComfortConfig::new(1.5, 0.85).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComfortConfig {
    /// Slope p-values at or above this level yield no model (default: 0.05).
    pub significance_level: f64,

    /// Vote magnitude at which the band limits are solved (default: 0.85).
    pub acceptability_vote: f64,
}

impl ComfortConfig {
    /// Creates a validated configuration.
    ///
    /// # Returns
    ///
    /// `None` if `significance_level` is not in (0, 1) or
    /// `acceptability_vote` is not positive and finite.
    pub fn new(significance_level: f64, acceptability_vote: f64) -> Option<Self> {
        let cfg = Self {
            significance_level,
            acceptability_vote,
        };
        cfg.is_valid().then_some(cfg)
    }

    /// Whether both parameters are in range.
    ///
    /// Deserialized configurations bypass [`ComfortConfig::new`]; evaluation
    /// rejects them with [`crate::NoModel::InvalidConfig`].
    pub fn is_valid(&self) -> bool {
        let level_ok = self.significance_level.is_finite()
            && self.significance_level > 0.0
            && self.significance_level < 1.0;
        let vote_ok = self.acceptability_vote.is_finite() && self.acceptability_vote > 0.0;
        level_ok && vote_ok
    }
}

impl Default for ComfortConfig {
    fn default() -> Self {
        Self {
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            acceptability_vote: DEFAULT_ACCEPTABILITY_VOTE,
        }
    }
}
