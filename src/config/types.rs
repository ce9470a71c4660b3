//! Configuration types for the optimization engine.
//!
//! This module contains the strongly-typed tuning parameters that are
//! deserialized from the YAML configuration file. Every field has a
//! default matching the engine's built-in behavior, so a partial file (or
//! no file at all) is valid.

use serde::Deserialize;

/// Scoring weights applied by the scorer to every candidate period.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Efficiency ratio at which the lower efficiency bonus starts.
    pub efficiency_threshold_low: f64,
    /// Coefficient for the lower efficiency bonus: `(eff - 1)^2 * coeff`.
    pub efficiency_bonus_low: f64,
    /// Efficiency ratio at which the higher efficiency bonus takes over.
    pub efficiency_threshold_high: f64,
    /// Coefficient for the higher efficiency bonus.
    pub efficiency_bonus_high: f64,
    /// Fixed bonus for a candidate inside the strategy's target band.
    pub in_band_bonus: f64,
    /// Graded bonuses for balanced mode, one per length band
    /// (long weekend, mini break, week, extended).
    pub balanced_band_bonuses: [f64; 4],
    /// Penalty coefficient per squared day of distance outside the band.
    pub out_of_band_penalty: f64,
    /// Flat bonus when a candidate contains at least one public holiday.
    pub holiday_flat_bonus: f64,
    /// Additional bonus per contained public holiday.
    pub holiday_per_day_bonus: f64,
    /// Per-holiday bonus used in extended-vacations mode instead.
    pub holiday_per_day_bonus_extended: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            efficiency_threshold_low: 1.5,
            efficiency_bonus_low: 40.0,
            efficiency_threshold_high: 2.0,
            efficiency_bonus_high: 50.0,
            in_band_bonus: 80.0,
            balanced_band_bonuses: [60.0, 50.0, 40.0, 30.0],
            out_of_band_penalty: 10.0,
            holiday_flat_bonus: 15.0,
            holiday_per_day_bonus: 15.0,
            holiday_per_day_bonus_extended: 20.0,
        }
    }
}

/// Budget-allocation limits applied by the selector's greedy fill.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorLimits {
    /// Balanced-mode share of the budget per length band
    /// (long weekend, mini break, week, extended). Must sum to <= 1.0.
    pub balanced_band_shares: [f64; 4],
    /// Share of the budget the primary band may consume in non-balanced
    /// modes before secondary/other candidates are admitted.
    pub primary_band_cap: f64,
}

impl Default for SelectorLimits {
    fn default() -> Self {
        Self {
            balanced_band_shares: [0.35, 0.30, 0.25, 0.10],
            primary_band_cap: 0.80,
        }
    }
}

/// The complete engine configuration.
///
/// The defaults reproduce the engine's documented behavior; a YAML file
/// only needs to name the fields it overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Scoring weights for the scorer.
    pub scoring: ScoringWeights,
    /// Budget-allocation limits for the selector.
    pub selector: SelectorLimits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.efficiency_threshold_low, 1.5);
        assert_eq!(weights.efficiency_bonus_high, 50.0);
        assert_eq!(weights.in_band_bonus, 80.0);
        assert_eq!(weights.balanced_band_bonuses, [60.0, 50.0, 40.0, 30.0]);
    }

    #[test]
    fn test_default_selector_limits() {
        let limits = SelectorLimits::default();
        assert_eq!(limits.balanced_band_shares, [0.35, 0.30, 0.25, 0.10]);
        assert_eq!(limits.primary_band_cap, 0.80);
        let total: f64 = limits.balanced_band_shares.iter().sum();
        assert!(total <= 1.0 + f64::EPSILON);
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let yaml = r#"
scoring:
  in_band_bonus: 100.0
"#;
        let config: OptimizerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.scoring.in_band_bonus, 100.0);
        // Untouched fields keep their defaults
        assert_eq!(config.scoring.holiday_flat_bonus, 15.0);
        assert_eq!(config.selector.primary_band_cap, 0.80);
    }

    #[test]
    fn test_empty_yaml_is_fully_default() {
        let config: OptimizerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.scoring.in_band_bonus, 80.0);
        assert_eq!(config.selector.balanced_band_shares[0], 0.35);
    }
}
