//! Candidate scoring.
//!
//! Assigns a strategy-dependent desirability score to each candidate
//! period. Scoring is a pure function over the candidate list: it returns
//! new `Period` values with the score populated and never adds, removes,
//! or reorders candidates. Ordering is the selector's responsibility.

use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::models::{Holiday, Period};

/// The user's stated preference for how to distribute PTO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// A graded mix of all break lengths.
    Balanced,
    /// Many short breaks of up to four days.
    LongWeekends,
    /// Five to six day breaks.
    MiniBreaks,
    /// Seven to nine day breaks.
    WeekLongBreaks,
    /// Breaks longer than nine days.
    ExtendedVacations,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Balanced => write!(f, "balanced"),
            Strategy::LongWeekends => write!(f, "longWeekends"),
            Strategy::MiniBreaks => write!(f, "miniBreaks"),
            Strategy::WeekLongBreaks => write!(f, "weekLongBreaks"),
            Strategy::ExtendedVacations => write!(f, "extendedVacations"),
        }
    }
}

impl Strategy {
    /// The length band this strategy targets, or `None` for balanced mode.
    pub fn target_band(&self) -> Option<LengthBand> {
        match self {
            Strategy::Balanced => None,
            Strategy::LongWeekends => Some(LengthBand::LongWeekend),
            Strategy::MiniBreaks => Some(LengthBand::MiniBreak),
            Strategy::WeekLongBreaks => Some(LengthBand::Week),
            Strategy::ExtendedVacations => Some(LengthBand::Extended),
        }
    }
}

/// The four break-length bands shared by the scorer and selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthBand {
    /// Up to 4 days.
    LongWeekend,
    /// 5 to 6 days.
    MiniBreak,
    /// 7 to 9 days.
    Week,
    /// 10 days and longer.
    Extended,
}

/// All bands, ordered shortest to longest.
pub const LENGTH_BANDS: [LengthBand; 4] = [
    LengthBand::LongWeekend,
    LengthBand::MiniBreak,
    LengthBand::Week,
    LengthBand::Extended,
];

impl LengthBand {
    /// The band a period of the given length falls into.
    pub fn of_days(total_days: u32) -> Self {
        match total_days {
            0..=4 => LengthBand::LongWeekend,
            5..=6 => LengthBand::MiniBreak,
            7..=9 => LengthBand::Week,
            _ => LengthBand::Extended,
        }
    }

    /// Position of this band in [`LENGTH_BANDS`].
    pub fn index(&self) -> usize {
        match self {
            LengthBand::LongWeekend => 0,
            LengthBand::MiniBreak => 1,
            LengthBand::Week => 2,
            LengthBand::Extended => 3,
        }
    }

    /// Inclusive day bounds of this band, used to measure how far outside
    /// the band a candidate falls.
    fn bounds(&self) -> (u32, u32) {
        match self {
            LengthBand::LongWeekend => (1, 4),
            LengthBand::MiniBreak => (5, 6),
            LengthBand::Week => (7, 9),
            LengthBand::Extended => (10, 366),
        }
    }

    /// Distance in days from the band, zero when inside it.
    fn distance(&self, total_days: u32) -> u32 {
        let (min, max) = self.bounds();
        if total_days < min {
            min - total_days
        } else if total_days > max {
            total_days - max
        } else {
            0
        }
    }
}

/// Efficiency thresholds and the final multiplier each one earns.
/// Checked top-down; the first matching tier wins.
const EFFICIENCY_MULTIPLIERS: [(f64, f64); 4] =
    [(2.0, 1.5), (1.75, 1.3), (1.5, 1.2), (1.25, 1.1)];

/// Scores every candidate for the given strategy.
///
/// Returns new periods in the same order with `score` populated.
pub fn score_candidates(
    candidates: &[Period],
    strategy: Strategy,
    holidays: &[Holiday],
    weights: &ScoringWeights,
) -> Vec<Period> {
    candidates
        .iter()
        .map(|candidate| {
            let score = score_one(candidate, strategy, holidays, weights);
            Period {
                score,
                ..candidate.clone()
            }
        })
        .collect()
}

fn score_one(
    candidate: &Period,
    strategy: Strategy,
    holidays: &[Holiday],
    weights: &ScoringWeights,
) -> f64 {
    let efficiency = candidate.efficiency();
    let mut score = 0.0;

    // Super-linear efficiency bonus: a 1-PTO-day bridge yielding 3 days
    // off must outrank a 3-PTO-day week yielding 5.
    if efficiency >= weights.efficiency_threshold_high {
        score += (efficiency - 1.0).powi(2) * weights.efficiency_bonus_high;
    } else if efficiency >= weights.efficiency_threshold_low {
        score += (efficiency - 1.0).powi(2) * weights.efficiency_bonus_low;
    }

    // Strategy-length match bonus, or a distance-scaled penalty outside
    // the target band.
    let band = LengthBand::of_days(candidate.total_days);
    match strategy.target_band() {
        None => {
            score += weights.balanced_band_bonuses[band.index()];
        }
        Some(target) => {
            if band == target {
                score += weights.in_band_bonus;
            } else {
                let distance = target.distance(candidate.total_days);
                score -= f64::from(distance).powi(2) * weights.out_of_band_penalty;
            }
        }
    }

    // Holiday-inclusion bonus.
    let holiday_count = holidays
        .iter()
        .filter(|h| candidate.contains(h.date))
        .count();
    if holiday_count > 0 {
        let per_holiday = if strategy == Strategy::ExtendedVacations {
            weights.holiday_per_day_bonus_extended
        } else {
            weights.holiday_per_day_bonus
        };
        score += weights.holiday_flat_bonus + per_holiday * holiday_count as f64;
    }

    // Final efficiency multiplier, compounding with the bonus above.
    for (threshold, multiplier) in EFFICIENCY_MULTIPLIERS {
        if efficiency >= threshold {
            score *= multiplier;
            break;
        }
    }

    score
}
