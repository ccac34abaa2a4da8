//! Clamped z-score curve.
//!
//! A raw value is placed relative to the population as a z-score, the
//! z-score is clamped to `±z_clamp`, rescaled to [0, 1] and mapped onto
//! `[score_floor, score_floor + score_span]`. With the default curve every
//! disclosed value lands in [20, 100]: a company exactly at the mean scores
//! 60, anything 1.5 standard deviations or more above it scores 100.

use super::score_types::Rating;
use super::stats::AxisStats;
use crate::config::ScoringConfig;

/// Score `value` on the default 20-100 curve.
pub fn calculate_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    calculate_score_with(value, mean, std_dev, &ScoringConfig::default())
}

/// Score `value` on the curve described by `config`.
pub fn calculate_score_with(value: f64, mean: f64, std_dev: f64, config: &ScoringConfig) -> f64 {
    let z = z_score(value, mean, std_dev);
    let clamped = z.clamp(-config.z_clamp, config.z_clamp);
    let normalized = (clamped + config.z_clamp) / (2.0 * config.z_clamp);
    config.score_floor + normalized * config.score_span
}

/// Score a value against one axis of population statistics.
pub fn score_against(value: f64, stats: &AxisStats, config: &ScoringConfig) -> f64 {
    calculate_score_with(value, stats.mean, stats.std_dev, config)
}

/// Convert a score to a 1-5 rating.
pub fn score_to_rating(score: f64) -> Rating {
    Rating::from_score(score)
}

/// Standard score; `0` when the deviation is zero or the inputs are not
/// comparable (NaN).
fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    let z = (value - mean) / std_dev;
    if z.is_nan() {
        0.0
    } else {
        z
    }
}
