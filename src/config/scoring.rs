//! Scoring configuration for company attraction ratings
//!
//! Holds the constants of the clamped z-score curve, the undisclosed-axis
//! rating, the holiday ceiling and the per-axis fallback means used when no
//! company in the loaded set discloses an axis.

use serde::{Deserialize, Serialize};

/// Parameters of the rating computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// z-scores beyond +/- this many standard deviations are clamped
    #[serde(default = "default_z_clamp")]
    pub z_clamp: f64,

    /// Lowest score a disclosed value can receive
    #[serde(default = "default_score_floor")]
    pub score_floor: f64,

    /// Width of the score range above the floor
    #[serde(default = "default_score_span")]
    pub score_span: f64,

    /// Rating given to an axis the company did not disclose (1-5)
    #[serde(default = "default_undisclosed_rating")]
    pub undisclosed_rating: u8,

    /// Disclosed annual holidays at or above this count always rate 5
    #[serde(default = "default_holiday_ceiling_days")]
    pub holiday_ceiling_days: f64,

    /// Salary mean when no company discloses a salary
    #[serde(default = "default_fallback_salary_mean")]
    pub fallback_salary_mean: f64,

    /// log10(headcount) mean when no company discloses headcount
    #[serde(default = "default_fallback_log_headcount_mean")]
    pub fallback_log_headcount_mean: f64,

    /// Annual holidays mean when no company discloses holidays
    #[serde(default = "default_fallback_holidays_mean")]
    pub fallback_holidays_mean: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            z_clamp: default_z_clamp(),
            score_floor: default_score_floor(),
            score_span: default_score_span(),
            undisclosed_rating: default_undisclosed_rating(),
            holiday_ceiling_days: default_holiday_ceiling_days(),
            fallback_salary_mean: default_fallback_salary_mean(),
            fallback_log_headcount_mean: default_fallback_log_headcount_mean(),
            fallback_holidays_mean: default_fallback_holidays_mean(),
        }
    }
}

impl ScoringConfig {
    // Pure function: Validate a value is finite and strictly positive
    fn validate_positive(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a positive number, got {}", name, value))
        }
    }

    // Pure function: Validate a rating is on the 1-5 scale
    fn validate_rating(value: u8, name: &str) -> Result<(), String> {
        if (1..=5).contains(&value) {
            Ok(())
        } else {
            Err(format!("{} must be between 1 and 5, got {}", name, value))
        }
    }

    // Pure function: Collect all validations
    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_positive(self.z_clamp, "z_clamp"),
            Self::validate_positive(self.score_span, "score_span"),
            Self::validate_positive(self.holiday_ceiling_days, "holiday_ceiling_days"),
            Self::validate_positive(self.fallback_salary_mean, "fallback_salary_mean"),
            Self::validate_positive(
                self.fallback_log_headcount_mean,
                "fallback_log_headcount_mean",
            ),
            Self::validate_positive(self.fallback_holidays_mean, "fallback_holidays_mean"),
            Self::validate_rating(self.undisclosed_rating, "undisclosed_rating"),
            if self.score_floor.is_finite() && self.score_floor >= 0.0 {
                Ok(())
            } else {
                Err(format!(
                    "score_floor must be a non-negative number, got {}",
                    self.score_floor
                ))
            },
        ]
    }

    /// Validate every field, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_validations() {
            validation?;
        }
        Ok(())
    }
}

pub fn default_z_clamp() -> f64 {
    1.5
}
pub fn default_score_floor() -> f64 {
    20.0
}
pub fn default_score_span() -> f64 {
    80.0
}
pub fn default_undisclosed_rating() -> u8 {
    2
}
pub fn default_holiday_ceiling_days() -> f64 {
    125.0
}
pub fn default_fallback_salary_mean() -> f64 {
    220_000.0 // typical monthly base salary for new graduates, in yen
}
pub fn default_fallback_log_headcount_mean() -> f64 {
    2.5 // roughly 300 employees
}
pub fn default_fallback_holidays_mean() -> f64 {
    120.0
}
