//! Per-company axis ratings and the overall attraction score.
//!
//! Policy for missing data:
//! - an axis whose raw value is not positive is undisclosed and receives
//!   `undisclosed_rating` (2 by default) without consulting the population;
//!   withholding data is rated below an average company
//! - disclosed annual holidays at or above `holiday_ceiling_days` always
//!   rate 5
//!
//! A company with nothing disclosed still gets a deterministic score
//! (2.0 by default) rather than dropping out of the list.

use super::calculator::{score_against, score_to_rating};
use super::score_types::Rating;
use super::stats::PopulationStats;
use crate::config::ScoringConfig;
use crate::core::CompanyRecord;
use crate::normalize::is_disclosed;
use serde::Serialize;

/// The three per-axis ratings of one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisRatings {
    pub salary: Rating,
    pub headcount: Rating,
    pub holidays: Rating,
}

impl AxisRatings {
    pub fn new(salary: u8, headcount: u8, holidays: u8) -> Self {
        Self {
            salary: Rating::new(salary),
            headcount: Rating::new(headcount),
            holidays: Rating::new(holidays),
        }
    }
}

/// Which axes a company left undisclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UndisclosedAxes {
    pub salary: bool,
    pub headcount: bool,
    pub holidays: bool,
}

impl UndisclosedAxes {
    pub fn of(record: &CompanyRecord) -> Self {
        Self {
            salary: !is_disclosed(record.salary()),
            headcount: !is_disclosed(record.headcount()),
            holidays: !is_disclosed(record.holidays()),
        }
    }

    pub fn all(&self) -> bool {
        self.salary && self.headcount && self.holidays
    }
}

/// Rate one company on all three axes.
pub fn rate_company(
    record: &CompanyRecord,
    stats: &PopulationStats,
    config: &ScoringConfig,
) -> AxisRatings {
    let undisclosed_rating = Rating::new(config.undisclosed_rating);

    let salary = record.salary();
    let salary = if is_disclosed(salary) {
        score_to_rating(score_against(salary, &stats.salary, config))
    } else {
        undisclosed_rating
    };

    let headcount = record.headcount();
    let headcount = if is_disclosed(headcount) {
        score_to_rating(score_against(
            headcount.log10(),
            &stats.log_headcount,
            config,
        ))
    } else {
        undisclosed_rating
    };

    let holidays = record.holidays();
    let holidays = if !is_disclosed(holidays) {
        undisclosed_rating
    } else if holidays >= config.holiday_ceiling_days {
        Rating::MAX
    } else {
        score_to_rating(score_against(holidays, &stats.holidays, config))
    };

    AxisRatings {
        salary,
        headcount,
        holidays,
    }
}

/// Mean of the three ratings rounded to one decimal place.
pub fn attraction_score(ratings: &AxisRatings) -> f64 {
    let sum = f64::from(ratings.salary.value())
        + f64::from(ratings.headcount.value())
        + f64::from(ratings.holidays.value());
    round_to_tenth(sum / 3.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A company together with its derived ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCompany {
    #[serde(flatten)]
    pub record: CompanyRecord,
    pub ratings: AxisRatings,
    pub undisclosed: UndisclosedAxes,
    pub attraction_score: f64,
}

impl ScoredCompany {
    pub fn score(record: CompanyRecord, stats: &PopulationStats, config: &ScoringConfig) -> Self {
        let ratings = rate_company(&record, stats, config);
        let undisclosed = UndisclosedAxes::of(&record);
        Self {
            attraction_score: attraction_score(&ratings),
            ratings,
            undisclosed,
            record,
        }
    }
}

/// Score every company against shared population statistics.
///
/// The input slice is left untouched; records are cloned into the result.
pub fn score_companies(
    companies: &[CompanyRecord],
    stats: &PopulationStats,
    config: &ScoringConfig,
) -> Vec<ScoredCompany> {
    companies
        .iter()
        .cloned()
        .map(|record| ScoredCompany::score(record, stats, config))
        .collect()
}

/// Compute population statistics over `companies` and score each of them.
pub fn score_population(
    companies: &[CompanyRecord],
    config: &ScoringConfig,
) -> (PopulationStats, Vec<ScoredCompany>) {
    let stats = PopulationStats::from_companies(companies, config);
    let scored = score_companies(companies, &stats, config);
    (stats, scored)
}
