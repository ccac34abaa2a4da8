//! Population statistics per rating axis.
//!
//! Statistics are computed once over the full loaded company set, before
//! any filter is applied, and serve as the reference every company is
//! compared against. Only disclosed (positive) values take part.

use crate::config::ScoringConfig;
use crate::core::CompanyRecord;
use crate::normalize::is_disclosed;
use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisStats {
    pub mean: f64,
    pub std_dev: f64,
    /// Number of disclosed values the statistics were computed from
    pub sample_size: usize,
}

impl AxisStats {
    /// Compute statistics over already-disclosed values.
    ///
    /// The standard deviation divides by N. It is forced to 1 when it
    /// comes out as 0 (all values equal) or when `values` is empty, in which
    /// case the mean is `fallback_mean`.
    pub fn from_values(values: &[f64], fallback_mean: f64) -> Self {
        if values.is_empty() {
            return Self {
                mean: fallback_mean,
                std_dev: 1.0,
                sample_size: 0,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Self {
            mean,
            std_dev: if std_dev > 0.0 { std_dev } else { 1.0 },
            sample_size: values.len(),
        }
    }
}

/// Reference statistics for the three rating axes.
///
/// Headcount is tracked in log10 space so that a handful of very large
/// employers does not flatten everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationStats {
    pub salary: AxisStats,
    pub log_headcount: AxisStats,
    pub holidays: AxisStats,
}

impl PopulationStats {
    /// Compute statistics over every company in `companies`.
    pub fn from_companies(companies: &[CompanyRecord], config: &ScoringConfig) -> Self {
        let salaries = disclosed(companies, CompanyRecord::salary);
        let log_headcounts: Vec<f64> = disclosed(companies, CompanyRecord::headcount)
            .into_iter()
            .map(f64::log10)
            .collect();
        let holidays = disclosed(companies, CompanyRecord::holidays);

        let stats = Self {
            salary: AxisStats::from_values(&salaries, config.fallback_salary_mean),
            log_headcount: AxisStats::from_values(
                &log_headcounts,
                config.fallback_log_headcount_mean,
            ),
            holidays: AxisStats::from_values(&holidays, config.fallback_holidays_mean),
        };

        log::debug!(
            "Population stats over {} companies: salary {:.1}±{:.1} (n={}), log10 headcount {:.3}±{:.3} (n={}), holidays {:.1}±{:.1} (n={})",
            companies.len(),
            stats.salary.mean,
            stats.salary.std_dev,
            stats.salary.sample_size,
            stats.log_headcount.mean,
            stats.log_headcount.std_dev,
            stats.log_headcount.sample_size,
            stats.holidays.mean,
            stats.holidays.std_dev,
            stats.holidays.sample_size,
        );

        stats
    }

    /// Statistics for an empty population: fallback means, unit deviation.
    pub fn fallback(config: &ScoringConfig) -> Self {
        Self::from_companies(&[], config)
    }
}

fn disclosed(companies: &[CompanyRecord], extract: fn(&CompanyRecord) -> f64) -> Vec<f64> {
    companies
        .iter()
        .map(extract)
        .filter(|v| is_disclosed(*v) && v.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawValue;

    fn company(salary: f64, headcount: f64, holidays: f64) -> CompanyRecord {
        CompanyRecord {
            base_salary: RawValue::Number(salary),
            number_of_employees: RawValue::Number(headcount),
            annual_holidays: RawValue::Number(holidays),
            ..CompanyRecord::new("id", "name")
        }
    }

    #[test]
    fn test_population_mean_and_std_dev() {
        let stats = AxisStats::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 0.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.sample_size, 8);
    }

    #[test]
    fn test_identical_values_get_unit_std_dev() {
        let stats = AxisStats::from_values(&[120.0, 120.0, 120.0], 0.0);
        assert_eq!(stats.mean, 120.0);
        assert_eq!(stats.std_dev, 1.0);
    }

    #[test]
    fn test_empty_values_use_fallback() {
        let stats = AxisStats::from_values(&[], 118.0);
        assert_eq!(stats.mean, 118.0);
        assert_eq!(stats.std_dev, 1.0);
        assert_eq!(stats.sample_size, 0);
    }

    #[test]
    fn test_undisclosed_values_are_excluded() {
        let companies = vec![
            company(200_000.0, 100.0, 120.0),
            company(240_000.0, 1000.0, 110.0),
            company(0.0, 0.0, 0.0),
            company(-1.0, -5.0, -3.0),
        ];

        let stats = PopulationStats::from_companies(&companies, &ScoringConfig::default());

        assert_eq!(stats.salary.mean, 220_000.0);
        assert_eq!(stats.salary.sample_size, 2);
        assert!((stats.log_headcount.mean - 2.5).abs() < 1e-12);
        assert_eq!(stats.holidays.mean, 115.0);
    }

    #[test]
    fn test_headcount_is_aggregated_in_log_space() {
        let companies = vec![company(1.0, 10.0, 1.0), company(1.0, 1000.0, 1.0)];
        let stats = PopulationStats::from_companies(&companies, &ScoringConfig::default());
        assert!((stats.log_headcount.mean - 2.0).abs() < 1e-12);
        assert!((stats.log_headcount.std_dev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_population_uses_configured_fallbacks() {
        let config = ScoringConfig::default();
        let stats = PopulationStats::fallback(&config);
        assert_eq!(stats.salary.mean, config.fallback_salary_mean);
        assert_eq!(stats.log_headcount.mean, config.fallback_log_headcount_mean);
        assert_eq!(stats.holidays.mean, config.fallback_holidays_mean);
        assert_eq!(stats.salary.std_dev, 1.0);
    }

    #[test]
    fn test_text_salaries_are_normalized() {
        let companies = vec![
            CompanyRecord {
                base_salary: RawValue::text("210,000円"),
                ..CompanyRecord::new("a", "A")
            },
            CompanyRecord {
                base_salary: RawValue::text("N/A"),
                ..CompanyRecord::new("b", "B")
            },
        ];
        let stats = PopulationStats::from_companies(&companies, &ScoringConfig::default());
        assert_eq!(stats.salary.mean, 210_000.0);
        assert_eq!(stats.salary.sample_size, 1);
    }
}
