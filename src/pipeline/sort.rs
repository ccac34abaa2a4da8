//! Sort stage: single-key, stable ordering of scored companies.

use crate::core::{CompanyRecord, Error, RawValue};
use crate::normalize::parse_numeric;
use crate::scoring::ScoredCompany;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    AttractionScore,
    StartingSalary,
    BaseSalary,
    Revenue,
    NumberOfEmployees,
    AnnualHolidays,
    AverageOvertimeHours,
    AverageYearsOfService,
    AverageAge,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::AttractionScore,
        SortKey::StartingSalary,
        SortKey::BaseSalary,
        SortKey::Revenue,
        SortKey::NumberOfEmployees,
        SortKey::AnnualHolidays,
        SortKey::AverageOvertimeHours,
        SortKey::AverageYearsOfService,
        SortKey::AverageAge,
    ];

    /// Command-line spelling.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::AttractionScore => "attraction-score",
            SortKey::StartingSalary => "starting-salary",
            SortKey::BaseSalary => "base-salary",
            SortKey::Revenue => "revenue",
            SortKey::NumberOfEmployees => "employees",
            SortKey::AnnualHolidays => "holidays",
            SortKey::AverageOvertimeHours => "overtime",
            SortKey::AverageYearsOfService => "years-of-service",
            SortKey::AverageAge => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::AttractionScore => "魅力度",
            SortKey::StartingSalary => "初任給",
            SortKey::BaseSalary => "基本給",
            SortKey::Revenue => "売上高",
            SortKey::NumberOfEmployees => "従業員数",
            SortKey::AnnualHolidays => "年間休日",
            SortKey::AverageOvertimeHours => "平均残業時間",
            SortKey::AverageYearsOfService => "平均勤続年数",
            SortKey::AverageAge => "平均年齢",
        }
    }

    fn field(self, record: &CompanyRecord) -> Option<&RawValue> {
        match self {
            SortKey::AttractionScore => None,
            SortKey::StartingSalary => Some(&record.starting_salary_graduates),
            SortKey::BaseSalary => Some(&record.base_salary),
            SortKey::Revenue => Some(&record.revenue),
            SortKey::NumberOfEmployees => Some(&record.number_of_employees),
            SortKey::AnnualHolidays => Some(&record.annual_holidays),
            SortKey::AverageOvertimeHours => Some(&record.average_overtime_hours),
            SortKey::AverageYearsOfService => Some(&record.average_years_of_service),
            SortKey::AverageAge => Some(&record.average_age),
        }
    }

    /// Numeric value of this key for one company.
    pub fn value_of(self, company: &ScoredCompany) -> f64 {
        match self.field(&company.record) {
            Some(raw) => parse_numeric(raw),
            None => company.attraction_score,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SortKey::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = SortKey::ALL.iter().map(|k| k.name()).collect();
                Error::Validation(format!(
                    "unknown sort key '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(Error::Validation(format!(
                "unknown sort order '{}' (expected asc or desc)",
                other
            ))),
        }
    }
}

/// Active sort; defaults to attraction score, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Compare two companies under `sort`. Incomparable values (NaN) are equal.
pub fn compare(a: &ScoredCompany, b: &ScoredCompany, sort: &SortState) -> Ordering {
    let ordering = sort
        .key
        .value_of(a)
        .partial_cmp(&sort.key.value_of(b))
        .unwrap_or(Ordering::Equal);
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sorts items by `sort`.
///
/// Pure function - returns new sorted Vec. The sort is stable, so equal
/// keys keep their incoming order.
pub fn sort_items(mut items: Vec<ScoredCompany>, sort: &SortState) -> Vec<ScoredCompany> {
    items.sort_by(|a, b| compare(a, b, sort));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::AxisRatings;
    use crate::scoring::UndisclosedAxes;

    fn scored(id: &str, score: f64, revenue: RawValue) -> ScoredCompany {
        ScoredCompany {
            record: CompanyRecord {
                revenue,
                ..CompanyRecord::new(id, id)
            },
            ratings: AxisRatings::new(3, 3, 3),
            undisclosed: UndisclosedAxes::default(),
            attraction_score: score,
        }
    }

    fn ids(items: &[ScoredCompany]) -> Vec<&str> {
        items.iter().map(|c| c.record.id.as_str()).collect()
    }

    #[test]
    fn test_default_is_attraction_score_descending() {
        let items = vec![
            scored("a", 2.3, RawValue::Null),
            scored("b", 4.0, RawValue::Null),
            scored("c", 3.7, RawValue::Null),
        ];
        let sorted = sort_items(items, &SortState::default());
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_text_fields_sort_numerically() {
        let items = vec![
            scored("a", 3.0, RawValue::text("12億円")),
            scored("b", 3.0, RawValue::text("1,500億円")),
            scored("c", 3.0, RawValue::Number(300.0)),
        ];
        let sort = SortState::new(SortKey::Revenue, SortDirection::Ascending);
        assert_eq!(ids(&sort_items(items, &sort)), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_undisclosed_values_sort_as_zero() {
        let items = vec![
            scored("a", 3.0, RawValue::text("非公開")),
            scored("b", 3.0, RawValue::Number(1.0)),
        ];
        let sort = SortState::new(SortKey::Revenue, SortDirection::Ascending);
        assert_eq!(ids(&sort_items(items, &sort)), vec!["a", "b"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            scored("first", 3.0, RawValue::Null),
            scored("second", 3.0, RawValue::Null),
            scored("third", 3.0, RawValue::Null),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_items(items.clone(), &SortState::new(SortKey::AttractionScore, direction));
            assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("revenue".parse::<SortKey>().unwrap(), SortKey::Revenue);
        assert_eq!(
            "Starting_Salary".parse::<SortKey>().unwrap(),
            SortKey::StartingSalary
        );
        assert!("salary-ish".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("up".parse::<SortDirection>().is_err());
    }
}
