//! Company records as delivered by the backend.
//!
//! The backend mixes numbers, formatted strings ("235,000円"), booleans and
//! boolean-like strings ("あり", "true", "1") across attributes, and any of
//! them may be null or the sentinel `"N/A"`. Every loosely typed attribute is
//! therefore carried as a [`RawValue`] so that decoding a record never fails
//! on a surprising type. Interpretation happens in [`crate::normalize`].

use crate::core::industry::Industry;
use crate::normalize::{parse_flag, parse_numeric};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A loosely typed attribute value.
///
/// Decoding accepts any JSON value. Objects and arrays carry nothing the
/// ranking can use and decode as [`RawValue::Null`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(RawValue::Null, RawValue::Number),
            Value::String(s) => RawValue::Text(s),
            Value::Null | Value::Array(_) | Value::Object(_) => RawValue::Null,
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(RawValue::from)
    }
}

// Identifiers and labels: strings as is, numbers in their JSON spelling,
// anything else empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// One company as listed to students.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub industry: String,
    pub rank: RawValue,
    pub rating: RawValue,
    pub employee_reviews_count: RawValue,
    pub starting_salary_graduates: RawValue,
    pub base_salary: RawValue,
    pub annual_holidays: RawValue,
    pub average_overtime_hours: RawValue,
    pub paid_leave_usage_rate: RawValue,
    pub average_paid_leave_days: RawValue,
    pub work_location: RawValue,
    pub relocation: RawValue,
    pub bonus_frequency_timing: RawValue,
    pub bonus_previous_year_result: RawValue,
    pub housing_allowance: RawValue,
    pub meal_subsidy: RawValue,
    pub special_leave: RawValue,
    pub qualification_support: RawValue,
    pub remote_work: RawValue,
    pub flextime: RawValue,
    pub fixed_overtime_system: RawValue,
    pub fixed_overtime_allowance: RawValue,
    pub company_overview_120: RawValue,
    pub headquarters_address: RawValue,
    pub number_of_employees: RawValue,
    pub main_business_products: RawValue,
    pub revenue: RawValue,
    pub strengths_unique_points: RawValue,
    pub future_prospects: RawValue,
    pub job_openings_excerpt: RawValue,
    pub average_years_of_service: RawValue,
    pub average_age: RawValue,
    pub gender_ratio: RawValue,
    pub official_website_url: RawValue,
    pub recruitment_page_url: RawValue,
    pub reference_url_recruitment: RawValue,
    pub reference_url_open_work: RawValue,
    pub reference_url_mynavi_rikunavi: RawValue,
    pub created_at: RawValue,
    pub updated_at: RawValue,
}

impl CompanyRecord {
    pub fn new(id: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    /// Parsed industry category, `None` when the label is not a known one.
    pub fn industry_category(&self) -> Option<Industry> {
        Industry::parse(&self.industry)
    }

    /// Monthly base salary in yen; `<= 0` means undisclosed.
    pub fn salary(&self) -> f64 {
        parse_numeric(&self.base_salary)
    }

    /// Employee headcount; `<= 0` means undisclosed.
    pub fn headcount(&self) -> f64 {
        parse_numeric(&self.number_of_employees)
    }

    /// Annual holidays in days; `<= 0` means undisclosed.
    pub fn holidays(&self) -> f64 {
        parse_numeric(&self.annual_holidays)
    }

    pub fn has_housing_allowance(&self) -> bool {
        parse_flag(&self.housing_allowance)
    }

    pub fn has_remote_work(&self) -> bool {
        parse_flag(&self.remote_work)
    }

    pub fn has_flextime(&self) -> bool {
        parse_flag(&self.flextime)
    }

    pub fn has_special_leave(&self) -> bool {
        parse_flag(&self.special_leave)
    }

    pub fn has_qualification_support(&self) -> bool {
        parse_flag(&self.qualification_support)
    }

    pub fn has_fixed_overtime(&self) -> bool {
        parse_flag(&self.fixed_overtime_system)
    }

    /// True when the relocation field carries the `"none"` sentinel.
    pub fn is_relocation_free(&self) -> bool {
        matches!(&self.relocation, RawValue::Text(s) if s.trim() == RELOCATION_NONE)
    }
}

/// Sentinel stored in `relocation` for companies that never transfer staff.
pub const RELOCATION_NONE: &str = "none";
