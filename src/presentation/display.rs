//! Helpers that turn raw company fields into card text.

use crate::core::{CompanyRecord, RawValue};
use crate::normalize::UNDISCLOSED_SENTINEL;
use crate::scoring::{Rating, UndisclosedAxes};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Text shown for any value the company did not disclose.
pub const UNDISCLOSED_LABEL: &str = "非公開";

static PREFECTURE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(北海道|.{2,3}[都道府県])").unwrap());

static GENDER_RATIO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+\.?[0-9]*)\s*:\s*([0-9]+\.?[0-9]*)").unwrap());

fn is_blank_or_sentinel(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == UNDISCLOSED_SENTINEL || text == UNDISCLOSED_LABEL
}

/// Render a field verbatim, or [`UNDISCLOSED_LABEL`] when it is missing.
pub fn format_value(value: &RawValue) -> String {
    match value {
        RawValue::Null => UNDISCLOSED_LABEL.to_string(),
        RawValue::Text(text) if is_blank_or_sentinel(text) => UNDISCLOSED_LABEL.to_string(),
        RawValue::Text(text) => text.clone(),
        RawValue::Bool(flag) => flag.to_string(),
        RawValue::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{}", *n as i64),
        RawValue::Number(n) => n.to_string(),
    }
}

/// Prefecture part of a head-office address, e.g. `"広島県"` from
/// `"〒730-0011 広島県広島市中区..."`. Addresses without a recognisable
/// prefecture are returned as they are.
pub fn format_prefecture(address: &RawValue) -> String {
    let Some(address) = address.as_text().filter(|a| !is_blank_or_sentinel(a)) else {
        return UNDISCLOSED_LABEL.to_string();
    };
    match PREFECTURE.find(address) {
        Some(found) => found.as_str().trim().to_string(),
        None => address.to_string(),
    }
}

/// Share of women from a `"male:female"` ratio, e.g. `"女性 40.0%"`.
pub fn format_gender_ratio(ratio: &RawValue) -> String {
    female_share(ratio)
        .map(|share| format!("女性 {:.1}%", share))
        .unwrap_or_else(|| UNDISCLOSED_LABEL.to_string())
}

/// Percentage of women, when the ratio is disclosed and parsable.
pub fn female_share(ratio: &RawValue) -> Option<f64> {
    let text = ratio.as_text().filter(|t| !is_blank_or_sentinel(t))?;
    let captures = GENDER_RATIO.captures(text)?;
    let male: f64 = captures.get(1)?.as_str().parse().ok()?;
    let female: f64 = captures.get(2)?.as_str().parse().ok()?;
    let total = male + female;
    if total == 0.0 {
        return None;
    }
    Some(female / total * 100.0)
}

/// Number of the five tracked welfare programs a company offers.
pub fn count_welfare_features(record: &CompanyRecord) -> usize {
    [
        record.has_housing_allowance(),
        record.has_remote_work(),
        record.has_flextime(),
        record.has_special_leave(),
        record.has_qualification_support(),
    ]
    .into_iter()
    .filter(|offered| *offered)
    .count()
}

pub const WELFARE_FEATURE_TOTAL: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WelfareLevel {
    High,
    Medium,
    Low,
}

impl WelfareLevel {
    pub fn from_count(count: usize) -> Self {
        match count {
            4.. => WelfareLevel::High,
            2..=3 => WelfareLevel::Medium,
            _ => WelfareLevel::Low,
        }
    }
}

/// Chart notes explaining axes pinned to the undisclosed rating. Restricted
/// (demo) charts carry no notes.
pub fn undisclosed_notes(undisclosed: &UndisclosedAxes, restricted: bool) -> Vec<&'static str> {
    if restricted {
        return Vec::new();
    }
    let mut notes = Vec::new();
    if undisclosed.salary {
        notes.push("給与は非公開のため2とする");
    }
    if undisclosed.holidays {
        notes.push("休日は非公開のため2とする");
    }
    if undisclosed.headcount {
        notes.push("規模は非公開のため2とする");
    }
    notes
}

/// Chart color of a rating, red for 5 down to blue for 1.
pub fn rating_color(rating: Rating) -> &'static str {
    match rating.value() {
        5 => "#EF4444",
        4 => "#F97316",
        3 => "#EAB308",
        2 => "#22C55E",
        _ => "#3B82F6",
    }
}

/// Rating closest to an attraction score.
pub fn nearest_rating(score: f64) -> Rating {
    Rating::new(score.round().clamp(1.0, 5.0) as u8)
}

/// Color of an attraction score: the color of its nearest rating.
pub fn score_color(score: f64) -> &'static str {
    rating_color(nearest_rating(score))
}
