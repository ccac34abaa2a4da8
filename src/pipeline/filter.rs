//! Filter state and the pure predicates built from it.
//!
//! Every active predicate must hold (logical AND), so the order in which
//! toggles are switched on never changes the result.

use crate::core::{CompanyRecord, Industry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One of the boolean filter switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterToggle {
    RelocationFree,
    HousingAllowance,
    RemoteWork,
    Flextime,
    SpecialLeave,
    NoFixedOvertime,
}

impl FilterToggle {
    pub const ALL: [FilterToggle; 6] = [
        FilterToggle::RelocationFree,
        FilterToggle::HousingAllowance,
        FilterToggle::RemoteWork,
        FilterToggle::Flextime,
        FilterToggle::SpecialLeave,
        FilterToggle::NoFixedOvertime,
    ];

    /// Label shown next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            FilterToggle::RelocationFree => "転勤なし",
            FilterToggle::HousingAllowance => "住宅手当あり",
            FilterToggle::RemoteWork => "リモートワーク可",
            FilterToggle::Flextime => "フレックスタイム制",
            FilterToggle::SpecialLeave => "特別休暇あり",
            FilterToggle::NoFixedOvertime => "固定残業代なし",
        }
    }

    /// Whether `record` satisfies this switch.
    pub fn matches(self, record: &CompanyRecord) -> bool {
        match self {
            FilterToggle::RelocationFree => record.is_relocation_free(),
            FilterToggle::HousingAllowance => record.has_housing_allowance(),
            FilterToggle::RemoteWork => record.has_remote_work(),
            FilterToggle::Flextime => record.has_flextime(),
            FilterToggle::SpecialLeave => record.has_special_leave(),
            FilterToggle::NoFixedOvertime => !record.has_fixed_overtime(),
        }
    }
}

/// User-selected filters plus the free-text name query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub relocation_free: bool,
    pub housing_allowance: bool,
    pub remote_work: bool,
    pub flextime: bool,
    pub special_leave: bool,
    pub no_fixed_overtime: bool,
    /// Selected industries; empty means every industry
    pub industries: BTreeSet<Industry>,
    /// Case-insensitive company-name search
    pub query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, toggle: FilterToggle) -> bool {
        match toggle {
            FilterToggle::RelocationFree => self.relocation_free,
            FilterToggle::HousingAllowance => self.housing_allowance,
            FilterToggle::RemoteWork => self.remote_work,
            FilterToggle::Flextime => self.flextime,
            FilterToggle::SpecialLeave => self.special_leave,
            FilterToggle::NoFixedOvertime => self.no_fixed_overtime,
        }
    }

    pub fn set(&mut self, toggle: FilterToggle, enabled: bool) {
        let slot = match toggle {
            FilterToggle::RelocationFree => &mut self.relocation_free,
            FilterToggle::HousingAllowance => &mut self.housing_allowance,
            FilterToggle::RemoteWork => &mut self.remote_work,
            FilterToggle::Flextime => &mut self.flextime,
            FilterToggle::SpecialLeave => &mut self.special_leave,
            FilterToggle::NoFixedOvertime => &mut self.no_fixed_overtime,
        };
        *slot = enabled;
    }

    /// Builder form of [`FilterState::set`].
    pub fn with(mut self, toggle: FilterToggle) -> Self {
        self.set(toggle, true);
        self
    }

    pub fn active_toggles(&self) -> impl Iterator<Item = FilterToggle> + '_ {
        FilterToggle::ALL
            .into_iter()
            .filter(move |toggle| self.is_enabled(*toggle))
    }

    /// Click on an industry tag: selecting one replaces any other
    /// selection, clicking the selected one clears it.
    pub fn select_industry(&mut self, industry: Industry) {
        let was_selected = self.industries.contains(&industry);
        self.industries.clear();
        if !was_selected {
            self.industries.insert(industry);
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// True when any industry or toggle is active. The query is not counted.
    pub fn has_active_filter(&self) -> bool {
        !self.industries.is_empty() || self.active_toggles().next().is_some()
    }

    /// Reset every filter and the query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Counts of records rejected by each kind of predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterStats {
    pub filtered_by_industry: usize,
    pub filtered_by_toggle: usize,
}

/// Industry predicate: passes when nothing is selected or the record's
/// industry is among the selection.
#[inline]
pub fn passes_industry(record: &CompanyRecord, industries: &BTreeSet<Industry>) -> bool {
    if industries.is_empty() {
        return true;
    }
    record
        .industry_category()
        .is_some_and(|industry| industries.contains(&industry))
}

/// Toggle predicate: every enabled switch must match.
#[inline]
pub fn passes_toggles(record: &CompanyRecord, filter: &FilterState) -> bool {
    filter.active_toggles().all(|toggle| toggle.matches(record))
}

/// All predicates of `filter` except the name query.
pub fn matches_filters(record: &CompanyRecord, filter: &FilterState) -> bool {
    passes_industry(record, &filter.industries) && passes_toggles(record, filter)
}
