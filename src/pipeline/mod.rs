//! Ranking view pipeline.
//!
//! Turns the scored company list into the ordered view shown to the user.
//! Every stage is a pure function and the input slice is never modified.
//!
//! ```text
//! &[ScoredCompany]
//!   → filter_items   (industry + toggles, AND)      → filtered_count
//!   → sort_items     (single key, stable)
//!   → search_items   (name substring)               → matched_count
//!   → rank_items     (1-based display rank)
//! ```

pub mod filter;
pub mod search;
pub mod sort;

#[cfg(test)]
mod tests;

pub use filter::{
    matches_filters, passes_industry, passes_toggles, FilterState, FilterStats, FilterToggle,
};
pub use search::{matches_query, search_items};
pub use sort::{compare, sort_items, SortDirection, SortKey, SortState};

use crate::scoring::ScoredCompany;
use serde::Serialize;

/// A company at its position in the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCompany {
    pub display_rank: usize,
    #[serde(flatten)]
    pub company: ScoredCompany,
}

/// Result of running the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingView {
    pub items: Vec<RankedCompany>,
    /// Companies given to the pipeline
    pub total_count: usize,
    /// Companies left after the filter predicates, before name search
    pub filtered_count: usize,
    /// Companies left after name search
    pub matched_count: usize,
    pub filter_stats: FilterStats,
}

impl RankingView {
    /// Keep only the first `limit` items. Counts are unchanged.
    pub fn truncate(mut self, limit: usize) -> Self {
        self.items.truncate(limit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Run filter, sort and search over `companies`.
pub fn apply(companies: &[ScoredCompany], filter: &FilterState, sort: &SortState) -> RankingView {
    let total_count = companies.len();

    let (filtered, filter_stats) = filter_items(companies, filter);
    let filtered_count = filtered.len();

    let sorted = sort_items(filtered, sort);
    let matched = search_items(sorted, &filter.query);
    let matched_count = matched.len();

    log::debug!(
        "Ranking view: {} total, {} after filters, {} after search",
        total_count,
        filtered_count,
        matched_count
    );

    RankingView {
        items: rank_items(matched),
        total_count,
        filtered_count,
        matched_count,
        filter_stats,
    }
}

/// Filters items by industry and toggles.
///
/// Pure function - clones the survivors into a new Vec.
pub fn filter_items(
    companies: &[ScoredCompany],
    filter: &FilterState,
) -> (Vec<ScoredCompany>, FilterStats) {
    let mut stats = FilterStats::default();

    let kept = companies
        .iter()
        .filter(|company| {
            if !passes_industry(&company.record, &filter.industries) {
                stats.filtered_by_industry += 1;
                return false;
            }
            if !passes_toggles(&company.record, filter) {
                stats.filtered_by_toggle += 1;
                return false;
            }
            true
        })
        .cloned()
        .collect();

    (kept, stats)
}

/// Assigns 1-based display ranks in the current order.
pub fn rank_items(items: Vec<ScoredCompany>) -> Vec<RankedCompany> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, company)| RankedCompany {
            display_rank: index + 1,
            company,
        })
        .collect()
}
