//! What a viewer actually sees for each ranked company.
//!
//! Cards are built from a [`RankingView`] and an [`AccessPolicy`]. The
//! ranking itself is computed identically for every viewer; only the card
//! contents differ.

pub mod display;
pub mod restricted;

pub use display::{
    count_welfare_features, female_share, format_gender_ratio, format_prefecture, format_value,
    nearest_rating, rating_color, score_color, undisclosed_notes, WelfareLevel,
    UNDISCLOSED_LABEL, WELFARE_FEATURE_TOTAL,
};
pub use restricted::{
    demo_ratings, display_ratings, display_score, AccessPolicy, ViewerAccess,
};

use crate::core::CompanyRecord;
use crate::pipeline::{RankedCompany, RankingView};
use crate::scoring::AxisRatings;
use serde::Serialize;

/// One company card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCard<'a> {
    pub display_rank: usize,
    #[serde(flatten)]
    pub record: &'a CompanyRecord,
    pub restricted: bool,
    /// Ratings drawn on the chart (demo stand-ins when restricted)
    pub chart: AxisRatings,
    /// Hidden when restricted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attraction_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_color: Option<&'static str>,
    pub notes: Vec<&'static str>,
    pub prefecture: String,
    pub gender_ratio: String,
    pub welfare_count: usize,
    pub welfare_level: WelfareLevel,
}

impl<'a> CompanyCard<'a> {
    pub fn build(item: &'a RankedCompany, restricted: bool) -> Self {
        let company = &item.company;
        let record = &company.record;
        let welfare_count = count_welfare_features(record);
        let attraction_score = display_score(company.attraction_score, restricted);
        Self {
            display_rank: item.display_rank,
            record,
            restricted,
            chart: display_ratings(&company.ratings, restricted),
            attraction_score,
            score_color: attraction_score.map(score_color),
            notes: undisclosed_notes(&company.undisclosed, restricted),
            prefecture: format_prefecture(&record.headquarters_address),
            gender_ratio: format_gender_ratio(&record.gender_ratio),
            welfare_count,
            welfare_level: WelfareLevel::from_count(welfare_count),
        }
    }
}

/// Build the cards of `view` for the viewer behind `policy`.
pub fn build_cards<'a>(view: &'a RankingView, policy: &AccessPolicy) -> Vec<CompanyCard<'a>> {
    view.items
        .iter()
        .enumerate()
        .map(|(index, item)| CompanyCard::build(item, policy.is_restricted(index)))
        .collect()
}
