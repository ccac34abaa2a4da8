use super::*;
use crate::core::{CompanyRecord, Industry, RawValue};
use crate::scoring::{AxisRatings, UndisclosedAxes};
use pretty_assertions::assert_eq;

fn company(id: &str, name: &str, industry: &str, score: f64) -> ScoredCompany {
    ScoredCompany {
        record: CompanyRecord {
            industry: industry.into(),
            ..CompanyRecord::new(id, name)
        },
        ratings: AxisRatings::new(3, 3, 3),
        undisclosed: UndisclosedAxes::default(),
        attraction_score: score,
    }
}

fn sample() -> Vec<ScoredCompany> {
    let mut remote = company("1", "広島テック", "情報通信業", 3.7);
    remote.record.remote_work = RawValue::Bool(true);
    remote.record.relocation = RawValue::text("none");

    let mut maker = company("2", "呉マシナリー", "製造業", 4.3);
    maker.record.remote_work = RawValue::text("false");

    let mut shop = company("3", "福山ストア", "商業（卸売・小売業）", 2.0);
    shop.record.remote_work = RawValue::text("あり");

    let bank = company("4", "広島銀行サービス", "金融・保険業", 3.0);

    vec![remote, maker, shop, bank]
}

fn ids(view: &RankingView) -> Vec<&str> {
    view.items
        .iter()
        .map(|item| item.company.record.id.as_str())
        .collect()
}

#[test]
fn test_default_view_ranks_everything_by_score() {
    let view = apply(&sample(), &FilterState::default(), &SortState::default());

    assert_eq!(ids(&view), vec!["2", "1", "4", "3"]);
    assert_eq!(view.total_count, 4);
    assert_eq!(view.filtered_count, 4);
    assert_eq!(view.matched_count, 4);
    let ranks: Vec<usize> = view.items.iter().map(|i| i.display_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn test_filters_then_counts() {
    let filter = FilterState::new().with(FilterToggle::RemoteWork);

    let view = apply(&sample(), &filter, &SortState::default());

    assert_eq!(ids(&view), vec!["1", "3"]);
    assert_eq!(view.filtered_count, 2);
    assert_eq!(view.filter_stats.filtered_by_toggle, 2);
    assert_eq!(view.filter_stats.filtered_by_industry, 0);
}

#[test]
fn test_filtered_count_ignores_search() {
    let filter = FilterState::new().with_query("広島");

    let view = apply(&sample(), &filter, &SortState::default());

    assert_eq!(ids(&view), vec!["1", "4"]);
    assert_eq!(view.filtered_count, 4);
    assert_eq!(view.matched_count, 2);
    assert_eq!(view.items[0].display_rank, 1);
    assert_eq!(view.items[1].display_rank, 2);
}

#[test]
fn test_industry_and_toggle_combined() {
    let mut filter = FilterState::new().with(FilterToggle::RemoteWork);
    filter.select_industry(Industry::InformationCommunication);

    let view = apply(&sample(), &filter, &SortState::default());

    assert_eq!(ids(&view), vec!["1"]);
    assert_eq!(view.filter_stats.filtered_by_industry, 3);
}

#[test]
fn test_input_is_not_mutated() {
    let companies = sample();
    let snapshot = companies.clone();
    let filter = FilterState::new()
        .with(FilterToggle::RelocationFree)
        .with_query("テック");

    let _ = apply(
        &companies,
        &filter,
        &SortState::new(SortKey::Revenue, SortDirection::Ascending),
    );

    assert_eq!(companies, snapshot);
}

#[test]
fn test_empty_input() {
    let view = apply(&[], &FilterState::default(), &SortState::default());
    assert!(view.is_empty());
    assert_eq!(view.total_count, 0);
}

#[test]
fn test_truncate_keeps_counts() {
    let view = apply(&sample(), &FilterState::default(), &SortState::default()).truncate(2);
    assert_eq!(ids(&view), vec!["2", "1"]);
    assert_eq!(view.matched_count, 4);
}

#[test]
fn test_ranked_company_serializes_flat() {
    let view = apply(&sample(), &FilterState::default(), &SortState::default());
    let json = serde_json::to_value(&view.items[0]).unwrap();

    assert_eq!(json["displayRank"], 1);
    assert_eq!(json["company_name"], "呉マシナリー");
    assert_eq!(json["attractionScore"], 4.3);
}
