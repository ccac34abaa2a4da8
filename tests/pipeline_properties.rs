//! Property-based tests for the ranking view pipeline
//!
//! - The input list is never modified
//! - Applying filters one at a time in any order matches applying them together
//! - Ascending order is descending order reversed when keys are distinct
//! - Every returned company passes every active predicate
//! - Display ranks are 1..=n in order

use jimotode::pipeline::{filter_items, matches_filters};
use jimotode::{
    apply, AxisRatings, CompanyRecord, FilterState, FilterToggle, RawValue, ScoredCompany,
    SortDirection, SortKey, SortState,
};
use jimotode::scoring::UndisclosedAxes;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn flag() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Null),
        any::<bool>().prop_map(RawValue::Bool),
        Just(RawValue::text("true")),
        Just(RawValue::text("false")),
        Just(RawValue::text("あり")),
        Just(RawValue::text("なし")),
        Just(RawValue::Number(1.0)),
        Just(RawValue::Number(0.0)),
    ]
}

fn industry() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("製造業".to_string()),
        Just("情報通信業".to_string()),
        Just("金融・保険業".to_string()),
        Just("".to_string()),
    ]
}

fn company() -> impl Strategy<Value = ScoredCompany> {
    (
        "[a-z]{1,8}",
        industry(),
        prop_oneof![Just(RawValue::text("none")), Just(RawValue::text("あり")), Just(RawValue::Null)],
        (flag(), flag(), flag(), flag(), flag()),
        0.0f64..1_000_000.0,
        1u8..=5,
    )
        .prop_map(|(name, industry, relocation, flags, revenue, rating)| {
            let (housing, remote, flex, special, fixed) = flags;
            let ratings = AxisRatings::new(rating, rating, rating);
            ScoredCompany {
                record: CompanyRecord {
                    industry,
                    relocation,
                    housing_allowance: housing,
                    remote_work: remote,
                    flextime: flex,
                    special_leave: special,
                    fixed_overtime_system: fixed,
                    revenue: RawValue::Number(revenue),
                    ..CompanyRecord::new(name.clone(), name)
                },
                ratings,
                undisclosed: UndisclosedAxes::default(),
                attraction_score: jimotode::attraction_score(&ratings),
            }
        })
}

fn toggles() -> impl Strategy<Value = Vec<FilterToggle>> {
    proptest::sample::subsequence(FilterToggle::ALL.to_vec(), 0..=FilterToggle::ALL.len())
}

fn with_unique_ids(companies: Vec<ScoredCompany>) -> Vec<ScoredCompany> {
    companies
        .into_iter()
        .enumerate()
        .map(|(i, mut company)| {
            company.record.id = i.to_string();
            company
        })
        .collect()
}

fn record_ids(companies: &[ScoredCompany]) -> Vec<String> {
    companies.iter().map(|c| c.record.id.clone()).collect()
}

fn ids(view: &jimotode::RankingView) -> Vec<String> {
    view.items
        .iter()
        .map(|item| item.company.record.id.clone())
        .collect()
}

proptest! {
    #[test]
    fn prop_apply_never_mutates_input(
        companies in prop::collection::vec(company(), 0..30),
        enabled in toggles(),
    ) {
        let snapshot = companies.clone();
        let filter = enabled.iter().fold(FilterState::new(), |f, t| f.with(*t));

        let _ = apply(&companies, &filter, &SortState::new(SortKey::Revenue, SortDirection::Ascending));

        prop_assert_eq!(companies, snapshot);
    }

    #[test]
    fn prop_filter_order_does_not_matter(
        companies in prop::collection::vec(company(), 0..30),
        enabled in toggles().prop_shuffle(),
    ) {
        let companies = with_unique_ids(companies);

        // One single-toggle pass per filter, in the shuffled order.
        let stepwise = enabled.iter().fold(companies.clone(), |remaining, toggle| {
            filter_items(&remaining, &FilterState::new().with(*toggle)).0
        });

        let combined = enabled.iter().fold(FilterState::new(), |f, t| f.with(*t));
        let (at_once, _) = filter_items(&companies, &combined);
        prop_assert_eq!(record_ids(&stepwise), record_ids(&at_once));

        let ranked: BTreeSet<String> = ids(&apply(&companies, &combined, &SortState::default()))
            .into_iter()
            .collect();
        let expected: BTreeSet<String> = record_ids(&stepwise).into_iter().collect();
        prop_assert_eq!(ranked, expected);
    }

    #[test]
    fn prop_results_satisfy_every_predicate(
        companies in prop::collection::vec(company(), 0..30),
        enabled in toggles(),
    ) {
        let filter = enabled.iter().fold(FilterState::new(), |f, t| f.with(*t));
        let view = apply(&companies, &filter, &SortState::default());

        for item in &view.items {
            prop_assert!(matches_filters(&item.company.record, &filter));
        }
        let expected = companies
            .iter()
            .filter(|c| matches_filters(&c.record, &filter))
            .count();
        prop_assert_eq!(view.filtered_count, expected);
    }

    #[test]
    fn prop_ascending_is_reversed_descending(
        revenues in prop::collection::btree_set(0u32..1_000_000, 0..30),
    ) {
        let companies: Vec<ScoredCompany> = revenues
            .iter()
            .enumerate()
            .map(|(i, revenue)| ScoredCompany {
                record: CompanyRecord {
                    revenue: RawValue::Number(f64::from(*revenue)),
                    ..CompanyRecord::new(i.to_string(), format!("company {}", i))
                },
                ratings: AxisRatings::new(3, 3, 3),
                undisclosed: UndisclosedAxes::default(),
                attraction_score: 3.0,
            })
            .rev()
            .collect();

        let ascending = ids(&apply(
            &companies,
            &FilterState::default(),
            &SortState::new(SortKey::Revenue, SortDirection::Ascending),
        ));
        let mut descending = ids(&apply(
            &companies,
            &FilterState::default(),
            &SortState::new(SortKey::Revenue, SortDirection::Descending),
        ));
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn prop_display_ranks_are_sequential(companies in prop::collection::vec(company(), 0..30)) {
        let view = apply(&companies, &FilterState::default(), &SortState::default());
        let ranks: Vec<usize> = view.items.iter().map(|i| i.display_rank).collect();
        let expected: Vec<usize> = (1..=companies.len()).collect();
        prop_assert_eq!(ranks, expected);
    }
}
