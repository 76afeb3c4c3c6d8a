use super::common::*;
use crate::analytics::domain::{ContentType, Region, Role};
use crate::analytics::filter::{filter_records, matches, DateWindow, FilterSelection};
use crate::analytics::records::AnalyticsRecord;

#[test]
fn unrestricted_selection_is_the_identity() {
    let records = scenario_records();
    let selection = FilterSelection::unrestricted();

    let filtered = filter_records(&records, &selection);

    assert_eq!(filtered.len(), records.len());
    for (kept, original) in filtered.iter().zip(records.iter()) {
        assert_eq!(kept.id(), original.id());
    }
}

#[test]
fn role_filter_keeps_only_matching_records_in_order() {
    let records = scenario_records();
    let selection = FilterSelection::unrestricted().with_role(Role::Developer);

    let filtered = filter_records(&records, &selection);

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id().0, "act-1");
    assert_eq!(filtered[1].id().0, "act-2");
}

#[test]
fn adding_constraints_never_grows_the_result() {
    let records = scenario_records();

    let broad = FilterSelection::unrestricted().with_role(Role::Developer);
    let narrow = broad.clone().with_skill("Python");
    let narrower = narrow.clone().with_region(Region::Europe);

    let broad_count = filter_records(&records, &broad).len();
    let narrow_count = filter_records(&records, &narrow).len();
    let narrower_count = filter_records(&records, &narrower).len();

    assert!(narrow_count <= broad_count);
    assert!(narrower_count <= narrow_count);
}

#[test]
fn unknown_category_matches_zero_records_without_error() {
    let records = scenario_records();
    let selection = FilterSelection::unrestricted().with_skill("COBOL");

    assert!(filter_records(&records, &selection).is_empty());
}

#[test]
fn inverted_date_window_matches_nothing() {
    let records = scenario_records();
    let selection = FilterSelection::unrestricted()
        .with_window(DateWindow::between(march(20), march(1)));

    assert!(selection.window.is_inverted());
    assert!(filter_records(&records, &selection).is_empty());
}

#[test]
fn date_window_bounds_are_inclusive() {
    let record = AnalyticsRecord::Activity(activity("edge", Role::Developer, "Rust", 3, 2));

    let exact = FilterSelection::unrestricted()
        .with_window(DateWindow::between(march(10), march(10)));
    assert!(matches(&record, &exact));

    let before = FilterSelection::unrestricted().with_window(DateWindow {
        from: Some(march(11)),
        to: None,
    });
    assert!(!matches(&record, &before));

    let after = FilterSelection::unrestricted().with_window(DateWindow {
        from: None,
        to: Some(march(9)),
    });
    assert!(!matches(&record, &after));
}

#[test]
fn multi_valued_axis_matches_on_any_intersection() {
    let mut record = activity("multi", Role::Developer, "Rust", 8, 6);
    record.roles.push(Role::EngineeringManager);
    let record = AnalyticsRecord::Activity(record);

    let selection = FilterSelection::unrestricted().with_role(Role::EngineeringManager);
    assert!(matches(&record, &selection));
}

#[test]
fn inapplicable_dimension_does_not_exclude_a_record() {
    // Demand signals carry no content type; restricting content types must
    // not silently drop them.
    let record = AnalyticsRecord::Demand(demand("dem-1", Role::Developer, "Rust", 40));

    let mut selection = FilterSelection::unrestricted();
    selection.content_types.insert(ContentType::Video);

    assert!(matches(&record, &selection));
}

#[test]
fn rating_level_filter_matches_rounded_ratings() {
    // The fixture activity averages 4.2 stars, which rounds to level 4; the
    // low skill rating rounds to 2; demand signals carry no rating axis at
    // all and must pass untouched.
    let records = vec![
        AnalyticsRecord::Activity(activity("act-4", Role::Developer, "Python", 10, 8)),
        AnalyticsRecord::Rating(rating("rate-2", Role::Developer, "SQL", 2.4, 4.0)),
        AnalyticsRecord::Demand(demand("dem-1", Role::Developer, "Rust", 25)),
    ];

    let mut selection = FilterSelection::unrestricted();
    selection.rating_levels.insert(4);

    let filtered = filter_records(&records, &selection);

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id().0, "act-4");
    assert_eq!(filtered[1].id().0, "dem-1");
}

#[test]
fn selections_compare_structurally_for_memoization() {
    let a = FilterSelection::unrestricted()
        .with_role(Role::Designer)
        .with_skill("Figma");
    let b = FilterSelection::unrestricted()
        .with_skill("Figma")
        .with_role(Role::Designer);

    assert_eq!(a, b);
    assert!(!a.is_unrestricted());
    assert!(FilterSelection::default().is_unrestricted());
}
