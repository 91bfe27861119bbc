use search_select::{
    label_matches, parse, AvailableItems, SelectSource, SelectionMode, SourceGroup, SourceOption,
};

fn grouped_items() -> AvailableItems {
    let source = SelectSource::new()
        .group(
            SourceGroup::new("Fruit")
                .option("apple", "Apple")
                .option("banana", "Banana"),
        )
        .group(
            SourceGroup::new("Veg")
                .option("leek", "Leek")
                .with_option(SourceOption::new("kale", "Discontinued Item").disabled()),
        );
    AvailableItems::build(parse(&source), SelectionMode::Multi)
}

fn shown(items: &AvailableItems) -> Vec<&str> {
    items
        .rows()
        .iter()
        .filter(|r| r.shown)
        .map(|r| r.label.as_str())
        .collect()
}

fn navigable(items: &AvailableItems) -> Vec<&str> {
    items
        .navigable()
        .iter()
        .map(|&i| items.rows()[i].label.as_str())
        .collect()
}

// =============================================================================
// Label matching
// =============================================================================

#[test]
fn test_substring_match() {
    assert!(label_matches("an", "Banana"));
    assert!(label_matches("nan", "Banana"));
    assert!(!label_matches("bnn", "Banana"));
}

#[test]
fn test_case_insensitive() {
    assert!(label_matches("BAN", "banana"));
    assert!(label_matches("ban", "BANANA"));
}

#[test]
fn test_query_is_trimmed() {
    assert!(label_matches("  ban ", "Banana"));
}

#[test]
fn test_blank_query_matches_everything() {
    assert!(label_matches("", "Banana"));
    assert!(label_matches("   ", "Banana"));
    assert!(label_matches("", ""));
}

#[test]
fn test_inner_whitespace_is_literal() {
    assert!(label_matches("item d", "Discontinued Item d"));
    assert!(!label_matches("item d", "Discontinued Item"));
}

#[test]
fn test_match_after_accented_prefix() {
    assert!(label_matches("needle", "Café needle"));
    for n in 1..5 {
        assert!(label_matches("needle", &format!("{}needle", "é".repeat(n))));
    }
    assert!(label_matches("brûlée", "Crème brûlée"));
    assert!(label_matches("BRÛLÉE", "Crème brûlée"));
    assert!(!label_matches("brulee", "Crème brûlée"));
}

#[test]
fn test_match_after_emoji() {
    assert!(label_matches("sale", "🔥🔥 fire sale"));
    assert!(label_matches("🔥 fire", "🔥🔥 fire sale"));
    assert!(!label_matches("ice", "🔥🔥 fire sale"));
}

// =============================================================================
// Filtering rows
// =============================================================================

#[test]
fn test_build_shows_everything() {
    let items = grouped_items();
    assert_eq!(shown(&items).len(), 4);
    assert_eq!(navigable(&items), vec!["Apple", "Banana", "Leek", "Discontinued Item"]);
    assert!(!items.has_no_results());
    assert!(items.sections().iter().all(|s| !s.hidden));
}

#[test]
fn test_filter_hides_non_matching_rows_and_empty_groups() {
    let mut items = grouped_items();
    items.filter("an");

    assert_eq!(shown(&items), vec!["Banana"]);
    assert_eq!(navigable(&items), vec!["Banana"]);
    assert!(!items.sections()[0].hidden);
    assert!(items.sections()[1].hidden);
}

#[test]
fn test_no_results() {
    let mut items = grouped_items();
    items.filter("zzz");

    assert!(shown(&items).is_empty());
    assert!(items.navigable().is_empty());
    assert!(items.has_no_results());
    assert!(items.sections().iter().all(|s| s.hidden));

    items.filter("");
    assert!(!items.has_no_results());
    assert_eq!(shown(&items).len(), 4);
}

#[test]
fn test_filter_non_ascii_labels() {
    let source = SelectSource::new()
        .option("creme", "Crème brûlée")
        .option("mocha", "Café mocha")
        .option("tart", "Tart");
    let mut items = AvailableItems::build(parse(&source), SelectionMode::Single);

    items.filter("mocha");
    assert_eq!(shown(&items), vec!["Café mocha"]);
    assert!(!items.has_no_results());

    items.filter("brûlée");
    assert_eq!(navigable(&items), vec!["Crème brûlée"]);
    assert!(!items.has_no_results());

    items.filter("caf");
    assert_eq!(shown(&items), vec!["Café mocha"]);
}

#[test]
fn test_disabled_rows_are_filterable() {
    let mut items = grouped_items();
    items.filter("discontinued");
    assert_eq!(shown(&items), vec!["Discontinued Item"]);
    assert!(items.rows()[3].disabled);
}

#[test]
fn test_filter_never_touches_selection() {
    let source = SelectSource::new()
        .with_option(SourceOption::new("a", "Apple").selected())
        .with_option(SourceOption::new("b", "Banana").disabled());
    let mut items = AvailableItems::build(parse(&source), SelectionMode::Multi);

    for query in ["zzz", "b", "", "APP"] {
        items.filter(query);
        assert!(items.rows()[0].selected);
        assert!(!items.rows()[0].disabled);
        assert!(!items.rows()[1].selected);
        assert!(items.rows()[1].disabled);
    }
}

#[test]
fn test_shown_rows_are_exactly_the_matching_labels() {
    let labels = ["Apple", "Banana", "Cherry", "Blackberry", "Date", "Fig & Grape"];
    let source = labels
        .iter()
        .fold(SelectSource::new(), |s, l| s.option(l.to_lowercase(), *l));
    let mut items = AvailableItems::build(parse(&source), SelectionMode::Single);

    for query in ["", "a", "AN", "berry", "rr", " e ", "&", "x", "Fig & G"] {
        items.filter(query);
        let needle = query.trim().to_lowercase();
        let expected: Vec<&str> = labels
            .iter()
            .copied()
            .filter(|l| l.to_lowercase().contains(&needle))
            .collect();
        assert_eq!(shown(&items), expected, "query {:?}", query);
        assert_eq!(navigable(&items), expected, "query {:?}", query);
        assert_eq!(items.has_no_results(), expected.is_empty());
    }
}

// =============================================================================
// Navigation order
// =============================================================================

#[test]
fn test_navigation_wraps() {
    let items = grouped_items();
    let first = items.first_navigable();
    let last = items.last_navigable();

    assert_eq!(first, Some(0));
    assert_eq!(last, Some(3));
    assert_eq!(items.next_navigable(last), first);
    assert_eq!(items.prev_navigable(first), last);
    assert_eq!(items.next_navigable(first), Some(1));
    assert_eq!(items.next_navigable(None), first);
    assert_eq!(items.prev_navigable(None), last);
}

#[test]
fn test_navigation_skips_hidden_rows() {
    let mut items = grouped_items();
    items.filter("e");
    // Apple, Leek, Discontinued Item
    assert_eq!(navigable(&items), vec!["Apple", "Leek", "Discontinued Item"]);
    assert_eq!(items.next_navigable(Some(0)), Some(2));
    assert_eq!(items.prev_navigable(Some(2)), Some(0));
}

#[test]
fn test_navigation_on_empty_list() {
    let mut items = grouped_items();
    items.filter("zzz");
    assert_eq!(items.first_navigable(), None);
    assert_eq!(items.next_navigable(Some(0)), None);
    assert_eq!(items.prev_navigable(None), None);
}
