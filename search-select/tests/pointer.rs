use markup::Document;
use search_select::{
    ComboboxState, EventResult, FocusRegion, OptionId, SearchSelect, SelectSource, SourceGroup,
    SourceOption,
};

fn colors() -> SelectSource {
    SelectSource::new()
        .label("Colors")
        .multiple()
        .option("red", "Red")
        .with_option(SourceOption::new("green", "Green").selected())
        .option("blue", "Blue")
        .group(
            SourceGroup::new("Retired")
                .with_option(SourceOption::new("mauve", "Discontinued Item").disabled()),
        )
}

fn fruit() -> SelectSource {
    SelectSource::new()
        .label("Fruit")
        .option("apple", "Apple")
        .option("banana", "Banana")
}

fn option(widget: &SearchSelect, label: &str) -> OptionId {
    widget.find_option(label).unwrap()
}

fn row_id(widget: &SearchSelect, label: &str) -> String {
    option(widget, label).row_element_id()
}

// =============================================================================
// Search area
// =============================================================================

#[test]
fn test_click_search_area_toggles_dropdown() {
    let widget = SearchSelect::new(fruit(), None).unwrap();
    let ids = widget.ids();

    assert_eq!(widget.on_click(&ids.input).unwrap(), EventResult::Consumed);
    assert!(widget.is_open());
    widget.on_click(&ids.open_button).unwrap();
    assert!(!widget.is_open());
    widget.on_click(&ids.search_area).unwrap();
    assert!(widget.is_open());
}

#[test]
fn test_click_unknown_element_is_ignored() {
    let widget = SearchSelect::new(fruit(), None).unwrap();
    assert_eq!(widget.on_click("elsewhere").unwrap(), EventResult::Ignored);
    assert_eq!(widget.on_click(&widget.ids().group(0)).unwrap(), EventResult::Ignored);
}

// =============================================================================
// Rows
// =============================================================================

#[test]
fn test_click_row_toggles_in_multi_mode() {
    let source = colors();
    let widget = SearchSelect::new(source.clone(), None).unwrap();
    widget.open();

    assert_eq!(widget.on_click(&row_id(&widget, "Red")).unwrap(), EventResult::Consumed);
    assert_eq!(widget.chip_labels(), vec!["Green", "Red"]);
    assert!(widget.is_open());
    assert_eq!(widget.state(), ComboboxState::ListFocused);
    assert_eq!(widget.active_row_label().as_deref(), Some("Red"));

    widget.on_click(&row_id(&widget, "Green")).unwrap();
    assert_eq!(widget.chip_labels(), vec!["Red"]);
    assert_eq!(source.selected_values(), vec!["red"]);
}

#[test]
fn test_click_row_selects_in_single_mode() {
    let source = fruit();
    let widget = SearchSelect::new(source.clone(), None).unwrap();
    widget.open();

    widget.on_click(&row_id(&widget, "Banana")).unwrap();
    assert!(!widget.is_open());
    assert_eq!(widget.input_text(), "Banana");
    assert_eq!(widget.region(), Some(FocusRegion::Search));
    assert_eq!(source.selected_values(), vec!["banana"]);

    // Clicking the selected row again keeps it selected
    widget.open();
    widget.on_click(&row_id(&widget, "Banana")).unwrap();
    assert_eq!(source.selected_values(), vec!["banana"]);
}

#[test]
fn test_click_disabled_row_has_no_effect() {
    let source = colors();
    let widget = SearchSelect::new(source.clone(), None).unwrap();
    widget.open();
    let before = widget.rows();

    let result = widget.on_click(&row_id(&widget, "Discontinued Item")).unwrap();
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(widget.rows(), before);
    assert_eq!(source.selected_values(), vec!["green"]);
    assert_eq!(widget.active_row_label().as_deref(), Some("Discontinued Item"));
}

#[test]
fn test_click_row_while_closed_is_ignored() {
    let widget = SearchSelect::new(colors(), None).unwrap();
    assert_eq!(widget.on_click(&row_id(&widget, "Red")).unwrap(), EventResult::Ignored);
    assert_eq!(widget.chip_labels(), vec!["Green"]);
}

#[test]
fn test_click_filtered_out_row_is_ignored() {
    let widget = SearchSelect::new(colors(), None).unwrap();
    widget.on_key(markup::Key::Char('b'), markup::Modifiers::new()).unwrap();
    assert_eq!(widget.on_click(&row_id(&widget, "Red")).unwrap(), EventResult::Ignored);
}

#[test]
fn test_hover_sets_active_row() {
    let widget = SearchSelect::new(colors(), None).unwrap();
    assert_eq!(widget.on_pointer_move(&row_id(&widget, "Blue")), EventResult::Ignored);

    widget.open();
    assert_eq!(widget.on_pointer_move(&row_id(&widget, "Blue")), EventResult::Consumed);
    assert_eq!(widget.active_row_label().as_deref(), Some("Blue"));
    assert_eq!(widget.state(), ComboboxState::ListFocused);

    // Disabled rows can be hovered
    widget.on_pointer_move(&row_id(&widget, "Discontinued Item"));
    assert_eq!(widget.active_row_label().as_deref(), Some("Discontinued Item"));
    assert_eq!(widget.chip_labels(), vec!["Green"]);
}

// =============================================================================
// Chips
// =============================================================================

#[test]
fn test_click_chip_focuses_chip_region() {
    let widget = SearchSelect::new(colors(), None).unwrap();
    widget.select_item(option(&widget, "Blue").as_str()).unwrap();
    widget.open();

    let chip = option(&widget, "Blue").chip_element_id();
    assert_eq!(widget.on_click(&chip).unwrap(), EventResult::Consumed);
    assert!(!widget.is_open());
    assert_eq!(widget.state(), ComboboxState::ChipsFocused);
    assert_eq!(widget.active_chip_label().as_deref(), Some("Blue"));
}

#[test]
fn test_hover_chip_sets_active_chip() {
    let widget = SearchSelect::new(colors(), None).unwrap();
    widget.select_item(option(&widget, "Red").as_str()).unwrap();
    let chip = option(&widget, "Red").chip_element_id();

    assert_eq!(widget.on_pointer_move(&chip), EventResult::Consumed);
    assert_eq!(widget.active_chip_label().as_deref(), Some("Red"));
    assert_eq!(widget.region(), None);
}

#[test]
fn test_click_remove_button_removes_chip() {
    let source = colors();
    let widget = SearchSelect::new(source.clone(), None).unwrap();
    let remove = option(&widget, "Green").remove_element_id();

    assert_eq!(widget.on_click(&remove).unwrap(), EventResult::Consumed);
    assert!(widget.chip_labels().is_empty());
    assert!(source.selected_values().is_empty());
    assert_eq!(widget.region(), Some(FocusRegion::Search));
}

#[test]
fn test_remove_button_is_inert_when_readonly() {
    let source = colors().readonly();
    let widget = SearchSelect::new(source.clone(), None).unwrap();
    let remove = option(&widget, "Green").remove_element_id();

    widget.on_click(&remove).unwrap();
    assert_eq!(widget.chip_labels(), vec!["Green"]);
    assert_eq!(source.selected_values(), vec!["green"]);
}

#[test]
fn test_readonly_click_does_not_open() {
    let widget = SearchSelect::new(fruit().readonly(), None).unwrap();
    widget.on_click(&widget.ids().input).unwrap();
    assert!(!widget.is_open());
}

#[test]
fn test_disabled_ignores_pointer() {
    let widget = SearchSelect::new(colors().disabled(), None).unwrap();
    let ids = widget.ids();
    assert_eq!(widget.on_click(&ids.input).unwrap(), EventResult::Ignored);
    assert_eq!(
        widget.on_click(&option(&widget, "Green").remove_element_id()).unwrap(),
        EventResult::Ignored
    );
    assert_eq!(widget.chip_labels(), vec!["Green"]);
}

// =============================================================================
// Focus and outside clicks
// =============================================================================

#[test]
fn test_focus_and_blur() {
    let widget = SearchSelect::new(fruit(), None).unwrap();
    widget.on_focus();
    assert_eq!(widget.region(), Some(FocusRegion::Search));
    widget.on_blur();
    assert_eq!(widget.region(), None);
}

#[test]
fn test_outside_release_closes() {
    let mut document = Document::new();
    let widget = SearchSelect::new(colors(), None).unwrap();
    widget.attach(&mut document);
    assert!(widget.is_attached());
    assert_eq!(document.listener_count(), 1);

    widget.open();
    widget.on_pointer_move(&row_id(&widget, "Red"));

    document.pointer_release("page-body");
    assert!(!widget.is_open());
    assert_eq!(widget.region(), None);
    assert_eq!(widget.active_row_label(), None);
}

#[test]
fn test_inside_release_keeps_dropdown_open() {
    let mut document = Document::new();
    let widget = SearchSelect::new(colors(), None).unwrap();
    widget.attach(&mut document);
    widget.open();

    let ids = widget.ids();
    for target in [
        ids.input.clone(),
        ids.available_list.clone(),
        ids.group(0),
        ids.no_results(),
        row_id(&widget, "Red"),
        option(&widget, "Green").chip_element_id(),
        option(&widget, "Green").remove_element_id(),
    ] {
        document.pointer_release(&target);
        assert!(widget.is_open(), "closed by {target}");
    }
}

#[test]
fn test_release_on_removed_chip_keeps_focus() {
    let mut document = Document::new();
    let source = SelectSource::new()
        .label("Colors")
        .multiple()
        .with_option(SourceOption::new("red", "Red").selected())
        .with_option(SourceOption::new("green", "Green").selected());
    let widget = SearchSelect::new(source, None).unwrap();
    widget.attach(&mut document);
    let red = option(&widget, "Red");

    widget.on_click(&red.chip_element_id()).unwrap();
    widget.on_click(&red.remove_element_id()).unwrap();
    assert_eq!(widget.chip_labels(), vec!["Green"]);
    assert_eq!(widget.region(), Some(FocusRegion::Chips));

    assert!(widget.contains(&red.remove_element_id()));
    assert!(widget.contains(&red.chip_element_id()));
    document.pointer_release(&red.remove_element_id());
    assert_eq!(widget.region(), Some(FocusRegion::Chips));
    assert_eq!(widget.state(), ComboboxState::ChipsFocused);
}

#[test]
fn test_foreign_option_ids_are_outside() {
    let widget = SearchSelect::new(fruit(), None).unwrap();
    let other = SearchSelect::new(colors(), None).unwrap();
    let red = option(&other, "Red");
    assert!(!widget.contains(&red.row_element_id()));
    assert!(!widget.contains(&red.remove_element_id()));
    assert!(!widget.contains("page-body-remove"));
}

#[test]
fn test_label_and_select_are_outside() {
    let widget = SearchSelect::new(fruit(), None).unwrap();
    let ids = widget.ids();
    assert!(widget.contains(&ids.root));
    assert!(!widget.contains(&ids.label));
    assert!(!widget.contains(&ids.select));
}

#[test]
fn test_detach_stops_outside_clicks() {
    let mut document = Document::new();
    let widget = SearchSelect::new(fruit(), None).unwrap();
    widget.attach(&mut document);
    widget.attach(&mut document);
    assert_eq!(document.listener_count(), 1);

    assert!(widget.detach(&mut document));
    assert!(!widget.detach(&mut document));
    assert_eq!(document.listener_count(), 0);

    widget.open();
    document.pointer_release("page-body");
    assert!(widget.is_open());
}
