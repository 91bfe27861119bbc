use markup::Document;
use search_select::{SearchSelectError, SearchSelects, SelectSource, Theme};

fn sources() -> Vec<SelectSource> {
    vec![
        SelectSource::new().label("First").option("a", "A"),
        SelectSource::new().id("named").label("Second").multiple().option("b", "B"),
    ]
}

#[test]
fn test_initialize_builds_and_attaches() {
    let mut document = Document::new();
    let sources = sources();
    let mut selects = SearchSelects::new(sources.clone(), None);
    assert!(selects.is_empty());

    selects.initialize(&mut document).unwrap();
    assert_eq!(selects.len(), 2);
    assert_eq!(document.listener_count(), 2);
    assert!(selects.widgets().iter().all(|w| w.is_attached()));

    let generated = sources[0].get_id().unwrap();
    assert!(generated.ends_with("-search-and-select-label-0"));
    assert!(selects.get(&generated).is_some());
    assert_eq!(sources[1].get_id().as_deref(), Some("named"));
    assert!(selects.get("named").is_some());
}

#[test]
fn test_initialize_twice_is_a_no_op() {
    let mut document = Document::new();
    let mut selects = SearchSelects::new(sources(), None);
    selects.initialize(&mut document).unwrap();
    selects.initialize(&mut document).unwrap();
    assert_eq!(selects.len(), 2);
    assert_eq!(document.listener_count(), 2);
}

#[test]
fn test_shared_theme() {
    let mut theme = Theme::default();
    theme.root_class_list = vec!["shared".to_string()];
    let mut document = Document::new();
    let mut selects = SearchSelects::new(sources(), Some(theme));
    selects.initialize(&mut document).unwrap();

    assert!(selects.widgets().iter().all(|w| w.render().has_class("shared")));
}

#[test]
fn test_teardown_unsubscribes() {
    let mut document = Document::new();
    let mut selects = SearchSelects::new(sources(), None);
    selects.initialize(&mut document).unwrap();

    selects.teardown(&mut document);
    assert!(selects.is_empty());
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn test_outside_click_reaches_every_widget() {
    let mut document = Document::new();
    let mut selects = SearchSelects::new(sources(), None);
    selects.initialize(&mut document).unwrap();
    for widget in selects.widgets() {
        widget.open();
    }

    let first_input = selects.widgets()[0].ids().input;
    document.pointer_release(&first_input);
    assert!(selects.widgets()[0].is_open());
    assert!(!selects.widgets()[1].is_open());
}

#[test]
fn test_failed_initialize_leaves_nothing_attached() {
    let mut document = Document::new();
    let mut sources = sources();
    sources.push(SelectSource::new().option("c", "C"));
    let mut selects = SearchSelects::new(sources, None);

    let result = selects.initialize(&mut document);
    assert!(matches!(result, Err(SearchSelectError::MissingLabel(_))));
    assert!(selects.is_empty());
    assert_eq!(document.listener_count(), 0);
}
