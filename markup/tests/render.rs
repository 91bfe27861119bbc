use markup::{find_element, to_html, Element};

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_class_deduplicates() {
    let el = Element::div().class("a").class("b").class("a").class("");
    assert_eq!(el.classes, vec!["a".to_string(), "b".to_string()]);
    assert!(el.has_class("b"));
    assert!(!el.has_class("c"));
}

#[test]
fn test_class_if() {
    let el = Element::div().class_if("on", true).class_if("off", false);
    assert!(el.has_class("on"));
    assert!(!el.has_class("off"));
}

#[test]
fn test_flag_and_hidden() {
    let el = Element::li().hidden(true);
    assert!(el.is_hidden());
    assert_eq!(el.get_attr("hidden"), Some(""));

    let el = el.hidden(false);
    assert!(!el.is_hidden());
}

#[test]
fn test_data_attributes() {
    let el = Element::li().data("value", "red");
    assert_eq!(el.get_data("value"), Some("red"));
    assert_eq!(el.get_attr("data-value"), Some("red"));
}

#[test]
fn test_text_content_concatenates_descendants() {
    let el = Element::li()
        .child(Element::span().text("Green"))
        .child(Element::span().raw("<svg></svg>"));
    assert_eq!(el.text_content(), "Green");
}

#[test]
fn test_find_element_and_descendants() {
    let root = Element::div().id("root").child(
        Element::ul()
            .id("list")
            .child(Element::li().id("a"))
            .child(Element::li().id("b")),
    );

    assert_eq!(find_element(&root, "b").map(|e| e.tag.as_str()), Some("li"));
    assert!(find_element(&root, "missing").is_none());

    let ids: Vec<_> = root
        .descendants()
        .into_iter()
        .filter_map(|e| e.id.clone())
        .collect();
    assert_eq!(ids, vec!["list", "a", "b"]);
}

// ============================================================================
// HTML output
// ============================================================================

#[test]
fn test_attribute_order_is_stable() {
    let el = Element::li()
        .attr("role", "option")
        .attr("aria-selected", "false")
        .class("item")
        .id("x");
    assert_eq!(
        to_html(&el),
        r#"<li id="x" class="item" aria-selected="false" role="option"></li>"#
    );
}

#[test]
fn test_escaping() {
    let el = Element::span().attr("title", "a \"b\" & <c>").text("<b>&</b>");
    assert_eq!(
        to_html(&el),
        r#"<span title="a &quot;b&quot; &amp; &lt;c&gt;">&lt;b&gt;&amp;&lt;/b&gt;</span>"#
    );
}

#[test]
fn test_void_elements_have_no_closing_tag() {
    let el = Element::input().attr("type", "text").attr("value", "hi");
    assert_eq!(to_html(&el), r#"<input type="text" value="hi">"#);
}

#[test]
fn test_boolean_attributes_have_no_value() {
    let el = Element::input()
        .flag("disabled", true)
        .flag("readonly", false)
        .hidden(true)
        .attr("value", "x");
    assert_eq!(to_html(&el), r#"<input disabled hidden value="x">"#);
}

#[test]
fn test_raw_content_is_verbatim() {
    let el = Element::button().raw("<svg><path d=\"M0\"/></svg>");
    assert_eq!(
        to_html(&el),
        r#"<button type="button"><svg><path d="M0"/></svg></button>"#
    );
}
