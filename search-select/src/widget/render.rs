//! Markup projection of the widget state.
//!
//! Nothing here is read back: ARIA attributes, `hidden` and the focus
//! marker classes are all derived from typed state on every render.

use markup::{to_html, Element};

use crate::chips::ChipList;
use crate::engine::SelectionMode;
use crate::events::FocusRegion;
use crate::items::AvailableRow;

use super::state::{SearchSelect, SearchSelectInner};

/// Text of the placeholder row shown when the filter matches nothing.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Marker class on the region holding visual focus.
pub const VISUAL_FOCUS_CLASS: &str = "visual-focus";

/// Marker class on the active row or chip.
pub const VISUAL_HOVER_CLASS: &str = "visual-hover";

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl SearchSelectInner {
    fn render_root(&self) -> Element {
        let mut root = Element::div()
            .id(self.ids.root.clone())
            .class("search-select")
            .classes(self.theme.root_class_list.iter().cloned())
            .class_if("search-select-disabled", self.disabled)
            .class_if("search-select-readonly", self.readonly)
            .data("for", self.ids.select.clone());

        if let Some(chips) = self.chips() {
            root = root.child(self.render_chips(chips));
        }

        root.child(self.render_search_area())
            .child(self.render_available_items())
    }

    fn render_search_area(&self) -> Element {
        let active_descendant = self
            .active_row
            .and_then(|i| self.items.row(i))
            .map(|row| row.id.row_element_id())
            .unwrap_or_default();

        let input = Element::input()
            .id(self.ids.input.clone())
            .class("search-select-input")
            .classes(self.theme.input_class_list.iter().cloned())
            .attr("type", "text")
            .attr("autocomplete", "off")
            .attr("role", "combobox")
            .attr("aria-autocomplete", "list")
            .attr("aria-expanded", bool_attr(self.open))
            .attr("aria-controls", self.ids.available_list.clone())
            .attr("aria-activedescendant", active_descendant)
            .attr("value", self.input.text())
            .flag("disabled", self.disabled)
            .flag("readonly", self.readonly);

        let open_button = Element::button()
            .id(self.ids.open_button.clone())
            .class("search-select-open-button")
            .classes(self.theme.open_button_class_list.iter().cloned())
            .attr("tabindex", "-1")
            .attr("aria-expanded", bool_attr(self.open))
            .attr("aria-controls", self.ids.available_list.clone())
            .attr("aria-labelledby", self.ids.label.clone())
            .flag("disabled", self.disabled)
            .raw(self.theme.open_button_svg.clone());

        Element::div()
            .id(self.ids.search_area.clone())
            .class("search-select-search-area")
            .classes(self.theme.search_area_class_list.iter().cloned())
            .class_if(VISUAL_FOCUS_CLASS, self.region == Some(FocusRegion::Search))
            .child(input)
            .child(open_button)
    }

    fn render_chips(&self, chips: &ChipList) -> Element {
        let tabindex = if self.disabled { -1 } else { chips.tabindex() };
        let active_descendant = chips
            .active_chip()
            .map(|chip| chip.id.chip_element_id())
            .unwrap_or_default();

        let items = chips.chips().iter().enumerate().map(|(index, chip)| {
            let remove = Element::button()
                .id(chip.id.remove_element_id())
                .class("search-select-remove-button")
                .classes(self.theme.remove_button_class_list.iter().cloned())
                .attr("tabindex", "-1")
                .attr("aria-label", format!("Remove {}", chip.label))
                .flag("disabled", self.disabled)
                .attr("aria-disabled", bool_attr(self.readonly || self.disabled))
                .raw(self.theme.remove_button_svg.clone());

            Element::li()
                .id(chip.id.chip_element_id())
                .class("search-select-selected-item")
                .classes(self.theme.selected_item_class_list.iter().cloned())
                .class_if(VISUAL_HOVER_CLASS, chips.active() == Some(index))
                .attr("role", "option")
                .attr("aria-selected", "true")
                .data("id", chip.id.as_str())
                .child(
                    Element::span()
                        .class("search-select-selected-item-label")
                        .text(chip.label.clone()),
                )
                .child(remove)
        });

        Element::ul()
            .id(self.ids.selected_list.clone())
            .class("search-select-selected-items")
            .classes(self.theme.selected_items_class_list.iter().cloned())
            .class_if(VISUAL_FOCUS_CLASS, self.region == Some(FocusRegion::Chips))
            .attr("role", "listbox")
            .attr("aria-labelledby", self.ids.label.clone())
            .attr("aria-multiselectable", "true")
            .attr("aria-orientation", "horizontal")
            .attr("tabindex", tabindex.to_string())
            .attr("aria-activedescendant", active_descendant)
            .children(items)
    }

    fn render_available_items(&self) -> Element {
        let mut list = Element::div()
            .id(self.ids.available_list.clone())
            .class("search-select-available-items")
            .classes(self.theme.available_items_class_list.iter().cloned())
            .class_if(VISUAL_FOCUS_CLASS, self.region == Some(FocusRegion::List))
            .attr("role", "listbox")
            .attr("aria-labelledby", self.ids.label.clone())
            .hidden(!self.open);
        if self.mode() == SelectionMode::Multi {
            list = list.attr("aria-multiselectable", "true");
        }

        for (index, section) in self.items.sections().iter().enumerate() {
            let mut group = Element::ul()
                .id(self.ids.group(index))
                .class("search-select-item-group")
                .classes(self.theme.item_group_class_list.iter().cloned())
                .attr("role", "group")
                .hidden(section.hidden);

            if section.show_label {
                group = group
                    .attr("aria-labelledby", self.ids.group_label(index))
                    .child(
                        Element::li()
                            .id(self.ids.group_label(index))
                            .class("search-select-group-label")
                            .classes(self.theme.group_label_class_list.iter().cloned())
                            .attr("role", "presentation")
                            .text(section.label.clone()),
                    );
            }

            let rows = &self.items.rows()[section.rows.clone()];
            list = list.child(group.children(
                rows.iter()
                    .zip(section.rows.clone())
                    .map(|(row, row_index)| self.render_row(row, row_index)),
            ));
        }

        if self.items.has_no_results() {
            list = list.child(
                Element::ul()
                    .id(self.ids.no_results())
                    .class("search-select-no-results")
                    .classes(self.theme.no_results_class_list.iter().cloned())
                    .attr("role", "presentation")
                    .child(Element::li().attr("role", "option").text(NO_RESULTS_TEXT)),
            );
        }

        list
    }

    fn render_row(&self, row: &AvailableRow, index: usize) -> Element {
        Element::li()
            .id(row.id.row_element_id())
            .class("search-select-item")
            .classes(self.theme.item_class_list.iter().cloned())
            .class_if(VISUAL_HOVER_CLASS, self.active_row == Some(index))
            .attr("role", "option")
            .attr("aria-selected", bool_attr(row.selected))
            .attr("aria-disabled", bool_attr(row.disabled))
            .data("value", row.value.clone())
            .data("id", row.id.as_str())
            .hidden(!row.shown)
            .child(
                Element::span()
                    .class("search-select-item-indicator")
                    .classes(self.theme.item_indicator_class_list.iter().cloned())
                    .attr("aria-hidden", "true")
                    .raw(self.theme.indicator.clone()),
            )
            .child(
                Element::span()
                    .class("search-select-item-label")
                    .classes(self.theme.item_label_class_list.iter().cloned())
                    .text(row.label.clone()),
            )
    }

    fn render_label(&self) -> Element {
        Element::label()
            .id(self.ids.label.clone())
            .attr("for", self.ids.input.clone())
            .text(self.label.clone())
    }
}

impl SearchSelect {
    /// Project the widget into an element tree.
    pub fn render(&self) -> Element {
        self.read().render_root()
    }

    pub fn render_html(&self) -> String {
        to_html(&self.render())
    }

    /// Project the label associated with the widget's text field.
    pub fn render_label(&self) -> Element {
        self.read().render_label()
    }
}
