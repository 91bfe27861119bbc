//! Visual theme of the combobox.
//!
//! A theme is an opaque bag of class-name lists and markup snippets per
//! visual part. The widget never interprets the classes, it only attaches
//! them next to its own structural classes.

use serde_json::Value;

use crate::error::SearchSelectError;

const OPEN_BUTTON_SVG: &str = r#"<svg class="search-select-open-icon" focusable="false" width="16" height="16" viewBox="0 0 24 24" aria-hidden="true"><path d="M12 17.5L1 6.5h22z"></path></svg>"#;

const REMOVE_BUTTON_SVG: &str = r#"<svg class="search-select-remove-icon" focusable="false" width="12" height="12" viewBox="0 0 24 24" aria-hidden="true"><path d="M4 2L2 4l8 8-8 8 2 2 8-8 8 8 2-2-8-8 8-8-2-2-8 8z"></path></svg>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub root_class_list: Vec<String>,
    pub search_area_class_list: Vec<String>,
    pub selected_items_class_list: Vec<String>,
    pub selected_item_class_list: Vec<String>,
    pub remove_button_class_list: Vec<String>,
    pub open_button_class_list: Vec<String>,
    pub input_class_list: Vec<String>,
    pub available_items_class_list: Vec<String>,
    pub item_group_class_list: Vec<String>,
    pub group_label_class_list: Vec<String>,
    pub item_class_list: Vec<String>,
    pub item_label_class_list: Vec<String>,
    pub item_indicator_class_list: Vec<String>,
    pub no_results_class_list: Vec<String>,
    pub open_button_svg: String,
    pub remove_button_svg: String,
    /// Markup inside the selection indicator of each row.
    pub indicator: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            root_class_list: classes(&["dcf-relative"]),
            search_area_class_list: classes(&["dcf-d-flex", "dcf-flex-wrap", "dcf-ai-center", "dcf-b-1", "dcf-b-solid"]),
            selected_items_class_list: classes(&["dcf-list-bare", "dcf-d-flex", "dcf-flex-wrap", "dcf-m-0"]),
            selected_item_class_list: classes(&["dcf-d-flex", "dcf-ai-center", "dcf-rounded"]),
            remove_button_class_list: classes(&["dcf-btn", "dcf-btn-tertiary"]),
            open_button_class_list: classes(&["dcf-btn", "dcf-btn-tertiary"]),
            input_class_list: classes(&["dcf-flex-grow-1", "dcf-b-0"]),
            available_items_class_list: classes(&["dcf-m-0", "dcf-b-1", "dcf-b-solid"]),
            item_group_class_list: classes(&["dcf-list-bare", "dcf-m-0"]),
            group_label_class_list: classes(&["dcf-bold", "dcf-txt-xs", "dcf-uppercase"]),
            item_class_list: classes(&["dcf-d-flex", "dcf-ai-center"]),
            item_label_class_list: Vec::new(),
            item_indicator_class_list: classes(&["dcf-mr-2"]),
            no_results_class_list: classes(&["dcf-italic"]),
            open_button_svg: OPEN_BUTTON_SVG.to_string(),
            remove_button_svg: REMOVE_BUTTON_SVG.to_string(),
            indicator: "&#10003;".to_string(),
        }
    }
}

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Theme {
    /// Set one theme variable by name.
    ///
    /// Class lists take a JSON array of strings, markup variables take a
    /// string. Unknown names and values of the wrong shape are ignored and
    /// reported by returning `false`.
    pub fn set_theme_variable(&mut self, name: &str, value: &Value) -> bool {
        let applied = match self.class_list_mut(name) {
            Some(slot) => match string_list(value) {
                Some(list) => {
                    *slot = list;
                    true
                }
                None => false,
            },
            None => match (self.markup_mut(name), value.as_str()) {
                (Some(slot), Some(markup)) => {
                    *slot = markup.to_string();
                    true
                }
                _ => false,
            },
        };

        if !applied {
            log::warn!("Ignoring theme variable '{}' with value {}", name, value);
        }
        applied
    }

    /// Build a theme from a JSON object of theme variables, starting from
    /// the default theme.
    pub fn from_json(json: &str) -> Result<Self, SearchSelectError> {
        let value: Value = serde_json::from_str(json).map_err(SearchSelectError::Theme)?;
        let mut theme = Self::default();
        match value {
            Value::Object(map) => {
                for (name, value) in &map {
                    theme.set_theme_variable(name, value);
                }
            }
            other => log::warn!("Theme JSON is not an object, ignoring: {}", other),
        }
        Ok(theme)
    }

    fn class_list_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        let slot = match name {
            "root_class_list" => &mut self.root_class_list,
            "search_area_class_list" => &mut self.search_area_class_list,
            "selected_items_class_list" => &mut self.selected_items_class_list,
            "selected_item_class_list" => &mut self.selected_item_class_list,
            "remove_button_class_list" => &mut self.remove_button_class_list,
            "open_button_class_list" => &mut self.open_button_class_list,
            "input_class_list" => &mut self.input_class_list,
            "available_items_class_list" => &mut self.available_items_class_list,
            "item_group_class_list" => &mut self.item_group_class_list,
            "group_label_class_list" => &mut self.group_label_class_list,
            "item_class_list" => &mut self.item_class_list,
            "item_label_class_list" => &mut self.item_label_class_list,
            "item_indicator_class_list" => &mut self.item_indicator_class_list,
            "no_results_class_list" => &mut self.no_results_class_list,
            _ => return None,
        };
        Some(slot)
    }

    fn markup_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "open_button_svg" => Some(&mut self.open_button_svg),
            "remove_button_svg" => Some(&mut self.remove_button_svg),
            "indicator" => Some(&mut self.indicator),
            _ => None,
        }
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
