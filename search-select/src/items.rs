//! Available-items presenter.
//!
//! Turns parsed groups into the rows of the dropdown listbox. Rows are
//! created once and then only mutated in place (selected, shown); they are
//! never destroyed. The navigable index is the ordered subset of rows the
//! keyboard can reach under the current filter.

use std::collections::HashMap;
use std::ops::Range;

use crate::engine::SelectionMode;
use crate::error::SearchSelectError;
use crate::model::{OptionGroup, OptionId};

/// One option row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableRow {
    pub id: OptionId,
    pub label: String,
    pub value: String,
    pub disabled: bool,
    pub selected: bool,
    /// Whether the row passes the current filter.
    pub shown: bool,
    /// Index of the owning section.
    pub group: usize,
    /// Position of the option in the backing source.
    pub source_index: usize,
}

/// One labelled section of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSection {
    pub label: String,
    /// Header row is emitted unless there is exactly one section.
    pub show_label: bool,
    /// Hidden when none of its rows pass the filter.
    pub hidden: bool,
    pub rows: Range<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct AvailableItems {
    pub(crate) sections: Vec<GroupSection>,
    pub(crate) rows: Vec<AvailableRow>,
    pub(crate) by_id: HashMap<OptionId, usize>,
    pub(crate) navigable: Vec<usize>,
    pub(crate) no_results: bool,
}

impl AvailableItems {
    /// Build the rows for `groups`.
    ///
    /// Pre-selected disabled options are not selected. In single-select mode
    /// only the last pre-selected enabled option encountered stays selected,
    /// matching native single selects where the last `selected` wins.
    pub fn build(groups: Vec<OptionGroup>, mode: SelectionMode) -> Self {
        let show_label = groups.len() != 1;
        let mut items = Self::default();

        for (group_index, group) in groups.into_iter().enumerate() {
            let start = items.rows.len();
            for item in group.items {
                items.by_id.insert(item.id.clone(), items.rows.len());
                items.rows.push(AvailableRow {
                    selected: item.selected && !item.disabled,
                    id: item.id,
                    label: item.label,
                    value: item.value,
                    disabled: item.disabled,
                    shown: true,
                    group: group_index,
                    source_index: item.source_index,
                });
            }
            items.sections.push(GroupSection {
                label: group.label,
                show_label,
                hidden: false,
                rows: start..items.rows.len(),
            });
        }

        if mode == SelectionMode::Single
            && let Some(last) = items.rows.iter().rposition(|r| r.selected)
        {
            for (index, row) in items.rows.iter_mut().enumerate() {
                row.selected = index == last;
            }
        }

        items.filter("");

        log::debug!(
            "AvailableItems::build sections={} rows={} preselected={}",
            items.sections.len(),
            items.rows.len(),
            items.rows.iter().filter(|r| r.selected).count()
        );
        items
    }

    pub fn rows(&self) -> &[AvailableRow] {
        &self.rows
    }

    pub fn sections(&self) -> &[GroupSection] {
        &self.sections
    }

    pub fn row(&self, index: usize) -> Option<&AvailableRow> {
        self.rows.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Index of the row for `id`, which must exist and be enabled.
    pub fn enabled_row(&self, id: &str) -> Result<usize, SearchSelectError> {
        match self.position(id) {
            Some(index) if !self.rows[index].disabled => Ok(index),
            Some(_) => Err(SearchSelectError::InvalidElement(format!("{id} is disabled"))),
            None => Err(SearchSelectError::InvalidElement(format!("{id} is not an option row"))),
        }
    }

    /// Label the text field starts with in single-select mode.
    pub fn seed_label(&self) -> Option<&str> {
        self.rows
            .iter()
            .rev()
            .find(|r| r.selected)
            .map(|r| r.label.as_str())
    }

    // -------------------------------------------------------------------------
    // Navigable index
    // -------------------------------------------------------------------------

    /// Rows reachable by keyboard, in document order.
    pub fn navigable(&self) -> &[usize] {
        &self.navigable
    }

    /// Whether the "No results found" placeholder is present.
    pub fn has_no_results(&self) -> bool {
        self.no_results
    }

    pub fn first_navigable(&self) -> Option<usize> {
        self.navigable.first().copied()
    }

    pub fn last_navigable(&self) -> Option<usize> {
        self.navigable.last().copied()
    }

    /// The navigable row after `current`, wrapping to the first.
    pub fn next_navigable(&self, current: Option<usize>) -> Option<usize> {
        let position = current.and_then(|c| self.navigable.iter().position(|&r| r == c));
        match position {
            Some(p) if p + 1 < self.navigable.len() => Some(self.navigable[p + 1]),
            _ => self.first_navigable(),
        }
    }

    /// The navigable row before `current`, wrapping to the last.
    pub fn prev_navigable(&self, current: Option<usize>) -> Option<usize> {
        let position = current.and_then(|c| self.navigable.iter().position(|&r| r == c));
        match position {
            Some(p) if p > 0 => Some(self.navigable[p - 1]),
            _ => self.last_navigable(),
        }
    }

    pub fn is_navigable(&self, row: usize) -> bool {
        self.navigable.contains(&row)
    }
}
