//! Selection synchronizer.
//!
//! The only writer of selection state. Every select or deselect updates the
//! row, the engine (chips in multi-select mode) and the backing source
//! together, so the three never diverge.

use crate::engine::{SelectionEngine, SelectionMode};
use crate::error::SearchSelectError;
use crate::events::FocusRegion;

use super::state::{SearchSelect, SearchSelectInner};

impl SearchSelectInner {
    /// Select the enabled row `id`.
    ///
    /// Single-select replaces the selection, copies the label into the text
    /// field and closes the dropdown. Multi-select adds a chip and leaves the
    /// dropdown open. Selecting twice is the same as selecting once.
    pub(crate) fn select(&mut self, id: &str) -> Result<(), SearchSelectError> {
        let index = self.items.enabled_row(id)?;
        let row = self.items.rows[index].clone();

        match self.mode() {
            SelectionMode::Single => {
                for (i, r) in self.items.rows.iter_mut().enumerate() {
                    r.selected = i == index;
                }
                self.engine.record_select(&row.id, &row.label);
                self.source.select_only(row.source_index);
                self.input.set(row.label.clone());
                self.close_dropdown();
            }
            SelectionMode::Multi => {
                if row.selected && self.engine.is_selected(id) {
                    return Ok(());
                }
                self.items.rows[index].selected = true;
                self.engine.record_select(&row.id, &row.label);
                self.source.set_selected(row.source_index, true);
            }
        }

        log::debug!("{} select {} ({})", self.ids.root, row.label, row.value);
        Ok(())
    }

    /// Deselect the enabled row `id`. Deselecting an unselected row is a no-op.
    ///
    /// The text field is left alone in single-select mode.
    pub(crate) fn deselect(&mut self, id: &str) -> Result<(), SearchSelectError> {
        let index = self.items.enabled_row(id)?;
        let row = &mut self.items.rows[index];
        if !row.selected && !self.engine.is_selected(id) {
            return Ok(());
        }
        row.selected = false;
        let (source_index, label) = (row.source_index, row.label.clone());

        self.engine.record_deselect(id);
        self.source.set_selected(source_index, false);

        if self.region == Some(FocusRegion::Chips) && self.chips().is_some_and(|c| c.is_empty()) {
            self.set_region(Some(FocusRegion::Search));
        }

        log::debug!("{} deselect {}", self.ids.root, label);
        Ok(())
    }

    /// Activate the row at `index` as a user gesture would.
    ///
    /// Disabled rows are left untouched. Single-select always selects (there
    /// is no deselect gesture); multi-select flips the row.
    pub(crate) fn toggle_row(&mut self, index: usize) -> Result<(), SearchSelectError> {
        let Some(row) = self.items.row(index) else {
            return Ok(());
        };
        if row.disabled {
            log::debug!("{} ignoring disabled row {}", self.ids.root, row.label);
            return Ok(());
        }
        let (id, selected) = (row.id.clone(), row.selected);

        match self.mode() {
            SelectionMode::Multi if selected => self.deselect(id.as_str()),
            _ => self.select(id.as_str()),
        }
    }
}

impl SearchSelect {
    /// Select the option `id`.
    ///
    /// Fails with [`SearchSelectError::InvalidElement`] if `id` is not an
    /// option of this widget or the option is disabled.
    pub fn select_item(&self, id: &str) -> Result<(), SearchSelectError> {
        self.write().select(id)
    }

    /// Deselect the option `id`. Fails like [`SearchSelect::select_item`].
    pub fn deselect_item(&self, id: &str) -> Result<(), SearchSelectError> {
        self.write().deselect(id)
    }

    /// Toggle the option `id` the way a click on its row would.
    pub fn toggle_item(&self, id: &str) -> Result<(), SearchSelectError> {
        let mut guard = self.write();
        let index = guard.items.enabled_row(id)?;
        guard.toggle_row(index)
    }

    /// Remove a selection from its dropdown row.
    pub fn remove_available_item(&self, id: &str) -> Result<(), SearchSelectError> {
        self.write().deselect(id)
    }

    /// Remove a selection from its chip.
    pub fn remove_selected_item(&self, id: &str) -> Result<(), SearchSelectError> {
        self.write().deselect(id)
    }
}
