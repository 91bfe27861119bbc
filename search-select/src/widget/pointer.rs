//! Pointer and focus handling.
//!
//! Hosts report pointer events by the id of the nearest element carrying
//! one. Ids are resolved against the widget's own state, never by walking
//! rendered markup.

use markup::PointerListener;

use crate::error::SearchSelectError;
use crate::events::{EventResult, FocusRegion, PointerTarget};

use super::state::{SearchSelect, SearchSelectInner};

impl SearchSelectInner {
    pub(crate) fn resolve_target(&self, element_id: &str) -> Option<PointerTarget> {
        let ids = &self.ids;
        if [&ids.input, &ids.search_area, &ids.open_button, &ids.selected_list]
            .iter()
            .any(|id| id.as_str() == element_id)
        {
            return Some(PointerTarget::SearchArea);
        }

        if let Some(option) = element_id.strip_suffix("-available") {
            return self.items.position(option).map(PointerTarget::Row);
        }

        let chips = self.chips()?;
        if let Some(option) = element_id.strip_suffix("-selected") {
            return chips
                .position(option)
                .map(|i| PointerTarget::Chip(chips.chips()[i].id.clone()));
        }
        if let Some(option) = element_id.strip_suffix("-remove") {
            return chips
                .position(option)
                .map(|i| PointerTarget::ChipRemove(chips.chips()[i].id.clone()));
        }
        None
    }

    /// Whether `element_id` names an element of the rendered widget.
    ///
    /// The associated label and the hidden select live outside the widget.
    /// Row, chip and remove-button ids count as inside even after the chip
    /// is gone, since a click handler may have removed it before release.
    pub(crate) fn contains(&self, element_id: &str) -> bool {
        if element_id == self.ids.select || element_id == self.ids.label {
            return false;
        }
        element_id.starts_with(&self.ids.root) || self.owns_option_element(element_id)
    }

    fn owns_option_element(&self, element_id: &str) -> bool {
        ["-available", "-selected", "-remove"]
            .iter()
            .filter_map(|suffix| element_id.strip_suffix(suffix))
            .any(|option| self.items.position(option).is_some())
    }

    pub(crate) fn handle_click(&mut self, element_id: &str) -> Result<EventResult, SearchSelectError> {
        if self.disabled {
            return Ok(EventResult::Ignored);
        }

        match self.resolve_target(element_id) {
            Some(PointerTarget::SearchArea) => {
                if self.open {
                    self.close_dropdown();
                } else {
                    self.open_dropdown();
                }
                Ok(EventResult::Consumed)
            }

            Some(PointerTarget::Row(index)) => {
                let Some(row) = self.items.row(index) else {
                    return Ok(EventResult::Ignored);
                };
                if !self.open || !row.shown {
                    return Ok(EventResult::Ignored);
                }
                let disabled = row.disabled;
                if !disabled {
                    self.toggle_row(index)?;
                }
                if self.open {
                    self.region = Some(FocusRegion::List);
                    self.active_row = Some(index);
                } else {
                    self.set_region(Some(FocusRegion::Search));
                }
                Ok(EventResult::Consumed)
            }

            Some(PointerTarget::Chip(id)) => {
                self.close_dropdown();
                self.set_region(Some(FocusRegion::Chips));
                if let Some(chips) = self.engine.chips_mut() {
                    let index = chips.position(id.as_str());
                    chips.set_active(index);
                }
                Ok(EventResult::Consumed)
            }

            Some(PointerTarget::ChipRemove(id)) => {
                if self.readonly {
                    return Ok(EventResult::Consumed);
                }
                self.close_dropdown();
                self.set_region(Some(FocusRegion::Chips));
                self.deselect(id.as_str())?;
                Ok(EventResult::Consumed)
            }

            None => Ok(EventResult::Ignored),
        }
    }

    pub(crate) fn handle_pointer_move(&mut self, element_id: &str) -> EventResult {
        if self.disabled {
            return EventResult::Ignored;
        }

        match self.resolve_target(element_id) {
            Some(PointerTarget::Row(index)) if self.open && self.items.is_navigable(index) => {
                self.region = Some(FocusRegion::List);
                self.active_row = Some(index);
                EventResult::Consumed
            }
            Some(PointerTarget::Chip(id)) => {
                if let Some(chips) = self.engine.chips_mut() {
                    let index = chips.position(id.as_str());
                    chips.set_active(index);
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

impl SearchSelect {
    /// Handle a click on the element `element_id`.
    pub fn on_click(&self, element_id: &str) -> Result<EventResult, SearchSelectError> {
        self.write().handle_click(element_id)
    }

    /// Handle the pointer moving over `element_id`.
    ///
    /// Rows and chips become active without moving keyboard focus.
    pub fn on_pointer_move(&self, element_id: &str) -> EventResult {
        self.write().handle_pointer_move(element_id)
    }

    /// The text field gained focus.
    pub fn on_focus(&self) {
        let mut guard = self.write();
        if !guard.disabled {
            guard.set_region(Some(FocusRegion::Search));
        }
    }

    /// The text field lost focus.
    pub fn on_blur(&self) {
        self.write().set_region(None);
    }

    /// Whether `element_id` belongs to this widget's markup.
    pub fn contains(&self, element_id: &str) -> bool {
        self.read().contains(element_id)
    }
}

impl PointerListener for SearchSelect {
    fn on_pointer_release(&self, target_id: &str) {
        let mut guard = self.write();
        if guard.contains(target_id) {
            return;
        }
        guard.close_dropdown();
        guard.set_region(None);
    }
}
