//! Keyboard handling.
//!
//! Two roving-focus regions share the keyboard: the text field with its
//! dropdown (active descendant), and in multi-select mode the chip list.
//! Keys are routed by the region currently holding visual focus.

use markup::{Key, Modifiers};

use crate::error::SearchSelectError;
use crate::events::{EventResult, FocusRegion};

use super::state::{SearchSelect, SearchSelectInner};

impl SearchSelectInner {
    pub(crate) fn handle_input_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<EventResult, SearchSelectError> {
        if self.disabled {
            return Ok(EventResult::Ignored);
        }

        match key {
            Key::Enter => {
                if self.region == Some(FocusRegion::List) {
                    if let Some(row) = self.active_row {
                        self.toggle_row(row)?;
                    }
                } else if self.open_dropdown() {
                    self.region = Some(FocusRegion::List);
                    self.active_row = self.items.first_navigable();
                }
                Ok(EventResult::Consumed)
            }

            Key::Down | Key::Up => {
                if !self.open_dropdown() || modifiers.alt {
                    return Ok(EventResult::Consumed);
                }
                let in_list = self.region == Some(FocusRegion::List);
                self.active_row = match (key, in_list) {
                    (Key::Down, true) => self.items.next_navigable(self.active_row),
                    (Key::Down, false) => self.items.first_navigable(),
                    (_, true) => self.items.prev_navigable(self.active_row),
                    (_, false) => self.items.last_navigable(),
                };
                self.region = Some(FocusRegion::List);
                Ok(EventResult::Consumed)
            }

            Key::Escape => {
                if self.open {
                    self.close_dropdown();
                    self.set_region(Some(FocusRegion::Search));
                }
                Ok(EventResult::Consumed)
            }

            Key::Tab => {
                self.close_dropdown();
                let chips_tabbable = self.chips().is_some_and(|c| !c.is_empty());
                if modifiers.shift && chips_tabbable {
                    self.set_region(Some(FocusRegion::Chips));
                    if let Some(chips) = self.engine.chips_mut()
                        && chips.active().is_none()
                    {
                        chips.focus_first();
                    }
                } else {
                    self.set_region(None);
                }
                Ok(EventResult::Ignored)
            }

            Key::Home | Key::End if self.region == Some(FocusRegion::List) => {
                self.active_row = if key == Key::Home {
                    self.items.first_navigable()
                } else {
                    self.items.last_navigable()
                };
                Ok(EventResult::Consumed)
            }

            Key::Home | Key::End | Key::Left | Key::Right => {
                self.input.handle_key(key, modifiers);
                self.set_region(Some(FocusRegion::Search));
                Ok(EventResult::Consumed)
            }

            Key::Backspace | Key::Delete => {
                if self.readonly {
                    return Ok(EventResult::Ignored);
                }
                self.input.handle_key(key, modifiers);
                self.set_region(Some(FocusRegion::Search));
                self.refilter();
                Ok(EventResult::Consumed)
            }

            Key::Char(_) if key.printable().is_some() && !modifiers.ctrl && !modifiers.alt => {
                if self.readonly {
                    return Ok(EventResult::Ignored);
                }
                self.input.handle_key(key, modifiers);
                self.set_region(Some(FocusRegion::Search));
                self.open_dropdown();
                Ok(EventResult::Consumed)
            }

            _ => Ok(EventResult::Ignored),
        }
    }

    pub(crate) fn handle_chips_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<EventResult, SearchSelectError> {
        if self.disabled {
            return Ok(EventResult::Ignored);
        }
        let readonly = self.readonly;
        let Some(chips) = self.engine.chips_mut() else {
            return Ok(EventResult::Ignored);
        };

        match key {
            Key::Left => chips.focus_prev(),
            Key::Right => chips.focus_next(),
            Key::Home => chips.focus_first(),
            Key::End => chips.focus_last(),

            Key::Backspace | Key::Delete => {
                if readonly {
                    return Ok(EventResult::Consumed);
                }
                if let Some(id) = chips.active_chip().map(|chip| chip.id.clone()) {
                    self.deselect(id.as_str())?;
                    log::debug!("{} chip removed from keyboard", self.ids.root);
                }
            }

            Key::Tab => {
                let region = if modifiers.shift {
                    None
                } else {
                    Some(FocusRegion::Search)
                };
                self.set_region(region);
                return Ok(EventResult::Ignored);
            }

            _ => return Ok(EventResult::Ignored),
        }
        Ok(EventResult::Consumed)
    }
}

impl SearchSelect {
    /// Handle a key press, routed to the region holding visual focus.
    pub fn on_key(&self, key: Key, modifiers: Modifiers) -> Result<EventResult, SearchSelectError> {
        let mut guard = self.write();
        if guard.region == Some(FocusRegion::Chips) {
            guard.handle_chips_key(key, modifiers)
        } else {
            guard.handle_input_key(key, modifiers)
        }
    }

    /// Handle a key press delivered to the text field.
    pub fn on_input_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<EventResult, SearchSelectError> {
        self.write().handle_input_key(key, modifiers)
    }

    /// Handle a key press delivered to the chip list.
    pub fn on_chips_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<EventResult, SearchSelectError> {
        self.write().handle_chips_key(key, modifiers)
    }
}
