//! Selected-item chips for multi-select mode.
//!
//! Chips are kept in selection order and form their own roving-focus region,
//! independent of the dropdown's active descendant.

use crate::model::OptionId;

/// A removable token representing one selected option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub id: OptionId,
    pub label: String,
}

/// Ordered chip list with a roving active chip.
#[derive(Debug, Clone, Default)]
pub struct ChipList {
    chips: Vec<Chip>,
    active: Option<usize>,
}

impl ChipList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.chips.iter().position(|c| c.id.as_str() == id)
    }

    /// `tabindex` of the chip container: reachable only while non-empty.
    pub fn tabindex(&self) -> i32 {
        if self.chips.is_empty() { -1 } else { 0 }
    }

    /// Append a chip. Returns false if the option already has one.
    pub fn push(&mut self, id: OptionId, label: impl Into<String>) -> bool {
        if self.contains(id.as_str()) {
            return false;
        }
        self.chips.push(Chip {
            id,
            label: label.into(),
        });
        true
    }

    /// Remove the chip for `id`, returning its former index.
    ///
    /// If the removed chip was active, the previous chip becomes active (the
    /// new first chip when the first was removed); an emptied list has no
    /// active chip.
    pub fn remove(&mut self, id: &str) -> Option<usize> {
        let index = self.position(id)?;
        self.chips.remove(index);

        self.active = match self.active {
            _ if self.chips.is_empty() => None,
            Some(active) if active == index => Some(index.saturating_sub(1)),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        Some(index)
    }

    // -------------------------------------------------------------------------
    // Roving focus
    // -------------------------------------------------------------------------

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_chip(&self) -> Option<&Chip> {
        self.active.and_then(|i| self.chips.get(i))
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index.filter(|&i| i < self.chips.len());
    }

    pub fn focus_first(&mut self) {
        self.set_active(if self.chips.is_empty() { None } else { Some(0) });
    }

    pub fn focus_last(&mut self) {
        self.set_active(self.chips.len().checked_sub(1));
    }

    /// Move to the next chip, wrapping from last to first.
    pub fn focus_next(&mut self) {
        let len = self.chips.len();
        if len == 0 {
            return;
        }
        self.active = Some(match self.active {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    /// Move to the previous chip, wrapping from first to last.
    pub fn focus_prev(&mut self) {
        let len = self.chips.len();
        if len == 0 {
            return;
        }
        self.active = Some(match self.active {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }
}
