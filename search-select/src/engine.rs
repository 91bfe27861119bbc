//! Single- and multi-select engines.
//!
//! Both modes share rows, filtering and keyboard handling; what differs is
//! how the authoritative selection is held. Single-select owns at most one
//! selected id, multi-select owns a chip list whose ids are the selection.

use crate::chips::ChipList;
use crate::model::OptionId;

/// Selection mode of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exactly one selected option (or none before the first selection).
    Single,
    /// Any number of selected options, shown as chips.
    Multi,
}

/// Bookkeeping of which option ids are selected.
///
/// Engines only record state; the synchronizer decides when to call them and
/// keeps rows and the backing source in step.
pub trait SelectionEngine {
    fn mode(&self) -> SelectionMode;

    fn is_selected(&self, id: &str) -> bool;

    /// Selected ids; selection order for multi-select.
    fn selected_ids(&self) -> Vec<OptionId>;

    /// Record `id` as selected. Returns false if nothing changed.
    fn record_select(&mut self, id: &OptionId, label: &str) -> bool;

    /// Record `id` as no longer selected. Returns false if nothing changed.
    fn record_deselect(&mut self, id: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct SingleSelect {
    selected: Option<OptionId>,
}

impl SelectionEngine for SingleSelect {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Single
    }

    fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|s| s.as_str() == id)
    }

    fn selected_ids(&self) -> Vec<OptionId> {
        self.selected.iter().cloned().collect()
    }

    fn record_select(&mut self, id: &OptionId, _label: &str) -> bool {
        if self.is_selected(id.as_str()) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    fn record_deselect(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MultiSelect {
    chips: ChipList,
}

impl MultiSelect {
    pub fn chips(&self) -> &ChipList {
        &self.chips
    }

    pub fn chips_mut(&mut self) -> &mut ChipList {
        &mut self.chips
    }
}

impl SelectionEngine for MultiSelect {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Multi
    }

    fn is_selected(&self, id: &str) -> bool {
        self.chips.contains(id)
    }

    fn selected_ids(&self) -> Vec<OptionId> {
        self.chips.chips().iter().map(|c| c.id.clone()).collect()
    }

    fn record_select(&mut self, id: &OptionId, label: &str) -> bool {
        self.chips.push(id.clone(), label)
    }

    fn record_deselect(&mut self, id: &str) -> bool {
        self.chips.remove(id).is_some()
    }
}

/// The engine of one widget instance.
#[derive(Debug, Clone)]
pub enum Engine {
    Single(SingleSelect),
    Multi(MultiSelect),
}

impl Engine {
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Engine::Single(SingleSelect::default()),
            SelectionMode::Multi => Engine::Multi(MultiSelect::default()),
        }
    }

    /// The chip list, in multi-select mode.
    pub fn chips(&self) -> Option<&ChipList> {
        match self {
            Engine::Single(_) => None,
            Engine::Multi(multi) => Some(multi.chips()),
        }
    }

    pub fn chips_mut(&mut self) -> Option<&mut ChipList> {
        match self {
            Engine::Single(_) => None,
            Engine::Multi(multi) => Some(multi.chips_mut()),
        }
    }

    fn as_dyn(&self) -> &dyn SelectionEngine {
        match self {
            Engine::Single(single) => single,
            Engine::Multi(multi) => multi,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn SelectionEngine {
        match self {
            Engine::Single(single) => single,
            Engine::Multi(multi) => multi,
        }
    }
}

impl SelectionEngine for Engine {
    fn mode(&self) -> SelectionMode {
        self.as_dyn().mode()
    }

    fn is_selected(&self, id: &str) -> bool {
        self.as_dyn().is_selected(id)
    }

    fn selected_ids(&self) -> Vec<OptionId> {
        self.as_dyn().selected_ids()
    }

    fn record_select(&mut self, id: &OptionId, label: &str) -> bool {
        self.as_dyn_mut().record_select(id, label)
    }

    fn record_deselect(&mut self, id: &str) -> bool {
        self.as_dyn_mut().record_deselect(id)
    }
}
