//! Search-and-select widget state.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use markup::{Document, Subscription, TextInput};
use uuid::Uuid;

use crate::chips::ChipList;
use crate::engine::{Engine, SelectionEngine, SelectionMode};
use crate::error::SearchSelectError;
use crate::events::{ComboboxState, FocusRegion};
use crate::items::{AvailableItems, AvailableRow};
use crate::model::{self, OptionId};
use crate::source::SelectSource;
use crate::theme::Theme;

/// Element ids of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetIds {
    pub root: String,
    pub input: String,
    pub search_area: String,
    pub open_button: String,
    pub available_list: String,
    pub selected_list: String,
    /// Id of the backing select, taken from the source when it has one.
    pub select: String,
    pub label: String,
}

impl WidgetIds {
    fn new(uuid: Uuid, select: Option<String>) -> Self {
        let root = format!("{uuid}-search-and-select");
        Self {
            input: format!("{root}-input"),
            search_area: format!("{root}-search-area"),
            open_button: format!("{root}-open-button"),
            available_list: format!("{root}-available-items-list"),
            selected_list: format!("{root}-selected-items-list"),
            select: select.unwrap_or_else(|| format!("{root}-select")),
            label: format!("{root}-label"),
            root,
        }
    }

    pub fn group(&self, index: usize) -> String {
        format!("{}-group-{index}", self.root)
    }

    pub fn group_label(&self, index: usize) -> String {
        format!("{}-group-{index}-label", self.root)
    }

    pub fn no_results(&self) -> String {
        format!("{}-no-results", self.root)
    }
}

#[derive(Debug)]
pub(crate) struct SearchSelectInner {
    pub(crate) ids: WidgetIds,
    pub(crate) theme: Theme,
    pub(crate) source: SelectSource,
    pub(crate) label: String,
    pub(crate) items: AvailableItems,
    pub(crate) engine: Engine,
    pub(crate) input: TextInput,
    pub(crate) open: bool,
    pub(crate) region: Option<FocusRegion>,
    /// Active descendant of the dropdown, as a row index.
    pub(crate) active_row: Option<usize>,
    pub(crate) disabled: bool,
    pub(crate) readonly: bool,
    pub(crate) subscription: Option<Subscription>,
}

impl SearchSelectInner {
    pub(crate) fn mode(&self) -> SelectionMode {
        self.engine.mode()
    }

    pub(crate) fn chips(&self) -> Option<&ChipList> {
        self.engine.chips()
    }

    /// Move the visual focus. Leaving the list drops its active descendant.
    pub(crate) fn set_region(&mut self, region: Option<FocusRegion>) {
        self.region = region;
        if region != Some(FocusRegion::List) {
            self.active_row = None;
        }
    }

    /// Re-run the filter with the current text field contents.
    pub(crate) fn refilter(&mut self) {
        let text = self.input.text().to_string();
        self.apply_filter(&text);
    }

    /// Filter the rows, dropping an active row that is no longer reachable.
    pub(crate) fn apply_filter(&mut self, text: &str) {
        self.items.filter(text);
        if self.active_row.is_some_and(|row| !self.items.is_navigable(row)) {
            self.active_row = None;
        }
    }

    /// Filter and open the dropdown. Returns false if the widget cannot open.
    pub(crate) fn open_dropdown(&mut self) -> bool {
        if self.disabled || self.readonly {
            return false;
        }
        self.refilter();
        if !self.open {
            log::debug!("{} open", self.ids.root);
        }
        self.open = true;
        true
    }

    pub(crate) fn close_dropdown(&mut self) {
        if self.open {
            log::debug!("{} close", self.ids.root);
        }
        self.open = false;
        if self.region == Some(FocusRegion::List) {
            self.set_region(Some(FocusRegion::Search));
        }
        self.active_row = None;
    }

    pub(crate) fn state(&self) -> ComboboxState {
        match self.region {
            Some(FocusRegion::Chips) => ComboboxState::ChipsFocused,
            Some(FocusRegion::List) if self.open => ComboboxState::ListFocused,
            _ if self.open => ComboboxState::SearchInputOpenUnfocused,
            _ => ComboboxState::SearchInputClosed,
        }
    }
}

/// A searchable single- or multi-select combobox.
///
/// `SearchSelect` enhances a [`SelectSource`]: it parses the source once,
/// keeps its own typed state for rows, chips and focus, and writes every
/// selection change back onto the source. Markup is a projection of that
/// state, produced on demand by [`SearchSelect::render`].
///
/// The handle is cheap to clone; clones share state.
///
/// # Example
///
/// ```ignore
/// let source = SelectSource::new()
///     .label("Fruit")
///     .option("apple", "Apple")
///     .option("banana", "Banana");
/// let select = SearchSelect::new(source.clone(), None)?;
///
/// select.on_key(Key::Char('b'), Modifiers::new())?;
/// select.on_key(Key::Down, Modifiers::new())?;
/// select.on_key(Key::Enter, Modifiers::new())?;
/// assert_eq!(source.selected_values(), vec!["banana"]);
/// ```
#[derive(Debug, Clone)]
pub struct SearchSelect {
    pub(crate) inner: Arc<RwLock<SearchSelectInner>>,
}

impl SearchSelect {
    /// Build a widget over `source`.
    ///
    /// The source's id is generated when absent and written back. Pre-selected
    /// options are normalized (disabled ones dropped, last one wins in
    /// single-select mode) and the result is written back as well.
    pub fn new(source: SelectSource, theme: Option<Theme>) -> Result<Self, SearchSelectError> {
        let ids = WidgetIds::new(Uuid::new_v4(), source.get_id());
        source.set_id(ids.select.clone());

        let label = source
            .get_label()
            .ok_or_else(|| SearchSelectError::MissingLabel(ids.select.clone()))?;

        let mode = if source.is_multiple() {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        };

        let items = AvailableItems::build(model::parse(&source), mode);

        let mut engine = Engine::new(mode);
        for row in items.rows().iter().filter(|r| r.selected) {
            engine.record_select(&row.id, &row.label);
        }
        for row in items.rows() {
            source.set_selected(row.source_index, row.selected);
        }

        let input = match mode {
            SelectionMode::Single => TextInput::new(items.seed_label().unwrap_or_default()),
            SelectionMode::Multi => TextInput::default(),
        };

        log::debug!(
            "SearchSelect::new root={} select={} mode={:?} rows={}",
            ids.root,
            ids.select,
            mode,
            items.rows().len()
        );

        let inner = SearchSelectInner {
            disabled: source.is_disabled(),
            readonly: source.is_readonly(),
            theme: theme.unwrap_or_default(),
            ids,
            source,
            label,
            items,
            engine,
            input,
            open: false,
            region: None,
            active_row: None,
            subscription: None,
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(inner)),
        })
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, SearchSelectInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, SearchSelectInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    pub fn ids(&self) -> WidgetIds {
        self.read().ids.clone()
    }

    /// Id of the widget's root element.
    pub fn id(&self) -> String {
        self.read().ids.root.clone()
    }

    pub fn source(&self) -> SelectSource {
        self.read().source.clone()
    }

    pub fn mode(&self) -> SelectionMode {
        self.read().mode()
    }

    pub fn is_disabled(&self) -> bool {
        self.read().disabled
    }

    pub fn is_readonly(&self) -> bool {
        self.read().readonly
    }

    // -------------------------------------------------------------------------
    // Focus and open state
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ComboboxState {
        self.read().state()
    }

    pub fn is_open(&self) -> bool {
        self.read().open
    }

    pub fn region(&self) -> Option<FocusRegion> {
        self.read().region
    }

    /// Filter and open the dropdown. Does nothing when disabled or read-only.
    pub fn open(&self) -> bool {
        self.write().open_dropdown()
    }

    pub fn close(&self) {
        self.write().close_dropdown();
    }

    /// The dropdown's active descendant.
    pub fn active_row(&self) -> Option<AvailableRow> {
        let guard = self.read();
        guard.active_row.and_then(|i| guard.items.row(i).cloned())
    }

    pub fn active_row_label(&self) -> Option<String> {
        self.active_row().map(|row| row.label)
    }

    pub fn active_chip_label(&self) -> Option<String> {
        self.read()
            .chips()
            .and_then(|chips| chips.active_chip())
            .map(|chip| chip.label.clone())
    }

    // -------------------------------------------------------------------------
    // Text field
    // -------------------------------------------------------------------------

    pub fn input_text(&self) -> String {
        self.read().input.text().to_string()
    }

    pub fn input_cursor(&self) -> usize {
        self.read().input.cursor()
    }

    // -------------------------------------------------------------------------
    // Rows and chips
    // -------------------------------------------------------------------------

    /// Snapshot of every row in document order.
    pub fn rows(&self) -> Vec<AvailableRow> {
        self.read().items.rows().to_vec()
    }

    /// Id of the first row labelled `label`.
    pub fn find_option(&self, label: &str) -> Option<OptionId> {
        self.read()
            .items
            .rows()
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.id.clone())
    }

    /// Labels of the rows passing the current filter.
    pub fn shown_labels(&self) -> Vec<String> {
        self.read()
            .items
            .rows()
            .iter()
            .filter(|row| row.shown)
            .map(|row| row.label.clone())
            .collect()
    }

    /// Labels of keyboard-reachable rows, in navigation order.
    pub fn navigable_labels(&self) -> Vec<String> {
        let guard = self.read();
        guard
            .items
            .navigable()
            .iter()
            .filter_map(|&i| guard.items.row(i))
            .map(|row| row.label.clone())
            .collect()
    }

    pub fn has_no_results(&self) -> bool {
        self.read().items.has_no_results()
    }

    /// Apply `text` as the search query without touching the text field.
    pub fn filter(&self, text: &str) {
        self.write().apply_filter(text);
    }

    /// Selected option ids; selection order in multi-select mode.
    pub fn selected_ids(&self) -> Vec<OptionId> {
        self.read().engine.selected_ids()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.read().engine.is_selected(id)
    }

    /// Chip labels in selection order. Empty in single-select mode.
    pub fn chip_labels(&self) -> Vec<String> {
        self.read()
            .chips()
            .map(|chips| chips.chips().iter().map(|c| c.label.clone()).collect())
            .unwrap_or_default()
    }

    /// `tabindex` of the chip container, -1 when it cannot be tabbed to.
    pub fn chip_tabindex(&self) -> i32 {
        let guard = self.read();
        match guard.chips() {
            Some(chips) if !guard.disabled => chips.tabindex(),
            _ => -1,
        }
    }

    // -------------------------------------------------------------------------
    // Document subscription
    // -------------------------------------------------------------------------

    /// Register the outside-click listener with `document`.
    pub fn attach(&self, document: &mut Document) {
        if self.read().subscription.is_some() {
            return;
        }
        let subscription = document.subscribe_pointer_release(Arc::new(self.clone()));
        self.write().subscription = Some(subscription);
    }

    /// Remove the outside-click listener. Returns false if none was attached.
    pub fn detach(&self, document: &mut Document) -> bool {
        match self.write().subscription.take() {
            Some(subscription) => document.unsubscribe(subscription),
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.read().subscription.is_some()
    }
}
