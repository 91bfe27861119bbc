//! Enhancing several selection sources at once.

use markup::Document;
use uuid::Uuid;

use crate::error::SearchSelectError;
use crate::source::SelectSource;
use crate::theme::Theme;
use crate::widget::SearchSelect;

/// A set of search-and-select widgets sharing one theme.
#[derive(Debug)]
pub struct SearchSelects {
    uuid: Uuid,
    theme: Theme,
    sources: Vec<SelectSource>,
    widgets: Vec<SearchSelect>,
}

impl SearchSelects {
    pub fn new(sources: Vec<SelectSource>, theme: Option<Theme>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            theme: theme.unwrap_or_default(),
            sources,
            widgets: Vec::new(),
        }
    }

    /// Build one widget per source and register their outside-click
    /// listeners with `document`.
    ///
    /// Sources without an id get `{uuid}-search-and-select-label-{index}`.
    /// Calling this again while widgets are live does nothing.
    pub fn initialize(&mut self, document: &mut Document) -> Result<(), SearchSelectError> {
        if !self.widgets.is_empty() {
            log::warn!("SearchSelects already initialized, ignoring");
            return Ok(());
        }

        let mut widgets: Vec<SearchSelect> = Vec::with_capacity(self.sources.len());
        for (index, source) in self.sources.iter().enumerate() {
            if source.get_id().is_none() {
                source.set_id(format!("{}-search-and-select-label-{index}", self.uuid));
            }
            let widget = match SearchSelect::new(source.clone(), Some(self.theme.clone())) {
                Ok(widget) => widget,
                Err(e) => {
                    for built in &widgets {
                        built.detach(document);
                    }
                    return Err(e);
                }
            };
            widget.attach(document);
            widgets.push(widget);
        }

        log::info!("Initialized {} search-and-select widgets", widgets.len());
        self.widgets = widgets;
        Ok(())
    }

    /// Unsubscribe every widget from `document` and drop them.
    pub fn teardown(&mut self, document: &mut Document) {
        for widget in self.widgets.drain(..) {
            widget.detach(document);
        }
    }

    pub fn widgets(&self) -> &[SearchSelect] {
        &self.widgets
    }

    /// The widget enhancing the select with id `select_id`.
    pub fn get(&self, select_id: &str) -> Option<&SearchSelect> {
        self.widgets.iter().find(|w| w.ids().select == select_id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
