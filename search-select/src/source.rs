//! The backing selection control.
//!
//! `SelectSource` plays the part of the native multi-valued select the widget
//! enhances. It is the only state the outside world reads: after every
//! selection change the widget writes the per-option `selected` flags back
//! here, so a form serializer holding a clone always sees current values.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use markup::Element;
use serde::{Deserialize, Serialize};

use crate::error::SearchSelectError;

/// A leaf option of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub selected: bool,
}

impl SourceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A labelled group of options. Groups may nest arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceGroup {
    pub label: String,
    /// Disables every option inside the group.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub children: Vec<SourceNode>,
}

impl SourceGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            children: Vec::new(),
        }
    }

    pub fn option(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.with_option(SourceOption::new(value, label))
    }

    pub fn with_option(mut self, option: SourceOption) -> Self {
        self.children.push(SourceNode::Item(option));
        self
    }

    pub fn group(mut self, group: SourceGroup) -> Self {
        self.children.push(SourceNode::Group(group));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceNode {
    #[serde(rename = "option")]
    Item(SourceOption),
    Group(SourceGroup),
}

/// Serializable description of a selection source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    #[serde(default)]
    pub id: Option<String>,
    /// Text of the label associated with the control.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub children: Vec<SourceNode>,
}

/// Shared handle to a selection source.
///
/// Cloning is cheap; all clones observe the same options.
#[derive(Debug, Clone, Default)]
pub struct SelectSource {
    inner: Arc<RwLock<SourceSpec>>,
}

impl SelectSource {
    /// Create an empty single-select source.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spec(spec: SourceSpec) -> Self {
        Self {
            inner: Arc::new(RwLock::new(spec)),
        }
    }

    /// Load a source from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, SearchSelectError> {
        let spec: SourceSpec = serde_json::from_str(json)?;
        Ok(Self::from_spec(spec))
    }

    fn read(&self) -> RwLockReadGuard<'_, SourceSpec> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SourceSpec> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn id(self, id: impl Into<String>) -> Self {
        self.write().id = Some(id.into());
        self
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        self.write().label = Some(label.into());
        self
    }

    pub fn multiple(self) -> Self {
        self.write().multiple = true;
        self
    }

    pub fn disabled(self) -> Self {
        self.write().disabled = true;
        self
    }

    pub fn readonly(self) -> Self {
        self.write().readonly = true;
        self
    }

    pub fn option(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.with_option(SourceOption::new(value, label))
    }

    pub fn with_option(self, option: SourceOption) -> Self {
        self.write().children.push(SourceNode::Item(option));
        self
    }

    pub fn group(self, group: SourceGroup) -> Self {
        self.write().children.push(SourceNode::Group(group));
        self
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn get_id(&self) -> Option<String> {
        self.read().id.clone()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        self.write().id = Some(id.into());
    }

    pub fn get_label(&self) -> Option<String> {
        self.read().label.clone()
    }

    pub fn is_multiple(&self) -> bool {
        self.read().multiple
    }

    pub fn is_disabled(&self) -> bool {
        self.read().disabled
    }

    pub fn is_readonly(&self) -> bool {
        self.read().readonly
    }

    /// Snapshot of the option tree.
    pub fn children(&self) -> Vec<SourceNode> {
        self.read().children.clone()
    }

    pub fn spec(&self) -> SourceSpec {
        self.read().clone()
    }

    // -------------------------------------------------------------------------
    // Options (document order)
    // -------------------------------------------------------------------------

    /// All options, flattened in document order.
    pub fn options(&self) -> Vec<SourceOption> {
        let guard = self.read();
        let mut out = Vec::new();
        collect_options(&guard.children, &mut out);
        out.into_iter().cloned().collect()
    }

    /// Values of the currently selected options, in document order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options()
            .into_iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect()
    }

    /// Set the `selected` flag of the option at `index` (document order).
    /// Returns false if there is no such option.
    pub fn set_selected(&self, index: usize, selected: bool) -> bool {
        let mut guard = self.write();
        let mut options = Vec::new();
        collect_options_mut(&mut guard.children, &mut options);
        match options.get_mut(index) {
            Some(option) => {
                option.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Make the option at `index` the only selected option.
    pub fn select_only(&self, index: usize) -> bool {
        let mut guard = self.write();
        let mut options = Vec::new();
        collect_options_mut(&mut guard.children, &mut options);
        if index >= options.len() {
            return false;
        }
        for (i, option) in options.into_iter().enumerate() {
            option.selected = i == index;
        }
        true
    }

    // -------------------------------------------------------------------------
    // Projection
    // -------------------------------------------------------------------------

    /// Project the (hidden) native control, including current selection.
    pub fn to_element(&self) -> Element {
        let guard = self.read();
        let mut select = Element::new("select");
        if let Some(id) = &guard.id {
            select = select.id(id.clone());
        }
        select
            .flag("multiple", guard.multiple)
            .flag("disabled", guard.disabled)
            .flag("readonly", guard.readonly)
            .hidden(true)
            .children(guard.children.iter().map(node_element))
    }
}

fn node_element(node: &SourceNode) -> Element {
    match node {
        SourceNode::Item(option) => Element::new("option")
            .attr("value", option.value.clone())
            .flag("selected", option.selected)
            .flag("disabled", option.disabled)
            .text(option.label.clone()),
        SourceNode::Group(group) => Element::new("optgroup")
            .attr("label", group.label.clone())
            .flag("disabled", group.disabled)
            .children(group.children.iter().map(node_element)),
    }
}

fn collect_options<'a>(nodes: &'a [SourceNode], out: &mut Vec<&'a SourceOption>) {
    for node in nodes {
        match node {
            SourceNode::Item(option) => out.push(option),
            SourceNode::Group(group) => collect_options(&group.children, out),
        }
    }
}

fn collect_options_mut<'a>(nodes: &'a mut [SourceNode], out: &mut Vec<&'a mut SourceOption>) {
    for node in nodes {
        match node {
            SourceNode::Item(option) => out.push(option),
            SourceNode::Group(group) => collect_options_mut(&mut group.children, out),
        }
    }
}
