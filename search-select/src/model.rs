//! Option model parser.
//!
//! Walks the hierarchical selection source once and produces the flat,
//! ordered list of groups the widget works from. The result is a snapshot:
//! labels, values and disabled flags are never re-read from the source.

use std::borrow::Borrow;
use std::fmt;

use uuid::Uuid;

use crate::source::{SelectSource, SourceNode};

/// Label of the synthetic group collecting top-level options.
pub const OTHER_GROUP_LABEL: &str = "Other";

/// Stable identifier of a parsed option, unique within the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(String);

impl OptionId {
    pub(crate) fn generate() -> Self {
        Self(format!("{}-option", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the option's row in the available-items list.
    pub fn row_element_id(&self) -> String {
        format!("{}-available", self.0)
    }

    /// Element id of the option's chip in the selected-items list.
    pub fn chip_element_id(&self) -> String {
        format!("{}-selected", self.0)
    }

    /// Element id of the remove button inside the option's chip.
    pub fn remove_element_id(&self) -> String {
        format!("{}-remove", self.0)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A parsed option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub id: OptionId,
    pub label: String,
    pub value: String,
    pub disabled: bool,
    pub selected: bool,
    /// Position of the option in the source, in document order.
    pub source_index: usize,
}

/// A parsed group of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub label: String,
    pub items: Vec<OptionItem>,
}

/// Parse the current contents of a selection source.
pub fn parse(source: &SelectSource) -> Vec<OptionGroup> {
    parse_nodes(&source.children())
}

/// Flatten a source tree into groups.
///
/// Nested groups are lifted to the top level in pre-order: a group's nested
/// groups come before the group itself. Ungrouped top-level options go into
/// a trailing "Other" group, which is omitted when empty.
pub fn parse_nodes(nodes: &[SourceNode]) -> Vec<OptionGroup> {
    let mut next_index = 0;
    let (mut groups, loose) = parse_inner(nodes, false, &mut next_index);

    if !loose.is_empty() {
        groups.push(OptionGroup {
            label: OTHER_GROUP_LABEL.to_string(),
            items: loose,
        });
    }

    log::debug!(
        "parse groups={} options={}",
        groups.len(),
        groups.iter().map(|g| g.items.len()).sum::<usize>()
    );
    groups
}

fn parse_inner(
    nodes: &[SourceNode],
    disabled: bool,
    next_index: &mut usize,
) -> (Vec<OptionGroup>, Vec<OptionItem>) {
    let mut groups = Vec::new();
    let mut items = Vec::new();

    for node in nodes {
        match node {
            SourceNode::Group(group) => {
                let (nested, own) = parse_inner(&group.children, disabled || group.disabled, next_index);
                groups.extend(nested);
                groups.push(OptionGroup {
                    label: group.label.clone(),
                    items: own,
                });
            }
            SourceNode::Item(option) => {
                items.push(OptionItem {
                    id: OptionId::generate(),
                    label: option.label.clone(),
                    value: option.value.clone(),
                    disabled: disabled || option.disabled,
                    selected: option.selected,
                    source_index: *next_index,
                });
                *next_index += 1;
            }
        }
    }

    (groups, items)
}
