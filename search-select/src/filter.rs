//! Case-insensitive substring filtering of option labels.

use crate::items::AvailableItems;

/// Case-insensitive substring matcher for one query.
///
/// Both sides are compared in their lowercase form, so accented and other
/// non-ASCII labels match like any other text. A blank query (after
/// trimming) matches every label.
pub struct LabelFilter {
    needle: Option<String>,
}

impl LabelFilter {
    pub fn new(query: &str) -> Self {
        let query = query.trim();
        Self {
            needle: (!query.is_empty()).then(|| query.to_lowercase()),
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        match &self.needle {
            Some(needle) => label.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

/// Whether `label` contains `query` (trimmed), ignoring case.
pub fn label_matches(query: &str, label: &str) -> bool {
    LabelFilter::new(query).matches(label)
}

impl AvailableItems {
    /// Apply `text` as the search query.
    ///
    /// Only presentation state changes: `selected` and `disabled` are never
    /// touched. Sections whose rows are all filtered out are hidden, and the
    /// navigable index is rebuilt from the shown rows in document order.
    pub fn filter(&mut self, text: &str) {
        let filter = LabelFilter::new(text);

        for row in &mut self.rows {
            row.shown = filter.matches(&row.label);
        }

        for section in &mut self.sections {
            section.hidden = !self.rows[section.rows.clone()].iter().any(|r| r.shown);
        }

        self.navigable = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.shown)
            .map(|(index, _)| index)
            .collect();
        self.no_results = self.navigable.is_empty();

        log::debug!(
            "filter query={:?} shown={} no_results={}",
            text.trim(),
            self.navigable.len(),
            self.no_results
        );
    }
}
