#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Text content, escaped on output.
    Text(String),
    /// Pre-built markup inserted verbatim (inline SVG icons).
    Raw(String),
    Children(Vec<super::Element>),
}
