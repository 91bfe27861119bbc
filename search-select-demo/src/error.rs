use search_select::SearchSelectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Widget(#[from] SearchSelectError),
    #[error("unknown key in script: {0}")]
    UnknownKey(String),
    #[error("no selection sources were given")]
    NoSources,
}
