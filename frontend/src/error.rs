use thiserror::Error;

/// Problems with the embedded site content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content defines no skill cards")]
    NoCards,
    #[error("skill card id `{0}` is used more than once")]
    DuplicateCardId(String),
    #[error("skill card `{0}` has an empty title")]
    EmptyTitle(String),
}

/// Browser facilities the page could not reach.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window object")]
    NoWindow,
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
