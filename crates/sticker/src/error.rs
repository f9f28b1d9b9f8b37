//! Engine errors

use sticker_dom::DomError;

/// Sticker error
#[derive(Debug, thiserror::Error)]
pub enum StickerError {
    /// `type` names a behavior that does not exist
    #[error("unknown sticker type: {0:?} (expected top, bottom, fill or sidebar)")]
    UnknownBehavior(String),
    /// The host refused a tree operation
    #[error("dom error: {0}")]
    Dom(#[from] DomError),
    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, StickerError>;
