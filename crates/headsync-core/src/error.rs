//! Error types for head-tag operations.

use smol_str::SmolStr;

/// Errors surfaced by head-document backends.
///
/// There is no local recovery anywhere in this crate: each variant wraps
/// whatever the backend's underlying API reported, exactly once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeadError {
    /// The plain backend could not parse the selector.
    ///
    /// The browser backend never produces this variant; malformed selectors
    /// there surface as [`HeadError::Platform`] with the native message.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector {
        selector: String,
        reason: &'static str,
    },

    /// The tag name is not a valid element name.
    #[error("invalid tag name `{0}`")]
    TagName(SmolStr),

    /// A DOM call failed; carries the platform's error message.
    #[error("platform error: {0}")]
    Platform(String),
}
