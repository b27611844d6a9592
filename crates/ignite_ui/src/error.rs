//! # UI Error Types
//!
//! Everything here is a configuration fault reported while a scene is being
//! built. Nothing in the per-frame path can fail.

use thiserror::Error;

/// Errors that can occur while building controls or loading styles.
#[derive(Error, Debug)]
pub enum UiError {
    /// A background referenced an image the resource provider does not have.
    #[error("image not found: {name} (used by {control})")]
    MissingImage {
        /// Logical asset name.
        name: String,
        /// Kind of control that referenced it.
        control: &'static str,
    },

    /// A color string was not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A font string was not `<size>px <family>`.
    #[error("invalid font: {0:?}")]
    InvalidFont(String),

    /// A style sheet could not be parsed.
    #[error("invalid style sheet: {0}")]
    InvalidStyle(#[from] toml::de::Error),
}

/// Result type for UI construction.
pub type UiResult<T> = Result<T, UiError>;
