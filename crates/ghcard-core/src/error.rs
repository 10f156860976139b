//! Error types for ghcard-core.

use thiserror::Error;

/// Result type alias for ghcard-core operations.
pub type Result<T> = std::result::Result<T, CardError>;

/// Failures raised by a single renderer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A field the renderer cannot do without was absent from the payload.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors that can occur while turning an event into a card.
#[derive(Debug, Error)]
pub enum CardError {
    /// No renderer is registered for the event name.
    #[error("no handler found for event: {0}")]
    UnsupportedEvent(String),

    /// The renderer for a known event failed.
    #[error("error processing {event_name} event: {source}")]
    Render {
        event_name: String,
        #[source]
        source: RenderError,
    },

    /// The renderer ran but produced nothing to put on the card.
    #[error("unsupported {event_name} event & {action} action")]
    UnsupportedResult { event_name: String, action: String },

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
