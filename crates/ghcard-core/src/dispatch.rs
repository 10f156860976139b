//! Event routing and card assembly.

use crate::action::action_text;
use crate::card::{Card, CardOptions};
use crate::error::{CardError, Result};
use crate::event::{Envelope, EventKind};
use crate::render::render;
use tracing::debug;

/// Turn an event envelope into a card using the default card options.
///
/// # Errors
/// See [`process_with`].
pub fn process(envelope: &Envelope) -> Result<Card> {
    process_with(envelope, &CardOptions::default())
}

/// Turn an event envelope into a card.
///
/// # Errors
/// - `CardError::UnsupportedEvent` if `event_name` has no renderer.
/// - `CardError::Render` if the renderer failed; the renderer's error is the
///   source.
/// - `CardError::UnsupportedResult` if the renderer produced no elements.
pub fn process_with(envelope: &Envelope, options: &CardOptions) -> Result<Card> {
    let event_name = envelope.event_name.as_str();
    let action = action_text(envelope.action.as_deref());

    let kind = EventKind::from_name(event_name)
        .ok_or_else(|| CardError::UnsupportedEvent(event_name.to_string()))?;
    debug!(event = %kind, action = %action, "Rendering event");

    let rendered = render(kind, envelope, &action).map_err(|source| CardError::Render {
        event_name: event_name.to_string(),
        source,
    })?;

    if rendered.elements.is_empty() {
        return Err(CardError::UnsupportedResult {
            event_name: event_name.to_string(),
            action: envelope.action.clone().unwrap_or_default(),
        });
    }

    debug!(elements = rendered.elements.len(), title = %rendered.title, "Rendered card");
    Ok(Card::new(rendered, options))
}

/// Parse a JSON envelope and turn it into a card.
///
/// # Errors
/// Returns `CardError::Json` for malformed input, otherwise as [`process_with`].
pub fn process_json(input: &str, options: &CardOptions) -> Result<Card> {
    let envelope = Envelope::from_json(input)?;
    process_with(&envelope, options)
}
