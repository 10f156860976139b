//! ghcard-core: GitHub event → chat notification card.
//!
//! This crate provides:
//! - `Envelope`: the GitHub Actions event context the card is built from
//! - `sanitize`: GitHub markdown reduced to what a card can display
//! - Per-event renderers and the `process` dispatcher producing a `Card`

pub mod action;
pub mod card;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod format;
pub mod render;
pub mod sanitize;

pub use action::action_text;
pub use card::{Card, CardOptions, Element, Rendered};
pub use dispatch::{process, process_json, process_with};
pub use error::{CardError, RenderError, Result};
pub use event::{Envelope, EventKind, EventPayload, Label, User};
pub use sanitize::sanitize;
