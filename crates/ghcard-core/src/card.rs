//! Interactive card document (schema 2.0) as accepted by the chat platform.

use serde::Serialize;

/// Card schema version emitted.
pub const SCHEMA_VERSION: &str = "2.0";

/// Header colour template used unless configured otherwise.
pub const DEFAULT_TEMPLATE: &str = "blue";

/// One body element.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Element {
    /// Card-flavoured markdown text.
    Markdown { content: String },
}

impl Element {
    /// Markdown block built from lines joined with `\n`.
    #[must_use]
    pub fn markdown(lines: &[String]) -> Self {
        Self::Markdown {
            content: lines.join("\n"),
        }
    }
}

/// Text node in the card header.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Text {
    PlainText { content: String },
}

/// Card header: title and colour template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Header {
    pub title: Text,
    pub template: String,
}

/// Layout flags.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Layout {
    pub wide_screen_mode: bool,
}

/// Card body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Body {
    pub elements: Vec<Element>,
}

/// The complete card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Card {
    pub schema: String,
    pub config: Layout,
    pub header: Header,
    pub body: Body,
}

/// What a renderer produces: the title and the body elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub title: String,
    pub elements: Vec<Element>,
}

/// Presentation knobs applied when wrapping a [`Rendered`] into a [`Card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOptions {
    /// Header colour template.
    pub template: String,
    /// Use the wide layout.
    pub wide_screen_mode: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            wide_screen_mode: true,
        }
    }
}

impl Card {
    /// Wrap renderer output in the card envelope.
    #[must_use]
    pub fn new(rendered: Rendered, options: &CardOptions) -> Self {
        Self {
            schema: SCHEMA_VERSION.to_string(),
            config: Layout {
                wide_screen_mode: options.wide_screen_mode,
            },
            header: Header {
                title: Text::PlainText {
                    content: rendered.title,
                },
                template: options.template.clone(),
            },
            body: Body {
                elements: rendered.elements,
            },
        }
    }

    /// Title text shown in the header.
    #[must_use]
    pub fn title(&self) -> &str {
        let Text::PlainText { content } = &self.header.title;
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_serialization_shape() {
        let rendered = Rendered {
            title: "t".to_string(),
            elements: vec![Element::markdown(&["a".to_string(), "b".to_string()])],
        };
        let card = Card::new(rendered, &CardOptions::default());

        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({
                "schema": "2.0",
                "config": { "wide_screen_mode": true },
                "header": {
                    "title": { "tag": "plain_text", "content": "t" },
                    "template": "blue"
                },
                "body": {
                    "elements": [{ "tag": "markdown", "content": "a\nb" }]
                }
            })
        );
    }

    #[test]
    fn test_options_applied() {
        let options = CardOptions {
            template: "red".to_string(),
            wide_screen_mode: false,
        };
        let card = Card::new(
            Rendered {
                title: "t".to_string(),
                elements: Vec::new(),
            },
            &options,
        );
        assert_eq!(card.header.template, "red");
        assert!(!card.config.wide_screen_mode);
        assert_eq!(card.title(), "t");
    }
}
