//! Line and link helpers shared by the renderers.

use crate::event::{Label, User};
use crate::sanitize::sanitize;

/// Shown in place of any optional value that is missing.
pub const ABSENT: &str = "无";

/// Markdown link to `href` labelled `text`.
#[must_use]
pub fn link(href: &str, text: &str) -> String {
    format!("[{text}]({href})")
}

/// Markdown link whose text is the URL itself.
#[must_use]
pub fn bare_link(href: &str) -> String {
    link(href, href)
}

/// Link to a user's profile, or [`ABSENT`].
#[must_use]
pub fn user_link(user: Option<&User>) -> String {
    user.map_or_else(|| ABSENT.to_string(), |user| link(&user.html_url, &user.login))
}

/// Comma-joined label names, or [`ABSENT`] when there are none.
#[must_use]
pub fn label_list(labels: Option<&[Label]>) -> String {
    let names: Vec<&str> = labels
        .unwrap_or_default()
        .iter()
        .filter_map(Label::name)
        .collect();
    if names.is_empty() {
        ABSENT.to_string()
    } else {
        names.join(", ")
    }
}

/// One labelled card line: `**label** value`.
///
/// The value is sanitized; a missing or empty value renders as [`ABSENT`].
/// `label` carries its own trailing separator.
#[must_use]
pub fn content_item(label: &str, value: Option<&str>) -> String {
    match value.filter(|value| !value.is_empty()) {
        Some(value) => format!("**{label}** {}", sanitize(value)),
        None => format!("**{label}** {ABSENT}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            login: "alice".to_string(),
            html_url: "https://x/u/alice".to_string(),
        }
    }

    #[test]
    fn test_links() {
        assert_eq!(link("https://x", "x"), "[x](https://x)");
        assert_eq!(bare_link("https://x/1"), "[https://x/1](https://x/1)");
    }

    #[test]
    fn test_user_link() {
        assert_eq!(user_link(Some(&alice())), "[alice](https://x/u/alice)");
        assert_eq!(user_link(None), "无");
    }

    #[test]
    fn test_label_list() {
        let labels = vec![
            Label::Named {
                name: Some("bug".to_string()),
            },
            Label::Named { name: None },
            Label::Plain("p1".to_string()),
        ];
        assert_eq!(label_list(Some(&labels)), "bug, p1");
        assert_eq!(label_list(Some(&[])), "无");
        assert_eq!(label_list(None), "无");
    }

    #[test]
    fn test_content_item() {
        assert_eq!(content_item("作者：", Some("`alice`")), "**作者：** alice");
        assert_eq!(content_item("描述：", Some("")), "**描述：** 无");
        assert_eq!(content_item("描述：", None), "**描述：** 无");
    }
}
