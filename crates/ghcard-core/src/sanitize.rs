//! GitHub-flavoured markdown → card markdown.
//!
//! Card markdown has no code blocks, images, headings or HTML, so those are
//! rewritten or dropped before the text goes on a card. Rules run in order;
//! each one sees the output of the previous.

use regex::Regex;
use std::sync::LazyLock;

/// Longest sanitized text kept, in characters.
pub const MAX_CHARS: usize = 800;

/// Appended when the input was longer than [`MAX_CHARS`].
pub const ELLIPSIS: &str = "\n...";

/// Stands in for a fenced code block.
pub const CODE_BLOCK_PLACEHOLDER: &str = "[代码块]";

/// Ordered rewrite rules: pattern and replacement.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Fenced code blocks
        (r"(?s)```.*?```", CODE_BLOCK_PLACEHOLDER),
        // Inline code keeps its text
        (r"`([^`]+)`", "${1}"),
        // Images become links
        (r"!\[([^\]]*)\]\(([^)]+)\)", "🖼️ [${1}](${2})"),
        // Headings, deepest first
        (r"(?mR)^###\s+(.+)$", "**${1}**"),
        (r"(?mR)^##\s+(.+)$", "**${1}**"),
        (r"(?mR)^#\s+(.+)$", "**${1}**"),
        // HTML comments
        (r"(?s)<!--.*?-->", ""),
        // Any other tag; the text between tags stays
        (r"<[^>]+>", ""),
        // Blank line runs
        (r"\n{3,}", "\n\n"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("Invalid sanitizer regex"),
            replacement,
        )
    })
    .collect()
});

/// Convert markdown into the subset a card can display, capped at
/// [`MAX_CHARS`] characters.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let rewritten = RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        });

    let mut out: String = rewritten.chars().take(MAX_CHARS).collect();
    if text.chars().count() > MAX_CHARS {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("just words\nand a second line"), "just words\nand a second line");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_fenced_code_block_replaced() {
        let input = "before\n```rust\nfn main() {}\n```\nafter";
        assert_eq!(sanitize(input), "before\n[代码块]\nafter");
    }

    #[test]
    fn test_fenced_blocks_are_matched_lazily() {
        let input = "```a```\nkeep\n```b```";
        assert_eq!(sanitize(input), "[代码块]\nkeep\n[代码块]");
    }

    #[test]
    fn test_inline_code_keeps_text() {
        assert_eq!(sanitize("run `cargo test` now"), "run cargo test now");
    }

    #[test]
    fn test_image_becomes_link() {
        assert_eq!(
            sanitize("see ![screenshot](https://x/s.png)"),
            "see 🖼️ [screenshot](https://x/s.png)"
        );
        assert_eq!(sanitize("![](https://x/s.png)"), "🖼️ [](https://x/s.png)");
    }

    #[test]
    fn test_headings_become_bold() {
        let input = "# One\n## Two\n### Three\n#### Four\nnot # heading";
        assert_eq!(
            sanitize(input),
            "**One**\n**Two**\n**Three**\n#### Four\nnot # heading"
        );
    }

    #[test]
    fn test_heading_with_crlf_line_ending() {
        assert_eq!(sanitize("## Title\r\nbody"), "**Title**\r\nbody");
    }

    #[test]
    fn test_html_comments_removed() {
        let input = "a<!-- hidden -->b\n<!--\nmulti\nline\n-->c";
        assert_eq!(sanitize(input), "ab\nc");
    }

    #[test]
    fn test_tags_stripped_with_attributes() {
        assert_eq!(
            sanitize(r#"<details><summary class="x">More</summary>text</details>"#),
            "Moretext"
        );
    }

    #[test]
    fn test_blank_runs_collapsed() {
        assert_eq!(sanitize("a\n\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_code_block_replaced_before_tags_stripped() {
        let input = "```\n<b>bold</b>\n```";
        assert_eq!(sanitize(input), "[代码块]");
    }

    #[test]
    fn test_removed_comment_can_leave_blank_run() {
        assert_eq!(sanitize("a\n\n<!-- x -->\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_truncation_appends_ellipsis() {
        let input = "a".repeat(MAX_CHARS + 1);
        let out = sanitize(&input);
        assert_eq!(out, format!("{}{ELLIPSIS}", "a".repeat(MAX_CHARS)));
    }

    #[test]
    fn test_no_ellipsis_at_limit() {
        let input = "a".repeat(MAX_CHARS);
        assert_eq!(sanitize(&input), input);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let input = "汉".repeat(MAX_CHARS + 10);
        let out = sanitize(&input);
        let kept = out.strip_suffix(ELLIPSIS).unwrap();
        assert_eq!(kept.chars().count(), MAX_CHARS);
    }

    #[test]
    fn test_ellipsis_follows_input_length() {
        let input = format!("<!--{}-->short", "x".repeat(MAX_CHARS));
        assert_eq!(sanitize(&input), format!("short{ELLIPSIS}"));
    }

    #[test]
    fn test_idempotent_below_limit() {
        let inputs = [
            "# Title\nsome `code` and ![img](u)\n\n\n\n<p>para</p>",
            "```\nblock\n```\n## Sub\n<!-- c -->text",
            "plain",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input: {input:?}");
        }
    }
}
