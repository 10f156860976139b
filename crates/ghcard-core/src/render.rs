//! Per-event renderers.
//!
//! Each renderer turns the envelope into a title plus a single markdown block
//! of labelled lines. Line order is fixed per event type. Optional fields fall
//! back to [`ABSENT`]; the record a renderer is built around, and the handful
//! of fields it cannot link without, are required and fail with
//! [`RenderError::MissingField`].

use crate::card::{Element, Rendered};
use crate::error::RenderError;
use crate::event::{Envelope, EventKind, Issue, User};
use crate::format::{ABSENT, bare_link, content_item, label_list, link, user_link};

/// Commit message shown when a push has no head commit (branch created or
/// deleted).
pub const NO_HEAD_COMMIT: &str = "Create/Delete/Update Branch (No head commit)";

/// Stand-in title when a comment arrives without its issue.
pub const UNKNOWN_ISSUE: &str = "未知 issue";

/// Stand-in title when a review comment arrives without its pull request.
pub const UNKNOWN_PULL_REQUEST: &str = "未知 PR";

type RenderResult = std::result::Result<Rendered, RenderError>;

/// Render `envelope` as the given event kind.
///
/// # Errors
/// Returns `RenderError::MissingField` when a required field is absent.
pub fn render(kind: EventKind, envelope: &Envelope, action: &str) -> RenderResult {
    match kind {
        EventKind::Push => push(envelope),
        EventKind::Issues => issues(envelope, action),
        EventKind::PullRequest => pull_request(envelope, action),
        EventKind::Discussion => discussion(envelope, action),
        EventKind::IssueComment => issue_comment(envelope),
        EventKind::DiscussionComment => discussion_comment(envelope),
        EventKind::Release => release(envelope),
        EventKind::PullRequestReviewComment => pull_request_review_comment(envelope),
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, RenderError> {
    value.ok_or(RenderError::MissingField(field))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn or_absent(value: Option<&str>) -> &str {
    present(value).unwrap_or(ABSENT)
}

fn single_block(title: String, lines: &[String]) -> Rendered {
    Rendered {
        title,
        elements: vec![Element::markdown(lines)],
    }
}

fn push(envelope: &Envelope) -> RenderResult {
    let branch = required(envelope.branch(), "ref_name")?;
    let tree_url = envelope.tree_url(branch);
    let head = envelope.event.head_commit.as_ref();

    let commit_url = present(head.and_then(|commit| commit.url.as_deref())).unwrap_or(&tree_url);
    let message =
        present(head.and_then(|commit| commit.message.as_deref())).unwrap_or(NO_HEAD_COMMIT);
    let actor_url = format!("{}/{}", envelope.server_url, envelope.actor);

    Ok(single_block(
        "GitHub 代码提交".to_string(),
        &[
            content_item("提交链接：", Some(&bare_link(commit_url))),
            content_item("代码分支：", Some(&link(&tree_url, branch))),
            content_item("提交作者：", Some(&link(&actor_url, &envelope.actor))),
            content_item("提交信息：", Some(message)),
        ],
    ))
}

/// Shared by `issues` and `pull_request`, which carry the same fields.
fn ticket_lines(ticket: &Issue, url_field: &'static str) -> Result<Vec<String>, RenderError> {
    let html_url = required(ticket.html_url.as_deref(), url_field)?;
    let assignee = ticket.assignee.as_ref().map(|user| user_link(Some(user)));
    let milestone = ticket
        .milestone
        .as_ref()
        .and_then(|milestone| milestone.title.as_deref());

    Ok(vec![
        content_item("链接：", Some(&bare_link(html_url))),
        content_item("作者：", Some(&user_link(ticket.user.as_ref()))),
        content_item("指派：", assignee.as_deref()),
        content_item("标签：", Some(&label_list(ticket.labels.as_deref()))),
        content_item("里程碑：", milestone),
        content_item("描述：", ticket.body.as_deref()),
    ])
}

fn issues(envelope: &Envelope, action: &str) -> RenderResult {
    let issue = required(envelope.event.issue.as_ref(), "issue")?;
    let lines = ticket_lines(issue, "issue.html_url")?;
    let title = format!("GitHub issue {action}：{}", or_absent(issue.title.as_deref()));
    Ok(single_block(title, &lines))
}

fn pull_request(envelope: &Envelope, action: &str) -> RenderResult {
    let pull = required(envelope.event.pull_request.as_ref(), "pull_request")?;
    let lines = ticket_lines(pull, "pull_request.html_url")?;
    let title = format!("GitHub PR {action}：{}", or_absent(pull.title.as_deref()));
    Ok(single_block(title, &lines))
}

fn discussion(envelope: &Envelope, action: &str) -> RenderResult {
    let discussion = required(envelope.event.discussion.as_ref(), "discussion")?;
    let html_url = required(discussion.html_url.as_deref(), "discussion.html_url")?;

    Ok(single_block(
        format!("GitHub 讨论 {action}：{}", or_absent(discussion.title.as_deref())),
        &[
            content_item("链接：", Some(&bare_link(html_url))),
            content_item("作者：", Some(&user_link(discussion.user.as_ref()))),
            content_item("描述：", discussion.body.as_deref()),
        ],
    ))
}

/// Link, author and body of the envelope's comment. The comment and its
/// author are required.
fn comment_parts(envelope: &Envelope) -> Result<(&str, &User, Option<&str>), RenderError> {
    let comment = required(envelope.event.comment.as_ref(), "comment")?;
    let html_url = required(comment.html_url.as_deref(), "comment.html_url")?;
    let user = required(comment.user.as_ref(), "comment.user")?;
    Ok((html_url, user, comment.body.as_deref()))
}

fn issue_comment(envelope: &Envelope) -> RenderResult {
    let (html_url, user, body) = comment_parts(envelope)?;
    let issue_title = envelope
        .event
        .issue
        .as_ref()
        .and_then(|issue| present(issue.title.as_deref()))
        .unwrap_or(UNKNOWN_ISSUE);

    Ok(single_block(
        format!("GitHub issue 评论：{issue_title}"),
        &[
            content_item("链接：", Some(&bare_link(html_url))),
            content_item("作者：", Some(&user_link(Some(user)))),
            content_item("描述：", body),
        ],
    ))
}

fn discussion_comment(envelope: &Envelope) -> RenderResult {
    let (html_url, user, body) = comment_parts(envelope)?;
    let discussion_title = envelope
        .event
        .discussion
        .as_ref()
        .and_then(|discussion| discussion.title.as_deref());

    Ok(single_block(
        format!("GitHub 讨论评论：{}", or_absent(discussion_title)),
        &[
            content_item("链接：", Some(&bare_link(html_url))),
            content_item("作者：", Some(&user_link(Some(user)))),
            content_item("描述：", body),
        ],
    ))
}

fn release(envelope: &Envelope) -> RenderResult {
    let release = required(envelope.event.release.as_ref(), "release")?;
    let name = match present(release.name.as_deref()) {
        Some(name) => name,
        None => required(release.tag_name.as_deref(), "release.tag_name")?,
    };
    let html_url = required(release.html_url.as_deref(), "release.html_url")?;

    Ok(single_block(
        format!("GitHub Release 发布：{name}"),
        &[
            content_item("链接：", Some(&bare_link(html_url))),
            content_item("作者：", Some(&user_link(release.author.as_ref()))),
            content_item("描述：", release.body.as_deref()),
        ],
    ))
}

fn pull_request_review_comment(envelope: &Envelope) -> RenderResult {
    let (html_url, user, body) = comment_parts(envelope)?;
    let pull = required(envelope.event.pull_request.as_ref(), "pull_request")?;
    let pull_url = required(pull.html_url.as_deref(), "pull_request.html_url")?;
    let number = required(pull.number, "pull_request.number")?;
    let pull_title = present(pull.title.as_deref()).unwrap_or(UNKNOWN_PULL_REQUEST);

    Ok(single_block(
        format!("GitHub PR 代码评论：{pull_title}"),
        &[
            content_item("链接：", Some(&bare_link(html_url))),
            content_item("作者：", Some(&user_link(Some(user)))),
            content_item("PR：", Some(&link(pull_url, &format!("#{number}")))),
            content_item("评论：", body),
        ],
    ))
}
