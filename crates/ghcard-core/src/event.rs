//! GitHub Actions event envelope.
//!
//! Mirrors the subset of the `github` context that the renderers read. Every
//! field is optional at the serde level; renderers decide which ones they
//! cannot do without.

use serde::Deserialize;

/// Event types that have a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Commits pushed to a branch or tag.
    Push,
    /// Issue activity.
    Issues,
    /// Pull request activity.
    PullRequest,
    /// Discussion activity.
    Discussion,
    /// Comment on an issue or pull request conversation.
    IssueComment,
    /// Comment on a discussion.
    DiscussionComment,
    /// Release published.
    Release,
    /// Comment on a pull request diff.
    PullRequestReviewComment,
}

impl EventKind {
    /// All supported kinds, in registration order.
    pub const ALL: [Self; 8] = [
        Self::Push,
        Self::Issues,
        Self::PullRequest,
        Self::Discussion,
        Self::IssueComment,
        Self::DiscussionComment,
        Self::Release,
        Self::PullRequestReviewComment,
    ];

    /// Look up the kind for an `event_name`. Returns `None` for anything
    /// without a renderer.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The `event_name` GitHub uses for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Issues => "issues",
            Self::PullRequest => "pull_request",
            Self::Discussion => "discussion",
            Self::IssueComment => "issue_comment",
            Self::DiscussionComment => "discussion_comment",
            Self::Release => "release",
            Self::PullRequestReviewComment => "pull_request_review_comment",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GitHub account as embedded in payloads.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    pub login: String,
    pub html_url: String,
}

/// An issue or pull request label.
///
/// Webhook payloads carry objects, but some hand-built contexts pass bare
/// label names. Anything else (`null`, numbers) is kept as `Other` and has
/// no name.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Label {
    Named {
        #[serde(default)]
        name: Option<String>,
    },
    Plain(String),
    Other(serde_json::Value),
}

impl Label {
    /// The label's display name, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name } => name.as_deref(),
            Self::Plain(name) => Some(name),
            Self::Other(_) => None,
        }
    }
}

/// Milestone attached to an issue or pull request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    #[serde(default)]
    pub title: Option<String>,
}

/// Head commit of a push.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Commit {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// An issue or a pull request. GitHub serves both with the same core fields.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Issue {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Pull requests share the issue shape.
pub type PullRequest = Issue;

/// A discussion thread.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Discussion {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A comment on an issue, discussion or pull request diff.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Comment {
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A published release.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Release {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub body: Option<String>,
}

/// The webhook payload. Which records are populated depends on the event.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EventPayload {
    #[serde(default)]
    pub head_commit: Option<Commit>,
    #[serde(default)]
    pub issue: Option<Issue>,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub discussion: Option<Discussion>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub release: Option<Release>,
}

/// The top-level record the dispatcher routes on.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Envelope {
    /// Event type key, e.g. `issues`.
    #[serde(default)]
    pub event_name: String,

    /// Activity verb, e.g. `opened`. Push events carry none.
    #[serde(default)]
    pub action: Option<String>,

    /// Login of the account that triggered the run.
    #[serde(default)]
    pub actor: String,

    /// Base URL of the GitHub instance, e.g. `https://github.com`.
    #[serde(default)]
    pub server_url: String,

    /// `owner/name` of the repository.
    #[serde(default)]
    pub repository: String,

    /// Fully qualified ref, e.g. `refs/heads/main`.
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,

    /// Short ref name, e.g. `main`.
    #[serde(default)]
    pub ref_name: Option<String>,

    /// Event-specific payload.
    #[serde(default)]
    pub event: EventPayload,
}

impl Envelope {
    /// Parse an envelope from a JSON document.
    ///
    /// # Errors
    /// Returns `CardError::Json` if the document is not a valid envelope.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// The branch or tag name, preferring `ref_name` and falling back to the
    /// short form of `ref`.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.ref_name.as_deref().filter(|name| !name.is_empty()).or_else(|| {
            self.git_ref.as_deref().map(|full| {
                full.strip_prefix("refs/heads/")
                    .or_else(|| full.strip_prefix("refs/tags/"))
                    .unwrap_or(full)
            })
        })
    }

    /// URL of the repository tree at `branch`.
    #[must_use]
    pub fn tree_url(&self, branch: &str) -> String {
        format!("{}/{}/tree/{branch}", self.server_url, self.repository)
    }
}
