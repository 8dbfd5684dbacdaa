use serde::Deserialize;
use url::Url;

mod issue_comment;
mod issues;
mod pull_request;
mod pull_request_review_comment;

pub use issue_comment::*;
pub use issues::*;
pub use pull_request::*;
pub use pull_request_review_comment::*;

#[derive(Debug)]
pub enum GitHubEvent {
    Issues(IssuesEvent),
    IssueComment(IssueCommentEvent),
    PullRequest(PullRequestEvent),
    PullRequestReviewComment(PullRequestReviewCommentEvent),
}

impl GitHubEvent {
    /// Builds a typed event from the envelope's event-type attribute and its
    /// JSON payload. Event types we don't announce yield `Ok(None)`.
    pub fn from_payload(
        event_type: &str,
        payload: serde_json::Value,
    ) -> anyhow::Result<Option<Self>> {
        let event = match event_type {
            "issues" => GitHubEvent::Issues(serde_json::from_value(payload)?),
            "issue_comment" => GitHubEvent::IssueComment(serde_json::from_value(payload)?),
            "pull_request" => GitHubEvent::PullRequest(serde_json::from_value(payload)?),
            "pull_request_review_comment" => {
                GitHubEvent::PullRequestReviewComment(serde_json::from_value(payload)?)
            }
            _ => return Ok(None),
        };

        Ok(Some(event))
    }

    pub fn action(&self) -> &str {
        match self {
            GitHubEvent::Issues(e) => &e.action,
            GitHubEvent::IssueComment(e) => &e.action,
            GitHubEvent::PullRequest(e) => &e.action,
            GitHubEvent::PullRequestReviewComment(e) => &e.action,
        }
    }

    pub fn sender(&self) -> &GitHubUser {
        match self {
            GitHubEvent::Issues(e) => &e.sender,
            GitHubEvent::IssueComment(e) => &e.sender,
            GitHubEvent::PullRequest(e) => &e.sender,
            GitHubEvent::PullRequestReviewComment(e) => &e.sender,
        }
    }

    pub fn repository(&self) -> Option<&Repository> {
        match self {
            GitHubEvent::Issues(e) => e.repository.as_ref(),
            GitHubEvent::IssueComment(e) => e.repository.as_ref(),
            GitHubEvent::PullRequest(e) => e.repository.as_ref(),
            GitHubEvent::PullRequestReviewComment(e) => e.repository.as_ref(),
        }
    }

    /// The user who opened the issue or pull request the event is about.
    pub fn creator(&self) -> Option<&GitHubUser> {
        match self {
            GitHubEvent::Issues(e) => e.issue.user.as_ref(),
            GitHubEvent::IssueComment(e) => e.issue.user.as_ref(),
            GitHubEvent::PullRequest(e) => e.pull_request.user.as_ref(),
            GitHubEvent::PullRequestReviewComment(e) => e.pull_request.user.as_ref(),
        }
    }

    pub fn assignee(&self) -> Option<&GitHubUser> {
        match self {
            GitHubEvent::Issues(e) => e.issue.assignee.as_ref(),
            GitHubEvent::IssueComment(e) => e.issue.assignee.as_ref(),
            GitHubEvent::PullRequest(e) => e.pull_request.assignee.as_ref(),
            GitHubEvent::PullRequestReviewComment(e) => e.pull_request.assignee.as_ref(),
        }
    }

    pub fn assignees(&self) -> &[GitHubUser] {
        match self {
            GitHubEvent::Issues(e) => &e.issue.assignees,
            GitHubEvent::IssueComment(e) => &e.issue.assignees,
            GitHubEvent::PullRequest(e) => &e.pull_request.assignees,
            GitHubEvent::PullRequestReviewComment(e) => &e.pull_request.assignees,
        }
    }

    pub fn pull_request(&self) -> Option<&PullRequest> {
        match self {
            GitHubEvent::PullRequest(e) => Some(&e.pull_request),
            GitHubEvent::PullRequestReviewComment(e) => Some(&e.pull_request),
            _ => None,
        }
    }

    pub fn comment(&self) -> Option<&Comment> {
        match self {
            GitHubEvent::IssueComment(e) => Some(&e.comment),
            GitHubEvent::PullRequestReviewComment(e) => Some(&e.comment),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&Label> {
        match self {
            GitHubEvent::Issues(e) => e.label.as_ref(),
            GitHubEvent::PullRequest(e) => e.label.as_ref(),
            _ => None,
        }
    }

    /// Title of the issue or pull request the event is about. Comment events
    /// report the title of the parent item.
    pub fn title(&self) -> &str {
        match self {
            GitHubEvent::Issues(e) => &e.issue.title,
            GitHubEvent::IssueComment(e) => &e.issue.title,
            GitHubEvent::PullRequest(e) => &e.pull_request.title,
            GitHubEvent::PullRequestReviewComment(e) => &e.pull_request.title,
        }
    }

    pub fn item_url(&self) -> &Url {
        match self {
            GitHubEvent::Issues(e) => &e.issue.html_url,
            GitHubEvent::IssueComment(e) => &e.issue.html_url,
            GitHubEvent::PullRequest(e) => &e.pull_request.html_url,
            GitHubEvent::PullRequestReviewComment(e) => &e.pull_request.html_url,
        }
    }

    /// The text people get mentioned in: the comment body for comment events,
    /// the issue/pull request body otherwise.
    pub fn relevant_body(&self) -> &str {
        let body = match self {
            GitHubEvent::Issues(e) => e.issue.body.as_deref(),
            GitHubEvent::IssueComment(e) => e.comment.body.as_deref(),
            GitHubEvent::PullRequest(e) => e.pull_request.body.as_deref(),
            GitHubEvent::PullRequestReviewComment(e) => e.comment.body.as_deref(),
        };
        body.unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub avatar_url: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub owner: GitHubUser,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub title: String,
    pub html_url: Url,
    pub body: Option<String>,
    pub user: Option<GitHubUser>,
    pub assignee: Option<GitHubUser>,
    #[serde(default)]
    pub assignees: Vec<GitHubUser>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub html_url: Url,
    pub body: Option<String>,
    pub user: Option<GitHubUser>,
    pub assignee: Option<GitHubUser>,
    #[serde(default)]
    pub assignees: Vec<GitHubUser>,
    pub merged: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    pub body: Option<String>,
    pub html_url: Url,
}

#[derive(Debug, Deserialize)]
pub struct Label {
    pub name: String,
}
