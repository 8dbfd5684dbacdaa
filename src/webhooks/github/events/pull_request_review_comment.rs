use serde::Deserialize;

use crate::webhooks::github::events::{Comment, GitHubUser, PullRequest, Repository};

#[derive(Debug, Deserialize)]
pub struct PullRequestReviewCommentEvent {
    pub action: String,
    pub sender: GitHubUser,
    pub repository: Option<Repository>,
    pub pull_request: PullRequest,
    pub comment: Comment,
}
