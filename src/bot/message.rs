//! Builds the Slack payload for one (event, recipient) pair.

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use url::Url;

use crate::{
    bot::{classifier, mentions, targets, targets::Recipient},
    config::NotifierConfig,
    webhooks::GitHubEvent,
};

const DEFAULT_USERNAME: &str = "ぎっはぶ";

/// Named colors, from the palette the bot has always used.
mod color {
    pub const AIRFORCE_BLUE: &str = "#5d8aa8";
    pub const GRANNY_SMITH_APPLE: &str = "#a8e4a0";
    pub const LAVENDER_BLUE: &str = "#ccccff";
    pub const ONYX: &str = "#0f0f0f";
    pub const CITRINE: &str = "#e4d00a";
    pub const EGGSHELL: &str = "#f0ead6";
    pub const AMARANTH: &str = "#e52b50";
    pub const OLD_ROSE: &str = "#c08081";
    pub const PALE_SILVER: &str = "#c9c0bb";
}

#[derive(Debug, Serialize)]
pub struct SlackMessage {
    pub channel: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    pub link_names: u8,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
pub struct Attachment {
    pub author_name: String,
    pub pretext: String,
    pub title: String,
    pub title_link: Url,
    pub fallback: String,
    pub text: String,
    pub color: &'static str,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Field {
    pub title: &'static str,
    pub value: String,
    pub short: bool,
}

/// Assembles the full payload for `recipient`. Everything except the icon
/// choice is a deterministic function of the event; the mention highlighting
/// and aliasing in the text depend on who the message is for.
pub fn build_message<R: Rng>(
    event: &GitHubEvent,
    recipient: &Recipient,
    config: &NotifierConfig,
    rng: &mut R,
) -> SlackMessage {
    let (username, icon_emoji) = identity(&event.sender().login, config, rng);

    SlackMessage {
        channel: recipient.channel.clone(),
        username,
        icon_emoji,
        link_names: 1,
        attachments: vec![attachment(event, &recipient.login, config)],
    }
}

fn attachment(event: &GitHubEvent, recipient: &str, config: &NotifierConfig) -> Attachment {
    let title = event.title().to_owned();
    let title_link = title_link(event).clone();
    let fallback = format!("{} ({})", title, title_link);

    Attachment {
        author_name: event.sender().login.clone(),
        pretext: pretext(event),
        title,
        title_link,
        fallback,
        text: mentions::translate_handles(text(event), recipient, &config.account_map),
        color: color(event),
        fields: fields(event),
        thumb_url: event.sender().avatar_url.clone(),
        footer: event.repository().map(|repo| repo.full_name.clone()),
    }
}

fn pretext(event: &GitHubEvent) -> String {
    match event {
        GitHubEvent::IssueComment(_) => "Issue Comment".to_owned(),
        GitHubEvent::PullRequestReviewComment(_) => "PR Comment:".to_owned(),
        GitHubEvent::Issues(e) => format!("Issue: {}", e.action),
        GitHubEvent::PullRequest(e) => {
            if e.action == "closed" && classifier::is_merged(event) {
                "PullRequest: merged".to_owned()
            } else {
                format!("PullRequest: {}", e.action)
            }
        }
    }
}

/// Comments link to the comment itself, other events to the issue or PR.
fn title_link(event: &GitHubEvent) -> &Url {
    match event.comment() {
        Some(comment) => &comment.html_url,
        None => event.item_url(),
    }
}

/// The authored content worth quoting. Status-only actions on issues and PRs
/// carry no new text, so they get an empty body.
fn text(event: &GitHubEvent) -> &str {
    if event.comment().is_some() {
        return event.relevant_body();
    }

    match event.action() {
        "closed" | "labeled" | "unlabeled" => "",
        _ => event.relevant_body(),
    }
}

/// Comment events always win; otherwise the action picks the color, falling
/// back to a neutral silver.
fn color(event: &GitHubEvent) -> &'static str {
    if event.comment().is_some() {
        return color::AIRFORCE_BLUE;
    }

    match event.action() {
        "created" => color::GRANNY_SMITH_APPLE,
        "closed" if classifier::is_merged(event) => color::LAVENDER_BLUE,
        "closed" => color::ONYX,
        "labeled" => color::CITRINE,
        "unlabeled" => color::EGGSHELL,
        "assigned" => color::AMARANTH,
        "unassigned" => color::OLD_ROSE,
        _ => color::PALE_SILVER,
    }
}

fn fields(event: &GitHubEvent) -> Vec<Field> {
    let mut fields = Vec::new();

    let assignees = targets::assignee_logins(event);
    if !assignees.is_empty() {
        fields.push(Field {
            title: "Assignee",
            value: assignees.join(" "),
            short: true,
        });
    }

    if let Some(label) = event.label() {
        fields.push(Field {
            title: "Label",
            value: label.name.clone(),
            short: true,
        });
    }

    fields
}

/// Senders with a configured icon post under their own name with one of their
/// icons; everyone else posts as the default bot identity.
fn identity<R: Rng>(
    sender: &str,
    config: &NotifierConfig,
    rng: &mut R,
) -> (String, Option<String>) {
    match config.icon_map.get(sender) {
        Some(choice) => (sender.to_owned(), choice.pick(rng).map(str::to_owned)),
        None => (
            DEFAULT_USERNAME.to_owned(),
            config.icons.choose(rng).cloned(),
        ),
    }
}
