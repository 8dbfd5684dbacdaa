use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, trace, warn};

use crate::{config::NotifierConfig, webhooks::Event};

pub(crate) mod classifier;
mod mentions;
mod message;
mod slack;
mod targets;

use message::build_message;
use slack::SlackClient;

pub struct Notifier {
    slack: SlackClient,
    config: NotifierConfig,
}

impl Notifier {
    /// Creates a new [`Notifier`] bot posting to the Slack webhook configured
    /// in the provided [`NotifierConfig`].
    pub fn new(config: NotifierConfig) -> Self {
        let slack = SlackClient::new(config.slack_web_hook_url.clone());
        Self { slack, config }
    }

    /// Start handling incoming GitHub events. Returns once all event senders
    /// have been dropped.
    pub async fn run(&self, mut events: UnboundedReceiver<Event>) {
        debug!("running...");

        loop {
            let event = match events.recv().await {
                Some(event) => event,
                None => {
                    info!("all channel senders were dropped, exiting receive loop");
                    break;
                }
            };
            debug!("received event: {:?}", event);

            if let Err(e) = self.handle_event(event).await {
                warn!("encountered error while handling event: {}", e);
            }
        }
    }

    async fn handle_event(&self, event: Event) -> anyhow::Result<()> {
        let event = match event {
            Event::GitHub(event) => event,
        };

        if !classifier::is_admissible_action(event.action()) {
            trace!("action `{}` didn't need to be announced", event.action());
            return Ok(());
        }

        let recipients = targets::resolve_channels(&event, &self.config);
        if recipients.is_empty() {
            trace!("nobody to notify for this event");
            return Ok(());
        }

        for recipient in recipients {
            let message = build_message(&event, &recipient, &self.config, &mut rand::thread_rng());

            trace!(
                "sending notification for `{}` to channel `{}`",
                recipient.login,
                message.channel
            );
            // one failed delivery shouldn't keep the other channels waiting
            if let Err(e) = self.slack.send(&message).await {
                warn!("couldn't notify channel `{}`: {}", message.channel, e);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::json;

    use super::*;
    use crate::webhooks::GitHubEvent;

    fn test_config() -> NotifierConfig {
        serde_yaml::from_str(
            r##"
slack_web_hook_url: "https://hooks.slack.com/services/T00/B00/XXX"
channels:
  evalphobia: "#takuma"
  kentokento: "#kento"
account_map:
  evalphobia: takuma
"##,
        )
        .unwrap()
    }

    #[test]
    fn issue_comment_end_to_end() {
        let payload = json!({
            "action": "created",
            "sender": { "login": "kitazato", "avatar_url": "https://avatars.example.com/3" },
            "repository": {
                "full_name": "prologin/octonotify",
                "owner": { "login": "prologin" },
            },
            "issue": {
                "title": "Finale problem",
                "html_url": "https://github.com/prologin/octonotify/issues/12",
                "body": "something is off",
                "user": { "login": "evalphobia" },
            },
            "comment": {
                "body": "@evalphobia please check. /cc @kentokento",
                "html_url": "https://github.com/prologin/octonotify/issues/12#issuecomment-1",
            },
        });
        let event = GitHubEvent::from_payload("issue_comment", payload)
            .unwrap()
            .unwrap();
        let config = test_config();

        assert!(classifier::is_admissible_action(event.action()));

        let recipients = targets::resolve_channels(&event, &config);
        let mut channels: Vec<&str> = recipients.iter().map(|r| r.channel.as_str()).collect();
        channels.sort_unstable();
        // the sender has no channel, everyone else does
        assert_eq!(channels, vec!["#kento", "#takuma"]);

        let recipient = recipients
            .iter()
            .find(|r| r.login == "evalphobia")
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let message = build_message(&event, recipient, &config, &mut rng);

        assert_eq!(message.channel, "#takuma");
        let attach = &message.attachments[0];
        assert_eq!(attach.pretext, "Issue Comment");
        assert_eq!(attach.title, "Finale problem");
        assert_eq!(
            attach.text,
            "@takuma please check. /cc kentokento"
        );
    }

    #[test]
    fn denylisted_action_notifies_nobody() {
        let payload = json!({
            "action": "synchronize",
            "sender": { "login": "kitazato" },
            "pull_request": {
                "title": "Refactor",
                "html_url": "https://github.com/prologin/octonotify/pull/3",
                "body": "@evalphobia",
                "user": { "login": "evalphobia" },
            },
        });
        let event = GitHubEvent::from_payload("pull_request", payload)
            .unwrap()
            .unwrap();

        assert!(!classifier::is_admissible_action(event.action()));
    }
}
