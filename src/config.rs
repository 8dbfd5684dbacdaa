use std::collections::HashMap;

use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct NotifierConfig {
    /// Incoming webhook URL the notifications are posted to.
    pub slack_web_hook_url: Url,
    /// Maps a GitHub login to the Slack channel where that person wants to be
    /// notified. Logins absent from this map are unreachable and never notified.
    #[serde(default)]
    pub channels: HashMap<String, String>,
    /// Maps a GitHub login to the matching Slack display name. Logins absent
    /// from this map keep their GitHub name in delivered messages.
    #[serde(default)]
    pub account_map: HashMap<String, String>,
    /// Per-sender icons, either a single icon or a set to pick from at random.
    #[serde(default)]
    pub icon_map: HashMap<String, IconChoice>,
    /// Default bot icons, used when the sender has no entry in `icon_map`.
    #[serde(default)]
    pub icons: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IconChoice {
    One(String),
    Many(Vec<String>),
}

impl IconChoice {
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        match self {
            IconChoice::One(icon) => Some(icon),
            IconChoice::Many(icons) => icons.choose(rng).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn parse_config() {
        let yaml = r##"
slack_web_hook_url: "https://hooks.slack.com/services/T00/B00/XXX"
channels:
  evalphobia: "#takuma"
  kentokento: "#kento"
account_map:
  evalphobia: takuma
icon_map:
  evalphobia: ":turtle:"
  kentokento:
    - ":squirrel:"
    - ":octopus:"
icons:
  - ":octocat:"
"##;

        let config: NotifierConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.channels["evalphobia"], "#takuma");
        assert_eq!(config.account_map["evalphobia"], "takuma");
        assert!(matches!(config.icon_map["evalphobia"], IconChoice::One(_)));
        assert!(matches!(config.icon_map["kentokento"], IconChoice::Many(_)));
        assert_eq!(config.icons, vec![":octocat:"]);
    }

    #[test]
    fn pick_single_icon() {
        let mut rng = StdRng::seed_from_u64(0);
        let choice = IconChoice::One(":turtle:".to_owned());
        assert_eq!(choice.pick(&mut rng), Some(":turtle:"));
    }

    #[test]
    fn pick_from_icon_set() {
        let mut rng = StdRng::seed_from_u64(0);
        let icons = vec![":squirrel:".to_owned(), ":octopus:".to_owned()];
        let choice = IconChoice::Many(icons.clone());
        let picked = choice.pick(&mut rng).unwrap();
        assert!(icons.iter().any(|icon| icon == picked));
    }

    #[test]
    fn pick_from_empty_set() {
        let mut rng = StdRng::seed_from_u64(0);
        let choice = IconChoice::Many(vec![]);
        assert_eq!(choice.pick(&mut rng), None);
    }
}
