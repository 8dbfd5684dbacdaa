//! Extraction and rewriting of `@handle` tokens in GitHub-flavored text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[a-zA-Z0-9_-]+").expect("mention regex is valid"));

/// Returns every mentioned login in `text`, in order of appearance and with
/// the leading `@` stripped. Duplicates are kept, deduplication happens once
/// the logins land in a target set.
pub fn extract_mentions(text: &str) -> Vec<String> {
    MENTION
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_owned())
        .collect()
}

/// Rewrites every `@handle` in `text` to the matching Slack name from
/// `aliases` (or leaves it alone when unmapped). Only the mention of
/// `recipient` keeps its `@`, so the delivered message pings exactly the
/// person it was built for. The recipient is matched on the GitHub login,
/// before aliasing.
pub fn translate_handles(text: &str, recipient: &str, aliases: &HashMap<String, String>) -> String {
    MENTION
        .replace_all(text, |caps: &Captures| {
            let login = &caps[0][1..];
            let name = aliases.get(login).map(String::as_str).unwrap_or(login);
            if login == recipient {
                format!("@{}", name)
            } else {
                name.to_owned()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_basic_mentions() {
        assert_eq!(
            extract_mentions("@a @b-c @d_1 plain"),
            vec!["a", "b-c", "d_1"]
        );
    }

    #[test]
    fn extract_keeps_duplicates_in_order() {
        assert_eq!(
            extract_mentions("@bob hey @alice, @bob again"),
            vec!["bob", "alice", "bob"]
        );
    }

    #[test]
    fn extract_ignores_bare_at_signs() {
        assert!(extract_mentions("mail me @ home, or @@!").is_empty());
        assert!(extract_mentions("").is_empty());
    }

    fn aliases() -> HashMap<String, String> {
        [("evalphobia".to_owned(), "takuma".to_owned())]
            .into_iter()
            .collect()
    }

    #[test]
    fn translate_aliases_and_pings_the_recipient() {
        assert_eq!(
            translate_handles("aaa @evalphobia bbb", "evalphobia", &aliases()),
            "aaa @takuma bbb"
        );
    }

    #[test]
    fn translate_keeps_unmapped_recipient_mention() {
        assert_eq!(
            translate_handles("ping @kentokento", "kentokento", &aliases()),
            "ping @kentokento"
        );
    }

    #[test]
    fn translate_demotes_other_mentions() {
        assert_eq!(
            translate_handles("@evalphobia and @kentokento", "kentokento", &aliases()),
            "takuma and @kentokento"
        );
    }
}
