use anyhow::anyhow;
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    serde::json::Json,
    Request, State,
};
use tracing::{debug, trace, warn};

use crate::{
    bot::classifier,
    webhooks::{Event, EventSender},
};

pub mod events;
pub use events::GitHubEvent;

const X_GITHUB_EVENT: &str = "X-GitHub-Event";

/// Value of the [`X_GITHUB_EVENT`] header, the event-type attribute of the
/// webhook envelope.
pub struct GitHubEventType(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for GitHubEventType {
    type Error = anyhow::Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let event_types = request.headers().get(X_GITHUB_EVENT).collect::<Vec<_>>();
        if event_types.len() != 1 {
            return Outcome::Error((
                Status::BadRequest,
                anyhow!("request header needs exactly one event type"),
            ));
        }

        Outcome::Success(GitHubEventType(event_types[0].to_owned()))
    }
}

#[rocket::post("/api/webhooks/github", format = "json", data = "<payload>")]
pub fn github_webhook(
    event_type: GitHubEventType,
    payload: Json<serde_json::Value>,
    sender: &State<EventSender>,
) -> &'static str {
    trace!("received event `{}` on GitHub webhook endpoint", event_type.0);

    if !classifier::is_admissible_event(&event_type.0) {
        debug!("event type `{}` isn't announced, skipping", event_type.0);
        return "OK";
    }

    match GitHubEvent::from_payload(&event_type.0, payload.into_inner()) {
        Ok(Some(event)) => sender
            .0
            .send(Event::GitHub(event))
            .expect("mspc channel was closed / dropped"),
        Ok(None) => debug!("event type `{}` isn't announced, skipping", event_type.0),
        // a payload we can't make sense of means nobody gets notified, not a failure
        Err(e) => warn!("couldn't parse `{}` payload: {}", event_type.0, e),
    }

    "OK"
}
