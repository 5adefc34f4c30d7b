//! Trigger routing.
//!
//! Maps concrete store paths onto registered triggers. The first
//! registration whose pattern matches wins.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use userhooks_protocol::{DataSnapshot, DatabaseEvent, EventContext, RefPattern};

use crate::trigger::CreateTrigger;

/// Routing errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouterError {
    #[error("No trigger watches path: {path}")]
    NoMatchingTrigger { path: String },
}

struct Registration {
    pattern: RefPattern,
    trigger: Arc<dyn CreateTrigger>,
}

/// Dispatches "record created" events to triggers.
#[derive(Default)]
pub struct WebhookRouter {
    registrations: Vec<Registration>,
}

impl WebhookRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch `pattern` with `trigger`.
    pub fn register(mut self, pattern: RefPattern, trigger: Arc<dyn CreateTrigger>) -> Self {
        debug!(pattern = %pattern, "Registered trigger");
        self.registrations.push(Registration { pattern, trigger });
        self
    }

    /// Watched patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &RefPattern> {
        self.registrations.iter().map(|r| &r.pattern)
    }

    /// Run the trigger watching `event.path`, waiting for it to finish.
    pub async fn dispatch(&self, event: DatabaseEvent) -> Result<(), RouterError> {
        let matched = self
            .registrations
            .iter()
            .find_map(|r| r.pattern.matches(&event.path).map(|params| (r, params)));

        let Some((registration, params)) = matched else {
            warn!(path = %event.path, "Dropping event for unwatched path");
            return Err(RouterError::NoMatchingTrigger { path: event.path });
        };

        debug!(path = %event.path, pattern = %registration.pattern, "Dispatching create event");

        let snapshot = DataSnapshot::new(event.path, event.data);
        registration
            .trigger
            .on_create(snapshot, EventContext::new(params))
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTrigger {
        calls: Mutex<Vec<(String, Value, EventContext)>>,
    }

    #[async_trait]
    impl CreateTrigger for RecordingTrigger {
        async fn on_create(&self, snapshot: DataSnapshot, context: EventContext) {
            self.calls.lock().unwrap().push((
                snapshot.path().to_string(),
                snapshot.val().clone(),
                context,
            ));
        }
    }

    fn event(path: &str, data: Value) -> DatabaseEvent {
        DatabaseEvent {
            path: path.to_string(),
            data,
        }
    }

    #[tokio::test]
    async fn test_dispatches_to_matching_trigger() {
        let users = Arc::new(RecordingTrigger::default());
        let router = WebhookRouter::new()
            .register(RefPattern::parse("/users/{userId}").unwrap(), users.clone());

        router
            .dispatch(event("/users/u1", json!({ "name": "Alice" })))
            .await
            .unwrap();

        let calls = users.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/users/u1");
        assert_eq!(calls[0].1, json!({ "name": "Alice" }));
        assert_eq!(calls[0].2.param("userId"), Some("u1"));
    }

    #[tokio::test]
    async fn test_first_registration_wins() {
        let first = Arc::new(RecordingTrigger::default());
        let second = Arc::new(RecordingTrigger::default());
        let router = WebhookRouter::new()
            .register(RefPattern::parse("/users/{userId}").unwrap(), first.clone())
            .register(RefPattern::parse("/users/{id}").unwrap(), second.clone());

        router.dispatch(event("/users/u1", json!({}))).await.unwrap();

        assert_eq!(first.calls.lock().unwrap().len(), 1);
        assert!(second.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unmatched_path_is_rejected() {
        let users = Arc::new(RecordingTrigger::default());
        let router = WebhookRouter::new()
            .register(RefPattern::parse("/users/{userId}").unwrap(), users.clone());

        let err = router
            .dispatch(event("/accounts/a1", json!({})))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RouterError::NoMatchingTrigger {
                path: "/accounts/a1".to_string()
            }
        );
        assert!(users.calls.lock().unwrap().is_empty());
    }
}
