//! Database triggers.
//!
//! A trigger reacts to a record created at a watched path. Triggers have no
//! failure path: whatever they call is expected to absorb its own errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use userhooks_protocol::{DataSnapshot, EventContext, USER_CREATED};

use crate::notifier::Notifier;

/// Ref pattern watched by [`UserCreatedTrigger`].
pub const USERS_PATTERN: &str = "/users/{userId}";

/// Callback fired when a record is created at a watched path.
#[async_trait]
pub trait CreateTrigger: Send + Sync {
    /// Handle one creation. Returns once all side effects have completed.
    async fn on_create(&self, snapshot: DataSnapshot, context: EventContext);
}

/// Forwards newly created users to the webhook relay as `user.created`.
pub struct UserCreatedTrigger {
    notifier: Arc<dyn Notifier>,
}

impl UserCreatedTrigger {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl CreateTrigger for UserCreatedTrigger {
    async fn on_create(&self, snapshot: DataSnapshot, context: EventContext) {
        let created_user = snapshot.val().clone();
        info!(user = %created_user, "User record created");

        let user_id = context.param("userId").unwrap_or_default();
        info!(user_id, "Created user id");

        self.notifier.send_webhook_message(USER_CREATED, created_user).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::MockNotifier;
    use serde_json::json;
    use std::collections::HashMap;

    fn context_for(user_id: &str) -> EventContext {
        let mut params = HashMap::new();
        params.insert("userId".to_string(), user_id.to_string());
        EventContext::new(params)
    }

    #[tokio::test]
    async fn test_forwards_record_as_user_created() {
        let record = json!({ "name": "Alice", "email": "a@x.com" });
        let expected = record.clone();

        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_webhook_message()
            .withf(move |event_type, payload| event_type == "user.created" && *payload == expected)
            .times(1)
            .returning(|_, _| ());

        let trigger = UserCreatedTrigger::new(Arc::new(notifier));
        trigger
            .on_create(DataSnapshot::new("/users/u1", record), context_for("u1"))
            .await;
    }

    #[tokio::test]
    async fn test_non_object_records_pass_through() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_webhook_message()
            .withf(|_, payload| *payload == json!("plain"))
            .times(1)
            .returning(|_, _| ());

        let trigger = UserCreatedTrigger::new(Arc::new(notifier));
        trigger
            .on_create(DataSnapshot::new("/users/u2", json!("plain")), context_for("u2"))
            .await;
    }

    #[tokio::test]
    async fn test_missing_user_id_still_notifies() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send_webhook_message().times(1).returning(|_, _| ());

        let trigger = UserCreatedTrigger::new(Arc::new(notifier));
        trigger
            .on_create(DataSnapshot::new("/users", json!({})), EventContext::default())
            .await;
    }
}
