//! HostedHooks client configuration.
//!
//! Values are read once at startup and handed to the notifier at
//! construction. Missing credentials are allowed: they render as the literal
//! `undefined` so the request is still attempted and the failure shows up in
//! the delivery logs.

use std::time::Duration;

use tracing::warn;

/// Default HostedHooks API origin.
pub const DEFAULT_BASE_URL: &str = "https://www.hostedhooks.com";

/// Placeholder rendered for unset configuration values.
pub const UNSET_VALUE: &str = "undefined";

pub const APP_UUID_VAR: &str = "APP_UUID";
pub const API_KEY_VAR: &str = "HOSTEDHOOKS_API_KEY";
pub const BASE_URL_VAR: &str = "HOSTEDHOOKS_BASE_URL";
pub const TIMEOUT_VAR: &str = "HOSTEDHOOKS_TIMEOUT_SECS";

/// Configuration for the HostedHooks notifier.
#[derive(Clone, PartialEq, Eq)]
pub struct HostedHooksConfig {
    /// HostedHooks application identifier
    pub app_uuid: Option<String>,
    /// Bearer credential for the HostedHooks API
    pub api_key: Option<String>,
    /// API origin, without trailing slash
    pub base_url: String,
    /// Optional request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
}

impl Default for HostedHooksConfig {
    fn default() -> Self {
        Self {
            app_uuid: None,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl std::fmt::Debug for HostedHooksConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedHooksConfig")
            .field("app_uuid", &self.app_uuid)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HostedHooksConfig {
    pub fn new(app_uuid: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            app_uuid: Some(app_uuid.into()),
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Point the notifier at a different API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_uuid = lookup(APP_UUID_VAR);
        let api_key = lookup(API_KEY_VAR);

        match app_uuid.as_deref() {
            None => warn!("{} is not set; webhook URL will contain '{}'", APP_UUID_VAR, UNSET_VALUE),
            Some("") => warn!("{} is empty; webhook URL will have no app segment", APP_UUID_VAR),
            Some(_) => {}
        }
        match api_key.as_deref() {
            None | Some("") => warn!("{} is not set; requests will be unauthorized", API_KEY_VAR),
            Some(_) => {}
        }

        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    warn!("Ignoring invalid {} value '{}'", TIMEOUT_VAR, raw);
                    None
                }
            },
            None => None,
        };

        Self {
            app_uuid,
            api_key,
            base_url,
            timeout,
        }
    }

    /// Messages endpoint for the configured application.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/api/v1/apps/{}/messages",
            self.base_url,
            self.app_uuid.as_deref().unwrap_or(UNSET_VALUE)
        )
    }

    /// Value for the `Authorization` header.
    pub fn bearer_token(&self) -> String {
        format!("Bearer {}", self.api_key.as_deref().unwrap_or(UNSET_VALUE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_messages_url_embeds_app_uuid() {
        let config = HostedHooksConfig::new("app-123", "key");
        assert_eq!(
            config.messages_url(),
            "https://www.hostedhooks.com/api/v1/apps/app-123/messages"
        );
    }

    #[test]
    fn test_unset_values_render_as_undefined() {
        let config = HostedHooksConfig::from_lookup(lookup_from(&[]));

        assert!(config.messages_url().contains("/apps/undefined/messages"));
        assert_eq!(config.bearer_token(), "Bearer undefined");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_empty_values_are_sent_as_is() {
        let config =
            HostedHooksConfig::from_lookup(lookup_from(&[(APP_UUID_VAR, ""), (API_KEY_VAR, "")]));

        assert_eq!(
            config.messages_url(),
            "https://www.hostedhooks.com/api/v1/apps//messages"
        );
        assert_eq!(config.bearer_token(), "Bearer ");
    }

    #[test]
    fn test_from_lookup_reads_all_values() {
        let config = HostedHooksConfig::from_lookup(lookup_from(&[
            (APP_UUID_VAR, "abc"),
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://localhost:9999/"),
            (TIMEOUT_VAR, "5"),
        ]));

        assert_eq!(config.messages_url(), "http://localhost:9999/api/v1/apps/abc/messages");
        assert_eq!(config.bearer_token(), "Bearer secret");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_timeout_is_ignored() {
        let config = HostedHooksConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = HostedHooksConfig::new("abc", "super-secret");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("abc"));
    }
}
