//! CLI command modules

pub mod serve;
pub mod trigger;

pub use serve::{execute_serve_command, ServeArgs};
pub use trigger::{execute_envelope_command, execute_trigger_command, TriggerArgs};

use std::sync::Arc;

use anyhow::{Context, Result};
use userhooks_adapters::{HostedHooksConfig, HostedHooksNotifier, UserCreatedTrigger, WebhookRouter};
use userhooks_protocol::RefPattern;

/// Initialize tracing; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("userhooks=debug,info"));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// Build the trigger router from environment configuration.
pub fn build_router(pattern: &str) -> Result<WebhookRouter> {
    let pattern = RefPattern::parse(pattern).context("Invalid watch pattern")?;

    let config = HostedHooksConfig::from_env();
    let notifier = HostedHooksNotifier::new(config).context("Failed to create notifier")?;
    let trigger = UserCreatedTrigger::new(Arc::new(notifier));

    Ok(WebhookRouter::new().register(pattern, Arc::new(trigger)))
}
