//! Trigger and envelope command implementations
//!
//! `userhooks trigger` pushes one created-record event through the same
//! router the server uses. `userhooks envelope` only prints what would be
//! sent.

use anyhow::{Context, Result};
use serde_json::Value;
use userhooks_protocol::{DatabaseEvent, NotificationEnvelope};

use super::build_router;

/// Arguments for the trigger command
pub struct TriggerArgs {
    /// Store path of the created record
    pub path: String,
    /// Record JSON
    pub record: String,
    /// Store path pattern to watch
    pub pattern: String,
}

/// Execute the trigger command
pub async fn execute_trigger_command(args: TriggerArgs) -> Result<()> {
    let data = parse_record(&args.record)?;
    let router = build_router(&args.pattern)?;

    println!("🚀 Firing create event at {}", args.path);

    router
        .dispatch(DatabaseEvent {
            path: args.path,
            data,
        })
        .await?;

    // Delivery failures are logged by the notifier and never fail the command.
    println!("✅ Trigger completed");
    Ok(())
}

/// Execute the envelope command
pub fn execute_envelope_command(event_type: &str, record: &str) -> Result<()> {
    println!("{}", render_envelope(event_type, record)?);
    Ok(())
}

fn render_envelope(event_type: &str, record: &str) -> Result<String> {
    let user = parse_record(record)?;
    Ok(NotificationEnvelope::new(event_type, user).to_json_pretty()?)
}

fn parse_record(record: &str) -> Result<Value> {
    serde_json::from_str(record).with_context(|| format!("Record is not valid JSON: {}", record))
}
