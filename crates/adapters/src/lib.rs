//! Userhooks adapters
//!
//! This crate bridges a realtime store's "record created" events to the
//! HostedHooks webhook relay: an ingress HTTP server feeds a trigger router,
//! triggers hand records to a notifier, and the notifier POSTs the
//! notification envelope.

pub mod config;
pub mod error;
pub mod http_server;
pub mod notifier;
pub mod trigger;
pub mod webhook_router;

pub use config::HostedHooksConfig;
pub use error::NotifyError;
pub use http_server::{create_router, HttpServer, ServerConfig};
pub use notifier::{DeliveryReceipt, HostedHooksNotifier, Notifier};
pub use trigger::{CreateTrigger, UserCreatedTrigger, USERS_PATTERN};
pub use webhook_router::{RouterError, WebhookRouter};
