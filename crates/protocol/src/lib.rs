//! Userhooks protocol types
//!
//! This crate defines the wire types shared by the trigger adapters and the
//! CLI: the notification envelope sent to HostedHooks, the data snapshot and
//! event context handed to triggers, and the ref patterns triggers watch.

pub mod envelope;
pub mod errors;
pub mod path;
pub mod snapshot;

pub use envelope::{EnvelopeData, NotificationEnvelope, ENVELOPE_VERSION, USER_CREATED};
pub use errors::ProtocolError;
pub use path::RefPattern;
pub use snapshot::{DataSnapshot, DatabaseEvent, EventContext};
