//! Data handed to a trigger when a record is created.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound "record created" event as delivered to the ingress endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseEvent {
    /// Concrete store path the record was written at, e.g. `/users/u1`
    pub path: String,
    /// The created record
    #[serde(default)]
    pub data: Value,
}

/// The newly created record.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSnapshot {
    path: String,
    value: Value,
}

impl DataSnapshot {
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }

    /// The record's value.
    pub fn val(&self) -> &Value {
        &self.value
    }

    /// Store path the record lives at.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Contextual parameters for a trigger invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    /// Wildcard values captured from the watched pattern
    pub params: HashMap<String, String>,
}

impl EventContext {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Look up a captured path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
