//! Ref patterns for watched store paths.
//!
//! A pattern such as `/users/{userId}` is a list of literal and wildcard
//! segments. Matching a concrete path yields the wildcard values by name.

use std::collections::HashMap;
use std::fmt;

use crate::errors::ProtocolError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Wildcard(String),
}

/// A parsed watch path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RefPattern {
    /// Parse a pattern like `/users/{userId}`.
    pub fn parse(pattern: &str) -> Result<Self, ProtocolError> {
        let invalid = |reason: &str| ProtocolError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut names: Vec<&str> = Vec::new();

        for part in split_path(pattern) {
            if let Some(inner) = part.strip_prefix('{') {
                let name = inner
                    .strip_suffix('}')
                    .ok_or_else(|| invalid("unbalanced braces"))?;
                if name.is_empty() {
                    return Err(invalid("empty wildcard name"));
                }
                if name.contains('{') || name.contains('}') {
                    return Err(invalid("unbalanced braces"));
                }
                if names.contains(&name) {
                    return Err(invalid(&format!("duplicate wildcard '{}'", name)));
                }
                names.push(name);
                segments.push(Segment::Wildcard(name.to_string()));
            } else if part.contains('{') || part.contains('}') {
                return Err(invalid("unbalanced braces"));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Wildcard names in declaration order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Wildcard(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a concrete path, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = split_path(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Wildcard(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }

        Some(params)
    }
}

impl fmt::Display for RefPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for RefPattern {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}
