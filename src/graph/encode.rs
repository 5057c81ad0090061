//! Node identifiers for the DOT output.
//!
//! Upstream ids are UUID-like strings. DOT node names must be plain
//! alphanumeric tokens that never start with a digit or clash with a
//! keyword, so ids are stripped of hyphens and given a fixed prefix.

use serde::Serialize;
use std::fmt;

/// Prefix applied to every encoded id.
pub const ID_PREFIX: &str = "uuid";

/// Key of the grouping that holds entities without a package id.
pub const DEFAULT_PACKAGE: &str = "default";

/// A DOT-safe token derived from an upstream unique id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EncodedId(String);

impl EncodedId {
    /// Encode an upstream id.
    ///
    /// Hyphens are dropped. Any other character outside `[A-Za-z0-9]` is
    /// written as `_` followed by its code point as six lowercase hex
    /// digits, so ids that differ outside hyphen placement stay distinct.
    pub fn encode(id: &str) -> Self {
        let mut token = String::with_capacity(ID_PREFIX.len() + id.len());
        token.push_str(ID_PREFIX);
        for ch in id.chars() {
            match ch {
                '-' => {}
                c if c.is_ascii_alphanumeric() => token.push(c),
                c => {
                    token.push('_');
                    token.push_str(&format!("{:06x}", c as u32));
                }
            }
        }
        Self(token)
    }

    /// The id of the default grouping.
    pub fn default_package() -> Self {
        Self(DEFAULT_PACKAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
