//! Resource identifier validation.
//!
//! Remote nodes are addressed by a 22-character id drawn from
//! `[a-zA-Z0-9_-]`. Ids are checked for shape only; they are never decoded.

use std::fmt;
use std::str::FromStr;

/// Length of every valid node id.
pub const NODE_ID_LEN: usize = 22;

/// Returns true iff `id` is present, exactly 22 characters long and made of
/// ASCII letters, digits, `_` or `-`. Accepts `&str` or `Option<&str>`.
pub fn is_valid_id<'a>(id: impl Into<Option<&'a str>>) -> bool {
    match id.into() {
        Some(s) => {
            s.len() == NODE_ID_LEN
                && s
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid node id {0:?}: expected 22 characters from [a-zA-Z0-9_-]")]
pub struct InvalidNodeId(pub String);

/// A node id that has passed [`is_valid_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn parse(s: &str) -> Result<Self, InvalidNodeId> {
        if is_valid_id(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidNodeId(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for NodeId {
    type Err = InvalidNodeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
