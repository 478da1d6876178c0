// Copyright 2026 Syncmark Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the Syncmark crates.
//!
//! The core distinguishes three failure classes: resolving a revision id the
//! history does not contain, configuration input that fails to parse, and a
//! feed document that fails to deserialize. A sync-type or operation-mix
//! sub-record missing from a known revision is deliberately NOT an error;
//! projection fills those positions with zero.

use thiserror::Error;

/// Result alias used throughout the Syncmark crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the core data model and the projector.
#[derive(Debug, Error)]
pub enum Error {
    /// A revision id was resolved against a history that does not contain it.
    ///
    /// Fatal for the projection call that hit it: substituting a partial row
    /// would desynchronize series lengths.
    #[error("unknown revision: {0}")]
    RevisionNotFound(String),

    /// Configuration or caller input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The feed document could not be deserialized.
    #[error("malformed feed document: {0}")]
    MalformedFeed(#[from] serde_json::Error),
}

impl Error {
    /// Create an [`Error::InvalidInput`] from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create an [`Error::RevisionNotFound`] for the given id.
    pub fn revision_not_found(revision: impl Into<String>) -> Self {
        Error::RevisionNotFound(revision.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_not_found_display() {
        let err = Error::revision_not_found("v1.2.3");
        assert_eq!(err.to_string(), "unknown revision: v1.2.3");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("window must be a number");
        assert_eq!(err.to_string(), "invalid input: window must be a number");
    }

    #[test]
    fn test_malformed_feed_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(parse_err);
        assert!(err.to_string().starts_with("malformed feed document"));
    }
}
