// Copyright 2026 Syncmark Contributors
// SPDX-License-Identifier: Apache-2.0

//! Environment-driven deployment settings.
//!
//! Every setting maps to one `SYNCMARK_`-prefixed environment variable.
//! Unset variables fall back to documented defaults; set-but-unparseable
//! values are rejected rather than silently skipped.

use syncmark_core::{Error, Result, TimingField};
use syncmark_projector::{ProjectorConfig, RevisionOrder, DEFAULT_SYNC_TYPES, DEFAULT_WINDOW};

/// Feed URL variable.
pub const ENV_FEED_URL: &str = "SYNCMARK_FEED_URL";
/// Timing-field selector variable (`executionTime` or `average`).
pub const ENV_TIMING_FIELD: &str = "SYNCMARK_TIMING_FIELD";
/// Revision-order policy variable (`reverse-insertion` or `lexicographic`).
pub const ENV_REVISION_ORDER: &str = "SYNCMARK_REVISION_ORDER";
/// Latest-window size variable.
pub const ENV_WINDOW: &str = "SYNCMARK_WINDOW";
/// Comma-separated sync-type list variable.
pub const ENV_SYNC_TYPES: &str = "SYNCMARK_SYNC_TYPES";

/// Default benchmarks feed URL.
pub const DEFAULT_FEED_URL: &str =
    "https://syncmark.github.io/syncmark/benchmarks/benchmarks.json";

/// Deployment settings for the feed and the projector.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    /// URL of the benchmarks feed document.
    pub feed_url: String,
    /// Which timing field this feed generation carries.
    pub timing_field: TimingField,
    /// Revision display-order policy.
    pub order: RevisionOrder,
    /// Latest-window size in revisions.
    pub window: usize,
    /// Sync-type feed keys to project.
    pub sync_types: Vec<String>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timing_field: TimingField::default(),
            order: RevisionOrder::default(),
            window: DEFAULT_WINDOW,
            sync_types: DEFAULT_SYNC_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FeedSettings {
    /// Load settings from `SYNCMARK_`-prefixed environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an injected variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_FEED_URL) {
            settings.feed_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMING_FIELD) {
            settings.timing_field = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_REVISION_ORDER) {
            settings.order = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_WINDOW) {
            settings.window = raw.parse().map_err(|_| {
                Error::invalid_input(format!(
                    "window must be a non-negative integer, got: {raw}"
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_SYNC_TYPES) {
            settings.sync_types = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
        }

        Ok(settings)
    }

    /// Projector configuration derived from these settings.
    pub fn projector_config(&self) -> ProjectorConfig {
        ProjectorConfig {
            sync_types: self.sync_types.clone(),
            timing_field: self.timing_field,
            order: self.order,
            window: self.window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = FeedSettings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, FeedSettings::default());
        assert_eq!(settings.window, DEFAULT_WINDOW);
        assert_eq!(settings.feed_url, DEFAULT_FEED_URL);
    }

    #[test]
    fn test_overrides_are_applied() {
        let settings = FeedSettings::from_lookup(|key| match key {
            ENV_FEED_URL => Some("https://example.test/benchmarks.json".to_string()),
            ENV_TIMING_FIELD => Some("average".to_string()),
            ENV_REVISION_ORDER => Some("lexicographic".to_string()),
            ENV_WINDOW => Some("25".to_string()),
            ENV_SYNC_TYPES => Some("productSync, typeSync".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(settings.feed_url, "https://example.test/benchmarks.json");
        assert_eq!(settings.timing_field, TimingField::Average);
        assert_eq!(settings.order, RevisionOrder::Lexicographic);
        assert_eq!(settings.window, 25);
        assert_eq!(settings.sync_types, vec!["productSync", "typeSync"]);
    }

    #[test]
    fn test_unparseable_window_is_rejected() {
        let err = FeedSettings::from_lookup(|key| match key {
            ENV_WINDOW => Some("-3".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_timing_field_is_rejected() {
        let err = FeedSettings::from_lookup(|key| match key {
            ENV_TIMING_FIELD => Some("median".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_projector_config_mirrors_settings() {
        let settings = FeedSettings {
            window: 5,
            timing_field: TimingField::Average,
            ..FeedSettings::default()
        };
        let config = settings.projector_config();
        assert_eq!(config.window, 5);
        assert_eq!(config.timing_field, TimingField::Average);
        assert_eq!(config.sync_types, settings.sync_types);
    }
}
