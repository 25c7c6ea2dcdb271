//! Watcher configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the ticket watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Enable/disable the watcher.
    /// When disabled, tickets stay untriaged until it is turned on.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// How often to run the enrichment cycle (seconds, must be positive).
    #[serde(default = "default_enrich_interval")]
    pub enrich_interval_secs: u64,

    /// How often to run the digest cycle (seconds, must be positive).
    /// The two cycles tick independently; they are only mutually exclusive
    /// in store access.
    #[serde(default = "default_digest_interval")]
    pub digest_interval_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_enrich_interval() -> u64 {
    10
}

fn default_digest_interval() -> u64 {
    30
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            enrich_interval_secs: default_enrich_interval(),
            digest_interval_secs: default_digest_interval(),
        }
    }
}
