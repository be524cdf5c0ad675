//! Engine configuration: the handful of knobs the dispatcher and logging
//! init need. Loading, merging and validating configuration from files, env
//! vars or a CLI is out of scope; this only defines the shape the embedding
//! process is expected to hand in.

use serde::{Deserialize, Serialize};

fn default_log_level() -> String {
    "info".to_owned()
}

/// Configuration owned by the query engine itself, as opposed to the three
/// stores it reads from (each owns its own configuration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A `tracing-subscriber` `EnvFilter` directive, e.g. `"info"` or
    /// `"ledger_query_engine=debug,warn"`.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_level_is_info() {
        assert_eq!(EngineConfig::default().log_level, "info");
    }

    #[test]
    fn deserializes_from_partial_json() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
