use serde::{Deserialize, Serialize};

use crate::unit::MIN_TIMEOUT_STOP_SEC;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Default settings for generated units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// `Restart=` value (default: "on-failure").
    #[serde(default = "default_restart_policy")]
    pub restart_policy: String,
    /// Container stop timeout in seconds (default: 10).
    #[serde(default = "default_stop_timeout")]
    pub stop_timeout: u32,
    /// Added to the stop timeout for `TimeoutStopSec=` (default: 60).
    #[serde(default = "default_min_timeout_stop_sec")]
    pub min_timeout_stop_sec: u32,
    /// Omit the autogenerated comment block (default: false).
    #[serde(default)]
    pub no_header: bool,
    /// Version shown in the autogenerated comment.
    #[serde(default = "default_podman_version")]
    pub podman_version: String,
}

/// Container storage locations, rendered into `RequiresMountsFor=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_graph_root")]
    pub graph_root: String,
    #[serde(default = "default_run_root")]
    pub run_root: String,
}

fn default_restart_policy() -> String {
    "on-failure".to_string()
}

fn default_stop_timeout() -> u32 {
    10
}

fn default_min_timeout_stop_sec() -> u32 {
    MIN_TIMEOUT_STOP_SEC
}

fn default_podman_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_graph_root() -> String {
    "/var/lib/containers/storage".to_string()
}

fn default_run_root() -> String {
    "/run/containers/storage".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            restart_policy: default_restart_policy(),
            stop_timeout: default_stop_timeout(),
            min_timeout_stop_sec: default_min_timeout_stop_sec(),
            no_header: false,
            podman_version: default_podman_version(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            graph_root: default_graph_root(),
            run_root: default_run_root(),
        }
    }
}
