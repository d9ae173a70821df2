//! Unit-file leaf utilities: restart policies, the header block and stop timeouts.
//!
//! None of these depend on the argument pipeline.

mod error;
mod header;
mod restart;

pub use error::UnitError;
pub use header::{render_header, HeaderInfo};
pub use restart::{validate_restart_policy, RestartPolicy, RESTART_POLICIES};

/// Minimal stop timeout for generated units, in seconds.
///
/// Once exceeded, the supervisor kills the service's processes and cleans
/// up its cgroups.
pub const MIN_TIMEOUT_STOP_SEC: u32 = 60;

/// `TimeoutStopSec=` for a container stopped with `stop_timeout` seconds of grace.
///
/// The runtime's own stop timeout runs inside the supervisor's, so the
/// supervisor waits `min` seconds on top of it.
pub fn timeout_stop_sec(min: u32, stop_timeout: u32) -> u32 {
    min.saturating_add(stop_timeout)
}
