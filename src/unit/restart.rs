//! Restart policies accepted by the supervisor.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::unit::error::UnitError;

/// A `Restart=` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    No,
    OnSuccess,
    OnFailure,
    OnAbnormal,
    OnWatchdog,
    OnAbort,
    Always,
}

/// Every valid policy, in the supervisor's documented order.
pub const RESTART_POLICIES: &[RestartPolicy] = &[
    RestartPolicy::No,
    RestartPolicy::OnSuccess,
    RestartPolicy::OnFailure,
    RestartPolicy::OnAbnormal,
    RestartPolicy::OnWatchdog,
    RestartPolicy::OnAbort,
    RestartPolicy::Always,
];

impl RestartPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RestartPolicy::No => "no",
            RestartPolicy::OnSuccess => "on-success",
            RestartPolicy::OnFailure => "on-failure",
            RestartPolicy::OnAbnormal => "on-abnormal",
            RestartPolicy::OnWatchdog => "on-watchdog",
            RestartPolicy::OnAbort => "on-abort",
            RestartPolicy::Always => "always",
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestartPolicy {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RESTART_POLICIES
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnitError::InvalidRestartPolicy(s.to_string()))
    }
}

/// Check that the user-provided policy is valid.
///
/// Case-sensitive exact match; no trimming.
pub fn validate_restart_policy(restart: &str) -> Result<RestartPolicy, UnitError> {
    restart.parse()
}
