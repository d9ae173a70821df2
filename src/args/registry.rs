//! Flag registry — single source of truth for every flag the pipeline strips.

/// Which generated unit a flag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagScope {
    /// Only meaningful for the pod's own unit (infra container).
    Pod,
    /// Value is assigned at runtime and invalid under the supervisor.
    Container,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Bare long form (e.g., "--cidfile"). Consumes the following element as its value.
    pub long: &'static str,
    /// Which filter removes it.
    pub scope: FlagScope,
    /// Human-readable description (for logs).
    pub description: &'static str,
}

/// How a single argument relates to a [`FlagDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMatch {
    /// `--flag value`: the flag and the next element go together.
    Bare,
    /// `--flag=value`: self-contained.
    Inline,
    /// Not this flag.
    None,
}

impl FlagDef {
    /// Classify `arg` against this definition.
    ///
    /// `--podman` does not match `--pod`; the inline form requires the `=`.
    pub fn matches(&self, arg: &str) -> FlagMatch {
        if arg == self.long {
            return FlagMatch::Bare;
        }
        match arg.strip_prefix(self.long) {
            Some(rest) if rest.starts_with('=') => FlagMatch::Inline,
            _ => FlagMatch::None,
        }
    }
}

/// Build the complete flag registry.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        // === Pod-scoped flags (owned by the pod unit) ===
        FlagDef {
            long: "--pod",
            scope: FlagScope::Pod,
            description: "Join a pod",
        },
        FlagDef {
            long: "--pod-id-file",
            scope: FlagScope::Pod,
            description: "Read the pod ID from a file",
        },
        FlagDef {
            long: "--infra-conmon-pidfile",
            scope: FlagScope::Pod,
            description: "Write the infra container's conmon PID to a file",
        },
        // === Container-scoped flags (runtime-assigned values) ===
        FlagDef {
            long: "--conmon-pidfile",
            scope: FlagScope::Container,
            description: "Write the conmon PID to a file",
        },
        FlagDef {
            long: "--cidfile",
            scope: FlagScope::Container,
            description: "Write the container ID to a file",
        },
        FlagDef {
            long: "--cgroups",
            scope: FlagScope::Container,
            description: "Cgroup mode",
        },
    ]
}

/// Flags removed by the pod-scoped filter.
pub fn pod_flags() -> Vec<FlagDef> {
    scoped(FlagScope::Pod)
}

/// Flags removed by the container-scoped filter.
pub fn container_flags() -> Vec<FlagDef> {
    scoped(FlagScope::Container)
}

fn scoped(scope: FlagScope) -> Vec<FlagDef> {
    flag_registry()
        .into_iter()
        .filter(|d| d.scope == scope)
        .collect()
}

/// Explicit `false` spellings of boolean flags the supervisor makes redundant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedundantArg {
    ShortDetach,
    Detach,
    Replace,
}

impl RedundantArg {
    /// The literal token, matched by exact equality.
    pub fn as_str(self) -> &'static str {
        match self {
            RedundantArg::ShortDetach => "-d=false",
            RedundantArg::Detach => "--detach=false",
            RedundantArg::Replace => "--replace=false",
        }
    }
}

/// Tokens removed by the detach normalizer.
pub const DETACH_ARGS: &[RedundantArg] = &[RedundantArg::ShortDetach, RedundantArg::Detach];

/// Tokens removed by the replace normalizer.
pub const REPLACE_ARGS: &[RedundantArg] = &[RedundantArg::Replace];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pod_scope_contains_exactly_three_flags() {
        let longs: Vec<_> = pod_flags().iter().map(|d| d.long).collect();
        assert_eq!(longs, vec!["--pod", "--pod-id-file", "--infra-conmon-pidfile"]);
    }

    #[test]
    fn container_scope_contains_exactly_three_flags() {
        let longs: Vec<_> = container_flags().iter().map(|d| d.long).collect();
        assert_eq!(longs, vec!["--conmon-pidfile", "--cidfile", "--cgroups"]);
    }

    #[test]
    fn matches_bare_and_inline_forms() {
        let def = &pod_flags()[0];
        assert_eq!(def.matches("--pod"), FlagMatch::Bare);
        assert_eq!(def.matches("--pod=mypod"), FlagMatch::Inline);
        assert_eq!(def.matches("--pod="), FlagMatch::Inline);
    }

    #[test]
    fn longer_flag_sharing_prefix_does_not_match() {
        let def = &pod_flags()[0];
        assert_eq!(def.matches("--pod-id-file"), FlagMatch::None);
        assert_eq!(def.matches("--pod-id-file=/x"), FlagMatch::None);
        assert_eq!(def.matches("--podman"), FlagMatch::None);
    }

    #[test]
    fn every_flag_has_a_description() {
        for def in flag_registry() {
            assert!(!def.description.is_empty(), "{} has no description", def.long);
        }
    }

    #[test]
    fn redundant_literals() {
        let detach: Vec<_> = DETACH_ARGS.iter().map(|a| a.as_str()).collect();
        assert_eq!(detach, vec!["-d=false", "--detach=false"]);
        assert_eq!(REPLACE_ARGS[0].as_str(), "--replace=false");
    }
}
