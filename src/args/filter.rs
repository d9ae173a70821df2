//! Flag filters — strip flags that make no sense under the supervisor.
//!
//! Only the mutable region is scanned. The last `arg_count` elements (the
//! container entrypoint and its arguments) are appended untouched, even when
//! they look like flags.

use crate::args::registry::{container_flags, pod_flags, FlagDef, FlagMatch};

/// Split `command` into the mutable flag region and the frozen payload.
///
/// `arg_count` larger than the command is clamped: everything is payload.
pub fn split_payload(command: &[String], arg_count: usize) -> (&[String], &[String]) {
    command.split_at(command.len().saturating_sub(arg_count))
}

/// Remove every occurrence of `defs` from the mutable region of `command`.
///
/// A bare flag (`--cidfile /x`) takes the next element with it, whatever
/// that element looks like. A bare flag in the last mutable position has no
/// value to take and is dropped on its own; the payload is never consumed.
pub fn filter_flags(command: &[String], arg_count: usize, defs: &[FlagDef]) -> Vec<String> {
    let (flags, payload) = split_payload(command, arg_count);
    let mut processed = Vec::with_capacity(command.len());
    let mut iter = flags.iter();

    while let Some(arg) = iter.next() {
        let hit = defs.iter().find_map(|d| match d.matches(arg) {
            FlagMatch::None => None,
            m => Some((d, m)),
        });

        match hit {
            Some((def, m)) => {
                tracing::debug!("stripping {} ({})", arg, def.description);
                if m == FlagMatch::Bare {
                    iter.next();
                }
            }
            None => processed.push(arg.clone()),
        }
    }

    processed.extend_from_slice(payload);
    processed
}

/// Removes `--pod`, `--pod-id-file` and `--infra-conmon-pidfile`.
pub fn filter_pod_flags(command: &[String], arg_count: usize) -> Vec<String> {
    filter_flags(command, arg_count, &pod_flags())
}

/// Removes `--conmon-pidfile`, `--cidfile` and `--cgroups`.
pub fn filter_common_container_flags(command: &[String], arg_count: usize) -> Vec<String> {
    filter_flags(command, arg_count, &container_flags())
}
