//! Pipeline — ties all argument processing stages together.

use crate::args::escape::escape_systemd_arguments;
use crate::args::filter::{filter_common_container_flags, filter_pod_flags};
use crate::args::normalize::{remove_detach_arg, remove_replace_arg};

/// Which unit the command is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandScope {
    /// Standalone container: only runtime-assigned container flags are stripped.
    #[default]
    Container,
    /// Container inside a pod whose own unit owns the pod flags.
    PodMember,
}

/// Selects which stages run. Escaping always runs last.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub scope: CommandScope,
    /// Drop `-d=false` / `--detach=false`.
    pub strip_detach: bool,
    /// Drop `--replace=false`.
    pub strip_replace: bool,
}

impl PipelineOptions {
    /// All normalizers enabled, container scope.
    pub fn new() -> Self {
        Self {
            scope: CommandScope::Container,
            strip_detach: true,
            strip_replace: true,
        }
    }

    pub fn with_scope(mut self, scope: CommandScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn keep_detach(mut self) -> Self {
        self.strip_detach = false;
        self
    }

    pub fn keep_replace(mut self) -> Self {
        self.strip_replace = false;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Processed command, ready for an `ExecStart=` line.
#[derive(Debug, Clone)]
pub struct ExecCommand {
    /// Escaped arguments.
    pub args: Vec<String>,
    /// Warnings produced during processing.
    pub warnings: Vec<String>,
}

impl ExecCommand {
    /// The value of `ExecStart=`: escaped arguments joined by single spaces.
    pub fn exec_start(&self) -> String {
        self.args.join(" ")
    }
}

/// Run filter → filter → normalize → escape over `raw_args`.
///
/// The last `arg_count` elements are the entrypoint and are only escaped.
/// An `arg_count` beyond the command length is clamped with a warning.
pub fn build_exec_command(
    raw_args: &[String],
    arg_count: usize,
    options: &PipelineOptions,
) -> ExecCommand {
    let mut warnings = Vec::new();
    let arg_count = if arg_count > raw_args.len() {
        tracing::warn!(
            "arg_count {} exceeds command length {}, treating whole command as payload",
            arg_count,
            raw_args.len()
        );
        warnings.push(format!(
            "arg count {} exceeds command length {}",
            arg_count,
            raw_args.len()
        ));
        raw_args.len()
    } else {
        arg_count
    };

    // Stage 1: pod-scoped filter
    let mut args = match options.scope {
        CommandScope::PodMember => {
            let filtered = filter_pod_flags(raw_args, arg_count);
            tracing::debug!("pod filter: {} -> {} args", raw_args.len(), filtered.len());
            filtered
        }
        CommandScope::Container => raw_args.to_vec(),
    };

    // Stage 2: container-scoped filter
    let before = args.len();
    args = filter_common_container_flags(&args, arg_count);
    tracing::debug!("container filter: {} -> {} args", before, args.len());

    // Stage 3: normalize
    let before = args.len();
    if options.strip_detach {
        args = remove_detach_arg(&args, arg_count);
    }
    if options.strip_replace {
        args = remove_replace_arg(&args, arg_count);
    }
    tracing::debug!("normalize: {} -> {} args", before, args.len());

    // Stage 4: escape
    let args = escape_systemd_arguments(&args);
    tracing::debug!("escape: {} args", args.len());

    ExecCommand { args, warnings }
}
