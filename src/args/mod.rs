//! Argument handling pipeline for generated unit files.
//!
//! A container-runtime command line goes through four stages before it can be
//! written as an `ExecStart=` value:
//!
//! ```text
//! Raw args → Pod filter → Container filter → Normalize → Escape → ExecCommand
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently. The
//! last `arg_count` arguments (the entrypoint) pass through the first three
//! stages untouched.

mod escape;
mod filter;
mod normalize;
mod pipeline;
mod registry;
#[cfg(test)]
mod test_log;

pub use escape::{
    escape_systemd_argument, escape_systemd_arguments, is_printable, quote_c_string,
    unescape_systemd_argument, UnescapeError,
};
pub use filter::{filter_common_container_flags, filter_flags, filter_pod_flags, split_payload};
pub use normalize::{remove_arg, remove_detach_arg, remove_replace_arg};
pub use pipeline::{build_exec_command, CommandScope, ExecCommand, PipelineOptions};
pub use registry::{
    container_flags, flag_registry, pod_flags, FlagDef, FlagMatch, FlagScope, RedundantArg,
    DETACH_ARGS, REPLACE_ARGS,
};
