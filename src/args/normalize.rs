//! Normalizer — drop explicit `=false` spellings the supervisor makes redundant.

use crate::args::filter::split_payload;
use crate::args::registry::{RedundantArg, DETACH_ARGS, REPLACE_ARGS};

/// Return `args` without any element equal to `arg`.
pub fn remove_arg(arg: &str, args: &[String]) -> Vec<String> {
    args.iter().filter(|a| a.as_str() != arg).cloned().collect()
}

/// Removes `-d=false` and `--detach=false` from the mutable region.
pub fn remove_detach_arg(args: &[String], arg_count: usize) -> Vec<String> {
    remove_redundant(args, arg_count, DETACH_ARGS)
}

/// Removes `--replace=false` from the mutable region.
pub fn remove_replace_arg(args: &[String], arg_count: usize) -> Vec<String> {
    remove_redundant(args, arg_count, REPLACE_ARGS)
}

fn remove_redundant(args: &[String], arg_count: usize, tokens: &[RedundantArg]) -> Vec<String> {
    // The entrypoint may legitimately carry the same token.
    let (flags, payload) = split_payload(args, arg_count);
    let mut out = tokens
        .iter()
        .fold(flags.to_vec(), |acc, t| remove_arg(t.as_str(), &acc));
    out.extend_from_slice(payload);
    out
}
