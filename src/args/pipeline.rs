//! Pipeline: ties tokenizer and resolver together.

use crate::args::error::ArgsError;
use crate::args::options::ResolvedArgs;
use crate::args::registry::field_registry;
use crate::args::resolver::resolve;
use crate::args::tokenizer::tokenize;

/// Resolve raw process arguments (program name excluded).
///
/// This is the main entry point for the argument pipeline. The call is a
/// pure function of `raw_args`: the same input always yields the same
/// result.
pub fn parse_args(raw_args: &[String]) -> Result<ResolvedArgs, ArgsError> {
    let registry = field_registry();

    // Stage 1: Tokenize
    let raw = tokenize(raw_args, registry)?;
    tracing::debug!(tokens = raw_args.len(), keys = raw.len(), "Tokenized arguments");

    // Stage 2: Resolve
    let resolved = resolve(&raw, registry)?;
    tracing::debug!(
        command = %resolved.command_path().join(" "),
        overflow = resolved.overflow.len(),
        "Resolved arguments"
    );

    Ok(resolved)
}

/// Resolve the arguments of the current process.
pub fn parse_env_args() -> Result<ResolvedArgs, ArgsError> {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&raw_args)
}
