//! Argument resolution for Maestro.
//!
//! ```text
//! argv → Tokenize → RawArgs → Resolve → ResolvedArgs
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.
//! Which keys exist, how they are typed and what they default to is declared
//! once in the [`FieldRegistry`].

mod coerce;
mod error;
mod options;
mod pipeline;
mod registry;
mod resolver;
mod tokenizer;

pub use error::ArgsError;
pub use options::ResolvedArgs;
pub use pipeline::{parse_args, parse_env_args};
pub use registry::{
    field_registry, normalize_key, positional_key, subcommand_keys, FieldDef, FieldKind,
    FieldRegistry, COMMAND_KEY, DEFAULT_EXTENSION, DEFAULT_METHOD, DEFAULT_PRT_METHOD,
    DEFAULT_RESOURCE, DEFAULT_RETRIES, DEFAULT_VERBOSITY, DEFAULT_WAIT, MAX_SUBCOMMAND_DEPTH,
};
pub use resolver::resolve;
pub use tokenizer::{tokenize, RawArgs};
