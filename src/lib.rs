//! Maestro argument resolution.
//!
//! Turns a process argument vector into a [`ResolvedArgs`](args::ResolvedArgs)
//! with typed fields, declared defaults and an overflow map for options no
//! field claims.

pub mod args;
pub mod config;
pub mod logging;
