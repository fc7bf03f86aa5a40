//! Resolver: [`RawArgs`] → [`ResolvedArgs`].

use crate::args::coerce;
use crate::args::error::ArgsError;
use crate::args::options::ResolvedArgs;
use crate::args::registry::{subcommand_keys, FieldKind, FieldRegistry};
use crate::args::tokenizer::RawArgs;

/// Resolve a raw map against the registry.
///
/// Builds the result locally and only hands it out once every field has
/// been written, so a coercion failure never leaks a partial value.
pub fn resolve(raw: &RawArgs, registry: &FieldRegistry) -> Result<ResolvedArgs, ArgsError> {
    let mut resolved = ResolvedArgs::default();

    // Contiguous prefix only: the first empty slot ends the path.
    resolved.subcommands = subcommand_keys()
        .iter()
        .map_while(|key| raw.value(key).filter(|s| !s.is_empty()))
        .map(String::from)
        .collect();

    for def in registry.defs() {
        let Some(key) = def.key else { continue };

        match def.kind {
            FieldKind::Text(set) => set(&mut resolved, raw.value(key).map(String::from)),
            FieldKind::TextOr { default, set } => {
                set(&mut resolved, raw.value(key).unwrap_or(default).to_string())
            }
            FieldKind::Integer { default, set } => {
                let value = match raw.get(key) {
                    None => default,
                    Some(text) => coerce::integer(key, text.unwrap_or_default())?,
                };
                set(&mut resolved, value);
            }
            FieldKind::Switch(set) => set(&mut resolved, raw.contains(key)),
            FieldKind::List(set) => set(&mut resolved, coerce::list(raw.value(key))),
            FieldKind::Slot | FieldKind::Derived => {}
        }
    }

    for (key, value) in raw.iter() {
        if registry.consumes(key) {
            continue;
        }
        tracing::debug!(key, "Unrecognized option kept in overflow");
        resolved
            .overflow
            .insert(key.to_string(), value.unwrap_or_default().to_string());
    }

    Ok(resolved)
}
