//! Field registry: single source of truth for every declared option.
//!
//! Each entry ties a field identifier (`AccessToken`) to the key that feeds it
//! (`--access-token`), how the raw value is coerced, and the setter that
//! writes it into [`ResolvedArgs`]. Overflow routing asks this table, not the
//! struct, whether a key is known.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::args::options::ResolvedArgs;

pub const DEFAULT_VERBOSITY: i32 = 2;
pub const DEFAULT_PRT_METHOD: i32 = 0;
pub const DEFAULT_RETRIES: i32 = 10;
pub const DEFAULT_WAIT: i32 = 3;
pub const DEFAULT_METHOD: i32 = 0;
pub const DEFAULT_EXTENSION: &str = "Microsoft_AAD_IAM";
pub const DEFAULT_RESOURCE: &str = "microsoft.graph";

/// Deepest subcommand path the resolver walks.
pub const MAX_SUBCOMMAND_DEPTH: usize = 5;

/// Key of the first positional token.
pub const COMMAND_KEY: &str = "command";

const SUBCOMMAND_KEYS: [&str; MAX_SUBCOMMAND_DEPTH] = [
    "subcommand1",
    "subcommand2",
    "subcommand3",
    "subcommand4",
    "subcommand5",
];

const SUBCOMMAND_IDENTS: [&str; MAX_SUBCOMMAND_DEPTH] = [
    "Subcommand1",
    "Subcommand2",
    "Subcommand3",
    "Subcommand4",
    "Subcommand5",
];

/// Raw map key for the positional token at `index` (0 is the command).
pub fn positional_key(index: usize) -> String {
    match index {
        0 => COMMAND_KEY.to_string(),
        n => format!("subcommand{n}"),
    }
}

/// Subcommand slot keys in walk order.
pub fn subcommand_keys() -> &'static [&'static str] {
    &SUBCOMMAND_KEYS
}

/// How a raw value becomes a typed field.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// Optional string, `None` when the key is absent.
    Text(fn(&mut ResolvedArgs, Option<String>)),
    /// String with a fallback used when the key is absent.
    TextOr {
        default: &'static str,
        set: fn(&mut ResolvedArgs, String),
    },
    /// Base-10 integer; absent uses `default`, anything unparseable fails.
    Integer {
        default: i32,
        set: fn(&mut ResolvedArgs, i32),
    },
    /// True iff the key is present. Never consumes a following token.
    Switch(fn(&mut ResolvedArgs, bool)),
    /// Comma-separated list.
    List(fn(&mut ResolvedArgs, Vec<String>)),
    /// Positional subcommand slot, collected by the subcommand walk.
    Slot,
    /// Read-only field populated from another key.
    Derived,
}

/// A single declared field.
#[derive(Clone, Copy)]
pub struct FieldDef {
    /// Field identifier in key-normalized form (e.g., "AccessToken").
    pub ident: &'static str,
    /// Raw map key that feeds the field. `None` for read-only fields.
    pub key: Option<&'static str>,
    pub kind: FieldKind,
    /// Human-readable description (for usage text).
    pub description: &'static str,
}

impl FieldDef {
    /// Whether user input may write this field.
    pub fn is_writable(&self) -> bool {
        self.key.is_some() && !matches!(self.kind, FieldKind::Derived)
    }

    /// Whether this field claims the raw key `raw` exactly.
    pub fn consumes(&self, raw: &str) -> bool {
        self.is_writable() && self.key == Some(raw)
    }

    fn is_flag(&self) -> bool {
        self.key.is_some_and(|k| k.starts_with("--"))
    }
}

/// Indexed collection of [`FieldDef`]s.
pub struct FieldRegistry {
    defs: Vec<FieldDef>,
    by_ident: HashMap<&'static str, usize>,
    by_key: HashMap<&'static str, usize>,
}

impl FieldRegistry {
    fn new(defs: Vec<FieldDef>) -> Self {
        let by_ident = defs
            .iter()
            .enumerate()
            .map(|(i, def)| (def.ident, i))
            .collect();
        let by_key = defs
            .iter()
            .enumerate()
            .filter(|(_, def)| def.is_writable())
            .filter_map(|(i, def)| def.key.map(|key| (key, i)))
            .collect();
        Self {
            defs,
            by_ident,
            by_key,
        }
    }

    /// All declared fields in declaration order.
    pub fn defs(&self) -> &[FieldDef] {
        &self.defs
    }

    /// Find a field by its normalized identifier.
    pub fn lookup(&self, ident: &str) -> Option<&FieldDef> {
        self.by_ident.get(ident).map(|&i| &self.defs[i])
    }

    /// Find the writable field fed by `key`.
    pub fn by_key(&self, key: &str) -> Option<&FieldDef> {
        self.by_key.get(key).map(|&i| &self.defs[i])
    }

    /// Whether `flag` is a boolean flag that takes no value.
    pub fn is_switch(&self, flag: &str) -> bool {
        self.by_key(flag)
            .is_some_and(|d| matches!(d.kind, FieldKind::Switch(_)))
    }

    /// Whether a raw map key is consumed by a declared field.
    ///
    /// Only the exact canonical key of a writable field counts. Spelling
    /// variants that normalize to a declared identifier (`--access_token`)
    /// and keys naming read-only fields (`--app-name`) are not consumed.
    pub fn consumes(&self, raw: &str) -> bool {
        self.by_key(raw).is_some_and(|def| def.consumes(raw))
    }

    /// Short usage block listing every flag.
    pub fn usage(&self) -> String {
        let mut out = String::from("Usage: maestro <command> [subcommand...] [options]\n\nOptions:\n");
        for def in self.defs.iter().filter(|d| d.is_flag()) {
            let Some(key) = def.key else { continue };
            let label = match def.kind {
                FieldKind::Switch(_) => key.to_string(),
                FieldKind::List(_) => format!("{key} <a,b,...>"),
                _ => format!("{key} <value>"),
            };
            out.push_str(&format!("  {:<28} {}\n", label, def.description));
        }
        out
    }
}

/// Normalize a raw key into field identifier form.
///
/// Leading dashes are stripped, the rest is split on `-` and `_`, and each
/// word is capitalized: `--access-token` → `AccessToken`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim_start_matches('-')
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// The process-wide registry, built on first use.
pub fn field_registry() -> &'static FieldRegistry {
    static REGISTRY: OnceLock<FieldRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| FieldRegistry::new(field_defs()))
}

fn field_defs() -> Vec<FieldDef> {
    let mut defs = vec![
        // === Command path ===
        FieldDef {
            ident: "Command",
            key: Some(COMMAND_KEY),
            kind: FieldKind::TextOr {
                default: "",
                set: |o, v| o.command = v,
            },
            description: "Command to run",
        },
        FieldDef {
            ident: "Subcommands",
            key: None,
            kind: FieldKind::Derived,
            description: "Subcommand path",
        },
        // === Global options ===
        FieldDef {
            ident: "DatabasePath",
            key: Some("--database"),
            kind: FieldKind::Text(|o, v| o.database_path = v),
            description: "Path to the local database",
        },
        FieldDef {
            ident: "Help",
            key: Some("--help"),
            kind: FieldKind::Switch(|o, v| o.help = v),
            description: "Show this help",
        },
        FieldDef {
            ident: "Verbosity",
            key: Some("--verbosity"),
            kind: FieldKind::Integer {
                default: DEFAULT_VERBOSITY,
                set: |o, v| o.verbosity = v,
            },
            description: "Output verbosity level",
        },
        // === Common options ===
        FieldDef {
            ident: "Id",
            key: Some("--id"),
            kind: FieldKind::Text(|o, v| o.id = v),
            description: "Object id",
        },
        FieldDef {
            ident: "Name",
            key: Some("--name"),
            kind: FieldKind::Text(|o, v| {
                o.app_name = v.clone();
                o.name = v;
            }),
            description: "Object or application name",
        },
        FieldDef {
            ident: "Properties",
            key: Some("--properties"),
            kind: FieldKind::List(|o, v| o.properties = v),
            description: "Comma-separated properties to return",
        },
        FieldDef {
            ident: "AccessToken",
            key: Some("--access-token"),
            kind: FieldKind::Text(|o, v| o.access_token = v),
            description: "Access token to authenticate with",
        },
        FieldDef {
            ident: "PrtCookie",
            key: Some("--prt-cookie"),
            kind: FieldKind::Text(|o, v| o.prt_cookie = v),
            description: "Primary refresh token cookie",
        },
        FieldDef {
            ident: "RefreshToken",
            key: Some("--refresh-token"),
            kind: FieldKind::Text(|o, v| o.refresh_token = v),
            description: "Refresh token to redeem",
        },
        FieldDef {
            ident: "PrtMethod",
            key: Some("--prt-method"),
            kind: FieldKind::Integer {
                default: DEFAULT_PRT_METHOD,
                set: |o, v| o.prt_method = v,
            },
            description: "Method used to request a PRT cookie",
        },
        FieldDef {
            ident: "Reauth",
            key: Some("--reauth"),
            kind: FieldKind::Switch(|o, v| o.reauth = v),
            description: "Ignore cached tokens and authenticate again",
        },
        FieldDef {
            ident: "TenantId",
            key: Some("--tenant-id"),
            kind: FieldKind::Text(|o, v| o.tenant_id = v),
            description: "Tenant id",
        },
        // === Command specific options ===
        FieldDef {
            ident: "AppName",
            key: None,
            kind: FieldKind::Derived,
            description: "Application name (set by --name)",
        },
        FieldDef {
            ident: "Path",
            key: Some("--path"),
            kind: FieldKind::Text(|o, v| o.path = v),
            description: "Path to a file or directory",
        },
        FieldDef {
            ident: "RunAsUser",
            key: Some("--user"),
            kind: FieldKind::Switch(|o, v| o.run_as_user = v),
            description: "Run in the context of the logged-on user",
        },
        FieldDef {
            ident: "Query",
            key: Some("--query"),
            kind: FieldKind::Text(|o, v| o.query = v),
            description: "Query to run",
        },
        FieldDef {
            ident: "Retries",
            key: Some("--retries"),
            kind: FieldKind::Integer {
                default: DEFAULT_RETRIES,
                set: |o, v| o.retries = v,
            },
            description: "Number of attempts before giving up",
        },
        FieldDef {
            ident: "Wait",
            key: Some("--wait"),
            kind: FieldKind::Integer {
                default: DEFAULT_WAIT,
                set: |o, v| o.wait = v,
            },
            description: "Seconds to wait between attempts",
        },
        FieldDef {
            ident: "Script",
            key: Some("--script"),
            kind: FieldKind::Text(|o, v| o.script = v),
            description: "Script to execute",
        },
        FieldDef {
            ident: "Extension",
            key: Some("--extension"),
            kind: FieldKind::TextOr {
                default: DEFAULT_EXTENSION,
                set: |o, v| o.extension = v,
            },
            description: "Portal extension to request a token for",
        },
        FieldDef {
            ident: "Method",
            key: Some("--method"),
            kind: FieldKind::Integer {
                default: DEFAULT_METHOD,
                set: |o, v| o.method = v,
            },
            description: "Method used to perform the action",
        },
        FieldDef {
            ident: "Resource",
            key: Some("--resource"),
            kind: FieldKind::TextOr {
                default: DEFAULT_RESOURCE,
                set: |o, v| o.resource = v,
            },
            description: "Resource to request a token for",
        },
        FieldDef {
            ident: "Overflow",
            key: None,
            kind: FieldKind::Derived,
            description: "Unrecognized options",
        },
    ];

    defs.extend(
        SUBCOMMAND_IDENTS
            .iter()
            .zip(SUBCOMMAND_KEYS.iter())
            .map(|(&ident, &key)| FieldDef {
                ident,
                key: Some(key),
                kind: FieldKind::Slot,
                description: "Subcommand slot",
            }),
    );

    defs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_dashes_and_capitalizes() {
        assert_eq!(normalize_key("--access-token"), "AccessToken");
        assert_eq!(normalize_key("--tenant_id"), "TenantId");
        assert_eq!(normalize_key("-ID"), "Id");
        assert_eq!(normalize_key("command"), "Command");
        assert_eq!(normalize_key("subcommand3"), "Subcommand3");
        assert_eq!(normalize_key("--"), "");
    }

    #[test]
    fn identifiers_are_unique() {
        let registry = field_registry();
        assert_eq!(registry.by_ident.len(), registry.defs().len());
    }

    #[test]
    fn every_writable_key_is_indexed() {
        let registry = field_registry();
        for def in registry.defs().iter().filter(|d| d.is_writable()) {
            let key = def.key.unwrap();
            assert_eq!(registry.by_key(key).map(|d| d.ident), Some(def.ident));
        }
        assert!(registry.by_key("--app-name").is_none());
    }

    #[test]
    fn identifiers_match_their_keys_unless_renamed() {
        // Renamed fields are the only ones whose key normalizes elsewhere.
        let renamed = ["DatabasePath", "RunAsUser"];
        for def in field_registry().defs() {
            if let Some(key) = def.key {
                if renamed.contains(&def.ident) {
                    assert_ne!(normalize_key(key), def.ident);
                    assert!(field_registry().consumes(key), "{key}");
                } else {
                    assert_eq!(normalize_key(key), def.ident, "{key}");
                }
            }
        }
    }

    #[test]
    fn switches_are_fixed() {
        let registry = field_registry();
        let switches: Vec<_> = registry
            .defs()
            .iter()
            .filter(|d| matches!(d.kind, FieldKind::Switch(_)))
            .filter_map(|d| d.key)
            .collect();
        assert_eq!(switches, vec!["--help", "--reauth", "--user"]);
        assert!(registry.is_switch("--help"));
        assert!(!registry.is_switch("--name"));
        assert!(!registry.is_switch("--unknown"));
    }

    #[test]
    fn consumes_only_canonical_keys_of_writable_fields() {
        let registry = field_registry();
        assert!(registry.consumes("--access-token"));
        assert!(registry.consumes("command"));
        assert!(registry.consumes("subcommand5"));
        assert!(registry.consumes("--database"));
        assert!(registry.consumes("--user"));

        assert!(!registry.consumes("--access_token"));
        assert!(!registry.consumes("--app-name"));
        assert!(!registry.consumes("--subcommands"));
        assert!(!registry.consumes("--overflow"));
        assert!(!registry.consumes("--database-path"));
        assert!(!registry.consumes("subcommand6"));
        assert!(!registry.consumes("--color"));
    }

    #[test]
    fn positional_keys_number_from_one() {
        assert_eq!(positional_key(0), "command");
        assert_eq!(positional_key(1), "subcommand1");
        assert_eq!(positional_key(7), "subcommand7");
        assert_eq!(subcommand_keys().len(), MAX_SUBCOMMAND_DEPTH);
        assert_eq!(subcommand_keys()[0], positional_key(1));
    }

    #[test]
    fn usage_lists_flags_only() {
        let usage = field_registry().usage();
        assert!(usage.contains("--access-token <value>"));
        assert!(usage.contains("--properties <a,b,...>"));
        assert!(usage.contains("--help "));
        assert!(!usage.contains("subcommand1"));
        assert!(!usage.contains("Overflow"));
    }
}
