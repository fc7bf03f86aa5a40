//! Tokenizer: raw process arguments → [`RawArgs`].

use std::collections::BTreeMap;

use crate::args::error::ArgsError;
use crate::args::registry::{positional_key, FieldRegistry};

/// Key/value map built from the argument vector.
///
/// Flags are keyed as typed (`--name`), positionals as `command`,
/// `subcommand1`, `subcommand2`, ... A `None` value marks a boolean flag
/// that was present without a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    entries: BTreeMap<String, Option<String>>,
}

impl RawArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. The last write for a key wins.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value for `key`. `None` if absent, `Some(None)` for a bare boolean flag.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|v| v.as_deref())
    }

    /// Value for `key`, treating a bare boolean flag as absent.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for RawArgs {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut raw = RawArgs::new();
        for (key, value) in iter {
            raw.insert(key, value);
        }
        raw
    }
}

/// Split `tokens` (program name excluded) into a [`RawArgs`] map.
///
/// * bare tokens are positional: `command`, then `subcommand1`, ...
/// * `--flag value` consumes exactly the next token, whatever it looks like;
///   a trailing `--flag` gets the empty string
/// * `--flag=value` carries its value inline
/// * switches from the registry (`--help`, ...) never consume a token
///
/// Fails only on a flag with no name (`--`, `--=x`).
pub fn tokenize(tokens: &[String], registry: &FieldRegistry) -> Result<RawArgs, ArgsError> {
    let mut raw = RawArgs::new();
    let mut positionals = 0;
    let mut iter = tokens.iter().enumerate();

    while let Some((position, token)) = iter.next() {
        let Some(flag) = token.strip_prefix("--") else {
            raw.insert(positional_key(positionals), Some(token.clone()));
            positionals += 1;
            continue;
        };

        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        if name.is_empty() {
            return Err(ArgsError::Tokenization {
                position,
                token: token.clone(),
                reason: "flag has no name".to_string(),
            });
        }

        let key = format!("--{name}");
        let value = match inline {
            Some(value) => Some(value),
            None if registry.is_switch(&key) => None,
            None => Some(iter.next().map(|(_, v)| v.clone()).unwrap_or_default()),
        };

        raw.insert(key, value);
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::registry::field_registry;

    fn tok(args: &[&str]) -> Result<RawArgs, ArgsError> {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        tokenize(&owned, field_registry())
    }

    #[test]
    fn empty_input_is_empty_map() {
        assert!(tok(&[]).unwrap().is_empty());
    }

    #[test]
    fn positionals_fill_command_then_subcommands() {
        let raw = tok(&["apps", "list", "owned"]).unwrap();
        assert_eq!(raw.value("command"), Some("apps"));
        assert_eq!(raw.value("subcommand1"), Some("list"));
        assert_eq!(raw.value("subcommand2"), Some("owned"));
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn positionals_interleave_with_flags() {
        let raw = tok(&["apps", "--id", "42", "get"]).unwrap();
        assert_eq!(raw.value("command"), Some("apps"));
        assert_eq!(raw.value("--id"), Some("42"));
        assert_eq!(raw.value("subcommand1"), Some("get"));
    }

    #[test]
    fn value_flag_consumes_next_token_even_if_flag_like() {
        let raw = tok(&["--name", "--help"]).unwrap();
        assert_eq!(raw.value("--name"), Some("--help"));
        assert!(!raw.contains("--help"));
    }

    #[test]
    fn trailing_value_flag_is_empty() {
        let raw = tok(&["--query"]).unwrap();
        assert_eq!(raw.get("--query"), Some(Some("")));
    }

    #[test]
    fn switches_take_no_value() {
        let raw = tok(&["--help", "apps", "--user"]).unwrap();
        assert_eq!(raw.get("--help"), Some(None));
        assert_eq!(raw.get("--user"), Some(None));
        assert_eq!(raw.value("command"), Some("apps"));
    }

    #[test]
    fn unknown_flags_take_a_value() {
        let raw = tok(&["--color", "red"]).unwrap();
        assert_eq!(raw.value("--color"), Some("red"));
    }

    #[test]
    fn inline_values_split_on_first_equals() {
        let raw = tok(&["--query=a=b", "--reauth=yes", "--id="]).unwrap();
        assert_eq!(raw.value("--query"), Some("a=b"));
        assert_eq!(raw.value("--reauth"), Some("yes"));
        assert_eq!(raw.value("--id"), Some(""));
    }

    #[test]
    fn repeated_flag_last_wins() {
        let raw = tok(&["--id", "1", "--id", "2"]).unwrap();
        assert_eq!(raw.value("--id"), Some("2"));
    }

    #[test]
    fn single_dash_and_empty_tokens_are_positional() {
        let raw = tok(&["cmd", "", "-x"]).unwrap();
        assert_eq!(raw.value("subcommand1"), Some(""));
        assert_eq!(raw.value("subcommand2"), Some("-x"));
    }

    #[test]
    fn nameless_flag_fails() {
        for bad in [vec!["apps", "--"], vec!["--=value"]] {
            let err = tok(&bad).unwrap_err();
            assert!(err.is_tokenization(), "{err:?}");
        }

        let err = tok(&["apps", "--"]).unwrap_err();
        assert!(matches!(
            err,
            ArgsError::Tokenization { position: 1, ref token, .. } if token == "--"
        ));
    }
}
