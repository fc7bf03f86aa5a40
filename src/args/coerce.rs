//! Coercion of raw string values into typed fields.

use crate::args::error::ArgsError;

/// Parse `value` as a base-10 `i32` for `flag`.
///
/// Surrounding whitespace is ignored. An empty value is not "absent": it
/// fails like any other non-numeric text.
pub fn integer(flag: &str, value: &str) -> Result<i32, ArgsError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|source| ArgsError::Coercion {
            flag: flag.to_string(),
            value: value.to_string(),
            source,
        })
}

/// Split a comma-separated value into trimmed, non-empty items.
pub fn list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_parses_signed_values() {
        assert_eq!(integer("--wait", "7"), Ok(7));
        assert_eq!(integer("--wait", "-1"), Ok(-1));
        assert_eq!(integer("--wait", " 12 "), Ok(12));
    }

    #[test]
    fn integer_rejects_empty_and_text() {
        for bad in ["", "   ", "abc", "1.5", "0x10", "99999999999"] {
            let err = integer("--retries", bad).unwrap_err();
            match err {
                ArgsError::Coercion { flag, value, .. } => {
                    assert_eq!(flag, "--retries");
                    assert_eq!(value, bad);
                }
                other => panic!("Expected Coercion, got {other:?}"),
            }
        }
    }

    #[test]
    fn list_drops_empty_segments() {
        assert_eq!(list(Some("a,b,,c")), vec!["a", "b", "c"]);
        assert_eq!(list(Some(" a , b ,")), vec!["a", "b"]);
        assert!(list(Some("")).is_empty());
        assert!(list(Some(",,")).is_empty());
        assert!(list(None).is_empty());
    }
}
