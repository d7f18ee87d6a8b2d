//! Placeholder substitution for message templates.
//!
//! Two modes, never mixed in one call:
//!
//! - positional: `{0}`, `{1}`, ... index into an argument slice;
//! - named: `{count}`, `{user}`, ... look up a [`NamedArgs`] map.
//!
//! # Invariants
//!
//! 1. **Single pass**: substituted values are never re-scanned, so a value
//!    that itself contains `{0}` is emitted literally.
//! 2. **Lenient**: a placeholder with no matching argument is emitted
//!    unchanged. Formatting never fails.
//! 3. Templates without `{` are returned as-is.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `{7}` with fewer than 8 args | Token left as-is |
//! | `{name}` absent from the map | Token left as-is |
//! | `{}` or unclosed `{` | Emitted literally |
//! | `{{0}}` | Outer braces literal, inner token substituted |
//! | `{01}` in positional mode | Not an index; left as-is |

use std::collections::HashMap;
use std::fmt::{self, Write as _};

/// Name → rendered value map for named placeholders.
///
/// Values are rendered through [`fmt::Display`] when inserted.
///
/// ```
/// use msgloc::{NamedArgs, format_named};
///
/// let args = NamedArgs::new().with("count", 20).with("fruit", "apples");
/// assert_eq!(format_named("{count} {fruit}", &args), "20 apples");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedArgs {
    values: HashMap<String, String>,
}

impl NamedArgs {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Render `value` and bind it to `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.values.insert(name.into(), value.to_string());
    }

    /// Rendered value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for NamedArgs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Replace `{N}` with the textual form of `args[N]`.
///
/// ```
/// use msgloc::format_positional;
///
/// assert_eq!(format_positional("{0} apples", &[&20]), "20 apples");
/// assert_eq!(format_positional("{0} of {1}", &[&3]), "3 of {1}");
/// ```
#[must_use]
pub fn format_positional(template: &str, args: &[&dyn fmt::Display]) -> String {
    substitute(template, |token, out| {
        let Some(arg) = parse_index(token).and_then(|i| args.get(i)) else {
            return false;
        };
        // Writing into a String cannot fail.
        let _ = write!(out, "{arg}");
        true
    })
}

/// Replace `{name}` with the value bound to `name`.
#[must_use]
pub fn format_named(template: &str, values: &NamedArgs) -> String {
    substitute(template, |token, out| match values.get(token) {
        Some(value) => {
            out.push_str(value);
            true
        }
        None => false,
    })
}

/// Canonical decimal index: digits only, no leading zeros except `0`.
fn parse_index(token: &str) -> Option<usize> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

/// Single-pass scanner shared by both modes.
///
/// `resolve` appends the replacement for a token and returns `true`, or
/// returns `false` to have the token emitted verbatim.
fn substitute<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str, &mut String) -> bool,
{
    if !template.contains('{') {
        return template.to_owned();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(['{', '}']) {
            Some(close) if after[close..].starts_with('}') => {
                let token = &after[..close];
                if token.is_empty() || !resolve(token, &mut result) {
                    if !token.is_empty() {
                        tracing::trace!(placeholder = token, "placeholder left unresolved");
                    }
                    result.push('{');
                    result.push_str(token);
                    result.push('}');
                }
                rest = &after[close + 1..];
            }
            Some(reopen) => {
                // Another '{' before any '}': this brace is literal.
                result.push('{');
                result.push_str(&after[..reopen]);
                rest = &after[reopen..];
            }
            None => {
                // Unclosed brace: emit as-is
                result.push('{');
                result.push_str(after);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_single_arg() {
        assert_eq!(format_positional("{0} apples", &[&20]), "20 apples");
    }

    #[test]
    fn positional_mixed_argument_types() {
        assert_eq!(
            format_positional("{0} bought {1} for {2}", &[&"Ann", &3, &1.5]),
            "Ann bought 3 for 1.5"
        );
    }

    #[test]
    fn positional_repeated_and_reordered() {
        assert_eq!(format_positional("{1}-{0}-{1}", &[&"a", &"b"]), "b-a-b");
    }

    #[test]
    fn positional_out_of_range_left_as_is() {
        assert_eq!(format_positional("{0} and {3}", &[&1]), "1 and {3}");
        assert_eq!(format_positional("{0}", &[]), "{0}");
    }

    #[test]
    fn positional_rejects_non_canonical_indices() {
        let args: [&dyn fmt::Display; 2] = [&"x", &"y"];
        assert_eq!(format_positional("{01}", &args), "{01}");
        assert_eq!(format_positional("{-1}", &args), "{-1}");
        assert_eq!(format_positional("{+1}", &args), "{+1}");
        assert_eq!(format_positional("{ 1}", &args), "{ 1}");
        assert_eq!(format_positional("{name}", &args), "{name}");
    }

    #[test]
    fn positional_huge_index_is_unresolved() {
        let huge = "{99999999999999999999999999}";
        assert_eq!(format_positional(huge, &[&1]), huge);
    }

    #[test]
    fn named_single_arg() {
        let args = NamedArgs::new().with("count", 20);
        assert_eq!(format_named("{count} apples", &args), "20 apples");
    }

    #[test]
    fn named_missing_left_as_is() {
        let args = NamedArgs::new().with("count", 20);
        assert_eq!(
            format_named("{count} {fruit}", &args),
            "20 {fruit}"
        );
    }

    #[test]
    fn named_repeated_occurrences() {
        let args = NamedArgs::new().with("x", "A");
        assert_eq!(format_named("{x} and {x}", &args), "A and A");
    }

    #[test]
    fn named_ignores_digit_tokens_without_binding() {
        let args = NamedArgs::new().with("count", 1);
        assert_eq!(format_named("{0}", &args), "{0}");
    }

    #[test]
    fn no_placeholders_unchanged() {
        assert_eq!(format_positional("Hello World", &[&1]), "Hello World");
        assert_eq!(format_named("Hello World", &NamedArgs::new()), "Hello World");
    }

    #[test]
    fn empty_template() {
        assert_eq!(format_positional("", &[&1]), "");
        assert_eq!(format_named("", &NamedArgs::new().with("a", 1)), "");
    }

    #[test]
    fn brace_edge_cases() {
        // Unclosed brace
        assert_eq!(format_positional("Hello {0", &[&1]), "Hello {0");
        // Empty braces
        assert_eq!(format_positional("Hello {}", &[&1]), "Hello {}");
        // Stray closer
        assert_eq!(format_positional("a } b {0}", &[&1]), "a } b 1");
        // Doubled braces keep the outer pair
        assert_eq!(format_positional("{{0}}", &[&20]), "{20}");
        // Lone opener before a placeholder
        assert_eq!(format_positional("{ {0}", &[&20]), "{ 20");
    }

    #[test]
    fn substitution_is_single_pass() {
        assert_eq!(format_positional("{0} {1}", &[&"{1}", &"b"]), "{1} b");
        let args = NamedArgs::new().with("a", "{b}").with("b", "B");
        assert_eq!(format_named("{a}", &args), "{b}");
    }

    #[test]
    fn non_ascii_text_survives() {
        let args = NamedArgs::new().with("n", 5);
        assert_eq!(format_named("{n} файлов — 🍎", &args), "5 файлов — 🍎");
        assert_eq!(format_positional("りんご{0}個", &[&3]), "りんご3個");
    }

    #[test]
    fn named_args_collect_and_overwrite() {
        let mut args: NamedArgs = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(args.len(), 2);
        args.insert("a", "one");
        assert_eq!(args.get("a"), Some("one"));
        assert_eq!(args.get("b"), Some("2"));
        assert!(!args.is_empty());
        assert!(NamedArgs::new().is_empty());
    }
}
