use indexmap::IndexMap;
use serde::Serialize;

use crate::negation::resolve_negations;
use crate::token::{RawArgument, Token, TokenError, canonical_name, tokenize};

/// Parsed flags for one invocation.
///
/// `first` holds the value of each flag's first occurrence, `all` every
/// occurrence in argv order. For every key of `first`, `all[key]` is non-empty
/// and starts with `first[key]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArgumentStore {
    #[serde(rename = "flags")]
    first: IndexMap<String, String>,
    #[serde(rename = "values")]
    all: IndexMap<String, Vec<String>>,
    positionals: Vec<String>,
}

/// Raw pass: tokenize `args` in order and record every flag, first occurrence
/// winning in the single-value view.
///
/// `args` must not include the program name. `no`-prefixed flags are stored
/// under their literal name; see [`resolve_negations`] for the second pass.
pub fn build_raw<I, S>(args: I) -> Result<ArgumentStore, TokenError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut store = ArgumentStore::default();
    for arg in args {
        let arg = arg.as_ref();
        match tokenize(arg)? {
            Token::Flag(raw) => {
                tracing::trace!(name = %raw.name, explicit = raw.has_explicit_value, "flag");
                store.record(raw);
            }
            Token::Positional(p) => store.positionals.push(p.to_string()),
        }
    }
    Ok(store)
}

impl ArgumentStore {
    /// Build a store from `args` (program name excluded) and resolve
    /// negation flags.
    pub fn parse<I, S>(args: I) -> Result<Self, TokenError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(resolve_negations(build_raw(args)?))
    }

    /// Parse the current process's arguments, skipping `argv[0]`.
    pub fn from_env() -> Result<Self, TokenError> {
        Self::parse(std::env::args().skip(1))
    }

    /// Every value given for `name`, in argv order. Empty when absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.all
            .get(canonical_name(name))
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    /// Non-flag arguments in argv order.
    pub fn positionals(&self) -> &[String] {
        self.positionals.as_slice()
    }

    /// Flags and their first values, in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.first.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Set `name` to `value` unless it is already present.
    ///
    /// Returns whether the value was stored.
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        let name = canonical_name(name);
        if self.first.contains_key(name) {
            return false;
        }
        self.insert(name, value.to_string());
        true
    }

    /// Boolean form of [`soft_set`](Self::soft_set); stores `"1"` or `"0"`.
    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        self.soft_set(name, if value { "1" } else { "0" })
    }

    pub(crate) fn first_value(&self, name: &str) -> Option<&str> {
        self.first.get(canonical_name(name)).map(|s| s.as_str())
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.first.contains_key(name)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.first.keys().map(|k| k.as_str())
    }

    fn record(&mut self, raw: RawArgument) {
        self.insert(&raw.name, raw.value);
    }

    pub(crate) fn insert(&mut self, name: &str, value: String) {
        if !self.first.contains_key(name) {
            self.first.insert(name.to_string(), value.clone());
        }
        self.all.entry(name.to_string()).or_default().push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins_and_all_values_are_kept() {
        let store = build_raw(["-connect=a", "-connect=b", "-connect"]).unwrap();
        assert_eq!(store.first_value("connect"), Some("a"));
        assert_eq!(store.get_all("connect"), ["a", "b", ""]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn all_values_start_with_first_value() {
        let store = build_raw(["-a=1", "-b", "--a=2", "-c=", "-b=x"]).unwrap();
        for (name, first) in store.iter() {
            let all = store.get_all(name);
            assert!(!all.is_empty());
            assert_eq!(all[0], first);
        }
    }

    #[test]
    fn negation_names_are_stored_literally_in_raw_pass() {
        let store = build_raw(["-nofoo=1"]).unwrap();
        assert_eq!(store.first_value("nofoo"), Some("1"));
        assert_eq!(store.first_value("foo"), None);
    }

    #[test]
    fn bare_and_explicit_empty_values_are_stored_alike() {
        let bare = build_raw(["-foo"]).unwrap();
        let empty = build_raw(["-foo="]).unwrap();
        assert_eq!(bare, empty);
        assert_eq!(bare.first_value("foo"), Some(""));
    }

    #[test]
    fn single_and_double_dash_produce_identical_stores() {
        let single = ArgumentStore::parse(["-foo=1", "-bar", "-nobaz"]).unwrap();
        let double = ArgumentStore::parse(["--foo=1", "--bar", "--nobaz"]).unwrap();
        assert_eq!(single, double);
    }

    #[test]
    fn positionals_are_collected_without_stopping_flag_parsing() {
        let store = build_raw(["in.txt", "-v", "-", "out.txt", "-level=3"]).unwrap();
        assert_eq!(store.positionals(), ["in.txt", "-", "out.txt"]);
        assert_eq!(store.first_value("v"), Some(""));
        assert_eq!(store.first_value("level"), Some("3"));
    }

    #[test]
    fn malformed_token_fails_the_build() {
        let err = build_raw(["-ok", "---bad"]).unwrap_err();
        assert!(matches!(err, TokenError::DashCount { dashes: 3, .. }));
    }

    #[test]
    fn soft_set_only_fills_absent_flags() {
        let mut store = ArgumentStore::parse(["-listen=1"]).unwrap();
        assert!(!store.soft_set("listen", "0"));
        assert!(store.soft_set("-discover", "0"));
        assert!(store.soft_set_bool("upnp", false));
        assert!(!store.soft_set_bool("upnp", true));

        assert_eq!(store.first_value("listen"), Some("1"));
        assert_eq!(store.first_value("discover"), Some("0"));
        assert_eq!(store.get_all("upnp"), ["0"]);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let args = ["-a", "-noa", "-b=2", "pos", "-nob=0", "-noc"];
        assert_eq!(
            ArgumentStore::parse(args).unwrap(),
            ArgumentStore::parse(args).unwrap()
        );
    }

    #[test]
    fn serializes_flags_values_and_positionals() {
        let store = ArgumentStore::parse(["-b=2", "-a", "x", "-b=3"]).unwrap();
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "flags": { "b": "2", "a": "" },
                "values": { "b": ["2", "3"], "a": [""] },
                "positionals": ["x"],
            })
        );
    }
}
