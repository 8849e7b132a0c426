//! Second pass: map `-no<name>` onto `<name>`.
//!
//! A directly given `<name>` always wins over its negation, wherever it
//! appears in argv. Only one level is unwrapped: `-nonofoo` negates a flag
//! literally named `nofoo`.

use crate::access::interpret_bool;
use crate::store::ArgumentStore;

const NEGATION_PREFIX: &str = "no";

/// The flag a `no`-prefixed key negates, if any.
pub fn negated_name(key: &str) -> Option<&str> {
    key.strip_prefix(NEGATION_PREFIX)
        .filter(|name| !name.is_empty() && !name.starts_with('-'))
}

/// Add an inverted entry for every `no<name>` whose `<name>` was not given.
///
/// Decisions are made against the raw keys only, so entries added here never
/// feed back into the resolution.
pub fn resolve_negations(mut store: ArgumentStore) -> ArgumentStore {
    let derived: Vec<(String, &'static str)> = store
        .keys()
        .filter_map(|key| {
            let name = negated_name(key)?;
            let negated = !interpret_bool(store.first_value(key).unwrap_or_default());
            if store.contains(name) {
                tracing::debug!(flag = name, negation = key, "explicit flag overrides negation");
                return None;
            }
            Some((name.to_string(), if negated { "1" } else { "0" }))
        })
        .collect();

    for (name, value) in derived {
        tracing::debug!(flag = %name, value, "applied negation");
        store.insert(&name, value.to_string());
    }
    store
}
