//! Substring resolution of object keys.
//!
//! Curve and LAS files are located by searching a listing for a key that
//! contains a naming-convention fragment. The first key in listing order
//! wins; the result says whether that choice was unique.

use serde::Serialize;

/// Outcome of resolving a fragment against a key listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeyMatch {
    /// Exactly one key contains the fragment.
    Unique { key: String },
    /// Several keys contain it; `selected` is the first in listing order.
    Ambiguous {
        selected: String,
        candidates: Vec<String>,
    },
    /// No key contains it (includes an empty listing).
    NotFound,
}

impl KeyMatch {
    /// Resolve `needle` against `keys` in the order given.
    pub fn resolve<S: AsRef<str>>(keys: &[S], needle: &str) -> Self {
        let mut hits = keys
            .iter()
            .map(AsRef::as_ref)
            .filter(|k| k.contains(needle))
            .map(str::to_string);

        let Some(first) = hits.next() else {
            return KeyMatch::NotFound;
        };

        let rest: Vec<String> = hits.collect();
        if rest.is_empty() {
            KeyMatch::Unique { key: first }
        } else {
            let mut candidates = Vec::with_capacity(rest.len() + 1);
            candidates.push(first.clone());
            candidates.extend(rest);
            KeyMatch::Ambiguous {
                selected: first,
                candidates,
            }
        }
    }

    /// Key to use, if any.
    pub fn selected(&self) -> Option<&str> {
        match self {
            KeyMatch::Unique { key } => Some(key),
            KeyMatch::Ambiguous { selected, .. } => Some(selected),
            KeyMatch::NotFound => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, KeyMatch::Ambiguous { .. })
    }
}
