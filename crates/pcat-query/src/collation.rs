//! Name ordering for the `name-asc` / `name-desc` sorts.
//!
//! Names compare the way a storefront's locale collation does for Latin
//! scripts: first on the letters alone, then on accents, then on case with
//! lowercase first. "Écorce" therefore sorts between "Eau" and "Eden", and
//! "fig" sorts just before "Fig".

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Precomputed collation key for one product name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NameKey {
    /// Lowercase letters with accents stripped.
    base: String,
    /// Lowercase decomposed form with accents kept; unaccented sorts first.
    accents: Vec<(char, bool)>,
    /// Per-character uppercase flags; lowercase sorts first.
    case: Vec<bool>,
}

impl NameKey {
    pub(crate) fn new(name: &str) -> Self {
        let base = name
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();

        let mut accents: Vec<(char, bool)> = Vec::new();
        for c in name.nfd().flat_map(char::to_lowercase) {
            if is_combining_mark(c) {
                if let Some(last) = accents.last_mut() {
                    last.1 = true;
                }
            } else {
                accents.push((c, false));
            }
        }

        let case = name
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect();

        Self {
            base,
            accents,
            case,
        }
    }
}

/// Compares two names by collation key, then by raw text so that the order
/// is total.
pub(crate) fn compare_names(ka: &NameKey, a: &str, kb: &NameKey, b: &str) -> Ordering {
    ka.cmp(kb).then_with(|| a.cmp(b))
}
