use std::collections::HashSet;

use crate::utilities::constants::{
    EXCLUDED_SET_CODES, EXCLUDED_SET_NAMES, EXCLUDED_SET_NAME_PREFIXES,
};

/// Promotional and otherwise non-standard print runs that never show up in
/// any listing.
#[derive(Debug, Clone)]
pub struct ExcludedSetRegistry {
    codes: HashSet<String>,
    names: HashSet<String>,
    name_prefixes: Vec<String>,
}

impl ExcludedSetRegistry {
    pub fn new<C, N, P>(codes: C, names: N, name_prefixes: P) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        ExcludedSetRegistry {
            codes: codes.into_iter().map(Into::into).collect(),
            names: names.into_iter().map(Into::into).collect(),
            name_prefixes: name_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn is_excluded_name(&self, name: &str) -> bool {
        self.names.contains(name)
            || self
                .name_prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }

    pub fn is_excluded(&self, code: &str, name: &str) -> bool {
        self.is_excluded_code(code) || self.is_excluded_name(name)
    }
}

impl Default for ExcludedSetRegistry {
    fn default() -> Self {
        ExcludedSetRegistry::new(
            EXCLUDED_SET_CODES,
            EXCLUDED_SET_NAMES,
            EXCLUDED_SET_NAME_PREFIXES,
        )
    }
}
