//! Range separator resolution.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use crate::field::{FieldCategory, Granularity};
use crate::locale::language_of;

/// Locale-pluggable choice of the text joining the differing middle
/// portions of a range.
pub trait SeparatorResolver: Send + Sync {
    /// Produce the joining text for a range split at `split`, starting
    /// from the caller-configured separator.
    fn resolve(&self, locale: &str, split: Granularity, separator: &str) -> String;
}

/// The fallback strategy used for locales without a registered resolver.
///
/// Wide joins get breathing room: when the split is coarser than the
/// month, both halves repeat the month or more and the separator is padded
/// with spaces; tight day-level ranges keep it as configured. This yields
/// "Jan 3–5, 2020" but "Jan 3 – Feb 5, 2020".
pub struct DefaultResolver;

impl SeparatorResolver for DefaultResolver {
    fn resolve(&self, _locale: &str, split: Granularity, separator: &str) -> String {
        if split < Granularity::Field(FieldCategory::Month) {
            format!(" {} ", separator.trim())
        } else {
            separator.to_string()
        }
    }
}

static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<dyn SeparatorResolver>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Register a resolver for a language. `language` is matched against the
/// primary language subtag of the locale being formatted, so `"ja"` covers
/// `ja`, `ja-JP` and friends. Later registrations replace earlier ones.
pub fn register(language: &str, resolver: Arc<dyn SeparatorResolver>) {
    REGISTRY
        .write()
        .unwrap()
        .insert(language.to_ascii_lowercase(), resolver);
}

/// Resolve the separator for a locale, falling back to [`DefaultResolver`]
/// when no resolver is registered for its language.
pub(crate) fn resolve(locale: &str, split: Granularity, separator: &str) -> String {
    let language = language_of(locale);
    let registry = REGISTRY.read().unwrap();
    match registry.get(&language) {
        Some(resolver) => resolver.resolve(locale, split, separator),
        None => DefaultResolver.resolve(locale, split, separator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pads_wide_joins() {
        let resolver = DefaultResolver;
        assert_eq!(
            resolver.resolve("en", Granularity::Field(FieldCategory::Year), "–"),
            " – "
        );
        assert_eq!(resolver.resolve("en", Granularity::Expand, "–"), " – ");
        assert_eq!(
            resolver.resolve("en", Granularity::Field(FieldCategory::Month), "–"),
            "–"
        );
        assert_eq!(
            resolver.resolve("en", Granularity::Field(FieldCategory::Day), " to "),
            " to "
        );
    }
}
