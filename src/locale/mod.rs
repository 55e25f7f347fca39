//! Built-in locale data.

mod builtin;

pub use builtin::Locale;

/// Extract the primary language subtag, lowercased, from a BCP-47-ish
/// locale identifier: `"de-AT"` -> `"de"`, `"pt_BR"` -> `"pt"`.
pub(crate) fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or("en")
        .to_ascii_lowercase()
}
