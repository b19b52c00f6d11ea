// SPDX-License-Identifier: MPL-2.0
//! Read access to the active display locale.
//!
//! The lightbox never owns the locale. It is handed a [`LocaleProvider`] each
//! time it renders, so the application decides where the value comes from
//! (the Fluent bundle set, a test fixture, or nothing at all).

use unic_langid::{langid, LanguageIdentifier};

/// Locale used when no provider is available.
#[must_use]
pub fn default_locale() -> LanguageIdentifier {
    langid!("en-US")
}

/// Accessor for the locale captions should be rendered in.
pub trait LocaleProvider {
    fn current_locale(&self) -> LanguageIdentifier;
}

/// A provider that always answers with the same locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub LanguageIdentifier);

impl Default for FixedLocale {
    fn default() -> Self {
        Self(default_locale())
    }
}

impl LocaleProvider for FixedLocale {
    fn current_locale(&self) -> LanguageIdentifier {
        self.0.clone()
    }
}

/// Resolves an optional provider, falling back to [`default_locale`].
#[must_use]
pub fn resolve(provider: Option<&dyn LocaleProvider>) -> LanguageIdentifier {
    provider.map_or_else(default_locale, |p| p.current_locale())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_provider_resolves_to_default() {
        assert_eq!(resolve(None), default_locale());
    }

    #[test]
    fn fixed_provider_is_used() {
        let fr = FixedLocale("fr".parse().unwrap());
        assert_eq!(resolve(Some(&fr)).to_string(), "fr");
    }
}
