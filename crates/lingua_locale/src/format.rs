use serde::{Deserialize, Serialize};

use crate::locale::ResolvedLocale;

/// Picks the locale used for number and date formatting.
///
/// Some toolkit versions mis-render locale-specific grouping separators when
/// the formatting locale carries a region; hosts choose the implementation
/// matching their toolkit when building the manager.
pub trait FormatLocalePolicy: Send + Sync {
    fn format_locale(&self, base: &ResolvedLocale) -> ResolvedLocale;
}

/// Formats with the base language only.
///
/// The language is kept whole rather than passed back through the positional
/// code rule, so `fil` stays `fil` where a re-resolve would cut it to `fi`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LanguageOnly;

impl FormatLocalePolicy for LanguageOnly {
    fn format_locale(&self, base: &ResolvedLocale) -> ResolvedLocale {
        base.without_region()
    }
}

/// Formats with the locale unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl FormatLocalePolicy for Passthrough {
    fn format_locale(&self, base: &ResolvedLocale) -> ResolvedLocale {
        base.clone()
    }
}

/// Config-level selector for a [`FormatLocalePolicy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatPolicy {
    #[default]
    LanguageOnly,
    Passthrough,
}

impl FormatPolicy {
    pub fn build(self) -> Box<dyn FormatLocalePolicy> {
        match self {
            FormatPolicy::LanguageOnly => Box::new(LanguageOnly),
            FormatPolicy::Passthrough => Box::new(Passthrough),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn policies() {
        let base = ResolvedLocale::new("de", "CH");
        assert_eq!(
            FormatPolicy::LanguageOnly.build().format_locale(&base),
            ResolvedLocale::bare("de")
        );
        assert_eq!(FormatPolicy::Passthrough.build().format_locale(&base), base);
    }

    #[test]
    fn language_only_keeps_three_letter_languages() {
        let base = ResolvedLocale::new("fil", "PH");
        assert_eq!(LanguageOnly.format_locale(&base), ResolvedLocale::bare("fil"));
    }
}
