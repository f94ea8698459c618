use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::locale::ResolvedLocale;

/// A string comparator bound to one locale.
pub type Comparator = Box<dyn Fn(&str, &str) -> Ordering>;

/// Locale-aware string ordering.
pub trait Collation: Send + Sync {
    /// A comparator ordering strings by `locale`'s conventions.
    fn comparator(&self, locale: &ResolvedLocale) -> Comparator;
}

/// Which differences the collator considers significant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollationStrength {
    /// Base letters only (`a` = `á` = `A`).
    Primary,
    /// Base letters and accents.
    Secondary,
    /// Base letters, accents and case.
    #[default]
    Tertiary,
}

/// Raw code point order, ignoring the locale.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodepointCollation;

impl Collation for CodepointCollation {
    fn comparator(&self, _locale: &ResolvedLocale) -> Comparator {
        Box::new(|a: &str, b: &str| a.cmp(b))
    }
}

#[cfg(feature = "icu")]
pub use self::icu::IcuCollation;

#[cfg(feature = "icu")]
mod icu {
    use icu_collator::{Collator, CollatorOptions, Strength};
    use icu_locid::Locale;
    use tracing::warn;

    use super::{Collation, CollationStrength, Comparator};
    use crate::locale::ResolvedLocale;

    /// ICU4X collation with compiled CLDR data.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct IcuCollation {
        strength: CollationStrength,
    }

    impl IcuCollation {
        pub fn new(strength: CollationStrength) -> Self {
            Self { strength }
        }

        pub fn strength(&self) -> CollationStrength {
            self.strength
        }
    }

    /// Best-effort ICU locale: full tag, then language only, then root.
    fn icu_locale(locale: &ResolvedLocale) -> Locale {
        locale
            .to_tag()
            .parse::<Locale>()
            .or_else(|_| locale.without_region().to_tag().parse::<Locale>())
            .unwrap_or(Locale::UND)
    }

    impl Collation for IcuCollation {
        fn comparator(&self, locale: &ResolvedLocale) -> Comparator {
            let mut options = CollatorOptions::new();
            options.strength = Some(match self.strength {
                CollationStrength::Primary => Strength::Primary,
                CollationStrength::Secondary => Strength::Secondary,
                CollationStrength::Tertiary => Strength::Tertiary,
            });

            let icu_loc = icu_locale(locale);
            match Collator::try_new(&(&icu_loc).into(), options) {
                Ok(collator) => Box::new(move |a: &str, b: &str| collator.compare(a, b)),
                Err(e) => {
                    warn!(
                        locale = %locale,
                        error = ?e,
                        "ICU collator unavailable; using code point order"
                    );
                    Box::new(|a: &str, b: &str| a.cmp(b))
                }
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoint_order_is_raw() {
        let cmp = CodepointCollation.comparator(&ResolvedLocale::bare("en"));
        assert_eq!(cmp("Z", "a"), Ordering::Less);
        assert_eq!(cmp("a", "a"), Ordering::Equal);
    }

    #[test]
    fn strength_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            strength: CollationStrength,
        }
        let w: Wrap = toml::from_str("strength = \"primary\"").unwrap();
        assert_eq!(w.strength, CollationStrength::Primary);
    }
}
