//! Lingua locale resolution and language labels
//!
//! Goals:
//! - Turn short language codes (`en`, `en_us`, `pt_BR`) into a [`ResolvedLocale`]
//! - Produce localized labels for a language picker (`"English (United States)"`)
//! - Sort labels with locale-aware collation, keeping each paired with its code
//! - Keep every host dependency behind a trait:
//!   - [`DisplayNames`]: language/region names ([`CatalogNames`], YAML catalogs)
//!   - [`Collation`]: string ordering ([`IcuCollation`] with the `icu` feature)
//!   - [`DefaultLocale`]: the ambient locale ([`ProcessLocale`], [`FixedLocale`])
//!   - [`LanguagePreferences`]: the user's saved choice ([`MemoryPreferences`])
//!
//! The free functions take the current locale explicitly. [`LocaleManager`]
//! is the host-side adapter that reads it from a [`DefaultLocale`].

mod catalog;
mod collate;
mod config;
mod error;
mod format;
mod label;
mod locale;
mod manager;
mod services;

pub use catalog::{CatalogNames, CatalogParseError, NameCatalog};
#[cfg(feature = "icu")]
pub use collate::IcuCollation;
pub use collate::{CodepointCollation, Collation, CollationStrength, Comparator};
pub use config::{CollationConfig, LocaleConfig};
pub use error::LocaleError;
pub use format::{FormatLocalePolicy, FormatPolicy, LanguageOnly, Passthrough};
pub use label::{
    capitalize, detail_labels, language_label, sorted_labels, DisplayLabel, LabelList,
};
pub use locale::{
    detect_env_locale, is_same_language, locale_from_env, normalize_env_locale, resolve,
    ResolvedLocale,
};
pub use manager::{language_map, LocaleManager};
pub use services::{
    DefaultLocale, DisplayNames, FixedLocale, LanguagePreferences, MemoryPreferences, ProcessLocale,
};
