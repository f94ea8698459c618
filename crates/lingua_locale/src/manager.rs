use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::CatalogNames;
use crate::collate::Collation;
use crate::config::LocaleConfig;
use crate::format::{FormatLocalePolicy, LanguageOnly};
use crate::label::{self, LabelList};
use crate::locale::{self, ResolvedLocale};
use crate::services::{
    DefaultLocale, DisplayNames, FixedLocale, LanguagePreferences, MemoryPreferences, ProcessLocale,
};
use crate::LocaleError;

#[cfg(feature = "icu")]
fn default_collation(config: &LocaleConfig) -> Box<dyn Collation> {
    Box::new(crate::collate::IcuCollation::new(config.collation.strength))
}

#[cfg(not(feature = "icu"))]
fn default_collation(_config: &LocaleConfig) -> Box<dyn Collation> {
    Box::new(crate::collate::CodepointCollation)
}

/// Pair language codes with host language IDs from two parallel lists.
///
/// Stops at the shorter list; a repeated code keeps its last ID.
pub fn language_map<C, I>(codes: &[C], ids: &[I]) -> HashMap<String, String>
where
    C: AsRef<str>,
    I: AsRef<str>,
{
    codes
        .iter()
        .zip(ids)
        .map(|(c, i)| (c.as_ref().to_string(), i.as_ref().to_string()))
        .collect()
}

/// Host-facing entry point: resolution and labels against the host's
/// current default locale, plus language switching.
pub struct LocaleManager {
    names: Box<dyn DisplayNames>,
    collation: Box<dyn Collation>,
    default_locale: Arc<dyn DefaultLocale>,
    preferences: Box<dyn LanguagePreferences>,
    format_policy: Box<dyn FormatLocalePolicy>,
}

impl LocaleManager {
    /// Builtin catalogs, default collation, in-memory preferences and
    /// language-only formatting.
    pub fn new(default_locale: Arc<dyn DefaultLocale>) -> Self {
        Self {
            names: Box::new(CatalogNames::builtin()),
            collation: default_collation(&LocaleConfig::default()),
            default_locale,
            preferences: Box::new(MemoryPreferences::new()),
            format_policy: Box::new(LanguageOnly),
        }
    }

    /// Build a manager from configuration.
    ///
    /// An empty `default_locale` binds the manager to the process-wide
    /// [`ProcessLocale`]; otherwise it owns a [`FixedLocale`] seeded with it.
    pub fn from_config(config: &LocaleConfig) -> Result<Self, LocaleError> {
        let mut names = CatalogNames::builtin().with_fallback(&config.fallback_display);
        for path in &config.catalogs {
            names.load_catalog_file(path)?;
        }

        let default_locale: Arc<dyn DefaultLocale> = if config.default_locale.is_empty() {
            Arc::new(ProcessLocale)
        } else {
            let seed = locale::resolve(
                Some(config.default_locale.as_str()),
                &ResolvedLocale::bare("en"),
            );
            Arc::new(FixedLocale::new(seed))
        };

        debug!(
            default_locale = %default_locale.get(),
            catalogs = config.catalogs.len(),
            "LocaleManager::from_config"
        );

        Ok(Self {
            names: Box::new(names),
            collation: default_collation(config),
            default_locale,
            preferences: Box::new(MemoryPreferences::new()),
            format_policy: config.format_policy.build(),
        })
    }

    pub fn with_names(mut self, names: impl DisplayNames + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    pub fn with_collation(mut self, collation: impl Collation + 'static) -> Self {
        self.collation = Box::new(collation);
        self
    }

    pub fn with_default_locale(mut self, default_locale: Arc<dyn DefaultLocale>) -> Self {
        self.default_locale = default_locale;
        self
    }

    pub fn with_preferences(mut self, preferences: impl LanguagePreferences + 'static) -> Self {
        self.preferences = Box::new(preferences);
        self
    }

    pub fn with_format_policy(mut self, policy: impl FormatLocalePolicy + 'static) -> Self {
        self.format_policy = Box::new(policy);
        self
    }

    /// The host's current default locale.
    pub fn current_locale(&self) -> ResolvedLocale {
        self.default_locale.get()
    }

    /// Resolve a code; `None` or `""` yields the current default locale.
    pub fn resolve(&self, code: Option<&str>) -> ResolvedLocale {
        locale::resolve(code, &self.current_locale())
    }

    pub fn is_same_language(&self, code: &str) -> bool {
        locale::is_same_language(code, &self.current_locale())
    }

    pub fn language_label(&self, code: &str, display: &ResolvedLocale) -> String {
        label::language_label(code, display, &self.current_locale(), self.names.as_ref())
    }

    pub fn sorted_labels<S: AsRef<str>>(
        &self,
        codes: &[S],
        sort_locale: &ResolvedLocale,
    ) -> Option<LabelList> {
        label::sorted_labels(
            codes,
            sort_locale,
            &self.current_locale(),
            self.names.as_ref(),
            self.collation.as_ref(),
        )
    }

    pub fn detail_labels<S: AsRef<str>>(&self, codes: &[S]) -> Option<Vec<String>> {
        label::detail_labels(codes, &self.current_locale(), self.names.as_ref())
    }

    /// Switch to `code`, remembering it as the user's choice.
    ///
    /// Returns `false` without touching anything when `code` names the
    /// current language.
    pub fn set_new_locale(&self, code: &str) -> bool {
        let current = self.current_locale();
        if locale::is_same_language(code, &current) {
            return false;
        }

        let next = locale::resolve(Some(code), &current);
        debug!("LocaleManager::set_new_locale: {} -> {}", current, next);
        self.preferences.save_language(code);
        self.default_locale.set(next);
        true
    }

    /// The saved language code, or the current locale's language.
    pub fn language(&self) -> String {
        self.preferences
            .saved_language()
            .unwrap_or_else(|| self.current_locale().language().to_string())
    }

    /// Make [`language`](Self::language) the active default locale.
    pub fn apply_saved_locale(&self) -> ResolvedLocale {
        let current = self.current_locale();
        let saved = self.language();
        let next = locale::resolve(Some(saved.as_str()), &current);
        if next != current {
            debug!("LocaleManager::apply_saved_locale: {} -> {}", current, next);
            self.default_locale.set(next.clone());
        }
        next
    }

    pub fn clear_saved_language(&self) {
        self.preferences.clear();
    }

    /// Locale for number and date formatting, derived from `base` or the
    /// current default locale.
    pub fn format_locale(&self, base: Option<&ResolvedLocale>) -> ResolvedLocale {
        match base {
            Some(base) => self.format_policy.format_locale(base),
            None => self.format_policy.format_locale(&self.current_locale()),
        }
    }
}
