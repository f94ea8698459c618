//! Host services the resolver depends on.

use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::locale::{detect_env_locale, ResolvedLocale};

/// Localized names of languages and regions.
pub trait DisplayNames: Send + Sync {
    /// Name of `locale`'s language as rendered for a `display` viewer.
    fn language_name(&self, locale: &ResolvedLocale, display: &ResolvedLocale) -> String;

    /// Name of `locale`'s region as rendered for a `display` viewer.
    ///
    /// Must return `""` when `locale` has no region.
    fn region_name(&self, locale: &ResolvedLocale, display: &ResolvedLocale) -> String;
}

/// Read/write access to an ambient default locale.
pub trait DefaultLocale: Send + Sync {
    fn get(&self) -> ResolvedLocale;
    fn set(&self, locale: ResolvedLocale);
}

/// Storage for the user's chosen language code.
pub trait LanguagePreferences: Send + Sync {
    fn saved_language(&self) -> Option<String>;
    fn save_language(&self, code: &str);
    fn clear(&self);
}

/// A default locale owned by the caller.
#[derive(Debug, Default)]
pub struct FixedLocale {
    current: RwLock<ResolvedLocale>,
}

impl FixedLocale {
    pub fn new(locale: ResolvedLocale) -> Self {
        Self {
            current: RwLock::new(locale),
        }
    }
}

impl DefaultLocale for FixedLocale {
    fn get(&self) -> ResolvedLocale {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, locale: ResolvedLocale) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = locale;
    }
}

/// Process-wide default locale.
static PROCESS_LOCALE: OnceLock<RwLock<ResolvedLocale>> = OnceLock::new();

/// The process-wide default locale.
///
/// Seeded from the environment (see [`detect_env_locale`]) on first use unless
/// [`ProcessLocale::init`] ran earlier. Every `ProcessLocale` value shares the
/// same state, so tests should use [`FixedLocale`] instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessLocale;

impl ProcessLocale {
    /// Seed the process locale.
    ///
    /// Only the first seed counts: once `init` ran, or any `get`/`set` seeded
    /// the locale from the environment, later calls are ignored and return
    /// `false`. Use [`DefaultLocale::set`] to change the locale afterwards.
    pub fn init(locale: ResolvedLocale) -> bool {
        match PROCESS_LOCALE.set(RwLock::new(locale)) {
            Ok(()) => true,
            Err(ignored) => {
                debug!(
                    ignored = %ignored.into_inner().unwrap_or_else(PoisonError::into_inner),
                    "ProcessLocale::init: already seeded"
                );
                false
            }
        }
    }

    fn cell() -> &'static RwLock<ResolvedLocale> {
        PROCESS_LOCALE.get_or_init(|| RwLock::new(detect_env_locale()))
    }
}

impl DefaultLocale for ProcessLocale {
    fn get(&self) -> ResolvedLocale {
        Self::cell()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, locale: ResolvedLocale) {
        *Self::cell().write().unwrap_or_else(PoisonError::into_inner) = locale;
    }
}

/// In-memory language preference. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    language: RwLock<Option<String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguagePreferences for MemoryPreferences {
    fn saved_language(&self) -> Option<String> {
        self.language
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save_language(&self, code: &str) {
        *self.language.write().unwrap_or_else(PoisonError::into_inner) = Some(code.to_string());
    }

    fn clear(&self) {
        *self.language.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
