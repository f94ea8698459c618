use std::fmt;

/// Length of a language code that carries no region (`"en"`).
const NO_REGION_CODE_LEN: usize = 2;

/// Character index where the region begins in a regioned code (`"en_us"` -> `"us"`).
const REGION_START: usize = 3;

/// Environment variables consulted by [`detect_env_locale`], highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LINGUA_LANG", "LC_ALL", "LANG"];

/// A base language paired with an optional region.
///
/// Both parts are stored verbatim: no case folding and no validation happen
/// here. Display name and collation services decide how to treat case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResolvedLocale {
    language: String,
    region: String,
}

impl ResolvedLocale {
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: region.into(),
        }
    }

    /// A locale with no region.
    pub fn bare(language: impl Into<String>) -> Self {
        Self::new(language, String::new())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region, or `""` when the locale has none.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    /// True when both locales name the same base language. Regions are ignored.
    pub fn same_language(&self, other: &ResolvedLocale) -> bool {
        self.language == other.language
    }

    pub fn without_region(&self) -> Self {
        Self::bare(self.language.clone())
    }

    /// BCP 47 style tag: `en`, `en-US`, or `und` for an empty language.
    pub fn to_tag(&self) -> String {
        let language = if self.language.is_empty() {
            "und".to_string()
        } else {
            self.language.to_lowercase()
        };
        if self.region.is_empty() {
            language
        } else {
            format!("{}-{}", language, self.region.to_uppercase())
        }
    }
}

impl fmt::Display for ResolvedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tag())
    }
}

/// Resolve a language code into a locale.
///
/// - `None` or `""` yields `current`, the caller's active default locale.
/// - Codes longer than two characters are split by position: the first two
///   characters are the language and everything from index 3 on is the region.
///   The character at index 2 is assumed to be a separator and is never
///   checked, so `"en-gb"`, `"en_gb"` and `"enxgb"` all resolve alike and a
///   three-character code resolves with an empty region.
/// - Anything else is a bare language.
///
/// Positions count characters, not bytes.
pub fn resolve(code: Option<&str>, current: &ResolvedLocale) -> ResolvedLocale {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return current.clone();
    };

    if code.chars().count() > NO_REGION_CODE_LEN {
        let language: String = code.chars().take(NO_REGION_CODE_LEN).collect();
        let region: String = code.chars().skip(REGION_START).collect();
        return ResolvedLocale::new(language, region);
    }

    ResolvedLocale::bare(code)
}

/// Whether `code` names the same base language as `current`. Regions are ignored.
pub fn is_same_language(code: &str, current: &ResolvedLocale) -> bool {
    resolve(Some(code), current).same_language(current)
}

/// Normalize a POSIX locale string from the environment into a language code.
///
/// - Strips encoding and modifier suffixes (`ru_RU.UTF-8@euro` -> `ru_RU`).
/// - Trims whitespace.
/// - Returns `None` for `C`, `POSIX` and empty values.
pub fn normalize_env_locale(raw: &str) -> Option<String> {
    let code = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    match code {
        "" | "C" | "POSIX" => None,
        _ => Some(code.to_string()),
    }
}

/// Detect the process locale from environment variables.
///
/// Checks in order: `LINGUA_LANG`, `LC_ALL`, `LANG`.
/// Falls back to `en` if none holds a usable value.
pub fn detect_env_locale() -> ResolvedLocale {
    locale_from_env(|key| std::env::var(key).ok())
}

/// [`detect_env_locale`] over an arbitrary variable lookup.
///
/// A variable holding `C`, `POSIX` or nothing usable is skipped, not final.
pub fn locale_from_env(var: impl Fn(&str) -> Option<String>) -> ResolvedLocale {
    let fallback = ResolvedLocale::bare("en");
    for key in LOCALE_ENV_VARS {
        if let Some(code) = var(key).as_deref().and_then(normalize_env_locale) {
            return resolve(Some(code.as_str()), &fallback);
        }
    }
    fallback
}
