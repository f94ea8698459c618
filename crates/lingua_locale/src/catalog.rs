use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, error};

use crate::locale::ResolvedLocale;
use crate::services::DisplayNames;
use crate::LocaleError;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 16;
const MAX_VALUE_BYTES: usize = 256;

const DEFAULT_FALLBACK: &str = "en";

/// Name catalogs compiled into the crate, keyed by display language.
const BUILTIN_CATALOGS: [(&str, &str); 5] = [
    ("en", include_str!("../catalogs/en.yaml")),
    ("de", include_str!("../catalogs/de.yaml")),
    ("es", include_str!("../catalogs/es.yaml")),
    ("fr", include_str!("../catalogs/fr.yaml")),
    ("ko", include_str!("../catalogs/ko.yaml")),
];

const BUILTIN_AUTONYMS: &str = include_str!("../catalogs/autonyms.yaml");

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn parse_section(
    section: &'static str,
    value: Option<&serde_yaml::Value>,
) -> Result<HashMap<String, String>, CatalogParseError> {
    let raw = match value {
        None | Some(serde_yaml::Value::Null) => return Ok(HashMap::new()),
        Some(serde_yaml::Value::Mapping(raw)) => raw,
        Some(_) => {
            return Err(CatalogParseError::Yaml(format!(
                "`{section}` must be a mapping"
            )))
        }
    };

    if raw.len() > MAX_CATALOG_ENTRIES {
        return Err(CatalogParseError::Entry {
            section,
            msg: format!("too many entries (max {MAX_CATALOG_ENTRIES})"),
        });
    }

    let mut out = HashMap::with_capacity(raw.len());
    for (k, v) in raw {
        let Some(key) = k.as_str() else {
            return Err(CatalogParseError::Entry {
                section,
                msg: "keys must be strings".to_string(),
            });
        };
        if !is_valid_key(key) {
            return Err(CatalogParseError::Entry {
                section,
                msg: format!("invalid key `{key}` (allowed: [A-Za-z0-9][A-Za-z0-9_-]*)"),
            });
        }
        if key.len() > MAX_KEY_BYTES {
            return Err(CatalogParseError::Entry {
                section,
                msg: format!("key `{key}` is too long (max {MAX_KEY_BYTES} bytes)"),
            });
        }
        let Some(val) = v.as_str() else {
            return Err(CatalogParseError::Entry {
                section,
                msg: format!("value for key `{key}` must be a string"),
            });
        };
        if val.len() > MAX_VALUE_BYTES {
            return Err(CatalogParseError::Entry {
                section,
                msg: format!("value for key `{key}` is too long (max {MAX_VALUE_BYTES} bytes)"),
            });
        }
        out.insert(key.to_string(), val.to_string());
    }
    Ok(out)
}

/// Language and region names as written in one display language.
///
/// YAML layout:
///
/// ```yaml
/// languages:
///   en: English
/// regions:
///   US: United States
/// ```
///
/// Language keys are matched lowercase, region keys uppercase.
#[derive(Clone, Debug, Default)]
pub struct NameCatalog {
    languages: HashMap<String, String>,
    regions: HashMap<String, String>,
}

impl NameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_language(&mut self, code: &str, name: impl Into<String>) {
        self.languages.insert(code.to_lowercase(), name.into());
    }

    pub fn insert_region(&mut self, code: &str, name: impl Into<String>) {
        self.regions.insert(code.to_uppercase(), name.into());
    }

    pub fn language(&self, code: &str) -> Option<&str> {
        self.languages.get(&code.to_lowercase()).map(|s| s.as_str())
    }

    pub fn region(&self, code: &str) -> Option<&str> {
        self.regions.get(&code.to_uppercase()).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.languages.len() + self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.regions.is_empty()
    }

    /// Copy every entry of `other` into `self`, replacing existing names.
    pub fn merge(&mut self, other: NameCatalog) {
        self.languages.extend(other.languages);
        self.regions.extend(other.regions);
    }

    /// Parse a YAML catalog with optional `languages` and `regions` mappings.
    pub fn parse(src: &str) -> Result<Self, CatalogParseError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(src)
            .map_err(|e| CatalogParseError::Yaml(format!("yaml parse error: {e}")))?;

        let root = match doc {
            serde_yaml::Value::Null => return Ok(Self::new()),
            serde_yaml::Value::Mapping(root) => root,
            _ => {
                return Err(CatalogParseError::Yaml(
                    "catalog must be a mapping".to_string(),
                ))
            }
        };

        for (key, _) in &root {
            match key.as_str() {
                Some("languages") | Some("regions") => {}
                _ => {
                    return Err(CatalogParseError::Yaml(format!(
                        "unknown section `{}` (expected `languages` or `regions`)",
                        serde_yaml::to_string(key).unwrap_or_default().trim()
                    )))
                }
            }
        }

        let mut cat = Self::new();
        for (code, name) in parse_section("languages", root.get("languages"))? {
            cat.insert_language(&code, name);
        }
        for (code, name) in parse_section("regions", root.get("regions"))? {
            cat.insert_region(&code, name);
        }
        Ok(cat)
    }
}

#[derive(Debug, Error)]
pub enum CatalogParseError {
    #[error("yaml catalog error: {0}")]
    Yaml(String),

    #[error("catalog error in `{section}`: {msg}")]
    Entry { section: &'static str, msg: String },
}

/// [`DisplayNames`] backed by per-language [`NameCatalog`]s.
///
/// Language lookup for display language `d`:
/// 1. catalog `d`
/// 2. the autonym table, when `d` is the language being named
/// 3. the fallback catalog
/// 4. the language code itself, lowercased
///
/// Regions skip step 2 and end with the uppercased region code.
#[derive(Clone, Debug)]
pub struct CatalogNames {
    catalogs: HashMap<String, NameCatalog>,
    autonyms: NameCatalog,
    fallback: String,
}

impl Default for CatalogNames {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogNames {
    /// No catalogs at all; every lookup falls through to the raw code.
    pub fn empty() -> Self {
        Self {
            catalogs: HashMap::new(),
            autonyms: NameCatalog::new(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// The catalogs compiled into the crate.
    pub fn builtin() -> Self {
        let mut names = Self::empty();
        for (lang, src) in BUILTIN_CATALOGS {
            match NameCatalog::parse(src) {
                Ok(cat) => names.add_catalog(lang, cat),
                Err(e) => error!(display_language = lang, error = %e, "bad builtin catalog"),
            }
        }
        match NameCatalog::parse(BUILTIN_AUTONYMS) {
            Ok(cat) => names.autonyms = cat,
            Err(e) => error!(error = %e, "bad builtin autonym table"),
        }
        names
    }

    /// Set the display language used when the requested one has no entry.
    pub fn with_fallback(mut self, display_language: &str) -> Self {
        self.fallback = display_language.to_lowercase();
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Add names for `display_language`, overriding existing entries key by key.
    pub fn add_catalog(&mut self, display_language: &str, catalog: NameCatalog) {
        let lang = display_language.to_lowercase();
        debug!(display_language = %lang, entries = catalog.len(), "adding name catalog");
        self.catalogs.entry(lang).or_default().merge(catalog);
    }

    /// Parse and add a YAML catalog for `display_language`.
    pub fn load_catalog_str(&mut self, display_language: &str, src: &str) -> Result<(), LocaleError> {
        let cat = NameCatalog::parse(src)?;
        self.add_catalog(display_language, cat);
        Ok(())
    }

    /// Load `<display_language>.yaml`; the file stem names the display language.
    pub fn load_catalog_file(&mut self, path: &Path) -> Result<(), LocaleError> {
        let src = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(CatalogParseError::Yaml(format!(
                "cannot infer display language from `{}`",
                path.display()
            ))
            .into());
        };
        self.load_catalog_str(lang, &src)
    }

    /// Display languages that have a catalog, sorted.
    pub fn display_languages(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.catalogs.keys().map(|s| s.as_str()).collect();
        out.sort_unstable();
        out
    }

    fn catalog(&self, display_language: &str) -> Option<&NameCatalog> {
        self.catalogs.get(display_language)
    }
}

impl DisplayNames for CatalogNames {
    fn language_name(&self, locale: &ResolvedLocale, display: &ResolvedLocale) -> String {
        let lang = locale.language().to_lowercase();
        if lang.is_empty() {
            return String::new();
        }
        let display_lang = display.language().to_lowercase();

        if let Some(name) = self.catalog(&display_lang).and_then(|c| c.language(&lang)) {
            return name.to_string();
        }
        if display_lang == lang {
            if let Some(name) = self.autonyms.language(&lang) {
                return name.to_string();
            }
        }
        if let Some(name) = self.catalog(&self.fallback).and_then(|c| c.language(&lang)) {
            return name.to_string();
        }
        lang
    }

    fn region_name(&self, locale: &ResolvedLocale, display: &ResolvedLocale) -> String {
        let region = locale.region();
        if region.is_empty() {
            return String::new();
        }
        let display_lang = display.language().to_lowercase();

        if let Some(name) = self.catalog(&display_lang).and_then(|c| c.region(region)) {
            return name.to_string();
        }
        if let Some(name) = self.catalog(&self.fallback).and_then(|c| c.region(region)) {
            return name.to_string();
        }
        region.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loc(language: &str, region: &str) -> ResolvedLocale {
        ResolvedLocale::new(language, region)
    }

    #[test]
    fn parse_yaml_and_lookup() {
        let src = r#"
languages:
  en: English
  PT: Portuguese
regions:
  us: United States
"#;
        let cat = NameCatalog::parse(src).unwrap();
        assert_eq!(cat.language("en"), Some("English"));
        assert_eq!(cat.language("EN"), Some("English"));
        assert_eq!(cat.language("pt"), Some("Portuguese"));
        assert_eq!(cat.region("US"), Some("United States"));
        assert_eq!(cat.region("us"), Some("United States"));
        assert_eq!(cat.len(), 3);
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        assert!(NameCatalog::parse("").unwrap().is_empty());
        assert!(NameCatalog::parse("languages:\n").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_sections_and_bad_values() {
        let err = NameCatalog::parse("currencies:\n  USD: Dollar\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::Yaml(_)));

        let err = NameCatalog::parse("languages:\n  en: 12\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::Entry { section: "languages", .. }));

        let err = NameCatalog::parse("regions:\n  bad key: x\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::Entry { section: "regions", .. }));

        let err = NameCatalog::parse("languages: [en, fr]\n").unwrap_err();
        assert!(matches!(err, CatalogParseError::Yaml(_)));
    }

    #[test]
    fn value_length_is_limited() {
        let src = format!("languages:\n  en: {}\n", "a".repeat(MAX_VALUE_BYTES + 1));
        let err = NameCatalog::parse(&src).unwrap_err();
        assert!(matches!(err, CatalogParseError::Entry { .. }));
    }

    #[test]
    fn builtin_catalogs_all_parse() {
        for (lang, src) in BUILTIN_CATALOGS {
            let cat = NameCatalog::parse(src).unwrap_or_else(|e| panic!("{lang}: {e}"));
            assert!(cat.language(lang).is_some(), "{lang} should name itself");
        }
        assert!(!NameCatalog::parse(BUILTIN_AUTONYMS).unwrap().is_empty());
        assert_eq!(
            CatalogNames::builtin().display_languages(),
            vec!["de", "en", "es", "fr", "ko"]
        );
    }

    #[test]
    fn language_names_follow_display_language() {
        let names = CatalogNames::builtin();
        assert_eq!(names.language_name(&loc("en", ""), &loc("en", "")), "English");
        assert_eq!(names.language_name(&loc("en", ""), &loc("de", "")), "Englisch");
        assert_eq!(names.language_name(&loc("es", ""), &loc("es", "")), "español");
        assert_eq!(names.language_name(&loc("EN", ""), &loc("FR", "")), "anglais");
    }

    #[test]
    fn autonym_used_when_display_has_no_catalog() {
        let names = CatalogNames::builtin();
        assert_eq!(names.language_name(&loc("ja", ""), &loc("ja", "")), "日本語");
        // Another display language without a catalog uses the fallback.
        assert_eq!(names.language_name(&loc("ko", ""), &loc("ja", "")), "Korean");
    }

    #[test]
    fn unknown_codes_fall_through() {
        let names = CatalogNames::builtin();
        assert_eq!(names.language_name(&loc("XX", ""), &loc("en", "")), "xx");
        assert_eq!(names.region_name(&loc("en", "zz"), &loc("en", "")), "ZZ");
        assert_eq!(names.region_name(&loc("en", ""), &loc("en", "")), "");
    }

    #[test]
    fn region_names_follow_display_language() {
        let names = CatalogNames::builtin();
        assert_eq!(names.region_name(&loc("en", "us"), &loc("en", "")), "United States");
        assert_eq!(
            names.region_name(&loc("en", "US"), &loc("de", "")),
            "Vereinigte Staaten"
        );
    }

    #[test]
    fn region_names_use_fallback_catalog() {
        let names = CatalogNames::builtin();
        // No Japanese catalog: the English fallback names the region.
        assert_eq!(names.region_name(&loc("en", "us"), &loc("ja", "")), "United States");

        let names = CatalogNames::builtin().with_fallback("fr");
        assert_eq!(names.region_name(&loc("pt", "br"), &loc("ja", "")), "Brésil");
    }

    #[test]
    fn loaded_catalog_overrides_builtin() {
        let mut names = CatalogNames::builtin();
        names
            .load_catalog_str("en", "languages:\n  en: British English\n  eo: Esperanto\n")
            .unwrap();
        assert_eq!(names.language_name(&loc("en", ""), &loc("en", "")), "British English");
        assert_eq!(names.language_name(&loc("eo", ""), &loc("en", "")), "Esperanto");
        // Untouched entries survive the merge.
        assert_eq!(names.language_name(&loc("fr", ""), &loc("en", "")), "French");
    }

    #[test]
    fn custom_fallback_catalog() {
        let names = CatalogNames::builtin().with_fallback("DE");
        assert_eq!(names.fallback(), "de");
        assert_eq!(names.language_name(&loc("fr", ""), &loc("ja", "")), "Französisch");
    }

    #[test]
    fn empty_names_use_raw_codes() {
        let names = CatalogNames::empty();
        assert_eq!(names.language_name(&loc("en", "gb"), &loc("en", "")), "en");
        assert_eq!(names.region_name(&loc("en", "gb"), &loc("en", "")), "GB");
    }
}
