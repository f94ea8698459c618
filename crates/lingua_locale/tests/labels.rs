use std::sync::Arc;

use lingua_locale::{
    detail_labels, language_label, resolve, sorted_labels, CatalogNames, FixedLocale,
    LocaleManager, ResolvedLocale,
};
use pretty_assertions::assert_eq;

fn english() -> ResolvedLocale {
    ResolvedLocale::bare("en")
}

fn manager() -> LocaleManager {
    LocaleManager::new(Arc::new(FixedLocale::new(english())))
}

#[test]
fn bare_two_letter_codes_resolve_without_region() {
    for code in ["en", "de", "es", "fr", "ja", "ko", "zh"] {
        let loc = resolve(Some(code), &english());
        assert_eq!(loc.language(), code);
        assert_eq!(loc.region(), "", "code={code}");
    }
}

#[test]
fn separator_at_index_two_yields_region() {
    for (code, region) in [("en_us", "us"), ("pt_BR", "BR"), ("zh-TW", "TW")] {
        assert_eq!(resolve(Some(code), &english()).region(), region);
    }
}

#[test]
fn invalid_lengths_have_no_label() {
    let names = CatalogNames::builtin();
    for code in ["", "x", "toolongcode"] {
        assert_eq!(language_label(code, &english(), &english(), &names), "", "code={code}");
    }
}

#[test]
fn english_labels() {
    let mgr = manager();
    assert_eq!(mgr.language_label("en", &english()), "English");
    assert_eq!(mgr.language_label("en_us", &english()), "English (United States)");
}

#[test]
fn german_viewer_sees_german_names() {
    let mgr = manager();
    let german = ResolvedLocale::bare("de");
    assert_eq!(mgr.language_label("en", &german), "Englisch");
    assert_eq!(mgr.language_label("en_gb", &german), "Englisch (Vereinigtes Königreich)");
}

#[test]
fn sorted_labels_absent_for_no_codes() {
    let mgr = manager();
    let none: &[&str] = &[];
    assert_eq!(mgr.sorted_labels(none, &english()), None);
}

#[test]
fn sorted_labels_in_english_order() {
    let mgr = manager();
    let list = mgr.sorted_labels(&["fr", "de"], &english()).unwrap();
    assert_eq!(list.labels, vec!["French", "German"]);
    assert_eq!(list.codes, vec!["fr", "de"]);
}

#[cfg(feature = "icu")]
#[test]
fn sorted_labels_use_locale_collation() {
    let mgr = manager();
    let spanish = ResolvedLocale::bare("es");
    let list = mgr.sorted_labels(&["zh", "ar", "en", "de"], &spanish).unwrap();
    // Code point order would put "Árabe" last.
    assert_eq!(list.labels, vec!["Alemán", "Árabe", "Chino", "Inglés"]);
    assert_eq!(list.codes, vec!["de", "ar", "zh", "en"]);
}

#[test]
fn detail_labels_use_each_language_itself() {
    let names = CatalogNames::builtin();
    assert_eq!(
        detail_labels(&["es"], &english(), &names),
        Some(vec!["Español".to_string()])
    );
    let mgr = manager();
    assert_eq!(
        mgr.detail_labels(&["ko", "en_us", "fr"]).unwrap(),
        vec!["한국어", "English (United States)", "Français"]
    );
}

#[test]
fn resolve_is_idempotent() {
    let a = resolve(Some("en_au"), &english());
    let b = resolve(Some("en_au"), &english());
    assert_eq!(a.language(), b.language());
    assert_eq!(a.region(), b.region());
}

#[test]
fn same_language_ignores_region() {
    assert!(manager().is_same_language("en_us"));
}

#[test]
fn free_functions_match_manager() {
    let names = CatalogNames::builtin();
    let mgr = manager();
    let codes = ["ja", "pt_PT", "ru"];
    let free = sorted_labels(
        &codes,
        &english(),
        &english(),
        &names,
        &lingua_locale::CodepointCollation,
    )
    .unwrap();
    assert_eq!(free, mgr.sorted_labels(&codes, &english()).unwrap());
    assert_eq!(free.labels, vec!["Japanese", "Portuguese (Portugal)", "Russian"]);
}
