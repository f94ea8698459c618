use crate::collate::Collation;
use crate::locale::{resolve, ResolvedLocale};
use crate::services::DisplayNames;

const MIN_CODE_LEN: usize = 2;
const MAX_CODE_LEN: usize = 6;

/// Uppercase the first character and keep the rest as is.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One entry of a language picker: what to show and the code it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLabel {
    pub label: String,
    pub code: String,
}

/// Display labels and their codes, index-aligned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelList {
    pub labels: Vec<String>,
    pub codes: Vec<String>,
}

impl LabelList {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .zip(&self.codes)
            .map(|(l, c)| (l.as_str(), c.as_str()))
    }
}

impl FromIterator<DisplayLabel> for LabelList {
    fn from_iter<T: IntoIterator<Item = DisplayLabel>>(iter: T) -> Self {
        let mut out = LabelList::default();
        for entry in iter {
            out.labels.push(entry.label);
            out.codes.push(entry.code);
        }
        out
    }
}

/// Human-readable name for a language code, rendered for `display`.
///
/// `"en_us"` shown to an English viewer is `"English (United States)"`.
/// Codes outside 2..=6 characters have no display form and yield `""`.
/// `current` only matters for codes that resolve to the default locale,
/// which the length gate already rules out; it is threaded through so the
/// result never depends on ambient state.
pub fn language_label(
    code: &str,
    display: &ResolvedLocale,
    current: &ResolvedLocale,
    names: &dyn DisplayNames,
) -> String {
    let len = code.chars().count();
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&len) {
        return String::new();
    }

    let locale = resolve(Some(code), current);
    let language = capitalize(&names.language_name(&locale, display));
    let country = names.region_name(&locale, display);

    if country.is_empty() {
        language
    } else {
        format!("{language} ({country})")
    }
}

/// Labels for `codes` sorted by `sort_locale`'s collation, with their codes.
///
/// Labels are rendered for `sort_locale` too. Equal labels keep a stable order
/// by code. Returns `None` when there is nothing to display.
pub fn sorted_labels<S: AsRef<str>>(
    codes: &[S],
    sort_locale: &ResolvedLocale,
    current: &ResolvedLocale,
    names: &dyn DisplayNames,
    collation: &dyn Collation,
) -> Option<LabelList> {
    if codes.is_empty() {
        return None;
    }

    let mut entries: Vec<DisplayLabel> = codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            DisplayLabel {
                label: capitalize(&language_label(code, sort_locale, current, names)),
                code: code.to_string(),
            }
        })
        .collect();

    let cmp = collation.comparator(sort_locale);
    entries.sort_by(|a, b| cmp(&a.label, &b.label).then_with(|| cmp(&a.code, &b.code)));

    Some(entries.into_iter().collect())
}

/// Each language's label rendered in that language itself, in input order.
///
/// `"es"` yields `"Español"` whoever is looking. Returns `None` for no codes.
pub fn detail_labels<S: AsRef<str>>(
    codes: &[S],
    current: &ResolvedLocale,
    names: &dyn DisplayNames,
) -> Option<Vec<String>> {
    if codes.is_empty() {
        return None;
    }

    Some(
        codes
            .iter()
            .map(|code| {
                let code = code.as_ref();
                let own = resolve(Some(code), current);
                capitalize(&language_label(code, &own, current, names))
            })
            .collect(),
    )
}
