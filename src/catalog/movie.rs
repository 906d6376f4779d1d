//! Movie record schema as delivered by the remote catalog.
//!
//! Every field except `title` is optional upstream, and the accessors on
//! [`Movie`] resolve absent (or empty) values to the fallbacks shown on a
//! card, so nothing downstream has to care about missing data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Image shown on cards whose record has no `image`.
pub const PLACEHOLDER_IMAGE: &str = "https://dummyimage.com/300x200/000/fff";

/// Text used when a field has no value.
pub const NOT_AVAILABLE: &str = "N/A";

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// A value the catalog sends either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(serde_json::Number),
    Text(String),
}

impl NumberLike {
    /// Numeric reading of the value.
    ///
    /// Text is read up to the longest leading decimal number, so `"7.5/10"`
    /// yields `7.5` and `"great"` yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberLike::Number(number) => number.as_f64(),
            NumberLike::Text(text) => parse_leading_float(text),
        }
    }

    /// Blank text and a numeric zero both read as "no value" on a card.
    fn is_blank(&self) -> bool {
        match self {
            NumberLike::Number(number) => number.as_f64() == Some(0.0),
            NumberLike::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for NumberLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 9.0 prints as 9
            NumberLike::Number(number) => match number.as_f64() {
                Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
                    write!(f, "{}", value as i64)
                }
                _ => write!(f, "{number}"),
            },
            NumberLike::Text(text) => f.write_str(text),
        }
    }
}

/// Any JSON value, narrowed to what a text or numeric field can use.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(serde_json::Number),
    Text(String),
    // Only consumed so the input is accepted.
    Other(#[allow(dead_code)] IgnoredAny),
}

/// One movie as delivered by the catalog.
///
/// Records have no identity of their own: two entries with the same title
/// are distinct, and position in the fetched list is all that tells them
/// apart.
///
/// Scalar fields are read leniently: a number where text is expected
/// becomes its decimal text, and a value of any other shape counts as
/// absent, so one hand-edited record cannot fail the whole catalog.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Movie {
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<NumberLike>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration: Option<NumberLike>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub cast: Vec<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn image_url(&self) -> &str {
        present(&self.image).unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn director_label(&self) -> &str {
        present(&self.director).unwrap_or(NOT_AVAILABLE)
    }

    pub fn genre_label(&self) -> &str {
        present(&self.genre).unwrap_or(NOT_AVAILABLE)
    }

    pub fn release_date_label(&self) -> &str {
        present(&self.release_date).unwrap_or(NOT_AVAILABLE)
    }

    pub fn rating_label(&self) -> String {
        match &self.rating {
            Some(rating) if !rating.is_blank() => rating.to_string(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn duration_label(&self) -> String {
        match &self.duration {
            Some(duration) if !duration.is_blank() => format!("{duration} min"),
            _ => "Unknown".to_string(),
        }
    }

    pub fn cast_label(&self) -> String {
        if self.cast.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.cast.join(", ")
        }
    }

    /// Numeric rating used for ordering; unreadable ratings count as 0.
    pub fn rating_value(&self) -> f64 {
        self.rating
            .as_ref()
            .and_then(NumberLike::as_f64)
            .unwrap_or(0.0)
    }

    /// Parsed release date, or `None` when absent or unreadable.
    pub fn release_timestamp(&self) -> Option<NaiveDateTime> {
        self.release_date.as_deref().and_then(parse_release_date)
    }

    /// Genre used for ordering; missing genres compare as the empty string.
    pub fn genre_key(&self) -> &str {
        self.genre.as_deref().unwrap_or("")
    }

    /// True when `needle_lower` (already lowercased) occurs in the title,
    /// the genre, or any tag. A missing genre simply does not match.
    pub fn matches(&self, needle_lower: &str) -> bool {
        contains_folded(&self.title, needle_lower)
            || self
                .genre
                .as_deref()
                .is_some_and(|genre| contains_folded(genre, needle_lower))
            || self
                .tags
                .iter()
                .any(|tag| contains_folded(tag, needle_lower))
    }
}

/// Collation-style ordering that sorts `"drama"` next to `"Drama"` and
/// `"Épouvante"` between `"Drame"` and `"Fantastique"`.
///
/// Text is compared with accents stripped and case folded first. Ties go
/// to the unaccented spelling, then to the lowercase spelling, and only
/// then does raw code-point order decide.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Lowercase letters with combining marks removed.
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    folded(text).filter(|ch| !is_combining_mark(*ch))
}

/// Lowercase canonical decomposition, accents kept as separate marks.
fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => Some(text),
        Lenient::Number(number) => Some(number.to_string()),
        Lenient::Other(_) => None,
    })
}

fn lenient_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<NumberLike>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Number(number) => Some(NumberLike::Number(number)),
        Lenient::Text(text) => Some(NumberLike::Text(text)),
        Lenient::Other(_) => None,
    })
}

/// A list of text entries. Numbers become text; anything else, including
/// a bare string where a list belongs, is dropped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrOther {
        List(Vec<Lenient>),
        Other(#[allow(dead_code)] IgnoredAny),
    }

    Ok(match ListOrOther::deserialize(deserializer)? {
        ListOrOther::List(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Lenient::Text(text) => Some(text),
                Lenient::Number(number) => Some(number.to_string()),
                Lenient::Other(_) => None,
            })
            .collect(),
        ListOrOther::Other(_) => Vec::new(),
    })
}

fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_release_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // Bare year, e.g. "1999"
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .and_then(|date| date.and_hms_opt(0, 0, 0));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_float_reads_prefix() {
        assert_eq!(parse_leading_float("7.5/10"), Some(7.5));
        assert_eq!(parse_leading_float("  9"), Some(9.0));
        assert_eq!(parse_leading_float("-2.5e1x"), Some(-25.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("8."), Some(8.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
    }

    #[test]
    fn leading_float_rejects_non_numbers() {
        assert_eq!(parse_leading_float("great"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("-."), None);
    }

    #[test]
    fn release_dates_in_common_shapes() {
        let expected = NaiveDate::from_ymd_opt(2010, 7, 16)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        assert_eq!(parse_release_date("2010-07-16"), Some(expected));
        assert_eq!(parse_release_date("2010/07/16"), Some(expected));
        assert_eq!(parse_release_date("07/16/2010"), Some(expected));
        assert_eq!(parse_release_date("July 16, 2010"), Some(expected));
        assert_eq!(parse_release_date("16 Jul 2010"), Some(expected));
        assert_eq!(parse_release_date("2010-07-16T00:00:00Z"), Some(expected));
        assert!(parse_release_date("1999").is_some());
        assert_eq!(parse_release_date("someday"), None);
        assert_eq!(parse_release_date("  "), None);
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("drama", "Horror"), Ordering::Less);
        assert_eq!(locale_compare("Action", "comedy"), Ordering::Less);
        assert_eq!(locale_compare("drama", "Drama"), Ordering::Less);
        assert_eq!(locale_compare("", "Drama"), Ordering::Less);
        assert_eq!(locale_compare("Drama", "Drama"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_folds_accents() {
        let mut genres = vec!["Western", "Épouvante", "Drame", "Fantastique"];
        genres.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(genres, ["Drame", "Épouvante", "Fantastique", "Western"]);

        assert_eq!(locale_compare("drame", "dramé"), Ordering::Less);
        assert_eq!(locale_compare("épouvante", "Épouvante"), Ordering::Less);
        assert_eq!(locale_compare("Éa", "eb"), Ordering::Less);
    }

    #[test]
    fn integral_numbers_print_without_fraction() {
        let movie: Movie =
            serde_json::from_str(r#"{"title":"A","rating":9.0,"duration":120.0}"#).unwrap();
        assert_eq!(movie.rating_label(), "9");
        assert_eq!(movie.duration_label(), "120 min");

        let fractional: Movie = serde_json::from_str(r#"{"title":"B","rating":7.25}"#).unwrap();
        assert_eq!(fractional.rating_label(), "7.25");
    }

    #[test]
    fn numeric_zero_falls_back() {
        let movie: Movie =
            serde_json::from_str(r#"{"title":"A","rating":0,"duration":0.0}"#).unwrap();
        assert_eq!(movie.rating_label(), NOT_AVAILABLE);
        assert_eq!(movie.duration_label(), "Unknown");

        let textual: Movie = serde_json::from_str(r#"{"title":"B","rating":"0"}"#).unwrap();
        assert_eq!(textual.rating_label(), "0");
    }

    #[test]
    fn deserializes_sparse_record() {
        let movie: Movie = serde_json::from_str(r#"{"title":"Heat","tags":null}"#).unwrap();
        assert_eq!(movie.title, "Heat");
        assert!(movie.tags.is_empty());
        assert!(movie.cast.is_empty());
        assert_eq!(movie.director_label(), NOT_AVAILABLE);
        assert_eq!(movie.rating_label(), NOT_AVAILABLE);
        assert_eq!(movie.duration_label(), "Unknown");
        assert_eq!(movie.image_url(), PLACEHOLDER_IMAGE);
        assert_eq!(movie.cast_label(), NOT_AVAILABLE);
    }

    #[test]
    fn rating_accepts_numbers_and_strings() {
        let numeric: Movie = serde_json::from_str(r#"{"title":"A","rating":8.8}"#).unwrap();
        let textual: Movie = serde_json::from_str(r#"{"title":"B","rating":"7"}"#).unwrap();
        let junk: Movie = serde_json::from_str(r#"{"title":"C","rating":"n/a"}"#).unwrap();

        assert_eq!(numeric.rating_value(), 8.8);
        assert_eq!(numeric.rating_label(), "8.8");
        assert_eq!(textual.rating_value(), 7.0);
        assert_eq!(textual.rating_label(), "7");
        assert_eq!(junk.rating_value(), 0.0);
    }

    #[test]
    fn blank_fields_fall_back() {
        let movie: Movie =
            serde_json::from_str(r#"{"title":"D","director":"","rating":"","image":" "}"#)
                .unwrap();
        assert_eq!(movie.director_label(), NOT_AVAILABLE);
        assert_eq!(movie.rating_label(), NOT_AVAILABLE);
        assert_eq!(movie.image_url(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn matches_title_genre_and_tags() {
        let movie = Movie {
            genre: Some("Sci-Fi".to_string()),
            tags: vec!["Dreams".to_string()],
            ..Movie::new("Inception")
        };
        assert!(movie.matches("incep"));
        assert!(movie.matches("sci"));
        assert!(movie.matches("dream"));
        assert!(!movie.matches("western"));

        let no_genre = Movie::new("Heat");
        assert!(!no_genre.matches("drama"));
        assert!(no_genre.matches(""));
    }

    #[test]
    fn cast_keeps_order() {
        let movie = Movie {
            cast: vec!["Al Pacino".to_string(), "Robert De Niro".to_string()],
            ..Movie::new("Heat")
        };
        assert_eq!(movie.cast_label(), "Al Pacino, Robert De Niro");
    }
}
