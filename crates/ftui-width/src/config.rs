#![forbid(unsafe_code)]

//! Width configuration and its environment-derived default.
//!
//! Two switches select the classification policy: whether East Asian
//! ambiguous characters are wide, and whether emoji-like symbols stay narrow
//! in East Asian mode. The default for the first is derived from the locale;
//! the second defaults to off.
//!
//! Detection is deterministic given an environment lookup, so tests pass a
//! closure instead of mutating the process environment.

/// Explicit override: `1` forces East Asian mode, any other value disables it.
pub const ENV_EAST_ASIAN: &str = "RUNEWIDTH_EASTASIAN";

/// Locale variables, in precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Maximum multibyte length per charset; unknown charsets count as 1.
const MBLEN_TABLE: [(&str, usize); 15] = [
    ("utf-8", 6),
    ("utf8", 6),
    ("jis", 8),
    ("eucjp", 3),
    ("euckr", 2),
    ("euccn", 2),
    ("sjis", 2),
    ("cp932", 2),
    ("cp51932", 2),
    ("cp936", 2),
    ("cp949", 2),
    ("cp950", 2),
    ("big5", 2),
    ("gbk", 2),
    ("gb2312", 2),
];

/// Classification switches for a [`WidthClassifier`](crate::WidthClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidthConfig {
    /// Treat East Asian ambiguous characters as double-width.
    pub east_asian_width: bool,
    /// In East Asian mode, keep emoji and other loosely-wide symbols narrow.
    pub strict_emoji_neutral: bool,
}

impl WidthConfig {
    #[must_use]
    pub const fn new(east_asian_width: bool, strict_emoji_neutral: bool) -> Self {
        Self {
            east_asian_width,
            strict_emoji_neutral,
        }
    }

    #[must_use]
    pub const fn with_east_asian_width(mut self, enabled: bool) -> Self {
        self.east_asian_width = enabled;
        self
    }

    #[must_use]
    pub const fn with_strict_emoji_neutral(mut self, enabled: bool) -> Self {
        self.strict_emoji_neutral = enabled;
        self
    }

    /// Detect the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Detect the configuration using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            east_asian_width: east_asian_from_env_with(get_env),
            strict_emoji_neutral: false,
        }
    }
}

/// Decide East Asian mode from `RUNEWIDTH_EASTASIAN` and the locale.
#[must_use]
pub fn east_asian_from_env_with<F>(get_env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = get_env(ENV_EAST_ASIAN) {
        let enabled = value == "1";
        tracing::trace!(value = %value, enabled, "east asian width forced by {ENV_EAST_ASIAN}");
        return enabled;
    }

    let Some(locale) = LOCALE_VARS
        .iter()
        .filter_map(|key| get_env(key))
        .find(|value| !value.is_empty())
    else {
        return false;
    };

    let enabled = is_east_asian_locale(&locale);
    tracing::trace!(locale = %locale, enabled, "east asian width from locale");
    enabled
}

/// Whether a locale string such as `ja_JP.eucJP` implies East Asian widths.
#[must_use]
pub fn is_east_asian_locale(locale: &str) -> bool {
    if locale == "POSIX" || locale == "C" || locale.starts_with("C.") || locale.starts_with("C-")
    {
        return false;
    }

    let charset = locale_charset(locale)
        .unwrap_or(locale)
        .to_ascii_lowercase();
    if charset.ends_with("@cjk_narrow") {
        return false;
    }
    let charset = charset.split('@').next().unwrap_or_default();

    let mblen = MBLEN_TABLE
        .iter()
        .find_map(|&(name, len)| (name == charset).then_some(len))
        .unwrap_or(1);

    mblen > 1
        && (!charset.starts_with('u')
            || locale.starts_with("ja")
            || locale.starts_with("ko")
            || locale.starts_with("zh"))
}

/// Extract `charset` from `ll[l][_CC].charset`.
///
/// Language is two or three lower-case letters, the optional territory two
/// upper-case letters, and the charset must be non-empty.
fn locale_charset(locale: &str) -> Option<&str> {
    let (head, charset) = locale.split_once('.')?;
    if charset.is_empty() {
        return None;
    }

    let (language, territory) = match head.split_once('_') {
        Some((language, territory)) => (language, Some(territory)),
        None => (head, None),
    };
    let language_ok =
        (2..=3).contains(&language.len()) && language.bytes().all(|b| b.is_ascii_lowercase());
    let territory_ok = territory
        .is_none_or(|t| t.len() == 2 && t.bytes().all(|b| b.is_ascii_uppercase()));

    (language_ok && territory_ok).then_some(charset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn get_env<'a>(map: &'a HashMap<String, String>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).cloned()
    }

    fn detect(pairs: &[(&str, &str)]) -> bool {
        let env = map_env(pairs);
        east_asian_from_env_with(get_env(&env))
    }

    #[test]
    fn empty_environment_is_narrow() {
        assert!(!detect(&[]));
        assert_eq!(
            WidthConfig::from_env_with(|_| None),
            WidthConfig::new(false, false)
        );
    }

    #[test]
    fn override_wins_over_locale() {
        assert!(detect(&[(ENV_EAST_ASIAN, "1"), ("LANG", "en_US.UTF-8")]));
        assert!(!detect(&[(ENV_EAST_ASIAN, "0"), ("LANG", "ja_JP.UTF-8")]));
        assert!(!detect(&[(ENV_EAST_ASIAN, "yes"), ("LANG", "ja_JP.UTF-8")]));
    }

    #[test]
    fn cjk_utf8_locales_are_east_asian() {
        assert!(detect(&[("LANG", "ja_JP.UTF-8")]));
        assert!(detect(&[("LANG", "ko_KR.UTF-8")]));
        assert!(detect(&[("LANG", "zh_CN.utf8")]));
    }

    #[test]
    fn western_utf8_locale_is_narrow() {
        assert!(!detect(&[("LANG", "en_US.UTF-8")]));
        assert!(!detect(&[("LANG", "de_DE.utf8")]));
    }

    #[test]
    fn legacy_multibyte_charsets_are_east_asian() {
        assert!(detect(&[("LANG", "ja_JP.eucJP")]));
        assert!(detect(&[("LANG", "zh_TW.Big5")]));
        assert!(detect(&[("LANG", "en_US.sjis")]));
    }

    #[test]
    fn single_byte_charset_is_narrow() {
        assert!(!detect(&[("LANG", "ja_JP.ISO-8859-1")]));
    }

    #[test]
    fn c_and_posix_are_narrow() {
        for locale in ["C", "POSIX", "C.UTF-8", "C-utf8"] {
            assert!(!detect(&[("LANG", locale)]), "{locale} should be narrow");
        }
    }

    #[test]
    fn cjk_narrow_modifier_disables() {
        assert!(!detect(&[("LANG", "ja_JP.UTF-8@cjk_narrow")]));
        assert!(detect(&[("LANG", "ja_JP.eucJP@other")]));
    }

    #[test]
    fn locale_precedence_and_empty_values() {
        assert!(detect(&[("LC_ALL", "ja_JP.UTF-8"), ("LANG", "en_US.UTF-8")]));
        assert!(!detect(&[("LC_CTYPE", "en_US.UTF-8"), ("LANG", "ja_JP.UTF-8")]));
        assert!(detect(&[("LC_ALL", ""), ("LANG", "ja_JP.UTF-8")]));
    }

    #[test]
    fn locale_without_dot_uses_whole_string() {
        assert!(detect(&[("LANG", "sjis")]));
        assert!(!detect(&[("LANG", "ja_JP")]));
    }

    #[test]
    fn charset_parsing() {
        assert_eq!(locale_charset("ja_JP.UTF-8"), Some("UTF-8"));
        assert_eq!(locale_charset("haw.utf8"), Some("utf8"));
        assert_eq!(locale_charset("JA_jp.UTF-8"), None);
        assert_eq!(locale_charset("ja_JP."), None);
        assert_eq!(locale_charset("ja_JP"), None);
    }

    #[test]
    fn builders_return_new_values() {
        let base = WidthConfig::default();
        let wide = base.with_east_asian_width(true);
        assert!(!base.east_asian_width);
        assert!(wide.east_asian_width);
        assert!(wide.with_strict_emoji_neutral(true).strict_emoji_neutral);
    }
}
