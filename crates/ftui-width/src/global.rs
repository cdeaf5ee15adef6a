#![forbid(unsafe_code)]

//! Process-wide default classifier and the free functions built on it.
//!
//! The default is initialised once, on first use, from
//! [`WidthConfig::from_env`] with its lookup table already built. It is never
//! mutated afterwards; code that needs a different configuration should own
//! its own [`WidthClassifier`].

use std::sync::OnceLock;

use crate::classifier::WidthClassifier;
use crate::config::WidthConfig;

static DEFAULT: OnceLock<WidthClassifier> = OnceLock::new();

/// The shared classifier configured from the environment.
#[must_use]
pub fn default_classifier() -> &'static WidthClassifier {
    DEFAULT.get_or_init(|| {
        let config = WidthConfig::from_env();
        tracing::debug!(
            east_asian_width = config.east_asian_width,
            strict_emoji_neutral = config.strict_emoji_neutral,
            "initialising default width classifier"
        );
        WidthClassifier::with_lookup_table(config)
    })
}

/// Width of a code point under the default classifier.
#[inline]
#[must_use]
pub fn rune_width(code_point: u32) -> usize {
    default_classifier().rune_width(code_point)
}

#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    default_classifier().char_width(ch)
}

#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    default_classifier().grapheme_width(grapheme)
}

#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    default_classifier().display_width(text)
}

/// See [`WidthClassifier::truncate`].
#[must_use]
pub fn truncate(text: &str, width: usize, tail: &str) -> String {
    default_classifier().truncate(text, width, tail)
}

/// See [`WidthClassifier::truncate_left`].
#[must_use]
pub fn truncate_left(text: &str, width: usize, prefix: &str) -> String {
    default_classifier().truncate_left(text, width, prefix)
}

/// See [`WidthClassifier::wrap`].
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    default_classifier().wrap(text, width)
}

/// See [`WidthClassifier::fill_left`].
#[must_use]
pub fn fill_left(text: &str, width: usize) -> String {
    default_classifier().fill_left(text, width)
}

/// Width queries on code points, chars, and strings via the default
/// classifier.
///
/// ```
/// use ftui_width::{RuneWidthExt, RuneWidthStrExt};
///
/// assert_eq!("hello".rune_width(), 5);
/// assert_eq!('世'.rune_width(), 2);
/// assert_eq!(0x0301u32.rune_width(), 0);
/// assert_eq!("source".truncate_left_width(4, ""), "ce");
/// ```
pub trait RuneWidthExt {
    /// Width in terminal columns.
    fn rune_width(&self) -> usize;
}

impl RuneWidthExt for u32 {
    fn rune_width(&self) -> usize {
        rune_width(*self)
    }
}

impl RuneWidthExt for char {
    fn rune_width(&self) -> usize {
        char_width(*self)
    }
}

impl RuneWidthExt for str {
    fn rune_width(&self) -> usize {
        display_width(self)
    }
}

/// Width-aware string operations via the default classifier.
pub trait RuneWidthStrExt {
    #[must_use]
    fn truncate_width(&self, width: usize, tail: &str) -> String;
    #[must_use]
    fn truncate_left_width(&self, width: usize, prefix: &str) -> String;
    #[must_use]
    fn wrap_width(&self, width: usize) -> String;
    #[must_use]
    fn fill_left_width(&self, width: usize) -> String;
}

impl RuneWidthStrExt for str {
    fn truncate_width(&self, width: usize, tail: &str) -> String {
        truncate(self, width, tail)
    }

    fn truncate_left_width(&self, width: usize, prefix: &str) -> String {
        truncate_left(self, width, prefix)
    }

    fn wrap_width(&self, width: usize) -> String {
        wrap(self, width)
    }

    fn fill_left_width(&self, width: usize) -> String {
        fill_left(self, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn default_is_built_once_and_shared() {
        let first = default_classifier();
        assert!(first.is_built());
        let second = default_classifier();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn concurrent_first_access_sees_one_instance() {
        let addresses: Vec<usize> = (0..4)
            .map(|_| thread::spawn(|| std::ptr::from_ref(default_classifier()) as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn free_functions_match_default_classifier() {
        let c = default_classifier();
        // Locale-independent samples: ASCII, wide, and zero-width.
        for text in ["hello", "世界", "a\u{301}", "こんにちわ\0世界"] {
            assert_eq!(display_width(text), c.display_width(text));
            assert_eq!(text.rune_width(), c.display_width(text));
        }
        assert_eq!(display_width("こんにちわ\0世界"), 14);
        assert_eq!(char_width('世'), 2);
        assert_eq!(rune_width(0x11_0000), 0);
        assert_eq!(grapheme_width("e\u{301}"), 1);
    }

    #[test]
    fn string_extensions_delegate() {
        assert_eq!("source".truncate_left_width(4, "..."), "...ce");
        assert_eq!("あいうえお".truncate_width(10, "..."), "あいうえお");
        assert_eq!("abcd".wrap_width(2), "ab\ncd");
        assert_eq!("あ".fill_left_width(3), " あ");
    }
}
