#![forbid(unsafe_code)]

//! Width-aware string operations: truncate, truncate from the left, wrap,
//! and left-pad.
//!
//! Every operation walks extended grapheme clusters and asks the classifier
//! for their widths; none of them split a cluster.
//!
//! # Example
//! ```
//! use ftui_width::{WidthClassifier, WidthConfig};
//!
//! let c = WidthClassifier::new(WidthConfig::default());
//! assert_eq!(c.truncate("こんにちは世界", 9, "…"), "こんにち…");
//! assert_eq!(c.truncate_left("source", 4, ""), "ce");
//! assert_eq!(c.wrap("あいうえお", 4), "あい\nうえ\nお");
//! assert_eq!(c.fill_left("あ", 4), "  あ");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::classifier::WidthClassifier;

impl WidthClassifier {
    /// Cut `text` so that it plus `tail` fits in `width` columns.
    ///
    /// Text that already fits is returned unchanged, without `tail`. If
    /// `tail` alone is wider than `width`, the result is just `tail`.
    #[must_use]
    pub fn truncate(&self, text: &str, width: usize, tail: &str) -> String {
        if self.display_width(text) <= width {
            return text.to_string();
        }

        let cut = match width.checked_sub(self.display_width(tail)) {
            Some(budget) => self.fitting_prefix_len(text, budget),
            None => 0,
        };

        let mut result = String::with_capacity(cut + tail.len());
        result.push_str(&text[..cut]);
        result.push_str(tail);
        result
    }

    /// Keep the end of `text`, dropping clusters from the front, and prepend
    /// `prefix`.
    ///
    /// Clusters are dropped up to and including the first one at which the
    /// running width reaches `width`. Text that already fits yields `prefix`
    /// alone.
    #[must_use]
    pub fn truncate_left(&self, text: &str, width: usize, prefix: &str) -> String {
        if self.display_width(text) <= width {
            return prefix.to_string();
        }

        let mut partial = 0;
        let mut start = text.len();
        for (offset, grapheme) in text.grapheme_indices(true) {
            let grapheme_width = self.grapheme_width(grapheme);
            if partial + grapheme_width >= width {
                start = offset + grapheme.len();
                break;
            }
            partial += grapheme_width;
        }

        let mut result = String::with_capacity(prefix.len() + text.len() - start);
        result.push_str(prefix);
        result.push_str(&text[start..]);
        result
    }

    /// Insert line breaks so that no line exceeds `width` columns.
    ///
    /// Breaks fall between clusters, with no regard for words. Existing `\n`
    /// characters are kept and reset the column. A cluster wider than `width`
    /// still gets a line of its own.
    #[must_use]
    pub fn wrap(&self, text: &str, width: usize) -> String {
        let mut result = String::with_capacity(text.len());
        let mut line_width = 0;

        for grapheme in text.graphemes(true) {
            if grapheme == "\n" {
                result.push('\n');
                line_width = 0;
                continue;
            }

            let grapheme_width = self.grapheme_width(grapheme);
            if line_width + grapheme_width > width {
                result.push('\n');
                line_width = grapheme_width;
            } else {
                line_width += grapheme_width;
            }
            result.push_str(grapheme);
        }

        result
    }

    /// Left-pad `text` with spaces up to `width` columns.
    #[must_use]
    pub fn fill_left(&self, text: &str, width: usize) -> String {
        let text_width = self.display_width(text);
        if text_width >= width {
            return text.to_string();
        }

        let padding = width - text_width;
        let mut result = String::with_capacity(padding + text.len());
        result.extend(std::iter::repeat_n(' ', padding));
        result.push_str(text);
        result
    }

    /// Byte length of the longest cluster-aligned prefix of `text` that fits
    /// in `budget` columns.
    fn fitting_prefix_len(&self, text: &str, budget: usize) -> usize {
        let mut partial = 0;
        for (offset, grapheme) in text.grapheme_indices(true) {
            let grapheme_width = self.grapheme_width(grapheme);
            if partial + grapheme_width > budget {
                return offset;
            }
            partial += grapheme_width;
        }
        text.len()
    }
}

#[cfg(test)]
trait TestWidth {
    fn width(&self) -> usize;
}

#[cfg(test)]
impl TestWidth for str {
    fn width(&self) -> usize {
        WidthClassifier::default().display_width(self)
    }
}

#[cfg(test)]
impl TestWidth for String {
    fn width(&self) -> usize {
        self.as_str().width()
    }
}

#[cfg(test)]
mod tests {
    use super::TestWidth;
    use super::*;
    use crate::config::WidthConfig;

    fn classifier() -> WidthClassifier {
        WidthClassifier::new(WidthConfig::default())
    }

    // ==========================================================================
    // truncate
    // ==========================================================================

    #[test]
    fn truncate_returns_fitting_text_unchanged() {
        let c = classifier();
        assert_eq!(c.truncate("あいうえお", 10, "..."), "あいうえお");
        assert_eq!(c.truncate("あいうえお", 15, "..."), "あいうえお");
        assert_eq!(c.truncate("", 0, "..."), "");
    }

    #[test]
    fn truncate_appends_tail() {
        let c = classifier();
        let width = 30 + "...".width();
        let result = c.truncate("あいうえおかきくけこさしすせそたちつてと", width, "...");
        assert_eq!(result, "あいうえおかきくけこさしすせそ...");
        assert_eq!(result.width(), width);
    }

    #[test]
    fn truncate_never_splits_a_wide_char() {
        let c = classifier();
        // Budget 4 after the tail: "ab" (2) + "あ" (2) fits, "い" does not.
        assert_eq!(c.truncate("abあいう", 5, "~"), "abあ~");
        // Budget 3: "ab" fits, "あ" would overshoot.
        assert_eq!(c.truncate("abあいう", 4, "~"), "ab~");
    }

    #[test]
    fn truncate_keeps_combining_sequences_whole() {
        let c = classifier();
        assert_eq!(c.truncate("e\u{301}e\u{301}e\u{301}", 2, "."), "e\u{301}.");
    }

    #[test]
    fn truncate_tail_wider_than_width_yields_tail() {
        let c = classifier();
        assert_eq!(c.truncate("abcdef", 2, "..."), "...");
        assert_eq!(c.truncate("abcdef", 0, "…"), "…");
    }

    // ==========================================================================
    // truncate_left
    // ==========================================================================

    #[test]
    fn truncate_left_cases() {
        let c = classifier();
        let cases = [
            ("source", 4, "", "ce"),
            ("source", 4, "...", "...ce"),
            ("あいうえお", 6, "", "えお"),
            ("あいうえお", 6, "...", "...えお"),
            ("あいうえお", 10, "", ""),
            ("あいうえお", 10, "...", "..."),
            ("あいうえお", 5, "", "えお"),
            ("Aあいうえお", 5, "", "うえお"),
        ];
        for (text, width, prefix, expected) in cases {
            assert_eq!(
                c.truncate_left(text, width, prefix),
                expected,
                "truncate_left({text:?}, {width}, {prefix:?})"
            );
        }
    }

    #[test]
    fn truncate_left_zero_width_drops_first_cluster() {
        let c = classifier();
        assert_eq!(c.truncate_left("abc", 0, ""), "bc");
    }

    // ==========================================================================
    // wrap
    // ==========================================================================

    #[test]
    fn wrap_breaks_by_columns() {
        let c = classifier();
        let text = "東京特許許可局局長はよく柿喰う客だ/東京特許許可局局長はよく柿喰う客だ\n123456789012345678901234567890\nEND";
        let expected = "東京特許許可局局長はよく柿喰う\n客だ/東京特許許可局局長はよく\n柿喰う客だ\n123456789012345678901234567890\nEND";
        assert_eq!(c.wrap(text, 30), expected);
    }

    #[test]
    fn wrap_newline_resets_column() {
        let c = classifier();
        assert_eq!(c.wrap("abc\nabc", 3), "abc\nabc");
        assert_eq!(c.wrap("abcd", 3), "abc\nd");
    }

    #[test]
    fn wrap_places_oversized_cluster_alone() {
        let c = classifier();
        assert_eq!(c.wrap("aあb", 1), "a\nあ\nb");
    }

    #[test]
    fn wrap_empty_and_zero_width_input() {
        let c = classifier();
        assert_eq!(c.wrap("", 10), "");
        assert_eq!(c.wrap("\u{200B}\u{200B}", 0), "\u{200B}\u{200B}");
    }

    // ==========================================================================
    // fill_left
    // ==========================================================================

    #[test]
    fn fill_left_pads_to_width() {
        let c = classifier();
        assert_eq!(c.fill_left("あxいうえお", 15), "    あxいうえお");
        assert_eq!(c.fill_left("あいうえお", 10), "あいうえお");
        assert_eq!(c.fill_left("", 3), "   ");
    }

    #[test]
    fn fill_left_never_shortens() {
        let c = classifier();
        assert_eq!(c.fill_left("abcdef", 3), "abcdef");
        assert_eq!(c.fill_left("abc", 0), "abc");
    }
}

#[cfg(test)]
mod proptests {
    use super::TestWidth;
    use super::*;
    use proptest::prelude::*;

    fn classifier() -> WidthClassifier {
        WidthClassifier::default()
    }

    proptest! {
        #[test]
        fn truncate_fits_when_tail_fits(
            s in "[a-zあ-んア-ン ]{0,40}",
            width in 3usize..40,
        ) {
            let result = classifier().truncate(&s, width, "...");
            prop_assert!(result.width() <= width, "'{}' exceeds {}", result, width);
        }

        #[test]
        fn fill_left_reaches_exact_width(s in "[a-zあ-ん]{0,20}", width in 0usize..50) {
            let result = classifier().fill_left(&s, width);
            prop_assert_eq!(result.width(), width.max(s.width()));
            prop_assert!(result.ends_with(s.as_str()));
        }

        #[test]
        fn wrap_lines_fit(s in "[a-zあ-ん\n]{0,60}", width in 2usize..20) {
            let wrapped = classifier().wrap(&s, width);
            for line in wrapped.split('\n') {
                prop_assert!(line.width() <= width, "line '{}' exceeds {}", line, width);
            }
            prop_assert_eq!(wrapped.replace('\n', ""), s.replace('\n', ""));
        }

        #[test]
        fn truncate_left_keeps_a_suffix(s in "[a-zあ-ん]{0,30}", width in 0usize..30) {
            let result = classifier().truncate_left(&s, width, "");
            prop_assert!(s.ends_with(result.as_str()));
        }
    }
}
