#![forbid(unsafe_code)]

//! Width classification policy and its cached lookup table.
//!
//! A [`WidthClassifier`] answers "how many terminal columns does this code
//! point take" under a [`WidthConfig`]. It is in one of two states:
//!
//! - **Unbuilt**: each query walks the policy against the interval tables.
//! - **Built**: each query is a single packed-table read.
//!
//! [`build_lookup_table`](WidthClassifier::build_lookup_table) moves to
//! Built. Changing the configuration drops the table and moves back to
//! Unbuilt, so answers always reflect the current configuration.
//!
//! # Example
//!
//! ```
//! use ftui_width::{WidthClassifier, WidthConfig};
//!
//! let mut classifier = WidthClassifier::new(WidthConfig::default());
//! assert_eq!(classifier.display_width("■㈱の世界①"), 10);
//!
//! classifier.set_east_asian_width(true);
//! classifier.build_lookup_table();
//! assert_eq!(classifier.display_width("■㈱の世界①"), 12);
//! ```

use std::time::Instant;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::WidthConfig;
use crate::interval::{MAX_CODE_POINT, any_contains};
use crate::lookup::LookupTable;
use crate::tables::{AMBIGUOUS, COMBINING, DOUBLE_WIDTH, EMOJI, NARROW, NONPRINTING};

/// Maps code points, graphemes, and strings to terminal column widths.
#[derive(Debug, Clone, Default)]
pub struct WidthClassifier {
    config: WidthConfig,
    lut: Option<LookupTable>,
}

impl WidthClassifier {
    /// Create an Unbuilt classifier; queries evaluate the policy directly.
    #[must_use]
    pub const fn new(config: WidthConfig) -> Self {
        Self { config, lut: None }
    }

    /// Create a classifier and build its lookup table up front.
    #[must_use]
    pub fn with_lookup_table(config: WidthConfig) -> Self {
        let mut classifier = Self::new(config);
        classifier.build_lookup_table();
        classifier
    }

    #[must_use]
    pub const fn config(&self) -> WidthConfig {
        self.config
    }

    /// Whether queries are answered from the lookup table.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.lut.is_some()
    }

    /// The current lookup table, if built.
    #[must_use]
    pub const fn lookup_table(&self) -> Option<&LookupTable> {
        self.lut.as_ref()
    }

    /// Evaluate the policy for every code point and cache the result.
    ///
    /// Always rebuilds from scratch; calling it twice yields identical tables.
    pub fn build_lookup_table(&mut self) {
        let started = Instant::now();
        let config = self.config;
        let table = LookupTable::build(|code_point| policy_width(code_point, config));
        tracing::debug!(
            east_asian_width = config.east_asian_width,
            strict_emoji_neutral = config.strict_emoji_neutral,
            elapsed_us = started.elapsed().as_micros(),
            "built width lookup table"
        );
        self.lut = Some(table);
    }

    /// Replace the configuration.
    ///
    /// A different configuration discards the lookup table; call
    /// [`build_lookup_table`](Self::build_lookup_table) to rebuild it.
    pub fn set_config(&mut self, config: WidthConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        if self.lut.take().is_some() {
            tracing::debug!(
                east_asian_width = config.east_asian_width,
                strict_emoji_neutral = config.strict_emoji_neutral,
                "width config changed, lookup table invalidated"
            );
        }
    }

    pub fn set_east_asian_width(&mut self, enabled: bool) {
        self.set_config(self.config.with_east_asian_width(enabled));
    }

    pub fn set_strict_emoji_neutral(&mut self, enabled: bool) {
        self.set_config(self.config.with_strict_emoji_neutral(enabled));
    }

    /// Width of a single code point: 0, 1, or 2.
    ///
    /// Anything above U+10FFFF is 0.
    #[inline]
    #[must_use]
    pub fn rune_width(&self, code_point: u32) -> usize {
        if code_point > MAX_CODE_POINT {
            return 0;
        }
        match &self.lut {
            Some(table) => table.get(code_point),
            None => policy_width(code_point, self.config),
        }
    }

    #[inline]
    #[must_use]
    pub fn char_width(&self, ch: char) -> usize {
        self.rune_width(u32::from(ch))
    }

    /// Width of one user-perceived character: the sum over its scalars.
    #[must_use]
    pub fn grapheme_width(&self, grapheme: &str) -> usize {
        grapheme.chars().map(|ch| self.char_width(ch)).sum()
    }

    /// Width of a string: the sum over its grapheme clusters.
    #[must_use]
    pub fn display_width(&self, text: &str) -> usize {
        text.graphemes(true)
            .map(|grapheme| self.grapheme_width(grapheme))
            .sum()
    }
}

/// The classification policy, evaluated against the interval tables.
///
/// Branch order matters: several code points sit in more than one table and
/// the first matching branch decides.
fn policy_width(code_point: u32, config: WidthConfig) -> usize {
    if code_point > MAX_CODE_POINT {
        return 0;
    }

    if !config.east_asian_width {
        if code_point < 0x20 || (0x7F..=0x9F).contains(&code_point) || code_point == 0xAD {
            0
        } else if code_point < 0x300 || NARROW.contains(code_point) {
            1
        } else if any_contains(&[NONPRINTING, COMBINING], code_point) {
            0
        } else if DOUBLE_WIDTH.contains(code_point) {
            2
        } else {
            1
        }
    } else if any_contains(&[NONPRINTING, COMBINING], code_point) {
        0
    } else if NARROW.contains(code_point) {
        1
    } else if any_contains(&[AMBIGUOUS, DOUBLE_WIDTH], code_point) {
        2
    } else if !config.strict_emoji_neutral && any_contains(&[AMBIGUOUS, EMOJI, NARROW], code_point)
    {
        // Loose emoji: terminals commonly draw these wide.
        2
    } else {
        1
    }
}
