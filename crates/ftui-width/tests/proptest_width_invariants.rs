//! Property-based invariants for the width classifier and string operations.
//!
//! 1. Direct policy and lookup table agree for every code point.
//! 2. Code points above U+10FFFF are zero-width.
//! 3. Widths are always 0, 1, or 2.
//! 4. `truncate` fits whenever the tail fits.
//! 5. `fill_left` reaches exactly `max(width, display_width(text))`.
//! 6. `wrap` lines never exceed the budget unless a lone cluster is wider.

use std::sync::OnceLock;

use ftui_width::{WidthClassifier, WidthConfig};
use proptest::prelude::*;

// ── Fixtures ────────────────────────────────────────────────────────────

const CONFIGS: [WidthConfig; 4] = [
    WidthConfig::new(false, false),
    WidthConfig::new(false, true),
    WidthConfig::new(true, false),
    WidthConfig::new(true, true),
];

/// One built classifier per configuration, shared across cases.
fn built(index: usize) -> &'static WidthClassifier {
    static BUILT: OnceLock<Vec<WidthClassifier>> = OnceLock::new();
    &BUILT.get_or_init(|| {
        CONFIGS
            .iter()
            .map(|config| WidthClassifier::with_lookup_table(*config))
            .collect()
    })[index]
}

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_config_index() -> impl Strategy<Value = usize> {
    0..CONFIGS.len()
}

/// Text mixing ASCII, kana, CJK, ambiguous symbols, combining marks, and emoji.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ]",
            "[あ-ん]",
            "[一-龥]",
            "[■①☆§]",
            Just("e\u{301}".to_string()),
            Just("\u{1F600}".to_string()),
            Just("\u{200B}".to_string()),
        ],
        0..30,
    )
    .prop_map(|parts| parts.concat())
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn lookup_matches_policy(index in arb_config_index(), cp in 0u32..=0x10_FFFF) {
        let direct = WidthClassifier::new(CONFIGS[index]);
        prop_assert_eq!(direct.rune_width(cp), built(index).rune_width(cp));
    }

    #[test]
    fn beyond_unicode_is_zero(index in arb_config_index(), cp in 0x11_0000u32..=u32::MAX) {
        prop_assert_eq!(WidthClassifier::new(CONFIGS[index]).rune_width(cp), 0);
        prop_assert_eq!(built(index).rune_width(cp), 0);
    }

    #[test]
    fn width_is_at_most_two(index in arb_config_index(), cp in any::<u32>()) {
        prop_assert!(built(index).rune_width(cp) <= 2);
    }

    #[test]
    fn truncate_respects_width(index in arb_config_index(), text in arb_text(), width in 0usize..60) {
        let c = built(index);
        let tail = "...";
        prop_assume!(c.display_width(tail) <= width);
        let result = c.truncate(&text, width, tail);
        prop_assert!(c.display_width(&result) <= width, "{:?} exceeds {}", result, width);
    }

    #[test]
    fn fill_left_width_is_exact(index in arb_config_index(), text in arb_text(), width in 0usize..80) {
        let c = built(index);
        let result = c.fill_left(&text, width);
        prop_assert_eq!(c.display_width(&result), width.max(c.display_width(&text)));
    }

    #[test]
    fn wrap_respects_width(index in arb_config_index(), text in arb_text(), width in 0usize..20) {
        let c = built(index);
        let wrapped = c.wrap(&text, width);
        prop_assert_eq!(wrapped.replace('\n', ""), text.replace('\n', ""));
        for line in wrapped.split('\n') {
            let line_width = c.display_width(line);
            if line_width > width {
                // Only a single oversized cluster may overflow.
                prop_assert_eq!(
                    unicode_segmentation::UnicodeSegmentation::graphemes(line, true).count(),
                    1,
                    "line {:?} overflows {}", line, width
                );
            }
        }
    }
}
