#![no_main]

use ftui_width::{WidthClassifier, WidthConfig, display_width, grapheme_width};
use libfuzzer_sys::fuzz_target;
use unicode_segmentation::UnicodeSegmentation;

fuzz_target!(|data: &[u8]| {
    // Raw code points, including values past U+10FFFF.
    let narrow = WidthClassifier::new(WidthConfig::new(false, false));
    for chunk in data.chunks_exact(4) {
        let cp = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let width = narrow.rune_width(cp);
        assert!(width <= 2, "width {width} for {cp:#x}");
        if cp > 0x10FFFF {
            assert_eq!(width, 0, "code point {cp:#x} beyond Unicode must be zero-width");
        }
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // display_width must never panic.
    let width = display_width(text);
    if text.is_empty() {
        assert_eq!(width, 0);
    }

    // String width is the sum of its grapheme widths.
    let summed: usize = text.graphemes(true).map(grapheme_width).sum();
    assert_eq!(width, summed, "display_width must equal the grapheme sum");

    // The built default table must agree with direct policy evaluation.
    let direct = WidthClassifier::new(ftui_width::default_classifier().config());
    assert_eq!(direct.display_width(text), width);
});
