#![no_main]

use ftui_width::{display_width, fill_left, truncate, truncate_left, wrap};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 2048 {
        return;
    }

    let text_width = display_width(text);

    for width in [0, 1, 3, 10, 40, 80] {
        // truncate fits whenever the tail does.
        let truncated = truncate(text, width, "...");
        if width >= 3 {
            assert!(
                display_width(&truncated) <= width,
                "truncate exceeds width {width}: {truncated:?}"
            );
        }

        // truncate_left keeps a suffix of the input.
        let kept = truncate_left(text, width, "");
        assert!(text.ends_with(kept.as_str()), "truncate_left must keep a suffix");

        // fill_left reaches exactly max(width, text width).
        let filled = fill_left(text, width);
        assert_eq!(display_width(&filled), width.max(text_width));

        // wrap only inserts newlines.
        let wrapped = wrap(text, width);
        assert_eq!(wrapped.replace('\n', ""), text.replace('\n', ""));
    }
});
