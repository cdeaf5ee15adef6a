#![forbid(unsafe_code)]

//! Static code-point tables for each width category.
//!
//! The East Asian Width classes (W/F, A, Na, N) and the combining-mark subset
//! come from the Unicode Character Database. `EMOJI` is the
//! Extended_Pictographic set limited to ranges reaching U+00FF or above.
//! `NONPRINTING` and `PRIVATE_USE` are fixed lists. Each table is sorted
//! ascending with adjacent ranges merged.

use crate::interval::{Interval, IntervalTable};

/// Unicode Character Database version the tables were derived from.
pub const UNICODE_VERSION: &str = "14.0.0";

/// A width category backed by one static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Narrow,
    DoubleWidth,
    Ambiguous,
    Neutral,
    Combining,
    Nonprinting,
    Emoji,
    PrivateUse,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Narrow,
        Self::DoubleWidth,
        Self::Ambiguous,
        Self::Neutral,
        Self::Combining,
        Self::Nonprinting,
        Self::Emoji,
        Self::PrivateUse,
    ];

    #[must_use]
    pub const fn table(self) -> IntervalTable<'static> {
        match self {
            Self::Narrow => NARROW,
            Self::DoubleWidth => DOUBLE_WIDTH,
            Self::Ambiguous => AMBIGUOUS,
            Self::Neutral => NEUTRAL,
            Self::Combining => COMBINING,
            Self::Nonprinting => NONPRINTING,
            Self::Emoji => EMOJI,
            Self::PrivateUse => PRIVATE_USE,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::DoubleWidth => "double_width",
            Self::Ambiguous => "ambiguous",
            Self::Neutral => "neutral",
            Self::Combining => "combining",
            Self::Nonprinting => "nonprinting",
            Self::Emoji => "emoji",
            Self::PrivateUse => "private_use",
        }
    }

    /// Every category whose table contains `code_point`.
    pub fn of(code_point: u32) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |category| category.table().contains(code_point))
    }
}

/// Narrow (Na): ASCII graphics and a few legacy symbols.
pub const NARROW: IntervalTable<'static> = IntervalTable::new(&NARROW_RANGES);
/// Wide (W) and fullwidth (F).
pub const DOUBLE_WIDTH: IntervalTable<'static> = IntervalTable::new(&DOUBLE_WIDTH_RANGES);
/// Ambiguous (A): narrow or wide depending on context.
pub const AMBIGUOUS: IntervalTable<'static> = IntervalTable::new(&AMBIGUOUS_RANGES);
/// Neutral (N).
pub const NEUTRAL: IntervalTable<'static> = IntervalTable::new(&NEUTRAL_RANGES);
/// Combining marks.
pub const COMBINING: IntervalTable<'static> = IntervalTable::new(&COMBINING_RANGES);
/// Controls, format characters, surrogates and noncharacters.
pub const NONPRINTING: IntervalTable<'static> = IntervalTable::new(&NONPRINTING_RANGES);
pub const EMOJI: IntervalTable<'static> = IntervalTable::new(&EMOJI_RANGES);
/// Private use areas (BMP and planes 15-16).
pub const PRIVATE_USE: IntervalTable<'static> = IntervalTable::new(&PRIVATE_USE_RANGES);

const fn iv(first: u32, last: u32) -> Interval {
    Interval::new(first, last)
}

const NARROW_RANGES: [Interval; 7] = [
    iv(0x0020, 0x007E), iv(0x00A2, 0x00A3), iv(0x00A5, 0x00A6), iv(0x00AC, 0x00AC),
    iv(0x00AF, 0x00AF), iv(0x27E6, 0x27ED), iv(0x2985, 0x2986),
];

const DOUBLE_WIDTH_RANGES: [Interval; 122] = [
    iv(0x1100, 0x115F), iv(0x231A, 0x231B), iv(0x2329, 0x232A), iv(0x23E9, 0x23EC),
    iv(0x23F0, 0x23F0), iv(0x23F3, 0x23F3), iv(0x25FD, 0x25FE), iv(0x2614, 0x2615),
    iv(0x2648, 0x2653), iv(0x267F, 0x267F), iv(0x2693, 0x2693), iv(0x26A1, 0x26A1),
    iv(0x26AA, 0x26AB), iv(0x26BD, 0x26BE), iv(0x26C4, 0x26C5), iv(0x26CE, 0x26CE),
    iv(0x26D4, 0x26D4), iv(0x26EA, 0x26EA), iv(0x26F2, 0x26F3), iv(0x26F5, 0x26F5),
    iv(0x26FA, 0x26FA), iv(0x26FD, 0x26FD), iv(0x2705, 0x2705), iv(0x270A, 0x270B),
    iv(0x2728, 0x2728), iv(0x274C, 0x274C), iv(0x274E, 0x274E), iv(0x2753, 0x2755),
    iv(0x2757, 0x2757), iv(0x2795, 0x2797), iv(0x27B0, 0x27B0), iv(0x27BF, 0x27BF),
    iv(0x2B1B, 0x2B1C), iv(0x2B50, 0x2B50), iv(0x2B55, 0x2B55), iv(0x2E80, 0x2E99),
    iv(0x2E9B, 0x2EF3), iv(0x2F00, 0x2FD5), iv(0x2FF0, 0x2FFB), iv(0x3000, 0x303E),
    iv(0x3041, 0x3096), iv(0x3099, 0x30FF), iv(0x3105, 0x312F), iv(0x3131, 0x318E),
    iv(0x3190, 0x31E3), iv(0x31F0, 0x321E), iv(0x3220, 0x3247), iv(0x3250, 0x4DBF),
    iv(0x4E00, 0xA48C), iv(0xA490, 0xA4C6), iv(0xA960, 0xA97C), iv(0xAC00, 0xD7A3),
    iv(0xF900, 0xFA6D), iv(0xFA70, 0xFAD9), iv(0xFE10, 0xFE19), iv(0xFE30, 0xFE52),
    iv(0xFE54, 0xFE66), iv(0xFE68, 0xFE6B), iv(0xFF01, 0xFF60), iv(0xFFE0, 0xFFE6),
    iv(0x16FE0, 0x16FE4), iv(0x16FF0, 0x16FF1), iv(0x17000, 0x187F7), iv(0x18800, 0x18CD5),
    iv(0x18D00, 0x18D08), iv(0x1AFF0, 0x1AFF3), iv(0x1AFF5, 0x1AFFB), iv(0x1AFFD, 0x1AFFE),
    iv(0x1B000, 0x1B122), iv(0x1B150, 0x1B152), iv(0x1B164, 0x1B167), iv(0x1B170, 0x1B2FB),
    iv(0x1F004, 0x1F004), iv(0x1F0CF, 0x1F0CF), iv(0x1F18E, 0x1F18E), iv(0x1F191, 0x1F19A),
    iv(0x1F200, 0x1F202), iv(0x1F210, 0x1F23B), iv(0x1F240, 0x1F248), iv(0x1F250, 0x1F251),
    iv(0x1F260, 0x1F265), iv(0x1F300, 0x1F320), iv(0x1F32D, 0x1F335), iv(0x1F337, 0x1F37C),
    iv(0x1F37E, 0x1F393), iv(0x1F3A0, 0x1F3CA), iv(0x1F3CF, 0x1F3D3), iv(0x1F3E0, 0x1F3F0),
    iv(0x1F3F4, 0x1F3F4), iv(0x1F3F8, 0x1F43E), iv(0x1F440, 0x1F440), iv(0x1F442, 0x1F4FC),
    iv(0x1F4FF, 0x1F53D), iv(0x1F54B, 0x1F54E), iv(0x1F550, 0x1F567), iv(0x1F57A, 0x1F57A),
    iv(0x1F595, 0x1F596), iv(0x1F5A4, 0x1F5A4), iv(0x1F5FB, 0x1F64F), iv(0x1F680, 0x1F6C5),
    iv(0x1F6CC, 0x1F6CC), iv(0x1F6D0, 0x1F6D2), iv(0x1F6D5, 0x1F6D7), iv(0x1F6DD, 0x1F6DF),
    iv(0x1F6EB, 0x1F6EC), iv(0x1F6F4, 0x1F6FC), iv(0x1F7E0, 0x1F7EB), iv(0x1F7F0, 0x1F7F0),
    iv(0x1F90C, 0x1F93A), iv(0x1F93C, 0x1F945), iv(0x1F947, 0x1F9FF), iv(0x1FA70, 0x1FA74),
    iv(0x1FA78, 0x1FA7C), iv(0x1FA80, 0x1FA86), iv(0x1FA90, 0x1FAAC), iv(0x1FAB0, 0x1FABA),
    iv(0x1FAC0, 0x1FAC5), iv(0x1FAD0, 0x1FAD9), iv(0x1FAE0, 0x1FAE7), iv(0x1FAF0, 0x1FAF6),
    iv(0x20000, 0x2FFFD), iv(0x30000, 0x3FFFD),
];

const AMBIGUOUS_RANGES: [Interval; 179] = [
    iv(0x00A1, 0x00A1), iv(0x00A4, 0x00A4), iv(0x00A7, 0x00A8), iv(0x00AA, 0x00AA),
    iv(0x00AD, 0x00AE), iv(0x00B0, 0x00B4), iv(0x00B6, 0x00BA), iv(0x00BC, 0x00BF),
    iv(0x00C6, 0x00C6), iv(0x00D0, 0x00D0), iv(0x00D7, 0x00D8), iv(0x00DE, 0x00E1),
    iv(0x00E6, 0x00E6), iv(0x00E8, 0x00EA), iv(0x00EC, 0x00ED), iv(0x00F0, 0x00F0),
    iv(0x00F2, 0x00F3), iv(0x00F7, 0x00FA), iv(0x00FC, 0x00FC), iv(0x00FE, 0x00FE),
    iv(0x0101, 0x0101), iv(0x0111, 0x0111), iv(0x0113, 0x0113), iv(0x011B, 0x011B),
    iv(0x0126, 0x0127), iv(0x012B, 0x012B), iv(0x0131, 0x0133), iv(0x0138, 0x0138),
    iv(0x013F, 0x0142), iv(0x0144, 0x0144), iv(0x0148, 0x014B), iv(0x014D, 0x014D),
    iv(0x0152, 0x0153), iv(0x0166, 0x0167), iv(0x016B, 0x016B), iv(0x01CE, 0x01CE),
    iv(0x01D0, 0x01D0), iv(0x01D2, 0x01D2), iv(0x01D4, 0x01D4), iv(0x01D6, 0x01D6),
    iv(0x01D8, 0x01D8), iv(0x01DA, 0x01DA), iv(0x01DC, 0x01DC), iv(0x0251, 0x0251),
    iv(0x0261, 0x0261), iv(0x02C4, 0x02C4), iv(0x02C7, 0x02C7), iv(0x02C9, 0x02CB),
    iv(0x02CD, 0x02CD), iv(0x02D0, 0x02D0), iv(0x02D8, 0x02DB), iv(0x02DD, 0x02DD),
    iv(0x02DF, 0x02DF), iv(0x0300, 0x036F), iv(0x0391, 0x03A1), iv(0x03A3, 0x03A9),
    iv(0x03B1, 0x03C1), iv(0x03C3, 0x03C9), iv(0x0401, 0x0401), iv(0x0410, 0x044F),
    iv(0x0451, 0x0451), iv(0x2010, 0x2010), iv(0x2013, 0x2016), iv(0x2018, 0x2019),
    iv(0x201C, 0x201D), iv(0x2020, 0x2022), iv(0x2024, 0x2027), iv(0x2030, 0x2030),
    iv(0x2032, 0x2033), iv(0x2035, 0x2035), iv(0x203B, 0x203B), iv(0x203E, 0x203E),
    iv(0x2074, 0x2074), iv(0x207F, 0x207F), iv(0x2081, 0x2084), iv(0x20AC, 0x20AC),
    iv(0x2103, 0x2103), iv(0x2105, 0x2105), iv(0x2109, 0x2109), iv(0x2113, 0x2113),
    iv(0x2116, 0x2116), iv(0x2121, 0x2122), iv(0x2126, 0x2126), iv(0x212B, 0x212B),
    iv(0x2153, 0x2154), iv(0x215B, 0x215E), iv(0x2160, 0x216B), iv(0x2170, 0x2179),
    iv(0x2189, 0x2189), iv(0x2190, 0x2199), iv(0x21B8, 0x21B9), iv(0x21D2, 0x21D2),
    iv(0x21D4, 0x21D4), iv(0x21E7, 0x21E7), iv(0x2200, 0x2200), iv(0x2202, 0x2203),
    iv(0x2207, 0x2208), iv(0x220B, 0x220B), iv(0x220F, 0x220F), iv(0x2211, 0x2211),
    iv(0x2215, 0x2215), iv(0x221A, 0x221A), iv(0x221D, 0x2220), iv(0x2223, 0x2223),
    iv(0x2225, 0x2225), iv(0x2227, 0x222C), iv(0x222E, 0x222E), iv(0x2234, 0x2237),
    iv(0x223C, 0x223D), iv(0x2248, 0x2248), iv(0x224C, 0x224C), iv(0x2252, 0x2252),
    iv(0x2260, 0x2261), iv(0x2264, 0x2267), iv(0x226A, 0x226B), iv(0x226E, 0x226F),
    iv(0x2282, 0x2283), iv(0x2286, 0x2287), iv(0x2295, 0x2295), iv(0x2299, 0x2299),
    iv(0x22A5, 0x22A5), iv(0x22BF, 0x22BF), iv(0x2312, 0x2312), iv(0x2460, 0x24E9),
    iv(0x24EB, 0x254B), iv(0x2550, 0x2573), iv(0x2580, 0x258F), iv(0x2592, 0x2595),
    iv(0x25A0, 0x25A1), iv(0x25A3, 0x25A9), iv(0x25B2, 0x25B3), iv(0x25B6, 0x25B7),
    iv(0x25BC, 0x25BD), iv(0x25C0, 0x25C1), iv(0x25C6, 0x25C8), iv(0x25CB, 0x25CB),
    iv(0x25CE, 0x25D1), iv(0x25E2, 0x25E5), iv(0x25EF, 0x25EF), iv(0x2605, 0x2606),
    iv(0x2609, 0x2609), iv(0x260E, 0x260F), iv(0x261C, 0x261C), iv(0x261E, 0x261E),
    iv(0x2640, 0x2640), iv(0x2642, 0x2642), iv(0x2660, 0x2661), iv(0x2663, 0x2665),
    iv(0x2667, 0x266A), iv(0x266C, 0x266D), iv(0x266F, 0x266F), iv(0x269E, 0x269F),
    iv(0x26BF, 0x26BF), iv(0x26C6, 0x26CD), iv(0x26CF, 0x26D3), iv(0x26D5, 0x26E1),
    iv(0x26E3, 0x26E3), iv(0x26E8, 0x26E9), iv(0x26EB, 0x26F1), iv(0x26F4, 0x26F4),
    iv(0x26F6, 0x26F9), iv(0x26FB, 0x26FC), iv(0x26FE, 0x26FF), iv(0x273D, 0x273D),
    iv(0x2776, 0x277F), iv(0x2B56, 0x2B59), iv(0x3248, 0x324F), iv(0xE000, 0xF8FF),
    iv(0xFE00, 0xFE0F), iv(0xFFFD, 0xFFFD), iv(0x1F100, 0x1F10A), iv(0x1F110, 0x1F12D),
    iv(0x1F130, 0x1F169), iv(0x1F170, 0x1F18D), iv(0x1F18F, 0x1F190), iv(0x1F19B, 0x1F1AC),
    iv(0xE0100, 0xE01EF), iv(0xF0000, 0xFFFFD), iv(0x100000, 0x10FFFD),
];

const NEUTRAL_RANGES: [Interval; 846] = [
    iv(0x0000, 0x001F), iv(0x007F, 0x00A0), iv(0x00A9, 0x00A9), iv(0x00AB, 0x00AB),
    iv(0x00B5, 0x00B5), iv(0x00BB, 0x00BB), iv(0x00C0, 0x00C5), iv(0x00C7, 0x00CF),
    iv(0x00D1, 0x00D6), iv(0x00D9, 0x00DD), iv(0x00E2, 0x00E5), iv(0x00E7, 0x00E7),
    iv(0x00EB, 0x00EB), iv(0x00EE, 0x00EF), iv(0x00F1, 0x00F1), iv(0x00F4, 0x00F6),
    iv(0x00FB, 0x00FB), iv(0x00FD, 0x00FD), iv(0x00FF, 0x0100), iv(0x0102, 0x0110),
    iv(0x0112, 0x0112), iv(0x0114, 0x011A), iv(0x011C, 0x0125), iv(0x0128, 0x012A),
    iv(0x012C, 0x0130), iv(0x0134, 0x0137), iv(0x0139, 0x013E), iv(0x0143, 0x0143),
    iv(0x0145, 0x0147), iv(0x014C, 0x014C), iv(0x014E, 0x0151), iv(0x0154, 0x0165),
    iv(0x0168, 0x016A), iv(0x016C, 0x01CD), iv(0x01CF, 0x01CF), iv(0x01D1, 0x01D1),
    iv(0x01D3, 0x01D3), iv(0x01D5, 0x01D5), iv(0x01D7, 0x01D7), iv(0x01D9, 0x01D9),
    iv(0x01DB, 0x01DB), iv(0x01DD, 0x0250), iv(0x0252, 0x0260), iv(0x0262, 0x02C3),
    iv(0x02C5, 0x02C6), iv(0x02C8, 0x02C8), iv(0x02CC, 0x02CC), iv(0x02CE, 0x02CF),
    iv(0x02D1, 0x02D7), iv(0x02DC, 0x02DC), iv(0x02DE, 0x02DE), iv(0x02E0, 0x02FF),
    iv(0x0370, 0x0377), iv(0x037A, 0x037F), iv(0x0384, 0x038A), iv(0x038C, 0x038C),
    iv(0x038E, 0x0390), iv(0x03AA, 0x03B0), iv(0x03C2, 0x03C2), iv(0x03CA, 0x0400),
    iv(0x0402, 0x040F), iv(0x0450, 0x0450), iv(0x0452, 0x052F), iv(0x0531, 0x0556),
    iv(0x0559, 0x058A), iv(0x058D, 0x058F), iv(0x0591, 0x05C7), iv(0x05D0, 0x05EA),
    iv(0x05EF, 0x05F4), iv(0x0600, 0x070D), iv(0x070F, 0x074A), iv(0x074D, 0x07B1),
    iv(0x07C0, 0x07FA), iv(0x07FD, 0x082D), iv(0x0830, 0x083E), iv(0x0840, 0x085B),
    iv(0x085E, 0x085E), iv(0x0860, 0x086A), iv(0x0870, 0x088E), iv(0x0890, 0x0891),
    iv(0x0898, 0x0983), iv(0x0985, 0x098C), iv(0x098F, 0x0990), iv(0x0993, 0x09A8),
    iv(0x09AA, 0x09B0), iv(0x09B2, 0x09B2), iv(0x09B6, 0x09B9), iv(0x09BC, 0x09C4),
    iv(0x09C7, 0x09C8), iv(0x09CB, 0x09CE), iv(0x09D7, 0x09D7), iv(0x09DC, 0x09DD),
    iv(0x09DF, 0x09E3), iv(0x09E6, 0x09FE), iv(0x0A01, 0x0A03), iv(0x0A05, 0x0A0A),
    iv(0x0A0F, 0x0A10), iv(0x0A13, 0x0A28), iv(0x0A2A, 0x0A30), iv(0x0A32, 0x0A33),
    iv(0x0A35, 0x0A36), iv(0x0A38, 0x0A39), iv(0x0A3C, 0x0A3C), iv(0x0A3E, 0x0A42),
    iv(0x0A47, 0x0A48), iv(0x0A4B, 0x0A4D), iv(0x0A51, 0x0A51), iv(0x0A59, 0x0A5C),
    iv(0x0A5E, 0x0A5E), iv(0x0A66, 0x0A76), iv(0x0A81, 0x0A83), iv(0x0A85, 0x0A8D),
    iv(0x0A8F, 0x0A91), iv(0x0A93, 0x0AA8), iv(0x0AAA, 0x0AB0), iv(0x0AB2, 0x0AB3),
    iv(0x0AB5, 0x0AB9), iv(0x0ABC, 0x0AC5), iv(0x0AC7, 0x0AC9), iv(0x0ACB, 0x0ACD),
    iv(0x0AD0, 0x0AD0), iv(0x0AE0, 0x0AE3), iv(0x0AE6, 0x0AF1), iv(0x0AF9, 0x0AFF),
    iv(0x0B01, 0x0B03), iv(0x0B05, 0x0B0C), iv(0x0B0F, 0x0B10), iv(0x0B13, 0x0B28),
    iv(0x0B2A, 0x0B30), iv(0x0B32, 0x0B33), iv(0x0B35, 0x0B39), iv(0x0B3C, 0x0B44),
    iv(0x0B47, 0x0B48), iv(0x0B4B, 0x0B4D), iv(0x0B55, 0x0B57), iv(0x0B5C, 0x0B5D),
    iv(0x0B5F, 0x0B63), iv(0x0B66, 0x0B77), iv(0x0B82, 0x0B83), iv(0x0B85, 0x0B8A),
    iv(0x0B8E, 0x0B90), iv(0x0B92, 0x0B95), iv(0x0B99, 0x0B9A), iv(0x0B9C, 0x0B9C),
    iv(0x0B9E, 0x0B9F), iv(0x0BA3, 0x0BA4), iv(0x0BA8, 0x0BAA), iv(0x0BAE, 0x0BB9),
    iv(0x0BBE, 0x0BC2), iv(0x0BC6, 0x0BC8), iv(0x0BCA, 0x0BCD), iv(0x0BD0, 0x0BD0),
    iv(0x0BD7, 0x0BD7), iv(0x0BE6, 0x0BFA), iv(0x0C00, 0x0C0C), iv(0x0C0E, 0x0C10),
    iv(0x0C12, 0x0C28), iv(0x0C2A, 0x0C39), iv(0x0C3C, 0x0C44), iv(0x0C46, 0x0C48),
    iv(0x0C4A, 0x0C4D), iv(0x0C55, 0x0C56), iv(0x0C58, 0x0C5A), iv(0x0C5D, 0x0C5D),
    iv(0x0C60, 0x0C63), iv(0x0C66, 0x0C6F), iv(0x0C77, 0x0C8C), iv(0x0C8E, 0x0C90),
    iv(0x0C92, 0x0CA8), iv(0x0CAA, 0x0CB3), iv(0x0CB5, 0x0CB9), iv(0x0CBC, 0x0CC4),
    iv(0x0CC6, 0x0CC8), iv(0x0CCA, 0x0CCD), iv(0x0CD5, 0x0CD6), iv(0x0CDD, 0x0CDE),
    iv(0x0CE0, 0x0CE3), iv(0x0CE6, 0x0CEF), iv(0x0CF1, 0x0CF2), iv(0x0D00, 0x0D0C),
    iv(0x0D0E, 0x0D10), iv(0x0D12, 0x0D44), iv(0x0D46, 0x0D48), iv(0x0D4A, 0x0D4F),
    iv(0x0D54, 0x0D63), iv(0x0D66, 0x0D7F), iv(0x0D81, 0x0D83), iv(0x0D85, 0x0D96),
    iv(0x0D9A, 0x0DB1), iv(0x0DB3, 0x0DBB), iv(0x0DBD, 0x0DBD), iv(0x0DC0, 0x0DC6),
    iv(0x0DCA, 0x0DCA), iv(0x0DCF, 0x0DD4), iv(0x0DD6, 0x0DD6), iv(0x0DD8, 0x0DDF),
    iv(0x0DE6, 0x0DEF), iv(0x0DF2, 0x0DF4), iv(0x0E01, 0x0E3A), iv(0x0E3F, 0x0E5B),
    iv(0x0E81, 0x0E82), iv(0x0E84, 0x0E84), iv(0x0E86, 0x0E8A), iv(0x0E8C, 0x0EA3),
    iv(0x0EA5, 0x0EA5), iv(0x0EA7, 0x0EBD), iv(0x0EC0, 0x0EC4), iv(0x0EC6, 0x0EC6),
    iv(0x0EC8, 0x0ECD), iv(0x0ED0, 0x0ED9), iv(0x0EDC, 0x0EDF), iv(0x0F00, 0x0F47),
    iv(0x0F49, 0x0F6C), iv(0x0F71, 0x0F97), iv(0x0F99, 0x0FBC), iv(0x0FBE, 0x0FCC),
    iv(0x0FCE, 0x0FDA), iv(0x1000, 0x10C5), iv(0x10C7, 0x10C7), iv(0x10CD, 0x10CD),
    iv(0x10D0, 0x10FF), iv(0x1160, 0x1248), iv(0x124A, 0x124D), iv(0x1250, 0x1256),
    iv(0x1258, 0x1258), iv(0x125A, 0x125D), iv(0x1260, 0x1288), iv(0x128A, 0x128D),
    iv(0x1290, 0x12B0), iv(0x12B2, 0x12B5), iv(0x12B8, 0x12BE), iv(0x12C0, 0x12C0),
    iv(0x12C2, 0x12C5), iv(0x12C8, 0x12D6), iv(0x12D8, 0x1310), iv(0x1312, 0x1315),
    iv(0x1318, 0x135A), iv(0x135D, 0x137C), iv(0x1380, 0x1399), iv(0x13A0, 0x13F5),
    iv(0x13F8, 0x13FD), iv(0x1400, 0x169C), iv(0x16A0, 0x16F8), iv(0x1700, 0x1715),
    iv(0x171F, 0x1736), iv(0x1740, 0x1753), iv(0x1760, 0x176C), iv(0x176E, 0x1770),
    iv(0x1772, 0x1773), iv(0x1780, 0x17DD), iv(0x17E0, 0x17E9), iv(0x17F0, 0x17F9),
    iv(0x1800, 0x1819), iv(0x1820, 0x1878), iv(0x1880, 0x18AA), iv(0x18B0, 0x18F5),
    iv(0x1900, 0x191E), iv(0x1920, 0x192B), iv(0x1930, 0x193B), iv(0x1940, 0x1940),
    iv(0x1944, 0x196D), iv(0x1970, 0x1974), iv(0x1980, 0x19AB), iv(0x19B0, 0x19C9),
    iv(0x19D0, 0x19DA), iv(0x19DE, 0x1A1B), iv(0x1A1E, 0x1A5E), iv(0x1A60, 0x1A7C),
    iv(0x1A7F, 0x1A89), iv(0x1A90, 0x1A99), iv(0x1AA0, 0x1AAD), iv(0x1AB0, 0x1ACE),
    iv(0x1B00, 0x1B4C), iv(0x1B50, 0x1B7E), iv(0x1B80, 0x1BF3), iv(0x1BFC, 0x1C37),
    iv(0x1C3B, 0x1C49), iv(0x1C4D, 0x1C88), iv(0x1C90, 0x1CBA), iv(0x1CBD, 0x1CC7),
    iv(0x1CD0, 0x1CFA), iv(0x1D00, 0x1F15), iv(0x1F18, 0x1F1D), iv(0x1F20, 0x1F45),
    iv(0x1F48, 0x1F4D), iv(0x1F50, 0x1F57), iv(0x1F59, 0x1F59), iv(0x1F5B, 0x1F5B),
    iv(0x1F5D, 0x1F5D), iv(0x1F5F, 0x1F7D), iv(0x1F80, 0x1FB4), iv(0x1FB6, 0x1FC4),
    iv(0x1FC6, 0x1FD3), iv(0x1FD6, 0x1FDB), iv(0x1FDD, 0x1FEF), iv(0x1FF2, 0x1FF4),
    iv(0x1FF6, 0x1FFE), iv(0x2000, 0x200F), iv(0x2011, 0x2012), iv(0x2017, 0x2017),
    iv(0x201A, 0x201B), iv(0x201E, 0x201F), iv(0x2023, 0x2023), iv(0x2028, 0x202F),
    iv(0x2031, 0x2031), iv(0x2034, 0x2034), iv(0x2036, 0x203A), iv(0x203C, 0x203D),
    iv(0x203F, 0x2064), iv(0x2066, 0x2071), iv(0x2075, 0x207E), iv(0x2080, 0x2080),
    iv(0x2085, 0x208E), iv(0x2090, 0x209C), iv(0x20A0, 0x20A8), iv(0x20AA, 0x20AB),
    iv(0x20AD, 0x20C0), iv(0x20D0, 0x20F0), iv(0x2100, 0x2102), iv(0x2104, 0x2104),
    iv(0x2106, 0x2108), iv(0x210A, 0x2112), iv(0x2114, 0x2115), iv(0x2117, 0x2120),
    iv(0x2123, 0x2125), iv(0x2127, 0x212A), iv(0x212C, 0x2152), iv(0x2155, 0x215A),
    iv(0x215F, 0x215F), iv(0x216C, 0x216F), iv(0x217A, 0x2188), iv(0x218A, 0x218B),
    iv(0x219A, 0x21B7), iv(0x21BA, 0x21D1), iv(0x21D3, 0x21D3), iv(0x21D5, 0x21E6),
    iv(0x21E8, 0x21FF), iv(0x2201, 0x2201), iv(0x2204, 0x2206), iv(0x2209, 0x220A),
    iv(0x220C, 0x220E), iv(0x2210, 0x2210), iv(0x2212, 0x2214), iv(0x2216, 0x2219),
    iv(0x221B, 0x221C), iv(0x2221, 0x2222), iv(0x2224, 0x2224), iv(0x2226, 0x2226),
    iv(0x222D, 0x222D), iv(0x222F, 0x2233), iv(0x2238, 0x223B), iv(0x223E, 0x2247),
    iv(0x2249, 0x224B), iv(0x224D, 0x2251), iv(0x2253, 0x225F), iv(0x2262, 0x2263),
    iv(0x2268, 0x2269), iv(0x226C, 0x226D), iv(0x2270, 0x2281), iv(0x2284, 0x2285),
    iv(0x2288, 0x2294), iv(0x2296, 0x2298), iv(0x229A, 0x22A4), iv(0x22A6, 0x22BE),
    iv(0x22C0, 0x2311), iv(0x2313, 0x2319), iv(0x231C, 0x2328), iv(0x232B, 0x23E8),
    iv(0x23ED, 0x23EF), iv(0x23F1, 0x23F2), iv(0x23F4, 0x2426), iv(0x2440, 0x244A),
    iv(0x24EA, 0x24EA), iv(0x254C, 0x254F), iv(0x2574, 0x257F), iv(0x2590, 0x2591),
    iv(0x2596, 0x259F), iv(0x25A2, 0x25A2), iv(0x25AA, 0x25B1), iv(0x25B4, 0x25B5),
    iv(0x25B8, 0x25BB), iv(0x25BE, 0x25BF), iv(0x25C2, 0x25C5), iv(0x25C9, 0x25CA),
    iv(0x25CC, 0x25CD), iv(0x25D2, 0x25E1), iv(0x25E6, 0x25EE), iv(0x25F0, 0x25FC),
    iv(0x25FF, 0x2604), iv(0x2607, 0x2608), iv(0x260A, 0x260D), iv(0x2610, 0x2613),
    iv(0x2616, 0x261B), iv(0x261D, 0x261D), iv(0x261F, 0x263F), iv(0x2641, 0x2641),
    iv(0x2643, 0x2647), iv(0x2654, 0x265F), iv(0x2662, 0x2662), iv(0x2666, 0x2666),
    iv(0x266B, 0x266B), iv(0x266E, 0x266E), iv(0x2670, 0x267E), iv(0x2680, 0x2692),
    iv(0x2694, 0x269D), iv(0x26A0, 0x26A0), iv(0x26A2, 0x26A9), iv(0x26AC, 0x26BC),
    iv(0x26C0, 0x26C3), iv(0x26E2, 0x26E2), iv(0x26E4, 0x26E7), iv(0x2700, 0x2704),
    iv(0x2706, 0x2709), iv(0x270C, 0x2727), iv(0x2729, 0x273C), iv(0x273E, 0x274B),
    iv(0x274D, 0x274D), iv(0x274F, 0x2752), iv(0x2756, 0x2756), iv(0x2758, 0x2775),
    iv(0x2780, 0x2794), iv(0x2798, 0x27AF), iv(0x27B1, 0x27BE), iv(0x27C0, 0x27E5),
    iv(0x27EE, 0x2984), iv(0x2987, 0x2B1A), iv(0x2B1D, 0x2B4F), iv(0x2B51, 0x2B54),
    iv(0x2B5A, 0x2B73), iv(0x2B76, 0x2B95), iv(0x2B97, 0x2CF3), iv(0x2CF9, 0x2D25),
    iv(0x2D27, 0x2D27), iv(0x2D2D, 0x2D2D), iv(0x2D30, 0x2D67), iv(0x2D6F, 0x2D70),
    iv(0x2D7F, 0x2D96), iv(0x2DA0, 0x2DA6), iv(0x2DA8, 0x2DAE), iv(0x2DB0, 0x2DB6),
    iv(0x2DB8, 0x2DBE), iv(0x2DC0, 0x2DC6), iv(0x2DC8, 0x2DCE), iv(0x2DD0, 0x2DD6),
    iv(0x2DD8, 0x2DDE), iv(0x2DE0, 0x2E5D), iv(0x303F, 0x303F), iv(0x4DC0, 0x4DFF),
    iv(0xA4D0, 0xA62B), iv(0xA640, 0xA6F7), iv(0xA700, 0xA7CA), iv(0xA7D0, 0xA7D1),
    iv(0xA7D3, 0xA7D3), iv(0xA7D5, 0xA7D9), iv(0xA7F2, 0xA82C), iv(0xA830, 0xA839),
    iv(0xA840, 0xA877), iv(0xA880, 0xA8C5), iv(0xA8CE, 0xA8D9), iv(0xA8E0, 0xA953),
    iv(0xA95F, 0xA95F), iv(0xA980, 0xA9CD), iv(0xA9CF, 0xA9D9), iv(0xA9DE, 0xA9FE),
    iv(0xAA00, 0xAA36), iv(0xAA40, 0xAA4D), iv(0xAA50, 0xAA59), iv(0xAA5C, 0xAAC2),
    iv(0xAADB, 0xAAF6), iv(0xAB01, 0xAB06), iv(0xAB09, 0xAB0E), iv(0xAB11, 0xAB16),
    iv(0xAB20, 0xAB26), iv(0xAB28, 0xAB2E), iv(0xAB30, 0xAB6B), iv(0xAB70, 0xABED),
    iv(0xABF0, 0xABF9), iv(0xD7B0, 0xD7C6), iv(0xD7CB, 0xD7FB), iv(0xD800, 0xDFFF),
    iv(0xFB00, 0xFB06), iv(0xFB13, 0xFB17), iv(0xFB1D, 0xFB36), iv(0xFB38, 0xFB3C),
    iv(0xFB3E, 0xFB3E), iv(0xFB40, 0xFB41), iv(0xFB43, 0xFB44), iv(0xFB46, 0xFBC2),
    iv(0xFBD3, 0xFD8F), iv(0xFD92, 0xFDC7), iv(0xFDCF, 0xFDCF), iv(0xFDF0, 0xFDFF),
    iv(0xFE20, 0xFE2F), iv(0xFE70, 0xFE74), iv(0xFE76, 0xFEFC), iv(0xFEFF, 0xFEFF),
    iv(0xFFF9, 0xFFFC), iv(0x10000, 0x1000B), iv(0x1000D, 0x10026), iv(0x10028, 0x1003A),
    iv(0x1003C, 0x1003D), iv(0x1003F, 0x1004D), iv(0x10050, 0x1005D), iv(0x10080, 0x100FA),
    iv(0x10100, 0x10102), iv(0x10107, 0x10133), iv(0x10137, 0x1018E), iv(0x10190, 0x1019C),
    iv(0x101A0, 0x101A0), iv(0x101D0, 0x101FD), iv(0x10280, 0x1029C), iv(0x102A0, 0x102D0),
    iv(0x102E0, 0x102FB), iv(0x10300, 0x10323), iv(0x1032D, 0x1034A), iv(0x10350, 0x1037A),
    iv(0x10380, 0x1039D), iv(0x1039F, 0x103C3), iv(0x103C8, 0x103D5), iv(0x10400, 0x1049D),
    iv(0x104A0, 0x104A9), iv(0x104B0, 0x104D3), iv(0x104D8, 0x104FB), iv(0x10500, 0x10527),
    iv(0x10530, 0x10563), iv(0x1056F, 0x1057A), iv(0x1057C, 0x1058A), iv(0x1058C, 0x10592),
    iv(0x10594, 0x10595), iv(0x10597, 0x105A1), iv(0x105A3, 0x105B1), iv(0x105B3, 0x105B9),
    iv(0x105BB, 0x105BC), iv(0x10600, 0x10736), iv(0x10740, 0x10755), iv(0x10760, 0x10767),
    iv(0x10780, 0x10785), iv(0x10787, 0x107B0), iv(0x107B2, 0x107BA), iv(0x10800, 0x10805),
    iv(0x10808, 0x10808), iv(0x1080A, 0x10835), iv(0x10837, 0x10838), iv(0x1083C, 0x1083C),
    iv(0x1083F, 0x10855), iv(0x10857, 0x1089E), iv(0x108A7, 0x108AF), iv(0x108E0, 0x108F2),
    iv(0x108F4, 0x108F5), iv(0x108FB, 0x1091B), iv(0x1091F, 0x10939), iv(0x1093F, 0x1093F),
    iv(0x10980, 0x109B7), iv(0x109BC, 0x109CF), iv(0x109D2, 0x10A03), iv(0x10A05, 0x10A06),
    iv(0x10A0C, 0x10A13), iv(0x10A15, 0x10A17), iv(0x10A19, 0x10A35), iv(0x10A38, 0x10A3A),
    iv(0x10A3F, 0x10A48), iv(0x10A50, 0x10A58), iv(0x10A60, 0x10A9F), iv(0x10AC0, 0x10AE6),
    iv(0x10AEB, 0x10AF6), iv(0x10B00, 0x10B35), iv(0x10B39, 0x10B55), iv(0x10B58, 0x10B72),
    iv(0x10B78, 0x10B91), iv(0x10B99, 0x10B9C), iv(0x10BA9, 0x10BAF), iv(0x10C00, 0x10C48),
    iv(0x10C80, 0x10CB2), iv(0x10CC0, 0x10CF2), iv(0x10CFA, 0x10D27), iv(0x10D30, 0x10D39),
    iv(0x10E60, 0x10E7E), iv(0x10E80, 0x10EA9), iv(0x10EAB, 0x10EAD), iv(0x10EB0, 0x10EB1),
    iv(0x10F00, 0x10F27), iv(0x10F30, 0x10F59), iv(0x10F70, 0x10F89), iv(0x10FB0, 0x10FCB),
    iv(0x10FE0, 0x10FF6), iv(0x11000, 0x1104D), iv(0x11052, 0x11075), iv(0x1107F, 0x110C2),
    iv(0x110CD, 0x110CD), iv(0x110D0, 0x110E8), iv(0x110F0, 0x110F9), iv(0x11100, 0x11134),
    iv(0x11136, 0x11147), iv(0x11150, 0x11176), iv(0x11180, 0x111DF), iv(0x111E1, 0x111F4),
    iv(0x11200, 0x11211), iv(0x11213, 0x1123E), iv(0x11280, 0x11286), iv(0x11288, 0x11288),
    iv(0x1128A, 0x1128D), iv(0x1128F, 0x1129D), iv(0x1129F, 0x112A9), iv(0x112B0, 0x112EA),
    iv(0x112F0, 0x112F9), iv(0x11300, 0x11303), iv(0x11305, 0x1130C), iv(0x1130F, 0x11310),
    iv(0x11313, 0x11328), iv(0x1132A, 0x11330), iv(0x11332, 0x11333), iv(0x11335, 0x11339),
    iv(0x1133B, 0x11344), iv(0x11347, 0x11348), iv(0x1134B, 0x1134D), iv(0x11350, 0x11350),
    iv(0x11357, 0x11357), iv(0x1135D, 0x11363), iv(0x11366, 0x1136C), iv(0x11370, 0x11374),
    iv(0x11400, 0x1145B), iv(0x1145D, 0x11461), iv(0x11480, 0x114C7), iv(0x114D0, 0x114D9),
    iv(0x11580, 0x115B5), iv(0x115B8, 0x115DD), iv(0x11600, 0x11644), iv(0x11650, 0x11659),
    iv(0x11660, 0x1166C), iv(0x11680, 0x116B9), iv(0x116C0, 0x116C9), iv(0x11700, 0x1171A),
    iv(0x1171D, 0x1172B), iv(0x11730, 0x11746), iv(0x11800, 0x1183B), iv(0x118A0, 0x118F2),
    iv(0x118FF, 0x11906), iv(0x11909, 0x11909), iv(0x1190C, 0x11913), iv(0x11915, 0x11916),
    iv(0x11918, 0x11935), iv(0x11937, 0x11938), iv(0x1193B, 0x11946), iv(0x11950, 0x11959),
    iv(0x119A0, 0x119A7), iv(0x119AA, 0x119D7), iv(0x119DA, 0x119E4), iv(0x11A00, 0x11A47),
    iv(0x11A50, 0x11AA2), iv(0x11AB0, 0x11AF8), iv(0x11C00, 0x11C08), iv(0x11C0A, 0x11C36),
    iv(0x11C38, 0x11C45), iv(0x11C50, 0x11C6C), iv(0x11C70, 0x11C8F), iv(0x11C92, 0x11CA7),
    iv(0x11CA9, 0x11CB6), iv(0x11D00, 0x11D06), iv(0x11D08, 0x11D09), iv(0x11D0B, 0x11D36),
    iv(0x11D3A, 0x11D3A), iv(0x11D3C, 0x11D3D), iv(0x11D3F, 0x11D47), iv(0x11D50, 0x11D59),
    iv(0x11D60, 0x11D65), iv(0x11D67, 0x11D68), iv(0x11D6A, 0x11D8E), iv(0x11D90, 0x11D91),
    iv(0x11D93, 0x11D98), iv(0x11DA0, 0x11DA9), iv(0x11EE0, 0x11EF8), iv(0x11FB0, 0x11FB0),
    iv(0x11FC0, 0x11FF1), iv(0x11FFF, 0x12399), iv(0x12400, 0x1246E), iv(0x12470, 0x12474),
    iv(0x12480, 0x12543), iv(0x12F90, 0x12FF2), iv(0x13000, 0x1342E), iv(0x13430, 0x13438),
    iv(0x14400, 0x14646), iv(0x16800, 0x16A38), iv(0x16A40, 0x16A5E), iv(0x16A60, 0x16A69),
    iv(0x16A6E, 0x16ABE), iv(0x16AC0, 0x16AC9), iv(0x16AD0, 0x16AED), iv(0x16AF0, 0x16AF5),
    iv(0x16B00, 0x16B45), iv(0x16B50, 0x16B59), iv(0x16B5B, 0x16B61), iv(0x16B63, 0x16B77),
    iv(0x16B7D, 0x16B8F), iv(0x16E40, 0x16E9A), iv(0x16F00, 0x16F4A), iv(0x16F4F, 0x16F87),
    iv(0x16F8F, 0x16F9F), iv(0x1BC00, 0x1BC6A), iv(0x1BC70, 0x1BC7C), iv(0x1BC80, 0x1BC88),
    iv(0x1BC90, 0x1BC99), iv(0x1BC9C, 0x1BCA3), iv(0x1CF00, 0x1CF2D), iv(0x1CF30, 0x1CF46),
    iv(0x1CF50, 0x1CFC3), iv(0x1D000, 0x1D0F5), iv(0x1D100, 0x1D126), iv(0x1D129, 0x1D1EA),
    iv(0x1D200, 0x1D245), iv(0x1D2E0, 0x1D2F3), iv(0x1D300, 0x1D356), iv(0x1D360, 0x1D378),
    iv(0x1D400, 0x1D454), iv(0x1D456, 0x1D49C), iv(0x1D49E, 0x1D49F), iv(0x1D4A2, 0x1D4A2),
    iv(0x1D4A5, 0x1D4A6), iv(0x1D4A9, 0x1D4AC), iv(0x1D4AE, 0x1D4B9), iv(0x1D4BB, 0x1D4BB),
    iv(0x1D4BD, 0x1D4C3), iv(0x1D4C5, 0x1D505), iv(0x1D507, 0x1D50A), iv(0x1D50D, 0x1D514),
    iv(0x1D516, 0x1D51C), iv(0x1D51E, 0x1D539), iv(0x1D53B, 0x1D53E), iv(0x1D540, 0x1D544),
    iv(0x1D546, 0x1D546), iv(0x1D54A, 0x1D550), iv(0x1D552, 0x1D6A5), iv(0x1D6A8, 0x1D7CB),
    iv(0x1D7CE, 0x1DA8B), iv(0x1DA9B, 0x1DA9F), iv(0x1DAA1, 0x1DAAF), iv(0x1DF00, 0x1DF1E),
    iv(0x1E000, 0x1E006), iv(0x1E008, 0x1E018), iv(0x1E01B, 0x1E021), iv(0x1E023, 0x1E024),
    iv(0x1E026, 0x1E02A), iv(0x1E100, 0x1E12C), iv(0x1E130, 0x1E13D), iv(0x1E140, 0x1E149),
    iv(0x1E14E, 0x1E14F), iv(0x1E290, 0x1E2AE), iv(0x1E2C0, 0x1E2F9), iv(0x1E2FF, 0x1E2FF),
    iv(0x1E7E0, 0x1E7E6), iv(0x1E7E8, 0x1E7EB), iv(0x1E7ED, 0x1E7EE), iv(0x1E7F0, 0x1E7FE),
    iv(0x1E800, 0x1E8C4), iv(0x1E8C7, 0x1E8D6), iv(0x1E900, 0x1E94B), iv(0x1E950, 0x1E959),
    iv(0x1E95E, 0x1E95F), iv(0x1EC71, 0x1ECB4), iv(0x1ED01, 0x1ED3D), iv(0x1EE00, 0x1EE03),
    iv(0x1EE05, 0x1EE1F), iv(0x1EE21, 0x1EE22), iv(0x1EE24, 0x1EE24), iv(0x1EE27, 0x1EE27),
    iv(0x1EE29, 0x1EE32), iv(0x1EE34, 0x1EE37), iv(0x1EE39, 0x1EE39), iv(0x1EE3B, 0x1EE3B),
    iv(0x1EE42, 0x1EE42), iv(0x1EE47, 0x1EE47), iv(0x1EE49, 0x1EE49), iv(0x1EE4B, 0x1EE4B),
    iv(0x1EE4D, 0x1EE4F), iv(0x1EE51, 0x1EE52), iv(0x1EE54, 0x1EE54), iv(0x1EE57, 0x1EE57),
    iv(0x1EE59, 0x1EE59), iv(0x1EE5B, 0x1EE5B), iv(0x1EE5D, 0x1EE5D), iv(0x1EE5F, 0x1EE5F),
    iv(0x1EE61, 0x1EE62), iv(0x1EE64, 0x1EE64), iv(0x1EE67, 0x1EE6A), iv(0x1EE6C, 0x1EE72),
    iv(0x1EE74, 0x1EE77), iv(0x1EE79, 0x1EE7C), iv(0x1EE7E, 0x1EE7E), iv(0x1EE80, 0x1EE89),
    iv(0x1EE8B, 0x1EE9B), iv(0x1EEA1, 0x1EEA3), iv(0x1EEA5, 0x1EEA9), iv(0x1EEAB, 0x1EEBB),
    iv(0x1EEF0, 0x1EEF1), iv(0x1F000, 0x1F003), iv(0x1F005, 0x1F02B), iv(0x1F030, 0x1F093),
    iv(0x1F0A0, 0x1F0AE), iv(0x1F0B1, 0x1F0BF), iv(0x1F0C1, 0x1F0CE), iv(0x1F0D1, 0x1F0F5),
    iv(0x1F10B, 0x1F10F), iv(0x1F12E, 0x1F12F), iv(0x1F16A, 0x1F16F), iv(0x1F1AD, 0x1F1AD),
    iv(0x1F1E6, 0x1F1FF), iv(0x1F321, 0x1F32C), iv(0x1F336, 0x1F336), iv(0x1F37D, 0x1F37D),
    iv(0x1F394, 0x1F39F), iv(0x1F3CB, 0x1F3CE), iv(0x1F3D4, 0x1F3DF), iv(0x1F3F1, 0x1F3F3),
    iv(0x1F3F5, 0x1F3F7), iv(0x1F43F, 0x1F43F), iv(0x1F441, 0x1F441), iv(0x1F4FD, 0x1F4FE),
    iv(0x1F53E, 0x1F54A), iv(0x1F54F, 0x1F54F), iv(0x1F568, 0x1F579), iv(0x1F57B, 0x1F594),
    iv(0x1F597, 0x1F5A3), iv(0x1F5A5, 0x1F5FA), iv(0x1F650, 0x1F67F), iv(0x1F6C6, 0x1F6CB),
    iv(0x1F6CD, 0x1F6CF), iv(0x1F6D3, 0x1F6D4), iv(0x1F6E0, 0x1F6EA), iv(0x1F6F0, 0x1F6F3),
    iv(0x1F700, 0x1F773), iv(0x1F780, 0x1F7D8), iv(0x1F800, 0x1F80B), iv(0x1F810, 0x1F847),
    iv(0x1F850, 0x1F859), iv(0x1F860, 0x1F887), iv(0x1F890, 0x1F8AD), iv(0x1F8B0, 0x1F8B1),
    iv(0x1F900, 0x1F90B), iv(0x1F93B, 0x1F93B), iv(0x1F946, 0x1F946), iv(0x1FA00, 0x1FA53),
    iv(0x1FA60, 0x1FA6D), iv(0x1FB00, 0x1FB92), iv(0x1FB94, 0x1FBCA), iv(0x1FBF0, 0x1FBF9),
    iv(0xE0001, 0xE0001), iv(0xE0020, 0xE007F),
];

const COMBINING_RANGES: [Interval; 45] = [
    iv(0x0300, 0x036F), iv(0x0483, 0x0489), iv(0x07EB, 0x07F3), iv(0x0C00, 0x0C00),
    iv(0x0C04, 0x0C04), iv(0x0D00, 0x0D01), iv(0x135D, 0x135F), iv(0x1A7F, 0x1A7F),
    iv(0x1AB0, 0x1ACE), iv(0x1B6B, 0x1B73), iv(0x1DC0, 0x1DFF), iv(0x20D0, 0x20F0),
    iv(0x2CEF, 0x2CF1), iv(0x2DE0, 0x2DFF), iv(0x3099, 0x309A), iv(0xA66F, 0xA672),
    iv(0xA674, 0xA67D), iv(0xA69E, 0xA69F), iv(0xA6F0, 0xA6F1), iv(0xA8E0, 0xA8F1),
    iv(0xFE20, 0xFE2F), iv(0x101FD, 0x101FD), iv(0x10376, 0x1037A), iv(0x10EAB, 0x10EAC),
    iv(0x10F46, 0x10F50), iv(0x10F82, 0x10F85), iv(0x11300, 0x11301), iv(0x1133B, 0x1133C),
    iv(0x11366, 0x1136C), iv(0x11370, 0x11374), iv(0x16AF0, 0x16AF4), iv(0x1CF00, 0x1CF2D),
    iv(0x1CF30, 0x1CF46), iv(0x1D165, 0x1D169), iv(0x1D16D, 0x1D172), iv(0x1D17B, 0x1D182),
    iv(0x1D185, 0x1D18B), iv(0x1D1AA, 0x1D1AD), iv(0x1D242, 0x1D244), iv(0x1E000, 0x1E006),
    iv(0x1E008, 0x1E018), iv(0x1E01B, 0x1E021), iv(0x1E023, 0x1E024), iv(0x1E026, 0x1E02A),
    iv(0x1E8D0, 0x1E8D6),
];

const NONPRINTING_RANGES: [Interval; 12] = [
    iv(0x0000, 0x001F), iv(0x007F, 0x009F), iv(0x00AD, 0x00AD), iv(0x070F, 0x070F),
    iv(0x180B, 0x180E), iv(0x200B, 0x200F), iv(0x2028, 0x202E), iv(0x206A, 0x206F),
    iv(0xD800, 0xDFFF), iv(0xFEFF, 0xFEFF), iv(0xFFF9, 0xFFFB), iv(0xFFFE, 0xFFFF),
];

const EMOJI_RANGES: [Interval; 76] = [
    iv(0x203C, 0x203C), iv(0x2049, 0x2049), iv(0x2122, 0x2122), iv(0x2139, 0x2139),
    iv(0x2194, 0x2199), iv(0x21A9, 0x21AA), iv(0x231A, 0x231B), iv(0x2328, 0x2328),
    iv(0x2388, 0x2388), iv(0x23CF, 0x23CF), iv(0x23E9, 0x23F3), iv(0x23F8, 0x23FA),
    iv(0x24C2, 0x24C2), iv(0x25AA, 0x25AB), iv(0x25B6, 0x25B6), iv(0x25C0, 0x25C0),
    iv(0x25FB, 0x25FE), iv(0x2600, 0x2605), iv(0x2607, 0x2612), iv(0x2614, 0x2685),
    iv(0x2690, 0x2705), iv(0x2708, 0x2712), iv(0x2714, 0x2714), iv(0x2716, 0x2716),
    iv(0x271D, 0x271D), iv(0x2721, 0x2721), iv(0x2728, 0x2728), iv(0x2733, 0x2734),
    iv(0x2744, 0x2744), iv(0x2747, 0x2747), iv(0x274C, 0x274C), iv(0x274E, 0x274E),
    iv(0x2753, 0x2755), iv(0x2757, 0x2757), iv(0x2763, 0x2767), iv(0x2795, 0x2797),
    iv(0x27A1, 0x27A1), iv(0x27B0, 0x27B0), iv(0x27BF, 0x27BF), iv(0x2934, 0x2935),
    iv(0x2B05, 0x2B07), iv(0x2B1B, 0x2B1C), iv(0x2B50, 0x2B50), iv(0x2B55, 0x2B55),
    iv(0x3030, 0x3030), iv(0x303D, 0x303D), iv(0x3297, 0x3297), iv(0x3299, 0x3299),
    iv(0x1F000, 0x1F0FF), iv(0x1F10D, 0x1F10F), iv(0x1F12F, 0x1F12F), iv(0x1F16C, 0x1F171),
    iv(0x1F17E, 0x1F17F), iv(0x1F18E, 0x1F18E), iv(0x1F191, 0x1F19A), iv(0x1F1AD, 0x1F1E5),
    iv(0x1F201, 0x1F20F), iv(0x1F21A, 0x1F21A), iv(0x1F22F, 0x1F22F), iv(0x1F232, 0x1F23A),
    iv(0x1F23C, 0x1F23F), iv(0x1F249, 0x1F3FA), iv(0x1F400, 0x1F53D), iv(0x1F546, 0x1F64F),
    iv(0x1F680, 0x1F6FF), iv(0x1F774, 0x1F77F), iv(0x1F7D5, 0x1F7FF), iv(0x1F80C, 0x1F80F),
    iv(0x1F848, 0x1F84F), iv(0x1F85A, 0x1F85F), iv(0x1F888, 0x1F88F), iv(0x1F8AE, 0x1F8FF),
    iv(0x1F90C, 0x1F93A), iv(0x1F93C, 0x1F945), iv(0x1F947, 0x1FAFF), iv(0x1FC00, 0x1FFFD),
];

const PRIVATE_USE_RANGES: [Interval; 3] = [
    iv(0xE000, 0xF8FF), iv(0xF0000, 0xFFFFD), iv(0x100000, 0x10FFFD),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_sorted_and_disjoint() {
        for category in Category::ALL {
            if let Err(err) = category.table().validate() {
                panic!("{} table is malformed: {err}", category.name());
            }
        }
    }

    #[test]
    fn ascii_graphics_are_narrow() {
        for cp in 0x20..=0x7e {
            assert!(NARROW.contains(cp), "U+{cp:04X} should be narrow");
        }
    }

    #[test]
    fn cjk_and_hangul_are_double_width() {
        for cp in [0x3042, 0x4E16, 0x754C, 0xAC00, 0xFF01, 0x2_0000, 0x3_0000] {
            assert!(DOUBLE_WIDTH.contains(cp), "U+{cp:04X} should be wide");
        }
    }

    #[test]
    fn geometric_and_enclosed_forms_are_ambiguous() {
        // BLACK SQUARE, CIRCLED DIGIT ONE, WHITE STAR
        for cp in [0x25A0, 0x2460, 0x2606] {
            assert!(AMBIGUOUS.contains(cp), "U+{cp:04X} should be ambiguous");
            assert!(!DOUBLE_WIDTH.contains(cp));
        }
    }

    #[test]
    fn combining_diacriticals_are_combining() {
        assert!(COMBINING.contains(0x0300));
        assert!(COMBINING.contains(0x036F));
        assert!(COMBINING.contains(0x3099));
        assert!(!COMBINING.contains(0x0041));
    }

    #[test]
    fn surrogates_and_bom_are_nonprinting() {
        assert!(NONPRINTING.contains(0xD800));
        assert!(NONPRINTING.contains(0xDFFF));
        assert!(NONPRINTING.contains(0xFEFF));
        assert!(NONPRINTING.contains(0x0000));
    }

    #[test]
    fn private_use_covers_all_three_areas() {
        assert!(PRIVATE_USE.contains(0xE000));
        assert!(PRIVATE_USE.contains(0xF_0000));
        assert!(PRIVATE_USE.contains(0x10_FFFD));
        assert!(!PRIVATE_USE.contains(0x10_FFFE));
    }

    #[test]
    fn category_of_reports_overlaps() {
        // U+231A WATCH is both wide and emoji.
        let cats: Vec<_> = Category::of(0x231A).collect();
        assert!(cats.contains(&Category::DoubleWidth));
        assert!(cats.contains(&Category::Emoji));
        assert_eq!(Category::of(0x11_0000).count(), 0);
    }
}
