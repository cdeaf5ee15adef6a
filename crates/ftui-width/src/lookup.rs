#![forbid(unsafe_code)]

//! Packed width lookup table spanning the whole code space.
//!
//! Widths fit in two bits, so each byte carries two code points: the low
//! nibble holds the even code point and the high nibble the odd one. The full
//! table is `0x110000 / 2` bytes (544 KiB).

use crate::interval::MAX_CODE_POINT;

/// Number of bytes in a packed table.
pub const LOOKUP_TABLE_LEN: usize = (MAX_CODE_POINT as usize + 1) / 2;

/// Precomputed widths for every code point in `0..=0x10FFFF`.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable {
    packed: Box<[u8]>,
}

impl LookupTable {
    /// Fill the table by evaluating `width_of` for every code point.
    ///
    /// Widths are truncated to their low two bits before packing.
    #[must_use]
    pub fn build<F>(width_of: F) -> Self
    where
        F: Fn(u32) -> usize,
    {
        let packed = (0..LOOKUP_TABLE_LEN as u32)
            .map(|pair| {
                let even = pair * 2;
                pack(width_of(even), width_of(even + 1))
            })
            .collect();
        Self { packed }
    }

    /// Width of `code_point`, or 0 beyond U+10FFFF.
    #[inline]
    #[must_use]
    pub fn get(&self, code_point: u32) -> usize {
        if code_point > MAX_CODE_POINT {
            return 0;
        }
        let byte = self.packed[(code_point >> 1) as usize];
        let shift = (code_point & 1) * 4;
        usize::from((byte >> shift) & 0b11)
    }

    /// The packed bytes, two widths per byte.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.packed
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTable")
            .field("len", &self.packed.len())
            .finish_non_exhaustive()
    }
}

#[inline]
fn pack(even: usize, odd: usize) -> u8 {
    // Both values are masked to two bits, so the casts cannot truncate.
    let even = (even & 0b11) as u8;
    let odd = (odd & 0b11) as u8;
    even | (odd << 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_the_code_space() {
        let table = LookupTable::build(|_| 1);
        assert_eq!(table.as_bytes().len(), 0x8_8000);
        assert_eq!(table.get(0), 1);
        assert_eq!(table.get(MAX_CODE_POINT), 1);
    }

    #[test]
    fn even_and_odd_share_a_byte() {
        let table = LookupTable::build(|cp| if cp % 2 == 0 { 2 } else { 1 });
        assert_eq!(table.as_bytes()[0], 0x12);
        assert_eq!(table.get(0x4E00), 2);
        assert_eq!(table.get(0x4E01), 1);
    }

    #[test]
    fn out_of_range_is_zero() {
        let table = LookupTable::build(|_| 2);
        assert_eq!(table.get(MAX_CODE_POINT + 1), 0);
        assert_eq!(table.get(u32::MAX), 0);
    }

    #[test]
    fn wide_values_are_masked() {
        let table = LookupTable::build(|_| 7);
        assert_eq!(table.get(0x41), 3);
        assert_eq!(table.as_bytes()[0x20], 0x33);
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let width_of = |cp: u32| (cp % 3) as usize;
        assert_eq!(LookupTable::build(width_of), LookupTable::build(width_of));
    }
}
