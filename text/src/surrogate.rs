//! Surrogate pair arithmetic.
//!
//! A codepoint in U+10000..=U+10FFFF is stored in UTF-16 as two units:
//! subtract 0x10000, put the upper 10 bits in a high surrogate
//! (0xD800..=0xDBFF) and the lower 10 bits in a low surrogate
//! (0xDC00..=0xDFFF).

pub const HIGH_START: u16 = 0xd800;
pub const HIGH_END: u16 = 0xdbff;
pub const LOW_START: u16 = 0xdc00;
pub const LOW_END: u16 = 0xdfff;

/// First codepoint that needs a surrogate pair.
pub const SUPPLEMENTARY_START: u32 = 0x1_0000;

const TEN_BITS: u32 = 0x3ff;

#[inline]
pub fn is_high(unit: u16) -> bool {
    (HIGH_START..=HIGH_END).contains(&unit)
}

#[inline]
pub fn is_low(unit: u16) -> bool {
    (LOW_START..=LOW_END).contains(&unit)
}

/// Returns true for any unit in 0xD800..=0xDFFF.
#[inline]
pub fn is_surrogate(unit: u16) -> bool {
    (HIGH_START..=LOW_END).contains(&unit)
}

/// Combine a high and a low surrogate into the codepoint they represent.
///
/// The caller has checked both halves with [`is_high`] and [`is_low`];
/// the result is then always in U+10000..=U+10FFFF.
#[inline]
pub fn combine(high: u16, low: u16) -> u32 {
    let hi = u32::from(high - HIGH_START);
    let lo = u32::from(low - LOW_START);
    ((hi << 10) | lo) + SUPPLEMENTARY_START
}

/// Split a scalar into its UTF-16 units.
///
/// Values below U+10000 are a single unit; the second element is `None`.
#[inline]
pub fn split(ch: char) -> (u16, Option<u16>) {
    let cp = u32::from(ch);
    if cp < SUPPLEMENTARY_START {
        // A char below U+10000 is never a surrogate and fits in 16 bits.
        return (cp as u16, None);
    }
    let offset = cp - SUPPLEMENTARY_START;
    let high = HIGH_START + (offset >> 10) as u16;
    let low = LOW_START + (offset & TEN_BITS) as u16;
    (high, Some(low))
}
