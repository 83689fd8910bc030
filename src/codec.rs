//! Wide-character ⇄ UTF-8 transcoding.
//!
//! Document engines hand text over as sequences of wide character units.
//! This module converts those units to and from UTF-8 byte sequences using
//! the extended multi-byte scheme the engines themselves use: lead bytes
//! cover 1- through 6-byte forms, so every unit below `0x8000_0000` has an
//! encoding — including values above U+10FFFF that strict UTF-8 rejects.
//!
//! Decoding is deliberately lenient: on a truncated sequence, a malformed
//! continuation byte, or an unrecognized lead byte, it stops and returns
//! the units decoded so far. No replacement characters are inserted and no
//! error is raised; a partially garbled string yields its readable prefix.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lead-byte prefixes for 2..=6 byte sequences.
const LEAD_PREFIX: [u8; 5] = [0xC0, 0xE0, 0xF0, 0xF8, 0xFC];

/// Marker table for decoding: `(head, data_bits)` per sequence level.
/// Level 0 is the continuation-byte pattern `10xxxxxx`; levels 1..=5 are
/// the lead bytes of 2..=6 byte sequences.
const LEVELS: [(u8, u8); 6] = [
    (0b10, 6),
    (0b110, 5),
    (0b1110, 4),
    (0b11110, 3),
    (0b111110, 2),
    (0b1111110, 1),
];

/// Check whether `byte` carries the marker of the given level.
#[inline]
fn has_marker(byte: u8, level: usize) -> bool {
    let (head, data) = LEVELS[level];
    byte >> data == head
}

/// Append the encoding of a single wide unit to `out`.
///
/// Units below `0x80` encode as themselves. Larger units take the shortest
/// multi-byte form that fits, up to 6 bytes for units below `0x8000_0000`.
/// Units at or above `0x8000_0000` append nothing.
pub fn encode_unit(unit: u32, out: &mut Vec<u8>) {
    if unit < 0x80 {
        out.push(unit as u8);
        return;
    }
    if unit >= 0x8000_0000 {
        return;
    }
    let nbytes = if unit < 0x800 {
        2
    } else if unit < 0x1_0000 {
        3
    } else if unit < 0x20_0000 {
        4
    } else if unit < 0x400_0000 {
        5
    } else {
        6
    };
    let mut shift = 6 * (nbytes - 1);
    out.push(LEAD_PREFIX[nbytes - 2] | (unit >> shift) as u8);
    while shift > 0 {
        shift -= 6;
        out.push(0x80 | ((unit >> shift) & 0x3F) as u8);
    }
}

/// Encode a sequence of wide units as UTF-8 bytes.
///
/// Empty input yields empty output. Units the scheme cannot represent
/// (`>= 0x8000_0000`) contribute nothing.
pub fn encode(units: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len());
    for &unit in units {
        encode_unit(unit, &mut out);
    }
    out
}

/// Decode UTF-8 bytes into wide units, truncating at the first malformed
/// byte.
///
/// ASCII bytes pass through one-to-one. Multi-byte sequences are recognized
/// by their lead-byte marker; each trailing byte must match the
/// continuation pattern. Any violation — including input ending mid-sequence
/// — ends decoding, and the units accumulated up to that point are returned.
pub fn decode(bytes: &[u8]) -> Vec<u32> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter();
    while let Some(&b) = iter.next() {
        if b >> 7 == 0 {
            out.push(u32::from(b));
            continue;
        }
        let Some(level) = (1..LEVELS.len()).find(|&i| has_marker(b, i)) else {
            return out;
        };
        let (head, data) = LEVELS[level];
        let mut unit = u32::from(b ^ (head << data)) << (6 * level);
        for j in (0..level).rev() {
            let Some(&trail) = iter.next() else {
                return out;
            };
            if !has_marker(trail, 0) {
                return out;
            }
            unit |= u32::from(trail & 0x3F) << (6 * j);
        }
        out.push(unit);
    }
    out
}

/// A wide-character string as the document engine represents it.
///
/// Units are kept verbatim, so text survives even when it contains values
/// outside the Unicode scalar range. Conversion to and from Rust strings
/// goes through the codec; serde support means model fixtures carry text
/// as plain JSON strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideString(Vec<u32>);

impl WideString {
    /// Create an empty wide string.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wrap a sequence of wide units.
    pub fn from_units(units: impl Into<Vec<u32>>) -> Self {
        Self(units.into())
    }

    /// The raw wide units.
    pub fn units(&self) -> &[u32] {
        &self.0
    }

    /// Number of wide units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string contains no units.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode to UTF-8 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode(&self.0)
    }

    /// Encode to a Rust string.
    ///
    /// Units beyond the Unicode scalar range encode to byte sequences that
    /// are not valid UTF-8; those degrade through a lossy conversion. Text
    /// within the Unicode range converts exactly.
    pub fn to_utf8_lossy(&self) -> String {
        let bytes = self.to_bytes();
        match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self(decode(s.as_bytes()))
    }
}

impl From<String> for WideString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8_lossy())
    }
}

impl Serialize for WideString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_utf8_lossy())
    }
}

impl<'de> Deserialize<'de> for WideString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}
