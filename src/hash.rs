//! Seed fingerprinting and hash-driven parameter derivation.
//!
//! The SHA-1 hex digest of the seed is the only source of randomness; every
//! geometric parameter downstream is read from fixed windows of it, so equal
//! seeds reproduce whole documents byte for byte.

use sha1::{Digest, Sha1};
use std::fmt;

/// Hex-rendered SHA-1 digest of a seed string: 40 lowercase hex chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    hex: String,
}

impl Fingerprint {
    pub fn of(seed: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(seed.as_bytes());
        let hex = hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Self { hex }
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// Parse the hex chars in `[offset, offset + width)` as an integer.
    /// Windows clamp to the end of the digest; an empty window reads as 0.
    pub fn window(&self, offset: usize, width: usize) -> u32 {
        let start = offset.min(self.hex.len());
        let end = (offset + width).min(self.hex.len());
        u32::from_str_radix(&self.hex[start..end], 16).unwrap_or(0)
    }

    /// Reader that consumes one digit per grid cell, starting at `start`.
    pub fn cursor(&self, start: usize) -> HexCursor<'_> {
        HexCursor {
            digest: self,
            index: start,
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Advancing read position into a [`Fingerprint`].
#[derive(Debug)]
pub struct HexCursor<'a> {
    digest: &'a Fingerprint,
    index: usize,
}

impl HexCursor<'_> {
    /// Read the digit at the current position, then advance by one.
    pub fn next_digit(&mut self) -> u32 {
        let value = self.digest.window(self.index, 1);
        self.index += 1;
        value
    }
}

/// Map `value` linearly from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping: callers pass values from fixed-width hex windows that sit
/// inside the input range by construction, with `in_min != in_max`.
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_of_known_seeds() {
        assert_eq!(
            Fingerprint::of("GitHub").as_hex(),
            "5442e2b64fa09764b9f593867e59a97292c84059"
        );
        assert_eq!(
            Fingerprint::of("").as_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn fingerprint_is_stable() {
        assert_eq!(Fingerprint::of("seed"), Fingerprint::of("seed"));
        assert_ne!(Fingerprint::of("seed"), Fingerprint::of("seed2"));
    }

    #[test]
    fn window_parses_hex_ranges() {
        let digest = Fingerprint::of("GitHub");
        assert_eq!(digest.window(0, 1), 0x5);
        assert_eq!(digest.window(1, 1), 0x4);
        assert_eq!(digest.window(14, 3), 0x64b);
    }

    #[test]
    fn window_clamps_past_the_end() {
        let digest = Fingerprint::of("GitHub");
        // Digest is 40 chars; offset 39 leaves one char, offset 40 none.
        assert_eq!(digest.window(39, 3), 0x9);
        assert_eq!(digest.window(40, 1), 0);
        assert_eq!(digest.window(64, 2), 0);
    }

    #[test]
    fn cursor_reads_successive_digits() {
        let digest = Fingerprint::of("GitHub");
        let mut cursor = digest.cursor(0);
        assert_eq!(cursor.next_digit(), 0x5);
        assert_eq!(cursor.next_digit(), 0x4);
        assert_eq!(cursor.next_digit(), 0x4);
        assert_eq!(cursor.next_digit(), 0x2);
        let mut offset_cursor = digest.cursor(1);
        assert_eq!(offset_cursor.next_digit(), 0x4);
    }

    #[test]
    fn remap_is_linear() {
        assert_eq!(remap(0.0, 0.0, 15.0, 10.0, 70.0), 10.0);
        assert_eq!(remap(15.0, 0.0, 15.0, 10.0, 70.0), 70.0);
        assert_eq!(remap(5.0, 0.0, 15.0, 10.0, 70.0), 30.0);
        assert_eq!(remap(8.0, 0.0, 16.0, 0.0, 1.0), 0.5);
    }
}
