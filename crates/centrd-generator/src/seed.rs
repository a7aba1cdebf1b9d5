use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

/// A 256-bit seed for reproducible free-play puzzles.
///
/// The text form is 64 lowercase hexadecimal digits. Seeds can also be
/// derived from an arbitrary phrase with [`PuzzleSeed::from_phrase`].
///
/// # Examples
///
/// ```
/// use centrd_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("sunday puzzles");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed as the SHA-256 digest of `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a malformed [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contained a non-hexadecimal character.
    #[display("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let digits = s.as_bytes();
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hex = |offset: usize| {
                char::from(digits[offset])
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidDigit { offset })
            };
            let value = (hex(2 * i)? << 4) | hex(2 * i + 1)?;
            *byte = value as u8;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.bytes()[0], 0xc1);
        assert_eq!(seed.bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(SEED.to_uppercase().parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}zz", &SEED[..62]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidDigit { offset: 62 })
        );
    }

    #[test]
    fn test_phrase_is_stable() {
        assert_eq!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("a"));
        assert_ne!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("b"));
        // SHA-256("abc")
        assert_eq!(
            PuzzleSeed::from_phrase("abc").to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
