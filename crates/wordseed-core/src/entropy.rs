//! 128-bit entropy and the three ways to obtain it.
//!
//! [`EntropyMode`] is chosen explicitly by the caller. There is no fallback
//! between modes: a malformed hex string is an error, never a reason to draw
//! random entropy instead.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{ENTROPY_BITS, ENTROPY_BYTES, ENTROPY_HEX_DIGITS};
use crate::error::FormatError;

/// A 128-bit entropy value.
///
/// Always fully populated. Secret material is zeroized on drop and redacted
/// from `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy(u128);

impl Entropy {
    /// Draw 128 bits from the OS cryptographic RNG.
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = Zeroizing::new([0u8; ENTROPY_BYTES]);
        rand::rngs::OsRng.fill_bytes(bytes.as_mut_slice());
        Self::from_bytes(*bytes)
    }

    /// Parse 32 hex digits, optionally wrapped in whitespace and prefixed
    /// with `0x` or `0X`. Case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseed_core::Entropy;
    /// let e = Entropy::from_hex(" 0x000102030405060708090A0B0C0D0E0F ").unwrap();
    /// assert_eq!(e.to_hex(), "000102030405060708090a0b0c0d0e0f");
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, FormatError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let got = digits.chars().count();
        if got != ENTROPY_HEX_DIGITS {
            return Err(FormatError::HexLength {
                expected: ENTROPY_HEX_DIGITS,
                got,
            });
        }
        if let Some((position, ch)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(FormatError::HexCharacter { ch, position });
        }

        let mut bytes = Zeroizing::new([0u8; ENTROPY_BYTES]);
        hex::decode_to_slice(digits, bytes.as_mut_slice()).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => FormatError::HexCharacter {
                ch: c,
                position: index,
            },
            _ => FormatError::HexLength {
                expected: ENTROPY_HEX_DIGITS,
                got,
            },
        })?;
        Ok(Self::from_bytes(*bytes))
    }

    /// Parse 128 binary digits. All whitespace is ignored, so grouped input
    /// such as `"0000 1111 ..."` is accepted.
    pub fn from_binary(input: &str) -> Result<Self, FormatError> {
        let digits: Zeroizing<Vec<char>> =
            Zeroizing::new(input.chars().filter(|c| !c.is_whitespace()).collect());

        if digits.len() != ENTROPY_BITS as usize {
            return Err(FormatError::BinaryLength {
                expected: ENTROPY_BITS as usize,
                got: digits.len(),
            });
        }

        let mut value = 0u128;
        for (position, &ch) in digits.iter().enumerate() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(FormatError::BinaryCharacter { ch, position }),
            };
            value = (value << 1) | bit;
        }
        Ok(Self(value))
    }

    /// Build from 16 big-endian bytes.
    pub fn from_bytes(bytes: [u8; ENTROPY_BYTES]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// The 16 big-endian bytes fed to the checksum hash.
    pub fn to_be_bytes(&self) -> [u8; ENTROPY_BYTES] {
        self.0.to_be_bytes()
    }

    /// Raw value. Handle with care.
    pub fn value(&self) -> u128 {
        self.0
    }

    /// 32 lowercase hex digits, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// 128 binary digits, most significant first.
    pub fn to_binary(&self) -> String {
        format!("{:0128b}", self.0)
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entropy").field(&"[REDACTED]").finish()
    }
}

/// How the caller wants entropy obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropyMode {
    /// Fresh bits from the OS CSPRNG.
    Random,
    /// 32 caller-supplied hex digits.
    Hex,
    /// 128 caller-supplied binary digits.
    Binary,
}

impl EntropyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Hex => "hex",
            Self::Binary => "binary",
        }
    }

    /// Obtain entropy for this mode.
    ///
    /// Hex and binary require `input`; random refuses one, so a caller that
    /// meant to supply entropy never silently gets random bits.
    pub fn obtain(self, input: Option<&str>) -> Result<Entropy, FormatError> {
        match (self, input) {
            (Self::Random, None) => Ok(Entropy::random()),
            (Self::Random, Some(_)) => Err(FormatError::UnexpectedInput),
            (Self::Hex, Some(s)) => Entropy::from_hex(s),
            (Self::Binary, Some(s)) => Entropy::from_binary(s),
            (mode, None) => Err(FormatError::MissingInput {
                mode: mode.as_str(),
            }),
        }
    }
}

impl fmt::Display for EntropyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntropyMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "hex" => Ok(Self::Hex),
            "binary" => Ok(Self::Binary),
            other => Err(FormatError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_7F: &str = "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f";

    #[test]
    fn hex_parses_lower_and_upper_case() {
        let lower = Entropy::from_hex(HEX_7F).unwrap();
        let upper = Entropy::from_hex(&HEX_7F.to_uppercase()).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.value(), 0x7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f);
    }

    #[test]
    fn hex_strips_prefix_and_whitespace() {
        let plain = Entropy::from_hex(HEX_7F).unwrap();
        let prefixed = Entropy::from_hex(&format!("\t0x{HEX_7F}\n")).unwrap();
        let upper_prefix = Entropy::from_hex(&format!("0X{HEX_7F}")).unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain, upper_prefix);
    }

    #[test]
    fn hex_rejects_31_and_33_digits() {
        let short = &HEX_7F[..31];
        assert_eq!(
            Entropy::from_hex(short),
            Err(FormatError::HexLength { expected: 32, got: 31 })
        );
        let long = format!("{HEX_7F}0");
        assert_eq!(
            Entropy::from_hex(&long),
            Err(FormatError::HexLength { expected: 32, got: 33 })
        );
    }

    #[test]
    fn hex_rejects_non_hex_character() {
        let bad = format!("g0{}", &HEX_7F[2..]);
        assert_eq!(
            Entropy::from_hex(&bad),
            Err(FormatError::HexCharacter { ch: 'g', position: 0 })
        );
    }

    #[test]
    fn hex_prefix_only_stripped_once() {
        let doubled = format!("0x0x{}", &HEX_7F[..30]);
        assert!(matches!(
            Entropy::from_hex(&doubled),
            Err(FormatError::HexCharacter { ch: 'x', position: 1 })
        ));
    }

    #[test]
    fn hex_rejects_non_ascii_without_panicking() {
        let bad = format!("é{}", &HEX_7F[1..]);
        assert!(matches!(
            Entropy::from_hex(&bad),
            Err(FormatError::HexCharacter { ch: 'é', position: 0 })
        ));
    }

    #[test]
    fn binary_parses_with_grouping_whitespace() {
        let grouped = "0111 1111\n".repeat(16);
        let e = Entropy::from_binary(&grouped).unwrap();
        assert_eq!(e.to_hex(), HEX_7F);
    }

    #[test]
    fn binary_rejects_wrong_length() {
        let short = "0".repeat(127);
        assert_eq!(
            Entropy::from_binary(&short),
            Err(FormatError::BinaryLength { expected: 128, got: 127 })
        );
        let long = "1".repeat(129);
        assert_eq!(
            Entropy::from_binary(&long),
            Err(FormatError::BinaryLength { expected: 128, got: 129 })
        );
    }

    #[test]
    fn binary_rejects_other_digits() {
        let mut bad = "0".repeat(128);
        bad.replace_range(5..6, "2");
        assert_eq!(
            Entropy::from_binary(&bad),
            Err(FormatError::BinaryCharacter { ch: '2', position: 5 })
        );
    }

    #[test]
    fn binary_and_hex_agree() {
        let e = Entropy::from_hex("80808080808080808080808080808080").unwrap();
        let b = Entropy::from_binary(&e.to_binary()).unwrap();
        assert_eq!(e, b);
        assert_eq!(e.to_binary().len(), 128);
        assert!(e.to_binary().starts_with("10000000"));
    }

    #[test]
    fn bytes_are_big_endian() {
        let mut bytes = [0u8; 16];
        bytes[0] = 0xAB;
        bytes[15] = 0x01;
        let e = Entropy::from_bytes(bytes);
        assert_eq!(e.value() >> 120, 0xAB);
        assert_eq!(e.value() & 0xFF, 0x01);
        assert_eq!(e.to_be_bytes(), bytes);
    }

    #[test]
    fn random_draws_differ() {
        assert_ne!(Entropy::random(), Entropy::random());
    }

    #[test]
    fn debug_is_redacted() {
        let e = Entropy::from_hex(HEX_7F).unwrap();
        let debug = format!("{e:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("7f7f"));
    }

    #[test]
    fn mode_requires_matching_input() {
        assert_eq!(
            EntropyMode::Hex.obtain(None),
            Err(FormatError::MissingInput { mode: "hex" })
        );
        assert_eq!(
            EntropyMode::Binary.obtain(None),
            Err(FormatError::MissingInput { mode: "binary" })
        );
        assert_eq!(
            EntropyMode::Random.obtain(Some(HEX_7F)),
            Err(FormatError::UnexpectedInput)
        );
        assert!(EntropyMode::Random.obtain(None).is_ok());
        assert!(EntropyMode::Hex.obtain(Some(HEX_7F)).is_ok());
    }

    #[test]
    fn invalid_hex_never_falls_back_to_random() {
        assert!(EntropyMode::Hex.obtain(Some("not hex")).is_err());
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("random".parse::<EntropyMode>().unwrap(), EntropyMode::Random);
        assert_eq!(" HEX ".parse::<EntropyMode>().unwrap(), EntropyMode::Hex);
        assert_eq!("Binary".parse::<EntropyMode>().unwrap(), EntropyMode::Binary);
        assert_eq!(
            "decimal".parse::<EntropyMode>(),
            Err(FormatError::UnknownMode("decimal".into()))
        );
        assert_eq!(EntropyMode::Binary.to_string(), "binary");
    }
}
