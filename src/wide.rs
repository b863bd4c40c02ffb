//! Code-unit conversion
//!
//! Tokens arrive from the pipeline as UTF-8 byte slices. N-gram windows are
//! matched on UTF-16 code units so that every window has a fixed-width,
//! comparable layout. Characters outside the BMP become surrogate pairs and
//! count as two units, on both the model side and the input side.

use crate::error::Result;
use tracing::debug;

/// A word as produced by the external tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub bytes: &'a [u8],
    /// Tokenizer flags, carried through conversion untouched
    pub flags: u32,
}

impl<'a> Token<'a> {
    pub fn new(bytes: &'a [u8], flags: u32) -> Self {
        Self { bytes, flags }
    }

    pub fn from_word(word: &'a str) -> Self {
        Self::new(word.as_bytes(), 0)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A token converted to UTF-16 code units
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideToken {
    pub units: Vec<u16>,
    pub flags: u32,
}

impl WideToken {
    /// Zero-length token; contributes no n-grams
    pub fn empty(flags: u32) -> Self {
        Self {
            units: Vec::new(),
            flags,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// UTF-8 to UTF-16 converter.
///
/// Holds no cursor state between calls, so one instance can be shared by
/// any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeUnitConverter;

impl CodeUnitConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a token, failing on malformed UTF-8
    pub fn try_to_wide(&self, token: &Token<'_>) -> Result<WideToken> {
        let text = std::str::from_utf8(token.bytes)?;
        Ok(WideToken {
            units: self.encode(text),
            flags: token.flags,
        })
    }

    /// Convert a token; malformed input yields an empty, unscorable token
    pub fn to_wide(&self, token: &Token<'_>) -> WideToken {
        match self.try_to_wide(token) {
            Ok(wide) => wide,
            Err(e) => {
                debug!("Skipping token of {} bytes: {}", token.len(), e);
                WideToken::empty(token.flags)
            }
        }
    }

    /// Encode already-validated text
    pub fn encode(&self, text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_conversion() {
        let conv = CodeUnitConverter::new();
        let wide = conv.to_wide(&Token::new(b"the", 7));
        assert_eq!(wide.units, vec![b't' as u16, b'h' as u16, b'e' as u16]);
        assert_eq!(wide.flags, 7);
    }

    #[test]
    fn test_cyrillic_is_one_unit_per_char() {
        let conv = CodeUnitConverter::new();
        let wide = conv.to_wide(&Token::from_word("мир"));
        assert_eq!(wide.len(), 3);
        assert_eq!(wide.units[0], 'м' as u16);
    }

    #[test]
    fn test_astral_char_is_surrogate_pair() {
        let conv = CodeUnitConverter::new();
        let wide = conv.to_wide(&Token::from_word("𝔸"));
        assert_eq!(wide.len(), 2);
    }

    #[test]
    fn test_malformed_utf8_degrades_to_empty() {
        let conv = CodeUnitConverter::new();
        let token = Token::new(&[0x66, 0xff, 0x6f], 3);

        assert!(conv.try_to_wide(&token).is_err());

        let wide = conv.to_wide(&token);
        assert!(wide.is_empty());
        assert_eq!(wide.flags, 3);
    }
}
