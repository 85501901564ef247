//! Base64 armoring for ciphertext
//!
//! Payloads travel as standard-alphabet base64 with `=` padding, the
//! format emitted by the producing system's `java.util.Base64` encoder.
//! There is no version prefix; the armored form is exactly the encoded
//! cipher bytes.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Encode cipher bytes as an armored string.
pub fn encode(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Decode an armored string back into cipher bytes.
///
/// Fails with [`Error::Encoding`] if the input is not valid base64.
pub fn decode(armored: &str) -> Result<Vec<u8>> {
    STANDARD.decode(armored).map_err(Error::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes() {
        let bytes = b"";
        let armored = encode(bytes);
        let decoded = decode(&armored).unwrap();
        assert_eq!(bytes, &decoded[..]);
    }

    #[test]
    fn test_simple_bytes() {
        let bytes = b"test";
        let armored = encode(bytes);
        assert_eq!(armored, "dGVzdA==");
        let decoded = decode(&armored).unwrap();
        assert_eq!(bytes, &decoded[..]);
    }

    #[test]
    fn test_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let armored = encode(&bytes);
        let decoded = decode(&armored).unwrap();
        assert_eq!(bytes, decoded);
    }

    #[test]
    fn test_padding_present() {
        // Standard alphabet pads; the producing system emits padded output.
        assert!(encode(b"a").ends_with("=="));
        assert!(encode(b"ab").ends_with('='));
    }

    #[test]
    fn test_invalid_base64() {
        let result = decode("not base64 at all!!!");
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_invalid_symbol_position() {
        let result = decode("dGVzdA=extra");
        assert!(matches!(result, Err(Error::Encoding(_))));
    }
}
