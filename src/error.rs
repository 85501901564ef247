use thiserror::Error;

/// Failure modes of a decrypt (or parse) attempt.
///
/// The producing system collapsed every failure into one opaque error;
/// here the three distinct stages are tagged so consumers can branch on
/// them. Any single attempt either fully succeeds or fails with exactly
/// one of these - there are no partial results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The ciphertext armoring is not valid base64.
    #[error("ciphertext is not valid base64")]
    Encoding(#[source] base64::DecodeError),

    /// The cipher rejected the input: the ciphertext length is not a
    /// whole number of blocks, or unpadding failed (wrong passphrase,
    /// wrong IV seed, or corrupted data - indistinguishable from each
    /// other on this side).
    ///
    /// Carries no source or detail. Anything the cipher layer could
    /// report is a function of key material, and none of it belongs in
    /// an error message.
    #[error("could not decrypt payload")]
    Decryption,

    /// The decrypted bytes are not valid UTF-8, not well-formed JSON,
    /// or do not match the shape the caller asked for.
    #[error("decrypted payload is not a well-formed document")]
    Parse(#[source] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_message_carries_no_detail() {
        assert_eq!(Error::Decryption.to_string(), "could not decrypt payload");
    }

    #[test]
    fn test_parse_preserves_source() {
        use std::error::Error as StdError;

        let cause = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = Error::Parse(cause);
        assert!(err.source().is_some());
    }
}
