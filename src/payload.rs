//! High-level payload operations
//!
//! This module composes the armor, cipher, and document layers into the
//! operations callers actually use: armored ciphertext in, parsed JSON
//! document out, and the reverse for producing payloads.

use crate::document::{self, Document};
use crate::error::{Error, Result};
use crate::{armor, secretcrypt};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Decrypt an armored payload into a JSON document.
///
/// Decodes the base64 armoring, decrypts with AES-128-CBC under keys
/// derived by MD5 from `passphrase` and `iv_seed`, and parses the
/// plaintext as a JSON object.
///
/// Pure and deterministic: identical inputs always yield an identical
/// document or the identical error, and nothing is returned on failure.
///
/// # Errors
///
/// - [`Error::Encoding`] if `ciphertext_b64` is not valid base64
/// - [`Error::Decryption`] if the cipher bytes do not decrypt cleanly
/// - [`Error::Parse`] if the plaintext is not a well-formed JSON object
pub fn decrypt(ciphertext_b64: &str, passphrase: &str, iv_seed: &str) -> Result<Document> {
    let ciphertext = armor::decode(ciphertext_b64)?;
    let plaintext = secretcrypt::decrypt(passphrase, iv_seed, &ciphertext)?;
    document::parse(&plaintext)
}

/// Decrypt an armored payload into a caller-provided type.
///
/// Same pipeline as [`decrypt`], but the plaintext is deserialized
/// directly into `T`. Shape mismatches surface as [`Error::Parse`].
pub fn decrypt_into<T: DeserializeOwned>(
    ciphertext_b64: &str,
    passphrase: &str,
    iv_seed: &str,
) -> Result<T> {
    let ciphertext = armor::decode(ciphertext_b64)?;
    let plaintext = secretcrypt::decrypt(passphrase, iv_seed, &ciphertext)?;
    document::parse_into(&plaintext)
}

/// Encrypt a serializable value into an armored payload.
///
/// Inverse of [`decrypt`]: serializes `value` to JSON, encrypts it
/// under the same derived key/IV scheme, and base64-armors the cipher
/// bytes. Deterministic, so encrypting the same value twice yields the
/// same armored string.
pub fn encrypt<T: Serialize>(value: &T, passphrase: &str, iv_seed: &str) -> Result<String> {
    let plaintext = serde_json::to_vec(value).map_err(Error::Parse)?;
    let ciphertext = secretcrypt::encrypt(passphrase, iv_seed, &plaintext);
    Ok(armor::encode(&ciphertext))
}
