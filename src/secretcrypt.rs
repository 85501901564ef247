//! Encryption/decryption using MD5-derived keys + AES-128-CBC
//!
//! This module implements the cipher scheme of the producing system:
//! - MD5 over the passphrase bytes yields the 16-byte AES key
//! - MD5 over the IV seed string yields the 16-byte IV
//! - AES-128 in CBC mode with PKCS#7 padding over the payload
//!
//! MD5 as a key derivation step is a fixed compatibility constraint of
//! the wire format, not a recommendation. Derived key material lives
//! only for the duration of one call and is zeroized on drop.

use crate::error::{Error, Result};
use aes::Aes128;
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use zeroize::Zeroizing;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// AES block length in bytes; also the length of the derived key and IV.
pub const BLOCK_LEN: usize = 16;

/// Derive 16 bytes of key or IV material by digesting a seed string.
fn derive(seed: &str) -> Zeroizing<[u8; BLOCK_LEN]> {
    Zeroizing::new(Md5::digest(seed.as_bytes()).into())
}

/// Encrypt plaintext under keys derived from the passphrase and IV seed.
///
/// The scheme is fully deterministic: identical inputs always produce
/// identical cipher bytes. Output length is the plaintext length rounded
/// up to the next whole block (a full padding block when already aligned).
pub fn encrypt(passphrase: &str, iv_seed: &str, plaintext: &[u8]) -> Vec<u8> {
    let key = derive(passphrase);
    let iv = derive(iv_seed);
    Aes128CbcEnc::new((&*key).into(), (&*iv).into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt cipher bytes under keys derived from the passphrase and IV seed.
///
/// Fails with [`Error::Decryption`] when the input is empty, is not a
/// whole number of blocks, or unpads to invalid padding. A wrong
/// passphrase, a wrong IV seed, and corrupted cipher bytes all surface
/// identically; CBC carries no authenticator that could tell them apart.
pub fn decrypt(passphrase: &str, iv_seed: &str, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(Error::Decryption);
    }

    let key = derive(passphrase);
    let iv = derive(iv_seed);

    let mut buf = ciphertext.to_vec();
    let plaintext = Aes128CbcDec::new((&*key).into(), (&*iv).into())
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| Error::Decryption)?;

    Ok(plaintext.to_vec())
}
