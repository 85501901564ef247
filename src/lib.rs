//! cipherdoc - decrypts base64-armored AES-CBC payloads into JSON documents
//!
//! The wire format is fixed by the producing system: the AES-128 key is
//! MD5 of a shared passphrase, the IV is MD5 of a per-payload seed
//! string, the cipher is AES-128-CBC with PKCS#7 padding, and the
//! plaintext is a JSON object. This crate implements that transform and
//! its inverse as pure, deterministic, single-shot functions.
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"user": "john", "verified": true});
//! let armored = cipherdoc::encrypt(&doc, "passphrase", "per-payload-seed")?;
//! let decrypted = cipherdoc::decrypt(&armored, "passphrase", "per-payload-seed")?;
//! assert_eq!(decrypted["user"], "john");
//! # Ok::<(), cipherdoc::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod armor;
pub mod document;
pub mod error;
pub mod payload;
pub mod secretcrypt;

pub use document::{Document, redact};
pub use error::{Error, Result};
pub use payload::{decrypt, decrypt_into, encrypt};
