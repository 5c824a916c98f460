// src/key_ops.rs
//! Key generation and representation utilities
//!
//! This module handles secure key generation, multiple text
//! representations (hex, base64, ...) for exporting a new key, and
//! one-way fingerprints that are safe to log.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::aliases::CipherKey32;
use crate::consts::{FINGERPRINT_CONTEXT, FINGERPRINT_LEN, KEY_LEN};
use crate::random::{OsRandom, RandomSource};

pub type Key = CipherKey32;

/// Generate a new random 256-bit key from the OS CSPRNG
///
/// # Panics
///
/// Panics if the randomness source fails. There is no safe fallback for
/// key material.
#[inline]
pub fn generate_key() -> Key {
    generate_key_with(&OsRandom)
}

/// Generate a new random 256-bit key from `source`
///
/// # Panics
///
/// Panics if `source` cannot supply [`KEY_LEN`] bytes.
pub fn generate_key_with<R: RandomSource + ?Sized>(source: &R) -> Key {
    let mut bytes = [0u8; KEY_LEN];
    if let Err(err) = source.fill(&mut bytes) {
        tracing::error!(%err, "random source failed during key generation");
        panic!("cannot generate encryption key: random source failed: {err}");
    }
    Key::new(bytes)
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &Key) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}

/// Short one-way identifier of a key, safe to log
pub fn fingerprint(key: &Key) -> String {
    let digest = blake3::derive_key(FINGERPRINT_CONTEXT, key.expose_secret());
    hex::encode(&digest[..FINGERPRINT_LEN])
}
