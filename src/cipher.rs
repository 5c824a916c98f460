// src/cipher.rs
//! Cipher manager: AES-256-GCM over an ordered, rotating key list
//!
//! New data is always sealed with the primary key (index 0). Retired keys
//! (index 1..) are kept only so older ciphertexts still open. Nothing in the
//! stored string says which key was used; decryption tries them in order.
//!
//! # Ciphertext format
//!
//! ```text
//! base64url-padded( nonce[12] || ciphertext || tag[16] )
//! ```

use std::fmt;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use tracing::{debug, trace};

use crate::aliases::CipherKey32;
use crate::consts::{KEY_LEN, NONCE_LEN};
use crate::error::{ConfigError, CryptoError, FormatError, Result};
use crate::key_ops::fingerprint;
use crate::random::{OsRandom, RandomSource};

/// Encrypts with the primary key, decrypts with any key in the list.
///
/// Immutable after construction; share it behind an `Arc` for concurrent use.
pub struct CipherManager<R: RandomSource = OsRandom> {
    keys: Vec<CipherKey32>,
    random: R,
}

impl CipherManager<OsRandom> {
    /// Build a manager from raw 32-byte keys, primary first.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoKeys`] for an empty list,
    /// [`ConfigError::KeyLength`] for the first key that is not exactly 32 bytes.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        Self::with_random_source(keys, OsRandom)
    }
}

impl<R: RandomSource> CipherManager<R> {
    /// Same as [`CipherManager::new`] but draws nonces from `random`.
    pub fn with_random_source<I, K>(keys: I, random: R) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let keys = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| fixed_key(index, key.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::from_fixed_keys(keys, random)
    }

    pub(crate) fn from_fixed_keys(keys: Vec<CipherKey32>, random: R) -> Result<Self> {
        if keys.is_empty() {
            return Err(ConfigError::NoKeys.into());
        }

        debug!(
            keys = keys.len(),
            primary = %fingerprint(&keys[0]),
            "cipher manager ready"
        );

        Ok(Self { keys, random })
    }

    /// Seal `plaintext` under the primary key and return the text envelope.
    ///
    /// Every call draws a fresh nonce, so equal plaintexts give different output.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        let mut nonce = [0u8; NONCE_LEN];
        self.random.fill(&mut nonce).map_err(CryptoError::Random)?;

        let sealed = cipher_for(self.primary())
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| CryptoError::Encrypt)?;

        let mut envelope = Vec::with_capacity(NONCE_LEN + sealed.len());
        envelope.extend_from_slice(&nonce);
        envelope.extend_from_slice(&sealed);

        Ok(URL_SAFE.encode(envelope))
    }

    /// Open a text envelope with the first key that authenticates it.
    ///
    /// If no key works the failure of the last key tried is returned.
    pub fn decrypt(&self, ciphertext: &str) -> Result<Vec<u8>> {
        let raw = URL_SAFE.decode(ciphertext).map_err(FormatError::Base64)?;

        if raw.len() < NONCE_LEN {
            return Err(FormatError::TooShort { len: raw.len() }.into());
        }
        let (nonce, sealed) = raw.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce);

        let mut last_err = CryptoError::Decrypt;
        for (index, key) in self.keys.iter().enumerate() {
            match cipher_for(key).decrypt(nonce, sealed) {
                Ok(plaintext) => {
                    if index > 0 {
                        trace!(index, "ciphertext opened with retired key");
                    }
                    return Ok(plaintext);
                }
                Err(_) => last_err = CryptoError::Decrypt,
            }
        }

        debug!(attempted = self.keys.len(), "no key could open ciphertext");
        Err(last_err.into())
    }

    /// Number of keys, primary included.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn primary_fingerprint(&self) -> String {
        fingerprint(self.primary())
    }

    /// Fingerprints in rotation order, primary first.
    pub fn fingerprints(&self) -> Vec<String> {
        self.keys.iter().map(fingerprint).collect()
    }

    pub(crate) fn primary(&self) -> &CipherKey32 {
        &self.keys[0]
    }

    pub(crate) fn keys(&self) -> &[CipherKey32] {
        &self.keys
    }

    pub(crate) fn random(&self) -> &R {
        &self.random
    }
}

impl<R: RandomSource> fmt::Debug for CipherManager<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherManager")
            .field("keys", &self.fingerprints())
            .finish_non_exhaustive()
    }
}

/// Validate length, then copy into an owned fixed-size secret. Never pads or truncates.
pub(crate) fn fixed_key(
    index: usize,
    bytes: &[u8],
) -> std::result::Result<CipherKey32, ConfigError> {
    let arr: [u8; KEY_LEN] = bytes.try_into().map_err(|_| ConfigError::KeyLength {
        index,
        len: bytes.len(),
    })?;
    Ok(CipherKey32::new(arr))
}

fn cipher_for(key: &CipherKey32) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret().as_slice()))
}
