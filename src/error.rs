// src/error.rs
//! Public error type for the entire crate
//!
//! Three families, matching how callers react to them:
//! - [`ConfigError`]: bad key list at startup, never recovered
//! - [`FormatError`]: a stored ciphertext is corrupt
//! - [`CryptoError`]: randomness or authentication failure

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("crypto operation failed: {0}")]
    Crypto(#[from] CryptoError),
}

impl CoreError {
    pub fn is_config(&self) -> bool {
        matches!(self, CoreError::Config(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, CoreError::Format(_))
    }

    pub fn is_crypto(&self) -> bool {
        matches!(self, CoreError::Crypto(_))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("at least one encryption key must be provided")]
    NoKeys,

    #[error("key nr. {index} has the wrong length: is {len} but needs to be 32")]
    KeyLength { index: usize, len: usize },

    /// Only the index is reported; the offending text may be key material.
    #[error("key nr. {index} is not valid {encoding}")]
    KeyEncoding {
        index: usize,
        encoding: &'static str,
    },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("ciphertext is not valid URL-safe base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed ciphertext: {len} bytes is shorter than the 12-byte nonce")]
    TooShort { len: usize },
}

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("random source failed: {0}")]
    Random(#[from] RandomError),

    #[error("aead encryption failed")]
    Encrypt,

    /// Wrong key and tampered data are deliberately the same variant.
    #[error("aead decryption failed")]
    Decrypt,
}

/// Failure of the secure randomness source
#[derive(Error, Debug)]
#[error("{0}")]
pub struct RandomError(pub String);

impl From<RandomError> for CoreError {
    fn from(err: RandomError) -> Self {
        CoreError::Crypto(CryptoError::Random(err))
    }
}
