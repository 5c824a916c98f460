// src/lib.rs
//! rotating-cipher: AES-256-GCM field encryption with key rotation
//!
//! Features:
//! - Printable, self-contained ciphertexts (URL-safe base64 of nonce + sealed data)
//! - Ordered key list: encrypt with the primary key, decrypt with any
//! - Zeroize-on-drop key buffers via secure-gate
//! - TOML + env configuration of the key list

pub mod aliases;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod key_ops;
pub mod random;
pub mod rotate;

// Re-export everything users need at the crate root
pub use aliases::CipherKey32;
pub use cipher::CipherManager;
pub use config::load as load_config;
pub use error::{ConfigError, CoreError, CryptoError, FormatError, RandomError, Result};
pub use key_ops::{fingerprint, generate_key, key_representations, KeyRepr};
pub use random::{OsRandom, RandomSource};
