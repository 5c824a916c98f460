// src/consts.rs
//! Shared constants: cipher parameters and environment names

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// AES-GCM standard nonce length in bytes (96 bit)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Env var naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "RC_CONFIG";

/// Env var overriding the configured key list (comma-separated)
pub const KEYS_ENV: &str = "RC_KEYS";

/// Config file used when `RC_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "rotating-cipher.toml";

/// BLAKE3 derive_key context for key fingerprints
pub const FINGERPRINT_CONTEXT: &str = "rotating-cipher 2026-10 key fingerprint v1";

/// Number of fingerprint bytes rendered as hex
pub const FINGERPRINT_LEN: usize = 8;
