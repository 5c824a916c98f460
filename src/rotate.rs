// src/rotate.rs
//! Key rotation on top of [`CipherManager`]
//!
//! A manager never changes its key list. Rotating means building a new
//! manager: the new key goes to index 0 and the old ones shift down.

use tracing::{debug, info};

use crate::aliases::CipherKey32;
use crate::cipher::{fixed_key, CipherManager};
use crate::error::{ConfigError, Result};
use crate::key_ops::fingerprint;
use crate::random::RandomSource;

impl<R: RandomSource + Clone> CipherManager<R> {
    /// New manager with `new_primary` in front of every current key.
    pub fn rotate(&self, new_primary: impl AsRef<[u8]>) -> Result<Self> {
        let primary = fixed_key(0, new_primary.as_ref())?;
        info!(
            primary = %fingerprint(&primary),
            retired = %self.primary_fingerprint(),
            "rotating primary key"
        );

        let keys = std::iter::once(primary)
            .chain(self.keys().iter().map(copy_key))
            .collect();
        Self::from_fixed_keys(keys, self.random().clone())
    }

    /// New manager keeping only the `max_keys` newest keys.
    pub fn retain(&self, max_keys: usize) -> Result<Self> {
        if max_keys == 0 {
            return Err(ConfigError::NoKeys.into());
        }
        let dropped = self.key_count().saturating_sub(max_keys);
        if dropped > 0 {
            debug!(dropped, "dropping oldest retired keys");
        }

        let keys = self.keys().iter().take(max_keys).map(copy_key).collect();
        Self::from_fixed_keys(keys, self.random().clone())
    }
}

impl<R: RandomSource> CipherManager<R> {
    /// Open `ciphertext` with any known key and seal it again under the primary key.
    pub fn reencrypt(&self, ciphertext: &str) -> Result<String> {
        let plaintext = self.decrypt(ciphertext)?;
        self.encrypt(&plaintext)
    }
}

fn copy_key(key: &CipherKey32) -> CipherKey32 {
    CipherKey32::new(*key.expose_secret())
}
