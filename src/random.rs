// src/random.rs
//! Secure randomness source
//!
//! Nonces and keys come from a [`RandomSource`]. The default, [`OsRandom`],
//! reads the operating system CSPRNG and reports failure instead of falling
//! back to anything weaker.

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::RandomError;

/// `read_random(n)`: fill `dest` completely with secret, uniform bytes or fail.
pub trait RandomSource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError>;
}

/// Operating system CSPRNG (`getrandom` under the hood)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RandomError(e.to_string()))
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill(dest)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill(dest)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill(dest)
    }
}
