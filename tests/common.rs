// tests/common.rs
//! Shared test utilities: logging setup and fixed keys

#![allow(dead_code)] // each test binary uses a different subset

use std::sync::atomic::{AtomicU8, Ordering};

use rotating_cipher::{RandomError, RandomSource};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const K0: &str = "0123456789abcdef0123456789abcdef";
pub const K1: &str = "fedcba9876543210fedcba9876543210";
pub const K2: &str = "an-unrelated-32-byte-secret-key!";

/// Initialize test-friendly logging; respects RUST_LOG=
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent
}

/// Random source that always fails, e.g. a starved or closed entropy device
pub struct FailingRandom;

impl RandomSource for FailingRandom {
    fn fill(&self, _dest: &mut [u8]) -> Result<(), RandomError> {
        Err(RandomError("entropy source unavailable".into()))
    }
}

/// Deterministic source: yields `start, start+1, ...` (known-answer tests only)
#[derive(Default)]
pub struct CountingRandom(AtomicU8);

impl CountingRandom {
    pub fn starting_at(start: u8) -> Self {
        Self(AtomicU8::new(start))
    }
}

impl RandomSource for CountingRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        for b in dest.iter_mut() {
            *b = self.0.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }
}
