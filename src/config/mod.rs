// src/config/mod.rs
//! Configuration system for rotating-cipher
//!
//! TOML file + env overrides describing the ordered key list.

pub use app::{load, load_from, CipherSection, Config, KeyEncoding};

mod app;
mod defaults;
