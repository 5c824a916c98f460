// src/config/defaults.rs
use crate::config::app::{CipherSection, Config, KeyEncoding};

pub fn default_cipher() -> CipherSection {
    CipherSection {
        encoding: KeyEncoding::Raw,
        keys: Vec::new(),
    }
}

pub fn default_config() -> Config {
    Config {
        cipher: default_cipher(),
    }
}
