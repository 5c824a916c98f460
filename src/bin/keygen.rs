// src/bin/keygen.rs
//! Key generator: prints fresh 256-bit keys for the `[cipher]` config table

use anyhow::{bail, Context, Result};
use rotating_cipher::{fingerprint, generate_key, key_representations};
use tracing::info;

const MAX_KEYS: usize = 64;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid key count {arg:?}"))?,
        None => 1,
    };
    if count == 0 || count > MAX_KEYS {
        bail!("key count must be between 1 and {MAX_KEYS}");
    }

    info!(count, "generating keys");
    println!("# use with `encoding = \"hex\"` or `encoding = \"base64\"` in [cipher]");
    for n in 0..count {
        let key = generate_key();
        let repr = key_representations(&key);
        println!("[{n}] fingerprint      {}", fingerprint(&key));
        println!("    hex              {}", repr.hex);
        println!("    base64           {}", repr.base64);
        println!("    base64url_no_pad {}", repr.base64url_no_pad);
    }

    Ok(())
}
