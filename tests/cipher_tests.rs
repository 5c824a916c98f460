// tests/cipher_tests.rs
use std::sync::Arc;
use std::thread;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rotating_cipher::consts::NONCE_LEN;
use rotating_cipher::{CipherManager, ConfigError, CoreError, CryptoError, FormatError};

mod common;
use common::{setup, FailingRandom, K0, K1, K2};

#[test]
fn test_roundtrip_various_plaintexts() {
    setup();
    let manager = CipherManager::new([K0, K1]).unwrap();
    let big = vec![0xA5u8; 64 * 1024];
    let plaintexts: [&[u8]; 5] = [b"", b"x", b"{\"keys\":[]}", &[0u8, 255, 0, 1], &big];

    for plaintext in plaintexts {
        let ciphertext = manager.encrypt(plaintext).unwrap();
        assert_eq!(manager.decrypt(&ciphertext).unwrap(), plaintext);
    }
}

#[test]
fn test_encrypt_is_not_deterministic() {
    setup();
    let manager = CipherManager::new([K0]).unwrap();
    let a = manager.encrypt(b"same plaintext").unwrap();
    let b = manager.encrypt(b"same plaintext").unwrap();

    assert_ne!(a, b);
    assert_ne!(
        URL_SAFE.decode(&a).unwrap()[..NONCE_LEN],
        URL_SAFE.decode(&b).unwrap()[..NONCE_LEN]
    );
    assert_eq!(manager.decrypt(&a).unwrap(), b"same plaintext");
    assert_eq!(manager.decrypt(&b).unwrap(), b"same plaintext");
}

#[test]
fn test_tampering_any_sealed_byte_fails() {
    setup();
    let manager = CipherManager::new([K0, K1]).unwrap();
    let ciphertext = manager.encrypt(b"attack at dawn").unwrap();
    let raw = URL_SAFE.decode(&ciphertext).unwrap();

    for i in NONCE_LEN..raw.len() {
        let mut tampered = raw.clone();
        tampered[i] ^= 0x01;
        let err = manager.decrypt(&URL_SAFE.encode(&tampered)).unwrap_err();
        assert!(
            matches!(err, CoreError::Crypto(CryptoError::Decrypt)),
            "byte {i} flip was not rejected: {err:?}"
        );
    }
}

#[test]
fn test_invalid_base64_is_format_error() {
    let manager = CipherManager::new([K0]).unwrap();
    for input in ["not base64!!", "AAEC+/==", "abc"] {
        let err = manager.decrypt(input).unwrap_err();
        assert!(
            matches!(err, CoreError::Format(FormatError::Base64(_))),
            "{input:?} gave {err:?}"
        );
    }
}

#[test]
fn test_short_payload_is_malformed() {
    let manager = CipherManager::new([K0]).unwrap();

    let err = manager.decrypt("").unwrap_err();
    assert!(matches!(err, CoreError::Format(FormatError::TooShort { len: 0 })));

    let err = manager.decrypt(&URL_SAFE.encode([1u8; 11])).unwrap_err();
    assert!(err.is_format());
    assert!(err.to_string().contains("malformed ciphertext"));
}

#[test]
fn test_nonce_only_payload_is_crypto_error() {
    // 12 bytes is well-formed but cannot carry a tag
    let manager = CipherManager::new([K0]).unwrap();
    let err = manager.decrypt(&URL_SAFE.encode([1u8; 12])).unwrap_err();
    assert!(err.is_crypto());
}

#[test]
fn test_empty_key_list_rejected() {
    let keys: Vec<String> = Vec::new();
    let err = CipherManager::new(keys).unwrap_err();
    assert!(matches!(err, CoreError::Config(ConfigError::NoKeys)));
}

#[test]
fn test_wrong_key_length_reports_index() {
    let short = "a".repeat(31);
    let long = "b".repeat(33);

    let err = CipherManager::new([K0, short.as_str()]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Config(ConfigError::KeyLength { index: 1, len: 31 })
    ));

    let err = CipherManager::new([long.as_str(), K0]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Config(ConfigError::KeyLength { index: 0, len: 33 })
    ));
    assert_eq!(
        err.to_string(),
        "configuration error: key nr. 0 has the wrong length: is 33 but needs to be 32"
    );
}

#[test]
fn test_key_length_counts_bytes_not_chars() {
    // 16 two-byte chars = 32 bytes
    let key = "é".repeat(16);
    assert!(CipherManager::new([key.as_str()]).is_ok());
}

#[test]
fn test_unknown_key_exhausts_list() {
    setup();
    let foreign = CipherManager::new([K2]).unwrap();
    let ciphertext = foreign.encrypt(b"not yours").unwrap();

    let manager = CipherManager::new([K0, K1]).unwrap();
    let err = manager.decrypt(&ciphertext).unwrap_err();
    assert!(matches!(err, CoreError::Crypto(CryptoError::Decrypt)));
}

#[test]
fn test_random_failure_on_encrypt_is_crypto_error() {
    let manager = CipherManager::with_random_source([K0], FailingRandom).unwrap();
    let err = manager.encrypt(b"payload").unwrap_err();
    assert!(matches!(err, CoreError::Crypto(CryptoError::Random(_))));
    assert!(err.to_string().contains("entropy source unavailable"));
}

#[test]
fn test_decrypt_does_not_need_randomness() {
    let writer = CipherManager::new([K0]).unwrap();
    let ciphertext = writer.encrypt(b"stored earlier").unwrap();

    let reader = CipherManager::with_random_source([K0], FailingRandom).unwrap();
    assert_eq!(reader.decrypt(&ciphertext).unwrap(), b"stored earlier");
}

#[test]
fn test_shared_across_threads() {
    setup();
    let manager = Arc::new(CipherManager::new([K0, K1]).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for i in 0..50 {
                    let plaintext = format!("thread {t} record {i}");
                    let ciphertext = manager.encrypt(plaintext.as_bytes()).unwrap();
                    assert_eq!(manager.decrypt(&ciphertext).unwrap(), plaintext.as_bytes());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
