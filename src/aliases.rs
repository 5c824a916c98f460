// src/aliases.rs
//! Re-exports secure-gate's secret types
//!
//! These are the canonical secret buffers used throughout rotating-cipher.

use secure_gate::fixed_alias;

// Fixed-size secrets
fixed_alias!(CipherKey32, 32); // 256-bit AES-GCM key, zeroized on drop
