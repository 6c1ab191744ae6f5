//! AES (Rijndael) block transform for 128-, 192-, and 256-bit keys.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for all three standard key sizes.
//! - Single-block encryption and decryption over a pre-expanded schedule.
//! - The shared constant tables (S-boxes, GF(2^8) multiply tables).
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened. Block chaining, padding, and multi-block dispatch belong to
//! callers: the schedule is immutable after expansion, so it can be shared
//! by reference across as many concurrent block transforms as needed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::Block;
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::error::{Error, Result};
pub use crate::key::{KeySchedule, KeySize};
pub use crate::schedule::expand_key;
