//! Key sizes and the expanded round-key schedule.

use crate::block::Block;
use crate::error::{Error, Result};

/// The three FIPS-197 key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key: Nk = 4, Nr = 10.
    Aes128,
    /// 192-bit key: Nk = 6, Nr = 12.
    Aes192,
    /// 256-bit key: Nk = 8, Nr = 14.
    Aes256,
}

impl KeySize {
    /// Determines the key size from a key byte count.
    ///
    /// Fails with `Error::InvalidKeyLength` for anything other than
    /// 16, 24, or 32 bytes.
    pub fn from_byte_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            got => Err(Error::InvalidKeyLength { got }),
        }
    }

    /// Key length in 32-bit words (Nk).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of transformation rounds (Nr).
    pub const fn nr(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Key length in bytes, `4 * Nk`.
    pub const fn byte_len(self) -> usize {
        4 * self.nk()
    }
}

/// Expanded round keys: one 16-byte key for the initial key addition plus
/// one per round.
///
/// Immutable after expansion, so a schedule may be shared by reference
/// across arbitrarily many concurrent block transforms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    round_keys: Vec<Block>,
    size: KeySize,
}

impl KeySchedule {
    pub(crate) fn new(round_keys: Vec<Block>, size: KeySize) -> Self {
        debug_assert_eq!(round_keys.len(), size.nr() + 1);
        Self { round_keys, size }
    }

    /// Returns the round key at the requested index (0..=Nr).
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }

    /// The key size this schedule was expanded from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Round count the schedule supports (Nr).
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// Total number of 32-bit words in the schedule, `4 * (Nr + 1)`.
    pub fn word_count(&self) -> usize {
        4 * self.round_keys.len()
    }
}
