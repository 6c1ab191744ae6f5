//! Block representation helpers.

use crate::error::{Error, Result};

/// AES block of 16 bytes.
///
/// Doubles as the cipher state: input byte `i` sits at row `i % 4`,
/// column `i / 4` of the 4×4 state matrix, so linear index `row + 4 * col`
/// addresses the matrix and serialization back to bytes is the identity.
pub type Block = [u8; 16];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a caller-supplied slice into a fresh block, rejecting any
/// length other than 16.
pub fn from_slice(bytes: &[u8]) -> Result<Block> {
    if bytes.len() != 16 {
        return Err(Error::InvalidBlockLength { got: bytes.len() });
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(bytes);
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_rejects_short_and_long_inputs() {
        assert_eq!(
            from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockLength { got: 15 })
        );
        assert_eq!(
            from_slice(&[0u8; 17]),
            Err(Error::InvalidBlockLength { got: 17 })
        );
        assert_eq!(from_slice(&[7u8; 16]), Ok([7u8; 16]));
    }

    #[test]
    fn xor_is_self_inverse() {
        let mut block: Block = core::array::from_fn(|i| i as u8);
        let mask: Block = [0x5a; 16];
        let original = block;
        xor_in_place(&mut block, &mask);
        xor_in_place(&mut block, &mask);
        assert_eq!(block, original);
    }
}
