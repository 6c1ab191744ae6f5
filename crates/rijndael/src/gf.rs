//! GF(2^8) arithmetic under the AES reduction polynomial.

/// Reduction constant for x^8 + x^4 + x^3 + x + 1.
const POLY: u8 = 0x1b;

/// Multiplies two field elements, with bit `i` of each byte read as the
/// coefficient of x^i. Total over all byte pairs.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut bit = 0;
    while bit < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= POLY;
        }
        b >>= 1;
        bit += 1;
    }
    product
}

const fn mul_table(multiplier: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[x] = mul(x as u8, multiplier);
        x += 1;
    }
    table
}

// Multiply-by-constant tables for the MixColumns matrices, built from
// `mul` at compile time and shared read-only process-wide.

/// x • 2 for every field element.
pub static MUL_2: [u8; 256] = mul_table(0x02);
/// x • 3 for every field element.
pub static MUL_3: [u8; 256] = mul_table(0x03);
/// x • 9 for every field element.
pub static MUL_9: [u8; 256] = mul_table(0x09);
/// x • 11 for every field element.
pub static MUL_11: [u8; 256] = mul_table(0x0b);
/// x • 13 for every field element.
pub static MUL_13: [u8; 256] = mul_table(0x0d);
/// x • 14 for every field element.
pub static MUL_14: [u8; 256] = mul_table(0x0e);
