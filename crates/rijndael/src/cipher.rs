//! Single-block encryption and decryption over a pre-expanded schedule.

use crate::block::{self, Block};
use crate::error::{Error, Result};
use crate::key::KeySchedule;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

fn check_rounds(schedule: &KeySchedule, nr: usize) -> Result<()> {
    if schedule.rounds() != nr {
        return Err(Error::ScheduleMismatch {
            declared: nr,
            expanded: schedule.rounds(),
        });
    }
    Ok(())
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
///
/// `nr` is the round count the caller expanded the schedule for and is
/// cross-checked before any transformation work. The final round skips
/// MixColumns per the standard.
pub fn encrypt_block(plaintext: &[u8], schedule: &KeySchedule, nr: usize) -> Result<Block> {
    check_rounds(schedule, nr)?;
    let mut state = block::from_slice(plaintext)?;

    add_round_key(&mut state, schedule.round_key(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.round_key(nr));

    Ok(state)
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
///
/// Exact mirror of [`encrypt_block`]: same round-key orientation, rounds
/// walked in reverse, InvMixColumns skipped in the final round.
pub fn decrypt_block(ciphertext: &[u8], schedule: &KeySchedule, nr: usize) -> Result<Block> {
    check_rounds(schedule, nr)?;
    let mut state = block::from_slice(ciphertext)?;

    add_round_key(&mut state, schedule.round_key(nr));

    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
        inv_mix_columns(&mut state);
    }

    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule.round_key(0));

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::expand_key;
    use rand::RngCore;

    // FIPS-197 appendix B.
    const FIPS_B_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    const FIPS_B_PLAIN: [u8; 16] = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
        0x34,
    ];
    const FIPS_B_CIPHER: [u8; 16] = [
        0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a, 0x0b,
        0x32,
    ];

    // FIPS-197 appendix C: key bytes 00 01 02 .. and the shared plaintext.
    const FIPS_C_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const FIPS_C1_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];
    const FIPS_C2_CIPHER: [u8; 16] = [
        0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, 0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71,
        0x91,
    ];
    const FIPS_C3_CIPHER: [u8; 16] = [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ];

    fn counting_key(len: usize) -> Vec<u8> {
        (0..len as u8).collect()
    }

    #[test]
    fn encrypt_matches_fips_appendix_b() {
        let schedule = expand_key(&FIPS_B_KEY).unwrap();
        let ct = encrypt_block(&FIPS_B_PLAIN, &schedule, 10).unwrap();
        assert_eq!(ct, FIPS_B_CIPHER);
    }

    #[test]
    fn decrypt_matches_fips_appendix_b() {
        let schedule = expand_key(&FIPS_B_KEY).unwrap();
        let pt = decrypt_block(&FIPS_B_CIPHER, &schedule, 10).unwrap();
        assert_eq!(pt, FIPS_B_PLAIN);
    }

    #[test]
    fn encrypt_matches_fips_appendix_c_for_all_key_sizes() {
        let cases: [(usize, usize, [u8; 16]); 3] = [
            (16, 10, FIPS_C1_CIPHER),
            (24, 12, FIPS_C2_CIPHER),
            (32, 14, FIPS_C3_CIPHER),
        ];
        for (key_len, nr, expected) in cases {
            let schedule = expand_key(&counting_key(key_len)).unwrap();
            let ct = encrypt_block(&FIPS_C_PLAIN, &schedule, nr).unwrap();
            assert_eq!(ct, expected, "key length {key_len}");
            let pt = decrypt_block(&ct, &schedule, nr).unwrap();
            assert_eq!(pt, FIPS_C_PLAIN, "key length {key_len}");
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for key_len in [16usize, 24, 32] {
            for _ in 0..100 {
                let mut key_bytes = vec![0u8; key_len];
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut key_bytes);
                rng.fill_bytes(&mut block);
                let schedule = expand_key(&key_bytes).unwrap();
                let nr = schedule.rounds();
                let ct = encrypt_block(&block, &schedule, nr).unwrap();
                let pt = decrypt_block(&ct, &schedule, nr).unwrap();
                assert_eq!(pt, block);
            }
        }
    }

    #[test]
    fn short_blocks_are_rejected() {
        let schedule = expand_key(&FIPS_B_KEY).unwrap();
        assert_eq!(
            encrypt_block(&FIPS_B_PLAIN[..15], &schedule, 10),
            Err(Error::InvalidBlockLength { got: 15 })
        );
        assert_eq!(
            decrypt_block(&FIPS_B_CIPHER[..15], &schedule, 10),
            Err(Error::InvalidBlockLength { got: 15 })
        );
    }

    #[test]
    fn declared_round_count_must_match_the_schedule() {
        let schedule = expand_key(&FIPS_B_KEY).unwrap();
        assert_eq!(
            encrypt_block(&FIPS_B_PLAIN, &schedule, 12),
            Err(Error::ScheduleMismatch {
                declared: 12,
                expanded: 10,
            })
        );
        assert_eq!(
            decrypt_block(&FIPS_B_CIPHER, &schedule, 14),
            Err(Error::ScheduleMismatch {
                declared: 14,
                expanded: 10,
            })
        );
    }

    // Guards the structural asymmetry of the last round: a variant that
    // also mixes columns there must diverge from the known ciphertext.
    #[test]
    fn final_round_must_not_mix_columns() {
        let schedule = expand_key(&FIPS_B_KEY).unwrap();
        let mut state = FIPS_B_PLAIN;

        add_round_key(&mut state, schedule.round_key(0));
        for round in 1..10 {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, schedule.round_key(round));
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(10));

        assert_ne!(state, FIPS_B_CIPHER);
    }
}
