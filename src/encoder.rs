//! Block encoding: chained delta code plus modular exponentiation.
//!
//! The boot ROM decodes each block with the public exponent and undoes
//! the delta code while copying bytes to their target address. Both the
//! chunk layout (trailer byte 0x15 in the most significant position) and
//! the little-endian serialization of the cipher are fixed hardware
//! contracts.

use crate::error::{Error, Result};
use crate::keys::KeySet;
use num_bigint::BigUint;

/// Plaintext bytes consumed per cipher block.
pub const PLAIN_BLOCK_LEN: usize = 50;

/// One block plus the trailer byte, the unit fed to the exponentiation.
const CHUNK_LEN: usize = PLAIN_BLOCK_LEN + 1;

/// Trailer value the boot ROM expects in every decoded chunk.
const CHUNK_TRAILER: u8 = 0x15;

/// Maximum number of cipher blocks in one loader.
pub const MAX_BLOCKS: usize = 5;

/// Maximum loader plaintext length in bytes.
pub const MAX_LOADER_LEN: usize = PLAIN_BLOCK_LEN * MAX_BLOCKS;

/// Encode loader plaintext into the stream the boot ROM consumes.
///
/// The output carries a single block-index byte at position 0, followed
/// by one fixed-width cipher block per 50 bytes of plaintext; the last
/// block is zero padded. The index byte starts at 0 and is decremented
/// once per block after the first, telling the ROM how many further
/// blocks follow.
///
/// The delta-code accumulator threads through all blocks, padding
/// included, and must end at zero: the ROM reconstructs the loader by
/// adding deltas to the same accumulator, and a nonzero final value
/// means the image cannot be loaded correctly. Zero padding clears the
/// accumulator, so only a loader filling its final block exactly must
/// itself end with a 0x00 byte.
pub fn encode(plain: &[u8], keys: &KeySet) -> Result<Vec<u8>> {
    if plain.len() > MAX_LOADER_LEN {
        return Err(Error::SizeExceeded {
            len: plain.len(),
            max: MAX_LOADER_LEN,
        });
    }

    let mut result = vec![0u8];
    let mut accumulator = 0u8;

    for (index, block) in plain.chunks(PLAIN_BLOCK_LEN).enumerate() {
        if index > 0 {
            result[0] = result[0].wrapping_sub(1);
        }

        let mut padded = [0u8; PLAIN_BLOCK_LEN];
        padded[..block.len()].copy_from_slice(block);
        encode_block(&padded, &mut accumulator, keys, &mut result);
    }

    if accumulator != 0 {
        return Err(Error::Integrity { accumulator });
    }

    Ok(result)
}

/// Delta-code one block, exponentiate it and append the cipher bytes.
fn encode_block(
    block: &[u8; PLAIN_BLOCK_LEN],
    accumulator: &mut u8,
    keys: &KeySet,
    out: &mut Vec<u8>,
) {
    let mut chunk = [0u8; CHUNK_LEN];
    chunk[CHUNK_LEN - 1] = CHUNK_TRAILER;

    for (delta, &byte) in chunk.iter_mut().zip(block) {
        *delta = byte.wrapping_sub(*accumulator);
        *accumulator = byte;
    }

    // Chunk bytes are least-significant first, so the trailer occupies
    // the most significant position.
    let plain = BigUint::from_bytes_le(&chunk);
    let cipher = plain.modpow(&keys.private_exponent, &keys.modulus);

    let mut bytes = cipher.to_bytes_le();
    bytes.resize(keys.cipher_len, 0);
    out.extend_from_slice(&bytes);
}
