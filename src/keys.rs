//! Fixed key material for the Lynx boot ROM transform.

use num_bigint::BigUint;

/// Serialized width of one cipher block in bytes (512-bit key material).
pub const CIPHER_BLOCK_LEN: usize = 64;

/// Public modulus burned into the Lynx boot ROM.
const LYNX_MODULUS_HEX: &str =
    "35b5a3942806d8a22695d771b23cfd561c4a19b6a3b02600365a306e3c4d63381bd41c136489364cf2ba2a58f4fee1fdac7e79";

/// Private exponent matching the ROM's public exponent.
const LYNX_PRIVATE_EXPONENT_HEX: &str =
    "23ce6d0d7004906c19b93a4bcc28a8e412dc11246d2019557987ab5ca818a3d3c8e3276d4270cb8021d6bda4296d47b1e5e2a3";

/// Public exponent; the ROM uses it to decode, this tool only to verify.
const LYNX_PUBLIC_EXPONENT_HEX: &str = "03";

/// RSA-style key material driving the modular-exponentiation encoding.
///
/// The production set is fixed hardware configuration. Tests may build
/// sets around small moduli to keep verification fast.
#[derive(Debug, Clone)]
pub struct KeySet {
    /// Public modulus.
    pub modulus: BigUint,
    /// Private exponent applied when encoding.
    pub private_exponent: BigUint,
    /// Public exponent for the inverse (verification) direction.
    pub public_exponent: BigUint,
    /// Width of one serialized cipher block in bytes.
    pub cipher_len: usize,
}

impl KeySet {
    /// The fixed Lynx key material.
    pub fn lynx() -> Self {
        Self {
            modulus: from_hex(LYNX_MODULUS_HEX),
            private_exponent: from_hex(LYNX_PRIVATE_EXPONENT_HEX),
            public_exponent: from_hex(LYNX_PUBLIC_EXPONENT_HEX),
            cipher_len: CIPHER_BLOCK_LEN,
        }
    }
}

impl Default for KeySet {
    fn default() -> Self {
        Self::lynx()
    }
}

/// Decode a fixed hexadecimal constant into a big integer.
fn from_hex(digits: &str) -> BigUint {
    let bytes = hex::decode(digits).expect("Invalid key constant");
    BigUint::from_bytes_be(&bytes)
}
