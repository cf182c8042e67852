//! Atari Lynx boot loader encryption.
//!
//! Converts an Atari 8-bit executable image into a boot loader the Lynx
//! boot ROM accepts, optionally padded into a full cartridge image. The
//! loader segment is delta-coded and encrypted with the ROM's fixed
//! RSA-style key material; everything around it is copied verbatim.
//!
//! # Architecture
//!
//! ```text
//! Image → Parse (container) → Encode (delta + modpow) → Assemble (padding)
//! ```
//!
//! # Example
//!
//! ```rust
//! use lynxenc::image::OutputKind;
//! use lynxenc::{container, encoder, image, KeySet};
//!
//! // A raw 10-byte loader, no container wrapper around it.
//! let program = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 0];
//!
//! let parsed = container::parse(&program).unwrap();
//! let loader = encoder::encode(&parsed.loader, &KeySet::lynx()).unwrap();
//! let output = image::assemble(None, &loader, &parsed.trailing, OutputKind::Loader).unwrap();
//!
//! // One index byte plus a single 64-byte cipher block.
//! assert_eq!(output.len(), 65);
//! ```

pub mod container;
pub mod encoder;
pub mod error;
pub mod image;
pub mod keys;

pub use container::ParsedImage;
pub use error::{Error, Result};
pub use image::OutputKind;
pub use keys::KeySet;
