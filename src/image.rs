//! Image assembly: sizing and padding rules for the output file.

use crate::container::{ParsedImage, METADATA_LEN};
use crate::error::{Error, Result};
use std::path::Path;

/// Total size of a fixed cartridge image (256 KiB).
pub const FIXED_CART_LEN: usize = 256 * 1024;

/// Fill byte for unused cartridge space.
const FILL_BYTE: u8 = 0xFF;

/// Metadata byte encoding the bank size in 256-byte units.
const PAGE_SIZE_INDEX: usize = 5;

/// Bank size unit in bytes.
const PAGE_UNIT: usize = 256;

/// Output file extension selecting a cartridge image.
const CARTRIDGE_EXTENSION: &str = "lyx";

/// Requested output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Encoded loader only, no container around it.
    Loader,
    /// Cartridge image padded to exactly [`FIXED_CART_LEN`] bytes.
    FixedCartridge,
    /// Cartridge image padded to a multiple of the bank size declared
    /// by the metadata block.
    PagedCartridge,
}

impl OutputKind {
    /// Derive the output kind from the requested output path and the
    /// parsed image: a `.lyx` extension selects a cartridge image
    /// (paged when the container carried a metadata block), anything
    /// else the bare loader.
    pub fn for_output(path: &Path, parsed: &ParsedImage) -> Self {
        let cartridge = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(CARTRIDGE_EXTENSION));
        match (cartridge, parsed.metadata.is_some()) {
            (false, _) => OutputKind::Loader,
            (true, false) => OutputKind::FixedCartridge,
            (true, true) => OutputKind::PagedCartridge,
        }
    }
}

/// Concatenate metadata, encoded loader and trailing payload under the
/// sizing rules of the requested output kind.
///
/// Emission order is always metadata, loader, trailing.
pub fn assemble(
    metadata: Option<&[u8; METADATA_LEN]>,
    loader: &[u8],
    trailing: &[u8],
    kind: OutputKind,
) -> Result<Vec<u8>> {
    match kind {
        OutputKind::Loader => {
            if metadata.is_some() || !trailing.is_empty() {
                return Err(Error::Format(
                    "loader-only output cannot carry metadata or trailing payload".into(),
                ));
            }
            Ok(loader.to_vec())
        }
        OutputKind::FixedCartridge => {
            if metadata.is_some() {
                return Err(Error::Format(
                    "fixed cartridge output cannot carry a metadata block".into(),
                ));
            }
            let used = loader.len() + trailing.len();
            if used > FIXED_CART_LEN {
                return Err(Error::Format(format!(
                    "content is {used} bytes, larger than the {FIXED_CART_LEN}-byte cartridge"
                )));
            }
            let mut image = Vec::with_capacity(FIXED_CART_LEN);
            image.extend_from_slice(loader);
            image.extend_from_slice(trailing);
            image.resize(FIXED_CART_LEN, FILL_BYTE);
            Ok(image)
        }
        OutputKind::PagedCartridge => {
            let metadata = metadata.ok_or_else(|| {
                Error::Format("paged cartridge output requires a metadata block".into())
            })?;
            let page_size = usize::from(metadata[PAGE_SIZE_INDEX]) * PAGE_UNIT;
            if page_size == 0 {
                return Err(Error::Format(
                    "metadata block declares a zero bank size".into(),
                ));
            }
            let used = metadata.len() + loader.len() + trailing.len();
            let total = (used + page_size - 1) / page_size * page_size;

            let mut image = Vec::with_capacity(total);
            image.extend_from_slice(metadata);
            image.extend_from_slice(loader);
            image.extend_from_slice(trailing);
            image.resize(total, FILL_BYTE);
            Ok(image)
        }
    }
}
