//! Container parsing: locating the loader segment in a program image.
//!
//! Atari 8-bit executables are sequences of segments, each introduced by
//! a two-byte sync marker and a pair of little-endian start/stop
//! addresses. Only two shapes matter here: an optional 64-byte metadata
//! segment loaded at address 0x0000, and the loader segment itself,
//! which must sit at address 0x0200. Anything after the loader segment
//! is carried through unmodified.

use crate::error::{Error, Result};

/// Two-byte marker introducing a segment header.
pub const SYNC_MARKER: [u8; 2] = [0xFF, 0xFF];

/// Fixed load address required of the loader segment.
pub const LOADER_ADDRESS: u16 = 0x0200;

/// Load address of the optional metadata segment.
const METADATA_ADDRESS: u16 = 0x0000;

/// Size of the metadata segment in bytes.
pub const METADATA_LEN: usize = 64;

/// Bytes in one start/stop address pair.
const SEGMENT_HEADER_LEN: usize = 4;

/// Smallest buffer that can hold a sync marker, an address pair and one
/// payload byte. Anything shorter is treated as a raw loader.
const MIN_CONTAINER_LEN: usize = 7;

/// One contiguous addressed region of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SegmentHeader {
    start: u16,
    stop: u16,
}

impl SegmentHeader {
    /// Inclusive segment length in bytes. Wraps like the 16-bit address
    /// arithmetic of the source platform.
    fn len(&self) -> usize {
        usize::from(self.stop.wrapping_sub(self.start).wrapping_add(1))
    }
}

/// Outcome of container classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedImage {
    /// Optional cartridge layout block, copied verbatim into the output.
    pub metadata: Option<[u8; METADATA_LEN]>,
    /// Loader plaintext to be encoded.
    pub loader: Vec<u8>,
    /// Payload following the loader segment, copied unmodified.
    pub trailing: Vec<u8>,
}

/// Classify an input image and split it into metadata, loader and
/// trailing payload.
///
/// Buffers without the sync marker are taken whole as the loader (raw
/// fallback). Once the marker has matched, structural problems are
/// reported as [`Error::Format`] rather than silently truncated. The
/// 250-byte loader limit is not checked here; it belongs to the encoder.
pub fn parse(input: &[u8]) -> Result<ParsedImage> {
    if input.len() < MIN_CONTAINER_LEN || input[..2] != SYNC_MARKER {
        return Ok(ParsedImage {
            metadata: None,
            loader: input.to_vec(),
            trailing: Vec::new(),
        });
    }

    let mut pos = SYNC_MARKER.len();
    let mut header = read_segment_header(input, pos)?;
    pos += SEGMENT_HEADER_LEN;

    let mut metadata = None;
    if header.start == METADATA_ADDRESS && header.len() == METADATA_LEN {
        let block = input
            .get(pos..pos + METADATA_LEN)
            .ok_or_else(|| Error::Format("truncated metadata segment".into()))?;
        let mut copy = [0u8; METADATA_LEN];
        copy.copy_from_slice(block);
        metadata = Some(copy);
        pos += METADATA_LEN;

        // A second sync marker may introduce the loader segment.
        if input.get(pos..pos + 2) == Some(SYNC_MARKER.as_slice()) {
            pos += 2;
        }
        header = read_segment_header(input, pos)?;
        pos += SEGMENT_HEADER_LEN;
    }

    if header.start != LOADER_ADDRESS {
        return Err(Error::Format(format!(
            "loader segment starts at {:#06x}, expected {:#06x}",
            header.start, LOADER_ADDRESS
        )));
    }

    let size = header.len();
    let loader = input.get(pos..pos + size).ok_or_else(|| {
        Error::Format(format!(
            "loader segment claims {size} bytes, container holds {}",
            input.len() - pos
        ))
    })?;

    Ok(ParsedImage {
        metadata,
        loader: loader.to_vec(),
        trailing: input[pos + size..].to_vec(),
    })
}

/// Decode a start/stop address pair at `offset`.
fn read_segment_header(buf: &[u8], offset: usize) -> Result<SegmentHeader> {
    match (read_u16_le(buf, offset), read_u16_le(buf, offset + 2)) {
        (Some(start), Some(stop)) => Ok(SegmentHeader { start, stop }),
        _ => Err(Error::Format("truncated segment header".into())),
    }
}

/// Decode a little-endian u16 at `offset`, independent of host byte
/// order.
fn read_u16_le(buf: &[u8], offset: usize) -> Option<u16> {
    let bytes = buf.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}
