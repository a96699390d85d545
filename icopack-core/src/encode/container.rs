use crate::foundation::core::FrameArtifact;
use crate::foundation::error::{IcopackError, IcopackResult};

/// Fixed container header length: reserved(2) + type(2) + count(2).
pub const CONTAINER_HEADER_LEN: usize = 6;

/// Fixed length of one directory entry.
pub const DIRECTORY_ENTRY_LEN: usize = 16;

/// Container type tag for icons (cursors would be 2; unsupported here).
const CONTAINER_TYPE_ICON: u16 = 1;
/// Directory entry constants for 32-bit RGBA frames without a palette.
const ENTRY_COLOR_COUNT: u8 = 0;
const ENTRY_PLANES: u16 = 1;
const ENTRY_BITS_PER_PIXEL: u16 = 32;

/// Directory entry fields resolved during the payload pass.
#[derive(Clone, Copy, Debug)]
struct ContainerEntry {
    encoded_width: u8,
    encoded_height: u8,
    payload_len: u32,
    payload_offset: u32,
}

/// Serialize `frames` into a complete icon container byte stream.
///
/// Frames are written in the order given; the caller is responsible for the
/// distinct, ascending-size ordering (duplicate edges are redundant but not
/// an error at this layer). The directory region is reserved up front and
/// patched once every payload offset is known, so offset arithmetic lives in
/// one place. Assembly is fully in-memory: a failing call produces no bytes.
pub fn write_container(frames: &[FrameArtifact]) -> IcopackResult<Vec<u8>> {
    if frames.is_empty() {
        return Err(IcopackError::EmptyContainer);
    }
    if frames.len() > usize::from(u16::MAX) {
        return Err(IcopackError::TooManyFrames(frames.len()));
    }
    let count = frames.len() as u16;

    let directory_len = DIRECTORY_ENTRY_LEN * frames.len();
    let payload_total: usize = frames.iter().map(|f| f.payload.len()).sum();
    let mut out = Vec::with_capacity(CONTAINER_HEADER_LEN + directory_len + payload_total);

    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&CONTAINER_TYPE_ICON.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());

    // Directory placeholder, patched below once offsets are known.
    out.resize(CONTAINER_HEADER_LEN + directory_len, 0);

    let mut entries = Vec::with_capacity(frames.len());
    for frame in frames {
        let payload_offset = u32::try_from(out.len()).map_err(|_| {
            IcopackError::size_overflow(format!("payload offset {} exceeds u32", out.len()))
        })?;
        let payload_len = u32::try_from(frame.payload.len()).map_err(|_| {
            IcopackError::size_overflow(format!(
                "payload length {} exceeds u32",
                frame.payload.len()
            ))
        })?;
        out.extend_from_slice(&frame.payload);
        entries.push(ContainerEntry {
            encoded_width: frame.size.encoded_byte(),
            encoded_height: frame.size.encoded_byte(),
            payload_len,
            payload_offset,
        });
    }

    for (idx, entry) in entries.iter().enumerate() {
        let slot_start = CONTAINER_HEADER_LEN + idx * DIRECTORY_ENTRY_LEN;
        patch_entry(&mut out[slot_start..slot_start + DIRECTORY_ENTRY_LEN], entry);
    }

    Ok(out)
}

/// Write one 16-byte directory record. All multi-byte fields little-endian.
fn patch_entry(slot: &mut [u8], entry: &ContainerEntry) {
    slot[0] = entry.encoded_width;
    slot[1] = entry.encoded_height;
    slot[2] = ENTRY_COLOR_COUNT;
    slot[3] = 0; // reserved
    slot[4..6].copy_from_slice(&ENTRY_PLANES.to_le_bytes());
    slot[6..8].copy_from_slice(&ENTRY_BITS_PER_PIXEL.to_le_bytes());
    slot[8..12].copy_from_slice(&entry.payload_len.to_le_bytes());
    slot[12..16].copy_from_slice(&entry.payload_offset.to_le_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/encode/container.rs"]
mod tests;
