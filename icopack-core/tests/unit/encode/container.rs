use super::*;
use crate::foundation::core::IconSize;

fn frame(edge: u32, payload: Vec<u8>) -> FrameArtifact {
    FrameArtifact {
        size: IconSize::new(edge).unwrap(),
        payload,
    }
}

fn entry_u32(bytes: &[u8], entry_idx: usize, field_offset: usize) -> u32 {
    let base = CONTAINER_HEADER_LEN + entry_idx * DIRECTORY_ENTRY_LEN + field_offset;
    u32::from_le_bytes(bytes[base..base + 4].try_into().unwrap())
}

#[test]
fn header_and_directory_layout_is_exact() {
    let bytes = write_container(&[frame(16, vec![0xAA; 5]), frame(32, vec![0xBB; 7])]).unwrap();

    // reserved=0, type=1, count=2, little-endian.
    assert_eq!(&bytes[0..6], &[0, 0, 1, 0, 2, 0]);

    // Entry 0: width, height, color count, reserved, planes, bpp.
    assert_eq!(&bytes[6..10], &[16, 16, 0, 0]);
    assert_eq!(&bytes[10..12], &[1, 0]);
    assert_eq!(&bytes[12..14], &[32, 0]);
    assert_eq!(entry_u32(&bytes, 0, 8), 5);
    assert_eq!(entry_u32(&bytes, 0, 12), 38);

    // Entry 1 starts right after the first 16-byte slot.
    assert_eq!(&bytes[22..26], &[32, 32, 0, 0]);
    assert_eq!(entry_u32(&bytes, 1, 8), 7);
    assert_eq!(entry_u32(&bytes, 1, 12), 43);

    // Payloads are concatenated verbatim, no padding.
    assert_eq!(&bytes[38..43], &[0xAA; 5]);
    assert_eq!(&bytes[43..50], &[0xBB; 7]);
    assert_eq!(bytes.len(), 50);
}

#[test]
fn edge_256_encodes_as_zero_in_both_axes() {
    let bytes = write_container(&[frame(256, vec![1, 2, 3])]).unwrap();
    assert_eq!(bytes[6], 0);
    assert_eq!(bytes[7], 0);

    let bytes = write_container(&[frame(255, vec![1, 2, 3])]).unwrap();
    assert_eq!(bytes[6], 255);
    assert_eq!(bytes[7], 255);
}

#[test]
fn offsets_follow_cumulative_payload_lengths() {
    let frames = vec![
        frame(16, vec![0; 10]),
        frame(24, vec![0; 20]),
        frame(32, vec![0; 30]),
    ];
    let bytes = write_container(&frames).unwrap();

    let mut expected =
        u32::try_from(CONTAINER_HEADER_LEN + DIRECTORY_ENTRY_LEN * frames.len()).unwrap();
    for (idx, f) in frames.iter().enumerate() {
        assert_eq!(entry_u32(&bytes, idx, 8), f.payload.len() as u32);
        assert_eq!(entry_u32(&bytes, idx, 12), expected);
        expected += f.payload.len() as u32;
    }
    assert_eq!(bytes.len() as u32, expected);
}

#[test]
fn empty_frame_set_is_rejected() {
    assert!(matches!(
        write_container(&[]),
        Err(IcopackError::EmptyContainer)
    ));
}

#[test]
fn refuses_more_frames_than_the_count_field_holds() {
    // Duplicate edges are legal at this layer, so 65536 tiny frames is the
    // cheapest way to cross the 16-bit count boundary.
    let frames = vec![frame(16, Vec::new()); 65_536];
    assert!(matches!(
        write_container(&frames),
        Err(IcopackError::TooManyFrames(65_536))
    ));
}

#[test]
fn exactly_u16_max_frames_is_accepted() {
    let frames = vec![frame(16, vec![0u8]); 65_535];
    let bytes = write_container(&frames).unwrap();
    assert_eq!(&bytes[4..6], &0xFFFFu16.to_le_bytes());
}
