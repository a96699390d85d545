use super::*;
use crate::encode::codec::PngCodec;

fn solid_source(width: u32, height: u32, rgba: [u8; 4]) -> SourceImage {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    SourceImage::new(img).unwrap()
}

fn decode_payload(frame: &FrameArtifact) -> image::RgbaImage {
    image::load_from_memory(&frame.payload).unwrap().to_rgba8()
}

fn assert_close(actual: [u8; 4], expected: [u8; 4]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            a.abs_diff(*e) <= 1,
            "pixel {actual:?} not within 1 of {expected:?}"
        );
    }
}

#[test]
fn fit_dimensions_maps_limiting_axis_to_edge() {
    assert_eq!(fit_dimensions(64, 64, 16), (16, 16));
    assert_eq!(fit_dimensions(100, 50, 32), (32, 16));
    assert_eq!(fit_dimensions(50, 100, 32), (16, 32));
    assert_eq!(fit_dimensions(64, 64, 256), (256, 256));
}

#[test]
fn fit_dimensions_clamps_extreme_ratios_to_one() {
    // 1000:1 at edge 16 rounds the short axis to 0; it must stay >= 1.
    assert_eq!(fit_dimensions(1000, 1, 16), (16, 1));
    assert_eq!(fit_dimensions(1, 1000, 16), (1, 16));
}

#[test]
fn payload_roundtrips_to_square_dimensions() {
    let source = solid_source(64, 64, [255, 0, 0, 255]);
    for edge in [1u32, 16, 24, 255, 256] {
        let frame = build_frame(&source, IconSize::new(edge).unwrap(), &PngCodec).unwrap();
        assert_eq!(frame.size.edge(), edge);
        assert_eq!(decode_payload(&frame).dimensions(), (edge, edge));
    }
}

#[test]
fn wide_sources_are_centered_with_transparent_padding() {
    let source = solid_source(64, 32, [0, 255, 0, 255]);
    let frame = build_frame(&source, IconSize::new(16).unwrap(), &PngCodec).unwrap();
    let decoded = decode_payload(&frame);

    // 64x32 fits 16x16 as 16x8 with a vertical offset of floor((16-8)/2) = 4:
    // rows 0..4 and 12..16 are padding, rows 4..12 are content.
    assert_eq!(decoded.get_pixel(8, 0).0[3], 0);
    assert_eq!(decoded.get_pixel(8, 3).0[3], 0);
    assert_eq!(decoded.get_pixel(8, 12).0[3], 0);
    assert_eq!(decoded.get_pixel(8, 15).0[3], 0);
    assert_close(decoded.get_pixel(8, 4).0, [0, 255, 0, 255]);
    assert_close(decoded.get_pixel(8, 8).0, [0, 255, 0, 255]);
    assert_close(decoded.get_pixel(8, 11).0, [0, 255, 0, 255]);
}

#[test]
fn tall_sources_are_centered_with_transparent_padding() {
    let source = solid_source(32, 64, [0, 0, 255, 255]);
    let frame = build_frame(&source, IconSize::new(16).unwrap(), &PngCodec).unwrap();
    let decoded = decode_payload(&frame);

    assert_eq!(decoded.get_pixel(0, 8).0[3], 0);
    assert_eq!(decoded.get_pixel(3, 8).0[3], 0);
    assert_eq!(decoded.get_pixel(12, 8).0[3], 0);
    assert_close(decoded.get_pixel(8, 8).0, [0, 0, 255, 255]);
}

#[test]
fn same_size_sources_pass_through_exactly() {
    let source = solid_source(32, 32, [200, 100, 50, 128]);
    let frame = build_frame(&source, IconSize::new(32).unwrap(), &PngCodec).unwrap();
    let decoded = decode_payload(&frame);
    // No resample happens, so straight-alpha values survive bit-exact.
    assert_eq!(decoded.get_pixel(16, 16).0, [200, 100, 50, 128]);
    assert_eq!(decoded.get_pixel(0, 31).0, [200, 100, 50, 128]);
}

#[test]
fn upscaling_keeps_solid_color() {
    let source = solid_source(8, 8, [255, 0, 0, 255]);
    let frame = build_frame(&source, IconSize::new(256).unwrap(), &PngCodec).unwrap();
    let decoded = decode_payload(&frame);
    assert_eq!(decoded.dimensions(), (256, 256));
    assert_close(decoded.get_pixel(128, 128).0, [255, 0, 0, 255]);
}
