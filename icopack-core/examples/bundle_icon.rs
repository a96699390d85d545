use icopack::{BundleOpts, DEFAULT_SIZES, PngCodec, SourceImage, bundle_icon_to_path};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Checkerboard test card so every frame has visible structure.
    let mut img = image::RgbaImage::new(192, 128);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let on = ((x / 16) + (y / 16)) % 2 == 0;
        *px = if on {
            image::Rgba([230, 90, 40, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        };
    }
    let source = SourceImage::new(img)?;

    let out_path = std::path::Path::new("target").join("bundle_icon.ico");
    bundle_icon_to_path(
        &source,
        &DEFAULT_SIZES,
        &PngCodec,
        &BundleOpts::default(),
        &out_path,
    )?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
