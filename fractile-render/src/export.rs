//! PNG export with embedded metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use fractile_core::FrameConfig;

use crate::buffer::PixelBuffer;

/// Write a rendered frame as a PNG file.
///
/// The frame parameters are embedded as tEXt chunks so an exported image
/// carries enough information to reproduce itself (readable by exiftool
/// and most image viewers).
pub fn write_png(buffer: &PixelBuffer, path: &Path, config: &FrameConfig) -> crate::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Fractile".to_string())?;
    for (key, value) in metadata_pairs(config) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.pixels)?;

    debug!(
        width = buffer.width,
        height = buffer.height,
        path = %path.display(),
        "exported png"
    );
    Ok(())
}

fn metadata_pairs(config: &FrameConfig) -> Vec<(String, String)> {
    vec![
        (
            "Fractile.Origin".into(),
            format!("{} {}", config.viewport.origin.re, config.viewport.origin.im),
        ),
        (
            "Fractile.Extent".into(),
            format!("{} {}", config.viewport.width, config.viewport.height),
        ),
        (
            "Fractile.Resolution".into(),
            format!("{}x{}", config.width_px, config.height_px),
        ),
        (
            "Fractile.MaxIterations".into(),
            config.max_iterations.to_string(),
        ),
        ("Fractile.Map".into(), config.map.label().to_string()),
    ]
}
