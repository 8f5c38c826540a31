use super::Framebuffer;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

/// Binary PPM: `P6`, `width height`, `255`, then raw RGB triples row by row.
pub fn encode_ppm<W: Write>(framebuffer: &Framebuffer, mut writer: W) -> std::io::Result<()> {
    write!(
        writer,
        "P6\n{} {}\n255\n",
        framebuffer.width, framebuffer.height
    )?;
    for pixel in &framebuffer.buffer {
        writer.write_all(pixel)?;
    }
    writer.flush()
}

pub fn write_ppm<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    encode_ppm(framebuffer, &mut writer)
        .with_context(|| format!("failed to write image to {}", path.display()))?;
    info!(
        "wrote {}x{} ppm to {}",
        framebuffer.width,
        framebuffer.height,
        path.display()
    );
    Ok(())
}

#[cfg(feature = "png_output")]
pub fn write_png<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let bytes: Vec<u8> = framebuffer.buffer.iter().flatten().copied().collect();
    let img: image::RgbImage =
        image::ImageBuffer::from_raw(framebuffer.width as u32, framebuffer.height as u32, bytes)
            .context("framebuffer size does not match its resolution")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write png to {}", path.display()))?;
    info!("wrote png to {}", path.display());
    Ok(())
}
