use crate::{error::PaletteError, Palette, DEFAULT_PALETTE_NAME, PALETTE_LEN};
use image::{imageops, imageops::FilterType, Rgb, RgbImage};
use std::path::Path;

impl Palette {
    /// Rasterize the palette into its exact strip, one pixel per swatch along the x axis.
    pub fn to_strip(&self) -> RgbImage {
        let mut strip = RgbImage::new(PALETTE_LEN as u32, 1);

        for (x, swatch) in self.swatches().iter().enumerate() {
            let (r, g, b) = swatch.rgb();
            strip.put_pixel(x as u32, 0, Rgb([r, g, b]));
        }

        strip
    }

    /// Upscale the strip to a displayable size. Nearest-neighbor keeps the color blocks
    /// hard-edged: every output pixel is one of the palette colors, never a blend.
    pub fn render(&self, width: u32, height: u32) -> RgbImage {
        imageops::resize(&self.to_strip(), width, height, FilterType::Nearest)
    }

    /// Render the palette at the given size and write it to `path`. The image format follows the
    /// path's extension.
    pub fn write_to<P>(&self, path: P, width: u32, height: u32) -> Result<(), PaletteError>
    where
        P: AsRef<Path>,
    {
        self.render(width, height)
            .save(path)
            .map_err(PaletteError::OutputWrite)
    }
}

/// An aspect-preserving preview of a source image, its longer edge scaled to `max_size` with a
/// smooth filter. Presentation only, it has no part in sampling.
pub fn preview(image: &RgbImage, max_size: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let scale = max_size as f32 / width.max(height) as f32;

    let new_width = ((width as f32 * scale) as u32).max(1);
    let new_height = ((height as f32 * scale) as u32).max(1);

    imageops::resize(image, new_width, new_height, FilterType::Lanczos3)
}

/// Resolve the file name for a generated palette: an empty base name falls back to the default,
/// any other base gets the png extension appended as-is.
pub fn output_file_name(base: &str) -> String {
    if base.is_empty() {
        format!("{}.png", DEFAULT_PALETTE_NAME)
    } else {
        format!("{}.png", base)
    }
}
