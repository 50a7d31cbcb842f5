use crate::error::PaletteError;
use image::{io::Reader as ImageReader, RgbImage};
use std::path::{Path, PathBuf};

/// File extensions accepted as palette sources.
const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Open and decode a source image into an RGB buffer.
pub fn open_source<P>(path: P) -> Result<RgbImage, PaletteError>
where
    P: AsRef<Path>,
{
    let image = ImageReader::open(path)?
        .decode()
        .map_err(PaletteError::InvalidImage)?
        .to_rgb8();

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PaletteError::EmptyImage { width, height });
    }

    Ok(image)
}

/// List the images in a directory that can act as palette sources, sorted by file name.
pub fn source_images<P>(dir: P) -> Result<Vec<PathBuf>, PaletteError>
where
    P: AsRef<Path>,
{
    let mut sources = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let usable = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SOURCE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false);

        if usable && path.is_file() {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}
