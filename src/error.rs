use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("could not decode source image\n{0}")]
    InvalidImage(#[source] image::ImageError),
    #[error("source image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("failed to write palette image\n{0}")]
    OutputWrite(#[source] image::ImageError),
    #[error("failed to read source location\n{0}")]
    Io(#[from] std::io::Error),
}
