//! A library to sample a small color palette from an image.
//!
//! The palette is built from a coarse 8x8 thumbnail of the source image: every thumbnail pixel is
//! classified by its dominant color channel, the channels are ranked by how many pixels they
//! claim, and six colors are then drawn at random from the surviving channels in proportion to
//! their rank. The result is an ordered six-color palette, which can be rasterized into a
//! hard-edged strip image for display.
//!
//! ```no_run
//! use dominance::Palette;
//!
//! let image = dominance::open_source("photo.jpg")?;
//! let palette = Palette::from_image(image).seed(42).generate()?;
//!
//! println!("{}", palette);
//! palette.write_to("my_palette.png", 450, 100)?;
//! # Ok::<(), dominance::PaletteError>(())
//! ```

mod bucket;
mod error;
mod render;
mod sampler;
mod source;
mod swatch;

/// Number of colors in a generated palette.
pub const PALETTE_LEN: usize = 6;
/// Edge length of the thumbnail the palette is sampled from.
pub const SAMPLE_SIZE: u32 = 8;
/// Default width of a rendered palette image.
pub const DEFAULT_RENDER_WIDTH: u32 = 450;
/// Default height of a rendered palette image.
pub const DEFAULT_RENDER_HEIGHT: u32 = 100;
/// Default longest edge of a source preview.
pub const DEFAULT_PREVIEW_SIZE: u32 = 256;
/// Base file name used when the caller does not supply one.
pub const DEFAULT_PALETTE_NAME: &str = "my_palette";

pub use crate::{
    bucket::{Channel, ChannelRank},
    error::PaletteError,
    render::{output_file_name, preview},
    source::{open_source, source_images},
    swatch::Swatch,
};
pub use image;

use image::RgbImage;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

/// An ordered six-color palette sampled from an image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
    ranking: Vec<ChannelRank>,
}

pub struct PaletteBuilder {
    image: RgbImage,
    seed: Option<u64>,
}

impl Palette {
    /// Start building a palette from a decoded source image.
    pub fn from_image(image: RgbImage) -> PaletteBuilder {
        PaletteBuilder::from_image(image)
    }

    /// The sampled colors, in draw order: colors drawn from a higher-ranked channel come first.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The surviving dominant channels in descending population order. For any non-empty source
    /// this holds between one and three entries, and it is deterministic for a given image: only
    /// the drawn colors vary between generations.
    pub fn ranking(&self) -> &[ChannelRank] {
        &self.ranking
    }

    /// How many colors each ranked channel contributed, in ranking order.
    pub fn allocation(&self) -> &'static [usize] {
        bucket::allocation(self.ranking.len())
    }

    pub(crate) fn new(swatches: Vec<Swatch>, ranking: Vec<ChannelRank>) -> Palette {
        Self { swatches, ranking }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (i, swatch) in self.swatches.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", swatch)?;
        }

        write!(f, "]")
    }
}

impl PaletteBuilder {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image, seed: None }
    }

    /// Fix the seed of the random color draws, making repeated generation reproducible.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Sample the palette. Without a fixed seed the draws come from the thread-local generator.
    pub fn generate(self) -> Result<Palette, PaletteError> {
        match self.seed {
            Some(seed) => sampler::sample(&self.image, &mut StdRng::seed_from_u64(seed)),
            None => sampler::sample(&self.image, &mut rand::thread_rng()),
        }
    }

    /// Sample the palette, drawing from a caller-supplied random source.
    pub fn generate_with<R>(self, rng: &mut R) -> Result<Palette, PaletteError>
    where
        R: Rng,
    {
        sampler::sample(&self.image, rng)
    }
}
