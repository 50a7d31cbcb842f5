use crate::{
    bucket::{self, ChannelRank},
    error::PaletteError,
    swatch::Swatch,
    Palette, PALETTE_LEN, SAMPLE_SIZE,
};
use image::{imageops, imageops::FilterType, RgbImage};
use rand::Rng;
use tracing::debug;

/// Run the sampling pipeline over a source image: downscale, classify, rank, allocate, draw.
pub(crate) fn sample<R>(image: &RgbImage, rng: &mut R) -> Result<Palette, PaletteError>
where
    R: Rng,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PaletteError::EmptyImage { width, height });
    }

    // a deliberately coarse color summary of the source, not a faithful miniature
    let thumbnail = imageops::resize(image, SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Triangle);

    let buckets = bucket::bucket_pixels(&thumbnail);
    let ranking = bucket::rank(buckets);
    let counts = bucket::allocation(ranking.len());

    debug!(survivors = ranking.len(), ?counts, "channel ranking");

    let mut swatches = Vec::with_capacity(PALETTE_LEN);
    for (bucket, &count) in ranking.iter().zip(counts) {
        // drawn with replacement: a bucket may contribute the same pixel more than once, which
        // lets a single-color bucket fill any allocation
        for _ in 0..count {
            let pixel = bucket.pixels[rng.gen_range(0..bucket.pixels.len())];
            swatches.push(Swatch::new((pixel[0], pixel[1], pixel[2]), bucket.channel));
        }
    }

    let ranking = ranking
        .iter()
        .map(|bucket| ChannelRank::new(bucket.channel, bucket.population()))
        .collect();

    Ok(Palette::new(swatches, ranking))
}
