use crate::PALETTE_LEN;
use image::{Rgb, RgbImage};

/// A color channel of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// The channel holding the pixel's maximum component. Ties resolve to the earlier channel in
    /// red, green, blue order, so a pixel with equal red and green maxima counts as red-dominant.
    pub fn dominant(pixel: Rgb<u8>) -> Channel {
        let Rgb([r, g, b]) = pixel;

        if r >= g && r >= b {
            Channel::Red
        } else if g >= b {
            Channel::Green
        } else {
            Channel::Blue
        }
    }
}

/// One entry of a palette's channel ranking: a surviving dominant channel and how many of the
/// thumbnail pixels it claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelRank {
    channel: Channel,
    population: u32,
}

impl ChannelRank {
    pub(crate) fn new(channel: Channel, population: u32) -> ChannelRank {
        Self { channel, population }
    }

    pub fn channel(self) -> Channel {
        self.channel
    }

    pub fn population(self) -> u32 {
        self.population
    }
}

/// The thumbnail pixels sharing the same dominant channel, in scan order.
pub(crate) struct Bucket {
    pub channel: Channel,
    pub pixels: Vec<Rgb<u8>>,
}

impl Bucket {
    fn new(channel: Channel) -> Bucket {
        Self {
            channel,
            pixels: Vec::new(),
        }
    }

    pub fn population(&self) -> u32 {
        self.pixels.len() as u32
    }
}

/// Partition an image's pixels into the three channel buckets.
pub(crate) fn bucket_pixels(image: &RgbImage) -> [Bucket; 3] {
    let mut buckets = [
        Bucket::new(Channel::Red),
        Bucket::new(Channel::Green),
        Bucket::new(Channel::Blue),
    ];

    for pixel in image.pixels() {
        let bucket = match Channel::dominant(*pixel) {
            Channel::Red => &mut buckets[0],
            Channel::Green => &mut buckets[1],
            Channel::Blue => &mut buckets[2],
        };

        bucket.pixels.push(*pixel);
    }

    buckets
}

/// Order the buckets by descending population and drop the empty ones. The sort is stable, so
/// buckets with equal populations keep their red, green, blue order.
pub(crate) fn rank(buckets: [Bucket; 3]) -> Vec<Bucket> {
    let mut ranking = buckets
        .into_iter()
        .filter(|bucket| !bucket.pixels.is_empty())
        .collect::<Vec<_>>();

    ranking.sort_by(|lhs, rhs| rhs.population().cmp(&lhs.population()));
    ranking
}

/// How many colors each ranked bucket contributes, keyed by how many buckets survived ranking.
/// The counts always sum to [`PALETTE_LEN`].
pub(crate) fn allocation(survivors: usize) -> &'static [usize] {
    match survivors {
        1 => &[PALETTE_LEN],
        2 => &[3, 3],
        3 => &[3, 2, 1],
        _ => unreachable!("a non-empty thumbnail fills between one and three buckets"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dominant_picks_the_maximum_component() {
        assert_eq!(Channel::dominant(Rgb([200, 100, 50])), Channel::Red);
        assert_eq!(Channel::dominant(Rgb([10, 250, 50])), Channel::Green);
        assert_eq!(Channel::dominant(Rgb([10, 50, 250])), Channel::Blue);
    }

    #[test]
    fn dominant_ties_resolve_in_channel_order() {
        // equal red and green maxima count as red
        assert_eq!(Channel::dominant(Rgb([200, 200, 50])), Channel::Red);
        // equal green and blue maxima count as green
        assert_eq!(Channel::dominant(Rgb([10, 50, 50])), Channel::Green);
        // a gray pixel counts as red
        assert_eq!(Channel::dominant(Rgb([128, 128, 128])), Channel::Red);
    }

    #[test]
    fn buckets_cover_every_pixel() {
        let image = RgbImage::from_fn(8, 8, |x, _| match x % 3 {
            0 => Rgb([250, 10, 10]),
            1 => Rgb([10, 250, 10]),
            _ => Rgb([10, 10, 250]),
        });

        let buckets = bucket_pixels(&image);
        let total: u32 = buckets.iter().map(Bucket::population).sum();

        assert_eq!(total, 64);
        assert_eq!(buckets[0].channel, Channel::Red);
        assert_eq!(buckets[0].population(), 24);
        assert_eq!(buckets[1].population(), 24);
        assert_eq!(buckets[2].population(), 16);
    }

    #[test]
    fn ranking_is_descending_and_drops_empty_buckets() {
        // 16 red-dominant pixels vs 48 green-dominant, no blue-dominant ones
        let image = RgbImage::from_fn(8, 8, |x, _| {
            if x < 2 {
                Rgb([250, 10, 10])
            } else {
                Rgb([10, 250, 10])
            }
        });

        let ranking = rank(bucket_pixels(&image));

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].channel, Channel::Green);
        assert_eq!(ranking[0].population(), 48);
        assert_eq!(ranking[1].channel, Channel::Red);
        assert_eq!(ranking[1].population(), 16);
    }

    #[test]
    fn ranking_population_ties_keep_channel_order() {
        let image = RgbImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Rgb([10, 10, 250])
            } else {
                Rgb([10, 250, 10])
            }
        });

        let ranking = rank(bucket_pixels(&image));

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].channel, Channel::Green);
        assert_eq!(ranking[1].channel, Channel::Blue);
    }

    #[test]
    fn allocation_always_sums_to_the_palette_length() {
        for survivors in 1..=3 {
            let counts = allocation(survivors);

            assert_eq!(counts.len(), survivors);
            assert_eq!(counts.iter().sum::<usize>(), PALETTE_LEN);
        }
    }

    #[test]
    fn allocation_is_strictly_descending_for_three_buckets() {
        assert_eq!(allocation(1), &[6]);
        assert_eq!(allocation(2), &[3, 3]);
        assert_eq!(allocation(3), &[3, 2, 1]);
    }
}
