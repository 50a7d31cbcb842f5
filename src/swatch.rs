use crate::bucket::Channel;
use std::fmt;

/// A single sampled palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u8,
    green: u8,
    blue: u8,
    channel: Channel,
}

impl Swatch {
    pub fn new((red, green, blue): (u8, u8, u8), channel: Channel) -> Swatch {
        Self {
            red,
            green,
            blue,
            channel,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// The dominant channel of the bucket this swatch was drawn from.
    pub fn channel(self) -> Channel {
        self.channel
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}
