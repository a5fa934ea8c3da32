use clap::builder::PossibleValue;
use clap::ValueEnum;

use crate::error::Error;

mod decoder;
mod encoder;

pub use decoder::ChannelDecoder;
pub use encoder::ChannelEncoder;

/// Number of low-order bits of every channel that carry payload data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitsPerChannel {
    One,
    #[default]
    Two,
    Four,
}

impl BitsPerChannel {
    pub fn bits(&self) -> u8 {
        match self {
            BitsPerChannel::One => 1,
            BitsPerChannel::Two => 2,
            BitsPerChannel::Four => 4,
        }
    }

    /// bit pattern isolating the payload bits of a channel
    pub fn mask(&self) -> u8 {
        match self {
            BitsPerChannel::One => 0b0001,
            BitsPerChannel::Two => 0b0011,
            BitsPerChannel::Four => 0b1111,
        }
    }

    /// how many channels one payload byte is spread over
    pub fn channels_per_byte(&self) -> usize {
        8 / self.bits() as usize
    }

    pub fn capacity_in_bits(&self, channel_count: usize) -> usize {
        channel_count * self.bits() as usize
    }
}

impl TryFrom<u8> for BitsPerChannel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            _ => Err(Error::InvalidBitsPerChannel(value)),
        }
    }
}

impl ValueEnum for BitsPerChannel {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::One, Self::Two, Self::Four]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::One => Some(PossibleValue::new("1")),
            Self::Two => Some(PossibleValue::new("2")),
            Self::Four => Some(PossibleValue::new("4")),
        }
    }
}
