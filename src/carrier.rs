use crate::error::Error;

pub mod reader;
pub mod writer;

/// color channels stored per pixel, alpha is never carried
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Decoded carrier image as one flat run of RGB channel samples
pub struct ChannelBuffer {
    width: u32,
    height: u32,
    channels: Vec<u8>,
}

impl ChannelBuffer {
    pub fn new(width: u32, height: u32, channels: Vec<u8>) -> crate::Result<Self> {
        let expected_number_of_channels = width as usize * height as usize * CHANNELS_PER_PIXEL;
        if channels.len() != expected_number_of_channels {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndChannels);
        }
        Ok(Self {
            width,
            height,
            channels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn channels(&self) -> &[u8] {
        &self.channels
    }

    pub fn channels_mut(&mut self) -> &mut [u8] {
        &mut self.channels
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<ChannelBuffer>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}
