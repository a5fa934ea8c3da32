use super::BitsPerChannel;
use crate::error::Error;

/// Cursor reassembling a byte stream from the low bits of consecutive channels
pub struct ChannelDecoder<'a> {
    channels: &'a [u8],
    bits_per_channel: BitsPerChannel,
    /// index of the next channel to be read
    current_channel_index: usize,
}

impl<'a> ChannelDecoder<'a> {
    pub fn new(channels: &'a [u8], bits_per_channel: BitsPerChannel) -> Self {
        Self {
            channels,
            bits_per_channel,
            current_channel_index: 0,
        }
    }

    pub fn read(&mut self, length: usize) -> crate::Result<Vec<u8>> {
        self.check_remaining_bytes(length)?;
        let mut destination = vec![0; length];
        self.read_into(&mut destination)?;
        Ok(destination)
    }

    /// fill destination with the next bytes, lowest bit group of every byte first
    ///
    /// Fails if the channels behind the cursor cannot complete the whole
    /// destination. The cursor is left where it was and the content of
    /// destination is unspecified in that case.
    pub fn read_into(&mut self, destination: &mut [u8]) -> crate::Result<()> {
        self.check_remaining_bytes(destination.len())?;

        log::debug!(
            "Reading {} bytes starting at channel {}",
            destination.len(),
            self.current_channel_index
        );
        let mask = self.bits_per_channel.mask();
        let width = self.bits_per_channel.bits();
        for byte in destination.iter_mut() {
            *byte = 0;
            let mut bits_read_from_byte = 0;
            while bits_read_from_byte < 8 {
                let group = self.channels[self.current_channel_index] & mask;
                *byte |= group << bits_read_from_byte;
                self.current_channel_index += 1;
                bits_read_from_byte += width;
            }
        }
        Ok(())
    }

    fn check_remaining_bytes(&self, requested_bytes: usize) -> crate::Result<()> {
        let channels_per_byte = self.bits_per_channel.channels_per_byte();
        let remaining_channels = self.channels.len() - self.current_channel_index;
        if requested_bytes > remaining_channels / channels_per_byte {
            return Err(Error::BufferExhausted {
                requested_bytes,
                available_bits: self.remaining_bits(),
            });
        }
        Ok(())
    }

    /// index of the next channel to be read
    pub fn position(&self) -> usize {
        self.current_channel_index
    }

    pub fn remaining_bits(&self) -> usize {
        self.bits_per_channel
            .capacity_in_bits(self.channels.len() - self.current_channel_index)
    }
}
