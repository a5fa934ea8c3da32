use super::BitsPerChannel;
use crate::error::Error;

/// Cursor writing a byte stream into the low bits of consecutive channels
pub struct ChannelEncoder<'a> {
    /// the carrier channels, modified in place
    channels: &'a mut [u8],
    bits_per_channel: BitsPerChannel,
    /// index of the next channel to be written
    current_channel_index: usize,
    /// payload bits committed by successful writes
    bits_written: usize,
    available_bits: usize,
}

impl<'a> ChannelEncoder<'a> {
    pub fn new(channels: &'a mut [u8], bits_per_channel: BitsPerChannel) -> Self {
        let available_bits = bits_per_channel.capacity_in_bits(channels.len());
        Self {
            channels,
            bits_per_channel,
            current_channel_index: 0,
            bits_written: 0,
            available_bits,
        }
    }

    /// write all bits of data, lowest bit group of every byte first
    ///
    /// Fails without touching any channel if data does not fit into the
    /// channels left behind the cursor. A failed write does not count
    /// towards the written bits, so the encoder stays usable afterwards.
    pub fn write(&mut self, data: &[u8]) -> crate::Result<()> {
        let requested_bits = data
            .len()
            .checked_mul(8)
            .and_then(|bits| bits.checked_add(self.bits_written))
            .unwrap_or(usize::MAX);
        if requested_bits > self.available_bits {
            return Err(Error::CapacityExceeded {
                requested_bits,
                available_bits: self.available_bits,
            });
        }

        log::debug!(
            "Writing {} bytes starting at channel {}",
            data.len(),
            self.current_channel_index
        );
        let mask = self.bits_per_channel.mask();
        let width = self.bits_per_channel.bits();
        for &byte in data {
            let mut remaining_value = byte;
            for _ in 0..self.bits_per_channel.channels_per_byte() {
                let group = remaining_value & mask;
                remaining_value >>= width;
                self.write_group(group, mask);
            }
        }
        self.bits_written = requested_bits;
        Ok(())
    }

    fn write_group(&mut self, group: u8, mask: u8) {
        let channel = &mut self.channels[self.current_channel_index];
        *channel = (*channel & !mask) | group;
        log::trace!(
            "channel {}: {:0width$b}",
            self.current_channel_index,
            group,
            width = self.bits_per_channel.bits() as usize
        );
        self.current_channel_index += 1;
    }

    /// index of the next channel to be written
    pub fn position(&self) -> usize {
        self.current_channel_index
    }

    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    pub fn available_bits(&self) -> usize {
        self.available_bits
    }

    pub fn remaining_bits(&self) -> usize {
        self.available_bits - self.bits_written
    }
}
