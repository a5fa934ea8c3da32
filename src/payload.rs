//! Length-prefixed payload framing on top of the channel codec.
//!
//! A payload is stored as a 32 bit unsigned length in little endian byte
//! order, followed by the payload bytes themselves. Both parts go through
//! the same cursor, so the payload starts right behind the header.

use crate::codec::{BitsPerChannel, ChannelDecoder, ChannelEncoder};
use crate::error::Error;

pub const LENGTH_HEADER_SIZE: usize = std::mem::size_of::<u32>();

/// largest payload in bytes that fits behind the length header
pub fn capacity(channel_count: usize, bits_per_channel: BitsPerChannel) -> usize {
    (bits_per_channel.capacity_in_bits(channel_count) / 8).saturating_sub(LENGTH_HEADER_SIZE)
}

pub fn hide(
    channels: &mut [u8],
    bits_per_channel: BitsPerChannel,
    data: &[u8],
) -> crate::Result<()> {
    let length = u32::try_from(data.len()).map_err(|_| Error::PayloadTooLarge(data.len()))?;
    let mut encoder = ChannelEncoder::new(channels, bits_per_channel);
    encoder.write(&length.to_le_bytes())?;
    encoder.write(data)?;
    log::info!(
        "Hid {} bytes in {} channels, {} bits left",
        data.len(),
        encoder.position(),
        encoder.remaining_bits()
    );
    Ok(())
}

pub fn reveal(channels: &[u8], bits_per_channel: BitsPerChannel) -> crate::Result<Vec<u8>> {
    let mut decoder = ChannelDecoder::new(channels, bits_per_channel);
    let mut header = [0; LENGTH_HEADER_SIZE];
    decoder.read_into(&mut header)?;
    let length = u32::from_le_bytes(header) as usize;
    log::debug!("Length header announces {} bytes", length);
    // a carrier without hidden data yields an arbitrary header
    if length > decoder.remaining_bits() / 8 {
        return Err(Error::BufferExhausted {
            requested_bytes: length,
            available_bits: decoder.remaining_bits(),
        });
    }
    let data = decoder.read(length)?;
    log::info!("Revealed {} bytes from {} channels", data.len(), decoder.position());
    Ok(data)
}
