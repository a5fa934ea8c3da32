use std::fmt::Display;

use image::ImageError;

#[derive(Debug)]
pub enum Error {
    InvalidBitsPerChannel(u8),
    CapacityExceeded {
        requested_bits: usize,
        available_bits: usize,
    },
    BufferExhausted {
        requested_bytes: usize,
        available_bits: usize,
    },
    PayloadTooLarge(usize),
    MismatchOfSizeBetweenDimensionsAndChannels,
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadDataFile(String, std::io::Error),
    FailedToWriteDataFile(String, std::io::Error),
    FailedToDecodeImage(String, ImageError),
    FailedToEncodeImage(String, ImageError),
    LossyOutputFormat(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBitsPerChannel(bits) => {
                write!(
                    f,
                    "Invalid bit count {}. Available values are 1, 2 or 4",
                    bits
                )
            }
            Self::CapacityExceeded {
                requested_bits,
                available_bits,
            } => {
                write!(
                    f,
                    "Not enough space in the image: {} bits requested, but only {} available",
                    requested_bits, available_bits
                )
            }
            Self::BufferExhausted {
                requested_bytes,
                available_bits,
            } => {
                write!(
                    f,
                    "Image does not hold enough data: {} bytes requested, but only {} bits left",
                    requested_bytes, available_bits
                )
            }
            Self::PayloadTooLarge(size) => {
                write!(
                    f,
                    "Payload of {} bytes does not fit into the 32 bit length header",
                    size
                )
            }
            Self::MismatchOfSizeBetweenDimensionsAndChannels => {
                write!(
                    f,
                    "Number of channels does not match the image dimensions"
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadDataFile(path, error) => {
                write!(f, "Failed to read data file '{}': {}", path, error)
            }
            Self::FailedToWriteDataFile(path, error) => {
                write!(f, "Failed to write data file '{}': {}", path, error)
            }
            Self::FailedToDecodeImage(path, error) => {
                write!(f, "Failed to load image '{}': {}", path, error)
            }
            Self::FailedToEncodeImage(path, error) => {
                write!(f, "Failed to write image '{}': {}", path, error)
            }
            Self::LossyOutputFormat(path) => {
                write!(
                    f,
                    "Output image '{}' must use a lossless format (bmp, png, ppm, tiff, tga)",
                    path
                )
            }
        }
    }
}

impl std::error::Error for Error {}
