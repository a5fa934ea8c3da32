use std::io::{BufRead, Seek};

use image::ImageError;

use super::{ChannelBuffer, ImageReader};
use crate::error::Error;

/// Reads any container format the `image` crate recognizes from its content
pub struct ContainerImageReader<T: BufRead + Seek> {
    reader: T,
    name: String,
}

impl<T: BufRead + Seek> ContainerImageReader<T> {
    /// name is only used to report errors
    pub fn new(reader: T, name: &str) -> Self {
        Self {
            reader,
            name: name.to_owned(),
        }
    }
}

impl<T: BufRead + Seek> ImageReader for ContainerImageReader<T> {
    fn read_image(&mut self) -> crate::Result<ChannelBuffer> {
        let decoder = image::io::Reader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| Error::FailedToDecodeImage(self.name.clone(), ImageError::IoError(e)))?;
        log::debug!("Detected format {:?} for '{}'", decoder.format(), self.name);
        let image = decoder
            .decode()
            .map_err(|e| Error::FailedToDecodeImage(self.name.clone(), e))?;
        let rgb = image.into_rgb8();
        let (width, height) = rgb.dimensions();
        log::info!("Loaded '{}' with {}x{} pixels", self.name, width, height);
        ChannelBuffer::new(width, height, rgb.into_raw())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage};

    use super::ContainerImageReader;
    use crate::carrier::ImageReader;
    use crate::error::Error;

    fn encode(image: impl Into<DynamicImage>, format: ImageOutputFormat) -> Vec<u8> {
        let image: DynamicImage = image.into();
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, format)
            .expect("Encoding of test image failed");
        bytes.into_inner()
    }

    #[test]
    fn read_png_as_flat_rgb() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 200]));
        let bytes = encode(image, ImageOutputFormat::Png);
        let mut reader = ContainerImageReader::new(Cursor::new(bytes), "test.png");
        let buffer = reader.read_image().expect("PNG should be readable");
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(&buffer.channels()[..6], &[0, 0, 200, 1, 0, 200]);
        assert_eq!(&buffer.channels()[15..], &[2, 1, 200]);
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40]));
        let bytes = encode(image, ImageOutputFormat::Png);
        let mut reader = ContainerImageReader::new(Cursor::new(bytes), "alpha.png");
        let buffer = reader.read_image().expect("PNG should be readable");
        assert_eq!(buffer.channel_count(), 12);
        assert_eq!(&buffer.channels()[..3], &[10, 20, 30]);
    }

    #[test]
    fn garbage_is_not_an_image() {
        let mut reader = ContainerImageReader::new(Cursor::new(b"no image".to_vec()), "garbage");
        match reader.read_image() {
            Err(Error::FailedToDecodeImage(name, _)) => assert_eq!(name, "garbage"),
            _ => panic!("Decoding of garbage should fail"),
        }
    }
}
