use std::io::{Seek, Write};
use std::path::Path;

use image::{ColorType, ImageFormat};

use super::{ChannelBuffer, ImageWriter};
use crate::error::Error;

pub const DEFAULT_OUTPUT_FILE: &str = "output.bmp";

/// container format for an output path, rejecting formats that would
/// destroy the low bits of the channels
pub fn output_format_for(path: &Path) -> crate::Result<ImageFormat> {
    let path_name = path.to_string_lossy().into_owned();
    let format =
        ImageFormat::from_path(path).map_err(|_| Error::LossyOutputFormat(path_name.clone()))?;
    match format {
        ImageFormat::Bmp
        | ImageFormat::Png
        | ImageFormat::Pnm
        | ImageFormat::Tiff
        | ImageFormat::Tga => Ok(format),
        _ => Err(Error::LossyOutputFormat(path_name)),
    }
}

pub struct ContainerImageWriter<'a, T: Write + Seek> {
    writer: T,
    image: &'a ChannelBuffer,
    format: ImageFormat,
    name: String,
}

impl<'a, T: Write + Seek> ContainerImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a ChannelBuffer, format: ImageFormat, name: &str) -> Self {
        Self {
            writer,
            image,
            format,
            name: name.to_owned(),
        }
    }
}

impl<T: Write + Seek> ImageWriter for ContainerImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        image::write_buffer_with_format(
            &mut self.writer,
            self.image.channels(),
            self.image.width(),
            self.image.height(),
            ColorType::Rgb8,
            self.format,
        )
        .map_err(|e| Error::FailedToEncodeImage(self.name.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::FailedToEncodeImage(self.name.clone(), e.into()))?;
        log::info!("Wrote {:?} image '{}'", self.format, self.name);
        Ok(())
    }
}
