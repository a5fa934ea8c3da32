use std::{
    fs::{self, File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use carrier::{
    reader::ContainerImageReader,
    writer::{output_format_for, ContainerImageWriter},
    ChannelBuffer, ImageReader, ImageWriter,
};
pub use cli::CLIParser;
use codec::BitsPerChannel;
pub use error::Error;

pub mod carrier;
mod cli;
pub mod codec;
mod error;
mod logger;
pub mod payload;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Hide,
    Reveal,
}

pub struct Arguments {
    image_file: PathBuf,
    data_file: PathBuf,
    output_file: PathBuf,
    bits_per_channel: BitsPerChannel,
    mode: Mode,
}

impl Arguments {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

fn path_name(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_name(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_name(file_path), e))
}

pub fn read_carrier(file_path: &Path) -> Result<ChannelBuffer> {
    let input_file = open_input_file(file_path)?;
    let mut reader = ContainerImageReader::new(BufReader::new(input_file), &path_name(file_path));
    reader.read_image()
}

fn write_carrier(file_path: &Path, image: &ChannelBuffer) -> Result<()> {
    let format = output_format_for(file_path)?;
    let output_file = open_output_file(file_path)?;
    let mut writer = ContainerImageWriter::new(
        BufWriter::new(output_file),
        image,
        format,
        &path_name(file_path),
    );
    writer.write_image()
}

pub fn hide_data_in_image(arguments: &Arguments) -> Result<()> {
    // fail before any work if the carrier cannot be stored losslessly
    output_format_for(&arguments.output_file)?;
    let data = fs::read(&arguments.data_file)
        .map_err(|e| Error::FailedToReadDataFile(path_name(&arguments.data_file), e))?;
    let mut image = read_carrier(&arguments.image_file)?;
    logger::log_capacity(image.channel_count(), arguments.bits_per_channel);
    payload::hide(image.channels_mut(), arguments.bits_per_channel, &data)?;
    write_carrier(&arguments.output_file, &image)
}

pub fn reveal_data_from_image(arguments: &Arguments) -> Result<()> {
    let image = read_carrier(&arguments.image_file)?;
    let data = payload::reveal(image.channels(), arguments.bits_per_channel)?;
    let data_file_name = path_name(&arguments.data_file);
    let mut output_file = BufWriter::new(open_output_file(&arguments.data_file)?);
    output_file
        .write_all(&data)
        .and_then(|_| output_file.flush())
        .map_err(|e| Error::FailedToWriteDataFile(data_file_name, e))
}

pub fn run(arguments: &Arguments) -> Result<()> {
    match arguments.mode {
        Mode::Hide => hide_data_in_image(arguments),
        Mode::Reveal => reveal_data_from_image(arguments),
    }
}
