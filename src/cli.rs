use crate::carrier::writer::DEFAULT_OUTPUT_FILE;
use crate::codec::BitsPerChannel;
use crate::{Arguments, Mode};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgGroup, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_image_file_argument(command);
        let command = Self::register_data_file_argument(command);
        let command = Self::register_bits_per_channel_argument(command);
        let command = Self::register_mode_argument(command);
        Self::register_output_file_argument(command)
    }

    fn register_image_file_argument(command: Command) -> Command {
        command
            .arg(Self::create_image_file_argument())
            .arg(Self::create_image_option_argument())
            .group(Self::create_image_group())
    }

    fn register_data_file_argument(command: Command) -> Command {
        command.arg(Self::create_data_file_argument())
    }

    fn register_bits_per_channel_argument(command: Command) -> Command {
        command.arg(Self::create_bits_per_channel_argument())
    }

    fn register_mode_argument(command: Command) -> Command {
        command.arg(Self::create_mode_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_image_file_argument() -> Arg {
        Arg::new("image_file")
            .help("Image to store data in, or to read data from with --extract")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_image_option_argument() -> Arg {
        arg!(image_option: -i --image <FILE> "Image given as option instead of positional")
            .value_parser(value_parser!(PathBuf))
            .hide(true)
    }

    fn create_image_group() -> ArgGroup {
        ArgGroup::new("image")
            .args(["image_file", "image_option"])
            .required(true)
    }

    fn create_data_file_argument() -> Arg {
        arg!(data_file: -d --data <FILE> "Data to store in the image, or destination of extracted data")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_bits_per_channel_argument() -> Arg {
        arg!(bits_per_channel: -b --bits_per_channel <BITS> "How many bits to take from each channel for storing data")
            .default_value("2")
            .value_parser(value_parser!(BitsPerChannel))
    }

    fn create_mode_argument() -> Arg {
        arg!(reveal: -e --extract "Decode data from the image into the data file")
    }

    fn create_output_file_argument() -> Arg {
        arg!(output_file: -o --output <FILE> "Image receiving the stored data")
            .default_value(DEFAULT_OUTPUT_FILE)
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            image_file: Self::extract_image_file_argument(matches),
            data_file: Self::extract_data_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            bits_per_channel: Self::extract_bits_per_channel_argument(matches),
            mode: Self::extract_mode_argument(matches),
        }
    }

    fn extract_image_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("image_file")
            .or_else(|| matches.get_one::<PathBuf>("image_option"))
            .expect("Required argument image_file not provided")
            .clone()
    }

    fn extract_data_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("data_file")
            .expect("Required argument data_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Output file must be provided, but was unset.")
            .clone()
    }

    fn extract_bits_per_channel_argument(matches: &ArgMatches) -> BitsPerChannel {
        matches
            .get_one::<BitsPerChannel>("bits_per_channel")
            .expect("Bits per channel must be provided, but was unset.")
            .to_owned()
    }

    fn extract_mode_argument(matches: &ArgMatches) -> Mode {
        if matches.get_flag("reveal") {
            Mode::Reveal
        } else {
            Mode::Hide
        }
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
