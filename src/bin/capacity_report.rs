use std::env::args_os;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ValueEnum;
use lowbit_stego::codec::BitsPerChannel;
use lowbit_stego::{payload, read_carrier};

fn main() -> ExitCode {
    let Some(image_path) = args_os().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: capacity_report <image>");
        return ExitCode::FAILURE;
    };
    let image = match read_carrier(&image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{}: {}x{} pixels, {} channels",
        image_path.display(),
        image.width(),
        image.height(),
        image.channel_count()
    );
    for bits_per_channel in BitsPerChannel::value_variants() {
        println!(
            "{} bits per channel: {} bytes",
            bits_per_channel.bits(),
            payload::capacity(image.channel_count(), *bits_per_channel)
        );
    }
    ExitCode::SUCCESS
}
