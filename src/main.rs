use std::env::args_os;
use std::process::ExitCode;

use lowbit_stego::{run, CLIParser, Mode};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => {
            match arguments.mode() {
                Mode::Hide => println!("Data hidden in {}", arguments.output_file().display()),
                Mode::Reveal => println!("Data revealed to {}", arguments.data_file().display()),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Operation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
