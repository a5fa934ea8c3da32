use image::{Rgb, RgbImage};
use lowbit_stego::{run, CLIParser, Error};
use std::path::PathBuf;
use std::{env, fs};

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_test_file_path(file_name: &str) -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push("tests");
    root_path.push(file_name);
    root_path
}

fn cleanup(paths: &[&PathBuf]) {
    for path in paths {
        if path.exists() && path.is_file() {
            fs::remove_file(path).expect("Deletion of test file failed");
        }
    }
}

fn create_carrier_image(path: &PathBuf, width: u32, height: u32) {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7) as u8, (y * 13) as u8, ((x + y) * 3) as u8])
    });
    image.save(path).expect("Creation of carrier image failed");
}

#[test]
fn test_hide_and_reveal_data() {
    let carrier_path = get_test_file_path("roundtrip_carrier.png");
    let data_path = get_test_file_path("roundtrip_secret.bin");
    let result_path = get_test_file_path("roundtrip_result.bmp");
    let revealed_path = get_test_file_path("roundtrip_revealed.bin");
    cleanup(&[&carrier_path, &data_path, &result_path, &revealed_path]);

    create_carrier_image(&carrier_path, 32, 24);
    let secret: Vec<u8> = (0..500).map(|i| (i * 31 % 256) as u8).collect();
    fs::write(&data_path, &secret).expect("Creation of data file failed");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        carrier_path.to_str().unwrap(),
        "-d",
        data_path.to_str().unwrap(),
        "-b",
        "4",
        "-o",
        result_path.to_str().unwrap(),
    ]);
    run(&arguments).expect("Hiding data failed");
    assert!(result_path.exists(), "Output image was not created");

    let arguments = cli_parser.parse(vec![
        "test",
        result_path.to_str().unwrap(),
        "-e",
        "-d",
        revealed_path.to_str().unwrap(),
        "-b",
        "4",
    ]);
    run(&arguments).expect("Revealing data failed");
    let revealed = fs::read(&revealed_path).expect("Revealed data file was not created");
    assert_eq!(revealed, secret, "Revealed data does not match");

    cleanup(&[&carrier_path, &data_path, &result_path, &revealed_path]);
}

#[test]
fn test_data_too_large_for_image() {
    let carrier_path = get_test_file_path("small_carrier.png");
    let data_path = get_test_file_path("small_secret.bin");
    let result_path = get_test_file_path("small_result.bmp");
    cleanup(&[&carrier_path, &data_path, &result_path]);

    // 4x4 pixels with one bit per channel hold 2 bytes behind the header
    create_carrier_image(&carrier_path, 4, 4);
    fs::write(&data_path, [0_u8; 3]).expect("Creation of data file failed");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        carrier_path.to_str().unwrap(),
        "-d",
        data_path.to_str().unwrap(),
        "-b",
        "1",
        "-o",
        result_path.to_str().unwrap(),
    ]);
    match run(&arguments) {
        Err(Error::CapacityExceeded { .. }) => {}
        other => panic!("Expected capacity error, got {:?}", other.err()),
    }
    assert!(!result_path.exists(), "Output image must not be written");

    cleanup(&[&carrier_path, &data_path, &result_path]);
}

#[test]
fn test_lossy_output_is_rejected() {
    let data_path = get_test_file_path("lossy_secret.bin");
    fs::write(&data_path, b"secret").expect("Creation of data file failed");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "does_not_matter.png",
        "-d",
        data_path.to_str().unwrap(),
        "-o",
        "result.jpg",
    ]);
    match run(&arguments) {
        Err(Error::LossyOutputFormat(_)) => {}
        other => panic!("Expected lossy format error, got {:?}", other.err()),
    }

    cleanup(&[&data_path]);
}
