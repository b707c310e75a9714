//! Integration tests for settings and command-line parsing

use std::io::Write;

use clap::Parser;
use neopixel_pi::{AnimationKind, ByteOrder, Cli, Error, Settings};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_match_the_tuned_parameters() {
    let settings = Settings::default();

    assert_eq!(settings.interval_ms, 20);
    assert_eq!(settings.brightness, 1.0);
    assert_eq!(settings.byte_order, ByteOrder::Grb);
    assert_eq!(settings.rainbow.period_ms, 2000);
    assert_eq!(settings.rainbow_chase.size, 5);
    assert_eq!(settings.rainbow_chase.spacing, 3);
    assert_eq!(settings.rainbow_comet.tail_length, 7);
    assert!(settings.rainbow_comet.bounce);
    assert_eq!(settings.rainbow_sparkle.num_sparkles, 15);
    assert_eq!(settings.cycle.advance_interval_ms, 5000);
    assert!(settings.cycle.auto_clear);
    assert_eq!(settings.solid.speed_ms, 20);
    assert!(settings.validate().is_ok());
}

#[test]
fn partial_file_keeps_defaults_for_missing_keys() {
    let file = write_config(
        r##"
brightness = 0.5
byte_order = "RGB"

[rainbow_comet]
tail_length = 10
bounce = false

[solid]
color = "#00ff00"
"##,
    );

    let settings = Settings::load(file.path()).unwrap();

    assert_eq!(settings.brightness, 0.5);
    assert_eq!(settings.byte_order, ByteOrder::Rgb);
    assert_eq!(settings.rainbow_comet.tail_length, 10);
    assert!(!settings.rainbow_comet.bounce);
    assert_eq!(settings.rainbow_comet.speed_ms, 20);
    assert_eq!(settings.solid.color.as_deref(), Some("#00ff00"));
    assert_eq!(settings.solid.speed_ms, 20);
    assert_eq!(settings.rainbow, Settings::default().rainbow);
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config("brightnes = 0.5\n");
    let result = Settings::load(file.path());
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn invalid_values_fail_validation() {
    let file = write_config("brightness = 2.0\n");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config { .. })));

    let file = write_config("[rainbow_comet]\ntail_length = 0\n");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config { .. })));

    let file = write_config("[rainbow]\nperiod_ms = 0\n");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config { .. })));

    let file = write_config("[rainbow_sparkle]\nbackground_brightness = -0.1\n");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config { .. })));

    let file = write_config("interval_ms = 0\n");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config { .. })));
}

#[test]
fn zero_animation_speed_is_allowed() {
    let file = write_config("[rainbow]\nspeed_ms = 0\n");
    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.rainbow.speed_ms, 0);
}

#[test]
fn missing_file_is_an_io_error() {
    let result = Settings::load("/nonexistent/neopixel.toml");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn cli_parses_positionals() {
    let cli = Cli::try_parse_from(["neopixel", "D10", "60", "rainbow_comet"]).unwrap();

    assert_eq!(cli.pin.gpio(), 10);
    assert_eq!(cli.num_pixels, 60);
    assert_eq!(cli.animation, AnimationKind::RainbowComet);
    assert!(cli.color.is_none());
    assert!(!cli.dry_run);
}

#[test]
fn cli_rejects_unknown_animation_and_pin() {
    assert!(Cli::try_parse_from(["neopixel", "D10", "60", "strobe"]).is_err());
    assert!(Cli::try_parse_from(["neopixel", "D99", "60", "rainbow"]).is_err());
    assert!(Cli::try_parse_from(["neopixel", "D10", "many", "rainbow"]).is_err());
}

#[test]
fn cli_flags_override_config_file() {
    let file = write_config("brightness = 0.5\ninterval_ms = 40\n");
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from([
        "neopixel",
        "D10",
        "30",
        "solid",
        "--color",
        "#123456",
        "--brightness",
        "0.25",
        "--byte-order",
        "brg",
        "--seed",
        "9",
        "--config",
        path,
    ])
    .unwrap();

    let settings = cli.settings().unwrap();

    assert_eq!(settings.brightness, 0.25);
    assert_eq!(settings.interval_ms, 40);
    assert_eq!(settings.byte_order, ByteOrder::Brg);
    assert_eq!(settings.rng_seed, Some(9));
    assert_eq!(settings.solid.color.as_deref(), Some("#123456"));
}

#[test]
fn cli_brightness_out_of_range_fails_validation() {
    let cli = Cli::try_parse_from(["neopixel", "D10", "30", "rainbow", "--brightness", "1.5"])
        .unwrap();
    assert!(matches!(cli.settings(), Err(Error::Config { .. })));
}

#[test]
fn cli_zero_interval_fails_validation() {
    let cli = Cli::try_parse_from(["neopixel", "D10", "30", "rainbow", "--interval-ms", "0"])
        .unwrap();
    assert!(matches!(cli.settings(), Err(Error::Config { .. })));
}
