//! Integration tests for pin name resolution

use neopixel_pi::{BoardPin, Error};
use rppal::spi::Bus;

fn gpio(name: &str) -> u8 {
    name.parse::<BoardPin>().unwrap().gpio()
}

#[test]
fn board_names_map_to_bcm_numbers() {
    assert_eq!(gpio("D14"), 14);
    assert_eq!(gpio("D0"), 0);
    assert_eq!(gpio("D27"), 27);
    assert_eq!(gpio("d18"), 18);
}

#[test]
fn gpio_prefix_and_bare_numbers_are_accepted() {
    assert_eq!(gpio("GPIO10"), 10);
    assert_eq!(gpio("gpio21"), 21);
    assert_eq!(gpio("12"), 12);
}

#[test]
fn aliases_resolve_to_their_gpio() {
    assert_eq!(gpio("MOSI"), 10);
    assert_eq!(gpio("SCK"), 11);
    assert_eq!(gpio("TX"), 14);
    assert_eq!(gpio("MOSI_1"), 20);
    assert_eq!(gpio("sda"), 2);
}

#[test]
fn unknown_names_are_rejected() {
    for name in ["", "D", "D28", "D-1", "GPIO", "P14", "D1O", "D300"] {
        assert!(
            matches!(name.parse::<BoardPin>(), Err(Error::InvalidPin(_))),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn only_mosi_pins_have_an_spi_bus() {
    assert_eq!(gpio_pin("D10").spi_bus(), Some(Bus::Spi0));
    assert_eq!(gpio_pin("D20").spi_bus(), Some(Bus::Spi1));
    assert_eq!(gpio_pin("D14").spi_bus(), None);
    assert_eq!(gpio_pin("D18").spi_bus(), None);
}

#[test]
fn displays_as_board_name() {
    assert_eq!(gpio_pin("MOSI").to_string(), "D10");
    assert_eq!(gpio_pin("GPIO5").to_string(), "D5");
}

fn gpio_pin(name: &str) -> BoardPin {
    name.parse().unwrap()
}
