//! Raspberry Pi header pin names.

use std::fmt;
use std::str::FromStr;

use rppal::spi::Bus;

use crate::error::Error;

/// Highest BCM GPIO exposed on the 40-pin header.
pub const MAX_GPIO: u8 = 27;

/// A GPIO on the Raspberry Pi header, in BCM numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPin(u8);

impl BoardPin {
    pub fn new(gpio: u8) -> Result<Self, Error> {
        if gpio > MAX_GPIO {
            return Err(Error::InvalidPin(format!("GPIO{gpio}")));
        }
        Ok(Self(gpio))
    }

    pub fn gpio(self) -> u8 {
        self.0
    }

    /// The SPI controller whose MOSI line is routed to this pin.
    pub fn spi_bus(self) -> Option<Bus> {
        match self.0 {
            10 => Some(Bus::Spi0),
            20 => Some(Bus::Spi1),
            _ => None,
        }
    }
}

fn alias(name: &str) -> Option<u8> {
    let gpio = match name {
        "SDA" => 2,
        "SCL" => 3,
        "CE1" => 7,
        "CE0" => 8,
        "MISO" => 9,
        "MOSI" => 10,
        "SCLK" | "SCK" => 11,
        "TXD" | "TX" => 14,
        "RXD" | "RX" => 15,
        "MISO_1" => 19,
        "MOSI_1" => 20,
        "SCLK_1" | "SCK_1" => 21,
        _ => return None,
    };
    Some(gpio)
}

impl FromStr for BoardPin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        let invalid = || Error::InvalidPin(s.to_string());

        if let Some(gpio) = alias(&name) {
            return Ok(Self(gpio));
        }

        let digits = name
            .strip_prefix("GPIO")
            .or_else(|| name.strip_prefix('D'))
            .unwrap_or(&name);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let gpio: u8 = digits.parse().map_err(|_| invalid())?;
        Self::new(gpio).map_err(|_| invalid())
    }
}

impl fmt::Display for BoardPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}
