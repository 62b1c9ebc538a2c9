//! Pin-level types: validated indices, direction modes, and per-pin views.

use std::fmt;
use std::str::FromStr;

use embedded_hal::i2c::I2c;

use crate::consts::PIN_COUNT;
use crate::device::Pca9536;
use crate::error::{Error, InvalidMode, InvalidPin, Result};

/// Direction of an expander pin.
///
/// Stored in the Configuration register as 1 = input, 0 = output; the chip
/// resets with all four pins configured as inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinMode {
    Input,
    Output,
}

impl PinMode {
    #[inline]
    pub(crate) fn from_bit(bit: bool) -> Self {
        if bit {
            PinMode::Input
        } else {
            PinMode::Output
        }
    }

    #[inline]
    pub(crate) fn bit(self) -> bool {
        self == PinMode::Input
    }
}

impl FromStr for PinMode {
    type Err = InvalidMode;

    /// Parses `"input"` or `"output"`, case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("input") {
            Ok(PinMode::Input)
        } else if s.eq_ignore_ascii_case("output") {
            Ok(PinMode::Output)
        } else {
            Err(InvalidMode(s.to_string()))
        }
    }
}

impl TryFrom<&str> for PinMode {
    type Error = InvalidMode;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PinMode::Input => "input",
            PinMode::Output => "output",
        })
    }
}

/// A validated pin index (0-3).
/// Use `PinIndex::new(num)` to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinIndex(u8);

impl PinIndex {
    /// Creates a new PinIndex, returning an error if the number is out of
    /// range (0-3).
    pub fn new(index: u8) -> std::result::Result<Self, InvalidPin> {
        if (index as usize) < PIN_COUNT {
            Ok(PinIndex(index))
        } else {
            Err(InvalidPin(index))
        }
    }

    /// Returns the underlying pin number (0-3).
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }
}

/// A lightweight view of one expander pin.
///
/// Obtained from [`Pca9536::pin`] or by iterating the device. The view
/// borrows the device, owns no register state, and performs no I/O until an
/// operation is called; every operation delegates to the corresponding
/// device batch operation with the other three pins left unchanged.
#[derive(Debug)]
pub struct Pin<'d, I2C> {
    device: &'d Pca9536<I2C>,
    index: PinIndex,
}

impl<I2C> Clone for Pin<'_, I2C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I2C> Copy for Pin<'_, I2C> {}

impl<'d, I2C: I2c> Pin<'d, I2C> {
    pub(crate) fn new(device: &'d Pca9536<I2C>, index: PinIndex) -> Self {
        Self { device, index }
    }

    /// Returns this pin's index (0-3).
    #[inline]
    pub fn index(&self) -> u8 {
        self.index.index()
    }

    /// Reads the current logic level of this pin.
    pub fn read(&self) -> Result<bool, I2C::Error> {
        Ok(self.device.read()?[self.index.index() as usize])
    }

    /// Sets the output flip-flop of this pin, leaving the other pins
    /// unchanged.
    pub fn write(&self, level: bool) -> Result<(), I2C::Error> {
        self.device.write(single(self.index, level))
    }

    /// Reads the configured direction of this pin.
    pub fn mode(&self) -> Result<PinMode, I2C::Error> {
        Ok(self.device.modes()?[self.index.index() as usize])
    }

    /// Configures the direction of this pin, leaving the other pins
    /// unchanged.
    ///
    /// Accepts a [`PinMode`] or a case-insensitive mode name (`"input"` /
    /// `"output"`); an unrecognized name fails without any bus traffic.
    pub fn set_mode<M>(&self, mode: M) -> Result<(), I2C::Error>
    where
        M: TryInto<PinMode>,
        Error<I2C::Error>: From<M::Error>,
    {
        let mode: PinMode = mode.try_into()?;
        self.device.set_modes_resolved(single(self.index, mode))
    }

    /// Reads whether input polarity inversion is enabled for this pin.
    pub fn polarity_inversion(&self) -> Result<bool, I2C::Error> {
        Ok(self.device.polarity_inversion()?[self.index.index() as usize])
    }

    /// Enables or disables input polarity inversion for this pin, leaving
    /// the other pins unchanged.
    pub fn set_polarity_inversion(&self, invert: bool) -> Result<(), I2C::Error> {
        self.device.set_polarity_inversion(single(self.index, invert))
    }
}

// All-but-one-index unspecified.
fn single<T>(index: PinIndex, value: T) -> [Option<T>; PIN_COUNT] {
    let mut updates = [None, None, None, None];
    updates[index.index() as usize] = Some(value);
    updates
}

/// Iterator over the four pin views of a device, in index order.
///
/// Created by [`Pca9536::pins`] or by iterating `&Pca9536`. Lazy and
/// finite; create a new one to restart.
#[derive(Debug)]
pub struct Pins<'d, I2C> {
    device: &'d Pca9536<I2C>,
    next: u8,
}

impl<'d, I2C> Pins<'d, I2C> {
    pub(crate) fn new(device: &'d Pca9536<I2C>) -> Self {
        Self { device, next: 0 }
    }
}

impl<'d, I2C: I2c> Iterator for Pins<'d, I2C> {
    type Item = Pin<'d, I2C>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = PinIndex::new(self.next).ok()?;
        self.next += 1;
        Some(Pin::new(self.device, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = PIN_COUNT.saturating_sub(self.next as usize);
        (remaining, Some(remaining))
    }
}

impl<I2C: I2c> ExactSizeIterator for Pins<'_, I2C> {}

impl<I2C: I2c> std::iter::FusedIterator for Pins<'_, I2C> {}
