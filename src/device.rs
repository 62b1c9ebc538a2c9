//! The device facade: register access and whole-device operations.

use std::cell::RefCell;

use embedded_hal::i2c::I2c;
use log::{debug, trace};

use crate::codec;
use crate::consts::{
    DEFAULT_ADDRESS, PIN_COUNT, REG_CONFIGURATION, REG_INPUT_PORT, REG_OUTPUT_PORT,
    REG_POLARITY_INVERSION,
};
use crate::error::{Error, Result};
use crate::pin::{Pin, PinIndex, PinMode, Pins};

/// A PCA9536 device on an I2C bus.
///
/// Generic over any [`embedded_hal::i2c::I2c`] implementation. The trait is
/// also implemented for `&mut T`, so callers can lend the driver a mutable
/// borrow of a shared bus instead of giving it away, or reclaim an owned
/// bus with [`release`](Self::release).
///
/// The chip is the source of truth for all register values: nothing is
/// cached across calls, and every partial update performs a fresh register
/// read immediately before the merged write. The bus sits behind a
/// `RefCell` so that pin views can share the device; the type is therefore
/// not `Sync`, and multi-threaded callers must serialize access
/// externally.
#[derive(Debug)]
pub struct Pca9536<I2C> {
    bus: RefCell<I2C>,
    address: u8,
}

impl<I2C: I2c> Pca9536<I2C> {
    /// Creates a driver for a chip at the fixed PCA9536 address, 0x41.
    pub fn new(bus: I2C) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Creates a driver for a chip reachable at a non-standard address,
    /// e.g. behind an I2C address translator or multiplexer.
    pub fn with_address(bus: I2C, address: u8) -> Self {
        Self {
            bus: RefCell::new(bus),
            address,
        }
    }

    /// Returns the device address in use.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consumes the driver and returns the bus.
    pub fn release(self) -> I2C {
        self.bus.into_inner()
    }

    // --- Register Access ---

    fn read_register(&self, register: u8) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.bus
            .borrow_mut()
            .write_read(self.address, &[register], &mut buf)
            .map_err(Error::Bus)?;
        trace!("read register 0x{:02X}: 0x{:02X}", register, buf[0]);
        Ok(buf[0])
    }

    fn write_register(&self, register: u8, value: u8) -> Result<(), I2C::Error> {
        trace!("write register 0x{:02X}: 0x{:02X}", register, value);
        self.bus
            .borrow_mut()
            .write(self.address, &[register, value])
            .map_err(Error::Bus)
    }

    // Fresh read, merge, write back.
    fn update_register(
        &self,
        register: u8,
        updates: [Option<bool>; PIN_COUNT],
    ) -> Result<(), I2C::Error> {
        let current = self.read_register(register)?;
        self.write_register(register, codec::pack(current, updates))
    }

    // --- Whole-Device Operations ---

    /// Reads the logic level of all four pins from the Input Port
    /// register, ordered by pin index.
    ///
    /// Levels are reported after the chip has applied any configured
    /// polarity inversion.
    pub fn read(&self) -> Result<[bool; PIN_COUNT], I2C::Error> {
        let value = self.read_register(REG_INPUT_PORT)?;
        Ok(codec::unpack(value))
    }

    /// Writes output levels; `None` entries leave the pin's output bit
    /// unchanged.
    ///
    /// The Output Port register only drives pins configured as outputs;
    /// for the remaining pins the stored flip-flop value takes effect once
    /// the pin is switched to output.
    pub fn write(&self, levels: [Option<bool>; PIN_COUNT]) -> Result<(), I2C::Error> {
        debug!("writing output levels {:?}", levels);
        self.update_register(REG_OUTPUT_PORT, levels)
    }

    /// Sets all four output flip-flops to the same level.
    pub fn write_all(&self, level: bool) -> Result<(), I2C::Error> {
        self.write([Some(level); PIN_COUNT])
    }

    /// Reads the configured direction of all four pins, ordered by pin
    /// index.
    pub fn modes(&self) -> Result<[PinMode; PIN_COUNT], I2C::Error> {
        let value = self.read_register(REG_CONFIGURATION)?;
        Ok(codec::unpack_modes(value))
    }

    /// Configures pin directions; `None` entries leave the pin's
    /// configuration bit unchanged.
    ///
    /// Entries may be [`PinMode`] values or case-insensitive mode names
    /// (`"input"` / `"output"`). Every entry is normalized before any bus
    /// transaction, so an unrecognized name fails without touching the
    /// chip.
    pub fn set_modes<M>(&self, modes: [Option<M>; PIN_COUNT]) -> Result<(), I2C::Error>
    where
        M: TryInto<PinMode>,
        Error<I2C::Error>: From<M::Error>,
    {
        let mut resolved = [None; PIN_COUNT];
        for (slot, update) in resolved.iter_mut().zip(modes) {
            if let Some(mode) = update {
                *slot = Some(mode.try_into()?);
            }
        }
        self.set_modes_resolved(resolved)
    }

    // Write already-normalized mode updates. Kept separate from the generic
    // `set_modes` so concrete callers (`set_mode_all`, `Pin::set_mode`) can
    // reach the register write without re-entering the `TryInto` bounds.
    pub(crate) fn set_modes_resolved(
        &self,
        resolved: [Option<PinMode>; PIN_COUNT],
    ) -> Result<(), I2C::Error> {
        debug!("setting pin modes {:?}", resolved);
        let current = self.read_register(REG_CONFIGURATION)?;
        self.write_register(REG_CONFIGURATION, codec::pack_modes(current, resolved))
    }

    /// Configures all four pins to the same direction.
    pub fn set_mode_all<M>(&self, mode: M) -> Result<(), I2C::Error>
    where
        M: TryInto<PinMode>,
        Error<I2C::Error>: From<M::Error>,
    {
        let mode: PinMode = mode.try_into()?;
        self.set_modes_resolved([Some(mode); PIN_COUNT])
    }

    /// Reads the input polarity inversion state of all four pins, ordered
    /// by pin index.
    pub fn polarity_inversion(&self) -> Result<[bool; PIN_COUNT], I2C::Error> {
        let value = self.read_register(REG_POLARITY_INVERSION)?;
        Ok(codec::unpack(value))
    }

    /// Enables or disables input polarity inversion per pin; `None`
    /// entries leave the pin's inversion bit unchanged.
    ///
    /// Inversion is applied by the chip to the Input Port read-back only;
    /// Output Port values are never affected.
    pub fn set_polarity_inversion(
        &self,
        inverts: [Option<bool>; PIN_COUNT],
    ) -> Result<(), I2C::Error> {
        debug!("setting polarity inversion {:?}", inverts);
        self.update_register(REG_POLARITY_INVERSION, inverts)
    }

    /// Enables or disables input polarity inversion for all four pins.
    pub fn set_polarity_inversion_all(&self, invert: bool) -> Result<(), I2C::Error> {
        self.set_polarity_inversion([Some(invert); PIN_COUNT])
    }

    // --- Pin Access ---

    /// Returns a view of pin `index`, failing for indices outside 0-3.
    pub fn pin(&self, index: u8) -> Result<Pin<'_, I2C>, I2C::Error> {
        let index = PinIndex::new(index)?;
        Ok(Pin::new(self, index))
    }

    /// Returns an iterator over the four pin views in index order.
    ///
    /// The iterator is lazy and finite; call again for a fresh pass.
    pub fn pins(&self) -> Pins<'_, I2C> {
        Pins::new(self)
    }
}

impl<'d, I2C: I2c> IntoIterator for &'d Pca9536<I2C> {
    type Item = Pin<'d, I2C>;
    type IntoIter = Pins<'d, I2C>;

    fn into_iter(self) -> Self::IntoIter {
        self.pins()
    }
}
