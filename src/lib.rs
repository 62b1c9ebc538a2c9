//! # pca9536
//!
//! A Rust crate for controlling the PCA9536 4-bit I2C GPIO expander.
//!
//! The chip exposes four I/O pins through four 8-bit registers (Input
//! Port, Output Port, Polarity Inversion, Configuration); bit i of each
//! register maps to pin i, and bits 4-7 are reserved. This crate
//! translates pin operations into single-byte register transactions over
//! any [`embedded_hal::i2c::I2c`] bus implementation.
//!
//! ## Features
//!
//! *   Whole-device batch operations (`read`, `write`, `modes` /
//!     `set_modes`, `polarity_inversion` / `set_polarity_inversion`) with
//!     partial-update semantics: a `None` entry leaves that pin's register
//!     bit unchanged.
//! *   Per-pin views (`device.pin(n)`, iteration over `&device`)
//!     delegating to the batch operations.
//! *   Mode values as [`PinMode`] constants or case-insensitive names
//!     (`"input"` / `"output"`), rejected before any bus traffic when
//!     unrecognized.
//! *   Reserved register bits preserved across every partial write.
//! *   No caching: every read-modify-write performs a fresh register read
//!     immediately before the write.
//!
//! ## Basic Usage
//!
//! ```
//! use embedded_hal::i2c::I2c;
//! use pca9536::{Pca9536, PinMode, Result};
//!
//! fn demo<I2C: I2c>(bus: I2C) -> Result<(), I2C::Error> {
//!     let expander = Pca9536::new(bus);
//!
//!     let pin = expander.pin(0)?;
//!     pin.set_mode(PinMode::Output)?;
//!     pin.write(true)?;
//!
//!     // Pin 1 becomes an input; pins 2 and 3 stay untouched.
//!     expander.set_modes([None, Some("input"), None, None])?;
//!     let levels = expander.read()?;
//!     println!("pin 1 reads {}", levels[1]);
//!     Ok(())
//! }
//! ```
//!
//! ## Register Map
//!
//! | Register | Address | Bit meaning |
//! |---|---|---|
//! | Input Port | 0x00 | bit i = current logic level of pin i |
//! | Output Port | 0x01 | bit i = output flip-flop value of pin i |
//! | Polarity Inversion | 0x02 | bit i = 1 inverts input read for pin i |
//! | Configuration | 0x03 | bit i = 1 → pin i is input, 0 → output |
//!
//! The device address is hardwired to 0x41; use [`Pca9536::with_address`]
//! when the chip sits behind an address translator or multiplexer.
//!
//! ## Concurrency
//!
//! Operations take `&self` so that pin views can share the device, but the
//! bus sits behind a `RefCell`: the driver is not `Sync` and provides no
//! internal mutual exclusion. Callers sharing one device across threads
//! must serialize access externally. Every read-modify-write re-reads the
//! register immediately before writing, so changes made to the chip by
//! other bus masters are picked up, at the cost of a race window between
//! that read and the write.

// Make internal modules private, re-export public types
mod codec;
mod consts;
mod device;
mod error;
mod pin;

pub use consts::DEFAULT_ADDRESS;
pub use device::Pca9536;
pub use error::{Error, InvalidMode, InvalidPin, Result};
pub use pin::{Pin, PinIndex, PinMode, Pins};
