//! Bit packing between per-pin value sequences and raw register bytes.
//!
//! Bit i of a register byte corresponds to pin i for i in 0..4; bits 4-7 are
//! reserved and pass through [`pack`] untouched.

use crate::consts::PIN_COUNT;
use crate::pin::PinMode;

/// Unpacks a register byte into one boolean per pin, ordered by pin index.
pub(crate) fn unpack(value: u8) -> [bool; PIN_COUNT] {
    std::array::from_fn(|i| value & (1 << i) != 0)
}

/// Merges per-pin updates into `current`.
///
/// A `None` entry keeps the corresponding bit of `current`; bits 4-7 are
/// always kept.
pub(crate) fn pack(current: u8, updates: [Option<bool>; PIN_COUNT]) -> u8 {
    let mut value = current;
    for (i, update) in updates.into_iter().enumerate() {
        match update {
            Some(true) => value |= 1 << i,
            Some(false) => value &= !(1 << i),
            None => {}
        }
    }
    value
}

/// Unpacks a Configuration register byte into one mode per pin.
pub(crate) fn unpack_modes(value: u8) -> [PinMode; PIN_COUNT] {
    unpack(value).map(PinMode::from_bit)
}

/// Merges per-pin mode updates into a Configuration register byte.
pub(crate) fn pack_modes(current: u8, updates: [Option<PinMode>; PIN_COUNT]) -> u8 {
    pack(current, updates.map(|mode| mode.map(PinMode::bit)))
}
