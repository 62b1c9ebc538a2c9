//! Internal constants: register addresses and bit definitions.

/// Fixed I2C address of the PCA9536 (hardwired in the chip, no address pins).
///
/// Overridable via [`crate::Pca9536::with_address`] for setups that sit the
/// chip behind an address translator or multiplexer.
pub const DEFAULT_ADDRESS: u8 = 0x41;

// Register Addresses
/// Input Port register: bit i reflects the current logic level of pin i.
pub const REG_INPUT_PORT: u8 = 0x00;
/// Output Port register: bit i is the output flip-flop value of pin i.
pub const REG_OUTPUT_PORT: u8 = 0x01;
/// Polarity Inversion register: bit i = 1 inverts the input read-back of pin i.
pub const REG_POLARITY_INVERSION: u8 = 0x02;
/// Configuration register: bit i = 1 configures pin i as input, 0 as output.
pub const REG_CONFIGURATION: u8 = 0x03;

/// Number of I/O pins on the expander.
pub const PIN_COUNT: usize = 4;
