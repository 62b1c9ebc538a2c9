//! Mock-bus tests for the whole-device operations.
//!
//! Register fixtures follow the 0xA5 pattern (low nibble 0b0101, reserved
//! high nibble 0xA0) so that partial updates visibly preserve both
//! untouched pins and reserved bits.

use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
use pca9536::{Error, Pca9536, PinMode, DEFAULT_ADDRESS};

const ADDR: u8 = DEFAULT_ADDRESS;

#[test]
fn read_unpacks_input_port() {
    let expectations = [Transaction::write_read(ADDR, vec![0x00], vec![0xA5])];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    assert_eq!(expander.read().unwrap(), [true, false, true, false]);

    bus.done();
}

#[test]
fn partial_write_merges_into_output_port() {
    // Output Port starts at 0b0000; pins 0 and 2 go high, 1 and 3 untouched.
    let expectations = [
        Transaction::write_read(ADDR, vec![0x01], vec![0x00]),
        Transaction::write(ADDR, vec![0x01, 0x05]),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    expander.write([Some(true), None, Some(true), None]).unwrap();

    bus.done();
}

#[test]
fn partial_write_preserves_reserved_bits() {
    let expectations = [
        Transaction::write_read(ADDR, vec![0x01], vec![0xA5]),
        Transaction::write(ADDR, vec![0x01, 0xA1]),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    expander.write([Some(true), None, Some(false), None]).unwrap();

    bus.done();
}

#[test]
fn write_all_sets_every_pin() {
    let expectations = [
        Transaction::write_read(ADDR, vec![0x01], vec![0xA5]),
        Transaction::write(ADDR, vec![0x01, 0xAF]),
        Transaction::write_read(ADDR, vec![0x01], vec![0xAF]),
        Transaction::write(ADDR, vec![0x01, 0xA0]),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    expander.write_all(true).unwrap();
    expander.write_all(false).unwrap();

    bus.done();
}

#[test]
fn modes_unpack_configuration() {
    let expectations = [Transaction::write_read(ADDR, vec![0x03], vec![0xA5])];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    assert_eq!(
        expander.modes().unwrap(),
        [
            PinMode::Input,
            PinMode::Output,
            PinMode::Input,
            PinMode::Output
        ]
    );

    bus.done();
}

#[test]
fn mode_names_and_enums_pack_identically() {
    // Same effective values through both entry forms must produce the same
    // register write.
    let expectations = [
        Transaction::write_read(ADDR, vec![0x03], vec![0xA5]),
        Transaction::write(ADDR, vec![0x03, 0xA9]),
        Transaction::write_read(ADDR, vec![0x03], vec![0xA5]),
        Transaction::write(ADDR, vec![0x03, 0xA9]),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    expander
        .set_modes([Some("input"), Some("output"), Some("output"), Some("input")])
        .unwrap();
    expander
        .set_modes([
            Some(PinMode::Input),
            Some(PinMode::Output),
            Some(PinMode::Output),
            Some(PinMode::Input),
        ])
        .unwrap();

    bus.done();
}

#[test]
fn set_modes_leaves_unspecified_pins() {
    let expectations = [
        Transaction::write_read(ADDR, vec![0x03], vec![0xA5]),
        Transaction::write(ADDR, vec![0x03, 0xA6]),
        // An all-None update still performs the read-modify-write cycle.
        Transaction::write_read(ADDR, vec![0x03], vec![0xA6]),
        Transaction::write(ADDR, vec![0x03, 0xA6]),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    expander
        .set_modes([Some(PinMode::Output), Some(PinMode::Input), None, None])
        .unwrap();
    expander.set_modes::<PinMode>([None, None, None, None]).unwrap();

    bus.done();
}

#[test]
fn set_mode_all_applies_one_mode_to_every_pin() {
    let expectations = [
        Transaction::write_read(ADDR, vec![0x03], vec![0xA5]),
        Transaction::write(ADDR, vec![0x03, 0xAF]),
        Transaction::write_read(ADDR, vec![0x03], vec![0xAF]),
        Transaction::write(ADDR, vec![0x03, 0xA0]),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    expander.set_mode_all(PinMode::Input).unwrap();
    expander.set_mode_all("output").unwrap();

    bus.done();
}

#[test]
fn unknown_mode_name_fails_before_any_transaction() {
    let mut bus = Mock::new(&[]);

    let expander = Pca9536::new(bus.clone());
    let err = expander
        .set_modes([Some("diagonal"), None, None, None])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidMode(_)));

    bus.done();
}

#[test]
fn polarity_inversion_roundtrip() {
    let expectations = [
        Transaction::write_read(ADDR, vec![0x02], vec![0xA5]),
        Transaction::write_read(ADDR, vec![0x02], vec![0xA5]),
        Transaction::write(ADDR, vec![0x02, 0xA6]),
        Transaction::write_read(ADDR, vec![0x02], vec![0xA6]),
        Transaction::write(ADDR, vec![0x02, 0xAF]),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    assert_eq!(
        expander.polarity_inversion().unwrap(),
        [true, false, true, false]
    );
    expander
        .set_polarity_inversion([Some(false), Some(true), None, None])
        .unwrap();
    expander.set_polarity_inversion_all(true).unwrap();

    bus.done();
}

#[test]
fn with_address_overrides_the_default() {
    let expectations = [Transaction::write_read(0x43, vec![0x00], vec![0x0F])];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::with_address(bus.clone(), 0x43);
    assert_eq!(expander.address(), 0x43);
    assert_eq!(expander.read().unwrap(), [true; 4]);

    bus.done();
}

#[test]
fn bus_errors_propagate_unmodified() {
    let expectations = [
        Transaction::write_read(ADDR, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
        Transaction::write_read(ADDR, vec![0x01], vec![0xA5]),
        Transaction::write(ADDR, vec![0x01, 0xA7]).with_error(ErrorKind::Bus),
    ];
    let mut bus = Mock::new(&expectations);

    let expander = Pca9536::new(bus.clone());
    assert!(matches!(expander.read(), Err(Error::Bus(ErrorKind::Other))));
    // A write failure after a successful read leaves no retry behind it.
    assert!(matches!(
        expander.write([None, Some(true), None, None]),
        Err(Error::Bus(ErrorKind::Bus))
    ));

    bus.done();
}

#[test]
fn release_returns_the_bus() {
    let bus = Mock::new(&[]);

    let expander = Pca9536::new(bus);
    let mut returned = expander.release();
    returned.done();
}
