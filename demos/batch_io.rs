// Functionally the same as pin_io, but using the whole-device interface.
use linux_embedded_hal::I2cdev;
use pca9536::Pca9536;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let bus = I2cdev::new("/dev/i2c-1")?; // You may need to change the bus
    let expander = Pca9536::new(bus);

    // Pin 0 becomes an input, pin 1 an output; pins 2 and 3 are unchanged.
    expander.set_modes([Some("input"), Some("output"), None, None])?;
    // Set the output of pin 1 to high.
    expander.write([None, Some(true), None, None])?;
    let inputs = expander.read()?;
    println!("Pin 0 input: {}", inputs[0]);
    Ok(())
}
