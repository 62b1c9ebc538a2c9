use linux_embedded_hal::I2cdev;
use pca9536::{Pca9536, PinMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let bus = I2cdev::new("/dev/i2c-1")?; // You may need to change the bus
    let expander = Pca9536::new(bus);

    let pin_0 = expander.pin(0)?;
    let pin_1 = expander.pin(1)?;
    pin_0.set_mode(PinMode::Input)?;
    pin_1.set_mode(PinMode::Output)?;
    pin_1.write(true)?;
    println!("Pin 0 input: {}", pin_0.read()?);
    Ok(())
}
