use linux_embedded_hal::I2cdev;
use pca9536::{Pca9536, PinMode};
use std::{thread, time::Duration};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let bus = I2cdev::new("/dev/i2c-1")?; // You may need to change the bus
    let expander = Pca9536::new(bus);

    // Set the mode of all pins to input.
    expander.set_mode_all(PinMode::Input)?;

    println!("Polling inputs (Press Ctrl+C to stop)");
    loop {
        let inputs = expander.read()?;
        println!(
            "Pin inputs: {}, {}, {}, {}",
            inputs[0], inputs[1], inputs[2], inputs[3]
        );
        thread::sleep(Duration::from_secs(1));
    }
}
