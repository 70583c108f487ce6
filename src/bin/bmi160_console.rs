//! BMI160 console bring-up for the EK-TM4C1294XL
//!
//! Brings up UART0 as a 115200 8N1 console and I2C0 as a 100 kHz master,
//! then talks to a BMI160 at 0x69:
//!
//! 1. Print the CHIP_ID
//! 2. Issue the power-up command
//! 3. Poll STATUS, printing every value, until data is ready
//! 4. Print one accelerometer X sample and idle
//!
//! # Usage
//!
//! ```bash
//! cargo build --release --target thumbv7em-none-eabihf --features tm4c129x --bin bmi160_console
//! probe-rs run --chip TM4C1294NCPDT target/thumbv7em-none-eabihf/release/bmi160_console
//! ```

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;
use tiva_bmi160::communication::i2c::BusError;
use tiva_bmi160::communication::Console;
use tiva_bmi160::devices::imu::bmi160::{Axis, Bmi160};
use tiva_bmi160::platform::tm4c129x::{Tm4cI2cMaster, Tm4cUart};
use tiva_bmi160::platform::{I2cConfig, PlatformError, SystemClock, UartConfig};

/// Anything that can stop the bring-up sequence
#[derive(Debug, defmt::Format)]
enum FirmwareError {
    /// Peripherals were already taken
    Peripherals,
    /// Console or controller setup failed
    Platform(PlatformError),
    /// Bus transaction rejected
    Bus(BusError),
}

impl From<PlatformError> for FirmwareError {
    fn from(err: PlatformError) -> Self {
        FirmwareError::Platform(err)
    }
}

impl From<BusError> for FirmwareError {
    fn from(err: BusError) -> Self {
        FirmwareError::Bus(err)
    }
}

fn run() -> Result<(), FirmwareError> {
    let p = tm4c129x::Peripherals::take().ok_or(FirmwareError::Peripherals)?;
    let clock = SystemClock::default();

    let uart = Tm4cUart::new(p.UART0, &p.SYSCTL, &p.GPIO_PORTA_AHB, UartConfig::default())?;
    let mut console = Console::new(uart);
    console.line(format_args!("I2C Hello World!"))?;

    let i2c = Tm4cI2cMaster::new(
        p.I2C0,
        &p.SYSCTL,
        &p.GPIO_PORTB_AHB,
        clock,
        I2cConfig::default(),
    )?;
    let mut imu = Bmi160::new(i2c);

    let id = imu.identify();
    console.report_identity(id)?;

    imu.initialize()?;

    // Console failures while polling are dropped; the poll itself cannot fail
    let polls = imu.wait_for_data_ready(|status| {
        let _ = console.report_status(status);
    });
    defmt::info!("Data ready after {} status reads", polls);

    let x = imu.read_axis(Axis::AccelX)?;
    console.report_sample("x accel", x)?;

    Ok(())
}

#[entry]
fn main() -> ! {
    defmt::info!("BMI160 console starting");

    match run() {
        Ok(()) => defmt::info!("Bring-up complete"),
        Err(e) => defmt::error!("Bring-up failed: {}", e),
    }

    loop {
        cortex_m::asm::wfi();
    }
}
