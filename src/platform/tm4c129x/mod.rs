//! TM4C129x platform implementation
//!
//! Register-level implementations of the platform traits for the
//! EK-TM4C1294XL LaunchPad, built on the `tm4c129x` peripheral access crate.
//!
//! ## Peripherals
//!
//! - I2C0 on PB2 (SCL) / PB3 (SDA), master mode
//! - UART0 on PA0 (RX) / PA1 (TX), clocked from the PIOSC

pub mod i2c;
pub mod uart;

pub use i2c::Tm4cI2cMaster;
pub use uart::Tm4cUart;

use tm4c129x::SYSCTL;

/// SYSCTL run-mode clock gating bit for GPIO port A
pub(crate) const GPIO_PORT_A: u32 = 1 << 0;
/// SYSCTL run-mode clock gating bit for GPIO port B
pub(crate) const GPIO_PORT_B: u32 = 1 << 1;

/// Gate the clock of a GPIO port on and wait until it is ready
pub(crate) fn enable_gpio_port(sysctl: &SYSCTL, port: u32) {
    sysctl
        .rcgcgpio
        .modify(|r, w| unsafe { w.bits(r.bits() | port) });
    while sysctl.prgpio.read().bits() & port == 0 {
        core::hint::spin_loop();
    }
}

/// Replace the port-control nibble of `pin` with `function`
pub(crate) const fn pctl_value(current: u32, pin: u32, function: u32) -> u32 {
    let shift = pin * 4;
    (current & !(0xF << shift)) | ((function & 0xF) << shift)
}
