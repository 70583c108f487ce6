//! TM4C129x UART implementation
//!
//! Console UART0 on PA0/PA1, clocked from the 16 MHz PIOSC so the baud rate
//! does not depend on the system clock setup.

use super::{enable_gpio_port, pctl_value, GPIO_PORT_A};
use crate::platform::{
    traits::{UartConfig, UartInterface},
    Result,
};
use tm4c129x::{GPIO_PORTA_AHB, SYSCTL, UART0};

/// SYSCTL clock gating bit for UART module 0
const UART_MODULE_0: u32 = 1 << 0;
const PIN_RX: u32 = 0;
const PIN_TX: u32 = 1;
/// Port-control function number of UART0 on port A
const PCTL_UART0: u32 = 1;
/// UARTCC clock source: PIOSC
const CC_PIOSC: u32 = 0x5;
/// UARTLCRH: 8 data bits, FIFOs enabled
const LCRH_WLEN_8_FEN: u32 = (0x3 << 5) | (1 << 4);
/// UARTCTL: UART, TX and RX enable
const CTL_ENABLE: u32 = (1 << 0) | (1 << 8) | (1 << 9);
/// UARTFR flags
const FR_BUSY: u32 = 1 << 3;
const FR_TXFF: u32 = 1 << 5;

/// TM4C129x UART0 console
pub struct Tm4cUart {
    uart: UART0,
}

impl Tm4cUart {
    /// Configure PA0/PA1 and UART0 for 8N1 at `config.baud_rate`
    ///
    /// `config.clock` must describe the PIOSC since that is the clock source
    /// selected here.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::InvalidBaudRate)` if the
    /// divisors cannot be derived.
    pub fn new(uart: UART0, sysctl: &SYSCTL, porta: &GPIO_PORTA_AHB, config: UartConfig) -> Result<Self> {
        let (ibrd, fbrd) = config.divisors()?;

        enable_gpio_port(sysctl, GPIO_PORT_A);
        sysctl
            .rcgcuart
            .modify(|r, w| unsafe { w.bits(r.bits() | UART_MODULE_0) });
        while sysctl.pruart.read().bits() & UART_MODULE_0 == 0 {
            core::hint::spin_loop();
        }

        let pins = (1 << PIN_RX) | (1 << PIN_TX);
        porta
            .afsel
            .modify(|r, w| unsafe { w.bits(r.bits() | pins) });
        porta
            .den
            .modify(|r, w| unsafe { w.bits(r.bits() | pins) });
        porta.pctl.modify(|r, w| {
            let value = pctl_value(r.bits(), PIN_RX, PCTL_UART0);
            unsafe { w.bits(pctl_value(value, PIN_TX, PCTL_UART0)) }
        });

        // Baud divisors latch on the LCRH write, with the UART disabled
        uart.ctl.write(|w| unsafe { w.bits(0) });
        uart.cc.write(|w| unsafe { w.bits(CC_PIOSC) });
        uart.ibrd.write(|w| unsafe { w.bits(u32::from(ibrd)) });
        uart.fbrd.write(|w| unsafe { w.bits(u32::from(fbrd)) });
        uart.lcrh.write(|w| unsafe { w.bits(LCRH_WLEN_8_FEN) });
        uart.ctl.write(|w| unsafe { w.bits(CTL_ENABLE) });

        Ok(Self { uart })
    }

    /// Release the UART0 peripheral
    pub fn free(self) -> UART0 {
        self.uart
    }
}

impl UartInterface for Tm4cUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        for &byte in data {
            while self.uart.fr.read().bits() & FR_TXFF != 0 {
                core::hint::spin_loop();
            }
            self.uart.dr.write(|w| unsafe { w.bits(u32::from(byte)) });
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        while self.uart.fr.read().bits() & FR_BUSY != 0 {
            core::hint::spin_loop();
        }
        Ok(())
    }
}
