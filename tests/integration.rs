//! End-to-end bring-up against a simulated BMI160
//!
//! The simulated controller owns a BMI160 register file with the register
//! pointer auto-increment behavior, so the driver, register layer and
//! transport are exercised together exactly as the firmware binary uses them.

use std::cell::Cell;

use tiva_bmi160::communication::i2c::{BusError, BusTransport, RegisterBus};
use tiva_bmi160::communication::Console;
use tiva_bmi160::devices::imu::bmi160::{registers, Axis, Bmi160, DataReadyPoll, PollState};
use tiva_bmi160::platform::{
    Direction, I2cMasterCommand, I2cMasterInterface, PeripheralAddress, Result, UartInterface,
};

/// I2C controller with a BMI160 hanging off it
struct SimulatedBmi160 {
    address: u8,
    regs: [u8; 128],
    pointer: u8,
    direction: Direction,
    addressed: bool,
    tx: u8,
    rx: u8,
    /// First byte of a write transaction sets the pointer
    expect_pointer: bool,
    /// STATUS reads that still report "not ready" after power-up
    not_ready_reads: u32,
    powered: bool,
    busy_polls: Cell<u8>,
    commands: Vec<I2cMasterCommand>,
}

impl SimulatedBmi160 {
    fn new(not_ready_reads: u32) -> Self {
        let mut regs = [0u8; 128];
        regs[registers::CHIP_ID as usize] = registers::CHIP_ID_VALUE;
        Self {
            address: 0x69,
            regs,
            pointer: 0,
            direction: Direction::Write,
            addressed: false,
            tx: 0,
            rx: 0,
            expect_pointer: true,
            not_ready_reads,
            powered: false,
            busy_polls: Cell::new(0),
            commands: Vec::new(),
        }
    }

    fn set_axis(&mut self, axis: Axis, value: i16) {
        let reg = axis.register() as usize;
        self.regs[reg..reg + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn register_write(&mut self, value: u8) {
        let reg = self.pointer;
        self.regs[reg as usize] = value;
        if reg == registers::CMD && value == registers::INIT_COMMAND.value() {
            self.powered = true;
        }
        self.pointer = self.pointer.wrapping_add(1) & 0x7F;
    }

    fn register_read(&mut self) -> u8 {
        let reg = self.pointer;
        let value = if reg == registers::STATUS {
            if self.powered && self.not_ready_reads == 0 {
                0x80
            } else {
                self.not_ready_reads = self.not_ready_reads.saturating_sub(u32::from(self.powered));
                0x00
            }
        } else {
            self.regs[reg as usize]
        };
        self.pointer = self.pointer.wrapping_add(1) & 0x7F;
        value
    }
}

impl I2cMasterInterface for SimulatedBmi160 {
    fn set_target(&mut self, addr: PeripheralAddress, direction: Direction) {
        self.addressed = addr.get() == self.address;
        self.direction = direction;
        self.expect_pointer = true;
    }

    fn put_data(&mut self, byte: u8) {
        self.tx = byte;
    }

    fn data(&mut self) -> u8 {
        self.rx
    }

    fn control(&mut self, command: I2cMasterCommand) {
        assert_eq!(command.direction(), self.direction, "command/direction mismatch");
        self.commands.push(command);
        self.busy_polls.set(2);
        if !self.addressed {
            self.rx = 0xFF;
            return;
        }
        match self.direction {
            Direction::Write if self.expect_pointer => {
                self.pointer = self.tx & 0x7F;
                self.expect_pointer = false;
            }
            Direction::Write => self.register_write(self.tx),
            Direction::Read => self.rx = self.register_read(),
        }
    }

    fn is_busy(&self) -> bool {
        // Idle, busy, then idle again after every command
        match self.busy_polls.get() {
            0 => false,
            n => {
                self.busy_polls.set(n - 1);
                n == 1
            }
        }
    }
}

#[derive(Default)]
struct CaptureUart {
    tx: Vec<u8>,
}

impl UartInterface for CaptureUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_console_bring_up_sequence() {
    let mut sensor = SimulatedBmi160::new(2);
    sensor.set_axis(Axis::AccelX, -1234);

    let mut console = Console::new(CaptureUart::default());
    console.line(format_args!("I2C Hello World!")).unwrap();

    let mut imu = Bmi160::new(&mut sensor);
    console.report_identity(imu.identify()).unwrap();
    imu.initialize().unwrap();
    let polls = imu.wait_for_data_ready(|status| console.report_status(status).unwrap());
    let x = imu.read_axis(Axis::AccelX).unwrap();
    console.report_sample("x accel", x).unwrap();

    assert_eq!(polls, 3);
    assert_eq!(
        String::from_utf8(console.release().tx).unwrap(),
        "I2C Hello World!\r\n\
         ID: 0xd1\r\n\
         Status: 0x0\r\n\
         Status: 0x0\r\n\
         Status: 0x80\r\n\
         x accel: -1234\r\n"
    );
    assert!(sensor.powered);
    assert_eq!(sensor.regs[registers::CMD as usize], 0x15);
}

#[test]
fn test_burst_reads_follow_pointer_auto_increment() {
    let mut sensor = SimulatedBmi160::new(0);
    sensor.set_axis(Axis::AccelX, 100);
    sensor.set_axis(Axis::AccelY, -200);
    sensor.set_axis(Axis::AccelZ, 16384);
    sensor.set_axis(Axis::GyroZ, -1);

    let mut imu = Bmi160::new(&mut sensor);
    let accel = imu.read_accel().unwrap();
    assert_eq!((accel.x, accel.y, accel.z), (100, -200, 16384));
    assert_eq!(imu.read_gyro().unwrap().z, -1);
    assert_eq!(imu.read_axis(Axis::AccelY), Ok(-200));
}

#[test]
fn test_register_bus_writes_land_consecutively() {
    let mut sensor = SimulatedBmi160::new(0);
    let addr = PeripheralAddress::new(0x69);
    let mut regs = RegisterBus::new(BusTransport::new(&mut sensor), addr);

    regs.write_registers(&[registers::ACC_CONF, 0x28, 0x03])
        .unwrap();
    let mut readback = [0u8; 2];
    regs.read_registers(registers::ACC_CONF, &mut readback)
        .unwrap();
    assert_eq!(readback, [0x28, 0x03]);
    assert_eq!(regs.read_register(registers::ACC_RANGE), 0x03);

    assert_eq!(regs.write_registers(&[]), Err(BusError::InvalidLength));
    assert_eq!(regs.read_registers(0x00, &mut []), Err(BusError::InvalidLength));
}

#[test]
fn test_absent_device_reads_idle_bus() {
    let mut sensor = SimulatedBmi160::new(0);
    let mut imu = Bmi160::with_address(&mut sensor, registers::BMI160_ADDR_SDO_LOW);
    assert_eq!(imu.identify(), 0xFF);
}

#[test]
fn test_every_command_matches_transfer_direction() {
    let mut sensor = SimulatedBmi160::new(1);
    let mut imu = Bmi160::new(&mut sensor);
    imu.identify();
    imu.initialize().unwrap();
    imu.wait_for_data_ready(|_| {});
    imu.read_accel().unwrap();

    use I2cMasterCommand::*;
    assert_eq!(
        sensor.commands,
        vec![
            SingleSend,
            SingleReceive,
            BurstSendStart,
            BurstSendFinish,
            SingleSend,
            SingleReceive,
            SingleSend,
            SingleReceive,
            SingleSend,
            BurstReceiveStart,
            BurstReceiveCont,
            BurstReceiveCont,
            BurstReceiveCont,
            BurstReceiveCont,
            BurstReceiveFinish,
        ]
    );
}

#[test]
fn test_poll_machine_over_live_status() {
    let mut sensor = SimulatedBmi160::new(0);
    let mut regs = RegisterBus::new(BusTransport::new(&mut sensor), registers::BMI160_ADDR);
    let mut poll = DataReadyPoll::new();

    assert_eq!(poll.observe(regs.read_register(registers::STATUS)), PollState::NotReady);
    regs.write_register(registers::CMD, 0x15).unwrap();
    assert_eq!(poll.observe(regs.read_register(registers::STATUS)), PollState::Ready);
    assert_eq!(poll.polls(), 2);
}
