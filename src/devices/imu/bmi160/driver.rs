//! BMI160 I2C Driver Implementation
//!
//! Blocking register-level access: identify, power up, poll for data ready
//! and read raw axis samples.

use super::poll::{DataReadyPoll, PollState};
use super::registers::{self, Axis, Command, DataStatus, AXIS_BYTES, BMI160_ADDR, INIT_COMMAND};
use crate::communication::i2c::{BusError, BusTransport, RegisterBus};
use crate::platform::traits::{I2cMasterInterface, PeripheralAddress};
use nalgebra::Vector3;

/// BMI160 I2C Driver
///
/// Owns the register view of the sensor. Every operation blocks until the
/// bus transfers complete.
///
/// # Type Parameters
///
/// * `M` - I2C master controller (or `&mut` to one)
pub struct Bmi160<M> {
    regs: RegisterBus<M>,
}

impl<M: I2cMasterInterface> Bmi160<M> {
    /// Create a driver at the default address (0x69, SDO high)
    pub fn new(master: M) -> Self {
        Self::with_address(master, BMI160_ADDR)
    }

    /// Create a driver at an explicit address
    pub fn with_address(master: M, address: PeripheralAddress) -> Self {
        Self {
            regs: RegisterBus::new(BusTransport::new(master), address),
        }
    }

    /// Address the driver talks to
    pub fn address(&self) -> PeripheralAddress {
        self.regs.address()
    }

    /// Borrow the underlying controller
    pub fn master(&self) -> &M {
        self.regs.transport().master()
    }

    /// Release the controller
    pub fn release(self) -> M {
        self.regs.release().release()
    }

    /// Read CHIP_ID
    ///
    /// The raw byte is returned as-is; a value other than 0xD1 is reported,
    /// not rejected.
    pub fn identify(&mut self) -> u8 {
        let id = self.regs.read_register(registers::CHIP_ID);
        if id == registers::CHIP_ID_VALUE {
            crate::log_info!("BMI160 detected (CHIP_ID: {:#x})", id);
        } else {
            crate::log_warn!(
                "Unexpected CHIP_ID: {:#x} (expected {:#x})",
                id,
                registers::CHIP_ID_VALUE
            );
        }
        id
    }

    /// Issue the power-up command
    ///
    /// Writes `[CMD, 0x15]` as one burst. No settling delay follows; callers
    /// poll `STATUS` instead.
    pub fn initialize(&mut self) -> Result<(), BusError> {
        self.send_command(INIT_COMMAND)
    }

    /// Write a command to the CMD register
    pub fn send_command(&mut self, command: Command) -> Result<(), BusError> {
        crate::log_debug!("BMI160 command {:#x}", command.value());
        self.regs.write_register(registers::CMD, command.value())
    }

    /// Read the raw STATUS register
    pub fn data_status(&mut self) -> u8 {
        self.regs.read_register(registers::STATUS)
    }

    /// Read STATUS as flags
    pub fn status_flags(&mut self) -> DataStatus {
        DataStatus::from_raw(self.data_status())
    }

    /// Block until STATUS reports a fresh sample
    ///
    /// Every status byte read is handed to `observer` before it is evaluated.
    /// Returns the number of status reads. There is no attempt bound: a
    /// sensor that never becomes ready spins forever.
    pub fn wait_for_data_ready<F: FnMut(u8)>(&mut self, mut observer: F) -> u32 {
        let mut poll = DataReadyPoll::new();
        loop {
            let status = self.data_status();
            crate::log_trace!("BMI160 status {:#x}", status);
            observer(status);
            if poll.observe(status) == PollState::Ready {
                return poll.polls();
            }
        }
    }

    /// Read one axis as a signed 16-bit sample
    ///
    /// The two data bytes come back low byte first.
    pub fn read_axis(&mut self, axis: Axis) -> Result<i16, BusError> {
        let mut raw = [0u8; AXIS_BYTES];
        self.regs.read_registers(axis.register(), &mut raw)?;
        Ok(i16::from_le_bytes(raw))
    }

    /// Read all three accelerometer axes in one burst
    pub fn read_accel(&mut self) -> Result<Vector3<i16>, BusError> {
        self.read_vector(Axis::AccelX)
    }

    /// Read all three gyroscope axes in one burst
    pub fn read_gyro(&mut self) -> Result<Vector3<i16>, BusError> {
        self.read_vector(Axis::GyroX)
    }

    fn read_vector(&mut self, first: Axis) -> Result<Vector3<i16>, BusError> {
        let mut raw = [0u8; 3 * AXIS_BYTES];
        self.regs.read_registers(first.register(), &mut raw)?;
        Ok(Vector3::new(
            i16::from_le_bytes([raw[0], raw[1]]),
            i16::from_le_bytes([raw[2], raw[3]]),
            i16::from_le_bytes([raw[4], raw[5]]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cEvent, MockI2cMaster};
    use crate::platform::traits::{Direction, I2cMasterCommand::*};

    fn target(direction: Direction) -> I2cEvent {
        I2cEvent::SetTarget {
            addr: 0x69,
            direction,
        }
    }

    #[test]
    fn test_identify_returns_raw_byte() {
        for id in [0xD1, 0x00, 0xFF] {
            let mut i2c = MockI2cMaster::new();
            i2c.set_read_data(&[id]);
            assert_eq!(Bmi160::new(&mut i2c).identify(), id);
            assert_eq!(i2c.written_bytes(), vec![registers::CHIP_ID]);
        }
    }

    #[test]
    fn test_initialize_sends_single_burst() {
        let mut i2c = MockI2cMaster::new();
        Bmi160::new(&mut i2c).initialize().unwrap();

        assert_eq!(
            i2c.events(),
            vec![
                target(Direction::Write),
                I2cEvent::PutData(0x7E),
                I2cEvent::Control(BurstSendStart),
                I2cEvent::PutData(0x15),
                I2cEvent::Control(BurstSendFinish),
            ]
        );
    }

    #[test]
    fn test_send_command() {
        let mut i2c = MockI2cMaster::new();
        Bmi160::new(&mut i2c).send_command(Command::SoftReset).unwrap();
        assert_eq!(i2c.written_bytes(), vec![0x7E, 0xB6]);
    }

    #[test]
    fn test_read_axis_decodes_little_endian() {
        let cases: [([u8; 2], i16); 4] = [
            ([0x34, 0x12], 4660),
            ([0xFF, 0xFF], -1),
            ([0x00, 0x80], -32768),
            ([0xFF, 0x7F], 32767),
        ];
        for (raw, expected) in cases {
            let mut i2c = MockI2cMaster::new();
            i2c.set_read_data(&raw);
            assert_eq!(Bmi160::new(&mut i2c).read_axis(Axis::AccelX), Ok(expected));
        }
    }

    #[test]
    fn test_read_axis_points_at_axis_register() {
        let mut i2c = MockI2cMaster::new();
        i2c.set_read_data(&[0x00, 0x00]);
        Bmi160::new(&mut i2c).read_axis(Axis::AccelX).unwrap();

        assert_eq!(
            i2c.events(),
            vec![
                target(Direction::Write),
                I2cEvent::PutData(0x12),
                I2cEvent::Control(SingleSend),
                target(Direction::Read),
                I2cEvent::Control(BurstReceiveStart),
                I2cEvent::DataGet(0x00),
                I2cEvent::Control(BurstReceiveFinish),
                I2cEvent::DataGet(0x00),
            ]
        );
    }

    #[test]
    fn test_wait_for_data_ready_counts_status_reads() {
        let mut i2c = MockI2cMaster::new();
        i2c.set_read_data(&[0x00, 0x00, 0x80, 0x55]);

        let mut seen = Vec::new();
        let polls = Bmi160::new(&mut i2c).wait_for_data_ready(|status| seen.push(status));

        assert_eq!(polls, 3);
        assert_eq!(seen, vec![0x00, 0x00, 0x80]);
        assert_eq!(i2c.pending_read_data(), 1);
        assert_eq!(i2c.written_bytes(), vec![registers::STATUS; 3]);
    }

    #[test]
    fn test_wait_for_data_ready_immediate() {
        let mut i2c = MockI2cMaster::new();
        i2c.set_read_data(&[0xC0]);
        assert_eq!(Bmi160::new(&mut i2c).wait_for_data_ready(|_| {}), 1);
    }

    #[test]
    fn test_status_flags() {
        let mut i2c = MockI2cMaster::new();
        i2c.set_read_data(&[0xC0]);
        let flags = Bmi160::new(&mut i2c).status_flags();
        assert!(flags.contains(DataStatus::DRDY_ACC | DataStatus::DRDY_GYR));
    }

    #[test]
    fn test_read_accel_and_gyro() {
        let mut i2c = MockI2cMaster::new();
        i2c.set_read_data(&[
            0x01, 0x00, 0xFF, 0xFF, 0x00, 0x40, // accel
            0x10, 0x00, 0x00, 0x80, 0x02, 0x00, // gyro
        ]);
        let mut imu = Bmi160::new(&mut i2c);

        assert_eq!(imu.read_accel(), Ok(Vector3::new(1, -1, 16384)));
        assert_eq!(imu.read_gyro(), Ok(Vector3::new(16, -32768, 2)));
        assert_eq!(
            i2c.written_bytes(),
            vec![registers::DATA_ACC_X_L, registers::DATA_GYR_X_L]
        );
    }

    #[test]
    fn test_alternate_address_and_release() {
        let imu = Bmi160::with_address(MockI2cMaster::new(), registers::BMI160_ADDR_SDO_LOW);
        assert_eq!(imu.address().get(), 0x68);
        assert_eq!(imu.master().completions(), 0);
        let i2c = imu.release();
        assert!(i2c.events().is_empty());
    }
}
