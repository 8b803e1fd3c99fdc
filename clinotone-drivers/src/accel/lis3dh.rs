//! LIS3DH accelerometer driver (I2C)
//!
//! The LIS3DH is a common 3-axis MEMS accelerometer. This driver runs it
//! in high-resolution mode at ±2g full scale, where one digit is 1 mg,
//! and exposes the lateral (x) axis as the tilt input.
//!
//! Only the subset needed here is implemented: identification, basic
//! configuration and polled data reads. No FIFO, no interrupts, no taps.

use clinotone_core::traits::{AccelError, TiltSensor};

/// Default I2C address (SA0 pulled low; 0x19 with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x18;

/// Value of the WHO_AM_I register
pub const DEVICE_ID: u8 = 0x33;

/// LIS3DH register addresses
pub mod reg {
    /// Identification register
    pub const WHO_AM_I: u8 = 0x0F;
    /// Data rate, power mode and axis enable
    pub const CTRL_REG1: u8 = 0x20;
    /// Full scale, high-resolution mode, block data update
    pub const CTRL_REG4: u8 = 0x23;
    /// Data ready and overrun flags
    pub const STATUS_REG: u8 = 0x27;
    /// First output register (X low byte)
    pub const OUT_X_L: u8 = 0x28;
}

/// Auto-increment flag for multi-byte register access
const AUTO_INCREMENT: u8 = 0x80;

/// STATUS_REG: new X/Y/Z data available
const STATUS_ZYXDA: u8 = 0x08;

/// CTRL_REG1: enable X, Y and Z axes
const CTRL1_XYZ_EN: u8 = 0x07;

/// CTRL_REG4: block data update + high-resolution mode, ±2g
const CTRL4_BDU_HR: u8 = 0x88;

/// Millig per m/s² scaling: 1 digit = 1 mg in high-resolution ±2g mode
const MS2_PER_MG: f32 = 9.81 / 1000.0;

/// Map a sampling rate to the CTRL_REG1 output-data-rate bits
///
/// Picks the lowest sensor rate that still covers the requested rate.
pub fn odr_bits(sample_hz: u16) -> u8 {
    let odr = match sample_hz {
        0..=1 => 0b0001,    // 1 Hz
        2..=10 => 0b0010,   // 10 Hz
        11..=25 => 0b0011,  // 25 Hz
        26..=50 => 0b0100,  // 50 Hz
        51..=100 => 0b0101, // 100 Hz
        101..=200 => 0b0110, // 200 Hz
        _ => 0b0111,        // 400 Hz
    };
    (odr << 4) | CTRL1_XYZ_EN
}

/// Convert one output register pair to a reading in mg
///
/// Output data is 16-bit little-endian, left-justified; high-resolution
/// mode yields 12 significant bits at 1 mg per digit.
pub fn raw_to_mg(lo: u8, hi: u8) -> i16 {
    i16::from_le_bytes([lo, hi]) >> 4
}

/// Convert a reading in mg to m/s²
pub fn mg_to_ms2(mg: i16) -> f32 {
    f32::from(mg) * MS2_PER_MG
}

/// LIS3DH driver
pub struct Lis3dh<I2C> {
    i2c: I2C,
    address: u8,
    sample_hz: u16,
}

impl<I2C> Lis3dh<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a driver on the default address
    pub fn new(i2c: I2C, sample_hz: u16) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS, sample_hz)
    }

    /// Create a driver on a specific address (0x18 or 0x19)
    pub fn with_address(i2c: I2C, address: u8, sample_hz: u16) -> Self {
        Self {
            i2c,
            address,
            sample_hz,
        }
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), AccelError> {
        self.i2c
            .write(self.address, &[reg, value])
            .await
            .map_err(|_| AccelError::Bus)
    }

    async fn read_regs(&mut self, start: u8, buf: &mut [u8]) -> Result<(), AccelError> {
        let sub = if buf.len() > 1 {
            start | AUTO_INCREMENT
        } else {
            start
        };
        self.i2c
            .write_read(self.address, &[sub], buf)
            .await
            .map_err(|_| AccelError::Bus)
    }

    /// Check whether a fresh sample is available
    pub async fn data_ready(&mut self) -> Result<bool, AccelError> {
        let mut status = [0u8];
        self.read_regs(reg::STATUS_REG, &mut status).await?;
        Ok(status[0] & STATUS_ZYXDA != 0)
    }

    /// Read all three axes in mg
    pub async fn accel_mg(&mut self) -> Result<(i16, i16, i16), AccelError> {
        let mut out = [0u8; 6];
        self.read_regs(reg::OUT_X_L, &mut out).await?;
        Ok((
            raw_to_mg(out[0], out[1]),
            raw_to_mg(out[2], out[3]),
            raw_to_mg(out[4], out[5]),
        ))
    }

    /// Release the bus
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> TiltSensor for Lis3dh<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    async fn init(&mut self) -> Result<(), AccelError> {
        let mut id = [0u8];
        self.read_regs(reg::WHO_AM_I, &mut id).await?;
        if id[0] != DEVICE_ID {
            return Err(AccelError::WrongChip);
        }

        self.write_reg(reg::CTRL_REG4, CTRL4_BDU_HR).await?;
        self.write_reg(reg::CTRL_REG1, odr_bits(self.sample_hz))
            .await
    }

    async fn read_lateral_ms2(&mut self) -> Result<f32, AccelError> {
        let (x, _, _) = self.accel_mg().await?;
        Ok(mg_to_ms2(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odr_bits_cover_requested_rate() {
        assert_eq!(odr_bits(1), 0x17);
        assert_eq!(odr_bits(10), 0x27);
        assert_eq!(odr_bits(25), 0x37);
        assert_eq!(odr_bits(26), 0x47);
        assert_eq!(odr_bits(100), 0x57);
        assert_eq!(odr_bits(400), 0x77);
        assert_eq!(odr_bits(1000), 0x77);
    }

    #[test]
    fn test_raw_to_mg() {
        // 1g on a perfectly calibrated part: 0x4000 left-justified
        assert_eq!(raw_to_mg(0x00, 0x40), 1024);
        assert_eq!(raw_to_mg(0x00, 0xC0), -1024);
        assert_eq!(raw_to_mg(0x00, 0x00), 0);
        // One digit is 16 counts before the shift
        assert_eq!(raw_to_mg(0x10, 0x00), 1);
        assert_eq!(raw_to_mg(0xF0, 0xFF), -1);
    }

    #[test]
    fn test_mg_to_ms2() {
        // No f32::abs in no_std; bracket the expected values instead
        assert!(mg_to_ms2(1000) > 9.8099 && mg_to_ms2(1000) < 9.8101);
        assert!(mg_to_ms2(-1000) < -9.8099 && mg_to_ms2(-1000) > -9.8101);
        assert_eq!(mg_to_ms2(0), 0.0);
    }
}
