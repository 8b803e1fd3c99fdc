//! Accelerometer sampling task
//!
//! Waits for the session gate, probes the sensor once, then samples the
//! lateral axis at the configured rate and publishes mapped tilt readings.
//! Read failures are not retried; the controller times the stream out and
//! the readout shows no signal until samples come back.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Ticker};

use clinotone_core::config::TiltConfig;
use clinotone_core::state::ErrorKind;
use clinotone_core::tilt::map_sample;
use clinotone_core::traits::TiltSensor;
use clinotone_drivers::accel::Lis3dh;

use crate::channels::{SENSOR_FAULT, SESSION_START, TILT_READING};

/// Accelerometer sampling task
#[embassy_executor::task]
pub async fn accel_task(mut sensor: Lis3dh<I2c<'static, I2C0, Async>>, config: TiltConfig) {
    info!("Accel task started");

    // No sampling before the user's start press
    SESSION_START.wait().await;

    if let Err(e) = sensor.init().await {
        warn!("Accelerometer probe failed: {:?}", e);
        SENSOR_FAULT.signal(ErrorKind::SensorMissing);
        return;
    }
    info!("Accelerometer online, sampling at {} Hz", config.sample_hz);

    let period_ms = 1000 / u32::from(config.sample_hz.max(1));
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(period_ms.max(1))));

    loop {
        ticker.next().await;

        match sensor.read_lateral_ms2().await {
            Ok(x) => {
                let reading = map_sample(x);
                trace!(
                    "x = {} m/s2 -> {:?} {} centideg",
                    x,
                    reading.direction,
                    reading.angle_centideg
                );
                TILT_READING.signal(Some(reading));
            }
            Err(e) => {
                warn!("Accelerometer read failed: {:?}", e);
                TILT_READING.signal(None);
            }
        }
    }
}
