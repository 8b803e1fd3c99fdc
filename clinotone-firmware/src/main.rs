//! Clinotone - Audible Inclinometer Firmware
//!
//! Main firmware binary for RP2040-based tilt beepers. The device turns
//! lateral tilt into sound: tone pitch encodes the tilt direction
//! (440 Hz left, 880 Hz right), beep rate the tilt magnitude, for
//! eyes-free leveling and balance tasks.
//!
//! Named after the Greek "klinein" meaning "to lean".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, I2C1};
use embassy_rp::pwm::Pwm;
use {defmt_rtt as _, panic_probe as _};

use clinotone_core::config::DeviceConfig;
use clinotone_drivers::accel::Lis3dh;

use crate::config::parse_config;
use crate::tasks::PwmBuzzer;

/// Embedded default configuration (compiled into firmware)
/// Edit clinotone.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../clinotone.toml");

mod channels;
mod config;
mod controller;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Clinotone firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Parse the embedded configuration
    let config = load_config();
    info!(
        "Config: ladder {}x{} deg, divisor {}, tones {}/{} Hz",
        config.tilt.ladder_len,
        config.tilt.ladder_step_deg,
        config.beep.divisor,
        config.beep.left_freq_hz,
        config.beep.right_freq_hz
    );

    // I2C0: accelerometer (SDA=GPIO4, SCL=GPIO5)
    let i2c0 = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    let sensor = Lis3dh::new(i2c0, config.tilt.sample_hz);

    // I2C1: OLED readout (SDA=GPIO2, SCL=GPIO3)
    let i2c1 = I2c::new_async(p.I2C1, p.PIN_3, p.PIN_2, Irqs, i2c::Config::default());
    let oled = display::Sh1106::new(i2c1);

    // PWM buzzer (GPIO15, slice 7 channel B)
    let pwm = Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, embassy_rp::pwm::Config::default());
    let buzzer = PwmBuzzer::new(pwm);

    // Start button (GPIO16, active low)
    let button = Input::new(p.PIN_16, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::accel_task(sensor, config.tilt)).unwrap();
    spawner.spawn(tasks::beeper_task(buzzer)).unwrap();
    spawner.spawn(tasks::display_task(oled, config.display)).unwrap();
    spawner.spawn(tasks::controller_task(config)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded configuration, falling back to defaults
///
/// clinotone.toml is validated at build time, so a parse failure here
/// should not happen; the defaults keep the device usable if it does.
fn load_config() -> DeviceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            DeviceConfig::default()
        }
    }
}
