//! Start button task
//!
//! Watches the single button for a debounced press and forwards it to the
//! controller. The press only matters before the session starts; there is
//! no stop button.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::channels::{InputEvent, INPUT_CHANNEL};

/// Debounce settle time in milliseconds
const DEBOUNCE_MS: u64 = 20;

/// Button press task
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;

        // Debounce
        Timer::after_millis(DEBOUNCE_MS).await;
        if !button.is_low() {
            continue;
        }

        debug!("Button: press");
        if INPUT_CHANNEL.try_send(InputEvent::Press).is_err() {
            warn!("Input queue full, dropping press");
        }

        // Swallow the release before re-arming
        button.wait_for_rising_edge().await;
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
