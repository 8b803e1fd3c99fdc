//! Display task
//!
//! Owns the OLED and redraws it from the shared screen buffer, either
//! when the controller pushes an update or at the refresh cadence. A
//! failed display is logged and otherwise ignored; the beeps are the
//! primary output and keep working without a readout.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker};

use clinotone_core::config::DisplayConfig;

use crate::channels::SCREEN_UPDATE;
use crate::display::renderer::DISPLAY_ROWS;
use crate::display::{Screen, Sh1106};

/// Shared screen buffer protected by mutex
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Display task - renders the screen buffer to the OLED
#[embassy_executor::task]
pub async fn display_task(mut display: Sh1106<I2c<'static, I2C1, Async>>, config: DisplayConfig) {
    info!("Display task started");

    if let Err(e) = display.init().await {
        warn!("Display init failed: {:?}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.refresh_ms)));

    loop {
        // Redraw when asked to or at the refresh cadence
        match select(SCREEN_UPDATE.wait(), ticker.next()).await {
            Either::First(()) | Either::Second(()) => {}
        }

        {
            let screen = SCREEN_BUFFER.lock().await;
            display.clear();
            for row in 0..DISPLAY_ROWS {
                display.draw_text(row, 0, screen.get_line(row));
            }
        }

        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
