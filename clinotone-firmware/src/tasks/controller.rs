//! Main controller task
//!
//! Coordinates the state machine, cadence planning and staleness
//! monitoring. Receives button input, tick signals and tilt readings,
//! updates the beep command for the scheduler and pushes screen updates.

use defmt::*;
use embassy_futures::select::{select3, Either3};

use clinotone_core::cadence::BeepCommand;
use clinotone_core::config::DeviceConfig;
use clinotone_core::state::{Event, State};

use crate::channels::{BEEP_CMD, INPUT_CHANNEL, SCREEN_UPDATE, SENSOR_FAULT, SESSION_START, TILT_READING};
use crate::controller::Controller;
use crate::display::Renderer;
use crate::tasks::display::SCREEN_BUFFER;
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: DeviceConfig) {
    info!("Controller task started");

    let mut controller = Controller::new(&config);
    let mut renderer = Renderer::new();
    let mut last_cmd = BeepCommand::SILENCE;

    // Render boot screen
    renderer.render_boot();
    push_screen(&renderer).await;

    controller.boot_complete();
    info!("Boot complete, waiting for start press");
    render_current_state(&controller, &mut renderer).await;

    loop {
        // Wait for either: input event, tick, or a fresh tilt reading
        match select3(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait(), TILT_READING.wait()).await {
            Either3::First(input) => {
                debug!("Input: {:?}", input);
                if let Some(event) = controller.process_input(input) {
                    debug!("Event: {:?}", event);

                    if event == Event::StartPressed {
                        // One-way gate: release the sensor stream. The
                        // subscription stays up for the rest of the session.
                        SESSION_START.signal(());
                        info!("Session started");
                    }

                    render_current_state(&controller, &mut renderer).await;
                }
            }

            Either3::Second(now_ms) => {
                // Check for hard faults from the sampling side
                if let Some(kind) = SENSOR_FAULT.try_take() {
                    warn!("Sensor fault: {:?}", kind);
                    controller.report_fault(kind);
                }

                // Periodic tick - advance staleness tracking
                controller.tick(now_ms);

                // Keep the live readout moving
                if controller.state() == State::Running || controller.state().is_error() {
                    render_current_state(&controller, &mut renderer).await;
                }
            }

            Either3::Third(reading) => {
                controller.update_tilt(reading);
            }
        }

        // Cadence updates ride on every loop turn; the scheduler only
        // re-arms when the command actually changes
        let cmd = controller.beep_command();
        if cmd != last_cmd {
            BEEP_CMD.signal(cmd);
            last_cmd = cmd;
        }
    }
}

/// Render the screen for the current state and push it to the display
async fn render_current_state(controller: &Controller, renderer: &mut Renderer) {
    match controller.state() {
        State::Boot => renderer.render_boot(),
        State::Idle => renderer.render_idle(),
        State::Running => {
            renderer.render_running(controller.rate_centibeeps(), controller.live_reading());
        }
        State::Error(kind) => renderer.render_error(kind),
    }
    push_screen(renderer).await;
}

/// Copy the rendered screen into the shared buffer
async fn push_screen(renderer: &Renderer) {
    {
        let mut buffer = SCREEN_BUFFER.lock().await;
        *buffer = renderer.screen().clone();
    }
    SCREEN_UPDATE.signal(());
}
