//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use clinotone_core::cadence::BeepCommand;
use clinotone_core::state::ErrorKind;
use clinotone_core::tilt::TiltReading;

/// Channel capacity for input events from the start button
const INPUT_CHANNEL_SIZE: usize = 4;

/// Input events from the device's single button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Debounced short press
    Press,
}

/// Input events from the start button
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Latest tilt reading (updated by accel task)
/// Value is the mapped reading, or None for a failed sensor read
pub static TILT_READING: Signal<CriticalSectionRawMutex, Option<TiltReading>> = Signal::new();

/// Beep cadence command (updated by controller)
pub static BEEP_CMD: Signal<CriticalSectionRawMutex, BeepCommand> = Signal::new();

/// One-shot gate: the user pressed start, sampling may begin
pub static SESSION_START: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Hard sensor fault (updated by accel task on a failed probe)
pub static SENSOR_FAULT: Signal<CriticalSectionRawMutex, ErrorKind> = Signal::new();

/// Signal that the screen buffer changed and should be redrawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
