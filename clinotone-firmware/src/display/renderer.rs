//! Screen rendering
//!
//! Builds the text screens for each session state.
//!
//! The OLED shows 8 rows of 21 characters. The readout is plain text:
//! beep rate with two decimals, orientation label and angle with two
//! decimals, matching the centidegree/centibeep fixed-point carried
//! through the core.

use core::fmt::Write;

use heapless::String;

use clinotone_core::state::ErrorKind;
use clinotone_core::tilt::TiltReading;

/// Display dimensions in characters
pub const DISPLAY_ROWS: u8 = 8;
pub const DISPLAY_COLS: u8 = 21;

/// A screen buffer that can be drawn to the display
#[derive(Clone)]
pub struct Screen {
    /// Lines of text (8 rows max)
    lines: [String<22>; 8],
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
        }
    }

    /// Clear the screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Set text at a specific row
    pub fn set_line(&mut self, row: u8, text: &str) {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].clear();
            let _ =
                self.lines[row as usize].push_str(&text[..text.len().min(DISPLAY_COLS as usize)]);
        }
    }

    /// Get a line of text
    pub fn get_line(&self, row: u8) -> &str {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].as_str()
        } else {
            ""
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a centi-scaled value with two decimals, e.g. 4500 -> "45.00"
fn format_centi(value: u32) -> String<12> {
    let mut out = String::new();
    let _ = write!(out, "{}.{:02}", value / 100, value % 100);
    out
}

/// Screen renderer for the session states
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    /// Create a new renderer
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the rendered screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Boot banner
    pub fn render_boot(&mut self) {
        self.screen.clear();
        self.screen.set_line(0, "Clinotone");
        let mut line: String<22> = String::new();
        let _ = write!(line, "fw v{}", env!("CARGO_PKG_VERSION"));
        self.screen.set_line(1, &line);
        self.screen.set_line(3, "starting...");
    }

    /// Idle prompt: everything is gated behind the start press
    pub fn render_idle(&mut self) {
        self.screen.clear();
        self.screen.set_line(0, "Clinotone");
        self.screen.set_line(3, "Press to start");
        self.screen.set_line(5, "pitch = direction");
        self.screen.set_line(6, "rate  = tilt angle");
    }

    /// Live readout while running
    ///
    /// `reading` is None when the sample stream is stale; the readout
    /// then shows a no-signal notice instead of numbers.
    pub fn render_running(&mut self, rate_centibeeps: u32, reading: Option<TiltReading>) {
        self.screen.clear();
        self.screen.set_line(0, "Clinotone");

        match reading {
            Some(reading) => {
                let mut line: String<22> = String::new();
                let _ = write!(line, "Rate  {} bps", format_centi(rate_centibeeps));
                self.screen.set_line(3, &line);

                let mut line: String<22> = String::new();
                let _ = write!(
                    line,
                    "Tilt  {} {} deg",
                    reading.direction.label(),
                    format_centi(u32::from(reading.angle_centideg))
                );
                self.screen.set_line(4, &line);
            }
            None => {
                self.screen.set_line(3, "-- no signal --");
            }
        }
    }

    /// Fault notice
    pub fn render_error(&mut self, kind: ErrorKind) {
        self.screen.clear();
        self.screen.set_line(0, "Clinotone");
        match kind {
            ErrorKind::SensorMissing => {
                self.screen.set_line(3, "! sensor fault");
                self.screen.set_line(4, "accel not responding");
            }
            ErrorKind::ConfigError => {
                self.screen.set_line(3, "! config error");
            }
        }
        self.screen.set_line(6, "power-cycle to retry");
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinotone_core::tilt::TiltDirection;

    #[test]
    fn test_format_centi() {
        assert_eq!(format_centi(0).as_str(), "0.00");
        assert_eq!(format_centi(50).as_str(), "0.50");
        assert_eq!(format_centi(100).as_str(), "1.00");
        assert_eq!(format_centi(190).as_str(), "1.90");
        assert_eq!(format_centi(4500).as_str(), "45.00");
        assert_eq!(format_centi(4507).as_str(), "45.07");
    }

    #[test]
    fn test_running_readout() {
        let mut renderer = Renderer::new();
        let reading = TiltReading {
            direction: TiltDirection::Left,
            angle_centideg: 4500,
        };
        renderer.render_running(100, Some(reading));

        assert_eq!(renderer.screen().get_line(3), "Rate  1.00 bps");
        assert_eq!(renderer.screen().get_line(4), "Tilt  LEFT 45.00 deg");
    }

    #[test]
    fn test_no_signal_readout() {
        let mut renderer = Renderer::new();
        renderer.render_running(0, None);
        assert_eq!(renderer.screen().get_line(3), "-- no signal --");
    }

    #[test]
    fn test_lines_are_truncated() {
        let mut screen = Screen::new();
        screen.set_line(0, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(screen.get_line(0).len(), DISPLAY_COLS as usize);
    }

    #[test]
    fn test_error_screens() {
        let mut renderer = Renderer::new();
        renderer.render_error(ErrorKind::SensorMissing);
        assert_eq!(renderer.screen().get_line(3), "! sensor fault");

        renderer.render_error(ErrorKind::ConfigError);
        assert_eq!(renderer.screen().get_line(3), "! config error");
    }
}
