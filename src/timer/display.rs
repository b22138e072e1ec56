//! Display sink contract and remaining-time formatting

use super::duration::{Minutes, RemainingTime};

/// Passive render target for the countdown.
///
/// The core only writes to it and never reads anything back.
pub trait DisplaySink {
    fn set_minutes(&mut self, text: &str);
    fn set_seconds(&mut self, text: &str);
    fn set_slider_position(&mut self, position: Minutes);
}

/// Two-digit minutes text, e.g. `"02"` for 125 000 ms
pub fn format_minutes(remaining: RemainingTime) -> String {
    format!("{:02}", remaining.minutes())
}

/// Two-digit seconds text, e.g. `"05"` for 125 000 ms
pub fn format_seconds(remaining: RemainingTime) -> String {
    format!("{:02}", remaining.seconds())
}

/// Write the minutes and seconds texts for `remaining`
pub fn render_time<D: DisplaySink + ?Sized>(display: &mut D, remaining: RemainingTime) {
    display.set_minutes(&format_minutes(remaining));
    display.set_seconds(&format_seconds(remaining));
}

/// Write the texts and move the slider to match `remaining`
pub fn render_countdown<D: DisplaySink + ?Sized>(display: &mut D, remaining: RemainingTime) {
    render_time(display, remaining);
    display.set_slider_position(Minutes::from_remaining(remaining));
}
