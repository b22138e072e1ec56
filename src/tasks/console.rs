//! Console renderer for the countdown

use std::io::Write;
use tokio::sync::watch;

use crate::state::TimerStatus;

const BAR_WIDTH: usize = 20;

/// Redraw the countdown line on stdout whenever the status changes
pub async fn console_task(mut status_rx: watch::Receiver<TimerStatus>) {
    loop {
        let line = render_line(&status_rx.borrow_and_update());
        print!("\r{}", line);
        let _ = std::io::stdout().flush();

        if status_rx.changed().await.is_err() {
            println!();
            break;
        }
    }
}

/// One console line for `status`, e.g. `⏱️  24:59 [░░░…] 0%`
pub fn render_line(status: &TimerStatus) -> String {
    match status.progress() {
        Some(progress) => {
            let filled = ((progress * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
            format!(
                "⏱️  {} [{}{}] {:>3}%",
                status.display.clock(),
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled),
                (progress * 100.0) as u8
            )
        }
        None if status.completions > 0 && status.display.clock() == "00:00" => {
            format!("🔔 {} Time's up! [{}] 100%", status.display.clock(), "█".repeat(BAR_WIDTH))
        }
        None => format!("⏸️  {} {:width$}", status.display.clock(), "", width = BAR_WIDTH + 7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerPhase;

    fn running(selected: u32, remaining: u64, clock: (&str, &str)) -> TimerStatus {
        let mut status = TimerStatus::new();
        status.phase = TimerPhase::Running;
        status.active = true;
        status.selected_minutes = Some(selected);
        status.remaining_millis = Some(remaining);
        status.display.minutes = clock.0.to_string();
        status.display.seconds = clock.1.to_string();
        status
    }

    #[test]
    fn running_line_shows_progress() {
        let line = render_line(&running(10, 300_000, ("05", "00")));
        assert!(line.contains("05:00"));
        assert!(line.contains(&"█".repeat(10)));
        assert!(line.ends_with(" 50%"));
    }

    #[test]
    fn completed_line_rings() {
        let mut status = TimerStatus::new();
        status.completions = 1;
        assert!(render_line(&status).contains("Time's up!"));
    }

    #[test]
    fn idle_line_shows_selection() {
        let mut status = TimerStatus::new();
        status.display.minutes = "12".to_string();
        assert!(render_line(&status).contains("12:00"));
        assert!(!render_line(&status).contains('%'));
    }
}
