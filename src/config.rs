//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "focus-dial")]
#[command(about = "A slider-driven focus/break countdown timer served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20560")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Sound looped while a countdown runs
    #[arg(long, default_value = "assets/timer_ticking.wav")]
    pub ticking_cue: PathBuf,

    /// Sound played once when a countdown completes
    #[arg(long, default_value = "assets/timer_bell.wav")]
    pub bell_cue: PathBuf,

    /// Command used to play cue files
    #[arg(long, default_value = "paplay")]
    pub player: String,

    /// Disable all sounds
    #[arg(long)]
    pub no_sound: bool,

    /// Draw the countdown on the terminal
    #[arg(long)]
    pub console: bool,

    /// Start a countdown of this many minutes right away
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=60))]
    pub start: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["focus-dial"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20560");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.player, "paplay");
        assert!(config.start.is_none());
        assert!(!config.no_sound);
    }

    #[test]
    fn start_is_bounded_to_the_dial() {
        let config = Config::try_parse_from(["focus-dial", "--start", "25", "-v"]).unwrap();
        assert_eq!(config.start, Some(25));
        assert_eq!(config.log_level(), "debug");

        assert!(Config::try_parse_from(["focus-dial", "--start", "61"]).is_err());
    }
}
