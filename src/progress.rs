// Progress indicator: an ora-style spinner cycle around one operation.
// Status lines go to stderr; stdout stays reserved for rendered payloads.

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start spinning with a styled in-flight message.
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        bar.set_message(format!("{}", message.yellow().bold()));
        bar.enable_steady_tick(Duration::from_millis(120));
        Spinner { bar }
    }

    /// Hide the spinner while `f` writes to the terminal, then resume.
    pub fn suspend<F: FnOnce()>(&self, f: F) {
        self.bar.suspend(f);
    }

    /// Stop the spinner and print a success line.
    pub fn succeed(self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {message}", "✔".green());
    }

    /// Stop the spinner and print a failure line.
    pub fn fail(self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", "✖".red(), message.red());
    }
}

/// One-off status line outside the spinner cycle, used after saves.
pub fn notify(message: &str) {
    eprintln!("{}", message.green().bold());
}
