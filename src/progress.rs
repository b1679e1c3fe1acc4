//! Activity spinner shown while a request is in flight.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const SLOTS: usize = 5;

/// Frames of the `[:|:::]` sweep, followed by the finished frame.
fn frames() -> Vec<String> {
    let mut frames: Vec<String> = (0..SLOTS)
        .map(|i| format!("[{}|{}]", ":".repeat(i), ":".repeat(SLOTS - 1 - i)))
        .collect();
    frames.push(format!("[{}]", ":".repeat(SLOTS)));
    frames
}

/// A spinner drawn on stderr by a background thread.
///
/// The thread only reads the stop flag; [`Spinner::stop`] (or dropping the
/// spinner) sets it once, waits for the thread and clears the line.
pub struct Spinner {
    bar: Arc<ProgressBar>,
    stop_flag: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        Self::with_target(message, ProgressDrawTarget::stderr())
    }

    /// A spinner that never draws anything.
    pub fn hidden() -> Self {
        Self::with_target("", ProgressDrawTarget::hidden())
    }

    fn with_target(message: &str, target: ProgressDrawTarget) -> Self {
        let bar = Arc::new(ProgressBar::with_draw_target(None, target));
        let frames = frames();
        let frame_refs: Vec<&str> = frames.iter().map(String::as_str).collect();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.yellow.bold} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&frame_refs),
        );
        bar.set_message(message.to_string());

        let stop_flag = Arc::new(AtomicBool::new(false));

        let bar_clone = Arc::clone(&bar);
        let stop_flag_clone = Arc::clone(&stop_flag);
        let ticker = thread::spawn(move || {
            while !stop_flag_clone.load(Ordering::Acquire) {
                bar_clone.tick();
                thread::sleep(TICK_INTERVAL);
            }
        });

        Self {
            bar,
            stop_flag,
            ticker: Some(ticker),
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stop the animation and clear its line. Safe to call more than once.
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Release);
        if let Some(handle) = self.ticker.take() {
            let _ = handle.join();
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
