//! Periodic confetti replay.
//!
//! Every period the pulse hides the confetti, waits a short gap, then shows it
//! again and bumps a replay counter. The screen restarts its burst whenever the
//! counter moves.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Time between replays.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

/// Time the confetti stays hidden before a replay.
pub const DEFAULT_GAP: Duration = Duration::from_millis(100);

/// Timing of the replay pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub period: Duration,
    pub gap: Duration,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            gap: DEFAULT_GAP,
        }
    }
}

/// What the pulse currently asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseState {
    /// Whether the confetti should be drawn.
    pub visible: bool,
    /// Number of replays so far.
    pub replays: u64,
}

impl Default for PulseState {
    fn default() -> Self {
        Self {
            visible: true,
            replays: 0,
        }
    }
}

/// Handle to a running pulse timer.
///
/// The timer thread stops when the handle is cancelled or dropped; a pending
/// gap is interrupted rather than waited out.
#[derive(Debug)]
pub struct CelebrationPulse {
    /// Shared state updated by the timer thread.
    state: Arc<RwLock<PulseState>>,
    /// Dropping the sender wakes and stops the timer thread.
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl CelebrationPulse {
    /// Start the timer thread.
    pub fn start(timing: PulseTiming) -> Self {
        let state = Arc::new(RwLock::new(PulseState::default()));
        let (stop_tx, stop_rx) = mpsc::channel();

        let shared = state.clone();
        let thread = thread::spawn(move || run(timing, &shared, &stop_rx));
        log::debug!("celebration pulse started ({timing:?})");

        Self {
            state,
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        }
    }

    /// Current pulse state.
    pub fn state(&self) -> PulseState {
        self.state.read().map(|s| *s).unwrap_or_default()
    }

    /// Stop the timer and wait for its thread to exit.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        drop(self.stop_tx.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("celebration pulse thread panicked");
            }
            log::debug!("celebration pulse stopped");
        }
    }
}

impl Drop for CelebrationPulse {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer loop. Returns as soon as the stop channel disconnects.
fn run(timing: PulseTiming, state: &RwLock<PulseState>, stop_rx: &Receiver<()>) {
    while wait(stop_rx, timing.period) {
        if let Ok(mut s) = state.write() {
            s.visible = false;
        }

        if !wait(stop_rx, timing.gap) {
            break;
        }

        if let Ok(mut s) = state.write() {
            s.visible = true;
            s.replays += 1;
        }
    }
}

/// Sleep for `timeout`. Returns false if a stop was requested meanwhile.
fn wait(stop_rx: &Receiver<()>, timeout: Duration) -> bool {
    matches!(stop_rx.recv_timeout(timeout), Err(RecvTimeoutError::Timeout))
}
