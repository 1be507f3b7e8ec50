use std::time::{Duration, Instant};

/// How long a scan keeps the gate locked before a new one is accepted.
pub const DEFAULT_LOCK_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum DebounceState {
    Armed,
    Locked { since: Instant },
}

/// Gate ensuring one physical scan gesture triggers at most one lookup.
///
/// A gesture in front of the camera produces a burst of identical frame
/// events; the first one locks the gate and the rest are dropped until the
/// lock window elapses or the host re-arms the gate explicitly (unlock
/// timer fired, app back in the foreground).
///
/// Time is passed in by the caller so hosts and tests control the clock.
#[derive(Debug)]
pub struct ScanDebouncer {
    state: DebounceState,
    window: Duration,
}

impl ScanDebouncer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_LOCK_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            state: DebounceState::Armed,
            window,
        }
    }

    /// Scan-detected event. Returns whether the caller now owns the gate and
    /// may trigger a lookup. A lock older than the window is treated as
    /// expired, so a host without its own unlock timer still re-arms.
    pub fn try_lock(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::Armed => {
                self.state = DebounceState::Locked { since: now };
                true
            }
            DebounceState::Locked { since } if now.duration_since(since) >= self.window => {
                self.state = DebounceState::Locked { since: now };
                true
            }
            DebounceState::Locked { .. } => false,
        }
    }

    /// Timeout-elapsed or app-foregrounded event: re-arm immediately.
    pub fn unlock(&mut self) {
        self.state = DebounceState::Armed;
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, DebounceState::Locked { .. })
    }
}

impl Default for ScanDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
