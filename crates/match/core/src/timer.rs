//! Turn-timer state machine.
//!
//! [`TurnTimer`] is a plain value ticked once per second by its owner.
//! There is no interval handle to leak or double-arm: "restart" mutates the
//! value in place, so at most one countdown can ever exist per timer.

/// Phase of the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerPhase {
    /// Not counting down (disabled, stopped, or never started).
    Idle,
    Running,
    /// Still counting down, inside the warning window.
    Warning,
    /// Reached zero; waiting for a restart.
    Expired,
}

/// One-shot transitions reported by [`TurnTimer::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerSignal {
    /// The countdown just entered the warning window.
    WarningStarted,
    /// The countdown just reached zero.
    Expired,
}

/// Per-turn countdown timer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnTimer {
    duration: u32,
    remaining: u32,
    phase: TimerPhase,
    enabled: bool,
}

impl TurnTimer {
    /// Seconds remaining at or below which the warning window begins.
    pub const WARNING_SECS: u32 = 6;

    /// Creates an enabled timer, already running with the full duration.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            phase: TimerPhase::Running,
            enabled: true,
        }
    }

    /// Creates a permanently idle timer for matches played without a clock.
    pub fn disabled() -> Self {
        Self {
            duration: 0,
            remaining: 0,
            phase: TimerPhase::Idle,
            enabled: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running | TimerPhase::Warning)
    }

    pub fn is_warning(&self) -> bool {
        self.phase == TimerPhase::Warning
    }

    /// Advances the countdown by one second.
    ///
    /// Only meaningful while running; ticking an idle or expired timer does
    /// nothing. The warning transition is evaluated against the remaining
    /// time before the decrement, and fires at most once per countdown.
    pub fn tick(&mut self) -> Option<TimerSignal> {
        if !self.is_running() {
            return None;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            self.phase = TimerPhase::Expired;
            return Some(TimerSignal::Expired);
        }

        let entering_warning =
            self.phase == TimerPhase::Running && self.remaining <= Self::WARNING_SECS;

        self.remaining -= 1;

        if entering_warning {
            self.phase = TimerPhase::Warning;
            return Some(TimerSignal::WarningStarted);
        }

        None
    }

    /// Resumes the countdown with the current remaining time.
    ///
    /// A no-op while already running (only one countdown at a time) and for
    /// disabled timers.
    pub fn start(&mut self) {
        if !self.enabled || self.is_running() {
            return;
        }
        self.phase = TimerPhase::Running;
    }

    /// Resets to the full duration and starts a fresh countdown.
    ///
    /// Idempotent and safe from any phase: the warning latch is cleared and
    /// no second countdown can result.
    pub fn restart(&mut self) {
        if !self.enabled {
            return;
        }
        self.remaining = self.duration;
        self.phase = TimerPhase::Running;
    }

    /// Cancels the countdown, leaving the remaining time untouched.
    pub fn stop(&mut self) {
        if self.phase != TimerPhase::Expired {
            self.phase = TimerPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_enters_warning_once() {
        let mut timer = TurnTimer::new(8);

        assert_eq!(timer.tick(), None); // 7
        assert_eq!(timer.tick(), None); // 6
        assert_eq!(timer.phase(), TimerPhase::Running);

        assert_eq!(timer.tick(), Some(TimerSignal::WarningStarted)); // 6 -> 5
        assert_eq!(timer.phase(), TimerPhase::Warning);
        assert_eq!(timer.remaining(), 5);

        // Warning does not refire on subsequent ticks.
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.phase(), TimerPhase::Warning);
    }

    #[test]
    fn expires_at_zero_and_stops_ticking() {
        let mut timer = TurnTimer::new(2);
        assert_eq!(timer.tick(), Some(TimerSignal::WarningStarted)); // 2 -> 1
        assert_eq!(timer.tick(), Some(TimerSignal::Expired));
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.phase(), TimerPhase::Expired);

        // Expired timers are inert until restarted.
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn restart_is_idempotent() {
        let mut timer = TurnTimer::new(30);
        for _ in 0..25 {
            timer.tick();
        }
        assert!(timer.is_warning());

        timer.restart();
        timer.restart();
        assert_eq!(timer.remaining(), 30);
        assert_eq!(timer.phase(), TimerPhase::Running);

        // Warning latch was cleared by the restart.
        for _ in 0..24 {
            timer.tick();
        }
        assert_eq!(timer.tick(), Some(TimerSignal::WarningStarted));
    }

    #[test]
    fn starting_twice_leaves_a_single_countdown() {
        let mut timer = TurnTimer::new(10);
        timer.start();
        timer.start();
        assert_eq!(timer.remaining(), 10);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining(), 9);
    }

    #[test]
    fn stop_keeps_remaining_time() {
        let mut timer = TurnTimer::new(10);
        timer.tick();
        timer.stop();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining(), 9);

        // Stopped timers do not tick.
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining(), 9);

        timer.start();
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), 9);
    }

    #[test]
    fn disabled_timer_is_inert() {
        let mut timer = TurnTimer::disabled();
        assert!(!timer.enabled());
        assert_eq!(timer.tick(), None);
        timer.restart();
        timer.start();
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn full_countdown_from_fifteen() {
        let mut timer = TurnTimer::new(15);
        let mut signals = Vec::new();
        for _ in 0..15 {
            if let Some(signal) = timer.tick() {
                signals.push(signal);
            }
        }
        assert_eq!(
            signals,
            vec![TimerSignal::WarningStarted, TimerSignal::Expired]
        );
        assert_eq!(timer.remaining(), 0);
    }
}
