use crate::constants::TIMER_PERIOD_MS;
use crate::registers::Registers;

/// # Timer driver
/// Paces the delay and sound timers at 60Hz against a wall clock supplied
/// by the shell, independently of the CPU cycle rate.
///
/// Each timer has its own accumulator recording the wall time of its last
/// decrement. When a period has elapsed and the register is nonzero it is
/// decremented exactly once and the accumulator snaps to `now`, so a stall
/// never causes more than one decrement per step and never less than one
/// period between decrements.
pub struct TimerDriver {
    now_ms: u64,
    dt_last_ms: u64,
    st_last_ms: u64,
    started: bool,
}

impl TimerDriver {
    pub fn new() -> Self {
        TimerDriver {
            now_ms: 0,
            dt_last_ms: 0,
            st_last_ms: 0,
            started: false,
        }
    }

    /// Feeds the current monotonic wall clock in milliseconds. The first
    /// call anchors both accumulators.
    pub fn set_wall_clock(&mut self, now_ms: u64) {
        if !self.started {
            self.dt_last_ms = now_ms;
            self.st_last_ms = now_ms;
            self.started = true;
        }
        self.now_ms = now_ms;
    }

    /// Decrements `dt` and `st` if their periods elapsed. Called once per
    /// CPU step.
    pub fn tick(&mut self, regs: &mut Registers) {
        if self.now_ms.saturating_sub(self.dt_last_ms) >= TIMER_PERIOD_MS {
            if regs.dt > 0 {
                regs.dt -= 1;
            }
            self.dt_last_ms = self.now_ms;
        }

        if self.now_ms.saturating_sub(self.st_last_ms) >= TIMER_PERIOD_MS {
            if regs.st > 0 {
                regs.st -= 1;
            }
            self.st_last_ms = self.now_ms;
        }
    }

    /// Forgets the anchor so the next `set_wall_clock` re-anchors.
    pub fn reset(&mut self) {
        *self = TimerDriver::new();
    }
}

impl Default for TimerDriver {
    fn default() -> Self {
        Self::new()
    }
}
