// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure repeat-scheduling state machine.

/// A delayed auto-repeat scheduler advanced by explicit frame steps.
///
/// After [`start`](RepeatTimer::start), the first firing becomes due once
/// `delay_ms` has accumulated, and further firings become due every
/// `interval_ms` thereafter. The timer never invokes anything itself:
/// [`step`](RepeatTimer::step) reports how many firings became due and the
/// caller delivers them (directly, or via
/// [`CallbackTimer`](crate::CallbackTimer)).
///
/// Stopped and freshly constructed timers are equivalent; restarting counts
/// the delay from the restart.
#[derive(Clone, Debug)]
pub struct RepeatTimer {
    delay_ms: f64,
    interval_ms: f64,
    running: bool,
    /// Milliseconds accumulated since `start` while the initial delay is
    /// still pending, or since the most recent delivered fire afterwards.
    accumulated_ms: f64,
    fired_initial: bool,
}

impl RepeatTimer {
    /// Creates a stopped timer with the given initial delay and repeat
    /// interval, both in milliseconds.
    ///
    /// Negative values are treated as zero. A zero interval does not produce
    /// an unbounded number of firings; it degenerates to at most one repeat
    /// per [`step`](RepeatTimer::step) call.
    #[must_use]
    pub fn new(delay_ms: f64, interval_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            interval_ms: interval_ms.max(0.0),
            running: false,
            accumulated_ms: 0.0,
            fired_initial: false,
        }
    }

    /// Returns the configured initial delay in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Returns the configured repeat interval in milliseconds.
    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Returns `true` while the timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arms the timer, counting the initial delay from now.
    ///
    /// Returns `false` and changes nothing if the timer is already running,
    /// so a second `start` can never spawn a second concurrent repeat loop.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.accumulated_ms = 0.0;
        self.fired_initial = false;
        true
    }

    /// Disarms the timer, cancelling all future firings.
    ///
    /// If `fire_if_pending` is `true` and the timer was running, one final
    /// firing is reported. This is what makes a press released before the
    /// initial delay elapses still produce exactly one action ("press and
    /// immediately release = one step"). Returns the number of firings the
    /// caller should deliver (0 or 1); stopping an idle timer returns 0.
    pub fn stop(&mut self, fire_if_pending: bool) -> u32 {
        if !self.running {
            return 0;
        }
        self.running = false;
        self.accumulated_ms = 0.0;
        self.fired_initial = false;
        u32::from(fire_if_pending)
    }

    /// Advances the timer by `dt_ms` milliseconds, returning how many
    /// firings became due.
    ///
    /// A no-op returning 0 while the timer is idle. A step spanning several
    /// intervals reports several firings, so hosts that miss frames still
    /// deliver the expected cadence on average.
    pub fn step(&mut self, dt_ms: f64) -> u32 {
        debug_assert!(dt_ms >= 0.0, "frame steps cannot go backwards");
        if !self.running {
            return 0;
        }
        self.accumulated_ms += dt_ms.max(0.0);

        let mut fires = 0;
        if !self.fired_initial {
            if self.accumulated_ms < self.delay_ms {
                return 0;
            }
            self.fired_initial = true;
            self.accumulated_ms -= self.delay_ms;
            fires += 1;
        }

        if self.interval_ms > 0.0 {
            while self.accumulated_ms >= self.interval_ms {
                self.accumulated_ms -= self.interval_ms;
                fires += 1;
            }
        } else if fires == 0 && dt_ms > 0.0 {
            // Degenerate interval: one repeat per frame step, never a loop.
            self.accumulated_ms = 0.0;
            fires = 1;
        }
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle() {
        let timer = RepeatTimer::new(400.0, 100.0);
        assert!(!timer.is_running());
        assert_eq!(timer.delay_ms(), 400.0);
        assert_eq!(timer.interval_ms(), 100.0);
    }

    #[test]
    fn step_while_idle_is_a_noop() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        assert_eq!(timer.step(1000.0), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn initial_fire_waits_for_delay() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        timer.start();
        assert_eq!(timer.step(399.0), 0);
        assert_eq!(timer.step(1.0), 1);
    }

    #[test]
    fn repeats_at_interval_after_initial_fire() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        timer.start();
        assert_eq!(timer.step(400.0), 1);
        assert_eq!(timer.step(99.0), 0);
        assert_eq!(timer.step(1.0), 1);
        assert_eq!(timer.step(100.0), 1);
    }

    // A frame hiccup spanning several intervals reports every due firing.
    #[test]
    fn large_step_catches_up() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        timer.start();
        assert_eq!(timer.step(700.0), 4);
    }

    #[test]
    fn second_start_does_not_create_a_second_loop() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        assert!(timer.start());
        assert_eq!(timer.step(250.0), 0);
        // Re-arming mid-delay must not reset or double anything.
        assert!(!timer.start());
        assert_eq!(timer.step(150.0), 1);
        assert_eq!(timer.step(300.0), 3);
    }

    #[test]
    fn stop_without_pending_fire() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        timer.start();
        timer.step(450.0);
        assert_eq!(timer.stop(false), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.step(1000.0), 0);
    }

    // Press released before the delay elapses still yields one action.
    #[test]
    fn stop_with_pending_fire_reports_one() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        timer.start();
        timer.step(50.0);
        assert_eq!(timer.stop(true), 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn stop_while_idle_reports_nothing() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        assert_eq!(timer.stop(true), 0);
        assert_eq!(timer.stop(false), 0);
    }

    #[test]
    fn restart_counts_delay_from_restart() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        timer.start();
        timer.step(399.0);
        timer.stop(false);
        assert!(timer.start());
        assert_eq!(timer.step(399.0), 0);
        assert_eq!(timer.step(1.0), 1);
    }

    #[test]
    fn zero_delay_fires_on_first_step() {
        let mut timer = RepeatTimer::new(0.0, 100.0);
        timer.start();
        assert_eq!(timer.step(0.0), 1);
        assert_eq!(timer.step(100.0), 1);
    }

    #[test]
    fn zero_interval_fires_once_per_step() {
        let mut timer = RepeatTimer::new(100.0, 0.0);
        timer.start();
        assert_eq!(timer.step(100.0), 1);
        assert_eq!(timer.step(16.0), 1);
        assert_eq!(timer.step(16.0), 1);
        assert_eq!(timer.step(0.0), 0);
    }

    #[test]
    fn negative_configuration_is_clamped() {
        let mut timer = RepeatTimer::new(-50.0, -10.0);
        timer.start();
        // Delay clamps to zero; interval degenerates to once per step.
        assert_eq!(timer.step(0.0), 1);
        assert_eq!(timer.step(16.0), 1);
    }

    // Fixed-frame accounting: the exact single-loop count over N frames.
    #[test]
    fn frame_accounting_over_simulated_run() {
        let mut timer = RepeatTimer::new(400.0, 100.0);
        timer.start();
        let mut fires = 0;
        // 65 frames at 16 ms = 1040 ms: initial at 400, repeats at
        // 500..=1000, for 1 + 6 firings.
        for _ in 0..65 {
            fires += timer.step(16.0);
        }
        assert_eq!(fires, 7);
    }
}
