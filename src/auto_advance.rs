use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
    Stopped, // Terminal, never fires again
}

/// Repeating automatic-advance task, driven by the host's frame time.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    period: Duration,
    elapsed: Duration,
    state: TimerState,
}

impl AutoAdvance {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            state: TimerState::Running,
        }
    }

    pub fn paused(period: Duration) -> Self {
        Self {
            state: TimerState::Paused,
            ..Self::new(period)
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Adds `dt` and returns how many periods completed.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.state != TimerState::Running || self.period.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == TimerState::Paused {
            self.state = TimerState::Running;
        }
    }

    /// Flips between running and paused. Returns the new state.
    pub fn toggle(&mut self) -> TimerState {
        match self.state {
            TimerState::Running => self.pause(),
            TimerState::Paused => self.resume(),
            TimerState::Stopped => {}
        }
        self.state
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
        self.elapsed = Duration::ZERO;
    }

    /// Restarts the current period.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(5000);

    #[test]
    fn fires_once_per_period() {
        let mut timer = AutoAdvance::new(PERIOD);
        assert_eq!(timer.tick(Duration::from_millis(4999)), 0);
        assert_eq!(timer.tick(Duration::from_millis(1)), 1);
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.tick(Duration::from_millis(2500)), 0);
        assert_eq!(timer.tick(Duration::from_millis(2500)), 1);
    }

    #[test]
    fn long_frame_fires_for_every_period() {
        let mut timer = AutoAdvance::new(PERIOD);
        assert_eq!(timer.tick(Duration::from_millis(11_000)), 2);
        assert_eq!(timer.elapsed(), Duration::from_millis(1000));
    }

    #[test]
    fn paused_timer_keeps_elapsed_time() {
        let mut timer = AutoAdvance::new(PERIOD);
        timer.tick(Duration::from_millis(3000));
        timer.pause();
        assert_eq!(timer.tick(Duration::from_secs(60)), 0);
        assert_eq!(timer.state(), TimerState::Paused);

        timer.resume();
        assert_eq!(timer.tick(Duration::from_millis(2000)), 1);
    }

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = AutoAdvance::new(PERIOD);
        timer.tick(Duration::from_millis(4000));
        timer.stop();
        timer.resume();
        assert_eq!(timer.toggle(), TimerState::Stopped);
        assert_eq!(timer.tick(Duration::from_secs(60)), 0);
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn toggle_and_reset() {
        let mut timer = AutoAdvance::paused(PERIOD);
        assert_eq!(timer.toggle(), TimerState::Running);
        timer.tick(Duration::from_millis(4000));
        timer.reset();
        assert_eq!(timer.tick(Duration::from_millis(4000)), 0);
        assert_eq!(timer.toggle(), TimerState::Paused);
    }

    #[test]
    fn zero_period_never_fires() {
        let mut timer = AutoAdvance::new(Duration::ZERO);
        assert_eq!(timer.tick(Duration::from_secs(1)), 0);
    }
}
