use std::time::{Duration, Instant};

/// Fixed-interval tick source.
///
/// The first poll fires immediately. Each fire schedules the next deadline one
/// interval after the moment it fired, so a stall yields a single late tick
/// rather than a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next: Option<Instant>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next: None }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deadline of the next tick, `None` before the first fire.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns true when a tick is due at `now`, rescheduling if so.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now < deadline => false,
            _ => {
                self.next = Some(now + self.interval);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS16: Duration = Duration::from_millis(16);

    #[test]
    fn first_poll_fires_immediately() {
        let mut s = TickScheduler::new(MS16);
        assert_eq!(s.deadline(), None);
        let t0 = Instant::now();
        assert!(s.poll(t0));
        assert_eq!(s.deadline(), Some(t0 + MS16));
    }

    #[test]
    fn polls_before_deadline_do_not_fire() {
        let mut s = TickScheduler::new(MS16);
        let t0 = Instant::now();
        s.poll(t0);
        assert!(!s.poll(t0));
        assert!(!s.poll(t0 + Duration::from_millis(15)));
        assert!(s.poll(t0 + MS16));
    }

    #[test]
    fn stall_yields_one_tick_per_poll() {
        let mut s = TickScheduler::new(MS16);
        let t0 = Instant::now();
        s.poll(t0);

        let late = t0 + Duration::from_millis(500);
        assert!(s.poll(late));
        assert!(!s.poll(late));
        assert_eq!(s.deadline(), Some(late + MS16));
    }

    #[test]
    fn n_ticks_over_n_intervals() {
        let mut s = TickScheduler::new(MS16);
        let t0 = Instant::now();
        let fired = (0..100u32)
            .filter(|i| s.poll(t0 + MS16 * *i))
            .count();
        assert_eq!(fired, 100);
        assert_eq!(s.interval(), MS16);
    }
}
