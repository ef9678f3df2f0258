/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/***************************************/
/*             Clocks                  */
/***************************************/

/// Source of logical time for the controller's timers.
pub trait Clock: Send {
    /// Time elapsed since the clock's origin.
    fn elapsed(&self) -> Duration;
}

/// Wall clock, used by the simulator.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time, so a test
/// can keep one handle and give the other to the controller.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock::default()
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    pub fn set(&self, to: Duration) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = to;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/***************************************/
/*             Timer                   */
/***************************************/

/// One-shot timer owned by a single controller part.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    pub fn new() -> Timer {
        Timer::default()
    }

    pub fn start(&mut self, now: Duration, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the deadline has been reached, then deactivates.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod timer_tests {
    use super::*;

    #[test]
    fn test_timer_fires_once_after_deadline() {
        // Purpose: A started timer fires exactly once, at or after its deadline

        // Arrange
        let mut timer = Timer::new();
        timer.start(Duration::from_secs(1), Duration::from_secs(3));

        // Assert
        assert!(timer.is_active());
        assert!(!timer.fire(Duration::from_secs(2)));
        assert!(timer.fire(Duration::from_secs(4)));
        assert!(!timer.is_active());
        assert!(!timer.fire(Duration::from_secs(10)));
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        // Purpose: Stopping discards the pending deadline

        // Arrange
        let mut timer = Timer::new();
        timer.start(Duration::ZERO, Duration::from_millis(10));

        // Act
        timer.stop();

        // Assert
        assert!(!timer.fire(Duration::from_secs(1)));
    }

    #[test]
    fn test_manual_clock_is_shared() {
        // Purpose: Clones of a manual clock observe the same time

        // Arrange
        let clock = ManualClock::new();
        let handle = clock.clone();

        // Act
        handle.advance(Duration::from_millis(1500));

        // Assert
        assert_eq!(clock.elapsed(), Duration::from_millis(1500));

        // Act
        handle.set(Duration::from_secs(7));

        // Assert
        assert_eq!(clock.elapsed(), Duration::from_secs(7));
    }
}
