/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::registry::RequestRegistry;
use crate::elevator::timer::Timer;
use crate::shared::Direction;

/***************************************/
/*             Public API              */
/***************************************/

/**
 * # Doors
 * Open/close state of the car doors.
 *
 * Opening is immediate and is the only place requests are consumed. Closing
 * takes `close_delay` and is started at most once per opening; repeated calls
 * while a close is pending are ignored.
 *
 * # Fields
 * - `open`:            Whether the doors are currently open.
 * - `close_timer`:     Pending close, if any.
 * - `close_delay`:     Time from `begin_close` until the doors report closed.
 * - `openings`:        Number of times the doors have opened. Used by the motion
 *                      controller to discard moves scheduled before an opening.
 */
#[derive(Debug, Clone)]
pub struct Doors {
    open: bool,
    close_timer: Timer,
    close_delay: Duration,
    openings: u64,
}

impl Doors {
    pub fn new(close_delay: Duration) -> Doors {
        Doors {
            open: false,
            close_timer: Timer::new(),
            close_delay,
            openings: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_closing(&self) -> bool {
        self.close_timer.is_active()
    }

    pub fn openings(&self) -> u64 {
        self.openings
    }

    pub fn open(&mut self, floor: u8, direction: Direction, registry: &mut RequestRegistry) {
        info!("Doors opening at floor {} ({:?})", floor, direction);
        self.open = true;
        self.openings += 1;
        self.close_timer.stop();
        registry.clear_served_at(floor, direction);
    }

    pub fn begin_close(&mut self, now: Duration) {
        if !self.open {
            return;
        }
        if self.close_timer.is_active() {
            debug!("Door close already pending");
            return;
        }
        debug!("Doors closing in {:?}", self.close_delay);
        self.close_timer.start(now, self.close_delay);
    }

    /// Completes a pending close once its delay has elapsed, then calls `on_closed`.
    pub fn poll<F: FnOnce()>(&mut self, now: Duration, on_closed: F) {
        if !self.close_timer.fire(now) {
            return;
        }
        if !self.open {
            debug!("Ignoring stale door close");
            return;
        }
        info!("Doors closed");
        self.open = false;
        on_closed();
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
