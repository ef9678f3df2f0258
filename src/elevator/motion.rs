/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::timer::Timer;
use crate::shared::{Direction, FloorRange};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The car reached this floor.
    Arrived(u8),
    /// The car was asked to leave the shaft; it stays put and should go idle.
    Boundary,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * # Motion
 * Moves the car one floor at a time, each move taking `travel_delay`.
 *
 * Only one move is outstanding at a time. A move is refused while the doors are
 * open, and a pending move is dropped when it completes if the doors are open
 * or have opened since it was scheduled.
 */
#[derive(Debug, Clone)]
pub struct Motion {
    move_timer: Timer,
    heading: Direction,
    door_openings: u64,
    travel_delay: Duration,
}

impl Motion {
    pub fn new(travel_delay: Duration) -> Motion {
        Motion {
            move_timer: Timer::new(),
            heading: Direction::Idle,
            door_openings: 0,
            travel_delay,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_timer.is_active()
    }

    /// Schedules a one floor move. Returns false if nothing was scheduled.
    ///
    /// `door_openings` is the doors' opening count at scheduling time.
    pub fn advance_one_floor(
        &mut self,
        now: Duration,
        direction: Direction,
        doors_open: bool,
        door_openings: u64,
    ) -> bool {
        if doors_open {
            debug!("Move refused, doors are open");
            return false;
        }
        if direction == Direction::Idle {
            return false;
        }
        if self.move_timer.is_active() {
            return false;
        }
        debug!("Moving {:?}, arriving in {:?}", direction, self.travel_delay);
        self.heading = direction;
        self.door_openings = door_openings;
        self.move_timer.start(now, self.travel_delay);
        true
    }

    /// Completes a pending move once its delay has elapsed and reports the
    /// outcome through `on_arrived`. Stale moves are dropped without a report.
    pub fn poll<F: FnOnce(MoveOutcome)>(
        &mut self,
        now: Duration,
        current_floor: u8,
        floors: FloorRange,
        doors_open: bool,
        door_openings: u64,
        on_arrived: F,
    ) {
        if !self.move_timer.fire(now) {
            return;
        }
        if doors_open || door_openings != self.door_openings {
            debug!("Dropping move scheduled before the doors opened");
            return;
        }

        let outcome = match self.heading {
            Direction::Up if current_floor < floors.top() => MoveOutcome::Arrived(current_floor + 1),
            Direction::Down if current_floor > floors.bottom() => MoveOutcome::Arrived(current_floor - 1),
            Direction::Idle => return,
            _ => MoveOutcome::Boundary,
        };

        match outcome {
            MoveOutcome::Arrived(floor) => info!("Arrived at floor {}", floor),
            MoveOutcome::Boundary => warn!("Cannot move {:?} from floor {}", self.heading, current_floor),
        }
        on_arrived(outcome);
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
