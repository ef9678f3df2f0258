/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::elevator::doors::Doors;
use crate::elevator::motion::{Motion, MoveOutcome};
use crate::elevator::planner;
use crate::elevator::registry::RequestRegistry;
use crate::elevator::timer::{Clock, SystemClock};
use crate::shared::{Behaviour, CallDirection, Direction, ElevatorError, ElevatorState, FloorRange, HallCall, Result};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Single car dispatch controller.
 *
 * Owns the pending requests and the car state and advances them one `drive()`
 * at a time. Door and move delays are measured on the injected `Clock`; their
 * completions are applied at the start of the next `drive()`.
 *
 * Each drive step:
 * 1. Apply any door close or move whose delay has elapsed.
 * 2. If the doors are open, begin closing them.
 * 3. Otherwise, if the current floor has a request to serve, open the doors.
 * 4. Otherwise pick a direction and, unless idle, move one floor.
 *
 * # Fields
 * - `floors`:      Valid floor range of the car.
 * - `floor`:       Floor the car is at.
 * - `direction`:   Planned direction of travel.
 * - `registry`:    Pending cab requests and hall calls.
 * - `doors`:       Door state and close timer.
 * - `motion`:      Pending move, if any.
 * - `clock`:       Time source for the timers.
 */
pub struct ElevatorController {
    floors: FloorRange,
    floor: u8,
    direction: Direction,
    registry: RequestRegistry,
    doors: Doors,
    motion: Motion,
    clock: Box<dyn Clock>,
}

impl ElevatorController {
    /// A controller with the default delays running on the system clock.
    pub fn new(total_floors: u8, start_floor: u8) -> Result<ElevatorController> {
        ElevatorController::with_clock(&ElevatorConfig::new(total_floors, start_floor), SystemClock::new())
    }

    pub fn with_clock<C: Clock + 'static>(config: &ElevatorConfig, clock: C) -> Result<ElevatorController> {
        let floors = FloorRange::new(config.n_floors)?;
        if !floors.contains(config.start_floor) {
            return Err(ElevatorError::InvalidConfiguration(format!(
                "start_floor must be in 1..={}, got {}",
                config.n_floors, config.start_floor
            )));
        }

        Ok(ElevatorController {
            floors,
            floor: config.start_floor,
            direction: Direction::Idle,
            registry: RequestRegistry::new(floors),
            doors: Doors::new(config.door_close_delay()),
            motion: Motion::new(config.travel_delay()),
            clock: Box::new(clock),
        })
    }

    pub fn press_button(&mut self, floor: u8) -> Result<()> {
        self.registry.press_button(floor)?;
        debug!("Cab request for floor {}", floor);
        Ok(())
    }

    pub fn call(&mut self, floor: u8, direction: CallDirection) -> Result<()> {
        self.registry.call(floor, direction)?;
        debug!("Hall call at floor {} going {:?}", floor, direction);
        Ok(())
    }

    pub fn drive(&mut self) {
        let now = self.clock.elapsed();
        self.complete_timers(now);

        if self.doors.is_open() {
            self.doors.begin_close(now);
            return;
        }

        if planner::should_stop(&self.registry, self.floor, self.direction) {
            self.doors.open(self.floor, self.direction, &mut self.registry);
            return;
        }

        let next = planner::next_direction(self.floor, self.direction, &self.registry);
        if next != self.direction {
            info!("Direction {:?} -> {:?} at floor {}", self.direction, next, self.floor);
            self.direction = next;
        }
        if next == Direction::Idle {
            return;
        }
        self.motion
            .advance_one_floor(now, next, self.doors.is_open(), self.doors.openings());
    }

    fn complete_timers(&mut self, now: Duration) {
        let floor = self.floor;
        let registry = &self.registry;
        let direction = &mut self.direction;
        self.doors.poll(now, || {
            if !planner::has_requests_above(registry, floor) && !planner::has_requests_below(registry, floor) {
                *direction = Direction::Idle;
            }
        });

        let current_floor = &mut self.floor;
        let direction = &mut self.direction;
        self.motion.poll(
            now,
            floor,
            self.floors,
            self.doors.is_open(),
            self.doors.openings(),
            |outcome| match outcome {
                MoveOutcome::Arrived(f) => *current_floor = f,
                MoveOutcome::Boundary => *direction = Direction::Idle,
            },
        );
    }

    pub fn current_floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn doors_open(&self) -> bool {
        self.doors.is_open()
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_moving()
    }

    /// Nothing pending, nothing in progress.
    pub fn is_settled(&self) -> bool {
        self.direction == Direction::Idle
            && !self.doors.is_open()
            && !self.motion.is_moving()
            && self.registry.is_empty()
    }

    pub fn total_floors(&self) -> u8 {
        self.floors.total_floors()
    }

    pub fn floors(&self) -> FloorRange {
        self.floors
    }

    pub fn pending_internal(&self) -> Vec<u8> {
        self.registry.pending_internal()
    }

    pub fn pending_external(&self) -> Vec<HallCall> {
        self.registry.pending_external()
    }

    pub fn snapshot(&self) -> ElevatorState {
        let behaviour = if self.doors.is_open() {
            Behaviour::DoorOpen
        } else if self.motion.is_moving() {
            Behaviour::Moving
        } else {
            Behaviour::Idle
        };

        ElevatorState {
            behaviour,
            floor: self.floor,
            direction: self.direction,
            doors_open: self.doors.is_open(),
            cab_requests: self.pending_internal(),
            hall_calls: self.pending_external(),
        }
    }
}
