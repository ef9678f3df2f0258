/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{CallDirection, Direction, FloorRange, HallCall, Result};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Pending demand for one car.
 *
 * Holds cab requests (floors selected inside the car) and hall calls (floor plus
 * requested direction). Both are kept in insertion order, which is the order the
 * direction planner scans when breaking ties between equally near requests.
 *
 * # Invariants
 * - A floor appears at most once among the cab requests.
 * - A hall call floor always has at least one pending direction, each at most once.
 */
#[derive(Debug, Clone)]
pub struct RequestRegistry {
    floors: FloorRange,
    cab_requests: Vec<u8>,
    hall_calls: Vec<HallCall>,
}

impl RequestRegistry {
    pub fn new(floors: FloorRange) -> RequestRegistry {
        RequestRegistry {
            floors,
            cab_requests: Vec::new(),
            hall_calls: Vec::new(),
        }
    }

    /// Registers a cab request. Pressing an already pending floor is a no-op.
    pub fn press_button(&mut self, floor: u8) -> Result<()> {
        let floor = self.floors.validate(floor)?;
        if !self.cab_requests.contains(&floor) {
            self.cab_requests.push(floor);
        }
        Ok(())
    }

    /// Registers a hall call. Repeating a pending call is a no-op.
    pub fn call(&mut self, floor: u8, direction: CallDirection) -> Result<()> {
        let floor = self.floors.validate(floor)?;
        match self.hall_calls.iter_mut().find(|c| c.floor == floor) {
            Some(call) => {
                if !call.directions.contains(&direction) {
                    call.directions.push(direction);
                }
            }
            None => self.hall_calls.push(HallCall {
                floor,
                directions: vec![direction],
            }),
        }
        Ok(())
    }

    /// Consumes the requests served by a stop at `floor`.
    ///
    /// The cab request is always removed. An idle car serves every hall call at
    /// the floor; a travelling car only serves the call matching its direction.
    pub fn clear_served_at(&mut self, floor: u8, direction: Direction) {
        self.cab_requests.retain(|&f| f != floor);

        let Some(index) = self.hall_calls.iter().position(|c| c.floor == floor) else {
            return;
        };
        let served = match direction {
            Direction::Up => Some(CallDirection::Up),
            Direction::Down => Some(CallDirection::Down),
            Direction::Idle => None,
        };
        match served {
            None => {
                self.hall_calls.remove(index);
            }
            Some(served) => {
                let call = &mut self.hall_calls[index];
                call.directions.retain(|&d| d != served);
                if call.directions.is_empty() {
                    self.hall_calls.remove(index);
                }
            }
        }
    }

    pub fn has_cab_request(&self, floor: u8) -> bool {
        self.cab_requests.contains(&floor)
    }

    pub fn hall_call_at(&self, floor: u8) -> Option<&HallCall> {
        self.hall_calls.iter().find(|c| c.floor == floor)
    }

    /// Every floor with pending demand: cab requests first, then hall calls,
    /// each in insertion order. A floor may appear twice.
    pub fn requested_floors(&self) -> impl Iterator<Item = u8> + '_ {
        self.cab_requests
            .iter()
            .copied()
            .chain(self.hall_calls.iter().map(|c| c.floor))
    }

    pub fn is_empty(&self) -> bool {
        self.cab_requests.is_empty() && self.hall_calls.is_empty()
    }

    /// Pending cab requests, ascending.
    pub fn pending_internal(&self) -> Vec<u8> {
        let mut floors = self.cab_requests.clone();
        floors.sort_unstable();
        floors
    }

    /// Pending hall calls in the order their floors were first called.
    pub fn pending_external(&self) -> Vec<HallCall> {
        self.hall_calls.clone()
    }

    pub fn floors(&self) -> FloorRange {
        self.floors
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
