/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "moving")]
    Moving,
    #[serde(rename = "doorOpen")]
    DoorOpen,
}

/// Travel direction of the car. `Idle` means no travel is planned.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

/// Direction requested by a hall call button.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Up,
    Down,
}

impl CallDirection {
    pub fn parse(text: &str) -> Option<CallDirection> {
        match text.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Some(CallDirection::Up),
            "down" | "d" => Some(CallDirection::Down),
            _ => None,
        }
    }
}

impl From<CallDirection> for Direction {
    fn from(item: CallDirection) -> Self {
        match item {
            CallDirection::Up => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }
}

/// Pending hall calls at one floor, directions in the order they were pressed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HallCall {
    pub floor: u8,
    pub directions: Vec<CallDirection>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub behaviour: Behaviour,
    pub floor: u8,
    pub direction: Direction,
    #[serde(rename = "doorsOpen")]
    pub doors_open: bool,
    #[serde(rename = "cabRequests")]
    pub cab_requests: Vec<u8>,
    #[serde(rename = "hallCalls")]
    pub hall_calls: Vec<HallCall>,
}

impl ElevatorState {
    pub fn new(start_floor: u8) -> ElevatorState {
        ElevatorState {
            behaviour: Behaviour::Idle,
            floor: start_floor,
            direction: Direction::Idle,
            doors_open: false,
            cab_requests: Vec::new(),
            hall_calls: Vec::new(),
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use super::*;

    #[test]
    fn test_state_serializes_with_wire_names() {
        // Purpose: Snapshots published by the simulator use camelCase keys and lowercase enums

        // Arrange
        let mut state = ElevatorState::new(3);
        state.behaviour = Behaviour::DoorOpen;
        state.doors_open = true;
        state.cab_requests = vec![5];
        state.hall_calls = vec![HallCall { floor: 7, directions: vec![CallDirection::Down] }];

        // Act
        let json = serde_json::to_value(&state).unwrap();

        // Assert
        assert_eq!(
            json,
            serde_json::json!({
                "behaviour": "doorOpen",
                "floor": 3,
                "direction": "idle",
                "doorsOpen": true,
                "cabRequests": [5],
                "hallCalls": [{ "floor": 7, "directions": ["down"] }],
            })
        );
    }

    #[test]
    fn test_call_direction_parse() {
        // Purpose: Hall call directions parse case-insensitively, idle is not a call direction

        // Assert
        assert_eq!(CallDirection::parse("UP"), Some(CallDirection::Up));
        assert_eq!(CallDirection::parse("d"), Some(CallDirection::Down));
        assert_eq!(CallDirection::parse("idle"), None);
        assert_eq!(Direction::from(CallDirection::Down), Direction::Down);
    }
}
