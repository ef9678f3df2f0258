/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::registry::RequestRegistry;
use crate::shared::{CallDirection, Direction};

/***************************************/
/*             Public API              */
/***************************************/

/*
 * SCAN direction planning.
 *
 * Pure functions over the registry. A car keeps its direction while there is
 * demand ahead of it, reverses when there is only demand behind it, and goes
 * idle when there is none. An idle car heads for the nearest request.
 */

pub fn has_requests_above(registry: &RequestRegistry, floor: u8) -> bool {
    registry.requested_floors().any(|f| f > floor)
}

pub fn has_requests_below(registry: &RequestRegistry, floor: u8) -> bool {
    registry.requested_floors().any(|f| f < floor)
}

/// True if a car at `floor` travelling in `direction` should open its doors.
pub fn should_stop(registry: &RequestRegistry, floor: u8, direction: Direction) -> bool {
    if registry.has_cab_request(floor) {
        return true;
    }
    let Some(call) = registry.hall_call_at(floor) else {
        return false;
    };
    match direction {
        Direction::Up => call.directions.contains(&CallDirection::Up),
        Direction::Down => call.directions.contains(&CallDirection::Down),
        Direction::Idle => !call.directions.is_empty(),
    }
}

pub fn next_direction(current_floor: u8, direction: Direction, registry: &RequestRegistry) -> Direction {
    match direction {
        Direction::Up => {
            // Continue in current direction of travel if there are any further requests
            if has_requests_above(registry, current_floor) {
                Direction::Up
            } else if has_requests_below(registry, current_floor) {
                Direction::Down
            } else {
                Direction::Idle
            }
        }
        Direction::Down => {
            if has_requests_below(registry, current_floor) {
                Direction::Down
            } else if has_requests_above(registry, current_floor) {
                Direction::Up
            } else {
                Direction::Idle
            }
        }
        Direction::Idle => match nearest_request(registry, current_floor) {
            Some(f) if f > current_floor => Direction::Up,
            Some(f) if f < current_floor => Direction::Down,
            _ => Direction::Idle,
        },
    }
}

/// The pending floor closest to `current_floor`.
///
/// Ties go to the first floor met when scanning cab requests before hall
/// calls, each in the order they were registered.
pub fn nearest_request(registry: &RequestRegistry, current_floor: u8) -> Option<u8> {
    let mut best: Option<u8> = None;
    for floor in registry.requested_floors() {
        let closer = match best {
            None => true,
            Some(b) => floor.abs_diff(current_floor) < b.abs_diff(current_floor),
        };
        if closer {
            best = Some(floor);
        }
    }
    best
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod planner_tests {
    use super::*;
    use crate::shared::FloorRange;

    fn setup_registry() -> RequestRegistry {
        RequestRegistry::new(FloorRange::new(10).unwrap())
    }

    #[test]
    fn test_requests_above_and_below_are_strict() {
        // Purpose: A request at the current floor is neither above nor below

        // Arrange
        let mut registry = setup_registry();
        registry.press_button(5).unwrap();

        // Assert
        assert!(!has_requests_above(&registry, 5));
        assert!(!has_requests_below(&registry, 5));
        assert!(has_requests_above(&registry, 4));
        assert!(has_requests_below(&registry, 6));
    }

    #[test]
    fn test_should_stop() {
        // Purpose: Cab requests always stop the car, hall calls only in their direction

        // Arrange
        let mut registry = setup_registry();
        registry.press_button(2).unwrap();
        registry.call(4, CallDirection::Down).unwrap();

        // Assert
        assert!(should_stop(&registry, 2, Direction::Up));
        assert!(should_stop(&registry, 2, Direction::Down));
        assert!(!should_stop(&registry, 4, Direction::Up));
        assert!(should_stop(&registry, 4, Direction::Down));
        assert!(should_stop(&registry, 4, Direction::Idle));
        assert!(!should_stop(&registry, 3, Direction::Idle));
    }

    #[test]
    fn test_next_direction_scan() {
        // Purpose: Keep direction while demand lies ahead, reverse when only behind

        // Arrange
        let mut registry = setup_registry();
        registry.press_button(2).unwrap();
        registry.press_button(8).unwrap();

        // Assert
        assert_eq!(next_direction(5, Direction::Up, &registry), Direction::Up);
        assert_eq!(next_direction(5, Direction::Down, &registry), Direction::Down);
        assert_eq!(next_direction(9, Direction::Up, &registry), Direction::Down);
        assert_eq!(next_direction(1, Direction::Down, &registry), Direction::Up);
    }

    #[test]
    fn test_next_direction_without_requests_is_idle() {
        // Purpose: No demand means no travel, whatever the previous direction

        // Arrange
        let registry = setup_registry();

        // Assert
        for direction in [Direction::Up, Direction::Down, Direction::Idle] {
            assert_eq!(next_direction(5, direction, &registry), Direction::Idle);
        }
    }

    #[test]
    fn test_idle_heads_for_nearest_request() {
        // Purpose: An idle car picks the closest pending floor

        // Arrange
        let mut registry = setup_registry();
        registry.press_button(9).unwrap();
        registry.call(4, CallDirection::Up).unwrap();

        // Assert
        assert_eq!(nearest_request(&registry, 6), Some(4));
        assert_eq!(next_direction(6, Direction::Idle, &registry), Direction::Down);
        assert_eq!(next_direction(8, Direction::Idle, &registry), Direction::Up);
        assert_eq!(next_direction(4, Direction::Idle, &registry), Direction::Idle);
    }

    #[test]
    fn test_idle_tie_break_prefers_first_registered() {
        // Purpose: Equidistant requests resolve to the one scanned first

        // Arrange
        let mut cab_first = setup_registry();
        cab_first.press_button(7).unwrap();
        cab_first.call(3, CallDirection::Up).unwrap();

        let mut press_order = setup_registry();
        press_order.press_button(3).unwrap();
        press_order.press_button(7).unwrap();

        let mut hall_only = setup_registry();
        hall_only.call(7, CallDirection::Down).unwrap();
        hall_only.call(3, CallDirection::Up).unwrap();

        // Assert
        assert_eq!(next_direction(5, Direction::Idle, &cab_first), Direction::Up);
        assert_eq!(next_direction(5, Direction::Idle, &press_order), Direction::Down);
        assert_eq!(next_direction(5, Direction::Idle, &hall_only), Direction::Up);
    }
}
