/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::{ElevatorError, Result};

/***************************************/
/*             Public API              */
/***************************************/

/// The valid floors of a car, `1..=total_floors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRange {
    total_floors: u8,
}

impl FloorRange {
    pub fn new(total_floors: u8) -> Result<FloorRange> {
        if total_floors < 1 {
            return Err(ElevatorError::InvalidConfiguration(format!(
                "n_floors must be >= 1, got {}",
                total_floors
            )));
        }
        Ok(FloorRange { total_floors })
    }

    pub fn total_floors(&self) -> u8 {
        self.total_floors
    }

    pub fn top(&self) -> u8 {
        self.total_floors
    }

    pub fn bottom(&self) -> u8 {
        1
    }

    pub fn contains(&self, floor: u8) -> bool {
        floor >= self.bottom() && floor <= self.top()
    }

    pub fn validate(&self, floor: u8) -> Result<u8> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(self.invalid(floor.to_string()))
        }
    }

    /// Parses user input into a floor. Anything that is not an integer
    /// inside the range is rejected with the text as given.
    pub fn parse(&self, text: &str) -> Result<u8> {
        let trimmed = text.trim();
        match trimmed.parse::<i64>() {
            Ok(n) if n >= self.bottom() as i64 && n <= self.top() as i64 => Ok(n as u8),
            _ => Err(self.invalid(trimmed.to_string())),
        }
    }

    fn invalid(&self, floor: String) -> ElevatorError {
        ElevatorError::InvalidFloor {
            floor,
            total_floors: self.total_floors,
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod floor_tests {
    use super::FloorRange;
    use crate::shared::ElevatorError;

    #[test]
    fn test_zero_floors_is_invalid_configuration() {
        // Purpose: A car must have at least one floor

        // Act
        let result = FloorRange::new(0);

        // Assert
        assert!(matches!(result, Err(ElevatorError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_validate_bounds() {
        // Purpose: Only 1..=total_floors is accepted

        // Arrange
        let range = FloorRange::new(10).unwrap();

        // Assert
        assert_eq!(range.validate(1), Ok(1));
        assert_eq!(range.validate(10), Ok(10));
        assert_eq!(
            range.validate(0),
            Err(ElevatorError::InvalidFloor { floor: "0".into(), total_floors: 10 })
        );
        assert!(range.validate(11).is_err());
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        // Purpose: Text input that is not an in-range integer is an invalid floor

        // Arrange
        let range = FloorRange::new(4).unwrap();

        // Assert
        assert_eq!(range.parse(" 3 "), Ok(3));
        for bad in ["2.5", "abc", "-1", "0", "5", "", "300"] {
            match range.parse(bad) {
                Err(ElevatorError::InvalidFloor { floor, total_floors }) => {
                    assert_eq!(floor, bad.trim());
                    assert_eq!(total_floors, 4);
                }
                other => panic!("expected InvalidFloor for {:?}, got {:?}", bad, other),
            }
        }
    }
}
