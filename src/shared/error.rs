/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Errors surfaced synchronously by the elevator controller.
///
/// | Variant                | When                                   | Recovery               |
/// |------------------------|----------------------------------------|------------------------|
/// | `InvalidConfiguration` | bad `n_floors` / `start_floor` at init | fix the configuration  |
/// | `InvalidFloor`         | request for a floor outside the car    | retry with valid floor |
///
/// Neither variant leaves the controller in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElevatorError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid floor '{floor}': expected an integer in 1..={total_floors}")]
    InvalidFloor { floor: String, total_floors: u8 },
}

pub type Result<T> = std::result::Result<T, ElevatorError>;
