pub mod error;
pub mod floor;
pub mod macros;
pub mod structs;

pub use error::ElevatorError;
pub use error::Result;
pub use floor::FloorRange;
pub use structs::Behaviour;
pub use structs::CallDirection;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::HallCall;
