/* Modules */
pub mod config;
pub mod elevator;
pub mod shared;
pub mod simulator;

pub use elevator::ElevatorController;
pub use shared::{CallDirection, Direction, ElevatorError, ElevatorState};
