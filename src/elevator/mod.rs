pub mod controller;
pub mod doors;
pub mod motion;
pub mod planner;
pub mod registry;
pub mod timer;

pub use controller::ElevatorController;
pub use doors::Doors;
pub use motion::{Motion, MoveOutcome};
pub use registry::RequestRegistry;
pub use timer::{Clock, ManualClock, SystemClock, Timer};
