pub mod commands;
pub mod simulator;

pub use commands::{parse_command, read_commands, Command, CommandError};
pub use simulator::Simulator;
