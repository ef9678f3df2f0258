/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::warn;
use std::io::BufRead;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{CallDirection, ElevatorError, FloorRange};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(u8),
    Call(u8, CallDirection),
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', expected press, call, status or quit")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown direction '{0}', expected up or down")]
    Direction(String),

    #[error(transparent)]
    Floor(#[from] ElevatorError),
}

/***************************************/
/*             Public API              */
/***************************************/

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str, floors: FloorRange) -> Result<Option<Command>, CommandError> {
    let line = line.split('#').next().unwrap_or("");
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (name.to_ascii_lowercase().as_str(), args) {
        ("press" | "p", [floor]) => Command::Press(floors.parse(floor)?),
        ("press" | "p", _) => return Err(CommandError::Usage("press <floor>")),
        ("call" | "c", [floor, direction]) => {
            let floor = floors.parse(floor)?;
            let direction =
                CallDirection::parse(direction).ok_or_else(|| CommandError::Direction(direction.to_string()))?;
            Command::Call(floor, direction)
        }
        ("call" | "c", _) => return Err(CommandError::Usage("call <floor> <up|down>")),
        ("status" | "s", []) => Command::Status,
        ("quit" | "q" | "exit", []) => Command::Quit,
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };
    Ok(Some(command))
}

/// Reads commands line by line and forwards them to the simulator.
/// Malformed lines are logged and skipped. Returns after `quit`, at end of
/// input, or once the simulator has stopped listening.
pub fn read_commands<R: BufRead>(reader: R, floors: FloorRange, command_tx: cbc::Sender<Command>) -> std::io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        match parse_command(&line, floors) {
            Ok(Some(command)) => {
                if command_tx.send(command).is_err() || command == Command::Quit {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring input: {}", e),
        }
    }
    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod commands_tests {
    use super::*;
    use std::io::Cursor;

    fn floors() -> FloorRange {
        FloorRange::new(10).unwrap()
    }

    #[test]
    fn test_parse_valid_commands() {
        // Purpose: Each command form parses, with short aliases

        // Assert
        assert_eq!(parse_command("press 5", floors()), Ok(Some(Command::Press(5))));
        assert_eq!(parse_command("  P 10 ", floors()), Ok(Some(Command::Press(10))));
        assert_eq!(
            parse_command("call 3 up", floors()),
            Ok(Some(Command::Call(3, CallDirection::Up)))
        );
        assert_eq!(
            parse_command("c 7 DOWN # lobby", floors()),
            Ok(Some(Command::Call(7, CallDirection::Down)))
        );
        assert_eq!(parse_command("status", floors()), Ok(Some(Command::Status)));
        assert_eq!(parse_command("quit", floors()), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("   ", floors()), Ok(None));
        assert_eq!(parse_command("# comment", floors()), Ok(None));
    }

    #[test]
    fn test_parse_rejects_bad_floors() {
        // Purpose: Out of range and non-integer floors surface as InvalidFloor

        // Assert
        for line in ["press 0", "press 11", "press 2.5", "call x up"] {
            assert!(
                matches!(
                    parse_command(line, floors()),
                    Err(CommandError::Floor(ElevatorError::InvalidFloor { .. }))
                ),
                "{}",
                line
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        // Purpose: Wrong arity, unknown words and idle calls are reported

        // Assert
        assert_eq!(parse_command("press", floors()), Err(CommandError::Usage("press <floor>")));
        assert_eq!(
            parse_command("call 3", floors()),
            Err(CommandError::Usage("call <floor> <up|down>"))
        );
        assert_eq!(
            parse_command("call 3 idle", floors()),
            Err(CommandError::Direction("idle".into()))
        );
        assert_eq!(
            parse_command("jump 3", floors()),
            Err(CommandError::Unknown("jump 3".into()))
        );
    }

    #[test]
    fn test_read_commands_skips_bad_lines_and_stops_at_quit() {
        // Purpose: Only valid commands reach the simulator, and nothing after quit

        // Arrange
        let input = Cursor::new("press 4\npress 40\n\ncall 2 down\nquit\npress 1\n");
        let (command_tx, command_rx) = cbc::unbounded();

        // Act
        read_commands(input, floors(), command_tx).unwrap();

        // Assert
        let received: Vec<Command> = command_rx.iter().collect();
        assert_eq!(
            received,
            vec![
                Command::Press(4),
                Command::Call(2, CallDirection::Down),
                Command::Quit
            ]
        );
    }
}
