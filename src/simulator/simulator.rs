/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorController;
use crate::shared::ElevatorState;
use crate::simulator::commands::Command;

/**
 * # Simulator
 * Runs one elevator controller on its own thread.
 *
 * The simulator is the only owner of the controller, so requests and drive
 * steps are applied one at a time. Requests arrive on `command_rx`, the
 * controller is driven every `tick`, and a snapshot is sent on `state_tx`
 * whenever the observable state changes (and on `status`).
 *
 * `quit` stops the loop at once. When `command_rx` disconnects the loop keeps
 * driving until every pending request has been served, then stops.
 *
 * # Fields
 * - `controller`:      The car being simulated.
 * - `tick`:            Interval between drive steps.
 * - `command_rx`:      Receives requests from the input thread.
 * - `state_tx`:        Publishes state snapshots.
 * - `last_state`:      Last published snapshot.
 */
pub struct Simulator {
    controller: ElevatorController,
    tick: Duration,
    command_rx: cbc::Receiver<Command>,
    state_tx: cbc::Sender<ElevatorState>,
    last_state: Option<ElevatorState>,
}

impl Simulator {
    pub fn new(
        controller: ElevatorController,
        tick: Duration,
        command_rx: cbc::Receiver<Command>,
        state_tx: cbc::Sender<ElevatorState>,
    ) -> Simulator {
        Simulator {
            controller,
            tick,
            command_rx,
            state_tx,
            last_state: None,
        }
    }

    pub fn run(mut self) {
        let ticker = cbc::tick(self.tick);
        let closed = cbc::never::<Command>();
        let mut draining = false;

        self.publish(false);

        loop {
            let command_rx = if draining {
                closed.clone()
            } else {
                self.command_rx.clone()
            };

            cbc::select! {
                recv(command_rx) -> command => {
                    match command {
                        Ok(Command::Quit) => {
                            info!("Simulator stopped");
                            return;
                        }
                        Ok(command) => self.handle_command(command),
                        Err(_) => {
                            info!("Input closed, serving remaining requests");
                            draining = true;
                        }
                    }
                }
                recv(ticker) -> _ => {
                    self.controller.drive();
                    self.publish(false);
                }
            }

            if draining && self.controller.is_settled() {
                info!("All requests served, simulator stopped");
                return;
            }
        }
    }

    fn handle_command(&mut self, command: Command) {
        let result = match command {
            Command::Press(floor) => self.controller.press_button(floor),
            Command::Call(floor, direction) => self.controller.call(floor, direction),
            Command::Status => {
                self.publish(true);
                return;
            }
            Command::Quit => return,
        };

        match result {
            Ok(()) => self.publish(false),
            Err(e) => warn!("Request rejected: {}", e),
        }
    }

    fn publish(&mut self, force: bool) {
        let state = self.controller.snapshot();
        if !force && self.last_state.as_ref() == Some(&state) {
            return;
        }
        if self.state_tx.send(state.clone()).is_err() {
            warn!("State listener gone");
        }
        self.last_state = Some(state);
    }
}
