/* 3rd party libraries */
use clap::Arg;
use crossbeam_channel as cbc;
use log::{error, info};
use std::io;
use std::thread::Builder;

/* Custom libraries */
use lift::config;
use lift::elevator::{ElevatorController, SystemClock};
use lift::shared::ElevatorState;
use lift::simulator::{read_commands, Command, Simulator};
use lift::unwrap_or_exit;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = clap::Command::new("lift")
        .about("Single elevator dispatch simulator")
        .long_about(
            "Reads commands from stdin, one per line:\n  \
             press <floor>\n  \
             call <floor> <up|down>\n  \
             status\n  \
             quit\n\
             and prints the car state as JSON lines.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));

    // Create the controller
    let controller = unwrap_or_exit!(ElevatorController::with_clock(&config.elevator, SystemClock::new()));
    let floors = controller.floors();
    info!(
        "Simulating {} floors starting at floor {}",
        config.elevator.n_floors, config.elevator.start_floor
    );

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (state_tx, state_rx) = cbc::unbounded::<ElevatorState>();

    // Start the simulator
    let simulator = Simulator::new(controller, config.simulator.tick(), command_rx, state_tx);
    let simulator_thread = unwrap_or_exit!(Builder::new()
        .name("elevator_simulator".into())
        .spawn(move || simulator.run()));

    // Start the command reader
    let reader_thread = unwrap_or_exit!(Builder::new().name("command_reader".into()).spawn(move || {
        if let Err(e) = read_commands(io::stdin().lock(), floors, command_tx) {
            error!("Failed to read commands: {}", e);
        }
    }));

    // Print every published state until the simulator stops
    for state in state_rx.iter() {
        match serde_json::to_string(&state) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("Failed to serialize state: {}", e),
        }
    }

    if simulator_thread.join().is_err() {
        error!("Simulator thread panicked");
    }
    // The reader may still be blocked on stdin after quit; it ends with the process.
    drop(reader_thread);
}
