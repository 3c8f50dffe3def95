//! miditester: a utility program which sends MIDI bytes
//!
//! Transmits scripted MIDI test sequences to an output port to exercise a
//! receiver's decoder, covering channel voice, system common, realtime,
//! running status, sysex with embedded realtime bytes, and MIDI Time Code.

use std::process::ExitCode;
use std::time::Duration;

use miditester::cli::{self, ParseOutcome};
use miditester::midi::{self, MidiOutputManager, RenderOptions};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let opts = match cli::parse(std::env::args().skip(1)) {
        Ok(ParseOutcome::Help) => {
            println!("{}", cli::help_text());
            return ExitCode::SUCCESS;
        }
        Ok(ParseOutcome::Run(opts)) => opts,
        Err(message) => {
            println!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let mut output = MidiOutputManager::new();

    // Check if there is anything to send to
    let ports = match output.list_ports() {
        Ok(ports) => ports,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    if ports.is_empty() {
        println!("no ports available");
        return ExitCode::SUCCESS;
    }

    if opts.list {
        println!("available ports:");
        for port in &ports {
            println!("  {}: {}", port.index, port.name);
        }
        return ExitCode::SUCCESS;
    }

    println!("running tests: {}", opts.test);
    println!("port: {}", opts.port);
    println!("channel: {}", opts.channel);
    println!("speed: {} ms", opts.speed_ms);

    // decrement from the human-readable channel index
    let channel = opts.channel - 1;

    let queue = match midi::select_tests(&opts.test, channel) {
        Ok(queue) => queue,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = output.connect(opts.port) {
        println!("{}", err);
        return ExitCode::FAILURE;
    }
    if let Some(name) = output.connected_port_name() {
        println!("opened {}", name);
    }

    let render = RenderOptions {
        hex: opts.hex,
        name: opts.name,
    };
    if let Err(err) = midi::run(
        &queue,
        &mut output,
        Duration::from_millis(opts.speed_ms),
        render,
    ) {
        println!("{}", err);
        return ExitCode::FAILURE;
    }

    output.disconnect();
    ExitCode::SUCCESS
}
