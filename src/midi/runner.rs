//! Test selection and the paced send loop
//!
//! The runner is stateless: each run builds a fresh test queue, walks it
//! top to bottom, and stops on the first transport error. Messages are sent
//! strictly one at a time with a fixed delay between them — receivers need
//! the pacing for MTC and some legacy hardware, so nothing here may batch
//! or reorder.

use std::thread;
use std::time::Duration;

use super::catalog::{get_test, TestQueue, ALL_TESTS};
use super::message::{format_message, RenderOptions};
use super::Error;

/// Where rendered messages get sent. Implemented by
/// [`MidiOutputManager`](super::device::MidiOutputManager) for real ports
/// and by recording mocks in tests.
pub trait MidiSink {
    fn send(&mut self, message: &[u8]) -> Result<(), Error>;
}

/// Build the test queue for a requested test name.
///
/// `"all"` selects every catalog entry flagged for it, in catalog order;
/// any other recognized name selects exactly that test. The channel is
/// zero-based.
pub fn select_tests(name: &str, channel: u8) -> Result<TestQueue, Error> {
    if name == "all" {
        return Ok(ALL_TESTS
            .iter()
            .filter(|t| t.in_all)
            .map(|t| t.build(channel))
            .collect());
    }
    match get_test(name) {
        Some(test) => Ok(vec![test.build(channel)]),
        None => Err(Error::UnknownTest(name.to_string())),
    }
}

/// Transmit every message in the queue in order, printing each set header
/// and rendered message line, sleeping `delay` after each send.
///
/// A send failure aborts the whole run; there is no skip-and-continue.
pub fn run(
    queue: &TestQueue,
    sink: &mut dyn MidiSink,
    delay: Duration,
    opts: RenderOptions,
) -> Result<(), Error> {
    for set in queue {
        println!("{} test", set.name);
        for message in &set.messages {
            println!("  sending {}", format_message(message, opts));
            sink.send(message)?;
            thread::sleep(delay);
        }
    }
    Ok(())
}
