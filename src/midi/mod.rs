//! MIDI test transmission
//!
//! Provides status byte constants, MTC encoding, the test-vector catalog,
//! the midir-backed output port manager, and the runner that paces messages
//! out to a sink.

pub mod catalog;
pub mod device;
pub mod message;
pub mod runner;
pub mod timecode;

pub use catalog::{TestQueue, TestSet, ALL_TESTS};
pub use device::{MidiOutputManager, MidiPortInfo};
pub use message::{format_message, status_name, Message, RenderOptions};
pub use runner::{run, select_tests, MidiSink};
pub use timecode::{FrameRate, MtcTime};

use thiserror::Error;

/// Errors from MIDI transmission and test selection.
///
/// There is no retry anywhere: a transport failure ends the run, and
/// configuration failures are caught before anything is sent.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create MIDI output: {0}")]
    Init(#[from] midir::InitError),
    #[error("failed to query MIDI port: {0}")]
    PortInfo(#[from] midir::PortInfoError),
    #[error("no MIDI port with index {0}")]
    PortOutOfRange(usize),
    #[error("failed to open MIDI port: {0}")]
    Connect(String),
    #[error("failed to send MIDI message: {0}")]
    Send(#[from] midir::SendError),
    #[error("no MIDI port is open")]
    NotConnected,
    #[error("unknown test: {0}")]
    UnknownTest(String),
}
