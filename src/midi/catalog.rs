//! Test-vector catalog
//!
//! Builders for the named MIDI test sets the tool can transmit. Each builder
//! is pure: given a zero-based channel it returns the same ordered byte
//! sequences every time. Order within a set is part of the test contract —
//! the running status set in particular only means something to a receiver
//! if its messages arrive exactly as listed.

use super::message::*;
use super::timecode::{FrameRate, MtcTime};

/// A named, ordered batch of messages to transmit
#[derive(Debug, Clone, PartialEq)]
pub struct TestSet {
    pub name: &'static str,
    pub messages: Vec<Message>,
}

/// The ordered test sets selected for one run
pub type TestQueue = Vec<TestSet>;

/// MTC quarter-frame reference timestamp used by the system and timecode
/// sets: 01:02:03:02 @ 25 fps, reading 01:02:03:04 on a receiver that adds
/// the conventional 2 frame delay.
const QUARTER_FRAME_TIME: MtcTime = MtcTime {
    hour: 1,
    minute: 2,
    second: 3,
    frame: 2,
    rate: FrameRate::Fps25,
};

/// MTC Full Frame reference timestamp: 06:07:08:09 @ 30 fps
const FULL_FRAME_TIME: MtcTime = MtcTime {
    hour: 6,
    minute: 7,
    second: 8,
    frame: 9,
    rate: FrameRate::Fps30,
};

/// One message per channel voice kind, status byte = base opcode + channel,
/// with mid-range data values.
pub fn channel_messages(channel: u8) -> TestSet {
    TestSet {
        name: "channel",
        messages: vec![
            vec![NOTE_ON + channel, 64, 64],
            vec![NOTE_OFF + channel, 64, 0],
            vec![POLY_AFTERTOUCH + channel, 64, 64],
            vec![CONTROL_CHANGE + channel, 64, 64],
            vec![PROGRAM_CHANGE + channel, 64],
            vec![AFTERTOUCH + channel, 64],
            vec![PITCH_BEND + channel, 64, 0],
        ],
    }
}

/// System common messages: a complete sysex, a full MTC quarter-frame
/// cycle, song position, song select, and tune request.
pub fn system_messages(_channel: u8) -> TestSet {
    let mut messages = vec![vec![SYSEX, 1, 2, 3, 4, SYSEX_END]];
    messages.extend(QUARTER_FRAME_TIME.quarter_frames());
    // 14 bit song position, two 7 bit halves
    messages.push(vec![SONG_POS, 20, 30]);
    messages.push(vec![SONG_SELECT, 64]);
    messages.push(vec![TUNE_REQUEST]);
    TestSet {
        name: "system",
        messages,
    }
}

/// The six single-byte realtime messages. Realtime carries no channel.
pub fn realtime_messages(_channel: u8) -> TestSet {
    TestSet {
        name: "realtime",
        messages: vec![
            vec![CLOCK],
            vec![START],
            vec![CONTINUE],
            vec![STOP],
            vec![ACTIVE_SENSING],
            vec![SYSTEM_RESET],
        ],
    }
}

/// Running status: after a full note on, data-byte pairs without a status
/// byte must be read as further note ons, realtime bytes must pass through
/// without clearing the remembered status, and the same applies after a
/// note off.
pub fn running_status_messages(channel: u8) -> TestSet {
    TestSet {
        name: "running",
        messages: vec![
            vec![NOTE_ON + channel, 64, 64],
            // note on without status byte
            vec![65, 64],
            // realtime interleave must not disturb running status
            vec![START],
            vec![66, 64],
            vec![STOP],
            vec![67, 64],
            vec![CONTINUE],
            vec![68, 64],
            vec![CLOCK],
            vec![NOTE_OFF + channel, 64, 0],
            // note offs without status byte
            vec![64, 0],
            vec![65, 0],
            vec![66, 0],
            vec![67, 0],
            vec![68, 0],
        ],
    }
}

/// Sysex with realtime bytes embedded in the data stream, then a normal
/// note on to confirm the receiver resumes status parsing afterwards.
pub fn sysex_messages(channel: u8) -> TestSet {
    TestSet {
        name: "sysex",
        messages: vec![
            vec![SYSEX, 1, 2, STOP, 3, 4, CLOCK, 5, 6, SYSEX_END],
            vec![NOTE_ON + channel, 64, 64],
        ],
    }
}

/// The MTC quarter-frame cycle plus the single-sysex Full Frame
/// alternative.
pub fn timecode_messages(_channel: u8) -> TestSet {
    let mut messages = QUARTER_FRAME_TIME.quarter_frames();
    messages.push(FULL_FRAME_TIME.full_frame());
    TestSet {
        name: "timecode",
        messages,
    }
}

/// A catalog entry: a named test and its builder
pub struct TestInfo {
    /// Name used on the command line
    pub name: &'static str,
    /// One-line description for the help text
    pub description: &'static str,
    /// Whether "all" includes this test
    pub in_all: bool,
    build: fn(u8) -> TestSet,
}

impl TestInfo {
    /// Build this test's message set for the given zero-based channel
    pub fn build(&self, channel: u8) -> TestSet {
        (self.build)(channel)
    }
}

/// All available tests, in the order "all" runs them. The timecode set is
/// addressable by name only.
pub const ALL_TESTS: &[TestInfo] = &[
    TestInfo {
        name: "channel",
        description: "Channel messages  80 - E0",
        in_all: true,
        build: channel_messages,
    },
    TestInfo {
        name: "system",
        description: "System messages   F0 - F7",
        in_all: true,
        build: system_messages,
    },
    TestInfo {
        name: "realtime",
        description: "Realtime messages F8 - FF",
        in_all: true,
        build: realtime_messages,
    },
    TestInfo {
        name: "running",
        description: "Running status tests",
        in_all: true,
        build: running_status_messages,
    },
    TestInfo {
        name: "sysex",
        description: "Sysex tests",
        in_all: true,
        build: sysex_messages,
    },
    TestInfo {
        name: "timecode",
        description: "MIDI Time Code tests",
        in_all: false,
        build: timecode_messages,
    },
];

/// Look up a test by name
pub fn get_test(name: &str) -> Option<&'static TestInfo> {
    ALL_TESTS.iter().find(|t| t.name == name)
}
