//! MIDI status byte constants and message rendering
//!
//! Raw byte values for the MIDI 1.0 wire protocol. Channel voice opcodes
//! carry the channel in their low nibble, so the constants here are the
//! channel-0 base values; add the zero-based channel to address 1-16.

/// A raw MIDI message: one status byte followed by its data bytes.
///
/// Running-status test vectors deliberately omit the status byte, and
/// realtime messages are a single status byte with no data, so no further
/// structure is imposed here.
pub type Message = Vec<u8>;

// Channel voice messages (status = base + channel, channel 0-15)
/// Note off, 2 data bytes (note, velocity)
pub const NOTE_OFF: u8 = 0x80;
/// Note on, 2 data bytes (note, velocity)
pub const NOTE_ON: u8 = 0x90;
/// Polyphonic aftertouch (key pressure), 2 data bytes
pub const POLY_AFTERTOUCH: u8 = 0xA0;
/// Control change, 2 data bytes (controller, value)
pub const CONTROL_CHANGE: u8 = 0xB0;
/// Program change, 1 data byte
pub const PROGRAM_CHANGE: u8 = 0xC0;
/// Channel aftertouch (channel pressure), 1 data byte
pub const AFTERTOUCH: u8 = 0xD0;
/// Pitch bend, 2 data bytes (lsb, msb)
pub const PITCH_BEND: u8 = 0xE0;

// System common messages
/// Sysex start, variable length until [`SYSEX_END`]
pub const SYSEX: u8 = 0xF0;
/// MTC quarter frame, 1 data byte
pub const TIMECODE: u8 = 0xF1;
/// Song position pointer, 2 data bytes (14 bit value)
pub const SONG_POS: u8 = 0xF2;
/// Song select, 1 data byte
pub const SONG_SELECT: u8 = 0xF3;
// 0xF4 and 0xF5 are reserved
/// Tune request, no data
pub const TUNE_REQUEST: u8 = 0xF6;
/// Sysex end
pub const SYSEX_END: u8 = 0xF7;

// Realtime messages (single byte, no data, may appear anywhere)
pub const CLOCK: u8 = 0xF8;
// 0xF9 is reserved
pub const START: u8 = 0xFA;
pub const CONTINUE: u8 = 0xFB;
pub const STOP: u8 = 0xFC;
// 0xFD is reserved
pub const ACTIVE_SENSING: u8 = 0xFE;
pub const SYSTEM_RESET: u8 = 0xFF;

/// How message bytes are rendered for display
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Hexadecimal (uppercase) instead of decimal byte values
    pub hex: bool,
    /// Replace recognized status bytes with their symbolic name
    pub name: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hex: true,
            name: false,
        }
    }
}

/// Get the symbolic name for a status byte.
///
/// Channel voice bytes match on their high nibble, so a note on resolves to
/// "NOTEON" on any channel. Returns `None` for data bytes and the reserved
/// status values.
pub fn status_name(status: u8) -> Option<&'static str> {
    if status & 0x80 == 0 {
        return None;
    }
    // Channel voice: channel lives in the low nibble
    let name = match status & 0xF0 {
        NOTE_OFF => return Some("NOTEOFF"),
        NOTE_ON => return Some("NOTEON"),
        POLY_AFTERTOUCH => return Some("POLYAFTERTOUCH"),
        CONTROL_CHANGE => return Some("CONTROLCHANGE"),
        PROGRAM_CHANGE => return Some("PROGRAMCHANGE"),
        AFTERTOUCH => return Some("AFTERTOUCH"),
        PITCH_BEND => return Some("PITCHBEND"),
        _ => match status {
            SYSEX => "SYSEX",
            TIMECODE => "TIMECODE",
            SONG_POS => "SONGPOS",
            SONG_SELECT => "SONGSELECT",
            TUNE_REQUEST => "TUNEREQUEST",
            SYSEX_END => "SYSEXEND",
            CLOCK => "CLOCK",
            START => "START",
            CONTINUE => "CONTINUE",
            STOP => "STOP",
            ACTIVE_SENSING => "ACTIVESENSE",
            SYSTEM_RESET => "SYSTEMRESET",
            _ => return None,
        },
    };
    Some(name)
}

/// Render a message as a display line: bytes separated by spaces, hex or
/// decimal per the options, with recognized status bytes replaced by their
/// symbolic name when name rendering is on.
///
/// Data bytes (bit 7 clear) are never named, so running-status vectors stay
/// readable as raw values.
pub fn format_message(message: &[u8], opts: RenderOptions) -> String {
    let mut out = String::new();
    for (i, &byte) in message.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match status_name(byte) {
            Some(name) if opts.name => out.push_str(name),
            _ => {
                if opts.hex {
                    out.push_str(&format!("{:02X}", byte));
                } else {
                    out.push_str(&format!("{}", byte));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_name_channel_voice_any_channel() {
        assert_eq!(status_name(0x90), Some("NOTEON"));
        assert_eq!(status_name(0x93), Some("NOTEON"));
        assert_eq!(status_name(0x8F), Some("NOTEOFF"));
        assert_eq!(status_name(0xE5), Some("PITCHBEND"));
    }

    #[test]
    fn test_status_name_system() {
        assert_eq!(status_name(0xF0), Some("SYSEX"));
        assert_eq!(status_name(0xF6), Some("TUNEREQUEST"));
        assert_eq!(status_name(0xF8), Some("CLOCK"));
        assert_eq!(status_name(0xFF), Some("SYSTEMRESET"));
    }

    #[test]
    fn test_status_name_rejects_data_and_reserved() {
        // Data bytes never resolve, even values that look like opcodes
        assert_eq!(status_name(0x40), None);
        assert_eq!(status_name(0x7F), None);
        // Reserved system bytes
        assert_eq!(status_name(0xF4), None);
        assert_eq!(status_name(0xF5), None);
        assert_eq!(status_name(0xF9), None);
        assert_eq!(status_name(0xFD), None);
    }

    #[test]
    fn test_format_hex() {
        let opts = RenderOptions {
            hex: true,
            name: false,
        };
        assert_eq!(format_message(&[0x90, 64, 64], opts), "90 40 40");
    }

    #[test]
    fn test_format_decimal() {
        let opts = RenderOptions {
            hex: false,
            name: false,
        };
        assert_eq!(format_message(&[0x90, 64, 64], opts), "144 64 64");
    }

    #[test]
    fn test_format_named() {
        let opts = RenderOptions {
            hex: true,
            name: true,
        };
        // Only the status byte gets a name; data bytes stay numeric
        assert_eq!(format_message(&[0x90, 64, 64], opts), "NOTEON 40 40");
        // High-nibble match still names channel voice bytes on channel 3
        assert_eq!(format_message(&[0x93, 64, 64], opts), "NOTEON 40 40");
    }

    #[test]
    fn test_format_named_decimal() {
        let opts = RenderOptions {
            hex: false,
            name: true,
        };
        assert_eq!(format_message(&[0xF8], opts), "CLOCK");
        assert_eq!(format_message(&[0xF2, 20, 30], opts), "SONGPOS 20 30");
    }
}
