//! MIDI Time Code (MTC) encoding
//!
//! An MTC timestamp is hours:minutes:seconds:frames at a frame rate. It is
//! transmitted either as 8 sequential quarter-frame messages, each carrying
//! one nibble of the value, or as a single Full Frame sysex.

use super::message::{Message, SYSEX, SYSEX_END, TIMECODE};

/// MTC frame rate, a 2 bit code carried alongside the hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    Fps24 = 0x00,
    Fps25 = 0x01,
    /// 30 fps drop-frame (29.97)
    Fps29_97 = 0x02,
    Fps30 = 0x03,
}

/// A full MTC timestamp
///
/// Field widths on the wire: hours 5 bits, minutes and seconds 6 bits,
/// frames 5 bits.
#[derive(Debug, Clone, Copy)]
pub struct MtcTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub frame: u8,
    pub rate: FrameRate,
}

impl MtcTime {
    /// Encode as the 8 quarter-frame messages, in transmission order.
    ///
    /// Each message is `[0xF1, data]` where the data byte's high nibble
    /// (0x0-0x7) says which piece of the timestamp this is and the low
    /// nibble carries the 4 bit value:
    ///
    /// * 0x0/0x1: frame low/high nibble
    /// * 0x2/0x3: second low/high nibble
    /// * 0x4/0x5: minute low/high nibble
    /// * 0x6/0x7: hour low nibble, then the hour's 5th bit with the frame
    ///   rate code in the next 2 bits
    ///
    /// A receiver needs all 8 messages before it has the complete value, so
    /// by the time the last one arrives the encoded frame count is stale;
    /// receivers conventionally add 2 frames to compensate.
    pub fn quarter_frames(&self) -> Vec<Message> {
        let nibbles = [
            self.frame & 0x0F,
            (self.frame >> 4) & 0x01,
            self.second & 0x0F,
            (self.second >> 4) & 0x03,
            self.minute & 0x0F,
            (self.minute >> 4) & 0x03,
            self.hour & 0x0F,
            ((self.rate as u8) << 1) | ((self.hour >> 4) & 0x01),
        ];
        nibbles
            .iter()
            .enumerate()
            .map(|(piece, &value)| vec![TIMECODE, ((piece as u8) << 4) | value])
            .collect()
    }

    /// Encode as an MTC Full Frame sysex, the single-message alternative to
    /// the quarter-frame cycle.
    ///
    /// Universal realtime sysex: all-devices target, MTC sub-id, Full Frame
    /// sub-sub-id, then hour packed with the rate code (`0rrhhhhh`), minute,
    /// second, frame.
    pub fn full_frame(&self) -> Message {
        vec![
            SYSEX,
            0x7F, // universal realtime
            0x7F, // all devices
            0x01, // MTC sub-id
            0x01, // Full Frame
            ((self.rate as u8) << 5) | (self.hour & 0x1F),
            self.minute & 0x3F,
            self.second & 0x3F,
            self.frame & 0x1F,
            SYSEX_END,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 01:02:03:02 @ 25 fps, displayed as 01:02:03:04 once the receiver
    // adds the conventional 2 frame transmission delay
    fn reference_time() -> MtcTime {
        MtcTime {
            hour: 1,
            minute: 2,
            second: 3,
            frame: 2,
            rate: FrameRate::Fps25,
        }
    }

    #[test]
    fn test_quarter_frame_sequence() {
        let messages = reference_time().quarter_frames();
        let expected: Vec<Vec<u8>> = vec![
            vec![0xF1, 0x02],
            vec![0xF1, 0x10],
            vec![0xF1, 0x23],
            vec![0xF1, 0x30],
            vec![0xF1, 0x42],
            vec![0xF1, 0x50],
            vec![0xF1, 0x61],
            vec![0xF1, 0x72],
        ];
        assert_eq!(messages, expected);
    }

    #[test]
    fn test_quarter_frame_round_trip() {
        let messages = reference_time().quarter_frames();

        // Reassemble the nibbles the way a receiver would
        let mut nibbles = [0u8; 8];
        for message in &messages {
            assert_eq!(message[0], 0xF1);
            let piece = (message[1] >> 4) as usize;
            nibbles[piece] = message[1] & 0x0F;
        }
        let frame = nibbles[0] | (nibbles[1] << 4);
        let second = nibbles[2] | (nibbles[3] << 4);
        let minute = nibbles[4] | (nibbles[5] << 4);
        let hour = nibbles[6] | ((nibbles[7] & 0x01) << 4);
        let rate = nibbles[7] >> 1;

        assert_eq!(hour, 1);
        assert_eq!(minute, 2);
        assert_eq!(second, 3);
        assert_eq!(frame + 2, 4); // receiver-side frame adjustment
        assert_eq!(rate, FrameRate::Fps25 as u8);
    }

    #[test]
    fn test_quarter_frames_mask_field_widths() {
        // Out-of-range fields must not bleed into neighboring bits
        let time = MtcTime {
            hour: 0x3F,   // 5 bit field
            minute: 0x7F, // 6 bit field
            second: 0x7F,
            frame: 0x3F, // 5 bit field
            rate: FrameRate::Fps30,
        };
        for message in time.quarter_frames() {
            assert!(message[1] & 0x80 == 0, "data byte must be 7 bit");
        }
    }

    #[test]
    fn test_full_frame() {
        let time = MtcTime {
            hour: 6,
            minute: 7,
            second: 8,
            frame: 9,
            rate: FrameRate::Fps30,
        };
        assert_eq!(
            time.full_frame(),
            vec![0xF0, 0x7F, 0x7F, 0x01, 0x01, 0x66, 0x07, 0x08, 0x09, 0xF7]
        );
    }

    #[test]
    fn test_full_frame_rate_codes() {
        let mut time = reference_time();
        time.hour = 0;

        time.rate = FrameRate::Fps24;
        assert_eq!(time.full_frame()[5], 0x00);
        time.rate = FrameRate::Fps25;
        assert_eq!(time.full_frame()[5], 0x20);
        time.rate = FrameRate::Fps29_97;
        assert_eq!(time.full_frame()[5], 0x40);
        time.rate = FrameRate::Fps30;
        assert_eq!(time.full_frame()[5], 0x60);
    }
}
