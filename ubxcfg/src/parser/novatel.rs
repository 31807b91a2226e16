//! NOVATEL OEM framing: 0xaa 0x44 sync, long (0x12) or short (0x13) header
//! variant, little-endian message id and length, CRC-32 over the whole
//! frame.

use super::{crc::crc32_novatel, Probe};
use crate::constants::{
    NOVATEL_CRC_SIZE, NOVATEL_SYNC_1, NOVATEL_SYNC_2, NOVATEL_SYNC_3_LONG, NOVATEL_SYNC_3_SHORT,
    PARSER_MAX_NOVATEL_SIZE,
};

const SHORT_HEADER_SIZE: usize = 12;

static MSG_NAMES: &[(u16, &str)] = &[
    (41, "RAWEPHEM"),
    (42, "BESTPOS"),
    (43, "RANGE"),
    (47, "PSRPOS"),
    (93, "RXSTATUS"),
    (99, "BESTVEL"),
    (101, "TIME"),
    (140, "RANGECMP"),
    (241, "BESTXYZ"),
    (507, "INSPVA"),
    (726, "BESTUTM"),
    (812, "RAWIMUSX"),
    (1335, "HEADING2"),
    (1465, "INSPVAX"),
];

pub(crate) fn probe(buf: &[u8]) -> Probe {
    debug_assert_eq!(buf[0], NOVATEL_SYNC_1);
    if buf.len() < 3 {
        return Probe::Wait;
    }
    if buf[1] != NOVATEL_SYNC_2 {
        return Probe::Nada;
    }
    let frame_len = match buf[2] {
        NOVATEL_SYNC_3_LONG => {
            // header length at offset 3, message length at offset 8
            if buf.len() < 10 {
                return Probe::Wait;
            }
            let header_len = buf[3] as usize;
            if header_len < 10 {
                return Probe::Nada;
            }
            let msg_len = u16::from_le_bytes([buf[8], buf[9]]) as usize;
            header_len + msg_len + NOVATEL_CRC_SIZE
        }
        NOVATEL_SYNC_3_SHORT => {
            if buf.len() < 4 {
                return Probe::Wait;
            }
            SHORT_HEADER_SIZE + buf[3] as usize + NOVATEL_CRC_SIZE
        }
        _ => return Probe::Nada,
    };
    if frame_len > PARSER_MAX_NOVATEL_SIZE {
        return Probe::Nada;
    }
    if buf.len() < frame_len {
        return Probe::Wait;
    }
    let crc = crc32_novatel(&buf[..frame_len - NOVATEL_CRC_SIZE]);
    let sent = u32::from_le_bytes([
        buf[frame_len - 4],
        buf[frame_len - 3],
        buf[frame_len - 2],
        buf[frame_len - 1],
    ]);
    if crc == sent {
        Probe::Frame(frame_len)
    } else {
        Probe::Nada
    }
}

/// Message id, from the long or short header.
pub fn msg_id(frame: &[u8]) -> Option<u16> {
    if frame.len() < 6 {
        return None;
    }
    Some(u16::from_le_bytes([frame[4], frame[5]]))
}

pub(crate) fn name(frame: &[u8]) -> String {
    match msg_id(frame) {
        Some(id) => match MSG_NAMES.iter().find(|(msg_id, _)| *msg_id == id) {
            Some((_, name)) => format!("NOVATEL-{name}"),
            None => format!("NOVATEL-MSG{id}"),
        },
        None => "NOVATEL-?".into(),
    }
}

/// Build a short-header NOVATEL frame, for tests and message generators.
pub fn make_frame_short(msg_id: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![
        NOVATEL_SYNC_1,
        NOVATEL_SYNC_2,
        NOVATEL_SYNC_3_SHORT,
        payload.len() as u8,
    ];
    frame.extend_from_slice(&msg_id.to_le_bytes());
    frame.extend_from_slice(&[0u8; 6]); // week and milliseconds
    frame.extend_from_slice(payload);
    let crc = crc32_novatel(&frame);
    frame.extend_from_slice(&crc.to_le_bytes());
    frame
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn short_frame_round_trip() {
        let frame = make_frame_short(42, &[1, 2, 3, 4]);
        assert_eq!(probe(&frame), Probe::Frame(frame.len()));
        assert_eq!(name(&frame), "NOVATEL-BESTPOS");
    }

    #[test]
    fn unknown_id_named_numerically() {
        let frame = make_frame_short(4242, &[]);
        assert_eq!(name(&frame), "NOVATEL-MSG4242");
    }

    #[test]
    fn crc_failure_rejected() {
        let mut frame = make_frame_short(101, &[9; 8]);
        frame[6] ^= 0x01;
        assert_eq!(probe(&frame), Probe::Nada);
    }

    #[test]
    fn partial_waits() {
        let frame = make_frame_short(101, &[9; 8]);
        assert_eq!(probe(&frame[..2]), Probe::Wait);
        assert_eq!(probe(&frame[..frame.len() - 1]), Probe::Wait);
    }

    #[test]
    fn wrong_sync_rejected() {
        assert_eq!(probe(&[0xaa, 0x45, 0x12]), Probe::Nada);
        assert_eq!(probe(&[0xaa, 0x44, 0x77]), Probe::Nada);
    }
}
