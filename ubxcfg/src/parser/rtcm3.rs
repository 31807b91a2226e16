//! RTCM3 framing: 0xd3 sync, 6 reserved-zero bits, 10-bit big-endian
//! length, payload, CRC-24Q over header and payload. Only the message type
//! (and for some types the reference station id) is extracted from the
//! payload.

use super::{crc::crc24q, Probe};
use crate::constants::{
    RTCM3_CRC_SIZE, RTCM3_FRAME_SIZE, RTCM3_HEAD_SIZE, RTCM3_LENGTH_MASK, RTCM3_SYNC_CHAR,
};

static TYPE_DESC: &[(u16, &str)] = &[
    (1001, "L1-only GPS RTK observables"),
    (1002, "Extended L1-only GPS RTK observables"),
    (1003, "L1/L2 GPS RTK observables"),
    (1004, "Extended L1/L2 GPS RTK observables"),
    (1005, "Stationary RTK reference station ARP"),
    (1006, "Stationary RTK reference station ARP with antenna height"),
    (1007, "Antenna descriptor"),
    (1030, "GPS network RTK residual message"),
    (1031, "GLONASS network RTK residual message"),
    (1032, "Physical reference station position message"),
    (1033, "Receiver and antenna descriptors"),
    (1074, "GPS MSM4 (full pseudoranges and phaseranges plus CNR)"),
    (1075, "GPS MSM5"),
    (1077, "GPS MSM7 (ext full pseudoranges, phaseranges, phaserange rate and CNR, high res)"),
    (1084, "GLONASS MSM4"),
    (1085, "GLONASS MSM5"),
    (1087, "GLONASS MSM7"),
    (1094, "Galileo MSM4"),
    (1095, "Galileo MSM5"),
    (1097, "Galileo MSM7"),
    (1124, "BeiDou MSM4"),
    (1125, "BeiDou MSM5"),
    (1127, "BeiDou MSM7"),
    (1230, "GLONASS code-phase biases"),
    (4072, "u-blox proprietary"),
];

pub(crate) fn probe(buf: &[u8]) -> Probe {
    debug_assert_eq!(buf[0], RTCM3_SYNC_CHAR);
    if buf.len() < RTCM3_HEAD_SIZE {
        return Probe::Wait;
    }
    if buf[1] & 0xfc != 0 {
        return Probe::Nada;
    }
    let payload_len = (u16::from_be_bytes([buf[1], buf[2]]) & RTCM3_LENGTH_MASK) as usize;
    let frame_len = payload_len + RTCM3_FRAME_SIZE;
    if buf.len() < frame_len {
        return Probe::Wait;
    }
    let crc = crc24q(&buf[..frame_len - RTCM3_CRC_SIZE]);
    let sent = (buf[frame_len - 3] as u32) << 16
        | (buf[frame_len - 2] as u32) << 8
        | buf[frame_len - 1] as u32;
    if crc == sent {
        Probe::Frame(frame_len)
    } else {
        Probe::Nada
    }
}

/// Message type (DF002), the first 12 bits of the payload.
pub fn msg_type(frame: &[u8]) -> Option<u16> {
    let payload = frame.get(RTCM3_HEAD_SIZE..frame.len().checked_sub(RTCM3_CRC_SIZE)?)?;
    if payload.len() < 2 {
        return None;
    }
    Some((payload[0] as u16) << 4 | (payload[1] >> 4) as u16)
}

/// u-blox proprietary type 4072 carries a 12-bit subtype after the type.
pub fn sub_type(frame: &[u8]) -> Option<u16> {
    let payload = frame.get(RTCM3_HEAD_SIZE..frame.len().checked_sub(RTCM3_CRC_SIZE)?)?;
    if payload.len() < 3 {
        return None;
    }
    Some(((payload[1] & 0x0f) as u16) << 8 | payload[2] as u16)
}

/// Reference station id (DF003) of the station messages (1005, 1006, 1032).
pub fn station_id(frame: &[u8]) -> Option<u16> {
    match msg_type(frame)? {
        1005 | 1006 | 1032 => sub_type(frame),
        _ => None,
    }
}

pub(crate) fn name(frame: &[u8]) -> String {
    match msg_type(frame) {
        Some(4072) => match sub_type(frame) {
            Some(sub) => format!("RTCM3-TYPE4072_{sub}"),
            None => "RTCM3-TYPE4072".into(),
        },
        Some(msg_type) => format!("RTCM3-TYPE{msg_type}"),
        None => "RTCM3-?".into(),
    }
}

pub(crate) fn info(frame: &[u8]) -> Option<String> {
    let msg_type = msg_type(frame)?;
    let desc = TYPE_DESC
        .iter()
        .find(|(ty, _)| *ty == msg_type)
        .map(|(_, desc)| *desc);
    match (desc, station_id(frame)) {
        (Some(desc), Some(refsta)) => Some(format!("{desc} (refsta {refsta})")),
        (Some(desc), None) => Some(desc.into()),
        (None, _) => None,
    }
}

/// Build a complete RTCM3 frame around a payload.
pub fn make_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + RTCM3_FRAME_SIZE);
    frame.push(RTCM3_SYNC_CHAR);
    frame.extend_from_slice(&(payload.len() as u16 & RTCM3_LENGTH_MASK).to_be_bytes());
    frame.extend_from_slice(payload);
    let crc = crc24q(&frame);
    frame.extend_from_slice(&crc.to_be_bytes()[1..]);
    frame
}

#[cfg(test)]
mod test {
    use super::*;

    fn type_payload(msg_type: u16, len: usize) -> Vec<u8> {
        let mut payload = vec![0u8; len];
        payload[0] = (msg_type >> 4) as u8;
        payload[1] = ((msg_type & 0x0f) as u8) << 4;
        payload
    }

    #[test]
    fn frame_round_trip() {
        let frame = make_frame(&type_payload(1074, 24));
        assert_eq!(probe(&frame), Probe::Frame(frame.len()));
        assert_eq!(msg_type(&frame), Some(1074));
        assert_eq!(name(&frame), "RTCM3-TYPE1074");
    }

    #[test]
    fn reserved_bits_must_be_zero() {
        let mut frame = make_frame(&type_payload(1005, 19));
        frame[1] |= 0x40;
        assert_eq!(probe(&frame), Probe::Nada);
    }

    #[test]
    fn crc_failure_rejected() {
        let mut frame = make_frame(&type_payload(1005, 19));
        let ix = frame.len() - 4;
        frame[ix] ^= 0xff;
        assert_eq!(probe(&frame), Probe::Nada);
    }

    #[test]
    fn partial_waits() {
        let frame = make_frame(&type_payload(1230, 8));
        assert_eq!(probe(&frame[..2]), Probe::Wait);
        assert_eq!(probe(&frame[..frame.len() - 1]), Probe::Wait);
    }

    #[test]
    fn station_id_extraction() {
        // type 1005 with refsta 1234 in the 12 bits after the type
        let mut payload = type_payload(1005, 19);
        payload[1] |= (1234u16 >> 8) as u8;
        payload[2] = (1234 & 0xff) as u8;
        let frame = make_frame(&payload);
        assert_eq!(station_id(&frame), Some(1234));
        assert!(info(&frame).unwrap().contains("refsta 1234"));
    }

    #[test]
    fn ublox_subtype_naming() {
        let mut payload = type_payload(4072, 10);
        payload[2] = 1;
        let frame = make_frame(&payload);
        assert_eq!(name(&frame), "RTCM3-TYPE4072_1");
    }
}
