//! UBX framing: sync (0xb5 0x62), class, id, little-endian length, payload
//! and a Fletcher-8 checksum over class through payload.

use super::{crc::ubx_checksum, Probe};
use crate::constants::{
    PARSER_MAX_UBX_SIZE, UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_FRAME_SIZE, UBX_HEAD_SIZE,
    UBX_LENGTH_OFFSET, UBX_MSG_ID_OFFSET, UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
};

pub const UBX_NAV_CLSID: u8 = 0x01;
pub const UBX_NAV_PVT_MSGID: u8 = 0x07;
pub const UBX_NAV_HPPOSLLH_MSGID: u8 = 0x14;
pub const UBX_NAV_POSECEF_MSGID: u8 = 0x01;
pub const UBX_NAV_CLOCK_MSGID: u8 = 0x22;
pub const UBX_NAV_DOP_MSGID: u8 = 0x04;
pub const UBX_NAV_SAT_MSGID: u8 = 0x35;

pub const UBX_INF_CLSID: u8 = 0x04;
pub const UBX_INF_ERROR_MSGID: u8 = 0x00;
pub const UBX_INF_WARNING_MSGID: u8 = 0x01;
pub const UBX_INF_NOTICE_MSGID: u8 = 0x02;

pub const UBX_ACK_CLSID: u8 = 0x05;
pub const UBX_ACK_NAK_MSGID: u8 = 0x00;
pub const UBX_ACK_ACK_MSGID: u8 = 0x01;

pub const UBX_CFG_CLSID: u8 = 0x06;
pub const UBX_CFG_RST_MSGID: u8 = 0x04;
pub const UBX_CFG_CFG_MSGID: u8 = 0x09;
pub const UBX_CFG_VALSET_MSGID: u8 = 0x8a;
pub const UBX_CFG_VALGET_MSGID: u8 = 0x8b;
pub const UBX_CFG_VALDEL_MSGID: u8 = 0x8c;

pub const UBX_UPD_CLSID: u8 = 0x09;
pub const UBX_UPD_SAFEBOOT_MSGID: u8 = 0x07;

pub const UBX_MON_CLSID: u8 = 0x0a;
pub const UBX_MON_VER_MSGID: u8 = 0x04;

static CLS_NAMES: &[(u8, &str)] = &[
    (0x01, "NAV"),
    (0x02, "RXM"),
    (0x04, "INF"),
    (0x05, "ACK"),
    (0x06, "CFG"),
    (0x09, "UPD"),
    (0x0a, "MON"),
    (0x0d, "TIM"),
    (0x10, "ESF"),
    (0x13, "MGA"),
    (0x21, "LOG"),
    (0x27, "SEC"),
    (0x28, "HNR"),
];

static MSG_NAMES: &[(u8, u8, &str)] = &[
    (0x01, 0x01, "UBX-NAV-POSECEF"),
    (0x01, 0x02, "UBX-NAV-POSLLH"),
    (0x01, 0x03, "UBX-NAV-STATUS"),
    (0x01, 0x04, "UBX-NAV-DOP"),
    (0x01, 0x07, "UBX-NAV-PVT"),
    (0x01, 0x09, "UBX-NAV-ODO"),
    (0x01, 0x11, "UBX-NAV-VELECEF"),
    (0x01, 0x12, "UBX-NAV-VELNED"),
    (0x01, 0x13, "UBX-NAV-HPPOSECEF"),
    (0x01, 0x14, "UBX-NAV-HPPOSLLH"),
    (0x01, 0x20, "UBX-NAV-TIMEGPS"),
    (0x01, 0x21, "UBX-NAV-TIMEUTC"),
    (0x01, 0x22, "UBX-NAV-CLOCK"),
    (0x01, 0x26, "UBX-NAV-TIMELS"),
    (0x01, 0x35, "UBX-NAV-SAT"),
    (0x01, 0x36, "UBX-NAV-COV"),
    (0x01, 0x3b, "UBX-NAV-SVIN"),
    (0x01, 0x3c, "UBX-NAV-RELPOSNED"),
    (0x01, 0x43, "UBX-NAV-SIG"),
    (0x01, 0x61, "UBX-NAV-EOE"),
    (0x02, 0x13, "UBX-RXM-SFRBX"),
    (0x02, 0x14, "UBX-RXM-MEASX"),
    (0x02, 0x15, "UBX-RXM-RAWX"),
    (0x02, 0x32, "UBX-RXM-RTCM"),
    (0x02, 0x41, "UBX-RXM-PMREQ"),
    (0x04, 0x00, "UBX-INF-ERROR"),
    (0x04, 0x01, "UBX-INF-WARNING"),
    (0x04, 0x02, "UBX-INF-NOTICE"),
    (0x04, 0x03, "UBX-INF-TEST"),
    (0x04, 0x04, "UBX-INF-DEBUG"),
    (0x05, 0x00, "UBX-ACK-NAK"),
    (0x05, 0x01, "UBX-ACK-ACK"),
    (0x06, 0x00, "UBX-CFG-PRT"),
    (0x06, 0x01, "UBX-CFG-MSG"),
    (0x06, 0x04, "UBX-CFG-RST"),
    (0x06, 0x08, "UBX-CFG-RATE"),
    (0x06, 0x09, "UBX-CFG-CFG"),
    (0x06, 0x8a, "UBX-CFG-VALSET"),
    (0x06, 0x8b, "UBX-CFG-VALGET"),
    (0x06, 0x8c, "UBX-CFG-VALDEL"),
    (0x09, 0x07, "UBX-UPD-SAFEBOOT"),
    (0x09, 0x14, "UBX-UPD-SOS"),
    (0x0a, 0x02, "UBX-MON-IO"),
    (0x0a, 0x04, "UBX-MON-VER"),
    (0x0a, 0x06, "UBX-MON-MSGPP"),
    (0x0a, 0x07, "UBX-MON-RXBUF"),
    (0x0a, 0x08, "UBX-MON-TXBUF"),
    (0x0a, 0x09, "UBX-MON-HW"),
    (0x0a, 0x0b, "UBX-MON-HW2"),
    (0x0a, 0x21, "UBX-MON-RXR"),
    (0x0a, 0x31, "UBX-MON-SPAN"),
    (0x0a, 0x36, "UBX-MON-COMMS"),
    (0x0a, 0x37, "UBX-MON-HW3"),
    (0x0a, 0x38, "UBX-MON-RF"),
    (0x0d, 0x01, "UBX-TIM-TP"),
    (0x0d, 0x03, "UBX-TIM-TM2"),
    (0x0d, 0x06, "UBX-TIM-VRFY"),
    (0x10, 0x02, "UBX-ESF-MEAS"),
    (0x10, 0x03, "UBX-ESF-RAW"),
    (0x10, 0x10, "UBX-ESF-STATUS"),
    (0x10, 0x14, "UBX-ESF-ALG"),
    (0x10, 0x15, "UBX-ESF-INS"),
    (0x13, 0x60, "UBX-MGA-ACK"),
    (0x13, 0x80, "UBX-MGA-DBD"),
    (0x21, 0x08, "UBX-LOG-INFO"),
    (0x27, 0x03, "UBX-SEC-UNIQID"),
    (0x27, 0x09, "UBX-SEC-SIG"),
];

pub(crate) fn probe(buf: &[u8]) -> Probe {
    if buf.len() < 2 {
        return Probe::Wait;
    }
    if buf[0] != UBX_SYNC_CHAR_1 || buf[1] != UBX_SYNC_CHAR_2 {
        return Probe::Nada;
    }
    if buf.len() < UBX_HEAD_SIZE {
        return Probe::Wait;
    }
    let payload_len =
        u16::from_le_bytes([buf[UBX_LENGTH_OFFSET], buf[UBX_LENGTH_OFFSET + 1]]) as usize;
    let frame_len = payload_len + UBX_FRAME_SIZE;
    if frame_len > PARSER_MAX_UBX_SIZE {
        return Probe::Nada;
    }
    if buf.len() < frame_len {
        return Probe::Wait;
    }
    let (ck_a, ck_b) = ubx_checksum(&buf[UBX_CLASS_OFFSET..frame_len - 2]);
    if ck_a == buf[frame_len - 2] && ck_b == buf[frame_len - 1] {
        Probe::Frame(frame_len)
    } else {
        Probe::Nada
    }
}

/// Class and message id of a UBX frame.
pub fn cls_id(frame: &[u8]) -> (u8, u8) {
    (frame[UBX_CLASS_OFFSET], frame[UBX_MSG_ID_OFFSET])
}

/// Payload of a UBX frame (empty for malformed input).
pub fn payload(frame: &[u8]) -> &[u8] {
    if frame.len() >= UBX_FRAME_SIZE {
        &frame[UBX_HEAD_SIZE..frame.len() - UBX_CHECKSUM_LEN]
    } else {
        &[]
    }
}

/// Message name for a class/message id, e.g. `UBX-NAV-PVT`. Unknown ids
/// render in hex (`UBX-3f-42`).
pub fn message_name(cls: u8, msg: u8) -> String {
    if let Some((_, _, name)) = MSG_NAMES.iter().find(|(c, m, _)| *c == cls && *m == msg) {
        return (*name).into();
    }
    match CLS_NAMES.iter().find(|(c, _)| *c == cls) {
        Some((_, cls_name)) => format!("UBX-{cls_name}-{msg:02x}"),
        None => format!("UBX-{cls:02x}-{msg:02x}"),
    }
}

pub(crate) fn name(frame: &[u8]) -> String {
    let (cls, msg) = cls_id(frame);
    message_name(cls, msg)
}

pub(crate) fn info(frame: &[u8]) -> Option<String> {
    let (cls, msg) = cls_id(frame);
    match (cls, msg) {
        (UBX_INF_CLSID, _) => {
            let text = String::from_utf8_lossy(payload(frame));
            let text = text.trim_end_matches(['\r', '\n', '\0']);
            Some(text.into())
        }
        (UBX_MON_CLSID, UBX_MON_VER_MSGID) => mon_ver_str(payload(frame)),
        _ => None,
    }
}

fn cstr(bytes: &[u8]) -> &str {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    std::str::from_utf8(&bytes[..end]).unwrap_or("")
}

/// Condense a UBX-MON-VER payload into a version string, e.g.
/// `ADR 4.11 (NEO-M8L-0)`: the `FWVER=` extension (falling back to the
/// software version), plus the `MOD=` extension when present.
pub fn mon_ver_str(payload: &[u8]) -> Option<String> {
    if payload.len() < 40 {
        return None;
    }
    let sw_version = cstr(&payload[..30]);
    let mut fw_ver = None;
    let mut module = None;
    for ext in payload[40..].chunks(30) {
        let ext = cstr(ext);
        if let Some(v) = ext.strip_prefix("FWVER=") {
            fw_ver = Some(v);
        } else if let Some(v) = ext.strip_prefix("MOD=") {
            module = Some(v);
        }
    }
    let ver = fw_ver.unwrap_or(sw_version);
    if ver.is_empty() {
        return None;
    }
    Some(match module {
        Some(module) => format!("{ver} ({module})"),
        None => ver.into(),
    })
}

/// Build a complete UBX frame for a class/message id and payload.
pub fn make_frame(cls: u8, msg: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + UBX_FRAME_SIZE);
    frame.push(UBX_SYNC_CHAR_1);
    frame.push(UBX_SYNC_CHAR_2);
    frame.push(cls);
    frame.push(msg);
    frame.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    frame.extend_from_slice(payload);
    let (ck_a, ck_b) = ubx_checksum(&frame[UBX_CLASS_OFFSET..]);
    frame.push(ck_a);
    frame.push(ck_b);
    frame
}
