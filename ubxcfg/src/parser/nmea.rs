//! NMEA 0183 framing: `$`, printable body, `*`, two uppercase hex checksum
//! digits, `\r\n`. The checksum is the XOR of all bytes between `$` and `*`.

use super::Probe;
use crate::constants::{NMEA_END_CHAR_1, NMEA_END_CHAR_2, NMEA_SYNC_CHAR, PARSER_MAX_NMEA_SIZE};

static PUBX_NAMES: &[(&str, &str)] = &[
    ("00", "NMEA-PUBX-POSITION"),
    ("03", "NMEA-PUBX-SVSTATUS"),
    ("04", "NMEA-PUBX-TIME"),
    ("40", "NMEA-PUBX-RATE"),
    ("41", "NMEA-PUBX-CONFIG"),
];

pub(crate) fn probe(buf: &[u8]) -> Probe {
    debug_assert_eq!(buf[0], NMEA_SYNC_CHAR);
    let max = buf.len().min(PARSER_MAX_NMEA_SIZE);
    let mut star = None;
    let mut ix = 1;
    while ix < max {
        let byte = buf[ix];
        if byte == NMEA_END_CHAR_1 {
            // "\r" must be followed by "\n" and preceded by "*XX"
            if ix + 1 >= buf.len() {
                return Probe::Wait;
            }
            if buf[ix + 1] != NMEA_END_CHAR_2 {
                return Probe::Nada;
            }
            let Some(star) = star else {
                return Probe::Nada;
            };
            if star + 3 != ix || star < 2 {
                return Probe::Nada;
            }
            let Some(ck) = checksum_digits(buf[star + 1], buf[star + 2]) else {
                return Probe::Nada;
            };
            let calc = super::crc::nmea_checksum(&buf[1..star]);
            return if calc == ck {
                Probe::Frame(ix + 2)
            } else {
                Probe::Nada
            };
        }
        match byte {
            b'*' => {
                if star.is_some() {
                    return Probe::Nada;
                }
                star = Some(ix);
            }
            0x20..=0x7e => {
                if byte == NMEA_SYNC_CHAR {
                    return Probe::Nada;
                }
            }
            _ => return Probe::Nada,
        }
        ix += 1;
    }
    if buf.len() >= PARSER_MAX_NMEA_SIZE {
        Probe::Nada
    } else {
        Probe::Wait
    }
}

fn checksum_digits(hi: u8, lo: u8) -> Option<u8> {
    let digit = |c: u8| match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    };
    Some((digit(hi)? << 4) | digit(lo)?)
}

/// The sentence body between `$` and `*` (None for malformed input).
pub fn body(frame: &[u8]) -> Option<&str> {
    let star = frame.iter().position(|b| *b == b'*')?;
    std::str::from_utf8(&frame[1..star]).ok()
}

pub(crate) fn name(frame: &[u8]) -> String {
    let Some(body) = body(frame) else {
        return "NMEA-?-?".into();
    };
    let mut fields = body.split(',');
    let address = fields.next().unwrap_or("");
    if address == "PUBX" {
        let id = fields.next().unwrap_or("");
        if let Some((_, name)) = PUBX_NAMES.iter().find(|(pubx_id, _)| *pubx_id == id) {
            return (*name).into();
        }
        return format!("NMEA-PUBX-{id}");
    }
    if address.len() == 5 && !address.starts_with('P') {
        return format!("NMEA-{}-{}", &address[..2], &address[2..]);
    }
    format!("NMEA-{address}")
}

pub(crate) fn info(frame: &[u8]) -> Option<String> {
    body(frame).map(Into::into)
}

/// For NMEA TXT sentences, the message type (`00` error, `01` warning,
/// `02` notice, `07` user) and the text.
pub fn txt_msg(frame: &[u8]) -> Option<(u8, String)> {
    let body = body(frame)?;
    let mut fields = body.split(',');
    let address = fields.next()?;
    if address.len() != 5 || !address.ends_with("TXT") {
        return None;
    }
    let _num_msg = fields.next()?;
    let _msg_num = fields.next()?;
    let msg_type: u8 = fields.next()?.parse().ok()?;
    let text = fields.collect::<Vec<_>>().join(",");
    Some((msg_type, text))
}
