//! Multi-protocol framer. It recognises UBX, NMEA, RTCM3, SPARTN and
//! NOVATEL frames interleaved with arbitrary other data. Only the framing is
//! parsed, not the contents of the messages (no message fields are decoded
//! beyond what naming and info strings need).
//!
//! The parser passes through all input: bytes that cannot be classified are
//! emitted as GARBAGE messages. GARBAGE is not guaranteed to be combined and
//! can be split arbitrarily into several messages.

pub mod crc;
pub mod nmea;
pub mod novatel;
pub mod rtcm3;
pub mod spartn;
pub mod ubx;

use crate::constants::{
    NMEA_SYNC_CHAR, NOVATEL_SYNC_1, PARSER_BUF_SIZE, PARSER_MAX_GARB_SIZE, RTCM3_SYNC_CHAR,
    SPARTN_SYNC_CHAR, UBX_SYNC_CHAR_1,
};
use crate::time::time_ms;

/// Protocol a parsed message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Protocol {
    Garbage,
    Ubx,
    Nmea,
    Rtcm3,
    Spartn,
    Novatel,
}

impl Protocol {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Garbage => "GARBAGE",
            Self::Ubx => "UBX",
            Self::Nmea => "NMEA",
            Self::Rtcm3 => "RTCM3",
            Self::Spartn => "SPARTN",
            Self::Novatel => "NOVATEL",
        }
    }
}

/// One message extracted from the byte stream.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    pub protocol: Protocol,
    /// The raw frame, exactly as it appeared in the input
    pub data: Vec<u8>,
    /// Sequence number, monotonically increasing over the parser lifetime
    pub seq: u32,
    /// Source-side timestamp in milliseconds
    pub ts: u32,
    /// Short stable name, e.g. `UBX-NAV-PVT`, `NMEA-GP-GGA`, `RTCM3-TYPE1234`
    pub name: String,
    /// Free-form info text for select messages (UBX-INF-*, UBX-MON-VER,
    /// NMEA sentences)
    pub info: Option<String>,
}

impl Message {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Per-protocol and aggregate message statistics. Monotone over the parser
/// lifetime.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParserStats {
    pub n_msgs: u32,
    pub s_msgs: u32,
    pub n_ubx: u32,
    pub s_ubx: u32,
    pub n_nmea: u32,
    pub s_nmea: u32,
    pub n_rtcm3: u32,
    pub s_rtcm3: u32,
    pub n_spartn: u32,
    pub s_spartn: u32,
    pub n_novatel: u32,
    pub s_novatel: u32,
    pub n_garbage: u32,
    pub s_garbage: u32,
}

impl ParserStats {
    fn count(&mut self, protocol: Protocol, size: usize) {
        let size = size as u32;
        self.n_msgs += 1;
        self.s_msgs += size;
        let (n, s) = match protocol {
            Protocol::Ubx => (&mut self.n_ubx, &mut self.s_ubx),
            Protocol::Nmea => (&mut self.n_nmea, &mut self.s_nmea),
            Protocol::Rtcm3 => (&mut self.n_rtcm3, &mut self.s_rtcm3),
            Protocol::Spartn => (&mut self.n_spartn, &mut self.s_spartn),
            Protocol::Novatel => (&mut self.n_novatel, &mut self.s_novatel),
            Protocol::Garbage => (&mut self.n_garbage, &mut self.s_garbage),
        };
        *n += 1;
        *s += size;
    }
}

/// Outcome of probing the buffer for one protocol at the current offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// Definitely not a frame of this protocol at this offset
    Nada,
    /// Could be a frame, but more data is needed to decide
    Wait,
    /// A complete, checksum-verified frame of this many bytes
    Frame(usize),
}

/// Streaming multi-protocol message parser.
///
/// Feed data with [add](Parser::add), then call [process](Parser::process)
/// until it returns `None`. Every input byte appears in exactly one emitted
/// message (including GARBAGE and the messages emitted by a final
/// [flush](Parser::flush)).
#[derive(Debug, Default)]
pub struct Parser {
    buf: Vec<u8>,
    // Number of bytes at the head of buf that no probe accepts. They are
    // pending GARBAGE, emitted once a valid frame follows or the run
    // reaches PARSER_MAX_GARB_SIZE.
    offs: usize,
    seq: u32,
    stats: ParserStats,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(PARSER_BUF_SIZE),
            offs: 0,
            seq: 0,
            stats: ParserStats::default(),
        }
    }

    /// Append data to the parser buffer. Returns `false` (and adds nothing)
    /// when the data does not fit; process or flush pending messages first.
    pub fn add(&mut self, data: &[u8]) -> bool {
        if self.buf.len() + data.len() > PARSER_BUF_SIZE {
            return false;
        }
        self.buf.extend_from_slice(data);
        true
    }

    /// Number of bytes currently buffered (awaiting classification).
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    pub fn stats(&self) -> &ParserStats {
        &self.stats
    }

    /// Extract the next message from the buffer. Returns `None` when no
    /// complete message is available (more input is needed).
    pub fn process(&mut self) -> Option<Message> {
        loop {
            if self.offs >= PARSER_MAX_GARB_SIZE {
                return Some(self.emit_garbage(PARSER_MAX_GARB_SIZE));
            }
            if self.offs >= self.buf.len() {
                return None;
            }
            match Self::probe(&self.buf[self.offs..]) {
                (Probe::Frame(size), protocol) => {
                    if self.offs > 0 {
                        // garbage first, the frame is emitted on the next call
                        let offs = self.offs;
                        return Some(self.emit_garbage(offs));
                    }
                    return Some(self.emit_frame(protocol, size));
                }
                (Probe::Wait, _) => return None,
                (Probe::Nada, _) => self.offs += 1,
            }
        }
    }

    /// Emit any residual buffered bytes (pending garbage and incomplete
    /// candidate frames) as GARBAGE. Call repeatedly until `None`.
    pub fn flush(&mut self) -> Option<Message> {
        if self.buf.is_empty() {
            return None;
        }
        let size = self.buf.len().min(PARSER_MAX_GARB_SIZE);
        Some(self.emit_garbage(size))
    }

    fn probe(buf: &[u8]) -> (Probe, Protocol) {
        match buf[0] {
            UBX_SYNC_CHAR_1 => (ubx::probe(buf), Protocol::Ubx),
            NMEA_SYNC_CHAR => (nmea::probe(buf), Protocol::Nmea),
            RTCM3_SYNC_CHAR => (rtcm3::probe(buf), Protocol::Rtcm3),
            SPARTN_SYNC_CHAR => (spartn::probe(buf), Protocol::Spartn),
            NOVATEL_SYNC_1 => (novatel::probe(buf), Protocol::Novatel),
            _ => (Probe::Nada, Protocol::Garbage),
        }
    }

    fn emit_garbage(&mut self, size: usize) -> Message {
        let data: Vec<u8> = self.buf.drain(..size).collect();
        self.offs -= size.min(self.offs);
        self.emit(Protocol::Garbage, data, "GARBAGE".into(), None)
    }

    fn emit_frame(&mut self, protocol: Protocol, size: usize) -> Message {
        let data: Vec<u8> = self.buf.drain(..size).collect();
        let (name, info) = match protocol {
            Protocol::Ubx => (ubx::name(&data), ubx::info(&data)),
            Protocol::Nmea => (nmea::name(&data), nmea::info(&data)),
            Protocol::Rtcm3 => (rtcm3::name(&data), rtcm3::info(&data)),
            Protocol::Spartn => (spartn::name(&data), None),
            Protocol::Novatel => (novatel::name(&data), None),
            Protocol::Garbage => ("GARBAGE".into(), None),
        };
        self.emit(protocol, data, name, info)
    }

    fn emit(
        &mut self,
        protocol: Protocol,
        data: Vec<u8>,
        name: String,
        info: Option<String>,
    ) -> Message {
        self.seq += 1;
        self.stats.count(protocol, data.len());
        Message {
            protocol,
            data,
            seq: self.seq,
            ts: time_ms(),
            name,
            info,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect_all(parser: &mut Parser, data: &[u8]) -> Vec<Message> {
        assert!(parser.add(data));
        let mut msgs = vec![];
        while let Some(msg) = parser.process() {
            msgs.push(msg);
        }
        msgs
    }

    #[test]
    fn empty_input_no_message() {
        let mut parser = Parser::new();
        assert!(parser.process().is_none());
        assert!(parser.flush().is_none());
    }

    #[test]
    fn ubx_ack_ack_frame() {
        let mut parser = Parser::new();
        let frame = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x04, 0x05, 0x11, 0x38];
        let msgs = collect_all(&mut parser, &frame);
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].protocol, Protocol::Ubx);
        assert_eq!(msgs[0].name, "UBX-ACK-ACK");
        assert_eq!(msgs[0].data, frame);
        assert_eq!(parser.stats().n_ubx, 1);
        assert_eq!(parser.stats().s_ubx, 10);
    }

    #[test]
    fn garbage_then_frame_then_garbage() {
        // the trailing bytes only come out on flush
        let mut parser = Parser::new();
        let mut input = b"garbage".to_vec();
        input.extend_from_slice(&[0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x04, 0x05, 0x11, 0x38]);
        input.extend_from_slice(b"more");
        let msgs = collect_all(&mut parser, &input);
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].protocol, Protocol::Garbage);
        assert_eq!(msgs[0].data, b"garbage");
        assert_eq!(msgs[1].name, "UBX-ACK-ACK");
        let rest = parser.flush().unwrap();
        assert_eq!(rest.data, b"more");
        assert!(parser.flush().is_none());
    }

    #[test]
    fn bad_checksum_is_garbage() {
        let mut parser = Parser::new();
        let mut frame = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x04, 0x05, 0x11, 0x38];
        frame[7] ^= 0x01; // corrupt payload, checksum no longer matches
        assert!(parser.add(&frame));
        assert!(parser.process().is_none()); // all bytes pending as garbage
        let msg = parser.flush().unwrap();
        assert_eq!(msg.protocol, Protocol::Garbage);
        assert_eq!(msg.data.len(), frame.len());
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut parser = Parser::new();
        let frame = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x04, 0x05, 0x11, 0x38];
        let mut input = frame.to_vec();
        input.extend_from_slice(&frame);
        let msgs = collect_all(&mut parser, &input);
        assert_eq!(msgs.len(), 2);
        assert!(msgs[0].seq < msgs[1].seq);
    }

    #[test]
    fn byte_at_a_time_matches_chunk() {
        let mut input = b"x".to_vec();
        input.extend_from_slice(&[0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x04, 0x05, 0x11, 0x38]);
        input.extend_from_slice(b"$GNGLL,,,,,,V,N*7A\r\n");

        let mut chunked = Parser::new();
        assert!(chunked.add(&input));
        let mut chunk_msgs = vec![];
        while let Some(msg) = chunked.process() {
            chunk_msgs.push(msg);
        }

        let mut bytewise = Parser::new();
        let mut byte_msgs = vec![];
        for byte in &input {
            assert!(bytewise.add(&[*byte]));
            while let Some(msg) = bytewise.process() {
                byte_msgs.push(msg);
            }
        }

        let frames = |msgs: &[Message]| -> Vec<(Protocol, Vec<u8>)> {
            msgs.iter()
                .filter(|m| m.protocol != Protocol::Garbage)
                .map(|m| (m.protocol, m.data.clone()))
                .collect()
        };
        assert_eq!(frames(&chunk_msgs), frames(&byte_msgs));
        assert_eq!(frames(&chunk_msgs).len(), 2);
    }

    #[test]
    fn add_rejects_overflow() {
        let mut parser = Parser::new();
        let big = vec![0u8; PARSER_BUF_SIZE];
        assert!(parser.add(&big));
        assert!(!parser.add(&[0x55]));
    }

    #[test]
    fn garbage_run_is_capped() {
        let mut parser = Parser::new();
        let junk = vec![0x55u8; PARSER_MAX_GARB_SIZE + 100];
        assert!(parser.add(&junk));
        let msg = parser.process().unwrap();
        assert_eq!(msg.protocol, Protocol::Garbage);
        assert_eq!(msg.size(), PARSER_MAX_GARB_SIZE);
        assert!(parser.process().is_none());
        assert_eq!(parser.flush().unwrap().size(), 100);
    }
}
