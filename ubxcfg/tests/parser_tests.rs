//! Framer properties: byte conservation under arbitrary chunking,
//! classification independence of chunking, checksum rejection.

use proptest::prelude::*;

use ubxcfg::parser::{rtcm3, ubx, Parser, Protocol};

fn nmea_sentence(body: &str) -> Vec<u8> {
    let ck = body.bytes().fold(0u8, |a, b| a ^ b);
    format!("${body}*{ck:02X}\r\n").into_bytes()
}

/// One segment of an input stream: a valid frame of some protocol, or raw
/// junk.
fn segment() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        // junk (may accidentally contain sync bytes, which must not break
        // conservation either)
        prop::collection::vec(any::<u8>(), 0..32),
        // UBX frame
        (any::<u8>(), any::<u8>(), prop::collection::vec(any::<u8>(), 0..32))
            .prop_map(|(cls, id, payload)| ubx::make_frame(cls, id, &payload)),
        // NMEA sentence
        prop::collection::vec(prop::sample::select(b"ABGLMNRST,.0123456789".to_vec()), 6..24)
            .prop_map(|chars| nmea_sentence(&String::from_utf8(chars).unwrap())),
        // RTCM3 frame
        prop::collection::vec(any::<u8>(), 2..32).prop_map(|payload| rtcm3::make_frame(&payload)),
    ]
}

fn stream() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(segment(), 0..12).prop_map(|segments| segments.concat())
}

fn run_parser(input: &[u8], chunk_size: usize) -> Vec<(Protocol, Vec<u8>)> {
    let mut parser = Parser::new();
    let mut msgs = vec![];
    for chunk in input.chunks(chunk_size.max(1)) {
        assert!(parser.add(chunk));
        while let Some(msg) = parser.process() {
            msgs.push((msg.protocol, msg.data));
        }
    }
    while let Some(msg) = parser.flush() {
        msgs.push((msg.protocol, msg.data));
    }
    msgs
}

proptest! {
    /// Every input byte appears exactly once in the output stream, no
    /// matter how the input is chunked.
    #[test]
    fn conservation(input in stream(), chunk_size in 1usize..128) {
        let msgs = run_parser(&input, chunk_size);
        let mut out = vec![];
        for (_, data) in &msgs {
            out.extend_from_slice(data);
        }
        prop_assert_eq!(out, input);
    }

    /// Feeding byte-at-a-time classifies the same frames, in the same
    /// order, as feeding everything at once.
    #[test]
    fn classification_independent_of_chunking(input in stream()) {
        let frames = |msgs: Vec<(Protocol, Vec<u8>)>| -> Vec<(Protocol, Vec<u8>)> {
            msgs.into_iter()
                .filter(|(protocol, _)| *protocol != Protocol::Garbage)
                .collect()
        };
        let bytewise = frames(run_parser(&input, 1));
        let chunked = frames(run_parser(&input, input.len().max(1)));
        prop_assert_eq!(bytewise, chunked);
    }

    /// A frame with one flipped payload byte comes out as garbage of
    /// exactly the frame's length.
    #[test]
    fn ubx_checksum_rejection(payload_len in 1usize..32, flip in 0usize..32) {
        let payload = vec![0u8; payload_len];
        let mut frame = ubx::make_frame(0x01, 0x07, &payload);
        frame[6 + (flip % payload_len)] ^= 0x01;
        let msgs = run_parser(&frame, frame.len());
        prop_assert!(msgs.iter().all(|(protocol, _)| *protocol == Protocol::Garbage));
        let total: usize = msgs.iter().map(|(_, data)| data.len()).sum();
        prop_assert_eq!(total, frame.len());
    }
}

#[test]
fn nmea_isolated_between_garbage() {
    let sentence = nmea_sentence("GNGGA,110546.00,4724.01843,N,00827.02244,E,1,08,1.01,537.4,M,48.0,M,,");
    let mut input = b"garbage".to_vec();
    input.extend_from_slice(&sentence);
    input.extend_from_slice(b"more");

    let mut parser = Parser::new();
    assert!(parser.add(&input));
    let first = parser.process().unwrap();
    assert_eq!(first.protocol, Protocol::Garbage);
    assert_eq!(first.data, b"garbage");
    let second = parser.process().unwrap();
    assert_eq!(second.protocol, Protocol::Nmea);
    assert_eq!(second.name, "NMEA-GN-GGA");
    assert_eq!(second.size(), sentence.len());
    assert!(parser.process().is_none());
    let third = parser.flush().unwrap();
    assert_eq!(third.protocol, Protocol::Garbage);
    assert_eq!(third.data, b"more");
}

#[test]
fn counters_track_protocols() {
    let mut input = vec![];
    input.extend_from_slice(&ubx::make_frame(0x05, 0x01, &[0x04, 0x05]));
    input.extend_from_slice(&nmea_sentence("GNGLL,,,,,,V,N"));
    input.extend_from_slice(&rtcm3::make_frame(&[0x3e, 0xd0, 0x00, 0x00]));
    input.extend_from_slice(b"???");

    let mut parser = Parser::new();
    assert!(parser.add(&input));
    while parser.process().is_some() {}
    while parser.flush().is_some() {}

    let stats = parser.stats();
    assert_eq!(stats.n_ubx, 1);
    assert_eq!(stats.s_ubx, 10);
    assert_eq!(stats.n_nmea, 1);
    assert_eq!(stats.n_rtcm3, 1);
    assert_eq!(stats.n_garbage, 1);
    assert_eq!(stats.s_garbage, 3);
    assert_eq!(stats.n_msgs, 4);
    assert_eq!(stats.s_msgs, input.len() as u32);
}

#[test]
fn interleaved_protocols_in_order() {
    let mut input = vec![];
    let ubx_frame = ubx::make_frame(0x01, 0x07, &[0u8; 92]);
    let gga = nmea_sentence("GNGGA,,,,,,0,,,,M,,M,,");
    input.extend_from_slice(&ubx_frame);
    input.extend_from_slice(&gga);
    input.extend_from_slice(&ubx_frame);

    let mut parser = Parser::new();
    assert!(parser.add(&input));
    let names: Vec<String> = std::iter::from_fn(|| parser.process())
        .map(|msg| msg.name)
        .collect();
    assert_eq!(names, ["UBX-NAV-PVT", "NMEA-GN-GGA", "UBX-NAV-PVT"]);
}

#[test]
fn info_strings() {
    let mut parser = Parser::new();
    let inf = ubx::make_frame(0x04, 0x01, b"something dodgy");
    assert!(parser.add(&inf));
    let msg = parser.process().unwrap();
    assert_eq!(msg.name, "UBX-INF-WARNING");
    assert_eq!(msg.info.as_deref(), Some("something dodgy"));

    let txt = nmea_sentence("GNTXT,01,01,02,u-blox AG - www.u-blox.com");
    assert!(parser.add(&txt));
    let msg = parser.process().unwrap();
    assert_eq!(msg.name, "NMEA-GN-TXT");
    assert!(msg.info.unwrap().contains("u-blox AG"));
}
