//! Driver tests against a scripted transport: UBX polls, NAK handling,
//! configuration get/set and autobauding.

mod common;

use std::sync::{Arc, Mutex};

use common::{mon_ver_frame, MockTransport};
use ubxcfg::cfg::{self, CfgLayer, CfgLayers, CfgValue, KeyVal};
use ubxcfg::parser::ubx;
use ubxcfg::rx::{Detect, PollUbx, Rx, RxOpts};
use ubxcfg::PollError;

fn fast_opts() -> RxOpts {
    RxOpts {
        detect: Detect::Ubx,
        autobaud: false,
        baudrate: 0,
        quick_timeout_ms: 20,
        quick_retries: 1,
        long_timeout_ms: 50,
        long_retries: 2,
    }
}

fn nak_frame(cls: u8, msg_id: u8) -> Vec<u8> {
    ubx::make_frame(0x05, 0x00, &[cls, msg_id])
}

fn ack_frame(cls: u8, msg_id: u8) -> Vec<u8> {
    ubx::make_frame(0x05, 0x01, &[cls, msg_id])
}

#[test]
fn poll_mon_ver_returns_response() {
    let (transport, handle) = MockTransport::new();
    let transport = transport.respond(0x0a, 0x04, mon_ver_frame());
    let mut rx = Rx::new(Box::new(transport), fast_opts());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let cb_seen = Arc::clone(&seen);
    rx.set_msg_callback(Box::new(move |msg| {
        cb_seen.lock().unwrap().push(msg.name.clone());
    }));

    let poll = PollUbx {
        timeout_ms: 1500,
        retries: 2,
        ..PollUbx::new(0x0a, 0x04)
    };
    let msg = rx.poll_ubx(&poll).expect("response");
    assert_eq!(msg.name, "UBX-MON-VER");
    assert_eq!(msg.size(), 60);
    // one poll on the wire, answered on the first attempt
    assert_eq!(handle.writes_of(0x0a, 0x04), 1);

    // the response is forwarded to the consumer by the caller
    rx.version().expect("version string");
    assert!(seen.lock().unwrap().contains(&"UBX-MON-VER".to_string()));
}

#[test]
fn poll_times_out_with_retries() {
    let (transport, handle) = MockTransport::new();
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    let poll = PollUbx {
        timeout_ms: 20,
        retries: 3,
        ..PollUbx::new(0x0a, 0x04)
    };
    match rx.poll_ubx(&poll) {
        Err(PollError::Timeout) => {}
        other => panic!("expected timeout, got {other:?}"),
    }
    // the poll was re-sent on every attempt
    assert_eq!(handle.writes_of(0x0a, 0x04), 3);
}

#[test]
fn cfg_poll_nak_fails_distinctly_without_retries() {
    let (transport, handle) = MockTransport::new();
    let transport = transport.respond(0x06, 0x8b, nak_frame(0x06, 0x8b));
    let mut rx = Rx::new(Box::new(transport), fast_opts());

    let frame = cfg::make_valget_poll(CfgLayer::Bbr, 0, &[0x10110013]);
    let poll = PollUbx {
        cls: 0x06,
        msg_id: 0x8b,
        payload: ubx::payload(&frame),
        timeout_ms: 2000,
        retries: 2,
        resp_size_min: 0,
    };
    match rx.poll_ubx(&poll) {
        Err(PollError::Nak) => {}
        other => panic!("expected NAK, got {other:?}"),
    }
    // NAK answers the request conclusively, no retry
    assert_eq!(handle.writes_of(0x06, 0x8b), 1);
}

#[test]
fn get_config_empty_bbr_layer() {
    let (transport, _handle) = MockTransport::new();
    let transport = transport.respond(0x06, 0x8b, nak_frame(0x06, 0x8b));
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    let kv = rx.get_config(CfgLayer::Bbr, &[0x10110013]).unwrap();
    assert!(kv.is_empty());
}

#[test]
fn get_config_decodes_response() {
    let kv_expected = vec![
        KeyVal::new(0x10110013, CfgValue::l(true)),
        KeyVal::new(0x30110017, CfgValue::u2(2099)),
    ];
    let mut payload = vec![1u8, 0, 0, 0]; // version 1, RAM, position 0
    let mut data = vec![0u8; 64];
    let size = cfg::make_data(&mut data, &kv_expected).unwrap();
    payload.extend_from_slice(&data[..size]);
    let response = ubx::make_frame(0x06, 0x8b, &payload);

    let (transport, _handle) = MockTransport::new();
    let transport = transport.respond(0x06, 0x8b, response);
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    let kv = rx
        .get_config(CfgLayer::Ram, &[0x10110013, 0x30110017])
        .unwrap();
    assert_eq!(kv, kv_expected);
}

#[test]
fn set_config_acked() {
    let (transport, handle) = MockTransport::new();
    let transport = transport.respond(0x06, 0x8a, ack_frame(0x06, 0x8a));
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    let kv = [KeyVal::new(0x10110013, CfgValue::l(true))];
    rx.set_config(&kv, CfgLayers::RAM).unwrap();
    assert_eq!(handle.writes_of(0x06, 0x8a), 1);
}

#[test]
fn set_config_nak_aborts() {
    let (transport, _handle) = MockTransport::new();
    let transport = transport.respond(0x06, 0x8a, nak_frame(0x06, 0x8a));
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    let kv = [KeyVal::new(0x10110013, CfgValue::l(true))];
    assert!(rx.set_config(&kv, CfgLayers::RAM).is_err());
}

#[test]
fn autobaud_finds_receiver_at_38400() {
    let (transport, _handle) = MockTransport::new();
    let transport = transport
        .with_baudrate(9600)
        .answer_only_at(38400)
        .respond(0x0a, 0x04, mon_ver_frame());
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    assert!(rx.autobaud());
    assert_eq!(rx.baudrate(), 38400);
}

#[test]
fn autobaud_fails_when_nothing_answers() {
    let (transport, handle) = MockTransport::new();
    let transport = transport.with_baudrate(9600);
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    assert!(!rx.autobaud());
    // quick pass (1 try) and thorough pass (2 tries) over 6 candidates
    assert_eq!(handle.writes_of(0x0a, 0x04), 6 + 12);
}

#[test]
fn detect_passive_sees_any_known_protocol() {
    let (transport, handle) = MockTransport::new();
    handle.feed(b"$GNGLL,,,,,,V,N*7A\r\n");
    let opts = RxOpts {
        detect: Detect::Passive,
        ..fast_opts()
    };
    let mut rx = Rx::new(Box::new(transport), opts);
    assert!(rx.detect());
}

#[test]
fn open_detect_fails_without_receiver() {
    let (transport, _handle) = MockTransport::new();
    let mut rx = Rx::new(Box::new(transport), fast_opts());
    assert!(!rx.open_detect());
}
