//! Worker tests: event ordering, command correlation ids, queue
//! saturation behavior.

mod common;

use std::thread;
use std::time::{Duration, Instant};

use common::{mon_ver_frame, MockTransport};
use ubxcfg::cfg::{self, CfgLayer, CfgLayers, CfgValue, KeyVal};
use ubxcfg::parser::ubx;
use ubxcfg::rx::{Detect, Receiver, RxOpts, RxState};
use ubxcfg::Event;

fn fast_opts(detect: Detect) -> RxOpts {
    RxOpts {
        detect,
        autobaud: false,
        baudrate: 0,
        quick_timeout_ms: 20,
        quick_retries: 1,
        long_timeout_ms: 50,
        long_retries: 2,
    }
}

fn wait_for_state(receiver: &Receiver, state: RxState) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while receiver.state() != state {
        assert!(Instant::now() < deadline, "timed out waiting for {state:?}");
        thread::sleep(Duration::from_millis(5));
    }
}

fn drain_for(receiver: &Receiver, duration: Duration) -> Vec<Event> {
    let deadline = Instant::now() + duration;
    let mut events = vec![];
    while Instant::now() < deadline {
        match receiver.poll_event() {
            Some(event) => events.push(event),
            None => thread::sleep(Duration::from_millis(5)),
        }
    }
    events
}

fn valget_response(kv: &[KeyVal]) -> Vec<u8> {
    let mut payload = vec![1u8, 0, 0, 0];
    let mut data = vec![0u8; kv.len() * 12];
    let size = cfg::make_data(&mut data, kv).unwrap();
    payload.extend_from_slice(&data[..size]);
    ubx::make_frame(0x06, 0x8b, &payload)
}

#[test]
fn start_detect_and_stop() {
    let (transport, _handle) = MockTransport::new();
    let transport = transport.respond(0x0a, 0x04, mon_ver_frame());
    let mut receiver = Receiver::new("rx-test");
    assert!(receiver.is_idle());
    assert!(receiver.start_with_transport(Box::new(transport), fast_opts(Detect::Ubx)));
    wait_for_state(&receiver, RxState::Ready);
    // a second start is refused while the worker runs
    let (second, _) = MockTransport::new();
    assert!(!receiver.start_with_transport(Box::new(second), fast_opts(Detect::None)));
    receiver.stop();
    assert!(receiver.is_idle());
    let events = drain_for(&receiver, Duration::from_millis(50));
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::Notice { text, .. } if text.contains("connected"))));
}

#[test]
fn start_failure_returns_to_idle() {
    let (transport, _handle) = MockTransport::new();
    let mut receiver = Receiver::new("rx-test");
    assert!(receiver.start_with_transport(Box::new(transport), fast_opts(Detect::Ubx)));
    wait_for_state(&receiver, RxState::Idle);
    let events = drain_for(&receiver, Duration::from_millis(50));
    assert!(events.iter().any(|e| matches!(e, Event::Error { .. })));
}

#[test]
fn get_config_event_carries_correlation_id() {
    let kv = vec![KeyVal::new(0x10110013, CfgValue::l(true))];
    let (transport, _handle) = MockTransport::new();
    let transport = transport
        .respond(0x0a, 0x04, mon_ver_frame())
        .respond(0x06, 0x8b, valget_response(&kv));
    let mut receiver = Receiver::new("rx-test");
    assert!(receiver.start_with_transport(Box::new(transport), fast_opts(Detect::Ubx)));
    wait_for_state(&receiver, RxState::Ready);

    receiver.get_config(CfgLayer::Ram, vec![0x10110013], 42);
    let events = drain_for(&receiver, Duration::from_millis(500));

    let notice_ix = events
        .iter()
        .position(|e| matches!(e, Event::Notice { text, uid: 42 } if text.contains("Getting")))
        .expect("notice for the command");
    let msg_ix = events
        .iter()
        .position(|e| matches!(e, Event::Msg(m) if m.name == "UBX-CFG-VALGET"))
        .expect("the response is also a message event");
    let config_ix = events
        .iter()
        .position(|e| matches!(e, Event::Config { uid: 42, kv: got, .. } if *got == kv))
        .expect("config completion");
    assert!(notice_ix < msg_ix);
    assert!(msg_ix < config_ix);
}

#[test]
fn commands_execute_in_fifo_order() {
    let kv = vec![KeyVal::new(0x10110013, CfgValue::l(true))];
    let (transport, _handle) = MockTransport::new();
    let transport = transport
        .respond(0x0a, 0x04, mon_ver_frame())
        .respond(0x06, 0x8b, valget_response(&kv))
        .respond(0x06, 0x8a, ubx::make_frame(0x05, 0x01, &[0x06, 0x8a]));
    let mut receiver = Receiver::new("rx-test");
    assert!(receiver.start_with_transport(Box::new(transport), fast_opts(Detect::Ubx)));
    wait_for_state(&receiver, RxState::Ready);

    receiver.get_config(CfgLayer::Ram, vec![0x10110013], 1);
    receiver.set_config(CfgLayers::RAM, false, kv.clone(), 2);
    receiver.get_config(CfgLayer::Ram, vec![0x10110013], 3);

    let events = drain_for(&receiver, Duration::from_millis(800));
    let completions: Vec<u64> = events
        .iter()
        .filter_map(|e| match e {
            Event::Config { uid, .. } => Some(*uid),
            Event::Ack { uid, ack: true } => Some(*uid),
            _ => None,
        })
        .collect();
    assert_eq!(completions, vec![1, 2, 3]);
}

#[test]
fn queue_saturation_drops_only_messages() {
    let (transport, handle) = MockTransport::new();
    let mut receiver = Receiver::new("rx-test");

    // a flood the consumer does not keep up with
    let frame = ubx::make_frame(0x05, 0x01, &[0x04, 0x05]);
    let mut flood = vec![];
    for _ in 0..1500 {
        flood.extend_from_slice(&frame);
    }
    handle.feed(&flood);

    assert!(receiver.start_with_transport(Box::new(transport), fast_opts(Detect::None)));
    wait_for_state(&receiver, RxState::Ready);
    thread::sleep(Duration::from_millis(500)); // let the worker pump it all

    let events = drain_for(&receiver, Duration::from_millis(300));
    let num_msgs = events
        .iter()
        .filter(|e| matches!(e, Event::Msg(_)))
        .count();
    let saturation_warnings = events
        .iter()
        .filter(|e| matches!(e, Event::Warning { text, .. } if text.contains("saturated")))
        .count();
    assert!(num_msgs < 1500, "some message events must have been dropped");
    assert!(num_msgs > 0);
    assert_eq!(saturation_warnings, 1);

    // once drained, delivery resumes and the release is reported once
    handle.feed(&frame);
    let events = drain_for(&receiver, Duration::from_millis(300));
    let resumed = events
        .iter()
        .filter(|e| matches!(e, Event::Notice { text, .. } if text.contains("resuming")))
        .count();
    let num_msgs = events
        .iter()
        .filter(|e| matches!(e, Event::Msg(_)))
        .count();
    assert_eq!(resumed, 1);
    assert_eq!(num_msgs, 1);
    receiver.stop();
}

#[test]
fn send_command_reaches_the_wire() {
    let (transport, handle) = MockTransport::new();
    let transport = transport.respond(0x0a, 0x04, mon_ver_frame());
    let mut receiver = Receiver::new("rx-test");
    assert!(receiver.start_with_transport(Box::new(transport), fast_opts(Detect::Ubx)));
    wait_for_state(&receiver, RxState::Ready);

    receiver.send(vec![0x55, 0xaa, 0x55]);
    let deadline = Instant::now() + Duration::from_secs(1);
    loop {
        if handle.written().iter().any(|w| w == &[0x55, 0xaa, 0x55]) {
            break;
        }
        assert!(Instant::now() < deadline, "send never hit the transport");
        thread::sleep(Duration::from_millis(5));
    }
}
