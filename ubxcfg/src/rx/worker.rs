//! Asynchronous receiver worker. A [Receiver] owns a worker thread that
//! drives the blocking [Rx](super::Rx) driver: it pumps received bytes
//! through the framer and the epoch collector, executes queued commands and
//! delivers events to the consumer through a bounded queue.
//!
//! When the consumer cannot keep up, [Event::Msg] events (the highest-volume
//! kind) are dropped; notices, warnings, errors and completions are always
//! kept. Saturation onset and release are each reported exactly once.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};

use super::{ResetKind, Rx, RxOpts};
use crate::cfg::{CfgLayer, CfgLayers, KeyVal};
use crate::epoch::{Epoch, EpochCollector};
use crate::parser::{nmea, ubx, Message, Protocol};
use crate::port::{PortSpec, Transport};
use crate::time::time_ms;

/// Hard cap of the event queue.
pub const EVENT_QUEUE_CAP: usize = 1000;
const EVENT_QUEUE_RESUME: usize = 10;
const NO_DATA_WARN_MS: u32 = 5000;
const IDLE_SLEEP: Duration = Duration::from_millis(10);

/// Receiver state, observable by the consumer while the worker updates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RxState {
    Idle,
    Busy,
    Ready,
}

impl RxState {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Busy,
            2 => Self::Ready,
            _ => Self::Idle,
        }
    }
}

/// Commands the consumer sends to the worker. Executed in FIFO order, at
/// most one per worker loop iteration.
#[derive(Debug)]
pub enum Command {
    Noop,
    /// Change the baudrate; 0 autobauds
    Baud { baudrate: u32, uid: u64 },
    Reset { kind: ResetKind, uid: u64 },
    /// Pass bytes through to the receiver, unacknowledged
    Send { data: Vec<u8> },
    GetConfig {
        layer: CfgLayer,
        keys: Vec<u32>,
        uid: u64,
    },
    SetConfig {
        layers: CfgLayers,
        apply: bool,
        kv: Vec<KeyVal>,
        uid: u64,
    },
}

/// Events the worker delivers to the consumer.
#[derive(Debug)]
pub enum Event {
    /// A message received from the receiver
    Msg(Message),
    /// A completed navigation epoch
    Epoch(Epoch),
    Notice { text: String, uid: u64 },
    Warning { text: String, uid: u64 },
    Error { text: String, uid: u64 },
    /// Completion of a [Command::GetConfig]
    Config {
        layer: CfgLayer,
        kv: Vec<KeyVal>,
        uid: u64,
    },
    /// Completion of a [Command::SetConfig]
    Ack { ack: bool, uid: u64 },
}

#[derive(Default)]
struct EventQueueInner {
    events: VecDeque<Event>,
    saturated: bool,
}

#[derive(Default)]
struct EventQueue {
    inner: Mutex<EventQueueInner>,
}

impl EventQueue {
    fn push(&self, event: Event) {
        let mut queue = self.inner.lock().unwrap();
        let len = queue.events.len();
        if len > EVENT_QUEUE_CAP {
            if !queue.saturated {
                queue.saturated = true;
                warn!("event queue saturated, dropping messages");
                queue.events.push_back(Event::Warning {
                    text: "Event queue saturated, dropping messages!".into(),
                    uid: 0,
                });
            }
        } else if queue.saturated && len < EVENT_QUEUE_RESUME {
            queue.saturated = false;
            queue.events.push_back(Event::Notice {
                text: "Event queue drained, resuming messages".into(),
                uid: 0,
            });
        }
        if queue.saturated && matches!(event, Event::Msg(_)) {
            return;
        }
        queue.events.push_back(event);
    }

    fn pop(&self) -> Option<Event> {
        self.inner.lock().unwrap().events.pop_front()
    }

    fn notice(&self, text: impl Into<String>, uid: u64) {
        self.push(Event::Notice { text: text.into(), uid });
    }

    fn warning(&self, text: impl Into<String>, uid: u64) {
        self.push(Event::Warning { text: text.into(), uid });
    }

    fn error(&self, text: impl Into<String>, uid: u64) {
        self.push(Event::Error { text: text.into(), uid });
    }
}

enum TransportSource {
    Spec(PortSpec),
    Custom(Box<dyn Transport>),
}

/// Consumer-side handle of one receiver. Start a worker with
/// [start](Receiver::start), feed it commands, and poll events with
/// [poll_event](Receiver::poll_event).
pub struct Receiver {
    name: String,
    state: Arc<AtomicU8>,
    baudrate: Arc<AtomicU32>,
    abort: Arc<AtomicBool>,
    commands: Arc<Mutex<VecDeque<Command>>>,
    events: Arc<EventQueue>,
    worker: Option<JoinHandle<()>>,
}

impl Receiver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(AtomicU8::new(RxState::Idle as u8)),
            baudrate: Arc::new(AtomicU32::new(0)),
            abort: Arc::new(AtomicBool::new(false)),
            commands: Arc::new(Mutex::new(VecDeque::new())),
            events: Arc::new(EventQueue::default()),
            worker: None,
        }
    }

    /// Start the worker on the port a spec describes. Returns false when
    /// the receiver is not idle.
    pub fn start(&mut self, spec: PortSpec, opts: RxOpts) -> bool {
        self.start_worker(TransportSource::Spec(spec), opts)
    }

    /// Start the worker on an already-open transport.
    pub fn start_with_transport(
        &mut self,
        transport: Box<dyn Transport>,
        opts: RxOpts,
    ) -> bool {
        self.start_worker(TransportSource::Custom(transport), opts)
    }

    fn start_worker(&mut self, source: TransportSource, opts: RxOpts) -> bool {
        if self.state() != RxState::Idle || self.worker.is_some() {
            return false;
        }
        self.abort.store(false, Ordering::SeqCst);
        self.state.store(RxState::Busy as u8, Ordering::SeqCst);
        let worker = Worker {
            state: Arc::clone(&self.state),
            baudrate: Arc::clone(&self.baudrate),
            abort: Arc::clone(&self.abort),
            commands: Arc::clone(&self.commands),
            events: Arc::clone(&self.events),
        };
        let name = self.name.clone();
        self.worker = Some(
            thread::Builder::new()
                .name(name)
                .spawn(move || worker.run(source, opts))
                .expect("spawning receiver worker"),
        );
        true
    }

    /// Stop the worker: raises the abort flag, drains the worker and
    /// returns to idle.
    pub fn stop(&mut self) {
        self.abort.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    pub fn state(&self) -> RxState {
        RxState::from_u8(self.state.load(Ordering::SeqCst))
    }

    pub fn is_idle(&self) -> bool {
        self.state() == RxState::Idle
    }

    pub fn is_busy(&self) -> bool {
        self.state() == RxState::Busy
    }

    pub fn is_ready(&self) -> bool {
        self.state() == RxState::Ready
    }

    pub fn baudrate(&self) -> u32 {
        self.baudrate.load(Ordering::SeqCst)
    }

    fn command(&self, command: Command) {
        self.commands.lock().unwrap().push_back(command);
    }

    pub fn send(&self, data: Vec<u8>) {
        self.command(Command::Send { data });
    }

    pub fn set_baudrate(&self, baudrate: u32, uid: u64) {
        self.command(Command::Baud { baudrate, uid });
    }

    pub fn reset(&self, kind: ResetKind, uid: u64) {
        self.command(Command::Reset { kind, uid });
    }

    pub fn get_config(&self, layer: CfgLayer, keys: Vec<u32>, uid: u64) {
        self.command(Command::GetConfig { layer, keys, uid });
    }

    pub fn set_config(&self, layers: CfgLayers, apply: bool, kv: Vec<KeyVal>, uid: u64) {
        self.command(Command::SetConfig { layers, apply, kv, uid });
    }

    /// Next pending event, if any. Events arrive in the order the worker
    /// produced them.
    pub fn poll_event(&self) -> Option<Event> {
        self.events.pop()
    }
}

impl Drop for Receiver {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Worker {
    state: Arc<AtomicU8>,
    baudrate: Arc<AtomicU32>,
    abort: Arc<AtomicBool>,
    commands: Arc<Mutex<VecDeque<Command>>>,
    events: Arc<EventQueue>,
}

impl Worker {
    fn run(self, source: TransportSource, opts: RxOpts) {
        debug!("worker started");
        self.run_inner(source, opts);
        self.baudrate.store(0, Ordering::SeqCst);
        self.state.store(RxState::Idle as u8, Ordering::SeqCst);
        debug!("worker stopped");
    }

    fn run_inner(&self, source: TransportSource, opts: RxOpts) {
        let desc = match &source {
            TransportSource::Spec(spec) => spec.to_string(),
            TransportSource::Custom(_) => "custom transport".into(),
        };
        self.events.notice(format!("Connecting receiver ({desc})"), 0);

        let collector = Arc::new(Mutex::new(EpochCollector::new()));
        let events = Arc::clone(&self.events);
        let cb_collector = Arc::clone(&collector);
        let handler = move |msg: &Message| handle_message(&events, &cb_collector, msg);

        let mut rx = match source {
            TransportSource::Spec(spec) => {
                match Rx::open_with_abort(&spec, opts, Arc::clone(&self.abort)) {
                    Ok(rx) => rx,
                    Err(e) => {
                        self.events
                            .error(format!("Failed connecting receiver ({desc}): {e}"), 0);
                        return;
                    }
                }
            }
            TransportSource::Custom(transport) => {
                let mut rx = Rx::with_abort(transport, opts, Arc::clone(&self.abort));
                if !rx.open_detect() {
                    self.events
                        .error(format!("Failed connecting receiver ({desc})"), 0);
                    return;
                }
                rx
            }
        };
        rx.set_msg_callback(Box::new(handler.clone()));

        self.state.store(RxState::Ready as u8, Ordering::SeqCst);
        self.baudrate.store(rx.baudrate(), Ordering::SeqCst);
        self.events.notice(
            format!("Receiver connected ({desc}, baudrate {})", rx.baudrate()),
            0,
        );

        let mut last_msg = time_ms();
        while !self.abort.load(Ordering::SeqCst) {
            let mut idle = true;

            // pump the transport through the framer
            loop {
                match rx.get_next_message() {
                    Ok(Some(msg)) => {
                        handler(&msg);
                        last_msg = time_ms();
                        idle = false;
                    }
                    Ok(None) => break,
                    Err(e) => {
                        self.events.warning(format!("Receiver read failed: {e}"), 0);
                        if !rx.detect() {
                            self.events.error("Lost receiver", 0);
                            return;
                        }
                        break;
                    }
                }
            }

            // execute at most one command per iteration
            let command = self.commands.lock().unwrap().pop_front();
            if let Some(command) = command {
                self.execute(&mut rx, command);
                idle = false;
            }

            if idle {
                if time_ms().wrapping_sub(last_msg) > NO_DATA_WARN_MS {
                    self.events.warning("No data from receiver!", 0);
                    last_msg = time_ms();
                }
                thread::sleep(IDLE_SLEEP);
            }
        }
        self.events.notice(format!("Receiver disconnected ({desc})"), 0);
    }

    fn execute(&self, rx: &mut Rx, command: Command) {
        match command {
            Command::Noop => {}
            Command::Send { data } => {
                if let Err(e) = rx.send(&data) {
                    self.events.warning(format!("Send failed: {e}"), 0);
                }
            }
            Command::Baud { baudrate, uid } => {
                self.state.store(RxState::Busy as u8, Ordering::SeqCst);
                if baudrate > 0 {
                    match rx.set_baudrate(baudrate) {
                        Ok(()) => self
                            .events
                            .notice(format!("Baudrate set to {baudrate}"), uid),
                        Err(e) => self
                            .events
                            .warning(format!("Failed setting baudrate to {baudrate}: {e}"), uid),
                    }
                } else if rx.autobaud() {
                    self.events
                        .notice(format!("Autobauded to {}", rx.baudrate()), uid);
                } else {
                    self.events.warning("Autobaud failed!", uid);
                }
                self.baudrate.store(rx.baudrate(), Ordering::SeqCst);
                self.state.store(RxState::Ready as u8, Ordering::SeqCst);
            }
            Command::Reset { kind, uid } => {
                self.state.store(RxState::Busy as u8, Ordering::SeqCst);
                self.events
                    .notice(format!("Resetting: {}", kind.as_str()), uid);
                match rx.reset(kind) {
                    Ok(()) => self
                        .events
                        .notice(format!("Reset successful: {}", kind.as_str()), uid),
                    Err(e) => self
                        .events
                        .warning(format!("Reset failed: {}: {e}", kind.as_str()), uid),
                }
                self.baudrate.store(rx.baudrate(), Ordering::SeqCst);
                self.state.store(RxState::Ready as u8, Ordering::SeqCst);
            }
            Command::GetConfig { layer, keys, uid } => {
                self.state.store(RxState::Busy as u8, Ordering::SeqCst);
                self.events
                    .notice(format!("Getting configuration for layer {layer}"), uid);
                match rx.get_config(layer, &keys) {
                    Ok(kv) => self.events.push(Event::Config { layer, kv, uid }),
                    Err(e) => self
                        .events
                        .warning(format!("Failed polling configuration: {e}"), uid),
                }
                self.state.store(RxState::Ready as u8, Ordering::SeqCst);
            }
            Command::SetConfig { layers, apply, kv, uid } => {
                self.state.store(RxState::Busy as u8, Ordering::SeqCst);
                let info = format!("{} values, layers {layers}", kv.len());
                self.events
                    .notice(format!("Setting configuration ({info})"), uid);
                let mut ack = true;
                match rx.set_config(&kv, layers) {
                    Ok(()) => {
                        self.events
                            .notice(format!("Configuration set ({info})"), uid);
                        if apply {
                            self.events.notice("Applying configuration", uid);
                            match rx.reset(ResetKind::Soft) {
                                Ok(()) => {
                                    self.events.notice("Configuration applied", uid);
                                }
                                Err(_) => {
                                    self.events
                                        .warning("Failed applying configuration!", uid);
                                    ack = false;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        self.events
                            .warning(format!("Failed setting configuration ({info}): {e}"), uid);
                        ack = false;
                    }
                }
                self.events.push(Event::Ack { ack, uid });
                self.state.store(RxState::Ready as u8, Ordering::SeqCst);
            }
        }
    }
}

fn handle_message(events: &EventQueue, collector: &Mutex<EpochCollector>, msg: &Message) {
    let epoch = collector.lock().unwrap().collect(msg);
    events.push(Event::Msg(msg.clone()));
    if let Some(epoch) = epoch {
        events.push(Event::Epoch(epoch));
    }
    match msg.protocol {
        Protocol::Ubx => {
            let (cls, id) = ubx::cls_id(&msg.data);
            if cls == ubx::UBX_INF_CLSID {
                if let Some(text) = &msg.info {
                    match id {
                        ubx::UBX_INF_ERROR_MSGID => events.error(text.clone(), 0),
                        ubx::UBX_INF_WARNING_MSGID => events.warning(text.clone(), 0),
                        _ => {}
                    }
                }
            }
        }
        Protocol::Nmea => {
            if let Some((msg_type, text)) = nmea::txt_msg(&msg.data) {
                match msg_type {
                    0 => events.error(text, 0),
                    1 => events.warning(text, 0),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}
