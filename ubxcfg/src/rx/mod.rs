//! Receiver control: a blocking driver ([Rx]) that owns the transport and
//! the framer and implements receiver detection, autobauding and the UBX
//! request/response protocol, plus an asynchronous worker ([Receiver]) that
//! drives an [Rx] from a command queue and delivers events.

mod worker;

pub use worker::{Command, Event, Receiver, RxState, EVENT_QUEUE_CAP};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, trace, warn};

use crate::cfg::{
    make_valget_poll, make_valset_msgs, parse_valget_response, CfgLayer, CfgLayers, KeyVal,
};
use crate::constants::CFG_MAX_KV;
use crate::error::{PollError, RxError};
use crate::parser::{ubx, Message, Parser, ParserStats, Protocol};
use crate::port::{self, PortSpec, Transport};
use crate::time::time_ms;

/// Receiver detection method used by [Rx::detect].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detect {
    /// Assume the port settings are correct and a receiver is present
    None,
    /// Actively check for a u-blox receiver (UBX-MON-VER poll)
    #[default]
    Ubx,
    /// Passively wait for any message of a known protocol
    Passive,
}

/// Receiver options.
#[derive(Debug, Clone)]
pub struct RxOpts {
    pub detect: Detect,
    /// Automatically find the baudrate (ports that can change it only)
    pub autobaud: bool,
    /// Initial baudrate (0 keeps the port's)
    pub baudrate: u32,
    /// Timeout and retries of the quick autobaud pass
    pub quick_timeout_ms: u32,
    pub quick_retries: u32,
    /// Timeout and retries of the thorough autobaud pass
    pub long_timeout_ms: u32,
    pub long_retries: u32,
}

impl Default for RxOpts {
    fn default() -> Self {
        Self {
            detect: Detect::Ubx,
            autobaud: true,
            baudrate: 0,
            quick_timeout_ms: 1000,
            quick_retries: 1,
            long_timeout_ms: 2500,
            long_retries: 2,
        }
    }
}

/// Parameters of a UBX poll (request/response exchange).
#[derive(Debug, Clone, Copy)]
pub struct PollUbx<'a> {
    pub cls: u8,
    pub msg_id: u8,
    pub payload: &'a [u8],
    /// 0 selects the default of 1500 ms
    pub timeout_ms: u32,
    /// 0 selects the default of 2
    pub retries: u32,
    /// Minimum size of the expected response frame
    pub resp_size_min: usize,
}

impl PollUbx<'_> {
    pub const fn new(cls: u8, msg_id: u8) -> Self {
        PollUbx {
            cls,
            msg_id,
            payload: &[],
            timeout_ms: 0,
            retries: 0,
            resp_size_min: 0,
        }
    }
}

/// Receiver reset operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResetKind {
    /// Controlled software reset
    Soft,
    /// Controlled hardware reset
    Hard,
    /// Hotstart (keep all navigation data)
    Hot,
    /// Warmstart (clear ephemerides)
    Warm,
    /// Coldstart (clear all navigation data)
    Cold,
    /// Revert configuration to default, keep navigation data
    Default,
    /// Revert configuration to default and coldstart
    Factory,
    /// Stop navigation
    GnssStop,
    /// Start navigation
    GnssStart,
    /// Restart navigation
    GnssRestart,
    /// Safeboot mode (UBX-UPD-SAFEBOOT)
    Safeboot,
}

impl ResetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Soft => "Software reset",
            Self::Hard => "Hardware reset",
            Self::Hot => "Hotstart",
            Self::Warm => "Warmstart",
            Self::Cold => "Coldstart",
            Self::Default => "Default",
            Self::Factory => "Factory",
            Self::GnssStop => "Stop GNSS",
            Self::GnssStart => "Start GNSS",
            Self::GnssRestart => "Restart GNSS",
            Self::Safeboot => "Safeboot",
        }
    }

    /// navBbrMask and resetMode of the UBX-CFG-RST message.
    const fn rst_payload(self) -> (u16, u8) {
        match self {
            Self::Soft => (0x0000, 0x01),
            Self::Hard => (0x0000, 0x04),
            Self::Hot => (0x0000, 0x02),
            Self::Warm => (0x0001, 0x02),
            Self::Cold => (0xffff, 0x02),
            Self::Default => (0x0000, 0x00),
            Self::Factory => (0xffff, 0x04),
            Self::GnssStop => (0x0000, 0x08),
            Self::GnssStart => (0x0000, 0x09),
            Self::GnssRestart | Self::Safeboot => (0x0000, 0x02),
        }
    }

    /// Whether the reset may cause the USB device to re-enumerate.
    const fn reenumerates(self) -> bool {
        !matches!(self, Self::Hot | Self::Warm | Self::Cold)
    }
}

const POLL_TIMEOUT_DEFAULT_MS: u32 = 1500;
const POLL_RETRIES_DEFAULT: u32 = 2;
const CFG_POLL_TIMEOUT_MS: u32 = 2000;
const CFG_ACK_TIMEOUT_MS: u32 = 2500;
const DETECT_PASSIVE_TIMEOUT_MS: u32 = 3000;
const READ_BUF_SIZE: usize = 4096;
const IDLE_SLEEP: Duration = Duration::from_millis(10);

type MsgCallback = Box<dyn FnMut(&Message) + Send>;

/// Blocking receiver driver. Owns exactly one transport and one framer.
///
/// All waiting operations observe the abort flag (see [Rx::abort_handle])
/// and return promptly once it is raised.
pub struct Rx {
    transport: Box<dyn Transport>,
    parser: Parser,
    opts: RxOpts,
    abort: Arc<AtomicBool>,
    msg_cb: Option<MsgCallback>,
    read_buf: Vec<u8>,
}

impl Rx {
    pub fn new(transport: Box<dyn Transport>, opts: RxOpts) -> Self {
        Self::with_abort(transport, opts, Arc::new(AtomicBool::new(false)))
    }

    /// Like [new](Self::new), with an externally owned abort flag.
    pub fn with_abort(
        transport: Box<dyn Transport>,
        opts: RxOpts,
        abort: Arc<AtomicBool>,
    ) -> Self {
        Self {
            transport,
            parser: Parser::new(),
            opts,
            abort,
            msg_cb: None,
            read_buf: vec![0; READ_BUF_SIZE],
        }
    }

    /// Open the transport a spec describes and detect the receiver per the
    /// options (autobaud and/or active/passive detection).
    pub fn open(spec: &PortSpec, opts: RxOpts) -> Result<Self, RxError> {
        Self::open_with_abort(spec, opts, Arc::new(AtomicBool::new(false)))
    }

    /// Like [open](Self::open), with an externally owned abort flag.
    pub fn open_with_abort(
        spec: &PortSpec,
        opts: RxOpts,
        abort: Arc<AtomicBool>,
    ) -> Result<Self, RxError> {
        let mut opts = opts;
        if let Some(baudrate) = spec.baudrate() {
            opts.baudrate = baudrate;
            opts.autobaud = false;
        }
        let transport = port::open(spec)?;
        let mut rx = Self::with_abort(transport, opts, abort);
        if !rx.open_detect() {
            return Err(RxError::Response("receiver not detected".into()));
        }
        Ok(rx)
    }

    /// Apply the configured baudrate, autobaud and detection. Called by
    /// [open](Self::open); public for drivers that bring their own
    /// transport.
    pub fn open_detect(&mut self) -> bool {
        if self.opts.baudrate != 0 && self.transport.can_baudrate() {
            if let Err(e) = self.transport.set_baudrate(self.opts.baudrate) {
                warn!("setting baudrate {} failed: {e}", self.opts.baudrate);
                return false;
            }
        }
        if self.opts.autobaud
            && self.transport.can_baudrate()
            && self.opts.detect != Detect::None
        {
            return self.autobaud();
        }
        self.detect()
    }

    /// Set a callback that receives every message seen while a
    /// request/response operation is waiting for its answer.
    pub fn set_msg_callback(&mut self, cb: MsgCallback) {
        self.msg_cb = Some(cb);
    }

    /// The abort flag shared with all waiting operations.
    pub fn abort_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort)
    }

    pub fn abort(&self) {
        self.abort.store(true, Ordering::SeqCst);
    }

    fn aborted(&self) -> bool {
        self.abort.load(Ordering::SeqCst)
    }

    pub fn baudrate(&self) -> u32 {
        self.transport.baudrate()
    }

    pub fn can_baudrate(&self) -> bool {
        self.transport.can_baudrate()
    }

    pub fn set_baudrate(&mut self, baudrate: u32) -> Result<(), RxError> {
        self.transport.set_baudrate(baudrate)?;
        Ok(())
    }

    pub fn parser_stats(&self) -> ParserStats {
        *self.parser.stats()
    }

    fn forward(&mut self, msg: &Message) {
        if let Some(cb) = &mut self.msg_cb {
            cb(msg);
        }
    }

    /// Send raw bytes to the receiver.
    pub fn send(&mut self, data: &[u8]) -> Result<(), RxError> {
        trace!("send {} bytes", data.len());
        self.transport.write(data)?;
        Ok(())
    }

    /// Pump the transport into the framer and return the next message, if
    /// any. Does not block beyond the transport's short read timeout.
    pub fn get_next_message(&mut self) -> Result<Option<Message>, RxError> {
        loop {
            if let Some(msg) = self.parser.process() {
                return Ok(Some(msg));
            }
            let size = self.transport.read(&mut self.read_buf)?;
            if size == 0 {
                return Ok(None);
            }
            if !self.parser.add(&self.read_buf[..size]) {
                // buffer full of unclassifiable bytes, drop the oldest
                while self.parser.pending() + size > crate::constants::PARSER_BUF_SIZE {
                    if self.parser.flush().is_none() {
                        break;
                    }
                }
                self.parser.add(&self.read_buf[..size]);
            }
        }
    }

    /// Like [get_next_message](Self::get_next_message), but waits up to
    /// `timeout_ms` for a message.
    pub fn get_next_message_timeout(
        &mut self,
        timeout_ms: u32,
    ) -> Result<Option<Message>, RxError> {
        let deadline = time_ms() + timeout_ms;
        loop {
            if self.aborted() {
                return Ok(None);
            }
            if let Some(msg) = self.get_next_message()? {
                return Ok(Some(msg));
            }
            if time_ms() >= deadline {
                return Ok(None);
            }
            thread::sleep(IDLE_SLEEP);
        }
    }

    /// Poll the receiver with a UBX message and wait for the response with
    /// matching class and message id. For UBX-CFG polls a matching
    /// UBX-ACK-NAK means the item is not pollable and fails distinctly
    /// ([PollError::Nak]). Other messages received while waiting are passed
    /// to the message callback.
    pub fn poll_ubx(&mut self, poll: &PollUbx) -> Result<Message, PollError> {
        let timeout = if poll.timeout_ms > 0 {
            poll.timeout_ms
        } else {
            POLL_TIMEOUT_DEFAULT_MS
        };
        let retries = if poll.retries > 0 {
            poll.retries
        } else {
            POLL_RETRIES_DEFAULT
        };
        let resp_size_min = poll.resp_size_min.max(crate::constants::UBX_FRAME_SIZE);
        let is_ubx_cfg = poll.cls == ubx::UBX_CFG_CLSID;
        let frame = ubx::make_frame(poll.cls, poll.msg_id, poll.payload);
        let name = ubx::message_name(poll.cls, poll.msg_id);

        for attempt in 1..=retries {
            debug!("poll {name}, timeout={timeout}, attempt {attempt}/{retries}");
            self.transport.write(&frame)?;
            let deadline = time_ms() + timeout;
            while time_ms() < deadline {
                if self.aborted() {
                    return Err(PollError::Aborted);
                }
                let msg = match self.get_next_message().map_err(rx_to_io)? {
                    Some(msg) => msg,
                    None => {
                        thread::sleep(IDLE_SLEEP);
                        continue;
                    }
                };
                if msg.protocol == Protocol::Ubx
                    && msg.size() >= resp_size_min
                    && ubx::cls_id(&msg.data) == (poll.cls, poll.msg_id)
                {
                    trace!("poll answer {}, size={}", msg.name, msg.size());
                    return Ok(msg);
                }
                // UBX-CFG polls can return NAK in case the message is not pollable
                if is_ubx_cfg
                    && ubx::cls_id(&msg.data) == (ubx::UBX_ACK_CLSID, ubx::UBX_ACK_NAK_MSGID)
                    && ack_matches(&msg, poll.cls, poll.msg_id)
                {
                    self.forward(&msg);
                    debug!("UBX-ACK-NAK: {name}");
                    return Err(PollError::Nak);
                }
                self.forward(&msg);
            }
            debug!("poll {name} timeout");
        }
        Err(PollError::Timeout)
    }

    /// Send a UBX-CFG message and wait for the matching UBX-ACK-ACK
    /// (or -NAK, which fails).
    pub fn send_ubx_cfg(&mut self, frame: &[u8], timeout_ms: u32) -> Result<(), PollError> {
        let (cls, msg_id) = ubx::cls_id(frame);
        debug!("sending {}, size {}", ubx::message_name(cls, msg_id), frame.len());
        self.transport.write(frame)?;
        let timeout = if timeout_ms > 0 { timeout_ms } else { 1000 };
        let deadline = time_ms() + timeout;
        while time_ms() < deadline {
            if self.aborted() {
                return Err(PollError::Aborted);
            }
            let msg = match self.get_next_message().map_err(rx_to_io)? {
                Some(msg) => msg,
                None => {
                    thread::sleep(IDLE_SLEEP);
                    continue;
                }
            };
            let is_ack = msg.protocol == Protocol::Ubx
                && ubx::cls_id(&msg.data).0 == ubx::UBX_ACK_CLSID
                && ack_matches(&msg, cls, msg_id);
            self.forward(&msg);
            if is_ack {
                return match ubx::cls_id(&msg.data).1 {
                    ubx::UBX_ACK_ACK_MSGID => Ok(()),
                    _ => Err(PollError::Nak),
                };
            }
        }
        Err(PollError::Timeout)
    }

    /// Version string of the receiver, from a UBX-MON-VER poll.
    pub fn version(&mut self) -> Option<String> {
        let poll = PollUbx::new(ubx::UBX_MON_CLSID, ubx::UBX_MON_VER_MSGID);
        let msg = self.poll_ubx(&poll).ok()?;
        let version = ubx::mon_ver_str(ubx::payload(&msg.data));
        self.forward(&msg);
        version
    }

    /// Detect the receiver per the configured method.
    pub fn detect(&mut self) -> bool {
        match self.opts.detect {
            Detect::None => true,
            Detect::Ubx => {
                let poll = PollUbx {
                    timeout_ms: self.opts.quick_timeout_ms,
                    retries: self.opts.quick_retries,
                    ..PollUbx::new(ubx::UBX_MON_CLSID, ubx::UBX_MON_VER_MSGID)
                };
                match self.poll_ubx(&poll) {
                    Ok(msg) => {
                        self.forward(&msg);
                        true
                    }
                    Err(_) => false,
                }
            }
            Detect::Passive => {
                let deadline = time_ms() + DETECT_PASSIVE_TIMEOUT_MS;
                while !self.aborted() && time_ms() < deadline {
                    match self.get_next_message() {
                        Ok(Some(msg)) => {
                            let known = msg.protocol != Protocol::Garbage;
                            self.forward(&msg);
                            if known {
                                return true;
                            }
                        }
                        Ok(None) => thread::sleep(IDLE_SLEEP),
                        Err(_) => return false,
                    }
                }
                false
            }
        }
    }

    fn flush_rx(&mut self) {
        let mut reads = 1000;
        let mut buf = [0u8; 256];
        while reads > 0 && !self.aborted() {
            match self.transport.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => reads -= 1,
            }
        }
    }

    fn flush_tx(&mut self) {
        let _ = self.transport.write(&[0x55; 1024]);
    }

    /// Find the baudrate the receiver talks at. Tries the current baudrate
    /// first, then the candidate list, with a quick pass and a thorough
    /// pass. Returns true with the transport left at the working baudrate.
    pub fn autobaud(&mut self) -> bool {
        let current = self.transport.baudrate();
        let mut candidates = vec![current];
        for baudrate in [9600, 38400, 115200, 230400, 460800, 921600] {
            if baudrate != current {
                candidates.push(baudrate);
            }
        }
        let passes = [
            (self.opts.quick_timeout_ms, self.opts.quick_retries, false),
            (self.opts.long_timeout_ms, self.opts.long_retries, true),
        ];
        for (timeout_ms, retries, flush) in passes {
            for baudrate in &candidates {
                if self.aborted() {
                    return false;
                }
                if self.transport.set_baudrate(*baudrate).is_err() {
                    continue;
                }
                debug!("autobaud {baudrate}{}", if flush { " (flush)" } else { "" });
                if flush {
                    self.flush_rx();
                    self.flush_tx();
                }
                let poll = PollUbx {
                    timeout_ms,
                    retries,
                    ..PollUbx::new(ubx::UBX_MON_CLSID, ubx::UBX_MON_VER_MSGID)
                };
                if let Ok(msg) = self.poll_ubx(&poll) {
                    debug!("autobaud {baudrate} success");
                    self.forward(&msg);
                    return true;
                }
            }
        }
        debug!("autobaud fail");
        false
    }

    /// Poll configuration of a layer. Polls are paged by the receiver's
    /// 64-pairs-per-message limit and accumulated into one list. An empty
    /// BBR or Flash layer yields an empty list.
    pub fn get_config(
        &mut self,
        layer: CfgLayer,
        keys: &[u32],
    ) -> Result<Vec<KeyVal>, RxError> {
        debug!("polling configuration for layer {layer}");
        let mut kv = vec![];
        let mut position: u16 = 0;
        loop {
            if self.aborted() {
                return Err(PollError::Aborted.into());
            }
            let frame = make_valget_poll(layer, position, keys);
            let poll = PollUbx {
                cls: ubx::UBX_CFG_CLSID,
                msg_id: ubx::UBX_CFG_VALGET_MSGID,
                payload: ubx::payload(&frame),
                timeout_ms: CFG_POLL_TIMEOUT_MS,
                retries: 2,
                resp_size_min: 0,
            };
            let msg = match self.poll_ubx(&poll) {
                Ok(msg) => msg,
                Err(PollError::Nak) => {
                    // no data in this layer
                    debug!("no data in layer {layer}");
                    return Ok(vec![]);
                }
                Err(e) => {
                    warn!("no response polling UBX-CFG-VALGET (position={position}, layer={layer})");
                    return Err(e.into());
                }
            };
            self.forward(&msg);

            let payload = ubx::payload(&msg.data);
            if payload.len() < 4 + 4 + 1 {
                // no key-value pairs in the response
                if position > 0 || matches!(layer, CfgLayer::Bbr | CfgLayer::Flash) {
                    break;
                }
                return Err(RxError::Response(format!(
                    "bad UBX-CFG-VALGET response (position={position}, layer={layer})"
                )));
            }
            let (resp_layer, resp_position, page) =
                parse_valget_response(payload).map_err(|e| RxError::Response(e.to_string()))?;
            if resp_layer != layer.valget_value() || resp_position != position {
                return Err(RxError::Response(format!(
                    "unexpected UBX-CFG-VALGET response (position={resp_position}, layer={resp_layer})"
                )));
            }
            let page_len = page.len();
            kv.extend(page);
            debug!("received {page_len} items (position={position}, layer={layer})");
            if page_len < CFG_MAX_KV {
                break;
            }
            position += CFG_MAX_KV as u16;
        }
        Ok(kv)
    }

    /// Write configuration to the given layers, batching into VALSET
    /// transactions and confirming each message via UBX-ACK.
    pub fn set_config(&mut self, kv: &[KeyVal], layers: CfgLayers) -> Result<(), RxError> {
        let msgs =
            make_valset_msgs(kv, layers).map_err(|e| RxError::Response(e.to_string()))?;
        debug!(
            "sending {} key-value pairs in {} UBX-CFG-VALSET messages",
            kv.len(),
            msgs.len()
        );
        for (ix, frame) in msgs.iter().enumerate() {
            debug!("sending UBX-CFG-VALSET {}/{}", ix + 1, msgs.len());
            self.send_ubx_cfg(frame, CFG_ACK_TIMEOUT_MS)?;
        }
        Ok(())
    }

    /// Reset the receiver. Resets that re-enumerate the USB device close
    /// and reopen the transport; all kinds re-detect the receiver at the
    /// end.
    pub fn reset(&mut self, kind: ResetKind) -> Result<(), RxError> {
        debug!("receiver reset: {}", kind.as_str());
        if matches!(kind, ResetKind::Default | ResetKind::Factory) {
            // UBX-CFG-VALDEL has no wildcard, so clear BBR and Flash with
            // the legacy UBX-CFG-CFG
            let mut payload = [0u8; 13];
            payload[0..4].copy_from_slice(&0x0000_1f1fu32.to_le_bytes()); // clearMask
            payload[12] = 0x03; // devBbr | devFlash
            let frame = ubx::make_frame(ubx::UBX_CFG_CLSID, ubx::UBX_CFG_CFG_MSGID, &payload);
            self.send_ubx_cfg(&frame, 2000)
                .map_err(|e| RxError::Response(format!("clearing configuration failed: {e}")))?;
        }

        let frame = if kind == ResetKind::Safeboot {
            ubx::make_frame(ubx::UBX_UPD_CLSID, ubx::UBX_UPD_SAFEBOOT_MSGID, &[])
        } else {
            let (nav_bbr_mask, reset_mode) = kind.rst_payload();
            let mut payload = [0u8; 4];
            payload[0..2].copy_from_slice(&nav_bbr_mask.to_le_bytes());
            payload[2] = reset_mode;
            ubx::make_frame(ubx::UBX_CFG_CLSID, ubx::UBX_CFG_RST_MSGID, &payload)
        };
        // no ack for UBX-CFG-RST
        self.transport.write(&frame)?;

        if kind.reenumerates() {
            thread::sleep(Duration::from_millis(1000));
            if self.aborted() {
                return Err(PollError::Aborted.into());
            }
            self.transport.reconnect()?;
        }
        if !self.detect() {
            return Err(RxError::Response(format!(
                "receiver not responding after {}",
                kind.as_str()
            )));
        }
        Ok(())
    }
}

fn ack_matches(msg: &Message, cls: u8, msg_id: u8) -> bool {
    let payload = ubx::payload(&msg.data);
    payload.len() >= 2 && payload[0] == cls && payload[1] == msg_id
}

fn rx_to_io(e: RxError) -> PollError {
    match e {
        RxError::Io(e) => PollError::Io(e),
        other => PollError::Io(std::io::Error::other(other.to_string())),
    }
}
