//! Mock transport for driving the receiver driver without hardware.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};

use ubxcfg::Transport;

/// Shared handles into a [MockTransport], for scripting and inspection from
/// the test while the driver owns the transport.
#[derive(Clone, Default)]
pub struct MockHandle {
    pub rx: Arc<Mutex<VecDeque<u8>>>,
    pub writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockHandle {
    /// Queue bytes for the driver to read.
    pub fn feed(&self, data: &[u8]) {
        self.rx.lock().unwrap().extend(data.iter().copied());
    }

    /// All raw writes the driver issued so far.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.writes.lock().unwrap().clone()
    }

    /// Number of writes that contain a UBX frame of the given class/id.
    pub fn writes_of(&self, cls: u8, msg_id: u8) -> usize {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|data| find_ubx_frames(data).contains(&(cls, msg_id)))
            .count()
    }
}

/// A scripted transport: responds to written UBX polls with canned frames,
/// optionally only while set to one specific baudrate.
pub struct MockTransport {
    handle: MockHandle,
    responses: HashMap<(u8, u8), Vec<u8>>,
    can_baudrate: bool,
    baudrate: u32,
    /// When set, polls are only answered at this baudrate
    answer_baudrate: Option<u32>,
    num_rx: u64,
    num_tx: u64,
}

impl MockTransport {
    pub fn new() -> (Self, MockHandle) {
        let handle = MockHandle::default();
        let transport = Self {
            handle: handle.clone(),
            responses: HashMap::new(),
            can_baudrate: false,
            baudrate: 0,
            answer_baudrate: None,
            num_rx: 0,
            num_tx: 0,
        };
        (transport, handle)
    }

    /// Respond to any written UBX frame of `cls`/`msg_id` with `response`.
    pub fn respond(mut self, cls: u8, msg_id: u8, response: Vec<u8>) -> Self {
        self.responses.insert((cls, msg_id), response);
        self
    }

    /// Behave like a serial port at the given initial baudrate.
    pub fn with_baudrate(mut self, baudrate: u32) -> Self {
        self.can_baudrate = true;
        self.baudrate = baudrate;
        self
    }

    /// Only answer polls while the baudrate is set to `baudrate`.
    pub fn answer_only_at(mut self, baudrate: u32) -> Self {
        self.answer_baudrate = Some(baudrate);
        self
    }
}

/// Class/id of all complete UBX frames contained in a byte stream.
pub fn find_ubx_frames(data: &[u8]) -> Vec<(u8, u8)> {
    let mut frames = vec![];
    let mut ix = 0;
    while ix + 8 <= data.len() {
        if data[ix] == 0xb5 && data[ix + 1] == 0x62 {
            let len = u16::from_le_bytes([data[ix + 4], data[ix + 5]]) as usize;
            if ix + 8 + len <= data.len() {
                frames.push((data[ix + 2], data[ix + 3]));
                ix += 8 + len;
                continue;
            }
        }
        ix += 1;
    }
    frames
}

impl Transport for MockTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut rx = self.handle.rx.lock().unwrap();
        let mut size = 0;
        while size < buf.len() {
            match rx.pop_front() {
                Some(byte) => {
                    buf[size] = byte;
                    size += 1;
                }
                None => break,
            }
        }
        self.num_rx += size as u64;
        Ok(size)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.handle.writes.lock().unwrap().push(data.to_vec());
        self.num_tx += data.len() as u64;
        let answering = self
            .answer_baudrate
            .is_none_or(|baudrate| baudrate == self.baudrate);
        if answering {
            for key in find_ubx_frames(data) {
                if let Some(response) = self.responses.get(&key) {
                    self.handle.rx.lock().unwrap().extend(response.iter().copied());
                }
            }
        }
        Ok(())
    }

    fn can_baudrate(&self) -> bool {
        self.can_baudrate
    }

    fn set_baudrate(&mut self, baudrate: u32) -> io::Result<()> {
        if !self.can_baudrate {
            return Err(io::ErrorKind::Unsupported.into());
        }
        self.baudrate = baudrate;
        // a wrong baudrate would garble anything in flight
        self.handle.rx.lock().unwrap().clear();
        Ok(())
    }

    fn baudrate(&self) -> u32 {
        self.baudrate
    }

    fn reconnect(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn counters(&self) -> (u64, u64) {
        (self.num_rx, self.num_tx)
    }
}

/// A 60-byte UBX-MON-VER frame (52 byte payload: version block plus a
/// truncated extension).
pub fn mon_ver_frame() -> Vec<u8> {
    let mut payload = vec![0u8; 52];
    payload[..13].copy_from_slice(b"EXT CORE 1.00");
    payload[30..38].copy_from_slice(b"00190000");
    payload[40..50].copy_from_slice(b"FWVER=TEST");
    ubxcfg::parser::ubx::make_frame(0x0a, 0x04, &payload)
}
