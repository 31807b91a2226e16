//! Telnet (RFC 854) transport with com-port-control (RFC 2217). Telnet
//! command sequences are stripped from the inbound stream before the bytes
//! reach the framer; partial sequences are carried across reads. Baudrate
//! changes are sent as SET-BAUDRATE subnegotiations.

use std::io;
use std::net::TcpStream;

use log::{debug, trace};

use super::tcp::{connect, read_stream, write_stream};
use super::Transport;

const IAC: u8 = 255;
const DONT: u8 = 254;
const DO: u8 = 253;
const WONT: u8 = 252;
const WILL: u8 = 251;
const SB: u8 = 250;
const SE: u8 = 240;

const OPT_BINARY: u8 = 0;
const OPT_COM_PORT: u8 = 44; // RFC 2217
const CPO_SET_BAUDRATE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TnState {
    Data,
    Iac,
    Opt(u8),
    Sub,
    SubIac,
}

pub struct TelnetTransport {
    stream: TcpStream,
    addr: String,
    baudrate: u32,
    state: TnState,
    // in-band subnegotiation bytes collected so far
    subneg: Vec<u8>,
    num_rx: u64,
    num_tx: u64,
}

impl TelnetTransport {
    pub fn open(addr: &str, baudrate: u32) -> io::Result<Self> {
        let mut stream = connect(addr)?;
        // announce binary transmission and com-port-control
        write_stream(
            &mut stream,
            &[
                IAC, WILL, OPT_BINARY, //
                IAC, DO, OPT_BINARY, //
                IAC, WILL, OPT_COM_PORT,
            ],
        )?;
        debug!("connected to {addr} (telnet com-port-control)");
        let mut transport = Self {
            stream,
            addr: addr.into(),
            baudrate,
            state: TnState::Data,
            subneg: Vec::with_capacity(16),
            num_rx: 0,
            num_tx: 0,
        };
        transport.send_baudrate(baudrate)?;
        Ok(transport)
    }

    fn send_baudrate(&mut self, baudrate: u32) -> io::Result<()> {
        let mut msg = vec![IAC, SB, OPT_COM_PORT, CPO_SET_BAUDRATE];
        for byte in baudrate.to_be_bytes() {
            msg.push(byte);
            if byte == IAC {
                msg.push(IAC);
            }
        }
        msg.extend_from_slice(&[IAC, SE]);
        write_stream(&mut self.stream, &msg)
    }

    /// Respond to an option negotiation: accept binary and com-port-control,
    /// refuse everything else.
    fn negotiate(&mut self, cmd: u8, opt: u8) -> io::Result<()> {
        let reply = match (cmd, opt) {
            (DO, OPT_BINARY | OPT_COM_PORT) => None, // already announced
            (WILL, OPT_BINARY | OPT_COM_PORT) => None,
            (DO, _) => Some(WONT),
            (WILL, _) => Some(DONT),
            _ => None,
        };
        if let Some(reply) = reply {
            trace!("refusing telnet option {opt}");
            write_stream(&mut self.stream, &[IAC, reply, opt])?;
        }
        Ok(())
    }

    /// Remove telnet command sequences from `buf` in place, returning the
    /// number of application bytes kept.
    fn filter(&mut self, buf: &mut [u8], size: usize) -> io::Result<usize> {
        let mut kept = 0;
        let mut negotiations = vec![];
        for ix in 0..size {
            let byte = buf[ix];
            match self.state {
                TnState::Data => {
                    if byte == IAC {
                        self.state = TnState::Iac;
                    } else {
                        buf[kept] = byte;
                        kept += 1;
                    }
                }
                TnState::Iac => match byte {
                    IAC => {
                        // escaped 0xff data byte
                        buf[kept] = IAC;
                        kept += 1;
                        self.state = TnState::Data;
                    }
                    SB => {
                        self.subneg.clear();
                        self.state = TnState::Sub;
                    }
                    WILL | WONT | DO | DONT => self.state = TnState::Opt(byte),
                    _ => self.state = TnState::Data,
                },
                TnState::Opt(cmd) => {
                    negotiations.push((cmd, byte));
                    self.state = TnState::Data;
                }
                TnState::Sub => {
                    if byte == IAC {
                        self.state = TnState::SubIac;
                    } else if self.subneg.len() < 64 {
                        self.subneg.push(byte);
                    }
                }
                TnState::SubIac => match byte {
                    SE => {
                        trace!("telnet subnegotiation: {:02x?}", self.subneg);
                        self.state = TnState::Data;
                    }
                    _ => {
                        if self.subneg.len() < 64 {
                            self.subneg.push(byte);
                        }
                        self.state = TnState::Sub;
                    }
                },
            }
        }
        for (cmd, opt) in negotiations {
            self.negotiate(cmd, opt)?;
        }
        Ok(kept)
    }
}

impl Transport for TelnetTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = read_stream(&mut self.stream, buf)?;
        if size == 0 {
            return Ok(0);
        }
        let kept = self.filter(buf, size)?;
        self.num_rx += kept as u64;
        Ok(kept)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        // escape 0xff bytes in the application data
        if data.contains(&IAC) {
            let mut escaped = Vec::with_capacity(data.len() + 8);
            for byte in data {
                escaped.push(*byte);
                if *byte == IAC {
                    escaped.push(IAC);
                }
            }
            write_stream(&mut self.stream, &escaped)?;
        } else {
            write_stream(&mut self.stream, data)?;
        }
        self.num_tx += data.len() as u64;
        Ok(())
    }

    fn can_baudrate(&self) -> bool {
        true
    }

    fn set_baudrate(&mut self, baudrate: u32) -> io::Result<()> {
        self.send_baudrate(baudrate)?;
        self.baudrate = baudrate;
        Ok(())
    }

    fn baudrate(&self) -> u32 {
        self.baudrate
    }

    fn reconnect(&mut self) -> io::Result<()> {
        self.stream = connect(&self.addr)?;
        self.state = TnState::Data;
        self.send_baudrate(self.baudrate)
    }

    fn counters(&self) -> (u64, u64) {
        (self.num_rx, self.num_tx)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn filter_only(transport: &mut TelnetTransport, data: &[u8]) -> Vec<u8> {
        let mut buf = data.to_vec();
        let kept = transport.filter(&mut buf, data.len()).unwrap();
        buf.truncate(kept);
        buf
    }

    fn test_transport() -> TelnetTransport {
        // a listener for the option replies the filter may send
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let stream = TcpStream::connect(addr).unwrap();
        stream.set_nonblocking(true).unwrap();
        TelnetTransport {
            stream,
            addr: addr.to_string(),
            baudrate: 9600,
            state: TnState::Data,
            subneg: Vec::new(),
            num_rx: 0,
            num_tx: 0,
        }
    }

    #[test]
    fn plain_data_passes() {
        let mut transport = test_transport();
        assert_eq!(filter_only(&mut transport, b"hello"), b"hello");
    }

    #[test]
    fn escaped_iac_unescaped() {
        let mut transport = test_transport();
        assert_eq!(
            filter_only(&mut transport, &[0x01, IAC, IAC, 0x02]),
            vec![0x01, IAC, 0x02]
        );
    }

    #[test]
    fn subnegotiation_stripped() {
        let mut transport = test_transport();
        let data = [
            b'a', IAC, SB, OPT_COM_PORT, CPO_SET_BAUDRATE + 100, 0, 0, 0x25, 0x80, IAC, SE, b'b',
        ];
        assert_eq!(filter_only(&mut transport, &data), b"ab");
    }

    #[test]
    fn partial_sequence_carries_across_reads() {
        let mut transport = test_transport();
        assert_eq!(filter_only(&mut transport, &[b'x', IAC]), b"x");
        assert_eq!(filter_only(&mut transport, &[SB, OPT_COM_PORT]), b"");
        assert_eq!(filter_only(&mut transport, &[IAC, SE, b'y']), b"y");
    }

    #[test]
    fn negotiation_refused() {
        let mut transport = test_transport();
        // IAC DO LINEMODE (34) should be answered but not surface as data
        assert_eq!(filter_only(&mut transport, &[IAC, DO, 34, b'z']), b"z");
    }
}
