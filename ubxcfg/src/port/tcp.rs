use std::io;
use std::io::{Read as _, Write as _};
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use log::debug;

use super::Transport;

/// Plain TCP stream to a remote receiver (e.g. behind a serial-to-network
/// bridge). Has no baudrate.
pub struct TcpTransport {
    stream: TcpStream,
    addr: String,
    num_rx: u64,
    num_tx: u64,
}

impl TcpTransport {
    pub fn open(addr: &str) -> io::Result<Self> {
        let stream = connect(addr)?;
        debug!("connected to {addr}");
        Ok(Self {
            stream,
            addr: addr.into(),
            num_rx: 0,
            num_tx: 0,
        })
    }
}

pub(super) fn connect(addr: &str) -> io::Result<TcpStream> {
    let stream = TcpStream::connect(addr)?;
    stream.set_nonblocking(true)?;
    stream.set_nodelay(true)?;
    Ok(stream)
}

/// Non-blocking read of a TCP stream: no data and EOF are distinct.
pub(super) fn read_stream(stream: &mut TcpStream, buf: &mut [u8]) -> io::Result<usize> {
    match stream.read(buf) {
        Ok(0) => Err(io::ErrorKind::UnexpectedEof.into()),
        Ok(size) => Ok(size),
        Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(0),
        Err(e) => Err(e),
    }
}

/// Full write on a non-blocking TCP stream.
pub(super) fn write_stream(stream: &mut TcpStream, mut data: &[u8]) -> io::Result<()> {
    while !data.is_empty() {
        match stream.write(data) {
            Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
            Ok(size) => data = &data[size..],
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                thread::sleep(Duration::from_millis(1));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

impl Transport for TcpTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = read_stream(&mut self.stream, buf)?;
        self.num_rx += size as u64;
        Ok(size)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        write_stream(&mut self.stream, data)?;
        self.num_tx += data.len() as u64;
        Ok(())
    }

    fn reconnect(&mut self) -> io::Result<()> {
        self.stream = connect(&self.addr)?;
        Ok(())
    }

    fn counters(&self) -> (u64, u64) {
        (self.num_rx, self.num_tx)
    }
}
