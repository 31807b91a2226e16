use std::io;
use std::io::{Read as _, Write as _};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use super::Transport;

const REOPEN_TRIES: u32 = 5;

/// Local serial port. Reads use a 1 ms timeout so that the driver's poll
/// loops stay responsive; a timeout reports as "no data".
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
    device: String,
    baudrate: u32,
    num_rx: u64,
    num_tx: u64,
}

impl SerialTransport {
    pub fn open(device: &str, baudrate: u32) -> io::Result<Self> {
        let port = open_port(device, baudrate)?;
        debug!("opened {device} at {baudrate}");
        Ok(Self {
            port,
            device: device.into(),
            baudrate,
            num_rx: 0,
            num_tx: 0,
        })
    }
}

fn open_port(device: &str, baudrate: u32) -> io::Result<Box<dyn serialport::SerialPort>> {
    serialport::new(device, baudrate)
        .timeout(Duration::from_millis(1))
        .open()
        .map_err(io::Error::other)
}

impl Transport for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.port.read(buf) {
            Ok(size) => {
                self.num_rx += size as u64;
                Ok(size)
            }
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)?;
        self.num_tx += data.len() as u64;
        Ok(())
    }

    fn can_baudrate(&self) -> bool {
        true
    }

    fn set_baudrate(&mut self, baudrate: u32) -> io::Result<()> {
        self.port
            .set_baud_rate(baudrate)
            .map_err(io::Error::other)?;
        self.baudrate = baudrate;
        Ok(())
    }

    fn baudrate(&self) -> u32 {
        self.baudrate
    }

    fn reconnect(&mut self) -> io::Result<()> {
        // USB re-enumeration makes the device node disappear for a while,
        // so retry with exponential backoff
        let mut delay = Duration::from_millis(100);
        let mut last_err = None;
        for attempt in 1..=REOPEN_TRIES {
            match open_port(&self.device, self.baudrate) {
                Ok(port) => {
                    debug!("reopened {} (attempt {attempt})", self.device);
                    self.port = port;
                    return Ok(());
                }
                Err(e) => {
                    warn!("reopening {} failed: {e}", self.device);
                    last_err = Some(e);
                    thread::sleep(delay);
                    delay *= 2;
                }
            }
        }
        Err(last_err.unwrap_or_else(|| io::Error::other("reopen failed")))
    }

    fn counters(&self) -> (u64, u64) {
        (self.num_rx, self.num_tx)
    }
}
