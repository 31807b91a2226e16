#![cfg_attr(docsrs, feature(doc_cfg))]
//! Configuration and control of u-blox GNSS receivers.
//!
//! The crate is layered, leaves first:
//!
//! - [cfg]: the typed catalog of configuration items, the binary key/value
//!   codec of the UBX configuration interface (UBX-CFG-VALSET/VALGET),
//!   value stringification and parsing, and the textual configuration file
//!   format
//! - [parser]: a single-pass framer that classifies UBX, NMEA, RTCM3,
//!   SPARTN and NOVATEL frames interleaved with arbitrary other data
//! - [epoch]: fuses messages of one navigation solution into a consolidated
//!   epoch record
//! - [port]: byte-level transports (serial, TCP, telnet with RFC 2217
//!   com-port-control)
//! - [rx]: the receiver driver, blocking ([rx::Rx]) and asynchronous with a
//!   worker thread and bounded command/event queues ([rx::Receiver])
//!
//! # Example
//!
//! ```no_run
//! use ubxcfg::{cfg, rx::{Rx, RxOpts}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = "ser:///dev/ttyUSB0".parse()?;
//! let mut rx = Rx::open(&spec, RxOpts::default())?;
//!
//! let item = cfg::item_by_name("CFG-NAVSPG-FIXMODE").unwrap();
//! let kv = rx.get_config(cfg::CfgLayer::Ram, &[item.id])?;
//! for kv in &kv {
//!     println!("{kv}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cfg;
pub mod constants;
pub mod epoch;
mod error;
pub mod parser;
pub mod port;
pub mod rx;
mod time;

pub use crate::{
    cfg::{CfgItem, CfgLayer, CfgLayers, CfgSize, CfgType, CfgValue, KeyVal},
    constants::exitcode,
    epoch::{Epoch, EpochCollector},
    error::{CfgError, PollError, RxError},
    parser::{Message, Parser, ParserStats, Protocol},
    port::{PortSpec, Transport},
    rx::{Command, Detect, Event, PollUbx, Receiver, ResetKind, Rx, RxOpts, RxState},
};
pub use time::{hexdump, time_ms};
