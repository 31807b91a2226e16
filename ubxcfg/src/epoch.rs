//! Navigation epoch abstraction. The collector fuses successive messages
//! that belong to the same navigation solution into one consolidated
//! [Epoch] record. UBX-NAV-PVT is the pivot: a change of the UBX time of
//! week closes the epoch, as does a repeated pivot. NMEA time is used as the
//! boundary only while no UBX time of week has been seen.

use std::fmt;
use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::parser::{nmea, rtcm3, ubx, Message, Protocol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FixType {
    #[default]
    Unknown,
    NoFix,
    DrOnly,
    Fix2D,
    Fix3D,
    Fix3DDr,
    Time,
}

impl fmt::Display for FixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "UNKNOWN",
            Self::NoFix => "NOFIX",
            Self::DrOnly => "DR",
            Self::Fix2D => "2D",
            Self::Fix3D => "3D",
            Self::Fix3DDr => "3D+DR",
            Self::Time => "TIME",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RtkMode {
    #[default]
    Unknown,
    None,
    Float,
    Fixed,
}

impl fmt::Display for RtkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "UNKNOWN",
            Self::None => "NONE",
            Self::Float => "FLOAT",
            Self::Fixed => "FIXED",
        })
    }
}

/// Geodetic position, degrees and metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Llh {
    pub lat: f64,
    pub lon: f64,
    /// Height above ellipsoid (not all sources provide it)
    pub height: Option<f64>,
    /// Height above mean sea level
    pub height_msl: Option<f64>,
}

/// ECEF position and accuracy estimate, metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub p_acc: f64,
}

/// Position accuracy estimates, metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PosAcc {
    pub horiz: f64,
    pub vert: f64,
}

/// Velocity in local east/north/up, metres per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VelEnu {
    pub east: f64,
    pub north: f64,
    pub up: f64,
    pub speed_2d: f64,
    pub speed_3d: f64,
}

/// Receiver clock state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Clock {
    /// Bias in nanoseconds
    pub bias: f64,
    /// Drift in nanoseconds per second
    pub drift: f64,
}

/// Number of satellites used per constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SatCounts {
    pub gps: u8,
    pub sbas: u8,
    pub gal: u8,
    pub bds: u8,
    pub qzss: u8,
    pub glo: u8,
}

/// UTC date and time of the solution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EpochTime {
    pub date: Option<NaiveDate>,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
    /// Time (and date, if present) are valid
    pub valid: bool,
}

/// One consolidated navigation solution.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Epoch {
    pub seq: u32,
    /// One-line printable summary
    pub summary: String,
    pub fix: FixType,
    pub fix_ok: bool,
    pub rtk: RtkMode,
    pub llh: Option<Llh>,
    pub xyz: Option<Xyz>,
    pub pos_acc: Option<PosAcc>,
    pub vel: Option<VelEnu>,
    pub clock: Option<Clock>,
    pub pdop: Option<f32>,
    pub num_sv: Option<u8>,
    pub sat_counts: Option<SatCounts>,
    /// UBX time of week, milliseconds
    pub itow: Option<u32>,
    pub time: Option<EpochTime>,
    /// RTCM3 reference station the corrections came from
    pub station_id: Option<u16>,
    /// Receiver version, sticky across epochs once seen
    pub rx_version: Option<String>,
}

impl Epoch {
    fn make_summary(&mut self) {
        let mut out = String::new();
        let _ = write!(out, "{}", self.fix);
        if self.fix_ok {
            out.push_str("/OK");
        }
        if self.rtk != RtkMode::Unknown {
            let _ = write!(out, " RTK:{}", self.rtk);
        }
        if let Some(time) = &self.time {
            let _ = write!(
                out,
                " {:02}:{:02}:{:06.3}",
                time.hour, time.minute, time.second
            );
        }
        if let Some(llh) = &self.llh {
            let _ = write!(out, " {:+.7} {:+.7}", llh.lat, llh.lon);
            if let Some(height) = llh.height {
                let _ = write!(out, " {height:.1}");
            }
        }
        if let Some(num_sv) = self.num_sv {
            let _ = write!(out, " #SV {num_sv}");
        }
        if let Some(pdop) = self.pdop {
            let _ = write!(out, " pDOP {pdop:.2}");
        }
        if let Some(pos_acc) = &self.pos_acc {
            let _ = write!(out, " acc {:.3}/{:.3}", pos_acc.horiz, pos_acc.vert);
        }
        self.summary = out;
    }
}

/// Collects messages into epochs.
#[derive(Debug, Default)]
pub struct EpochCollector {
    acc: Epoch,
    seq: u32,
    have_pvt: bool,
    nmea_time: Option<(u8, u8, f64)>,
    rx_version: Option<String>,
}

impl EpochCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one message. Returns the finished epoch when `msg` starts a new
    /// one; the message's own contribution always goes to the next epoch in
    /// that case.
    pub fn collect(&mut self, msg: &Message) -> Option<Epoch> {
        let out = if self.is_boundary(msg) {
            Some(self.finish())
        } else {
            None
        };
        self.merge(msg);
        out
    }

    fn is_boundary(&self, msg: &Message) -> bool {
        match msg.protocol {
            Protocol::Ubx => match ubx_itow(msg) {
                Some(itow) => match self.acc.itow {
                    Some(acc_itow) if acc_itow != itow => true,
                    // repeated pivot with an unchanged time of week
                    _ => self.have_pvt && is_nav_pvt(msg),
                },
                None => false,
            },
            Protocol::Nmea if self.acc.itow.is_none() => {
                match (nmea_sentence_time(msg), self.nmea_time) {
                    (Some(time), Some(acc_time)) => time != acc_time,
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn finish(&mut self) -> Epoch {
        self.seq += 1;
        let mut epoch = std::mem::take(&mut self.acc);
        self.have_pvt = false;
        self.nmea_time = None;
        epoch.seq = self.seq;
        epoch.rx_version = self.rx_version.clone();
        epoch.make_summary();
        epoch
    }

    fn merge(&mut self, msg: &Message) {
        match msg.protocol {
            Protocol::Ubx => self.merge_ubx(msg),
            Protocol::Nmea => self.merge_nmea(msg),
            Protocol::Rtcm3 => {
                if let Some(station_id) = rtcm3::station_id(&msg.data) {
                    self.acc.station_id = Some(station_id);
                }
            }
            _ => {}
        }
    }

    fn merge_ubx(&mut self, msg: &Message) {
        let (cls, id) = ubx::cls_id(&msg.data);
        let payload = ubx::payload(&msg.data);
        if let Some(itow) = ubx_itow(msg) {
            self.acc.itow = Some(itow);
        }
        match (cls, id) {
            (ubx::UBX_NAV_CLSID, ubx::UBX_NAV_PVT_MSGID) => self.merge_nav_pvt(payload),
            (ubx::UBX_NAV_CLSID, ubx::UBX_NAV_HPPOSLLH_MSGID) => self.merge_nav_hpposllh(payload),
            (ubx::UBX_NAV_CLSID, ubx::UBX_NAV_POSECEF_MSGID) => self.merge_nav_posecef(payload),
            (ubx::UBX_NAV_CLSID, ubx::UBX_NAV_CLOCK_MSGID) => self.merge_nav_clock(payload),
            (ubx::UBX_NAV_CLSID, ubx::UBX_NAV_DOP_MSGID) => self.merge_nav_dop(payload),
            (ubx::UBX_NAV_CLSID, ubx::UBX_NAV_SAT_MSGID) => self.merge_nav_sat(payload),
            (ubx::UBX_MON_CLSID, ubx::UBX_MON_VER_MSGID) => {
                if let Some(info) = &msg.info {
                    self.rx_version = Some(info.clone());
                }
            }
            _ => {}
        }
    }

    fn merge_nav_pvt(&mut self, payload: &[u8]) {
        if payload.len() < 92 {
            return;
        }
        self.have_pvt = true;
        let valid = payload[11];
        let year = u16_at(payload, 4);
        let date = if valid & 0x01 != 0 {
            NaiveDate::from_ymd_opt(year as i32, payload[6] as u32, payload[7] as u32)
        } else {
            None
        };
        self.acc.time = Some(EpochTime {
            date,
            hour: payload[8],
            minute: payload[9],
            second: payload[10] as f64 + i32_at(payload, 16) as f64 * 1e-9,
            valid: valid & 0x02 != 0,
        });
        self.acc.fix = match payload[20] {
            0 => FixType::NoFix,
            1 => FixType::DrOnly,
            2 => FixType::Fix2D,
            3 => FixType::Fix3D,
            4 => FixType::Fix3DDr,
            5 => FixType::Time,
            _ => FixType::Unknown,
        };
        let flags = payload[21];
        self.acc.fix_ok = flags & 0x01 != 0;
        self.acc.rtk = match (flags >> 6) & 0x03 {
            0 => RtkMode::None,
            1 => RtkMode::Float,
            _ => RtkMode::Fixed,
        };
        self.acc.num_sv = Some(payload[23]);
        self.acc.llh = Some(Llh {
            lon: i32_at(payload, 24) as f64 * 1e-7,
            lat: i32_at(payload, 28) as f64 * 1e-7,
            height: Some(i32_at(payload, 32) as f64 * 1e-3),
            height_msl: Some(i32_at(payload, 36) as f64 * 1e-3),
        });
        self.acc.pos_acc = Some(PosAcc {
            horiz: u32_at(payload, 40) as f64 * 1e-3,
            vert: u32_at(payload, 44) as f64 * 1e-3,
        });
        let vel_n = i32_at(payload, 48) as f64 * 1e-3;
        let vel_e = i32_at(payload, 52) as f64 * 1e-3;
        let vel_d = i32_at(payload, 56) as f64 * 1e-3;
        let speed_2d = i32_at(payload, 60) as f64 * 1e-3;
        self.acc.vel = Some(VelEnu {
            east: vel_e,
            north: vel_n,
            up: -vel_d,
            speed_2d,
            speed_3d: (speed_2d * speed_2d + vel_d * vel_d).sqrt(),
        });
        self.acc.pdop = Some(u16_at(payload, 76) as f32 * 0.01);
    }

    fn merge_nav_hpposllh(&mut self, payload: &[u8]) {
        if payload.len() < 36 || payload[3] & 0x01 != 0 {
            return;
        }
        self.acc.llh = Some(Llh {
            lon: i32_at(payload, 8) as f64 * 1e-7 + payload[24] as i8 as f64 * 1e-9,
            lat: i32_at(payload, 12) as f64 * 1e-7 + payload[25] as i8 as f64 * 1e-9,
            height: Some(i32_at(payload, 16) as f64 * 1e-3 + payload[26] as i8 as f64 * 1e-4),
            height_msl: Some(
                i32_at(payload, 20) as f64 * 1e-3 + payload[27] as i8 as f64 * 1e-4,
            ),
        });
        self.acc.pos_acc = Some(PosAcc {
            horiz: u32_at(payload, 28) as f64 * 1e-4,
            vert: u32_at(payload, 32) as f64 * 1e-4,
        });
    }

    fn merge_nav_posecef(&mut self, payload: &[u8]) {
        if payload.len() < 20 {
            return;
        }
        self.acc.xyz = Some(Xyz {
            x: i32_at(payload, 4) as f64 * 1e-2,
            y: i32_at(payload, 8) as f64 * 1e-2,
            z: i32_at(payload, 12) as f64 * 1e-2,
            p_acc: u32_at(payload, 16) as f64 * 1e-2,
        });
    }

    fn merge_nav_clock(&mut self, payload: &[u8]) {
        if payload.len() < 20 {
            return;
        }
        self.acc.clock = Some(Clock {
            bias: i32_at(payload, 4) as f64,
            drift: i32_at(payload, 8) as f64,
        });
    }

    fn merge_nav_dop(&mut self, payload: &[u8]) {
        if payload.len() < 18 {
            return;
        }
        if self.acc.pdop.is_none() {
            self.acc.pdop = Some(u16_at(payload, 6) as f32 * 0.01);
        }
    }

    fn merge_nav_sat(&mut self, payload: &[u8]) {
        if payload.len() < 8 {
            return;
        }
        let mut counts = SatCounts::default();
        for block in payload[8..].chunks_exact(12) {
            let used = u32_at(block, 8) & 0x08 != 0;
            if !used {
                continue;
            }
            match block[0] {
                0 => counts.gps += 1,
                1 => counts.sbas += 1,
                2 => counts.gal += 1,
                3 => counts.bds += 1,
                5 => counts.qzss += 1,
                6 => counts.glo += 1,
                _ => {}
            }
        }
        self.acc.sat_counts = Some(counts);
    }

    fn merge_nmea(&mut self, msg: &Message) {
        let Some(body) = nmea::body(&msg.data) else {
            return;
        };
        let fields: Vec<&str> = body.split(',').collect();
        if let Some(time) = nmea_sentence_time(msg) {
            if self.acc.itow.is_none() {
                self.nmea_time = Some(time);
                let mut epoch_time = self.acc.time.unwrap_or_default();
                epoch_time.hour = time.0;
                epoch_time.minute = time.1;
                epoch_time.second = time.2;
                epoch_time.valid = true;
                self.acc.time = Some(epoch_time);
            }
        }
        if msg.name.ends_with("-RMC") {
            self.merge_rmc(&fields);
        } else if msg.name.ends_with("-GGA") {
            self.merge_gga(&fields);
        } else if msg.name.ends_with("-GSA") {
            self.merge_gsa(&fields);
        }
    }

    fn merge_rmc(&mut self, fields: &[&str]) {
        if fields.len() < 10 || self.acc.itow.is_some() {
            return;
        }
        self.acc.fix_ok = fields[2] == "A";
        if let Some((lat, lon)) = nmea_lat_lon(fields[3], fields[4], fields[5], fields[6]) {
            let mut llh = self.acc.llh.unwrap_or_default();
            llh.lat = lat;
            llh.lon = lon;
            self.acc.llh = Some(llh);
        }
        if let Some(time) = &mut self.acc.time {
            if time.date.is_none() && fields[9].len() == 6 {
                let day: u32 = fields[9][0..2].parse().unwrap_or(0);
                let month: u32 = fields[9][2..4].parse().unwrap_or(0);
                let year: i32 = fields[9][4..6].parse().unwrap_or(0);
                time.date = NaiveDate::from_ymd_opt(2000 + year, month, day);
            }
        }
    }

    fn merge_gga(&mut self, fields: &[&str]) {
        if fields.len() < 10 || self.acc.itow.is_some() {
            return;
        }
        if let Some((lat, lon)) = nmea_lat_lon(fields[2], fields[3], fields[4], fields[5]) {
            let height_msl = fields[9].parse::<f64>().ok();
            let mut llh = self.acc.llh.unwrap_or_default();
            llh.lat = lat;
            llh.lon = lon;
            llh.height_msl = height_msl;
            self.acc.llh = Some(llh);
        }
        match fields[6] {
            "4" => self.acc.rtk = RtkMode::Fixed,
            "5" => self.acc.rtk = RtkMode::Float,
            _ => {}
        }
        if let Ok(num_sv) = fields[7].parse::<u8>() {
            self.acc.num_sv = Some(num_sv);
        }
    }

    fn merge_gsa(&mut self, fields: &[&str]) {
        if fields.len() < 18 || self.acc.itow.is_some() {
            return;
        }
        match fields[2] {
            "2" => self.acc.fix = FixType::Fix2D,
            "3" => self.acc.fix = FixType::Fix3D,
            "1" => self.acc.fix = FixType::NoFix,
            _ => {}
        }
        if let Ok(pdop) = fields[15].parse::<f32>() {
            self.acc.pdop = Some(pdop);
        }
    }
}

fn u16_at(payload: &[u8], ix: usize) -> u16 {
    u16::from_le_bytes([payload[ix], payload[ix + 1]])
}

fn u32_at(payload: &[u8], ix: usize) -> u32 {
    u32::from_le_bytes([payload[ix], payload[ix + 1], payload[ix + 2], payload[ix + 3]])
}

fn i32_at(payload: &[u8], ix: usize) -> i32 {
    u32_at(payload, ix) as i32
}

fn is_nav_pvt(msg: &Message) -> bool {
    ubx::cls_id(&msg.data) == (ubx::UBX_NAV_CLSID, ubx::UBX_NAV_PVT_MSGID)
}

/// Time of week of UBX navigation messages that carry one.
fn ubx_itow(msg: &Message) -> Option<u32> {
    let (cls, id) = ubx::cls_id(&msg.data);
    if cls != ubx::UBX_NAV_CLSID {
        return None;
    }
    let payload = ubx::payload(&msg.data);
    let ix = match id {
        // version byte first on the high-precision and relative messages
        ubx::UBX_NAV_HPPOSLLH_MSGID | 0x13 | 0x3b | 0x3c => 4,
        0x01 | 0x02 | 0x03 | 0x04 | ubx::UBX_NAV_PVT_MSGID | 0x09 | 0x11 | 0x12 | 0x20 | 0x21
        | 0x22 | 0x26 | 0x35 | 0x36 | 0x43 | 0x61 => 0,
        _ => return None,
    };
    if payload.len() < ix + 4 {
        return None;
    }
    Some(u32_at(payload, ix))
}

/// hhmmss.ss from the time field of RMC and GGA sentences.
fn nmea_sentence_time(msg: &Message) -> Option<(u8, u8, f64)> {
    if !msg.name.ends_with("-RMC") && !msg.name.ends_with("-GGA") {
        return None;
    }
    let body = nmea::body(&msg.data)?;
    let time = body.split(',').nth(1)?;
    if time.len() < 6 {
        return None;
    }
    let hour: u8 = time[0..2].parse().ok()?;
    let minute: u8 = time[2..4].parse().ok()?;
    let second: f64 = time[4..].parse().ok()?;
    Some((hour, minute, second))
}

/// ddmm.mmmm/dddmm.mmmm with hemisphere to signed degrees.
fn nmea_lat_lon(lat: &str, ns: &str, lon: &str, ew: &str) -> Option<(f64, f64)> {
    if lat.len() < 4 || lon.len() < 5 {
        return None;
    }
    let lat_deg: f64 = lat[..2].parse().ok()?;
    let lat_min: f64 = lat[2..].parse().ok()?;
    let lon_deg: f64 = lon[..3].parse().ok()?;
    let lon_min: f64 = lon[3..].parse().ok()?;
    let mut lat = lat_deg + lat_min / 60.0;
    let mut lon = lon_deg + lon_min / 60.0;
    if ns == "S" {
        lat = -lat;
    }
    if ew == "W" {
        lon = -lon;
    }
    Some((lat, lon))
}
