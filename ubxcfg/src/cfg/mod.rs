//! Receiver configuration model: the static item catalog, typed values and
//! key/value pairs, and the binary/textual codecs for the UBX configuration
//! interface (UBX-CFG-VALSET/VALGET).

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

mod codec;
mod file;
mod items;
mod stringify;

pub use codec::{
    make_data, make_valget_poll, make_valset_msgs, parse_data, parse_valget_response,
    valset_payload, Transaction,
};
pub use file::{parse_cfg_file, parse_cfg_line, write_cfg_lines};
pub use items::{ALL_ITEMS, ALL_MSGRATES};
pub use stringify::{split_value_str, stringify_key_val, stringify_value, value_from_str};

use crate::error::CfgError;

/// Configuration item wire size, encoded in the top nibble of the item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfgSize {
    /// One bit, stored as one byte with value 0 or 1
    Bit,
    /// One byte
    One,
    /// Two bytes
    Two,
    /// Four bytes
    Four,
    /// Eight bytes
    Eight,
}

impl CfgSize {
    /// Decode the size class from the top nibble of an item id.
    pub const fn from_id(id: u32) -> Option<Self> {
        match (id >> 28) & 0x0f {
            1 => Some(Self::Bit),
            2 => Some(Self::One),
            3 => Some(Self::Two),
            4 => Some(Self::Four),
            5 => Some(Self::Eight),
            _ => None,
        }
    }

    /// Number of bytes the value occupies on the wire.
    pub const fn num_bytes(self) -> usize {
        match self {
            Self::Bit | Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

/// Configuration item storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum CfgType {
    U1,
    U2,
    U4,
    U8,
    I1,
    I2,
    I4,
    I8,
    X1,
    X2,
    X4,
    X8,
    R4,
    R8,
    E1,
    E2,
    E4,
    L,
}

impl CfgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::U1 => "U1",
            Self::U2 => "U2",
            Self::U4 => "U4",
            Self::U8 => "U8",
            Self::I1 => "I1",
            Self::I2 => "I2",
            Self::I4 => "I4",
            Self::I8 => "I8",
            Self::X1 => "X1",
            Self::X2 => "X2",
            Self::X4 => "X4",
            Self::X8 => "X8",
            Self::R4 => "R4",
            Self::R8 => "R8",
            Self::E1 => "E1",
            Self::E2 => "E2",
            Self::E4 => "E4",
            Self::L => "L",
        }
    }

    /// The wire size this type requires. Must match the size class encoded
    /// in the id of any item declared with this type.
    pub const fn wire_size(self) -> CfgSize {
        match self {
            Self::L => CfgSize::Bit,
            Self::U1 | Self::I1 | Self::X1 | Self::E1 => CfgSize::One,
            Self::U2 | Self::I2 | Self::X2 | Self::E2 => CfgSize::Two,
            Self::U4 | Self::I4 | Self::X4 | Self::E4 | Self::R4 => CfgSize::Four,
            Self::U8 | Self::I8 | Self::X8 | Self::R8 => CfgSize::Eight,
        }
    }
}

impl fmt::Display for CfgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named constant of an E (enum) or X (bitmask) type item.
#[derive(Debug, Clone, Copy)]
pub struct CfgConst {
    /// Name of the constant, e.g. `AUTO`
    pub name: &'static str,
    /// Value as string, e.g. `3` or `0x01`
    pub value: &'static str,
    /// Value as number; X type constants are interpreted as unsigned bits
    pub num: i64,
}

impl CfgConst {
    pub const fn bits(&self) -> u64 {
        self.num as u64
    }
}

/// A single configurable parameter of the receiver.
#[derive(Debug, Clone, Copy)]
pub struct CfgItem {
    /// Item id; the top nibble encodes the wire size
    pub id: u32,
    /// Storage type
    pub ty: CfgType,
    /// Item name, e.g. `CFG-NAVSPG-FIXMODE`
    pub name: &'static str,
    /// One-line description
    pub title: &'static str,
    /// Unit, e.g. `ms` (empty if none)
    pub unit: &'static str,
    /// Scale factor as string, e.g. `0.01` (empty if none)
    pub scale: &'static str,
    /// Scale factor as number (1.0 if none)
    pub scale_factor: f64,
    /// Constants for E and X type items (empty if none)
    pub consts: &'static [CfgConst],
}

impl CfgItem {
    /// The wire size class, from the id.
    pub fn size(&self) -> CfgSize {
        // All catalog ids carry a valid size nibble, enforced by unit test.
        CfgSize::from_id(self.id).unwrap_or(CfgSize::One)
    }

    pub fn const_by_name(&self, name: &str) -> Option<&'static CfgConst> {
        self.consts.iter().find(|c| c.name == name)
    }
}

/// Configuration items that set the output rate of one message on the five
/// configurable ports.
#[derive(Debug, Clone, Copy)]
pub struct MsgRate {
    /// Message name, e.g. `UBX-NAV-PVT`
    pub msg_name: &'static str,
    /// Rate item ids for UART1, UART2, SPI, I2C and USB (0 = not available)
    pub uart1: u32,
    pub uart2: u32,
    pub spi: u32,
    pub i2c: u32,
    pub usb: u32,
}

impl MsgRate {
    /// Rate items in UART1, UART2, SPI, I2C, USB order.
    pub fn items(&self) -> [Option<&'static CfgItem>; 5] {
        [self.uart1, self.uart2, self.spi, self.i2c, self.usb]
            .map(|id| if id != 0 { item_by_id(id) } else { None })
    }
}

/// Configuration value storage. The same raw bits can be read as any of the
/// storage types; the codec writes exactly the number of little-endian bytes
/// the item id's size class declares.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgValue {
    bits: u64,
}

impl CfgValue {
    pub const fn from_raw(bits: u64) -> Self {
        Self { bits }
    }

    pub const fn raw(self) -> u64 {
        self.bits
    }

    pub const fn u1(v: u8) -> Self {
        Self { bits: v as u64 }
    }
    pub const fn u2(v: u16) -> Self {
        Self { bits: v as u64 }
    }
    pub const fn u4(v: u32) -> Self {
        Self { bits: v as u64 }
    }
    pub const fn u8(v: u64) -> Self {
        Self { bits: v }
    }
    pub const fn i1(v: i8) -> Self {
        Self { bits: v as u8 as u64 }
    }
    pub const fn i2(v: i16) -> Self {
        Self { bits: v as u16 as u64 }
    }
    pub const fn i4(v: i32) -> Self {
        Self { bits: v as u32 as u64 }
    }
    pub const fn i8(v: i64) -> Self {
        Self { bits: v as u64 }
    }
    pub const fn x1(v: u8) -> Self {
        Self::u1(v)
    }
    pub const fn x2(v: u16) -> Self {
        Self::u2(v)
    }
    pub const fn x4(v: u32) -> Self {
        Self::u4(v)
    }
    pub const fn x8(v: u64) -> Self {
        Self::u8(v)
    }
    pub const fn r4(v: f32) -> Self {
        Self { bits: v.to_bits() as u64 }
    }
    pub const fn r8(v: f64) -> Self {
        Self { bits: v.to_bits() }
    }
    pub const fn e1(v: i8) -> Self {
        Self::i1(v)
    }
    pub const fn e2(v: i16) -> Self {
        Self::i2(v)
    }
    pub const fn e4(v: i32) -> Self {
        Self::i4(v)
    }
    pub const fn l(v: bool) -> Self {
        Self { bits: v as u64 }
    }

    pub const fn as_u1(self) -> u8 {
        self.bits as u8
    }
    pub const fn as_u2(self) -> u16 {
        self.bits as u16
    }
    pub const fn as_u4(self) -> u32 {
        self.bits as u32
    }
    pub const fn as_u8(self) -> u64 {
        self.bits
    }
    pub const fn as_i1(self) -> i8 {
        self.bits as u8 as i8
    }
    pub const fn as_i2(self) -> i16 {
        self.bits as u16 as i16
    }
    pub const fn as_i4(self) -> i32 {
        self.bits as u32 as i32
    }
    pub const fn as_i8(self) -> i64 {
        self.bits as i64
    }
    pub const fn as_r4(self) -> f32 {
        f32::from_bits(self.bits as u32)
    }
    pub const fn as_r8(self) -> f64 {
        f64::from_bits(self.bits)
    }
    pub const fn as_l(self) -> bool {
        self.bits != 0
    }
}

impl fmt::Debug for CfgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CfgValue(0x{:x})", self.bits)
    }
}

/// A configuration item id together with a value of the type the id declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyVal {
    pub id: u32,
    pub val: CfgValue,
}

impl KeyVal {
    pub const fn new(id: u32, val: CfgValue) -> Self {
        Self { id, val }
    }

    pub fn item(&self) -> Option<&'static CfgItem> {
        item_by_id(self.id)
    }

    pub fn size(&self) -> Option<CfgSize> {
        CfgSize::from_id(self.id)
    }
}

impl fmt::Display for KeyVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify_key_val(self))
    }
}

/// Configuration storage layer of the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CfgLayer {
    /// Active configuration
    Ram,
    /// Battery-backed RAM
    Bbr,
    /// Flash storage
    Flash,
    /// Read-only factory defaults
    Default,
}

impl CfgLayer {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ram => "RAM",
            Self::Bbr => "BBR",
            Self::Flash => "Flash",
            Self::Default => "Default",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ram" => Some(Self::Ram),
            "bbr" => Some(Self::Bbr),
            "flash" => Some(Self::Flash),
            "default" => Some(Self::Default),
            _ => None,
        }
    }

    /// Layer value used in the UBX-CFG-VALGET poll request.
    pub(crate) const fn valget_value(self) -> u8 {
        match self {
            Self::Ram => 0,
            Self::Bbr => 1,
            Self::Flash => 2,
            Self::Default => 7,
        }
    }
}

impl fmt::Display for CfgLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Target layers of a UBX-CFG-VALSET message.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CfgLayers: u8 {
        const RAM   = 0x01;
        const BBR   = 0x02;
        const FLASH = 0x04;
    }
}

impl fmt::Display for CfgLayers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in [
            ("RAM", Self::RAM),
            ("BBR", Self::BBR),
            ("Flash", Self::FLASH),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

struct Catalog {
    by_id: HashMap<u32, &'static CfgItem>,
    by_name: HashMap<&'static str, &'static CfgItem>,
    rates: HashMap<&'static str, &'static MsgRate>,
}

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut by_id = HashMap::with_capacity(ALL_ITEMS.len());
        let mut by_name = HashMap::with_capacity(ALL_ITEMS.len());
        for item in ALL_ITEMS {
            by_id.insert(item.id, item);
            by_name.insert(item.name, item);
        }
        let mut rates = HashMap::with_capacity(ALL_MSGRATES.len());
        for rate in ALL_MSGRATES {
            rates.insert(rate.msg_name, rate);
        }
        Catalog { by_id, by_name, rates }
    })
}

/// Look up a configuration item by id.
pub fn item_by_id(id: u32) -> Option<&'static CfgItem> {
    catalog().by_id.get(&id).copied()
}

/// Look up a configuration item by name (e.g. `CFG-NAVSPG-FIXMODE`), or by
/// the hexadecimal item id when the name starts with `0x`.
pub fn item_by_name(name: &str) -> Option<&'static CfgItem> {
    if let Some(hex) = name.strip_prefix("0x") {
        let id = u32::from_str_radix(hex, 16).ok()?;
        return item_by_id(id);
    }
    catalog().by_name.get(name).copied()
}

/// All configuration items known to this crate.
pub fn all_items() -> &'static [CfgItem] {
    ALL_ITEMS
}

/// Look up the output rate configuration for a message by its name
/// (e.g. `UBX-NAV-PVT` or `NMEA-STANDARD-GGA`).
pub fn msgrate_by_name(msg_name: &str) -> Option<&'static MsgRate> {
    catalog().rates.get(msg_name).copied()
}

/// All output message rate configurations known to this crate.
pub fn all_msgrates() -> &'static [MsgRate] {
    ALL_MSGRATES
}

/// Parse a `CfgError::BadValue`-style numeric literal usable in config files
/// and value strings: decimal, `0x` hexadecimal or leading-zero octal.
pub(crate) fn parse_u64_literal(s: &str) -> Result<u64, CfgError> {
    let bad = || CfgError::BadValue(s.into());
    if let Some(hex) = s.strip_prefix("0x") {
        if hex.is_empty() {
            return Err(bad());
        }
        u64::from_str_radix(hex, 16).map_err(|_| bad())
    } else if s.len() > 1 && s.starts_with('0') {
        u64::from_str_radix(s, 8).map_err(|_| bad())
    } else {
        // str::parse accepts a leading '+', which the config grammar does not
        if s.starts_with('+') {
            return Err(bad());
        }
        s.parse::<u64>().map_err(|_| bad())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn size_from_id() {
        assert_eq!(CfgSize::from_id(0x10110013), Some(CfgSize::Bit));
        assert_eq!(CfgSize::from_id(0x20110011), Some(CfgSize::One));
        assert_eq!(CfgSize::from_id(0x30110017), Some(CfgSize::Two));
        assert_eq!(CfgSize::from_id(0x40520001), Some(CfgSize::Four));
        assert_eq!(CfgSize::from_id(0x50650011), Some(CfgSize::Eight));
        assert_eq!(CfgSize::from_id(0x60000000), None);
    }

    #[test]
    fn lookup_by_id_and_name() {
        let item = item_by_name("CFG-NAVSPG-FIXMODE").unwrap();
        assert_eq!(item.id, 0x20110011);
        assert_eq!(item.ty, CfgType::E1);
        assert_eq!(item_by_id(0x20110011).unwrap().name, "CFG-NAVSPG-FIXMODE");
        let by_hex = item_by_name("0x20110011").unwrap();
        assert_eq!(by_hex.id, item.id);
        assert!(item_by_name("CFG-NO-SUCH-ITEM").is_none());
        assert!(item_by_name("0xzz110011").is_none());
    }

    #[test]
    fn ids_unique_and_sizes_consistent() {
        let mut seen = std::collections::HashSet::new();
        for item in all_items() {
            assert!(seen.insert(item.id), "duplicate id 0x{:08x}", item.id);
            assert_eq!(
                CfgSize::from_id(item.id),
                Some(item.ty.wire_size()),
                "size class mismatch for {}",
                item.name
            );
        }
    }

    #[test]
    fn names_unique() {
        let mut seen = std::collections::HashSet::new();
        for item in all_items() {
            assert!(seen.insert(item.name), "duplicate name {}", item.name);
        }
    }

    #[test]
    fn msgrate_lookup() {
        let rate = msgrate_by_name("UBX-NAV-PVT").unwrap();
        assert_eq!(rate.uart1, 0x20910007);
        let [uart1, _, _, _, usb] = rate.items();
        assert_eq!(uart1.unwrap().name, "CFG-MSGOUT-UBX_NAV_PVT_UART1");
        assert_eq!(usb.unwrap().id, 0x20910009);
        assert!(msgrate_by_name("UBX-NO-SUCH-MSG").is_none());
    }

    #[test]
    fn msgrate_items_exist() {
        for rate in all_msgrates() {
            for (id, item) in [rate.uart1, rate.uart2, rate.spi, rate.i2c, rate.usb]
                .into_iter()
                .zip(rate.items())
            {
                if id != 0 {
                    assert!(item.is_some(), "{}: missing item 0x{id:08x}", rate.msg_name);
                }
            }
        }
    }

    #[test]
    fn value_accessors() {
        assert_eq!(CfgValue::i1(-1).raw(), 0xff);
        assert_eq!(CfgValue::i1(-1).as_i1(), -1);
        assert_eq!(CfgValue::i4(-42).as_i4(), -42);
        assert_eq!(CfgValue::r4(0.25).as_r4(), 0.25);
        assert_eq!(CfgValue::r8(-1.5e9).as_r8(), -1.5e9);
        assert!(CfgValue::l(true).as_l());
        assert!(!CfgValue::l(false).as_l());
    }

    #[test]
    fn layer_names() {
        assert_eq!(CfgLayer::Flash.name(), "Flash");
        assert_eq!(CfgLayer::from_name("flash"), Some(CfgLayer::Flash));
        assert_eq!(CfgLayer::from_name("FLASH"), Some(CfgLayer::Flash));
        assert_eq!(CfgLayer::from_name("eeprom"), None);
        assert_eq!(
            format!("{}", CfgLayers::RAM | CfgLayers::FLASH),
            "RAM,Flash"
        );
    }
}
