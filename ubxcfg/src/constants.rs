pub const UBX_SYNC_CHAR_1: u8 = 0xb5;
pub const UBX_SYNC_CHAR_2: u8 = 0x62;
pub(crate) const UBX_CLASS_OFFSET: usize = 2; // After SYNC_CHAR_1, SYNC_CHAR_2
pub(crate) const UBX_MSG_ID_OFFSET: usize = 3; // After CLASS
pub(crate) const UBX_LENGTH_OFFSET: usize = 4; // After MSG_ID
pub(crate) const UBX_HEAD_SIZE: usize = 6;
pub(crate) const UBX_CHECKSUM_LEN: usize = 2;
pub const UBX_FRAME_SIZE: usize = UBX_HEAD_SIZE + UBX_CHECKSUM_LEN;

pub const NMEA_SYNC_CHAR: u8 = 0x24; // '$'
pub(crate) const NMEA_END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub(crate) const NMEA_END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)

pub const RTCM3_SYNC_CHAR: u8 = 0xd3;
pub(crate) const RTCM3_HEAD_SIZE: usize = 3; // sync char (1) + length field (2)
pub(crate) const RTCM3_CRC_SIZE: usize = 3;
pub(crate) const RTCM3_FRAME_SIZE: usize = RTCM3_HEAD_SIZE + RTCM3_CRC_SIZE;
pub(crate) const RTCM3_LENGTH_MASK: u16 = 0x03ff; // 10 bits for length (6 bits reserved)

pub const SPARTN_SYNC_CHAR: u8 = 0x73; // 's'
pub(crate) const SPARTN_HEAD_SIZE: usize = 4; // TF001..TF004

pub const NOVATEL_SYNC_1: u8 = 0xaa;
pub(crate) const NOVATEL_SYNC_2: u8 = 0x44;
pub(crate) const NOVATEL_SYNC_3_LONG: u8 = 0x12;
pub(crate) const NOVATEL_SYNC_3_SHORT: u8 = 0x13;
pub(crate) const NOVATEL_CRC_SIZE: usize = 4;

// Parser buffer must hold at least two of the largest permitted message.
pub const PARSER_BUF_SIZE: usize = 32768;
pub const PARSER_MAX_UBX_SIZE: usize = 8192; // messages larger than this will be GARBAGE
pub const PARSER_MAX_NMEA_SIZE: usize = 400;
pub const PARSER_MAX_RTCM3_SIZE: usize = 4096;
pub const PARSER_MAX_SPARTN_SIZE: usize = 4096;
pub const PARSER_MAX_NOVATEL_SIZE: usize = 4096;
pub const PARSER_MAX_GARB_SIZE: usize = 4096;
pub const PARSER_MAX_ANY_SIZE: usize = 16384; // the largest of the above

/// Payload limit of a single UBX-CFG-VALSET message and page size of
/// UBX-CFG-VALGET polls, in key/value pairs.
pub const CFG_MAX_KV: usize = 64;

/// Exit codes used by the toolkit binaries built on this crate.
pub mod exitcode {
    pub const OK: i32 = 0;
    pub const BAD_ARGS: i32 = 1;
    pub const RX_FAIL: i32 = 2;
    pub const NO_DATA: i32 = 3;
    pub const OTHER_FAIL: i32 = 99;
}
