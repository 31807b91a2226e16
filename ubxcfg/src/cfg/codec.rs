//! Binary configuration data codec: the `{id, value}` record format of the
//! UBX-CFG-VALSET and UBX-CFG-VALGET payloads, and builders for complete
//! messages including multi-message transactions.

use super::{CfgLayer, CfgLayers, CfgSize, CfgValue, KeyVal};
use crate::constants::CFG_MAX_KV;
use crate::error::CfgError;
use crate::parser::ubx::{make_frame, UBX_CFG_CLSID, UBX_CFG_VALGET_MSGID, UBX_CFG_VALSET_MSGID};

/// UBX-CFG-VALSET transaction field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    None = 0,
    Begin = 1,
    Continue = 2,
    End = 3,
}

const VALSET_VERSION: u8 = 1;
const VALGET_POLL_VERSION: u8 = 0;
const VALGET_RESP_VERSION: u8 = 1;

/// Encode key-value pairs into binary configuration data. Returns the number
/// of bytes used in `buf`; on error the buffer contents are not valid. An
/// empty list is valid input and produces zero bytes.
pub fn make_data(buf: &mut [u8], kv: &[KeyVal]) -> Result<usize, CfgError> {
    let mut ix = 0;
    for kv in kv {
        let size = CfgSize::from_id(kv.id)
            .ok_or_else(|| CfgError::BadValue(format!("0x{:08x}", kv.id)))?;
        let num_bytes = size.num_bytes();
        if ix + 4 + num_bytes > buf.len() {
            return Err(CfgError::BufferTooSmall);
        }
        buf[ix..ix + 4].copy_from_slice(&kv.id.to_le_bytes());
        ix += 4;
        buf[ix..ix + num_bytes].copy_from_slice(&kv.val.raw().to_le_bytes()[..num_bytes]);
        ix += num_bytes;
    }
    Ok(ix)
}

/// Decode binary configuration data into key-value pairs. Unknown ids are
/// passed through; only structurally truncated data fails.
pub fn parse_data(data: &[u8]) -> Result<Vec<KeyVal>, CfgError> {
    let mut kv = Vec::with_capacity(data.len() / 5);
    let mut ix = 0;
    while ix < data.len() {
        if ix + 4 > data.len() {
            return Err(CfgError::Truncated);
        }
        let id = u32::from_le_bytes([data[ix], data[ix + 1], data[ix + 2], data[ix + 3]]);
        ix += 4;
        let size = CfgSize::from_id(id).ok_or(CfgError::Truncated)?;
        let num_bytes = size.num_bytes();
        if ix + num_bytes > data.len() {
            return Err(CfgError::Truncated);
        }
        let mut raw = [0u8; 8];
        raw[..num_bytes].copy_from_slice(&data[ix..ix + num_bytes]);
        ix += num_bytes;
        kv.push(KeyVal::new(id, CfgValue::from_raw(u64::from_le_bytes(raw))));
    }
    Ok(kv)
}

/// Encode a single UBX-CFG-VALSET payload.
pub fn valset_payload(
    kv: &[KeyVal],
    layers: CfgLayers,
    transaction: Transaction,
) -> Result<Vec<u8>, CfgError> {
    let mut payload = vec![VALSET_VERSION, layers.bits(), transaction as u8, 0];
    let mut data = vec![0u8; kv.len() * 12];
    let size = make_data(&mut data, kv)?;
    payload.extend_from_slice(&data[..size]);
    Ok(payload)
}

/// Turn a key-value list of any length into complete UBX-CFG-VALSET frames.
///
/// A list that fits one message is sent without transaction semantics.
/// Longer lists become a BEGIN message, CONTINUE messages, and a final empty
/// END message (the receiver is documented to ignore key-value pairs carried
/// in the END message, so none are put there).
pub fn make_valset_msgs(kv: &[KeyVal], layers: CfgLayers) -> Result<Vec<Vec<u8>>, CfgError> {
    if kv.is_empty() {
        return Err(CfgError::Empty);
    }
    if layers.is_empty() {
        return Err(CfgError::BadValue("no target layers".into()));
    }
    let mut msgs = Vec::with_capacity(kv.len().div_ceil(CFG_MAX_KV) + 1);
    if kv.len() <= CFG_MAX_KV {
        let payload = valset_payload(kv, layers, Transaction::None)?;
        msgs.push(make_frame(UBX_CFG_CLSID, UBX_CFG_VALSET_MSGID, &payload));
        return Ok(msgs);
    }
    for (ix, chunk) in kv.chunks(CFG_MAX_KV).enumerate() {
        let transaction = if ix == 0 {
            Transaction::Begin
        } else {
            Transaction::Continue
        };
        let payload = valset_payload(chunk, layers, transaction)?;
        msgs.push(make_frame(UBX_CFG_CLSID, UBX_CFG_VALSET_MSGID, &payload));
    }
    let end = valset_payload(&[], layers, Transaction::End)?;
    msgs.push(make_frame(UBX_CFG_CLSID, UBX_CFG_VALSET_MSGID, &end));
    Ok(msgs)
}

/// Build a UBX-CFG-VALGET poll frame for up to [CFG_MAX_KV] keys starting at
/// `position`.
pub fn make_valget_poll(layer: CfgLayer, position: u16, keys: &[u32]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(4 + keys.len() * 4);
    payload.push(VALGET_POLL_VERSION);
    payload.push(layer.valget_value());
    payload.extend_from_slice(&position.to_le_bytes());
    for key in keys {
        payload.extend_from_slice(&key.to_le_bytes());
    }
    make_frame(UBX_CFG_CLSID, UBX_CFG_VALGET_MSGID, &payload)
}

/// Decode a UBX-CFG-VALGET response payload into its layer and position
/// header fields and the carried key-value pairs.
pub fn parse_valget_response(payload: &[u8]) -> Result<(u8, u16, Vec<KeyVal>), CfgError> {
    if payload.len() < 4 {
        return Err(CfgError::Truncated);
    }
    if payload[0] != VALGET_RESP_VERSION {
        return Err(CfgError::BadValue(format!("version {}", payload[0])));
    }
    let layer = payload[1];
    let position = u16::from_le_bytes([payload[2], payload[3]]);
    let kv = parse_data(&payload[4..])?;
    Ok((layer, position, kv))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cfg::item_by_name;

    // CFG-NAVSPG-INIFIX3D=true, CFG-NAVSPG-WKNROLLOVER=2099,
    // CFG-NAVSPG-FIXMODE=AUTO, CFG-MSGOUT-UBX_NAV_PVT_UART1=1,
    // CFG-MSGOUT-UBX_MON_COMMS_UART1=5
    fn fixture() -> Vec<KeyVal> {
        vec![
            KeyVal::new(0x10110013, CfgValue::l(true)),
            KeyVal::new(0x30110017, CfgValue::u2(2099)),
            KeyVal::new(0x20110011, CfgValue::e1(3)),
            KeyVal::new(0x20910007, CfgValue::u1(1)),
            KeyVal::new(0x20910350, CfgValue::u1(5)),
        ]
    }

    const FIXTURE_BYTES: [u8; 26] = [
        0x13, 0x00, 0x11, 0x10, 0x01, //
        0x17, 0x00, 0x11, 0x30, 0x33, 0x08, //
        0x11, 0x00, 0x11, 0x20, 0x03, //
        0x07, 0x00, 0x91, 0x20, 0x01, //
        0x50, 0x03, 0x91, 0x20, 0x05,
    ];

    #[test]
    fn encode_fixture() {
        let mut buf = [0u8; 100];
        let size = make_data(&mut buf, &fixture()).unwrap();
        assert_eq!(size, 26);
        assert_eq!(buf[..size], FIXTURE_BYTES);
    }

    #[test]
    fn decode_fixture() {
        let kv = parse_data(&FIXTURE_BYTES).unwrap();
        assert_eq!(kv, fixture());
        assert!(kv[0].val.as_l());
        assert_eq!(kv[1].val.as_u2(), 2099);
        assert_eq!(kv[2].val.as_i1(), 3);
    }

    #[test]
    fn empty_list_is_valid() {
        let mut buf = [0u8; 4];
        assert_eq!(make_data(&mut buf, &[]).unwrap(), 0);
        assert_eq!(parse_data(&[]).unwrap(), vec![]);
    }

    #[test]
    fn encode_buffer_too_small() {
        let mut buf = [0u8; 25]; // one byte short of the fixture
        assert_eq!(
            make_data(&mut buf, &fixture()),
            Err(CfgError::BufferTooSmall)
        );
    }

    #[test]
    fn decode_truncation_fails() {
        assert_eq!(parse_data(&FIXTURE_BYTES[..3]), Err(CfgError::Truncated));
        assert_eq!(parse_data(&FIXTURE_BYTES[..25]), Err(CfgError::Truncated));
    }

    #[test]
    fn decode_keeps_unknown_ids() {
        let data = [0xf3, 0x0f, 0xfe, 0x30, 0xef, 0xbe];
        let kv = parse_data(&data).unwrap();
        assert_eq!(kv.len(), 1);
        assert_eq!(kv[0].id, 0x30fe0ff3);
        assert_eq!(kv[0].val.as_u2(), 0xbeef);
        assert!(kv[0].item().is_none());
    }

    #[test]
    fn round_trip_all_sizes() {
        let kv = vec![
            KeyVal::new(0x10fe0001, CfgValue::l(true)),
            KeyVal::new(0x20fe0021, CfgValue::i1(-42)),
            KeyVal::new(0x30fe0022, CfgValue::i2(-4242)),
            KeyVal::new(0x40fe0033, CfgValue::x4(0xdead_beef)),
            KeyVal::new(0x50fe0042, CfgValue::r8(1e-3 / 3.0)),
        ];
        let mut buf = [0u8; 100];
        let size = make_data(&mut buf, &kv).unwrap();
        assert_eq!(parse_data(&buf[..size]).unwrap(), kv);
    }

    #[test]
    fn valset_single_message() {
        let msgs = make_valset_msgs(&fixture(), CfgLayers::RAM).unwrap();
        assert_eq!(msgs.len(), 1);
        // UBX-CFG-VALSET, version 1, layers RAM, no transaction
        assert_eq!(msgs[0][2], 0x06);
        assert_eq!(msgs[0][3], 0x8a);
        assert_eq!(msgs[0][6], 1);
        assert_eq!(msgs[0][7], 0x01);
        assert_eq!(msgs[0][8], Transaction::None as u8);
        assert_eq!(&msgs[0][10..36], &FIXTURE_BYTES);
    }

    #[test]
    fn valset_transaction_batching() {
        let item = item_by_name("CFG-UBLOXCFGTEST-U1").unwrap();
        let kv: Vec<KeyVal> = (0..150)
            .map(|ix| KeyVal::new(item.id, CfgValue::u1(ix as u8)))
            .collect();
        let msgs = make_valset_msgs(&kv, CfgLayers::RAM | CfgLayers::BBR).unwrap();
        // 64 + 64 + 22 pairs, plus the empty END message
        assert_eq!(msgs.len(), 4);
        assert_eq!(msgs[0][8], Transaction::Begin as u8);
        assert_eq!(msgs[1][8], Transaction::Continue as u8);
        assert_eq!(msgs[2][8], Transaction::Continue as u8);
        assert_eq!(msgs[3][8], Transaction::End as u8);
        // END message carries no key-value pairs: header + 4 payload + checksum
        assert_eq!(msgs[3].len(), 6 + 4 + 2);
        assert_eq!(msgs[0][7], (CfgLayers::RAM | CfgLayers::BBR).bits());
    }

    #[test]
    fn valset_rejects_bad_input() {
        assert_eq!(make_valset_msgs(&[], CfgLayers::RAM), Err(CfgError::Empty));
        assert!(make_valset_msgs(&fixture(), CfgLayers::empty()).is_err());
    }

    #[test]
    fn valget_poll_layout() {
        let frame = make_valget_poll(CfgLayer::Bbr, 64, &[0x10110013, 0x30110017]);
        assert_eq!(frame[2], 0x06);
        assert_eq!(frame[3], 0x8b);
        let payload = &frame[6..frame.len() - 2];
        assert_eq!(payload[0], 0); // poll version
        assert_eq!(payload[1], 1); // BBR
        assert_eq!(u16::from_le_bytes([payload[2], payload[3]]), 64);
        assert_eq!(&payload[4..8], &0x10110013u32.to_le_bytes());
    }

    #[test]
    fn valget_response_parsing() {
        let mut payload = vec![1u8, 0, 0, 0];
        payload.extend_from_slice(&FIXTURE_BYTES);
        let (layer, position, kv) = parse_valget_response(&payload).unwrap();
        assert_eq!(layer, 0);
        assert_eq!(position, 0);
        assert_eq!(kv, fixture());
        assert!(parse_valget_response(&[0u8, 0, 0, 0]).is_err());
    }
}
