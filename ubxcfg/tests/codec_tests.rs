//! Codec and catalog properties: wire round-trips for arbitrary key/value
//! lists, and stringify/parse consistency across the whole catalog.

use proptest::prelude::*;

use ubxcfg::cfg::{
    self, all_items, item_by_id, make_data, parse_data, split_value_str, stringify_value,
    value_from_str, CfgItem, CfgType, CfgValue, KeyVal,
};

fn masked(item: &CfgItem, raw: u64) -> CfgValue {
    let num_bytes = item.ty.wire_size().num_bytes();
    let mask = if num_bytes == 8 {
        u64::MAX
    } else {
        (1u64 << (num_bytes * 8)) - 1
    };
    let raw = raw & mask;
    // L values are 0 or 1 on the wire
    if item.ty == CfgType::L {
        CfgValue::from_raw(raw & 1)
    } else {
        CfgValue::from_raw(raw)
    }
}

fn key_val() -> impl Strategy<Value = KeyVal> {
    (0..all_items().len(), any::<u64>())
        .prop_map(|(ix, raw)| {
            let item = &all_items()[ix];
            KeyVal::new(item.id, masked(item, raw))
        })
}

proptest! {
    /// parse(encode(pairs)) == pairs for any valid list that fits.
    #[test]
    fn wire_round_trip(kv in prop::collection::vec(key_val(), 0..40)) {
        let mut buf = vec![0u8; kv.len() * 12];
        let size = make_data(&mut buf, &kv).unwrap();
        let parsed = parse_data(&buf[..size]).unwrap();
        prop_assert_eq!(parsed, kv);
    }

    /// The value part of a stringified value parses back to the same value.
    #[test]
    fn stringify_parse_round_trip(ix in 0usize..1000, raw in any::<u64>()) {
        let item = &all_items()[ix % all_items().len()];
        let val = masked(item, raw);
        let s = stringify_value(item.ty, Some(item), val);
        let (value_part, _) = split_value_str(&s);
        let parsed = value_from_str(value_part, item.ty, Some(item));
        match item.ty {
            // arbitrary bits as floats may be NaN, which never compares equal
            CfgType::R4 if val.as_r4().is_nan() => {}
            CfgType::R8 if val.as_r8().is_nan() => {}
            _ => {
                let parsed = parsed.unwrap();
                prop_assert_eq!(parsed, val, "item {} value {:?} string {:?}", item.name, val, s);
            }
        }
    }
}

#[test]
fn bitmask_constants_commute() {
    for item in all_items() {
        if !matches!(item.ty, CfgType::X1 | CfgType::X2 | CfgType::X4 | CfgType::X8) {
            continue;
        }
        for a in item.consts {
            for b in item.consts {
                let ab = value_from_str(&format!("{}|{}", a.name, b.name), item.ty, Some(item));
                let ba = value_from_str(&format!("{}|{}", b.name, a.name), item.ty, Some(item));
                assert_eq!(ab.unwrap(), ba.unwrap(), "{}: {}|{}", item.name, a.name, b.name);
            }
        }
    }
}

#[test]
fn enum_constants_round_trip() {
    for item in all_items() {
        if !matches!(item.ty, CfgType::E1 | CfgType::E2 | CfgType::E4) {
            continue;
        }
        for konst in item.consts {
            let by_name = value_from_str(konst.name, item.ty, Some(item)).unwrap();
            let by_value = value_from_str(konst.value, item.ty, Some(item)).unwrap();
            assert_eq!(by_name, by_value, "{}: {}", item.name, konst.name);
            // and the stringification names the constant
            let s = stringify_value(item.ty, Some(item), by_name);
            assert!(s.contains(konst.name), "{}: {}", item.name, s);
        }
    }
}

#[test]
fn scale_and_unit_reach_the_key_val_string() {
    let kv = KeyVal::new(
        cfg::item_by_name("CFG-RATE-MEAS").unwrap().id,
        CfgValue::u2(1000),
    );
    assert_eq!(
        cfg::stringify_key_val(&kv),
        "CFG-RATE-MEAS (0x30210001, U2) = 1000 [0.001s]"
    );
}

#[test]
fn catalog_spot_checks() {
    // a few well-known ids resolve to the right items
    for (id, name, ty) in [
        (0x10110013u32, "CFG-NAVSPG-INIFIX3D", CfgType::L),
        (0x30110017, "CFG-NAVSPG-WKNROLLOVER", CfgType::U2),
        (0x20110011, "CFG-NAVSPG-FIXMODE", CfgType::E1),
        (0x20910007, "CFG-MSGOUT-UBX_NAV_PVT_UART1", CfgType::U1),
        (0x20910350, "CFG-MSGOUT-UBX_MON_COMMS_UART1", CfgType::U1),
        (0x40520001, "CFG-UART1-BAUDRATE", CfgType::U4),
        (0x30210001, "CFG-RATE-MEAS", CfgType::U2),
    ] {
        let item = item_by_id(id).unwrap_or_else(|| panic!("missing 0x{id:08x}"));
        assert_eq!(item.name, name);
        assert_eq!(item.ty, ty);
    }
}
