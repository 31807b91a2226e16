//! Textual representation of configuration values: canonical stringification
//! and the inverse string-to-value conversion, including bitmask constant
//! expressions like `FIRST|LAST|0x20`.

use std::fmt::Write as _;

use super::{item_by_id, parse_u64_literal, CfgItem, CfgSize, CfgType, CfgValue, KeyVal};
use crate::error::CfgError;

/// Stringify a value of the given type. Constant names are added for L
/// types, and, where the `item` is given, for X and E types. Scale factors
/// and units are not applied.
pub fn stringify_value(ty: CfgType, item: Option<&CfgItem>, val: CfgValue) -> String {
    let item = item.filter(|item| item.ty == ty);
    match ty {
        CfgType::U1 => val.as_u1().to_string(),
        CfgType::U2 => val.as_u2().to_string(),
        CfgType::U4 => val.as_u4().to_string(),
        CfgType::U8 => val.as_u8().to_string(),
        CfgType::I1 => val.as_i1().to_string(),
        CfgType::I2 => val.as_i2().to_string(),
        CfgType::I4 => val.as_i4().to_string(),
        CfgType::I8 => val.as_i8().to_string(),
        CfgType::X1 => stringify_x(val.as_u1() as u64, 2, item),
        CfgType::X2 => stringify_x(val.as_u2() as u64, 4, item),
        CfgType::X4 => stringify_x(val.as_u4() as u64, 8, item),
        CfgType::X8 => stringify_x(val.as_u8(), 16, item),
        CfgType::E1 => stringify_e(val.as_i1() as i64, item),
        CfgType::E2 => stringify_e(val.as_i2() as i64, item),
        CfgType::E4 => stringify_e(val.as_i4() as i64, item),
        CfgType::R4 => format!("{}", val.as_r4()),
        CfgType::R8 => format!("{}", val.as_r8()),
        CfgType::L => {
            if val.as_l() {
                "1 (true)".into()
            } else {
                "0 (false)".into()
            }
        }
    }
}

fn stringify_x(val: u64, width: usize, item: Option<&CfgItem>) -> String {
    let mut out = format!("0x{val:0width$x} (");
    let mut used = 0u64;
    let mut first = true;
    if let Some(item) = item {
        for konst in item.consts {
            if konst.bits() & val != 0 {
                if !first {
                    out.push('|');
                }
                out.push_str(konst.name);
                used |= konst.bits();
                first = false;
            }
        }
    }
    let unused = val & !used;
    if unused == val {
        out.push_str("n/a");
    } else if unused != 0 {
        let _ = write!(out, "|0x{unused:0width$x}");
    }
    out.push(')');
    out
}

fn stringify_e(val: i64, item: Option<&CfgItem>) -> String {
    if let Some(item) = item {
        if let Some(konst) = item.consts.iter().find(|c| c.num == val) {
            return format!("{} ({})", konst.value, konst.name);
        }
    }
    format!("{val} (n/a)")
}

/// Stringify a key-value pair as `NAME (0x…, TYPE) = value`, with a
/// ` [scale unit]` suffix where the item declares one. Unknown ids render
/// as `CFG-?-? (0x…, ?N) = 0x…`.
pub fn stringify_key_val(kv: &KeyVal) -> String {
    let Some(item) = item_by_id(kv.id) else {
        let (size_char, width) = match CfgSize::from_id(kv.id) {
            Some(CfgSize::Bit) => ('0', 1),
            Some(CfgSize::One) => ('1', 2),
            Some(CfgSize::Two) => ('2', 4),
            Some(CfgSize::Four) => ('4', 8),
            Some(CfgSize::Eight) => ('8', 16),
            None => ('?', 16),
        };
        let val = kv.val.raw();
        return format!("CFG-?-? (0x{:08x}, ?{}) = 0x{val:0width$x}", kv.id, size_char);
    };
    let mut out = format!(
        "{} (0x{:08x}, {}) = {}",
        item.name,
        item.id,
        item.ty,
        stringify_value(item.ty, Some(item), kv.val)
    );
    if !item.scale.is_empty() || !item.unit.is_empty() {
        let _ = write!(out, " [{}{}]", item.scale, item.unit);
    }
    out
}

/// Split a stringified value like `3 (AUTO)` into the value part and the
/// pretty part. A pretty part of `n/a` yields `None`.
pub fn split_value_str(s: &str) -> (&str, Option<&str>) {
    match s.split_once(' ') {
        Some((value, pretty)) => {
            let pretty = pretty
                .strip_prefix('(')
                .and_then(|p| p.strip_suffix(')'))
                .filter(|p| *p != "n/a");
            (value, pretty)
        }
        None => (s, None),
    }
}

/// Convert a string to a value of the given type.
///
/// - L accepts `true`, `false`, or any numeric literal that is 0 or 1
/// - U and X accept decimal, `0x` hexadecimal and leading-zero octal
/// - I and E accept decimal and sign-extended `0x` hexadecimal
/// - E additionally accepts a constant name, X a `|`-separated list of
///   constant names and hexadecimal literals
/// - R accepts anything the standard float parser accepts
///
/// The string must not contain any characters that are not part of the
/// value, in particular no leading or trailing whitespace.
pub fn value_from_str(
    s: &str,
    ty: CfgType,
    item: Option<&CfgItem>,
) -> Result<CfgValue, CfgError> {
    if s.is_empty() || s.trim() != s {
        return Err(CfgError::BadValue(s.into()));
    }
    let item = item.filter(|item| item.ty == ty);
    match ty {
        CfgType::L => match s {
            "true" => Ok(CfgValue::l(true)),
            "false" => Ok(CfgValue::l(false)),
            _ => match parse_u64_literal(s)? {
                0 => Ok(CfgValue::l(false)),
                1 => Ok(CfgValue::l(true)),
                _ => Err(CfgError::OutOfRange(s.into())),
            },
        },
        CfgType::U1 => Ok(CfgValue::u1(parse_unsigned(s, u8::MAX as u64)? as u8)),
        CfgType::U2 => Ok(CfgValue::u2(parse_unsigned(s, u16::MAX as u64)? as u16)),
        CfgType::U4 => Ok(CfgValue::u4(parse_unsigned(s, u32::MAX as u64)? as u32)),
        CfgType::U8 => Ok(CfgValue::u8(parse_unsigned(s, u64::MAX)?)),
        CfgType::X1 => Ok(CfgValue::x1(parse_bitmask(s, u8::MAX as u64, item)? as u8)),
        CfgType::X2 => Ok(CfgValue::x2(parse_bitmask(s, u16::MAX as u64, item)? as u16)),
        CfgType::X4 => Ok(CfgValue::x4(parse_bitmask(s, u32::MAX as u64, item)? as u32)),
        CfgType::X8 => Ok(CfgValue::x8(parse_bitmask(s, u64::MAX, item)?)),
        CfgType::I1 => Ok(CfgValue::i1(parse_signed(s, 1)? as i8)),
        CfgType::I2 => Ok(CfgValue::i2(parse_signed(s, 2)? as i16)),
        CfgType::I4 => Ok(CfgValue::i4(parse_signed(s, 4)? as i32)),
        CfgType::I8 => Ok(CfgValue::i8(parse_signed(s, 8)?)),
        CfgType::E1 => Ok(CfgValue::e1(parse_enum(s, 1, item)? as i8)),
        CfgType::E2 => Ok(CfgValue::e2(parse_enum(s, 2, item)? as i16)),
        CfgType::E4 => Ok(CfgValue::e4(parse_enum(s, 4, item)? as i32)),
        CfgType::R4 => s
            .parse::<f32>()
            .map(CfgValue::r4)
            .map_err(|_| CfgError::BadValue(s.into())),
        CfgType::R8 => s
            .parse::<f64>()
            .map(CfgValue::r8)
            .map_err(|_| CfgError::BadValue(s.into())),
    }
}

fn parse_unsigned(s: &str, max: u64) -> Result<u64, CfgError> {
    let val = parse_u64_literal(s)?;
    if val > max {
        return Err(CfgError::OutOfRange(s.into()));
    }
    Ok(val)
}

fn parse_signed(s: &str, num_bytes: u32) -> Result<i64, CfgError> {
    let val = if let Some(hex) = s.strip_prefix("0x") {
        if hex.is_empty() {
            return Err(CfgError::BadValue(s.into()));
        }
        // sign-extend hex literals to the wire size
        let raw = u64::from_str_radix(hex, 16).map_err(|_| CfgError::BadValue(s.into()))?;
        match num_bytes {
            1 => {
                if raw > u8::MAX as u64 {
                    return Err(CfgError::OutOfRange(s.into()));
                }
                raw as u8 as i8 as i64
            }
            2 => {
                if raw > u16::MAX as u64 {
                    return Err(CfgError::OutOfRange(s.into()));
                }
                raw as u16 as i16 as i64
            }
            4 => {
                if raw > u32::MAX as u64 {
                    return Err(CfgError::OutOfRange(s.into()));
                }
                raw as u32 as i32 as i64
            }
            _ => raw as i64,
        }
    } else {
        s.parse::<i64>().map_err(|_| {
            if s.chars()
                .all(|c| c.is_ascii_digit() || c == '-' || c == '+')
            {
                CfgError::OutOfRange(s.into())
            } else {
                CfgError::BadValue(s.into())
            }
        })?
    };
    let (min, max) = match num_bytes {
        1 => (i8::MIN as i64, i8::MAX as i64),
        2 => (i16::MIN as i64, i16::MAX as i64),
        4 => (i32::MIN as i64, i32::MAX as i64),
        _ => (i64::MIN, i64::MAX),
    };
    if val < min || val > max {
        return Err(CfgError::OutOfRange(s.into()));
    }
    Ok(val)
}

fn parse_enum(s: &str, num_bytes: u32, item: Option<&CfgItem>) -> Result<i64, CfgError> {
    if let Some(item) = item {
        if let Some(konst) = item.const_by_name(s) {
            return Ok(konst.num);
        }
    }
    parse_signed(s, num_bytes)
}

fn parse_bitmask(s: &str, max: u64, item: Option<&CfgItem>) -> Result<u64, CfgError> {
    // constant expression first: one or more names or hex literals, OR-ed
    let mut val = 0u64;
    let mut expr_ok = true;
    for part in s.split('|') {
        if part.starts_with("0x") {
            match parse_u64_literal(part) {
                Ok(bits) => val |= bits,
                Err(_) => {
                    expr_ok = false;
                    break;
                }
            }
        } else if let Some(konst) = item.and_then(|item| item.const_by_name(part)) {
            val |= konst.bits();
        } else {
            expr_ok = false;
            break;
        }
    }
    if expr_ok {
        if val > max {
            return Err(CfgError::OutOfRange(s.into()));
        }
        return Ok(val);
    }
    if s.contains('|') {
        return Err(CfgError::UnknownConstant(s.into()));
    }
    parse_unsigned(s, max)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cfg::item_by_name;

    fn test_item(name: &str) -> &'static CfgItem {
        item_by_name(name).unwrap()
    }

    #[test]
    fn stringify_basic_types() {
        assert_eq!(stringify_value(CfgType::U1, None, CfgValue::u1(42)), "42");
        assert_eq!(
            stringify_value(CfgType::U8, None, CfgValue::u8(u64::MAX)),
            "18446744073709551615"
        );
        assert_eq!(stringify_value(CfgType::I2, None, CfgValue::i2(-42)), "-42");
        assert_eq!(
            stringify_value(CfgType::L, None, CfgValue::l(true)),
            "1 (true)"
        );
        assert_eq!(
            stringify_value(CfgType::L, None, CfgValue::l(false)),
            "0 (false)"
        );
        assert_eq!(stringify_value(CfgType::R4, None, CfgValue::r4(0.5)), "0.5");
    }

    #[test]
    fn stringify_bitmask() {
        let item = test_item("CFG-UBLOXCFGTEST-X1");
        let s = |v: u8| stringify_value(CfgType::X1, Some(item), CfgValue::x1(v));
        assert_eq!(s(0xff), "0xff (FIRST|SECOND|LAST|0x7c)");
        assert_eq!(s(0x7c), "0x7c (n/a)");
        assert_eq!(s(0x81), "0x81 (FIRST|LAST)");
        assert_eq!(s(0x00), "0x00 (n/a)");
        // without the item no constants can be named
        assert_eq!(
            stringify_value(CfgType::X1, None, CfgValue::x1(0x81)),
            "0x81 (n/a)"
        );
    }

    #[test]
    fn stringify_enum() {
        let item = test_item("CFG-NAVSPG-FIXMODE");
        assert_eq!(
            stringify_value(CfgType::E1, Some(item), CfgValue::e1(3)),
            "3 (AUTO)"
        );
        assert_eq!(
            stringify_value(CfgType::E1, Some(item), CfgValue::e1(7)),
            "7 (n/a)"
        );
    }

    #[test]
    fn stringify_key_val_known() {
        let kv = KeyVal::new(0x20110011, CfgValue::e1(3));
        assert_eq!(
            stringify_key_val(&kv),
            "CFG-NAVSPG-FIXMODE (0x20110011, E1) = 3 (AUTO)"
        );
        let kv = KeyVal::new(0x401100c1, CfgValue::i4(234));
        assert_eq!(
            stringify_key_val(&kv),
            "CFG-NAVSPG-CONSTR_ALT (0x401100c1, I4) = 234 [0.01m]"
        );
        let kv = KeyVal::new(0x201100a3, CfgValue::u1(30));
        assert_eq!(
            stringify_key_val(&kv),
            "CFG-NAVSPG-INFIL_MINCNO (0x201100a3, U1) = 30 [dBHz]"
        );
    }

    #[test]
    fn stringify_key_val_unknown() {
        let kv = KeyVal::new(0x30fe0ff3, CfgValue::u2(0xbeef));
        assert_eq!(stringify_key_val(&kv), "CFG-?-? (0x30fe0ff3, ?2) = 0xbeef");
    }

    #[test]
    fn split_value_strings() {
        assert_eq!(split_value_str("3 (AUTO)"), ("3", Some("AUTO")));
        assert_eq!(split_value_str("0x7c (n/a)"), ("0x7c", None));
        assert_eq!(split_value_str("2099"), ("2099", None));
    }

    #[test]
    fn parse_bool() {
        let p = |s: &str| value_from_str(s, CfgType::L, None);
        assert!(p("true").unwrap().as_l());
        assert!(!p("false").unwrap().as_l());
        assert!(p("1").unwrap().as_l());
        assert!(!p("0x0").unwrap().as_l());
        assert!(p("2").is_err());
        assert!(p("TRUE").is_err());
    }

    #[test]
    fn parse_unsigned_literals() {
        let p = |s: &str| value_from_str(s, CfgType::U1, None).map(|v| v.as_u1());
        assert_eq!(p("42").unwrap(), 42);
        assert_eq!(p("0x2a").unwrap(), 42);
        assert_eq!(p("052").unwrap(), 42);
        assert_eq!(p("255").unwrap(), 255);
        assert!(p("256").is_err());
        assert!(p("-1").is_err());
        assert!(p("").is_err());
    }

    #[test]
    fn parse_full_u64_range() {
        let val = value_from_str("18446744073709551615", CfgType::U8, None).unwrap();
        assert_eq!(val.as_u8(), u64::MAX);
        let val = value_from_str("-9223372036854775808", CfgType::I8, None).unwrap();
        assert_eq!(val.as_i8(), i64::MIN);
    }

    #[test]
    fn parse_signed_literals() {
        let p = |s: &str| value_from_str(s, CfgType::I1, None).map(|v| v.as_i1());
        assert_eq!(p("-128").unwrap(), -128);
        assert_eq!(p("127").unwrap(), 127);
        // hex is sign-extended to the wire size
        assert_eq!(p("0xff").unwrap(), -1);
        assert!(p("128").is_err());
        assert!(p("-129").is_err());
    }

    #[test]
    fn parse_enum_names() {
        let item = test_item("CFG-NAVSPG-FIXMODE");
        let val = value_from_str("AUTO", CfgType::E1, Some(item)).unwrap();
        assert_eq!(val.as_i1(), 3);
        let val = value_from_str("2", CfgType::E1, Some(item)).unwrap();
        assert_eq!(val.as_i1(), 2);
        assert!(value_from_str("TURBO", CfgType::E1, Some(item)).is_err());
    }

    #[test]
    fn parse_bitmask_expressions() {
        let item = test_item("CFG-UBLOXCFGTEST-X1");
        let p = |s: &str| value_from_str(s, CfgType::X1, Some(item)).map(|v| v.as_u1());
        assert_eq!(p("FIRST|LAST").unwrap(), 0x81);
        assert_eq!(p("LAST|FIRST").unwrap(), 0x81);
        assert_eq!(p("FIRST|0x04|LAST").unwrap(), 0x85);
        assert_eq!(p("0x01|0x02").unwrap(), 0x03);
        assert_eq!(p("0x7c").unwrap(), 0x7c);
        assert_eq!(p("124").unwrap(), 124);
        assert_eq!(
            p("FIRST|NOPE"),
            Err(CfgError::UnknownConstant("FIRST|NOPE".into()))
        );
        assert!(p("NOPE").is_err());
    }

    #[test]
    fn parse_rejects_whitespace() {
        assert!(value_from_str(" 1", CfgType::U1, None).is_err());
        assert!(value_from_str("1 ", CfgType::U1, None).is_err());
        assert!(value_from_str("1.5 ", CfgType::R8, None).is_err());
        assert!(value_from_str(" true", CfgType::L, None).is_err());
    }

    #[test]
    fn parse_floats() {
        let val = value_from_str("1.25e-24", CfgType::R8, None).unwrap();
        assert_eq!(val.as_r8(), 1.25e-24);
        let val = value_from_str("0.5", CfgType::R4, None).unwrap();
        assert_eq!(val.as_r4(), 0.5);
        assert!(value_from_str("1.2.3", CfgType::R8, None).is_err());
    }

    #[test]
    fn stringify_parse_round_trip() {
        let item = test_item("CFG-UBLOXCFGTEST-X1");
        for val in [0x00u8, 0x01, 0x7c, 0x81, 0xff] {
            let s = stringify_value(CfgType::X1, Some(item), CfgValue::x1(val));
            let (value_part, _) = split_value_str(&s);
            let parsed = value_from_str(value_part, CfgType::X1, Some(item)).unwrap();
            assert_eq!(parsed.as_u1(), val, "round trip of {s:?}");
        }
    }
}
