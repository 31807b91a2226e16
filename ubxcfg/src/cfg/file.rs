//! Line-oriented textual configuration format, as consumed and produced by
//! the cfg2rx/rx2cfg style tools. Each non-empty, non-comment line is one
//! of:
//!
//! - `CFG-GROUP-NAME value` (or `0xHHHHHHHH value` for unknown items)
//! - `MSGNAME u1 u2 spi i2c usb` (per-port output rates, `-` leaves a port
//!   unchanged)
//! - `PORT baud inprot outprot` (`PORT` one of UART1, UART2, SPI, I2C, USB;
//!   protocol lists are comma-separated `UBX`/`NMEA`/`RTCM3X` with optional
//!   `!` negation, or `-`)

use std::fmt::Write as _;

use super::{
    item_by_name, msgrate_by_name, stringify_value, value_from_str, CfgValue, KeyVal, MsgRate,
};
use crate::error::CfgError;

static PORTS: &[&str] = &["UART1", "UART2", "SPI", "I2C", "USB"];
static PROTOCOLS: &[&str] = &["UBX", "NMEA", "RTCM3X"];

/// Parse one configuration line into the key-value pairs it sets. Comments
/// and surrounding whitespace must already be stripped.
pub fn parse_cfg_line(line: &str) -> Result<Vec<KeyVal>, CfgError> {
    let mut tokens = line.split_ascii_whitespace();
    let first = tokens.next().ok_or_else(|| CfgError::BadLine(line.into()))?;
    let rest: Vec<&str> = tokens.collect();

    if PORTS.contains(&first) {
        return parse_port_line(line, first, &rest);
    }
    if let Some(rates) = msgrate_by_name(first) {
        return parse_rate_line(line, rates, &rest);
    }
    // key/value, by name or hex id
    let [value] = rest[..] else {
        return Err(CfgError::BadLine(line.into()));
    };
    let item = item_by_name(first);
    match item {
        Some(item) => {
            let val = value_from_str(value, item.ty, Some(item))?;
            Ok(vec![KeyVal::new(item.id, val)])
        }
        None => {
            let Some(hex) = first.strip_prefix("0x") else {
                return Err(CfgError::BadLine(line.into()));
            };
            let id = u32::from_str_radix(hex, 16)
                .map_err(|_| CfgError::BadLine(line.into()))?;
            // without an item the type is unknown, accept a numeric literal
            let raw = super::parse_u64_literal(value)?;
            Ok(vec![KeyVal::new(id, CfgValue::from_raw(raw))])
        }
    }
}

fn parse_rate_line(
    line: &str,
    rates: &MsgRate,
    tokens: &[&str],
) -> Result<Vec<KeyVal>, CfgError> {
    let [uart1, uart2, spi, i2c, usb] = tokens[..] else {
        return Err(CfgError::BadLine(line.into()));
    };
    let [item_uart1, item_uart2, item_spi, item_i2c, item_usb] = rates.items();
    let mut kv = vec![];
    for (token, item) in [
        (uart1, item_uart1),
        (uart2, item_uart2),
        (spi, item_spi),
        (i2c, item_i2c),
        (usb, item_usb),
    ] {
        if token == "-" {
            continue;
        }
        let item = item.ok_or_else(|| CfgError::BadLine(line.into()))?;
        let rate: u8 = token
            .parse()
            .map_err(|_| CfgError::BadValue(token.into()))?;
        kv.push(KeyVal::new(item.id, CfgValue::u1(rate)));
    }
    Ok(kv)
}

fn parse_port_line(line: &str, port: &str, tokens: &[&str]) -> Result<Vec<KeyVal>, CfgError> {
    let [baud, inprot, outprot] = tokens[..] else {
        return Err(CfgError::BadLine(line.into()));
    };
    let mut kv = vec![];
    if baud != "-" {
        if !port.starts_with("UART") {
            return Err(CfgError::BadLine(line.into()));
        }
        let item = item_by_name(&format!("CFG-{port}-BAUDRATE"))
            .ok_or_else(|| CfgError::BadLine(line.into()))?;
        let baudrate: u32 = baud.parse().map_err(|_| CfgError::BadValue(baud.into()))?;
        kv.push(KeyVal::new(item.id, CfgValue::u4(baudrate)));
    }
    for (direction, list) in [("IN", inprot), ("OUT", outprot)] {
        if list == "-" {
            continue;
        }
        for token in list.split(',') {
            let (enable, proto) = match token.strip_prefix('!') {
                Some(proto) => (false, proto),
                None => (true, token),
            };
            if !PROTOCOLS.contains(&proto) {
                return Err(CfgError::BadLine(line.into()));
            }
            let item = item_by_name(&format!("CFG-{port}{direction}PROT-{proto}"))
                .ok_or_else(|| CfgError::BadLine(line.into()))?;
            kv.push(KeyVal::new(item.id, CfgValue::l(enable)));
        }
    }
    Ok(kv)
}

/// Parse a whole configuration file. `#` introduces a comment; empty lines
/// are skipped. Errors name the offending line.
pub fn parse_cfg_file(text: &str) -> Result<Vec<KeyVal>, CfgError> {
    let mut kv = vec![];
    for (line_no, line) in text.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((content, _comment)) => content,
            None => line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        kv.extend(
            parse_cfg_line(line)
                .map_err(|e| CfgError::BadLine(format!("line {}: {e}", line_no + 1)))?,
        );
    }
    Ok(kv)
}

/// Render key-value pairs as configuration lines (the rx2cfg direction).
/// Known items get their name and value string, unknown items the hex form.
pub fn write_cfg_lines(kv: &[KeyVal]) -> String {
    let mut out = String::new();
    for kv in kv {
        match kv.item() {
            Some(item) => {
                let value = stringify_value(item.ty, Some(item), kv.val);
                let (value, pretty) = super::split_value_str(&value);
                let _ = write!(out, "{:<40} {value}", item.name);
                if let Some(pretty) = pretty {
                    let _ = write!(out, " # {pretty}");
                }
            }
            None => {
                let width = 2 * kv.size().map_or(8, |size| size.num_bytes());
                let _ = write!(out, "{:<40} 0x{:0width$x}", format!("0x{:08x}", kv.id), kv.val.raw());
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_value_lines() {
        let kv = parse_cfg_line("CFG-NAVSPG-FIXMODE AUTO").unwrap();
        assert_eq!(kv, vec![KeyVal::new(0x20110011, CfgValue::e1(3))]);
        let kv = parse_cfg_line("CFG-NAVSPG-WKNROLLOVER 2099").unwrap();
        assert_eq!(kv, vec![KeyVal::new(0x30110017, CfgValue::u2(2099))]);
        let kv = parse_cfg_line("0x30fe0ff3 0xbeef").unwrap();
        assert_eq!(kv, vec![KeyVal::new(0x30fe0ff3, CfgValue::u2(0xbeef))]);
        assert!(parse_cfg_line("CFG-NO-SUCH-THING 1").is_err());
        assert!(parse_cfg_line("CFG-NAVSPG-FIXMODE").is_err());
    }

    #[test]
    fn rate_lines() {
        let kv = parse_cfg_line("UBX-NAV-PVT 1 - - - 5").unwrap();
        assert_eq!(
            kv,
            vec![
                KeyVal::new(0x20910007, CfgValue::u1(1)), // UART1
                KeyVal::new(0x20910009, CfgValue::u1(5)), // USB
            ]
        );
        assert!(parse_cfg_line("UBX-NAV-PVT 1 - -").is_err());
        assert!(parse_cfg_line("UBX-NAV-PVT 1 - - - 300").is_err());
    }

    #[test]
    fn port_lines() {
        let kv = parse_cfg_line("UART1 115200 UBX,!NMEA -").unwrap();
        assert_eq!(
            kv,
            vec![
                KeyVal::new(0x40520001, CfgValue::u4(115200)),
                KeyVal::new(0x10730001, CfgValue::l(true)),
                KeyVal::new(0x10730002, CfgValue::l(false)),
            ]
        );
        let kv = parse_cfg_line("USB - - UBX,NMEA,RTCM3X").unwrap();
        assert_eq!(kv.len(), 3);
        assert!(kv.iter().all(|kv| kv.val.as_l()));
        // baudrate only makes sense on the UARTs
        assert!(parse_cfg_line("USB 9600 - -").is_err());
        assert!(parse_cfg_line("UART1 - SPARTN -").is_err());
    }

    #[test]
    fn file_with_comments() {
        let text = "\
# receiver configuration
CFG-NAVSPG-INIFIX3D true   # force 3D initial fix

UBX-NAV-PVT 1 - - - -
UART2 - - !RTCM3X
";
        let kv = parse_cfg_file(text).unwrap();
        assert_eq!(
            kv,
            vec![
                KeyVal::new(0x10110013, CfgValue::l(true)),
                KeyVal::new(0x20910008, CfgValue::u1(1)),
                KeyVal::new(0x10760004, CfgValue::l(false)),
            ]
        );
    }

    #[test]
    fn file_error_names_line() {
        let err = parse_cfg_file("CFG-NAVSPG-INIFIX3D true\nrubbish here\n").unwrap_err();
        assert!(matches!(err, CfgError::BadLine(s) if s.starts_with("line 2:")));
    }

    #[test]
    fn write_lines_round_trip() {
        let kv = vec![
            KeyVal::new(0x20110011, CfgValue::e1(3)),
            KeyVal::new(0x10110013, CfgValue::l(true)),
            KeyVal::new(0x30fe0ff3, CfgValue::u2(0xbeef)),
        ];
        let text = write_cfg_lines(&kv);
        assert!(text.contains("CFG-NAVSPG-FIXMODE"));
        assert!(text.contains("# AUTO"));
        let parsed = parse_cfg_file(&text).unwrap();
        assert_eq!(parsed, kv);
    }
}
