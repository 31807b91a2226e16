use std::fmt::Write as _;
use std::sync::OnceLock;
use std::time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Milliseconds since the first call in this process. Monotonic.
pub fn time_ms() -> u32 {
    let t0 = EPOCH.get_or_init(Instant::now);
    t0.elapsed().as_millis() as u32
}

/// Format data like `0000  b5 62 05 01 02 00 ...  .b......`, 16 bytes per line.
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::new();
    for (ix, chunk) in data.chunks(16).enumerate() {
        let _ = write!(out, "{:04x} ", ix * 16);
        for (i, b) in chunk.iter().enumerate() {
            let sep = if i == 8 { "  " } else { " " };
            let _ = write!(out, "{sep}{b:02x}");
        }
        for i in chunk.len()..16 {
            out.push_str(if i == 8 { "    " } else { "   " });
        }
        out.push_str("  ");
        for b in chunk {
            out.push(if (0x20..0x7f).contains(b) { *b as char } else { '.' });
        }
        out.push('\n');
    }
    out
}
