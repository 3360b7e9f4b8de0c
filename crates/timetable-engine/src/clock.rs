//! Clock-time text ↔ decimal-hour conversion.
//!
//! The data layer delivers meeting times either as clock text ("1:55 PM")
//! or as decimal-hour numbers (13.916…). Everything downstream works in
//! decimal hours, where the fractional part is minutes/60.
//!
//! Unparsable text yields `None` — the "unparsed" sentinel. Callers skip
//! blocks with unparsed times; they are never defaulted to a real hour.

/// AM/PM qualifier on a parsed clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

/// Parse clock text of the form `H:MM[ ]AM|PM` (case-insensitive) into a
/// decimal hour in [0,24).
///
/// The AM/PM qualifier is optional; without it the hour is read as a
/// 24-hour clock value. 12 AM maps to 0, 12 PM stays 12, and other PM
/// hours add 12. The pattern may appear anywhere in the text ("Period 3
/// (9:35 AM)" parses as 9.583…).
///
/// Returns `None` for anything that does not match, including minutes ≥ 60,
/// 24-hour values above 23, and qualified hours above 12.
pub fn parse_clock(text: &str) -> Option<f64> {
    let bytes = text.trim().as_bytes();
    for i in 0..bytes.len() {
        if bytes[i].is_ascii_digit() {
            if let Some(hour) = parse_clock_at(bytes, i) {
                return Some(hour);
            }
        }
    }
    None
}

/// Try to parse `H:MM[ ]AM|PM` starting at byte offset `i`.
fn parse_clock_at(bytes: &[u8], mut i: usize) -> Option<f64> {
    // One or two hour digits.
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() && i - digits_start < 2 {
        i += 1;
    }
    let hour: u32 = std::str::from_utf8(&bytes[digits_start..i])
        .ok()?
        .parse()
        .ok()?;

    if i >= bytes.len() || bytes[i] != b':' {
        return None;
    }
    i += 1;

    // Exactly two minute digits.
    if i + 2 > bytes.len() || !bytes[i].is_ascii_digit() || !bytes[i + 1].is_ascii_digit() {
        return None;
    }
    let minute = (bytes[i] - b'0') as u32 * 10 + (bytes[i + 1] - b'0') as u32;
    i += 2;
    if minute >= 60 {
        return None;
    }

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let period = if i + 2 <= bytes.len() {
        match (
            bytes[i].to_ascii_uppercase(),
            bytes[i + 1].to_ascii_uppercase(),
        ) {
            (b'A', b'M') => Some(Period::Am),
            (b'P', b'M') => Some(Period::Pm),
            _ => None,
        }
    } else {
        None
    };

    let hour = match period {
        Some(_) if hour == 0 || hour > 12 => return None,
        Some(Period::Am) => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        Some(Period::Pm) => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        None => {
            if hour > 23 {
                return None;
            }
            hour
        }
    };

    Some(f64::from(hour) + f64::from(minute) / 60.0)
}

/// Split a decimal hour into whole (hour, minute) clock fields.
///
/// Minutes are rounded to the nearest whole minute; a round-up to 60
/// carries into the hour (10.9999 → (11, 0)).
pub fn split_decimal(hour: f64) -> (u32, u32) {
    let whole = hour.floor();
    let mut h = whole as u32;
    let mut m = ((hour - whole) * 60.0).round() as u32;
    if m == 60 {
        h += 1;
        m = 0;
    }
    (h, m)
}

/// Format a decimal hour for display ("9 AM", "1:55 PM").
pub fn format_clock(hour: f64) -> String {
    let (whole, minutes) = split_decimal(hour);
    let (display, period) = match whole {
        0 => (12, "AM"),
        12 => (12, "PM"),
        h if h > 12 => (h - 12, "PM"),
        h => (h, "AM"),
    };
    if minutes == 0 {
        format!("{} {}", display, period)
    } else {
        format!("{}:{:02} {}", display, minutes, period)
    }
}
