//! Presentation forms.
//!
//! - IPv4: dotted decimal, four groups of 1-3 digits in `0..=255`, no
//!   leading zeros.
//! - IPv6: colon-separated hex groups. On output the longest run of at
//!   least two zero segments is collapsed to `::` (first run wins a tie).
//!   On input at most one `::` is accepted, standing for one or more zero
//!   segments, and the last 32 bits may be written as a dotted IPv4 tail.

use std::fmt::{self, Write};

/// Writes four octets in dotted-decimal form.
pub fn format_dotted<W: Write>(octets: &[u8; 4], out: &mut W) -> fmt::Result {
    let [a, b, c, d] = octets;
    write!(out, "{a}.{b}.{c}.{d}")
}

/// Writes eight segments in compressed colon-hex form.
pub fn format_colon_hex<W: Write>(segments: &[u16; 8], out: &mut W) -> fmt::Result {
    match longest_zero_run(segments) {
        Some((start, len)) => {
            write_groups(&segments[..start], out)?;
            out.write_str("::")?;
            write_groups(&segments[start + len..], out)
        }
        None => write_groups(segments, out),
    }
}

/// Eight segments as zero-padded groups without compression.
///
/// Rendered through [`fmt::Display`], e.g. `Expanded(&segments).to_string()`.
pub struct Expanded<'a>(pub &'a [u16; 8]);

impl fmt::Display for Expanded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(':')?;
            }

            write!(f, "{s:04x}")?;
        }

        Ok(())
    }
}

fn write_groups<W: Write>(groups: &[u16], out: &mut W) -> fmt::Result {
    for (i, g) in groups.iter().enumerate() {
        if i > 0 {
            out.write_char(':')?;
        }

        write!(out, "{g:x}")?;
    }

    Ok(())
}

/// Finds the first longest run of at least two zero segments.
fn longest_zero_run(segments: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;

    while i < segments.len() {
        if segments[i] != 0 {
            i += 1;
            continue;
        }

        let start = i;
        while i < segments.len() && segments[i] == 0 {
            i += 1;
        }

        let len = i - start;
        if len >= 2 && best.is_none_or(|(_, longest)| len > longest) {
            best = Some((start, len));
        }
    }

    best
}

/// Parses strict dotted-decimal text.
pub fn parse_dotted(text: &str) -> Option<[u8; 4]> {
    let mut out = [0u8; 4];
    let mut parts = text.split('.');

    for slot in out.iter_mut() {
        *slot = parse_octet(parts.next()?)?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(out)
}

fn parse_octet(part: &str) -> Option<u8> {
    let digits = part.as_bytes();

    if digits.is_empty() || digits.len() > 3 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    // "0" is fine, "01" is ambiguous (octal in some parsers)
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }

    part.parse().ok()
}

/// Parses compressed or expanded colon-hex text.
pub fn parse_colon_hex(text: &str) -> Option<[u16; 8]> {
    let mut out = [0u16; 8];

    match text.find("::") {
        Some(pos) => {
            let tail = &text[pos + 2..];
            if tail.contains("::") {
                return None;
            }

            let head = parse_groups(&text[..pos], false)?;
            let tail = parse_groups(tail, true)?;

            if head.len() + tail.len() > 7 {
                return None;
            }

            out[..head.len()].copy_from_slice(&head);
            out[8 - tail.len()..].copy_from_slice(&tail);
        }
        None => {
            let groups = parse_groups(text, true)?;
            if groups.len() != 8 {
                return None;
            }

            out.copy_from_slice(&groups);
        }
    }

    Some(out)
}

/// Parses a `:`-separated list of hex groups. An empty string is an empty
/// list. When `ipv4_tail` is set the last group may be dotted decimal,
/// contributing two segments.
fn parse_groups(text: &str, ipv4_tail: bool) -> Option<Vec<u16>> {
    let mut groups = Vec::with_capacity(8);

    if text.is_empty() {
        return Some(groups);
    }

    let mut parts = text.split(':').peekable();

    while let Some(part) = parts.next() {
        let last = parts.peek().is_none();

        if last && ipv4_tail && part.contains('.') {
            let [a, b, c, d] = parse_dotted(part)?;
            groups.push(u16::from_be_bytes([a, b]));
            groups.push(u16::from_be_bytes([c, d]));
        } else {
            groups.push(parse_hex_group(part)?);
        }

        if groups.len() > 8 {
            return None;
        }
    }

    Some(groups)
}

fn parse_hex_group(part: &str) -> Option<u16> {
    if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u16::from_str_radix(part, 16).ok()
}
