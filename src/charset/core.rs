//! `tr`-style SET syntax for building rule maps.
//!
//! Supports:
//! - Literal bytes (a `&str` contributes its UTF-8 bytes as-is)
//! - Escape sequences: \\, \a, \b, \f, \n, \r, \t, \v, \NNN (octal)
//! - Ranges: a-z, A-Z, 0-9, \000-\037
//! - Character classes: [:alnum:], [:alpha:], etc.
//! - Equivalence classes: [=c=]
//! - Repeat: [c*n], and [c*] (fill, SET2 only)

use super::error::{Result, SetError};
use crate::table::{CharModMap, ReplacementMap};

/// Upper bound on an expanded set. Repeats past this are rejected rather than
/// allocated.
pub const MAX_SET_LEN: usize = 1 << 16;

/// A parsed set, with the position and byte of a `[c*]` fill if one was seen.
struct Parsed {
    bytes: Vec<u8>,
    fill: Option<(usize, u8)>,
}

/// Every byte value absent from `set`, ascending.
pub fn complement(set: &[u8]) -> Vec<u8> {
    let mut present = [false; 256];
    for &b in set {
        present[b as usize] = true;
    }
    (0u8..=255).filter(|&b| !present[b as usize]).collect()
}

/// Parse a SET string into its expanded bytes, in order, duplicates kept.
pub fn parse_set(s: &str) -> Result<Vec<u8>> {
    let parsed = parse(s)?;
    if parsed.fill.is_some() {
        return Err(SetError::FillInSet1);
    }
    Ok(parsed.bytes)
}

/// Parse SET2 and stretch it to `set1_len` bytes.
///
/// A `[c*]` fill absorbs the difference; otherwise the last byte is repeated.
/// Never truncates: the result may be longer than `set1_len`. Stretching
/// stops at [`MAX_SET_LEN`].
pub fn expand_set2(s: &str, set1_len: usize) -> Result<Vec<u8>> {
    let Parsed { mut bytes, fill } = parse(s)?;
    let set1_len = set1_len.min(MAX_SET_LEN);
    match fill {
        Some((at, ch)) => {
            let missing = set1_len.saturating_sub(bytes.len());
            bytes.splice(at..at, std::iter::repeat_n(ch, missing));
        }
        None => {
            if let Some(&last) = bytes.last() {
                if bytes.len() < set1_len {
                    bytes.resize(set1_len, last);
                }
            }
        }
    }
    Ok(bytes)
}

/// Pair SET1 with SET2 positionally. A byte listed twice in SET1 takes its
/// last pairing.
pub fn translation_map(set1: &str, set2: &str) -> Result<ReplacementMap> {
    let from = parse_set(set1)?;
    if from.is_empty() {
        return Ok(ReplacementMap::new());
    }
    let to = expand_set2(set2, from.len())?;
    if to.is_empty() {
        return Err(SetError::EmptySet2);
    }
    Ok(from.into_iter().zip(to).collect())
}

/// Rules removing every byte of `set`.
pub fn removal_map(set: &str) -> Result<CharModMap> {
    Ok(parse_set(set)?.into_iter().map(|b| (b, None)).collect())
}

/// Rules removing every byte NOT in `set`, like `tr -dc`.
pub fn complement_removal_map(set: &str) -> Result<CharModMap> {
    Ok(complement(&parse_set(set)?)
        .into_iter()
        .map(|b| (b, None))
        .collect())
}

fn parse(s: &str) -> Result<Parsed> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut fill = None;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some((class, end)) = parse_char_class(bytes, i)? {
                out.extend_from_slice(&class);
                i = end;
                continue;
            }
            if let Some((ch, end)) = parse_equiv_class(bytes, i) {
                out.push(ch);
                i = end;
                continue;
            }
            if let Some((ch, count, end)) = parse_repeat(bytes, i)? {
                if count == 0 {
                    if fill.is_some() {
                        return Err(SetError::MultipleFill);
                    }
                    fill = Some((out.len(), ch));
                } else {
                    let total = out
                        .len()
                        .checked_add(count)
                        .filter(|&n| n <= MAX_SET_LEN)
                        .ok_or_else(|| repeat_too_large(bytes, i, end))?;
                    out.resize(total, ch);
                }
                i = end;
                continue;
            }
        }

        let (start, advance) = parse_byte(bytes, i)?;

        // Range: start-end, only when a byte follows the '-'
        let dash = i + advance;
        if dash + 1 < bytes.len() && bytes[dash] == b'-' {
            let (end, end_advance) = parse_byte(bytes, dash + 1)?;
            if end < start {
                return Err(SetError::ReversedRange {
                    start: start as char,
                    end: end as char,
                });
            }
            out.extend(start..=end);
            i = dash + 1 + end_advance;
            continue;
        }

        out.push(start);
        i += advance;
    }

    Ok(Parsed { bytes: out, fill })
}

/// Read one byte at `i`, decoding an escape if one starts there.
/// Returns (byte_value, number_of_bytes_consumed).
fn parse_byte(bytes: &[u8], i: usize) -> Result<(u8, usize)> {
    if bytes[i] != b'\\' || i + 1 >= bytes.len() {
        return Ok((bytes[i], 1));
    }
    let decoded = match bytes[i + 1] {
        b'\\' => b'\\',
        b'a' => 0x07,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        b'0'..=b'7' => return parse_octal(bytes, i),
        // Unknown escape: the char itself
        ch => ch,
    };
    Ok((decoded, 2))
}

/// Octal escape \N, \NN or \NNN starting at the backslash.
fn parse_octal(bytes: &[u8], i: usize) -> Result<(u8, usize)> {
    let digits = bytes[i + 1..]
        .iter()
        .take(3)
        .take_while(|b| (b'0'..=b'7').contains(b))
        .count();
    let value = bytes[i + 1..i + 1 + digits]
        .iter()
        .fold(0u16, |acc, &d| acc * 8 + (d - b'0') as u16);
    if value > 0o377 {
        let text = String::from_utf8_lossy(&bytes[i + 1..i + 1 + digits]).into_owned();
        return Err(SetError::OctalOutOfRange(text));
    }
    Ok((value as u8, 1 + digits))
}

/// Try to parse a character class like [:alpha:] starting at position i.
/// Returns (expanded bytes, position after the closing ']'), or `None` when
/// the text isn't shaped like a class and should be read literally.
fn parse_char_class(bytes: &[u8], i: usize) -> Result<Option<(Vec<u8>, usize)>> {
    if bytes.get(i + 1) != Some(&b':') {
        return Ok(None);
    }
    let start = i + 2;
    let Some(len) = bytes[start..].windows(2).position(|w| w == b":]") else {
        return Ok(None);
    };
    let name = &bytes[start..start + len];
    match expand_class(name) {
        Some(chars) => Ok(Some((chars, start + len + 2))),
        None => Err(SetError::UnknownClass(
            String::from_utf8_lossy(name).into_owned(),
        )),
    }
}

/// Class name and the inclusive byte ranges it covers, in expansion order.
const CLASSES: &[(&str, &[(u8, u8)])] = &[
    ("alnum", &[(b'0', b'9'), (b'A', b'Z'), (b'a', b'z')]),
    ("alpha", &[(b'A', b'Z'), (b'a', b'z')]),
    ("blank", &[(b'\t', b'\t'), (b' ', b' ')]),
    ("cntrl", &[(0x00, 0x1F), (0x7F, 0x7F)]),
    ("digit", &[(b'0', b'9')]),
    ("graph", &[(b'!', b'~')]),
    ("lower", &[(b'a', b'z')]),
    ("print", &[(b' ', b'~')]),
    ("punct", &[(b'!', b'/'), (b':', b'@'), (b'[', b'`'), (b'{', b'~')]),
    // \t \n \v \f \r are contiguous
    ("space", &[(b'\t', b'\r'), (b' ', b' ')]),
    ("upper", &[(b'A', b'Z')]),
    ("xdigit", &[(b'0', b'9'), (b'A', b'F'), (b'a', b'f')]),
];

fn expand_class(name: &[u8]) -> Option<Vec<u8>> {
    let (_, ranges) = CLASSES.iter().find(|(n, _)| n.as_bytes() == name)?;
    Some(ranges.iter().flat_map(|&(lo, hi)| lo..=hi).collect())
}

/// Try to parse an equivalence class like [=c=] starting at position i.
fn parse_equiv_class(bytes: &[u8], i: usize) -> Option<(u8, usize)> {
    match bytes.get(i..i + 5)? {
        [b'[', b'=', ch, b'=', b']'] => Some((*ch, i + 5)),
        _ => None,
    }
}

/// Try to parse a repeat construct like [c*n] or [c*] starting at position i.
/// Returns (byte, count, position after ']'). A count of 0 means fill.
/// `n` is octal when it starts with 0, decimal otherwise.
fn parse_repeat(bytes: &[u8], i: usize) -> Result<Option<(u8, usize, usize)>> {
    if i + 3 >= bytes.len() {
        return Ok(None);
    }

    let (ch, char_len) = parse_byte(bytes, i + 1)?;
    let star = i + 1 + char_len;
    if bytes.get(star) != Some(&b'*') {
        return Ok(None);
    }

    let digits_start = star + 1;
    let Some(len) = bytes[digits_start..].iter().position(|&b| b == b']') else {
        return Ok(None);
    };
    let digits = &bytes[digits_start..digits_start + len];
    let end = digits_start + len + 1;
    if digits.is_empty() {
        return Ok(Some((ch, 0, end)));
    }

    let radix = if digits[0] == b'0' { 8 } else { 10 };
    if !digits.iter().all(|&d| (d as char).is_digit(radix)) {
        return Ok(None);
    }
    // All bytes are ASCII digits here, so both conversions below only fail on overflow.
    let count = std::str::from_utf8(digits)
        .ok()
        .and_then(|num| usize::from_str_radix(num, radix).ok())
        .ok_or_else(|| repeat_too_large(bytes, i, end))?;
    Ok(Some((ch, count, end)))
}

fn repeat_too_large(bytes: &[u8], start: usize, end: usize) -> SetError {
    SetError::RepeatTooLarge(String::from_utf8_lossy(&bytes[start..end]).into_owned())
}
