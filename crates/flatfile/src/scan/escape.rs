//! Backslash escapes of the properties format.

/// Appends `src` to `out` with escape sequences expanded.
///
/// `\t`, `\n` and `\r` become the control characters, `\uXXXX` (one to four
/// hex digits) becomes the UTF-8 encoding of that code point, and any other
/// escaped byte is copied as is. A `\u` without hex digits, or one naming a
/// surrogate, decodes to `?`. A lone backslash at the end of `src` is dropped.
pub fn decode_escapes(src: &[u8], out: &mut Vec<u8>) {
    let mut chunk_begin = 0usize;
    let mut i = 0usize;
    while i < src.len() {
        if src[i] != b'\\' {
            i += 1;
            continue;
        }
        out.extend_from_slice(&src[chunk_begin..i]);
        i += 1;
        if i < src.len() {
            i = match src[i] {
                b't' => push_byte(out, b'\t', i),
                b'n' => push_byte(out, b'\n', i),
                b'r' => push_byte(out, b'\r', i),
                b'u' => decode_unicode(src, i + 1, out),
                b => push_byte(out, b, i),
            };
        }
        chunk_begin = i;
    }
    if chunk_begin < src.len() {
        out.extend_from_slice(&src[chunk_begin..]);
    }
}

#[inline]
fn push_byte(out: &mut Vec<u8>, b: u8, at: usize) -> usize {
    out.push(b);
    at + 1
}

/// Decodes the hex digits following `\u` and returns the index after them.
fn decode_unicode(src: &[u8], from: usize, out: &mut Vec<u8>) -> usize {
    let mut code = 0u32;
    let mut end = from;
    while end < src.len() && end < from + 4 {
        match hex_value(src[end]) {
            Some(v) => code = code * 16 + v,
            None => break,
        }
        end += 1;
    }
    match char::from_u32(code).filter(|_| end > from) {
        Some(ch) => {
            let mut utf8 = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        None => out.push(b'?'),
    }
    end
}

#[inline]
fn hex_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'f' => Some((b - b'a' + 10) as u32),
        b'A'..=b'F' => Some((b - b'A' + 10) as u32),
        _ => None,
    }
}

#[inline]
pub fn needs_name_escape(b: u8) -> bool {
    matches!(b, b' ' | b'=' | b':' | b'\\')
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Appends `b` as an escape if it is a control byte. Returns `false` otherwise.
fn push_control(out: &mut Vec<u8>, b: u8) -> bool {
    match b {
        b'\t' => out.extend_from_slice(b"\\t"),
        b'\n' => out.extend_from_slice(b"\\n"),
        b'\r' => out.extend_from_slice(b"\\r"),
        0..=0x1f => push_unicode(out, b),
        _ => return false,
    }
    true
}

fn push_unicode(out: &mut Vec<u8>, b: u8) {
    out.extend_from_slice(b"\\u00");
    out.push(HEX[(b >> 4) as usize]);
    out.push(HEX[(b & 0x0f) as usize]);
}

/// Appends a property name to `out` so that it reads back unchanged.
///
/// Space, `=`, `:` and `\` get a backslash prefix, as does a leading `#` or
/// `!`. Control bytes become `\t`, `\n`, `\r` or `\u00XX`. A trailing space
/// is written as `\u0020` because trailing whitespace is trimmed on read.
pub fn escape_name(name: &[u8], out: &mut Vec<u8>) {
    let last = name.len().saturating_sub(1);
    for (i, &b) in name.iter().enumerate() {
        if push_control(out, b) {
            continue;
        }
        if b == b' ' && i == last {
            push_unicode(out, b);
        } else if needs_name_escape(b) || (i == 0 && (b == b'#' || b == b'!')) {
            out.push(b'\\');
            out.push(b);
        } else {
            out.push(b);
        }
    }
}

/// Appends a property value to `out` so that it reads back unchanged.
///
/// Only what the reader would otherwise alter is escaped: backslashes,
/// control bytes, spaces at either end, and a leading `=` or `:` that would
/// be taken for the assignment operator after a space.
pub fn escape_value(value: &[u8], out: &mut Vec<u8>) {
    let last = value.len().saturating_sub(1);
    for (i, &b) in value.iter().enumerate() {
        if push_control(out, b) {
            continue;
        }
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b' ' if i == 0 || i == last => push_unicode(out, b),
            b'=' | b':' if i == 0 => {
                out.push(b'\\');
                out.push(b);
            }
            _ => out.push(b),
        }
    }
}
