//! Line boundaries and whitespace trimming over raw bytes.

/// Returns `true` for bytes that count as line content.
///
/// Everything up to and including the space (`0x20`) is trimmable. Bytes with
/// the high bit set are read as negative signed values and always count as
/// content, so multi-byte UTF-8 sequences are never trimmed.
#[inline]
pub fn is_content(b: u8) -> bool {
    (b as i8) < 0 || b > 32
}

/// Finds the end of the line starting at `from`.
///
/// Returns `(content_end, next_line_start)`. A line ends at `\n`, at `\r\n`,
/// or at a lone `\r`; each line is checked on its own, so mixed conventions
/// in one buffer are fine. An unterminated last line yields
/// `(bytes.len(), bytes.len())`.
#[inline]
#[cfg(not(feature = "perf_memchr"))]
pub fn line_end(bytes: &[u8], from: usize) -> (usize, usize) {
    let to = bytes.len();
    let mut i = from;
    while i < to {
        match bytes[i] {
            b'\n' => return (i, i + 1),
            b'\r' => {
                if i + 1 < to && bytes[i + 1] == b'\n' {
                    return (i, i + 2);
                }
                return (i, i + 1);
            }
            _ => i += 1,
        }
    }
    (to, to)
}

#[inline]
#[cfg(feature = "perf_memchr")]
pub fn line_end(bytes: &[u8], from: usize) -> (usize, usize) {
    let to = bytes.len();
    if from >= to {
        return (to, to);
    }
    match memchr::memchr2(b'\n', b'\r', &bytes[from..]) {
        Some(rel) => {
            let i = from + rel;
            if bytes[i] == b'\r' && i + 1 < to && bytes[i + 1] == b'\n' {
                (i, i + 2)
            } else {
                (i, i + 1)
            }
        }
        None => (to, to),
    }
}

/// First content byte in `[from, to)`, or `to` if there is none.
#[inline]
pub fn seek_content(bytes: &[u8], from: usize, to: usize) -> usize {
    (from..to).find(|&i| is_content(bytes[i])).unwrap_or(to)
}

/// One past the last content byte in `[from, to)`, or `from` if there is none.
#[inline]
pub fn seek_content_rev(bytes: &[u8], from: usize, to: usize) -> usize {
    (from..to)
        .rev()
        .find(|&i| is_content(bytes[i]))
        .map_or(from, |i| i + 1)
}

/// Start of the first occurrence of `word` in `[from, to)`, or `to`.
///
/// An empty `word` never matches.
#[inline]
#[cfg(not(feature = "perf_memchr"))]
pub fn seek_bytes(bytes: &[u8], word: &[u8], from: usize, to: usize) -> usize {
    if word.is_empty() || to < from + word.len() {
        return to;
    }
    bytes[from..to]
        .windows(word.len())
        .position(|w| w == word)
        .map_or(to, |rel| from + rel)
}

#[inline]
#[cfg(feature = "perf_memchr")]
pub fn seek_bytes(bytes: &[u8], word: &[u8], from: usize, to: usize) -> usize {
    if word.is_empty() || to < from + word.len() {
        return to;
    }
    memchr::memmem::find(&bytes[from..to], word).map_or(to, |rel| from + rel)
}
