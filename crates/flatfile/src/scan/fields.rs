use std::borrow::Cow;

use crate::scan::line::{line_end, seek_bytes, seek_content, seek_content_rev};

/// Field spans of the most recently scanned CSV line.
///
/// The scanner is reused across calls; every [`scan_line`](Self::scan_line)
/// overwrites the previous result. Spans index into the buffer that was
/// passed to `scan_line`, so accessors must be given that same buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldScanner {
    begin: Vec<usize>,
    end: Vec<usize>,
    empty: bool,
}

impl FieldScanner {
    pub fn new() -> Self {
        Self {
            begin: Vec::with_capacity(16),
            end: Vec::with_capacity(16),
            empty: true,
        }
    }

    /// Scans the line starting at `offset` and returns the offset of the next line.
    ///
    /// Fields are split on every occurrence of `separator` and trimmed on both
    /// sides. Adjacent separators produce zero-length fields. A separator at
    /// the very end of the line does not open a trailing field. An empty
    /// separator leaves the whole trimmed line as a single field.
    pub fn scan_line(&mut self, bytes: &[u8], separator: &[u8], offset: usize) -> usize {
        self.begin.clear();
        self.end.clear();
        self.empty = true;
        let (content_end, next_line) = line_end(bytes, offset);
        let mut field_begin = seek_content(bytes, offset, content_end);
        while field_begin < content_end {
            let sep_begin = seek_bytes(bytes, separator, field_begin, content_end);
            let field_end = seek_content_rev(bytes, field_begin, sep_begin);
            self.begin.push(field_begin);
            if field_begin < field_end {
                self.end.push(field_end);
                self.empty = false;
            } else {
                self.end.push(field_begin);
            }
            field_begin = seek_content(bytes, sep_begin + separator.len(), content_end);
        }
        next_line
    }

    /// `true` when the last scanned line had no non-blank field.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Number of physical fields on the last scanned line, blank ones included.
    pub fn len(&self) -> usize {
        self.begin.len()
    }

    /// `(begin, end)` offsets of each field, left to right.
    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.begin.iter().copied().zip(self.end.iter().copied())
    }

    pub fn field_bytes<'a>(&self, bytes: &'a [u8], index: usize) -> &'a [u8] {
        &bytes[self.begin[index]..self.end[index]]
    }

    pub fn field_str<'a>(&self, bytes: &'a [u8], index: usize) -> Cow<'a, str> {
        String::from_utf8_lossy(self.field_bytes(bytes, index))
    }

    pub fn field_value(&self, bytes: &[u8], index: usize) -> String {
        self.field_str(bytes, index).into_owned()
    }

    /// Reads a field through a header mapping entry.
    ///
    /// `None` and indices past the fields of this line read as an empty string.
    pub fn field_value_or_empty(&self, bytes: &[u8], index: Option<usize>) -> String {
        match index {
            Some(i) if i < self.len() => self.field_value(bytes, i),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_each_field() {
        let mut s = FieldScanner::new();
        let b = b"aaa; bbb ;ccc;  ddd";
        let next = s.scan_line(b, b";", 0);
        assert_eq!(next, 19);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert_eq!(s.field_value(b, 0), "aaa");
        assert_eq!(s.field_value(b, 1), "bbb");
        assert_eq!(s.field_value(b, 2), "ccc");
        assert_eq!(s.field_value(b, 3), "ddd");
    }

    #[test]
    fn adjacent_separators_give_empty_fields() {
        let mut s = FieldScanner::new();
        let b = b"a;;b";
        s.scan_line(b, b";", 0);
        assert_eq!(s.len(), 3);
        assert_eq!(s.field_value(b, 1), "");
        let (begin, end) = s.spans().nth(1).unwrap();
        assert_eq!(begin, end);
    }

    #[test]
    fn separator_only_line_is_empty() {
        let mut s = FieldScanner::new();
        let b = b" ; \n";
        assert_eq!(s.scan_line(b, b";", 0), 4);
        assert!(s.is_empty());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn whitespace_line_has_no_fields() {
        let mut s = FieldScanner::new();
        s.scan_line(b" \t \r\n", b";", 0);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn empty_separator_keeps_line_whole() {
        let mut s = FieldScanner::new();
        let b = b"  a;b c  \n";
        s.scan_line(b, b"", 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.field_value(b, 0), "a;b c");
    }

    #[test]
    fn multi_byte_separator() {
        let mut s = FieldScanner::new();
        let b = b"x || y||z";
        s.scan_line(b, b"||", 0);
        assert_eq!(s.len(), 3);
        assert_eq!(s.field_value(b, 0), "x");
        assert_eq!(s.field_value(b, 1), "y");
        assert_eq!(s.field_value(b, 2), "z");
    }

    #[test]
    fn mapping_reads_absent_as_empty() {
        let mut s = FieldScanner::new();
        let b = b"1;2";
        s.scan_line(b, b";", 0);
        assert_eq!(s.field_value_or_empty(b, Some(1)), "2");
        assert_eq!(s.field_value_or_empty(b, Some(5)), "");
        assert_eq!(s.field_value_or_empty(b, None), "");
    }

    #[test]
    fn rescanning_overwrites_previous_line() {
        let mut s = FieldScanner::new();
        let b = b"a;b;c\nd\n";
        let next = s.scan_line(b, b";", 0);
        assert_eq!(s.len(), 3);
        s.scan_line(b, b";", next);
        assert_eq!(s.len(), 1);
        assert_eq!(s.field_value(b, 0), "d");
    }
}
