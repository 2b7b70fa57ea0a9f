use crate::scan::escape::decode_escapes;
use crate::scan::line::{line_end, seek_content, seek_content_rev};

/// Classification of a properties line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineKind {
    /// Nothing scanned yet.
    #[default]
    Undefined,
    /// Blank line, or whitespace only.
    Empty,
    /// Complete `name = value` line.
    Property,
    /// Property whose value continues on the next line.
    PropertyNext,
    /// Last line of a continued value.
    PropertyCont,
    /// Continued value that goes on past this line.
    PropertyContNext,
    /// Line starting with `#` or `!`.
    Comment,
    /// Name without an assignment that ends in a dangling backslash.
    UnknownFormat,
}

impl LineKind {
    /// `true` if the next non-comment line continues the current value.
    pub fn expects_continuation(self) -> bool {
        matches!(self, LineKind::PropertyNext | LineKind::PropertyContNext)
    }
}

/// Half-open byte range `[begin, end)` into a scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub const fn empty_at(at: usize) -> Self {
        Self { begin: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn slice<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.begin..self.end]
    }
}

/// Line-by-line state machine for the Java properties format.
///
/// The scanner remembers the kind of the previous line, which decides whether
/// the next line starts a new property or continues a value. Spans of the
/// name and value are overwritten on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyScanner {
    kind: LineKind,
    name: Span,
    value: Span,
}

impl PropertyScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the line starting at `offset` and returns the offset of the next line.
    pub fn scan_line(&mut self, bytes: &[u8], offset: usize) -> usize {
        let (content_end, next_line) = line_end(bytes, offset);
        let begin = seek_content(bytes, offset, content_end);
        if begin < content_end {
            let end = seek_content_rev(bytes, begin, content_end);
            if is_comment(bytes[begin]) {
                self.set(LineKind::Comment, Span::empty_at(offset), Span::new(begin, end));
            } else if self.kind.expects_continuation() {
                self.scan_continuation(bytes, begin, end);
            } else {
                self.scan_property(bytes, begin, end);
            }
        } else if self.kind.expects_continuation() {
            self.set(LineKind::PropertyCont, Span::empty_at(offset), Span::empty_at(offset));
        } else {
            self.set(LineKind::Empty, Span::empty_at(offset), Span::empty_at(offset));
        }
        next_line
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn name_span(&self) -> Span {
        self.name
    }

    pub fn value_span(&self) -> Span {
        self.value
    }

    /// Forgets any pending continuation, as if nothing had been scanned.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Appends the decoded property name to `buf`.
    pub fn name(&self, bytes: &[u8], buf: &mut Vec<u8>) {
        decode_escapes(self.name.slice(bytes), buf);
    }

    /// Appends the decoded value text of this line to `buf`.
    pub fn value(&self, bytes: &[u8], buf: &mut Vec<u8>) {
        decode_escapes(self.value.slice(bytes), buf);
    }

    fn set(&mut self, kind: LineKind, name: Span, value: Span) {
        self.kind = kind;
        self.name = name;
        self.value = value;
    }

    fn scan_property(&mut self, bytes: &[u8], from: usize, to: usize) {
        let op = seek_assignment_op(bytes, from, to);
        let name = Span::new(from, seek_content_rev(bytes, from, op));
        if op < to {
            let val_begin = seek_content(bytes, op + 1, to);
            let val_end = seek_content_rev(bytes, val_begin, to);
            if ends_with_line_continuation(bytes, val_begin, val_end) {
                self.set(LineKind::PropertyNext, name, Span::new(val_begin, val_end - 1));
            } else {
                self.set(LineKind::Property, name, Span::new(val_begin, val_end));
            }
        } else if ends_with_line_continuation(bytes, name.begin, name.end) {
            self.set(LineKind::UnknownFormat, name, Span::empty_at(name.end));
        } else {
            self.set(LineKind::Property, name, Span::empty_at(name.end));
        }
    }

    fn scan_continuation(&mut self, bytes: &[u8], from: usize, to: usize) {
        if ends_with_line_continuation(bytes, from, to) {
            self.set(LineKind::PropertyContNext, Span::empty_at(from), Span::new(from, to - 1));
        } else {
            self.set(LineKind::PropertyCont, Span::empty_at(from), Span::new(from, to));
        }
    }
}

#[inline]
fn is_comment(b: u8) -> bool {
    b == b'#' || b == b'!'
}

#[inline]
fn is_assignment_op(b: u8) -> bool {
    b == b'=' || b == b':'
}

/// Position of the first unescaped `=`, `:` or space in `[from, to)`, or `to`.
///
/// A space followed by optional whitespace and then `=` or `:` yields the
/// position of that `=` or `:` instead.
fn seek_assignment_op(bytes: &[u8], from: usize, to: usize) -> usize {
    let mut i = from;
    while i < to {
        match bytes[i] {
            b'\\' => i += 1,
            b if is_assignment_op(b) => return i,
            b' ' => {
                let next = seek_content(bytes, i, to);
                if next < to && is_assignment_op(bytes[next]) {
                    return next;
                }
                return i;
            }
            _ => {}
        }
        i += 1;
    }
    to
}

/// `true` if `[from, to)` ends in an odd run of backslashes.
fn ends_with_line_continuation(bytes: &[u8], from: usize, to: usize) -> bool {
    let run = bytes[from..to].iter().rev().take_while(|&&b| b == b'\\').count();
    run % 2 == 1
}
