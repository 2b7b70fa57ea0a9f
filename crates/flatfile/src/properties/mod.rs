//! Java properties files.
//!
//! Reading keeps the order in which names first appear; a repeated name
//! keeps its first position and takes the last value.

pub mod writer;

pub use writer::{to_bytes, to_string};
#[cfg(feature = "std")]
pub use writer::{write_file, write_to};

#[cfg(feature = "std")]
use std::{fs, io::Read, path::Path};

use indexmap::IndexMap;
use log::{debug, warn};

use crate::scan::{LineKind, PropertyScanner};

/// Properties in file order.
pub type Properties = IndexMap<String, String>;

/// A property whose value spans several lines and is still being collected.
struct Pending {
    name: String,
    line: usize,
}

/// Parses properties from UTF-8 bytes.
///
/// A value continued with a trailing backslash ends at its last continuation
/// line, at a blank line, or at a comment. A continuation still open at the
/// end of input keeps the text collected so far.
pub fn read_bytes(bytes: &[u8]) -> Properties {
    let mut scanner = PropertyScanner::new();
    let mut props = Properties::new();
    let mut pending: Option<Pending> = None;
    let mut buf = Vec::with_capacity(32);
    let mut offset = 0usize;
    let mut line = 0usize;
    while offset < bytes.len() {
        offset = scanner.scan_line(bytes, offset);
        line += 1;
        match scanner.kind() {
            LineKind::Property => {
                let name = decode_name(&scanner, bytes, &mut buf);
                buf.clear();
                scanner.value(bytes, &mut buf);
                props.insert(name, lossy(&buf));
            }
            LineKind::PropertyNext => {
                let name = decode_name(&scanner, bytes, &mut buf);
                buf.clear();
                scanner.value(bytes, &mut buf);
                pending = Some(Pending { name, line });
            }
            LineKind::PropertyContNext => scanner.value(bytes, &mut buf),
            LineKind::PropertyCont => {
                scanner.value(bytes, &mut buf);
                flush(&mut props, &mut pending, &buf);
            }
            LineKind::Comment => flush(&mut props, &mut pending, &buf),
            LineKind::UnknownFormat => {
                warn!("line {line}: property name ends in a dangling backslash, skipped");
            }
            LineKind::Empty | LineKind::Undefined => {}
        }
    }
    if let Some(p) = &pending {
        debug!("continuation of '{}' from line {} still open at end of input", p.name, p.line);
        flush(&mut props, &mut pending, &buf);
    }
    props
}

pub fn read_str(s: &str) -> Properties {
    read_bytes(s.as_bytes())
}

#[cfg(feature = "std")]
pub fn read_reader<R: Read>(mut reader: R) -> crate::Result<Properties> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(read_bytes(&buf))
}

#[cfg(feature = "std")]
pub fn read_file<P: AsRef<Path>>(path: P) -> crate::Result<Properties> {
    let path = path.as_ref();
    debug!("reading properties file {}", path.display());
    let bytes = fs::read(path)?;
    Ok(read_bytes(&bytes))
}

fn decode_name(scanner: &PropertyScanner, bytes: &[u8], buf: &mut Vec<u8>) -> String {
    buf.clear();
    scanner.name(bytes, buf);
    lossy(buf)
}

fn flush(props: &mut Properties, pending: &mut Option<Pending>, value: &[u8]) {
    if let Some(p) = pending.take() {
        props.insert(p.name, lossy(value));
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
