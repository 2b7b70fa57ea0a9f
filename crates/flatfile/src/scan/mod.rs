//! Byte-offset line scanners shared by the CSV and properties readers.
//!
//! Every scanner walks a caller-owned buffer one line at a time: it takes the
//! offset of the current line, records spans into the buffer and returns the
//! offset of the next line. Nothing is copied until a value is materialized.

pub mod escape;
pub mod fields;
pub mod line;
pub mod property;

pub use fields::FieldScanner;
pub use property::{LineKind, PropertyScanner, Span};
