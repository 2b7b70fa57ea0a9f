//! Unquoted CSV tables with name-based column reconciliation.
//!
//! Fields are split on a literal separator string and trimmed; there is no
//! quoting, so a field containing the separator or a line break does not
//! survive a write/read cycle. Blank lines are skipped on read.

pub mod header;

pub use header::{HeaderMapping, reconcile};

#[cfg(feature = "std")]
use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::options::CsvOptions;
use crate::scan::FieldScanner;

/// Column-major CSV table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csv {
    header: Vec<String>,
    separator: String,
    columns: Vec<Vec<String>>,
    line_numbers: Vec<usize>,
}

impl Csv {
    pub fn new<I, S>(header: I, separator: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        let columns = header.iter().map(|_| Vec::with_capacity(16)).collect();
        Self {
            header,
            separator: separator.into(),
            columns,
            line_numbers: Vec::with_capacity(16),
        }
    }

    /// Reads `bytes` using the first non-blank line as the header.
    pub fn from_bytes(bytes: &[u8], separator: impl Into<String>) -> Self {
        let separator = separator.into();
        let mut scanner = FieldScanner::new();
        let mut offset = 0usize;
        while offset < bytes.len() {
            offset = scanner.scan_line(bytes, separator.as_bytes(), offset);
            if !scanner.is_empty() {
                break;
            }
        }
        let header: Vec<String> = (0..scanner.len()).map(|i| scanner.field_value(bytes, i)).collect();
        let mut csv = Self::new(header, separator);
        csv.read_bytes(bytes);
        csv
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Source line (1-based) of each row; `0` for rows added in memory.
    pub fn line_numbers(&self) -> &[usize] {
        &self.line_numbers
    }

    pub fn column(&self, col: usize) -> Option<&[String]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.line_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_numbers.is_empty()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.columns.get(col)?.get(row).map(String::as_str)
    }

    pub fn row(&self, row: usize) -> Option<Vec<&str>> {
        (row < self.len()).then(|| self.columns.iter().map(|c| c[row].as_str()).collect())
    }

    /// Appends a row. Missing values are empty, surplus values are ignored.
    pub fn append<S: AsRef<str>>(&mut self, values: &[S]) {
        for (col, column) in self.columns.iter_mut().enumerate() {
            column.push(cell(values, col));
        }
        self.line_numbers.push(0);
    }

    /// Inserts a row before `row`; `row == len()` appends.
    pub fn insert<S: AsRef<str>>(&mut self, row: usize, values: &[S]) -> Result<()> {
        if row > self.len() {
            return Err(self.out_of_bounds(row));
        }
        for (col, column) in self.columns.iter_mut().enumerate() {
            column.insert(row, cell(values, col));
        }
        self.line_numbers.insert(row, 0);
        Ok(())
    }

    /// Overwrites a row.
    pub fn set<S: AsRef<str>>(&mut self, row: usize, values: &[S]) -> Result<()> {
        if row >= self.len() {
            return Err(self.out_of_bounds(row));
        }
        for (col, column) in self.columns.iter_mut().enumerate() {
            column[row] = cell(values, col);
        }
        Ok(())
    }

    pub fn remove(&mut self, row: usize) -> Result<()> {
        if row >= self.len() {
            return Err(self.out_of_bounds(row));
        }
        for column in &mut self.columns {
            column.remove(row);
        }
        self.line_numbers.remove(row);
        Ok(())
    }

    /// Deletes all rows, keeping the header.
    pub fn clear(&mut self) {
        self.line_numbers.clear();
        for column in &mut self.columns {
            column.clear();
        }
    }

    /// Appends the rows found in `bytes`.
    ///
    /// The first non-blank line is matched against the header (see
    /// [`reconcile`]). If it carries the header names it is consumed;
    /// otherwise it is read as the first data row and columns map by position.
    pub fn read_bytes(&mut self, bytes: &[u8]) {
        let sep = self.separator.clone();
        let separator = sep.as_bytes();
        let mut scanner = FieldScanner::new();
        let mut offset = scanner.scan_line(bytes, separator, 0);
        let mut line = 1usize;
        while offset < bytes.len() && scanner.is_empty() {
            trace!("skipping blank line {line}");
            offset = scanner.scan_line(bytes, separator, offset);
            line += 1;
        }
        if scanner.is_empty() {
            debug!("no content in {} bytes of CSV input", bytes.len());
            return;
        }
        let mapping = reconcile(bytes, &scanner, &self.header);
        if !mapping.has_header {
            self.push_scanned(bytes, &scanner, &mapping, line);
        }
        while offset < bytes.len() {
            offset = scanner.scan_line(bytes, separator, offset);
            line += 1;
            if scanner.is_empty() {
                trace!("skipping blank line {line}");
            } else {
                self.push_scanned(bytes, &scanner, &mapping, line);
            }
        }
        debug!("read {} CSV rows from {line} lines", self.len());
    }

    pub fn read_str(&mut self, s: &str) {
        self.read_bytes(s.as_bytes());
    }

    #[cfg(feature = "std")]
    pub fn read_reader<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.read_bytes(&buf);
        Ok(())
    }

    #[cfg(feature = "std")]
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("reading CSV file {}", path.display());
        let bytes = fs::read(path)?;
        self.read_bytes(&bytes);
        Ok(())
    }

    /// Serializes the table. Nothing is quoted or escaped.
    pub fn to_bytes(&self, options: &CsvOptions) -> Vec<u8> {
        let eol = options.line_ending.as_bytes();
        let mut out = Vec::with_capacity(self.needed_size(options));
        if options.include_header {
            self.write_line(&mut out, self.header.iter().map(String::as_str), eol);
        }
        for row in 0..self.len() {
            self.write_line(&mut out, self.columns.iter().map(|c| c[row].as_str()), eol);
        }
        out
    }

    #[cfg(feature = "std")]
    pub fn write_to<W: Write>(&self, mut writer: W, options: &CsvOptions) -> Result<()> {
        writer.write_all(&self.to_bytes(options))?;
        Ok(())
    }

    #[cfg(feature = "std")]
    pub fn write_file<P: AsRef<Path>>(&self, path: P, options: &CsvOptions) -> Result<()> {
        let path = path.as_ref();
        debug!("writing {} CSV rows to {}", self.len(), path.display());
        fs::write(path, self.to_bytes(options))?;
        Ok(())
    }

    fn push_scanned(&mut self, bytes: &[u8], scanner: &FieldScanner, mapping: &HeaderMapping, line: usize) {
        for (column, &index) in self.columns.iter_mut().zip(&mapping.columns) {
            column.push(scanner.field_value_or_empty(bytes, index));
        }
        self.line_numbers.push(line);
    }

    fn write_line<'a>(&self, out: &mut Vec<u8>, fields: impl Iterator<Item = &'a str>, eol: &[u8]) {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                out.extend_from_slice(self.separator.as_bytes());
            }
            out.extend_from_slice(field.as_bytes());
        }
        out.extend_from_slice(eol);
    }

    fn needed_size(&self, options: &CsvOptions) -> usize {
        let per_line = self.header.len().saturating_sub(1) * self.separator.len()
            + options.line_ending.as_bytes().len();
        let data: usize = self.columns.iter().flatten().map(String::len).sum();
        let mut size = data + per_line * self.len();
        if options.include_header {
            size += per_line + self.header.iter().map(String::len).sum::<usize>();
        }
        size
    }

    fn out_of_bounds(&self, row: usize) -> Error {
        Error::RowOutOfBounds { row, len: self.len() }
    }
}

fn cell<S: AsRef<str>>(values: &[S], col: usize) -> String {
    values.get(col).map_or_else(String::new, |v| v.as_ref().to_string())
}
