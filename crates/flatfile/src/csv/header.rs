//! Reconciliation of a declared header with the columns found in a file.

use log::debug;

use crate::scan::FieldScanner;

/// Logical column → physical column assignment for one CSV input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMapping {
    /// One entry per logical header name; `None` means the file has no such column.
    pub columns: Vec<Option<usize>>,
    /// `true` if the scanned line carried the header names and is not data.
    pub has_header: bool,
}

impl HeaderMapping {
    /// Positional mapping used when the first line is not a header.
    pub fn positional(logical: usize, physical: usize) -> Self {
        Self {
            columns: (0..logical).map(|i| (i < physical).then_some(i)).collect(),
            has_header: false,
        }
    }
}

/// Matches `header` against the fields of the line last scanned by `scanner`.
///
/// Names match on exact bytes only; the first physical column with that name
/// wins. With at least as many physical columns as names, every name must be
/// found. With fewer physical columns, unmatched names map to `None` but every
/// physical column must be claimed. If matching fails the line is treated as
/// data and columns are mapped by position.
pub fn reconcile<S: AsRef<str>>(bytes: &[u8], scanner: &FieldScanner, header: &[S]) -> HeaderMapping {
    let physical = scanner.len();
    let matched = if physical >= header.len() {
        match_all_names(bytes, scanner, header)
    } else {
        match_all_columns(bytes, scanner, header)
    };
    match matched {
        Some(columns) => HeaderMapping {
            columns,
            has_header: true,
        },
        None => {
            debug!(
                "header names not found in first line ({} logical, {} physical columns), mapping by position",
                header.len(),
                physical
            );
            HeaderMapping::positional(header.len(), physical)
        }
    }
}

fn find_column<S: AsRef<str>>(bytes: &[u8], scanner: &FieldScanner, name: &S) -> Option<usize> {
    let name = name.as_ref().as_bytes();
    scanner
        .spans()
        .position(|(begin, end)| &bytes[begin..end] == name)
}

fn match_all_names<S: AsRef<str>>(
    bytes: &[u8],
    scanner: &FieldScanner,
    header: &[S],
) -> Option<Vec<Option<usize>>> {
    header
        .iter()
        .map(|name| find_column(bytes, scanner, name).map(Some))
        .collect()
}

fn match_all_columns<S: AsRef<str>>(
    bytes: &[u8],
    scanner: &FieldScanner,
    header: &[S],
) -> Option<Vec<Option<usize>>> {
    let columns: Vec<Option<usize>> = header
        .iter()
        .map(|name| find_column(bytes, scanner, name))
        .collect();
    let claimed = columns.iter().flatten().count();
    (claimed == scanner.len()).then_some(columns)
}
