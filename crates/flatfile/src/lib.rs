#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod scan;
pub mod csv;
pub mod properties;

#[cfg(feature = "json")]
pub mod json;

pub use crate::csv::Csv;
pub use crate::error::{Error, Result};
pub use crate::options::{AssignOp, CsvOptions, LineEnding, PropertiesOptions};
pub use crate::properties::Properties;

#[cfg(feature = "std")]
use std::path::Path;

/// Reads a CSV file, reconciling its first line with `header`.
#[cfg(feature = "std")]
pub fn read_csv_file<P, I, S>(path: P, header: I, separator: &str) -> Result<Csv>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut csv = Csv::new(header, separator);
    csv.read_file(path)?;
    Ok(csv)
}

#[cfg(feature = "std")]
pub fn read_properties_file<P: AsRef<Path>>(path: P) -> Result<Properties> {
    crate::properties::read_file(path)
}

#[cfg(feature = "std")]
pub fn write_properties_file<P: AsRef<Path>>(path: P, props: &Properties, options: &PropertiesOptions) -> Result<()> {
    crate::properties::write_file(path, props, options)
}
