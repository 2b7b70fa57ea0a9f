#[cfg(feature = "std")]
use log::debug;
#[cfg(feature = "std")]
use std::{fs, io::Write, path::Path};

use crate::options::PropertiesOptions;
use crate::scan::escape::{escape_name, escape_value};

/// Serializes properties as `name<op>value` lines.
///
/// Entries with an empty name are skipped. Names and values are escaped so
/// that [`read_bytes`](super::read_bytes) returns them unchanged.
pub fn to_bytes<I, K, V>(props: I, options: &PropertiesOptions) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let assignment = options.assignment();
    let eol = options.line_ending.as_bytes();
    let mut out = Vec::with_capacity(256);
    for (name, value) in props {
        let name = name.as_ref().as_bytes();
        if name.is_empty() {
            continue;
        }
        escape_name(name, &mut out);
        out.extend_from_slice(&assignment);
        escape_value(value.as_ref().as_bytes(), &mut out);
        out.extend_from_slice(eol);
    }
    out
}

pub fn to_string<I, K, V>(props: I, options: &PropertiesOptions) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    String::from_utf8_lossy(&to_bytes(props, options)).into_owned()
}

#[cfg(feature = "std")]
pub fn write_to<W, I, K, V>(mut writer: W, props: I, options: &PropertiesOptions) -> crate::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    writer.write_all(&to_bytes(props, options))?;
    Ok(())
}

/// Writes properties to `path`. Nothing is written when there are no entries.
#[cfg(feature = "std")]
pub fn write_file<P, I, K, V>(path: P, props: I, options: &PropertiesOptions) -> crate::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let path = path.as_ref();
    let bytes = to_bytes(props, options);
    if bytes.is_empty() {
        debug!("no properties to write to {}", path.display());
        return Ok(());
    }
    debug!("writing {} bytes of properties to {}", bytes.len(), path.display());
    fs::write(path, bytes)?;
    Ok(())
}
