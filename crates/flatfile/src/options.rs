#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line terminator used by the writers. Readers accept every convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
        }
    }
}

/// Assignment operator written between property name and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AssignOp {
    #[default]
    Equals,
    Colon,
    Space,
}

impl AssignOp {
    pub fn as_byte(self) -> u8 {
        match self {
            AssignOp::Equals => b'=',
            AssignOp::Colon => b':',
            AssignOp::Space => b' ',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PropertiesOptions {
    pub op: AssignOp,
    /// Pad the operator with one space on each side (`name = value`).
    pub spaces: bool,
    pub line_ending: LineEnding,
}

impl PropertiesOptions {
    /// Bytes written between name and value.
    pub fn assignment(&self) -> Vec<u8> {
        let op = self.op.as_byte();
        if self.spaces { vec![b' ', op, b' '] } else { vec![op] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvOptions {
    /// Write the logical header as the first line.
    pub include_header: bool,
    pub line_ending: LineEnding,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            line_ending: LineEnding::Lf,
        }
    }
}
