use std::fs::{self, File};
use std::io::{Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::debug;
use serde::Deserialize;

use flatfile::{AssignOp, Csv, CsvOptions, LineEnding, PropertiesOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Properties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Json,
    Csv,
    Properties,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingArg {
    Lf,
    Crlf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpArg {
    Equals,
    Colon,
    Space,
}

#[derive(Parser, Debug)]
#[command(
    name = "flatfile-cli",
    about = "Read unquoted CSV and Java properties files, emit JSON or normalized output",
    version
)]
struct Args {
    /// Input format (default: by extension, `.properties` or CSV)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Output format (default: same as input)
    #[arg(short, long, value_enum)]
    to: Option<OutputArg>,

    /// CSV field separator
    #[arg(short, long)]
    separator: Option<String>,

    /// Comma separated logical CSV header (default: first non-blank line)
    #[arg(long, value_delimiter = ',')]
    header: Option<Vec<String>>,

    /// Line ending of written output
    #[arg(long, value_enum)]
    line_ending: Option<LineEndingArg>,

    /// Assignment operator for written properties
    #[arg(long, value_enum)]
    op: Option<OpArg>,

    /// Pad the properties assignment operator with spaces
    #[arg(long, default_value_t = false)]
    spaces: bool,

    /// Omit the header line from written CSV
    #[arg(long, default_value_t = false)]
    no_header: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// JSON file with default settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

/// Defaults loaded with `--config`; command line flags take precedence.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct CliConfig {
    separator: String,
    csv: CsvOptions,
    properties: PropertiesOptions,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            csv: CsvOptions::default(),
            properties: PropertiesOptions::default(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: CliConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?;
            debug!("loaded config {}: {config:?}", path.display());
            Ok(config)
        }
        None => Ok(CliConfig::default()),
    }
}

fn detect_format(input: Option<&Path>) -> FormatArg {
    match input.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some("properties") => FormatArg::Properties,
        _ => FormatArg::Csv,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;

    if let Some(sep) = &args.separator {
        config.separator = sep.clone();
    }
    if let Some(le) = args.line_ending {
        let le = match le {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::Crlf,
        };
        config.csv.line_ending = le;
        config.properties.line_ending = le;
    }
    if let Some(op) = args.op {
        config.properties.op = match op {
            OpArg::Equals => AssignOp::Equals,
            OpArg::Colon => AssignOp::Colon,
            OpArg::Space => AssignOp::Space,
        };
    }
    if args.spaces {
        config.properties.spaces = true;
    }
    if args.no_header {
        config.csv.include_header = false;
    }

    let mut buf = Vec::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_end(&mut buf)?;
        }
        None => {
            stdin().read_to_end(&mut buf)?;
        }
    }

    let format = args.format.unwrap_or_else(|| detect_format(args.input.as_deref()));
    let to = args.to.unwrap_or(match format {
        FormatArg::Csv => OutputArg::Csv,
        FormatArg::Properties => OutputArg::Properties,
    });
    debug!("converting {format:?} to {to:?}");

    let out: Vec<u8> = match format {
        FormatArg::Csv => {
            let csv = match &args.header {
                Some(header) => {
                    let mut csv = Csv::new(header.iter().map(|h| h.trim()), config.separator.as_str());
                    csv.read_bytes(&buf);
                    csv
                }
                None => Csv::from_bytes(&buf, config.separator.as_str()),
            };
            match to {
                OutputArg::Json => json_bytes(&flatfile::json::csv_to_json(&csv), args.pretty)?,
                OutputArg::Csv => csv.to_bytes(&config.csv),
                OutputArg::Properties => bail!("CSV input cannot be written as properties"),
            }
        }
        FormatArg::Properties => {
            let props = flatfile::properties::read_bytes(&buf);
            match to {
                OutputArg::Json => json_bytes(&flatfile::json::properties_to_json(&props), args.pretty)?,
                OutputArg::Properties => flatfile::properties::to_bytes(&props, &config.properties),
                OutputArg::Csv => {
                    let mut csv = Csv::new(["name", "value"], config.separator.as_str());
                    for (k, v) in &props {
                        csv.append(&[k, v]);
                    }
                    csv.to_bytes(&config.csv)
                }
            }
        }
    };

    let mut stdout = stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()?;
    Ok(())
}

fn json_bytes(value: &serde_json::Value, pretty: bool) -> Result<Vec<u8>> {
    let mut s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    s.push('\n');
    Ok(s.into_bytes())
}
