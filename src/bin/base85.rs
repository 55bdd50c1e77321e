/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of base85.
 *
 * base85 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * base85 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with base85. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs::File;
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use base85::encode::{encode_to_vec_with, EncodeConfig};

/// Encodes or decodes base-85 (RFC 1924) data and writes the result to
/// standard output.
#[derive(Parser, Debug)]
#[command(name = "base85", version)]
struct Cli {
    /// Decode data instead of encoding
    #[arg(short, long)]
    decode: bool,

    /// When encoding, don't pad the last group to five characters
    #[arg(long)]
    no_padding: bool,

    /// Log level (error|warn|info|debug|trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Input file; standard input if missing or "-"
    file: Option<PathBuf>,
}

fn init_logger(level: &str) {
    env_logger::Builder::new().parse_filters(level).init();
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    match path {
        Some(path) if path != Path::new("-") => {
            File::open(path)
                .with_context(|| {
                    format!("could not open file '{}'", path.display())
                })?
                .read_to_end(&mut data)
                .with_context(|| {
                    format!("could not read file '{}'", path.display())
                })?;
        }
        _ => {
            stdin()
                .lock()
                .read_to_end(&mut data)
                .context("could not read standard input")?;
        }
    }
    debug!("read {} bytes of input", data.len());
    Ok(data)
}

fn write_output(data: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(stdout().lock());
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .context("could not write to standard output")
}

fn encode(data: &[u8], padded: bool) -> Vec<u8> {
    let mut config = EncodeConfig::new();
    config.padded = padded;
    let mut text = encode_to_vec_with(data, config);
    text.push(b'\n');
    text
}

fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    base85::decode_to_vec(&data[..end])
        .context("input is not valid base-85 data")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    let input = read_input(cli.file.as_deref())?;
    let output = if cli.decode {
        info!("decoding");
        decode(&input)?
    } else {
        info!("encoding (padded: {})", !cli.no_padding);
        encode(&input, !cli.no_padding)
    };
    debug!("writing {} bytes of output", output.len());
    write_output(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_appends_newline() {
        assert_eq!(encode(b"hello", true), b"Xk~0{ZvX%Q\n");
        assert_eq!(encode(b"hello", false), b"Xk~0{Zv\n");
        assert_eq!(encode(b"", true), b"\n");
    }

    #[test]
    fn decode_strips_trailing_whitespace() {
        assert_eq!(decode(b"Xk~0{Zv\r\n").unwrap(), b"hello");
        assert_eq!(decode(b" \n").unwrap(), b"");
    }

    #[test]
    fn decode_reports_bad_input() {
        let err = decode(b"Xk~0{Z,\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<base85::DecodeError>(),
            Some(&base85::DecodeError::BadChar {
                byte: b',',
                index: 6,
            }),
        );
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from(["base85", "-d", "input.txt"]);
        assert!(cli.decode);
        assert!(!cli.no_padding);
        assert_eq!(cli.file.as_deref(), Some(Path::new("input.txt")));

        let cli = Cli::parse_from(["base85", "--no-padding"]);
        assert!(cli.no_padding);
        assert_eq!(cli.log_level, "warn");
        assert!(cli.file.is_none());
    }
}
