//! Gate/pin/wire netlist file parser.
//!
//! Reads the plain-text netlist format into a [`Netlist`]. Three record
//! shapes are recognized, one per line:
//!
//! ```text
//! g1 3 2              # gate: name, width, height
//! pins g1 0 1 3 0     # pin offsets for a gate, as x/y pairs
//! wire g1.p2 g2.p1    # connection between two pins
//! ```
//!
//! Pins are numbered `p1..pN` in record order. Lines starting with `#` are
//! comments; blank lines are skipped. Records may appear in any order as
//! long as every name is defined before it is referenced.

use crate::error::FileError;
use kiln_netlist::{Netlist, NetlistBuilder};
use std::path::Path;

/// Reads and parses a netlist file.
pub fn read_netlist(path: &Path) -> Result<Netlist, FileError> {
    let source = std::fs::read_to_string(path)?;
    parse_netlist(&source)
}

/// Parses netlist text into a [`Netlist`].
///
/// Errors carry the 1-based line number of the record that caused them.
pub fn parse_netlist(source: &str) -> Result<Netlist, FileError> {
    let mut builder = NetlistBuilder::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens[0] {
            "pins" => {
                if tokens.len() < 2 {
                    return Err(FileError::syntax(
                        line,
                        "expected `pins <gate> <dx> <dy> ...`",
                    ));
                }
                let coords = &tokens[2..];
                if coords.len() % 2 != 0 {
                    return Err(FileError::syntax(line, "pin offsets must come in x/y pairs"));
                }
                let mut offsets = Vec::with_capacity(coords.len() / 2);
                for pair in coords.chunks_exact(2) {
                    offsets.push((parse_i64(pair[0], line)?, parse_i64(pair[1], line)?));
                }
                builder
                    .add_pins(tokens[1], &offsets)
                    .map_err(|source| FileError::Ingest { line, source })?;
            }
            "wire" => {
                if tokens.len() != 3 {
                    return Err(FileError::syntax(line, "expected `wire <pin> <pin>`"));
                }
                builder
                    .connect(tokens[1], tokens[2])
                    .map_err(|source| FileError::Ingest { line, source })?;
            }
            name => {
                if tokens.len() != 3 {
                    return Err(FileError::syntax(line, "expected `<gate> <width> <height>`"));
                }
                let width = parse_i64(tokens[1], line)?;
                let height = parse_i64(tokens[2], line)?;
                builder
                    .add_gate(name, width, height, &[])
                    .map_err(|source| FileError::Ingest { line, source })?;
            }
        }
    }

    Ok(builder.finish())
}

pub(crate) fn parse_i64(token: &str, line: usize) -> Result<i64, FileError> {
    token
        .parse()
        .map_err(|_| FileError::syntax(line, format!("invalid integer `{token}`")))
}
