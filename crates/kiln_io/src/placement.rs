//! Placement result file writer and reader.
//!
//! The result format mirrors the netlist format's plain-text style:
//!
//! ```text
//! bounding_box 5 2
//! g1 0 0
//! g2 3 0
//! wire_length 8
//! ```
//!
//! One `bounding_box` record, one `<name> <x> <y>` record per gate in
//! netlist order, and one `wire_length` record with the final cost.

use crate::error::FileError;
use crate::netlist::parse_i64;
use kiln_netlist::Netlist;
use kiln_place::Placement;
use std::fmt::Write;
use std::path::Path;

/// Renders a placement as result-file text.
pub fn render_placement(netlist: &Netlist, placement: &Placement) -> String {
    let mut out = String::new();
    let (width, height) = placement.bounding_box;
    writeln!(out, "bounding_box {width} {height}").unwrap();
    for &(id, x, y) in &placement.positions {
        writeln!(out, "{} {x} {y}", netlist.gate(id).name).unwrap();
    }
    writeln!(out, "wire_length {}", placement.wirelength).unwrap();
    out
}

/// Renders a placement and writes it to `path`.
pub fn save_placement(
    netlist: &Netlist,
    placement: &Placement,
    path: &Path,
) -> Result<(), FileError> {
    std::fs::write(path, render_placement(netlist, placement))?;
    Ok(())
}

/// The contents of a placement result file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementFile {
    /// Extents from the `bounding_box` record.
    pub bounding_box: (i64, i64),
    /// Gate positions, in file order.
    pub positions: Vec<(String, i64, i64)>,
    /// Cost from the `wire_length` record.
    pub wirelength: i64,
}

/// Reads and parses a placement result file.
pub fn read_placement(path: &Path) -> Result<PlacementFile, FileError> {
    let source = std::fs::read_to_string(path)?;
    parse_placement(&source)
}

/// Parses placement result text.
///
/// The `bounding_box` and `wire_length` records are required; position
/// records may appear in any order relative to them.
pub fn parse_placement(source: &str) -> Result<PlacementFile, FileError> {
    let mut bounding_box = None;
    let mut wirelength = None;
    let mut positions = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens[0] {
            "bounding_box" => {
                if tokens.len() != 3 {
                    return Err(FileError::syntax(
                        line,
                        "expected `bounding_box <width> <height>`",
                    ));
                }
                bounding_box = Some((parse_i64(tokens[1], line)?, parse_i64(tokens[2], line)?));
            }
            "wire_length" => {
                if tokens.len() != 2 {
                    return Err(FileError::syntax(line, "expected `wire_length <total>`"));
                }
                wirelength = Some(parse_i64(tokens[1], line)?);
            }
            name => {
                if tokens.len() != 3 {
                    return Err(FileError::syntax(line, "expected `<gate> <x> <y>`"));
                }
                positions.push((
                    name.to_string(),
                    parse_i64(tokens[1], line)?,
                    parse_i64(tokens[2], line)?,
                ));
            }
        }
    }

    let bounding_box = bounding_box.ok_or(FileError::MissingRecord("bounding_box"))?;
    let wirelength = wirelength.ok_or(FileError::MissingRecord("wire_length"))?;
    Ok(PlacementFile {
        bounding_box,
        positions,
        wirelength,
    })
}
