//! Text-format readers and writers for kiln netlists and placements.
//!
//! Two file formats live here. The netlist format describes gates, their
//! pin offsets, and the wires between pins; [`read_netlist`] turns it into
//! a [`kiln_netlist::Netlist`] ready for placement. The placement format
//! records where each gate ended up together with the layout's bounding box
//! and total wirelength; [`save_placement`] writes it and [`read_placement`]
//! reads it back for verification.

#![warn(missing_docs)]

pub mod error;
pub mod netlist;
pub mod placement;

pub use error::FileError;
pub use netlist::{parse_netlist, read_netlist};
pub use placement::{
    parse_placement, read_placement, render_placement, save_placement, PlacementFile,
};
