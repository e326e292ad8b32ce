//! Gate-level netlist model for the kiln placer.
//!
//! This crate defines the geometry and connectivity data the placement
//! engine works on: rectangular [`Gate`]s with mutable positions, [`Pin`]s
//! at fixed offsets inside their gate, and [`Net`]s grouping transitively
//! wired pins. [`NetlistBuilder`] ingests gate and wire records and derives
//! the nets with a union-merge over connectivity clusters.
//!
//! # Usage
//!
//! ```ignore
//! use kiln_netlist::NetlistBuilder;
//!
//! let mut builder = NetlistBuilder::new();
//! builder.add_gate("g1", 4, 3, &[(0, 1), (4, 2)])?;
//! builder.add_gate("g2", 2, 2, &[(0, 0)])?;
//! builder.connect("g1.p2", "g2.p1")?;
//! let netlist = builder.finish();
//! assert_eq!(netlist.net_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod data;
pub mod error;
pub mod ids;

pub use builder::NetlistBuilder;
pub use data::{Gate, Net, Netlist, Pin};
pub use error::IngestError;
pub use ids::{GateId, NetId, PinId};
