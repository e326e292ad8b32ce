//! Typed indices for netlist entities.
//!
//! Gates, pins, and nets live in parallel arenas on
//! [`Netlist`](crate::Netlist), and an ID is the position of an entity in
//! its arena, assigned in insertion order. A distinct newtype per arena
//! keeps a pin index from ever fetching a gate, and the `u32` payload keeps
//! orderings and position tables compact.

use serde::{Deserialize, Serialize};

/// Position of a gate in the gate arena.
///
/// Assigned in insertion order by [`Netlist::add_gate`](crate::Netlist::add_gate);
/// a placement order is a permutation of these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct GateId(u32);

/// Position of a pin in the pin arena.
///
/// Pins are numbered across the whole netlist, not per gate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PinId(u32);

/// Position of a net in the net arena.
///
/// Nets only exist once [`NetlistBuilder::finish`](crate::NetlistBuilder::finish)
/// has folded the connection records into clusters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NetId(u32);

impl GateId {
    /// Wraps an arena position.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The position this ID points at.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl PinId {
    /// Wraps an arena position.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The position this ID points at.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl NetId {
    /// Wraps an arena position.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The position this ID points at.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}
