//! Core netlist data structures.
//!
//! Defines the geometry model the placer works on: gates (rectangles with a
//! mutable bottom-left position), pins (fixed offsets within their gate), and
//! nets (clusters of transitively wired pins). The [`Netlist`] is the central
//! data structure that flows through the entire placement pipeline.

use crate::ids::{GateId, NetId, PinId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The gate-level netlist for placement.
///
/// Contains all gates, pins, and nets of a design. Gate positions are the
/// only mutable geometry; pin offsets and net membership are fixed after
/// ingestion. Built via [`NetlistBuilder`](crate::NetlistBuilder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Netlist {
    /// All gates in the netlist.
    pub gates: Vec<Gate>,
    /// All pins in the netlist.
    pub pins: Vec<Pin>,
    /// All nets (connectivity clusters) in the netlist.
    pub nets: Vec<Net>,
    /// Auxiliary index: gate name to ID (rebuilt on deserialization).
    #[serde(skip)]
    pub gate_by_name: HashMap<String, GateId>,
    /// Auxiliary index: pin name to ID (rebuilt on deserialization).
    #[serde(skip)]
    pub pin_by_name: HashMap<String, PinId>,
}

impl Netlist {
    /// Creates an empty netlist.
    pub fn new() -> Self {
        Self {
            gates: Vec::new(),
            pins: Vec::new(),
            nets: Vec::new(),
            gate_by_name: HashMap::new(),
            pin_by_name: HashMap::new(),
        }
    }

    /// Adds a gate and returns its ID.
    pub fn add_gate(&mut self, mut gate: Gate) -> GateId {
        let id = GateId::from_raw(self.gates.len() as u32);
        gate.id = id;
        self.gate_by_name.insert(gate.name.clone(), id);
        self.gates.push(gate);
        id
    }

    /// Adds a pin and returns its ID.
    pub fn add_pin(&mut self, mut pin: Pin) -> PinId {
        let id = PinId::from_raw(self.pins.len() as u32);
        pin.id = id;
        self.pin_by_name.insert(pin.name.clone(), id);
        self.pins.push(pin);
        id
    }

    /// Adds a net and returns its ID.
    pub fn add_net(&mut self, mut net: Net) -> NetId {
        let id = NetId::from_raw(self.nets.len() as u32);
        net.id = id;
        self.nets.push(net);
        id
    }

    /// Returns the gate with the given ID.
    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the gate with the given ID.
    pub fn gate_mut(&mut self, id: GateId) -> &mut Gate {
        &mut self.gates[id.as_raw() as usize]
    }

    /// Returns the pin with the given ID.
    pub fn pin(&self, id: PinId) -> &Pin {
        &self.pins[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the pin with the given ID.
    pub fn pin_mut(&mut self, id: PinId) -> &mut Pin {
        &mut self.pins[id.as_raw() as usize]
    }

    /// Returns the net with the given ID.
    pub fn net(&self, id: NetId) -> &Net {
        &self.nets[id.as_raw() as usize]
    }

    /// Returns the number of gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Returns the number of pins.
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Returns the number of nets.
    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    /// Returns the absolute position of a pin: its gate's bottom-left corner
    /// plus the pin's offset.
    pub fn pin_position(&self, id: PinId) -> (i64, i64) {
        let pin = self.pin(id);
        let gate = self.gate(pin.gate);
        (gate.x + pin.dx, gate.y + pin.dy)
    }

    /// Returns the width and height of the smallest axis-aligned rectangle
    /// enclosing every gate, or `(0, 0)` for an empty netlist.
    pub fn bounding_box(&self) -> (i64, i64) {
        let mut iter = self.gates.iter();
        let first = match iter.next() {
            Some(g) => g,
            None => return (0, 0),
        };
        let mut min_x = first.x;
        let mut max_x = first.x + first.width;
        let mut min_y = first.y;
        let mut max_y = first.y + first.height;
        for gate in iter {
            min_x = min_x.min(gate.x);
            max_x = max_x.max(gate.x + gate.width);
            min_y = min_y.min(gate.y);
            max_y = max_y.max(gate.y + gate.height);
        }
        (max_x - min_x, max_y - min_y)
    }

    /// Rebuilds auxiliary indices after deserialization.
    pub fn rebuild_indices(&mut self) {
        self.gate_by_name.clear();
        for (i, gate) in self.gates.iter().enumerate() {
            self.gate_by_name
                .insert(gate.name.clone(), GateId::from_raw(i as u32));
        }
        self.pin_by_name.clear();
        for (i, pin) in self.pins.iter().enumerate() {
            self.pin_by_name
                .insert(pin.name.clone(), PinId::from_raw(i as u32));
        }
    }
}

impl Default for Netlist {
    fn default() -> Self {
        Self::new()
    }
}

/// A gate in the netlist.
///
/// A rigid rectangle of fixed dimensions. The position `(x, y)` is the
/// bottom-left corner and is the only field the placement pipeline mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    /// The unique ID of this gate.
    pub id: GateId,
    /// Human-readable gate name (e.g., "g1", "g17").
    pub name: String,
    /// Width of the gate rectangle. Strictly positive.
    pub width: i64,
    /// Height of the gate rectangle. Strictly positive.
    pub height: i64,
    /// X coordinate of the bottom-left corner.
    pub x: i64,
    /// Y coordinate of the bottom-left corner.
    pub y: i64,
    /// The pins on this gate, in record order.
    pub pins: Vec<PinId>,
}

impl Gate {
    /// Returns whether this gate's rectangle intersects `other`'s.
    ///
    /// Rectangles are treated as half-open intervals along both axes, so two
    /// gates sharing only an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Gate) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A pin on a gate.
///
/// Pins sit at a fixed offset from their gate's bottom-left corner and move
/// rigidly with the gate. Connectivity is recorded twice: the raw connection
/// records in `connected_to` (kept for diagnostics) and the derived cluster
/// membership in `net` (what the optimizer reads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    /// The unique ID of this pin.
    pub id: PinId,
    /// Human-readable pin name (e.g., "g1.p2").
    pub name: String,
    /// The gate that owns this pin.
    pub gate: GateId,
    /// X offset from the gate's bottom-left corner.
    pub dx: i64,
    /// Y offset from the gate's bottom-left corner.
    pub dy: i64,
    /// Pins this pin appears with in connection records, one entry per
    /// record. Never read by the optimizer.
    pub connected_to: Vec<PinId>,
    /// The net this pin belongs to (`None` = never wired).
    pub net: Option<NetId>,
}

/// A net in the netlist.
///
/// One connectivity cluster: the set of pins reachable from each other
/// through connection records. Wirelength is estimated per net from the
/// bounding box of its members' absolute positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Net {
    /// The unique ID of this net.
    pub id: NetId,
    /// The member pins of this net.
    pub members: Vec<PinId>,
}
