//! Netlist construction from gate and connection records.
//!
//! [`NetlistBuilder`] is the ingestion context: gates and their pins arrive
//! first, then connection records between pin names. Each connection merges
//! the two pins' connectivity clusters; [`NetlistBuilder::finish`] freezes
//! the clusters into [`Net`]s and hands back the completed [`Netlist`].

use crate::data::{Gate, Net, Netlist, Pin};
use crate::error::IngestError;
use crate::ids::{GateId, NetId, PinId};
use std::collections::HashMap;

/// Incrementally builds a [`Netlist`] from gate, pin, and wire records.
///
/// Clustering is a union-merge over interim cluster slots: every wired pin
/// maps to a slot, and a connection between two clustered pins moves the
/// smaller cluster's members into the larger one. Slots emptied by a merge
/// are left behind and skipped at [`finish`](Self::finish).
#[derive(Debug)]
pub struct NetlistBuilder {
    netlist: Netlist,
    /// Interim cluster slot of each wired pin.
    cluster_of: HashMap<PinId, usize>,
    /// Interim cluster member lists, indexed by slot. Empty = merged away.
    clusters: Vec<Vec<PinId>>,
}

impl NetlistBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            netlist: Netlist::new(),
            cluster_of: HashMap::new(),
            clusters: Vec::new(),
        }
    }

    /// Adds a gate with the given dimensions and pin offsets.
    ///
    /// Pins are named `<gate>.p<k>` with `k` starting at 1 in record order.
    /// An empty `pin_offsets` slice creates the gate without pins; they can
    /// be attached later with [`add_pins`](Self::add_pins).
    pub fn add_gate(
        &mut self,
        name: &str,
        width: i64,
        height: i64,
        pin_offsets: &[(i64, i64)],
    ) -> Result<GateId, IngestError> {
        if self.netlist.gate_by_name.contains_key(name) {
            return Err(IngestError::DuplicateGate(name.to_string()));
        }
        if width <= 0 || height <= 0 {
            return Err(IngestError::InvalidDimensions {
                gate: name.to_string(),
                width,
                height,
            });
        }
        let gate = self.netlist.add_gate(Gate {
            id: GateId::from_raw(0),
            name: name.to_string(),
            width,
            height,
            x: 0,
            y: 0,
            pins: Vec::new(),
        });
        self.attach_pins(gate, pin_offsets);
        Ok(gate)
    }

    /// Attaches pins to a previously added gate that has none yet.
    pub fn add_pins(
        &mut self,
        gate_name: &str,
        pin_offsets: &[(i64, i64)],
    ) -> Result<(), IngestError> {
        let gate = match self.netlist.gate_by_name.get(gate_name) {
            Some(&id) => id,
            None => return Err(IngestError::UnknownGate(gate_name.to_string())),
        };
        if !self.netlist.gate(gate).pins.is_empty() {
            return Err(IngestError::DuplicatePins(gate_name.to_string()));
        }
        self.attach_pins(gate, pin_offsets);
        Ok(())
    }

    fn attach_pins(&mut self, gate: GateId, pin_offsets: &[(i64, i64)]) {
        for (k, &(dx, dy)) in pin_offsets.iter().enumerate() {
            let name = format!("{}.p{}", self.netlist.gate(gate).name, k + 1);
            let pin = self.netlist.add_pin(Pin {
                id: PinId::from_raw(0),
                name,
                gate,
                dx,
                dy,
                connected_to: Vec::new(),
                net: None,
            });
            self.netlist.gate_mut(gate).pins.push(pin);
        }
    }

    /// Records a connection between two pin names and merges their clusters.
    ///
    /// Both names must refer to existing pins. A pin wired to itself is a
    /// no-op; a repeated record between already-clustered pins adds another
    /// adjacency entry but leaves the clusters untouched.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<(), IngestError> {
        let pa = self.lookup_pin(a)?;
        let pb = self.lookup_pin(b)?;
        if pa == pb {
            return Ok(());
        }
        self.netlist.pin_mut(pa).connected_to.push(pb);
        self.netlist.pin_mut(pb).connected_to.push(pa);

        let slot_a = self.cluster_of.get(&pa).copied();
        let slot_b = self.cluster_of.get(&pb).copied();
        match (slot_a, slot_b) {
            (None, None) => {
                let slot = self.clusters.len();
                self.clusters.push(vec![pa, pb]);
                self.cluster_of.insert(pa, slot);
                self.cluster_of.insert(pb, slot);
            }
            (Some(slot), None) => {
                self.clusters[slot].push(pb);
                self.cluster_of.insert(pb, slot);
            }
            (None, Some(slot)) => {
                self.clusters[slot].push(pa);
                self.cluster_of.insert(pa, slot);
            }
            (Some(sa), Some(sb)) => {
                if sa != sb {
                    self.merge_clusters(sa, sb);
                }
            }
        }
        Ok(())
    }

    /// Moves the smaller cluster's members into the larger one. Ties keep
    /// the first argument's cluster.
    fn merge_clusters(&mut self, a: usize, b: usize) {
        let (keep, absorb) = if self.clusters[a].len() >= self.clusters[b].len() {
            (a, b)
        } else {
            (b, a)
        };
        let moved = std::mem::take(&mut self.clusters[absorb]);
        for &pin in &moved {
            self.cluster_of.insert(pin, keep);
        }
        self.clusters[keep].extend(moved);
    }

    /// Freezes the clusters into [`Net`]s and returns the completed netlist.
    ///
    /// Net IDs are assigned by scanning pins in ID order and emitting each
    /// pin's cluster the first time it is seen, so the numbering does not
    /// depend on record order beyond the pins themselves. Pins that never
    /// appeared in a connection keep `net: None`.
    pub fn finish(mut self) -> Netlist {
        for i in 0..self.netlist.pin_count() {
            let pin = PinId::from_raw(i as u32);
            let slot = match self.cluster_of.get(&pin) {
                Some(&slot) => slot,
                None => continue,
            };
            let members = std::mem::take(&mut self.clusters[slot]);
            if members.is_empty() {
                continue;
            }
            let id = NetId::from_raw(self.netlist.net_count() as u32);
            for &member in &members {
                self.netlist.pin_mut(member).net = Some(id);
            }
            self.netlist.add_net(Net { id, members });
        }
        self.netlist
    }

    fn lookup_pin(&self, name: &str) -> Result<PinId, IngestError> {
        match self.netlist.pin_by_name.get(name) {
            Some(&id) => Ok(id),
            None => Err(IngestError::UnknownPin(name.to_string())),
        }
    }
}

impl Default for NetlistBuilder {
    fn default() -> Self {
        Self::new()
    }
}
