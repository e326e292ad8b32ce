//! Greedy placement compaction.
//!
//! The annealed layout inherits the coarse grid's spacing: cells are sized
//! to the largest gate, so small gates sit in oversized slots. Compaction
//! closes those gaps by sliding every gate toward the origin, first along
//! x, then along y. Coordinates only ever shrink, so the layout ends up
//! pulled against both axes.

use crate::overlap::overlaps_any;
use kiln_netlist::{GateId, Netlist};

/// Slides each gate of `order` as far toward the origin as it can go.
///
/// Each gate moves one unit at a time while the move keeps it overlap-free
/// and its coordinate non-negative, then steps back to the last admissible
/// position. Gates are visited in `order` for the x sweep and again for the
/// y sweep; the result depends on that ordering. The input layout must be
/// overlap-free, and the output then is as well.
pub fn compact(netlist: &mut Netlist, order: &[GateId]) {
    for &gate in order {
        while netlist.gate(gate).x >= 0 && !overlaps_any(netlist, gate) {
            netlist.gate_mut(gate).x -= 1;
        }
        netlist.gate_mut(gate).x += 1;
    }
    for &gate in order {
        while netlist.gate(gate).y >= 0 && !overlaps_any(netlist, gate) {
            netlist.gate_mut(gate).y -= 1;
        }
        netlist.gate_mut(gate).y += 1;
    }
}
