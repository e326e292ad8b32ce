//! Overlap queries over the current layout.
//!
//! Pure predicates used by compaction (one gate against the rest) and by
//! validation (every pair). Gates sharing only an edge or a corner do not
//! overlap.

use kiln_netlist::{GateId, Netlist};

/// Returns whether `gate` overlaps any other gate. Linear in gate count.
pub fn overlaps_any(netlist: &Netlist, gate: GateId) -> bool {
    let subject = netlist.gate(gate);
    netlist
        .gates
        .iter()
        .any(|other| other.id != gate && subject.intersects(other))
}

/// Returns whether any two gates overlap. Quadratic in gate count.
pub fn any_overlap(netlist: &Netlist) -> bool {
    for i in 0..netlist.gate_count() {
        for j in (i + 1)..netlist.gate_count() {
            let a = &netlist.gates[i];
            let b = &netlist.gates[j];
            if a.intersects(b) {
                return true;
            }
        }
    }
    false
}

/// Returns every overlapping gate pair, for validation reports.
pub fn overlapping_pairs(netlist: &Netlist) -> Vec<(GateId, GateId)> {
    let mut pairs = Vec::new();
    for i in 0..netlist.gate_count() {
        for j in (i + 1)..netlist.gate_count() {
            let a = &netlist.gates[i];
            let b = &netlist.gates[j];
            if a.intersects(b) {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_netlist::NetlistBuilder;

    fn make_layout(positions: &[(i64, i64)]) -> Netlist {
        let mut b = NetlistBuilder::new();
        for i in 0..positions.len() {
            b.add_gate(&format!("g{}", i + 1), 2, 2, &[]).unwrap();
        }
        let mut nl = b.finish();
        for (i, &(x, y)) in positions.iter().enumerate() {
            let gate = nl.gate_mut(GateId::from_raw(i as u32));
            gate.x = x;
            gate.y = y;
        }
        nl
    }

    #[test]
    fn disjoint_layout_has_no_overlap() {
        let nl = make_layout(&[(0, 0), (4, 0), (0, 4)]);
        assert!(!any_overlap(&nl));
        assert!(overlapping_pairs(&nl).is_empty());
        for i in 0..3 {
            assert!(!overlaps_any(&nl, GateId::from_raw(i)));
        }
    }

    #[test]
    fn overlapping_pair_detected_by_both_queries() {
        let nl = make_layout(&[(0, 0), (1, 1), (10, 10)]);
        assert!(any_overlap(&nl));
        assert!(overlaps_any(&nl, GateId::from_raw(0)));
        assert!(overlaps_any(&nl, GateId::from_raw(1)));
        assert!(!overlaps_any(&nl, GateId::from_raw(2)));
        assert_eq!(
            overlapping_pairs(&nl),
            vec![(GateId::from_raw(0), GateId::from_raw(1))]
        );
    }

    #[test]
    fn touching_gates_do_not_overlap() {
        let nl = make_layout(&[(0, 0), (2, 0), (0, 2), (2, 2)]);
        assert!(!any_overlap(&nl));
    }

    #[test]
    fn stacked_gates_report_every_pair() {
        let nl = make_layout(&[(0, 0), (0, 0), (0, 0)]);
        assert_eq!(overlapping_pairs(&nl).len(), 3);
    }

    #[test]
    fn single_gate_never_overlaps() {
        let nl = make_layout(&[(5, 5)]);
        assert!(!any_overlap(&nl));
        assert!(!overlaps_any(&nl, GateId::from_raw(0)));
    }

    #[test]
    fn empty_netlist_has_no_overlap() {
        let nl = Netlist::new();
        assert!(!any_overlap(&nl));
    }
}
