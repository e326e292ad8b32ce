//! Half-perimeter wirelength estimation.
//!
//! The cost the annealer minimizes: for every net, the half-perimeter of the
//! bounding box around its member pins' absolute positions. The total is
//! recomputed from scratch after each move.

use kiln_netlist::{NetId, Netlist};

/// Computes the total wirelength estimate across all nets.
pub fn total_wirelength(netlist: &Netlist) -> i64 {
    let mut total = 0;
    for i in 0..netlist.net_count() {
        total += net_wirelength(netlist, NetId::from_raw(i as u32));
    }
    total
}

/// Computes the wirelength estimate for a single net.
///
/// A net with fewer than two members has a degenerate bounding box and
/// contributes zero.
pub fn net_wirelength(netlist: &Netlist, id: NetId) -> i64 {
    let net = netlist.net(id);

    let mut min_x: i64 = i64::MAX;
    let mut max_x: i64 = i64::MIN;
    let mut min_y: i64 = i64::MAX;
    let mut max_y: i64 = i64::MIN;

    for &pin in &net.members {
        let (x, y) = netlist.pin_position(pin);
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_x == i64::MAX {
        return 0;
    }

    (max_x - min_x) + (max_y - min_y)
}
