//! Wirelength-driven gate placement for the kiln toolchain.
//!
//! This crate takes a [`Netlist`] (from `kiln_netlist`) and searches for an
//! arrangement of its gates with low total wirelength. Gates start on a
//! coarse grid, a simulated annealer refines the arrangement by swapping
//! gate positions, and a greedy compaction sweep removes the slack the grid
//! introduced. The output is a [`Placement`] with final positions, the
//! post-compaction wirelength, and the annealer's progress statistics.
//!
//! # Pipeline
//!
//! 1. **Validate** — check the parameters against the netlist
//! 2. **Anneal** — shuffled grid start + Metropolis transposition search
//! 3. **Compact** — re-place the best ordering, slide gates toward the origin
//! 4. **Select** — with restarts, keep the lowest-wirelength run
//!
//! # Usage
//!
//! ```ignore
//! use kiln_place::{place, PlaceParams};
//!
//! let params = PlaceParams::derived(&netlist, 42);
//! let placement = place(&mut netlist, &params)?;
//! assert!(!kiln_place::overlap::any_overlap(&netlist));
//! ```

#![warn(missing_docs)]

pub mod anneal;
pub mod compact;
pub mod error;
pub mod grid;
pub mod overlap;
pub mod params;
pub mod wirelength;

pub use anneal::{accept_move, AnnealSample, AnnealStats};
pub use error::PlaceError;
pub use grid::GridSpec;
pub use params::PlaceParams;

use kiln_netlist::{GateId, Netlist};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;

/// A finished placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Final bottom-left corner of every gate, in gate ID order.
    pub positions: Vec<(GateId, i64, i64)>,
    /// Total wirelength of the final layout.
    pub wirelength: i64,
    /// Extents of the smallest rectangle enclosing every gate.
    pub bounding_box: (i64, i64),
    /// Statistics from the winning annealing run.
    pub stats: AnnealStats,
}

/// The layout and cost produced by one restart.
struct RunResult {
    positions: Vec<(i64, i64)>,
    wirelength: i64,
    stats: AnnealStats,
}

/// Places the netlist's gates, leaving their final positions in `netlist`.
///
/// Runs [`place_with_cancel`] with a flag that never trips.
pub fn place(netlist: &mut Netlist, params: &PlaceParams) -> Result<Placement, PlaceError> {
    let cancel = AtomicBool::new(false);
    place_with_cancel(netlist, params, &cancel)
}

/// Places the netlist's gates, honoring a cooperative cancellation flag.
///
/// Each annealing run checks `cancel` at every iteration boundary and, once
/// it trips, stops searching and carries its best arrangement so far into
/// compaction. The result is therefore always a valid, overlap-free layout.
///
/// Restart `k` runs with `seed + k` on its own copy of the netlist; runs
/// execute in parallel and the lowest final wirelength wins, with ties going
/// to the lower restart index so the outcome does not depend on scheduling.
pub fn place_with_cancel(
    netlist: &mut Netlist,
    params: &PlaceParams,
    cancel: &AtomicBool,
) -> Result<Placement, PlaceError> {
    params.validate(netlist)?;
    let grid = GridSpec::resolve(netlist, params)?;

    let base = &*netlist;
    let chosen = (0..params.restarts)
        .into_par_iter()
        .map(|k| {
            let seed = params.seed.wrapping_add(k as u64);
            (k, run_once(base.clone(), params, &grid, seed, cancel))
        })
        .min_by_key(|(k, run)| (run.wirelength, *k))
        .map(|(_, run)| run)
        .ok_or(PlaceError::ZeroRestarts)?;

    for (i, &(x, y)) in chosen.positions.iter().enumerate() {
        let gate = netlist.gate_mut(GateId::from_raw(i as u32));
        gate.x = x;
        gate.y = y;
    }

    Ok(Placement {
        positions: netlist.gates.iter().map(|g| (g.id, g.x, g.y)).collect(),
        wirelength: chosen.wirelength,
        bounding_box: netlist.bounding_box(),
        stats: chosen.stats,
    })
}

/// One restart: anneal, re-place the best ordering, compact, re-cost.
fn run_once(
    mut netlist: Netlist,
    params: &PlaceParams,
    grid: &GridSpec,
    seed: u64,
    cancel: &AtomicBool,
) -> RunResult {
    let outcome = anneal::anneal(&mut netlist, params, grid, seed, cancel);
    grid::place_on_grid(&mut netlist, &outcome.order, grid);
    compact::compact(&mut netlist, &outcome.order);

    RunResult {
        positions: netlist.gates.iter().map(|g| (g.x, g.y)).collect(),
        wirelength: wirelength::total_wirelength(&netlist),
        stats: outcome.stats,
    }
}
