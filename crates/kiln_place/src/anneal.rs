//! Simulated annealing over gate transpositions.
//!
//! Starting from a shuffled grid placement, repeatedly proposes swapping two
//! gates' positions and accepts or rejects each move using the Metropolis
//! criterion. The temperature decays geometrically toward a small floor, so
//! the search drifts from near-random exploration to greedy descent over the
//! iteration budget. The best arrangement ever seen is tracked separately
//! from the current one and is what the run returns.
//!
//! Overlap is not part of the cost: gates share cells sized to the largest
//! gate, so swaps cannot collide, and geometric cleanup is left entirely to
//! the compaction pass.

use crate::grid::{place_on_grid, GridSpec};
use crate::params::PlaceParams;
use crate::wirelength::total_wirelength;
use kiln_netlist::{GateId, Netlist};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Temperature floor. The schedule clamps here instead of decaying to zero
/// so the acceptance probability stays well defined.
const TEMPERATURE_FLOOR: f64 = 1e-5;

/// Number of progress samples recorded over a full run.
const PROGRESS_SAMPLES: u64 = 10;

/// Counters and progress samples from one annealing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealStats {
    /// Iterations actually executed (less than the budget if cancelled).
    pub iterations_run: u64,
    /// Moves accepted.
    pub accepted: u64,
    /// Moves rejected and undone.
    pub rejected: u64,
    /// Evenly spaced progress samples.
    pub samples: Vec<AnnealSample>,
}

impl AnnealStats {
    fn new() -> Self {
        Self {
            iterations_run: 0,
            accepted: 0,
            rejected: 0,
            samples: Vec::new(),
        }
    }
}

/// One progress sample: the best cost seen so far at a given iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealSample {
    /// Iteration the sample was taken at.
    pub iteration: u64,
    /// Best wirelength seen up to this iteration.
    pub best_wirelength: i64,
    /// Temperature at this iteration.
    pub temperature: f64,
}

/// The result of one annealing run: the best gate ordering found, its
/// pre-compaction wirelength, and the run's statistics.
#[derive(Debug, Clone)]
pub(crate) struct AnnealOutcome {
    pub order: Vec<GateId>,
    pub wirelength: i64,
    pub stats: AnnealStats,
}

/// Metropolis acceptance decision.
///
/// A strict improvement is always accepted. Otherwise the candidate is
/// accepted when `draw`, uniform in `[0, 1)`, falls below
/// `exp((current - candidate) / temperature)`; an equal-cost candidate is
/// therefore always accepted, and worse candidates become ever less likely
/// as the temperature drops.
pub fn accept_move(current: i64, candidate: i64, temperature: f64, draw: f64) -> bool {
    if candidate < current {
        return true;
    }
    draw < (((current - candidate) as f64) / temperature).exp()
}

/// Runs one annealing pass over the netlist.
///
/// The gate ordering is shuffled with the run's RNG, placed on the grid,
/// and refined by transposition moves for the configured iteration budget.
/// `cancel` is checked at every iteration boundary; a cancelled run returns
/// the best ordering found so far. The netlist is left at the *current*
/// arrangement; callers re-place the returned best ordering.
pub(crate) fn anneal(
    netlist: &mut Netlist,
    params: &PlaceParams,
    grid: &GridSpec,
    seed: u64,
    cancel: &AtomicBool,
) -> AnnealOutcome {
    let n = netlist.gate_count();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order: Vec<GateId> = (0..n).map(|i| GateId::from_raw(i as u32)).collect();
    order.shuffle(&mut rng);
    place_on_grid(netlist, &order, grid);

    let mut current = total_wirelength(netlist);
    let mut stats = AnnealStats::new();

    if n < 2 {
        return AnnealOutcome {
            order,
            wirelength: current,
            stats,
        };
    }

    let mut best = current;
    let mut best_order = order.clone();
    let mut temperature = params.initial_temperature;
    let sample_every = (params.iterations / PROGRESS_SAMPLES).max(1);

    for iteration in 0..params.iterations {
        if cancel.load(Ordering::Relaxed) {
            break;
        }

        let (i, j) = pick_distinct_pair(&mut rng, n);
        swap_positions(netlist, order[i], order[j]);
        let candidate = total_wirelength(netlist);

        if accept_move(current, candidate, temperature, rng.gen::<f64>()) {
            current = candidate;
            order.swap(i, j);
            stats.accepted += 1;
            if current < best {
                best = current;
                best_order.copy_from_slice(&order);
            }
        } else {
            // Reject: undo swap
            swap_positions(netlist, order[i], order[j]);
            stats.rejected += 1;
        }

        if iteration % sample_every == 0 {
            stats.samples.push(AnnealSample {
                iteration,
                best_wirelength: best,
                temperature,
            });
        }

        temperature = (temperature * params.cooling).max(TEMPERATURE_FLOOR);
        stats.iterations_run += 1;
    }

    AnnealOutcome {
        order: best_order,
        wirelength: best,
        stats,
    }
}

/// Exchanges the positions of two gates. A gate swapped with itself is
/// left untouched.
fn swap_positions(netlist: &mut Netlist, a: GateId, b: GateId) {
    let (ax, ay) = {
        let gate = netlist.gate(a);
        (gate.x, gate.y)
    };
    let (bx, by) = {
        let gate = netlist.gate(b);
        (gate.x, gate.y)
    };
    let gate_a = netlist.gate_mut(a);
    gate_a.x = bx;
    gate_a.y = by;
    let gate_b = netlist.gate_mut(b);
    gate_b.x = ax;
    gate_b.y = ay;
}

/// Draws two distinct indices below `n`, uniformly. Requires `n >= 2`.
fn pick_distinct_pair(rng: &mut impl Rng, n: usize) -> (usize, usize) {
    let a = rng.gen_range(0..n);
    let mut b = rng.gen_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}
