//! Placement parameters and their derivation from problem scale.

use crate::error::PlaceError;
use crate::grid::max_gate_extent;
use kiln_netlist::Netlist;
use serde::{Deserialize, Serialize};

/// Tunable parameters for one placement run.
///
/// [`PlaceParams::derived`] fills the schedule fields from the size of the
/// netlist; callers can override any of them afterwards. The grid fields are
/// optional overrides and default to a square grid of cells sized to the
/// largest gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceParams {
    /// Number of annealing iterations to run.
    pub iterations: u64,
    /// Temperature at the first iteration.
    pub initial_temperature: f64,
    /// Geometric cooling factor, strictly between 0 and 1.
    pub cooling: f64,
    /// Seed for the run's random number generator.
    pub seed: u64,
    /// Number of independent annealing runs; the best result wins.
    pub restarts: usize,
    /// Override for the number of grid columns.
    pub grid_dim: Option<usize>,
    /// Override for the grid cell width.
    pub cell_width: Option<i64>,
    /// Override for the grid cell height.
    pub cell_height: Option<i64>,
}

impl PlaceParams {
    /// Derives a schedule from the netlist's size.
    ///
    /// The iteration budget shrinks slowly with gate count
    /// (`1e6 / n^0.4`, rounded to tens), the initial temperature scales with
    /// the grid footprint, and the cooling factor is chosen so the schedule
    /// spends its budget decaying from that temperature toward zero. These
    /// are tuning defaults, not a correctness contract.
    pub fn derived(netlist: &Netlist, seed: u64) -> Self {
        let n = netlist.gate_count().max(1);
        let dim = ((n as f64).sqrt().ceil() as usize).max(1);
        let (max_w, max_h) = max_gate_extent(netlist);

        let iterations = round_to_tens(1e6 / (n as f64).powf(0.4)).max(1.0) as u64;
        let initial_temperature = 1e5 * dim as f64 * (max_w + max_h) as f64;
        let cooling = initial_temperature.powf(-1.2 / iterations as f64);

        Self {
            iterations,
            initial_temperature,
            cooling,
            seed,
            restarts: 1,
            grid_dim: None,
            cell_width: None,
            cell_height: None,
        }
    }

    /// Checks the parameters against the netlist they will be applied to.
    ///
    /// Grid overrides are validated separately when the grid is resolved.
    pub fn validate(&self, netlist: &Netlist) -> Result<(), PlaceError> {
        if netlist.gate_count() == 0 {
            return Err(PlaceError::EmptyNetlist);
        }
        if self.iterations == 0 {
            return Err(PlaceError::ZeroIterations);
        }
        if self.restarts == 0 {
            return Err(PlaceError::ZeroRestarts);
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(PlaceError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.cooling > 0.0 && self.cooling < 1.0) {
            return Err(PlaceError::InvalidCooling(self.cooling));
        }
        Ok(())
    }
}

/// Rounds to the nearest multiple of ten.
fn round_to_tens(value: f64) -> f64 {
    (value / 10.0).round() * 10.0
}
