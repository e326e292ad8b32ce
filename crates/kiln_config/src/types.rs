//! Configuration types deserialized from `kiln.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `kiln.toml`.
///
/// Every key is optional; the command line resolves absent values from its
/// own flags or derives them from the netlist being placed.
#[derive(Debug, Default, Deserialize)]
pub struct KilnConfig {
    /// Placement settings.
    #[serde(default)]
    pub place: PlaceSection,
}

/// The `[place]` section: overrides for the annealing schedule and the
/// initial grid.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlaceSection {
    /// Annealing iteration budget.
    #[serde(default)]
    pub iterations: Option<u64>,
    /// Temperature at the first iteration.
    #[serde(default)]
    pub initial_temperature: Option<f64>,
    /// Geometric cooling factor, strictly between 0 and 1.
    #[serde(default)]
    pub cooling: Option<f64>,
    /// Seed for the run's random number generator.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of independent annealing runs.
    #[serde(default)]
    pub restarts: Option<usize>,
    /// Number of initial-grid columns.
    #[serde(default)]
    pub grid_dim: Option<usize>,
    /// Width of one initial-grid cell.
    #[serde(default)]
    pub cell_width: Option<i64>,
    /// Height of one initial-grid cell.
    #[serde(default)]
    pub cell_height: Option<i64>,
}
