//! Error types for placement configuration.

/// Errors reported when placement parameters or the netlist they are applied
/// to are unusable.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// The netlist contains no gates.
    #[error("cannot place an empty netlist")]
    EmptyNetlist,

    /// The iteration budget is zero.
    #[error("iteration budget must be at least 1")]
    ZeroIterations,

    /// The restart count is zero.
    #[error("restart count must be at least 1")]
    ZeroRestarts,

    /// The initial temperature is zero, negative, or not finite.
    #[error("initial temperature {0} must be positive and finite")]
    InvalidTemperature(f64),

    /// The cooling factor lies outside the open interval (0, 1).
    #[error("cooling factor {0} must lie strictly between 0 and 1")]
    InvalidCooling(f64),

    /// The grid dimension override is zero.
    #[error("grid dimension must be at least 1")]
    ZeroGridDim,

    /// A grid cell size override is zero or negative.
    #[error("grid cell size {width}x{height} is not positive")]
    InvalidCellSize {
        /// The resolved cell width.
        width: i64,
        /// The resolved cell height.
        height: i64,
    },

    /// A gate does not fit into the resolved grid cell.
    #[error("grid cell {cell_width}x{cell_height} cannot hold gate '{gate}'")]
    CellTooSmall {
        /// The resolved cell width.
        cell_width: i64,
        /// The resolved cell height.
        cell_height: i64,
        /// Name of the gate that does not fit.
        gate: String,
    },
}
