//! Error types for netlist ingestion.

/// Errors that can occur while building a netlist from gate and wire records.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A connection record referenced a pin name that was never defined.
    #[error("unknown pin '{0}' in connection record")]
    UnknownPin(String),

    /// A pin record referenced a gate name that was never defined.
    #[error("unknown gate '{0}' in pin record")]
    UnknownGate(String),

    /// A gate record reused the name of an existing gate.
    #[error("duplicate gate '{0}'")]
    DuplicateGate(String),

    /// A second pin record arrived for a gate that already has pins.
    #[error("pins already defined for gate '{0}'")]
    DuplicatePins(String),

    /// A gate record carried a zero or negative width or height.
    #[error("gate '{gate}' has non-positive dimensions {width}x{height}")]
    InvalidDimensions {
        /// Name of the offending gate.
        gate: String,
        /// The rejected width.
        width: i64,
        /// The rejected height.
        height: i64,
    },
}
