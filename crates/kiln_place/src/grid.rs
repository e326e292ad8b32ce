//! Deterministic initial placement on a coarse grid.
//!
//! Gates start in the cells of a `dim`-wide grid, filled row by row in a
//! given ordering. Cells are sized to the largest gate, so the initial
//! layout is overlap-free by construction and the annealer can swap any
//! two gates' positions without creating an overlap.

use crate::error::PlaceError;
use crate::params::PlaceParams;
use kiln_netlist::{GateId, Netlist};

/// The resolved initial-placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Width of one grid cell.
    pub cell_width: i64,
    /// Height of one grid cell.
    pub cell_height: i64,
    /// Number of cells per row.
    pub dim: usize,
}

impl GridSpec {
    /// Resolves the grid for a netlist, applying any overrides from the
    /// parameters.
    ///
    /// Defaults: `dim` is the side of the smallest square with one cell per
    /// gate, and cells are as wide and tall as the largest gate. Every gate
    /// must fit inside one cell.
    pub fn resolve(netlist: &Netlist, params: &PlaceParams) -> Result<GridSpec, PlaceError> {
        let dim = match params.grid_dim {
            Some(0) => return Err(PlaceError::ZeroGridDim),
            Some(d) => d,
            None => ((netlist.gate_count() as f64).sqrt().ceil() as usize).max(1),
        };

        let (max_w, max_h) = max_gate_extent(netlist);
        let cell_width = params.cell_width.unwrap_or(max_w);
        let cell_height = params.cell_height.unwrap_or(max_h);
        if cell_width <= 0 || cell_height <= 0 {
            return Err(PlaceError::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        for gate in &netlist.gates {
            if gate.width > cell_width || gate.height > cell_height {
                return Err(PlaceError::CellTooSmall {
                    cell_width,
                    cell_height,
                    gate: gate.name.clone(),
                });
            }
        }

        Ok(GridSpec {
            cell_width,
            cell_height,
            dim,
        })
    }

    /// Returns the bottom-left corner of the i-th grid cell, filling rows
    /// left to right, bottom to top.
    pub fn slot_origin(&self, index: usize) -> (i64, i64) {
        (
            self.cell_width * (index % self.dim) as i64,
            self.cell_height * (index / self.dim) as i64,
        )
    }
}

/// Moves each gate of `order` to its grid cell, in order.
pub fn place_on_grid(netlist: &mut Netlist, order: &[GateId], grid: &GridSpec) {
    for (i, &gate) in order.iter().enumerate() {
        let (x, y) = grid.slot_origin(i);
        let gate = netlist.gate_mut(gate);
        gate.x = x;
        gate.y = y;
    }
}

/// Returns the largest gate width and height, or `(1, 1)` for an empty
/// netlist.
pub(crate) fn max_gate_extent(netlist: &Netlist) -> (i64, i64) {
    let mut max_w = 0;
    let mut max_h = 0;
    for gate in &netlist.gates {
        max_w = max_w.max(gate.width);
        max_h = max_h.max(gate.height);
    }
    if max_w == 0 {
        (1, 1)
    } else {
        (max_w, max_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap::any_overlap;
    use kiln_netlist::NetlistBuilder;

    fn make_netlist(dims: &[(i64, i64)]) -> Netlist {
        let mut b = NetlistBuilder::new();
        for (i, &(w, h)) in dims.iter().enumerate() {
            b.add_gate(&format!("g{}", i + 1), w, h, &[]).unwrap();
        }
        b.finish()
    }

    fn derived_params(nl: &Netlist) -> PlaceParams {
        PlaceParams::derived(nl, 0)
    }

    fn id_order(nl: &Netlist) -> Vec<GateId> {
        (0..nl.gate_count())
            .map(|i| GateId::from_raw(i as u32))
            .collect()
    }

    #[test]
    fn resolve_defaults_to_largest_gate() {
        let nl = make_netlist(&[(4, 3), (2, 5), (1, 1)]);
        let grid = GridSpec::resolve(&nl, &derived_params(&nl)).unwrap();
        assert_eq!(grid.cell_width, 4);
        assert_eq!(grid.cell_height, 5);
        assert_eq!(grid.dim, 2);
    }

    #[test]
    fn resolve_dim_covers_square() {
        let nl = make_netlist(&[(1, 1); 10]);
        let grid = GridSpec::resolve(&nl, &derived_params(&nl)).unwrap();
        assert_eq!(grid.dim, 4);
    }

    #[test]
    fn resolve_applies_overrides() {
        let nl = make_netlist(&[(2, 2), (2, 2)]);
        let mut params = derived_params(&nl);
        params.grid_dim = Some(1);
        params.cell_width = Some(10);
        params.cell_height = Some(7);
        let grid = GridSpec::resolve(&nl, &params).unwrap();
        assert_eq!(grid, GridSpec { cell_width: 10, cell_height: 7, dim: 1 });
    }

    #[test]
    fn resolve_rejects_zero_dim() {
        let nl = make_netlist(&[(2, 2)]);
        let mut params = derived_params(&nl);
        params.grid_dim = Some(0);
        assert!(matches!(
            GridSpec::resolve(&nl, &params),
            Err(PlaceError::ZeroGridDim)
        ));
    }

    #[test]
    fn resolve_rejects_non_positive_cell() {
        let nl = make_netlist(&[(2, 2)]);
        let mut params = derived_params(&nl);
        params.cell_width = Some(0);
        assert!(matches!(
            GridSpec::resolve(&nl, &params),
            Err(PlaceError::InvalidCellSize { width: 0, .. })
        ));
    }

    #[test]
    fn resolve_rejects_cell_smaller_than_gate() {
        let nl = make_netlist(&[(2, 2), (6, 3)]);
        let mut params = derived_params(&nl);
        params.cell_width = Some(4);
        let err = GridSpec::resolve(&nl, &params).unwrap_err();
        assert!(matches!(err, PlaceError::CellTooSmall { gate, .. } if gate == "g2"));
    }

    #[test]
    fn slot_origins_fill_rows() {
        let grid = GridSpec {
            cell_width: 4,
            cell_height: 3,
            dim: 3,
        };
        assert_eq!(grid.slot_origin(0), (0, 0));
        assert_eq!(grid.slot_origin(1), (4, 0));
        assert_eq!(grid.slot_origin(2), (8, 0));
        assert_eq!(grid.slot_origin(3), (0, 3));
        assert_eq!(grid.slot_origin(7), (4, 6));
    }

    #[test]
    fn grid_placement_is_overlap_free() {
        let nl = &mut make_netlist(&[(4, 3), (2, 5), (1, 1), (3, 3), (5, 2)]);
        let grid = GridSpec::resolve(nl, &derived_params(nl)).unwrap();
        let order = id_order(nl);
        place_on_grid(nl, &order, &grid);
        assert!(!any_overlap(nl));
    }

    #[test]
    fn grid_placement_follows_order() {
        let nl = &mut make_netlist(&[(2, 2), (2, 2), (2, 2), (2, 2)]);
        let grid = GridSpec::resolve(nl, &derived_params(nl)).unwrap();
        let order = vec![
            GateId::from_raw(3),
            GateId::from_raw(1),
            GateId::from_raw(0),
            GateId::from_raw(2),
        ];
        place_on_grid(nl, &order, &grid);
        assert_eq!((nl.gate(GateId::from_raw(3)).x, nl.gate(GateId::from_raw(3)).y), (0, 0));
        assert_eq!((nl.gate(GateId::from_raw(1)).x, nl.gate(GateId::from_raw(1)).y), (2, 0));
        assert_eq!((nl.gate(GateId::from_raw(0)).x, nl.gate(GateId::from_raw(0)).y), (0, 2));
        assert_eq!((nl.gate(GateId::from_raw(2)).x, nl.gate(GateId::from_raw(2)).y), (2, 2));
    }

    #[test]
    fn max_extent_of_empty_netlist() {
        let nl = Netlist::new();
        assert_eq!(max_gate_extent(&nl), (1, 1));
    }
}
