//! `kiln check` — placement verification.
//!
//! Re-reads a netlist and a placement result file, applies the recorded
//! positions, and verifies that every gate is placed exactly once, that no
//! two gates overlap, and that the recorded wirelength and bounding box
//! match recomputed values.

use std::path::Path;

use kiln_netlist::GateId;
use kiln_place::overlap::overlapping_pairs;
use kiln_place::wirelength::total_wirelength;

use crate::{CheckArgs, GlobalArgs};

/// Runs the `kiln check` command.
///
/// Returns exit code 0 when the placement is overlap-free and consistent
/// with its netlist, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut netlist = kiln_io::read_netlist(Path::new(&args.netlist))?;
    let placed = kiln_io::read_placement(Path::new(&args.placement))?;

    if !global.quiet {
        eprintln!("   Checking {} against {}", args.placement, args.netlist);
    }

    let mut problems: Vec<String> = Vec::new();

    let mut placed_once = vec![false; netlist.gate_count()];
    for (name, x, y) in &placed.positions {
        match netlist.gate_by_name.get(name.as_str()).copied() {
            Some(id) => {
                let slot = id.as_raw() as usize;
                if placed_once[slot] {
                    problems.push(format!("gate `{name}` is placed twice"));
                }
                placed_once[slot] = true;
                let gate = netlist.gate_mut(id);
                gate.x = *x;
                gate.y = *y;
            }
            None => problems.push(format!("placement names unknown gate `{name}`")),
        }
    }
    for (slot, seen) in placed_once.iter().enumerate() {
        if !seen {
            let name = &netlist.gate(GateId::from_raw(slot as u32)).name;
            problems.push(format!("gate `{name}` has no position"));
        }
    }

    for (a, b) in overlapping_pairs(&netlist) {
        problems.push(format!(
            "gates `{}` and `{}` overlap",
            netlist.gate(a).name,
            netlist.gate(b).name
        ));
    }

    let recomputed = total_wirelength(&netlist);
    if recomputed != placed.wirelength {
        problems.push(format!(
            "wire length mismatch: recorded {}, recomputed {recomputed}",
            placed.wirelength
        ));
    }

    let (width, height) = netlist.bounding_box();
    if (width, height) != placed.bounding_box {
        problems.push(format!(
            "bounding box mismatch: recorded {}x{}, recomputed {width}x{height}",
            placed.bounding_box.0, placed.bounding_box.1
        ));
    }

    if problems.is_empty() {
        if !global.quiet {
            eprintln!(
                "   OK: {} gates, wire length {recomputed}, bounding box {width}x{height}",
                netlist.gate_count()
            );
        }
        Ok(0)
    } else {
        for problem in &problems {
            eprintln!("mismatch: {problem}");
        }
        if !global.quiet {
            eprintln!("   FAILED: {} problem(s)", problems.len());
        }
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NETLIST: &str = "\
g1 2 2
pins g1 2 1
g2 2 2
pins g2 0 1
wire g1.p1 g2.p1
";

    fn quiet() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        }
    }

    fn run_check(netlist: &str, placement: &str) -> i32 {
        let tmp = TempDir::new().unwrap();
        let netlist_path = tmp.path().join("design.txt");
        let placement_path = tmp.path().join("placed.txt");
        fs::write(&netlist_path, netlist).unwrap();
        fs::write(&placement_path, placement).unwrap();

        let args = CheckArgs {
            netlist: netlist_path.to_str().unwrap().to_string(),
            placement: placement_path.to_str().unwrap().to_string(),
        };
        run(&args, &quiet()).unwrap()
    }

    #[test]
    fn consistent_placement_passes() {
        // g1 at (0,0) puts g1.p1 at (2,1); g2 at (2,0) puts g2.p1 at (2,1).
        let placement = "bounding_box 4 2\ng1 0 0\ng2 2 0\nwire_length 0\n";
        assert_eq!(run_check(NETLIST, placement), 0);
    }

    #[test]
    fn overlap_fails() {
        let placement = "bounding_box 3 2\ng1 0 0\ng2 1 0\nwire_length 1\n";
        assert_eq!(run_check(NETLIST, placement), 1);
    }

    #[test]
    fn wirelength_mismatch_fails() {
        let placement = "bounding_box 4 2\ng1 0 0\ng2 2 0\nwire_length 99\n";
        assert_eq!(run_check(NETLIST, placement), 1);
    }

    #[test]
    fn bounding_box_mismatch_fails() {
        let placement = "bounding_box 9 9\ng1 0 0\ng2 2 0\nwire_length 0\n";
        assert_eq!(run_check(NETLIST, placement), 1);
    }

    #[test]
    fn unknown_gate_fails() {
        let placement = "bounding_box 4 2\ng1 0 0\ng2 2 0\ng9 5 5\nwire_length 0\n";
        assert_eq!(run_check(NETLIST, placement), 1);
    }

    #[test]
    fn missing_gate_fails() {
        let placement = "bounding_box 4 2\ng1 0 0\nwire_length 0\n";
        assert_eq!(run_check(NETLIST, placement), 1);
    }

    #[test]
    fn duplicate_position_fails() {
        let placement = "bounding_box 4 2\ng1 0 0\ng2 2 0\ng2 2 0\nwire_length 0\n";
        assert_eq!(run_check(NETLIST, placement), 1);
    }

    #[test]
    fn missing_placement_file_errors() {
        let tmp = TempDir::new().unwrap();
        let netlist_path = tmp.path().join("design.txt");
        fs::write(&netlist_path, NETLIST).unwrap();

        let args = CheckArgs {
            netlist: netlist_path.to_str().unwrap().to_string(),
            placement: "/nonexistent/placed.txt".to_string(),
        };
        assert!(run(&args, &quiet()).is_err());
    }

    #[test]
    fn checks_output_of_the_placer() {
        let tmp = TempDir::new().unwrap();
        let netlist_path = tmp.path().join("design.txt");
        fs::write(&netlist_path, NETLIST).unwrap();

        let mut netlist = kiln_io::read_netlist(&netlist_path).unwrap();
        let mut params = kiln_place::PlaceParams::derived(&netlist, 4);
        params.iterations = 200;
        let placement = kiln_place::place(&mut netlist, &params).unwrap();

        let placement_path = tmp.path().join("placed.txt");
        kiln_io::save_placement(&netlist, &placement, &placement_path).unwrap();

        let args = CheckArgs {
            netlist: netlist_path.to_str().unwrap().to_string(),
            placement: placement_path.to_str().unwrap().to_string(),
        };
        assert_eq!(run(&args, &quiet()).unwrap(), 0);
    }
}
