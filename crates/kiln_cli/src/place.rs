//! `kiln place` — the placement pipeline.
//!
//! Reads a netlist, resolves parameters (CLI flags over `kiln.toml` over
//! values derived from the netlist), runs the annealing placer, writes the
//! placement result file, and prints a summary.

use std::path::Path;
use std::time::Instant;

use kiln_config::PlaceSection;
use kiln_netlist::Netlist;
use kiln_place::PlaceParams;

use crate::{GlobalArgs, PlaceArgs, ReportFormat};

/// Runs the `kiln place` command.
///
/// Returns exit code 0 on success; hard failures (unreadable input, invalid
/// parameters) surface as errors.
pub fn run(args: &PlaceArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut netlist = kiln_io::read_netlist(Path::new(&args.input))?;

    let section = load_place_section(global)?;
    let params = resolve_params(args, &section, &netlist);

    if !global.quiet {
        eprintln!(
            "   Placing {} ({} gates, {} pins, {} nets)",
            args.input,
            netlist.gate_count(),
            netlist.pin_count(),
            netlist.net_count()
        );
        eprintln!(
            "   Settings: {} iterations, temperature {:.1}, cooling {:.5}, seed {}, restarts {}",
            params.iterations,
            params.initial_temperature,
            params.cooling,
            params.seed,
            params.restarts
        );
    }

    let start = Instant::now();
    let placement = kiln_place::place(&mut netlist, &params)?;
    let elapsed = start.elapsed();

    if global.verbose {
        for sample in &placement.stats.samples {
            eprintln!(
                "   iter {:>9}: best {:>9}, temperature {:.3}",
                sample.iteration, sample.best_wirelength, sample.temperature
            );
        }
    }

    kiln_io::save_placement(&netlist, &placement, Path::new(&args.output))?;

    match args.format {
        ReportFormat::Text => {
            if !global.quiet {
                let (width, height) = placement.bounding_box;
                eprintln!(
                    "   Placed: wire length {}, bounding box {}x{} ({:.2}s)",
                    placement.wirelength,
                    width,
                    height,
                    elapsed.as_secs_f64()
                );
                eprintln!("   Output: {}", args.output);
            }
        }
        ReportFormat::Json => {
            let summary = serde_json::json!({
                "input": args.input,
                "output": args.output,
                "gates": netlist.gate_count(),
                "pins": netlist.pin_count(),
                "nets": netlist.net_count(),
                "wire_length": placement.wirelength,
                "bounding_box": {
                    "width": placement.bounding_box.0,
                    "height": placement.bounding_box.1,
                },
                "iterations_run": placement.stats.iterations_run,
                "accepted": placement.stats.accepted,
                "rejected": placement.stats.rejected,
                "elapsed_seconds": elapsed.as_secs_f64(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(0)
}

/// Loads the `[place]` config section, from `--config` when given or from
/// `./kiln.toml` when present. No file at all yields the empty section.
fn load_place_section(global: &GlobalArgs) -> Result<PlaceSection, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => Some(kiln_config::load_config(Path::new(path))?),
        None => kiln_config::discover_config(Path::new("."))?,
    };
    Ok(config.map(|c| c.place).unwrap_or_default())
}

/// Merges CLI flags, the config section, and derived defaults into final
/// parameters. Flags win over config; config wins over derivation.
fn resolve_params(args: &PlaceArgs, section: &PlaceSection, netlist: &Netlist) -> PlaceParams {
    let seed = args.seed.or(section.seed).unwrap_or(0);
    let mut params = PlaceParams::derived(netlist, seed);

    if let Some(v) = args.iterations.or(section.iterations) {
        params.iterations = v;
    }
    if let Some(v) = args.initial_temp.or(section.initial_temperature) {
        params.initial_temperature = v;
    }
    if let Some(v) = args.cooling.or(section.cooling) {
        params.cooling = v;
    }
    if let Some(v) = args.restarts.or(section.restarts) {
        params.restarts = v;
    }
    if let Some(v) = section.grid_dim {
        params.grid_dim = Some(v);
    }
    if let Some(v) = section.cell_width {
        params.cell_width = Some(v);
    }
    if let Some(v) = section.cell_height {
        params.cell_height = Some(v);
    }

    params
}
