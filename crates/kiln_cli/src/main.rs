//! Kiln CLI — the command-line interface for the kiln placement toolchain.
//!
//! Provides `kiln place` for running the annealing placer on a netlist,
//! `kiln check` for verifying a placement file against its netlist, and
//! `kiln gen` for generating random test instances.

#![warn(missing_docs)]

mod check;
mod gen;
mod place;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Kiln — a wirelength-driven gate placer.
#[derive(Parser, Debug)]
#[command(name = "kiln", version, about = "Kiln gate placement toolchain")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print annealing progress samples.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `kiln.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Place a netlist's gates and write the result file.
    Place(PlaceArgs),
    /// Verify a placement file against its netlist.
    Check(CheckArgs),
    /// Generate a random placement instance.
    Gen(GenArgs),
}

/// Arguments for the `kiln place` subcommand.
#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// Netlist file to place.
    pub input: String,

    /// Output path for the placement result.
    #[arg(short, long, default_value = "output.txt")]
    pub output: String,

    /// Annealing iteration budget (default: derived from gate count).
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Starting temperature (default: derived from grid size).
    #[arg(long)]
    pub initial_temp: Option<f64>,

    /// Geometric cooling factor, strictly between 0 and 1.
    #[arg(long)]
    pub cooling: Option<f64>,

    /// Seed for the annealer's random number generator.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent annealing runs; the best result wins.
    #[arg(long)]
    pub restarts: Option<usize>,

    /// Output format for the run summary.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `kiln check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Netlist file the placement was produced from.
    pub netlist: String,

    /// Placement result file to verify.
    pub placement: String,
}

/// Arguments for the `kiln gen` subcommand.
#[derive(Parser, Debug)]
pub struct GenArgs {
    /// Upper bound on the number of gates (at least 2).
    #[arg(long, default_value_t = 50)]
    pub gates: usize,

    /// Upper bound on gate width.
    #[arg(long, default_value_t = 10)]
    pub max_width: i64,

    /// Upper bound on gate height.
    #[arg(long, default_value_t = 10)]
    pub max_height: i64,

    /// Seed for the generator (default: a fresh random seed, printed).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Run summary output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print progress detail.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Place(ref args) => place::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Gen(ref args) => gen::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_place_default() {
        let cli = Cli::parse_from(["kiln", "place", "design.txt"]);
        match cli.command {
            Command::Place(ref args) => {
                assert_eq!(args.input, "design.txt");
                assert_eq!(args.output, "output.txt");
                assert!(args.iterations.is_none());
                assert!(args.initial_temp.is_none());
                assert!(args.cooling.is_none());
                assert!(args.seed.is_none());
                assert!(args.restarts.is_none());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Place command"),
        }
    }

    #[test]
    fn parse_place_with_args() {
        let cli = Cli::parse_from([
            "kiln",
            "place",
            "design.txt",
            "-o",
            "placed.txt",
            "--iterations",
            "5000",
            "--initial-temp",
            "2e6",
            "--cooling",
            "0.999",
            "--seed",
            "7",
            "--restarts",
            "4",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Place(ref args) => {
                assert_eq!(args.output, "placed.txt");
                assert_eq!(args.iterations, Some(5000));
                assert_eq!(args.initial_temp, Some(2e6));
                assert_eq!(args.cooling, Some(0.999));
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.restarts, Some(4));
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Place command"),
        }
    }

    #[test]
    fn parse_place_requires_input() {
        assert!(Cli::try_parse_from(["kiln", "place"]).is_err());
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["kiln", "check", "design.txt", "placed.txt"]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.netlist, "design.txt");
                assert_eq!(args.placement, "placed.txt");
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_check_requires_both_files() {
        assert!(Cli::try_parse_from(["kiln", "check", "design.txt"]).is_err());
    }

    #[test]
    fn parse_gen_default() {
        let cli = Cli::parse_from(["kiln", "gen"]);
        match cli.command {
            Command::Gen(ref args) => {
                assert_eq!(args.gates, 50);
                assert_eq!(args.max_width, 10);
                assert_eq!(args.max_height, 10);
                assert!(args.seed.is_none());
                assert!(args.output.is_none());
            }
            _ => panic!("expected Gen command"),
        }
    }

    #[test]
    fn parse_gen_with_args() {
        let cli = Cli::parse_from([
            "kiln",
            "gen",
            "--gates",
            "12",
            "--max-width",
            "6",
            "--max-height",
            "4",
            "--seed",
            "99",
            "-o",
            "input.txt",
        ]);
        match cli.command {
            Command::Gen(ref args) => {
                assert_eq!(args.gates, 12);
                assert_eq!(args.max_width, 6);
                assert_eq!(args.max_height, 4);
                assert_eq!(args.seed, Some(99));
                assert_eq!(args.output.as_deref(), Some("input.txt"));
            }
            _ => panic!("expected Gen command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["kiln", "--quiet", "place", "design.txt"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["kiln", "-v", "gen"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["kiln", "--config", "/path/to/kiln.toml", "gen"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/kiln.toml"));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["kiln", "place", "design.txt", "--quiet"]);
        assert!(cli.quiet);
    }

    #[test]
    fn report_format_debug() {
        assert_eq!(format!("{:?}", ReportFormat::Text), "Text");
        assert_eq!(format!("{:?}", ReportFormat::Json), "Json");
    }
}
