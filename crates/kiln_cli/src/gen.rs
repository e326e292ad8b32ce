//! `kiln gen` — random instance generator.
//!
//! Produces a random netlist in the placer's input format: random gate
//! dimensions, pins on the gate edges, and wires pairing every pin with a
//! pin on another gate. Generation retries until the instance has an even
//! pin total and no gate owns more than half the pins; under those two
//! conditions the largest-against-smallest pairing below never wires a gate
//! to itself.

use std::collections::BTreeSet;
use std::fmt::Write;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{GenArgs, GlobalArgs};

/// Most pins the generator puts on a single gate edge.
const MAX_PINS_PER_EDGE: i64 = 2;

/// A generated instance: the netlist text plus its headline counts.
struct Instance {
    text: String,
    gates: usize,
    pins: usize,
    wires: usize,
}

/// Runs the `kiln gen` command.
///
/// Writes the instance to `--output` or stdout and reports the counts and
/// the seed, so any run can be reproduced with `--seed`.
pub fn run(args: &GenArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    if args.gates < 2 {
        return Err("--gates must be at least 2: wires need two distinct gates".into());
    }
    if args.max_width < 1 || args.max_height < 1 {
        return Err("--max-width and --max-height must be at least 1".into());
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    let instance = generate(&mut rng, args.gates, args.max_width, args.max_height);

    match &args.output {
        Some(path) => std::fs::write(path, &instance.text)?,
        None => print!("{}", instance.text),
    }

    if !global.quiet {
        eprintln!(
            "   Generated {} gates, {} pins, {} wires (seed {seed})",
            instance.gates, instance.pins, instance.wires
        );
        if let Some(path) = &args.output {
            eprintln!("   Output: {path}");
        }
    }

    Ok(0)
}

fn generate(rng: &mut StdRng, max_gates: usize, max_width: i64, max_height: i64) -> Instance {
    loop {
        let gate_count = rng.gen_range(1..=max_gates);
        let mut text = String::new();
        let mut pin_counts = Vec::with_capacity(gate_count);
        let mut total_pins = 0usize;

        for gate in 1..=gate_count {
            let width = rng.gen_range(1..=max_width);
            let height = rng.gen_range(1..=max_height);
            writeln!(text, "g{gate} {width} {height}").unwrap();

            let pins = edge_pins(rng, width, height);
            write!(text, "pins g{gate}").unwrap();
            for (x, y) in &pins {
                write!(text, " {x} {y}").unwrap();
            }
            writeln!(text).unwrap();

            total_pins += pins.len();
            pin_counts.push(pins.len());
        }

        if total_pins % 2 != 0 {
            continue;
        }
        if pin_counts.iter().max().copied().unwrap_or(0) > total_pins / 2 {
            continue;
        }

        let wires = pair_pins(&pin_counts, &mut text);
        return Instance {
            text,
            gates: gate_count,
            pins: total_pins,
            wires,
        };
    }
}

/// Picks a random set of pin offsets on the perimeter of a gate.
///
/// One pin lands on a random edge unconditionally; each of the four edges
/// then draws a quota up to `min(width, height, MAX_PINS_PER_EDGE)` and
/// fills it from the edge's free slots (corner slots are shared with the
/// neighboring edges and may already be taken).
fn edge_pins(rng: &mut StdRng, width: i64, height: i64) -> BTreeSet<(i64, i64)> {
    let mut pins = BTreeSet::new();

    let first = match rng.gen_range(0..4) {
        0 => (0, rng.gen_range(0..=height)),
        1 => (rng.gen_range(0..=width), 0),
        2 => (width, rng.gen_range(0..=height)),
        _ => (rng.gen_range(0..=width), height),
    };
    pins.insert(first);

    let per_edge = width.min(height).min(1 + rng.gen_range(0..MAX_PINS_PER_EDGE));

    // Left, bottom, right, top.
    for edge in 0..4 {
        let want = rng.gen_range(0..per_edge) as usize;
        if want == 0 {
            continue;
        }
        let span = if edge == 0 || edge == 2 { height } else { width };
        let free: Vec<(i64, i64)> = (0..=span)
            .map(|t| match edge {
                0 => (0, t),
                1 => (t, 0),
                2 => (width, t),
                _ => (t, height),
            })
            .filter(|slot| !pins.contains(slot))
            .collect();
        for &slot in free.choose_multiple(rng, want.min(free.len())) {
            pins.insert(slot);
        }
    }

    pins
}

/// Pairs every pin with one on another gate and appends the wire records.
///
/// Repeatedly wires the next unused pin of the gate with the most unwired
/// pins to the next unused pin of the gate with the fewest. Pin numbers
/// count up per gate, matching the `p1..pN` names the parser assigns.
fn pair_pins(pin_counts: &[usize], text: &mut String) -> usize {
    let mut remaining: BTreeSet<(usize, usize)> = pin_counts
        .iter()
        .enumerate()
        .map(|(gate, &count)| (count, gate))
        .collect();
    let mut next_pin = vec![0usize; pin_counts.len()];
    let mut wires = 0;

    while let Some((count_a, gate_a)) = remaining.pop_last() {
        let Some((count_b, gate_b)) = remaining.pop_first() else {
            break;
        };
        next_pin[gate_a] += 1;
        next_pin[gate_b] += 1;
        writeln!(
            text,
            "wire g{}.p{} g{}.p{}",
            gate_a + 1,
            next_pin[gate_a],
            gate_b + 1,
            next_pin[gate_b]
        )
        .unwrap();
        wires += 1;

        if count_a > 1 {
            remaining.insert((count_a - 1, gate_a));
        }
        if count_b > 1 {
            remaining.insert((count_b - 1, gate_b));
        }
    }

    wires
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn gen_instance(seed: u64) -> Instance {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(&mut rng, 20, 8, 6)
    }

    #[test]
    fn generated_text_parses() {
        let instance = gen_instance(1);
        let netlist = kiln_io::parse_netlist(&instance.text).unwrap();
        assert_eq!(netlist.gate_count(), instance.gates);
        assert_eq!(netlist.pin_count(), instance.pins);
        assert!(netlist.net_count() >= 1);
    }

    #[test]
    fn every_pin_is_wired() {
        let instance = gen_instance(2);
        let netlist = kiln_io::parse_netlist(&instance.text).unwrap();
        for pin in &netlist.pins {
            assert!(pin.net.is_some(), "pin {} left unwired", pin.name);
        }
    }

    #[test]
    fn pin_total_is_even() {
        for seed in 0..10 {
            let instance = gen_instance(seed);
            assert_eq!(instance.pins % 2, 0);
            assert_eq!(instance.wires, instance.pins / 2);
        }
    }

    #[test]
    fn no_gate_owns_more_than_half_the_pins() {
        for seed in 0..10 {
            let instance = gen_instance(seed);
            let netlist = kiln_io::parse_netlist(&instance.text).unwrap();
            for gate in &netlist.gates {
                assert!(gate.pins.len() <= instance.pins / 2);
            }
        }
    }

    #[test]
    fn wires_span_distinct_gates() {
        for seed in 0..10 {
            let instance = gen_instance(seed);
            for line in instance.text.lines().filter(|l| l.starts_with("wire ")) {
                let mut ends = line.split_whitespace().skip(1);
                let a = ends.next().unwrap().split('.').next().unwrap();
                let b = ends.next().unwrap().split('.').next().unwrap();
                assert_ne!(a, b, "self-wire in `{line}`");
            }
        }
    }

    #[test]
    fn each_pin_wired_exactly_once() {
        let instance = gen_instance(3);
        let mut endpoints: Vec<&str> = instance
            .text
            .lines()
            .filter(|l| l.starts_with("wire "))
            .flat_map(|l| l.split_whitespace().skip(1))
            .collect();
        let total = endpoints.len();
        assert_eq!(total, instance.pins);
        endpoints.sort_unstable();
        endpoints.dedup();
        assert_eq!(endpoints.len(), total);
    }

    #[test]
    fn pins_lie_on_gate_edges() {
        let instance = gen_instance(4);
        let netlist = kiln_io::parse_netlist(&instance.text).unwrap();
        for pin in &netlist.pins {
            let gate = netlist.gate(pin.gate);
            assert!(pin.dx >= 0 && pin.dx <= gate.width);
            assert!(pin.dy >= 0 && pin.dy <= gate.height);
            let on_edge = pin.dx == 0
                || pin.dx == gate.width
                || pin.dy == 0
                || pin.dy == gate.height;
            assert!(on_edge, "pin {} floats inside its gate", pin.name);
        }
    }

    #[test]
    fn same_seed_reproduces_instance() {
        let a = gen_instance(9);
        let b = gen_instance(9);
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn unit_gates_generate() {
        // 1x1 gates leave room for exactly one pin each.
        let mut rng = StdRng::seed_from_u64(0);
        let instance = generate(&mut rng, 4, 1, 1);
        let netlist = kiln_io::parse_netlist(&instance.text).unwrap();
        for gate in &netlist.gates {
            assert_eq!(gate.pins.len(), 1);
        }
    }

    #[test]
    fn pairing_uses_sequential_pin_numbers() {
        let mut text = String::new();
        let wires = pair_pins(&[2, 1, 1], &mut text);
        assert_eq!(wires, 2);
        assert_eq!(text, "wire g1.p1 g2.p1\nwire g3.p1 g1.p2\n");
    }

    #[test]
    fn run_writes_output_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("input.txt");
        let args = GenArgs {
            gates: 10,
            max_width: 5,
            max_height: 5,
            seed: Some(5),
            output: Some(path.to_str().unwrap().to_string()),
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        };

        assert_eq!(run(&args, &global).unwrap(), 0);
        let netlist = kiln_io::read_netlist(&path).unwrap();
        assert!(netlist.gate_count() >= 1);
    }

    #[test]
    fn run_rejects_single_gate_bound() {
        let args = GenArgs {
            gates: 1,
            max_width: 5,
            max_height: 5,
            seed: Some(0),
            output: None,
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        };
        assert!(run(&args, &global).is_err());
    }
}
