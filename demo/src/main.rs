use clap::Parser;
use env_logger::Env;
use log::*;
use std::error::Error;
use std::io::{self, Write};

use pqueue::source;
use pqueue::{Order, PriorityQueue};

#[derive(Parser, Debug)]
struct Cli {
    /// Values drawn per phase
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Seed the value source for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

// Print the phase label, load the queue, then drain it fully, one value per
// line in extraction order.
fn run_phase(
    label: &str,
    order: Order,
    values: impl Iterator<Item = f64>,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", label)?;
    let mut pq = PriorityQueue::new(order);
    for v in values {
        pq.push(v);
    }
    while !pq.is_empty() {
        writeln!(out, "{}", pq.pop()?)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    debug!("Args {:?}", cli);

    let mut stdout = io::stdout();
    run_phase(
        "from big root:",
        Order::Max,
        source::values(cli.count, cli.seed),
        &mut stdout,
    )?;
    run_phase(
        "from small root:",
        Order::Min,
        source::values(cli.count, cli.seed),
        &mut stdout,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_root_phase_ascends() {
        let mut buf = Vec::new();
        let vals = [0.9, 0.1, 0.5, 0.3, 0.7];
        run_phase("from small root:", Order::Min, vals.into_iter(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["from small root:", "0.1", "0.3", "0.5", "0.7", "0.9"]
        );
    }

    #[test]
    fn big_root_phase_descends() {
        let mut buf = Vec::new();
        let vals = [0.9, 0.1, 0.5, 0.3, 0.7];
        run_phase("from big root:", Order::Max, vals.into_iter(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["from big root:", "0.9", "0.7", "0.5", "0.3", "0.1"]
        );
    }

    #[test]
    fn random_phase_output_is_sorted() {
        let mut buf = Vec::new();
        run_phase(
            "from small root:",
            Order::Min,
            source::values(10, Some(99)),
            &mut buf,
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let vals: Vec<f64> = text
            .lines()
            .skip(1)
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(vals.len(), 10);
        assert!(vals.windows(2).all(|w| w[0] <= w[1]));
    }
}
