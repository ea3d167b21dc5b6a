use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::env;

use connect4_negamax::*;

const USAGE: &str = "usage: connect4-negamax [--parallel] <player 1|2> <depth> <rack>

<rack> lists the columns from left to right separated by '/', each column
written bottom-first as digits: 0 = empty, 1 = player one, 2 = player two.
An empty standard board is 000000/000000/000000/000000/000000/000000/000000";

/// Parses a '/'-separated rack such as `120000/000000/...`
fn parse_rack(text: &str) -> Result<Vec<Vec<u8>>> {
    text.split('/')
        .map(|column| {
            column
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(value) => Ok(value as u8),
                    None => Err(anyhow!("could not parse '{}' as a cell value", c)),
                })
                .collect::<Result<Vec<u8>>>()
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut parallel = false;
    let mut positional = vec![];
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--parallel" => parallel = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }
    if positional.len() != 3 {
        return Err(anyhow!("expected 3 arguments, got {}\n{}", positional.len(), USAGE));
    }

    let player_id = positional[0]
        .parse::<u8>()
        .with_context(|| format!("invalid player id: {}", positional[0]))?;
    let depth = positional[1]
        .parse::<u32>()
        .with_context(|| format!("invalid depth: {}", positional[1]))?;
    let rack = parse_rack(&positional[2])?;

    let config = EngineConfig::new(player_id, depth)?.with_parallel(parallel);
    let board = Board::from_rack(&rack)?;
    println!("{}\n", board);

    let mut solver = Solver::new(config);
    info!(
        player = solver.config().player().id(),
        depth = solver.config().depth(),
        parallel = solver.config().parallel(),
        "searching"
    );
    let column = solver.pick_move(&board)?;
    info!(nodes = solver.node_count, "search finished");

    // column labels on the printed board are 1-indexed
    println!("Best move: {} (column index {})", column + 1, column);
    Ok(())
}
