use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use gridmaze::config::Config;
use gridmaze::maze::reachability::shortest_hops;
use gridmaze::maze::serialize::PathRequest;

pub fn run(file: &Path, grid_size: Option<u32>, min_edges: Option<usize>) -> Result<()> {
    let defaults = Config::load_or_default().generator_config();
    let grid_size = grid_size.unwrap_or(defaults.grid_size);
    let min_edges = min_edges.unwrap_or(defaults.min_edges);

    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let request: PathRequest = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid request", file.display()))?;
    let scenario = request.into_scenario()?;

    scenario
        .verify(grid_size, min_edges)
        .with_context(|| format!("{} failed the {grid_size}x{grid_size} check", file.display()))?;

    let hops = shortest_hops(scenario.start, scenario.goal, &scenario.edges).unwrap_or_default();
    println!(
        "{} {}: {} edges, {} nodes, {} -> {} in {} hop(s)",
        "ok".green().bold(),
        file.display(),
        scenario.edges.len(),
        scenario.nodes().len(),
        scenario.start,
        scenario.goal,
        hops
    );
    Ok(())
}
