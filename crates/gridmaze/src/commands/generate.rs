use anyhow::{Context, Result};
use colored::Colorize;

use gridmaze::config::Config;
use gridmaze::maze::reachability::shortest_hops;
use gridmaze::maze::serialize::{PathRequest, scenario_to_string};
use gridmaze::maze::{GeneratorConfig, Scenario, generate_batch, generate_seeded};

use crate::cli::{GenerateArgs, OutputFormat};

pub fn run(args: GenerateArgs) -> Result<()> {
    if args.count == 0 {
        anyhow::bail!("--count must be at least 1");
    }

    let config = resolve_config(&Config::load_or_default(), &args);
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "generating {} scenario(s) on a {}x{} grid, seed {seed}",
        args.count,
        config.grid_size,
        config.grid_size
    );

    let scenarios: Vec<Scenario> = if args.count == 1 {
        vec![generate_seeded(&config, seed)?]
    } else {
        generate_batch(&config, seed, args.count)
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.with_context(|| format!("scenario {i} (seed {})", seed.wrapping_add(i as u64))))
            .collect::<Result<_>>()?
    };

    let rendered = render(&scenarios, seed, args.format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} scenario(s) to {}",
                "Wrote".green(),
                scenarios.len(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// CLI flags override the config file, which overrides built-in defaults.
fn resolve_config(file: &Config, args: &GenerateArgs) -> GeneratorConfig {
    let mut config = file.generator_config();
    if let Some(size) = args.grid_size {
        config.grid_size = size;
    }
    if let Some(p) = args.probability {
        config.edge_probability = p;
    }
    if let Some(n) = args.min_edges {
        config.min_edges = n;
    }
    if args.unbounded {
        config.max_attempts = None;
    } else if let Some(n) = args.max_attempts {
        config.max_attempts = (n > 0).then_some(n);
    }
    config
}

fn render(scenarios: &[Scenario], seed: u64, format: OutputFormat) -> Result<String> {
    let requests: Vec<PathRequest> = scenarios.iter().map(PathRequest::from).collect();
    let out = match (format, requests.as_slice()) {
        (OutputFormat::Json, [single]) => serde_json::to_string_pretty(single)?,
        (OutputFormat::Json, many) => serde_json::to_string_pretty(many)?,
        (OutputFormat::Yaml, [single]) => serde_yaml::to_string(single)?,
        (OutputFormat::Yaml, many) => serde_yaml::to_string(many)?,
        (OutputFormat::Text, _) => scenarios
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let hops = shortest_hops(s.start, s.goal, &s.edges).unwrap_or_default();
                format!(
                    "# seed {}: {} edges, {} nodes, {} attempt(s), {hops} hop(s)\n{}",
                    seed.wrapping_add(i as u64),
                    s.edges.len(),
                    s.nodes().len(),
                    s.attempts,
                    scenario_to_string(s)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    };
    Ok(out.trim_end().to_string())
}
