use anyhow::Result;
use colored::Colorize;

use gridmaze::config::Config;

use crate::cli::ConfigCommands;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = if path.exists() {
        println!("{} {}", "Config file:".bold(), path.display());
        Config::load_from(&path)?
    } else {
        println!(
            "{} {} {}",
            "Config file:".bold(),
            path.display(),
            "(not created yet)".dimmed()
        );
        Config::default()
    };

    if config.generator.is_some() {
        println!();
        print!("{}", serde_yaml::to_string(&config)?);
    }

    let effective = config.generator_config();
    println!();
    println!("{}", "Effective generator settings:".bold());
    println!("  grid_size:        {}", effective.grid_size);
    println!("  edge_probability: {}", effective.edge_probability);
    println!("  min_edges:        {}", effective.min_edges);
    match effective.max_attempts {
        Some(n) => println!("  max_attempts:     {n}"),
        None => println!("  max_attempts:     {}", "unbounded".yellow()),
    }
    println!("  offsets:          {}", effective.offsets.len());
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let path = Config::path()?;
    let mut config = Config::load_from_or_default(&path)?;
    config.set(key, value)?;
    config.save_to(&path)?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green(),
        path.display()
    );
    Ok(())
}
