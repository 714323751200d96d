use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridmaze")]
#[command(author, version, about)]
#[command(long_about = "Generate random planar grid graphs for pathfinding demos.\n\n\
    Every scenario has non-crossing edges and a goal reachable from its start.\n\n\
    Examples:\n  \
    gridmaze generate                      One 12x12 scenario as JSON\n  \
    gridmaze generate --seed 7 -f text     Reproducible, human-readable\n  \
    gridmaze generate --count 20 -o s.json Twenty scenarios in one file\n  \
    gridmaze check request.json            Validate an existing request")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one or more scenarios
    Generate(GenerateArgs),

    /// Check a request file against the scenario invariants
    Check {
        /// JSON file with start_node, goal_node and available_path
        file: PathBuf,

        /// Grid side length the scenario must fit in
        #[arg(long)]
        grid_size: Option<u32>,

        /// Minimum number of edges
        #[arg(long)]
        min_edges: Option<usize>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Grid side length
    #[arg(short, long)]
    pub grid_size: Option<u32>,

    /// Probability that each cell proposes an edge in each direction
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Discard candidate graphs with fewer edges
    #[arg(long)]
    pub min_edges: Option<usize>,

    /// Give up after this many candidate graphs
    #[arg(long, conflicts_with = "unbounded")]
    pub max_attempts: Option<u32>,

    /// Retry until a scenario is found
    #[arg(long)]
    pub unbounded: bool,

    /// Seed for reproducible output (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of scenarios; scenario i uses seed + i
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key: generator.grid_size, generator.edge_probability,
        /// generator.min_edges, generator.max_attempts or generator.offsets
        /// (e.g. "1,0 0,1 1,1", or "default")
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Text,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Generate(args)) => crate::commands::generate::run(args),
            Some(Commands::Check {
                file,
                grid_size,
                min_edges,
            }) => {
                if !file.exists() {
                    anyhow::bail!("File not found: {}", file.display());
                }
                crate::commands::check::run(&file, grid_size, min_edges)
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
