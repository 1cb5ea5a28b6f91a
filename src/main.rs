//! u-roster CLI
//!
//! Selects the best roster for a query from a player database, writing
//! every improvement to the output file as it is found.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_roster::exact::ExactRunner;
use u_roster::io::{load_constraints, load_pool, FileSink, WriteMode};
use u_roster::model::{Category, Constraints, PlayerPool};
use u_roster::portfolio::{self, PortfolioConfig};
use u_roster::sa::SaRunner;
use u_roster::sink::{SharedSink, Tee, TracingSink};
use u_roster::state::Roster;

#[derive(Parser)]
#[command(name = "u-roster")]
#[command(about = "Budget-constrained roster selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exhaustive branch-and-bound search
    Exact {
        #[command(flatten)]
        common: Common,
    },

    /// Greedy construction followed by simulated annealing
    Anneal {
        #[command(flatten)]
        common: Common,

        #[command(flatten)]
        anneal: AnnealArgs,
    },

    /// Run both engines and keep the better roster
    Portfolio {
        #[command(flatten)]
        common: Common,

        #[command(flatten)]
        anneal: AnnealArgs,
    },
}

#[derive(Args)]
struct Common {
    /// Player database (name;position;price;team;points per line)
    players: PathBuf,

    /// Query file (defenders midfielders strikers total_budget price_cap)
    query: PathBuf,

    /// Output file for reported solutions
    output: PathBuf,

    /// TOML file with [exact] and [anneal] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wall-clock limit in milliseconds, per engine
    #[arg(long)]
    time_limit: Option<u64>,

    /// Append every improvement instead of keeping only the latest
    #[arg(long, default_value = "false")]
    append: bool,
}

#[derive(Args)]
struct AnnealArgs {
    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of annealing rounds
    #[arg(long)]
    max_rounds: Option<u64>,
}

struct Inputs {
    pool: PlayerPool,
    constraints: Constraints,
    config: PortfolioConfig,
    sink: Tee<FileSink, TracingSink>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let best = match cli.command {
        Commands::Exact { common } => {
            let Inputs { pool, constraints, config, mut sink } = prepare(&common, None)?;
            let result = ExactRunner::run(&pool, &constraints, &config.exact, &mut sink)?;
            finish(sink)?;
            info!(status = ?result.status, nodes = result.nodes, "exact search finished");
            result.best
        }

        Commands::Anneal { common, anneal } => {
            let Inputs { pool, constraints, config, mut sink } = prepare(&common, Some(&anneal))?;
            let result = SaRunner::run(&pool, &constraints, &config.anneal, &mut sink)?;
            finish(sink)?;
            info!(rounds = result.rounds, seed = result.seed, "annealing finished");
            Some(result.best)
        }

        Commands::Portfolio { common, anneal } => {
            let Inputs { pool, constraints, config, sink } = prepare(&common, Some(&anneal))?;
            let shared = SharedSink::new(sink);
            let result = portfolio::solve(
                &pool,
                &constraints,
                &config,
                &mut shared.handle(),
                &mut shared.handle(),
            );
            finish(shared.into_inner())?;
            if let Err(err) = &result.exact {
                tracing::warn!(error = %err, "exact search failed");
            }
            if let Err(err) = &result.anneal {
                tracing::warn!(error = %err, "annealing failed");
            }
            result.best().map(|(_, roster)| roster.clone())
        }
    };

    match best {
        Some(roster) => {
            print_roster(&roster);
            Ok(())
        }
        None => bail!("no feasible roster for this query"),
    }
}

fn prepare(common: &Common, anneal: Option<&AnnealArgs>) -> Result<Inputs> {
    let mut config = match &common.config {
        Some(path) => load_config(path)?,
        None => PortfolioConfig::default(),
    };
    if let Some(ms) = common.time_limit {
        config.exact.time_limit_ms = ms;
        config.anneal.time_limit_ms = ms;
    }
    if let Some(args) = anneal {
        if let Some(seed) = args.seed {
            config.anneal.seed = Some(seed);
        }
        if let Some(rounds) = args.max_rounds {
            config.anneal.max_rounds = rounds;
        }
    }

    let pool = load_pool(&common.players)
        .with_context(|| format!("failed to load players from {}", common.players.display()))?;
    let constraints = load_constraints(&common.query)
        .with_context(|| format!("failed to load query from {}", common.query.display()))?;
    info!(
        players = pool.len(),
        roster_size = constraints.quotas.roster_size(),
        "inputs loaded"
    );

    let mode = if common.append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };
    let file = FileSink::create(&common.output, mode)
        .with_context(|| format!("failed to create {}", common.output.display()))?;
    let sink = Tee(file, TracingSink);

    Ok(Inputs {
        pool,
        constraints,
        config,
        sink,
    })
}

fn load_config(path: &Path) -> Result<PortfolioConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn finish(Tee(sink, _): Tee<FileSink, TracingSink>) -> Result<()> {
    let path = sink.path().to_path_buf();
    sink.finish()
        .with_context(|| format!("failed to write solutions to {}", path.display()))
}

fn print_roster(roster: &Roster) {
    for category in Category::ALL {
        println!("{}: {}", category.code().to_uppercase(), roster.names(category).join(";"));
    }
    println!("Punts: {}", roster.score);
    println!("Preu: {}", roster.price);
}
