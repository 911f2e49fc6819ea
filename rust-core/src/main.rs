use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{info, warn};
use modular_domains::complex::ExtendedPoint;
use modular_domains::congruence::{CongruenceSubgroup, CosetEnumerator, DedupStrategy, Level};
use modular_domains::domain::FundamentalDomain;

#[derive(Parser)]
#[command(name = "modular-domains")]
#[command(about = "Coset representatives and fundamental domains of congruence subgroups")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List right-coset representatives of a congruence subgroup
    Cosets {
        /// Subgroup: gamma, gamma0 or gamma1
        #[arg(short, long, default_value = "gamma0")]
        subgroup: CongruenceSubgroup,

        /// Level N
        #[arg(short, long, allow_negative_numbers = true)]
        level: i64,

        /// Duplicate check used during the search
        #[arg(long, value_enum, default_value_t = Strategy::SlidingWindow)]
        strategy: Strategy,

        /// Print the representatives as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare the enumerated coset count with the index formula
    Index {
        /// Subgroup: gamma, gamma0 or gamma1
        #[arg(short, long, default_value = "gamma0")]
        subgroup: CongruenceSubgroup,

        /// Level N (repeat for several levels)
        #[arg(short, long, num_args = 1.., required = true, allow_negative_numbers = true)]
        level: Vec<i64>,
    },
    /// Find the group element whose copy of the standard domain contains a point
    Locate {
        /// Real part of the point
        #[arg(long, allow_negative_numbers = true)]
        re: f64,

        /// Imaginary part of the point
        #[arg(long, allow_negative_numbers = true)]
        im: f64,

        /// Subgroup used to pick the tile, together with --level
        #[arg(short, long, default_value = "gamma0")]
        subgroup: CongruenceSubgroup,

        /// Also report which coset representative's tile contains the point
        #[arg(short, long)]
        level: Option<i64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    SlidingWindow,
    Exhaustive,
}

impl From<Strategy> for DedupStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::SlidingWindow => DedupStrategy::SlidingWindow,
            Strategy::Exhaustive => DedupStrategy::Exhaustive,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting modular-domains v{}", modular_domains::VERSION);

    match cli.command {
        Commands::Cosets {
            subgroup,
            level,
            strategy,
            json,
        } => list_cosets(subgroup, level, strategy.into(), json),
        Commands::Index { subgroup, level } => compare_index(subgroup, &level),
        Commands::Locate {
            re,
            im,
            subgroup,
            level,
        } => locate_point(re, im, subgroup, level),
    }
}

fn list_cosets(
    subgroup: CongruenceSubgroup,
    level: i64,
    strategy: DedupStrategy,
    json: bool,
) -> Result<()> {
    let level = Level::new(level)?;
    info!("Enumerating cosets of {}({}) with {:?}", subgroup, level, strategy);

    let reps = CosetEnumerator::new(subgroup, level)
        .with_strategy(strategy)
        .enumerate();

    if json {
        println!("{}", serde_json::to_string_pretty(&reps)?);
    } else {
        for (i, r) in reps.iter().enumerate() {
            println!("{:>5}  {}", i, r);
        }
        println!("{} representatives", reps.len());
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn enumerate_levels(
    subgroup: CongruenceSubgroup,
    levels: &[i64],
) -> Vec<(i64, modular_domains::Result<usize>)> {
    modular_domains::congruence::coset_tables(subgroup, levels)
        .into_iter()
        .map(|(level, reps)| (level, reps.map(|r| r.len())))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn enumerate_levels(
    subgroup: CongruenceSubgroup,
    levels: &[i64],
) -> Vec<(i64, modular_domains::Result<usize>)> {
    levels
        .iter()
        .map(|&level| (level, subgroup.coset_representatives(level).map(|r| r.len())))
        .collect()
}

fn compare_index(subgroup: CongruenceSubgroup, levels: &[i64]) -> Result<()> {
    // Validate everything up front so no partial table is printed
    let validated = levels
        .iter()
        .map(|&n| Level::new(n))
        .collect::<modular_domains::Result<Vec<_>>>()?;

    println!("{:>6}  {:>10}  {:>10}", "level", "enumerated", "formula");
    for ((n, count), level) in enumerate_levels(subgroup, levels).into_iter().zip(validated) {
        let count = count.with_context(|| format!("Enumeration failed at level {}", n))?;
        let expected = subgroup.index(level);
        if count as u128 != expected {
            warn!(
                "{}({}) enumerated {} cosets but the index is {}",
                subgroup, level, count, expected
            );
        }
        println!("{:>6}  {:>10}  {:>10}", n, count, expected);
    }
    Ok(())
}

fn locate_point(re: f64, im: f64, subgroup: CongruenceSubgroup, level: Option<i64>) -> Result<()> {
    let domain = FundamentalDomain::standard();
    let point = ExtendedPoint::finite(re, im);

    let reduction = domain
        .reduce(point)
        .with_context(|| format!("Cannot locate {}", point))?;
    println!("element:    {}", reduction.element);
    match reduction.reduced_point {
        Some(w) => println!("reduced:    {}", w),
        None => println!("reduced:    ∞"),
    }
    println!("iterations: {}", reduction.iterations);

    if let Some(level) = level {
        let level = Level::new(level)?;
        let reps = CosetEnumerator::new(subgroup, level).enumerate();
        match subgroup.find_coset_index(level, &reps, &reduction.element) {
            Some(i) => println!("tile:       {} of {} in {}({})", i, reps.len(), subgroup, level),
            None => warn!("No representative of {}({}) matches {}", subgroup, level, reduction.element),
        }
    }
    Ok(())
}
