use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use nthprime::cli::{Cli, Command, OutputFormat};
use nthprime::config::Config;
use nthprime::{NthPrime, PrimeSieve};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN, so stdout carries only results
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let mut sieve = PrimeSieve::with_options(config.sieve_options()).context("Invalid sieve configuration")?;

    info!(
        segment_size = config.segment_size,
        bound_margin = config.bound_margin,
        "nthprime starting"
    );

    match cli.command {
        Command::Nth { indices, format, stats } => cmd_nth(&mut sieve, &indices, format, stats),
        Command::List { count, format } => cmd_list(&mut sieve, count, format),
    }
}

/// Print the prime at each requested index
fn cmd_nth(sieve: &mut PrimeSieve, indices: &[i64], format: OutputFormat, show_stats: bool) -> Result<()> {
    let mut results = Vec::with_capacity(indices.len());
    for &n in indices {
        let prime = sieve
            .nth_prime(n)
            .context(format!("Failed to compute prime at index {}", n))?;
        results.push((n, prime));
    }

    match format {
        OutputFormat::Json => {
            let primes: Vec<_> = results
                .iter()
                .map(|(index, prime)| serde_json::json!({ "index": index, "prime": prime }))
                .collect();
            let json = if show_stats {
                serde_json::json!({ "primes": primes, "stats": sieve.stats() })
            } else {
                serde_json::json!({ "primes": primes })
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            for (index, prime) in &results {
                println!("{} {}", format!("p({})", index).cyan(), prime);
            }
            if show_stats {
                let stats = sieve.stats();
                println!("{}", "Stats:".bold());
                println!("  Queries: {}", stats.queries);
                println!("  Cache hits: {}", stats.cache_hits);
                println!("  Base sieves: {}", stats.base_sieves);
                println!("  Segments sieved: {}", stats.segments_sieved);
                println!("  Primes cached: {}", sieve.len());
            }
        }
    }

    Ok(())
}

/// Print the first `count` primes
fn cmd_list(sieve: &mut PrimeSieve, count: usize, format: OutputFormat) -> Result<()> {
    let primes: Vec<i64> = if count == 0 {
        Vec::new()
    } else {
        let last = i64::try_from(count - 1).context("Count is out of range")?;
        sieve.nth_prime(last).context("Failed to extend prime cache")?;
        // Index 0 never touches the cache
        let mut primes = vec![2];
        primes.extend(sieve.primes().iter().skip(1).take(count - 1).map(|&p| p as i64));
        primes
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&primes)?),
        OutputFormat::Text => {
            if primes.is_empty() {
                println!("No primes requested");
            }
            for prime in primes {
                println!("{}", prime);
            }
        }
    }

    Ok(())
}
