//! prepare-metadata
//!
//! Encrypts the metadata of an NFT collection into numbered reveal batches.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reveal_core::config::PrepareConfig;
use reveal_core::constants::{DEFAULT_KDF_ITERATIONS, DEFAULT_OUTPUT_ROOT, DEFAULT_SHARD_COUNT};
use reveal_core::pipeline::run_prepare;

#[derive(Parser, Debug)]
#[command(author, version, about = "Encrypt metadata of the collection", long_about = None)]
struct Cli {
    /// Directory of the collection (must contain json/ and images/)
    #[arg(long)]
    dir: PathBuf,

    /// Collection's metadata CID
    #[arg(long)]
    cid: String,

    /// Number of tokens per metadata batch (one batch if omitted)
    #[arg(long)]
    batch_size: Option<NonZeroUsize>,

    /// Passphrase the batch key is derived from
    #[arg(long, env = "REVEAL_PASSPHRASE", hide_env_values = true)]
    passphrase: String,

    /// PBKDF2-HMAC-SHA256 rounds
    #[arg(long, env = "REVEAL_KDF_ITERATIONS", default_value_t = DEFAULT_KDF_ITERATIONS,
          value_parser = clap::value_parser!(u32).range(1..))]
    kdf_iterations: u32,

    /// Number of backing metadata/media files tokens are mapped onto
    #[arg(long, default_value_t = DEFAULT_SHARD_COUNT,
          value_parser = clap::value_parser!(u64).range(1..))]
    shard_count: u64,

    /// Directory the `<cid>/` output folder is created in
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PrepareConfig::new(&cli.dir, &cli.cid, cli.passphrase)
        .with_batch_size(cli.batch_size)
        .with_shard_count(cli.shard_count)
        .with_kdf_iterations(cli.kdf_iterations)
        .with_output_root(&cli.output_dir);

    info!(?config, "resolved configuration");

    let summary = run_prepare(&config)
        .with_context(|| format!("failed to prepare collection {}", cli.dir.display()))?;

    println!(
        "wrote {} batch(es) for {} token(s) to {}",
        summary.batches_written,
        summary.tokens_processed,
        summary.output_dir.display()
    );
    Ok(())
}
