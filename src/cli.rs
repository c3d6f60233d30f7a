use crate::block::BlockStats;
use crate::compressor::AdaptiveCompressor;
use crate::config::{
    CompressionMethod, CompressorConfig, DEFAULT_ALIGNMENT, DEFAULT_ENTROPY_THRESHOLD,
    DEFAULT_INDEX_WIDTH,
};
use crate::error::AtcError;
use crate::transforms::entropy;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::Rng;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Adaptive Tensor Compression (ATC) Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compresses one synthetic buffer and prints the encoding summary
    Compress {
        /// Number of elements in the synthetic buffer
        #[arg(short = 'n', long, default_value_t = 4096)]
        elements: usize,

        /// Number of distinct values to draw elements from
        #[arg(short, long, default_value_t = 16)]
        distinct: u16,

        /// Compression method [standard, adaptive, aggressive]
        #[arg(short, long, default_value = "adaptive")]
        method: CompressionMethod,

        /// Entropy threshold separating the dictionary and alignment paths
        #[arg(long, default_value_t = DEFAULT_ENTROPY_THRESHOLD)]
        threshold: f64,

        /// Alignment boundary in elements
        #[arg(long, default_value_t = DEFAULT_ALIGNMENT)]
        alignment: usize,

        /// Dictionary index width in bits
        #[arg(long, default_value_t = DEFAULT_INDEX_WIDTH)]
        index_width: u8,

        /// Number of threads to use (default: all available cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Runs every method across a grid of value cardinalities
    Sweep {
        /// Elements per synthetic buffer
        #[arg(short = 'n', long, default_value_t = 65536)]
        elements: usize,

        /// Entropy threshold separating the dictionary and alignment paths
        #[arg(long, default_value_t = DEFAULT_ENTROPY_THRESHOLD)]
        threshold: f64,

        /// Alignment boundary in elements
        #[arg(long, default_value_t = DEFAULT_ALIGNMENT)]
        alignment: usize,

        /// Dictionary index width in bits
        #[arg(long, default_value_t = DEFAULT_INDEX_WIDTH)]
        index_width: u8,

        /// Number of threads to use (default: all available cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Prints the entropy of a synthetic buffer
    Entropy {
        /// Number of elements in the synthetic buffer
        #[arg(short = 'n', long, default_value_t = 4096)]
        elements: usize,

        /// Number of distinct values to draw elements from
        #[arg(short, long, default_value_t = 16)]
        distinct: u16,

        /// Entropy threshold to compare against
        #[arg(long, default_value_t = DEFAULT_ENTROPY_THRESHOLD)]
        threshold: f64,
    },
}

const SWEEP_CARDINALITIES: &[u16] = &[2, 8, 32, 64, 128, 256, 1024, 4096];
const SWEEP_METHODS: &[CompressionMethod] = &[
    CompressionMethod::Standard,
    CompressionMethod::Adaptive,
    CompressionMethod::Aggressive,
];

struct SweepRow {
    distinct: u16,
    entropy: f64,
    method: CompressionMethod,
    stats: BlockStats,
}

pub fn run() -> Result<(), AtcError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compress {
            elements,
            distinct,
            method,
            threshold,
            alignment,
            index_width,
            threads,
        } => {
            init_thread_pool(*threads);
            let config = CompressorConfig::default()
                .with_entropy_threshold(*threshold)
                .with_alignment(*alignment)
                .with_index_width(*index_width);
            debug!("config: {:?}", config);

            let buffer = synthesize(*elements, *distinct);
            let compressor = AdaptiveCompressor::new(config);

            let start = Instant::now();
            let block = compressor.compress(&buffer, *method)?;
            let duration = start.elapsed();

            let stats = BlockStats::from_block(&block, buffer.len());
            println!("Compression successful!");
            println!("  Method:           {:?}", method);
            println!("  Variant:          {}", stats.variant);
            if *method == CompressionMethod::Adaptive {
                println!("  Entropy:          {:.4} nats", entropy::estimate(&buffer)?);
            }
            println!("  Input Elements:   {}", stats.input_len);
            println!("  Output Elements:  {}", stats.output_len);
            if let Some(distinct_count) = stats.distinct_count {
                println!("  Distinct Values:  {}", distinct_count);
            }
            println!(
                "  Dropped:          {} ({:.2}%)",
                stats.dropped_count,
                stats.dropped_percentage()
            );
            println!("  Lossless:         {}", stats.lossless);
            println!("  Elapsed Time:     {:.2?}", duration);
            if !stats.lossless && stats.dropped_count > 0 {
                println!("  Note: trimmed elements are irrecoverable; do not treat this block as a round trip.");
            }
        }
        Commands::Sweep {
            elements,
            threshold,
            alignment,
            index_width,
            threads,
        } => {
            init_thread_pool(*threads);
            let config = CompressorConfig::default()
                .with_entropy_threshold(*threshold)
                .with_alignment(*alignment)
                .with_index_width(*index_width);
            run_sweep(*elements, &config)?;
        }
        Commands::Entropy {
            elements,
            distinct,
            threshold,
        } => {
            let buffer = synthesize(*elements, *distinct);
            let entropy_value = entropy::estimate(&buffer)?;
            println!(
                "Entropy: {:.4} nats ({} elements, {} distinct values requested)",
                entropy_value, elements, distinct
            );
            if entropy_value < *threshold {
                println!(
                    "Below threshold {:.2}: adaptive routes to dictionary coding",
                    threshold
                );
            } else {
                println!(
                    "At or above threshold {:.2}: adaptive routes to alignment trimming",
                    threshold
                );
            }
        }
    }

    Ok(())
}

fn run_sweep(elements: usize, config: &CompressorConfig) -> Result<(), AtcError> {
    let pb = ProgressBar::new(SWEEP_CARDINALITIES.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] Buffers {pos}/{len} ({eta})")
        .unwrap()
        .progress_chars("#>-")
    );

    let rows: Vec<Vec<SweepRow>> = SWEEP_CARDINALITIES
        .par_iter()
        .map(|&distinct| {
            let buffer = synthesize(elements, distinct);
            let entropy_value = entropy::estimate(&buffer)?;
            let compressor = AdaptiveCompressor::new(config.clone());

            let mut rows = Vec::with_capacity(SWEEP_METHODS.len());
            for &method in SWEEP_METHODS {
                let block = compressor.compress(&buffer, method)?;
                rows.push(SweepRow {
                    distinct,
                    entropy: entropy_value,
                    method,
                    stats: BlockStats::from_block(&block, buffer.len()),
                });
            }
            pb.inc(1);
            Ok::<Vec<SweepRow>, AtcError>(rows)
        })
        .collect::<Result<Vec<_>, AtcError>>()?;

    pb.finish_with_message("Sweep finished");

    println!(
        "{:>9} {:>9} {:>11} {:>11} {:>10} {:>10} {:>9}",
        "distinct", "entropy", "method", "variant", "in", "out", "dropped"
    );
    for row in rows.into_iter().flatten() {
        println!(
            "{:>9} {:>9.3} {:>11} {:>11} {:>10} {:>10} {:>9}",
            row.distinct,
            row.entropy,
            format!("{:?}", row.method),
            row.stats.variant,
            row.stats.input_len,
            row.stats.output_len,
            row.stats.dropped_count
        );
    }

    Ok(())
}

/// Draw `elements` values uniformly from `0..distinct`.
fn synthesize(elements: usize, distinct: u16) -> Vec<u16> {
    let cardinality = u32::from(distinct.max(1));
    let mut rng = rand::thread_rng();
    (0..elements)
        .map(|_| rng.gen_range(0..cardinality) as u16)
        .collect()
}

fn init_thread_pool(threads: Option<usize>) {
    let num_threads = threads.unwrap_or_else(num_cpus::get);
    debug!("using {} worker threads", num_threads);
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global();
}
