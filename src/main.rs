// Main entry point for the application

use clap::{Parser, Subcommand};
use fsplit::chunking::{join_chunks, split_file, Verification};
use fsplit::common::types::{BYTES_PER_MB, DEFAULT_CHUNK_SIZE_MB};
use std::path::Path;

#[derive(Parser)]
#[command(name = "fsplit")]
#[command(about = "Split large files into verifiable chunks and rebuild them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a file into fixed-size chunks
    Split {
        /// File to split
        file: String,

        /// Chunk size in megabytes
        #[arg(default_value_t = DEFAULT_CHUNK_SIZE_MB)]
        chunk_size_mb: u64,
    },

    /// Rebuild the original file from a chunk folder
    Join {
        /// Folder produced by split
        folder: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split { file, chunk_size_mb } => {
            let source = Path::new(&file);
            let chunk_size = chunk_size_mb * BYTES_PER_MB;

            println!("Splitting '{}'", file);
            println!("Chunk size: {} MB", chunk_size_mb);

            let outcome = match split_file(source, chunk_size) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            println!(
                "\nSplit complete! Created {} chunks ({:.2} MB total)",
                outcome.record.num_chunks,
                outcome.record.original_size as f64 / BYTES_PER_MB as f64
            );
            println!("All files saved in: {}/", outcome.dir.display());
            println!("Original hash: {}", outcome.record.sha256);
        }

        Commands::Join { folder } => {
            let outcome = match join_chunks(Path::new(&folder)) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            println!(
                "Rebuilt '{}' from {} chunks",
                outcome.output.display(),
                outcome.record.num_chunks
            );

            match outcome.verification {
                Verification::Verified => {
                    println!("✓ Size matches ({} bytes)", outcome.record.original_size);
                    println!("✓ Hash matches! File integrity verified");
                }
                Verification::SizeMismatch { expected, actual } => {
                    println!("✗ Size mismatch! File may be corrupted");
                    println!("  Expected: {} bytes", expected);
                    println!("  Got:      {} bytes", actual);
                }
                Verification::HashMismatch { expected, actual } => {
                    println!("✗ Hash mismatch! File may be corrupted");
                    println!("  Expected: {}", expected);
                    println!("  Got:      {}", actual);
                }
            }
        }
    }
}
