//! # CLI Entry Point
//!
//! Thin dispatcher over the library's embed/extract pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Hide a message; writes cat_encrypted.png next to the input
//! stegotext embed cat.png "meet at noon" --key hunter2
//!
//! # Recover it
//! stegotext extract cat_encrypted.png --key hunter2
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{warn, LevelFilter};
use std::io::Write;

use stegotext::carrier;
use stegotext::config::{load_config, StegoConfig};
use stegotext::pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message inside an image and write the result as PNG
    Embed {
        /// Path to the carrier image (any decodable format)
        image: PathBuf,
        /// The message to hide
        message: String,
        /// XOR key (must not be empty)
        #[arg(short, long)]
        key: String,
        /// Output path; defaults to `<stem><suffix>.png` next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recover a hidden message from an image
    Extract {
        /// Path to the image carrying the message
        image: PathBuf,
        /// XOR key used when embedding
        #[arg(short, long)]
        key: String,
    },
}

fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();
    let config: StegoConfig = match &args.config {
        Some(path) => load_config(path)?,
        None => StegoConfig::default(),
    };

    match args.command {
        Command::Embed {
            image,
            message,
            key,
            output,
        } => {
            let mut img = carrier::load(&image)?;
            pipeline::embed_message(&mut img, &message, &key)?;

            let output =
                output.unwrap_or_else(|| carrier::derive_output_path(&image, &config.output_suffix));
            carrier::save(&img, &output)?;
            println!("Message embedded into {}", output.display());
        }
        Command::Extract { image, key } => {
            let img = carrier::load(&image)?;
            let extracted = pipeline::extract_message(&img, &key)?;

            if !extracted.terminator_found {
                warn!(
                    "no end-of-message marker found; the result below is \
                     low-confidence (wrong key, or no message in this image)"
                );
            }
            println!("Recovered message:");
            println!("{}", extracted.message);
        }
    }

    Ok(())
}
