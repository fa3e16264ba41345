//! movee: decode Movee sensor frame streams from the command line.
//!
//! Each argument (or each stdin line when no argument is given) is a
//! hex-encoded stream of frames separated by the sentinel byte. Decoded frames
//! go to stdout, rejected inputs and frames to stderr.

use std::cell::Cell;
use std::path::PathBuf;
use std::pin::pin;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use futures::stream::{self, LocalBoxStream};
use futures::{StreamExt, future};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use movee::config::parse_sentinel;
use movee::input::decode_hex;
use movee::{Decoder, DecoderConfig, FrameStreamExt, MoveeConfig};

/// movee - Decode Movee sensor telemetry frames
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hex-encoded frame streams, e.g. c1150800000000aa (read from stdin when omitted)
    frames: Vec<String>,

    /// Sentinel byte between frames: hex with a 0x prefix or a letter digit (0xAA, aa), decimal otherwise (170)
    #[arg(short, long, value_parser = parse_sentinel_arg)]
    sentinel: Option<u8>,

    /// Configuration file path
    #[arg(short = 'f', long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_sentinel_arg(text: &str) -> Result<u8, String> {
    parse_sentinel(text).map_err(|e| e.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Decode every input. Returns whether all inputs and frames were valid.
async fn run(args: Args) -> anyhow::Result<bool> {
    let config = match &args.config {
        Some(path) => MoveeConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => MoveeConfig::default(),
    };
    init_tracing(&config, args.verbose)?;

    let sentinel = args.sentinel.unwrap_or(config.decoder.sentinel);
    let decoder = Decoder::new(DecoderConfig { sentinel });
    debug!(sentinel, inputs = args.frames.len(), "Starting decoder");

    let inputs: LocalBoxStream<'static, std::io::Result<String>> = if args.frames.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());
        LinesStream::new(stdin.lines()).boxed_local()
    } else {
        stream::iter(args.frames.into_iter().map(Ok)).boxed_local()
    };

    let invalid_inputs = Cell::new(0usize);
    let buffers = inputs.enumerate().filter_map(|(index, line)| {
        let buffer = match line {
            Ok(text) if text.trim().is_empty() => None,
            Ok(text) => match decode_hex(index, &text) {
                Ok(data) => Some(data),
                Err(e) => {
                    debug!(index, error = %e, "Skipping input");
                    eprintln!("{:#}", anyhow::Error::new(e));
                    invalid_inputs.set(invalid_inputs.get() + 1);
                    None
                }
            },
            Err(e) => {
                warn!(index, error = %e, "Failed to read input");
                invalid_inputs.set(invalid_inputs.get() + 1);
                None
            }
        };
        future::ready(buffer)
    });

    let mut segments = pin!(buffers.decode_frames(decoder));
    let (mut decoded, mut rejected) = (0usize, 0usize);

    while let Some(segment) = segments.next().await {
        match &segment.result {
            Ok(frame) => {
                decoded += 1;
                println!("frame {}: {}", segment.index, frame);
            }
            Err(e) => {
                rejected += 1;
                debug!(index = segment.index, kind = ?e.kind(), "Frame rejected");
                eprintln!("frame {}: {}", segment.index, e);
            }
        }
    }

    debug!(decoded, rejected, invalid_inputs = invalid_inputs.get(), "Done");
    Ok(rejected == 0 && invalid_inputs.get() == 0)
}

/// `-v` forces debug, else `RUST_LOG`, else the configured level.
fn init_tracing(config: &MoveeConfig, verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&config.logging.level)
                .with_context(|| format!("invalid logging level '{}'", config.logging.level))?,
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
