//! runs2txt - Reconstruct plain text from a positioned-run dump
//!
//! Reads a JSON dump of positioned text runs and font width tables, as
//! resolved by an upstream content-stream interpreter, and writes the
//! reconstructed plain text.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use weft_cli::input::Document;
use weft_core::converter::TextConverter;
use weft_core::high_level::{ExtractOptions, extract_pages};
use weft_core::layout::MergeOptions;

/// Reconstruct plain text from a JSON dump of positioned text runs.
#[derive(Parser, Debug)]
#[command(name = "runs2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the run dump, or "-" for stdin
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Maximum baseline deviation for two runs to share a line
    #[arg(short = 'B', long = "baseline-tolerance", default_value = "1.0")]
    baseline_tolerance: f64,

    /// Widest mergeable gap, as a multiple of the expected space advance
    #[arg(short = 'S', long = "space-multiplier", default_value = "1.2")]
    space_multiplier: f64,

    /// Worker threads for multi-page documents (1 = sequential)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Prefix each page with its page number
    #[arg(short = 'n', long = "page-numbers", action = ArgAction::SetTrue)]
    page_numbers: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Build MergeOptions from command line arguments.
fn build_merge_options(args: &Args) -> Result<MergeOptions, String> {
    if !(args.baseline_tolerance.is_finite() && args.baseline_tolerance >= 0.0) {
        return Err(format!(
            "baseline-tolerance must be a non-negative number, got {}",
            args.baseline_tolerance
        ));
    }
    if !(args.space_multiplier.is_finite() && args.space_multiplier >= 0.0) {
        return Err(format!(
            "space-multiplier must be a non-negative number, got {}",
            args.space_multiplier
        ));
    }
    Ok(MergeOptions::new(
        args.baseline_tolerance,
        args.space_multiplier,
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        init_logging();
    }

    let merge = match build_merge_options(&args) {
        Ok(merge) => merge,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let options = ExtractOptions {
        merge,
        threads: args.threads,
    };

    let document = Document::read(&args.file)?;
    let fonts = document.registry();
    let pages = document.page_runs();

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    let layouts = match extract_pages(&pages, &fonts, &options) {
        Ok(layouts) => layouts,
        Err(e) => {
            eprintln!("Error processing {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let mut converter = TextConverter::new(&mut output, args.page_numbers);
    for layout in &layouts {
        converter.receive_page(&layout.blocks)?;
    }

    output.flush()?;

    Ok(())
}
