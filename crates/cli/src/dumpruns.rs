//! dumpruns - Dump reconstructed structure from a positioned-run dump
//!
//! Reads the same JSON input as runs2txt and writes the reconstructed
//! structure (spans, lines, blocks, rows or columns) as JSON, for
//! consumers that want geometry rather than flattened text.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde_json::{Value, json};

use weft_cli::input::Document;
use weft_core::high_level::{ExtractOptions, PageLayout, extract_pages};
use weft_core::layout::{
    Block, Line, MergeOptions, Span, group_columns, group_rows,
};

/// Which view of the reconstruction to dump.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Merged spans in reading order
    Spans,
    /// Spans grouped into baseline-aligned lines
    Lines,
    /// Lines grouped into paragraph-like blocks (default)
    #[default]
    Blocks,
    /// Spans bucketed by quantized baseline Y
    Rows,
    /// Spans bucketed by quantized start X
    Columns,
}

/// Dump reconstructed text structure from a JSON dump of positioned runs.
#[derive(Parser, Debug)]
#[command(name = "dumpruns")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the run dump, or "-" for stdin
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Structure to dump
    #[arg(short = 't', long = "output_type", value_enum, default_value = "blocks")]
    output_type: OutputType,

    /// Quantization granularity for rows/columns, in page units
    #[arg(short = 'g', long, default_value = "5.0")]
    granularity: f64,

    /// Maximum baseline deviation for two runs to share a line
    #[arg(short = 'B', long = "baseline-tolerance", default_value = "1.0")]
    baseline_tolerance: f64,

    /// Widest mergeable gap, as a multiple of the expected space advance
    #[arg(short = 'S', long = "space-multiplier", default_value = "1.2")]
    space_multiplier: f64,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn span_value(span: &Span) -> Value {
    json!({
        "text": span.text(),
        "font": span.font(),
        "size": span.size(),
        "x": span.x(),
        "y": span.y(),
        "w": span.w(),
    })
}

fn line_value(line: &Line) -> Value {
    json!({
        "baseline": line.baseline(),
        "x0": line.x0(),
        "x1": line.x1(),
        "spans": line.iter().map(span_value).collect::<Vec<_>>(),
    })
}

fn block_value(block: &Block) -> Value {
    json!({
        "dominant_size": block.dominant_size(),
        "lines": block.iter().map(line_value).collect::<Vec<_>>(),
    })
}

fn page_value(layout: &PageLayout, pageno: usize, args: &Args) -> Value {
    let body = match args.output_type {
        OutputType::Spans => json!({
            "spans": layout.spans.iter().map(span_value).collect::<Vec<_>>(),
        }),
        OutputType::Lines => {
            let lines = weft_core::layout::group_lines(
                layout.spans.clone(),
                &MergeOptions::new(args.baseline_tolerance, args.space_multiplier),
            );
            json!({ "lines": lines.iter().map(line_value).collect::<Vec<_>>() })
        }
        OutputType::Blocks => json!({
            "blocks": layout.blocks.iter().map(block_value).collect::<Vec<_>>(),
        }),
        OutputType::Rows => {
            let rows = group_rows(layout.spans.clone(), args.granularity);
            json!({
                "rows": rows.iter().map(|row| json!({
                    "key": row.key(),
                    "spans": row.spans().iter().map(span_value).collect::<Vec<_>>(),
                })).collect::<Vec<_>>(),
            })
        }
        OutputType::Columns => {
            let columns = group_columns(layout.spans.clone(), args.granularity);
            json!({
                "columns": columns.iter().map(|column| json!({
                    "key": column.key(),
                    "spans": column.spans().iter().map(span_value).collect::<Vec<_>>(),
                })).collect::<Vec<_>>(),
            })
        }
    };

    let mut value = json!({ "page": pageno });
    if let (Value::Object(out), Value::Object(body)) = (&mut value, body) {
        out.extend(body);
    }
    value
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
    if !(args.granularity.is_finite() && args.granularity > 0.0) {
        return Err(format!(
            "granularity must be a positive number, got {}",
            args.granularity
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
        threads: None,
    };

    let document = Document::read(&args.file)?;
    let fonts = document.registry();
    let pages = document.page_runs();

    let layouts = match extract_pages(&pages, &fonts, &options) {
        Ok(layouts) => layouts,
        Err(e) => {
            eprintln!("Error processing {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let dump: Vec<Value> = layouts
        .iter()
        .enumerate()
        .map(|(i, layout)| page_value(layout, i + 1, &args))
        .collect();

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    serde_json::to_writer_pretty(&mut output, &dump)?;
    output.write_all(b"\n")?;
    output.flush()?;

    Ok(())
}
