//! pdfoutline CLI - PDF outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use pdfoutline::{DocumentResult, OutlineExtractor};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(version)]
#[command(about = "Extract title and heading outlines from PDF documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a single PDF to JSON
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Process every PDF in a directory to per-file JSON outlines
    Batch {
        /// Input directory containing PDF files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (default: <DIR>/output)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            compact,
        } => cmd_extract(&input, output.as_deref(), compact),
        Commands::Batch { input, output } => cmd_batch(&input, output),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = OutlineExtractor::new();
    let (result, ok) = process_document(&extractor, input);
    if !ok {
        eprintln!(
            "{}: extraction failed for {}, emitting fallback result",
            "Warning".yellow().bold(),
            input.display()
        );
    }

    let json = if compact {
        result.to_json()?
    } else {
        result.to_json_pretty()?
    };

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_batch(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.unwrap_or_else(|| input.join("output"));

    let mut pdf_files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    pdf_files.sort();

    if pdf_files.is_empty() {
        println!("No PDF files found in {}", input.display());
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;
    println!("Found {} PDF files to process", pdf_files.len());

    let pb = ProgressBar::new(pdf_files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let extractor = OutlineExtractor::new();

    // Documents are independent, so the batch fans out across files.
    let failed: usize = pdf_files
        .par_iter()
        .map(|pdf| {
            let started = Instant::now();
            let (result, ok) = process_document(&extractor, pdf);
            let stem = file_stem(pdf);
            let out_path = output_dir.join(format!("{}.json", stem));

            let written = result
                .to_json_pretty()
                .and_then(|json| fs::write(&out_path, json).map_err(Into::into));

            let elapsed = started.elapsed().as_secs_f32();
            match (&written, ok) {
                (Ok(()), true) => pb.println(format!(
                    "{} {} -> {}.json ({:.2}s): {} headings",
                    "✓".green(),
                    pdf.display(),
                    stem,
                    elapsed,
                    result.outline.len()
                )),
                (Ok(()), false) => pb.println(format!(
                    "{} {} ({:.2}s): wrote fallback result",
                    "✗".red(),
                    pdf.display(),
                    elapsed
                )),
                (Err(err), _) => pb.println(format!(
                    "{} {}: {}",
                    "✗".red(),
                    pdf.display(),
                    err
                )),
            }
            pb.inc(1);

            (!ok || written.is_err()) as usize
        })
        .sum();

    pb.finish_and_clear();
    println!(
        "Processed {} files, {} with fallback or write errors",
        pdf_files.len(),
        failed
    );

    Ok(())
}

/// Extract a document, recovering failures as the fallback artifact.
///
/// The second element is false when the fallback was used.
fn process_document(extractor: &OutlineExtractor, path: &Path) -> (DocumentResult, bool) {
    match extractor.extract_file(path) {
        Ok(result) => (result, true),
        Err(err) => {
            log::error!("error processing {}: {}", path.display(), err);
            (fallback_result(path), false)
        }
    }
}

/// The artifact emitted when extraction fails at the document level.
fn fallback_result(path: &Path) -> DocumentResult {
    DocumentResult::empty(format!("Document: {}", file_stem(path)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string()
}
