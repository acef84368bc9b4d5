mod logger;

use anyhow::Result;
use clap::Parser;
use logger::ConsoleLogger;
use std::path::PathBuf;
use std::process;

/// Exit status for command-line usage errors
const USAGE_EXIT_CODE: i32 = 2;

const MISSING_PATH_MESSAGE: &str = "Error: specify PDF file path as an argument.";
const TOO_MANY_PATHS_MESSAGE: &str =
    "Error: too many arguments have been passed. One is needed (file path).";

#[derive(Parser)]
#[command(
    name = "booklet",
    about = "Reorder a PDF for double-sided saddle-stitch booklet printing",
    version
)]
struct Cli {
    /// Input PDF file; writes <name>_booklet.pdf next to it
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

/// The single input path, or the usage message to print
fn input_path(files: &[PathBuf]) -> std::result::Result<&PathBuf, &'static str> {
    match files {
        [] => Err(MISSING_PATH_MESSAGE),
        [input] => Ok(input),
        _ => Err(TOO_MANY_PATHS_MESSAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match input_path(&cli.files) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(USAGE_EXIT_CODE);
        }
    };

    ConsoleLogger::default().init()?;

    let options = pdf_booklet::BookletOptions::default();
    let paths = pdf_booklet::BookletPaths::for_input(input, &options)?;

    // Load the source and show statistics
    let source = pdf_booklet::load_pdf(&paths.input).await?;
    let stats = pdf_booklet::calculate_statistics(pdf_booklet::render::page_ids(&source).len());
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Sheets: {}", stats.sheets);
    println!("  Output pages: {}", stats.output_pages);

    pdf_booklet::generate_booklet_from_document(source, &paths, &options).await?;
    println!("Booklet → {}", paths.output.display());

    Ok(())
}
