mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use logger::CliLogger;
use pdf_booklet::{BookletMode, BookletOptions, BookletStatistics};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "booklet", about = "Rearrange PDF pages for booklet printing", version)]
struct Cli {
    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PDF into booklet order
    Convert {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file (default: <input>_booklet_<timestamp>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON options file; flags given on the command line take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Imposition mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Gap on each side of the fold in mm
        #[arg(long)]
        inner_margin_mm: Option<f32>,

        /// Fixed scale for source pages (default: fit to half sheet)
        #[arg(long)]
        scale: Option<f32>,

        /// Compress output streams
        #[arg(long)]
        compress: bool,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the sheet order for a page count
    Plan {
        /// Number of source pages
        #[arg(short, long)]
        pages: usize,

        /// Imposition mode
        #[arg(long, default_value = "sheet-wise", value_enum)]
        mode: ModeArg,
    },

    /// Show statistics for converting a PDF
    Stats {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Gap on each side of the fold in mm
        #[arg(long, default_value = "0")]
        inner_margin_mm: f32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Each sheet folds into its own 4-page booklet
    SheetWise,
    /// All sheets nest into one booklet
    Continuous,
}

impl From<ModeArg> for BookletMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SheetWise => Self::SheetWise,
            ModeArg::Continuous => Self::Continuous,
        }
    }
}

fn print_statistics(stats: &BookletStatistics) {
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    if let Some(size) = stats.page_size {
        println!(
            "  Page size: {:.1} x {:.1} mm",
            pdf_booklet::pt_to_mm(size.width),
            pdf_booklet::pt_to_mm(size.height)
        );
    }
    if let Some(scale) = stats.scale {
        println!("  Scale: {:.1}%", scale * 100.0);
    }
    if stats.mixed_page_sizes {
        log::warn!("Source pages differ in size; all pages are laid out using the first page");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(CliLogger::level_for(cli.verbose, cli.quiet))
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            mode,
            inner_margin_mm,
            scale,
            compress,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => BookletOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => BookletOptions::default(),
            };
            if let Some(mode) = mode {
                options.mode = mode.into();
            }
            if let Some(mm) = inner_margin_mm {
                options.inner_margin_pt = pdf_booklet::mm_to_pt(mm);
            }
            if scale.is_some() {
                options.scale = scale;
            }
            options.compress_streams |= compress;
            options.validate()?;
            log::debug!("Options: {:?}", options);

            let document = pdf_booklet::load_pdf(&input)
                .await
                .with_context(|| format!("Failed to load {}", input.display()))?;

            let stats = pdf_booklet::calculate_statistics(&document, &options)?;
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            let output = output.unwrap_or_else(|| pdf_booklet::default_output_path(&input));
            log::info!(
                "Converting {} ({} mode)",
                input.display(),
                options.mode.label()
            );

            let booklet = tokio::task::spawn_blocking(move || {
                pdf_booklet::convert(&document, &options)
            })
            .await??;
            pdf_booklet::save_pdf(booklet, &output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Booklet → {}", output.display());
        }

        Commands::Plan { pages, mode } => {
            let plan = pdf_booklet::plan(pages, mode.into());
            println!(
                "{} pages, {} sheets, {} blank ({} mode)",
                plan.page_count,
                plan.sheet_count(),
                plan.blank_count(),
                plan.mode.label()
            );
            for (idx, (front, back)) in plan.sheets().enumerate() {
                println!("  Sheet {}: front {}  back {}", idx + 1, front, back);
            }
        }

        Commands::Stats {
            input,
            inner_margin_mm,
        } => {
            let document = pdf_booklet::load_pdf(&input)
                .await
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let options = BookletOptions {
                inner_margin_pt: pdf_booklet::mm_to_pt(inner_margin_mm),
                ..Default::default()
            };
            let stats = pdf_booklet::calculate_statistics(&document, &options)?;
            print_statistics(&stats);
        }
    }

    Ok(())
}
