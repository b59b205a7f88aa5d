use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

mod error;
mod image;
mod palette;
mod parser;
mod render;
mod resample;
mod terminal_setup;

use error::{AppResult, ResizeError};
use image::SourceImage;
use palette::Palette;
use resample::{GridSize, OutputGrid, Resampler};
use terminal_setup::{install_panic_hook, terminal_grid};

#[derive(Debug, Parser)]
#[command(
    name = "blockview",
    version,
    about = "Show a PNG image in the terminal using 256-color blocks"
)]
struct Cli {
    /// Path to the PNG image to display
    image: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = "colors.txt",
        help = "Palette file with 256 `index:RRGGBB` lines"
    )]
    palette: PathBuf,
    #[arg(long, value_name = "N", help = "Override the terminal row count")]
    rows: Option<NonZeroUsize>,
    #[arg(long, value_name = "N", help = "Override the terminal column count")]
    cols: Option<NonZeroUsize>,
    #[arg(
        long,
        value_name = "MS",
        default_value_t = render::DEFAULT_PAUSE.as_millis() as u64,
        help = "How long to hold the frame before returning"
    )]
    pause_ms: u64,
    #[arg(long, help = "Quantize every pixel without resampling")]
    native: bool,
    #[arg(
        long,
        conflicts_with = "native",
        help = "Fail instead of shrinking the grid when the image is smaller than the terminal"
    )]
    strict: bool,
}

/// Grid actually handed to the resampler. Unless `strict`, a terminal larger
/// than the image is shrunk to fit it instead of being rejected.
fn target_grid(terminal: GridSize, image: &SourceImage, strict: bool) -> GridSize {
    if strict {
        return terminal;
    }
    let clamped = terminal.clamp_to(image);
    if clamped != terminal {
        log::info!(
            "image is {}x{}, shrinking grid from {}x{} to {}x{}",
            image.width(),
            image.height(),
            terminal.cols,
            terminal.rows,
            clamped.cols,
            clamped.rows
        );
    }
    clamped
}

fn build_grid(
    cli: &Cli,
    resampler: &Resampler<'_>,
    image: &SourceImage,
) -> Result<OutputGrid, ResizeError> {
    if cli.native {
        return Ok(resampler.quantize(image));
    }
    let terminal = terminal_grid(
        cli.rows.map(NonZeroUsize::get),
        cli.cols.map(NonZeroUsize::get),
    );
    resampler.resample(image, target_grid(terminal, image, cli.strict))
}

fn run(cli: &Cli, out: &mut impl Write) -> AppResult<()> {
    let palette = Palette::load(&cli.palette)?;
    let image = parser::png_file::load_png_file(&cli.image)?;
    let resampler = Resampler::new(&palette);

    let started = Instant::now();
    let grid = build_grid(cli, &resampler, &image)?;
    drop(image);
    log::debug!(
        "computed {}x{} grid in {:.1?}",
        grid.cols(),
        grid.rows(),
        started.elapsed()
    );

    render::frame::present(&grid, out, Duration::from_millis(cli.pause_ms))?;
    Ok(())
}

fn main() -> ExitCode {
    install_panic_hook();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();
    let cli = Cli::parse();

    let mut stdout = BufWriter::with_capacity(1024 * 1024, io::stdout());
    match run(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
