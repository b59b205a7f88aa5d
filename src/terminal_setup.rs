use crossterm::{execute, style::ResetColor, terminal};
use std::io::{self, Write};
use std::panic;

use crate::resample::GridSize;

pub const FALLBACK_GRID: GridSize = GridSize { rows: 24, cols: 80 };

pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let mut stdout = io::stdout();
        if execute!(stdout, ResetColor).is_err() {
            let mut stderr = io::stderr();
            let _ = stderr.write_all(b"\x1b[0m");
            let _ = stderr.flush();
        }
        default_hook(panic_info);
    }));
}

fn parse_dimension(value: Option<String>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// `LINES`/`COLUMNS` as exported by most shells.
fn grid_from_env(lines: Option<String>, columns: Option<String>) -> Option<GridSize> {
    Some(GridSize::new(parse_dimension(lines)?, parse_dimension(columns)?))
}

fn detect_grid() -> GridSize {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => {
            return GridSize::new(rows as usize, cols as usize);
        }
        Ok(_) => log::debug!("terminal reported a zero size"),
        Err(err) => log::debug!("terminal size query failed: {err}"),
    }
    if let Some(grid) = grid_from_env(std::env::var("LINES").ok(), std::env::var("COLUMNS").ok()) {
        return grid;
    }
    log::warn!(
        "could not determine terminal size, assuming {}x{}",
        FALLBACK_GRID.cols,
        FALLBACK_GRID.rows
    );
    FALLBACK_GRID
}

/// Target grid: explicit overrides first, then whatever the terminal reports.
pub fn terminal_grid(rows: Option<usize>, cols: Option<usize>) -> GridSize {
    if let (Some(rows), Some(cols)) = (rows, cols) {
        return GridSize::new(rows, cols);
    }
    let detected = detect_grid();
    GridSize::new(rows.unwrap_or(detected.rows), cols.unwrap_or(detected.cols))
}
