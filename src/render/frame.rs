use crossterm::{
    queue,
    style::{Color, Print, SetForegroundColor},
};
use std::io::{self, Write};
use std::time::Duration;

use super::FULL_BLOCK;
use crate::resample::OutputGrid;

/// Writes one `\n` per row followed by a colored block per cell, then flushes.
pub fn render_grid(grid: &OutputGrid, out: &mut impl Write) -> io::Result<()> {
    for row in grid.iter_rows() {
        queue!(out, Print('\n'))?;
        for &index in row {
            queue!(out, SetForegroundColor(Color::AnsiValue(index)), Print(FULL_BLOCK))?;
        }
    }
    out.flush()
}

/// Renders the grid, holds it on screen for `pause`, then ends the line.
pub fn present(grid: &OutputGrid, out: &mut impl Write, pause: Duration) -> io::Result<()> {
    render_grid(grid, out)?;
    if !pause.is_zero() {
        std::thread::sleep(pause);
    }
    out.write_all(b"\n")?;
    out.flush()
}
