use std::ops::Range;

use crate::error::ResizeError;
use crate::image::SourceImage;
use crate::palette::{Color, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Largest grid no bigger than `self` in either dimension that still
    /// fits inside `image`.
    pub fn clamp_to(self, image: &SourceImage) -> Self {
        Self {
            rows: self.rows.min(image.height()),
            cols: self.cols.min(image.width()),
        }
    }
}

/// Row-major grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl OutputGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).map(|row| self.row(row))
    }
}

/// Source index range covered by output slot `index` out of `parts`.
pub fn box_range(extent: usize, parts: usize, index: usize) -> Range<usize> {
    (extent * index / parts)..(extent * (index + 1) / parts)
}

// --- Box statistics ---

/// Running sums over the pixels of one box. Enough to evaluate
/// `sum(distance(p, k))` for any `k` without revisiting the pixels:
/// `sum|p - k|^2 = sum|p|^2 - 2 k.sum(p) + n|k|^2`.
#[derive(Debug, Clone, Copy, Default)]
struct BoxSums {
    count: u64,
    r: u64,
    g: u64,
    b: u64,
    sq: u64,
}

impl BoxSums {
    fn add(&mut self, p: Color) {
        self.count += 1;
        self.r += p.r as u64;
        self.g += p.g as u64;
        self.b += p.b as u64;
        self.sq += p.magnitude_sq() as u64;
    }

    fn cost(&self, k: Color) -> u64 {
        let dot = k.r as u64 * self.r + k.g as u64 * self.g + k.b as u64 * self.b;
        // Never underflows: the true value is a sum of squares.
        self.sq + self.count * k.magnitude_sq() as u64 - 2 * dot
    }
}

// --- Resampler ---

/// Box resampler over a fixed palette.
///
/// Output cell `(i, j)` owns source rows `[H*i/R, H*(i+1)/R)` and columns
/// `[W*j/C, W*(j+1)/C)`. It gets the palette entry with the smallest summed
/// squared distance over every pixel in that box; ties go to the lower index.
pub struct Resampler<'p> {
    palette: &'p Palette,
}

impl<'p> Resampler<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    /// Shrinks `image` to `target`. Enlarging either dimension is rejected.
    pub fn resample(
        &self,
        image: &SourceImage,
        target: GridSize,
    ) -> Result<OutputGrid, ResizeError> {
        let GridSize { rows, cols } = target;
        if rows == 0 || cols == 0 {
            return Err(ResizeError::EmptyGrid { rows, cols });
        }
        if rows > image.height() || cols > image.width() {
            return Err(ResizeError::Unsupported {
                src_width: image.width(),
                src_height: image.height(),
                rows,
                cols,
            });
        }

        let col_ranges: Vec<Range<usize>> = (0..cols)
            .map(|j| box_range(image.width(), cols, j))
            .collect();
        let mut cells = Vec::with_capacity(rows * cols);
        let mut sums = vec![BoxSums::default(); cols];

        for i in 0..rows {
            sums.fill(BoxSums::default());
            for y in box_range(image.height(), rows, i) {
                let src_row = image.row(y);
                for (cell, xs) in sums.iter_mut().zip(&col_ranges) {
                    for &p in &src_row[xs.clone()] {
                        cell.add(p);
                    }
                }
            }
            cells.extend(sums.iter().map(|s| self.best_index(s)));
        }

        Ok(OutputGrid { rows, cols, cells })
    }

    /// One cell per source pixel, no averaging.
    pub fn quantize(&self, image: &SourceImage) -> OutputGrid {
        OutputGrid {
            rows: image.height(),
            cols: image.width(),
            cells: image
                .pixels()
                .iter()
                .map(|&p| self.palette.nearest(p))
                .collect(),
        }
    }

    fn best_index(&self, sums: &BoxSums) -> u8 {
        let mut best = 0u8;
        let mut best_cost = u64::MAX;
        for (index, &entry) in self.palette.colors().iter().enumerate() {
            let cost = sums.cost(entry);
            if cost < best_cost {
                best_cost = cost;
                best = index as u8;
            }
        }
        best
    }
}
