use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::palette::{Color, Palette, PALETTE_SIZE};

fn parse_entry(line_no: usize, line: &str) -> Result<Color, LoadError> {
    let (_label, value) = line
        .split_once(':')
        .ok_or(LoadError::MissingColon { line: line_no })?;
    let value = value.trim();
    let hex = u32::from_str_radix(value, 16).map_err(|source| LoadError::InvalidHex {
        line: line_no,
        value: value.to_string(),
        source,
    })?;
    if hex > 0xFF_FF_FF {
        return Err(LoadError::OutOfRange {
            line: line_no,
            value: hex,
        });
    }
    Ok(Color::from_hex(hex))
}

/// Parses `label:RRGGBB` lines into palette slots in file order.
///
/// Blank lines after the last entry are tolerated; anything else that is not
/// an entry is an error.
pub fn parse_palette(text: &str) -> Result<Palette, LoadError> {
    let mut colors = Vec::with_capacity(PALETTE_SIZE);
    for (idx, line) in text.trim_end().lines().enumerate() {
        colors.push(parse_entry(idx + 1, line.trim_end_matches('\r'))?);
    }
    if colors.len() != PALETTE_SIZE {
        return Err(LoadError::WrongCount {
            found: colors.len(),
        });
    }
    Palette::from_colors(&colors)
}

pub fn load_palette_file(path: &Path) -> Result<Palette, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let palette = parse_palette(&text)?;
    log::debug!("loaded {} palette entries from {}", PALETTE_SIZE, path.display());
    Ok(palette)
}
