use std::path::Path;

use crate::error::LoadError;

pub const PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: (value >> 16 & 0xFF) as u8,
            g: (value >> 8 & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Squared length of the color treated as a vector, used by box sums.
    pub fn magnitude_sq(self) -> u32 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        r * r + g * g + b * b
    }
}

/// Sum of squared channel differences. Not square-rooted, not weighted.
pub fn distance(a: Color, b: Color) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

// --- Palette ---

/// Ordered 256-entry terminal palette. Index `i` is emitted verbatim as
/// color code `i`, so entry order is never changed after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    pub fn from_colors(colors: &[Color]) -> Result<Self, LoadError> {
        let colors: [Color; PALETTE_SIZE] = colors
            .try_into()
            .map_err(|_| LoadError::WrongCount {
                found: colors.len(),
            })?;
        Ok(Self { colors })
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        crate::parser::palette_file::load_palette_file(path)
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    /// Index of the closest entry. Ties go to the lowest index.
    pub fn nearest(&self, color: Color) -> u8 {
        let mut best = 0u8;
        let mut best_distance = u32::MAX;
        for (index, &entry) in self.colors.iter().enumerate() {
            let d = distance(color, entry);
            if d < best_distance {
                best_distance = d;
                best = index as u8;
            }
        }
        best
    }
}

/// Palette filled with `filler`, with the given slots overridden.
#[cfg(test)]
pub(crate) fn palette_with(filler: Color, entries: &[(usize, Color)]) -> Palette {
    let mut colors = [filler; PALETTE_SIZE];
    for &(index, color) in entries {
        colors[index] = color;
    }
    Palette { colors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_color(rng: &mut StdRng) -> Color {
        Color::new(rng.random(), rng.random(), rng.random())
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let a = random_color(&mut rng);
            let b = random_color(&mut rng);
            assert_eq!(distance(a, b), distance(b, a));
            assert_eq!(distance(a, a), 0);
            if a != b {
                assert!(distance(a, b) > 0);
            }
        }
    }

    #[test]
    fn distance_is_squared_not_rooted() {
        let black = Color::new(0, 0, 0);
        assert_eq!(distance(black, Color::new(3, 4, 0)), 25);
        assert_eq!(distance(black, Color::new(255, 255, 255)), 3 * 255 * 255);
    }

    #[test]
    fn hex_unpacks_in_rrggbb_order() {
        assert_eq!(Color::from_hex(0x12_34_56), Color::new(0x12, 0x34, 0x56));
        assert_eq!(Color::from_hex(0xAB_12_34_56), Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn from_colors_rejects_wrong_length() {
        let err = Palette::from_colors(&[Color::default(); 255]).unwrap_err();
        assert!(matches!(err, LoadError::WrongCount { found: 255 }));
        let err = Palette::from_colors(&[Color::default(); 257]).unwrap_err();
        assert!(matches!(err, LoadError::WrongCount { found: 257 }));
    }

    #[test]
    fn nearest_prefers_lower_index_on_tie() {
        let green = Color::new(0, 255, 0);
        let palette = palette_with(
            green,
            &[(10, Color::new(10, 0, 0)), (20, Color::new(0, 10, 0))],
        );
        let probe = Color::new(0, 0, 0);
        assert_eq!(
            distance(probe, palette.colors()[10]),
            distance(probe, palette.colors()[20])
        );
        for _ in 0..5 {
            assert_eq!(palette.nearest(probe), 10);
        }
    }

    #[test]
    fn nearest_duplicate_entries_resolve_to_first() {
        let palette = palette_with(Color::new(7, 7, 7), &[]);
        assert_eq!(palette.nearest(Color::new(200, 10, 90)), 0);
    }

    #[test]
    fn nearest_matches_exact_entry() {
        let mut colors = [Color::default(); PALETTE_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            *c = Color::new(i as u8, 255 - i as u8, (i as u8).wrapping_mul(3));
        }
        let palette = Palette::from_colors(&colors).unwrap();
        for i in 0..PALETTE_SIZE {
            assert_eq!(palette.nearest(colors[i]) as usize, i);
        }
    }
}
