use crate::error::Collision_Error;
use crate::surface::Indexed_Surface;
use selka_math::rect::Recti;
use smallvec::{smallvec, SmallVec};
use std::fmt;

pub const BITS_PER_WORD: u32 = 32;

// Inline storage covers sprites up to 128px wide without a per-row allocation.
type Row_Words = SmallVec<[u32; 4]>;

/// Bit-packed opacity bitmap of one sprite frame.
///
/// One bit per pixel, 32 column bits per word, row-major. Within a row,
/// pixel column `j` lives in word `j / 32` at bit `1 << (31 - (j % 32))`;
/// a set bit means the source pixel differed from the surface's
/// transparent index. Bits past `width` in the last word of a row are
/// always zero.
///
/// Masks are built once per distinct frame image, are immutable afterwards
/// and may be shared read-only across threads.
pub struct Pixel_Mask {
    width: u32,
    height: u32,
    words_per_row: u32,
    rows: Vec<Row_Words>,
}

impl Pixel_Mask {
    /// Builds the mask from `region` of a palette-indexed surface with a
    /// single linear scan. The caller guarantees that `region` lies inside
    /// the surface bounds.
    pub fn from_surface(
        surface: &Indexed_Surface,
        region: Recti,
    ) -> Result<Pixel_Mask, Collision_Error> {
        if surface.bytes_per_pixel() != 1 {
            return Err(Collision_Error::Invalid_Format {
                bytes_per_pixel: surface.bytes_per_pixel(),
            });
        }

        debug_assert!(region.x >= 0 && region.y >= 0 && region.width >= 0 && region.height >= 0);
        debug_assert!(
            (region.x + region.width) as u32 <= surface.width()
                && (region.y + region.height) as u32 <= surface.height(),
            "mask region {:?} exceeds surface bounds",
            region
        );

        let width = region.width as u32;
        let height = region.height as u32;
        let words_per_row = (width + BITS_PER_WORD - 1) / BITS_PER_WORD;

        let mut rows = Vec::with_capacity(height as usize);
        for i in 0..height {
            let mut words: Row_Words = smallvec![0u32; words_per_row as usize];
            let mut word = 0usize;
            let mut bit = 0x8000_0000u32;
            for j in 0..width {
                if !surface.is_transparent(region.x as u32 + j, region.y as u32 + i) {
                    words[word] |= bit;
                }
                bit >>= 1;
                if bit == 0 {
                    bit = 0x8000_0000;
                    word += 1;
                }
            }
            rows.push(words);
        }

        ldebug!(
            "built {}x{} pixel mask ({} words per row)",
            width,
            height,
            words_per_row
        );

        Ok(Pixel_Mask {
            width,
            height,
            words_per_row,
            rows,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn words_per_row(&self) -> u32 {
        self.words_per_row
    }

    /// Read-only view of the packed words of row `i`.
    pub fn row_words(&self, i: u32) -> Result<&[u32], Collision_Error> {
        self.rows
            .get(i as usize)
            .map(|row| &row[..])
            .ok_or(Collision_Error::Index_Out_Of_Range {
                index: i as usize,
                max: self.rows.len(),
            })
    }

    pub(crate) fn rows(&self) -> &[Row_Words] {
        &self.rows
    }

    /// True if the source pixel at (`col`, `row`) was opaque.
    pub fn is_pixel_opaque(&self, col: u32, row: u32) -> bool {
        debug_assert!(col < self.width && row < self.height);
        let word = self.rows[row as usize][(col / BITS_PER_WORD) as usize];
        word & (0x8000_0000 >> (col % BITS_PER_WORD)) != 0
    }
}

impl fmt::Display for Pixel_Mask {
    /// Ascii dump of the mask, 'X' for opaque bits and '.' for transparent
    /// ones. One line per row.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.height {
            for j in 0..self.width {
                let c = if self.is_pixel_opaque(j, i) { 'X' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selka_test as t;

    fn mask_of(art: &[&str]) -> Pixel_Mask {
        let (pixels, w, h) = t::indexed_pixels(art);
        let surface = Indexed_Surface::new(&pixels, w, h, t::TRANSPARENT_INDEX);
        Pixel_Mask::from_surface(&surface, Recti::new(0, 0, w as i32, h as i32)).unwrap()
    }

    #[test]
    fn words_per_row_boundaries() {
        for &(width, expected) in &[(1u32, 1u32), (31, 1), (32, 1), (33, 2), (63, 2), (64, 2)] {
            let grid = t::opaque_grid(width, 1);
            let mask = mask_of(&grid.iter().map(|s| s.as_str()).collect::<Vec<_>>());
            assert_eq!(
                mask.words_per_row(),
                expected,
                "width {} should pack into {} words",
                width,
                expected
            );
        }
    }

    #[test]
    fn construction_sets_exactly_the_opaque_bits() {
        // 2x2 region, transparent index 0, pixels [[0,5],[5,0]]
        let pixels = [0u8, 5, 5, 0];
        let surface = Indexed_Surface::new(&pixels, 2, 2, 0);
        let mask = Pixel_Mask::from_surface(&surface, Recti::new(0, 0, 2, 2)).unwrap();

        assert!(!mask.is_pixel_opaque(0, 0));
        assert!(mask.is_pixel_opaque(1, 0));
        assert!(mask.is_pixel_opaque(0, 1));
        assert!(!mask.is_pixel_opaque(1, 1));

        assert_eq!(mask.row_words(0).unwrap(), &[0x4000_0000u32][..]);
        assert_eq!(mask.row_words(1).unwrap(), &[0x8000_0000u32][..]);
    }

    #[test]
    fn trailing_bits_of_partial_word_stay_zero() {
        let grid = t::opaque_grid(33, 2);
        let mask = mask_of(&grid.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        assert_eq!(mask.words_per_row(), 2);
        for i in 0..2 {
            let words = mask.row_words(i).unwrap();
            assert_eq!(words[0], 0xffff_ffff);
            assert_eq!(words[1], 0x8000_0000, "only column 32 is set in word 1");
        }
    }

    #[test]
    fn row_accessor_bounds_checked() {
        let mask = mask_of(&["X"]);
        assert!(mask.row_words(0).is_ok());
        assert_eq!(
            mask.row_words(1),
            Err(Collision_Error::Index_Out_Of_Range { index: 1, max: 1 })
        );
    }

    #[test]
    fn rejects_non_indexed_surfaces() {
        let pixels = [0u8; 32];
        let surface = Indexed_Surface::with_format(&pixels, 4, 2, 4, 2, 0);
        assert_eq!(
            Pixel_Mask::from_surface(&surface, Recti::new(0, 0, 4, 2)).err(),
            Some(Collision_Error::Invalid_Format { bytes_per_pixel: 2 })
        );
    }

    #[test]
    fn mask_from_sub_region() {
        let (pixels, w, h) = t::indexed_pixels(&[
            "....", //
            ".XX.", //
            ".X..", //
            "....",
        ]);
        let surface = Indexed_Surface::new(&pixels, w, h, t::TRANSPARENT_INDEX);
        let mask = Pixel_Mask::from_surface(&surface, Recti::new(1, 1, 2, 2)).unwrap();
        assert!(mask.is_pixel_opaque(0, 0));
        assert!(mask.is_pixel_opaque(1, 0));
        assert!(mask.is_pixel_opaque(0, 1));
        assert!(!mask.is_pixel_opaque(1, 1));
    }

    #[test]
    fn mask_from_padded_surface_matches_tight_one() {
        let art = ["X..X", ".XX."];
        let (tight, w, h) = t::indexed_pixels(&art);
        let (padded, _, _) = t::indexed_pixels_padded(&art, 3);

        let region = Recti::new(0, 0, w as i32, h as i32);
        let mask_tight = Pixel_Mask::from_surface(
            &Indexed_Surface::new(&tight, w, h, t::TRANSPARENT_INDEX),
            region,
        )
        .unwrap();
        let mask_padded = Pixel_Mask::from_surface(
            &Indexed_Surface::with_stride(&padded, w, h, w + 3, t::TRANSPARENT_INDEX),
            region,
        )
        .unwrap();

        for i in 0..h {
            assert_eq!(
                mask_tight.row_words(i).unwrap(),
                mask_padded.row_words(i).unwrap()
            );
        }
    }

    #[test]
    fn display_renders_the_source_grid() {
        let mask = mask_of(&[".X", "X."]);
        assert_eq!(mask.to_string(), ".X\nX.\n");
    }
}
