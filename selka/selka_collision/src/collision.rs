use crate::error::Collision_Error;
use crate::pixel_mask::{Pixel_Mask, BITS_PER_WORD};
use selka_math::rect::{rects_intersection, rects_overlap, Recti};
use selka_math::vector::Vec2i;

/// Tells whether any opaque pixel of `a` placed at `loc_a` coincides with
/// an opaque pixel of `b` placed at `loc_b` (integer top-left positions in
/// a shared coordinate space).
///
/// Two stages: a cheap bounding-box rejection, then an exact bit-level test
/// restricted to the intersection rectangle. The bit test never walks
/// individual pixels: each step compares one packed word of the right mask
/// against the two left-mask words it straddles.
///
/// Pure read-only query; `Dimension_Mismatch` is only possible if a mask's
/// packed rows disagree with its declared size, which would be a
/// construction bug.
pub fn check_collision(
    a: &Pixel_Mask,
    loc_a: Vec2i,
    b: &Pixel_Mask,
    loc_b: Vec2i,
) -> Result<bool, Collision_Error> {
    let box_a = Recti::new(loc_a.x, loc_a.y, a.width() as i32, a.height() as i32);
    let box_b = Recti::new(loc_b.x, loc_b.y, b.width() as i32, b.height() as i32);

    if !rects_overlap(&box_a, &box_b) {
        return Ok(false);
    }

    let intersection = match rects_intersection(&box_a, &box_b) {
        Some(inter) => inter,
        None => return Ok(false),
    };

    // Relative position of the intersection inside each mask.
    let offset_a = intersection.pos() - loc_a;
    let offset_b = intersection.pos() - loc_b;

    // The mask placed further right is scanned from its own word 0: the
    // intersection starts at its left edge, so it needs no sub-word shift.
    // On equal x either choice works; the first argument wins to keep the
    // routine deterministic.
    let (right, offset_right, left, offset_left) = if box_a.x >= box_b.x {
        (a, offset_a, b, offset_b)
    } else {
        (b, offset_b, a, offset_a)
    };

    // The arithmetic below banks on offset_right.x == 0, which the
    // intersection geometry guarantees (the intersection's left edge is the
    // right box's own left edge). Scream if that ever breaks.
    if offset_right.x % BITS_PER_WORD as i32 != 0 {
        lwarn_once!(
            "check_collision_right_offset",
            "right mask intersection starts {} bits into a word",
            offset_right.x
        );
    }
    debug_assert!(
        offset_right.x % BITS_PER_WORD as i32 == 0,
        "right mask intersection offset must be word-aligned"
    );

    // Number of right-mask words covering the intersection width.
    let words_right = ((intersection.width as u32 + BITS_PER_WORD - 1) / BITS_PER_WORD) as usize;

    // Left-mask alignment: whole words before the intersection, then the
    // bit shift between the two masks' column grids.
    let unused_words = (offset_left.x as u32 / BITS_PER_WORD) as usize;
    let unused_bits = offset_left.x as u32 % BITS_PER_WORD;
    let used_bits = BITS_PER_WORD - unused_bits;

    // When the masks are word-aligned (unused_bits == 0) no bits spill into
    // a following left word.
    let has_extra_word =
        unused_bits > 0 && words_right + unused_words + 1 < left.words_per_row() as usize;

    let height = intersection.height as usize;
    let rows_right = right.rows();
    let rows_left = left.rows();
    let first_row_right = offset_right.y as usize;
    let first_row_left = offset_left.y as usize;

    if first_row_right + height > rows_right.len()
        || words_right > right.words_per_row() as usize
    {
        return Err(Collision_Error::Dimension_Mismatch {
            needed_rows: first_row_right + height,
            avail_rows: rows_right.len(),
            needed_words: words_right,
            avail_words: right.words_per_row() as usize,
        });
    }
    let last_left_word = unused_words + words_right - 1 + has_extra_word as usize;
    if first_row_left + height > rows_left.len()
        || last_left_word >= left.words_per_row() as usize
    {
        return Err(Collision_Error::Dimension_Mismatch {
            needed_rows: first_row_left + height,
            avail_rows: rows_left.len(),
            needed_words: last_left_word + 1,
            avail_words: left.words_per_row() as usize,
        });
    }

    for i in 0..height {
        let row_right = &rows_right[first_row_right + i];
        let row_left = &rows_left[first_row_left + i];

        for j in 0..words_right {
            // One right word against the tail of the left word it overlaps,
            // plus the head of the next left word shifted into place. Any
            // surviving bit is two opaque pixels on the same column.
            let word_right = row_right[j];
            let word_left = row_left[j + unused_words];
            let next_word_left = if has_extra_word {
                row_left[j + unused_words + 1] >> used_bits
            } else {
                0
            };

            if (((word_right >> unused_bits) & word_left) | (word_right & next_word_left)) != 0 {
                return Ok(true);
            }
        }
    }

    Ok(false)
}
