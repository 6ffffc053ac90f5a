use selka_math::vector::Vec2i;

/// Palette index used as the colorkey by all test fixtures.
pub const TRANSPARENT_INDEX: u8 = 0;

/// Palette index used for opaque pixels by all test fixtures.
pub const OPAQUE_INDEX: u8 = 1;

/// Builds an indexed pixel buffer from rows of ascii art.
/// '.' maps to `TRANSPARENT_INDEX`, anything else to `OPAQUE_INDEX`.
/// Returns (pixels, width, height). All rows must have the same length.
pub fn indexed_pixels<S: AsRef<str>>(art: &[S]) -> (Vec<u8>, u32, u32) {
    indexed_pixels_padded(art, 0)
}

/// Like `indexed_pixels`, but pads every row with `pad` extra transparent
/// bytes, so the resulting buffer has a stride of `width + pad` pixels.
pub fn indexed_pixels_padded<S: AsRef<str>>(art: &[S], pad: u32) -> (Vec<u8>, u32, u32) {
    let height = art.len() as u32;
    let width = art.first().map_or(0, |r| r.as_ref().len()) as u32;
    let mut pixels = Vec::with_capacity(((width + pad) * height) as usize);
    for row in art {
        let row = row.as_ref();
        assert_eq!(
            row.len() as u32,
            width,
            "all rows of an ascii grid must have the same length"
        );
        for c in row.chars() {
            pixels.push(if c == '.' {
                TRANSPARENT_INDEX
            } else {
                OPAQUE_INDEX
            });
        }
        for _ in 0..pad {
            pixels.push(TRANSPARENT_INDEX);
        }
    }
    (pixels, width, height)
}

/// Builds a `w` x `h` ascii grid fully filled with opaque pixels.
pub fn opaque_grid(w: u32, h: u32) -> Vec<String> {
    (0..h).map(|_| "X".repeat(w as usize)).collect()
}

fn grid_pixel<S: AsRef<str>>(art: &[S], x: i32, y: i32) -> bool {
    if y < 0 || y >= art.len() as i32 {
        return false;
    }
    let row = art[y as usize].as_ref().as_bytes();
    if x < 0 || x >= row.len() as i32 {
        return false;
    }
    row[x as usize] != b'.'
}

/// Pixel-by-pixel reference for the bit-packed collision test: returns true
/// iff any opaque pixel of `a` placed at `pos_a` coincides with an opaque
/// pixel of `b` placed at `pos_b`. O(w*h), only meant for tests.
pub fn pixel_overlap_reference<S: AsRef<str>, R: AsRef<str>>(
    a: &[S],
    pos_a: Vec2i,
    b: &[R],
    pos_b: Vec2i,
) -> bool {
    for (i, row) in a.iter().enumerate() {
        for (j, c) in row.as_ref().chars().enumerate() {
            if c == '.' {
                continue;
            }
            let abs_x = pos_a.x + j as i32;
            let abs_y = pos_a.y + i as i32;
            if grid_pixel(b, abs_x - pos_b.x, abs_y - pos_b.y) {
                return true;
            }
        }
    }
    false
}
