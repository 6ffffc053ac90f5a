/// Read-only view over a caller-owned, palette-indexed pixel buffer.
///
/// The buffer is row-major with a declared `stride` (in pixels) that may
/// exceed `width` when rows carry padding. The surface never outlives the
/// borrowed buffer and is only read during mask construction; nothing is
/// retained from it afterwards.
#[derive(Copy, Clone, Debug)]
pub struct Indexed_Surface<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
    stride: u32,
    bytes_per_pixel: u32,
    transparent_index: u8,
}

impl<'a> Indexed_Surface<'a> {
    /// Tightly packed surface: stride == width.
    pub fn new(pixels: &'a [u8], width: u32, height: u32, transparent_index: u8) -> Self {
        Self::with_stride(pixels, width, height, width, transparent_index)
    }

    pub fn with_stride(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        stride: u32,
        transparent_index: u8,
    ) -> Self {
        Self::with_format(pixels, width, height, stride, 1, transparent_index)
    }

    /// Arbitrary pixel depth. Mask construction only accepts 1 byte per
    /// pixel; deeper formats exist so that callers get a typed error back
    /// instead of misinterpreted pixel data.
    pub fn with_format(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        stride: u32,
        bytes_per_pixel: u32,
        transparent_index: u8,
    ) -> Self {
        assert!(stride >= width, "stride must cover the surface width");
        let needed = (stride * height * bytes_per_pixel) as usize;
        if pixels.len() < needed {
            fatal!(
                "{}x{} surface with stride {} needs {} bytes, buffer has {}",
                width,
                height,
                stride,
                needed,
                pixels.len()
            );
        }
        Self {
            pixels,
            width,
            height,
            stride,
            bytes_per_pixel,
            transparent_index,
        }
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
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    #[inline]
    pub fn transparent_index(&self) -> u8 {
        self.transparent_index
    }

    /// Palette index at (x, y). Only meaningful for 1-byte formats.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y * self.stride + x) as usize]
    }

    #[inline]
    pub fn is_transparent(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) == self.transparent_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_pixel_access() {
        let pixels = [0u8, 5, 5, 0];
        let surface = Indexed_Surface::new(&pixels, 2, 2, 0);
        assert!(surface.is_transparent(0, 0));
        assert!(!surface.is_transparent(1, 0));
        assert_eq!(surface.pixel(0, 1), 5);
    }

    #[test]
    fn surface_with_stride_skips_padding() {
        // 2x2 payload in rows of 4
        let pixels = [1u8, 1, 9, 9, 0, 1, 9, 9];
        let surface = Indexed_Surface::with_stride(&pixels, 2, 2, 4, 0);
        assert_eq!(surface.pixel(1, 1), 1);
        assert!(surface.is_transparent(0, 1));
    }

    #[test]
    #[should_panic]
    fn surface_rejects_short_buffer() {
        let pixels = [0u8; 3];
        let _ = Indexed_Surface::new(&pixels, 2, 2, 0);
    }
}
