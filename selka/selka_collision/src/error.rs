use std::fmt;

/// Failures raised by mask construction and the overlap query.
/// None of these is recoverable inside this crate: every variant means a
/// collaborator handed us a bad image or broke a geometry invariant, so
/// they are surfaced to the caller instead of being mapped to a default
/// collision answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Collision_Error {
    /// The source surface is not palette-indexed (1 byte per pixel).
    Invalid_Format { bytes_per_pixel: u32 },

    /// A row accessor was called with an out-of-bounds index.
    Index_Out_Of_Range { index: usize, max: usize },

    /// The packed rows of a mask are shorter than the computed
    /// intersection demands. Indicates a construction bug, not a normal
    /// runtime condition.
    Dimension_Mismatch {
        needed_rows: usize,
        avail_rows: usize,
        needed_words: usize,
        avail_words: usize,
    },
}

impl fmt::Display for Collision_Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Collision_Error::Invalid_Format { bytes_per_pixel } => write!(
                f,
                "surface has {} bytes per pixel, pixel masks need palette-indexed (1 byte) data",
                bytes_per_pixel
            ),
            Collision_Error::Index_Out_Of_Range { index, max } => {
                write!(f, "row index {} out of range (mask has {} rows)", index, max)
            }
            Collision_Error::Dimension_Mismatch {
                needed_rows,
                avail_rows,
                needed_words,
                avail_words,
            } => write!(
                f,
                "mask too small for intersection: need {} rows x {} words, have {} rows x {} words",
                needed_rows, needed_words, avail_rows, avail_words
            ),
        }
    }
}

impl std::error::Error for Collision_Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Collision_Error::Invalid_Format { bytes_per_pixel: 4 };
        assert!(err.to_string().contains("4 bytes per pixel"));

        let err = Collision_Error::Index_Out_Of_Range { index: 8, max: 8 };
        assert!(err.to_string().contains("row index 8"));
    }
}
