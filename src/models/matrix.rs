/// Compact bit matrix holding a binarized image
///
/// Rows are byte-aligned so scanline-oriented consumers can walk a row
/// without crossing a byte boundary mid-pixel at the row edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    row_bytes: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-white bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let row_bytes = width.div_ceil(8);
        Self {
            width,
            height,
            row_bytes,
            data: vec![0; row_bytes * height],
        }
    }

    /// Build a matrix from rows of bools (handy in tests and adapters)
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut matrix = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                matrix.set(x, y, value);
            }
        }
        matrix
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y); out-of-bounds reads as white
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = y * self.row_bytes + x / 8;
        (self.data[byte] >> (x % 8)) & 1 == 1
    }

    /// Set bit at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let byte = y * self.row_bytes + x / 8;
        if value {
            self.data[byte] |= 1 << (x % 8);
        } else {
            self.data[byte] &= !(1 << (x % 8));
        }
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(17, 4);
        assert_eq!(matrix.width(), 17);
        assert_eq!(matrix.height(), 4);

        matrix.set(16, 3, true);
        assert!(matrix.get(16, 3));
        assert!(!matrix.get(15, 3));

        matrix.set(16, 3, false);
        assert!(!matrix.get(16, 3));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::new(8, 8);
        matrix.set(10, 10, true); // Should not panic
        assert!(!matrix.get(10, 10));
    }

    #[test]
    fn test_from_rows() {
        let matrix = BitMatrix::from_rows(&[&[true, false, true], &[false, true, false]]);
        assert_eq!(matrix.width(), 3);
        assert_eq!(matrix.height(), 2);
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(1, 0));
        assert!(matrix.get(1, 1));
    }

    #[test]
    fn test_rows_are_byte_aligned() {
        // Setting the last pixel of one row must not leak into the next row.
        let mut matrix = BitMatrix::new(9, 2);
        matrix.set(8, 0, true);
        assert!(!matrix.get(0, 1));
    }
}
