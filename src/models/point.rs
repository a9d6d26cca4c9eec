/// 2D point in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The eight anchor points the locator reports for one candidate symbol.
///
/// Indices 0-3 are the outer corners of the symbol (top-left, bottom-left,
/// top-right, bottom-right); indices 4-7 bound the codeword region in the
/// same order and are what the symbol decoder actually samples. Any single
/// anchor may be absent: the locator does not always resolve every finder
/// pattern, and `None` is the honest answer when it does not.
pub type CandidateAnchors = [Option<Point>; 8];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
