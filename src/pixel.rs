/// A single color sample: one image pixel in 8-bit RGB.
///
/// This is the unit the whole crate operates on. An image is a flat,
/// row-major slice of these; centroids are the same type, since a centroid
/// is always the (truncated) channel-wise mean of real samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a sample from its three channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_round_trip() {
        let px = Rgb::from([12, 200, 7]);
        assert_eq!(px, Rgb::new(12, 200, 7));
        assert_eq!(<[u8; 3]>::from(px), [12, 200, 7]);
    }
}
