use crate::pixel::Rgb;

/// Euclidean distance between two colors in RGB space.
///
/// Channels are widened to `i32` before subtraction so the difference of
/// two `u8` values cannot underflow.
#[inline]
pub fn euclidean(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    ((dr * dr + dg * dg + db * db) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_colors() {
        let a = Rgb::new(17, 200, 64);
        assert_relative_eq!(euclidean(a, a), 0.0);
    }

    #[test]
    fn test_single_channel_difference() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(3, 0, 0);
        assert_relative_eq!(euclidean(a, b), 3.0);
    }

    #[test]
    fn test_known_distance() {
        // 3-4-12 gives a 13 hypotenuse.
        let a = Rgb::new(10, 10, 10);
        let b = Rgb::new(13, 14, 22);
        assert_relative_eq!(euclidean(a, b), 13.0);
    }

    #[test]
    fn test_symmetry_at_extremes() {
        // The widened subtraction must not underflow in either direction.
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let d = euclidean(black, white);
        assert_relative_eq!(d, euclidean(white, black));
        assert_relative_eq!(d, (3.0f64 * 255.0 * 255.0).sqrt());
    }
}
