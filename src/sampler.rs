/// Decides which pixel coordinates participate in dominant-color sampling.
///
/// With a border fraction `b` the centered rectangle spanning
/// `(W*b, W - W*b)` by `(H*b, H - H*b)` is skipped; everything on or outside
/// those lines is sampled. A fraction of zero samples the whole image.
#[derive(Debug, Clone, Copy)]
pub struct BorderMask {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    whole: bool,
}

impl BorderMask {
    /// The fraction is not range-checked here; callers clamp it. Out-of-range
    /// values produce an empty or inverted interior, which `includes` resolves
    /// to sampling every coordinate.
    pub fn new(width: u32, height: u32, fraction: f64) -> Self {
        if fraction == 0.0 {
            return Self {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0,
                whole: true,
            };
        }
        let min_x = f64::from(width) * fraction;
        let min_y = f64::from(height) * fraction;
        Self {
            min_x,
            max_x: f64::from(width) - min_x,
            min_y,
            max_y: f64::from(height) - min_y,
            whole: false,
        }
    }

    /// Pure predicate: true when the coordinate belongs to the sample set.
    /// Boundary pixels are sampled; only strict interior coordinates are
    /// skipped.
    pub fn includes(&self, x: u32, y: u32) -> bool {
        if self.whole {
            return true;
        }
        let x = f64::from(x);
        let y = f64::from(y);
        !(y > self.min_y && y < self.max_y && x > self.min_x && x < self.max_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded(mask: &BorderMask, width: u32, height: u32) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if !mask.includes(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn zero_fraction_includes_everything() {
        let mask = BorderMask::new(7, 5, 0.0);
        assert!(excluded(&mask, 7, 5).is_empty());
    }

    #[test]
    fn excluded_coordinates_are_strictly_interior() {
        let (w, h) = (10, 8);
        let mask = BorderMask::new(w, h, 0.2);
        let skipped = excluded(&mask, w, h);
        assert!(!skipped.is_empty());
        for (x, y) in skipped {
            let (x, y) = (f64::from(x), f64::from(y));
            assert!(x > 2.0 && x < 8.0, "x = {x} not strictly interior");
            assert!(y > 1.6 && y < 6.4, "y = {y} not strictly interior");
        }
    }

    #[test]
    fn boundary_line_pixels_are_sampled() {
        // 10 * 0.2 = 2.0 exactly; x == 2 sits on the line and stays sampled.
        let mask = BorderMask::new(10, 10, 0.2);
        assert!(mask.includes(2, 5));
        assert!(mask.includes(5, 2));
        assert!(!mask.includes(5, 5));
    }

    #[test]
    fn exclusion_count_matches_interior_lattice() {
        // 10 * 0.2 = 2, so the skipped lattice is x,y in 3..=7: 25 pixels.
        let mask = BorderMask::new(10, 10, 0.2);
        assert_eq!(excluded(&mask, 10, 10).len(), 25);
    }

    #[test]
    fn degenerate_fractions_include_everything() {
        // At 0.5 and beyond the interior collapses or inverts, so the strict
        // exclusion condition can never hold.
        for fraction in [0.5, 0.75, 1.0, 2.0] {
            let mask = BorderMask::new(6, 6, fraction);
            assert!(
                excluded(&mask, 6, 6).is_empty(),
                "fraction {fraction} excluded pixels"
            );
        }
    }

    #[test]
    fn negative_fraction_excludes_everything() {
        // The interior grows past the image bounds, swallowing every
        // coordinate. Callers are expected to clamp before reaching here;
        // the mask just stays well-defined.
        let mask = BorderMask::new(6, 6, -0.3);
        assert_eq!(excluded(&mask, 6, 6).len(), 36);
    }

    #[test]
    fn one_by_one_image_is_always_sampled() {
        for fraction in [0.0, 0.1, 0.49, 0.99] {
            let mask = BorderMask::new(1, 1, fraction);
            assert!(mask.includes(0, 0));
        }
    }
}
