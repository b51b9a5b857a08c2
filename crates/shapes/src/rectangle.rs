use jsonbridge::Reconstruct;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// The fields are public; [`area`](Rectangle::area) is computed from their
/// current values on every call.
///
/// ```rust
/// use shapes::Rectangle;
///
/// let mut r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.area(), 200.0);
///
/// r.width = 5.0;
/// assert_eq!(r.area(), 100.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Reconstruct)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Creates a [`Rectangle`]. No range checks: zero, negative and non-finite
/// dimensions are all accepted.
pub fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_is_width_times_height() {
        for (w, h) in [(10.0, 20.0), (0.0, 5.0), (-2.0, 3.0), (1.5, 1.5)] {
            assert_eq!(make_rectangle(w, h).area(), w * h);
        }
    }

    #[test]
    fn area_follows_mutation() {
        let mut r = make_rectangle(2.0, 3.0);
        r.height = 10.0;
        assert_eq!(r.area(), 20.0);
    }

    #[test]
    fn non_finite_dimensions() {
        assert!(make_rectangle(f64::NAN, 1.0).area().is_nan());
        assert_eq!(make_rectangle(f64::INFINITY, 2.0).area(), f64::INFINITY);
    }
}
