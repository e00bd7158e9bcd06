use cgmath::EuclideanSpace;

pub type Point2 = cgmath::Point2<f64>;

// Vertex pools are handed around as flat coordinate pairs.
static_assertions::assert_eq_size!(Point2, [f64; 2]);
static_assertions::assert_eq_align!(Point2, f64);

/// Direction taken when walking a -> b -> c.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// Determines whether three points make a left or a right turn.
///
/// The sign of the determinant
///
/// ```text
///   | a.x - c.x   b.x - c.x |
///   | a.y - c.y   b.y - c.y |
/// ```
///
/// is positive for a counter-clockwise (left) turn, negative for a clockwise
/// (right) turn and zero when the points lie on a line.
pub fn turn(a: Point2, b: Point2, c: Point2) -> Turn {
    let det = (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y);
    if det > 0.0 {
        Turn::Left
    } else if det < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// The axis aligned box around a set of points.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Returns `None` for an empty point set.
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            Bounds {
                min: *first,
                max: *first,
            },
            |b, p| Bounds {
                min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The larger of the two extents.
    pub fn span(&self) -> f64 {
        self.width().max(self.height())
    }
}

pub fn centroid(points: &[Point2; 3]) -> Point2 {
    Point2::centroid(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn turn_directions() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert_eq!(Turn::Left, turn(a, b, Point2::new(0.0, 1.0)));
        assert_eq!(Turn::Right, turn(a, b, Point2::new(0.0, -1.0)));
        assert_eq!(Turn::Collinear, turn(a, b, Point2::new(5.0, 0.0)));
    }

    #[test]
    fn bounds_of_points() {
        assert_eq!(None, Bounds::from_points(&[]));

        let bounds = Bounds::from_points(&[
            Point2::new(1.0, -2.0),
            Point2::new(-3.0, 4.0),
            Point2::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(Point2::new(-3.0, -2.0), bounds.min);
        assert_eq!(Point2::new(1.0, 4.0), bounds.max);
        assert_float_eq!(bounds.span(), 6.0, abs <= 1e-12);
    }

    #[test]
    fn centroid_of_triangle() {
        let c = centroid(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 3.0),
        ]);
        assert_float_eq!(c.x, 1.0, abs <= 1e-12);
        assert_float_eq!(c.y, 1.0, abs <= 1e-12);
    }
}
