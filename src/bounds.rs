use crate::error::{Result, VoronoiError};
use crate::vector::Vector2D;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Region ID for the outer side of a bounding edge, it is negative to prevent conflicts with site IDs.
pub const OUTSIDE: i32 = -1;

/// Axis-aligned rectangle, the most common clipping region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    /// Corners in counter-clockwise order, starting at the minimum corner.
    pub fn corners(&self) -> [Vector2D; 4] {
        [
            Vector2D::new(self.min[0], self.min[1]), // 0: Bottom-Left
            Vector2D::new(self.max[0], self.min[1]), // 1: Bottom-Right
            Vector2D::new(self.max[0], self.max[1]), // 2: Top-Right
            Vector2D::new(self.min[0], self.max[1]), // 3: Top-Left
        ]
    }
}

/// A convex clipping polygon.
///
/// Vertices are stored counter-clockwise regardless of the winding they were given in,
/// so the interior always lies to the left of each edge.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingPolygon {
    vertices: Vec<Vector2D>,
}

impl BoundingPolygon {
    /// Validates `vertices` as a simple convex polygon in either consistent winding.
    pub fn new(vertices: Vec<Vector2D>) -> Result<Self> {
        let mut polygon = Self { vertices };
        polygon.validate()?;
        if polygon.signed_area() < 0.0 {
            polygon.vertices.reverse();
        }
        Ok(polygon)
    }

    /// Regular polygon with `sides` vertices on a circle of `radius` around `center`.
    pub fn regular(center: [f64; 2], radius: f64, sides: usize) -> Result<Self> {
        let angle_step = std::f64::consts::TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let angle = i as f64 * angle_step;
                Vector2D::new(center[0] + radius * angle.cos(), center[1] + radius * angle.sin())
            })
            .collect();
        Self::new(vertices)
    }

    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }

    /// Edges as `(start, end)` pairs, counter-clockwise, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2D, Vector2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Checks if `point` lies inside or within `eps` of the polygon.
    pub fn contains(&self, point: Vector2D, eps: f64) -> bool {
        self.edges().all(|(a, b)| {
            let edge = b - a;
            edge.cross(point - a) >= -eps * edge.length()
        })
    }

    /// Uniformly samples `count` points inside the polygon.
    pub fn random_points(&self, count: usize, seed: u64) -> Vec<Vector2D> {
        let mut rng = StdRng::seed_from_u64(seed);
        let (min, max) = self.extent();
        let w = max.x - min.x;
        let h = max.y - min.y;

        let mut points = Vec::with_capacity(count);
        let max_attempts = count * 1000; // Safety limit
        let mut attempts = 0;

        while points.len() < count && attempts < max_attempts {
            attempts += 1;
            let p = Vector2D::new(min.x + rng.r#gen::<f64>() * w, min.y + rng.r#gen::<f64>() * h);
            if self.contains(p, 0.0) {
                points.push(p);
            }
        }
        points
    }

    fn extent(&self) -> (Vector2D, Vector2D) {
        self.vertices.iter().fold(
            (
                Vector2D::new(f64::INFINITY, f64::INFINITY),
                Vector2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(lo, hi), v| {
                (
                    Vector2D::new(lo.x.min(v.x), lo.y.min(v.y)),
                    Vector2D::new(hi.x.max(v.x), hi.y.max(v.y)),
                )
            },
        )
    }

    fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.cross(b)).sum::<f64>() * 0.5
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(VoronoiError::InvalidBoundary(format!(
                "expected at least 3 vertices, got {n}"
            )));
        }
        if let Some(i) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(VoronoiError::InvalidBoundary(format!(
                "vertex {i} has a non-finite coordinate"
            )));
        }
        if let Some((i, _)) = self.edges().enumerate().find(|(_, (a, b))| a == b) {
            return Err(VoronoiError::InvalidBoundary(format!("vertex {i} is repeated")));
        }

        // All turns must go the same way for a convex polygon.
        let mut sign = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let turn = (b - a).cross(c - b);
            if turn == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return Err(VoronoiError::InvalidBoundary(format!(
                    "polygon is not convex at vertex {}",
                    (i + 1) % n
                )));
            }
        }
        if sign == 0.0 || self.signed_area() * sign <= 0.0 {
            return Err(VoronoiError::InvalidBoundary("polygon has no area".to_string()));
        }
        Ok(())
    }
}

impl From<BoundingBox> for BoundingPolygon {
    fn from(b: BoundingBox) -> Self {
        // A flipped box would come out clockwise; the diagram validates before use.
        Self { vertices: b.corners().to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_polygon() {
        let polygon = BoundingPolygon::from(BoundingBox::new([0.0, 0.0], [20.0, 10.0]));
        assert!(polygon.validate().is_ok());
        assert!((polygon.area() - 200.0).abs() < 1e-9);
        assert!(polygon.contains(Vector2D::new(5.0, 5.0), 0.0));
        assert!(polygon.contains(Vector2D::new(20.0, 10.0), 1e-9));
        assert!(!polygon.contains(Vector2D::new(21.0, 5.0), 1e-9));
    }

    #[test]
    fn test_clockwise_is_reoriented() {
        let cw = vec![
            Vector2D::new(0.0, 0.0),
            Vector2D::new(0.0, 1.0),
            Vector2D::new(1.0, 1.0),
            Vector2D::new(1.0, 0.0),
        ];
        let polygon = BoundingPolygon::new(cw).unwrap();
        assert!(polygon.signed_area() > 0.0);
        assert!(polygon.contains(Vector2D::new(0.5, 0.5), 0.0));
    }

    #[test]
    fn test_rejects_invalid() {
        let too_few = vec![Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 0.0)];
        assert!(matches!(BoundingPolygon::new(too_few), Err(VoronoiError::InvalidBoundary(_))));

        let concave = vec![
            Vector2D::new(0.0, 0.0),
            Vector2D::new(4.0, 0.0),
            Vector2D::new(4.0, 4.0),
            Vector2D::new(2.0, 1.0),
            Vector2D::new(0.0, 4.0),
        ];
        assert!(BoundingPolygon::new(concave).is_err());

        let flat = vec![Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 0.0), Vector2D::new(2.0, 0.0)];
        assert!(BoundingPolygon::new(flat).is_err());

        let repeated = vec![
            Vector2D::new(0.0, 0.0),
            Vector2D::new(1.0, 0.0),
            Vector2D::new(1.0, 0.0),
            Vector2D::new(0.0, 1.0),
        ];
        assert!(BoundingPolygon::new(repeated).is_err());
    }

    #[test]
    fn test_regular_polygon() {
        let hexagon = BoundingPolygon::regular([0.0, 0.0], 1.0, 6).unwrap();
        let expected = 1.5 * 3.0_f64.sqrt();
        assert!((hexagon.area() - expected).abs() < 1e-9);
        assert!(BoundingPolygon::regular([0.0, 0.0], 1.0, 2).is_err());
    }

    #[test]
    fn test_random_points_inside() {
        let hexagon = BoundingPolygon::regular([50.0, 50.0], 40.0, 6).unwrap();
        let points = hexagon.random_points(200, 42);
        assert_eq!(points.len(), 200);
        assert!(points.iter().all(|p| hexagon.contains(*p, 0.0)));
        assert_eq!(points, hexagon.random_points(200, 42));
    }
}
