use crate::error::{Result, VoronoiError};
use crate::line::BoundaryLine;
use crate::vector::Vector2D;

/// A Voronoi cell as a convex polygon.
///
/// Vertices are counter-clockwise; the closing edge from the last vertex back to the
/// first is implied.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub(crate) id: usize,
    pub(crate) vertices: Vec<Vector2D>,
}

impl Polygon {
    pub fn new(id: usize, vertices: Vec<Vector2D>) -> Self {
        Self { id, vertices }
    }

    /// Region ID, the index of the site in the deduplicated site list.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flat array of vertices [x, y, x, y, ...]
    pub fn flat(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|v| [v.x, v.y]).collect()
    }

    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.vertices[i].cross(self.vertices[j]);
        }
        (area * 0.5).abs()
    }

    /// Area centroid, `None` for cells with fewer than three vertices or no area.
    pub fn centroid(&self) -> Option<Vector2D> {
        let n = self.vertices.len();
        if n < 3 {
            return None;
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut area = 0.0;

        for i in 0..n {
            let j = (i + 1) % n;
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            let cross = vi.cross(vj);
            area += cross;
            cx += (vi.x + vj.x) * cross;
            cy += (vi.y + vj.y) * cross;
        }

        if area.abs() < 1e-9 {
            return None;
        }

        let factor = 1.0 / (3.0 * area);
        Some(Vector2D::new(cx * factor, cy * factor))
    }

    /// Checks if `point` lies inside or within `eps` of the cell.
    pub fn contains(&self, point: Vector2D, eps: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        (0..n).all(|i| {
            let a = self.vertices[i];
            let edge = self.vertices[(i + 1) % n] - a;
            edge.cross(point - a) >= -eps * edge.length()
        })
    }
}

/// A surviving piece of a cell boundary.
///
/// `from` and `to` are `None` where the edge runs off to infinity, which only happens
/// in diagrams built without a bounding polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Region on the other side; negative for the bounding polygon.
    pub neighbor: i32,
    pub from: Option<Vector2D>,
    pub to: Option<Vector2D>,
}

/// Orders the clipped endpoints of a region's lines into its cell polygon.
///
/// Endpoints are sorted counter-clockwise by polar angle around their mean, which lies
/// inside the convex cell even when the site does not (a site outside the bounding
/// polygon, or on one of its corners). Consecutive vertices closer than `tolerance` are
/// merged; a zero tolerance keeps them all.
pub fn extract_polygon(
    region: usize,
    lines: &[usize],
    arena: &[BoundaryLine],
    tolerance: f64,
) -> Result<Polygon> {
    let mut points = Vec::with_capacity(lines.len() * 2);
    for &index in lines {
        let line = &arena[index];
        match (line.backward_point(), line.forward_point()) {
            (Some(b), Some(f)) => {
                points.push(b);
                points.push(f);
            }
            _ => return Err(VoronoiError::UnboundedRegion { region }),
        }
    }
    if points.is_empty() {
        return Ok(Polygon::new(region, points));
    }

    let pivot = points.iter().fold(Vector2D::ZERO, |acc, p| acc + *p) * (1.0 / points.len() as f64);

    // Stable: coincident corners keep their insertion order.
    points.sort_by(|a, b| {
        (*a - pivot)
            .angle()
            .partial_cmp(&(*b - pivot).angle())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let vertices = if tolerance > 0.0 { merge_close(points, tolerance) } else { points };
    if vertices.len() < 3 {
        tracing::trace!(region, vertices = vertices.len(), "degenerate cell");
    }
    Ok(Polygon::new(region, vertices))
}

/// Drops vertices within `tolerance` of their predecessor, wrapping around at the end.
fn merge_close(points: Vec<Vector2D>, tolerance: f64) -> Vec<Vector2D> {
    let mut merged: Vec<Vector2D> = Vec::with_capacity(points.len());
    for p in points {
        if merged.last().is_none_or(|q| q.distance(p) > tolerance) {
            merged.push(p);
        }
    }
    while merged.len() > 1 && merged[0].distance(merged[merged.len() - 1]) <= tolerance {
        merged.pop();
    }
    merged
}
