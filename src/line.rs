use crate::bounds::OUTSIDE;
use crate::vector::Vector2D;

/// Distance below which a parallel line counts as lying on a half-plane border.
const PARALLEL_EPS: f64 = 1e-9;
/// Sine of the angle between two headings below which they are treated as parallel.
const PARALLEL_SIN: f64 = 1e-12;

/// Surviving parameter range `[backward, forward]` of a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub backward: f64,
    pub forward: f64,
}

impl Interval {
    /// The whole line.
    pub const FULL: Interval = Interval { backward: f64::NEG_INFINITY, forward: f64::INFINITY };
    /// Nothing survives.
    pub const EMPTY: Interval = Interval { backward: f64::INFINITY, forward: f64::NEG_INFINITY };

    /// Narrows the interval at `projection`.
    ///
    /// `alignment` is the dot product of the line heading with the outward normal of
    /// the clipping half-plane: a non-negative value cuts the forward end, a negative
    /// value the backward end. The result is never wider than `self`.
    pub fn clip(self, projection: f64, alignment: f64) -> Interval {
        if alignment >= 0.0 {
            Interval { forward: self.forward.min(projection), ..self }
        } else {
            Interval { backward: self.backward.max(projection), ..self }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.forward < self.backward
    }

    pub fn is_finite(&self) -> bool {
        self.forward.is_finite() && self.backward.is_finite()
    }
}

/// A line through `point` along `heading`, separating two regions.
///
/// The line starts out infinite and is shortened by half-plane clipping to the segment
/// that still borders both of its regions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryLine {
    pub point: Vector2D,
    /// Unit direction.
    pub heading: Vector2D,
    /// Region on the left of `heading`.
    pub left_region: i32,
    /// Region on the right of `heading`.
    pub right_region: i32,
    pub interval: Interval,
}

impl BoundaryLine {
    /// Perpendicular bisector between site `i` at `pi` and site `j` at `pj`.
    ///
    /// Site `j` lies on the left of the heading, so `region_normal(i)` points towards `pj`.
    pub fn bisector(pi: Vector2D, pj: Vector2D, i: usize, j: usize) -> Self {
        Self {
            point: pi.lerp(pj, 0.5),
            heading: (pj - pi).right_normal().unit(),
            left_region: j as i32,
            right_region: i as i32,
            interval: Interval::FULL,
        }
    }

    /// Edge `from -> to` of a counter-clockwise bounding polygon, seen from `region`.
    pub fn boundary(from: Vector2D, to: Vector2D, region: usize) -> Self {
        Self {
            point: from,
            heading: (to - from).unit(),
            left_region: region as i32,
            right_region: OUTSIDE,
            interval: Interval::FULL,
        }
    }

    /// Outward normal of the half-plane belonging to `region`.
    pub fn region_normal(&self, region: i32) -> Vector2D {
        if region == self.left_region {
            self.heading.right_normal()
        } else {
            self.heading.left_normal()
        }
    }

    /// The region on the other side of the line, as seen from `region`.
    pub fn neighbor(&self, region: i32) -> i32 {
        if region == self.left_region {
            self.right_region
        } else {
            self.left_region
        }
    }

    pub fn borders(&self, region: i32) -> bool {
        self.left_region == region || self.right_region == region
    }

    /// Parameter along this line where it meets `other`, `None` when parallel.
    pub fn intersect(&self, other: &BoundaryLine) -> Option<f64> {
        let n = other.heading.left_normal();
        let denom = self.heading.dot(n);
        if denom.abs() < PARALLEL_SIN {
            return None;
        }
        let t = (other.point - self.point).dot(n) / denom;
        t.is_finite().then_some(t)
    }

    /// Interval left after removing the part of this line outside the half-plane
    /// at `point` with outward `normal`.
    pub fn clipped(&self, point: Vector2D, normal: Vector2D) -> Interval {
        let projection = (point - self.point).dot(self.heading);
        self.interval.clip(projection, self.heading.dot(normal))
    }

    /// Interval left after clipping by the half-plane that `other` bounds for `region`.
    ///
    /// Parallel lines do not intersect: this line is either wholly inside the half-plane
    /// (unchanged) or wholly outside it (empty).
    pub fn clipped_by(&self, other: &BoundaryLine, region: i32) -> Interval {
        let normal = other.region_normal(region);
        match self.intersect(other) {
            Some(t) => self.clipped(self.point + self.heading * t, normal),
            None => {
                let offset = (self.point - other.point).dot(normal);
                if offset > PARALLEL_EPS {
                    tracing::trace!(region, offset, "parallel line outside half-plane");
                    Interval::EMPTY
                } else {
                    self.interval
                }
            }
        }
    }

    pub fn is_fully_clipped(&self) -> bool {
        self.interval.is_empty()
    }

    pub fn forward_point(&self) -> Option<Vector2D> {
        self.interval
            .forward
            .is_finite()
            .then(|| self.point + self.heading * self.interval.forward)
    }

    pub fn backward_point(&self) -> Option<Vector2D> {
        self.interval
            .backward
            .is_finite()
            .then(|| self.point + self.heading * self.interval.backward)
    }
}
