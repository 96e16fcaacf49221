use crate::bounds::BoundingPolygon;
use crate::config::DiagramConfig;
use crate::error::{Result, VoronoiError};
use crate::line::BoundaryLine;
use crate::polygon::{Edge, Polygon, extract_polygon};
use crate::vector::Vector2D;
use rayon::prelude::*;

/// A planar Voronoi diagram built by pairwise half-plane clipping.
///
/// Every pair of sites contributes its perpendicular bisector. Each bisector is clipped
/// against every other line bordering the same region, and against the bounding polygon
/// when one is configured. The lines that survive are exactly the cell edges.
///
/// This struct manages:
/// - The deduplicated **sites**, whose indices are the region IDs.
/// - An **arena** of clipped lines, the sole owner of all lines.
/// - A **region index** mapping each region to the arena indices of its lines.
pub struct Diagram {
    sites: Vec<Vector2D>,
    lines: Vec<BoundaryLine>,
    regions: Vec<Vec<usize>>,
    config: DiagramConfig,
    merge_distance: f64,
}

impl Diagram {
    /// Builds the diagram of `sites`.
    ///
    /// Sites with identical coordinates are collapsed to their first occurrence.
    pub fn new(sites: &[Vector2D], mut config: DiagramConfig) -> Result<Self> {
        let _span = tracing::debug_span!("diagram", sites = sites.len()).entered();

        config.validate()?;
        // Re-validating also brings polygons converted from boxes into counter-clockwise order.
        config.bounds = config
            .bounds
            .take()
            .map(|b| BoundingPolygon::new(b.vertices().to_vec()))
            .transpose()?;

        let sites = dedup_sites(sites)?;
        let count = sites.len();
        let merge_distance = config.merge_tolerance * coordinate_scale(&sites, config.bounds.as_ref());

        let mut diagram = Diagram {
            lines: Vec::with_capacity(count * count.saturating_sub(1) / 2),
            regions: vec![Vec::new(); count],
            sites,
            config,
            merge_distance,
        };

        for line in diagram.bisectors() {
            diagram.insert(line);
        }

        if let Some(bounds) = diagram.config.bounds.clone() {
            for region in 0..count {
                for (from, to) in bounds.edges() {
                    diagram.insert(BoundaryLine::boundary(from, to, region));
                }
            }
        }

        let total = diagram.lines.len();
        diagram.prune();
        tracing::debug!(
            regions = count,
            kept = diagram.lines.len(),
            dropped = total - diagram.lines.len(),
            "pruned fully clipped lines"
        );

        Ok(diagram)
    }

    /// Perpendicular bisectors of all site pairs `i < j`, in pair order.
    fn bisectors(&self) -> Vec<BoundaryLine> {
        let count = self.sites.len();
        let sites = &self.sites;
        let pairs: Vec<(usize, usize)> = (0..count)
            .flat_map(|i| (i + 1..count).map(move |j| (i, j)))
            .collect();

        let build = |&(i, j): &(usize, usize)| BoundaryLine::bisector(sites[i], sites[j], i, j);
        if self.config.parallel {
            pairs.par_iter().map(build).collect()
        } else {
            pairs.iter().map(build).collect()
        }
    }

    /// Adds `line` to the arena and to the index of each region it borders, clipping it
    /// against the lines already there and those lines against it.
    fn insert(&mut self, line: BoundaryLine) {
        let index = self.lines.len();
        self.lines.push(line);

        for region in [line.left_region, line.right_region] {
            let Ok(slot) = usize::try_from(region) else {
                continue;
            };
            for &other in &self.regions[slot] {
                let current = self.lines[index];
                let existing = self.lines[other];
                self.lines[index].interval = current.clipped_by(&existing, region);
                self.lines[other].interval = existing.clipped_by(&current, region);
            }
            self.regions[slot].push(index);
        }
    }

    /// Removes fully clipped lines from the arena and from every region.
    fn prune(&mut self) {
        let mut remap = vec![None; self.lines.len()];
        let mut kept = Vec::with_capacity(self.lines.len());
        for (old, line) in self.lines.iter().enumerate() {
            if !line.is_fully_clipped() {
                remap[old] = Some(kept.len());
                kept.push(*line);
            }
        }

        for region in &mut self.regions {
            *region = region.iter().filter_map(|&i| remap[i]).collect();
        }
        self.lines = kept;
    }

    /// Deduplicated sites; a site's index is its region ID.
    pub fn sites(&self) -> &[Vector2D] {
        &self.sites
    }

    pub fn count_regions(&self) -> usize {
        self.sites.len()
    }

    /// Surviving lines. Bisectors are shared by their two regions.
    pub fn lines(&self) -> &[BoundaryLine] {
        &self.lines
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Whether cells were clipped to a bounding polygon. Only bounded diagrams are
    /// guaranteed to yield finite polygons.
    pub fn is_bounded(&self) -> bool {
        self.config.is_bounded()
    }

    /// Arena indices of the lines bordering `region`.
    pub fn region_lines(&self, region: usize) -> Result<&[usize]> {
        self.regions
            .get(region)
            .map(Vec::as_slice)
            .ok_or(VoronoiError::UnknownRegion { region, count: self.regions.len() })
    }

    /// Cell polygon of `region`.
    ///
    /// Fails with [`VoronoiError::UnboundedRegion`] when the cell extends to infinity.
    pub fn polygon(&self, region: usize) -> Result<Polygon> {
        let lines = self.region_lines(region)?;
        extract_polygon(region, lines, &self.lines, self.merge_distance)
    }

    /// Cell polygons of all regions, in site order.
    pub fn polygons(&self) -> Result<Vec<Polygon>> {
        let count = self.count_regions();
        if self.config.parallel {
            (0..count).into_par_iter().map(|r| self.polygon(r)).collect()
        } else {
            (0..count).map(|r| self.polygon(r)).collect()
        }
    }

    /// Boundary pieces of `region`, oriented along each line's heading.
    ///
    /// Unlike [`Diagram::polygon`] this also describes unbounded cells.
    pub fn edges(&self, region: usize) -> Result<Vec<Edge>> {
        let id = region as i32;
        Ok(self
            .region_lines(region)?
            .iter()
            .map(|&i| {
                let line = &self.lines[i];
                Edge {
                    neighbor: line.neighbor(id),
                    from: line.backward_point(),
                    to: line.forward_point(),
                }
            })
            .collect())
    }

    /// Performs one step of Lloyd's relaxation.
    ///
    /// Builds a new diagram with each site moved to the centroid of its cell, which
    /// tends to make the cells more uniform. Sites with degenerate cells stay put.
    pub fn relax(&self) -> Result<Diagram> {
        let sites: Vec<Vector2D> = self
            .polygons()?
            .iter()
            .zip(&self.sites)
            .map(|(cell, site)| cell.centroid().unwrap_or(*site))
            .collect();
        Diagram::new(&sites, self.config.clone())
    }
}

/// Largest absolute coordinate of the input, at least `1.0`.
///
/// Rounding errors grow with coordinate magnitude, so the merge tolerance is scaled by it.
fn coordinate_scale(sites: &[Vector2D], bounds: Option<&BoundingPolygon>) -> f64 {
    let corners = bounds.map(BoundingPolygon::vertices).unwrap_or_default();
    sites
        .iter()
        .chain(corners)
        .fold(1.0_f64, |scale, p| scale.max(p.x.abs()).max(p.y.abs()))
}

/// Rejects non-finite sites and drops exact duplicates, keeping first occurrences.
fn dedup_sites(sites: &[Vector2D]) -> Result<Vec<Vector2D>> {
    let mut unique: Vec<Vector2D> = Vec::with_capacity(sites.len());
    for (index, site) in sites.iter().enumerate() {
        if !site.is_finite() {
            return Err(VoronoiError::NonFiniteSite { index });
        }
        if !unique.contains(site) {
            unique.push(*site);
        }
    }
    if unique.len() < sites.len() {
        tracing::debug!(duplicates = sites.len() - unique.len(), "collapsed duplicate sites");
    }
    Ok(unique)
}
