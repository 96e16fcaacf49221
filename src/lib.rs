//! # voroplane
//!
//! `voroplane` is a Rust library for planar Voronoi diagrams, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). Cells are computed by pairwise half-plane
//! clipping: every pair of sites contributes its perpendicular bisector, and every bisector
//! is cut back by all other lines bordering the same region.
//!
//! ## Features
//!
//! - **Robust to degenerate input**: duplicate sites are collapsed and collinear sites
//!   (parallel bisectors) never produce NaN vertices.
//! - **Convex bounds**: cells can be clipped against any convex polygon.
//! - **Unbounded diagrams**: without bounds, cell edges are available with open ends;
//!   asking for finite vertices of an unbounded cell is an explicit error.
//! - **WASM-first**: Built with `wasm-bindgen` for integration with JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use voroplane::{BoundingBox, Diagram, DiagramConfig, Vector2D};
//!
//! let sites = [Vector2D::new(0.0, 0.0), Vector2D::new(10.0, 0.0)];
//! let config = DiagramConfig::new().with_bounds(BoundingBox::new([0.0, 0.0], [20.0, 10.0]));
//! let diagram = Diagram::new(&sites, config)?;
//!
//! let cells = diagram.polygons()?;
//! assert!((cells[0].area() - 50.0).abs() < 1e-9);
//! assert!((cells[1].area() - 150.0).abs() < 1e-9);
//! # Ok::<(), voroplane::VoronoiError>(())
//! ```
//!
//! See the `demos/` directory for SVG plotting and JSON export.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Diagram`] struct, configured through [`DiagramConfig`].

mod bounds;
mod config;
mod diagram;
mod error;
mod line;
mod polygon;
mod vector;
mod wasm;

pub use bounds::BoundingBox;
pub use bounds::BoundingPolygon;
pub use bounds::OUTSIDE;
pub use config::DiagramConfig;
pub use config::DEFAULT_MERGE_TOLERANCE;
pub use diagram::Diagram;
pub use error::Result;
pub use error::VoronoiError;
pub use line::BoundaryLine;
pub use line::Interval;
pub use polygon::extract_polygon;
pub use polygon::Edge;
pub use polygon::Polygon;
pub use vector::Vector2D;

/// Cell polygons of `sites`, one per distinct site in order of first occurrence.
///
/// Without `bounds` this fails as soon as one cell is unbounded, which is the case for
/// every diagram with at least two sites; use [`Diagram::edges`] for those.
pub fn voronoi(sites: &[Vector2D], bounds: Option<BoundingPolygon>) -> Result<Vec<Polygon>> {
    let config = DiagramConfig { bounds, ..DiagramConfig::default() };
    Diagram::new(sites, config)?.polygons()
}
