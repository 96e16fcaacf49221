use crate::bounds::{BoundingBox, BoundingPolygon};
use crate::config::DiagramConfig;
use crate::diagram::Diagram;
use crate::polygon::Polygon;
use crate::vector::Vector2D;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS: &'static str = r#"
export const OUTSIDE = -1;
"#;

fn parse_points(flat: &[f64]) -> Vec<Vector2D> {
    flat.chunks_exact(2).map(|c| Vector2D::new(c[0], c[1])).collect()
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

// --- Cell Wrapper ---

#[wasm_bindgen(js_name = Cell2D)]
pub struct CellWasm {
    inner: Polygon,
}

#[wasm_bindgen(js_class = Cell2D)]
impl CellWasm {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> usize { self.inner.id() }
    /// Flat array of vertices [x, y, x, y, ...]
    #[wasm_bindgen(getter)]
    pub fn vertices(&self) -> Vec<f64> { self.inner.flat() }
    pub fn area(&self) -> f64 { self.inner.area() }
    pub fn centroid(&self) -> Option<Vec<f64>> { self.inner.centroid().map(|c| vec![c.x, c.y]) }
}

// --- Diagram ---

/// Voronoi diagram of a set of sites, clipped to a convex polygon.
#[wasm_bindgen(js_name = Voronoi2D)]
pub struct VoronoiWasm {
    bounds: BoundingPolygon,
    diagram: Diagram,
}

#[wasm_bindgen(js_class = Voronoi2D)]
impl VoronoiWasm {
    /// Creates a diagram without sites, bounded by the rectangle `[min_x, max_x] x [min_y, max_y]`.
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<VoronoiWasm, JsError> {
        let bounds = BoundingPolygon::from(BoundingBox::new([min_x, min_y], [max_x, max_y]));
        Self::build(bounds, &[])
    }

    /// Creates a diagram without sites, bounded by the convex polygon `[x, y, x, y, ...]`.
    #[wasm_bindgen(js_name = withPolygon)]
    pub fn with_polygon(polygon: &[f64]) -> Result<VoronoiWasm, JsError> {
        let bounds = BoundingPolygon::new(parse_points(polygon))?;
        Self::build(bounds, &[])
    }

    /// Replaces all sites, given as `[x, y, x, y, ...]`, and recomputes the cells.
    pub fn set_sites(&mut self, sites: &[f64]) -> Result<(), JsError> {
        *self = Self::build(self.bounds.clone(), &parse_points(sites))?;
        Ok(())
    }

    /// Replaces all sites with `count` random points inside the bounds.
    pub fn random_sites(&mut self, count: usize) -> Result<(), JsError> {
        let sites = self.bounds.random_points(count, get_seed());
        *self = Self::build(self.bounds.clone(), &sites)?;
        Ok(())
    }

    pub fn relax(&mut self) -> Result<(), JsError> {
        self.diagram = self.diagram.relax()?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn count_cells(&self) -> usize { self.diagram.count_regions() }

    #[wasm_bindgen(getter)]
    pub fn sites(&self) -> Vec<f64> {
        self.diagram.sites().iter().flat_map(|s| [s.x, s.y]).collect()
    }

    pub fn get_cell(&self, index: usize) -> Result<CellWasm, JsError> {
        Ok(CellWasm { inner: self.diagram.polygon(index)? })
    }

    pub fn cells(&self) -> Result<Vec<CellWasm>, JsError> {
        Ok(self.diagram.polygons()?.into_iter().map(|inner| CellWasm { inner }).collect())
    }
}

impl VoronoiWasm {
    fn build(bounds: BoundingPolygon, sites: &[Vector2D]) -> Result<VoronoiWasm, JsError> {
        let config = DiagramConfig::new().with_bounds(bounds.clone());
        let diagram = Diagram::new(sites, config)?;
        Ok(VoronoiWasm { bounds, diagram })
    }
}
