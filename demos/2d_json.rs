use serde::Serialize;
use voroplane::{BoundingBox, BoundingPolygon, Diagram, DiagramConfig, Vector2D};

#[derive(Serialize)]
struct CellRecord {
    id: usize,
    site: [f64; 2],
    vertices: Vec<[f64; 2]>,
    neighbors: Vec<i32>,
    area: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let bounds = BoundingBox::new([0.0, 0.0], [20.0, 10.0]);
    let mut sites = vec![Vector2D::new(0.0, 0.0), Vector2D::new(10.0, 0.0)];
    sites.extend(BoundingPolygon::from(bounds).random_points(8, 1));

    let diagram = Diagram::new(&sites, DiagramConfig::new().with_bounds(bounds))?;

    let mut records = Vec::with_capacity(diagram.count_regions());
    for cell in diagram.polygons()? {
        records.push(CellRecord {
            id: cell.id(),
            site: diagram.sites()[cell.id()].into(),
            vertices: cell.vertices().iter().map(|&v| v.into()).collect(),
            neighbors: diagram.edges(cell.id())?.iter().map(|e| e.neighbor).collect(),
            area: cell.area(),
        });
    }

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
