use plotters::prelude::*;
use voroplane::{BoundingBox, BoundingPolygon, Diagram, DiagramConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    run_example("2d_voronoi_box.svg", BoundingBox::new([0.0, 0.0], [100.0, 100.0]).into(), 0)?;
    run_example("2d_voronoi_hexagon.svg", BoundingPolygon::regular([50.0, 50.0], 45.0, 6)?, 0)?;
    run_example("2d_voronoi_relaxed.svg", BoundingPolygon::regular([50.0, 50.0], 45.0, 6)?, 5)?;

    Ok(())
}

fn run_example(filename: &str, bounds: BoundingPolygon, relax_steps: usize) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let sites = bounds.random_points(200, 7);
    let mut diagram = Diagram::new(&sites, DiagramConfig::new().with_bounds(bounds.clone()))?;
    for _ in 0..relax_steps {
        diagram = diagram.relax()?;
    }

    // Draw bounds
    let mut outline: Vec<(f64, f64)> = bounds.vertices().iter().map(|&v| v.into()).collect();
    outline.push(outline[0]);
    chart.draw_series(std::iter::once(PathElement::new(outline, BLACK.stroke_width(2))))?;

    // Draw cells
    for cell in diagram.polygons()? {
        if cell.len() < 3 {
            continue;
        }

        let mut poly: Vec<(f64, f64)> = cell.vertices().iter().map(|&v| v.into()).collect();

        chart.draw_series(std::iter::once(Polygon::new(
            poly.clone(),
            BLUE.mix(0.1).filled(),
        )))?;

        poly.push(poly[0]);
        chart.draw_series(std::iter::once(PathElement::new(
            poly,
            BLACK.mix(0.5),
        )))?;
    }

    // Draw sites
    let points: Vec<(f64, f64)> = diagram.sites().iter().map(|&s| s.into()).collect();
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 2, RED.filled())))?;

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}
