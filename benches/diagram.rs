use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voroplane::{BoundingBox, BoundingPolygon, Diagram, DiagramConfig};

fn benchmark_diagram_new(c: &mut Criterion) {
    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);
    let mut group = c.benchmark_group("diagram_new");

    for count in [10, 50, 100, 200] {
        let sites = BoundingPolygon::from(bounds).random_points(count, 42);
        group.bench_with_input(BenchmarkId::from_parameter(count), &sites, |b, sites| {
            b.iter(|| {
                // black_box prevents the compiler from optimizing away the arguments
                Diagram::new(black_box(sites), DiagramConfig::new().with_bounds(bounds)).unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_polygons(c: &mut Criterion) {
    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);
    let sites = BoundingPolygon::from(bounds).random_points(200, 42);
    let diagram = Diagram::new(&sites, DiagramConfig::new().with_bounds(bounds)).unwrap();

    c.bench_function("polygons_200", |b| {
        b.iter(|| black_box(diagram.polygons().unwrap()))
    });

    c.bench_function("area_200", |b| {
        let cells = diagram.polygons().unwrap();
        b.iter(|| {
            for cell in &cells {
                black_box(cell.area());
            }
        })
    });
}

criterion_group!(benches, benchmark_diagram_new, benchmark_polygons);
criterion_main!(benches);
