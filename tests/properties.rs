use proptest::prelude::*;
use voroplane::{BoundingBox, BoundingPolygon, Diagram, DiagramConfig, Polygon, Vector2D};

const EPS: f64 = 1e-6;

fn bounds() -> BoundingBox {
    BoundingBox::new([0.0, 0.0], [100.0, 100.0])
}

fn cells(sites: &[Vector2D]) -> Vec<Polygon> {
    let config = DiagramConfig::new().with_bounds(bounds());
    Diagram::new(sites, config).unwrap().polygons().unwrap()
}

/// Sites on a 0.1 grid, so duplicates, collinear triples and cocircular quadruples
/// all show up regularly. The grid reaches 20 units past the bounds on every side,
/// so some cells are clipped away from their own site.
fn sites_strategy() -> impl Strategy<Value = Vec<Vector2D>> {
    prop::collection::vec((-200i32..=1200, -200i32..=1200), 1..14).prop_map(|raw| {
        raw.into_iter()
            .map(|(x, y)| Vector2D::new(x as f64 / 10.0, y as f64 / 10.0))
            .collect()
    })
}

fn unique(sites: &[Vector2D]) -> Vec<Vector2D> {
    let mut out: Vec<Vector2D> = Vec::new();
    for s in sites {
        if !out.contains(s) {
            out.push(*s);
        }
    }
    out
}

proptest! {
    #[test]
    fn vertices_are_closest_to_their_site(sites in sites_strategy()) {
        let sites = unique(&sites);
        for cell in cells(&sites) {
            let own = sites[cell.id()];
            for p in cell.vertices() {
                let d_own = p.distance(own);
                for other in &sites {
                    prop_assert!(d_own <= p.distance(*other) + EPS,
                        "vertex {:?} of cell {} is closer to {:?}", p, cell.id(), other);
                }
            }
        }
    }

    #[test]
    fn vertices_stay_in_bounds(sites in sites_strategy()) {
        let polygon = BoundingPolygon::from(bounds());
        for cell in cells(&sites) {
            for p in cell.vertices() {
                prop_assert!(p.is_finite());
                prop_assert!(polygon.contains(*p, EPS), "vertex {:?} outside bounds", p);
            }
        }
    }

    #[test]
    fn cells_are_convex_and_counter_clockwise(sites in sites_strategy()) {
        for cell in cells(&sites) {
            let v = cell.vertices();
            let n = v.len();
            if n < 3 {
                continue;
            }
            for i in 0..n {
                let turn = (v[(i + 1) % n] - v[i]).cross(v[(i + 2) % n] - v[(i + 1) % n]);
                prop_assert!(turn >= -EPS, "cell {} turns right at {:?}: {:?}", cell.id(), v[(i + 1) % n], v);
            }
        }
    }

    #[test]
    fn areas_cover_bounds(sites in sites_strategy()) {
        let total: f64 = cells(&sites).iter().map(|c| c.area()).sum();
        prop_assert!((total - 10_000.0).abs() < 1e-4, "total area {}", total);
    }

    #[test]
    fn duplicates_do_not_change_output(sites in sites_strategy(), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..5)) {
        let mut doubled = sites.clone();
        for pick in picks {
            doubled.push(sites[pick.index(sites.len())]);
        }
        prop_assert_eq!(cells(&sites), cells(&doubled));
    }

    #[test]
    fn swapping_sites_permutes_cells(sites in sites_strategy(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let sites = unique(&sites);
        let (a, b) = (a.index(sites.len()), b.index(sites.len()));
        let mut swapped = sites.clone();
        swapped.swap(a, b);

        let original = cells(&sites);
        let permuted = cells(&swapped);
        for (i, cell) in original.iter().enumerate() {
            let j = if i == a { b } else if i == b { a } else { i };
            let other = &permuted[j];
            prop_assert!((cell.area() - other.area()).abs() < EPS);
            match (cell.centroid(), other.centroid()) {
                (Some(c0), Some(c1)) => prop_assert!(c0.distance(c1) < EPS),
                (None, None) => {}
                _ => prop_assert!(cell.area() < EPS),
            }
        }
    }
}
