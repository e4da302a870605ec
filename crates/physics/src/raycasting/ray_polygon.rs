//! Test a ray against polygons and edges, one segment at a time.
use crate::raycasting::*;
use crate::*;

/// Below this, a ray and a segment are treated as parallel and never intersect.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Intersect the ray with the segment from `a` to `b`, returning the t along the ray.
///
/// Solves `origin + t * direction = a + s * (b - a)` for `0 <= s <= 1` and `0 <= t <= length`.
fn ray_segment_t(ray: &Ray, a: V2, b: V2) -> Option<f64> {
    let edge = b - a;
    let denom = ray.direction.cross(&edge);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let to_a = a - ray.origin;
    let t = to_a.cross(&edge) / denom;
    let s = to_a.cross(&ray.direction) / denom;
    if !(0.0..=1.0).contains(&s) || !(0.0..=ray.length).contains(&t) {
        return None;
    }
    Some(t)
}

/// The unit normal of the segment `a`-`b` on the side facing the incoming ray.
fn facing_normal(ray: &Ray, a: V2, b: V2) -> V2 {
    let n = (b - a).perp().normalize();
    if n.dot(&ray.direction) > 0.0 {
        -n
    } else {
        n
    }
}

pub(crate) fn ray_polygon_test(ray: &Ray, polygon: &Polygon) -> Option<RaycastingResult> {
    if polygon.contains_point(&ray.origin) {
        return Some(RaycastingResult {
            point: ray.origin,
            t: 0.0,
            normal: None,
            inside: true,
        });
    }

    // The polygon might not be convex, so every edge is a candidate and the
    // smallest t wins.
    let (t, a, b) = polygon
        .edges()
        .filter_map(|(a, b)| ray_segment_t(ray, a, b).map(|t| (t, a, b)))
        .min_by(|x, y| x.0.total_cmp(&y.0))?;

    Some(RaycastingResult {
        point: ray.evaluate(t),
        t,
        normal: Some(facing_normal(ray, a, b)),
        inside: false,
    })
}

pub(crate) fn ray_edge_test(ray: &Ray, edge: &Edge) -> Option<RaycastingResult> {
    let (a, b) = (edge.get_v1(), edge.get_v2());
    let t = ray_segment_t(ray, a, b)?;
    Some(RaycastingResult {
        point: ray.evaluate(t),
        t,
        normal: Some(facing_normal(ray, a, b)),
        inside: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Is `p` within the bounding box of `polygon`, give or take rounding?
    fn on_box(polygon: &Polygon, p: V2) -> bool {
        let b = polygon.get_bounding_box();
        let (p1, p2) = (b.get_p1(), b.get_p2());
        (p1.x - 1e-6..=p2.x + 1e-6).contains(&p.x) && (p1.y - 1e-6..=p2.y + 1e-6).contains(&p.y)
    }

    fn unit_box() -> Polygon {
        Polygon::new_box(V2::ZERO, 2.0, 2.0).unwrap()
    }

    #[test]
    fn test_box_normals() {
        let b = unit_box();
        // Table is (source, expected normal).
        let cases = vec![
            (V2::new(-5.0, 0.2), V2::new(-1.0, 0.0)),
            (V2::new(5.0, 0.2), V2::new(1.0, 0.0)),
            (V2::new(0.2, -5.0), V2::new(0.0, -1.0)),
            (V2::new(0.2, 5.0), V2::new(0.0, 1.0)),
        ];

        for (source, normal) in cases.into_iter() {
            let ray = Ray::from_points(source, V2::new(0.2, 0.2)).unwrap();
            let res = ray_polygon_test(&ray, &b).unwrap();
            assert!(!res.inside);
            let n = res.normal.unwrap();
            assert_abs_diff_eq!(n.x, normal.x, epsilon = 1e-9);
            assert_abs_diff_eq!(n.y, normal.y, epsilon = 1e-9);
            assert!(on_box(&b, res.point));
        }
    }

    #[test]
    fn test_box_inside_and_miss() {
        let b = unit_box();
        let inside = Ray::from_points(V2::new(0.1, 0.1), V2::new(5.0, 0.0)).unwrap();
        let res = ray_polygon_test(&inside, &b).unwrap();
        assert!(res.inside);
        assert_eq!(res.point, V2::new(0.1, 0.1));

        let miss = Ray::from_points(V2::new(-5.0, 3.0), V2::new(5.0, 3.0)).unwrap();
        assert!(ray_polygon_test(&miss, &b).is_none());

        let short = Ray::from_points(V2::new(-5.0, 0.0), V2::new(-2.0, 0.0)).unwrap();
        assert!(ray_polygon_test(&short, &b).is_none());
    }

    #[test]
    fn test_edge() {
        let e = Edge::new(V2::new(2.0, -1.0), V2::new(2.0, 1.0)).unwrap();
        let ray = Ray::from_points(V2::ZERO, V2::new(4.0, 0.0)).unwrap();
        let res = ray_edge_test(&ray, &e).unwrap();
        assert_relative_eq!(res.t, 2.0);
        assert_eq!(res.normal, Some(V2::new(-1.0, 0.0)));

        // Edges are two-sided.
        let back = Ray::from_points(V2::new(4.0, 0.0), V2::ZERO).unwrap();
        let res = ray_edge_test(&back, &e).unwrap();
        assert_relative_eq!(res.t, 2.0);
        assert_eq!(res.normal, Some(V2::new(1.0, 0.0)));

        let parallel = Ray::from_points(V2::new(1.0, -1.0), V2::new(1.0, 1.0)).unwrap();
        assert!(ray_edge_test(&parallel, &e).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]

        // Rays from outside toward a point inside a box always hit its boundary first.
        #[test]
        fn hit_fuzz(
            cx in -100.0..100.0f64,
            cy in -100.0..100.0f64,
            w in 1.0..20.0f64,
            h in 1.0..20.0f64,
            px in 0.01..0.99f64,
            py in 0.01..0.99f64,
            angle in 0.0..100.0f64,
            dist in 1.0..50.0f64,
        ) {
            let b = Polygon::new_box(V2::new(cx, cy), w, h).unwrap();
            let target = V2::new(cx - w / 2.0 + w * px, cy - h / 2.0 + h * py);
            // Far enough out that the source is always outside.
            let reach = (w + h) + dist;
            let source = V2::new(cx, cy) + V2::new(angle.cos(), angle.sin()) * reach;
            let ray = Ray::from_points(source, target).unwrap();
            let res = ray_polygon_test(&ray, &b);
            prop_assert!(res.is_some());
            let res = res.unwrap();
            prop_assert!(!res.inside);
            prop_assert!(res.t <= ray.length);
            prop_assert!(on_box(&b, res.point));
            prop_assert!(res.normal.unwrap().dot(&ray.direction) <= 0.0);
        }
    }
}
