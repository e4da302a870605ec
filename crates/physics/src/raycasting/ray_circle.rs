//! Test a ray against a circle.
use crate::raycasting::*;
use crate::*;

pub(crate) fn ray_circle_test(ray: &Ray, circle: &Circle) -> Option<RaycastingResult> {
    // A point has no surface to hit, and no normal.
    if circle.get_radius() == 0.0 {
        return None;
    }

    // Project the vector from the start of the ray to the center of the circle
    // onto the ray to get the t at which the ray passes closest to the center,
    // and onto the ray's perpendicular to get how close that is.  If that
    // distance is within the radius, `sqrt(r^2-x^2)` is half the length of the
    // chord, and `t_closest +- half_chord` are the entry and exit points.

    // Translated center of the circle, so that the ray is at the origin.
    let translated_center = *circle.get_center() - ray.origin;
    // Which way the perpendicular points doesn't matter since we take abs.
    let dist_proj = ray.direction.perp().dot(&translated_center).abs();
    if dist_proj > circle.get_radius() {
        return None;
    }

    let t_centered = ray.direction.dot(&translated_center);
    let half_chord = (circle.get_radius().powi(2) - dist_proj.powi(2)).sqrt();
    let t1 = t_centered - half_chord;
    let t2 = t_centered + half_chord;

    // `t2 >= t1`.  If `t2 < 0` the circle is entirely behind the ray, and if
    // `t1 > length` it is entirely past the end.
    if t2 < 0.0 || t1 > ray.length {
        return None;
    }

    // The ray starts inside, and the normal is ambiguous.
    if t1 <= 0.0 {
        return Some(RaycastingResult {
            point: ray.origin,
            t: 0.0,
            normal: None,
            inside: true,
        });
    }

    let point = ray.evaluate(t1);
    let normal = (point - *circle.get_center()).normalize();
    Some(RaycastingResult {
        point,
        t: t1,
        normal: Some(normal),
        inside: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple() {
        let circ = Circle::new(V2::new(2.0, 0.5), 1.0).expect("Should work");
        let ray_hit = Ray::new(V2::new(1.0, 0.0), V2::new(1.0, 0.0), 5.0);
        let ray_miss = Ray::new(V2::new(1.0, 0.0), V2::new(-1.0, 0.0), 5.0);
        let hit_test = ray_circle_test(&ray_hit, &circ);
        let miss_test = ray_circle_test(&ray_miss, &circ);
        assert!(hit_test.is_some(), "{:?}", hit_test);
        assert!(miss_test.is_none(), "{:?}", miss_test);
    }

    #[test]
    fn test_head_on() {
        let circ = Circle::new(V2::new(0.5, 0.0), 0.1).unwrap();
        let ray = Ray::from_points(V2::new(0.0, 0.0), V2::new(1.0, 0.0)).unwrap();
        let hit = ray_circle_test(&ray, &circ).unwrap();
        assert_relative_eq!(hit.t, 0.4, epsilon = 1e-12);
        assert_relative_eq!(hit.point.x, 0.4, epsilon = 1e-12);
        assert_relative_eq!(hit.normal.unwrap().x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_radius_is_never_hit() {
        let circ = Circle::new(V2::new(2.0, 0.0), 0.0).unwrap();
        let through_center = Ray::from_points(V2::ZERO, V2::new(4.0, 0.0)).unwrap();
        assert!(ray_circle_test(&through_center, &circ).is_none());
    }

    #[test]
    fn test_too_short() {
        let circ = Circle::new(V2::new(5.0, 0.0), 1.0).unwrap();
        let ray = Ray::new(V2::ZERO, V2::new(1.0, 0.0), 3.9);
        assert!(ray_circle_test(&ray, &circ).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]

        // Fire rays at a circle from outside it.  They must hit on the
        // circle's boundary with an outward normal, a ray fired the other way
        // must miss, and a ray starting inside must report `inside`.
        #[test]
        fn test_fuzz(
            x in -100.0..100.0f64,
            y in -100.0..100.0f64,
            radius in 1.0..10.0f64,
            // Circle positions are distance and angle from the ray origin,
            // which keeps the origin outside the circle.
            circle_dist in 1.0..10.0f64,
            circle_ang in 0.0..100.0f64,
            chosen_point_rad_percent in 0.0..0.99f64,
            chosen_point_angle in 0.0..100.0f64,
        ) {
            let circle_dist_from_origin = radius + circle_dist + 0.1;
            let center = V2::new(x, y) + V2::new(circle_ang.cos(), circle_ang.sin()) * circle_dist_from_origin;

            let circ = Circle::new(center, radius).expect("Should work");
            let chosen_r = radius * chosen_point_rad_percent;
            let target = center + V2::new(chosen_point_angle.cos(), chosen_point_angle.sin()) * chosen_r;
            let hitting_ray = Ray::from_points(V2::new(x, y), target).unwrap();
            let missing_ray = Ray::new(V2::new(x, y), -hitting_ray.direction, hitting_ray.length);

            let missing_test = ray_circle_test(&missing_ray, &circ);
            prop_assert!(missing_test.is_none(), "{:?} {:?} {:?}", circ, missing_ray, missing_test);
            let hit_test = ray_circle_test(&hitting_ray, &circ);
            prop_assert!(hit_test.is_some(), "{:?} {:?}", circ, hitting_ray);
            let hit_data = hit_test.unwrap();
            prop_assert!(!hit_data.inside);

            let hit_point_dist = hit_data.point.distance(&center);
            prop_assert!((hit_point_dist - radius).abs() < 0.01, "{}", hit_point_dist);
            prop_assert!(hit_data.t <= hitting_ray.length);

            // The normal faces back toward the ray.
            let expected_normal = (hit_data.point - center).normalize();
            let normal = hit_data.normal.unwrap();
            prop_assert!(expected_normal.dot(&normal) > 0.99);
            prop_assert!(normal.dot(&hitting_ray.direction) <= 0.0);

            let inside_ray = Ray::new(target, hitting_ray.direction, 1.0);
            let inside_test = ray_circle_test(&inside_ray, &circ).unwrap();
            prop_assert!(inside_test.inside);
            prop_assert!(inside_test.normal.is_none());
        }
    }
}
