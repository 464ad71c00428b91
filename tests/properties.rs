use coord_geometry::intersect::{Circle, CircleConfig, Segment};
use coord_geometry::math::{DVec2, DVec3};
use coord_geometry::{circle_circle_intersection, line_line_intersection};

const EPS: f64 = 1e-4;

#[test]
fn coincident_centers_never_intersect() {
    for &(x, y) in &[(0.0, 0.0), (4.5, 6.0), (-3.25, 7.0)] {
        for &(r1, r2) in &[(1.0, 1.0), (2.0, 5.0), (5.0, 0.5)] {
            for &tolerance in &[0.0, 1.0, 100.0] {
                let c = DVec3::new(x, y, 0.0);
                assert!(circle_circle_intersection(c, r1, c, r2, tolerance).is_none());
            }
        }
    }
}

#[test]
fn distant_circles_never_intersect() {
    let r1 = 2.0;
    let r2 = 3.0;
    for &tolerance in &[0.0, 0.5, 1.5] {
        for &angle in &[0.0_f64, 0.7, 2.1, 3.9, 5.5] {
            let dist = r1 + r2 + tolerance + 0.01;
            let c1 = DVec3::new(1.0, -2.0, 0.0);
            let c2 = c1 + DVec3::new(angle.cos(), angle.sin(), 0.0) * dist;
            assert!(
                circle_circle_intersection(c1, r1, c2, r2, tolerance).is_none(),
                "tolerance {tolerance}, angle {angle}"
            );
        }
    }
}

#[test]
fn equal_radii_points_mirror_about_axis() {
    let r = 5.0;
    for &d in &[0.5, 3.0, 6.0, 9.5] {
        let a = Circle::from_xy(0.0, 0.0, r).unwrap();
        let b = Circle::from_xy(d, 0.0, r).unwrap();
        let [s1, s2] = a.intersect(&b, &CircleConfig::default()).unwrap();
        assert!((s1.x - s2.x).abs() < EPS);
        assert!((s1.x - d / 2.0).abs() < EPS);
        assert!((s1.y + s2.y).abs() < EPS);
    }
}

#[test]
fn reflection_across_center_line_reflects_points() {
    // centers on the line y = x; reflecting swaps x and y
    let a = Circle::from_xy(1.0, 1.0, 4.0).unwrap();
    let b = Circle::from_xy(4.0, 4.0, 3.0).unwrap();
    let [s1, s2] = a.intersect(&b, &CircleConfig::default()).unwrap();

    let swap = |p: DVec3| DVec3::new(p.y, p.x, p.z);
    let mirrored = [swap(s1), swap(s2)];

    // reflection maps the pair onto itself, in swapped order
    assert!((mirrored[0] - s2).length() < EPS);
    assert!((mirrored[1] - s1).length() < EPS);
}

#[test]
fn points_lie_on_both_circles() {
    let cases = [
        ((4.5, 6.0, 5.0), (5.5, -1.0, 5.0)),
        ((0.0, 0.0, 3.0), (4.0, 1.0, 2.5)),
        ((-2.0, 3.0, 1.5), (-1.0, 2.0, 1.0)),
    ];
    for ((x1, y1, r1), (x2, y2, r2)) in cases {
        let a = Circle::from_xy(x1, y1, r1).unwrap();
        let b = Circle::from_xy(x2, y2, r2).unwrap();
        let points = a.intersect(&b, &CircleConfig::default()).unwrap();
        for p in points {
            assert!(((p - a.center).length() - r1).abs() < EPS);
            assert!(((p - b.center).length() - r2).abs() < EPS);
        }
    }
}

#[test]
fn extrapolation_moves_points_outward() {
    let a = Circle::from_xy(4.5, 6.0, 5.0).unwrap();
    let b = Circle::from_xy(5.5, -1.0, 5.0).unwrap();
    let [g1, g2] = a.intersect(&b, &CircleConfig::default()).unwrap();
    let legacy = CircleConfig::default().with_outward_extrapolation(true);
    let [l1, l2] = a.intersect(&b, &legacy).unwrap();

    let span = g2 - g1;
    assert!((l1 - (g1 - span)).length() < EPS);
    assert!((l2 - (g2 + span)).length() < EPS);
    assert!(((l2 - l1).length() - 3.0 * span.length()).abs() < EPS);
}

#[test]
fn parallel_lines_never_intersect() {
    let base = Segment::from_xy(0.0, 0.0, 3.0, 1.0);
    for &offset in &[0.0, 0.5, -2.0, 10.0] {
        let same = Segment::from_xy(1.0, offset, 4.0, 1.0 + offset);
        let opposite = Segment::from_xy(4.0, 1.0 + offset, 1.0, offset);
        assert!(base.intersect(&same).is_none(), "offset {offset}");
        assert!(base.intersect(&opposite).is_none(), "offset {offset}");
    }
}

#[test]
fn line_intersection_is_symmetric() {
    let p1 = DVec3::new(-1.0, -3.0, 0.0);
    let p2 = DVec3::new(5.0, 9.0, 0.0);
    let q1 = DVec3::new(-4.0, 6.0, 0.0);
    let q2 = DVec3::new(8.0, 0.0, 0.0);

    // y = 2x - 1 meets y = 4 - x/2 at (2, 3)
    let forward = line_line_intersection(p1, p2, q1, q2).unwrap();
    let backward = line_line_intersection(q1, q2, p1, p2).unwrap();
    assert!((forward.x - 2.0).abs() < 1e-9 && (forward.y - 3.0).abs() < 1e-9);
    assert_eq!(forward, backward);
}

#[test]
fn line_tutorial_scenario_rounds_to_two_places() {
    let hit = line_line_intersection(
        DVec3::new(0.5, 2.0, 0.0),
        DVec3::new(10.0, 5.0, 0.0),
        DVec3::new(3.0, 6.0, 0.0),
        DVec3::new(10.0, 4.0, 0.0),
    )
    .unwrap();
    // exact answer is (8.3375, 4.475); y sits just under the half after f64 error
    assert_eq!(hit, DVec2::new(8.34, 4.47));
}
