use std::f64::consts::PI;

use approx::assert_relative_eq;
use radar_rs::core::{
    AngularLayout, PathCommand, RadialScale, ValueDomain, cardinal_closed_path, level_radius,
    straight_closed_path, Point,
};
use radar_rs::error::RadarError;

#[test]
fn four_axes_are_spaced_a_quarter_turn_apart() {
    let angular = AngularLayout::new(4).expect("valid layout");

    assert_relative_eq!(angular.angle_slice(), PI / 2.0);
    assert_relative_eq!(angular.axis_angle(0), -PI / 2.0);
    for axis in 0..3 {
        let gap = angular.axis_angle(axis + 1) - angular.axis_angle(axis);
        assert_relative_eq!(gap, PI / 2.0, epsilon = 1e-12);
    }
}

#[test]
fn first_axis_points_straight_up() {
    let angular = AngularLayout::new(4).expect("valid layout");
    let direction = angular.direction(0);

    assert_relative_eq!(direction.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(direction.y, -1.0, epsilon = 1e-12);
}

#[test]
fn zero_axes_is_degenerate_not_a_division_by_zero() {
    let error = AngularLayout::new(0).expect_err("zero axes must be rejected");
    assert!(matches!(
        error,
        RadarError::DegenerateGeometry { axis_count: 0 }
    ));
}

#[test]
fn vertex_radius_follows_the_scale() {
    let angular = AngularLayout::new(4).expect("valid layout");
    let scale =
        RadialScale::new(ValueDomain { min: 0.0, max: 1.0 }, 100.0).expect("valid scale");

    // Axis 1 of four points along +x.
    let vertex = angular.vertex(1, 0.5, scale);
    assert_relative_eq!(vertex.x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(vertex.y, 0.0, epsilon = 1e-9);
}

#[test]
fn ring_radii_divide_the_outer_radius_evenly() {
    assert_relative_eq!(level_radius(100.0, 5, 1), 20.0);
    assert_relative_eq!(level_radius(100.0, 5, 5), 100.0);
    assert_relative_eq!(level_radius(100.0, 4, 3), 75.0);
}

#[test]
fn straight_path_closes_the_polygon() {
    let vertices = [
        Point::new(0.0, -10.0),
        Point::new(10.0, 5.0),
        Point::new(-10.0, 5.0),
    ];
    let path = straight_closed_path(&vertices);

    assert_eq!(path.len(), 4);
    assert!(matches!(path[0], PathCommand::MoveTo(p) if p == vertices[0]));
    assert!(matches!(path[1], PathCommand::LineTo(p) if p == vertices[1]));
    assert!(matches!(path[2], PathCommand::LineTo(p) if p == vertices[2]));
    assert!(matches!(path[3], PathCommand::Close));
}

#[test]
fn straight_path_of_nothing_is_empty() {
    assert!(straight_closed_path(&[]).is_empty());
}

#[test]
fn cardinal_path_chains_through_every_vertex() {
    let vertices = [
        Point::new(0.0, -10.0),
        Point::new(10.0, 5.0),
        Point::new(-10.0, 5.0),
    ];
    let path = cardinal_closed_path(&vertices, 0.7);

    // MoveTo + one curve per vertex + Close.
    assert_eq!(path.len(), vertices.len() + 2);
    assert!(matches!(path[0], PathCommand::MoveTo(p) if p == vertices[0]));

    let mut expected_to = vertices.iter().cycle().skip(1);
    for command in &path[1..=vertices.len()] {
        let expected = expected_to.next().expect("cycle is infinite");
        assert!(matches!(command, PathCommand::CurveTo { to, .. } if to == expected));
    }
    assert!(matches!(path[path.len() - 1], PathCommand::Close));
}

#[test]
fn full_tension_collapses_controls_onto_the_segment_ends() {
    let vertices = [
        Point::new(0.0, -10.0),
        Point::new(10.0, 5.0),
        Point::new(-10.0, 5.0),
        Point::new(0.0, 12.0),
    ];
    let path = cardinal_closed_path(&vertices, 1.0);

    let mut from = vertices[0];
    for command in &path[1..=vertices.len()] {
        if let PathCommand::CurveTo { c1, c2, to } = command {
            assert_relative_eq!(c1.x, from.x, epsilon = 1e-12);
            assert_relative_eq!(c1.y, from.y, epsilon = 1e-12);
            assert_relative_eq!(c2.x, to.x, epsilon = 1e-12);
            assert_relative_eq!(c2.y, to.y, epsilon = 1e-12);
            from = *to;
        } else {
            panic!("expected a curve command");
        }
    }
}

#[test]
fn two_vertices_degrade_to_the_straight_path() {
    let vertices = [Point::new(0.0, -10.0), Point::new(10.0, 5.0)];
    assert_eq!(
        cardinal_closed_path(&vertices, 0.7),
        straight_closed_path(&vertices)
    );
}
