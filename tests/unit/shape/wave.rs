use super::*;
use crate::noise_field::field::SimplexField;

fn layer(position: EdgePosition) -> WaveLayer {
    WaveLayer {
        position,
        wave_height: 0.3,
        num_points: 10,
        movement_radius: 0.1,
        noise_scaling: 2.0,
        noise_offset: 0.6,
    }
}

#[test]
fn created_shape_has_padded_equal_length_sequences() {
    let noise = SimplexField::new(1);
    for position in EdgePosition::ALL {
        let shape = create_static_wave_shape(&layer(position), 0.0, &noise).unwrap();
        assert_eq!(shape.origins().len(), 14);
        assert_eq!(shape.noise_coords().len(), 14);
        assert_eq!(shape.positions().len(), 14);
        assert_eq!(shape.corners(), position.geometry().baseline(0.3).corners);
    }
}

#[test]
fn left_layer_origins_share_x() {
    let noise = SimplexField::new(2);
    let shape = create_static_wave_shape(&layer(EdgePosition::Left), 0.0, &noise).unwrap();
    for (o, nc) in shape.origins().iter().zip(shape.noise_coords()) {
        assert!((o.x - 0.3).abs() < 1e-12);
        assert!((nc.x - 0.3 * 0.6).abs() < 1e-12);
        assert_eq!(nc.y, o.y);
    }
}

#[test]
fn flat_noise_keeps_points_on_the_baseline() {
    let zero = |_: f64, _: f64, _: f64| 0.0;
    let shape = create_static_wave_shape(&layer(EdgePosition::Bottom), 0.0, &zero).unwrap();
    assert_eq!(shape.positions(), shape.origins());
}

#[test]
fn noise_is_sampled_at_scaled_coordinates_and_time() {
    let probe = |x: f64, y: f64, t: f64| {
        assert!((t - 0.25).abs() < 1e-12);
        // Bottom layer: y = 0.7 scaled by offset 0.6 then by noise scaling 2.
        assert!((y - 0.7 * 0.6 * 2.0).abs() < 1e-9);
        (x / 4.0).clamp(-1.0, 1.0)
    };
    let shape = create_static_wave_shape(&layer(EdgePosition::Bottom), 0.25, &probe).unwrap();
    for (o, p) in shape.origins().iter().zip(shape.positions()) {
        let expected = o.y + (o.x * 2.0 / 4.0).clamp(-1.0, 1.0) * 0.1 / 2.0;
        assert!((p.y - expected).abs() < 1e-12);
        assert_eq!(p.x, o.x);
    }
}

#[test]
fn path_is_spline_then_two_corner_lines_then_close() {
    let noise = SimplexField::new(3);
    let shape = create_static_wave_shape(&layer(EdgePosition::Top), 0.0, &noise).unwrap();
    let path = BezPath::from_svg(shape.path()).unwrap();
    let els = path.elements();

    use kurbo::PathEl;
    assert_eq!(els[0], PathEl::MoveTo(shape.positions()[0]));
    let n = els.len();
    assert_eq!(els[n - 1], PathEl::ClosePath);
    assert_eq!(els[n - 2], PathEl::LineTo(shape.corners()[1]));
    assert_eq!(els[n - 3], PathEl::LineTo(shape.corners()[0]));
    let cubics = els.iter().filter(|e| matches!(e, PathEl::CurveTo(..))).count();
    assert_eq!(cubics, (shape.positions().len() - 1) * SPLINE_SUBDIVISIONS);
}

#[test]
fn update_leaves_static_geometry_untouched() {
    let noise = SimplexField::new(4);
    let l = layer(EdgePosition::Right);
    let shape = create_static_wave_shape(&l, 0.0, &noise).unwrap();
    let origins_before = shape.origins().to_vec();
    let coords_before = shape.noise_coords().to_vec();

    let next = update_wave_shape(l.position, &shape, l.movement_radius, l.noise_scaling, 0.5, &noise);

    assert_eq!(shape.origins(), origins_before.as_slice());
    assert_eq!(shape.noise_coords(), coords_before.as_slice());
    assert_eq!(next.origins(), origins_before.as_slice());
    assert_eq!(next.noise_coords(), coords_before.as_slice());
    assert_eq!(next.corners(), shape.corners());
    assert_ne!(next.positions(), shape.positions());
    assert_ne!(next.path(), shape.path());
}

#[test]
fn update_is_deterministic_for_a_given_time() {
    let noise = SimplexField::new(5);
    let l = layer(EdgePosition::Bottom);
    let shape = create_static_wave_shape(&l, 0.0, &noise).unwrap();
    let a = update_wave_shape(l.position, &shape, 0.1, 2.0, 0.123, &noise);
    let b = update_wave_shape(l.position, &shape, 0.1, 2.0, 0.123, &noise);
    assert_eq!(a, b);
}

#[test]
fn zero_points_fail_validation() {
    let noise = SimplexField::new(6);
    let bad = WaveLayer {
        num_points: 0,
        ..layer(EdgePosition::Top)
    };
    assert!(create_static_wave_shape(&bad, 0.0, &noise).is_err());
}
