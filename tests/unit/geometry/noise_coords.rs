use super::*;
use crate::geometry::{edge::get_corners, sampler::generate_points_on_line};

#[test]
fn horizontal_edges_scale_y() {
    let origins = [Point::new(0.1, 0.5), Point::new(0.6, 0.5)];
    for position in [EdgePosition::Top, EdgePosition::Bottom] {
        let coords = get_noise_coords(position, &origins, 0.3);
        assert_eq!(coords.len(), origins.len());
        for (c, o) in coords.iter().zip(&origins) {
            assert_eq!(c.x, o.x);
            assert!((c.y - o.y * 0.3).abs() < 1e-12);
        }
    }
}

#[test]
fn left_edge_scales_x_not_y() {
    let b = get_corners(EdgePosition::Left, 0.3);
    let origins = generate_points_on_line(b.start, b.end, 10, true).unwrap();
    for o in &origins {
        assert!((o.x - 0.3).abs() < 1e-12);
    }

    let coords = get_noise_coords(EdgePosition::Left, &origins, 0.6);
    for (c, o) in coords.iter().zip(&origins) {
        assert!((c.x - 0.3 * 0.6).abs() < 1e-12);
        assert_eq!(c.y, o.y);
    }
}

#[test]
fn zero_offset_collapses_the_constant_axis() {
    let origins = [Point::new(0.7, 0.0), Point::new(0.7, 0.4)];
    let coords = get_noise_coords(EdgePosition::Right, &origins, 0.0);
    assert!(coords.iter().all(|c| c.x == 0.0));
    assert_eq!(coords[1].y, 0.4);
}
