use super::*;

fn outside_unit_square(p: Point) -> bool {
    p.x < 0.0 || p.x > 1.0 || p.y < 0.0 || p.y > 1.0
}

#[test]
fn corners_match_reference_table() {
    let top = get_corners(EdgePosition::Top, 0.25);
    assert_eq!(top.start, Point::new(-0.2, 0.25));
    assert_eq!(top.end, Point::new(1.2, 0.25));
    assert_eq!(top.corners, [Point::new(1.2, -0.2), Point::new(-0.2, -0.2)]);

    let right = get_corners(EdgePosition::Right, 0.25);
    assert_eq!(right.start, Point::new(0.75, -0.2));
    assert_eq!(right.end, Point::new(0.75, 1.2));
    assert_eq!(right.corners, [Point::new(1.2, 1.2), Point::new(1.2, -0.2)]);

    let bottom = get_corners(EdgePosition::Bottom, 0.25);
    assert_eq!(bottom.start, Point::new(-0.2, 0.75));
    assert_eq!(bottom.end, Point::new(1.2, 0.75));
    assert_eq!(bottom.corners, [Point::new(1.2, 1.2), Point::new(-0.2, 1.2)]);

    let left = get_corners(EdgePosition::Left, 0.25);
    assert_eq!(left.start, Point::new(0.25, -0.2));
    assert_eq!(left.end, Point::new(0.25, 1.2));
    assert_eq!(left.corners, [Point::new(-0.2, 1.2), Point::new(-0.2, -0.2)]);
}

#[test]
fn corners_sit_outside_unit_square_for_every_position() {
    for position in EdgePosition::ALL {
        for h in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let b = get_corners(position, h);
            for c in b.corners {
                assert!(outside_unit_square(c), "{position} h={h} corner {c:?}");
                let g = position.geometry();
                assert_eq!(g.across.get(c), g.fill_across);
            }
            assert_eq!(b, get_corners(position, h));
        }
    }
}

#[test]
fn baseline_is_constant_across_edge() {
    for position in EdgePosition::ALL {
        let g = position.geometry();
        let b = g.baseline(0.25);
        assert_eq!(g.across.get(b.start), g.across.get(b.end));
        assert!(g.along.get(b.start) < g.along.get(b.end));
        assert_ne!(g.along, g.across);
    }
}

#[test]
fn position_parses_and_displays() {
    for position in EdgePosition::ALL {
        let parsed: EdgePosition = position.to_string().parse().unwrap();
        assert_eq!(parsed, position);
    }
    assert_eq!(" TOP ".parse::<EdgePosition>().unwrap(), EdgePosition::Top);
    assert!("diagonal".parse::<EdgePosition>().is_err());
    assert_eq!(EdgePosition::default(), EdgePosition::Bottom);
}

#[test]
fn position_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&EdgePosition::Left).unwrap();
    assert_eq!(json, "\"left\"");
    let back: EdgePosition = serde_json::from_str("\"right\"").unwrap();
    assert_eq!(back, EdgePosition::Right);
}
