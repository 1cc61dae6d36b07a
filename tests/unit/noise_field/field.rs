use super::*;

#[test]
fn same_seed_is_deterministic() {
    let a = SimplexField::new(42);
    let b = SimplexField::new(42);
    for i in 0..32 {
        let x = f64::from(i) * 0.173;
        assert_eq!(a.sample(x, 0.4, 0.01), b.sample(x, 0.4, 0.01));
    }
    assert_eq!(a.seed(), 42);
}

#[test]
fn values_stay_in_unit_range() {
    let field = SimplexField::new(7);
    for i in 0..40 {
        for j in 0..40 {
            let v = field.sample(f64::from(i) * 0.11, f64::from(j) * 0.13, 0.5);
            assert!((-1.0..=1.0).contains(&v));
        }
    }
}

#[test]
fn small_time_steps_change_values_smoothly() {
    let field = SimplexField::new(3);
    let mut prev = field.sample(0.35, 0.8, 0.0);
    for k in 1..100 {
        let v = field.sample(0.35, 0.8, f64::from(k) * 0.0034);
        assert!((v - prev).abs() < 0.1);
        prev = v;
    }
}

#[test]
fn closures_are_noise_fields() {
    let flat = |_x: f64, _y: f64, t: f64| t.sin();
    assert_eq!(flat.sample(1.0, 2.0, 0.0), 0.0);
}
