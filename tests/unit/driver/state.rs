use super::*;

#[test]
fn start_is_idempotent_while_playing() {
    let mut s = AnimationState::new();
    let mut calls = 0;
    assert!(s.start(|| {
        calls += 1;
        TickHandle(1)
    }));
    assert!(!s.start(|| {
        calls += 1;
        TickHandle(2)
    }));
    assert_eq!(calls, 1);
    assert_eq!(s.phase(), Phase::Playing);
    assert_eq!(s.scheduled_tick(), Some(TickHandle(1)));
}

#[test]
fn pause_twice_is_a_no_op() {
    let mut s = AnimationState::new();
    s.start(|| TickHandle(7));
    assert_eq!(s.pause(), Some(TickHandle(7)));
    assert_eq!(s.pause(), None);
    assert_eq!(s.phase(), Phase::Paused);
    assert!(s.scheduled_tick().is_none());

    assert_eq!(AnimationState::new().pause(), None);
}

#[test]
fn destroyed_state_never_restarts_or_accepts() {
    let mut s = AnimationState::new();
    s.start(|| TickHandle(3));
    assert_eq!(s.destroy(), Some(TickHandle(3)));
    assert_eq!(s.destroy(), None);
    assert!(!s.start(|| TickHandle(4)));
    assert!(!s.accept_tick(TickHandle(3)));
    assert_eq!(s.phase(), Phase::Destroyed);
}

#[test]
fn only_the_scheduled_handle_is_accepted() {
    let mut s = AnimationState::new();
    s.start(|| TickHandle(10));
    assert!(!s.accept_tick(TickHandle(9)));
    assert!(s.accept_tick(TickHandle(10)));
    assert!(!s.accept_tick(TickHandle(10)));
    s.reschedule(TickHandle(11));
    assert_eq!(s.scheduled_tick(), Some(TickHandle(11)));
}

#[test]
fn advance_uses_nominal_first_frame_and_clamps_gaps() {
    let speed = 2.0 / 10_000.0;
    let step = speed * 17.0;
    let mut s = AnimationState::new();

    let t = s.advance(Timestamp(1000.0), speed);
    assert!((t - step).abs() < 1e-15);

    let t = s.advance(Timestamp(1017.0), speed);
    assert!((t - 2.0 * step).abs() < 1e-15);

    let t = s.advance(Timestamp(1025.0), speed);
    assert!((t - (2.0 * step + 8.0 * speed)).abs() < 1e-15);

    let t = s.advance(Timestamp(1525.0), speed);
    assert!((t - (3.0 * step + 8.0 * speed)).abs() < 1e-15);

    // Clock running backwards never rewinds noise time.
    let before = s.noise_timeline();
    s.advance(Timestamp(1500.0), speed);
    assert_eq!(s.noise_timeline(), before);
    assert_eq!(s.last_timestamp(), Some(Timestamp(1500.0)));
}
