use super::*;

fn gate() -> ClickGate {
    ClickGate::new(250)
}

fn pt() -> Vector2 {
    Vector2::new(100.0, 200.0)
}

#[test]
fn new_gate_has_nothing_pending() {
    let g = gate();
    assert!(g.pending.is_empty());
    assert!((g.window_ms - 250.0).abs() < f64::EPSILON);
}

#[test]
fn single_click_fires_with_its_point() {
    let mut g = gate();
    let ClickQueue::Queued(token) = g.press(pt(), 1_000.0) else {
        panic!("first click should queue");
    };
    assert_eq!(g.pending.len(), 1);
    assert_eq!(g.fire(token), Some(pt()));
    assert!(g.pending.is_empty());
}

#[test]
fn fire_is_one_shot() {
    let mut g = gate();
    let ClickQueue::Queued(token) = g.press(pt(), 0.0) else {
        panic!("first click should queue");
    };
    assert!(g.fire(token).is_some());
    assert_eq!(g.fire(token), None);
}

#[test]
fn second_click_inside_window_suppresses_both() {
    let mut g = gate();
    let ClickQueue::Queued(token) = g.press(pt(), 1_000.0) else {
        panic!("first click should queue");
    };
    assert_eq!(g.press(pt(), 1_120.0), ClickQueue::Suppressed);
    assert!(g.pending.is_empty());
    assert_eq!(g.fire(token), None);
}

#[test]
fn second_click_after_window_queues_normally() {
    let mut g = gate();
    let ClickQueue::Queued(first) = g.press(pt(), 1_000.0) else {
        panic!("first click should queue");
    };
    let second = g.press(Vector2::new(1.0, 1.0), 1_300.0);
    let ClickQueue::Queued(second) = second else {
        panic!("late click should queue");
    };
    assert_ne!(first, second);
    assert_eq!(g.fire(first), Some(pt()));
    assert_eq!(g.fire(second), Some(Vector2::new(1.0, 1.0)));
}

#[test]
fn double_click_cancels_pending() {
    let mut g = gate();
    let ClickQueue::Queued(token) = g.press(pt(), 0.0) else {
        panic!("first click should queue");
    };
    assert!(g.double_click());
    assert_eq!(g.fire(token), None);
}

#[test]
fn double_click_without_pending_is_harmless() {
    let mut g = gate();
    assert!(!g.double_click());
}

#[test]
fn click_after_suppression_starts_fresh() {
    let mut g = gate();
    g.press(pt(), 0.0);
    g.press(pt(), 100.0);
    assert!(matches!(g.press(pt(), 150.0), ClickQueue::Queued(_)));
}

#[test]
fn late_second_click_keeps_overdue_first_click() {
    let mut g = gate();
    let ClickQueue::Queued(first) = g.press(pt(), 0.0) else {
        panic!("first click should queue");
    };
    // Pressed after the window, before the first click's timeout ran.
    let ClickQueue::Queued(second) = g.press(Vector2::new(5.0, 5.0), 400.0) else {
        panic!("late click should queue");
    };
    assert_eq!(g.fire(first), Some(pt()));
    assert_eq!(g.fire(second), Some(Vector2::new(5.0, 5.0)));
    assert!(g.pending.is_empty());
}

#[test]
fn quick_pair_after_overdue_click_only_drops_the_pair() {
    let mut g = gate();
    let ClickQueue::Queued(first) = g.press(pt(), 0.0) else {
        panic!("first click should queue");
    };
    assert!(matches!(g.press(pt(), 400.0), ClickQueue::Queued(_)));
    assert_eq!(g.press(pt(), 450.0), ClickQueue::Suppressed);
    assert_eq!(g.fire(first), Some(pt()));
    assert!(g.pending.is_empty());
}

#[test]
fn double_click_drops_only_the_latest_click() {
    let mut g = gate();
    let ClickQueue::Queued(first) = g.press(pt(), 0.0) else {
        panic!("first click should queue");
    };
    let ClickQueue::Queued(second) = g.press(pt(), 400.0) else {
        panic!("late click should queue");
    };
    assert!(g.double_click());
    assert_eq!(g.fire(second), None);
    assert_eq!(g.fire(first), Some(pt()));
}
