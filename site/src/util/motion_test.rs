use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn parallax_is_zero_at_centre_and_ten_at_edges() {
    assert!(close(parallax_offset(500.0, 1_000.0), 0.0));
    assert!(close(parallax_offset(0.0, 1_000.0), -10.0));
    assert!(close(parallax_offset(1_000.0, 1_000.0), 10.0));
}

#[test]
fn parallax_ignores_degenerate_viewport() {
    assert!(close(parallax_offset(10.0, 0.0), 0.0));
}

#[test]
fn hero_fades_out_by_half_progress() {
    assert_eq!(hero_scroll_transform(0.0), (0.0, 1.0));
    let (y, opacity) = hero_scroll_transform(0.25);
    assert!(close(y, 12.5));
    assert!(close(opacity, 0.5));
    let (_, opacity) = hero_scroll_transform(0.5);
    assert!(close(opacity, 0.0));
}

#[test]
fn hero_transform_clamps_progress() {
    assert_eq!(hero_scroll_transform(-1.0), (0.0, 1.0));
    assert_eq!(hero_scroll_transform(3.0), (50.0, 0.0));
}

#[test]
fn cursor_tracks_and_hides() {
    let mut c = CursorState::default();
    c.moved(100.0, 40.0);
    c.hovering = true;
    assert!(c.visible);
    assert_eq!(c.transform(20.0), "translate3d(90px, 30px, 0)");
    c.left();
    assert!(!c.visible);
    assert!(!c.hovering);
}
