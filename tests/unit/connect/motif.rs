use super::*;

#[test]
fn suggestion_lookup_is_case_insensitive() {
    assert_eq!(Motif::from_suggestion("Flower"), Some(Motif::Flower));
    assert_eq!(Motif::from_suggestion("  STAR "), Some(Motif::Star));
    assert_eq!(Motif::from_suggestion("diwali"), None);
}

#[test]
fn flower_has_eight_closed_petals() {
    let canvas = Canvas::square(400);
    let paths = Motif::Flower.paths(canvas);
    assert_eq!(paths.len(), 8);
    for p in &paths {
        assert_eq!(p.kind, "flower");
        let pts = p.d.points();
        assert_eq!(pts.first(), pts.last());
    }
}

#[test]
fn star_inner_radius_is_forty_percent() {
    let canvas = Canvas::square(400);
    let center = canvas.center();
    let paths = Motif::Star.paths(canvas);
    assert_eq!(paths.len(), 5);
    let pts = paths[0].d.points();
    let outer = (pts[1] - center).hypot();
    let inner = (pts[0] - center).hypot();
    assert!((outer - 140.0).abs() < 1e-9);
    assert!((inner / outer - 0.4).abs() < 1e-9);
    // first point straight up
    assert!((pts[1].x - 200.0).abs() < 1e-9);
    assert!(pts[1].y < 200.0);
}

#[test]
fn festival_is_three_rings_and_eight_spokes() {
    let paths = Motif::Festival.paths(Canvas::square(400));
    assert_eq!(paths.len(), 11);
    let rings = paths.iter().filter(|p| p.d.commands().len() == 5).count();
    let spokes = paths.iter().filter(|p| p.d.commands().len() == 2).count();
    assert_eq!((rings, spokes), (3, 8));
    // the outer ring is close to a true circle
    let circumference = paths[2].d.arclen();
    assert!((circumference - TAU * 140.0).abs() < 1.0);
}

#[test]
fn abstract_is_two_interleaved_lemniscates() {
    let canvas = Canvas::square(400);
    let paths = Motif::Abstract.paths(canvas);
    assert_eq!(paths.len(), 2);
    let a = paths[0].d.points();
    let b = paths[1].d.points();
    assert_eq!(a.len(), LEMNISCATE_SAMPLES + 1);
    // lobes of the first lie on the x axis, the second on the y axis
    assert!((a[0].x - 340.0).abs() < 1e-9 && (a[0].y - 200.0).abs() < 1e-9);
    assert!((b[0].x - 200.0).abs() < 1e-9 && (b[0].y - 340.0).abs() < 1e-9);
}
