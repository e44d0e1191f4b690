use super::*;

#[test]
fn counts_match_closed_form() {
    let canvas = Canvas::square(400);
    let expected = [
        (Preset::ElevenToOne, 12),
        (Preset::ThirteenToSeven, 21),
        (Preset::Grid8x8, 64),
        (Preset::Grid5x5, 25),
        (Preset::RadialLotus, 81),
        (Preset::Grid7x7, 49),
    ];
    for (preset, count) in expected {
        assert_eq!(generate_layout(preset, canvas).len(), count, "{preset}");
    }
}

#[test]
fn dots_stay_inside_canvas() {
    for side in [300, 400, 500] {
        let canvas = Canvas::square(side);
        for preset in Preset::ALL {
            for d in generate_layout(preset, canvas) {
                assert!(d.x >= 0.0 && d.x <= f64::from(side));
                assert!(d.y >= 0.0 && d.y <= f64::from(side));
                assert!(d.radius > 0.0);
            }
        }
    }
}

#[test]
fn eleven_to_one_ends_with_center() {
    let dots = generate_layout(Preset::ElevenToOne, Canvas::square(400));
    let center = dots.last().unwrap();
    assert_eq!((center.x, center.y, center.ring), (200.0, 200.0, 1));
    assert_eq!(dots.iter().filter(|d| d.ring == 0).count(), 11);
    let first = dots[0];
    assert!((first.x - 340.0).abs() < 1e-9);
    assert!((first.y - 200.0).abs() < 1e-9);
}

#[test]
fn lotus_rings_grow_by_eight() {
    let dots = generate_layout(Preset::RadialLotus, Canvas::square(400));
    for k in 0..4u32 {
        let n = dots.iter().filter(|d| d.ring == k).count();
        assert_eq!(n, 8 * (k as usize + 1));
    }
    assert_eq!(dots.iter().filter(|d| d.ring == 4).count(), 1);
}

#[test]
fn grid_ring_is_corner_distance() {
    let dots = generate_layout(Preset::Grid5x5, Canvas::square(400));
    // column-major: index = i * 5 + j
    assert_eq!(dots[0].ring, 0);
    assert_eq!(dots[5 + 1].ring, 1);
    assert_eq!(dots[3 * 5 + 4].ring, 5);
    let spacing = dots[5].x - dots[0].x;
    assert!((spacing - 140.0 * 1.2 / 4.0).abs() < 1e-9);
}

#[test]
fn layout_is_deterministic() {
    let canvas = Canvas::square(500);
    for preset in Preset::ALL {
        assert_eq!(generate_layout(preset, canvas), generate_layout(preset, canvas));
    }
}
