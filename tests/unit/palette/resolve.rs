use super::*;

fn gradient_ids(p: &ResolvedPalette, n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match p.paint_for_path(i) {
            Paint::Gradient(id) => id,
            Paint::Solid(c) => panic!("unexpected solid {}", c.to_hex()),
        })
        .collect()
}

#[test]
fn traditional_light_shares_four_stop_gradient() {
    let p = resolve_palette(PaletteType::Traditional, Theme::Light, &[]);
    assert_eq!(p.gradients().len(), 1);
    let g = &p.gradients()[0];
    assert_eq!(g.id, "kolamGradient");
    let hex: Vec<String> = g.stops.iter().map(|s| s.color.to_hex()).collect();
    assert_eq!(hex, ["#FFFFFF", "#C41E3A", "#FFD700", "#1E3A8A"]);
    assert_eq!(g.stops[0].offset, 0.0);
    assert_eq!(g.stops[3].offset, 1.0);
    assert_eq!(gradient_ids(&p, 3), ["kolamGradient"; 3]);
    assert_eq!(p.dot_fill().to_hex(), "#800000");
    assert_eq!(p.base().to_hex(), "#FFFFFF");
}

#[test]
fn traditional_dark_is_gold_to_saffron() {
    let p = resolve_palette(PaletteType::Traditional, Theme::Dark, &[]);
    let hex: Vec<String> = p.gradients()[0]
        .stops
        .iter()
        .map(|s| s.color.to_hex())
        .collect();
    assert_eq!(hex, ["#FFD700", "#FF9933"]);
    assert_eq!(p.dot_fill().to_hex(), "#FFD700");
    assert_eq!(p.ink().to_hex(), "#FFD700");
    assert_eq!(p.base().to_hex(), "#1F2937");
}

#[test]
fn modern_cycles_four_gradients() {
    let p = resolve_palette(PaletteType::Modern, Theme::Light, &[]);
    assert_eq!(p.gradients().len(), 4);
    assert!(p.gradients().iter().all(|g| g.stops.len() == 2));
    assert_eq!(
        gradient_ids(&p, 5),
        [
            "kolamGradient0",
            "kolamGradient1",
            "kolamGradient2",
            "kolamGradient3",
            "kolamGradient0"
        ]
    );
}

#[test]
fn custom_keeps_order_and_skips_invalid() {
    let colors = vec!["#123456".to_string(), "nope".to_string(), "#abc".to_string()];
    let p = resolve_palette(PaletteType::Custom, Theme::Light, &colors);
    let hex: Vec<String> = p.gradients()[0]
        .stops
        .iter()
        .map(|s| s.color.to_hex())
        .collect();
    assert_eq!(hex, ["#123456", "#AABBCC"]);
    assert_eq!(p.dot_fill().to_hex(), "#123456");
}

#[test]
fn custom_empty_falls_back_to_traditional_sequence() {
    let p = resolve_palette(PaletteType::Custom, Theme::Dark, &[]);
    assert_eq!(p.gradients()[0].stops.len(), 4);
    assert_eq!(gradient_ids(&p, 1), ["kolamGradient"]);
}

#[test]
fn custom_single_color_is_flat() {
    let p = resolve_palette(PaletteType::Custom, Theme::Light, &["#00ff00".to_string()]);
    assert!(p.gradients().is_empty());
    assert_eq!(p.paint_for_path(7), Paint::Solid(Rgb8::new(0, 255, 0)));
    assert_eq!(p.dot_fill(), Rgb8::new(0, 255, 0));
}

#[test]
fn modern_paint_always_references_a_defined_gradient() {
    let p = resolve_palette(PaletteType::Modern, Theme::Dark, &[]);
    let defined: Vec<&str> = p.gradients().iter().map(|g| g.id.as_str()).collect();
    for id in gradient_ids(&p, 80) {
        assert!(defined.contains(&id.as_str()), "{id} has no definition");
    }
}
