use super::*;
use crate::layout::dots::generate_layout;

#[test]
fn suggestion_resolves_to_motif() {
    assert_eq!(
        Connection::resolve(Style::Modern, Preset::Grid8x8, Some("Festival")),
        Connection::Motif(Motif::Festival)
    );
    assert_eq!(
        Connection::resolve(Style::Modern, Preset::Grid8x8, Some("rangoli")),
        Connection::Standard {
            style: Style::Modern,
            preset: Preset::Grid8x8
        }
    );
    assert_eq!(
        Connection::resolve(Style::Traditional, Preset::Grid7x7, None),
        Connection::Standard {
            style: Style::Traditional,
            preset: Preset::Grid7x7
        }
    );
}

#[test]
fn flower_ignores_preset_and_style() {
    let canvas = Canvas::square(400);
    for preset in Preset::ALL {
        for style in [Style::Traditional, Style::Modern] {
            let dots = generate_layout(preset, canvas);
            let paths = synthesize(
                &dots,
                5,
                style,
                preset,
                Some("flower"),
                canvas,
                &mut JitterSource::off(),
            );
            assert_eq!(paths.len(), 8);
            assert!(paths.iter().all(|p| p.kind == "flower"));
        }
    }
}

#[test]
fn style_selects_rule_family() {
    let canvas = Canvas::square(400);
    let dots = generate_layout(Preset::ElevenToOne, canvas);
    let trad = synthesize(
        &dots,
        5,
        Style::Traditional,
        Preset::ElevenToOne,
        None,
        canvas,
        &mut JitterSource::off(),
    );
    assert!(trad.iter().all(|p| p.kind == "nested-min"));
    let modern = synthesize(
        &dots,
        5,
        Style::Modern,
        Preset::ElevenToOne,
        None,
        canvas,
        &mut JitterSource::off(),
    );
    assert!(modern.iter().all(|p| p.kind == "modern"));
}
