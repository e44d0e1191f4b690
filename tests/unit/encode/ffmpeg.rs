use super::*;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::default(),
    }
}

#[test]
fn transparent_pixel_becomes_background() {
    let mut out = vec![0u8; 4];
    composite_onto_background(&mut out, &[0, 0, 0, 0], [10, 20, 30, 255]);
    assert_eq!(out, vec![10, 20, 30, 255]);
}

#[test]
fn opaque_pixel_passes_through() {
    let mut out = vec![0u8; 4];
    composite_onto_background(&mut out, &[1, 2, 3, 255], [10, 20, 30, 255]);
    assert_eq!(out, vec![1, 2, 3, 255]);
}

#[test]
fn half_covered_pixel_mixes_with_background() {
    let mut out = vec![0u8; 4];
    // premultiplied 50% red over white
    composite_onto_background(&mut out, &[128, 0, 0, 128], [255, 255, 255, 255]);
    assert_eq!(out[0], 255);
    assert_eq!(out[1], 127);
    assert_eq!(out[3], 255);
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
        std::env::temp_dir().join("kolam-odd.webm"),
    ));
    let err = sink.begin(cfg(301, 300)).unwrap_err();
    assert!(matches!(err, KolamError::Validation(_)));
}

#[test]
fn empty_canvas_is_rejected() {
    assert!(check_dimensions(&cfg(0, 300)).is_err());
    assert!(check_dimensions(&cfg(400, 400)).is_ok());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
        std::env::temp_dir().join("kolam-unstarted.webm"),
    ));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn command_encodes_vp9_webm_at_capture_rate() {
    let sink = FfmpegSink::new(FfmpegSinkOpts::new("out/kolam.webm"));
    let cmd = sink.webm_command(SinkConfig {
        width: 400,
        height: 400,
        fps: Fps::new(30, 1).unwrap(),
    });
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let pos = |s: &str| args.iter().position(|a| a == s).unwrap();
    assert_eq!(args[pos("-c:v") + 1], "libvpx-vp9");
    assert_eq!(args[pos("-s") + 1], "400x400");
    assert_eq!(args[pos("-r") + 1], "30/1");
    assert!(pos("-r") < pos("-i"));
    assert_eq!(args.last().map(String::as_str), Some("out/kolam.webm"));
}
