use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_records_frames() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::default(),
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(cfg));
    assert_eq!(sink.frames().len(), 2);
    assert!(sink.is_finished());
}

#[test]
fn in_memory_sink_rejects_out_of_order() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::default(),
    })
    .unwrap();
    sink.push_frame(FrameIndex(3), &frame()).unwrap();
    assert!(sink.push_frame(FrameIndex(3), &frame()).is_err());
}
