use super::*;

#[test]
fn path_and_dot_staggering() {
    let p = Reveal::path(4);
    assert!((p.delay_secs - 0.2).abs() < 1e-12);
    assert_eq!(p.duration_secs, 2.0);
    let d = Reveal::dot(10);
    assert!((d.delay_secs - 0.2).abs() < 1e-12);
    assert_eq!(d.duration_secs, 1.0);
}

#[test]
fn progress_is_zero_before_and_one_after() {
    let p = Reveal::path(2);
    assert_eq!(p.progress(0.0), 0.0);
    assert_eq!(p.progress(0.1), 0.0);
    assert!((p.progress(p.end_secs()) - 1.0).abs() < 1e-12);
    assert!((p.progress(30.0) - 1.0).abs() < 1e-12);
    let half = p.progress(p.delay_secs + 1.0);
    assert!((half - 0.5).abs() < 1e-9);
}

#[test]
fn capture_duration_grows_with_paths() {
    assert_eq!(capture_duration_millis(0), 3000);
    assert_eq!(capture_duration_millis(12), 3600);
    assert_eq!(capture_duration_millis(80), 7000);
}
