//! Warnings and corrections are reported through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};
use radiant_scales::{create_custom_scale, CustomScaleOptions};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

fn captured(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("radiant_scales=debug"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn validation_issues_are_warned() {
    let log = captured(|| {
        let s = create_custom_scale(&CustomScaleOptions::new("danger", "#e5484d"));
        assert!(s.is_ok());
    });
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("scale validation"), "{log}");
    assert!(log.contains("scale=danger "), "{log}");
    assert!(log.contains("scale=dangerDark"), "{log}");
    assert!(log.contains("step 12 on step 2"), "{log}");
}

#[test]
fn corrections_are_debug_events() {
    let log = captured(|| {
        let s = create_custom_scale(&CustomScaleOptions::new("blue", "#3B82F6"));
        assert!(s.is_ok());
    });
    assert!(log.contains("contrast correction"), "{log}");
    assert!(!log.contains("WARN"), "{log}");
}
