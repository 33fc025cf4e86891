// Log output of the mount; runs in its own binary because the logger is global.

mod common;

use common::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;
use watercolor_core::*;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn warnings() -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[test]
fn missing_surface_warns_once_per_suspension() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let engine = engine_with(ParticleConfig::default(), 3);
    let mut m = Mount::new(engine, FakeScheduler::default());
    let mut surface = RecordingSurface::new(100.0, 100.0);
    m.start();
    for _ in 0..3 {
        m.on_frame(Some(&mut surface));
    }
    assert!(warnings().is_empty());

    assert_eq!(
        m.on_frame::<RecordingSurface>(None),
        FrameOutcome::SurfaceUnavailable
    );
    for _ in 0..5 {
        assert_eq!(m.on_frame::<RecordingSurface>(None), FrameOutcome::Stale);
    }
    let warned = warnings();
    assert_eq!(warned.len(), 1, "{warned:?}");
    assert!(warned[0].contains("surface unavailable"));

    m.resume();
    assert_eq!(
        m.on_frame::<RecordingSurface>(None),
        FrameOutcome::SurfaceUnavailable
    );
    assert_eq!(warnings().len(), 2);
}
