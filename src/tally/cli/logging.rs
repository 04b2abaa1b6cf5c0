use log::{Level, LevelFilter};
use std::io::Write;
use std::time::Instant;

/// Installs a stderr logger. Silent unless `verbose`.
pub(super) fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    };
    // Only fails if a logger is already set, which leaves logging as it was.
    if log::set_boxed_logger(Box::new(StderrLogger {
        start: Instant::now(),
    }))
    .is_ok()
    {
        log::set_max_level(level);
    }
}

struct StderrLogger {
    start: Instant,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{:0.3}: {} - {}",
                self.start.elapsed().as_secs_f32(),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
