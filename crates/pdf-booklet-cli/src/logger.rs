use chrono::Local;
use log::{Level, Metadata, Record};

/// Writes log records to stderr with a local timestamp
pub struct ConsoleLogger {
    max_level: Level,
}

impl ConsoleLogger {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let filter = self.max_level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {:<5} {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
