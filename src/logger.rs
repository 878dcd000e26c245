use log::Level;

/// Installs a minimal stderr logger. Meant for the demo binary; library code
/// only uses the `log` macros.
pub fn init_logger() -> anyhow::Result<()> {
    log::set_max_level(log::LevelFilter::Debug);
    log::set_boxed_logger(Box::new(Logger))?;
    Ok(())
}

struct Logger;

impl Logger {
    const fn level(level: Level) -> &'static str {
        match level {
            Level::Error => "error",
            Level::Warn => "warn ",
            Level::Info => "info ",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    fn timestamp() -> String {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        now.format(time::macros::format_description!(
            "[hour]:[minute]:[second]"
        ))
        .unwrap_or_default()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_PKG_NAME"))
            || metadata.level() <= Level::Info
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "{timestamp} {level} [{target}] {args}",
            timestamp = Self::timestamp(),
            level = Self::level(record.level()),
            target = record.target(),
            args = record.args()
        );
    }

    fn flush(&self) {}
}
