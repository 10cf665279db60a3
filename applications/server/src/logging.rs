/// Tracing setup: stdout plus a daily rolling log file
use crate::{
    config::LoggingSettings,
    error::{Result, ServerError},
};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "vision_server=info,vision_storage=info,tower_http=info";

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init(settings: &LoggingSettings) -> Result<WorkerGuard> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(settings)?);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init()
        .map_err(|e| ServerError::Config(e.to_string()))?;

    Ok(guard)
}

/// Daily appender writing `<directory>/<prefix>.<YYYY-MM-DD>.txt`
pub fn file_appender(settings: &LoggingSettings) -> Result<RollingFileAppender> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&settings.file_prefix)
        .filename_suffix("txt")
        .build(&settings.directory)?;
    Ok(appender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn log_files(dir: &std::path::Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn init_writes_dated_file_in_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let settings = LoggingSettings {
            directory: temp_dir.path().join("Logs"),
            file_prefix: "log".to_string(),
        };

        let guard = init(&settings).unwrap();
        tracing::info!(target: "vision_server", "Logging initialized");
        drop(guard);

        let files = log_files(&settings.directory);
        assert_eq!(files.len(), 1, "unexpected files {files:?}");

        // log.YYYY-MM-DD.txt
        let name = &files[0];
        assert!(name.starts_with("log."), "{name}");
        assert!(name.ends_with(".txt"), "{name}");
        assert_eq!(name.len(), "log.".len() + 10 + ".txt".len(), "{name}");
    }
}
