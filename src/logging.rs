use log::LevelFilter;
use std::path::Path;
use thiserror::Error;

/// Send log messages to the file at `path`, appending to it.  The terminal
/// belongs to the game, so nothing is logged when `path` is `None`.
///
/// The level defaults to `info` and can be adjusted through `RUST_LOG`.
pub(crate) fn init(path: Option<&Path>) -> Result<(), LoggingError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LoggingError::Open)?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_log_file() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn unopenable_log_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("no-such-dir").join("wrapsnake.log");
        assert!(matches!(init(Some(&path)), Err(LoggingError::Open(_))));
        assert!(!path.exists());
    }
}
