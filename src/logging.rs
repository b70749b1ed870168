use std::path::PathBuf;

use tracing::{debug, metadata::LevelFilter, Level};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::error::Error;

/// Initialize tracing.
///
/// Will only initialize once, so tests may call this.
/// Fails if file logging was asked for but the directory is not usable.
pub fn init(
    stdout_level: Level,
    file_logging: Option<(Level, PathBuf)>,
) -> Result<(), Error> {
    let mut message = String::from("Logging with: stderr");

    // `RUST_LOG` takes precedence over the given level.
    let stdout_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from(stdout_level).into())
    });

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(stdout_filter);

    let maybe_file_layer = if let Some((level, output_dir)) = file_logging {
        message += &format!(", file (in dir {output_dir:?})");

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("users.log")
            .build(&output_dir)
            .map_err(|e| Error::Logging(format!("Log directory {output_dir:?}: {e}")))?;

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_filter(LevelFilter::from(level));
        Some(file_layer)
    } else {
        None
    };

    let initialized = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(maybe_file_layer)
        .try_init();

    if initialized.is_err() {
        debug!("Logging already initialized");
    } else {
        debug!(message);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_fine() {
        init(Level::DEBUG, None).unwrap();
        init(Level::TRACE, None).unwrap();
    }

    #[test]
    fn unusable_log_dir_is_an_error() {
        // A directory can not be created below a plain file.
        let file =
            std::env::temp_dir().join(format!("user-registry-{}.txt", std::process::id()));
        std::fs::write(&file, "").unwrap();

        let result = init(Level::DEBUG, Some((Level::DEBUG, file.join("logs"))));
        std::fs::remove_file(&file).unwrap();

        assert!(matches!(result, Err(Error::Logging(_))));
    }
}
