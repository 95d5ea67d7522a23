use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Initialise logging. With `debug` the default level is `debug` and can be
/// overridden via the `RUST_LOG` environment variable; otherwise the level is
/// forced to `info`. When `log_file` is set, output goes to that file instead
/// of stderr.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Ignore RUST_LOG unless debug logging was asked for in the settings file.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let appender = log_file.and_then(|path| match file_appender(&path) {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("cannot open log file {}: {e}", path.display());
            None
        }
    });
    let result = match appender {
        Some(appender) => builder.with_writer(appender).with_ansi(false).try_init(),
        None => builder.try_init(),
    };
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}

fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let (dir, name) = split_log_path(path);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)?;
    Ok(appender)
}

fn split_log_path(path: &Path) -> (PathBuf, PathBuf) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("floating_counter.log"));
    (dir, name)
}
