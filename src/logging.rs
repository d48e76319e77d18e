//! Logging setup
//!
//! Installs the global tracing subscriber for native consumers of the
//! library. `RUST_LOG` wins over the configured level when it is set.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Logging initialisation errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install subscriber: {0}")]
    Init(String),
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("club_signup={}", config.level)))
}

/// Plain-text fmt layer writing to an open log file
type FileLayer<S> = tracing_subscriber::fmt::Layer<S, DefaultFields, Format, Mutex<File>>;

fn open_append(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::File {
            path: path.to_path_buf(),
            source,
        })
}

fn file_layer<S>(file: File) -> FileLayer<S> {
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
}

/// Install the global subscriber.
///
/// Fails if another subscriber is already installed or the log file
/// cannot be opened for appending.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));
    let installed = match (&config.file, config.format) {
        (None, LogFormat::Pretty) => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        (None, LogFormat::Json) => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        (Some(path), format) => {
            let layer = file_layer(open_append(path)?);
            match format {
                LogFormat::Pretty => registry.with(layer).try_init(),
                LogFormat::Json => registry.with(layer.json()).try_init(),
            }
        }
    };

    installed.map_err(|e| LoggingError::Init(e.to_string()))
}
