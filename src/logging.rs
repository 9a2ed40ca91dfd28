use crate::config::{Config, DebugLogRotation};
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "hnsearch-debug.log";

/// Keeps the background log writer alive; drop it to flush.
#[allow(dead_code)]
pub struct LogGuard(WorkerGuard);

/// Initialize debug logging.
///
/// Logs go to a file (never the terminal, which the TUI owns). Default location is
/// `hnsearch-debug.log` next to the config file. No-op unless `config.debug` is set.
pub fn init(config: &Config) -> Result<Option<LogGuard>> {
    if !config.debug {
        return Ok(None);
    }

    let rotation = config.debug_log_rotation.unwrap_or(DebugLogRotation::Session);
    let base = resolve_base_log_path(config.debug_log_path.as_deref())?;
    let (writer, log_path, guard) = open_writer(&base, rotation, config.debug_log_keep)?;

    let filter =
        EnvFilter::try_new("hnsearch=debug,warn").unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .try_init()
        .ok(); // Already initialized (e.g. in tests)

    tracing::info!("debug logging enabled");
    tracing::info!(log_file = %log_path.display(), rotation = ?rotation, "writing logs to file");

    Ok(Some(LogGuard(guard)))
}

fn open_writer(
    base: &Path,
    rotation: DebugLogRotation,
    keep: Option<usize>,
) -> Result<(NonBlocking, PathBuf, WorkerGuard)> {
    match rotation {
        DebugLogRotation::None => {
            let file = open_append(base)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            Ok((writer, base.to_path_buf(), guard))
        }
        DebugLogRotation::Daily => {
            let (dir, base_name) = split_dir_and_name(base)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let kind = RotationKind::Daily {
                base_name: base_name.clone(),
            };
            cleanup_rotated_logs(&dir, &kind, keep)?;

            let appender = tracing_appender::rolling::daily(&dir, &base_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            Ok((writer, base.to_path_buf(), guard))
        }
        DebugLogRotation::Session => {
            let (dir, base_name) = split_dir_and_name(base)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let kind = RotationKind::Session {
                base_name: base_name.clone(),
            };
            cleanup_rotated_logs(&dir, &kind, keep)?;

            let session_path = build_session_log_path(&dir, &base_name);
            let file = open_append(&session_path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            Ok((writer, session_path, guard))
        }
    }
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

fn resolve_base_log_path(config_value: Option<&str>) -> Result<PathBuf> {
    let Some(raw) = config_value else {
        let config_path = crate::config::config_path()?;
        return Ok(config_path.with_file_name(LOG_FILE_NAME));
    };

    let path = PathBuf::from(expand_tilde(raw));

    // Trailing separator or an existing directory means "put the log in here".
    if raw.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        return Ok(path.join(LOG_FILE_NAME));
    }

    Ok(path)
}

fn expand_tilde(raw: &str) -> String {
    if raw == "~" || raw.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            let suffix = raw.strip_prefix('~').unwrap_or("");
            return format!("{}{}", home.display(), suffix);
        }
    }
    raw.to_string()
}

fn split_dir_and_name(path: &Path) -> Result<(PathBuf, String)> {
    let dir = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .context("Invalid debug_log_path: not valid UTF-8")?
        .to_string();
    Ok((dir, name))
}

fn build_session_log_path(dir: &Path, base_name: &str) -> PathBuf {
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    dir.join(format!("{base_name}.session-{ts}"))
}

enum RotationKind {
    Daily { base_name: String },
    Session { base_name: String },
}

fn cleanup_rotated_logs(dir: &Path, kind: &RotationKind, keep: Option<usize>) -> Result<()> {
    let keep = keep.unwrap_or(match kind {
        RotationKind::Daily { .. } => 7,
        RotationKind::Session { .. } => 20,
    });

    if keep == 0 {
        return Ok(());
    }

    let prefix = match kind {
        // tracing_appender::rolling::daily names files `{base_name}.{YYYY-MM-DD}`
        RotationKind::Daily { base_name } => format!("{base_name}."),
        RotationKind::Session { base_name } => format!("{base_name}.session-"),
    };

    let mut candidates: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read log directory: {}", dir.display()))?
    {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else { continue };
        if name.starts_with(&prefix) {
            candidates.push(name.to_string());
        }
    }

    // Suffixes sort chronologically; newest first
    candidates.sort();
    candidates.reverse();

    for name in candidates.iter().skip(keep) {
        let path = dir.join(name);
        if let Err(e) = std::fs::remove_file(&path) {
            tracing::debug!(error = %e, file = %path.display(), "failed to remove old log file");
        }
    }

    Ok(())
}
