use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Logging stays off when it is unset.
pub const LOG_PATH_ENV: &str = "SUSPEND_DIALOGS_LOG";

/// Initialize tracing with file output.
///
/// Dialog callbacks run on the host's UI loop, so nothing is written to the
/// terminal. Set `SUSPEND_DIALOGS_LOG` to a file path to enable logging;
/// the level comes from `RUST_LOG` (default `info`).
///
/// Log files get unique names so several processes can log side by side:
/// `{path}.{timestamp}.{pid}`
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A host application may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_gets_unique_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("dialogs.log");
        std::env::set_var(LOG_PATH_ENV, &base);

        init_tracing();
        tracing::info!("dialog logging online");
        std::env::remove_var(LOG_PATH_ENV);

        let created: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(created.len(), 1);
        assert!(created[0].starts_with("dialogs.log."));
        assert!(created[0].ends_with(&format!(".{}", std::process::id())));
    }
}
