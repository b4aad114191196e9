//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use std::path::Path;

use tracing::{info, warn};

/// Create the parent directory of a file-backed SQLite database.
///
/// Postgres URLs and in-memory SQLite URLs are left alone.
pub async fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_err() {
        warn!(dir = %parent.display(), "database directory not found; creating it");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    info!(dir = %parent.display(), "database directory ready");
    Ok(())
}

/// File path of a `sqlite:` URL, without the query string.
fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::sqlite_file_path;

    #[test]
    fn sqlite_paths_are_extracted() {
        assert_eq!(sqlite_file_path("sqlite://data/petclinic.db?mode=rwc"), Some("data/petclinic.db"));
        assert_eq!(sqlite_file_path("sqlite:clinic.db"), Some("clinic.db"));
    }

    #[test]
    fn memory_and_postgres_urls_are_ignored() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/petclinic"), None);
    }
}
