use std::{
    fs::Metadata,
    io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use serde_json::Value;
use tokio::fs;
use tracing::{debug, info};

use super::Credentials;
use crate::{constants::CACHE_CREDENTIALS_KEY, error::Error};

/// Pick the entry with the greatest timestamp.
///
/// Comparison is strict, so among entries sharing the greatest timestamp the one seen first
/// is kept. Returns `None` for an empty input.
pub fn select_newest<T, I>(entries: I) -> Option<T>
where
    I: IntoIterator<Item = (T, SystemTime)>,
{
    let mut newest: Option<(T, SystemTime)> = None;

    for (entry, timestamp) in entries {
        match &newest {
            Some((_, newest_time)) if timestamp <= *newest_time => {}
            _ => newest = Some((entry, timestamp)),
        }
    }

    newest.map(|(entry, _)| entry)
}

/// Timestamp used to rank cache entries: inode change time on Unix
#[cfg(unix)]
fn entry_timestamp(metadata: &Metadata) -> io::Result<SystemTime> {
    use std::{os::unix::fs::MetadataExt, time::Duration};

    let secs = metadata.ctime();
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    let offset = Duration::new(secs.unsigned_abs(), nanos);

    Ok(if secs >= 0 {
        SystemTime::UNIX_EPOCH + offset
    } else {
        SystemTime::UNIX_EPOCH - offset
    })
}

#[cfg(not(unix))]
fn entry_timestamp(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.created().or_else(|_| metadata.modified())
}

fn dir_error(path: &Path) -> impl FnOnce(io::Error) -> Error + use<> {
    let path = path.to_path_buf();
    move |source| Error::CacheDirectory { path, source }
}

/// Find the most recently created entry in the AWS CLI cache directory
pub async fn find_latest_cache_file(cache_dir: &Path) -> Result<PathBuf, Error> {
    debug!("Scanning cache directory: {}", cache_dir.display());

    let mut read_dir = fs::read_dir(cache_dir)
        .await
        .map_err(dir_error(cache_dir))?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await.map_err(dir_error(cache_dir))? {
        let path = entry.path();
        let timestamp = fs::metadata(&path)
            .await
            .and_then(|metadata| entry_timestamp(&metadata))
            .map_err(|source| Error::CacheEntry {
                path: path.clone(),
                source,
            })?;
        entries.push((path, timestamp));
    }

    debug!("Found {} cache entries", entries.len());

    let latest =
        select_newest(entries).ok_or_else(|| Error::NoCachedLogin(cache_dir.to_path_buf()))?;

    info!("Using cached login: {}", latest.display());
    Ok(latest)
}

/// Extract the credentials object from the contents of a cache entry
pub fn parse_cached_credentials(path: &Path, contents: &str) -> Result<Credentials, Error> {
    let malformed = |source| Error::MalformedCache {
        path: path.to_path_buf(),
        source,
    };

    let mut document: Value = serde_json::from_str(contents).map_err(malformed)?;

    let credentials = document
        .get_mut(CACHE_CREDENTIALS_KEY)
        .map(Value::take)
        .ok_or_else(|| Error::MissingCredentials(path.to_path_buf()))?;

    serde_json::from_value(credentials).map_err(malformed)
}

/// Read and parse the cache entry at `path`
pub async fn load_cached_credentials(path: &Path) -> Result<Credentials, Error> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| Error::CacheRead {
            path: path.to_path_buf(),
            source,
        })?;

    parse_cached_credentials(path, &contents)
}
