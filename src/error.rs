use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to determine home directory")]
    HomeDirectoryNotFound,

    #[error("failed to run `{program}`")]
    LoginSpawn {
        program: String,
        source: io::Error,
    },

    #[error("SSO login failed: {0}")]
    LoginFailed(String),

    #[error("failed to read cache directory {path}")]
    CacheDirectory { path: PathBuf, source: io::Error },

    #[error("failed to read metadata of cache entry {path}")]
    CacheEntry { path: PathBuf, source: io::Error },

    #[error("No cached login detected in {0}")]
    NoCachedLogin(PathBuf),

    #[error("failed to read cache file {path}")]
    CacheRead { path: PathBuf, source: io::Error },

    #[error("cache file {path} is malformed")]
    MalformedCache {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cache file {0} has no Credentials entry")]
    MissingCredentials(PathBuf),

    #[error("failed to write credentials file {path}")]
    CredentialsWrite { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn chain(err: Error) -> String {
        let result: Result<(), Error> = Err(err);
        format!("{:#}", result.context("Failed to refresh AWS credentials").unwrap_err())
    }

    #[test]
    fn test_io_cause_reported_once() {
        let text = chain(Error::CacheRead {
            path: PathBuf::from("/cache/abc.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        });

        assert_eq!(text.matches("access denied").count(), 1);
        assert_eq!(
            text,
            "Failed to refresh AWS credentials: failed to read cache file /cache/abc.json: access denied"
        );
    }

    #[test]
    fn test_json_cause_reported_once() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let cause = source.to_string();

        let text = chain(Error::MalformedCache {
            path: PathBuf::from("/cache/abc.json"),
            source,
        });

        assert_eq!(text.matches(&cause).count(), 1);
    }
}
