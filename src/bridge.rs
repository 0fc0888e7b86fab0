//! Login → cache scan → extraction → export pipeline.

use tracing::info;

use crate::{
    aws::{
        Credentials,
        cache::{find_latest_cache_file, load_cached_credentials},
        credentials::{render_credentials_file, write_credentials_file},
    },
    config::Paths,
    error::Error,
    sso::LoginExecutor,
};

/// Log in, then read the credentials from the newest cache entry
pub async fn fetch_credentials<L>(login: &L, paths: &Paths) -> Result<Credentials, Error>
where
    L: LoginExecutor,
{
    login.run().await?;

    let latest = find_latest_cache_file(&paths.cache_dir).await?;
    load_cached_credentials(&latest).await
}

/// Log in and overwrite the credentials file with the cached session
///
/// Nothing is written unless every earlier step succeeded.
pub async fn sync_credentials_file<L>(login: &L, paths: &Paths) -> Result<Credentials, Error>
where
    L: LoginExecutor,
{
    let creds = fetch_credentials(login, paths).await?;

    let contents = render_credentials_file(&creds);
    write_credentials_file(&paths.credentials_file, &contents).await?;

    info!(
        "Wrote credentials file: {}",
        paths.credentials_file.display()
    );
    Ok(creds)
}
