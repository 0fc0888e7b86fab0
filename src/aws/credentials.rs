use std::{fmt::Write as _, path::Path};

use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::{debug, info};

use super::Credentials;
#[cfg(unix)]
use crate::constants::CREDENTIALS_FILE_MODE;
use crate::{constants::DEFAULT_PROFILE, error::Error};

/// Render the `[default]` profile section of an AWS credentials file
///
/// Only present fields get a line. The text always ends with a single newline.
pub fn render_credentials_file(creds: &Credentials) -> String {
    let mut text = format!("[{DEFAULT_PROFILE}]\n");

    for (field, value) in creds.present_fields() {
        let _ = writeln!(text, "{}={}", field.file_key(), value);
    }

    text
}

/// Overwrite the credentials file at `path` with `contents`
///
/// On Unix the file mode is set to `0600` before any content is written.
pub async fn write_credentials_file(path: &Path, contents: &str) -> Result<(), Error> {
    let write_error = |source| Error::CredentialsWrite {
        path: path.to_path_buf(),
        source,
    };

    debug!("Writing credentials file: {}", path.display());

    let mut options = OpenOptions::new();
    options.write(true).create(true);
    #[cfg(unix)]
    options.mode(CREDENTIALS_FILE_MODE);

    let mut file = options.open(path).await.map_err(write_error)?;

    // open() leaves the mode of an existing file alone
    #[cfg(unix)]
    {
        use std::{fs::Permissions, os::unix::fs::PermissionsExt};

        file.set_permissions(Permissions::from_mode(CREDENTIALS_FILE_MODE))
            .await
            .map_err(write_error)?;
    }

    file.set_len(0).await.map_err(write_error)?;
    file.write_all(contents.as_bytes())
        .await
        .map_err(write_error)?;
    file.flush().await.map_err(write_error)?;

    info!("Credentials saved to profile: {}", DEFAULT_PROFILE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    fn creds(id: Option<&str>, secret: Option<&str>, token: Option<&str>) -> Credentials {
        Credentials {
            access_key_id: id.map(String::from),
            secret_access_key: secret.map(String::from),
            session_token: token.map(String::from),
        }
    }

    #[test]
    fn test_render_all_fields() {
        let text = render_credentials_file(&creds(Some("AKIA1"), Some("secret"), Some("token")));

        assert_eq!(
            text,
            "[default]\n\
             aws_access_key_id=AKIA1\n\
             aws_secret_access_key=secret\n\
             aws_session_token=token\n"
        );
    }

    #[test]
    fn test_render_without_session_token() {
        let text = render_credentials_file(&creds(Some("AKIA..."), Some("s3cr3t"), None));

        assert_eq!(
            text,
            "[default]\naws_access_key_id=AKIA...\naws_secret_access_key=s3cr3t\n"
        );
    }

    #[test]
    fn test_render_skips_empty_values() {
        let text = render_credentials_file(&creds(Some(""), None, Some("token")));
        assert_eq!(text, "[default]\naws_session_token=token\n");
    }

    #[test]
    fn test_render_no_fields() {
        let text = render_credentials_file(&Credentials::default());
        assert_eq!(text, "[default]\n");
    }

    #[test]
    fn test_rendered_file_parses_as_ini() {
        let text = render_credentials_file(&creds(
            Some("AKIAEXAMPLE"),
            Some("wJalrXUtnFEMI/K7MDENG+bPxRfiCY"),
            Some("IQoJb3JpZ2luX2Vj=="),
        ));

        let ini = Ini::load_from_str(&text).unwrap();
        let section = ini.section(Some("default")).unwrap();

        assert_eq!(section.get("aws_access_key_id"), Some("AKIAEXAMPLE"));
        assert_eq!(
            section.get("aws_secret_access_key"),
            Some("wJalrXUtnFEMI/K7MDENG+bPxRfiCY")
        );
        assert_eq!(section.get("aws_session_token"), Some("IQoJb3JpZ2luX2Vj=="));
    }

    #[tokio::test]
    async fn test_write_credentials_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        std::fs::write(&path, "[old]\nleftover=a much longer previous file body\n").unwrap();

        write_credentials_file(&path, "[default]\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[default]\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_credentials_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");

        write_credentials_file(&path, "[default]\n").await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_credentials_file_restricts_existing_file() {
        use std::{fs::Permissions, os::unix::fs::PermissionsExt};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        std::fs::write(&path, "[default]\naws_access_key_id=OLD\n").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();

        write_credentials_file(&path, "[default]\naws_access_key_id=NEW\n")
            .await
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[default]\naws_access_key_id=NEW\n"
        );
    }

    #[tokio::test]
    async fn test_write_credentials_file_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("credentials");

        let err = write_credentials_file(&path, "[default]\n")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CredentialsWrite { .. }));
        assert!(!path.exists());
    }
}
