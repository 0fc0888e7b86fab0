use std::path::{Path, PathBuf};

use crate::{
    constants::{AWS_CLI_CACHE_SUBDIR, AWS_CONFIG_DIR_NAME, AWS_CREDENTIALS_FILE_NAME},
    error::Error,
};

/// Filesystem locations read and written during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Directory holding the AWS CLI session cache
    pub cache_dir: PathBuf,
    /// Credentials file overwritten with the `[default]` profile
    pub credentials_file: PathBuf,
}

impl Paths {
    /// Build the fixed locations below `home`
    pub fn from_home(home: &Path) -> Self {
        let aws_dir = home.join(AWS_CONFIG_DIR_NAME);
        let cache_dir = AWS_CLI_CACHE_SUBDIR
            .iter()
            .fold(aws_dir.clone(), |dir, part| dir.join(part));

        Self {
            cache_dir,
            credentials_file: aws_dir.join(AWS_CREDENTIALS_FILE_NAME),
        }
    }

    /// Locations for the current user
    pub fn discover() -> Result<Self, Error> {
        dirs::home_dir()
            .map(|home| Self::from_home(&home))
            .ok_or(Error::HomeDirectoryNotFound)
    }
}
