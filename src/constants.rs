/// AWS configuration directory name under the user's home directory
pub const AWS_CONFIG_DIR_NAME: &str = ".aws";

/// AWS credentials file name
pub const AWS_CREDENTIALS_FILE_NAME: &str = "credentials";

/// AWS CLI cache directory, relative to the AWS configuration directory
pub const AWS_CLI_CACHE_SUBDIR: [&str; 2] = ["cli", "cache"];

/// Profile section written to the credentials file
pub const DEFAULT_PROFILE: &str = "default";

/// Program that performs the interactive SSO login
pub const SSO_LOGIN_PROGRAM: &str = "aws";

/// Arguments passed to [`SSO_LOGIN_PROGRAM`]
pub const SSO_LOGIN_ARGS: [&str; 2] = ["sso", "login"];

/// Key of the credentials object inside a CLI cache entry
pub const CACHE_CREDENTIALS_KEY: &str = "Credentials";

/// Mode applied to the credentials file on Unix
#[cfg(unix)]
pub const CREDENTIALS_FILE_MODE: u32 = 0o600;
