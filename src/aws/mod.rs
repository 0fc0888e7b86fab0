use serde::Deserialize;

pub mod cache;
pub mod credentials;
pub mod exports;

/// Session credentials as cached by the AWS CLI
///
/// Every field is optional; missing, `null` and empty values are all treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

/// A credential field together with its names in each output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    AccessKeyId,
    SecretAccessKey,
    SessionToken,
}

impl CredentialField {
    /// Output order shared by every renderer
    pub const ALL: [CredentialField; 3] = [
        CredentialField::AccessKeyId,
        CredentialField::SecretAccessKey,
        CredentialField::SessionToken,
    ];

    pub fn env_var(self) -> &'static str {
        match self {
            Self::AccessKeyId => "AWS_ACCESS_KEY_ID",
            Self::SecretAccessKey => "AWS_SECRET_ACCESS_KEY",
            Self::SessionToken => "AWS_SESSION_TOKEN",
        }
    }

    pub fn file_key(self) -> &'static str {
        match self {
            Self::AccessKeyId => "aws_access_key_id",
            Self::SecretAccessKey => "aws_secret_access_key",
            Self::SessionToken => "aws_session_token",
        }
    }
}

impl Credentials {
    pub fn get(&self, field: CredentialField) -> Option<&str> {
        let value = match field {
            CredentialField::AccessKeyId => &self.access_key_id,
            CredentialField::SecretAccessKey => &self.secret_access_key,
            CredentialField::SessionToken => &self.session_token,
        };

        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Present fields in output order
    pub fn present_fields(&self) -> impl Iterator<Item = (CredentialField, &str)> {
        CredentialField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }
}
