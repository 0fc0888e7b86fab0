pub mod aws;
pub mod bridge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod sso;

pub use aws::Credentials;
pub use config::Paths;
pub use error::Error;
pub use sso::{AwsCliLogin, LoginExecutor};
