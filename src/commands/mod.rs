pub mod completions;
pub mod exports;
pub mod login;

pub use completions::CompletionsCommand;
pub use exports::ExportsCommand;
pub use login::LoginCommand;
