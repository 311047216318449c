mod client;
mod error;
mod prompt;
mod types;

pub use client::{ScriptWriter, ScriptWriterConfig};
pub use error::Error;
pub use prompt::{SYSTEM_PROMPT, user_prompt};
pub use types::Script;
