//! Pixela CLI — one Pixela API call per invocation, raw response on stdout.

pub mod cli;
pub mod config;

pub use cli::{completion_script, execute, Action, Cli, Commands, Outcome};
pub use config::{load_dotenv, resolve_credentials, resolve_endpoint};
