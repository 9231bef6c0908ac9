//! calgrid_cli - terminal host for the calgrid calendar engine.

pub mod cli;
pub mod error;
pub mod host;
pub mod output;

pub use error::{CliError, Result};
