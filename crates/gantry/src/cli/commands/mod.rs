//! CLI commands

mod check;
mod init;
mod resolve;

pub use check::CheckCommand;
pub use init::InitCommand;
pub use resolve::ResolveCommand;
