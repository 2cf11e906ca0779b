//! Configuration types and file handling

mod chain;
mod file;

pub use chain::{ChainInfo, TokenEntry};
pub use file::{ConfigFile, ProbeSettings};
