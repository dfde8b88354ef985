//! Text presentation used by the CLI client.
pub mod format;
