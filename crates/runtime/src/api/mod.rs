//! Public runtime API surface.

mod errors;

pub use errors::{AccountError, RepositoryError, Result, RuntimeError};
