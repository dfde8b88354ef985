//! File-based repository implementations.

mod accounts;

pub use accounts::FileAccountRepository;
