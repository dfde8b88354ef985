//! Runtime orchestration for the battle simulator.
//!
//! This crate wires together the pure battle engine, the creature catalog, and
//! persisted accounts into a cohesive API. Consumers embed [`Arena`] to run
//! battles and manage accounts through [`AccountService`].
//!
//! Modules are organized by responsibility:
//! - [`arena`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`accounts`] covers credentials, records, and the account service
//! - [`repository`] provides storage adapters for the account book
pub mod accounts;
pub mod api;
pub mod arena;
pub mod repository;

pub use accounts::{Account, AccountBook, AccountError, AccountService, hash_password};
pub use api::{Result, RuntimeError};
pub use arena::{Arena, ArenaBuilder, BattleReport};
pub use repository::{
    AccountRepository, FileAccountRepository, InMemoryAccountRepo, RepositoryError,
};
