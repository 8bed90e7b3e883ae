//! Repository implementations
//!
//! PostgreSQL implementation of the repository trait defined in account-core.

mod error;
mod user;

pub use user::PgUserRepository;
