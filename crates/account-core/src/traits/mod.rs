//! Repository traits (ports)

mod repositories;

pub use repositories::{NewUser, RepoResult, UserListQuery, UserRepository, LIST_PAGE_SIZE};
