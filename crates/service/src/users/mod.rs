//! Users module: accounts, their roles, and the save rules applied before
//! anything reaches the database.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::UserService;
