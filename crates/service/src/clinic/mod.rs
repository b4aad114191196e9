//! Clinic module: domain types, repositories and the CRUD service that
//! enforces the clinic's business rules.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::{ClinicRepositories, ClinicService, EntityService};
