//! Service layer for the pet clinic.
//! - `codec`: wire JSON for date-bearing entities (pets, visits).
//! - `clinic`: owners, pets, pet types, visits, vets and specialties.
//! - `users`: user accounts and their roles.
//!
//! Each area keeps domain types, a repository trait (SeaORM and in-memory
//! implementations) and a service holding the business rules.

pub mod errors;
pub mod codec;
pub mod clinic;
pub mod users;
#[cfg(test)]
pub mod test_support;
