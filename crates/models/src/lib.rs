pub mod db;
pub mod owner;
pub mod pet_type;
pub mod pet;
pub mod visit;
pub mod specialty;
pub mod vet;
pub mod vet_specialty;
pub mod user;
pub mod role;

#[cfg(test)]
mod tests;
