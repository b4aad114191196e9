//! Clinic domain types.
//!
//! Ids are `None` until the record has been persisted. Owners, pet types,
//! specialties and vets use derived camelCase JSON; pets and visits go
//! through [`crate::codec`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Common surface the generic CRUD service needs from a record.
pub trait DomainEntity: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in messages and logs.
    const KIND: &'static str;

    fn id(&self) -> Option<i32>;
    fn set_id(&mut self, id: Option<i32>);

    /// Field rules checked on create and update.
    fn validate(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

macro_rules! identified_by_id {
    () => {
        fn id(&self) -> Option<i32> { self.id }
        fn set_id(&mut self, id: Option<i32>) { self.id = id; }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
}

impl DomainEntity for Owner {
    const KIND: &'static str = "owner";
    identified_by_id!();

    fn validate(&self) -> Result<(), ServiceError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("address", &self.address)?;
        require_text("city", &self.city)?;
        let digits = self.telephone.len();
        if !(1..=10).contains(&digits) || !self.telephone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ServiceError::validation("telephone must be 1 to 10 digits"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetType {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
}

impl DomainEntity for PetType {
    const KIND: &'static str = "pet type";
    identified_by_id!();

    fn validate(&self) -> Result<(), ServiceError> {
        require_text("name", &self.name)
    }
}

/// A pet. `name` stays `None` when the client sent `null` or nothing; the
/// create/update rules reject it, the codec does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub birth_date: NaiveDate,
    pub owner_id: i32,
    pub pet_type: PetType,
}

impl DomainEntity for Pet {
    const KIND: &'static str = "pet";
    identified_by_id!();

    fn validate(&self) -> Result<(), ServiceError> {
        require_text("name", self.name.as_deref().unwrap_or_default())?;
        if self.pet_type.id.is_none() {
            return Err(ServiceError::validation("type.id is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: Option<i32>,
    pub pet_id: i32,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl DomainEntity for Visit {
    const KIND: &'static str = "visit";
    identified_by_id!();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
}

impl DomainEntity for Specialty {
    const KIND: &'static str = "specialty";
    identified_by_id!();

    fn validate(&self) -> Result<(), ServiceError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

impl DomainEntity for Vet {
    const KIND: &'static str = "vet";
    identified_by_id!();

    fn validate(&self) -> Result<(), ServiceError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        if self.specialties.iter().any(|s| s.id.is_none()) {
            return Err(ServiceError::validation("specialties must reference existing ids"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        Owner {
            id: None,
            first_name: "George".into(),
            last_name: "Franklin".into(),
            address: "110 W. Liberty St.".into(),
            city: "Madison".into(),
            telephone: "6085551023".into(),
        }
    }

    #[test]
    fn owner_telephone_rules() {
        assert!(owner().validate().is_ok());
        for bad in ["", "60855510231", "608-555", "abc"] {
            let o = Owner { telephone: bad.into(), ..owner() };
            assert!(matches!(o.validate(), Err(ServiceError::Validation(_))), "{bad}");
        }
    }

    #[test]
    fn owner_requires_names() {
        let o = Owner { last_name: "  ".into(), ..owner() };
        assert!(o.validate().is_err());
    }

    #[test]
    fn pet_name_must_be_present_and_non_empty() {
        let mut pet = Pet {
            id: None,
            name: Some("Rosy".into()),
            birth_date: NaiveDate::from_ymd_opt(2019, 4, 12).unwrap(),
            owner_id: 1,
            pet_type: PetType { id: Some(2), name: "dog".into() },
        };
        assert!(pet.validate().is_ok());
        pet.name = Some(String::new());
        assert!(pet.validate().is_err());
        pet.name = None;
        assert!(pet.validate().is_err());
    }

    #[test]
    fn owner_json_is_camel_case() {
        let json = serde_json::to_value(owner()).unwrap();
        assert_eq!(json["firstName"], "George");
        assert!(json["id"].is_null());
        let back: Owner = serde_json::from_value(json).unwrap();
        assert_eq!(back, owner());
    }
}
